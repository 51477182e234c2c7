//! Tests for the sync endpoint.
//!
//! Verifies that an external identity is mirrored into the user table
//! exactly once, that repeat sign-ins return the stored account, and
//! that probe-only requests never create rows.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::Role;
use parish::{controller::auth::sync, data::user::UserRepository, model::user::SyncRequest};
use parish_test_utils::prelude::*;

use super::*;

fn sync_request(uid: &str) -> SyncRequest {
    SyncRequest {
        uid: uid.to_string(),
        email: format!("{uid}@example.org"),
        display_name: Some(format!("Test {uid}")),
        photo_url: None,
        church_name: None,
        language: None,
        contact_number: None,
        check_only: false,
    }
}

/// Expect 201 and a stored account with the public role
#[tokio::test]
async fn registers_new_identity() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let result = sync(State(app_state(&test)), Json(sync_request("new-user"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stored = UserRepository::new(&test.db).find_by_uid("new-user").await?;
    let stored = stored.expect("account should be created");
    assert_eq!(stored.role, Role::Public);
    assert_eq!(stored.email, "new-user@example.org");

    Ok(())
}

/// Expect 200 for a returning identity without a second row
#[tokio::test]
async fn returns_existing_account() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    fixtures::insert_user(&test.db, "returning", Role::Member).await?;

    let result = sync(State(app_state(&test)), Json(sync_request("returning"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when the uid is missing
#[tokio::test]
async fn rejects_missing_uid() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let mut request = sync_request("");
    request.uid = String::new();

    let result = sync(State(app_state(&test)), Json(request)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 and no created row when check_only is set
#[tokio::test]
async fn check_only_never_creates() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let mut request = sync_request("probe");
    request.check_only = true;

    let result = sync(State(app_state(&test)), Json(request)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let stored = UserRepository::new(&test.db).find_by_uid("probe").await?;
    assert!(stored.is_none());

    Ok(())
}
