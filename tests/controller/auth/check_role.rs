//! Tests for the check_role endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::Role;
use parish::{controller::auth::check_role, model::user::CheckRoleRequest};
use parish_test_utils::prelude::*;

use super::*;

/// Expect 200 for a known identity
#[tokio::test]
async fn returns_stored_account() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    fixtures::insert_user(&test.db, "member", Role::Member).await?;

    let result = check_role(
        State(app_state(&test)),
        Json(CheckRoleRequest {
            uid: "member".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 for an unknown identity
#[tokio::test]
async fn unknown_identity_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let result = check_role(
        State(app_state(&test)),
        Json(CheckRoleRequest {
            uid: "ghost".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 when the uid is empty
#[tokio::test]
async fn rejects_empty_uid() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let result = check_role(
        State(app_state(&test)),
        Json(CheckRoleRequest { uid: String::new() }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
