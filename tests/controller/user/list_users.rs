//! Tests for the list_users endpoint.
//!
//! Verifies that the console listing is gated on the requester's role
//! and that the requester must resolve to a stored account.

use axum::{extract::Query, extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::Role;
use parish::{controller::user::list_users, model::user::UserListQuery};
use parish_test_utils::prelude::*;

use super::*;

/// Expect 200 for an admin requester
#[tokio::test]
async fn admin_lists_accounts() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    fixtures::insert_user(&test.db, "admin", Role::Admin).await?;
    fixtures::insert_user(&test.db, "member", Role::Member).await?;

    let result = list_users(
        State(app_state(&test)),
        Query(UserListQuery {
            requester: Some("admin".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 when no requester is given
#[tokio::test]
async fn missing_requester_is_unauthorized() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let result = list_users(
        State(app_state(&test)),
        Query(UserListQuery { requester: None }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 403 for a requester without console access
#[tokio::test]
async fn public_requester_is_forbidden() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    fixtures::insert_user(&test.db, "visitor", Role::Public).await?;

    let result = list_users(
        State(app_state(&test)),
        Query(UserListQuery {
            requester: Some("visitor".to_string()),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
