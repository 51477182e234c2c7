//! Tests for the update_role endpoint.
//!
//! Role assignment is resolved through the central policy: admins may
//! assign anything, editors may only manage roles below editor, and
//! every successful change lands in the activity log.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::Role;
use parish::{
    controller::user::update_role,
    data::user::UserRepository,
    model::user::UpdateRoleRequest,
};
use parish_test_utils::prelude::*;

use super::*;

/// Expect 200, the stored role updated and one activity entry
#[tokio::test]
async fn admin_assigns_editor() -> Result<(), TestError> {
    let test =
        test_setup_with_tables!(entity::prelude::User, entity::prelude::ActivityLog)?;
    fixtures::insert_user(&test.db, "admin", Role::Admin).await?;
    fixtures::insert_user(&test.db, "target", Role::Member).await?;

    let result = update_role(
        State(app_state(&test)),
        Json(UpdateRoleRequest {
            requester_uid: "admin".to_string(),
            target_email: "target@example.org".to_string(),
            new_role: Role::Editor,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let target = UserRepository::new(&test.db).find_by_uid("target").await?;
    assert_eq!(target.unwrap().role, Role::Editor);
    assert_eq!(fixtures::count_activity(&test.db).await?, 1);

    Ok(())
}

/// Expect 403 when an editor touches an admin account
#[tokio::test]
async fn editor_cannot_touch_admin() -> Result<(), TestError> {
    let test =
        test_setup_with_tables!(entity::prelude::User, entity::prelude::ActivityLog)?;
    fixtures::insert_user(&test.db, "editor", Role::Editor).await?;
    fixtures::insert_user(&test.db, "admin", Role::Admin).await?;

    let result = update_role(
        State(app_state(&test)),
        Json(UpdateRoleRequest {
            requester_uid: "editor".to_string(),
            target_email: "admin@example.org".to_string(),
            new_role: Role::Member,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let admin = UserRepository::new(&test.db).find_by_uid("admin").await?;
    assert_eq!(admin.unwrap().role, Role::Admin);

    Ok(())
}

/// Expect 403 when an editor grants the editor role
#[tokio::test]
async fn editor_cannot_grant_editor() -> Result<(), TestError> {
    let test =
        test_setup_with_tables!(entity::prelude::User, entity::prelude::ActivityLog)?;
    fixtures::insert_user(&test.db, "editor", Role::Editor).await?;
    fixtures::insert_user(&test.db, "target", Role::Member).await?;

    let result = update_role(
        State(app_state(&test)),
        Json(UpdateRoleRequest {
            requester_uid: "editor".to_string(),
            target_email: "target@example.org".to_string(),
            new_role: Role::Editor,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 for an unknown target email
#[tokio::test]
async fn unknown_target_not_found() -> Result<(), TestError> {
    let test =
        test_setup_with_tables!(entity::prelude::User, entity::prelude::ActivityLog)?;
    fixtures::insert_user(&test.db, "admin", Role::Admin).await?;

    let result = update_role(
        State(app_state(&test)),
        Json(UpdateRoleRequest {
            requester_uid: "admin".to_string(),
            target_email: "nobody@example.org".to_string(),
            new_role: Role::Member,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
