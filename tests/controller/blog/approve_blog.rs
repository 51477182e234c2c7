//! Tests for the approve_blog endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::{BlogStatus, Category, Role};
use parish::{
    controller::blog::approve_blog,
    data::blog::{BlogRepository, BlogTypeRepository, NewBlog},
    model::blog::ApproveBlogRequest,
};
use parish_test_utils::prelude::*;

use super::*;

async fn insert_pending_blog(
    db: &sea_orm::DatabaseConnection,
    author_uid: &str,
) -> Result<entity::blog::Model, sea_orm::DbErr> {
    let blog_type = BlogTypeRepository::new(db).create("Devotional").await?;

    BlogRepository::new(db)
        .create(NewBlog {
            heading: "Awaiting Review".to_string(),
            sub_heading: "Draft".to_string(),
            content: "Body".to_string(),
            photo_url: None,
            external_link: None,
            blog_type_id: blog_type.id,
            category: Category::Public,
            status: BlogStatus::Pending,
            author_uid: author_uid.to_string(),
        })
        .await
}

/// Expect 200 and the post switched to active
#[tokio::test]
async fn admin_approves_pending_post() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::BlogType,
        entity::prelude::Blog,
        entity::prelude::ActivityLog
    )?;
    fixtures::insert_user(&test.db, "admin", Role::Admin).await?;
    fixtures::insert_user(&test.db, "member", Role::Member).await?;
    let blog = insert_pending_blog(&test.db, "member").await?;

    let result = approve_blog(
        State(app_state(&test)),
        Path(blog.id),
        Json(ApproveBlogRequest {
            requester_uid: "admin".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = BlogRepository::new(&test.db).find_by_id(blog.id).await?;
    assert_eq!(stored.unwrap().status, BlogStatus::Active);

    Ok(())
}

/// Expect a repeat approval to succeed with 200
#[tokio::test]
async fn approval_is_idempotent() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::BlogType,
        entity::prelude::Blog,
        entity::prelude::ActivityLog
    )?;
    fixtures::insert_user(&test.db, "admin", Role::Admin).await?;
    fixtures::insert_user(&test.db, "member", Role::Member).await?;
    let blog = insert_pending_blog(&test.db, "member").await?;

    for _ in 0..2 {
        let result = approve_blog(
            State(app_state(&test)),
            Path(blog.id),
            Json(ApproveBlogRequest {
                requester_uid: "admin".to_string(),
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    Ok(())
}

/// Expect 403 for a member requester
#[tokio::test]
async fn member_cannot_approve() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::BlogType,
        entity::prelude::Blog,
        entity::prelude::ActivityLog
    )?;
    fixtures::insert_user(&test.db, "member", Role::Member).await?;
    let blog = insert_pending_blog(&test.db, "member").await?;

    let result = approve_blog(
        State(app_state(&test)),
        Path(blog.id),
        Json(ApproveBlogRequest {
            requester_uid: "member".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 for an unknown post id
#[tokio::test]
async fn unknown_post_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::BlogType,
        entity::prelude::Blog,
        entity::prelude::ActivityLog
    )?;
    fixtures::insert_user(&test.db, "admin", Role::Admin).await?;

    let result = approve_blog(
        State(app_state(&test)),
        Path(999),
        Json(ApproveBlogRequest {
            requester_uid: "admin".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
