//! Tests for the delete_blog endpoint.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{BlogStatus, Category, Role};
use parish::{
    controller::blog::delete_blog,
    data::blog::{BlogRepository, BlogTypeRepository, NewBlog},
    model::video::ActorQuery,
};
use parish_test_utils::prelude::*;

use super::*;

async fn insert_blog(
    db: &sea_orm::DatabaseConnection,
    author_uid: &str,
) -> Result<entity::blog::Model, sea_orm::DbErr> {
    let blog_type = BlogTypeRepository::new(db).create("Devotional").await?;

    BlogRepository::new(db)
        .create(NewBlog {
            heading: "To Be Removed".to_string(),
            sub_heading: "Draft".to_string(),
            content: "Body".to_string(),
            photo_url: None,
            external_link: None,
            blog_type_id: blog_type.id,
            category: Category::Public,
            status: BlogStatus::Active,
            author_uid: author_uid.to_string(),
        })
        .await
}

/// Expect 200, the row gone and a single activity entry
#[tokio::test]
async fn deletes_and_logs_once() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::BlogType,
        entity::prelude::Blog,
        entity::prelude::ActivityLog
    )?;
    fixtures::insert_user(&test.db, "admin", Role::Admin).await?;
    let blog = insert_blog(&test.db, "admin").await?;

    let result = delete_blog(
        State(app_state(&test)),
        Path(blog.id),
        Query(ActorQuery {
            user_id: Some("admin".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = BlogRepository::new(&test.db).find_by_id(blog.id).await?;
    assert!(stored.is_none());
    assert_eq!(fixtures::count_activity(&test.db).await?, 1);

    Ok(())
}

/// Expect 404 on a second delete without another log entry
#[tokio::test]
async fn second_delete_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::BlogType,
        entity::prelude::Blog,
        entity::prelude::ActivityLog
    )?;
    fixtures::insert_user(&test.db, "admin", Role::Admin).await?;
    let blog = insert_blog(&test.db, "admin").await?;

    let query = || {
        Query(ActorQuery {
            user_id: Some("admin".to_string()),
        })
    };

    let first = delete_blog(State(app_state(&test)), Path(blog.id), query()).await;
    assert!(first.is_ok());

    let second = delete_blog(State(app_state(&test)), Path(blog.id), query()).await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(fixtures::count_activity(&test.db).await?, 1);

    Ok(())
}
