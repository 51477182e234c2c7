//! Tests for the create_blog endpoint.
//!
//! Verifies that posts from editors and admins go live immediately
//! while everyone else's land in the approval queue.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::{BlogStatus, Category, Role};
use parish::{
    controller::blog::create_blog,
    data::blog::BlogTypeRepository,
    model::blog::CreateBlogRequest,
};
use parish_test_utils::prelude::*;
use sea_orm::EntityTrait;

use super::*;

fn blog_request(author_uid: &str, blog_type_id: i32) -> CreateBlogRequest {
    CreateBlogRequest {
        heading: "Sunday Reflections".to_string(),
        sub_heading: "On Psalm 23".to_string(),
        content: "The Lord is my shepherd.".to_string(),
        photo_url: None,
        external_link: None,
        blog_type_id,
        category: Category::Public,
        author_uid: author_uid.to_string(),
    }
}

/// Expect 201 and a pending row for a member author
#[tokio::test]
async fn member_posts_are_queued() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::BlogType,
        entity::prelude::Blog,
        entity::prelude::ActivityLog
    )?;
    fixtures::insert_user(&test.db, "member", Role::Member).await?;
    let blog_type = BlogTypeRepository::new(&test.db).create("Devotional").await?;

    let result = create_blog(
        State(app_state(&test)),
        Json(blog_request("member", blog_type.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stored = entity::prelude::Blog::find().one(&test.db).await?;
    assert_eq!(stored.unwrap().status, BlogStatus::Pending);

    Ok(())
}

/// Expect an editor's post to be live immediately
#[tokio::test]
async fn editor_posts_go_live() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::BlogType,
        entity::prelude::Blog,
        entity::prelude::ActivityLog
    )?;
    fixtures::insert_user(&test.db, "editor", Role::Editor).await?;
    let blog_type = BlogTypeRepository::new(&test.db).create("Devotional").await?;

    let result = create_blog(
        State(app_state(&test)),
        Json(blog_request("editor", blog_type.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stored = entity::prelude::Blog::find().one(&test.db).await?;
    assert_eq!(stored.unwrap().status, BlogStatus::Active);

    Ok(())
}

/// Expect 400 when the heading is empty
#[tokio::test]
async fn rejects_empty_heading() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::BlogType,
        entity::prelude::Blog,
        entity::prelude::ActivityLog
    )?;
    fixtures::insert_user(&test.db, "member", Role::Member).await?;
    let blog_type = BlogTypeRepository::new(&test.db).create("Devotional").await?;

    let mut request = blog_request("member", blog_type.id);
    request.heading = String::new();

    let result = create_blog(State(app_state(&test)), Json(request)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 403 when the author uid is not in the user table
#[tokio::test]
async fn unknown_author_is_forbidden() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::BlogType,
        entity::prelude::Blog,
        entity::prelude::ActivityLog
    )?;
    let blog_type = BlogTypeRepository::new(&test.db).create("Devotional").await?;

    let result = create_blog(
        State(app_state(&test)),
        Json(blog_request("ghost", blog_type.id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
