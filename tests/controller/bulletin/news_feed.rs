//! Tests for the news_feed endpoint.

use axum::{extract::Query, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use entity::sea_orm_active_enums::{Language, Role};
use parish::{
    controller::bulletin::{news_feed, NewsFeedQuery},
    data::news::{NewNews, NewsRepository},
};
use parish_test_utils::prelude::*;

use super::*;

/// Expect 200 with nothing seeded
#[tokio::test]
async fn empty_feed_for_anonymous_reader() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::News,
        entity::prelude::RosterRole,
        entity::prelude::ServiceRoster,
        entity::prelude::SpecialDate
    )?;

    let result = news_feed(
        State(app_state(&test)),
        Query(NewsFeedQuery { requester: None }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 for a signed-in reader with current news
#[tokio::test]
async fn feed_for_signed_in_reader() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::News,
        entity::prelude::RosterRole,
        entity::prelude::ServiceRoster,
        entity::prelude::SpecialDate
    )?;
    fixtures::insert_user_with_language(&test.db, "reader", Role::Member, Language::Tamil)
        .await?;
    NewsRepository::new(&test.db)
        .create(NewNews {
            title: "Prayer Meeting".to_string(),
            description: "Wednesday at 7pm".to_string(),
            news_date: Utc::now().date_naive(),
            language: Language::Tamil,
        })
        .await?;

    let result = news_feed(
        State(app_state(&test)),
        Query(NewsFeedQuery {
            requester: Some("reader".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
