//! Tests for the bulletin_pdf endpoint.
//!
//! The handler resolves the reader's bulletin language, assembles the
//! week's bulletin data, renders it to HTML and sends it to the
//! headless renderer, streaming back the PDF with a download filename.

use axum::{
    extract::Query,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{Language, Role};
use parish::controller::bulletin::{bulletin_pdf, BulletinQuery};
use parish_test_utils::prelude::*;

use super::*;

fn disposition(resp: &axum::response::Response) -> String {
    resp.headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

/// Expect 200 with pdf content type and an English download filename
/// for an anonymous reader
#[tokio::test]
async fn downloads_rendered_pdf() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::News,
        entity::prelude::RosterRole,
        entity::prelude::ServiceRoster,
        entity::prelude::SpecialDate
    )?;

    let mock = test
        .server
        .mock("POST", "/pdf")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(b"%PDF-1.7 mock".to_vec())
        .create_async()
        .await;

    let result = bulletin_pdf(
        State(app_state(&test)),
        Query(BulletinQuery { requester: None }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );

    let disposition = disposition(&resp);
    assert!(disposition.starts_with("attachment; filename=\"Bulletin_"));
    assert!(disposition.contains("English"));

    mock.assert_async().await;

    Ok(())
}

/// Expect the requester's stored language to pick the bulletin variant
#[tokio::test]
async fn reader_language_selects_variant() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::News,
        entity::prelude::RosterRole,
        entity::prelude::ServiceRoster,
        entity::prelude::SpecialDate
    )?;
    fixtures::insert_user_with_language(&test.db, "reader", Role::Member, Language::Tamil)
        .await?;

    let _mock = test
        .server
        .mock("POST", "/pdf")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(b"%PDF-1.7 mock".to_vec())
        .create_async()
        .await;

    let result = bulletin_pdf(
        State(app_state(&test)),
        Query(BulletinQuery {
            requester: Some("reader".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(disposition(&resp).contains("Tamil"));

    Ok(())
}

/// Expect 500 when the renderer reports a failure
#[tokio::test]
async fn surfaces_renderer_failure() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::News,
        entity::prelude::RosterRole,
        entity::prelude::ServiceRoster,
        entity::prelude::SpecialDate
    )?;

    let _mock = test
        .server
        .mock("POST", "/pdf")
        .with_status(502)
        .with_body("renderer down")
        .create_async()
        .await;

    let result = bulletin_pdf(
        State(app_state(&test)),
        Query(BulletinQuery { requester: None }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
