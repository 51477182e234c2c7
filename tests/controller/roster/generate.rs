//! Tests for the generate endpoint.
//!
//! Generation copies a week template into the live roster for a
//! service date and refuses to silently replace an existing roster.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use parish::{
    controller::roster::generate,
    data::roster::{
        RosterRoleRepository, RosterTemplateRepository, ServiceRosterRepository, TemplateEntry,
    },
    model::roster::GenerateRosterRequest,
};
use parish_test_utils::prelude::*;

use super::*;

async fn seed_week_template(
    db: &sea_orm::DatabaseConnection,
    week_number: i32,
    person_name: &str,
) -> Result<(), sea_orm::DbErr> {
    let role = RosterRoleRepository::new(db).create("Worship Leader").await?;

    RosterTemplateRepository::new(db)
        .replace_week(
            week_number,
            vec![TemplateEntry {
                role_id: role.id,
                person_name: person_name.to_string(),
                is_alternative: false,
                user_uid: None,
            }],
        )
        .await
}

fn generate_request(date: NaiveDate, week: i32, overwrite: bool) -> GenerateRosterRequest {
    GenerateRosterRequest {
        date,
        week_template_num: week,
        overwrite,
        requester_uid: None,
    }
}

/// Expect 200 and the template copied for the date
#[tokio::test]
async fn copies_template_for_date() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::RosterRole,
        entity::prelude::RosterTemplate,
        entity::prelude::ServiceRoster
    )?;
    seed_week_template(&test.db, 1, "Assigned Person").await?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();

    let result = generate(
        State(app_state(&test)),
        Json(generate_request(date, 1, false)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let rows = ServiceRosterRepository::new(&test.db).for_date(date).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.assigned_person, "Assigned Person");

    Ok(())
}

/// Expect 409 when a roster already exists and overwrite is not set
#[tokio::test]
async fn refuses_existing_date() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::RosterRole,
        entity::prelude::RosterTemplate,
        entity::prelude::ServiceRoster
    )?;
    seed_week_template(&test.db, 1, "Assigned Person").await?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();

    let first = generate(
        State(app_state(&test)),
        Json(generate_request(date, 1, false)),
    )
    .await;
    assert!(first.is_ok());

    let second = generate(
        State(app_state(&test)),
        Json(generate_request(date, 1, false)),
    )
    .await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect overwrite to replace the existing roster, not append to it
#[tokio::test]
async fn overwrite_replaces_roster() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::RosterRole,
        entity::prelude::RosterTemplate,
        entity::prelude::ServiceRoster
    )?;
    seed_week_template(&test.db, 1, "First Person").await?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();

    let first = generate(
        State(app_state(&test)),
        Json(generate_request(date, 1, false)),
    )
    .await;
    assert!(first.is_ok());

    seed_week_template(&test.db, 2, "Second Person").await?;

    let second = generate(
        State(app_state(&test)),
        Json(generate_request(date, 2, true)),
    )
    .await;

    assert!(second.is_ok());
    let resp = second.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let rows = ServiceRosterRepository::new(&test.db).for_date(date).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.assigned_person, "Second Person");
    assert_eq!(rows[0].0.source_week_number, 2);

    Ok(())
}

/// Expect 404 when the week has no template rows
#[tokio::test]
async fn missing_template_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::RosterRole,
        entity::prelude::RosterTemplate,
        entity::prelude::ServiceRoster
    )?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();

    let result = generate(
        State(app_state(&test)),
        Json(generate_request(date, 7, false)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
