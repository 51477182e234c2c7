//! Weekly bulletin aggregation.
//!
//! Pulls news, the live roster and celebration dates together for the
//! public feed and for the printable bulletin.

use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::ConnectionTrait;

use entity::sea_orm_active_enums::Language;

use crate::{
    data::news::NewsRepository,
    data::roster::ServiceRosterRepository,
    data::special_date::SpecialDateRepository,
    data::user::UserRepository,
    error::Error,
    model::bulletin::{BulletinData, NewsFeedDto, NewsGroupDto, RosterEntryDto, SpecialDateDto},
    util::time,
};

/// Languages whose news a reader should see. Sinhala readers get a
/// dedicated bulletin; everyone else reads the combined English and
/// Tamil one.
pub fn news_languages(language: &Language) -> Vec<Language> {
    match language {
        Language::Sinhala => vec![Language::Sinhala],
        _ => vec![Language::English, Language::Tamil],
    }
}

/// Merges rows sharing a title into one group, preserving the order in
/// which titles first appear.
pub fn group_news(rows: Vec<entity::news::Model>) -> Vec<NewsGroupDto> {
    let mut groups: Vec<NewsGroupDto> = Vec::new();

    for row in rows {
        match groups.iter_mut().find(|group| group.title == row.title) {
            Some(group) => group.items.push(row.description),
            None => groups.push(NewsGroupDto {
                title: row.title,
                date: row.news_date,
                language: row.language,
                items: vec![row.description],
            }),
        }
    }

    groups
}

fn to_roster_entries(
    rows: Vec<(
        entity::service_roster::Model,
        Option<entity::roster_role::Model>,
    )>,
) -> Vec<RosterEntryDto> {
    rows.into_iter()
        .map(|(row, role)| RosterEntryDto {
            role_name: role.map(|role| role.role_name).unwrap_or_default(),
            assigned_person: row.assigned_person,
            is_alternative: row.is_alternative,
        })
        .collect()
}

fn to_special_dates(rows: Vec<entity::special_date::Model>) -> Vec<SpecialDateDto> {
    rows.into_iter()
        .map(|row| SpecialDateDto {
            person_name: row.person_name,
            event_type: row.event_type,
            event_date: row.event_date,
            details: row.details,
        })
        .collect()
}

/// Resolves the requester's stored language preference. Anonymous or
/// unknown requesters read the English bulletin.
pub async fn reader_language<C: ConnectionTrait>(
    db: &C,
    requester: Option<&str>,
) -> Result<Language, Error> {
    let language = match requester.filter(|uid| !uid.is_empty()) {
        Some(uid) => UserRepository::new(db)
            .find_by_uid(uid)
            .await?
            .map(|user| user.language)
            .unwrap_or(Language::English),
        None => Language::English,
    };

    Ok(language)
}

/// Builds the public news-feed payload for the bulletin week containing
/// `today`.
pub async fn news_feed<C: ConnectionTrait>(
    db: &C,
    requester: Option<&str>,
    today: NaiveDate,
) -> Result<NewsFeedDto, Error> {
    let user_language = reader_language(db, requester).await?;

    let sunday = time::upcoming_sunday(today);
    let languages = news_languages(&user_language);

    let news_rows = NewsRepository::new(db)
        .find_since(time::news_cutoff(sunday), &languages)
        .await?;
    // The Sinhala bulletin carries no roster section.
    let roster_rows = if user_language == Language::Sinhala {
        Vec::new()
    } else {
        ServiceRosterRepository::new(db).for_date(sunday).await?
    };
    let special_rows = SpecialDateRepository::new(db)
        .find_in_months(today.month(), time::next_month(today))
        .await?;

    Ok(NewsFeedDto {
        sunday_date: sunday,
        server_date: Utc::now().naive_utc(),
        user_language,
        news: group_news(news_rows),
        roster: to_roster_entries(roster_rows),
        special_dates: to_special_dates(special_rows),
    })
}

/// Collects everything the printable bulletin needs for the service
/// Sunday of the week containing `today`.
pub async fn bulletin_data<C: ConnectionTrait>(
    db: &C,
    language: Language,
    today: NaiveDate,
) -> Result<BulletinData, Error> {
    let sunday = time::upcoming_sunday(today);
    let (start, end) = time::bulletin_window(sunday);
    let languages = news_languages(&language);

    let news_rows = NewsRepository::new(db)
        .find_between(start, end, &languages)
        .await?;
    // The Sinhala bulletin carries no roster section.
    let roster_rows = if language == Language::Sinhala {
        Vec::new()
    } else {
        ServiceRosterRepository::new(db).for_date(sunday).await?
    };
    let (celebration_start, celebration_end) = time::celebration_week(sunday);
    let special_rows = SpecialDateRepository::new(db)
        .find_in_window(celebration_start, celebration_end)
        .await?;

    let week_range = format!("{} to {}", start.format("%d %b %Y"), end.format("%d %b %Y"));

    Ok(BulletinData {
        sunday,
        week_range,
        language,
        news: group_news(news_rows),
        roster: to_roster_entries(roster_rows),
        special_dates: to_special_dates(special_rows),
    })
}

#[cfg(test)]
mod tests {
    mod group_news {
        use chrono::NaiveDate;
        use entity::sea_orm_active_enums::Language;

        use crate::service::bulletin::group_news;

        fn row(id: i32, title: &str, description: &str) -> entity::news::Model {
            entity::news::Model {
                id,
                title: title.to_string(),
                description: description.to_string(),
                news_date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
                language: Language::English,
                created_at: NaiveDate::from_ymd_opt(2025, 3, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            }
        }

        /// Expect rows sharing a title to merge while keeping first-seen order
        #[test]
        fn merges_and_preserves_order() {
            let grouped = group_news(vec![
                row(1, "Prayer meeting", "Wednesday 7pm"),
                row(2, "Youth camp", "Registrations open"),
                row(3, "Prayer meeting", "Bring a friend"),
            ]);

            assert_eq!(grouped.len(), 2);
            assert_eq!(grouped[0].title, "Prayer meeting");
            assert_eq!(
                grouped[0].items,
                vec!["Wednesday 7pm".to_string(), "Bring a friend".to_string()]
            );
            assert_eq!(grouped[1].title, "Youth camp");
        }
    }

    mod news_languages {
        use entity::sea_orm_active_enums::Language;

        use crate::service::bulletin::news_languages;

        /// Expect Sinhala readers to get Sinhala only, others English and Tamil
        #[test]
        fn splits_by_reader_language() {
            assert_eq!(news_languages(&Language::Sinhala), vec![Language::Sinhala]);
            assert_eq!(
                news_languages(&Language::Tamil),
                vec![Language::English, Language::Tamil]
            );
            assert_eq!(
                news_languages(&Language::English),
                vec![Language::English, Language::Tamil]
            );
        }
    }

    mod news_feed {
        use chrono::NaiveDate;
        use entity::sea_orm_active_enums::{Language, Role};
        use parish_test_utils::prelude::*;

        use crate::{
            data::news::{NewNews, NewsRepository},
            service::bulletin,
        };

        /// Expect the feed to honour the fourteen-day window and language
        #[tokio::test]
        async fn windows_news_by_language() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::User,
                entity::prelude::News,
                entity::prelude::RosterRole,
                entity::prelude::ServiceRoster,
                entity::prelude::SpecialDate
            )?;
            fixtures::insert_user_with_language(
                &test.db,
                "uid-reader",
                Role::Member,
                Language::Sinhala,
            )
            .await?;

            let news_repository = NewsRepository::new(&test.db);
            news_repository
                .create(NewNews {
                    title: "Sinhala item".to_string(),
                    description: "Within window".to_string(),
                    news_date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
                    language: Language::Sinhala,
                })
                .await?;
            news_repository
                .create(NewNews {
                    title: "English item".to_string(),
                    description: "Wrong language".to_string(),
                    news_date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
                    language: Language::English,
                })
                .await?;
            news_repository
                .create(NewNews {
                    title: "Old Sinhala item".to_string(),
                    description: "Too old".to_string(),
                    news_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                    language: Language::Sinhala,
                })
                .await?;

            let feed = bulletin::news_feed(
                &test.db,
                Some("uid-reader"),
                NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            )
            .await?;

            assert_eq!(feed.sunday_date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
            assert_eq!(feed.user_language, Language::Sinhala);
            assert_eq!(feed.news.len(), 1);
            assert_eq!(feed.news[0].title, "Sinhala item");

            Ok(())
        }

        /// Expect celebrations anchored on today's month, not the Sunday's
        #[tokio::test]
        async fn anchors_celebrations_on_today() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::User,
                entity::prelude::News,
                entity::prelude::RosterRole,
                entity::prelude::ServiceRoster,
                entity::prelude::SpecialDate
            )?;
            let repository = crate::data::special_date::SpecialDateRepository::new(&test.db);
            repository
                .create(crate::data::special_date::NewSpecialDate {
                    person_name: "March Birthday".to_string(),
                    event_type: entity::sea_orm_active_enums::EventType::Birthday,
                    event_date: NaiveDate::from_ymd_opt(1988, 3, 31).unwrap(),
                    details: None,
                })
                .await?;
            repository
                .create(crate::data::special_date::NewSpecialDate {
                    person_name: "May Birthday".to_string(),
                    event_type: entity::sea_orm_active_enums::EventType::Birthday,
                    event_date: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
                    details: None,
                })
                .await?;

            // Monday the 31st; the upcoming Sunday falls in April.
            let feed = bulletin::news_feed(
                &test.db,
                None,
                NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            )
            .await?;

            let names: Vec<&str> = feed
                .special_dates
                .iter()
                .map(|date| date.person_name.as_str())
                .collect();
            assert_eq!(names, vec!["March Birthday"]);

            Ok(())
        }
    }

    mod bulletin_data {
        use chrono::NaiveDate;
        use entity::sea_orm_active_enums::{EventType, Language};
        use parish_test_utils::prelude::*;

        use crate::{
            data::roster::{
                RosterRoleRepository, RosterTemplateRepository, ServiceRosterRepository,
                TemplateEntry,
            },
            data::special_date::{NewSpecialDate, SpecialDateRepository},
            service::bulletin,
        };

        async fn seed_roster(
            db: &sea_orm::DatabaseConnection,
            sunday: NaiveDate,
        ) -> Result<(), sea_orm::DbErr> {
            let role = RosterRoleRepository::new(db).create("Worship Leader").await?;
            let template_repository = RosterTemplateRepository::new(db);
            template_repository
                .replace_week(
                    1,
                    vec![TemplateEntry {
                        role_id: role.id,
                        person_name: "Assigned Person".to_string(),
                        is_alternative: false,
                        user_uid: None,
                    }],
                )
                .await?;
            let templates = template_repository.for_week(1).await?;
            ServiceRosterRepository::new(db)
                .copy_from_templates(sunday, &templates)
                .await?;
            Ok(())
        }

        /// Expect a celebration on the Saturday after the service Sunday
        #[tokio::test]
        async fn includes_saturday_celebrations() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::News,
                entity::prelude::RosterRole,
                entity::prelude::RosterTemplate,
                entity::prelude::ServiceRoster,
                entity::prelude::SpecialDate
            )?;
            SpecialDateRepository::new(&test.db)
                .create(NewSpecialDate {
                    person_name: "Saturday Birthday".to_string(),
                    event_type: EventType::Birthday,
                    event_date: NaiveDate::from_ymd_opt(1992, 3, 15).unwrap(),
                    details: None,
                })
                .await?;

            let data = bulletin::bulletin_data(
                &test.db,
                Language::English,
                NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            )
            .await?;

            assert_eq!(data.sunday, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
            assert_eq!(data.special_dates.len(), 1);
            assert_eq!(data.special_dates[0].person_name, "Saturday Birthday");

            Ok(())
        }

        /// Expect the Sinhala bulletin to carry no roster rows
        #[tokio::test]
        async fn sinhala_bulletin_skips_roster() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::News,
                entity::prelude::RosterRole,
                entity::prelude::RosterTemplate,
                entity::prelude::ServiceRoster,
                entity::prelude::SpecialDate
            )?;
            let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
            let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
            seed_roster(&test.db, sunday).await?;

            let sinhala = bulletin::bulletin_data(&test.db, Language::Sinhala, today).await?;
            assert!(sinhala.roster.is_empty());

            let english = bulletin::bulletin_data(&test.db, Language::English, today).await?;
            assert_eq!(english.roster.len(), 1);

            Ok(())
        }
    }
}
