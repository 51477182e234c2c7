use sea_orm::ConnectionTrait;

use crate::{
    data::activity::NewActivity,
    data::special_date::{NewSpecialDate, SpecialDateRepository},
    error::Error,
    model::news::CreateSpecialDateRequest,
    service::activity,
};

pub async fn create<C: ConnectionTrait>(
    db: &C,
    request: CreateSpecialDateRequest,
    actor: Option<&str>,
) -> Result<entity::special_date::Model, Error> {
    if request.person_name.is_empty() {
        return Err(Error::Validation("person_name is required".to_string()));
    }

    let date = SpecialDateRepository::new(db)
        .create(NewSpecialDate {
            person_name: request.person_name,
            event_type: request.event_type,
            event_date: request.event_date,
            details: request.details,
        })
        .await?;

    if let Some(actor) = actor.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor.to_string(),
                action_type: "POST".to_string(),
                module: "SPECIAL_DATE".to_string(),
                details: format!("Added {:?} for {}", date.event_type, date.person_name),
                record_id: Some(date.id.to_string()),
            },
        )
        .await;
    }

    Ok(date)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<entity::special_date::Model>, Error> {
    Ok(SpecialDateRepository::new(db).list().await?)
}

pub async fn delete<C: ConnectionTrait>(
    db: &C,
    id: i32,
    actor: Option<&str>,
) -> Result<(), Error> {
    let deleted = SpecialDateRepository::new(db).delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Special date not found".to_string()));
    }

    if let Some(actor) = actor.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor.to_string(),
                action_type: "DELETE".to_string(),
                module: "SPECIAL_DATE".to_string(),
                details: format!("Deleted Special Date ID: {id}"),
                record_id: Some(id.to_string()),
            },
        )
        .await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    mod delete {
        use chrono::NaiveDate;
        use entity::sea_orm_active_enums::EventType;
        use parish_test_utils::prelude::*;

        use crate::{
            error::Error,
            model::news::CreateSpecialDateRequest,
            service::special_date,
        };

        /// Expect NotFound on a second delete of the same entry
        #[tokio::test]
        async fn second_delete_is_not_found() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::SpecialDate,
                entity::prelude::ActivityLog
            )?;
            let created = special_date::create(
                &test.db,
                CreateSpecialDateRequest {
                    person_name: "Jubilee Person".to_string(),
                    event_type: EventType::Anniversary,
                    event_date: NaiveDate::from_ymd_opt(1995, 6, 12).unwrap(),
                    details: None,
                },
                None,
            )
            .await?;

            special_date::delete(&test.db, created.id, None).await?;
            let result = special_date::delete(&test.db, created.id, None).await;

            assert!(matches!(result, Err(Error::NotFound(_))));

            Ok(())
        }
    }
}
