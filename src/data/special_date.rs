use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::sea_orm_active_enums::EventType;

pub struct NewSpecialDate {
    pub person_name: String,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub details: Option<String>,
}

pub struct SpecialDateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpecialDateRepository<'a, C> {
    /// Creates a new instance of [`SpecialDateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        new_date: NewSpecialDate,
    ) -> Result<entity::special_date::Model, DbErr> {
        let date = entity::special_date::ActiveModel {
            person_name: ActiveValue::Set(new_date.person_name),
            event_type: ActiveValue::Set(new_date.event_type),
            event_date: ActiveValue::Set(new_date.event_date),
            details: ActiveValue::Set(new_date.details),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        date.insert(self.db).await
    }

    /// All entries in calendar order, ignoring the year.
    pub async fn list(&self) -> Result<Vec<entity::special_date::Model>, DbErr> {
        entity::prelude::SpecialDate::find()
            .order_by_asc(Expr::cust("strftime('%m-%d', event_date)"))
            .all(self.db)
            .await
    }

    /// Returns true when a row was deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SpecialDate::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Entries falling in either of the two given months, any year.
    pub async fn find_in_months(
        &self,
        first: u32,
        second: u32,
    ) -> Result<Vec<entity::special_date::Model>, DbErr> {
        entity::prelude::SpecialDate::find()
            .filter(
                Condition::any()
                    .add(Expr::cust_with_values(
                        "strftime('%m', event_date) = ?",
                        [format!("{first:02}")],
                    ))
                    .add(Expr::cust_with_values(
                        "strftime('%m', event_date) = ?",
                        [format!("{second:02}")],
                    )),
            )
            .order_by_asc(Expr::cust("strftime('%m-%d', event_date)"))
            .all(self.db)
            .await
    }

    /// Entries whose month and day fall inside the inclusive window,
    /// ignoring the year. When the window crosses a year boundary the
    /// comparison wraps around.
    pub async fn find_in_window(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<entity::special_date::Model>, DbErr> {
        let start_md = format!("{:02}-{:02}", start.month(), start.day());
        let end_md = format!("{:02}-{:02}", end.month(), end.day());

        let condition = if start_md <= end_md {
            Condition::all()
                .add(Expr::cust_with_values(
                    "strftime('%m-%d', event_date) >= ?",
                    [start_md],
                ))
                .add(Expr::cust_with_values(
                    "strftime('%m-%d', event_date) <= ?",
                    [end_md],
                ))
        } else {
            Condition::any()
                .add(Expr::cust_with_values(
                    "strftime('%m-%d', event_date) >= ?",
                    [start_md],
                ))
                .add(Expr::cust_with_values(
                    "strftime('%m-%d', event_date) <= ?",
                    [end_md],
                ))
        };

        entity::prelude::SpecialDate::find()
            .filter(condition)
            .order_by_asc(Expr::cust("strftime('%m-%d', event_date)"))
            .all(self.db)
            .await
    }
}
