use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::sea_orm_active_enums::Language;

pub struct NewNews {
    pub title: String,
    pub description: String,
    pub news_date: NaiveDate,
    pub language: Language,
}

pub struct NewsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NewsRepository<'a, C> {
    /// Creates a new instance of [`NewsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_news: NewNews) -> Result<entity::news::Model, DbErr> {
        let news = entity::news::ActiveModel {
            title: ActiveValue::Set(new_news.title),
            description: ActiveValue::Set(new_news.description),
            news_date: ActiveValue::Set(new_news.news_date),
            language: ActiveValue::Set(new_news.language),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        news.insert(self.db).await
    }

    /// Console listing, most recent bulletin date first.
    pub async fn list(&self) -> Result<Vec<entity::news::Model>, DbErr> {
        entity::prelude::News::find()
            .order_by_desc(entity::news::Column::NewsDate)
            .order_by_desc(entity::news::Column::Id)
            .all(self.db)
            .await
    }

    /// Items dated on or after `since` in the given languages, newest
    /// bulletin date first with titles grouped together.
    pub async fn find_since(
        &self,
        since: NaiveDate,
        languages: &[Language],
    ) -> Result<Vec<entity::news::Model>, DbErr> {
        entity::prelude::News::find()
            .filter(entity::news::Column::NewsDate.gte(since))
            .filter(entity::news::Column::Language.is_in(languages.iter().cloned()))
            .order_by_desc(entity::news::Column::NewsDate)
            .order_by_asc(entity::news::Column::Title)
            .order_by_asc(entity::news::Column::Id)
            .all(self.db)
            .await
    }

    /// Items within the inclusive date range, oldest first.
    pub async fn find_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        languages: &[Language],
    ) -> Result<Vec<entity::news::Model>, DbErr> {
        entity::prelude::News::find()
            .filter(entity::news::Column::NewsDate.gte(start))
            .filter(entity::news::Column::NewsDate.lte(end))
            .filter(entity::news::Column::Language.is_in(languages.iter().cloned()))
            .order_by_asc(entity::news::Column::NewsDate)
            .order_by_asc(entity::news::Column::Title)
            .order_by_asc(entity::news::Column::Id)
            .all(self.db)
            .await
    }
}
