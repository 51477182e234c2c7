use sea_orm::ConnectionTrait;

use crate::{
    data::activity::NewActivity,
    data::news::{NewNews, NewsRepository},
    error::Error,
    model::news::CreateNewsRequest,
    service::activity,
};

pub async fn create<C: ConnectionTrait>(
    db: &C,
    request: CreateNewsRequest,
    actor: Option<&str>,
) -> Result<entity::news::Model, Error> {
    let title = request
        .title
        .filter(|title| !title.is_empty())
        .ok_or_else(|| Error::Validation("title is required".to_string()))?;
    let description = request
        .description
        .filter(|description| !description.is_empty())
        .ok_or_else(|| Error::Validation("description is required".to_string()))?;
    let news_date = request
        .news_date
        .ok_or_else(|| Error::Validation("news_date is required".to_string()))?;
    let language = request
        .language
        .ok_or_else(|| Error::Validation("language is required".to_string()))?;

    let news = NewsRepository::new(db)
        .create(NewNews {
            title,
            description,
            news_date,
            language,
        })
        .await?;

    if let Some(actor) = actor.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor.to_string(),
                action_type: "POST".to_string(),
                module: "NEWS".to_string(),
                details: format!("Added News: {}", news.title),
                record_id: Some(news.id.to_string()),
            },
        )
        .await;
    }

    Ok(news)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<entity::news::Model>, Error> {
    Ok(NewsRepository::new(db).list().await?)
}
