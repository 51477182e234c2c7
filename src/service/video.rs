use sea_orm::ConnectionTrait;

use entity::sea_orm_active_enums::Role;

use crate::{
    data::activity::NewActivity,
    data::user::UserRepository,
    data::video::{NewVideo, PublicVideoFilter, VideoRepository},
    error::Error,
    model::video::{PublicVideoQuery, VideoRequest},
    service::activity,
};

fn to_new_video(request: &mut VideoRequest) -> Result<NewVideo, Error> {
    if request.heading.is_empty() || request.youtube_link.is_empty() {
        return Err(Error::Validation(
            "heading and youtube_link are required".to_string(),
        ));
    }

    Ok(NewVideo {
        heading: std::mem::take(&mut request.heading),
        sub_heading: request.sub_heading.take(),
        description: request.description.take(),
        youtube_link: std::mem::take(&mut request.youtube_link),
        embed_code: request.embed_code.take(),
        video_type: std::mem::take(&mut request.video_type),
        category: request.category.clone(),
    })
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    mut request: VideoRequest,
) -> Result<entity::video::Model, Error> {
    let new_video = to_new_video(&mut request)?;
    let video = VideoRepository::new(db).create(new_video).await?;

    if let Some(actor) = request.user_id.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor,
                action_type: "POST".to_string(),
                module: "VIDEO".to_string(),
                details: format!("Posted Video: {}", video.heading),
                record_id: Some(video.id.to_string()),
            },
        )
        .await;
    }

    Ok(video)
}

pub async fn list_admin<C: ConnectionTrait>(db: &C) -> Result<Vec<entity::video::Model>, Error> {
    Ok(VideoRepository::new(db).list_admin().await?)
}

/// Public listing plus the distinct type labels for filter chips.
pub async fn list_public<C: ConnectionTrait>(
    db: &C,
    query: PublicVideoQuery,
) -> Result<(Vec<entity::video::Model>, Vec<String>), Error> {
    let include_private = match query.requester.filter(|uid| !uid.is_empty()) {
        Some(uid) => UserRepository::new(db)
            .find_by_uid(&uid)
            .await?
            .is_some_and(|user| user.role != Role::Public),
        None => false,
    };

    let video_repository = VideoRepository::new(db);
    let videos = video_repository
        .list_public(PublicVideoFilter {
            include_private,
            search: query.search,
            video_type: query.r#type,
            limit: query.limit.filter(|limit| *limit > 0),
        })
        .await?;
    let types = video_repository.type_names().await?;

    Ok((videos, types))
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    mut request: VideoRequest,
) -> Result<entity::video::Model, Error> {
    let new_video = to_new_video(&mut request)?;
    let video = VideoRepository::new(db)
        .update(id, new_video)
        .await?
        .ok_or_else(|| Error::NotFound("Video not found".to_string()))?;

    if let Some(actor) = request.user_id.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor,
                action_type: "UPDATE".to_string(),
                module: "VIDEO".to_string(),
                details: format!("Updated Video: {}", video.heading),
                record_id: Some(video.id.to_string()),
            },
        )
        .await;
    }

    Ok(video)
}

pub async fn delete<C: ConnectionTrait>(
    db: &C,
    id: i32,
    actor: Option<&str>,
) -> Result<(), Error> {
    let deleted = VideoRepository::new(db).delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Video not found".to_string()));
    }

    if let Some(actor) = actor.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor.to_string(),
                action_type: "DELETE".to_string(),
                module: "VIDEO".to_string(),
                details: format!("Deleted Video ID: {id}"),
                record_id: Some(id.to_string()),
            },
        )
        .await;
    }

    Ok(())
}
