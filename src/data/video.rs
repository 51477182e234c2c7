use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use entity::sea_orm_active_enums::Category;

pub struct NewVideo {
    pub heading: String,
    pub sub_heading: Option<String>,
    pub description: Option<String>,
    pub youtube_link: String,
    pub embed_code: Option<String>,
    pub video_type: String,
    pub category: Category,
}

#[derive(Default)]
pub struct PublicVideoFilter {
    pub include_private: bool,
    /// Matches against heading, sub heading and description
    pub search: Option<String>,
    pub video_type: Option<String>,
    pub limit: Option<u64>,
}

pub struct VideoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VideoRepository<'a, C> {
    /// Creates a new instance of [`VideoRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_video: NewVideo) -> Result<entity::video::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let video = entity::video::ActiveModel {
            heading: ActiveValue::Set(new_video.heading),
            sub_heading: ActiveValue::Set(new_video.sub_heading),
            description: ActiveValue::Set(new_video.description),
            youtube_link: ActiveValue::Set(new_video.youtube_link),
            embed_code: ActiveValue::Set(new_video.embed_code),
            video_type: ActiveValue::Set(new_video.video_type),
            category: ActiveValue::Set(new_video.category),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        video.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::video::Model>, DbErr> {
        entity::prelude::Video::find_by_id(id).one(self.db).await
    }

    /// Console listing, newest first.
    pub async fn list_admin(&self) -> Result<Vec<entity::video::Model>, DbErr> {
        entity::prelude::Video::find()
            .order_by_desc(entity::video::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Public listing, newest first. Private videos are hidden unless
    /// `include_private` is set.
    pub async fn list_public(
        &self,
        filter: PublicVideoFilter,
    ) -> Result<Vec<entity::video::Model>, DbErr> {
        let mut query = entity::prelude::Video::find();

        if !filter.include_private {
            query = query.filter(entity::video::Column::Category.eq(Category::Public));
        }
        if let Some(search) = filter.search.filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::video::Column::Heading.contains(&search))
                    .add(entity::video::Column::SubHeading.contains(&search))
                    .add(entity::video::Column::Description.contains(&search)),
            );
        }
        if let Some(video_type) = filter.video_type.filter(|t| !t.is_empty() && t != "All") {
            query = query.filter(entity::video::Column::VideoType.eq(video_type));
        }

        query = query.order_by_desc(entity::video::Column::CreatedAt);
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query.all(self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        new_video: NewVideo,
    ) -> Result<Option<entity::video::Model>, DbErr> {
        let video = match self.find_by_id(id).await? {
            Some(video) => video,
            None => return Ok(None),
        };

        let mut video_am = video.into_active_model();
        video_am.heading = ActiveValue::Set(new_video.heading);
        video_am.sub_heading = ActiveValue::Set(new_video.sub_heading);
        video_am.description = ActiveValue::Set(new_video.description);
        video_am.youtube_link = ActiveValue::Set(new_video.youtube_link);
        video_am.embed_code = ActiveValue::Set(new_video.embed_code);
        video_am.video_type = ActiveValue::Set(new_video.video_type);
        video_am.category = ActiveValue::Set(new_video.category);
        video_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let video = video_am.update(self.db).await?;

        Ok(Some(video))
    }

    /// Returns true when a row was deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Video::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Distinct type labels in use.
    pub async fn type_names(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Video::find()
            .select_only()
            .column(entity::video::Column::VideoType)
            .distinct()
            .order_by_asc(entity::video::Column::VideoType)
            .into_tuple()
            .all(self.db)
            .await
    }
}
