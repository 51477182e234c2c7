use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use entity::sea_orm_active_enums::{BlogStatus, Category};

pub struct NewBlog {
    pub heading: String,
    pub sub_heading: String,
    pub content: String,
    pub photo_url: Option<String>,
    pub external_link: Option<String>,
    pub blog_type_id: i32,
    pub category: Category,
    pub status: BlogStatus,
    pub author_uid: String,
}

/// Editable blog fields; only `Some` fields are written.
#[derive(Default)]
pub struct BlogFields {
    pub heading: Option<String>,
    pub sub_heading: Option<String>,
    pub content: Option<String>,
    pub photo_url: Option<Option<String>>,
    pub external_link: Option<Option<String>>,
    pub blog_type_id: Option<i32>,
    pub category: Option<Category>,
}

#[derive(Default)]
pub struct AdminBlogFilter {
    pub author_uid: Option<String>,
    pub pending_only: bool,
    /// Matches against heading and sub heading
    pub search: Option<String>,
}

pub struct BlogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlogRepository<'a, C> {
    /// Creates a new instance of [`BlogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_blog: NewBlog) -> Result<entity::blog::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let blog = entity::blog::ActiveModel {
            heading: ActiveValue::Set(new_blog.heading),
            sub_heading: ActiveValue::Set(new_blog.sub_heading),
            content: ActiveValue::Set(new_blog.content),
            photo_url: ActiveValue::Set(new_blog.photo_url),
            external_link: ActiveValue::Set(new_blog.external_link),
            blog_type_id: ActiveValue::Set(new_blog.blog_type_id),
            category: ActiveValue::Set(new_blog.category),
            status: ActiveValue::Set(new_blog.status),
            author_uid: ActiveValue::Set(new_blog.author_uid),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        blog.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::blog::Model>, DbErr> {
        entity::prelude::Blog::find_by_id(id).one(self.db).await
    }

    /// Post with its author and blog type resolved.
    pub async fn find_detail(
        &self,
        id: i32,
    ) -> Result<
        Option<(
            entity::blog::Model,
            Option<entity::user::Model>,
            Option<entity::blog_type::Model>,
        )>,
        DbErr,
    > {
        let row = entity::prelude::Blog::find_by_id(id)
            .find_also_related(entity::user::Entity)
            .one(self.db)
            .await?;

        let Some((blog, author)) = row else {
            return Ok(None);
        };

        let blog_type = entity::prelude::BlogType::find_by_id(blog.blog_type_id)
            .one(self.db)
            .await?;

        Ok(Some((blog, author, blog_type)))
    }

    /// Console listing, newest first.
    pub async fn list_admin(
        &self,
        filter: AdminBlogFilter,
    ) -> Result<Vec<(entity::blog::Model, Option<entity::blog_type::Model>)>, DbErr> {
        let mut query =
            entity::prelude::Blog::find().find_also_related(entity::blog_type::Entity);

        if let Some(author_uid) = filter.author_uid {
            query = query.filter(entity::blog::Column::AuthorUid.eq(author_uid));
        }
        if filter.pending_only {
            query = query.filter(entity::blog::Column::Status.eq(BlogStatus::Pending));
        }
        if let Some(search) = filter.search.filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::blog::Column::Heading.contains(&search))
                    .add(entity::blog::Column::SubHeading.contains(&search)),
            );
        }

        query
            .order_by_desc(entity::blog::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Active posts for the public site, newest first.
    ///
    /// Private posts are hidden unless `include_private` is set.
    pub async fn list_public(
        &self,
        include_private: bool,
        search: Option<&str>,
        type_name: Option<&str>,
    ) -> Result<Vec<(entity::blog::Model, Option<entity::user::Model>)>, DbErr> {
        let mut query = entity::prelude::Blog::find()
            .find_also_related(entity::user::Entity)
            .filter(entity::blog::Column::Status.eq(BlogStatus::Active));

        if !include_private {
            query = query.filter(entity::blog::Column::Category.eq(Category::Public));
        }
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::blog::Column::Heading.contains(search))
                    .add(entity::blog::Column::SubHeading.contains(search)),
            );
        }
        if let Some(type_name) = type_name.filter(|t| !t.is_empty() && *t != "All") {
            query = query
                .join(JoinType::InnerJoin, entity::blog::Relation::BlogType.def())
                .filter(entity::blog_type::Column::TypeName.eq(type_name));
        }

        query
            .order_by_desc(entity::blog::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Other active posts shown alongside a detail page.
    pub async fn related(
        &self,
        exclude_id: i32,
        include_private: bool,
        limit: u64,
    ) -> Result<Vec<entity::blog::Model>, DbErr> {
        let mut query = entity::prelude::Blog::find()
            .filter(entity::blog::Column::Status.eq(BlogStatus::Active))
            .filter(entity::blog::Column::Id.ne(exclude_id));

        if !include_private {
            query = query.filter(entity::blog::Column::Category.eq(Category::Public));
        }

        query
            .order_by_desc(entity::blog::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Returns `Ok(None)` when the post does not exist.
    pub async fn update_fields(
        &self,
        id: i32,
        fields: BlogFields,
    ) -> Result<Option<entity::blog::Model>, DbErr> {
        let blog = match self.find_by_id(id).await? {
            Some(blog) => blog,
            None => return Ok(None),
        };

        let mut blog_am = blog.into_active_model();
        if let Some(heading) = fields.heading {
            blog_am.heading = ActiveValue::Set(heading);
        }
        if let Some(sub_heading) = fields.sub_heading {
            blog_am.sub_heading = ActiveValue::Set(sub_heading);
        }
        if let Some(content) = fields.content {
            blog_am.content = ActiveValue::Set(content);
        }
        if let Some(photo_url) = fields.photo_url {
            blog_am.photo_url = ActiveValue::Set(photo_url);
        }
        if let Some(external_link) = fields.external_link {
            blog_am.external_link = ActiveValue::Set(external_link);
        }
        if let Some(blog_type_id) = fields.blog_type_id {
            blog_am.blog_type_id = ActiveValue::Set(blog_type_id);
        }
        if let Some(category) = fields.category {
            blog_am.category = ActiveValue::Set(category);
        }
        blog_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let blog = blog_am.update(self.db).await?;

        Ok(Some(blog))
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: BlogStatus,
    ) -> Result<Option<entity::blog::Model>, DbErr> {
        let blog = match self.find_by_id(id).await? {
            Some(blog) => blog,
            None => return Ok(None),
        };

        let mut blog_am = blog.into_active_model();
        blog_am.status = ActiveValue::Set(status);
        blog_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let blog = blog_am.update(self.db).await?;

        Ok(Some(blog))
    }

    /// Returns true when a row was deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Blog::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Distinct type names in use by active posts.
    pub async fn active_type_names(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Blog::find()
            .select_only()
            .column(entity::blog_type::Column::TypeName)
            .join(JoinType::InnerJoin, entity::blog::Relation::BlogType.def())
            .filter(entity::blog::Column::Status.eq(BlogStatus::Active))
            .distinct()
            .order_by_asc(entity::blog_type::Column::TypeName)
            .into_tuple()
            .all(self.db)
            .await
    }
}

pub struct BlogTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlogTypeRepository<'a, C> {
    /// Creates a new instance of [`BlogTypeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::blog_type::Model>, DbErr> {
        entity::prelude::BlogType::find()
            .order_by_asc(entity::blog_type::Column::TypeName)
            .all(self.db)
            .await
    }

    pub async fn find_by_name(
        &self,
        type_name: &str,
    ) -> Result<Option<entity::blog_type::Model>, DbErr> {
        entity::prelude::BlogType::find()
            .filter(entity::blog_type::Column::TypeName.eq(type_name))
            .one(self.db)
            .await
    }

    pub async fn create(&self, type_name: &str) -> Result<entity::blog_type::Model, DbErr> {
        let blog_type = entity::blog_type::ActiveModel {
            type_name: ActiveValue::Set(type_name.to_string()),
            ..Default::default()
        };

        blog_type.insert(self.db).await
    }
}
