use serde::{Deserialize, Serialize};

use entity::sea_orm_active_enums::{BlogStatus, Category};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateBlogRequest {
    pub heading: String,
    pub sub_heading: String,
    pub content: String,
    pub photo_url: Option<String>,
    pub external_link: Option<String>,
    pub blog_type_id: i32,
    pub category: Category,
    pub author_uid: String,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateBlogRequest {
    pub heading: String,
    pub sub_heading: String,
    pub content: String,
    pub photo_url: Option<String>,
    pub external_link: Option<String>,
    pub blog_type_id: i32,
    pub category: Category,
    /// Actor recorded in the activity log
    pub author_uid: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct ApproveBlogRequest {
    pub requester_uid: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateBlogDto {
    pub id: i32,
    pub status: BlogStatus,
}

/// Joined view of a blog row with its type and author metadata
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BlogDto {
    pub id: i32,
    pub heading: String,
    pub sub_heading: String,
    pub content: String,
    pub photo_url: Option<String>,
    pub external_link: Option<String>,
    pub blog_type: Option<String>,
    pub category: Category,
    pub status: BlogStatus,
    pub author_name: Option<String>,
    pub author_photo: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RelatedBlogDto {
    pub id: i32,
    pub heading: String,
    pub photo_url: Option<String>,
    pub author_name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BlogDetailDto {
    pub blog: BlogDto,
    pub related: Vec<RelatedBlogDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PublicBlogsDto {
    pub data: Vec<BlogDto>,
    /// Distinct type names present, for filter chips
    pub types: Vec<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct AdminBlogQuery {
    pub uid: Option<String>,
    /// `all` or `pending`; admins only
    pub view: Option<String>,
    pub search: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct PublicBlogQuery {
    pub requester: Option<String>,
    pub search: Option<String>,
    /// Blog type name filter, `All` for no filter
    pub r#type: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct RequesterQuery {
    pub requester: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateBlogTypeRequest {
    pub name: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BlogTypeDto {
    pub id: i32,
    pub type_name: String,
}

impl From<entity::blog_type::Model> for BlogTypeDto {
    fn from(blog_type: entity::blog_type::Model) -> Self {
        Self {
            id: blog_type.id,
            type_name: blog_type.type_name,
        }
    }
}
