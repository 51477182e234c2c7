use sea_orm::ConnectionTrait;

use entity::sea_orm_active_enums::{BlogStatus, Category, Role};

use crate::{
    data::activity::NewActivity,
    data::blog::{AdminBlogFilter, BlogFields, BlogRepository, BlogTypeRepository, NewBlog},
    data::user::UserRepository,
    error::Error,
    model::blog::{
        AdminBlogQuery, BlogDetailDto, BlogDto, CreateBlogDto, CreateBlogRequest,
        CreateBlogTypeRequest, PublicBlogQuery, PublicBlogsDto, RelatedBlogDto, UpdateBlogRequest,
    },
    service::{
        activity,
        policy::{self, Action},
    },
};

const RELATED_LIMIT: u64 = 5;

fn to_dto(
    blog: entity::blog::Model,
    blog_type: Option<&entity::blog_type::Model>,
    author: Option<&entity::user::Model>,
) -> BlogDto {
    BlogDto {
        id: blog.id,
        heading: blog.heading,
        sub_heading: blog.sub_heading,
        content: blog.content,
        photo_url: blog.photo_url,
        external_link: blog.external_link,
        blog_type: blog_type.map(|t| t.type_name.clone()),
        category: blog.category,
        status: blog.status,
        author_name: author.map(|u| u.full_name.clone()),
        author_photo: author.map(|u| u.photo_url.clone()),
        created_at: blog.created_at,
    }
}

/// Submits a post. Editors and admins publish immediately, everyone
/// else lands in the approval queue.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    request: CreateBlogRequest,
) -> Result<CreateBlogDto, Error> {
    if request.heading.is_empty() || request.content.is_empty() {
        return Err(Error::Validation(
            "heading and content are required".to_string(),
        ));
    }

    let author = policy::require_requester(db, Some(&request.author_uid)).await?;

    let status = match author.role {
        Role::Admin | Role::Editor => BlogStatus::Active,
        _ => BlogStatus::Pending,
    };

    let blog = BlogRepository::new(db)
        .create(NewBlog {
            heading: request.heading,
            sub_heading: request.sub_heading,
            content: request.content,
            photo_url: request.photo_url,
            external_link: request.external_link,
            blog_type_id: request.blog_type_id,
            category: request.category,
            status: status.clone(),
            author_uid: author.firebase_uid.clone(),
        })
        .await?;

    activity::record(
        db,
        NewActivity {
            user_uid: author.firebase_uid,
            action_type: "POST".to_string(),
            module: "BLOG".to_string(),
            details: format!("Post New Blog with status: {:?}", status),
            record_id: Some(blog.id.to_string()),
        },
    )
    .await;

    Ok(CreateBlogDto {
        id: blog.id,
        status: blog.status,
    })
}

/// Console listing. Admins see every post and may narrow to the
/// approval queue; other roles see their own posts only.
pub async fn list_admin<C: ConnectionTrait>(
    db: &C,
    query: AdminBlogQuery,
) -> Result<Vec<BlogDto>, Error> {
    let requester = policy::require_requester(db, query.uid.as_deref()).await?;

    let filter = if requester.role == Role::Admin {
        AdminBlogFilter {
            author_uid: None,
            pending_only: query.view.as_deref() == Some("pending"),
            search: query.search,
        }
    } else {
        AdminBlogFilter {
            author_uid: Some(requester.firebase_uid),
            pending_only: false,
            search: query.search,
        }
    };

    let rows = BlogRepository::new(db).list_admin(filter).await?;

    Ok(rows
        .into_iter()
        .map(|(blog, blog_type)| to_dto(blog, blog_type.as_ref(), None))
        .collect())
}

/// Public site listing with type filter chips.
pub async fn list_public<C: ConnectionTrait>(
    db: &C,
    query: PublicBlogQuery,
) -> Result<PublicBlogsDto, Error> {
    let include_private = is_member(db, query.requester.as_deref()).await?;

    let blog_repository = BlogRepository::new(db);
    let types = blog_repository.active_type_names().await?;
    let blog_types = BlogTypeRepository::new(db).list().await?;

    let rows = blog_repository
        .list_public(
            include_private,
            query.search.as_deref(),
            query.r#type.as_deref(),
        )
        .await?;

    let data = rows
        .into_iter()
        .map(|(blog, author)| {
            let blog_type = blog_types.iter().find(|t| t.id == blog.blog_type_id);
            to_dto(blog, blog_type, author.as_ref())
        })
        .collect();

    Ok(PublicBlogsDto { data, types })
}

/// Detail page with a handful of other active posts.
pub async fn detail<C: ConnectionTrait>(
    db: &C,
    id: i32,
    requester: Option<&str>,
) -> Result<BlogDetailDto, Error> {
    let include_private = is_member(db, requester).await?;

    let blog_repository = BlogRepository::new(db);
    let (blog, author, blog_type) = blog_repository
        .find_detail(id)
        .await?
        .ok_or_else(|| Error::NotFound("Blog not found".to_string()))?;

    // Unapproved and members-only posts are invisible to outsiders.
    if blog.status == BlogStatus::Pending
        || (blog.category == Category::Private && !include_private)
    {
        return Err(Error::NotFound("Blog not found".to_string()));
    }

    let related = blog_repository
        .related(blog.id, include_private, RELATED_LIMIT)
        .await?
        .into_iter()
        .map(|related| RelatedBlogDto {
            id: related.id,
            heading: related.heading,
            photo_url: related.photo_url,
            author_name: None,
            created_at: related.created_at,
        })
        .collect();

    Ok(BlogDetailDto {
        blog: to_dto(blog, blog_type.as_ref(), author.as_ref()),
        related,
    })
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    request: UpdateBlogRequest,
) -> Result<BlogDto, Error> {
    if request.heading.is_empty() || request.content.is_empty() {
        return Err(Error::Validation(
            "heading and content are required".to_string(),
        ));
    }

    let blog = BlogRepository::new(db)
        .update_fields(
            id,
            BlogFields {
                heading: Some(request.heading),
                sub_heading: Some(request.sub_heading),
                content: Some(request.content),
                photo_url: Some(request.photo_url),
                external_link: Some(request.external_link),
                blog_type_id: Some(request.blog_type_id),
                category: Some(request.category),
            },
        )
        .await?
        .ok_or_else(|| Error::NotFound("Blog not found".to_string()))?;

    if let Some(actor) = request.author_uid.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor,
                action_type: "UPDATE".to_string(),
                module: "BLOG".to_string(),
                details: format!("Updated Blog: {}", blog.heading),
                record_id: Some(blog.id.to_string()),
            },
        )
        .await;
    }

    Ok(to_dto(blog, None, None))
}

/// Moves a queued post live. Re-approving an active post is a no-op.
pub async fn approve<C: ConnectionTrait>(
    db: &C,
    id: i32,
    requester_uid: &str,
) -> Result<BlogDto, Error> {
    let requester = policy::require_requester(db, Some(requester_uid)).await?;
    policy::authorize(&requester.role, Action::ApproveBlog)?;

    let blog = BlogRepository::new(db)
        .set_status(id, BlogStatus::Active)
        .await?
        .ok_or_else(|| Error::NotFound("Blog not found".to_string()))?;

    activity::record(
        db,
        NewActivity {
            user_uid: requester.firebase_uid,
            action_type: "APPROVE".to_string(),
            module: "BLOG".to_string(),
            details: format!("Approved Blog: {}", blog.heading),
            record_id: Some(blog.id.to_string()),
        },
    )
    .await;

    Ok(to_dto(blog, None, None))
}

pub async fn delete<C: ConnectionTrait>(
    db: &C,
    id: i32,
    actor: Option<&str>,
) -> Result<(), Error> {
    let deleted = BlogRepository::new(db).delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Blog not found".to_string()));
    }

    if let Some(actor) = actor.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor.to_string(),
                action_type: "DELETE".to_string(),
                module: "BLOG".to_string(),
                details: format!("Deleted Blog ID: {id}"),
                record_id: Some(id.to_string()),
            },
        )
        .await;
    }

    Ok(())
}

pub async fn list_types<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<entity::blog_type::Model>, Error> {
    Ok(BlogTypeRepository::new(db).list().await?)
}

pub async fn create_type<C: ConnectionTrait>(
    db: &C,
    request: CreateBlogTypeRequest,
) -> Result<entity::blog_type::Model, Error> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(Error::Validation("name is required".to_string()));
    }

    let type_repository = BlogTypeRepository::new(db);
    if type_repository.find_by_name(name).await?.is_some() {
        return Err(Error::Conflict("Blog type already exists".to_string()));
    }

    Ok(type_repository.create(name).await?)
}

/// True when the requester resolves to a signed-in, non-public account.
async fn is_member<C: ConnectionTrait>(db: &C, requester: Option<&str>) -> Result<bool, Error> {
    let Some(uid) = requester.filter(|uid| !uid.is_empty()) else {
        return Ok(false);
    };

    let user = UserRepository::new(db).find_by_uid(uid).await?;

    Ok(user.is_some_and(|user| user.role != Role::Public))
}
