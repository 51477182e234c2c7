use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        blog::{
            AdminBlogQuery, ApproveBlogRequest, BlogDetailDto, BlogDto, BlogTypeDto,
            CreateBlogDto, CreateBlogRequest, CreateBlogTypeRequest, PublicBlogQuery,
            PublicBlogsDto, RequesterQuery, UpdateBlogRequest,
        },
        video::ActorQuery,
    },
    service,
};

pub static BLOG_TAG: &str = "blog";

/// Submit a blog post
#[utoipa::path(
    post,
    path = "/api/blogs",
    tag = BLOG_TAG,
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Post stored", body = CreateBlogDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 401, description = "Missing author", body = ErrorDto),
        (status = 403, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_blog(
    State(state): State<AppState>,
    Json(request): Json<CreateBlogRequest>,
) -> Result<impl IntoResponse, Error> {
    let created = service::blog::create(&state.db, request).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Console blog listing
#[utoipa::path(
    get,
    path = "/api/admin/blogs",
    tag = BLOG_TAG,
    params(AdminBlogQuery),
    responses(
        (status = 200, description = "Posts visible to the requester", body = Vec<BlogDto>),
        (status = 401, description = "Missing requester", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_admin_blogs(
    State(state): State<AppState>,
    Query(query): Query<AdminBlogQuery>,
) -> Result<impl IntoResponse, Error> {
    let blogs = service::blog::list_admin(&state.db, query).await?;

    Ok((StatusCode::OK, Json(blogs)))
}

/// Public blog listing with type filter chips
#[utoipa::path(
    get,
    path = "/api/public/blogs",
    tag = BLOG_TAG,
    params(PublicBlogQuery),
    responses(
        (status = 200, description = "Active posts", body = PublicBlogsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_public_blogs(
    State(state): State<AppState>,
    Query(query): Query<PublicBlogQuery>,
) -> Result<impl IntoResponse, Error> {
    let blogs = service::blog::list_public(&state.db, query).await?;

    Ok((StatusCode::OK, Json(blogs)))
}

/// Blog detail page with related posts
#[utoipa::path(
    get,
    path = "/api/public/blogs/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = i32, Path, description = "Blog id"),
        RequesterQuery,
    ),
    responses(
        (status = 200, description = "Post with related entries", body = BlogDetailDto),
        (status = 404, description = "Post not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn blog_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<RequesterQuery>,
) -> Result<impl IntoResponse, Error> {
    let detail = service::blog::detail(&state.db, id, query.requester.as_deref()).await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Update a blog post
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    tag = BLOG_TAG,
    params(("id" = i32, Path, description = "Blog id")),
    request_body = UpdateBlogRequest,
    responses(
        (status = 200, description = "Updated post", body = BlogDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBlogRequest>,
) -> Result<impl IntoResponse, Error> {
    let blog = service::blog::update(&state.db, id, request).await?;

    Ok((StatusCode::OK, Json(blog)))
}

/// Approve a queued blog post
#[utoipa::path(
    put,
    path = "/api/admin/blogs/{id}/approve",
    tag = BLOG_TAG,
    params(("id" = i32, Path, description = "Blog id")),
    request_body = ApproveBlogRequest,
    responses(
        (status = 200, description = "Post is live", body = BlogDto),
        (status = 401, description = "Missing requester", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ApproveBlogRequest>,
) -> Result<impl IntoResponse, Error> {
    let blog = service::blog::approve(&state.db, id, &request.requester_uid).await?;

    Ok((StatusCode::OK, Json(blog)))
}

/// Delete a blog post
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = i32, Path, description = "Blog id"),
        ActorQuery,
    ),
    responses(
        (status = 200, description = "Post deleted", body = MessageDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<ActorQuery>,
) -> Result<impl IntoResponse, Error> {
    service::blog::delete(&state.db, id, query.user_id.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Blog deleted".to_string(),
        }),
    ))
}

/// List blog types
#[utoipa::path(
    get,
    path = "/api/blog-types",
    tag = BLOG_TAG,
    responses(
        (status = 200, description = "All blog types", body = Vec<BlogTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_blog_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let types: Vec<BlogTypeDto> = service::blog::list_types(&state.db)
        .await?
        .into_iter()
        .map(BlogTypeDto::from)
        .collect();

    Ok((StatusCode::OK, Json(types)))
}

/// Create a blog type
#[utoipa::path(
    post,
    path = "/api/blog-types",
    tag = BLOG_TAG,
    request_body = CreateBlogTypeRequest,
    responses(
        (status = 201, description = "Type created", body = BlogTypeDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 409, description = "Type already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_blog_type(
    State(state): State<AppState>,
    Json(request): Json<CreateBlogTypeRequest>,
) -> Result<impl IntoResponse, Error> {
    let blog_type = service::blog::create_type(&state.db, request).await?;

    Ok((StatusCode::CREATED, Json(BlogTypeDto::from(blog_type))))
}
