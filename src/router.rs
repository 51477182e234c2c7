//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI
//! specifications, and Swagger UI serves the interactive documentation
//! at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and
/// Swagger UI documentation.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Parish", description = "Parish API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Identity sync and role checks"),
        (name = controller::user::USER_TAG, description = "User accounts and roles"),
        (name = controller::blog::BLOG_TAG, description = "Blog posts and types"),
        (name = controller::video::VIDEO_TAG, description = "Video library"),
        (name = controller::book::BOOK_TAG, description = "Book catalog and orders"),
        (name = controller::news::NEWS_TAG, description = "Bulletin news items"),
        (name = controller::special_date::SPECIAL_DATE_TAG, description = "Birthdays and anniversaries"),
        (name = controller::roster::ROSTER_TAG, description = "Service roster"),
        (name = controller::bulletin::BULLETIN_TAG, description = "Weekly bulletin"),
        (name = controller::activity::ACTIVITY_TAG, description = "Admin activity log"),
        (name = controller::storage::STORAGE_TAG, description = "Upload key minting"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::sync))
        .routes(routes!(controller::auth::check_role))
        .routes(routes!(controller::user::list_users))
        .routes(routes!(controller::user::search_users))
        .routes(routes!(controller::user::directory))
        .routes(routes!(controller::user::update_profile))
        .routes(routes!(controller::user::update_role))
        .routes(routes!(controller::blog::create_blog))
        .routes(routes!(controller::blog::list_admin_blogs))
        .routes(routes!(controller::blog::list_public_blogs))
        .routes(routes!(controller::blog::blog_detail))
        .routes(routes!(
            controller::blog::update_blog,
            controller::blog::delete_blog
        ))
        .routes(routes!(controller::blog::approve_blog))
        .routes(routes!(
            controller::blog::list_blog_types,
            controller::blog::create_blog_type
        ))
        .routes(routes!(controller::video::create_video))
        .routes(routes!(controller::video::list_admin_videos))
        .routes(routes!(controller::video::list_public_videos))
        .routes(routes!(
            controller::video::update_video,
            controller::video::delete_video
        ))
        .routes(routes!(
            controller::book::create_book,
            controller::book::list_books
        ))
        .routes(routes!(
            controller::book::update_book,
            controller::book::delete_book
        ))
        .routes(routes!(
            controller::book::place_order,
            controller::book::list_orders
        ))
        .routes(routes!(
            controller::news::create_news,
            controller::news::list_news
        ))
        .routes(routes!(
            controller::special_date::create_special_date,
            controller::special_date::list_special_dates
        ))
        .routes(routes!(controller::special_date::delete_special_date))
        .routes(routes!(
            controller::roster::list_roles,
            controller::roster::create_role
        ))
        .routes(routes!(
            controller::roster::list_templates,
            controller::roster::save_templates
        ))
        .routes(routes!(controller::roster::update_template))
        .routes(routes!(controller::roster::status))
        .routes(routes!(controller::roster::generate))
        .routes(routes!(controller::bulletin::news_feed))
        .routes(routes!(controller::bulletin::bulletin_pdf))
        .routes(routes!(controller::activity::list_activity))
        .routes(routes!(controller::storage::create_key))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
