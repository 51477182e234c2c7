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
        roster::{
            CreateRosterRoleRequest, GenerateRosterRequest, RosterRoleDto, RosterStatusDto,
            TemplateDto, TemplateEntryRequest, UpdateTemplateRequest,
        },
        video::ActorQuery,
    },
    service,
};

pub static ROSTER_TAG: &str = "roster";

/// List roster roles in display order
#[utoipa::path(
    get,
    path = "/api/roster/roles",
    tag = ROSTER_TAG,
    responses(
        (status = 200, description = "All roles", body = Vec<RosterRoleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_roles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let roles: Vec<RosterRoleDto> = service::roster::list_roles(&state.db)
        .await?
        .into_iter()
        .map(RosterRoleDto::from)
        .collect();

    Ok((StatusCode::OK, Json(roles)))
}

/// Add a roster role
#[utoipa::path(
    post,
    path = "/api/roster/roles",
    tag = ROSTER_TAG,
    params(ActorQuery),
    request_body = CreateRosterRoleRequest,
    responses(
        (status = 201, description = "Role created", body = RosterRoleDto),
        (status = 400, description = "Missing role name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_role(
    State(state): State<AppState>,
    Query(query): Query<ActorQuery>,
    Json(request): Json<CreateRosterRoleRequest>,
) -> Result<impl IntoResponse, Error> {
    let role =
        service::roster::create_role(&state.db, request, query.user_id.as_deref()).await?;

    Ok((StatusCode::CREATED, Json(RosterRoleDto::from(role))))
}

/// List the week rotation templates
#[utoipa::path(
    get,
    path = "/api/roster/templates",
    tag = ROSTER_TAG,
    responses(
        (status = 200, description = "Template rows with role names", body = Vec<TemplateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_templates(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let templates = service::roster::list_templates(&state.db).await?;

    Ok((StatusCode::OK, Json(templates)))
}

/// Replace rotation templates week by week
#[utoipa::path(
    post,
    path = "/api/roster/templates",
    tag = ROSTER_TAG,
    params(ActorQuery),
    request_body = Vec<TemplateEntryRequest>,
    responses(
        (status = 200, description = "Templates saved", body = MessageDto),
        (status = 400, description = "Empty or invalid entries", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_templates(
    State(state): State<AppState>,
    Query(query): Query<ActorQuery>,
    Json(entries): Json<Vec<TemplateEntryRequest>>,
) -> Result<impl IntoResponse, Error> {
    service::roster::save_templates(&state.db, entries, query.user_id.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Templates saved".to_string(),
        }),
    ))
}

/// Update one template assignment
#[utoipa::path(
    put,
    path = "/api/roster/templates/{id}",
    tag = ROSTER_TAG,
    params(
        ("id" = i32, Path, description = "Template entry id"),
        ActorQuery,
    ),
    request_body = UpdateTemplateRequest,
    responses(
        (status = 200, description = "Entry updated", body = MessageDto),
        (status = 400, description = "Missing person name", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<ActorQuery>,
    Json(request): Json<UpdateTemplateRequest>,
) -> Result<impl IntoResponse, Error> {
    service::roster::update_template(&state.db, id, request, query.user_id.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Template updated".to_string(),
        }),
    ))
}

/// Most recently generated live roster, if any
#[utoipa::path(
    get,
    path = "/api/roster/status",
    tag = ROSTER_TAG,
    responses(
        (status = 200, description = "Latest generation marker", body = Option<RosterStatusDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn status(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let status = service::roster::status(&state.db).await?;

    Ok((StatusCode::OK, Json(status)))
}

/// Materialize a week template as the roster for a service date
#[utoipa::path(
    post,
    path = "/api/roster/generate",
    tag = ROSTER_TAG,
    request_body = GenerateRosterRequest,
    responses(
        (status = 200, description = "Roster generated", body = MessageDto),
        (status = 404, description = "No template for the week", body = ErrorDto),
        (status = 409, description = "Roster exists and overwrite not set", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRosterRequest>,
) -> Result<impl IntoResponse, Error> {
    let copied = service::roster::generate(&state.db, request).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Generated roster with {copied} assignments"),
        }),
    ))
}
