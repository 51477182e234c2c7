use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        book::{BookDto, BookOrderDto, BookOrderRequest, BookRequest},
        video::ActorQuery,
    },
    service,
};

pub static BOOK_TAG: &str = "book";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct OrderListQuery {
    /// Restrict to orders placed by this user
    pub user_uid: Option<String>,
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/api/books",
    tag = BOOK_TAG,
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book stored", body = BookDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(request): Json<BookRequest>,
) -> Result<impl IntoResponse, Error> {
    let book = service::book::create(&state.db, request).await?;

    Ok((StatusCode::CREATED, Json(BookDto::from(book))))
}

/// List the book catalog
#[utoipa::path(
    get,
    path = "/api/books",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "All books", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let books: Vec<BookDto> = service::book::list(&state.db)
        .await?
        .into_iter()
        .map(BookDto::from)
        .collect();

    Ok((StatusCode::OK, Json(books)))
}

/// Update a catalog entry
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(("id" = i32, Path, description = "Book id")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Updated book", body = BookDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<BookRequest>,
) -> Result<impl IntoResponse, Error> {
    let book = service::book::update(&state.db, id, request).await?;

    Ok((StatusCode::OK, Json(BookDto::from(book))))
}

/// Remove a catalog entry
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book id"),
        ActorQuery,
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<ActorQuery>,
) -> Result<impl IntoResponse, Error> {
    service::book::delete(&state.db, id, query.user_id.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Book deleted".to_string(),
        }),
    ))
}

/// Place a book order
#[utoipa::path(
    post,
    path = "/api/book-orders",
    tag = BOOK_TAG,
    request_body = BookOrderRequest,
    responses(
        (status = 201, description = "Order stored", body = BookOrderDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<BookOrderRequest>,
) -> Result<impl IntoResponse, Error> {
    let order = service::book::place_order(&state.db, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookOrderDto {
            id: order.id,
            book_id: order.book_id,
            book_title: None,
            full_name: order.full_name,
            contact_number: order.contact_number,
            church_name: order.church_name,
            address: order.address,
            quantity: order.quantity,
            created_at: order.created_at,
        }),
    ))
}

/// List book orders, optionally for one user
#[utoipa::path(
    get,
    path = "/api/book-orders",
    tag = BOOK_TAG,
    params(OrderListQuery),
    responses(
        (status = 200, description = "Orders joined with book titles", body = Vec<BookOrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Result<impl IntoResponse, Error> {
    let orders = service::book::list_orders(&state.db, query.user_uid.as_deref()).await?;

    let orders: Vec<BookOrderDto> = orders
        .into_iter()
        .map(|(order, book)| BookOrderDto {
            id: order.id,
            book_id: order.book_id,
            book_title: book.map(|book| book.title),
            full_name: order.full_name,
            contact_number: order.contact_number,
            church_name: order.church_name,
            address: order.address,
            quantity: order.quantity,
            created_at: order.created_at,
        })
        .collect();

    Ok((StatusCode::OK, Json(orders)))
}
