use sea_orm::ConnectionTrait;

use crate::{
    data::activity::NewActivity,
    data::book::{BookOrderRepository, BookRepository, NewBook, NewBookOrder},
    error::Error,
    model::book::{BookOrderRequest, BookRequest},
    service::activity,
};

fn to_new_book(request: &mut BookRequest) -> Result<NewBook, Error> {
    if request.title.is_empty() || request.author.is_empty() {
        return Err(Error::Validation(
            "title and author are required".to_string(),
        ));
    }

    Ok(NewBook {
        title: std::mem::take(&mut request.title),
        author: std::mem::take(&mut request.author),
        pages: request.pages,
        publish_year: request.publish_year,
        description: request.description.take(),
        image_url: request.image_url.take(),
        stock_status: request.stock_status.clone(),
    })
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    mut request: BookRequest,
) -> Result<entity::book::Model, Error> {
    let new_book = to_new_book(&mut request)?;
    let book = BookRepository::new(db).create(new_book).await?;

    if let Some(actor) = request.user_id.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor,
                action_type: "POST".to_string(),
                module: "BOOK".to_string(),
                details: format!("Added Book: {}", book.title),
                record_id: Some(book.id.to_string()),
            },
        )
        .await;
    }

    Ok(book)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<entity::book::Model>, Error> {
    Ok(BookRepository::new(db).list().await?)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    mut request: BookRequest,
) -> Result<entity::book::Model, Error> {
    let new_book = to_new_book(&mut request)?;
    let book = BookRepository::new(db)
        .update(id, new_book)
        .await?
        .ok_or_else(|| Error::NotFound("Book not found".to_string()))?;

    if let Some(actor) = request.user_id.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor,
                action_type: "UPDATE".to_string(),
                module: "BOOK".to_string(),
                details: format!("Updated Book: {}", book.title),
                record_id: Some(book.id.to_string()),
            },
        )
        .await;
    }

    Ok(book)
}

pub async fn delete<C: ConnectionTrait>(
    db: &C,
    id: i32,
    actor: Option<&str>,
) -> Result<(), Error> {
    let deleted = BookRepository::new(db).delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Book not found".to_string()));
    }

    if let Some(actor) = actor.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor.to_string(),
                action_type: "DELETE".to_string(),
                module: "BOOK".to_string(),
                details: format!("Deleted Book ID: {id}"),
                record_id: Some(id.to_string()),
            },
        )
        .await;
    }

    Ok(())
}

/// Places an order; open to anonymous visitors so every field arrives
/// optional and is validated here.
pub async fn place_order<C: ConnectionTrait>(
    db: &C,
    request: BookOrderRequest,
) -> Result<entity::book_order::Model, Error> {
    let book_id = request
        .book_id
        .ok_or_else(|| Error::Validation("book_id is required".to_string()))?;
    let full_name = request
        .full_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::Validation("full_name is required".to_string()))?;
    let contact_number = request
        .contact_number
        .filter(|number| !number.is_empty())
        .ok_or_else(|| Error::Validation("contact_number is required".to_string()))?;
    let quantity = request.quantity.unwrap_or(1);
    if quantity < 1 {
        return Err(Error::Validation("quantity must be at least 1".to_string()));
    }

    BookRepository::new(db)
        .find_by_id(book_id)
        .await?
        .ok_or_else(|| Error::NotFound("Book not found".to_string()))?;

    let order = BookOrderRepository::new(db)
        .create(NewBookOrder {
            book_id,
            user_uid: request.user_uid.filter(|uid| !uid.is_empty()),
            full_name,
            contact_number,
            church_name: request.church_name,
            address: request.address,
            quantity,
        })
        .await?;

    Ok(order)
}

pub async fn list_orders<C: ConnectionTrait>(
    db: &C,
    user_uid: Option<&str>,
) -> Result<Vec<(entity::book_order::Model, Option<entity::book::Model>)>, Error> {
    let order_repository = BookOrderRepository::new(db);

    let orders = match user_uid.filter(|uid| !uid.is_empty()) {
        Some(uid) => order_repository.list_for_user(uid).await?,
        None => order_repository.list().await?,
    };

    Ok(orders)
}
