use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::sea_orm_active_enums::StockStatus;

pub struct NewBook {
    pub title: String,
    pub author: String,
    pub pages: i32,
    pub publish_year: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub stock_status: StockStatus,
}

pub struct NewBookOrder {
    pub book_id: i32,
    pub user_uid: Option<String>,
    pub full_name: String,
    pub contact_number: String,
    pub church_name: Option<String>,
    pub address: Option<String>,
    pub quantity: i32,
}

pub struct BookRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookRepository<'a, C> {
    /// Creates a new instance of [`BookRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_book: NewBook) -> Result<entity::book::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let book = entity::book::ActiveModel {
            title: ActiveValue::Set(new_book.title),
            author: ActiveValue::Set(new_book.author),
            pages: ActiveValue::Set(new_book.pages),
            publish_year: ActiveValue::Set(new_book.publish_year),
            description: ActiveValue::Set(new_book.description),
            image_url: ActiveValue::Set(new_book.image_url),
            stock_status: ActiveValue::Set(new_book.stock_status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        book.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::book::Model>, DbErr> {
        entity::prelude::Book::find_by_id(id).one(self.db).await
    }

    /// Newest first.
    pub async fn list(&self) -> Result<Vec<entity::book::Model>, DbErr> {
        entity::prelude::Book::find()
            .order_by_desc(entity::book::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        new_book: NewBook,
    ) -> Result<Option<entity::book::Model>, DbErr> {
        let book = match self.find_by_id(id).await? {
            Some(book) => book,
            None => return Ok(None),
        };

        let mut book_am = book.into_active_model();
        book_am.title = ActiveValue::Set(new_book.title);
        book_am.author = ActiveValue::Set(new_book.author);
        book_am.pages = ActiveValue::Set(new_book.pages);
        book_am.publish_year = ActiveValue::Set(new_book.publish_year);
        book_am.description = ActiveValue::Set(new_book.description);
        book_am.image_url = ActiveValue::Set(new_book.image_url);
        book_am.stock_status = ActiveValue::Set(new_book.stock_status);
        book_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let book = book_am.update(self.db).await?;

        Ok(Some(book))
    }

    /// Returns true when a row was deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Book::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

pub struct BookOrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookOrderRepository<'a, C> {
    /// Creates a new instance of [`BookOrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        new_order: NewBookOrder,
    ) -> Result<entity::book_order::Model, DbErr> {
        let order = entity::book_order::ActiveModel {
            book_id: ActiveValue::Set(new_order.book_id),
            user_uid: ActiveValue::Set(new_order.user_uid),
            full_name: ActiveValue::Set(new_order.full_name),
            contact_number: ActiveValue::Set(new_order.contact_number),
            church_name: ActiveValue::Set(new_order.church_name),
            address: ActiveValue::Set(new_order.address),
            quantity: ActiveValue::Set(new_order.quantity),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        order.insert(self.db).await
    }

    /// Orders joined with their book, newest first.
    pub async fn list(
        &self,
    ) -> Result<Vec<(entity::book_order::Model, Option<entity::book::Model>)>, DbErr> {
        entity::prelude::BookOrder::find()
            .find_also_related(entity::book::Entity)
            .order_by_desc(entity::book_order::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn list_for_user(
        &self,
        user_uid: &str,
    ) -> Result<Vec<(entity::book_order::Model, Option<entity::book::Model>)>, DbErr> {
        entity::prelude::BookOrder::find()
            .find_also_related(entity::book::Entity)
            .filter(entity::book_order::Column::UserUid.eq(user_uid))
            .order_by_desc(entity::book_order::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
