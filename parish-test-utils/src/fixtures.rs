//! Entity-level fixtures shared across test suites.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
};

use entity::sea_orm_active_enums::{Language, Role};

/// Inserts a user whose email is derived from the uid
/// (`<uid>@example.org`).
pub async fn insert_user<C: ConnectionTrait>(
    db: &C,
    uid: &str,
    role: Role,
) -> Result<entity::user::Model, DbErr> {
    insert_user_with_language(db, uid, role, Language::Tamil).await
}

pub async fn insert_user_with_language<C: ConnectionTrait>(
    db: &C,
    uid: &str,
    role: Role,
    language: Language,
) -> Result<entity::user::Model, DbErr> {
    let user = entity::user::ActiveModel {
        firebase_uid: ActiveValue::Set(uid.to_string()),
        email: ActiveValue::Set(format!("{uid}@example.org")),
        full_name: ActiveValue::Set(format!("Test {uid}")),
        role: ActiveValue::Set(role),
        church_name: ActiveValue::Set("The Grace Evangelical Church".to_string()),
        photo_url: ActiveValue::Set("https://example.org/avatar.png".to_string()),
        language: ActiveValue::Set(language),
        contact_number: ActiveValue::Set(String::new()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    user.insert(db).await
}

pub async fn count_activity<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    entity::prelude::ActivityLog::find().count(db).await
}
