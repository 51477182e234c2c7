use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use entity::sea_orm_active_enums::{Language, Role};

pub struct NewUser {
    pub firebase_uid: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub church_name: String,
    pub photo_url: String,
    pub language: Language,
    pub contact_number: String,
}

/// Self-service profile fields; only `Some` fields are written.
#[derive(Default)]
pub struct ProfileFields {
    pub full_name: Option<String>,
    pub church_name: Option<String>,
    pub contact_number: Option<String>,
    pub language: Option<Language>,
    pub photo_url: Option<String>,
}

impl ProfileFields {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.church_name.is_none()
            && self.contact_number.is_none()
            && self.language.is_none()
            && self.photo_url.is_none()
    }
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_user: NewUser) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            firebase_uid: ActiveValue::Set(new_user.firebase_uid),
            email: ActiveValue::Set(new_user.email),
            full_name: ActiveValue::Set(new_user.full_name),
            role: ActiveValue::Set(new_user.role),
            church_name: ActiveValue::Set(new_user.church_name),
            photo_url: ActiveValue::Set(new_user.photo_url),
            language: ActiveValue::Set(new_user.language),
            contact_number: ActiveValue::Set(new_user.contact_number),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn find_by_uid(&self, uid: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::FirebaseUid.eq(uid))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Applies the provided profile fields to an existing user.
    ///
    /// Returns `Ok(None)` when the user does not exist.
    pub async fn update_profile(
        &self,
        uid: &str,
        fields: ProfileFields,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match self.find_by_uid(uid).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        if let Some(full_name) = fields.full_name {
            user_am.full_name = ActiveValue::Set(full_name);
        }
        if let Some(church_name) = fields.church_name {
            user_am.church_name = ActiveValue::Set(church_name);
        }
        if let Some(contact_number) = fields.contact_number {
            user_am.contact_number = ActiveValue::Set(contact_number);
        }
        if let Some(language) = fields.language {
            user_am.language = ActiveValue::Set(language);
        }
        if let Some(photo_url) = fields.photo_url {
            user_am.photo_url = ActiveValue::Set(photo_url);
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Returns `Ok(None)` when no user carries the given email.
    pub async fn update_role_by_email(
        &self,
        email: &str,
        new_role: Role,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match self.find_by_email(email).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.role = ActiveValue::Set(new_role);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    pub async fn list(&self, exclude_admins: bool) -> Result<Vec<entity::user::Model>, DbErr> {
        let mut query = entity::prelude::User::find();

        if exclude_admins {
            query = query.filter(entity::user::Column::Role.ne(Role::Admin));
        }

        query
            .order_by_asc(entity::user::Column::FullName)
            .all(self.db)
            .await
    }

    /// Autocomplete search over email and full name.
    pub async fn search(
        &self,
        q: &str,
        exclude_admins: bool,
        limit: u64,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        let mut query = entity::prelude::User::find().filter(
            Condition::any()
                .add(entity::user::Column::Email.contains(q))
                .add(entity::user::Column::FullName.contains(q)),
        );

        if exclude_admins {
            query = query.filter(entity::user::Column::Role.ne(Role::Admin));
        }

        query.limit(limit).all(self.db).await
    }

    /// Directory search excluding public-tier users.
    pub async fn search_directory(
        &self,
        q: Option<&str>,
        limit: u64,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Role.ne(Role::Public));

        if let Some(q) = q.filter(|q| !q.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::user::Column::Email.contains(q))
                    .add(entity::user::Column::FullName.contains(q)),
            );
        }

        query
            .order_by_asc(entity::user::Column::FullName)
            .limit(limit)
            .all(self.db)
            .await
    }
}
