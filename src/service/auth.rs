use sea_orm::ConnectionTrait;

use entity::sea_orm_active_enums::{Language, Role};

use crate::{
    data::activity::NewActivity,
    data::user::{NewUser, UserRepository},
    error::Error,
    model::user::{CheckRoleRequest, SyncDto, SyncRequest, UserDto},
    service::activity,
};

const DEFAULT_CHURCH_NAME: &str = "The Grace Evangelical Church";

/// Placeholder avatar for accounts registered without a photo.
fn default_photo_url(full_name: &str) -> String {
    let name: String = full_name
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();

    format!("https://ui-avatars.com/api/?name={name}&background=random")
}

/// Mirrors an external identity into the user table.
///
/// Existing accounts are returned as-is; unknown identities are
/// registered with public-tier defaults unless `check_only` is set.
pub async fn sync<C: ConnectionTrait>(db: &C, request: SyncRequest) -> Result<SyncDto, Error> {
    if request.uid.is_empty() || request.email.is_empty() {
        return Err(Error::Validation("uid and email are required".to_string()));
    }

    let user_repository = UserRepository::new(db);

    if let Some(user) = user_repository.find_by_uid(&request.uid).await? {
        return Ok(SyncDto {
            user: user.into(),
            status: "exists".to_string(),
        });
    }

    if request.check_only {
        return Err(Error::NotFound("User not found".to_string()));
    }

    let full_name = request
        .display_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| request.email.clone());
    let photo_url = request
        .photo_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| default_photo_url(&full_name));

    let user = user_repository
        .create(NewUser {
            firebase_uid: request.uid,
            email: request.email,
            full_name,
            role: Role::Public,
            church_name: request
                .church_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_CHURCH_NAME.to_string()),
            photo_url,
            language: request.language.unwrap_or(Language::Tamil),
            contact_number: request.contact_number.unwrap_or_default(),
        })
        .await?;

    activity::record(
        db,
        NewActivity {
            user_uid: user.firebase_uid.clone(),
            action_type: "INSERT".to_string(),
            module: "USER".to_string(),
            details: format!("New user registered: {}", user.email),
            record_id: Some(user.firebase_uid.clone()),
        },
    )
    .await;

    Ok(SyncDto {
        user: user.into(),
        status: "created".to_string(),
    })
}

/// Looks up the stored account for a signed-in identity.
pub async fn check_role<C: ConnectionTrait>(
    db: &C,
    request: CheckRoleRequest,
) -> Result<UserDto, Error> {
    if request.uid.is_empty() {
        return Err(Error::Validation("uid is required".to_string()));
    }

    let user = UserRepository::new(db)
        .find_by_uid(&request.uid)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(user.into())
}
