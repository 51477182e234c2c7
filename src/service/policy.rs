//! Central authorization policy.
//!
//! Every privileged operation maps to an [`Action`] and is checked here,
//! so role rules live in one place instead of being scattered across
//! handlers.

use sea_orm::ConnectionTrait;

use entity::sea_orm_active_enums::Role;

use crate::{data::user::UserRepository, error::auth::AuthError, error::Error};

pub enum Action {
    ListUsers,
    SearchUsers,
    ViewActivityLog,
    ApproveBlog,
    ManageRoster,
    AssignRole {
        /// Current role of the user being modified
        target: Role,
        new_role: Role,
    },
}

/// Checks whether `role` may perform `action`.
pub fn authorize(role: &Role, action: Action) -> Result<(), AuthError> {
    match action {
        Action::ListUsers | Action::SearchUsers => match role {
            Role::Admin | Role::Editor => Ok(()),
            _ => Err(AuthError::Forbidden(
                "Insufficient permissions to view users".to_string(),
            )),
        },
        Action::ViewActivityLog => match role {
            Role::Admin => Ok(()),
            _ => Err(AuthError::Forbidden(
                "Only admins can view the activity log".to_string(),
            )),
        },
        Action::ApproveBlog => match role {
            Role::Admin | Role::Editor => Ok(()),
            _ => Err(AuthError::Forbidden(
                "Insufficient permissions to approve posts".to_string(),
            )),
        },
        Action::ManageRoster => match role {
            Role::Admin | Role::Editor => Ok(()),
            _ => Err(AuthError::Forbidden(
                "Insufficient permissions to manage the roster".to_string(),
            )),
        },
        Action::AssignRole { target, new_role } => match role {
            Role::Admin => Ok(()),
            Role::Editor => {
                // Editors manage the lower tiers only.
                if matches!(target, Role::Admin | Role::Editor) {
                    return Err(AuthError::Forbidden(
                        "Editors cannot modify admin or editor accounts".to_string(),
                    ));
                }
                if matches!(new_role, Role::Admin | Role::Editor) {
                    return Err(AuthError::Forbidden(
                        "Editors cannot assign admin or editor roles".to_string(),
                    ));
                }
                Ok(())
            }
            _ => Err(AuthError::Forbidden(
                "Insufficient permissions to change roles".to_string(),
            )),
        },
    }
}

/// Resolves the acting user or fails with the appropriate auth error.
pub async fn require_requester<C: ConnectionTrait>(
    db: &C,
    uid: Option<&str>,
) -> Result<entity::user::Model, Error> {
    let uid = match uid.filter(|uid| !uid.is_empty()) {
        Some(uid) => uid,
        None => return Err(AuthError::MissingRequester.into()),
    };

    UserRepository::new(db)
        .find_by_uid(uid)
        .await?
        .ok_or_else(|| AuthError::RequesterNotFound(uid.to_string()).into())
}
