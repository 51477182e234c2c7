use sea_orm::ConnectionTrait;

use entity::sea_orm_active_enums::Role;

use crate::{
    data::activity::NewActivity,
    data::user::{ProfileFields, UserRepository},
    error::Error,
    model::user::{
        UpdateProfileRequest, UpdateRoleRequest, UserDto, UserListQuery, UserSearchQuery,
    },
    service::{
        activity,
        policy::{self, Action},
    },
};

const SEARCH_LIMIT: u64 = 10;

/// Console user listing. Editors see the non-admin tiers only.
pub async fn list<C: ConnectionTrait>(
    db: &C,
    query: UserListQuery,
) -> Result<Vec<UserDto>, Error> {
    let requester = policy::require_requester(db, query.requester.as_deref()).await?;
    policy::authorize(&requester.role, Action::ListUsers)?;

    let exclude_admins = requester.role == Role::Editor;
    let users = UserRepository::new(db).list(exclude_admins).await?;

    Ok(users.into_iter().map(UserDto::from).collect())
}

/// Autocomplete for the role-assignment form.
pub async fn search<C: ConnectionTrait>(
    db: &C,
    query: UserSearchQuery,
) -> Result<Vec<UserDto>, Error> {
    let requester = policy::require_requester(db, query.requester.as_deref()).await?;
    policy::authorize(&requester.role, Action::SearchUsers)?;

    let q = match query.q.filter(|q| !q.is_empty()) {
        Some(q) => q,
        None => return Ok(Vec::new()),
    };

    let exclude_admins = requester.role == Role::Editor;
    let users = UserRepository::new(db)
        .search(&q, exclude_admins, SEARCH_LIMIT)
        .await?;

    Ok(users.into_iter().map(UserDto::from).collect())
}

/// Congregation directory; members and above, no public-tier accounts.
pub async fn directory<C: ConnectionTrait>(
    db: &C,
    requester: Option<&str>,
    q: Option<&str>,
) -> Result<Vec<UserDto>, Error> {
    let requester = policy::require_requester(db, requester).await?;
    if requester.role == Role::Public {
        return Err(crate::error::auth::AuthError::Forbidden(
            "Members only".to_string(),
        )
        .into());
    }

    let users = UserRepository::new(db)
        .search_directory(q, SEARCH_LIMIT * 10)
        .await?;

    Ok(users.into_iter().map(UserDto::from).collect())
}

/// Self-service profile update.
pub async fn update_profile<C: ConnectionTrait>(
    db: &C,
    request: UpdateProfileRequest,
) -> Result<UserDto, Error> {
    if request.uid.is_empty() {
        return Err(Error::Validation("uid is required".to_string()));
    }

    let fields = ProfileFields {
        full_name: request.full_name,
        church_name: request.church_name,
        contact_number: request.contact_number,
        language: request.language,
        photo_url: request.photo_url,
    };
    if fields.is_empty() {
        return Err(Error::Validation("No fields to update".to_string()));
    }

    let user = UserRepository::new(db)
        .update_profile(&request.uid, fields)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(user.into())
}

/// Role assignment by email, gated by the central policy.
pub async fn update_role<C: ConnectionTrait>(
    db: &C,
    request: UpdateRoleRequest,
) -> Result<UserDto, Error> {
    let requester = policy::require_requester(db, Some(&request.requester_uid)).await?;

    let user_repository = UserRepository::new(db);
    let target = user_repository
        .find_by_email(&request.target_email)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    policy::authorize(
        &requester.role,
        Action::AssignRole {
            target: target.role.clone(),
            new_role: request.new_role.clone(),
        },
    )?;

    let updated = user_repository
        .update_role_by_email(&request.target_email, request.new_role.clone())
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    activity::record(
        db,
        NewActivity {
            user_uid: requester.firebase_uid,
            action_type: "UPDATE".to_string(),
            module: "USER".to_string(),
            details: format!(
                "Changed role of {} to {:?}",
                request.target_email, request.new_role
            ),
            record_id: Some(updated.firebase_uid.clone()),
        },
    )
    .await;

    Ok(updated.into())
}

#[cfg(test)]
mod tests {
    mod list {
        use entity::sea_orm_active_enums::Role;
        use parish_test_utils::prelude::*;

        use crate::{
            error::{auth::AuthError, Error},
            model::user::UserListQuery,
            service::user,
        };

        /// Expect editors to see every account except admins
        #[tokio::test]
        async fn editor_view_hides_admins() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            fixtures::insert_user(&test.db, "uid-admin", Role::Admin).await?;
            fixtures::insert_user(&test.db, "uid-editor", Role::Editor).await?;
            fixtures::insert_user(&test.db, "uid-member", Role::Member).await?;

            let result = user::list(
                &test.db,
                UserListQuery {
                    requester: Some("uid-editor".to_string()),
                },
            )
            .await?;

            assert_eq!(result.len(), 2);
            assert!(result.iter().all(|u| u.role != Role::Admin));

            Ok(())
        }

        /// Expect members to be denied
        #[tokio::test]
        async fn member_is_denied() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            fixtures::insert_user(&test.db, "uid-member", Role::Member).await?;

            let result = user::list(
                &test.db,
                UserListQuery {
                    requester: Some("uid-member".to_string()),
                },
            )
            .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::Forbidden(_)))
            ));

            Ok(())
        }
    }

    mod update_role {
        use entity::sea_orm_active_enums::Role;
        use parish_test_utils::prelude::*;

        use crate::{
            error::{auth::AuthError, Error},
            model::user::UpdateRoleRequest,
            service::user,
        };

        fn request(requester: &str, target_email: &str, new_role: Role) -> UpdateRoleRequest {
            UpdateRoleRequest {
                requester_uid: requester.to_string(),
                target_email: target_email.to_string(),
                new_role,
            }
        }

        /// Expect admins to promote members
        #[tokio::test]
        async fn admin_promotes_member() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::User, entity::prelude::ActivityLog)?;
            fixtures::insert_user(&test.db, "uid-admin", Role::Admin).await?;
            fixtures::insert_user(&test.db, "uid-member", Role::Member).await?;

            let result = user::update_role(
                &test.db,
                request("uid-admin", "uid-member@example.org", Role::Creator),
            )
            .await?;

            assert_eq!(result.role, Role::Creator);

            Ok(())
        }

        /// Expect editors to be blocked from assigning the editor role
        #[tokio::test]
        async fn editor_cannot_assign_editor() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::User, entity::prelude::ActivityLog)?;
            fixtures::insert_user(&test.db, "uid-editor", Role::Editor).await?;
            fixtures::insert_user(&test.db, "uid-member", Role::Member).await?;

            let result = user::update_role(
                &test.db,
                request("uid-editor", "uid-member@example.org", Role::Editor),
            )
            .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::Forbidden(_)))
            ));

            Ok(())
        }

        /// Expect a role change to leave an activity log entry
        #[tokio::test]
        async fn records_activity() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::User, entity::prelude::ActivityLog)?;
            fixtures::insert_user(&test.db, "uid-admin", Role::Admin).await?;
            fixtures::insert_user(&test.db, "uid-member", Role::Member).await?;

            user::update_role(
                &test.db,
                request("uid-admin", "uid-member@example.org", Role::Member),
            )
            .await?;

            let count = fixtures::count_activity(&test.db).await?;
            assert_eq!(count, 1);

            Ok(())
        }

        /// Expect NotFound for an unknown target email
        #[tokio::test]
        async fn unknown_target_is_not_found() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::User, entity::prelude::ActivityLog)?;
            fixtures::insert_user(&test.db, "uid-admin", Role::Admin).await?;

            let result = user::update_role(
                &test.db,
                request("uid-admin", "ghost@example.org", Role::Member),
            )
            .await;

            assert!(matches!(result, Err(Error::NotFound(_))));

            Ok(())
        }
    }
}
