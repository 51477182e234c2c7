use sea_orm::ConnectionTrait;

use crate::{
    data::activity::{ActivityFilter, ActivityLogRepository, NewActivity},
    error::Error,
    model::activity::{ActivityLogDto, ActivityLogQuery},
    service::policy::{self, Action},
};

const LOG_LIMIT: u64 = 100;

/// Records an audit entry for a mutating action.
///
/// Logging must never fail the operation it describes, so errors are
/// reported through tracing and swallowed.
pub async fn record<C: ConnectionTrait>(db: &C, activity: NewActivity) {
    let repository = ActivityLogRepository::new(db);

    if let Err(err) = repository.append(activity).await {
        tracing::warn!(error = %err, "failed to write activity log entry");
    }
}

pub async fn list<C: ConnectionTrait>(
    db: &C,
    query: ActivityLogQuery,
) -> Result<Vec<ActivityLogDto>, Error> {
    let requester = policy::require_requester(db, query.requester.as_deref()).await?;
    policy::authorize(&requester.role, Action::ViewActivityLog)?;

    let rows = ActivityLogRepository::new(db)
        .list(
            ActivityFilter {
                search: query.search,
                module: query.module,
                action: query.action,
            },
            LOG_LIMIT,
        )
        .await?;

    let entries = rows
        .into_iter()
        .map(|(log, user)| ActivityLogDto {
            id: log.id,
            action_type: log.action_type,
            module: log.module,
            details: log.details,
            record_id: log.record_id,
            created_at: log.created_at,
            full_name: user.as_ref().map(|u| u.full_name.clone()),
            email: user.as_ref().map(|u| u.email.clone()),
            role: user.as_ref().map(|u| u.role.clone()),
            photo_url: user.map(|u| u.photo_url),
        })
        .collect();

    Ok(entries)
}
