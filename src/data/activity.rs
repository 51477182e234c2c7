use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Append-only audit entry describing a mutating action.
pub struct NewActivity {
    pub user_uid: String,
    pub action_type: String,
    pub module: String,
    pub details: String,
    pub record_id: Option<String>,
}

#[derive(Default)]
pub struct ActivityFilter {
    /// Free-text filter over the acting user's email or full name
    pub search: Option<String>,
    pub module: Option<String>,
    pub action: Option<String>,
}

pub struct ActivityLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityLogRepository<'a, C> {
    /// Creates a new instance of [`ActivityLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn append(
        &self,
        activity: NewActivity,
    ) -> Result<entity::activity_log::Model, DbErr> {
        let row = entity::activity_log::ActiveModel {
            user_uid: ActiveValue::Set(activity.user_uid),
            action_type: ActiveValue::Set(activity.action_type),
            module: ActiveValue::Set(activity.module),
            details: ActiveValue::Set(activity.details),
            record_id: ActiveValue::Set(activity.record_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Returns log rows joined with their acting user, newest first.
    pub async fn list(
        &self,
        filter: ActivityFilter,
        limit: u64,
    ) -> Result<
        Vec<(
            entity::activity_log::Model,
            Option<entity::user::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::ActivityLog::find()
            .find_also_related(entity::user::Entity);

        if let Some(search) = filter.search.filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::user::Column::Email.contains(&search))
                    .add(entity::user::Column::FullName.contains(&search)),
            );
        }
        if let Some(module) = filter.module.filter(|m| m != "All") {
            query = query.filter(entity::activity_log::Column::Module.eq(module));
        }
        if let Some(action) = filter.action.filter(|a| a != "All") {
            query = query.filter(entity::activity_log::Column::ActionType.eq(action));
        }

        query
            .order_by_desc(entity::activity_log::Column::CreatedAt)
            .order_by_desc(entity::activity_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
