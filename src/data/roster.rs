use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct TemplateEntry {
    pub role_id: i32,
    pub person_name: String,
    pub is_alternative: bool,
    pub user_uid: Option<String>,
}

pub struct RosterRoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RosterRoleRepository<'a, C> {
    /// Creates a new instance of [`RosterRoleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::roster_role::Model>, DbErr> {
        entity::prelude::RosterRole::find()
            .order_by_asc(entity::roster_role::Column::DisplayOrder)
            .all(self.db)
            .await
    }

    pub async fn create(&self, role_name: &str) -> Result<entity::roster_role::Model, DbErr> {
        let max_order: Option<i32> = entity::prelude::RosterRole::find()
            .select_only()
            .column_as(entity::roster_role::Column::DisplayOrder.max(), "max_order")
            .into_tuple()
            .one(self.db)
            .await?
            .flatten();

        let role = entity::roster_role::ActiveModel {
            role_name: ActiveValue::Set(role_name.to_string()),
            display_order: ActiveValue::Set(max_order.unwrap_or(0) + 1),
            ..Default::default()
        };

        role.insert(self.db).await
    }
}

pub struct RosterTemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RosterTemplateRepository<'a, C> {
    /// Creates a new instance of [`RosterTemplateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All template rows joined with their role, in week then
    /// role-display order.
    pub async fn list_with_roles(
        &self,
    ) -> Result<
        Vec<(
            entity::roster_template::Model,
            Option<entity::roster_role::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::RosterTemplate::find()
            .find_also_related(entity::roster_role::Entity)
            .order_by_asc(entity::roster_template::Column::WeekNumber)
            .order_by_asc(entity::roster_role::Column::DisplayOrder)
            .all(self.db)
            .await
    }

    pub async fn for_week(
        &self,
        week_number: i32,
    ) -> Result<Vec<entity::roster_template::Model>, DbErr> {
        entity::prelude::RosterTemplate::find()
            .filter(entity::roster_template::Column::WeekNumber.eq(week_number))
            .all(self.db)
            .await
    }

    /// Replaces every assignment for the given week.
    pub async fn replace_week(
        &self,
        week_number: i32,
        entries: Vec<TemplateEntry>,
    ) -> Result<(), DbErr> {
        entity::prelude::RosterTemplate::delete_many()
            .filter(entity::roster_template::Column::WeekNumber.eq(week_number))
            .exec(self.db)
            .await?;

        for entry in entries {
            let row = entity::roster_template::ActiveModel {
                week_number: ActiveValue::Set(week_number),
                role_id: ActiveValue::Set(entry.role_id),
                person_name: ActiveValue::Set(entry.person_name),
                is_alternative: ActiveValue::Set(entry.is_alternative),
                user_uid: ActiveValue::Set(entry.user_uid),
                ..Default::default()
            };
            row.insert(self.db).await?;
        }

        Ok(())
    }

    /// Returns `Ok(None)` when the template row does not exist.
    pub async fn update_entry(
        &self,
        id: i32,
        person_name: String,
        is_alternative: bool,
        user_uid: Option<String>,
    ) -> Result<Option<entity::roster_template::Model>, DbErr> {
        let row = entity::prelude::RosterTemplate::find_by_id(id)
            .one(self.db)
            .await?;
        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let mut row_am: entity::roster_template::ActiveModel = row.into();
        row_am.person_name = ActiveValue::Set(person_name);
        row_am.is_alternative = ActiveValue::Set(is_alternative);
        row_am.user_uid = ActiveValue::Set(user_uid);

        let row = row_am.update(self.db).await?;

        Ok(Some(row))
    }
}

pub struct ServiceRosterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ServiceRosterRepository<'a, C> {
    /// Creates a new instance of [`ServiceRosterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists_for_date(&self, date: NaiveDate) -> Result<bool, DbErr> {
        let row = entity::prelude::ServiceRoster::find()
            .filter(entity::service_roster::Column::ServiceDate.eq(date))
            .one(self.db)
            .await?;

        Ok(row.is_some())
    }

    pub async fn latest_date(&self) -> Result<Option<NaiveDate>, DbErr> {
        entity::prelude::ServiceRoster::find()
            .select_only()
            .column(entity::service_roster::Column::ServiceDate)
            .order_by_desc(entity::service_roster::Column::ServiceDate)
            .limit(1)
            .into_tuple()
            .one(self.db)
            .await
    }

    pub async fn delete_for_date(&self, date: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::ServiceRoster::delete_many()
            .filter(entity::service_roster::Column::ServiceDate.eq(date))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Materializes a week's template rows as the roster for `date`.
    pub async fn copy_from_templates(
        &self,
        date: NaiveDate,
        templates: &[entity::roster_template::Model],
    ) -> Result<u64, DbErr> {
        for template in templates {
            let row = entity::service_roster::ActiveModel {
                service_date: ActiveValue::Set(date),
                role_id: ActiveValue::Set(template.role_id),
                assigned_person: ActiveValue::Set(template.person_name.clone()),
                source_week_number: ActiveValue::Set(template.week_number),
                is_alternative: ActiveValue::Set(template.is_alternative),
                user_uid: ActiveValue::Set(template.user_uid.clone()),
                ..Default::default()
            };
            row.insert(self.db).await?;
        }

        Ok(templates.len() as u64)
    }

    /// Roster rows for a service date joined with their role, in
    /// role-display order.
    pub async fn for_date(
        &self,
        date: NaiveDate,
    ) -> Result<
        Vec<(
            entity::service_roster::Model,
            Option<entity::roster_role::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::ServiceRoster::find()
            .find_also_related(entity::roster_role::Entity)
            .filter(entity::service_roster::Column::ServiceDate.eq(date))
            .order_by_asc(entity::roster_role::Column::DisplayOrder)
            .all(self.db)
            .await
    }
}
