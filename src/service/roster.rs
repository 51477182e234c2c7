use std::collections::BTreeMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::activity::NewActivity,
    data::roster::{
        RosterRoleRepository, RosterTemplateRepository, ServiceRosterRepository, TemplateEntry,
    },
    error::Error,
    model::roster::{
        CreateRosterRoleRequest, GenerateRosterRequest, RosterStatusDto, TemplateDto,
        TemplateEntryRequest, UpdateTemplateRequest,
    },
    service::activity,
};

pub async fn list_roles(db: &DatabaseConnection) -> Result<Vec<entity::roster_role::Model>, Error> {
    Ok(RosterRoleRepository::new(db).list().await?)
}

pub async fn create_role(
    db: &DatabaseConnection,
    request: CreateRosterRoleRequest,
    actor: Option<&str>,
) -> Result<entity::roster_role::Model, Error> {
    let name = request.role_name.trim();
    if name.is_empty() {
        return Err(Error::Validation("role_name is required".to_string()));
    }

    let role = RosterRoleRepository::new(db).create(name).await?;

    if let Some(actor) = actor.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor.to_string(),
                action_type: "POST".to_string(),
                module: "ROSTER".to_string(),
                details: format!("Added Roster Role: {}", role.role_name),
                record_id: Some(role.id.to_string()),
            },
        )
        .await;
    }

    Ok(role)
}

pub async fn list_templates(db: &DatabaseConnection) -> Result<Vec<TemplateDto>, Error> {
    let rows = RosterTemplateRepository::new(db).list_with_roles().await?;

    let templates = rows
        .into_iter()
        .map(|(template, role)| TemplateDto {
            id: template.id,
            week_number: template.week_number,
            person_name: template.person_name,
            is_alternative: template.is_alternative,
            user_uid: template.user_uid,
            role_id: template.role_id,
            role_name: role.map(|role| role.role_name).unwrap_or_default(),
        })
        .collect();

    Ok(templates)
}

/// Replaces the rotation templates week by week, atomically.
pub async fn save_templates(
    db: &DatabaseConnection,
    entries: Vec<TemplateEntryRequest>,
    actor: Option<&str>,
) -> Result<(), Error> {
    if entries.is_empty() {
        return Err(Error::Validation("No template entries given".to_string()));
    }
    if entries.iter().any(|entry| entry.person_name.is_empty()) {
        return Err(Error::Validation("person_name is required".to_string()));
    }

    let mut weeks: BTreeMap<i32, Vec<TemplateEntry>> = BTreeMap::new();
    for entry in entries {
        weeks.entry(entry.week_number).or_default().push(TemplateEntry {
            role_id: entry.role_id,
            person_name: entry.person_name,
            is_alternative: entry.is_alternative,
            user_uid: entry.user_uid,
        });
    }
    let week_numbers: Vec<i32> = weeks.keys().copied().collect();

    let txn = db.begin().await?;
    let template_repository = RosterTemplateRepository::new(&txn);
    for (week_number, entries) in weeks {
        template_repository.replace_week(week_number, entries).await?;
    }
    txn.commit().await?;

    if let Some(actor) = actor.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor.to_string(),
                action_type: "UPDATE".to_string(),
                module: "ROSTER".to_string(),
                details: format!("Saved roster templates for weeks {week_numbers:?}"),
                record_id: None,
            },
        )
        .await;
    }

    Ok(())
}

pub async fn update_template(
    db: &DatabaseConnection,
    id: i32,
    request: UpdateTemplateRequest,
    actor: Option<&str>,
) -> Result<entity::roster_template::Model, Error> {
    if request.person_name.is_empty() {
        return Err(Error::Validation("person_name is required".to_string()));
    }

    let template = RosterTemplateRepository::new(db)
        .update_entry(
            id,
            request.person_name,
            request.is_alternative,
            request.user_uid,
        )
        .await?
        .ok_or_else(|| Error::NotFound("Template entry not found".to_string()))?;

    if let Some(actor) = actor.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor.to_string(),
                action_type: "UPDATE".to_string(),
                module: "ROSTER".to_string(),
                details: format!("Updated roster template entry ID: {id}"),
                record_id: Some(id.to_string()),
            },
        )
        .await;
    }

    Ok(template)
}

/// Marker for the most recently generated live roster.
pub async fn status(db: &DatabaseConnection) -> Result<Option<RosterStatusDto>, Error> {
    let service_repository = ServiceRosterRepository::new(db);

    let Some(date) = service_repository.latest_date().await? else {
        return Ok(None);
    };

    let rows = service_repository.for_date(date).await?;
    let source_week_number = rows
        .first()
        .map(|(row, _)| row.source_week_number)
        .unwrap_or_default();

    Ok(Some(RosterStatusDto {
        service_date: date,
        source_week_number,
    }))
}

/// Materializes a week template as the live roster for a service date.
///
/// Refuses to overwrite an existing roster unless asked to; the delete
/// and copy run inside one transaction so a failure never leaves the
/// date half-generated.
pub async fn generate(
    db: &DatabaseConnection,
    request: GenerateRosterRequest,
) -> Result<u64, Error> {
    let txn = db.begin().await?;

    let template_repository = RosterTemplateRepository::new(&txn);
    let templates = template_repository
        .for_week(request.week_template_num)
        .await?;
    if templates.is_empty() {
        return Err(Error::NotFound(format!(
            "No template defined for week {}",
            request.week_template_num
        )));
    }

    let service_repository = ServiceRosterRepository::new(&txn);
    if service_repository.exists_for_date(request.date).await? {
        if !request.overwrite {
            return Err(Error::Conflict(
                "A roster already exists for this date".to_string(),
            ));
        }
        service_repository.delete_for_date(request.date).await?;
    }

    let copied = service_repository
        .copy_from_templates(request.date, &templates)
        .await?;

    txn.commit().await?;

    if let Some(actor) = request.requester_uid.filter(|uid| !uid.is_empty()) {
        activity::record(
            db,
            NewActivity {
                user_uid: actor,
                action_type: "GENERATE".to_string(),
                module: "ROSTER".to_string(),
                details: format!(
                    "Generated roster for {} from week {}",
                    request.date, request.week_template_num
                ),
                record_id: None,
            },
        )
        .await;
    }

    Ok(copied)
}
