pub use sea_orm_migration::prelude::*;

mod m20250801_000001_user;
mod m20250801_000002_blog_type;
mod m20250801_000003_blog;
mod m20250801_000004_video;
mod m20250801_000005_book;
mod m20250801_000006_book_order;
mod m20250801_000007_news;
mod m20250801_000008_special_date;
mod m20250801_000009_roster_role;
mod m20250801_000010_roster_template;
mod m20250801_000011_service_roster;
mod m20250801_000012_activity_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_user::Migration),
            Box::new(m20250801_000002_blog_type::Migration),
            Box::new(m20250801_000003_blog::Migration),
            Box::new(m20250801_000004_video::Migration),
            Box::new(m20250801_000005_book::Migration),
            Box::new(m20250801_000006_book_order::Migration),
            Box::new(m20250801_000007_news::Migration),
            Box::new(m20250801_000008_special_date::Migration),
            Box::new(m20250801_000009_roster_role::Migration),
            Box::new(m20250801_000010_roster_template::Migration),
            Box::new(m20250801_000011_service_roster::Migration),
            Box::new(m20250801_000012_activity_log::Migration),
        ]
    }
}
