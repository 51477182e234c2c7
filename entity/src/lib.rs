//! Database entities for the parish application.

pub mod activity_log;
pub mod blog;
pub mod blog_type;
pub mod book;
pub mod book_order;
pub mod news;
pub mod roster_role;
pub mod roster_template;
pub mod service_roster;
pub mod special_date;
pub mod user;
pub mod video;

pub mod sea_orm_active_enums;

pub mod prelude;
