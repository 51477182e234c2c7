pub use super::activity_log::Entity as ActivityLog;
pub use super::blog::Entity as Blog;
pub use super::blog_type::Entity as BlogType;
pub use super::book::Entity as Book;
pub use super::book_order::Entity as BookOrder;
pub use super::news::Entity as News;
pub use super::roster_role::Entity as RosterRole;
pub use super::roster_template::Entity as RosterTemplate;
pub use super::service_roster::Entity as ServiceRoster;
pub use super::special_date::Entity as SpecialDate;
pub use super::user::Entity as User;
pub use super::video::Entity as Video;
