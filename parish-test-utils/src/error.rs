use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Application error surfaced during a test
    #[error("{0}")]
    App(String),
}
