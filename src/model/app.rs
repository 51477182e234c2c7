use sea_orm::DatabaseConnection;

use crate::service::pdf::RendererClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub renderer: RendererClient,
    pub storage_bucket_url: String,
}
