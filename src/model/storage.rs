use serde::{Deserialize, Serialize};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct StorageKeyRequest {
    pub filename: String,
}

/// Bucket key and resulting public URL for a client-side upload
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StorageKeyDto {
    pub key: String,
    pub public_url: String,
}
