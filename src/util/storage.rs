//! Object key generation for client-side uploads.

use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::Rng;

const SUFFIX_LEN: usize = 8;

/// Builds a collision-resistant bucket key for an uploaded file, keeping
/// the original extension.
pub fn object_key(filename: &str) -> String {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.len() <= 8)
        .unwrap_or("bin");

    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect();

    format!("uploads/{}-{}.{}", Utc::now().timestamp_millis(), suffix, extension)
}

pub fn public_url(bucket_url: &str, key: &str) -> String {
    format!("{}/{}", bucket_url.trim_end_matches('/'), key)
}
