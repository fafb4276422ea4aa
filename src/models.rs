//! Frontend Models
//!
//! Data structures matching the cataas API payloads.

use serde::{Deserialize, Serialize};

use crate::api::API_BASE;

/// One cat record from the image service. Everything beyond `id` is
/// opaque to the app; `tags` is kept for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatImage {
    /// Unique within a batch; older API versions spell it `_id`
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatImage {
    /// URL of the backing image resource
    pub fn url(&self) -> String {
        format!("{}/cat/{}", API_BASE, self.id)
    }
}
