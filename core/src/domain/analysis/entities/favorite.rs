use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::analysis::entities::{HistoryEntry, SafetyRating};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    /// Id of the history entry the favorite was taken from.
    pub id: Uuid,
    pub product_name: String,
    pub safety_rating: SafetyRating,
    pub timestamp: DateTime<Utc>,
}

impl Favorite {
    pub fn from_history_entry(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id,
            product_name: entry.report.product_name.clone(),
            safety_rating: entry.report.safety_rating,
            timestamp: Utc::now(),
        }
    }
}
