use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{analysis::entities::AnalysisReport, common::generate_timestamp};

/// One completed analysis. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub id: Uuid,
    /// Remote URL or `data:` URI of the analyzed image.
    pub image_reference: String,
    pub timestamp: DateTime<Utc>,
    pub report: AnalysisReport,
}

impl HistoryEntry {
    pub fn new(image_reference: String, report: AnalysisReport) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            image_reference,
            timestamp: now,
            report,
        }
    }
}
