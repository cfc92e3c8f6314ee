use base64::{Engine, engine::general_purpose::STANDARD};
use url::Url;

use crate::domain::common::entities::app_errors::CoreError;

/// Image handed to the provider: a remote URL or uploaded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    Url(String),
    Inline { mime_type: String, data: Vec<u8> },
}

impl ImageReference {
    /// Accepts `http(s)` URLs and `data:` URIs.
    pub fn from_url(raw: &str) -> Result<Self, CoreError> {
        let url = Url::parse(raw.trim())
            .map_err(|e| CoreError::Validation(format!("invalid image URL: {}", e)))?;

        match url.scheme() {
            "http" | "https" | "data" => Ok(Self::Url(url.to_string())),
            scheme => Err(CoreError::Validation(format!(
                "unsupported image URL scheme: {}",
                scheme
            ))),
        }
    }

    pub fn inline(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self::Inline {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// URL as sent to the provider and stored in history; inline images
    /// become a base64 data URI.
    pub fn to_request_url(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Inline { mime_type, data } => {
                format!("data:{};base64,{}", mime_type, STANDARD.encode(data))
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Url(url) => url.is_empty(),
            Self::Inline { data, .. } => data.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalyzeProductInput {
    pub image: Option<ImageReference>,
    /// Per-request provider key, overriding the configured one.
    pub credential: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetHistoryFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}
