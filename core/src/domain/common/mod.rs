use std::{num::NonZeroUsize, path::PathBuf};

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct SafeCheckConfig {
    pub llm: LLMConfig,
    pub storage: StorageConfig,
    pub context: ContextConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub timeout_secs: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            max_tokens: 1500,
            temperature: None,
            timeout_secs: 60,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StorageConfig {
    /// File backing the key-value store. `None` keeps everything in memory.
    pub data_file: Option<PathBuf>,
    /// Number of newest history entries to keep.
    pub history_limit: Option<NonZeroUsize>,
}

#[derive(Clone, Debug, Default)]
pub struct ContextConfig {
    pub expand_allergen_synonyms: bool,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

/// Light HSL color used by clients to tell profiles apart.
pub fn generate_pastel_color() -> String {
    let hue = rand::thread_rng().gen_range(0..360);
    format!("hsl({}, 60%, 80%)", hue)
}
