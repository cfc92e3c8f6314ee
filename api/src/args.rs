use std::{num::NonZeroUsize, path::PathBuf};

use clap::{ArgAction, Args as ClapArgs, Parser};
use safecheck_core::domain::common::{ContextConfig, LLMConfig, SafeCheckConfig, StorageConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "safecheck-api", version, about = "SafeCheck product safety API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub openai: OpenAIArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub context: ContextArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics_enabled: bool,

    /// Analysis requests allowed per client address and minute; 0 disables
    /// the limit.
    #[arg(long, env = "RATE_LIMIT_PER_MINUTE", default_value_t = 10)]
    pub rate_limit_per_minute: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct OpenAIArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub model: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub base_url: String,

    #[arg(long = "openai-max-tokens", env = "OPENAI_MAX_TOKENS", default_value_t = 1500)]
    pub max_tokens: u32,

    #[arg(long = "openai-temperature", env = "OPENAI_TEMPERATURE")]
    pub temperature: Option<f32>,

    #[arg(long = "openai-timeout-secs", env = "OPENAI_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, ClapArgs)]
pub struct StorageArgs {
    /// JSON file holding profiles, families, history and favorites.
    /// Data is kept in memory when unset.
    #[arg(long, env = "DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Newest history entries to keep; must be at least 1.
    #[arg(long, env = "HISTORY_LIMIT")]
    pub history_limit: Option<NonZeroUsize>,
}

#[derive(Debug, Clone, Default, ClapArgs)]
pub struct ContextArgs {
    #[arg(long, env = "EXPAND_ALLERGEN_SYNONYMS", default_value_t = false, action = ArgAction::Set)]
    pub expand_allergen_synonyms: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            server: ServerArgs {
                host: "0.0.0.0".to_string(),
                port: 3333,
                root_path: String::new(),
                allowed_origins: vec!["http://localhost:3000".to_string()],
                metrics_enabled: true,
                rate_limit_per_minute: 10,
            },
            openai: OpenAIArgs::from(LLMConfig::default()),
            storage: StorageArgs::default(),
            context: ContextArgs::default(),
            log: LogArgs {
                filter: "info".to_string(),
                json: false,
            },
        }
    }
}

impl From<LLMConfig> for OpenAIArgs {
    fn from(config: LLMConfig) -> Self {
        Self {
            api_key: config.api_key,
            model: config.model,
            base_url: config.base_url,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout_secs: config.timeout_secs,
        }
    }
}

impl From<Args> for SafeCheckConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                api_key: args.openai.api_key,
                model: args.openai.model,
                base_url: args.openai.base_url,
                max_tokens: args.openai.max_tokens,
                temperature: args.openai.temperature,
                timeout_secs: args.openai.timeout_secs,
            },
            storage: StorageConfig {
                data_file: args.storage.data_file,
                history_limit: args.storage.history_limit,
            },
            context: ContextConfig {
                expand_allergen_synonyms: args.context.expand_allergen_synonyms,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_into_config() {
        let args = Args::parse_from([
            "safecheck-api",
            "--port",
            "8080",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--openai-model",
            "gpt-4o-mini",
            "--history-limit",
            "50",
            "--expand-allergen-synonyms",
            "true",
        ]);

        assert_eq!(args.server.port, 8080);
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );

        let config = SafeCheckConfig::from(args);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.storage.history_limit, NonZeroUsize::new(50));
        assert!(config.context.expand_allergen_synonyms);
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        let result = Args::try_parse_from(["safecheck-api", "--history-limit", "0"]);

        assert!(result.is_err());
    }
}
