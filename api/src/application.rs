pub mod credential;
pub mod http;
pub mod logger;
pub mod rate_limit;
