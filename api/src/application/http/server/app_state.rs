use std::sync::Arc;

use safecheck_core::application::SafeCheckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SafeCheckService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SafeCheckService) -> Self {
        Self { args, service }
    }
}
