//! Router state shared by every resource handler

use std::sync::Arc;

use crate::application::LogService;
use crate::domain::RepositoryProvider;

#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub logs: Arc<LogService>,
}

impl AppState {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        let logs = Arc::new(LogService::new(repos.clone()));
        Self { repos, logs }
    }
}
