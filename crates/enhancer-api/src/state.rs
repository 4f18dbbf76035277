//! Application state.
//!
//! Configuration is loaded once in `main` and injected here, so handlers
//! never reach into the process environment.

use crate::backend::BackendClient;
use enhancer_core::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let backend = BackendClient::new(&config)?;
        Ok(Self { config, backend })
    }
}
