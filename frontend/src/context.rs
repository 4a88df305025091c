use std::rc::Rc;

use shared::{AppConfig, Capability};
use yew::prelude::*;

use crate::services::{api::ApiService, page};

/// Per-page-load values handed down from the app root
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub capability: Capability,
    pub api: ApiService,
}

impl AppContext {
    /// Reads build configuration and the page privilege flag. Called once.
    pub fn load() -> Self {
        let config = AppConfig::from_build_env().unwrap_or_else(|e| {
            tracing::error!("Invalid build configuration, using defaults: {}", e);
            AppConfig::default()
        });
        let capability = page::read_capability(&config.privilege_attribute);
        let config = Rc::new(config);

        Self {
            api: ApiService::new(config.clone()),
            config,
            capability,
        }
    }
}

/// The context provided by the app root. Pages are only mounted below that
/// provider, so a missing context is a wiring bug.
#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext is provided by the App root")
}
