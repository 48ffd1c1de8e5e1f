// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::completion::{GroqClient, TextGenerator};

pub type SharedState = Arc<AppState>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Live,
    Demo,
}

/// Request-independent state. `generator` is `None` in demo mode.
#[derive(Clone)]
pub struct AppState {
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        match GroqClient::from_config(config) {
            Some(client) => Self::with_generator(client),
            None => Self::demo(),
        }
    }

    pub fn demo() -> Self {
        Self { generator: None }
    }

    pub fn with_generator(generator: impl TextGenerator + 'static) -> Self {
        Self {
            generator: Some(Arc::new(generator)),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.generator.is_some() {
            Mode::Live
        } else {
            Mode::Demo
        }
    }
}
