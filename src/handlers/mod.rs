//! HTTP handlers for the wellness API
//!
//! Handlers own no state beyond [`AppState`]. Each one parses its path and
//! query parameters, makes a single storage call and maps the outcome onto
//! an HTTP response; every failure is an [`ApiError`].
//!
//! [`ApiError`]: crate::core::ApiError

pub mod activities;
pub mod auth;
pub mod catalog;
pub mod dimensions;
pub mod goals;
pub mod research;
pub mod scores;
pub mod settings;
pub mod users;
pub mod wallet;

use crate::core::WellnessStorage;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn WellnessStorage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn WellnessStorage>) -> Self {
        Self { storage }
    }
}
