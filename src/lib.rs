//! # Wellness API
//!
//! REST backend for a personal wellness tracker. Users rate themselves across
//! six wellness dimensions, log activities, set goals, browse a product
//! catalog and research library, link a blockchain wallet and manage their
//! privacy and notification preferences.
//!
//! ## Layout
//!
//! - [`entities`]: stored records, insert records and their schemas
//! - [`core`]: error type, validation, extractors and the storage trait
//! - [`storage`]: in-memory storage and the demo seed
//! - [`handlers`]: one handler per route
//! - [`server`]: router and [`ServerBuilder`](server::ServerBuilder)
//! - [`config`], [`observability`]: process setup
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wellness_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_storage(InMemoryStorage::new())
//!         .serve("127.0.0.1:5000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod handlers;
pub mod observability;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::config::{CorsConfig, ServerConfig};
    pub use crate::core::{
        ApiError, FieldValidationError, InsertSchema, ResultExt, Validated, ValidationError,
        WellnessStorage,
    };
    pub use crate::entities::*;
    pub use crate::handlers::AppState;
    pub use crate::server::ServerBuilder;
    pub use crate::storage::{InMemoryStorage, StorageError, seed_demo_data};
}
