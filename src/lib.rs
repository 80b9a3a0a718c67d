//! Contact Assistant - a personal contact-management assistant with a
//! line-oriented command interface and on-disk persistence.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record and its phone operations
//! - **storage**: The persistence seam and the JSON file store
//! - **directory**: The keyed record collection that owns persistence
//! - **assistant**: Intent layer translating commands into directory operations
//! - **repl**: Line tokenization and command dispatch
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod assistant;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use assistant::Assistant;
pub use config::Config;
pub use directory::Directory;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{AssistantError, ConfigError, StorageError};
pub use models::{Record, RecordError};
pub use repl::{Dispatch, Repl};
pub use storage::{ContactStore, JsonFileStore};
