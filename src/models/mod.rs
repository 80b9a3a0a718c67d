//! Data model for the address book.

pub mod record;

pub use record::{Record, RecordError};
