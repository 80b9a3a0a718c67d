//! Assistant intent layer.
//!
//! Translates high-level intents (add a contact, change a phone, show
//! everything) into directory and record operations, and formats the
//! human-readable reply strings. Errors come back as [`AssistantError`];
//! the command loop decides which ones are printable and which are fatal.

use crate::directory::Directory;
use crate::error::{AssistantError, AssistantResult};
use crate::models::{Record, RecordError};
use std::fmt::Write as _;
use std::num::NonZeroUsize;
use tracing::debug;

/// The assistant: the directory plus presentation concerns.
pub struct Assistant {
    directory: Directory,
    chunk_size: NonZeroUsize,
}

impl Assistant {
    /// Create an assistant over a loaded directory. `chunk_size` is the
    /// page size used internally when listing all contacts.
    pub fn new(directory: Directory, chunk_size: NonZeroUsize) -> Self {
        Self {
            directory,
            chunk_size,
        }
    }

    /// The underlying directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Greeting.
    pub fn hello(&self) -> String {
        "How can I help you?".to_string()
    }

    /// Add a phone to the contact named `name`, creating the record if it
    /// does not exist yet. Name is the uniqueness key: adding twice under
    /// the same name appends a second phone to the same record.
    ///
    /// The birthday argument only applies when the record is created; an
    /// existing record keeps its birthday.
    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> AssistantResult<String> {
        match self.directory.get_mut(name) {
            Some(record) => {
                record.add_phone(phone)?;
                self.directory.save()?;
            }
            None => {
                let mut record = Record::new(name, birthday)?;
                record.add_phone(phone)?;
                self.directory.add_record(record)?;
            }
        }
        debug!(name = %name, phone = %phone, "contact added");
        Ok(format!(
            "Contact {} added with phone number {}.",
            name, phone
        ))
    }

    /// Replace the contact's *first* phone with `new_phone`.
    ///
    /// Picking a specific phone would need a selector argument the command
    /// surface does not provide, so the first one is always the target.
    pub fn change_contact(&mut self, name: &str, new_phone: &str) -> AssistantResult<String> {
        let record = self
            .directory
            .get_mut(name)
            .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))?;

        let old = record
            .phones()
            .first()
            .map(|p| p.as_str().to_string())
            .ok_or_else(|| AssistantError::NoPhones(name.to_string()))?;

        record.edit_phone(&old, new_phone).map_err(|e| match e {
            RecordError::Validation(e) => AssistantError::Validation(e),
            RecordError::PhoneNotFound(number) => AssistantError::PhoneNotFound(number),
        })?;
        self.directory.save()?;

        debug!(name = %name, phone = %new_phone, "contact changed");
        Ok(format!(
            "Phone number for {} updated: {}.",
            name, new_phone
        ))
    }

    /// Show the contact's first phone.
    pub fn phone_contact(&self, name: &str) -> AssistantResult<String> {
        let record = self
            .directory
            .get(name)
            .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))?;

        let phone = record
            .phones()
            .first()
            .ok_or_else(|| AssistantError::NoPhones(name.to_string()))?;

        Ok(format!("Phone number for {}: {}.", name, phone))
    }

    /// List every contact, paginated internally, printed flat.
    pub fn show_all_contacts(&self) -> String {
        if self.directory.is_empty() {
            return "No contacts saved.".to_string();
        }

        let mut out = String::from("All saved contacts:");
        for chunk in self.directory.iterate(self.chunk_size) {
            for record in chunk {
                out.push('\n');
                Self::format_record(&mut out, record);
            }
        }
        out
    }

    /// List contacts matching `query` by name substring (case-insensitive)
    /// or phone substring.
    pub fn search_contacts(&self, query: &str) -> String {
        let found = self.directory.search(query);
        if found.is_empty() {
            return "No matching contacts found.".to_string();
        }

        let mut out = String::from("Found contacts:");
        for record in found {
            out.push('\n');
            Self::format_record(&mut out, record);
        }
        out
    }

    /// One display line per record: name, first phone, optional birthday.
    fn format_record(out: &mut String, record: &Record) {
        let phone = record
            .phones()
            .first()
            .map(|p| p.as_str())
            .unwrap_or("(no phone)");
        let _ = write!(out, "{}: {}", record.name(), phone);
        if let Some(birthday) = record.birthday() {
            let _ = write!(out, ", Birthday: {}", birthday);
        }
    }
}
