//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from record-level phone operations.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A phone or birthday value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The given number is not present on this record
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),
}

/// A contact: a name, an ordered list of phone numbers, and an optional
/// birthday.
///
/// The name is the record's identity and never changes. Phones keep
/// insertion order and may contain duplicates; all phone operations work on
/// the first match in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if a birthday is given
    /// and does not parse.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let birthday = birthday.map(Birthday::new).transpose()?;
        Ok(Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday,
        })
    }

    /// The record's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The record's phones, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The record's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or replace the birthday.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Validate and append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// Find the first phone equal to `number`, scanning in insertion order.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// The new value is validated before anything changes, so a failed edit
    /// leaves the phone list untouched.
    ///
    /// # Errors
    ///
    /// `RecordError::Validation` if `new` is not a valid phone number;
    /// `RecordError::PhoneNotFound` if no phone equals `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), RecordError> {
        let replacement = PhoneNumber::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(())
            }
            None => Err(RecordError::PhoneNotFound(old.to_string())),
        }
    }

    /// Remove the first phone equal to `number`.
    ///
    /// # Errors
    ///
    /// `RecordError::PhoneNotFound` if no phone equals `number`.
    pub fn remove_phone(&mut self, number: &str) -> Result<(), RecordError> {
        match self.phones.iter().position(|p| p.as_str() == number) {
            Some(idx) => {
                self.phones.remove(idx);
                Ok(())
            }
            None => Err(RecordError::PhoneNotFound(number.to_string())),
        }
    }

    /// Days from today to this contact's next birthday.
    ///
    /// `None` when no birthday is set. Computed against the current local
    /// date on every call; the result changes across days and is 0 on the
    /// birthday itself.
    pub fn days_until_birthday(&self) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        Some(birthday.days_until_next(Local::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("alice", None).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("alice", Some("1990-06-15")).unwrap();
        assert_eq!(record.name().as_str(), "alice");
        assert!(record.phones().is_empty());
        assert_eq!(record.birthday().unwrap().as_str(), "1990-06-15");
    }

    #[test]
    fn test_record_new_invalid_birthday() {
        assert!(Record::new("alice", Some("15-06-1990")).is_err());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let record = record_with_phones(&["5551234567", "5559876543", "5551234567"]);
        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["5551234567", "5559876543", "5551234567"]);
    }

    #[test]
    fn test_add_phone_invalid() {
        let mut record = Record::new("alice", None).unwrap();
        assert!(record.add_phone("123").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_find_phone() {
        let record = record_with_phones(&["5551234567", "5559876543"]);
        assert_eq!(
            record.find_phone("5559876543").map(|p| p.as_str()),
            Some("5559876543")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_edit_phone_preserves_position() {
        let mut record = record_with_phones(&["5551234567", "5559876543"]);
        record.edit_phone("5551234567", "5550000000").unwrap();

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["5550000000", "5559876543"]);
    }

    #[test]
    fn test_edit_phone_missing_old_leaves_record_unchanged() {
        let mut record = record_with_phones(&["5551234567", "5559876543"]);
        let err = record.edit_phone("0000000000", "5550000000").unwrap_err();
        assert!(matches!(err, RecordError::PhoneNotFound(_)));

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["5551234567", "5559876543"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_record_unchanged() {
        let mut record = record_with_phones(&["5551234567"]);
        let err = record.edit_phone("5551234567", "bad").unwrap_err();
        assert!(matches!(err, RecordError::Validation(_)));
        assert_eq!(record.phones()[0].as_str(), "5551234567");
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut record = record_with_phones(&["5551234567", "5559876543", "5551234567"]);
        record.remove_phone("5551234567").unwrap();

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["5559876543", "5551234567"]);
    }

    #[test]
    fn test_remove_phone_missing() {
        let mut record = record_with_phones(&["5551234567"]);
        assert!(matches!(
            record.remove_phone("0000000000"),
            Err(RecordError::PhoneNotFound(_))
        ));
    }

    #[test]
    fn test_set_birthday_revalidates() {
        let mut record = Record::new("alice", None).unwrap();
        record.set_birthday("1990-06-15").unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "1990-06-15");

        assert!(record.set_birthday("junk").is_err());
        // Failed mutation leaves the previous value in place.
        assert_eq!(record.birthday().unwrap().as_str(), "1990-06-15");
    }

    #[test]
    fn test_days_until_birthday_none_without_birthday() {
        let record = Record::new("alice", None).unwrap();
        assert!(record.days_until_birthday().is_none());
    }

    #[test]
    fn test_days_until_birthday_never_negative() {
        let record = Record::new("alice", Some("1990-06-15")).unwrap();
        let days = record.days_until_birthday().unwrap();
        assert!((0..=366).contains(&days));
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut record = Record::new("alice", Some("1990-06-15")).unwrap();
        record.add_phone("5551234567").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialization_revalidates_phones() {
        let json = r#"{"name":"alice","phones":["123"],"birthday":null}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
