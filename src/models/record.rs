//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, an ordered list of phones and an optional birthday.
///
/// The phone list is private; it only changes through the methods below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Name the record is filed under (immutable once created)
    name: Name,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<Phone>,

    /// Birthday, absent until set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for an empty or whitespace-only name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. Duplicates are accepted.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Remove the first phone equal to `raw`.
    ///
    /// Invalid or absent numbers leave the list untouched. Returns whether a
    /// phone was removed.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        let Ok(phone) = Phone::new(raw) else {
            return false;
        };

        match self.phones.iter().position(|p| *p == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old_raw` with `new_raw`, keeping its position.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> BookResult<()> {
        let old = Phone::new(old_raw)?;
        let new = Phone::new(new_raw)?;

        let index = self
            .phones
            .iter()
            .position(|p| *p == old)
            .ok_or_else(|| self.phone_not_found(old_raw))?;
        self.phones[index] = new;
        Ok(())
    }

    /// Look up a phone by value.
    pub fn find_phone(&self, raw: &str) -> BookResult<&Phone> {
        let phone = Phone::new(raw)?;
        self.phones
            .iter()
            .find(|p| **p == phone)
            .ok_or_else(|| self.phone_not_found(raw))
    }

    /// Set or overwrite the birthday.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// `Contact name: {name}, phones: {phone1}; {phone2}; ...`
    pub fn describe(&self) -> String {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        format!("Contact name: {}, phones: {}", self.name, phones)
    }

    fn phone_not_found(&self, raw: &str) -> BookError {
        BookError::PhoneNotFound {
            name: self.name.to_string(),
            phone: raw.to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
