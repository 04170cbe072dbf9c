//! AddressBook: the ordered collection of contact records.

use crate::error::{BookError, BookResult};
use crate::models::birthdays::{upcoming_birthdays, WeeklyBirthdays};
use crate::models::Record;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Contact records keyed by name, kept in insertion order.
///
/// Names are unique: `add_record` refuses a second record with the same
/// name, and existing records are changed in place through `find_mut`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::AlreadyExists` if a record with that name is present.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        if self.find(record.name().as_str()).is_some() {
            return Err(BookError::AlreadyExists(record.name().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Exact-match lookup by name for in-place updates.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record with this name, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.records.iter().position(|r| r.name().as_str() == name)?;
        Some(self.records.remove(index))
    }

    /// Number of records.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// One `describe()` line per record, in insertion order.
    pub fn list_all(&self) -> String {
        self.records
            .iter()
            .map(Record::describe)
            .collect::<Vec<_>>()
            .join("\n")
            .trim_end()
            .to_string()
    }

    /// Birthdays to congratulate this week, relative to the local date.
    pub fn birthdays_this_week(&self) -> WeeklyBirthdays {
        self.birthdays_for_week_of(Local::now().date_naive())
    }

    /// Birthdays to congratulate in the week starting at `today`.
    pub fn birthdays_for_week_of(&self, today: NaiveDate) -> WeeklyBirthdays {
        upcoming_birthdays(&self.records, today)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Record>> for AddressBook {
    type Error = String;

    fn try_from(records: Vec<Record>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name().as_str()) {
                return Err(format!("duplicate contact name: {}", record.name()));
            }
        }
        Ok(Self { records })
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}
