//! Command dispatcher.
//!
//! Maps a command name and its arguments onto address book operations and
//! turns the outcome into the message shown to the user.

use crate::domain::Phone;
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;
use std::str::FromStr;

/// Inputs that end the session. Compared against the whole lowercased line.
pub const EXIT_COMMANDS: [&str; 5] = ["exit", "q", "quit", "close", "good bye"];

/// Commands understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    RemovePhone,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 11] = [
        Command::Hello,
        Command::Help,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Delete,
        Command::RemovePhone,
    ];

    /// The name typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Delete => "delete",
            Command::RemovePhone => "remove-phone",
        }
    }

    /// Usage line shown by `help` and in arity errors.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Add => "add <name> <phone>",
            Command::Change => "change <name> <old phone> <new phone>",
            Command::Phone => "phone <name>",
            Command::All => "all",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays",
            Command::Delete => "delete <name>",
            Command::RemovePhone => "remove-phone <name> <phone>",
        }
    }

    /// Exact number of arguments the command takes.
    pub fn arity(self) -> usize {
        match self {
            Command::Hello | Command::Help | Command::All | Command::Birthdays => 0,
            Command::Phone | Command::ShowBirthday | Command::Delete => 1,
            Command::Add | Command::AddBirthday | Command::RemovePhone => 2,
            Command::Change => 3,
        }
    }

    fn check_arity(self, args: &[&str]) -> BookResult<()> {
        if args.len() != self.arity() {
            return Err(BookError::BadArity {
                command: self.name().to_string(),
                usage: self.usage().to_string(),
                expected: self.arity(),
                got: args.len(),
            });
        }
        Ok(())
    }
}

impl FromStr for Command {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| BookError::UnknownCommand(s.to_string()))
    }
}

/// True if `line` ends the session.
pub fn is_exit_command(line: &str) -> bool {
    let normalized = line
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    EXIT_COMMANDS.contains(&normalized.as_str())
}

/// Run `command` with `args` against `book`.
///
/// `today` anchors the `birthdays` week. Every failure comes back as a
/// `BookError`; none of them leave the book half-updated.
pub fn dispatch(
    book: &mut AddressBook,
    command: &str,
    args: &[&str],
    today: NaiveDate,
) -> BookResult<String> {
    let command: Command = command.parse()?;
    command.check_arity(args)?;

    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Help => Ok(help()),
        Command::Add => add_contact(book, args[0], args[1]),
        Command::Change => {
            let record = find_mut(book, args[0])?;
            record.edit_phone(args[1], args[2])?;
            Ok(format!("{}'s contact was updated", args[0]))
        }
        Command::Phone => Ok(find(book, args[0])?.describe()),
        Command::All => {
            if book.is_empty() {
                return Ok("You have no saved contacts yet".to_string());
            }
            Ok(book.list_all())
        }
        Command::AddBirthday => {
            let record = find_mut(book, args[0])?;
            record.add_birthday(args[1])?;
            Ok(format!("{}'s birthday was set to {}", args[0], args[1]))
        }
        Command::ShowBirthday => {
            let record = find(book, args[0])?;
            let birthday = record
                .birthday()
                .ok_or_else(|| BookError::BirthdayNotSet(args[0].to_string()))?;
            Ok(format!("{}'s birthday is {}", args[0], birthday))
        }
        Command::Birthdays => {
            let week = book.birthdays_for_week_of(today);
            if week.is_empty() {
                return Ok("No birthdays in the upcoming week".to_string());
            }
            Ok(week.to_string())
        }
        Command::Delete => {
            book.delete(args[0])
                .ok_or_else(|| BookError::ContactNotFound(args[0].to_string()))?;
            Ok(format!("{} was deleted from your contacts", args[0]))
        }
        Command::RemovePhone => {
            Phone::new(args[1])?;
            let record = find_mut(book, args[0])?;
            if !record.remove_phone(args[1]) {
                return Err(BookError::PhoneNotFound {
                    name: args[0].to_string(),
                    phone: args[1].to_string(),
                });
            }
            Ok(format!("{} was removed from {}'s phones", args[1], args[0]))
        }
    }
}

/// `add` creates the contact, or appends the phone when the name is taken.
fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<String> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(format!("{} was added to {}'s phones", phone, name));
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record)?;
    Ok(format!("{} was added to your contacts", name))
}

fn find<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

fn help() -> String {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(Command::ALL.iter().map(|c| format!("  {}", c.usage())));
    lines.push(format!("  {}", EXIT_COMMANDS.join(" | ")));
    lines.join("\n")
}
