//! Row edit flow: drafts and save-time validation.
//!
//! A row is either viewing or editing. `begin_edit` opens a draft seeded from
//! the record; saving validates the draft and either writes it back (row
//! returns to viewing) or rejects it (row stays editing, record untouched).

use crate::model::{Record, RecordId, Role, ValidationError};
use regex::Regex;
use std::sync::LazyLock;

/// Letters and whitespace only.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z\s]+$").expect("name pattern is a valid regex")
});

/// Dotted local part or quoted string, then a domain or bracketed IPv4.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is a valid regex")
});

/// Shortest accepted name, exclusive.
const MIN_NAME_LEN: usize = 2;

/// Check a name: letters and spaces only, longer than two characters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !NAME_PATTERN.is_match(name) || name.chars().count() <= MIN_NAME_LEN {
        return Err(ValidationError::InvalidName);
    }
    Ok(())
}

/// Check an email address against the address pattern.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate both fields, name first. Role needs no check.
pub fn validate(name: &str, email: &str) -> Result<(), ValidationError> {
    validate_name(name)?;
    validate_email(email)
}

// ===== EditDraft =====

/// Which form field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    /// Name text input.
    #[default]
    Name,
    /// Email text input.
    Email,
    /// Role choice control.
    Role,
}

impl EditField {
    /// Next field in tab order, wrapping.
    pub fn next(self) -> Self {
        match self {
            EditField::Name => EditField::Email,
            EditField::Email => EditField::Role,
            EditField::Role => EditField::Name,
        }
    }
}

/// In-progress values for a row in editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    id: RecordId,
    /// Draft name.
    pub name: String,
    /// Draft email.
    pub email: String,
    /// Draft role.
    pub role: Role,
    focus: EditField,
}

impl EditDraft {
    /// Seed a draft from the record's current values.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id().clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role,
            focus: EditField::Name,
        }
    }

    /// Record being edited.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Focused field.
    pub fn focus(&self) -> EditField {
        self.focus
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Type a character into the focused field.
    ///
    /// On the role control, any character flips the choice.
    pub fn push_char(&mut self, ch: char) {
        match self.focus {
            EditField::Name => self.name.push(ch),
            EditField::Email => self.email.push(ch),
            EditField::Role => self.role = self.role.toggle(),
        }
    }

    /// Delete the last character of the focused text field.
    pub fn backspace(&mut self) {
        match self.focus {
            EditField::Name => {
                self.name.pop();
            }
            EditField::Email => {
                self.email.pop();
            }
            EditField::Role => {}
        }
    }

    /// Validate the draft as it would be saved.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.name, &self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_of_one_letter_is_rejected() {
        assert_eq!(validate_name("A"), Err(ValidationError::InvalidName));
    }

    #[test]
    fn name_of_exactly_two_letters_is_rejected() {
        assert_eq!(validate_name("Al"), Err(ValidationError::InvalidName));
    }

    #[test]
    fn name_with_digits_or_punctuation_is_rejected() {
        assert_eq!(validate_name("Jane D0e"), Err(ValidationError::InvalidName));
        assert_eq!(validate_name("O'Brien"), Err(ValidationError::InvalidName));
        assert_eq!(validate_name(""), Err(ValidationError::InvalidName));
    }

    #[test]
    fn name_of_letters_and_spaces_is_accepted() {
        assert_eq!(validate_name("Jane Doe"), Ok(()));
        assert_eq!(validate_name("Bob"), Ok(()));
    }

    #[test]
    fn plain_addresses_are_accepted() {
        for email in [
            "jane@example.com",
            "first.last@sub.example.org",
            "x@mailinator.co",
            "\"odd local\"@example.com",
            "ops@[192.168.0.1]",
        ] {
            assert_eq!(validate_email(email), Ok(()), "{email} should pass");
        }
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        for email in [
            "not-an-email",
            "jane@",
            "@example.com",
            "jane@example",
            "jane@example.c",
            "ja ne@example.com",
            "jane..doe@example.com",
            "jane@exa_mple.com",
        ] {
            assert_eq!(
                validate_email(email),
                Err(ValidationError::InvalidEmail),
                "{email} should fail"
            );
        }
    }

    #[test]
    fn validate_reports_name_before_email() {
        assert_eq!(validate("A", "not-an-email"), Err(ValidationError::InvalidName));
        assert_eq!(
            validate("Jane Doe", "not-an-email"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate("Jane Doe", "jane@example.com"), Ok(()));
    }

    #[test]
    fn draft_types_into_focused_field() {
        let record = Record::new(RecordId::new("1").unwrap(), "Ann", "ann@x.io", Role::Member);
        let mut draft = EditDraft::from_record(&record);
        draft.push_char('e');
        assert_eq!(draft.name, "Anne");

        draft.focus_next();
        draft.backspace();
        draft.backspace();
        draft.push_char('o');
        assert_eq!(draft.email, "ann@x.o");

        draft.focus_next();
        assert_eq!(draft.focus(), EditField::Role);
        draft.push_char(' ');
        assert_eq!(draft.role, Role::Admin);
        draft.backspace();
        assert_eq!(draft.role, Role::Admin);

        draft.focus_next();
        assert_eq!(draft.focus(), EditField::Name);
    }
}
