//! Roster record types with smart constructors.
//!
//! Records arrive from the inbound feed as loosely-typed JSON and are
//! converted at the boundary. Inside the crate a `Record` always carries a
//! non-empty id and one of the two known roles.

use serde::{Deserialize, Serialize};
use std::fmt;

// ===== RecordId =====

/// Stable identity of a roster record.
///
/// Never reassigned after load. Two records are the same record iff their ids
/// are equal, regardless of field contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecordId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidRecordId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejection reasons for [`RecordId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRecordId {
    /// The id was the empty string.
    #[error("Record id cannot be empty")]
    Empty,
}

// ===== Role =====

/// Access role of a roster member.
///
/// Chosen from a fixed set in the edit form, never typed freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator.
    Admin,
    /// Regular member.
    #[default]
    Member,
}

impl Role {
    /// Wire and search text of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }

    /// The other role. Backs the two-option choice control.
    pub fn toggle(self) -> Self {
        match self {
            Role::Admin => Role::Member,
            Role::Member => Role::Admin,
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Member => "Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Record =====

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    id: RecordId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Access role.
    pub role: Role,
}

impl Record {
    /// Create a record from already-validated parts.
    pub fn new(id: RecordId, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Identity of the record. There is no setter.
    pub fn id(&self) -> &RecordId {
        &self.id
    }
}

// ===== Wire format =====

/// Ids show up as strings in the published feed, but numeric ids are common
/// in hand-written fixtures.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

#[derive(Debug, Clone, Deserialize)]
struct RawRecord {
    id: RawId,
    name: String,
    email: String,
    role: Role,
}

impl TryFrom<RawRecord> for Record {
    type Error = InvalidRecordId;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let id = match raw.id {
            RawId::Text(s) => RecordId::new(s)?,
            RawId::Number(n) => RecordId::new(n.to_string())?,
        };
        Ok(Record::new(id, raw.name, raw.email, raw.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_rejects_empty_string() {
        assert_eq!(RecordId::new(""), Err(InvalidRecordId::Empty));
    }

    #[test]
    fn record_id_accepts_numeric_text() {
        let id = RecordId::new("42").expect("valid id");
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn role_as_str_is_lowercase() {
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::Member.as_str(), "member");
    }

    #[test]
    fn role_toggle_flips_between_the_two_roles() {
        assert_eq!(Role::Admin.toggle(), Role::Member);
        assert_eq!(Role::Member.toggle(), Role::Admin);
        assert_eq!(Role::Admin.toggle().toggle(), Role::Admin);
    }

    #[test]
    fn deserializes_string_id() {
        let json = r#"{"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"}"#;
        let record: Record = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.id().as_str(), "1");
        assert_eq!(record.name, "Aaron Miles");
        assert_eq!(record.email, "aaron@mailinator.com");
        assert_eq!(record.role, Role::Member);
    }

    #[test]
    fn deserializes_numeric_id_as_decimal_text() {
        let json = r#"{"id":17,"name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"admin"}"#;
        let record: Record = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.id().as_str(), "17");
        assert_eq!(record.role, Role::Admin);
    }

    #[test]
    fn rejects_empty_id() {
        let json = r#"{"id":"","name":"Nobody","email":"n@x.io","role":"admin"}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err(), "empty id must not deserialize");
    }

    #[test]
    fn rejects_unknown_role() {
        let json = r#"{"id":"3","name":"Eve","email":"eve@x.io","role":"owner"}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err(), "role outside admin/member must not deserialize");
    }

    #[test]
    fn serializes_back_to_wire_shape() {
        let record = Record::new(RecordId::new("9").unwrap(), "Jane Doe", "jane@example.com", Role::Admin);
        let json = serde_json::to_value(&record).expect("serializable");
        assert_eq!(json["id"], "9");
        assert_eq!(json["role"], "admin");
    }
}
