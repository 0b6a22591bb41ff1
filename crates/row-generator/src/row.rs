//! The generated record type.

use serde::{Deserialize, Serialize};

/// Suffix appended to a name to build its email address.
pub const EMAIL_DOMAIN: &str = "@email.com";

/// One synthetic record.
///
/// Field order matters: `csv` serializes struct fields in declaration order,
/// which gives the `name,value,email` line layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub name: String,
    pub value: u32,
    pub email: String,
}

impl Row {
    /// Build a row for `name`, deriving the email from it.
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        let name = name.into();
        let email = format!("{name}{EMAIL_DOMAIN}");
        Self { name, value, email }
    }
}
