//! The user entity exposed over HTTP

use serde::{Deserialize, Deserializer, Serialize};

/// A user as callers see it.
///
/// `name` is the business key for lookups, updates and deletes. The table's
/// row id is never part of this type. Missing or `null` fields decode as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub location: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            location: location.into(),
        }
    }
}
