//! Record selection by sender.
//!
//! Every per-user analytics function takes a [`UserSelection`]. The literal
//! string `"Overall"` means "no filter"; any other value selects the records
//! whose sender equals it exactly (case-sensitive). A sender that does not
//! occur in the log selects nothing, which is not an error.
//!
//! # Examples
//!
//! ```
//! use chatlens::analytics::filter::UserSelection;
//!
//! assert_eq!(UserSelection::from("Overall"), UserSelection::Overall);
//! assert_eq!(UserSelection::from("Alice"), UserSelection::user("Alice"));
//! assert!(UserSelection::from("Alice").matches("Alice"));
//! assert!(!UserSelection::from("Alice").matches("alice"));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;

/// Which records an analytics call looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserSelection {
    /// All records, system events included.
    #[default]
    Overall,

    /// Only records whose sender equals this name.
    User(String),
}

impl UserSelection {
    /// The selection value meaning "no filter".
    pub const OVERALL: &'static str = "Overall";

    /// Selects a single sender.
    pub fn user(name: impl Into<String>) -> Self {
        UserSelection::User(name.into())
    }

    /// Returns `true` if this selection applies no filter.
    pub fn is_overall(&self) -> bool {
        matches!(self, UserSelection::Overall)
    }

    /// Returns `true` if a record from `sender` belongs to this selection.
    pub fn matches(&self, sender: &str) -> bool {
        match self {
            UserSelection::Overall => true,
            UserSelection::User(name) => name == sender,
        }
    }

    /// Records from `records` that belong to this selection, in order.
    pub fn filter<'a>(
        &'a self,
        records: &'a [MessageRecord],
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        records.iter().filter(move |r| self.matches(&r.sender))
    }
}

impl From<&str> for UserSelection {
    fn from(value: &str) -> Self {
        if value == Self::OVERALL {
            UserSelection::Overall
        } else {
            UserSelection::User(value.to_string())
        }
    }
}

impl From<String> for UserSelection {
    fn from(value: String) -> Self {
        if value == Self::OVERALL {
            UserSelection::Overall
        } else {
            UserSelection::User(value)
        }
    }
}

impl From<UserSelection> for String {
    fn from(value: UserSelection) -> Self {
        value.to_string()
    }
}

impl FromStr for UserSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for UserSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserSelection::Overall => f.write_str(Self::OVERALL),
            UserSelection::User(name) => f.write_str(name),
        }
    }
}
