//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identity of an account that can join the DAO.
///
/// Opaque to the ledger beyond equality; the host authenticates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Creates a new MemberId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("member_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential proposal identifier.
///
/// Held as an integer so ordering is numeric; the decimal string form is
/// produced by `Display` and accepted by `FromStr`. Only the canonical form
/// parses, so `"07"` never aliases proposal `7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProposalId(u64);

impl ProposalId {
    /// The proposal seeded at initialization.
    pub const GENESIS: ProposalId = ProposalId(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the sequence number.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProposalId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .parse()
            .map_err(|_| ValidationError::invalid_format("proposal_id", format!("'{}' is not a number", s)))?;
        if value.to_string() != s {
            return Err(ValidationError::invalid_format(
                "proposal_id",
                format!("'{}' is not in canonical decimal form", s),
            ));
        }
        Ok(Self(value))
    }
}

impl TryFrom<String> for ProposalId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProposalId> for String {
    fn from(id: ProposalId) -> Self {
        id.to_string()
    }
}
