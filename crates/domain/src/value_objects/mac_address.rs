//! MAC address value object with EUI-48 validation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated EUI-48 MAC address, normalized to uppercase colon form
/// (e.g., `0C:47:C9:98:4A:12`)
///
/// Accepts `:` or `-` as octet separator on input. Used as the key that
/// identifies a button device in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress {
    value: String,
}

impl MacAddress {
    /// Create a new MAC address, validating and normalizing the format
    ///
    /// EUI-48 format: six hexadecimal octets separated by `:` or `-`.
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let raw = address.into();
        let trimmed = raw.trim();

        let octets: Vec<&str> = if trimmed.contains(':') {
            trimmed.split(':').collect()
        } else {
            trimmed.split('-').collect()
        };

        if octets.len() != 6 {
            return Err(DomainError::InvalidMacAddress(raw));
        }

        let valid = octets
            .iter()
            .all(|octet| octet.len() == 2 && octet.chars().all(|c| c.is_ascii_hexdigit()));
        if !valid {
            return Err(DomainError::InvalidMacAddress(raw));
        }

        Ok(Self {
            value: octets.join(":").to_ascii_uppercase(),
        })
    }

    /// Get the normalized address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for MacAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for MacAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.value
    }
}
