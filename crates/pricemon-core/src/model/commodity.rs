//! Commodity identifiers (e.g. `gold`, `crude_oil`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PriceMonError, Result};

const MAX_LEN: usize = 32;

/// Validated, lower-cased commodity identifier.
///
/// Input is trimmed and lower-cased before validation; the accepted alphabet
/// is `[a-z0-9_-]` with a length of 1..=32.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Commodity(String);

impl Commodity {
    pub fn parse(raw: &str) -> Result<Self> {
        let id = raw.trim().to_ascii_lowercase();
        if id.is_empty() {
            return Err(PriceMonError::BadRequest("commodity must not be empty".into()));
        }
        if id.len() > MAX_LEN {
            return Err(PriceMonError::BadRequest(format!(
                "commodity must be at most {MAX_LEN} chars"
            )));
        }
        if !id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
        {
            return Err(PriceMonError::BadRequest(format!("invalid commodity id: {raw}")));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Commodity {
    type Err = PriceMonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Commodity {
    type Error = PriceMonError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Commodity> for String {
    fn from(c: Commodity) -> Self {
        c.0
    }
}

impl AsRef<str> for Commodity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
