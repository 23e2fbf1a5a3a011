use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MAX_PREFIX_LEN: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid table prefix {prefix:?}: {reason}")]
    InvalidTablePrefix { prefix: String, reason: &'static str },
}

/// Table-name prefix shared by every catalog table (e.g. `ps_`).
///
/// Only ASCII letters, digits and `_` are accepted, so composed names can be
/// quoted without escaping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TablePrefix(String);

impl TablePrefix {
    pub fn new(prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = prefix.into();
        if prefix.len() > MAX_PREFIX_LEN {
            return Err(ConfigError::InvalidTablePrefix {
                prefix,
                reason: "longer than 32 characters",
            });
        }
        if !prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigError::InvalidTablePrefix {
                prefix,
                reason: "only ASCII letters, digits and '_' are allowed",
            });
        }
        Ok(Self(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Quoted physical name of `table`, e.g. `"ps_attribute_group"`.
    pub fn table(&self, table: &str) -> String {
        format!("\"{}{}\"", self.0, table)
    }
}

impl FromStr for TablePrefix {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for TablePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
