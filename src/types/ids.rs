use serde::Serialize;
use std::{fmt, num::ParseIntError, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("{0} must be a positive integer, got 0")]
    Zero(&'static str),
    #[error("invalid {0}: {1}")]
    Parse(&'static str, ParseIntError),
}

/// Primary key of the attribute group table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AttributeGroupId(u32);

impl AttributeGroupId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AttributeGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LanguageId(u32);

impl LanguageId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a single shop. Never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShopId(u32);

impl ShopId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ShopId {
    type Error = IdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(IdError::Zero("shop id"));
        }
        Ok(Self(value))
    }
}

impl FromStr for ShopId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|err| IdError::Parse("shop id", err))?;
        Self::try_from(value)
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a shop group. Never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShopGroupId(u32);

impl ShopGroupId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ShopGroupId {
    type Error = IdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(IdError::Zero("shop group id"));
        }
        Ok(Self(value))
    }
}

impl FromStr for ShopGroupId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|err| IdError::Parse("shop group id", err))?;
        Self::try_from(value)
    }
}

impl fmt::Display for ShopGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
