// src/domain/core.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type UserId = String;

/// A bidder. The id is non-empty and has no `|`, the name may contain anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    user_id: UserId,
    name: String,
}

impl User {
    pub fn new(user_id: impl Into<UserId>, name: impl Into<String>) -> Result<Self, Errors> {
        let user_id = user_id.into();
        if user_id.is_empty() || user_id.contains('|') {
            return Err(Errors::InvalidUserData(user_id));
        }
        Ok(User {
            user_id,
            name: name.into(),
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let parts: Vec<&str> = text.splitn(2, '|').collect();

        match parts.as_slice() {
            [user_id, name] => User::new(*user_id, *name).map_err(serde::de::Error::custom),
            _ => {
                Err(serde::de::Error::custom(
                    format!("parsing User failed, could not interpret values: {:?}", parts)
                ))
            }
        }
    }
}
impl Serialize for User {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.user_id, self.name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Errors {
    #[error("Auction has ended: {0}")]
    AuctionHasEnded(String),

    #[error("Invalid user data: {0:?}")]
    InvalidUserData(String),
}
