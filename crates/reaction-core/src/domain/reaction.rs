//! Reaction model: the response of an action that can succeed or fail.
//!
//! Use a reaction when a negative response is expected and the caller
//! should get a message with it. A reaction never changes after it is
//! built; callers branch on it with the gated callbacks
//! ([`Reaction::on_success`] / [`Reaction::on_failure`]) instead of
//! matching on the disposition themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::disposition::Disposition;
use super::errors::InvalidDispositionError;

/// A success or failure with a human-readable message.
///
/// Serializes as `{"message": "...", "disposition": 1}`. A missing message
/// deserializes as empty, an unknown disposition code is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reaction {
    #[serde(default)]
    message: String,
    disposition: Disposition,
}

impl Reaction {
    pub fn new(message: impl Into<String>, disposition: Disposition) -> Self {
        Self {
            message: message.into(),
            disposition,
        }
    }

    /// Builds a reaction from a raw disposition code (`1` success, `2` failure).
    ///
    /// Any other code is rejected; the error keeps the code and the message
    /// that was passed in.
    pub fn from_raw(message: impl Into<String>, raw: i64) -> Result<Self, InvalidDispositionError> {
        let message = message.into();
        match Disposition::try_from(raw) {
            Ok(disposition) => Ok(Self {
                message,
                disposition,
            }),
            Err(err) => {
                tracing::debug!(attempted_value = raw, "rejected reaction disposition");
                Err(err.with_reaction(message))
            }
        }
    }

    /// Success; pass `""` for no message.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Disposition::Success)
    }

    /// Failure; pass `""` for no message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, Disposition::Failure)
    }

    /// Same disposition, new message.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self::new(message, self.disposition)
    }

    pub fn is_success(&self) -> bool {
        self.disposition.is_success()
    }

    pub fn is_failure(&self) -> bool {
        self.disposition.is_failure()
    }

    /// Runs `f` once with this reaction if it is a success.
    ///
    /// Always returns `self`, so calls chain whichever branch ran:
    ///
    /// ```
    /// use reaction_core::Reaction;
    ///
    /// let mut seen = Vec::new();
    /// Reaction::failure("bad input")
    ///     .on_success(|r| seen.push(format!("ok: {}", r.message())))
    ///     .on_failure(|r| seen.push(format!("err: {}", r.message())));
    /// assert_eq!(seen, ["err: bad input"]);
    /// ```
    pub fn on_success<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&Self),
    {
        if self.is_success() {
            f(self);
        }
        self
    }

    /// Runs `f` once with this reaction if it is a failure. Returns `self`.
    pub fn on_failure<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&Self),
    {
        if self.is_failure() {
            f(self);
        }
        self
    }

    /// Like [`Reaction::on_success`], but an `Err` from `f` is returned as is.
    pub fn try_on_success<F, E>(&self, f: F) -> Result<&Self, E>
    where
        F: FnOnce(&Self) -> Result<(), E>,
    {
        if self.is_success() {
            f(self)?;
        }
        Ok(self)
    }

    /// Like [`Reaction::on_failure`], but an `Err` from `f` is returned as is.
    pub fn try_on_failure<F, E>(&self, f: F) -> Result<&Self, E>
    where
        F: FnOnce(&Self) -> Result<(), E>,
    {
        if self.is_failure() {
            f(self)?;
        }
        Ok(self)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    pub fn into_message(self) -> String {
        self.message
    }

    /// `Ok(message)` for a success, `Err(message)` for a failure.
    pub fn into_result(self) -> Result<String, String> {
        match self.disposition {
            Disposition::Success => Ok(self.message),
            Disposition::Failure => Err(self.message),
        }
    }
}

impl From<Reaction> for Result<String, String> {
    fn from(reaction: Reaction) -> Self {
        reaction.into_result()
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.disposition)
        } else {
            write!(f, "{}: {}", self.disposition, self.message)
        }
    }
}

/// A reaction whose raw disposition failed validation.
///
/// Only reachable through [`InvalidDispositionError::associated_reaction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialReaction {
    message: String,
    raw_disposition: i64,
}

impl PartialReaction {
    pub(crate) fn new(message: impl Into<String>, raw_disposition: i64) -> Self {
        Self {
            message: message.into(),
            raw_disposition,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn raw_disposition(&self) -> i64 {
        self.raw_disposition
    }
}
