//! Errors - Reaction 構築時の検証エラー
//!
//! このクレートが返すエラーは [`InvalidDispositionError`] の一種類だけです。
//! 生の disposition コードが `1` / `2` 以外のときにのみ発生します。

use thiserror::Error;

use super::reaction::PartialReaction;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A raw disposition code was neither success nor failure.
///
/// Carries the rejected code and, when raised from [`Reaction::from_raw`],
/// the reaction as it was being assembled.
///
/// [`Reaction::from_raw`]: super::Reaction::from_raw
#[derive(Debug, Error)]
#[error("{message}")]
pub struct InvalidDispositionError {
    attempted_value: i64,
    reaction: Option<PartialReaction>,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl InvalidDispositionError {
    /// Error for `attempted_value` with the generated message.
    pub fn new(attempted_value: i64) -> Self {
        Self {
            attempted_value,
            reaction: None,
            message: format!("{attempted_value} is not a valid reaction disposition value."),
            source: None,
        }
    }

    /// Attaches the reaction under construction. Its raw disposition is
    /// always the attempted value.
    pub fn with_reaction(mut self, message: impl Into<String>) -> Self {
        self.reaction = Some(PartialReaction::new(message, self.attempted_value));
        self
    }

    /// Replaces the generated message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn attempted_value(&self) -> i64 {
        self.attempted_value
    }

    /// The reaction under construction when validation failed.
    ///
    /// `None` when the error was raised without one, e.g. by
    /// `Disposition::try_from`. Its raw disposition is never valid.
    pub fn associated_reaction(&self) -> Option<&PartialReaction> {
        self.reaction.as_ref()
    }

    pub fn into_associated_reaction(self) -> Option<PartialReaction> {
        self.reaction
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn default_message_embeds_attempted_value() {
        let err = InvalidDispositionError::new(42);
        assert_eq!(err.attempted_value(), 42);
        assert_eq!(err.to_string(), "42 is not a valid reaction disposition value.");
        assert!(err.associated_reaction().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn explicit_message_overrides_default() {
        let err = InvalidDispositionError::new(0).with_message("disposition missing");
        assert_eq!(err.message(), "disposition missing");
        assert_eq!(err.to_string(), "disposition missing");
        assert_eq!(err.attempted_value(), 0);
    }

    #[test]
    fn keeps_partial_reaction() {
        let err = InvalidDispositionError::new(5).with_reaction("half built");

        assert_eq!(
            err.associated_reaction(),
            Some(&PartialReaction::new("half built", 5))
        );
        let taken = err.into_associated_reaction().unwrap();
        assert_eq!(taken.message(), "half built");
        assert_eq!(taken.raw_disposition(), 5);
    }

    #[test]
    fn partial_reaction_carries_attempted_value() {
        let err = InvalidDispositionError::new(-7)
            .with_message("custom")
            .with_reaction("m");

        let partial = err.associated_reaction().unwrap();
        assert_eq!(partial.raw_disposition(), err.attempted_value());
        assert_eq!(partial.raw_disposition(), -7);
    }

    #[test]
    fn chains_source() {
        let cause = std::io::Error::other("upstream decode failed");
        let err = InvalidDispositionError::new(9).with_source(cause);

        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "upstream decode failed");
    }
}
