//! Disposition - success / failure の二値分類
//!
//! 不正な値は型として表現できません。生の整数コードを受け取るのは
//! `TryFrom<i64>` と serde のデシリアライズだけで、そこで検証します。

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::InvalidDispositionError;

/// Whether a reaction reports success or failure.
///
/// On the wire a disposition is its raw integer code (`1` / `2`), and
/// deserializing any other code is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Disposition {
    Success,
    Failure,
}

impl Disposition {
    /// Raw code of [`Disposition::Success`].
    pub const SUCCESS_CODE: i64 = 1;

    /// Raw code of [`Disposition::Failure`].
    pub const FAILURE_CODE: i64 = 2;

    pub fn code(self) -> i64 {
        match self {
            Disposition::Success => Self::SUCCESS_CODE,
            Disposition::Failure => Self::FAILURE_CODE,
        }
    }

    pub fn is_success(self) -> bool {
        self == Disposition::Success
    }

    pub fn is_failure(self) -> bool {
        self == Disposition::Failure
    }
}

impl TryFrom<i64> for Disposition {
    type Error = InvalidDispositionError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            Self::SUCCESS_CODE => Ok(Disposition::Success),
            Self::FAILURE_CODE => Ok(Disposition::Failure),
            other => Err(InvalidDispositionError::new(other)),
        }
    }
}

impl From<Disposition> for i64 {
    fn from(disposition: Disposition) -> Self {
        disposition.code()
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::Success => f.write_str("SUCCESS"),
            Disposition::Failure => f.write_str("FAILURE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::success(1, Disposition::Success)]
    #[case::failure(2, Disposition::Failure)]
    fn raw_codes_map_to_dispositions(#[case] raw: i64, #[case] expected: Disposition) {
        let disposition = Disposition::try_from(raw).unwrap();
        assert_eq!(disposition, expected);
        assert_eq!(disposition.code(), raw);
        assert_eq!(i64::from(disposition), raw);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::three(3)]
    #[case::negative(-1)]
    #[case::large(999)]
    #[case::max(i64::MAX)]
    fn unknown_codes_are_rejected(#[case] raw: i64) {
        let err = Disposition::try_from(raw).unwrap_err();
        assert_eq!(err.attempted_value(), raw);
        assert!(err.associated_reaction().is_none());
    }

    #[test]
    fn exactly_one_predicate_holds() {
        assert!(Disposition::Success.is_success());
        assert!(!Disposition::Success.is_failure());
        assert!(Disposition::Failure.is_failure());
        assert!(!Disposition::Failure.is_success());
    }

    #[test]
    fn serializes_as_raw_code() {
        assert_eq!(serde_json::to_string(&Disposition::Success).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Disposition::Failure).unwrap(), "2");

        let back: Disposition = serde_json::from_str("2").unwrap();
        assert_eq!(back, Disposition::Failure);
    }

    #[test]
    fn deserializing_unknown_code_fails_with_generated_message() {
        let err = serde_json::from_str::<Disposition>("7").unwrap_err();
        assert!(
            err.to_string()
                .contains("7 is not a valid reaction disposition value.")
        );
    }

    #[test]
    fn displays_screaming_names() {
        assert_eq!(Disposition::Success.to_string(), "SUCCESS");
        assert_eq!(Disposition::Failure.to_string(), "FAILURE");
    }
}
