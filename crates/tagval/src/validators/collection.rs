//! `empty` and `nil`

use super::{could_not_run, Subject};
use crate::error::Result;
use crate::expression::ValidatorType;
use crate::literal::parse_bool;

pub(super) fn empty(subject: &Subject<'_>, argument: &str) -> Result<()> {
    expect_state(subject, ValidatorType::Empty, argument, subject.value.is_empty())
}

pub(super) fn nil(subject: &Subject<'_>, argument: &str) -> Result<()> {
    expect_state(subject, ValidatorType::Nil, argument, subject.value.is_nil())
}

/// `state` is `None` when the kind has no such state.
fn expect_state(
    subject: &Subject<'_>,
    validator_type: ValidatorType,
    argument: &str,
    state: Option<bool>,
) -> Result<()> {
    match (state, parse_bool(argument)) {
        (Some(actual), Some(expected)) if actual == expected => Ok(()),
        (Some(_), Some(_)) => Err(subject.violation(validator_type, argument)),
        _ => Err(could_not_run(validator_type, argument)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Reflect;
    use std::collections::BTreeMap;

    fn check_empty(value: &dyn Reflect, argument: &str) -> Result<()> {
        empty(&Subject::new(value), argument)
    }

    fn check_nil(value: &dyn Reflect, argument: &str) -> Result<()> {
        nil(&Subject::new(value), argument)
    }

    #[test]
    fn test_empty_on_sized_kinds() {
        assert!(check_empty(&"", "true").is_ok());
        assert!(check_empty(&"x", "false").is_ok());
        assert!(check_empty(&"x", "true").unwrap_err().is_validation());
        assert!(check_empty(&Vec::<u8>::new(), "F").unwrap_err().is_validation());
        assert!(check_empty(&BTreeMap::from([(1, 1)]), "0").is_ok());
        assert!(check_empty(&[1, 2], "1").unwrap_err().is_validation());
    }

    #[test]
    fn test_empty_rejects_other_kinds_and_bad_arguments() {
        assert!(check_empty(&0i32, "true").unwrap_err().is_syntax());
        assert!(check_empty(&None::<String>, "true").unwrap_err().is_syntax());
        assert!(check_empty(&"x", "yes").unwrap_err().is_syntax());
        assert!(check_empty(&"x", "").unwrap_err().is_syntax());
    }

    #[test]
    fn test_nil_on_pointers() {
        let missing: Option<i32> = None;
        let present = Some(Box::new(3));
        assert!(check_nil(&missing, "true").is_ok());
        assert!(check_nil(&missing, "false").unwrap_err().is_validation());
        assert!(check_nil(&present, "false").is_ok());
        assert!(check_nil(&present, "true").unwrap_err().is_validation());
    }

    #[test]
    fn test_nil_rejects_other_kinds() {
        let err = check_nil(&"text", "true").unwrap_err();
        let err = err.as_syntax().unwrap();
        assert_eq!(err.expression, "true");
        assert_eq!(err.near, "nil");
        assert!(check_nil(&Some(1), "maybe").unwrap_err().is_syntax());
    }
}
