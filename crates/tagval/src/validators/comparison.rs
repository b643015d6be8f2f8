//! `eq`, `ne`, `gt`, `lt`, `gte` and `lte`

use super::{could_not_run, Subject};
use crate::error::Result;
use crate::expression::ValidatorType;
use crate::literal::{parse_duration, parse_float, parse_int, parse_uint};
use crate::reflect::Value;

pub(super) fn eq(subject: &Subject<'_>, argument: &str) -> Result<()> {
    compare(subject, ValidatorType::Eq, argument)
}

pub(super) fn ne(subject: &Subject<'_>, argument: &str) -> Result<()> {
    compare(subject, ValidatorType::Ne, argument)
}

pub(super) fn gt(subject: &Subject<'_>, argument: &str) -> Result<()> {
    compare(subject, ValidatorType::Gt, argument)
}

pub(super) fn lt(subject: &Subject<'_>, argument: &str) -> Result<()> {
    compare(subject, ValidatorType::Lt, argument)
}

pub(super) fn gte(subject: &Subject<'_>, argument: &str) -> Result<()> {
    compare(subject, ValidatorType::Gte, argument)
}

pub(super) fn lte(subject: &Subject<'_>, argument: &str) -> Result<()> {
    compare(subject, ValidatorType::Lte, argument)
}

/// Compare a number with the argument read as the same kind of number, or
/// the length of a sized value with the argument read as a count.
fn compare(subject: &Subject<'_>, validator_type: ValidatorType, argument: &str) -> Result<()> {
    let holds = match &subject.value {
        Value::Int(value) => relation(validator_type, *value, parse_int(argument)),
        Value::Duration(value) => relation(validator_type, *value, parse_duration(argument)),
        Value::Uint(value) => relation(validator_type, *value, parse_uint(argument)),
        Value::Float(value) => relation(validator_type, *value, parse_float(argument)),
        value => value.len().and_then(|len| {
            let len = i64::try_from(len).unwrap_or(i64::MAX);
            relation(validator_type, len, parse_int(argument))
        }),
    };

    match holds {
        Some(true) => Ok(()),
        Some(false) => Err(subject.violation(validator_type, argument)),
        None => Err(could_not_run(validator_type, argument)),
    }
}

/// `None` when the argument did not parse.
fn relation<T: PartialOrd>(validator_type: ValidatorType, lhs: T, rhs: Option<T>) -> Option<bool> {
    let rhs = rhs?;
    let holds = match validator_type {
        ValidatorType::Eq => lhs == rhs,
        ValidatorType::Ne => lhs != rhs,
        ValidatorType::Gt => lhs > rhs,
        ValidatorType::Lt => lhs < rhs,
        ValidatorType::Gte => lhs >= rhs,
        ValidatorType::Lte => lhs <= rhs,
        _ => return None,
    };
    Some(holds)
}
