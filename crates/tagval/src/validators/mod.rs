//! Validator functions
//!
//! Each [`ValidatorType`] maps to one function that checks a single reflected
//! value against the validator's argument. Which kinds a validator accepts is
//! fixed:
//!
//! | validator                    | kinds                                          |
//! |------------------------------|------------------------------------------------|
//! | `eq ne gt lt gte lte`        | int, duration, uint, float; length of string, map, slice, array |
//! | `empty`                      | string, map, slice, array                      |
//! | `nil`                        | pointer                                        |
//! | `enum`                       | int, duration, uint, float, string             |
//! | `format`                     | string                                         |
//!
//! Applying a validator to any other kind, or giving it an argument that does
//! not parse, is a syntax error. A well-formed check that fails is a
//! validation error.
//!
//! Copyright (c) 2025 Tagval Team
//! Licensed under the Apache-2.0 license

mod collection;
mod comparison;
mod format;
mod one_of;

use crate::error::{Error, ErrorSyntax, ErrorValidation, Result};
use crate::expression::{Validator, ValidatorType};
use crate::reflect::{Reflect, Value};

type ValidatorFn = fn(&Subject<'_>, &str) -> Result<()>;

/// A reflected value together with the name of its type.
pub(crate) struct Subject<'a> {
    pub value: Value<'a>,
    pub type_name: &'static str,
}

impl<'a> Subject<'a> {
    pub fn new(value: &'a dyn Reflect) -> Self {
        Self {
            value: value.reflect(),
            type_name: value.type_name(),
        }
    }

    /// The value does not satisfy `validator_type=argument`.
    fn violation(&self, validator_type: ValidatorType, argument: &str) -> Error {
        ErrorValidation::new(&self.value, self.type_name, validator_type, argument).into()
    }
}

/// The argument does not parse, or the validator does not apply to the kind.
fn could_not_run(validator_type: ValidatorType, argument: &str) -> Error {
    ErrorSyntax::new(argument, validator_type.as_str(), "could not parse or run").into()
}

fn validator_fn(validator_type: ValidatorType) -> ValidatorFn {
    match validator_type {
        ValidatorType::Eq => comparison::eq,
        ValidatorType::Ne => comparison::ne,
        ValidatorType::Gt => comparison::gt,
        ValidatorType::Lt => comparison::lt,
        ValidatorType::Gte => comparison::gte,
        ValidatorType::Lte => comparison::lte,
        ValidatorType::Empty => collection::empty,
        ValidatorType::Nil => collection::nil,
        ValidatorType::Enum => one_of::one_of,
        ValidatorType::Format => format::format,
    }
}

pub(crate) fn run(subject: &Subject<'_>, validator: &Validator) -> Result<()> {
    validator_fn(validator.validator_type)(subject, &validator.argument)
}

/// Check one validator against one value.
///
/// Errors are not attributed to a field.
///
/// ```
/// use tagval::{check, Validator, ValidatorType};
///
/// assert!(check(&Validator::new(ValidatorType::Gte, "1"), &5u8).is_ok());
/// assert!(check(&Validator::new(ValidatorType::Eq, "2"), &vec![1, 2]).is_ok());
/// assert!(check(&Validator::new(ValidatorType::Lt, "2"), &"abc").is_err());
/// ```
pub fn check(validator: &Validator, value: &dyn Reflect) -> Result<()> {
    run(&Subject::new(value), validator)
}
