//! Tagval - tag-driven validation of nested values
//!
//! Constraints are written next to the data they apply to, as tag
//! expressions on struct fields. [`validate`] walks a value depth-first and
//! checks every field against its expression, stopping at the first failure.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use tagval::{validate, Reflect};
//!
//! #[derive(Reflect)]
//! struct Signup {
//!     #[tag(validate = "gte=18")]
//!     age: u8,
//!     #[tag(validate = "empty=false > format=email")]
//!     emails: Vec<String>,
//!     #[tag(validate = "[format=alpha] > gte=1&lte=10")]
//!     scores: HashMap<String, i32>,
//! }
//!
//! let signup = Signup {
//!     age: 30,
//!     emails: vec!["someone@example.com".to_string()],
//!     scores: HashMap::from([("chess".to_string(), 7)]),
//! };
//! assert!(validate(&signup).is_ok());
//!
//! let too_young = Signup { age: 12, ..signup };
//! let err = validate(&too_young).unwrap_err();
//! assert!(err.is_validation());
//! ```
//!
//! ## Expression Language
//!
//! ```text
//! expr     := orBranch ('|' orBranch)*
//! orBranch := andTerm ('&' andTerm)*
//! andTerm  := validatorType '=' argument
//! tag      := expr? ('[' expr ']')? expr? ('>' tag)?
//! ```
//!
//! Brackets hold constraints for map keys. Everything after `>` applies one
//! level down: to map values, slice and array elements, or the target of a
//! pointer (`Option`, `Box`, `Rc`, `Arc`).
//!
//! Validators: `eq ne gt lt gte lte` compare numbers, durations and the
//! length of strings, maps, slices and arrays; `empty` and `nil` check
//! emptiness and nil-ness; `enum` checks membership in a comma-separated list;
//! `format` checks a string against a named format (see [`FormatType`]).
//!
//! ## Errors
//!
//! A malformed or misapplied expression yields [`ErrorSyntax`]; data that
//! violates a well-formed expression yields [`ErrorValidation`]; a rejecting
//! custom validator ([`Validate`], [`ValidateMut`]) yields its own error as
//! [`Error::Custom`].
//!
//! Copyright (c) 2025 Tagval Team
//! Licensed under the Apache-2.0 license

extern crate self as tagval;

pub mod custom;
pub mod error;
pub mod expression;
pub mod formats;
pub mod literal;
pub mod option;
pub mod reflect;

mod validators;
mod walker;

pub use custom::{BoxError, Validate, ValidateMut};
pub use error::{Error, ErrorSyntax, ErrorValidation, Result};
pub use expression::{
    parse_validators, split_validators, Expression, SplitValidators, Validator, ValidatorType,
};
pub use formats::{is_format, FormatType};
pub use option::{tag_name, OptionFn, ValidationOption, DEFAULT_TAG_NAME};
pub use reflect::{Field, Kind, Reflect, StructTag, StructValue, Value};
pub use validators::check;

#[cfg(feature = "derive")]
pub use tagval_derive::Reflect;

/// Validate `value` with the default options.
///
/// Returns the first syntax, validation or custom error found, in field
/// declaration order.
pub fn validate<T: Reflect>(value: &T) -> Result<()> {
    ValidationOption::default().validate(value)
}

/// Validate `value` after applying `option_fns` to the default options.
///
/// ```rust
/// use tagval::{tag_name, validate_with, Reflect};
///
/// #[derive(Reflect)]
/// struct Port {
///     #[tag(check = "gte=1&lte=65535")]
///     number: u32,
/// }
///
/// assert!(validate_with(&Port { number: 0 }, [tag_name("check")]).is_err());
/// ```
pub fn validate_with<T, I>(value: &T, option_fns: I) -> Result<()>
where
    T: Reflect,
    I: IntoIterator<Item = OptionFn>,
{
    ValidationOption::from_fns(option_fns).validate(value)
}
