//! Constraint expressions
//!
//! A field tag such as `empty=false [format=email] > gte=1` is handled in two
//! steps. [`split_validators`] separates the key constraints (inside the
//! brackets), the value constraints, and the constraints deferred to the next
//! nesting level (after `>`). [`parse_validators`] then turns the value
//! constraints into an OR-of-ANDs [`Expression`].
//!
//! ```text
//! expr     := orBranch ('|' orBranch)*
//! orBranch := andTerm ('&' andTerm)*
//! andTerm  := validatorType '=' argument
//! ```
//!
//! Copyright (c) 2025 Tagval Team
//! Licensed under the Apache-2.0 license

mod parser;
mod split;

pub use parser::parse_validators;
pub use split::{split_validators, SplitValidators};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorType {
    /// Equal to a number, or a length equal to a count
    Eq,
    /// Not equal to a number, or a length other than a count
    Ne,
    /// Greater than a number, or a length above a count
    Gt,
    /// Less than a number, or a length below a count
    Lt,
    /// Greater than or equal to a number or count
    Gte,
    /// Less than or equal to a number or count
    Lte,
    /// String, map, slice or array is (not) empty
    Empty,
    /// Pointer is (not) nil
    Nil,
    /// Number or string is one of a comma-separated list
    Enum,
    /// String matches a named format
    Format,
}

impl ValidatorType {
    pub const ALL: [ValidatorType; 10] = [
        ValidatorType::Eq,
        ValidatorType::Ne,
        ValidatorType::Gt,
        ValidatorType::Lt,
        ValidatorType::Gte,
        ValidatorType::Lte,
        ValidatorType::Empty,
        ValidatorType::Nil,
        ValidatorType::Enum,
        ValidatorType::Format,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorType::Eq => "eq",
            ValidatorType::Ne => "ne",
            ValidatorType::Gt => "gt",
            ValidatorType::Lt => "lt",
            ValidatorType::Gte => "gte",
            ValidatorType::Lte => "lte",
            ValidatorType::Empty => "empty",
            ValidatorType::Nil => "nil",
            ValidatorType::Enum => "enum",
            ValidatorType::Format => "format",
        }
    }
}

impl fmt::Display for ValidatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidatorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidatorType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| format!("unknown validator type '{}'", s))
    }
}

/// One atomic constraint: a validator type and its unparsed argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub validator_type: ValidatorType,
    pub argument: String,
}

impl Validator {
    pub fn new(validator_type: ValidatorType, argument: impl Into<String>) -> Self {
        Self {
            validator_type,
            argument: argument.into(),
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.argument.is_empty() {
            write!(f, "{}", self.validator_type)
        } else {
            write!(f, "{}={}", self.validator_type, self.argument)
        }
    }
}

/// OR branches of AND-combined validators.
///
/// An expression holds if every validator of at least one branch holds. An
/// expression without branches always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub branches: Vec<Vec<Validator>>,
}

impl Expression {
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<Validator>> {
        self.branches.iter()
    }
}

impl<'a> IntoIterator for &'a Expression {
    type Item = &'a Vec<Validator>;
    type IntoIter = std::slice::Iter<'a, Vec<Validator>>;

    fn into_iter(self) -> Self::IntoIter {
        self.branches.iter()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, branch) in self.branches.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            for (j, validator) in branch.iter().enumerate() {
                if j > 0 {
                    f.write_str("&")?;
                }
                write!(f, "{}", validator)?;
            }
        }
        Ok(())
    }
}
