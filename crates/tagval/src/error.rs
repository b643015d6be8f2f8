//! Error types for tag-driven validation
//!
//! Two kinds of failure come out of the engine, and they mean different
//! things to the caller:
//!
//! - [`ErrorSyntax`]: a tag expression is malformed or cannot be applied to
//!   the field it decorates. The fix belongs in the code.
//! - [`ErrorValidation`]: the expression is fine, the data violates it. The
//!   fix belongs in the data.
//!
//! Errors raised by custom validators are passed through untouched as
//! [`Error::Custom`].
//!
//! Copyright (c) 2025 Tagval Team
//! Licensed under the Apache-2.0 license

use crate::custom::BoxError;
use crate::expression::ValidatorType;
use crate::reflect::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A malformed or misapplied constraint expression.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ErrorSyntax {
    /// Field the expression is attached to; empty for the root value
    pub field_name: String,
    /// The offending fragment
    pub expression: String,
    /// Surrounding text that helps locate the fragment
    pub near: String,
    /// What went wrong
    pub comment: String,
}

impl ErrorSyntax {
    pub fn new<E, N, C>(expression: E, near: N, comment: C) -> Self
    where
        E: Into<String>,
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            field_name: String::new(),
            expression: expression.into(),
            near: near.into(),
            comment: comment.into(),
        }
    }

    /// Attribute the error to a field
    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self
    }
}

impl fmt::Display for ErrorSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field_name.is_empty() {
            write!(
                f,
                "Syntax error in expression \"{}\" near \"{}\": {}",
                self.expression, self.near, self.comment
            )
        } else {
            write!(
                f,
                "Syntax error in field \"{}\" in expression \"{}\" near \"{}\": {}",
                self.field_name, self.expression, self.near, self.comment
            )
        }
    }
}

/// A well-formed constraint that the data does not satisfy.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub struct ErrorValidation {
    /// Field holding the value; empty for the root value
    pub field_name: String,
    /// Type of the value as reported by reflection
    pub field_type: String,
    /// Snapshot of the offending value
    pub field_value: serde_json::Value,
    /// Validator that rejected the value
    pub validator_type: ValidatorType,
    /// Argument the validator was given
    pub validator_value: String,
}

impl ErrorValidation {
    pub fn new(
        value: &Value<'_>,
        field_type: impl Into<String>,
        validator_type: ValidatorType,
        validator_value: impl Into<String>,
    ) -> Self {
        Self {
            field_name: String::new(),
            field_type: field_type.into(),
            field_value: value.snapshot(),
            validator_type,
            validator_value: validator_value.into(),
        }
    }

    /// Attribute the error to a field
    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self
    }

    /// The validator as written in the tag, e.g. `gte=1` or `nil=false`
    pub fn validator(&self) -> String {
        if self.validator_value.is_empty() {
            self.validator_type.to_string()
        } else {
            format!("{}={}", self.validator_type, self.validator_value)
        }
    }
}

impl fmt::Display for ErrorValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field_name.is_empty() {
            write!(
                f,
                "Validation error in value of type \"{}\" using validator \"{}\"",
                self.field_type,
                self.validator()
            )
        } else {
            write!(
                f,
                "Validation error in field \"{}\" of type \"{}\" using validator \"{}\"",
                self.field_name,
                self.field_type,
                self.validator()
            )
        }
    }
}

/// Any failure returned by [`validate`](crate::validate).
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] ErrorSyntax),

    #[error(transparent)]
    Validation(#[from] ErrorValidation),

    /// Error returned by a [`Validate`](crate::Validate) or
    /// [`ValidateMut`](crate::ValidateMut) implementation, unchanged
    #[error("{0}")]
    Custom(BoxError),
}

impl Error {
    /// Attribute a syntax or validation error to a field. Custom errors are
    /// returned as they are.
    pub fn with_field_name(self, field_name: &str) -> Self {
        match self {
            Error::Syntax(e) => Error::Syntax(e.with_field_name(field_name)),
            Error::Validation(e) => Error::Validation(e.with_field_name(field_name)),
            Error::Custom(e) => Error::Custom(e),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Error::Custom(_))
    }

    pub fn as_syntax(&self) -> Option<&ErrorSyntax> {
        match self {
            Error::Syntax(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_validation(&self) -> Option<&ErrorValidation> {
        match self {
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_custom(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Error::Custom(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// Name of the field the error is attributed to, if known
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Error::Syntax(e) => Some(&e.field_name),
            Error::Validation(e) => Some(&e.field_name),
            Error::Custom(_) => None,
        }
    }
}

/// Result type for validation operations
pub type Result<T> = std::result::Result<T, Error>;
