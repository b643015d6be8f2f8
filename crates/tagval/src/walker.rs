//! Recursive evaluation of constraint expressions over a value tree
//!
//! Every visited node goes through the same steps: split its tag, parse the
//! value constraints, run the node's custom validator, evaluate the parsed
//! expression, then descend. Struct fields are visited with their own tags;
//! map keys get the key constraints, map values, slice and array elements and
//! pointer targets get the constraints deferred with `>`. The first error
//! ends the walk.
//!
//! Copyright (c) 2025 Tagval Team
//! Licensed under the Apache-2.0 license

use crate::custom::call_custom_validator;
use crate::error::{Error, ErrorSyntax, Result};
use crate::expression::{parse_validators, split_validators, Expression};
use crate::option::ValidationOption;
use crate::reflect::{Kind, Reflect, StructValue, Value};
use crate::validators::{self, Subject};

/// Depth-first walker bound to one set of options.
pub(crate) struct Walker<'o> {
    option: &'o ValidationOption,
}

impl<'o> Walker<'o> {
    pub fn new(option: &'o ValidationOption) -> Self {
        Self { option }
    }

    /// Validate `value`, reached through `field_name`, against the tag text
    /// `validators`.
    pub fn validate_field(
        &self,
        value: &dyn Reflect,
        field_name: &str,
        validators: &str,
    ) -> Result<()> {
        let split = split_validators(validators)
            .map_err(|e| syntax_error(e.with_field_name(field_name)))?;
        let expression = parse_validators(&split.value)
            .map_err(|e| syntax_error(e.with_field_name(field_name)))?;

        if let Err(e) = call_custom_validator(value) {
            log::debug!(
                "custom validator of '{}' rejected field '{}': {}",
                value.type_name(),
                field_name,
                e
            );
            return Err(Error::Custom(e));
        }

        let subject = Subject::new(value);
        let kind = subject.value.kind();
        log::trace!(
            "validating field '{}' of kind {} against '{}'",
            field_name,
            kind,
            validators
        );

        if let Err(e) = evaluate(&subject, &expression) {
            let e = e.with_field_name(field_name);
            log::debug!("{}", e);
            return Err(e);
        }

        match &subject.value {
            Value::Struct(fields) => self.validate_struct(fields)?,
            Value::Map(entries) => {
                for (key, item) in entries {
                    self.validate_field(*key, field_name, split.key)?;
                    self.validate_field(*item, field_name, split.remaining)?;
                }
            }
            Value::Slice(items) | Value::Array(items) => {
                for item in items {
                    self.validate_field(*item, field_name, split.remaining)?;
                }
            }
            Value::Ptr(Some(target)) => {
                self.validate_field(*target, field_name, split.remaining)?;
            }
            _ => {}
        }

        if kind != Kind::Map && !split.key.is_empty() {
            return Err(unexpected_expression(split.key, validators, field_name));
        }

        let divisible = matches!(kind, Kind::Map | Kind::Slice | Kind::Array | Kind::Ptr);
        if !divisible && !split.remaining.is_empty() {
            return Err(unexpected_expression(split.remaining, validators, field_name));
        }

        Ok(())
    }

    fn validate_struct(&self, value: &StructValue<'_>) -> Result<()> {
        for field in &value.fields {
            let validators = field.tag.get(&self.option.tag_name).unwrap_or_default();
            self.validate_field(field.value, field.name, &validators)?;
        }
        Ok(())
    }
}

/// Passes as soon as one branch passes completely. Otherwise the error of the
/// last branch is returned.
fn evaluate(subject: &Subject<'_>, expression: &Expression) -> Result<()> {
    let mut result = Ok(());
    for branch in expression {
        result = branch
            .iter()
            .try_for_each(|validator| validators::run(subject, validator));
        if result.is_ok() {
            break;
        }
    }
    result
}

fn syntax_error(e: ErrorSyntax) -> Error {
    log::debug!("{}", e);
    Error::Syntax(e)
}

/// Constraints left over for a value that cannot use them.
fn unexpected_expression(expression: &str, near: &str, field_name: &str) -> Error {
    syntax_error(
        ErrorSyntax::new(expression, near, "unexpected expression").with_field_name(field_name),
    )
}
