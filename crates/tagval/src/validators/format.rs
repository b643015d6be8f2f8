//! `format`

use super::Subject;
use crate::error::{ErrorSyntax, Result};
use crate::expression::ValidatorType;
use crate::formats::is_format;
use crate::reflect::Value;

pub(super) fn format(subject: &Subject<'_>, argument: &str) -> Result<()> {
    let matched = match &subject.value {
        Value::Str(text) => is_format(argument, text),
        _ => None,
    };

    match matched {
        Some(true) => Ok(()),
        Some(false) => Err(subject.violation(ValidatorType::Format, argument)),
        None => Err(ErrorSyntax::new(
            argument,
            ValidatorType::Format.as_str(),
            "could not find format",
        )
        .into()),
    }
}
