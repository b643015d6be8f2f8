//! Parser for the value constraints of one nesting level

use super::{Expression, Validator, ValidatorType};
use crate::error::ErrorSyntax;
use once_cell::sync::Lazy;
use regex::Regex;

static TYPE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[[:alnum:]_]+").expect("valid validator type pattern"));

static ARGUMENT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^=\s]+[^=]*[^=\s]+|[^=\s]+").expect("valid validator argument pattern")
});

/// Parse value constraints such as `gte=1&lte=10|eq=0` into an
/// [`Expression`].
///
/// Blank text yields an empty expression. Surrounding whitespace of type and
/// argument tokens is ignored; whitespace inside an argument is kept.
pub fn parse_validators(text: &str) -> Result<Expression, ErrorSyntax> {
    let mut expression = Expression::default();
    if text.trim().is_empty() {
        return Ok(expression);
    }

    for branch_text in text.split('|') {
        let mut branch = Vec::new();

        for term in branch_text.split('&') {
            let parts: Vec<&str> = term.split('=').collect();
            if parts.len() > 2 {
                return Err(ErrorSyntax::new(text, "", "could not parse"));
            }

            let type_token = match TYPE_TOKEN.find(parts[0]) {
                Some(m) => m.as_str(),
                None => return Err(ErrorSyntax::new(parts[0], text, "could not parse")),
            };

            let validator_type: ValidatorType = type_token
                .parse()
                .map_err(|_| ErrorSyntax::new(type_token, text, "could not find a validator"))?;

            let argument = parts
                .get(1)
                .and_then(|raw| ARGUMENT_TOKEN.find(raw))
                .map(|m| m.as_str())
                .unwrap_or_default();

            branch.push(Validator::new(validator_type, argument));
        }

        if !branch.is_empty() {
            expression.branches.push(branch);
        }
    }

    Ok(expression)
}
