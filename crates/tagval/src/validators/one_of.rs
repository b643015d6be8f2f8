//! `enum`

use super::{could_not_run, Subject};
use crate::error::Result;
use crate::expression::ValidatorType;
use crate::literal::{parse_duration, parse_float, parse_int, parse_uint};
use crate::reflect::Value;

/// The value must equal one of the comma-separated tokens. Tokens are read
/// as the value's own kind of literal; strings are compared verbatim.
pub(super) fn one_of(subject: &Subject<'_>, argument: &str) -> Result<()> {
    let tokens = tokens(argument);
    if tokens.is_empty() {
        return Err(could_not_run(ValidatorType::Enum, argument));
    }

    let found = match &subject.value {
        Value::Int(value) => contains(*value, &tokens, parse_int),
        Value::Duration(value) => contains(*value, &tokens, parse_duration),
        Value::Uint(value) => contains(*value, &tokens, parse_uint),
        Value::Float(value) => contains(*value, &tokens, parse_float),
        Value::Str(value) => Some(tokens.contains(value)),
        _ => None,
    };

    match found {
        Some(true) => Ok(()),
        Some(false) => Err(subject.violation(ValidatorType::Enum, argument)),
        None => Err(could_not_run(ValidatorType::Enum, argument)),
    }
}

fn tokens(argument: &str) -> Vec<&str> {
    argument
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// `None` when any token does not parse.
fn contains<T: PartialEq>(value: T, tokens: &[&str], parse: fn(&str) -> Option<T>) -> Option<bool> {
    let parsed = tokens
        .iter()
        .map(|token| parse(token))
        .collect::<Option<Vec<T>>>()?;
    Some(parsed.contains(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Reflect;
    use std::time::Duration;

    fn check(value: &dyn Reflect, argument: &str) -> Result<()> {
        one_of(&Subject::new(value), argument)
    }

    #[test]
    fn test_tokens_are_trimmed() {
        assert_eq!(tokens(" a, b ,,c "), vec!["a", "b", "c"]);
        assert!(tokens(" , ,").is_empty());
    }

    #[test]
    fn test_numbers() {
        assert!(check(&2i32, "1,2,3").is_ok());
        assert!(check(&4i32, "1,2,3").unwrap_err().is_validation());
        assert!(check(&7u16, "7").is_ok());
        assert!(check(&0.5f64, "0.25, 0.5").is_ok());
        assert!(check(&2i32, "1,two").unwrap_err().is_syntax());
        assert!(check(&2u8, "-1,2").unwrap_err().is_syntax());
    }

    #[test]
    fn test_durations() {
        assert!(check(&Duration::from_secs(60), "30s,1m").is_ok());
        assert!(check(&Duration::from_secs(61), "30s,1m").unwrap_err().is_validation());
        assert!(check(&Duration::from_secs(60), "60").unwrap_err().is_syntax());
    }

    #[test]
    fn test_strings_compare_verbatim() {
        assert!(check(&"b", "a,b,c").is_ok());
        assert!(check(&String::from("4"), "1,2,3").unwrap_err().is_validation());
        assert!(check(&"1.0", "1").unwrap_err().is_validation());
    }

    #[test]
    fn test_empty_token_list() {
        assert!(check(&"a", "").unwrap_err().is_syntax());
        assert!(check(&"a", " , ").unwrap_err().is_syntax());
    }

    #[test]
    fn test_unsupported_kinds() {
        assert!(check(&true, "true").unwrap_err().is_syntax());
        assert!(check(&vec!["a"], "a").unwrap_err().is_syntax());
    }
}
