//! Splitting a tag into key, value and next-level constraints

use crate::error::ErrorSyntax;
use std::borrow::Cow;

/// The three parts of one level of a tag expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitValidators<'a> {
    /// Constraints for map keys, found inside `[...]`
    pub key: &'a str,
    /// Constraints for the value at this level
    pub value: Cow<'a, str>,
    /// Constraints for the next level down, found after `>`
    pub remaining: &'a str,
}

/// Split a tag into key constraints, value constraints and the constraints
/// for the next nesting level.
///
/// The text is scanned left to right. A `[` at bracket depth zero opens the
/// key constraints, the matching `]` closes them. The first `>` at depth zero
/// ends this level; everything after it is deferred. Value constraints are
/// the text before the brackets joined by a space with the text between the
/// brackets and the `>`.
pub fn split_validators(text: &str) -> Result<SplitValidators<'_>, ErrorSyntax> {
    let bytes = text.as_bytes();
    let mut depth: i32 = 0;
    let mut bracket_start = 0usize;
    let mut bracket_end: Option<usize> = None;
    let mut found_gt = false;

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'>' if depth == 0 => {
                found_gt = true;
                break;
            }
            b'[' => {
                if depth == 0 {
                    bracket_start = i;
                }
                depth += 1;
            }
            b']' => {
                depth -= 1;
                if depth < 0 {
                    return Err(ErrorSyntax::new("", text, "unexpected \"]\""));
                }
                if depth == 0 {
                    bracket_end = Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    if depth > 0 {
        return Err(ErrorSyntax::new("", text, "expected \"]\""));
    }

    let (before, key, after) = match bracket_end {
        Some(end) => (
            &text[..bracket_start],
            &text[bracket_start + 1..end],
            &text[end + 1..i],
        ),
        None => ("", "", &text[..i]),
    };

    let value = if before.is_empty() {
        Cow::Borrowed(after)
    } else if after.is_empty() {
        Cow::Borrowed(before)
    } else {
        Cow::Owned(format!("{} {}", before, after))
    };

    let remaining = if found_gt { &text[i + 1..] } else { "" };
    if found_gt && remaining.is_empty() {
        return Err(ErrorSyntax::new("", text, "expected expression"));
    }

    Ok(SplitValidators {
        key,
        value,
        remaining,
    })
}
