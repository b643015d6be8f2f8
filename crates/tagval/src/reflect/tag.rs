//! Field tags: `key:"value"` metadata attached to struct fields

use std::borrow::Cow;

/// Metadata attached to a struct field.
///
/// A tag is either a list of `(key, value)` pairs, as generated by
/// `#[tag(validate = "gte=0")]`, or raw text in the conventional
/// `validate:"gte=0" json:"age"` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StructTag<'a> {
    repr: Repr<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Repr<'a> {
    #[default]
    Empty,
    Pairs(&'a [(&'a str, &'a str)]),
    Raw(&'a str),
}

impl<'a> StructTag<'a> {
    pub const fn empty() -> Self {
        Self { repr: Repr::Empty }
    }

    pub const fn pairs(pairs: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            repr: Repr::Pairs(pairs),
        }
    }

    pub const fn raw(text: &'a str) -> Self {
        Self {
            repr: Repr::Raw(text),
        }
    }

    /// Value stored under `key`, if any. The first matching entry wins.
    pub fn get(&self, key: &str) -> Option<Cow<'a, str>> {
        match self.repr {
            Repr::Empty => None,
            Repr::Pairs(pairs) => pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| Cow::Borrowed(*v)),
            Repr::Raw(text) => lookup_raw(text, key),
        }
    }
}

/// Scan conventional tag text for `key`.
///
/// Malformed text stops the scan; whatever was found before that point is
/// still searchable.
fn lookup_raw<'a>(text: &'a str, key: &str) -> Option<Cow<'a, str>> {
    let mut rest = text;

    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            return None;
        }

        let bytes = rest.as_bytes();
        let name_len = bytes
            .iter()
            .position(|&b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
            .unwrap_or(bytes.len());
        if name_len == 0
            || name_len + 1 >= bytes.len()
            || bytes[name_len] != b':'
            || bytes[name_len + 1] != b'"'
        {
            return None;
        }
        let name = &rest[..name_len];
        rest = &rest[name_len + 1..];

        // Find the closing quote, skipping escaped characters.
        let bytes = rest.as_bytes();
        let mut i = 1;
        while i < bytes.len() && bytes[i] != b'"' {
            if bytes[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }
        if i >= bytes.len() {
            return None;
        }
        let quoted = &rest[..=i];
        rest = &rest[i + 1..];

        if name == key {
            return unquote(quoted);
        }
    }
}

/// Strip surrounding quotes and resolve backslash escapes.
fn unquote(quoted: &str) -> Option<Cow<'_, str>> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    if !inner.contains('\\') {
        return Some(Cow::Borrowed(inner));
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '0' => out.push('\0'),
            _ => return None,
        }
    }
    Some(Cow::Owned(out))
}
