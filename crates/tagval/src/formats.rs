//! Named string formats for the `format` validator
//!
//! `format=NAME` looks `NAME` up in a fixed table of checks. Regex-based
//! checks compile their pattern once, on first use.
//!
//! Copyright (c) 2025 Tagval Team
//! Licensed under the Apache-2.0 license

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use url::Url;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: Lazy<Regex> = Lazy::new(|| Regex::new($re).expect("valid format pattern"));
    };
}

pattern!(ALPHA, r"^[a-zA-Z]+$");
pattern!(ALNUM, r"^[a-zA-Z0-9]+$");
pattern!(ALPHA_UNICODE, r"^\p{L}+$");
pattern!(ALNUM_UNICODE, r"^[\p{L}\p{N}]+$");
pattern!(NUMERIC, r"^[-+]?[0-9]+(?:\.[0-9]+)?$");
pattern!(NUMBER, r"^[0-9]+$");
pattern!(HEXADECIMAL, r"^(?:0[xX])?[0-9a-fA-F]+$");
pattern!(HEXCOLOR, r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$");
pattern!(
    EMAIL,
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
);
pattern!(
    BASE64,
    r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$"
);
pattern!(
    BASE64URL,
    r"^(?:[A-Za-z0-9_-]{4})*(?:[A-Za-z0-9_-]{2}==|[A-Za-z0-9_-]{3}=|[A-Za-z0-9_-]{4})$"
);
pattern!(
    UUID,
    r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
);
pattern!(
    UUID3,
    r"^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$"
);
pattern!(
    UUID4,
    r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
);
pattern!(
    UUID5,
    r"^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
);
pattern!(
    DATA_URI_HEADER,
    r"^data:(?:[a-zA-Z]+/[a-zA-Z0-9.+-]+)?(?:;[a-zA-Z0-9-]+=[a-zA-Z0-9.+-]+)*(;base64)?$"
);
pattern!(COORDINATE, r"^[-+]?[0-9]+(?:\.[0-9]+)?$");
pattern!(SSN, r"^[0-9]{3}[- ]?[0-9]{2}[- ]?[0-9]{4}$");
pattern!(
    MAC,
    r"^(?:(?:[0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}|(?:[0-9A-Fa-f]{4}\.){2}[0-9A-Fa-f]{4})$"
);
pattern!(HOSTNAME_RFC952, r"^[a-zA-Z][a-zA-Z0-9.-]+[a-zA-Z0-9]$");
pattern!(
    HOSTNAME_RFC1123,
    r"^(?:[a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9])(?:\.(?:[a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]))*$"
);
pattern!(
    FQDN,
    r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,63}\.?$"
);

/// The closed set of format names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatType {
    Alpha,
    Alnum,
    AlphaUnicode,
    AlnumUnicode,
    /// Signed decimal, optionally with a fractional part
    Numeric,
    /// Unsigned integer digits only
    Number,
    Hexadecimal,
    Hexcolor,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Email,
    /// Absolute URL with a host, or a `file:` URL
    Url,
    /// Any absolute URI
    Uri,
    Base64,
    Base64url,
    Isbn10,
    Isbn13,
    Isbn,
    Uuid,
    Uuid3,
    Uuid4,
    Uuid5,
    Ascii,
    Printascii,
    Multibyte,
    Datauri,
    Latitude,
    Longitude,
    Ssn,
    Ipv4,
    Ipv6,
    Ip,
    Cidrv4,
    Cidrv6,
    Cidr,
    Mac,
    /// RFC 952 host name
    Hostname,
    /// RFC 1123 host name
    HostnameRfc1123,
    Fqdn,
}

impl FormatType {
    pub const ALL: [FormatType; 41] = [
        FormatType::Alpha,
        FormatType::Alnum,
        FormatType::AlphaUnicode,
        FormatType::AlnumUnicode,
        FormatType::Numeric,
        FormatType::Number,
        FormatType::Hexadecimal,
        FormatType::Hexcolor,
        FormatType::Rgb,
        FormatType::Rgba,
        FormatType::Hsl,
        FormatType::Hsla,
        FormatType::Email,
        FormatType::Url,
        FormatType::Uri,
        FormatType::Base64,
        FormatType::Base64url,
        FormatType::Isbn10,
        FormatType::Isbn13,
        FormatType::Isbn,
        FormatType::Uuid,
        FormatType::Uuid3,
        FormatType::Uuid4,
        FormatType::Uuid5,
        FormatType::Ascii,
        FormatType::Printascii,
        FormatType::Multibyte,
        FormatType::Datauri,
        FormatType::Latitude,
        FormatType::Longitude,
        FormatType::Ssn,
        FormatType::Ipv4,
        FormatType::Ipv6,
        FormatType::Ip,
        FormatType::Cidrv4,
        FormatType::Cidrv6,
        FormatType::Cidr,
        FormatType::Mac,
        FormatType::Hostname,
        FormatType::HostnameRfc1123,
        FormatType::Fqdn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatType::Alpha => "alpha",
            FormatType::Alnum => "alnum",
            FormatType::AlphaUnicode => "alpha_unicode",
            FormatType::AlnumUnicode => "alnum_unicode",
            FormatType::Numeric => "numeric",
            FormatType::Number => "number",
            FormatType::Hexadecimal => "hexadecimal",
            FormatType::Hexcolor => "hexcolor",
            FormatType::Rgb => "rgb",
            FormatType::Rgba => "rgba",
            FormatType::Hsl => "hsl",
            FormatType::Hsla => "hsla",
            FormatType::Email => "email",
            FormatType::Url => "url",
            FormatType::Uri => "uri",
            FormatType::Base64 => "base64",
            FormatType::Base64url => "base64url",
            FormatType::Isbn10 => "isbn10",
            FormatType::Isbn13 => "isbn13",
            FormatType::Isbn => "isbn",
            FormatType::Uuid => "uuid",
            FormatType::Uuid3 => "uuid3",
            FormatType::Uuid4 => "uuid4",
            FormatType::Uuid5 => "uuid5",
            FormatType::Ascii => "ascii",
            FormatType::Printascii => "printascii",
            FormatType::Multibyte => "multibyte",
            FormatType::Datauri => "datauri",
            FormatType::Latitude => "latitude",
            FormatType::Longitude => "longitude",
            FormatType::Ssn => "ssn",
            FormatType::Ipv4 => "ipv4",
            FormatType::Ipv6 => "ipv6",
            FormatType::Ip => "ip",
            FormatType::Cidrv4 => "cidrv4",
            FormatType::Cidrv6 => "cidrv6",
            FormatType::Cidr => "cidr",
            FormatType::Mac => "mac",
            FormatType::Hostname => "hostname",
            FormatType::HostnameRfc1123 => "hostname_rfc1123",
            FormatType::Fqdn => "fqdn",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|format| format.as_str() == name)
    }

    /// Whether `text` is in this format.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            FormatType::Alpha => ALPHA.is_match(text),
            FormatType::Alnum => ALNUM.is_match(text),
            FormatType::AlphaUnicode => ALPHA_UNICODE.is_match(text),
            FormatType::AlnumUnicode => ALNUM_UNICODE.is_match(text),
            FormatType::Numeric => NUMERIC.is_match(text),
            FormatType::Number => NUMBER.is_match(text),
            FormatType::Hexadecimal => HEXADECIMAL.is_match(text),
            FormatType::Hexcolor => HEXCOLOR.is_match(text),
            FormatType::Rgb => is_rgb(text, false),
            FormatType::Rgba => is_rgb(text, true),
            FormatType::Hsl => is_hsl(text, false),
            FormatType::Hsla => is_hsl(text, true),
            FormatType::Email => EMAIL.is_match(text),
            FormatType::Url => is_url(text),
            FormatType::Uri => Url::parse(text).is_ok(),
            FormatType::Base64 => BASE64.is_match(text),
            FormatType::Base64url => BASE64URL.is_match(text),
            FormatType::Isbn10 => is_isbn10(text),
            FormatType::Isbn13 => is_isbn13(text),
            FormatType::Isbn => is_isbn10(text) || is_isbn13(text),
            FormatType::Uuid => UUID.is_match(text),
            FormatType::Uuid3 => UUID3.is_match(text),
            FormatType::Uuid4 => UUID4.is_match(text),
            FormatType::Uuid5 => UUID5.is_match(text),
            FormatType::Ascii => text.is_ascii(),
            FormatType::Printascii => text.bytes().all(|b| (0x20..=0x7e).contains(&b)),
            FormatType::Multibyte => !text.is_ascii(),
            FormatType::Datauri => is_data_uri(text),
            FormatType::Latitude => is_coordinate(text, 90.0),
            FormatType::Longitude => is_coordinate(text, 180.0),
            FormatType::Ssn => SSN.is_match(text),
            FormatType::Ipv4 => text.parse::<Ipv4Addr>().is_ok(),
            FormatType::Ipv6 => text.parse::<Ipv6Addr>().is_ok(),
            FormatType::Ip => text.parse::<IpAddr>().is_ok(),
            FormatType::Cidrv4 => matches!(parse_cidr(text), Some(IpAddr::V4(_))),
            FormatType::Cidrv6 => matches!(parse_cidr(text), Some(IpAddr::V6(_))),
            FormatType::Cidr => parse_cidr(text).is_some(),
            FormatType::Mac => MAC.is_match(text),
            FormatType::Hostname => HOSTNAME_RFC952.is_match(text),
            FormatType::HostnameRfc1123 => HOSTNAME_RFC1123.is_match(text),
            FormatType::Fqdn => FQDN.is_match(text),
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown format '{}'", s))
    }
}

/// Check `text` against the format called `name`.
///
/// Returns `None` if there is no such format.
pub fn is_format(name: &str, text: &str) -> Option<bool> {
    FormatType::from_name(name).map(|format| format.matches(text))
}

fn is_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => url.has_host() || url.scheme() == "file",
        Err(_) => false,
    }
}

/// Arguments of a CSS-style color function such as `rgb(1, 2, 3)`.
fn color_arguments<'a>(text: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = text.strip_prefix(name)?.trim_start().strip_prefix('(')?;
    let inner = inner.strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn is_percent(text: &str) -> bool {
    text.strip_suffix('%')
        .and_then(|number| number.parse::<u8>().ok())
        .map_or(false, |number| number <= 100)
}

fn is_alpha_channel(text: &str) -> bool {
    text.parse::<f64>()
        .map_or(false, |alpha| (0.0..=1.0).contains(&alpha))
}

fn is_rgb(text: &str, with_alpha: bool) -> bool {
    let name = if with_alpha { "rgba" } else { "rgb" };
    let arguments = match color_arguments(text, name) {
        Some(arguments) => arguments,
        None => return false,
    };
    let expected = if with_alpha { 4 } else { 3 };
    if arguments.len() != expected {
        return false;
    }

    let channels = &arguments[..3];
    let channels_ok = channels.iter().all(|c| c.parse::<u8>().is_ok())
        || channels.iter().all(|c| is_percent(c));
    channels_ok && (!with_alpha || is_alpha_channel(arguments[3]))
}

fn is_hsl(text: &str, with_alpha: bool) -> bool {
    let name = if with_alpha { "hsla" } else { "hsl" };
    let arguments = match color_arguments(text, name) {
        Some(arguments) => arguments,
        None => return false,
    };
    let expected = if with_alpha { 4 } else { 3 };
    if arguments.len() != expected {
        return false;
    }

    let hue_ok = arguments[0].parse::<u16>().map_or(false, |hue| hue <= 360);
    hue_ok
        && is_percent(arguments[1])
        && is_percent(arguments[2])
        && (!with_alpha || is_alpha_channel(arguments[3]))
}

fn isbn_digits(text: &str) -> Vec<char> {
    text.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

fn is_isbn10(text: &str) -> bool {
    let digits = isbn_digits(text);
    if digits.len() != 10 {
        return false;
    }

    let mut sum = 0;
    for (i, &c) in digits.iter().enumerate() {
        let value = match (c, i) {
            ('X', 9) => 10,
            (c, _) => match c.to_digit(10) {
                Some(d) => d,
                None => return false,
            },
        };
        sum += (10 - i as u32) * value;
    }
    sum % 11 == 0
}

fn is_isbn13(text: &str) -> bool {
    let digits = isbn_digits(text);
    if digits.len() != 13 {
        return false;
    }

    let mut sum = 0;
    for (i, c) in digits.iter().enumerate() {
        let d = match c.to_digit(10) {
            Some(d) => d,
            None => return false,
        };
        sum += if i % 2 == 0 { d } else { 3 * d };
    }
    sum % 10 == 0
}

fn is_data_uri(text: &str) -> bool {
    let (header, payload) = match text.split_once(',') {
        Some(parts) => parts,
        None => return false,
    };
    match DATA_URI_HEADER.captures(header) {
        Some(captures) if captures.get(1).is_some() => BASE64.is_match(payload),
        Some(_) => true,
        None => false,
    }
}

fn is_coordinate(text: &str, limit: f64) -> bool {
    COORDINATE.is_match(text)
        && text
            .parse::<f64>()
            .map_or(false, |value| (-limit..=limit).contains(&value))
}

fn parse_cidr(text: &str) -> Option<IpAddr> {
    let (address, prefix) = text.split_once('/')?;
    let address: IpAddr = address.parse().ok()?;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let prefix: u8 = prefix.parse().ok()?;
    let max = if address.is_ipv4() { 32 } else { 128 };
    (prefix <= max).then_some(address)
}
