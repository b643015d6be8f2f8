//! Procedural macros for tagval
//!
//! - **`#[derive(Reflect)]`** - exposes a struct and its tagged fields to the
//!   validation engine
//!
//! Copyright (c) 2025 Tagval Team
//! Licensed under the Apache-2.0 license

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod generate;
mod parse;

/// Derives `tagval::Reflect` for a struct.
///
/// # Field attributes
///
/// - `#[tag(validate = "gte=1", other = "...")]` - tag key/value pairs
/// - `#[tag = "validate:\"gte=1\" json:\"count\""]` - the conventional raw
///   tag text
/// - `#[reflect(skip)]` - hide the field from validation
///
/// # Container attributes
///
/// - `#[reflect(validate)]` - run the struct's `tagval::Validate` impl
/// - `#[reflect(validate_mut)]` - run the struct's `tagval::ValidateMut` impl
///   on a clone
///
/// ```rust,ignore
/// use tagval::Reflect;
///
/// #[derive(Reflect)]
/// struct Config {
///     #[tag(validate = "gte=1&lte=65535")]
///     port: u32,
///     #[tag(validate = "[format=hostname] > empty=false")]
///     upstreams: std::collections::HashMap<String, Vec<String>>,
///     #[reflect(skip)]
///     cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(tag, reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate::generate_reflect(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
