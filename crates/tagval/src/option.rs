//! Validation options
//!
//! Options can be built directly, deserialized from configuration, or
//! assembled from functional modifiers such as [`tag_name`].
//!
//! Copyright (c) 2025 Tagval Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::reflect::Reflect;
use crate::walker::Walker;
use serde::{Deserialize, Serialize};

/// Tag key read by default.
pub const DEFAULT_TAG_NAME: &str = "validate";

/// A modifier applied to [`ValidationOption`] before validation starts.
pub type OptionFn = Box<dyn FnOnce(&mut ValidationOption)>;

/// Read constraint expressions from the `name` tag key instead of
/// [`DEFAULT_TAG_NAME`].
pub fn tag_name(name: impl Into<String>) -> OptionFn {
    let name = name.into();
    Box::new(move |option| option.tag_name = name)
}

/// Settings for one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOption {
    /// Tag key holding constraint expressions
    pub tag_name: String,
}

impl Default for ValidationOption {
    fn default() -> Self {
        Self {
            tag_name: DEFAULT_TAG_NAME.to_string(),
        }
    }
}

impl ValidationOption {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, then every modifier in order.
    pub fn from_fns<I>(option_fns: I) -> Self
    where
        I: IntoIterator<Item = OptionFn>,
    {
        let mut option = Self::default();
        for option_fn in option_fns {
            option_fn(&mut option);
        }
        option
    }

    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    /// Validate `value` with these options.
    pub fn validate<T: Reflect>(&self, value: &T) -> Result<()> {
        Walker::new(self).validate_field(value, "", "")
    }
}
