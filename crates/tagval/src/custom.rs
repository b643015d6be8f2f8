//! Custom validation hooks
//!
//! A type can take part in validation beyond what its tags express by
//! implementing [`Validate`] (called on the value in place) or
//! [`ValidateMut`] (called on a temporary owned copy). The hooks run on every
//! node the walker visits, before the node's tag expression is evaluated.
//!
//! Copyright (c) 2025 Tagval Team
//! Licensed under the Apache-2.0 license

use crate::reflect::Reflect;

/// Error type returned by custom validators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Custom validation on a shared reference.
pub trait Validate {
    fn validate(&self) -> Result<(), BoxError>;
}

/// Custom validation that needs mutable access, e.g. to normalise the value
/// before checking it. The engine runs it on a clone.
pub trait ValidateMut {
    fn validate(&mut self) -> Result<(), BoxError>;
}

/// Run whichever custom validator `value` exposes.
///
/// The direct hook is tried first; the copy-based one only if no direct hook
/// exists.
pub(crate) fn call_custom_validator(value: &dyn Reflect) -> Result<(), BoxError> {
    if let Some(validator) = value.as_validate() {
        return validator.validate();
    }

    match value.validate_copy() {
        Some(result) => result,
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{StructValue, Value};
    use std::cell::Cell;

    struct Direct<'a> {
        calls: &'a Cell<u32>,
        fail: bool,
    }

    impl Validate for Direct<'_> {
        fn validate(&self) -> Result<(), BoxError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err("direct failure".into())
            } else {
                Ok(())
            }
        }
    }

    impl Reflect for Direct<'_> {
        fn reflect(&self) -> Value<'_> {
            Value::Struct(StructValue::new("Direct"))
        }

        fn as_validate(&self) -> Option<&dyn Validate> {
            Some(self)
        }

        fn validate_copy(&self) -> Option<Result<(), BoxError>> {
            panic!("copy hook must not run when a direct hook exists");
        }
    }

    #[derive(Clone)]
    struct Counter {
        value: u32,
    }

    impl ValidateMut for Counter {
        fn validate(&mut self) -> Result<(), BoxError> {
            self.value += 1;
            if self.value > 1 {
                Err(format!("counter reached {}", self.value).into())
            } else {
                Ok(())
            }
        }
    }

    impl Reflect for Counter {
        fn reflect(&self) -> Value<'_> {
            Value::Struct(StructValue::new("Counter"))
        }

        fn validate_copy(&self) -> Option<Result<(), BoxError>> {
            let mut copy = self.clone();
            Some(ValidateMut::validate(&mut copy))
        }
    }

    #[test]
    fn test_direct_hook_runs_once() {
        let calls = Cell::new(0);
        let value = Direct {
            calls: &calls,
            fail: false,
        };
        assert!(call_custom_validator(&value).is_ok());
        assert_eq!(calls.get(), 1);

        let failing = Direct {
            calls: &calls,
            fail: true,
        };
        let err = call_custom_validator(&failing).unwrap_err();
        assert_eq!(err.to_string(), "direct failure");
    }

    #[test]
    fn test_copy_hook_leaves_original_untouched() {
        let counter = Counter { value: 0 };
        assert!(call_custom_validator(&counter).is_ok());
        assert!(call_custom_validator(&counter).is_ok());
        assert_eq!(counter.value, 0);

        let saturated = Counter { value: 1 };
        let err = call_custom_validator(&saturated).unwrap_err();
        assert_eq!(err.to_string(), "counter reached 2");
    }

    #[test]
    fn test_plain_values_have_no_hook() {
        assert!(call_custom_validator(&42i32).is_ok());
        assert!(call_custom_validator(&"text").is_ok());
    }
}
