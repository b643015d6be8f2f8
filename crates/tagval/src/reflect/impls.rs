//! [`Reflect`] implementations for standard library and ecosystem types

use super::{Reflect, Value};
use crate::custom::{BoxError, Validate};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

macro_rules! reflect_signed {
    ($($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Value<'_> {
                    Value::Int(*self as i64)
                }
            }
        )*
    };
}

macro_rules! reflect_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Value<'_> {
                    Value::Uint(*self as u64)
                }
            }
        )*
    };
}

reflect_signed!(i8, i16, i32, i64, isize);
reflect_unsigned!(u8, u16, u32, u64, usize);

impl Reflect for bool {
    fn reflect(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl Reflect for f32 {
    fn reflect(&self) -> Value<'_> {
        Value::Float(f64::from(*self))
    }
}

impl Reflect for f64 {
    fn reflect(&self) -> Value<'_> {
        Value::Float(*self)
    }
}

impl Reflect for char {
    fn reflect(&self) -> Value<'_> {
        Value::Other
    }
}

impl Reflect for () {
    fn reflect(&self) -> Value<'_> {
        Value::Other
    }
}

impl Reflect for str {
    fn reflect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Reflect for String {
    fn reflect(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }
}

impl Reflect for Cow<'_, str> {
    fn reflect(&self) -> Value<'_> {
        Value::Str(self.as_ref())
    }
}

/// References are transparent: they reflect, and validate, as their target.
impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_validate(&self) -> Option<&dyn Validate> {
        (**self).as_validate()
    }

    fn validate_copy(&self) -> Option<Result<(), BoxError>> {
        (**self).validate_copy()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Ptr(self.as_ref().map(|target| target as &dyn Reflect))
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Ptr(Some(&**self as &dyn Reflect))
    }
}

impl<T: Reflect> Reflect for Rc<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Ptr(Some(&**self as &dyn Reflect))
    }
}

impl<T: Reflect> Reflect for Arc<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Ptr(Some(&**self as &dyn Reflect))
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Slice(self.iter().map(|item| item as &dyn Reflect).collect())
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Slice(self.iter().map(|item| item as &dyn Reflect).collect())
    }
}

impl<T: Reflect> Reflect for [T] {
    fn reflect(&self) -> Value<'_> {
        Value::Slice(self.iter().map(|item| item as &dyn Reflect).collect())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Value<'_> {
        Value::Array(self.iter().map(|item| item as &dyn Reflect).collect())
    }
}

impl<K: Reflect, V: Reflect, S: BuildHasher> Reflect for HashMap<K, V, S> {
    fn reflect(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect))
                .collect(),
        )
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect))
                .collect(),
        )
    }
}

impl Reflect for std::time::Duration {
    fn reflect(&self) -> Value<'_> {
        Value::Duration(i128::try_from(self.as_nanos()).unwrap_or(i128::MAX))
    }
}

impl Reflect for chrono::TimeDelta {
    fn reflect(&self) -> Value<'_> {
        let nanos = i128::from(self.num_seconds()) * 1_000_000_000
            + i128::from(self.subsec_nanos());
        Value::Duration(nanos)
    }
}

/// JSON documents reflect structurally: `null` is a nil pointer, objects are
/// maps keyed by strings and arrays are slices.
impl Reflect for serde_json::Value {
    fn reflect(&self) -> Value<'_> {
        use serde_json::Value as Json;

        match self {
            Json::Null => Value::Ptr(None),
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::Str(s.as_str()),
            Json::Array(items) => {
                Value::Slice(items.iter().map(|item| item as &dyn Reflect).collect())
            }
            Json::Object(entries) => Value::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect))
                    .collect(),
            ),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            serde_json::Value::Null => "json null",
            serde_json::Value::Bool(_) => "json bool",
            serde_json::Value::Number(_) => "json number",
            serde_json::Value::String(_) => "json string",
            serde_json::Value::Array(_) => "json array",
            serde_json::Value::Object(_) => "json object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Kind;
    use serde_json::json;

    #[test]
    fn test_numeric_widening() {
        assert!(matches!((-5i16).reflect(), Value::Int(-5)));
        assert!(matches!(7u8.reflect(), Value::Uint(7)));
        assert!(matches!(0.5f32.reflect(), Value::Float(f) if f == 0.5));
    }

    #[test]
    fn test_durations_reflect_as_signed_nanos() {
        assert!(matches!(
            std::time::Duration::from_micros(3).reflect(),
            Value::Duration(3_000)
        ));
        assert!(matches!(
            chrono::TimeDelta::milliseconds(-1500).reflect(),
            Value::Duration(-1_500_000_000)
        ));
    }

    #[test]
    fn test_references_are_transparent() {
        let value = 3i32;
        let reference = &value;
        assert_eq!(reference.reflect().kind(), Kind::Int);
        assert_eq!(Reflect::type_name(&reference), "i32");
    }

    #[test]
    fn test_json_values() {
        assert_eq!(json!(null).reflect().kind(), Kind::Ptr);
        assert!(matches!(json!(-1).reflect(), Value::Int(-1)));
        assert!(matches!(json!(u64::MAX).reflect(), Value::Uint(u64::MAX)));
        assert_eq!(json!(1.25).reflect().kind(), Kind::Float);
        assert_eq!(json!({"a": 1}).reflect().len(), Some(1));
        assert_eq!(json!([1, 2]).reflect().kind(), Kind::Slice);
        assert_eq!(Reflect::type_name(&json!("x")), "json string");
    }
}
