//! Runtime introspection for validated values
//!
//! The engine walks values it knows nothing about at compile time. Every type
//! that takes part in validation implements [`Reflect`], which exposes the
//! value as a borrowed [`Value`] tree: scalars, sized containers, pointers and
//! structs with tagged fields. Structs usually get their implementation from
//! `#[derive(Reflect)]`.
//!
//! Copyright (c) 2025 Tagval Team
//! Licensed under the Apache-2.0 license

mod impls;
mod tag;

pub use tag::StructTag;

use crate::custom::{BoxError, Validate};
use crate::literal::format_duration;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};
use std::fmt;

/// A type whose values can be inspected by the validation engine.
pub trait Reflect {
    /// Expose the value for inspection.
    fn reflect(&self) -> Value<'_>;

    /// Name of the concrete type, used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Custom validation invoked directly on the value.
    fn as_validate(&self) -> Option<&dyn Validate> {
        None
    }

    /// Custom validation that needs an owned, mutable copy of the value.
    ///
    /// Consulted only when [`Reflect::as_validate`] returns `None`. The copy
    /// is discarded afterwards, so the validated value is never mutated.
    fn validate_copy(&self) -> Option<Result<(), BoxError>> {
        None
    }
}

/// Classification of a reflected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Uint,
    Float,
    String,
    Map,
    Slice,
    Array,
    Ptr,
    Struct,
    /// Anything that can neither be compared nor descended into.
    Other,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Map => "map",
            Kind::Slice => "slice",
            Kind::Array => "array",
            Kind::Ptr => "ptr",
            Kind::Struct => "struct",
            Kind::Other => "other",
        };
        f.write_str(name)
    }
}

/// A borrowed view of a value.
pub enum Value<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    /// A signed span of time in nanoseconds. Classified as [`Kind::Int`],
    /// but validator arguments are read as duration literals.
    Duration(i128),
    Str(&'a str),
    Map(Vec<(&'a dyn Reflect, &'a dyn Reflect)>),
    Slice(Vec<&'a dyn Reflect>),
    Array(Vec<&'a dyn Reflect>),
    /// A nullable indirection; `None` is nil.
    Ptr(Option<&'a dyn Reflect>),
    Struct(StructValue<'a>),
    Other,
}

impl<'a> Value<'a> {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) | Value::Duration(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::String,
            Value::Map(_) => Kind::Map,
            Value::Slice(_) => Kind::Slice,
            Value::Array(_) => Kind::Array,
            Value::Ptr(_) => Kind::Ptr,
            Value::Struct(_) => Kind::Struct,
            Value::Other => Kind::Other,
        }
    }

    /// Length of a sized value: bytes of a string, entries of a map,
    /// elements of a slice or array. `None` for every other kind.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.len()),
            Value::Map(entries) => Some(entries.len()),
            Value::Slice(items) | Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|len| len == 0)
    }

    /// Nil-ness of a pointer. `None` for every other kind.
    pub fn is_nil(&self) -> Option<bool> {
        match self {
            Value::Ptr(target) => Some(target.is_none()),
            _ => None,
        }
    }

    /// Owned JSON rendering of the value, used for error diagnostics.
    pub fn snapshot(&self) -> JsonValue {
        match self {
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(i) => JsonValue::from(*i),
            Value::Uint(u) => JsonValue::from(*u),
            Value::Float(f) => Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Duration(nanos) => JsonValue::String(format_duration(*nanos)),
            Value::Str(s) => JsonValue::String((*s).to_string()),
            Value::Map(entries) => {
                let mut object = JsonMap::new();
                for (key, value) in entries {
                    let key = match key.reflect().snapshot() {
                        JsonValue::String(s) => s,
                        other => other.to_string(),
                    };
                    object.insert(key, value.reflect().snapshot());
                }
                JsonValue::Object(object)
            }
            Value::Slice(items) | Value::Array(items) => {
                JsonValue::Array(items.iter().map(|item| item.reflect().snapshot()).collect())
            }
            Value::Ptr(None) | Value::Other => JsonValue::Null,
            Value::Ptr(Some(target)) => target.reflect().snapshot(),
            Value::Struct(s) => {
                let mut object = JsonMap::new();
                for field in &s.fields {
                    object.insert(field.name.to_string(), field.value.reflect().snapshot());
                }
                JsonValue::Object(object)
            }
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.snapshot())
    }
}

/// A struct exposed field by field, in declaration order.
pub struct StructValue<'a> {
    pub name: &'a str,
    pub fields: Vec<Field<'a>>,
}

impl<'a> StructValue<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, name: &'a str, tag: StructTag<'a>, value: &'a dyn Reflect) -> Self {
        self.fields.push(Field { name, tag, value });
        self
    }
}

/// One visible field of a struct.
pub struct Field<'a> {
    pub name: &'a str,
    pub tag: StructTag<'a>,
    pub value: &'a dyn Reflect,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_kinds_of_builtin_types() {
        assert_eq!(true.reflect().kind(), Kind::Bool);
        assert_eq!((-3i8).reflect().kind(), Kind::Int);
        assert_eq!(3usize.reflect().kind(), Kind::Uint);
        assert_eq!(1.5f32.reflect().kind(), Kind::Float);
        assert_eq!("abc".reflect().kind(), Kind::String);
        assert_eq!(vec![1, 2].reflect().kind(), Kind::Slice);
        assert_eq!([1, 2, 3].reflect().kind(), Kind::Array);
        assert_eq!(Some(1).reflect().kind(), Kind::Ptr);
        assert_eq!(Box::new(1).reflect().kind(), Kind::Ptr);
        assert_eq!(BTreeMap::from([(1, 2)]).reflect().kind(), Kind::Map);
        assert_eq!(std::time::Duration::from_secs(1).reflect().kind(), Kind::Int);
        assert_eq!(().reflect().kind(), Kind::Other);
    }

    #[test]
    fn test_len_and_nil() {
        assert_eq!("héllo".reflect().len(), Some(6));
        assert_eq!(vec![1, 2, 3].reflect().len(), Some(3));
        assert_eq!(42i32.reflect().len(), None);
        assert_eq!(None::<i32>.reflect().is_nil(), Some(true));
        assert_eq!(Some(1).reflect().is_nil(), Some(false));
        assert_eq!("x".reflect().is_nil(), None);
    }

    #[test]
    fn test_snapshot_renders_nested_values() {
        let data = BTreeMap::from([("a", vec![Some(1), None])]);
        assert_eq!(data.reflect().snapshot(), json!({"a": [1, null]}));
        assert_eq!(
            std::time::Duration::from_millis(1500).reflect().snapshot(),
            json!("1.5s")
        );
        assert_eq!(f64::NAN.reflect().snapshot(), JsonValue::Null);
    }

    #[test]
    fn test_struct_value_builder_keeps_declaration_order() {
        let age = 3u8;
        let name = String::from("x");
        let value = StructValue::new("Pet")
            .field("name", StructTag::empty(), &name)
            .field("age", StructTag::pairs(&[("validate", "gt=0")]), &age);

        let names: Vec<_> = value.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "age"]);
        assert_eq!(
            value.fields[1].tag.get("validate").as_deref(),
            Some("gt=0")
        );
    }
}
