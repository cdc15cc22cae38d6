/// Dynamic value representation for assertion operands.
///
/// Any `Serialize` type is inspected into a [`Value`] that keeps the runtime
/// kind of every scalar (an `u8` stays distinct from an `i64`), so the
/// normalizer can decide which kinds collapse and the comparator can walk
/// composites structurally.
mod inspect;

pub use inspect::{inspect, Inspector};

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// Newtype-struct name that marks a serialized [`Complex`].
pub(crate) const COMPLEX_TOKEN: &str = "$assay::Complex";

#[derive(Clone)]
pub enum Value {
    /// `None`, `()` and other absent values.
    Nil,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    /// 128-bit integers outside the 64-bit range; smaller ones inspect as
    /// `I64`/`U64`.
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    F32(f32),
    F64(f64),
    Complex(Complex),
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
    /// Sequences and tuples.
    Seq(Vec<Value>),
    /// Key/value pairs in serialization order.
    Map(Vec<(Value, Value)>),
    /// Named-field, tuple and unit structs. Tuple struct fields are named
    /// by position.
    Struct {
        name: &'static str,
        fields: Vec<(Cow<'static, str>, Value)>,
    },
    /// Enum variants. Unit variants carry `Nil`, tuple variants a `Seq` and
    /// struct variants a `Struct` named after the variant.
    Variant {
        name: &'static str,
        variant: &'static str,
        payload: Box<Value>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    F32,
    F64,
    Complex,
    Char,
    Str,
    Bytes,
    Seq,
    Map,
    Struct,
    Variant,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Complex => "complex",
            Self::Char => "char",
            Self::Str => "str",
            Self::Bytes => "bytes",
            Self::Seq => "seq",
            Self::Map => "map",
            Self::Struct => "struct",
            Self::Variant => "variant",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::U128
        )
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || matches!(self, Self::F32 | Self::F64 | Self::Complex)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complex number with 64-bit parts.
///
/// Serializes through a marker newtype so inspection recognizes it as a
/// complex scalar rather than a pair of floats.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl Serialize for Complex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(COMPLEX_TOKEN, &(self.re, self.im))
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{:+}i)", self.re, self.im)
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::I8(_) => Kind::I8,
            Self::I16(_) => Kind::I16,
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
            Self::I128(_) => Kind::I128,
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            Self::U128(_) => Kind::U128,
            Self::F32(_) => Kind::F32,
            Self::F64(_) => Kind::F64,
            Self::Complex(_) => Kind::Complex,
            Self::Char(_) => Kind::Char,
            Self::Str(_) => Kind::Str,
            Self::Bytes(_) => Kind::Bytes,
            Self::Seq(_) => Kind::Seq,
            Self::Map(_) => Kind::Map,
            Self::Struct { .. } => Kind::Struct,
            Self::Variant { .. } => Kind::Variant,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Number of elements for container kinds; byte length for strings.
    /// `Nil` counts as an empty container.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Nil => Some(0),
            Self::Str(s) => Some(s.len()),
            Self::Bytes(b) => Some(b.len()),
            Self::Seq(items) => Some(items.len()),
            Self::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Looks up a map entry by key.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        match self {
            Self::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Looks up a struct field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Struct { fields, .. } => fields.iter().find(|(k, _)| k == name).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::I8(a), Self::I8(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::I128(a), Self::I128(b)) => a == b,
            (Self::U8(a), Self::U8(b)) => a == b,
            (Self::U16(a), Self::U16(b)) => a == b,
            (Self::U32(a), Self::U32(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::U128(a), Self::U128(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a == b,
            (Self::F64(a), Self::F64(b)) => a == b,
            (Self::Complex(a), Self::Complex(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            // Order-insensitive: hash maps serialize in arbitrary order.
            (Self::Map(a), Self::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| other.get(k) == Some(v))
                    && b.iter().all(|(k, v)| self.get(k) == Some(v))
            }
            (
                Self::Struct {
                    name: a_name,
                    fields: a_fields,
                },
                Self::Struct {
                    name: b_name,
                    fields: b_fields,
                },
            ) => a_name == b_name && a_fields == b_fields,
            (
                Self::Variant {
                    name: a_name,
                    variant: a_variant,
                    payload: a_payload,
                },
                Self::Variant {
                    name: b_name,
                    variant: b_variant,
                    payload: b_payload,
                },
            ) => a_name == b_name && a_variant == b_variant && a_payload == b_payload,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(v) => fmt::Debug::fmt(v, f),
            Self::I8(v) => fmt::Debug::fmt(v, f),
            Self::I16(v) => fmt::Debug::fmt(v, f),
            Self::I32(v) => fmt::Debug::fmt(v, f),
            Self::I64(v) => fmt::Debug::fmt(v, f),
            Self::I128(v) => fmt::Debug::fmt(v, f),
            Self::U8(v) => fmt::Debug::fmt(v, f),
            Self::U16(v) => fmt::Debug::fmt(v, f),
            Self::U32(v) => fmt::Debug::fmt(v, f),
            Self::U64(v) => fmt::Debug::fmt(v, f),
            Self::U128(v) => fmt::Debug::fmt(v, f),
            Self::F32(v) => fmt::Debug::fmt(v, f),
            Self::F64(v) => fmt::Debug::fmt(v, f),
            Self::Complex(c) => fmt::Display::fmt(c, f),
            Self::Char(c) => fmt::Debug::fmt(c, f),
            Self::Str(s) => fmt::Debug::fmt(s, f),
            Self::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),
            Self::Seq(items) => f.debug_list().entries(items).finish(),
            Self::Map(entries) => f
                .debug_map()
                .entries(entries.iter().map(|(k, v)| (k, v)))
                .finish(),
            Self::Struct { name, fields } => fmt_struct(f, name, fields),
            Self::Variant {
                name,
                variant,
                payload,
            } => {
                let path = format!("{name}::{variant}");
                match payload.as_ref() {
                    Self::Nil => f.write_str(&path),
                    Self::Seq(items) => {
                        let mut tuple = f.debug_tuple(&path);
                        for item in items {
                            tuple.field(item);
                        }
                        tuple.finish()
                    }
                    Self::Struct { fields, .. } => fmt_struct(f, &path, fields),
                    other => f.debug_tuple(&path).field(other).finish(),
                }
            }
        }
    }
}

fn fmt_struct(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    fields: &[(Cow<'static, str>, Value)],
) -> fmt::Result {
    if fields.is_empty() {
        return f.write_str(name);
    }
    let mut builder = f.debug_struct(name);
    for (field, value) in fields {
        builder.field(field, value);
    }
    builder.finish()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::I64(1).kind().as_str(), "i64");
        assert_eq!(Value::Str("a".into()).kind().to_string(), "str");
        assert_eq!(Value::Nil.kind(), Kind::Nil);
    }

    #[test]
    fn test_kind_categories() {
        assert!(Kind::U16.is_integer());
        assert!(Kind::Complex.is_numeric());
        assert!(!Kind::Complex.is_integer());
        assert!(!Kind::Str.is_numeric());
    }

    #[test]
    fn test_len_of_containers() {
        assert_eq!(Value::Str("héllo".into()).len(), Some(6));
        assert_eq!(Value::Seq(vec![Value::I64(1), Value::I64(2)]).len(), Some(2));
        assert_eq!(Value::Nil.len(), Some(0));
        assert_eq!(Value::I64(3).len(), None);
    }

    #[test]
    fn test_map_equality_ignores_order() {
        let a = Value::Map(vec![
            (Value::Str("a".into()), Value::I64(1)),
            (Value::Str("b".into()), Value::I64(2)),
        ]);
        let b = Value::Map(vec![
            (Value::Str("b".into()), Value::I64(2)),
            (Value::Str("a".into()), Value::I64(1)),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_map_inspects_equal_regardless_of_order() {
        let mut a = HashMap::new();
        let mut b = HashMap::new();
        for i in 0..32 {
            a.insert(i, i * 2);
        }
        for i in (0..32).rev() {
            b.insert(i, i * 2);
        }
        assert_eq!(inspect(&a).unwrap(), inspect(&b).unwrap());
    }

    #[test]
    fn test_map_equality_with_repeated_keys_is_symmetric() {
        let repeated = Value::Map(vec![
            (Value::I64(1), Value::I64(1)),
            (Value::I64(1), Value::I64(1)),
        ]);
        let distinct = Value::Map(vec![
            (Value::I64(1), Value::I64(1)),
            (Value::I64(2), Value::I64(2)),
        ]);
        assert_ne!(repeated, distinct);
        assert_ne!(distinct, repeated);
    }

    #[test]
    fn test_wide_integer_kinds() {
        assert_eq!(Value::I128(i128::MIN).kind().as_str(), "i128");
        assert!(Kind::U128.is_numeric());
        assert_eq!(Value::U128(u128::MAX).to_string(), u128::MAX.to_string());
    }

    #[test]
    fn test_nan_is_never_equal() {
        assert_ne!(Value::F64(f64::NAN), Value::F64(f64::NAN));
    }

    #[test]
    fn test_different_kinds_are_not_equal() {
        assert_ne!(Value::U8(7), Value::I64(7));
        assert_ne!(Value::I64(7), Value::Str("7".into()));
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Str("boom".into()).to_string(), "\"boom\"");
        assert_eq!(Value::Bytes(b"ab\x01".to_vec()).to_string(), "b\"ab\\x01\"");
        assert_eq!(Value::Complex(Complex::new(1.0, -2.0)).to_string(), "(1-2i)");
        assert_eq!(Value::Nil.to_string(), "nil");
    }

    #[test]
    fn test_display_composites() {
        let point = Value::Struct {
            name: "Point",
            fields: vec![("x".into(), Value::I32(1)), ("y".into(), Value::I32(2))],
        };
        assert_eq!(point.to_string(), "Point { x: 1, y: 2 }");

        let shape = Value::Variant {
            name: "Shape",
            variant: "Circle",
            payload: Box::new(Value::F64(1.5)),
        };
        assert_eq!(shape.to_string(), "Shape::Circle(1.5)");

        let list = Value::Seq(vec![Value::I64(1), Value::I64(2)]);
        assert_eq!(list.to_string(), "[1, 2]");
    }

    #[test]
    fn test_field_lookup() {
        let point = Value::Struct {
            name: "Point",
            fields: vec![("x".into(), Value::I32(1))],
        };
        assert_eq!(point.field("x"), Some(&Value::I32(1)));
        assert_eq!(point.field("z"), None);
    }
}
