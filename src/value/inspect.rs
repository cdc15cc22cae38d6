use std::borrow::Cow;

use serde::ser::{self, Serialize};

use super::{Complex, Value, COMPLEX_TOKEN};
use crate::error::InspectError;

/// Inspects any serializable value into a [`Value`].
pub fn inspect<T>(value: &T) -> Result<Value, InspectError>
where
    T: ?Sized + Serialize,
{
    value.serialize(Inspector)
}

/// Serializer whose output is the [`Value`] tree of its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inspector;

impl ser::Serializer for Inspector {
    type Ok = Value;
    type Error = InspectError;

    type SerializeSeq = SeqInspector;
    type SerializeTuple = SeqInspector;
    type SerializeTupleStruct = StructInspector;
    type SerializeTupleVariant = TupleVariantInspector;
    type SerializeMap = MapInspector;
    type SerializeStruct = StructInspector;
    type SerializeStructVariant = StructVariantInspector;

    fn serialize_bool(self, v: bool) -> Result<Value, InspectError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, InspectError> {
        Ok(Value::I8(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, InspectError> {
        Ok(Value::I16(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, InspectError> {
        Ok(Value::I32(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, InspectError> {
        Ok(Value::I64(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value, InspectError> {
        Ok(i64::try_from(v).map_or(Value::I128(v), Value::I64))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, InspectError> {
        Ok(Value::U8(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, InspectError> {
        Ok(Value::U16(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, InspectError> {
        Ok(Value::U32(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, InspectError> {
        Ok(Value::U64(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value, InspectError> {
        Ok(u64::try_from(v).map_or(Value::U128(v), Value::U64))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, InspectError> {
        Ok(Value::F32(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, InspectError> {
        Ok(Value::F64(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, InspectError> {
        Ok(Value::Char(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value, InspectError> {
        Ok(Value::Str(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, InspectError> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value, InspectError> {
        Ok(Value::Nil)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value, InspectError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, InspectError> {
        Ok(Value::Nil)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value, InspectError> {
        Ok(Value::Struct {
            name,
            fields: Vec::new(),
        })
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, InspectError> {
        Ok(Value::Variant {
            name,
            variant,
            payload: Box::new(Value::Nil),
        })
    }

    fn serialize_newtype_struct<T>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<Value, InspectError>
    where
        T: ?Sized + Serialize,
    {
        let inner = value.serialize(self)?;
        if name == COMPLEX_TOKEN {
            return complex_from(inner);
        }
        Ok(inner)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, InspectError>
    where
        T: ?Sized + Serialize,
    {
        Ok(Value::Variant {
            name,
            variant,
            payload: Box::new(value.serialize(self)?),
        })
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqInspector, InspectError> {
        Ok(SeqInspector {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqInspector, InspectError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<StructInspector, InspectError> {
        Ok(StructInspector::new(name, len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<TupleVariantInspector, InspectError> {
        Ok(TupleVariantInspector {
            name,
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapInspector, InspectError> {
        Ok(MapInspector {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<StructInspector, InspectError> {
        Ok(StructInspector::new(name, len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<StructVariantInspector, InspectError> {
        Ok(StructVariantInspector {
            name,
            fields: StructInspector::new(variant, len),
        })
    }
}

fn complex_from(inner: Value) -> Result<Value, InspectError> {
    match inner {
        Value::Seq(parts) => match parts.as_slice() {
            [Value::F64(re), Value::F64(im)] => Ok(Value::Complex(Complex::new(*re, *im))),
            _ => Err(InspectError::malformed_complex(Value::Seq(parts).to_string())),
        },
        other => Err(InspectError::malformed_complex(other.to_string())),
    }
}

pub struct SeqInspector {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SeqInspector {
    type Ok = Value;
    type Error = InspectError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), InspectError>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(Inspector)?);
        Ok(())
    }

    fn end(self) -> Result<Value, InspectError> {
        Ok(Value::Seq(self.items))
    }
}

impl ser::SerializeTuple for SeqInspector {
    type Ok = Value;
    type Error = InspectError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), InspectError>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, InspectError> {
        ser::SerializeSeq::end(self)
    }
}

pub struct StructInspector {
    name: &'static str,
    fields: Vec<(Cow<'static, str>, Value)>,
}

impl StructInspector {
    fn new(name: &'static str, len: usize) -> Self {
        Self {
            name,
            fields: Vec::with_capacity(len),
        }
    }

    fn finish(self) -> Value {
        Value::Struct {
            name: self.name,
            fields: self.fields,
        }
    }
}

impl ser::SerializeStruct for StructInspector {
    type Ok = Value;
    type Error = InspectError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), InspectError>
    where
        T: ?Sized + Serialize,
    {
        self.fields
            .push((Cow::Borrowed(key), value.serialize(Inspector)?));
        Ok(())
    }

    fn end(self) -> Result<Value, InspectError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for StructInspector {
    type Ok = Value;
    type Error = InspectError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), InspectError>
    where
        T: ?Sized + Serialize,
    {
        let position = Cow::Owned(self.fields.len().to_string());
        self.fields.push((position, value.serialize(Inspector)?));
        Ok(())
    }

    fn end(self) -> Result<Value, InspectError> {
        Ok(self.finish())
    }
}

pub struct TupleVariantInspector {
    name: &'static str,
    variant: &'static str,
    items: Vec<Value>,
}

impl ser::SerializeTupleVariant for TupleVariantInspector {
    type Ok = Value;
    type Error = InspectError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), InspectError>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(Inspector)?);
        Ok(())
    }

    fn end(self) -> Result<Value, InspectError> {
        Ok(Value::Variant {
            name: self.name,
            variant: self.variant,
            payload: Box::new(Value::Seq(self.items)),
        })
    }
}

pub struct StructVariantInspector {
    name: &'static str,
    fields: StructInspector,
}

impl ser::SerializeStructVariant for StructVariantInspector {
    type Ok = Value;
    type Error = InspectError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), InspectError>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(&mut self.fields, key, value)
    }

    fn end(self) -> Result<Value, InspectError> {
        let variant = self.fields.name;
        Ok(Value::Variant {
            name: self.name,
            variant,
            payload: Box::new(self.fields.finish()),
        })
    }
}

pub struct MapInspector {
    entries: Vec<(Value, Value)>,
    pending_key: Option<Value>,
}

impl ser::SerializeMap for MapInspector {
    type Ok = Value;
    type Error = InspectError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), InspectError>
    where
        T: ?Sized + Serialize,
    {
        if self.pending_key.is_some() {
            return Err(InspectError::DanglingKey);
        }
        self.pending_key = Some(key.serialize(Inspector)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), InspectError>
    where
        T: ?Sized + Serialize,
    {
        let key = self.pending_key.take().ok_or(InspectError::OrphanValue)?;
        self.entries.push((key, value.serialize(Inspector)?));
        Ok(())
    }

    fn end(self) -> Result<Value, InspectError> {
        if self.pending_key.is_some() {
            return Err(InspectError::DanglingKey);
        }
        Ok(Value::Map(self.entries))
    }
}
