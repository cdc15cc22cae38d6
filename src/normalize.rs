/// Reduction of inspected values to canonical comparison forms.
///
/// Integers of every width and signedness become `I64`, floats become
/// `F64`, a `char` becomes a one-character `Str`, and a sequence made only
/// of `u8` elements becomes `Bytes`. Everything else, including the
/// contents of composites, passes through unchanged.
use crate::value::Value;

pub fn normalize(value: Value) -> Value {
    match value {
        Value::I8(v) => Value::I64(v.into()),
        Value::I16(v) => Value::I64(v.into()),
        Value::I32(v) => Value::I64(v.into()),
        Value::U8(v) => Value::I64(v.into()),
        Value::U16(v) => Value::I64(v.into()),
        Value::U32(v) => Value::I64(v.into()),
        // Values above i64::MAX wrap into the negative range.
        Value::U64(v) => Value::I64(v as i64),
        Value::U128(v) => i128::try_from(v).map_or(Value::U128(v), Value::I128),
        Value::F32(v) => Value::F64(v.into()),
        Value::Char(c) => Value::Str(c.to_string()),
        Value::Seq(items) if is_byte_seq(&items) => Value::Bytes(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::U8(b) => Some(b),
                    _ => None,
                })
                .collect(),
        ),
        other => other,
    }
}

fn is_byte_seq(items: &[Value]) -> bool {
    items.iter().all(|item| matches!(item, Value::U8(_)))
}

/// Whether `value` is already in canonical form.
pub fn is_canonical(value: &Value) -> bool {
    match value {
        Value::I8(_)
        | Value::I16(_)
        | Value::I32(_)
        | Value::U8(_)
        | Value::U16(_)
        | Value::U32(_)
        | Value::U64(_)
        | Value::F32(_)
        | Value::Char(_) => false,
        Value::U128(v) => *v > i128::MAX as u128,
        Value::Seq(items) => !is_byte_seq(items),
        _ => true,
    }
}
