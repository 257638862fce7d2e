use super::error::ParamsError;
use super::layout;
use super::reader::ParamsReader;
use crate::{ParamGroup, ParamValue, ParametersDocument, ValueKind};

/// Decode a complete parameters file from a byte buffer.
///
/// Single pass, no backtracking: magic, group tag, declared length, then
/// value records until the buffer is exhausted. The declared length is
/// recorded but does not bound the record loop.
pub fn parse_parameters(bytes: &[u8]) -> Result<ParametersDocument, ParamsError> {
    let mut reader = ParamsReader::new(bytes);

    reader.read_magic()?;
    reader.read_group_tag()?;
    let declared_len = reader.read_group_len()?;
    debug_assert_eq!(reader.offset(), layout::VALUES_OFFSET);

    let mut values = Vec::new();
    while let Some((tag, offset)) = reader.read_value_tag() {
        values.push(decode_value(&mut reader, tag, offset)?);
    }
    debug_assert!(reader.is_exhausted());

    Ok(ParametersDocument {
        group: ParamGroup {
            tag: layout::GROUP_TAG,
            declared_len,
            values,
        },
    })
}

fn decode_value(
    reader: &mut ParamsReader<'_>,
    tag: u8,
    offset: usize,
) -> Result<ParamValue, ParamsError> {
    let kind = ValueKind::from_tag(tag).ok_or(ParamsError::UnknownValueTag { tag, offset })?;

    // Signed and float kinds keep their unsigned storage; reinterpretation
    // happens at the consumption boundary, never here.
    match kind {
        ValueKind::Uint8 => Ok(ParamValue::Uint8(reader.read_u8_payload(kind)?)),
        ValueKind::Int8 => Ok(ParamValue::Int8(reader.read_u8_payload(kind)?)),
        ValueKind::Uint16 => Ok(ParamValue::Uint16(reader.read_u16_be_payload(kind)?)),
        ValueKind::Int16 => Ok(ParamValue::Int16(reader.read_u16_be_payload(kind)?)),
        ValueKind::Uint32 => Ok(ParamValue::Uint32(reader.read_u32_be_payload(kind)?)),
        ValueKind::Int32 => Ok(ParamValue::Int32(reader.read_u32_be_payload(kind)?)),
        ValueKind::Float32 => Ok(ParamValue::Float32(reader.read_u32_be_payload(kind)?)),
        ValueKind::Str => Err(ParamsError::UnsupportedValueKind { kind, offset }),
    }
}
