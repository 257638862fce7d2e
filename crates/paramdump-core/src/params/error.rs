use thiserror::Error;

use crate::ValueKind;

/// Errors returned by parameters-file parsing and reading.
///
/// Every error is terminal: the decoder aborts on the first failure and
/// never substitutes defaults or skips records.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("bad magic at offset 0: expected ff ff 00 00 00 00 00 00")]
    BadMagic,
    #[error("bad group tag at offset {offset}: expected 0x20, got {found:#04x}")]
    BadGroupTag { found: u8, offset: usize },
    #[error("truncated group header at offset {offset}: need {needed} bytes, got {available}")]
    TruncatedGroupHeader {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("unknown value tag {tag:#04x} at offset {offset}")]
    UnknownValueTag { tag: u8, offset: usize },
    #[error("unsupported value kind {kind} at offset {offset}")]
    UnsupportedValueKind { kind: ValueKind, offset: usize },
    #[error("truncated {kind} payload at offset {offset}: need {needed} bytes, got {available}")]
    TruncatedPayload {
        kind: ValueKind,
        offset: usize,
        needed: usize,
        available: usize,
    },
}
