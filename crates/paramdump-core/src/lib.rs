//! Paramdump core library for decoding binary parameters files.
//!
//! This crate implements the decoding pipeline used by the CLI: a file
//! source reads the complete byte buffer, the `params` decoder validates
//! the structure (magic, group tag, declared length) and decodes typed
//! value records, and the resulting document can be wrapped in a versioned
//! report for rendering. Parsing is byte-oriented and side-effect free; all
//! I/O is isolated in `source`. Format conventions are captured in the
//! reader so the parser stays minimal.
//!
//! Invariants:
//! - Decoding is a pure function of the input bytes and fails fast with an
//!   offset-precise error; no partial document is ever returned.
//! - Record order in the decoded document matches byte order in the input.
//! - Signed and float kinds keep their raw unsigned bit pattern until a
//!   caller opts into reinterpretation.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur de décodage : source -> décodeur `params`
//! (magie, groupe, enregistrements typés) -> document, avec un rapport
//! versionné pour la sortie JSON. Les E/S restent dans `source`, les
//! conventions de format dans le `reader`. Garanties : décodage pur et
//! strict, ordre des enregistrements préservé, motifs binaires bruts
//! conservés pour les types signés et flottants.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use paramdump_core::decode_params_file;
//!
//! let document = decode_params_file(Path::new("device.params"))?;
//! println!("decoded {} values", document.group.values.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

mod params;
mod source;

pub use params::{ParamsError, parse_parameters};
pub use source::{SourceError, read_params_file};

use params::layout;

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when the current time cannot be formatted.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Semantic type of a value record, keyed by its tag byte.
///
/// The set is closed: tags outside `0x1..=0x8` are rejected during decode.
/// `Str` is part of the format's tag table but has no decode rule, so it
/// never appears in a decoded document.
///
/// # Examples
/// ```
/// use paramdump_core::ValueKind;
///
/// assert_eq!(ValueKind::from_tag(0x01), Some(ValueKind::Uint8));
/// assert_eq!(ValueKind::from_tag(0x08), Some(ValueKind::Str));
/// assert_eq!(ValueKind::from_tag(0x09), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Uint8,
    Int8,
    Uint16,
    Int16,
    Uint32,
    Int32,
    Float32,
    Str,
}

impl ValueKind {
    /// Map a tag byte to its kind, or `None` for tags outside the table.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            layout::TAG_UINT8 => Some(Self::Uint8),
            layout::TAG_INT8 => Some(Self::Int8),
            layout::TAG_UINT16 => Some(Self::Uint16),
            layout::TAG_INT16 => Some(Self::Int16),
            layout::TAG_UINT32 => Some(Self::Uint32),
            layout::TAG_INT32 => Some(Self::Int32),
            layout::TAG_FLOAT32 => Some(Self::Float32),
            layout::TAG_STR => Some(Self::Str),
            _ => None,
        }
    }

    /// Tag byte for this kind.
    pub fn tag(self) -> u8 {
        match self {
            Self::Uint8 => layout::TAG_UINT8,
            Self::Int8 => layout::TAG_INT8,
            Self::Uint16 => layout::TAG_UINT16,
            Self::Int16 => layout::TAG_INT16,
            Self::Uint32 => layout::TAG_UINT32,
            Self::Int32 => layout::TAG_INT32,
            Self::Float32 => layout::TAG_FLOAT32,
            Self::Str => layout::TAG_STR,
        }
    }

    /// Fixed payload width in bytes, or `None` for `Str` (no decode rule).
    pub fn payload_width(self) -> Option<usize> {
        match self {
            Self::Uint8 | Self::Int8 => Some(1),
            Self::Uint16 | Self::Int16 => Some(2),
            Self::Uint32 | Self::Int32 | Self::Float32 => Some(4),
            Self::Str => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uint8 => "uint8",
            Self::Int8 => "int8",
            Self::Uint16 => "uint16",
            Self::Int16 => "int16",
            Self::Uint32 => "uint32",
            Self::Int32 => "int32",
            Self::Float32 => "float32",
            Self::Str => "str",
        };
        f.write_str(name)
    }
}

/// One decoded value record.
///
/// Signed and float variants carry unsigned storage: the format reads every
/// payload as a big-endian unsigned integer, and the decoder preserves that
/// bit pattern. Reinterpretation is an explicit, separate step via the
/// `as_*` methods.
///
/// # Examples
/// ```
/// use paramdump_core::ParamValue;
///
/// let value = ParamValue::Float32(0x3F80_0000);
/// assert_eq!(value.as_f32(), Some(1.0));
/// assert_eq!(value.as_i32(), None);
///
/// let value = ParamValue::Int8(0xFF);
/// assert_eq!(value.as_i8(), Some(-1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "raw", rename_all = "snake_case")]
pub enum ParamValue {
    Uint8(u8),
    Int8(u8),
    Uint16(u16),
    Int16(u16),
    Uint32(u32),
    Int32(u32),
    Float32(u32),
}

impl ParamValue {
    /// Kind of this record, as announced by its tag byte.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Uint8(_) => ValueKind::Uint8,
            Self::Int8(_) => ValueKind::Int8,
            Self::Uint16(_) => ValueKind::Uint16,
            Self::Int16(_) => ValueKind::Int16,
            Self::Uint32(_) => ValueKind::Uint32,
            Self::Int32(_) => ValueKind::Int32,
            Self::Float32(_) => ValueKind::Float32,
        }
    }

    /// Raw payload bits, widened to u32.
    pub fn raw_bits(&self) -> u32 {
        match *self {
            Self::Uint8(v) | Self::Int8(v) => u32::from(v),
            Self::Uint16(v) | Self::Int16(v) => u32::from(v),
            Self::Uint32(v) | Self::Int32(v) | Self::Float32(v) => v,
        }
    }

    /// Reinterpret an `Int8` record as a signed 8-bit integer.
    pub fn as_i8(&self) -> Option<i8> {
        match *self {
            Self::Int8(v) => Some(v as i8),
            _ => None,
        }
    }

    /// Reinterpret an `Int16` record as a signed 16-bit integer.
    pub fn as_i16(&self) -> Option<i16> {
        match *self {
            Self::Int16(v) => Some(v as i16),
            _ => None,
        }
    }

    /// Reinterpret an `Int32` record as a signed 32-bit integer.
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Self::Int32(v) => Some(v as i32),
            _ => None,
        }
    }

    /// Reinterpret a `Float32` record's bits as an IEEE-754 float.
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Self::Float32(v) => Some(f32::from_bits(v)),
            _ => None,
        }
    }
}

/// The single tagged section of a parameters file.
///
/// `declared_len` is read from the stream but informational only: the value
/// records run to the end of the buffer regardless of what it says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamGroup {
    /// Group tag byte; always `0x20` in a decoded document.
    pub tag: u8,
    /// Declared group length from the stream (advisory, not enforced).
    pub declared_len: u32,
    /// Decoded value records in input order.
    pub values: Vec<ParamValue>,
}

/// Fully decoded parameters file.
///
/// Produced only by a successful decode of the whole buffer; there is no
/// partial or mutable form.
///
/// # Examples
/// ```
/// use paramdump_core::parse_parameters;
///
/// let mut bytes = vec![0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
/// bytes.push(0x20);
/// bytes.extend_from_slice(&2u32.to_be_bytes());
/// bytes.extend_from_slice(&[0x01, 0x2A]);
///
/// let document = parse_parameters(&bytes)?;
/// assert_eq!(document.group.values.len(), 1);
/// # Ok::<(), paramdump_core::ParamsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParametersDocument {
    /// The file's single group.
    pub group: ParamGroup,
}

/// Decoded document wrapped with tool and input metadata for rendering.
///
/// # Examples
/// ```
/// use paramdump_core::{ParamGroup, ParametersDocument, Report, ToolInfo, InputInfo};
///
/// let report = Report {
///     report_version: paramdump_core::REPORT_VERSION,
///     tool: ToolInfo {
///         name: "paramdump".to_string(),
///         version: "0.1.0".to_string(),
///     },
///     generated_at: paramdump_core::DEFAULT_GENERATED_AT.to_string(),
///     input: InputInfo {
///         path: "device.params".to_string(),
///         bytes: 13,
///     },
///     parameters: ParametersDocument {
///         group: ParamGroup {
///             tag: 0x20,
///             declared_len: 0,
///             values: Vec::new(),
///         },
///     },
/// };
/// assert_eq!(report.report_version, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary format version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// Input file metadata.
    pub input: InputInfo,
    /// The decoded parameters document.
    pub parameters: ParametersDocument,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "paramdump").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input file metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Build a report around a decoded document.
///
/// `generated_at` is the current UTC time in RFC3339, falling back to
/// [`DEFAULT_GENERATED_AT`] when formatting fails.
///
/// # Examples
/// ```
/// use paramdump_core::{ParamGroup, ParametersDocument, make_report};
///
/// let document = ParametersDocument {
///     group: ParamGroup {
///         tag: 0x20,
///         declared_len: 0,
///         values: Vec::new(),
///     },
/// };
/// let report = make_report("device.params", 13, document);
/// assert_eq!(report.report_version, paramdump_core::REPORT_VERSION);
/// assert_eq!(report.input.bytes, 13);
/// ```
pub fn make_report(input_path: &str, input_bytes: u64, parameters: ParametersDocument) -> Report {
    let generated_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| DEFAULT_GENERATED_AT.to_string());
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "paramdump".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at,
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        parameters,
    }
}

/// Errors returned when decoding a parameters file from disk.
#[derive(Debug, Error)]
pub enum FileDecodeError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("parameters decode error: {0}")]
    Params(#[from] ParamsError),
}

/// Read and decode a parameters file in one step.
pub fn decode_params_file(path: &Path) -> Result<ParametersDocument, FileDecodeError> {
    let bytes = read_params_file(path)?;
    Ok(parse_parameters(&bytes)?)
}
