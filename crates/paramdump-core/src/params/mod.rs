//! Parameters-file format decoding.
//!
//! The format is a fixed 8-byte magic, one tagged group (tag `0x20` plus a
//! big-endian u32 declared length), then tagged value records until the end
//! of the buffer. The module follows a layered structure:
//! - `layout`: byte offsets, magic and tag constants (source of truth)
//! - `reader`: safe sequential byte access and format conventions
//! - `parser`: document-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Decoding is fail-fast: the first structural violation aborts with an
//! error carrying the offset and the offending tag or kind. The declared
//! group length is recorded but never bounds the record loop. Tag `0x08`
//! (str) is recognized by the format yet has no decode rule, so it fails
//! hard rather than being skipped.
//!
//! Version française (résumé):
//! Décodage du fichier de paramètres : magie fixe, un groupe étiqueté
//! (`0x20` + longueur u32 big-endian), puis des enregistrements typés
//! jusqu'à la fin du tampon. Les positions sont dans `layout`, les
//! conventions dans `reader`. Échec immédiat et précis à la première
//! violation ; la longueur déclarée reste informative.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::ParamsError;
pub use parser::parse_parameters;
