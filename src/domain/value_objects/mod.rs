//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod edit_distance;
mod fingerprint;
mod notation;
mod relocation_kind;

pub use config_warning::ConfigWarning;
pub use edit_distance::levenshtein;
pub use fingerprint::ClasspathFingerprint;
pub use notation::{Notation, NotationDescription, ParseNotationError};
pub use relocation_kind::RelocationKind;
