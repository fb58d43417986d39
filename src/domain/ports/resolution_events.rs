//! Resolution Event Port
//!
//! Observable interface for the population path of the notation resolver.
//! Cache hits emit nothing.

use std::path::PathBuf;

use crate::domain::value_objects::{Notation, RelocationKind};
use crate::error::ResolutionStage;

/// Event emitted while a notation is being populated
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionEvent {
    /// Cache miss confirmed under the population lock
    Resolving { notation: Notation, packaged: bool },

    /// Handing files to the relocator
    Relocating {
        notation: Notation,
        kind: RelocationKind,
        input_count: usize,
    },

    /// Relocated jar is available
    Relocated {
        notation: Notation,
        kind: RelocationKind,
        artifact: PathBuf,
    },

    /// Dependency was stored in the cache
    Resolved {
        notation: Notation,
        file_count: usize,
        relocated: bool,
    },

    /// Population failed; nothing was cached
    Failed {
        notation: Notation,
        stage: ResolutionStage,
        error: String,
    },
}

/// Trait for receiving resolution events
///
/// Implementations:
/// - `JsonEventSink`: NDJSON event stream
/// - `NoopEventSink`: silent operation
pub trait ResolutionEventSink: Send + Sync {
    fn on_event(&self, event: ResolutionEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ResolutionEventSink for NoopEventSink {
    fn on_event(&self, _event: ResolutionEvent) {}
}
