//! Common test utilities for impldeps contract and property tests.
//!
//! This module provides:
//! - `CountingRegistry`: classpath registry that counts lookups per key
//! - `FixedInstallation`: installation context with a fixed answer
//! - `RecordingRelocator`: relocator that records its inputs
//! - `resolver_with`: wires the doubles into a `NotationResolver`

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use impldeps::infrastructure::StaticClassPathRegistry;
use impldeps::{
    ArtifactRelocator, ClassPathError, ClassPathRegistry, FileResolveError, FileResolver,
    FileSet, Installation, InstallationContext, Notation, NotationResolver, RelocationError,
    RelocationKind, ResolutionEvent, ResolutionEventSink,
};

pub fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

pub struct CountingRegistry {
    inner: StaticClassPathRegistry,
    calls: Mutex<HashMap<String, usize>>,
}

impl CountingRegistry {
    pub fn new(entries: &[(Notation, &[&str])]) -> Self {
        let inner = entries
            .iter()
            .fold(StaticClassPathRegistry::new(), |registry, (notation, files)| {
                registry.with_notation(*notation, files.iter().copied())
            });
        Self {
            inner,
            calls: Mutex::new(HashMap::new()),
        }
    }

    pub fn calls(&self, notation: Notation) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(notation.name())
            .copied()
            .unwrap_or(0)
    }

    /// Raw entry for `notation`, without counting the lookup
    pub fn class_path_for_test(&self, notation: Notation) -> Vec<PathBuf> {
        self.inner.class_path(notation.name()).unwrap_or_default()
    }
}

impl ClassPathRegistry for CountingRegistry {
    fn class_path(&self, name: &str) -> Result<Vec<PathBuf>, ClassPathError> {
        *self.calls.lock().unwrap().entry(name.to_string()).or_default() += 1;
        self.inner.class_path(name)
    }
}

pub struct FixedInstallation(pub bool);

impl InstallationContext for FixedInstallation {
    fn installation(&self) -> Option<Installation> {
        self.0.then(|| Installation::new("/opt/tool", "8.2"))
    }
}

pub struct IdentityFileResolver;

impl FileResolver for IdentityFileResolver {
    fn resolve_files(&self, paths: &[PathBuf]) -> Result<FileSet, FileResolveError> {
        Ok(FileSet::from_paths(paths.to_vec()))
    }
}

#[derive(Default)]
pub struct RecordingRelocator {
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
    pub delay: Option<Duration>,
    records: Mutex<Vec<(RelocationKind, Vec<PathBuf>)>>,
}

impl RecordingRelocator {
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn jar(kind: RelocationKind) -> PathBuf {
        PathBuf::from(format!("/cache/generated-jars/tool-{}.jar", kind.base_name()))
    }

    pub fn inputs(&self, kind: RelocationKind) -> Vec<Vec<PathBuf>> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, files)| files.clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ArtifactRelocator for RecordingRelocator {
    fn relocate(
        &self,
        files: &FileSet,
        display_name: &str,
        kind: RelocationKind,
    ) -> Result<PathBuf, RelocationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(RelocationError::Io {
                display_name: display_name.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only cache"),
            });
        }
        self.records.lock().unwrap().push((kind, files.files()));
        Ok(Self::jar(kind))
    }
}

#[derive(Default)]
pub struct RecordingEvents(pub Mutex<Vec<ResolutionEvent>>);

impl ResolutionEventSink for RecordingEvents {
    fn on_event(&self, event: ResolutionEvent) {
        self.0.lock().unwrap().push(event);
    }
}

pub struct Harness {
    pub registry: Arc<CountingRegistry>,
    pub relocator: Arc<RecordingRelocator>,
    pub resolver: NotationResolver,
}

pub fn resolver_with(
    registry: CountingRegistry,
    packaged: bool,
    relocator: RecordingRelocator,
) -> Harness {
    let registry = Arc::new(registry);
    let relocator = Arc::new(relocator);
    let resolver = NotationResolver::new(
        registry.clone(),
        Arc::new(FixedInstallation(packaged)),
        Arc::new(IdentityFileResolver),
        relocator.clone(),
    );
    Harness {
        registry,
        relocator,
        resolver,
    }
}

/// The layout used throughout the contract tests:
/// API `[a, b, c]`, runtime `[b]`, beacon `[c]`, test kit `[x, y, a]`.
pub fn standard_registry() -> CountingRegistry {
    CountingRegistry::new(&[
        (Notation::ToolApi, &["a.jar", "b.jar", "c.jar"]),
        (Notation::ScriptRuntime, &["b.jar"]),
        (Notation::InstallationBeacon, &["c.jar"]),
        (Notation::ToolTestKit, &["x.jar", "y.jar", "a.jar"]),
        (Notation::ToolingApi, &["tooling-api.jar"]),
        (Notation::WorkerProcess, &["worker.jar", "b.jar"]),
    ])
}
