//! Notation resolver
//!
//! Turns a [`Notation`] into a [`ResolvedDependency`], at most once per
//! notation. Hits are served from write-once slots without locking; misses
//! are populated one at a time under a single lock, re-checking the slot
//! after the lock is taken so no jar is ever relocated twice.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{debug, info, warn};

use super::composition::{remove_all, Composition};
use crate::domain::entities::{FileSet, ResolvedDependency};
use crate::domain::ports::{
    ArtifactRelocator, ClassPathRegistry, FileResolver, InstallationContext, NoopEventSink,
    ResolutionEvent, ResolutionEventSink,
};
use crate::domain::value_objects::{Notation, RelocationKind};
use crate::error::{ResolveError, ResolveResult};

/// Write-once slot per notation plus the lock that serializes population.
struct InternCache {
    slots: [OnceLock<Arc<ResolvedDependency>>; Notation::COUNT],
    write_lock: Mutex<()>,
}

/// Proof that the population lock is held.
struct PopulationGuard<'a> {
    _guard: MutexGuard<'a, ()>,
}

impl InternCache {
    fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| OnceLock::new()),
            write_lock: Mutex::new(()),
        }
    }

    fn get(&self, notation: Notation) -> Option<Arc<ResolvedDependency>> {
        self.slots[notation.index()].get().cloned()
    }

    fn lock(&self) -> PopulationGuard<'_> {
        // The lock guards no data and slots are only written on success, so a
        // panic inside a collaborator leaves nothing to repair.
        let guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        PopulationGuard { _guard: guard }
    }

    fn store(
        &self,
        notation: Notation,
        dependency: Arc<ResolvedDependency>,
        _guard: &PopulationGuard<'_>,
    ) -> Arc<ResolvedDependency> {
        self.slots[notation.index()]
            .get_or_init(|| dependency)
            .clone()
    }
}

/// Resolves built-in classpath notations into self-resolving dependencies.
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
pub struct NotationResolver {
    registry: Arc<dyn ClassPathRegistry>,
    installation: Arc<dyn InstallationContext>,
    file_resolver: Arc<dyn FileResolver>,
    relocator: Arc<dyn ArtifactRelocator>,
    events: Arc<dyn ResolutionEventSink>,
    cache: InternCache,
}

impl NotationResolver {
    pub fn new(
        registry: Arc<dyn ClassPathRegistry>,
        installation: Arc<dyn InstallationContext>,
        file_resolver: Arc<dyn FileResolver>,
        relocator: Arc<dyn ArtifactRelocator>,
    ) -> Self {
        Self {
            registry,
            installation,
            file_resolver,
            relocator,
            events: Arc::new(NoopEventSink),
            cache: InternCache::new(),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn ResolutionEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Resolves `notation`, populating the cache on first use.
    ///
    /// Repeated calls return the same `Arc`. On error nothing is cached, so a
    /// later call tries again.
    pub fn resolve(&self, notation: Notation) -> ResolveResult<Arc<ResolvedDependency>> {
        if let Some(dependency) = self.cache.get(notation) {
            return Ok(dependency);
        }

        let guard = self.cache.lock();
        self.maybe_create_under_lock(notation, &guard)
    }

    /// The cached dependency, if `notation` was already resolved. Never blocks.
    pub fn cached(&self, notation: Notation) -> Option<Arc<ResolvedDependency>> {
        self.cache.get(notation)
    }

    fn maybe_create_under_lock(
        &self,
        notation: Notation,
        guard: &PopulationGuard<'_>,
    ) -> ResolveResult<Arc<ResolvedDependency>> {
        if let Some(dependency) = self.cache.get(notation) {
            return Ok(dependency);
        }

        let packaged = self.installation.is_packaged_installation();
        let composition = Composition::for_notation(notation, packaged);
        debug!(%notation, packaged, ?composition, "populating classpath notation");
        self.events
            .on_event(ResolutionEvent::Resolving { notation, packaged });

        match self.create(notation, composition, guard) {
            Ok(files) => {
                let file_count = files.len();
                let dependency = self.cache.store(
                    notation,
                    Arc::new(ResolvedDependency::new(notation, files)),
                    guard,
                );
                self.events.on_event(ResolutionEvent::Resolved {
                    notation,
                    file_count,
                    relocated: composition.relocation_kind().is_some(),
                });
                Ok(dependency)
            }
            Err(err) => {
                warn!(%notation, stage = %err.stage(), error = %err, "classpath notation resolution failed");
                self.events.on_event(ResolutionEvent::Failed {
                    notation,
                    stage: err.stage(),
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn create(
        &self,
        notation: Notation,
        composition: Composition,
        guard: &PopulationGuard<'_>,
    ) -> ResolveResult<FileSet> {
        let classpath = self.fetch(notation, notation)?;
        match composition {
            Composition::Direct => self.resolve_files(notation, &classpath),
            Composition::RelocatedApi => self.api_file_set(classpath),
            Composition::RelocatedTestKit => self.test_kit_file_set(classpath, guard),
        }
    }

    fn api_file_set(&self, mut api: Vec<PathBuf>) -> ResolveResult<FileSet> {
        let notation = Notation::ToolApi;
        // The script runtime is located by file name and the beacon by path,
        // so both stay out of the relocated jar.
        let script_runtime = self.fetch(notation, Notation::ScriptRuntime)?;
        let beacon = self.fetch(notation, Notation::InstallationBeacon)?;
        remove_all(&mut api, script_runtime.iter().chain(beacon.iter()));

        let relocated = self.relocated_jar(notation, &api, RelocationKind::Api)?;

        let untouched: Vec<PathBuf> = script_runtime.into_iter().chain(beacon).collect();
        let untouched = self.resolve_files(notation, &untouched)?;
        Ok(relocated.plus(&untouched))
    }

    fn test_kit_file_set(
        &self,
        mut test_kit: Vec<PathBuf>,
        guard: &PopulationGuard<'_>,
    ) -> ResolveResult<FileSet> {
        let notation = Notation::ToolTestKit;
        let api = self.maybe_create_under_lock(Notation::ToolApi, guard)?;

        let raw_api = self.fetch(notation, Notation::ToolApi)?;
        remove_all(&mut test_kit, raw_api.iter());

        let relocated = self.relocated_jar(notation, &test_kit, RelocationKind::TestKit)?;
        Ok(relocated.plus(api.files()))
    }

    fn relocated_jar(
        &self,
        notation: Notation,
        classpath: &[PathBuf],
        kind: RelocationKind,
    ) -> ResolveResult<FileSet> {
        let inputs = self.resolve_files(notation, classpath)?;
        let display_name = notation.display_name();

        info!(%notation, %kind, inputs = classpath.len(), "generating relocated jar");
        self.events.on_event(ResolutionEvent::Relocating {
            notation,
            kind,
            input_count: classpath.len(),
        });

        let artifact = self
            .relocator
            .relocate(&inputs, display_name, kind)
            .map_err(|source| ResolveError::Relocation {
                notation,
                kind,
                source,
            })?;

        self.events.on_event(ResolutionEvent::Relocated {
            notation,
            kind,
            artifact: artifact.clone(),
        });
        Ok(FileSet::artifact(display_name, artifact))
    }

    /// Raw classpath of `target`, fetched on behalf of `notation`.
    fn fetch(&self, notation: Notation, target: Notation) -> ResolveResult<Vec<PathBuf>> {
        self.registry
            .class_path(target.name())
            .map_err(|source| ResolveError::fetch(notation, target.name(), source))
    }

    fn resolve_files(&self, notation: Notation, paths: &[PathBuf]) -> ResolveResult<FileSet> {
        self.file_resolver
            .resolve_files(paths)
            .map_err(|source| ResolveError::FileResolution { notation, source })
    }
}

impl fmt::Debug for NotationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolved: Vec<Notation> = Notation::ALL
            .into_iter()
            .filter(|n| self.cache.get(*n).is_some())
            .collect();
        f.debug_struct("NotationResolver")
            .field("resolved", &resolved)
            .finish_non_exhaustive()
    }
}
