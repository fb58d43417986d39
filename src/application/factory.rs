//! Resolver Factory
//!
//! Creates a `NotationResolver` with infrastructure dependencies wired up.
//! This is the dependency injection point for embedders.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::domain::entities::FileSet;
use crate::domain::ports::{
    ArtifactRelocator, ClassPathRegistry, InstallationContext, RelocationError,
    ResolutionEventSink,
};
use crate::domain::services::NotationResolver;
use crate::domain::value_objects::RelocationKind;
use crate::infrastructure::{
    BaseDirFileResolver, CurrentInstallation, GeneratedJarCache, JarRewriter,
    ManifestClassPathRegistry,
};

#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("no classpath source: set installation.home or provide a registry")]
    MissingClassPathSource,

    #[error("running from an installation at {home} but no relocation tool was provided")]
    MissingRewriter { home: PathBuf },

    #[error("no cache directory: set cache.dir or IMPLDEPS_CACHE_DIR")]
    MissingCacheDir,

    #[error("cannot determine working directory: {0}")]
    WorkingDir(#[from] std::io::Error),
}

/// Stand-in relocator for embedded contexts, where nothing is relocated.
struct DisabledRelocator;

impl ArtifactRelocator for DisabledRelocator {
    fn relocate(
        &self,
        _files: &FileSet,
        display_name: &str,
        _kind: RelocationKind,
    ) -> Result<PathBuf, RelocationError> {
        Err(RelocationError::Rewrite {
            display_name: display_name.to_string(),
            message: "no relocation tool configured".to_string(),
        })
    }
}

pub struct ResolverFactory {
    config: Config,
    registry: Option<Arc<dyn ClassPathRegistry>>,
    rewriter: Option<Arc<dyn JarRewriter>>,
    events: Option<Arc<dyn ResolutionEventSink>>,
}

impl ResolverFactory {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: None,
            rewriter: None,
            events: None,
        }
    }

    /// Use `registry` instead of the installation's classpath manifest
    pub fn with_registry(mut self, registry: Arc<dyn ClassPathRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_rewriter(mut self, rewriter: Arc<dyn JarRewriter>) -> Self {
        self.rewriter = Some(rewriter);
        self
    }

    pub fn with_events(mut self, events: Arc<dyn ResolutionEventSink>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn build(self) -> Result<NotationResolver, FactoryError> {
        let config = &self.config;
        let installation =
            CurrentInstallation::detect(&config.installation, &config.tool.version);
        let detected = installation.installation();

        let home = detected
            .as_ref()
            .map(|i| i.home().to_path_buf())
            .or_else(|| config.installation.home.clone());

        let registry: Arc<dyn ClassPathRegistry> = match (self.registry, &home) {
            (Some(registry), _) => registry,
            (None, Some(home)) => Arc::new(ManifestClassPathRegistry::new(
                home.join(&config.installation.manifest),
                home.clone(),
            )),
            (None, None) => return Err(FactoryError::MissingClassPathSource),
        };

        let base_dir = match &home {
            Some(home) => home.clone(),
            None => std::env::current_dir()?,
        };

        let relocator: Arc<dyn ArtifactRelocator> = match (&detected, self.rewriter) {
            (Some(_), Some(rewriter)) => {
                let cache_dir = config.cache_dir().ok_or(FactoryError::MissingCacheDir)?;
                debug!(cache = %cache_dir.display(), "relocated jars enabled");
                Arc::new(GeneratedJarCache::new(
                    cache_dir,
                    config.tool.name.clone(),
                    config.tool.version.clone(),
                    rewriter,
                ))
            }
            (Some(installation), None) => {
                return Err(FactoryError::MissingRewriter {
                    home: installation.home().to_path_buf(),
                })
            }
            (None, _) => Arc::new(DisabledRelocator),
        };

        let resolver = NotationResolver::new(
            registry,
            Arc::new(installation),
            Arc::new(BaseDirFileResolver::new(base_dir)),
            relocator,
        );

        Ok(match self.events {
            Some(events) => resolver.with_events(events),
            None => resolver,
        })
    }
}
