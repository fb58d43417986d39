//! Generated Jar Cache
//!
//! Implements the ArtifactRelocator port on top of an external rewriting
//! tool. Jars land in `<cache>/generated-jars/` under a name derived from the
//! tool version and a fingerprint of the inputs, so an existing jar is reused
//! across processes. Generation of one jar is serialized across processes by
//! an exclusive lock file and published with an atomic rename.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use tracing::{debug, info};

use crate::domain::entities::FileSet;
use crate::domain::ports::{ArtifactRelocator, RelocationError};
use crate::domain::value_objects::{ClasspathFingerprint, RelocationKind};

/// Error reported by a [`JarRewriter`]
pub type RewriteError = Box<dyn std::error::Error + Send + Sync>;

/// The relocation tool: rewrites `inputs` into a single jar at `output`
/// with their packages moved under the tool's private namespace.
pub trait JarRewriter: Send + Sync {
    fn rewrite(
        &self,
        inputs: &[PathBuf],
        kind: RelocationKind,
        output: &Path,
    ) -> Result<(), RewriteError>;
}

pub struct GeneratedJarCache {
    jars_dir: PathBuf,
    tool_name: String,
    version: String,
    rewriter: Arc<dyn JarRewriter>,
}

impl GeneratedJarCache {
    pub fn new(
        cache_dir: impl AsRef<Path>,
        tool_name: impl Into<String>,
        version: impl Into<String>,
        rewriter: Arc<dyn JarRewriter>,
    ) -> Self {
        Self {
            jars_dir: cache_dir.as_ref().join("generated-jars"),
            tool_name: tool_name.into(),
            version: version.into(),
            rewriter,
        }
    }

    pub fn jars_dir(&self) -> &Path {
        &self.jars_dir
    }

    /// Where the jar for `kind` built from `inputs` lives
    pub fn jar_path(&self, kind: RelocationKind, inputs: &[PathBuf]) -> PathBuf {
        let fingerprint = ClasspathFingerprint::compute(kind, inputs.iter().map(PathBuf::as_path));
        self.jars_dir.join(format!(
            "{}-{}-{}-{}.jar",
            self.tool_name,
            kind.base_name(),
            self.version,
            fingerprint.short()
        ))
    }

    fn generate_locked(
        &self,
        inputs: &[PathBuf],
        display_name: &str,
        kind: RelocationKind,
        jar: &Path,
    ) -> Result<(), RelocationError> {
        // Another process may have finished while we waited for the lock
        if jar.is_file() {
            debug!(jar = %jar.display(), "relocated jar generated concurrently");
            return Ok(());
        }

        let io_error = |source| RelocationError::Io {
            display_name: display_name.to_string(),
            source,
        };

        let staging = tempfile::Builder::new()
            .prefix(".")
            .suffix(".jar.part")
            .tempfile_in(&self.jars_dir)
            .map_err(io_error)?;

        self.rewriter
            .rewrite(inputs, kind, staging.path())
            .map_err(|e| RelocationError::Rewrite {
                display_name: display_name.to_string(),
                message: e.to_string(),
            })?;

        staging.persist(jar).map_err(|e| io_error(e.error))?;
        info!(jar = %jar.display(), inputs = inputs.len(), "generated relocated jar");
        Ok(())
    }
}

impl ArtifactRelocator for GeneratedJarCache {
    fn relocate(
        &self,
        files: &FileSet,
        display_name: &str,
        kind: RelocationKind,
    ) -> Result<PathBuf, RelocationError> {
        let inputs = files.files();
        let jar = self.jar_path(kind, &inputs);
        if jar.is_file() {
            debug!(jar = %jar.display(), "reusing relocated jar");
            return Ok(jar);
        }

        fs::create_dir_all(&self.jars_dir).map_err(|source| RelocationError::Io {
            display_name: display_name.to_string(),
            source,
        })?;

        let lock_path = jar.with_extension("lock");
        let lock_error = |source| RelocationError::Lock {
            path: lock_path.clone(),
            source,
        };
        let lock_file = fs::File::create(&lock_path).map_err(lock_error)?;
        lock_file.lock_exclusive().map_err(lock_error)?;

        let result = self.generate_locked(&inputs, display_name, kind, &jar);

        // Once the jar exists nobody needs the lock again; a waiter still
        // holding the unlinked file re-checks the jar and returns.
        if result.is_ok() {
            let _ = fs::remove_file(&lock_path);
        }
        let _ = FileExt::unlock(&lock_file);
        result.map(|()| jar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    /// Writes the input list into the output instead of real bytecode.
    #[derive(Default)]
    struct ListingRewriter {
        calls: AtomicUsize,
    }

    impl JarRewriter for ListingRewriter {
        fn rewrite(
            &self,
            inputs: &[PathBuf],
            kind: RelocationKind,
            output: &Path,
        ) -> Result<(), RewriteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let listing: Vec<String> = inputs.iter().map(|p| p.display().to_string()).collect();
            fs::write(output, format!("{}\n{}", kind, listing.join("\n")))?;
            Ok(())
        }
    }

    struct FailingRewriter;

    impl JarRewriter for FailingRewriter {
        fn rewrite(&self, _: &[PathBuf], _: RelocationKind, _: &Path) -> Result<(), RewriteError> {
            Err("zip END header not found".into())
        }
    }

    #[test]
    fn jar_name_contains_tool_kind_version_and_fingerprint() {
        let cache = GeneratedJarCache::new(
            "/cache",
            "tool",
            "8.2",
            Arc::new(ListingRewriter::default()),
        );
        let jar = cache.jar_path(RelocationKind::TestKit, &[PathBuf::from("a.jar")]);
        let name = jar.file_name().unwrap().to_string_lossy().to_string();

        assert!(jar.starts_with("/cache/generated-jars"));
        assert!(name.starts_with("tool-test-kit-8.2-"));
        assert!(name.ends_with(".jar"));
    }

    #[test]
    fn relocate_generates_once_and_reuses() {
        let dir = tempdir().unwrap();
        let rewriter = Arc::new(ListingRewriter::default());
        let cache = GeneratedJarCache::new(dir.path(), "tool", "8.2", rewriter.clone());
        let files = FileSet::from_paths(["/opt/tool/lib/a.jar"]);

        let first = cache.relocate(&files, "toolApi()", RelocationKind::Api).unwrap();
        let second = cache.relocate(&files, "toolApi()", RelocationKind::Api).unwrap();

        assert_eq!(first, second);
        assert_eq!(rewriter.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            "api\n/opt/tool/lib/a.jar"
        );
    }

    #[test]
    fn second_cache_instance_reuses_existing_jar() {
        let dir = tempdir().unwrap();
        let files = FileSet::from_paths(["/opt/tool/lib/a.jar"]);
        let first = GeneratedJarCache::new(dir.path(), "tool", "8.2", Arc::new(ListingRewriter::default()));
        first.relocate(&files, "toolApi()", RelocationKind::Api).unwrap();

        let rewriter = Arc::new(ListingRewriter::default());
        let second = GeneratedJarCache::new(dir.path(), "tool", "8.2", rewriter.clone());
        second.relocate(&files, "toolApi()", RelocationKind::Api).unwrap();

        assert_eq!(rewriter.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn successful_generation_removes_lock_file() {
        let dir = tempdir().unwrap();
        let cache = GeneratedJarCache::new(dir.path(), "tool", "8.2", Arc::new(ListingRewriter::default()));
        let files = FileSet::from_paths(["/opt/tool/lib/a.jar"]);

        let jar = cache.relocate(&files, "toolApi()", RelocationKind::Api).unwrap();

        assert!(jar.is_file());
        assert!(!jar.with_extension("lock").exists());
        let entries: Vec<_> = fs::read_dir(cache.jars_dir())
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name())
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_inputs_get_different_jars() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let cache = GeneratedJarCache::new("/cache", "tool", "8.2", Arc::new(ListingRewriter::default()));
        let ff = PathBuf::from(OsStr::from_bytes(b"/opt/lib/\xff.jar"));
        let fe = PathBuf::from(OsStr::from_bytes(b"/opt/lib/\xfe.jar"));

        assert_ne!(
            cache.jar_path(RelocationKind::Api, &[ff]),
            cache.jar_path(RelocationKind::Api, &[fe]),
        );
    }

    #[test]
    fn different_inputs_get_different_jars() {
        let dir = tempdir().unwrap();
        let cache = GeneratedJarCache::new(dir.path(), "tool", "8.2", Arc::new(ListingRewriter::default()));

        let a = cache
            .relocate(&FileSet::from_paths(["a.jar"]), "toolApi()", RelocationKind::Api)
            .unwrap();
        let b = cache
            .relocate(&FileSet::from_paths(["b.jar"]), "toolApi()", RelocationKind::Api)
            .unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn rewrite_failure_leaves_no_jar() {
        let dir = tempdir().unwrap();
        let cache = GeneratedJarCache::new(dir.path(), "tool", "8.2", Arc::new(FailingRewriter));
        let files = FileSet::from_paths(["a.jar"]);

        let err = cache
            .relocate(&files, "toolTestKit()", RelocationKind::TestKit)
            .unwrap_err();

        assert!(matches!(err, RelocationError::Rewrite { .. }));
        assert!(err.to_string().contains("zip END header not found"));
        let jar = cache.jar_path(RelocationKind::TestKit, &files.files());
        assert!(!jar.exists());
        let leftovers: Vec<_> = fs::read_dir(cache.jars_dir())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".jar.part"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
