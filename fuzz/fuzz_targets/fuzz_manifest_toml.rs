#![no_main]

use impldeps::infrastructure::ManifestClassPathRegistry;
use impldeps::{ClassPathRegistry, Notation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let manifest = dir.path().join("classpath.toml");
    if std::fs::write(&manifest, data).is_err() {
        return;
    }

    // Malformed manifests must surface as errors, never panics
    let registry = ManifestClassPathRegistry::new(&manifest, dir.path());
    for notation in Notation::ALL {
        let _ = registry.class_path(notation.name());
    }
});
