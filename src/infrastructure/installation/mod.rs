//! Installation detection
//!
//! A directory counts as a packaged installation when its `lib/` directory
//! contains the beacon jar. Embedded contexts (tests, IDE import, running
//! from a development checkout) have no installation.

use std::path::Path;

use tracing::debug;

use crate::config::{InstallationConfig, InstallationMode};
use crate::domain::entities::Installation;
use crate::domain::ports::InstallationContext;

#[derive(Debug, Clone, Default)]
pub struct CurrentInstallation {
    installation: Option<Installation>,
}

impl CurrentInstallation {
    /// Detects the installation described by `config`.
    pub fn detect(config: &InstallationConfig, version: &str) -> Self {
        if config.mode == InstallationMode::Embedded {
            debug!("installation detection disabled (embedded mode)");
            return Self::embedded();
        }

        match &config.home {
            Some(home) => Self::locate(home, &config.beacon, version),
            None => {
                debug!("no installation home configured");
                Self::embedded()
            }
        }
    }

    /// Checks `home` for the beacon jar.
    pub fn locate(home: &Path, beacon: &str, version: &str) -> Self {
        let beacon_path = home.join("lib").join(beacon);
        if beacon_path.is_file() {
            debug!(home = %home.display(), "running from packaged installation");
            Self::packaged(Installation::new(home, version))
        } else {
            debug!(beacon = %beacon_path.display(), "installation beacon not found");
            Self::embedded()
        }
    }

    pub fn packaged(installation: Installation) -> Self {
        Self {
            installation: Some(installation),
        }
    }

    pub fn embedded() -> Self {
        Self { installation: None }
    }
}

impl InstallationContext for CurrentInstallation {
    fn installation(&self) -> Option<Installation> {
        self.installation.clone()
    }
}
