//! InstallationContext port
//!
//! Tells the resolver whether it runs from a packaged distribution or from
//! an embedded/ad hoc context (tests, IDE import, development checkout).

use crate::domain::entities::Installation;

pub trait InstallationContext: Send + Sync {
    /// The installation the process runs from, if any
    fn installation(&self) -> Option<Installation>;

    fn is_packaged_installation(&self) -> bool {
        self.installation().is_some()
    }
}
