//! Domain Services
//!
//! The notation resolver and the composition rules it applies. All I/O goes
//! through the ports handed to the resolver.

mod composition;
mod notation_resolver;

pub use composition::{remove_all, Composition};
pub use notation_resolver::NotationResolver;
