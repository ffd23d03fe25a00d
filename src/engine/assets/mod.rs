// Asset registration and preloading
//
// Every asset kind has a dense id enum, a descriptor type and a registry.
// The loader reads registered assets through an asset source and reports
// failures to a single critical-error hook.

mod ids;
mod kinds;
mod loader;
mod registry;
mod source;

pub use ids::{AudioId, FontId, ImageId, RawId};
pub use kinds::{Audio, Font, ImageInfo, LoadedAudio, LoadedFont, LoadedImage, Raw};
pub use loader::{AssetStats, Loader};
pub use registry::Registry;
pub use source::{AssetSource, DirSource};

#[cfg(test)]
pub(crate) use kinds::test_png;
#[cfg(test)]
pub use source::MemorySource;

use log::error;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Invalid asset path: {0}")]
    InvalidPath(String),

    #[error("{kind} resource {id} is not registered")]
    Unregistered { kind: &'static str, id: String },

    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Callback invoked once for every fatal asset failure
pub type CriticalErrorHook = Box<dyn Fn(&AssetError)>;

/// The production hook: log the failure and terminate the process
pub fn exit_on_critical_error() -> CriticalErrorHook {
    Box::new(|err: &AssetError| {
        error!("Critical error: {}", err);
        std::process::exit(1)
    })
}
