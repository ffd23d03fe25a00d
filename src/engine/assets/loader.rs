// Central asset loader: registries, preloading and loaded asset storage

use super::ids::{AudioId, FontId, ImageId, RawId};
use super::kinds::{
    AssetKind, Audio, Blobs, Font, Fonts, ImageInfo, Images, LoadedAudio, LoadedFont,
    LoadedImage, Raw, Sounds,
};
use super::registry::Registry;
use super::source::AssetSource;
use super::{AssetError, CriticalErrorHook};
use enum_map::Enum;
use log::{debug, info};
use std::io::Read;

/// Registry plus loaded storage for one asset kind
struct AssetTable<K: AssetKind> {
    registry: Registry<K::Id, K::Info>,
    loaded: Vec<Option<K::Asset>>,
    /// Ids that had a preload requested
    requested: Vec<bool>,
}

impl<K: AssetKind> AssetTable<K> {
    fn new() -> Self {
        Self {
            registry: Registry::new(),
            loaded: (0..<K::Id as Enum>::LENGTH).map(|_| None).collect(),
            requested: vec![false; <K::Id as Enum>::LENGTH],
        }
    }

    fn set(&mut self, id: K::Id, info: K::Info) {
        if self.registry.set(id, info) {
            // A loaded asset no longer matches its descriptor
            self.loaded[id.into_usize()] = None;
        }
    }

    fn preload(&mut self, id: K::Id, source: &dyn AssetSource) -> Result<(), AssetError> {
        let index = id.into_usize();
        self.requested[index] = true;
        if self.loaded[index].is_some() {
            return Ok(());
        }

        let info = self
            .registry
            .get(id)
            .ok_or_else(|| AssetError::Unregistered {
                kind: K::LABEL,
                id: format!("{:?}", id),
            })?;
        let path = K::path(info);

        let mut bytes = Vec::new();
        source
            .open(path)?
            .read_to_end(&mut bytes)
            .map_err(|source| AssetError::Io {
                path: path.to_string(),
                source,
            })?;
        debug!("Loaded {} {:?} from {} ({} bytes)", K::LABEL, id, path, bytes.len());

        self.loaded[index] = Some(K::decode(info, bytes)?);
        Ok(())
    }

    fn get(&self, id: K::Id) -> Option<&K::Asset> {
        self.loaded[id.into_usize()].as_ref()
    }

    fn loaded_count(&self) -> usize {
        self.loaded.iter().filter(|asset| asset.is_some()).count()
    }

    /// Requested ids that are not loaded
    fn pending_count(&self) -> usize {
        self.requested
            .iter()
            .zip(&self.loaded)
            .filter(|(requested, asset)| **requested && asset.is_none())
            .count()
    }
}

/// Asset loader for the game
///
/// Preloading is synchronous: when a `preload_*` call returns `Ok`, the
/// asset is decoded and resident. Every failure is reported once through
/// the critical-error hook and then returned to the caller.
pub struct Loader {
    source: Box<dyn AssetSource>,
    on_critical_error: CriticalErrorHook,
    images: AssetTable<Images>,
    audio: AssetTable<Sounds>,
    fonts: AssetTable<Fonts>,
    raw: AssetTable<Blobs>,
}

impl Loader {
    /// Create a new loader reading from `source`
    pub fn new(source: impl AssetSource + 'static, on_critical_error: CriticalErrorHook) -> Self {
        Self {
            source: Box::new(source),
            on_critical_error,
            images: AssetTable::new(),
            audio: AssetTable::new(),
            fonts: AssetTable::new(),
            raw: AssetTable::new(),
        }
    }

    pub fn set_image(&mut self, id: ImageId, info: ImageInfo) {
        self.images.set(id, info);
    }

    pub fn set_audio(&mut self, id: AudioId, info: Audio) {
        self.audio.set(id, info);
    }

    pub fn set_font(&mut self, id: FontId, info: Font) {
        self.fonts.set(id, info);
    }

    pub fn set_raw(&mut self, id: RawId, info: Raw) {
        self.raw.set(id, info);
    }

    pub fn preload_image(&mut self, id: ImageId) -> Result<(), AssetError> {
        let result = self.images.preload(id, self.source.as_ref());
        self.report(result)
    }

    pub fn preload_audio(&mut self, id: AudioId) -> Result<(), AssetError> {
        let result = self.audio.preload(id, self.source.as_ref());
        self.report(result)
    }

    pub fn preload_font(&mut self, id: FontId) -> Result<(), AssetError> {
        let result = self.fonts.preload(id, self.source.as_ref());
        self.report(result)
    }

    pub fn preload_raw(&mut self, id: RawId) -> Result<(), AssetError> {
        let result = self.raw.preload(id, self.source.as_ref());
        self.report(result)
    }

    pub fn image_registry(&self) -> &Registry<ImageId, ImageInfo> {
        &self.images.registry
    }

    pub fn audio_registry(&self) -> &Registry<AudioId, Audio> {
        &self.audio.registry
    }

    pub fn font_registry(&self) -> &Registry<FontId, Font> {
        &self.fonts.registry
    }

    pub fn raw_registry(&self) -> &Registry<RawId, Raw> {
        &self.raw.registry
    }

    /// Get a preloaded image
    pub fn image(&self, id: ImageId) -> Option<&LoadedImage> {
        self.images.get(id)
    }

    /// Get a preloaded audio clip
    pub fn audio(&self, id: AudioId) -> Option<&LoadedAudio> {
        self.audio.get(id)
    }

    /// Get a preloaded font
    pub fn font(&self, id: FontId) -> Option<&LoadedFont> {
        self.fonts.get(id)
    }

    /// Get a preloaded raw blob
    pub fn raw(&self, id: RawId) -> Option<&[u8]> {
        self.raw.get(id).map(Vec::as_slice)
    }

    /// Check that every requested preload has completed
    pub fn is_ready(&self) -> bool {
        self.images.pending_count()
            + self.audio.pending_count()
            + self.fonts.pending_count()
            + self.raw.pending_count()
            == 0
    }

    /// Get statistics about loaded assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            image_count: self.images.loaded_count(),
            audio_count: self.audio.loaded_count(),
            font_count: self.fonts.loaded_count(),
            raw_count: self.raw.loaded_count(),
        }
    }

    /// Log a summary of what has been preloaded
    pub fn log_stats(&self) {
        let stats = self.stats();
        info!(
            "Preloaded {} images, {} audio clips, {} fonts, {} raw files",
            stats.image_count, stats.audio_count, stats.font_count, stats.raw_count
        );
    }

    fn report(&self, result: Result<(), AssetError>) -> Result<(), AssetError> {
        if let Err(err) = &result {
            (self.on_critical_error)(err);
        }
        result
    }
}

/// Statistics about loaded assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub image_count: usize,
    pub audio_count: usize,
    pub font_count: usize,
    pub raw_count: usize,
}
