// Asset descriptors and their loaded forms

use super::ids::{AudioId, FontId, ImageId, RawId};
use super::AssetError;
use enum_map::Enum;
use glam::UVec2;
use std::fmt;

/// Image descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub path: String,
}

impl ImageInfo {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Audio descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct Audio {
    pub path: String,
    /// Playback volume offset; 0.0 plays the clip as recorded, negative values attenuate
    pub volume: f64,
}

impl Audio {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            volume: 0.0,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }
}

/// Font descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub path: String,
    /// Pixel size
    pub size: u32,
    /// Line height multiplier
    pub line_spacing: f64,
}

impl Font {
    pub fn new(path: impl Into<String>, size: u32) -> Self {
        Self {
            path: path.into(),
            size,
            line_spacing: 1.0,
        }
    }

    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = line_spacing;
        self
    }
}

/// Raw data descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub path: String,
}

impl Raw {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// A decoded image
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub size: UVec2,
    pub pixels: image::RgbaImage,
}

/// Audio clip bytes plus the volume to play them at
#[derive(Debug, Clone)]
pub struct LoadedAudio {
    pub data: Vec<u8>,
    pub volume: f64,
}

/// Font file bytes plus the face parameters
#[derive(Debug, Clone)]
pub struct LoadedFont {
    pub data: Vec<u8>,
    pub size: u32,
    pub line_spacing: f64,
}

/// Ties an id type to its descriptor and loaded representation
pub(crate) trait AssetKind {
    type Id: Enum + Copy + fmt::Debug;
    type Info: PartialEq;
    type Asset;

    /// Kind name used in logs and errors
    const LABEL: &'static str;

    fn path(info: &Self::Info) -> &str;

    fn decode(info: &Self::Info, bytes: Vec<u8>) -> Result<Self::Asset, AssetError>;
}

pub(crate) struct Images;
pub(crate) struct Sounds;
pub(crate) struct Fonts;
pub(crate) struct Blobs;

impl AssetKind for Images {
    type Id = ImageId;
    type Info = ImageInfo;
    type Asset = LoadedImage;

    const LABEL: &'static str = "image";

    fn path(info: &ImageInfo) -> &str {
        &info.path
    }

    fn decode(info: &ImageInfo, bytes: Vec<u8>) -> Result<LoadedImage, AssetError> {
        let pixels = image::load_from_memory(&bytes)
            .map_err(|e| AssetError::Decode {
                path: info.path.clone(),
                reason: e.to_string(),
            })?
            .to_rgba8();
        let (width, height) = pixels.dimensions();

        Ok(LoadedImage {
            size: UVec2::new(width, height),
            pixels,
        })
    }
}

impl AssetKind for Sounds {
    type Id = AudioId;
    type Info = Audio;
    type Asset = LoadedAudio;

    const LABEL: &'static str = "audio";

    fn path(info: &Audio) -> &str {
        &info.path
    }

    fn decode(info: &Audio, bytes: Vec<u8>) -> Result<LoadedAudio, AssetError> {
        Ok(LoadedAudio {
            data: bytes,
            volume: info.volume,
        })
    }
}

impl AssetKind for Fonts {
    type Id = FontId;
    type Info = Font;
    type Asset = LoadedFont;

    const LABEL: &'static str = "font";

    fn path(info: &Font) -> &str {
        &info.path
    }

    fn decode(info: &Font, bytes: Vec<u8>) -> Result<LoadedFont, AssetError> {
        Ok(LoadedFont {
            data: bytes,
            size: info.size,
            line_spacing: info.line_spacing,
        })
    }
}

impl AssetKind for Blobs {
    type Id = RawId;
    type Info = Raw;
    type Asset = Vec<u8>;

    const LABEL: &'static str = "raw";

    fn path(info: &Raw) -> &str {
        &info.path
    }

    fn decode(_info: &Raw, bytes: Vec<u8>) -> Result<Vec<u8>, AssetError> {
        Ok(bytes)
    }
}

/// Encode a small solid PNG for tests
#[cfg(test)]
pub(crate) fn test_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
    let mut bytes = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut bytes, image::ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}
