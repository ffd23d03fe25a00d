// Asset sources - where asset bytes come from

use super::AssetError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Opens asset files by their registered path
///
/// Paths are relative and forward-slash separated, exactly as written in
/// the resource descriptors.
pub trait AssetSource {
    fn open(&self, path: &str) -> Result<Box<dyn Read>, AssetError>;
}

/// Asset source backed by a directory on disk (the packaged `assets/` folder)
pub struct DirSource {
    base_path: PathBuf,
}

impl DirSource {
    /// Create a new source rooted at the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Create a source for an asset directory given on the command line
    ///
    /// A relative path that does not exist under the working directory is
    /// looked up next to the executable, so installed builds find their
    /// assets wherever they are launched from.
    pub fn locate<P: AsRef<Path>>(base_path: P) -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self::new(locate_base(base_path.as_ref(), exe_dir.as_deref()))
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, path: &str) -> Result<PathBuf, AssetError> {
        if path.is_empty()
            || path.starts_with('/')
            || path.contains('\\')
            || path.split('/').any(|part| part == ".." || part.is_empty())
        {
            return Err(AssetError::InvalidPath(path.to_string()));
        }

        Ok(path
            .split('/')
            .fold(self.base_path.clone(), |full, part| full.join(part)))
    }

    /// Check if an asset exists
    pub fn exists(&self, path: &str) -> bool {
        self.resolve_path(path)
            .map(|full| full.is_file())
            .unwrap_or(false)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl AssetSource for DirSource {
    fn open(&self, path: &str) -> Result<Box<dyn Read>, AssetError> {
        let full = self.resolve_path(path)?;

        if !full.is_file() {
            return Err(AssetError::NotFound(full.to_string_lossy().to_string()));
        }

        let file = File::open(&full).map_err(|source| AssetError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(Box::new(file))
    }
}

fn locate_base(base_path: &Path, exe_dir: Option<&Path>) -> PathBuf {
    if base_path.is_absolute() || base_path.is_dir() {
        return base_path.to_path_buf();
    }

    match exe_dir.map(|dir| dir.join(base_path)) {
        Some(candidate) if candidate.is_dir() => candidate,
        _ => base_path.to_path_buf(),
    }
}

/// In-memory asset source that records every open request
#[cfg(test)]
#[derive(Default)]
pub struct MemorySource {
    files: std::collections::HashMap<String, Vec<u8>>,
    opened: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.to_string(), bytes.into());
        self
    }

    /// Shared log of opened paths; stays readable after the source is moved
    pub fn open_log(&self) -> std::rc::Rc<std::cell::RefCell<Vec<String>>> {
        self.opened.clone()
    }
}

#[cfg(test)]
impl AssetSource for MemorySource {
    fn open(&self, path: &str) -> Result<Box<dyn Read>, AssetError> {
        self.opened.borrow_mut().push(path.to_string());
        match self.files.get(path) {
            Some(bytes) => Ok(Box::new(std::io::Cursor::new(bytes.clone()))),
            None => Err(AssetError::NotFound(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path() {
        let source = DirSource::new("/game/assets");
        let path = source.resolve_path("sounds/gatling_gun.wav").unwrap();

        assert_eq!(path, Path::new("/game/assets/sounds/gatling_gun.wav"));
    }

    #[test]
    fn test_reject_escaping_paths() {
        let source = DirSource::new("assets");

        assert!(matches!(
            source.resolve_path("../secret.txt"),
            Err(AssetError::InvalidPath(_))
        ));
        assert!(matches!(
            source.resolve_path("/etc/passwd"),
            Err(AssetError::InvalidPath(_))
        ));
        assert!(matches!(
            source.resolve_path("sounds//ion.wav"),
            Err(AssetError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let source = DirSource::new("definitely/not/a/dir");

        assert!(!source.exists("tiles.json"));
        assert!(matches!(
            source.open("tiles.json"),
            Err(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn test_open_existing_file() {
        let dir = std::env::temp_dir().join(format!("tanks-assets-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("sounds")).unwrap();
        std::fs::write(dir.join("sounds").join("ion.wav"), b"RIFF").unwrap();

        let source = DirSource::new(&dir);
        let mut bytes = Vec::new();
        source
            .open("sounds/ion.wav")
            .unwrap()
            .read_to_end(&mut bytes)
            .unwrap();

        assert_eq!(bytes, b"RIFF");
        assert_eq!(source.base_path(), dir.as_path());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_locate_prefers_working_directory() {
        let exe_dir = std::env::temp_dir();

        assert_eq!(locate_base(Path::new("src"), Some(&exe_dir)), Path::new("src"));
        assert_eq!(
            locate_base(&exe_dir, Some(Path::new("unused"))),
            exe_dir.as_path()
        );
    }

    #[test]
    fn test_locate_falls_back_to_executable_dir() {
        let exe_dir = std::env::temp_dir().join(format!("tanks-exe-{}", std::process::id()));
        std::fs::create_dir_all(exe_dir.join("tanks-packaged-assets")).unwrap();

        let located = locate_base(Path::new("tanks-packaged-assets"), Some(&exe_dir));
        assert_eq!(located, exe_dir.join("tanks-packaged-assets"));

        let missing = locate_base(Path::new("tanks-no-such-assets"), Some(&exe_dir));
        assert_eq!(missing, Path::new("tanks-no-such-assets"));
        assert_eq!(
            locate_base(Path::new("tanks-no-such-assets"), None),
            Path::new("tanks-no-such-assets")
        );
        std::fs::remove_dir_all(&exe_dir).unwrap();
    }

    #[test]
    fn test_memory_source_logs_opens() {
        let source = MemorySource::new().with_file("tiles.json", "{}");
        let log = source.open_log();

        assert!(source.open("tiles.json").is_ok());
        assert!(source.open("missing.json").is_err());
        assert_eq!(*log.borrow(), vec!["tiles.json", "missing.json"]);
    }
}
