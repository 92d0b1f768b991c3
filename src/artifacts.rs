use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const MODEL_FILE: &str = "skin_disease_classification_model.onnx";
const VOCABULARY_DIR: &str = "train";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Missing artifact: {kind} expected at {path:?}")]
    Missing { kind: &'static str, path: PathBuf },
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Locates the model artifact and training-data root on disk.
///
/// The store does not load anything itself; it only resolves paths and
/// reports which artifacts are present, so callers can distinguish
/// "model unavailable" from later per-request failures.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Creates a store rooted at the default artifact directory.
    pub fn new_default() -> io::Result<Self> {
        Self::new(Self::default_root())
    }

    /// Returns the default artifact root.
    pub fn default_root() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("DERMACARE_HOME") {
            return PathBuf::from(path);
        }

        // 2. Use platform-specific cache directory
        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("dermacare");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("dermacare");
        }

        // 4. If all else fails, use system temp directory (platform agnostic)
        env::temp_dir().join("dermacare")
    }

    pub fn new<P: AsRef<Path>>(root: P) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the ONNX model artifact.
    pub fn model_path(&self) -> PathBuf {
        self.root.join(MODEL_FILE)
    }

    /// Path of the training-data root whose subdirectories name the classes.
    pub fn vocabulary_dir(&self) -> PathBuf {
        self.root.join(VOCABULARY_DIR)
    }

    /// Returns whether both artifacts are present on disk.
    pub fn is_present(&self) -> bool {
        let model_path = self.model_path();
        let vocabulary_dir = self.vocabulary_dir();
        log::debug!(
            "Model path: {:?} (exists: {})",
            model_path,
            model_path.is_file()
        );
        log::debug!(
            "Vocabulary dir: {:?} (exists: {})",
            vocabulary_dir,
            vocabulary_dir.is_dir()
        );
        model_path.is_file() && vocabulary_dir.is_dir()
    }

    /// Verifies both artifacts exist, naming the first one that is missing.
    pub fn ensure_present(&self) -> Result<(), ArtifactError> {
        let model_path = self.model_path();
        if !model_path.is_file() {
            return Err(ArtifactError::Missing {
                kind: "model file",
                path: model_path,
            });
        }
        let vocabulary_dir = self.vocabulary_dir();
        if !vocabulary_dir.is_dir() {
            return Err(ArtifactError::Missing {
                kind: "vocabulary directory",
                path: vocabulary_dir,
            });
        }
        Ok(())
    }
}
