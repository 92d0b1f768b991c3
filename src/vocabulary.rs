use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while deriving the label vocabulary from disk.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("Vocabulary directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("Vocabulary directory contains no class subdirectories: {0}")]
    Empty(PathBuf),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// The ordered set of class labels the model predicts over.
///
/// Labels are the immediate subdirectory names of a training-data root,
/// sorted lexicographically. The model's output vector is indexed by this
/// ordering, so the root handed here must be the same one the model was
/// trained against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    labels: Vec<String>,
}

impl Vocabulary {
    /// Derives a vocabulary by listing and sorting the subdirectories of `root`.
    ///
    /// Plain files under `root` are ignored; only directories name classes.
    ///
    /// # Errors
    /// - `DirectoryNotFound` if `root` does not exist or is not a directory
    /// - `Empty` if `root` has no subdirectories
    /// - `IoError` if the listing fails partway
    pub fn from_dir<P: AsRef<Path>>(root: P) -> Result<Self, VocabularyError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(VocabularyError::DirectoryNotFound(root.to_path_buf()));
        }

        let mut labels = Vec::new();
        for entry in fs::read_dir(root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                labels.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        labels.sort();

        if labels.is_empty() {
            return Err(VocabularyError::Empty(root.to_path_buf()));
        }

        log::info!("Loaded vocabulary of {} classes from {:?}", labels.len(), root);
        Ok(Self { labels })
    }

    /// Returns the label at `index`, if in range.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Returns the index of `label`, if it is a member.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
