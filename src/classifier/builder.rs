use log::{error, info};
use ort::session::Session;
use std::path::Path;
use std::sync::Arc;

use super::classifier::Classifier;
use super::error::ClassifierError;
use super::InputShape;
use crate::artifacts::ArtifactStore;
use crate::runtime::{create_session_builder, RuntimeConfig};
use crate::vocabulary::Vocabulary;

/// A builder for constructing a Classifier with a fluent interface.
#[derive(Default, Debug)]
pub struct ClassifierBuilder {
    model_path: Option<String>,
    session: Option<Session>,
    vocabulary: Option<Vocabulary>,
    input_shape: InputShape,
    runtime_config: RuntimeConfig,
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder instance with default configuration
    pub fn new() -> Self {
        Self {
            model_path: None,
            session: None,
            vocabulary: None,
            input_shape: InputShape::default(),
            runtime_config: RuntimeConfig::default(),
        }
    }

    /// Sets the runtime configuration for ONNX model execution
    ///
    /// # Example
    /// ```
    /// use dermacare::{ClassifierBuilder, RuntimeConfig};
    ///
    /// let config = RuntimeConfig::default();
    /// let builder = ClassifierBuilder::new()
    ///     .with_runtime_config(config);
    /// ```
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Overrides the input resolution the image is resized to before the
    /// forward pass. Defaults to 64x64, the resolution the bundled model
    /// was trained at.
    pub fn with_input_size(mut self, width: u32, height: u32) -> Self {
        self.input_shape = InputShape {
            width,
            height,
            channels: 3,
        };
        self
    }

    /// Loads the ONNX model from a file path.
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful, or an error if:
    ///   - The path is empty or already set
    ///   - The file doesn't exist
    ///   - The model failed to load
    ///   - The model structure is invalid
    ///
    /// # Example
    /// ```no_run
    /// use dermacare::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .with_model_file("skin_disease_classification_model.onnx");
    /// ```
    pub fn with_model_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ClassifierError::BuildError(
                "Model path cannot be empty".to_string(),
            ));
        }
        if self.model_path.is_some() {
            return Err(ClassifierError::BuildError(
                "Model path already set".to_string(),
            ));
        }

        // Validate path exists
        if !path.is_file() {
            return Err(ClassifierError::BuildError(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        // Create session using the singleton environment
        let session = create_session_builder(&self.runtime_config)?.commit_from_file(path)?;

        // Validate model structure
        Self::validate_model(&session)?;
        info!("Model structure validated successfully");

        self.model_path = Some(path.to_string_lossy().to_string());
        self.session = Some(session);
        Ok(self)
    }

    /// Derives the label vocabulary from a training-data directory whose
    /// immediate subdirectory names, sorted lexicographically, define the
    /// ordered classes. The ordering must match the ordering the model was
    /// trained with, or predictions will silently mismatch labels.
    pub fn with_vocabulary_dir<P: AsRef<Path>>(mut self, dir: P) -> Result<Self, ClassifierError> {
        if self.vocabulary.is_some() {
            return Err(ClassifierError::BuildError(
                "Vocabulary already set".to_string(),
            ));
        }

        let vocabulary = Vocabulary::from_dir(dir.as_ref()).map_err(|e| {
            error!("Failed to load vocabulary: {}", e);
            ClassifierError::BuildError(format!("Failed to load vocabulary: {}", e))
        })?;

        info!("Vocabulary loaded: {} classes", vocabulary.len());
        self.vocabulary = Some(vocabulary);
        Ok(self)
    }

    /// Loads both the model and the vocabulary from an artifact store,
    /// failing up front with the store's own missing-artifact error if
    /// either is absent.
    ///
    /// # Example
    /// ```no_run
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use dermacare::{ArtifactStore, ClassifierBuilder};
    ///
    /// let store = ArtifactStore::new_default()?;
    /// let builder = ClassifierBuilder::new().with_artifacts(&store)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_artifacts(self, store: &ArtifactStore) -> Result<Self, ClassifierError> {
        store
            .ensure_present()
            .map_err(|e| ClassifierError::BuildError(e.to_string()))?;

        self.with_model_file(store.model_path())?
            .with_vocabulary_dir(store.vocabulary_dir())
    }

    /// Builds and returns the final Classifier instance
    ///
    /// # Returns
    /// * `Result<Classifier, ClassifierError>` - The constructed Classifier if successful, or an error if:
    ///   - No model has been loaded
    ///   - No vocabulary has been loaded
    pub fn build(mut self) -> Result<Classifier, ClassifierError> {
        let model_path = self
            .model_path
            .take()
            .ok_or_else(|| ClassifierError::BuildError("Model path must be set".to_string()))?;
        let session = self
            .session
            .take()
            .ok_or_else(|| ClassifierError::BuildError("No ONNX model loaded".to_string()))?;
        let vocabulary = self
            .vocabulary
            .take()
            .ok_or_else(|| ClassifierError::BuildError("Vocabulary must be set".to_string()))?;

        Ok(Classifier {
            model_path,
            session: Arc::new(session),
            vocabulary: Arc::new(vocabulary),
            input_shape: self.input_shape,
        })
    }

    /// Validates that the model has the expected input/output structure
    ///
    /// # Returns
    /// * `Result<(), ClassifierError>` - Ok if validation passes, or an error if:
    ///   - The model doesn't take exactly one input tensor (the image batch)
    ///   - The model doesn't have any output tensors
    fn validate_model(session: &Session) -> Result<(), ClassifierError> {
        // Check inputs
        let inputs = &session.inputs;
        if inputs.len() != 1 {
            return Err(ClassifierError::ModelError(format!(
                "Model must have exactly 1 input (the image batch), found {}",
                inputs.len()
            )));
        }

        // Check outputs
        let outputs = &session.outputs;
        if outputs.is_empty() {
            return Err(ClassifierError::ModelError(
                "Model must have at least 1 output for class probabilities".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_build_requires_model() {
        let result = ClassifierBuilder::new().build();
        assert!(matches!(result, Err(ClassifierError::BuildError(_))));
    }

    #[test]
    fn test_empty_model_path() {
        let result = ClassifierBuilder::new().with_model_file("");
        assert!(matches!(result, Err(ClassifierError::BuildError(_))));
    }

    #[test]
    fn test_missing_model_file() {
        let result = ClassifierBuilder::new().with_model_file("/nonexistent/model.onnx");
        let err = result.err().expect("missing model file must fail");
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_input_size_override() {
        let builder = ClassifierBuilder::new().with_input_size(32, 48);
        assert_eq!(builder.input_shape.width, 32);
        assert_eq!(builder.input_shape.height, 48);
        assert_eq!(builder.input_shape.channels, 3);
    }

    #[test]
    fn test_missing_vocabulary_dir() {
        let result = ClassifierBuilder::new().with_vocabulary_dir("/nonexistent/train");
        assert!(matches!(result, Err(ClassifierError::BuildError(_))));
    }

    #[test]
    fn test_missing_artifacts_fail_up_front() {
        let root = env::temp_dir().join("dermacare-builder-tests").join("empty-store");
        if root.exists() {
            fs::remove_dir_all(&root).unwrap();
        }
        let store = ArtifactStore::new(&root).unwrap();
        let result = ClassifierBuilder::new().with_artifacts(&store);
        assert!(matches!(result, Err(ClassifierError::BuildError(_))));
    }
}
