use ort::session::Session;
use serde::Serialize;
use std::sync::Arc;

use super::error::ClassifierError;
use super::inference::ImageInference;
use super::utils::argmax;
use super::InputShape;
use crate::vocabulary::Vocabulary;

/// One classification result: the most probable label and the full
/// probability row, in vocabulary order.
///
/// The row length always equals the vocabulary size; entries are reported
/// as the model produced them (softmax-like, not re-normalized).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub label: String,
    pub probabilities: Vec<f32>,
}

/// A thread-safe skin-lesion classifier wrapping a pre-trained ONNX model.
///
/// # Thread Safety
///
/// This type is automatically `Send + Sync` because all of its fields are
/// thread-safe: `String` and `InputShape` are `Send + Sync`, and the
/// `Session` and `Vocabulary` are wrapped in `Arc`. Inference is stateless
/// per call, so one instance can serve concurrent requests read-only.
#[derive(Debug)]
pub struct Classifier {
    pub model_path: String,
    pub session: Arc<Session>,
    pub vocabulary: Arc<Vocabulary>,
    pub input_shape: InputShape,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl ImageInference for Classifier {
    fn session(&self) -> Option<&Session> {
        Some(&self.session)
    }

    fn input_shape(&self) -> Option<&InputShape> {
        Some(&self.input_shape)
    }
}

impl Classifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            model_path: self.model_path.clone(),
            num_classes: self.vocabulary.len(),
            class_labels: self.vocabulary.labels().to_vec(),
            input_shape: self.input_shape.clone(),
        }
    }

    /// The ordered label vocabulary the probability row is indexed by.
    pub fn labels(&self) -> &[String] {
        self.vocabulary.labels()
    }

    /// Classifies one uploaded image and returns the predicted label with
    /// the full probability row.
    ///
    /// Accepts any resolution; the image is resized to the model's fixed
    /// input and scaled into [0, 1] before the forward pass. The call is a
    /// pure function of its input: no retries, no shared-state mutation.
    ///
    /// # Errors
    /// * `ValidationError` - the buffer is empty
    /// * `ImageError` - the bytes do not decode into a usable pixel grid
    /// * `ModelError` - the forward pass itself failed
    /// * `PredictionError` - the output row does not match the vocabulary
    ///
    /// # Example
    /// ```no_run
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # use dermacare::Classifier;
    /// # let classifier = Classifier::builder()
    /// #     .with_model_file("skin_disease_classification_model.onnx")?
    /// #     .with_vocabulary_dir("train")?
    /// #     .build()?;
    /// let bytes = std::fs::read("lesion.jpg")?;
    /// let prediction = classifier.classify(&bytes)?;
    /// println!("Predicted condition: {}", prediction.label);
    /// for (label, p) in classifier.labels().iter().zip(&prediction.probabilities) {
    ///     println!("{}: {:.2}", label, p);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn classify(&self, image: &[u8]) -> Result<Prediction, ClassifierError> {
        let probabilities = self.infer_probabilities(image)?;

        if probabilities.len() != self.vocabulary.len() {
            return Err(ClassifierError::PredictionError(format!(
                "Model produced {} scores for a vocabulary of {} classes; \
                 the model and the training-data directory disagree",
                probabilities.len(),
                self.vocabulary.len()
            )));
        }

        let best_index = argmax(&probabilities).ok_or_else(|| {
            ClassifierError::PredictionError("Model returned an empty probability row".into())
        })?;
        let label = self
            .vocabulary
            .label(best_index)
            .ok_or_else(|| {
                ClassifierError::PredictionError(format!(
                    "Predicted index {} is outside the vocabulary",
                    best_index
                ))
            })?
            .to_string();

        Ok(Prediction {
            label,
            probabilities: probabilities.to_vec(),
        })
    }
}
