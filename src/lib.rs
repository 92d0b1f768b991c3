//! A thread-safe skin-lesion image classifier backed by an ONNX model, paired
//! with a static per-condition care recommendation table.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use dermacare::{Classifier, recommend};
//!
//! let classifier = Classifier::builder()
//!     .with_model_file("skin_disease_classification_model.onnx")?
//!     .with_vocabulary_dir("train")?
//!     .build()?;
//!
//! let bytes = std::fs::read("lesion.jpg")?;
//! let prediction = classifier.classify(&bytes)?;
//! println!("Predicted condition: {}", prediction.label);
//!
//! match recommend::lookup(&prediction.label) {
//!     Some(bundle) => println!("Treatment: {}", bundle.treatment),
//!     None => println!("No specific guidance available."),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The classifier is thread-safe and can be shared across threads using `Arc`:
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use dermacare::Classifier;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let classifier = Arc::new(Classifier::builder()
//!     .with_model_file("skin_disease_classification_model.onnx")?
//!     .with_vocabulary_dir("train")?
//!     .build()?);
//!
//! let bytes = Arc::new(std::fs::read("lesion.jpg")?);
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let classifier = Arc::clone(&classifier);
//!     let bytes = Arc::clone(&bytes);
//!     handles.push(thread::spawn(move || {
//!         classifier.classify(&bytes).unwrap();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod classifier;
pub mod recommend;
mod runtime;
pub mod vocabulary;

pub use artifacts::{ArtifactError, ArtifactStore};
pub use classifier::{
    Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, InputShape, Prediction,
};
pub use recommend::RecommendationBundle;
pub use runtime::{create_session_builder, RuntimeConfig};
pub use vocabulary::{Vocabulary, VocabularyError};

pub fn init_logger() {
    env_logger::init();
}
