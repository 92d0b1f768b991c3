mod builder;
#[allow(clippy::module_inception)]
mod classifier;
mod error;
mod inference;
mod utils;

pub use builder::ClassifierBuilder;
pub use classifier::{Classifier, Prediction};
pub use error::ClassifierError;

use serde::Serialize;

/// Pixel dimensions the model expects for its input batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputShape {
    pub width: u32,
    pub height: u32,
    pub channels: usize,
}

impl Default for InputShape {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            channels: 3,
        }
    }
}

/// A snapshot of the classifier's configuration, for display and debugging.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifierInfo {
    pub model_path: String,
    pub num_classes: usize,
    pub class_labels: Vec<String>,
    pub input_shape: InputShape,
}
