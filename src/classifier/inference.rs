use image::imageops::FilterType;
use image::RgbImage;
use ndarray::{Array1, Array4};
use ort::session::Session;
use ort::value::Tensor;
use std::collections::HashMap;

use super::error::ClassifierError;
use super::utils::to_input_batch;
use super::InputShape;

/// Provides image preprocessing and inference using an ONNX model.
///
/// This trait handles the conversion of raw uploaded bytes into a class
/// probability vector through:
/// 1. Decoding the bytes into an RGB pixel grid
/// 2. Resizing to the model's fixed input resolution
/// 3. Scaling channel values into [0, 1] and batching
/// 4. Running the ONNX model and extracting the probability row
///
/// The ONNX model is expected to:
/// - Accept one input of shape [batch_size, height, width, 3]
/// - Output class scores of shape [batch_size, num_classes]
pub(crate) trait ImageInference {
    /// Returns the initialized ONNX session if available
    fn session(&self) -> Option<&Session>;

    /// Returns the input resolution the model was trained at
    fn input_shape(&self) -> Option<&InputShape>;

    /// Decodes raw upload bytes into an RGB pixel grid.
    ///
    /// Any byte sequence the `image` crate cannot decode, and any decode
    /// that produces a degenerate zero-dimension grid, is a malformed
    /// input, not a model failure.
    ///
    /// # Errors
    /// - `ValidationError` if the buffer is empty
    /// - `ImageError` if the bytes do not decode into a valid image
    fn decode_image(&self, bytes: &[u8]) -> Result<RgbImage, ClassifierError> {
        if bytes.is_empty() {
            return Err(ClassifierError::ValidationError(
                "Input image buffer cannot be empty".into(),
            ));
        }

        let decoded = image::load_from_memory(bytes)
            .map_err(|e| ClassifierError::ImageError(format!("Failed to decode image: {}", e)))?;
        let rgb = decoded.to_rgb8();

        if rgb.width() == 0 || rgb.height() == 0 {
            return Err(ClassifierError::ImageError(
                "Image has zero width or height".into(),
            ));
        }

        Ok(rgb)
    }

    /// Converts raw upload bytes into a normalized model input batch.
    ///
    /// # Errors
    /// - Forwards all errors from `decode_image()`
    /// - `ModelError` if the input shape is not set
    fn prepare_batch(&self, bytes: &[u8]) -> Result<Array4<f32>, ClassifierError> {
        let shape = self
            .input_shape()
            .ok_or_else(|| ClassifierError::ModelError("Input shape not set".into()))?;

        let rgb = self.decode_image(bytes)?;
        let resized = image::imageops::resize(&rgb, shape.width, shape.height, FilterType::Triangle);
        Ok(to_input_batch(&resized))
    }

    /// Converts raw upload bytes into a class probability vector.
    ///
    /// This is the main entry point for inference, combining preprocessing
    /// and the forward pass.
    fn infer_probabilities(&self, bytes: &[u8]) -> Result<Array1<f32>, ClassifierError> {
        let batch = self.prepare_batch(bytes)?;
        self.run_forward(batch)
    }

    /// Runs one forward pass over a prepared batch.
    ///
    /// # Model Input Format
    /// - One named tensor of shape [batch_size=1, height, width, 3]
    ///
    /// # Model Output Format
    /// - Shape: [batch_size=1, num_classes]; row 0 is the result
    ///
    /// # Errors
    /// - `ModelError` if the session is not initialized
    /// - `ModelError` if tensor creation fails
    /// - `ModelError` if model execution fails
    /// - `ModelError` if output extraction fails or has an unexpected rank
    fn run_forward(&self, batch: Array4<f32>) -> Result<Array1<f32>, ClassifierError> {
        let session = self
            .session()
            .ok_or_else(|| ClassifierError::ModelError("Session not initialized".into()))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| ClassifierError::ModelError("Model has no inputs".into()))?;

        let batch_dyn = batch.into_dyn();
        let pixels = batch_dyn.as_standard_layout();

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            input_name.as_str(),
            Tensor::from_array(&pixels).map_err(|e| {
                ClassifierError::ModelError(format!("Failed to create input tensor: {}", e))
            })?,
        );

        let outputs = session
            .run(input_tensors)
            .map_err(|e| ClassifierError::ModelError(format!("Failed to run model: {}", e)))?;
        let output_tensor = outputs[0].try_extract_tensor::<f32>().map_err(|e| {
            ClassifierError::ModelError(format!("Failed to extract output tensor: {}", e))
        })?;

        let probabilities = match output_tensor.ndim() {
            2 => {
                let mut row = Array1::zeros(output_tensor.shape()[1]);
                let row_slice = output_tensor.slice(ndarray::s![0, ..]);
                row.assign(&Array1::from_iter(row_slice.iter().cloned()));
                row
            }
            1 => Array1::from_iter(output_tensor.iter().cloned()),
            rank => {
                return Err(ClassifierError::ModelError(format!(
                    "Unexpected output rank {} from model",
                    rank
                )))
            }
        };

        Ok(probabilities)
    }
}
