use image::RgbImage;
use ndarray::{Array1, Array4};

pub(crate) fn argmax(values: &Array1<f32>) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(index, _)| index)
}

/// Packs an already-resized RGB image into a `(1, H, W, 3)` batch with
/// channel values scaled into `[0, 1]`.
pub(crate) fn to_input_batch(img: &RgbImage) -> Array4<f32> {
    let (width, height) = img.dimensions();
    let mut batch = Array4::zeros((1, height as usize, width as usize, 3));
    for (x, y, pixel) in img.enumerate_pixels() {
        for channel in 0..3 {
            batch[[0, y as usize, x as usize, channel]] = pixel[channel] as f32 / 255.0;
        }
    }
    batch
}
