use dermacare::{ArtifactStore, Classifier, ClassifierError};
use std::env;
use std::fs;

#[test]
fn test_build_without_anything() {
    let result = Classifier::builder().build();
    assert!(matches!(result, Err(ClassifierError::BuildError(_))));
}

#[test]
fn test_missing_model_file_is_a_build_error() {
    let result = Classifier::builder().with_model_file("/nonexistent/model.onnx");
    match result {
        Err(ClassifierError::BuildError(msg)) => assert!(msg.contains("not found")),
        other => panic!("expected BuildError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_vocabulary_dir_is_a_build_error() {
    let result = Classifier::builder().with_vocabulary_dir("/nonexistent/train");
    assert!(matches!(result, Err(ClassifierError::BuildError(_))));
}

#[test]
fn test_empty_artifact_store_blocks_build() {
    let root = env::temp_dir().join("dermacare-validation-tests").join("empty");
    if root.exists() {
        fs::remove_dir_all(&root).unwrap();
    }
    let store = ArtifactStore::new(&root).unwrap();

    // The prediction feature is blocked before any model load is attempted.
    let result = Classifier::builder().with_artifacts(&store);
    match result {
        Err(ClassifierError::BuildError(msg)) => assert!(msg.contains("model file")),
        other => panic!("expected BuildError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_malformed_input_is_recoverable() {
    // Needs an installed model; the decode guards themselves are unit-tested
    // without one.
    let Ok(store) = ArtifactStore::new_default() else {
        return;
    };
    if !store.is_present() {
        eprintln!("skipping: no model artifacts at {:?}", store.root());
        return;
    }

    let classifier = Classifier::builder()
        .with_artifacts(&store)
        .unwrap()
        .build()
        .unwrap();

    assert!(matches!(
        classifier.classify(&[]),
        Err(ClassifierError::ValidationError(_))
    ));
    assert!(matches!(
        classifier.classify(b"not an image at all"),
        Err(ClassifierError::ImageError(_))
    ));

    // A failed request must not poison the shared session.
    let png = {
        use image::{ImageFormat, RgbImage};
        use std::io::Cursor;
        let img = RgbImage::new(32, 32);
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    };
    assert!(classifier.classify(&png).is_ok());
}
