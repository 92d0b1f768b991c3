use dermacare::Vocabulary;
use std::env;
use std::fs;
use std::path::PathBuf;

fn fixture_root(name: &str, classes: &[&str]) -> PathBuf {
    let root = env::temp_dir().join("dermacare-vocab-integration").join(name);
    if root.exists() {
        fs::remove_dir_all(&root).unwrap();
    }
    for class in classes {
        fs::create_dir_all(root.join(class)).unwrap();
    }
    root
}

#[test]
fn test_training_layout_ordering() {
    // The exact class folders the bundled model was trained against, created
    // out of order to prove sorting is what fixes the indices.
    let root = fixture_root(
        "training-layout",
        &[
            "vitiligo",
            "Tinea Ringworm Candidiasis and other Fungal Infections",
            "Eczema Photos",
            "Melanoma Skin Cancer Nevi and Moles",
        ],
    );

    let vocabulary = Vocabulary::from_dir(&root).unwrap();
    assert_eq!(
        vocabulary.labels(),
        &[
            "Eczema Photos".to_string(),
            "Melanoma Skin Cancer Nevi and Moles".to_string(),
            "Tinea Ringworm Candidiasis and other Fungal Infections".to_string(),
            "vitiligo".to_string(),
        ]
    );
}

#[test]
fn test_indices_are_stable_across_loads() {
    let root = fixture_root("stable", &["c", "a", "b"]);
    let first = Vocabulary::from_dir(&root).unwrap();
    let second = Vocabulary::from_dir(&root).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.position("b"), Some(1));
}

#[test]
fn test_lookup_chain_for_every_label() {
    let root = fixture_root(
        "lookup-chain",
        &[
            "Eczema Photos",
            "Melanoma Skin Cancer Nevi and Moles",
            "Tinea Ringworm Candidiasis and other Fungal Infections",
            "vitiligo",
        ],
    );

    let vocabulary = Vocabulary::from_dir(&root).unwrap();
    // All four training classes carry authored recommendation content.
    for label in vocabulary.iter() {
        assert!(
            dermacare::recommend::lookup(label).is_some(),
            "no authored content for {:?}",
            label
        );
    }
}
