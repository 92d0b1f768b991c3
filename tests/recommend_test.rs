use dermacare::recommend;

#[test]
fn test_vitiligo_bundle_is_complete() {
    let bundle = recommend::lookup("vitiligo").expect("vitiligo must have authored content");
    assert!(!bundle.treatment.is_empty());
    assert!(!bundle.dos_and_donts.is_empty());
    assert!(!bundle.diet.is_empty());
}

#[test]
fn test_unknown_label_is_not_an_error() {
    // lookup is total: arbitrary strings yield None, never a panic or Err
    assert!(recommend::lookup("unknown-disease-xyz").is_none());
    assert!(recommend::lookup("").is_none());
    assert!(recommend::lookup("VITILIGO").is_none());
    assert!(recommend::lookup("train").is_none());
}

#[test]
fn test_display_names_do_not_resolve() {
    // The table is keyed by training-data folder names; the simpler display
    // names from the introductory copy intentionally miss.
    assert!(recommend::lookup("candidiasis").is_none());
    assert!(recommend::lookup("eczema").is_none());
    assert!(recommend::lookup("melanoma").is_none());
    assert!(recommend::lookup("Eczema Photos").is_some());
}

#[test]
fn test_bundles_serialize() {
    let bundle = recommend::lookup("Melanoma Skin Cancer Nevi and Moles").unwrap();
    let json = serde_json::to_value(bundle).unwrap();
    assert!(json["treatment"].as_str().unwrap().contains("surgical removal"));
    assert!(json["dos_and_donts"].is_string());
    assert!(json["diet"].is_string());
}
