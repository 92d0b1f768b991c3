use anyhow::Context;
use clap::Parser;
use dermacare::{recommend, ArtifactStore, Classifier};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the ONNX model file (defaults to the artifact store location)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Path to the training-data directory whose subdirectory names define the classes
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Lesion images to classify (jpg/png)
    #[arg(required = true)]
    images: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("=== Starting Skin Disease Recognition Demo ===");

    let (model_path, data_dir) = match (args.model, args.data) {
        (Some(model), Some(data)) => (model, data),
        (model, data) => {
            let store = ArtifactStore::new_default().context("Failed to prepare artifact store")?;
            (
                model.unwrap_or_else(|| store.model_path()),
                data.unwrap_or_else(|| store.vocabulary_dir()),
            )
        }
    };

    let start_time = Instant::now();
    info!("Building classifier...");

    let classifier = Classifier::builder()
        .with_model_file(&model_path)?
        .with_vocabulary_dir(&data_dir)?
        .build()?;

    let build_time = start_time.elapsed();
    info!("=== Classifier Built Successfully (took {:.2?}) ===\n", build_time);
    info!("Known classes: {:?}", classifier.labels());

    info!("=== Running Classifications ({} images) ===\n", args.images.len());
    let classify_start = Instant::now();

    let mut failures = 0;
    for (i, image) in args.images.iter().enumerate() {
        info!(
            "\nImage {}/{} (elapsed: {:.2?}):",
            i + 1,
            args.images.len(),
            classify_start.elapsed()
        );
        if process_image(&classifier, image).is_err() {
            failures += 1;
        }
    }

    let total_time = start_time.elapsed();
    info!("\n=== Demo Complete ===");
    info!("Total time: {:.2?}", total_time);
    info!("Build time: {:.2?}", build_time);
    info!("Classification time: {:.2?}", classify_start.elapsed());

    if failures > 0 {
        anyhow::bail!("{} of {} images could not be classified", failures, args.images.len());
    }
    Ok(())
}

fn process_image(classifier: &Classifier, path: &Path) -> anyhow::Result<()> {
    info!("Processing: {}", path.display());

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("\nError reading {}: {}", path.display(), e);
            return Err(e.into());
        }
    };

    match classifier.classify(&bytes) {
        Ok(prediction) => {
            let mut scores: Vec<_> = classifier
                .labels()
                .iter()
                .zip(prediction.probabilities.iter().copied())
                .collect();
            scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

            println!("\n{}", path.display());
            println!("  Predicted condition: {}", prediction.label);
            println!("  Confidence scores (sorted):");
            for (label, score) in scores {
                println!("    {}: {:.1}%", label, score * 100.0);
            }

            match recommend::lookup(&prediction.label) {
                Some(bundle) => {
                    println!("  Skin care treatment:\n    {}", bundle.treatment);
                    println!("  Do's and don'ts:\n    {}", bundle.dos_and_donts);
                    println!("  Diet plan:\n    {}", bundle.diet);
                }
                None => {
                    println!("  No specific guidance available for this condition.");
                }
            }
        }
        Err(e) => {
            eprintln!("\nError processing image: {}", e);
            eprintln!("Consider:");
            eprintln!("  - Checking that the file is a valid jpg or png image");
            eprintln!("  - Re-exporting the image if it is truncated or corrupt");
            return Err(e.into());
        }
    }

    Ok(())
}
