use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use cropsense::{interactive, run_batch, ArtifactStore, Recommender, RecommenderError};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the trained model and label decoder artifacts
    #[arg(long)]
    artifacts: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer six questions about your farm and get ranked crop recommendations
    Interactive,
    /// Predict the most likely crop for every row of a feature table
    Batch {
        /// Input CSV with columns N,P,K,temperature,humidity,ph,rainfall
        #[arg(short, long, default_value = "unlabeled_data.csv")]
        input: PathBuf,
        /// Output CSV path; the input columns plus a Predicted Crop column
        #[arg(short, long, default_value = "predicted_output.csv")]
        output: PathBuf,
    },
}

fn main() {
    cropsense::init_logger();
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("Error: {:#}", err);
        if let Some(recommender_err) = err.downcast_ref::<RecommenderError>() {
            print_hint(recommender_err);
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let store = match args.artifacts {
        Some(dir) => ArtifactStore::new(dir),
        None => ArtifactStore::new_default(),
    };
    info!("Using artifacts from {:?}", store.artifacts_dir());

    let recommender = Recommender::builder().with_artifacts(&store)?.build()?;

    match args.command {
        Command::Interactive => {
            interactive::run_session(&recommender)?;
            Ok(())
        }
        Command::Batch { input, output } => {
            let report = run_batch(&recommender, &input, &output)?;

            println!("\nPREDICTION SUMMARY:");
            println!("  Total predictions made: {}", report.rows);
            if report.missing_values > 0 {
                println!(
                    "  Warning: {} missing or non-numeric values in the input",
                    report.missing_values
                );
            }
            println!("  Unique crops predicted: {}", report.crop_counts.len());
            println!("\nCrop distribution in predictions:");
            for (crop, count) in &report.crop_counts {
                let share = *count as f64 / report.rows.max(1) as f64 * 100.0;
                println!("  {}: {} ({:.1}%)", crop, count, share);
            }
            println!("\nResults saved to {:?}", output);
            Ok(())
        }
    }
}

fn print_hint(err: &RecommenderError) {
    match err {
        RecommenderError::MissingArtifact(_) => {
            eprintln!("Make sure the training pipeline has produced the model artifacts,");
            eprintln!("or point --artifacts (or CROPSENSE_ARTIFACTS) at the right directory.");
        }
        RecommenderError::CapabilityUnsupported(_) => {
            eprintln!("The interactive flow needs a model that outputs class probabilities.");
            eprintln!("Re-export the model artifact with probability support enabled.");
        }
        RecommenderError::SchemaMismatch { .. } => {
            eprintln!("The input table must carry exactly the training columns, in order.");
        }
        _ => {}
    }
}
