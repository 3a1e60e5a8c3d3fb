use std::io::{self, BufRead, Write};

use crate::catalog;
use crate::mapper::{map_answers, FarmerAnswers, FeatureVector};
use crate::recommender::{Recommender, RecommenderError};

/// Number of recommendations printed by the interactive flow.
const TOP_K: usize = 3;

/// Asks the six farm-condition questions in fixed order and returns the raw
/// answers, trimmed and lowercased.
///
/// Answers are deliberately not validated against the option lists: any text
/// is accepted and unrecognized values fall through to the mapper's default
/// fallbacks, so the flow never blocks the user on a typo.
pub fn ask_farmer_questions<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<FarmerAnswers> {
    writeln!(output, "=== Crop Recommendation System ===")?;
    writeln!(
        output,
        "Please answer the following questions about your farm conditions:\n"
    )?;

    let prompts = [
        ("1. What type of soil do you have?", "sandy, loamy, clay, red, black"),
        ("2. How much fertilizer do you typically use?", "none, low, medium, high"),
        ("3. How would you describe your farm's temperature?", "cool, warm, hot"),
        ("4. How would you describe the humidity level?", "dry, moderate, humid"),
        ("5. How would you describe your soil's acidity?", "acidic, neutral, alkaline"),
        ("6. How would you describe your rainfall pattern?", "low, medium, high, very_high"),
    ];

    let mut answers = Vec::with_capacity(prompts.len());
    for (question, options) in prompts {
        writeln!(output, "{}", question)?;
        writeln!(output, "   Options: {}", options)?;
        write!(output, "Your answer: ")?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        answers.push(line.trim().to_lowercase());
        writeln!(output)?;
    }

    let mut answers = answers.into_iter();
    Ok(FarmerAnswers {
        soil_type: answers.next().unwrap_or_default(),
        fertilizer_use: answers.next().unwrap_or_default(),
        temperature_feel: answers.next().unwrap_or_default(),
        humidity_feel: answers.next().unwrap_or_default(),
        ph_feel: answers.next().unwrap_or_default(),
        rainfall_season: answers.next().unwrap_or_default(),
    })
}

/// Runs one question-and-answer session against the given recommender:
/// collect answers, map to features, rank, and print the top 3 with
/// confidence percentages and agronomic notes.
pub fn run_session(recommender: &Recommender) -> Result<(), RecommenderError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let answers = ask_farmer_questions(&mut input, &mut output)
        .map_err(|e| RecommenderError::PredictionError(format!("failed to read answers: {}", e)))?;

    let features = map_answers(&answers);
    print_features(&features);

    let top = recommender.top_k(&features, TOP_K)?;

    println!("\n=== TOP {} CROP RECOMMENDATIONS ===", TOP_K);
    for (rank, recommendation) in top.iter().enumerate() {
        println!("\n{}. {}", rank + 1, recommendation.crop.to_uppercase());
        println!("   Confidence: {:.1}%", recommendation.probability * 100.0);
        println!(
            "   Recommendation: {}",
            catalog::explain(&recommendation.crop, recommendation.probability)
        );
    }

    Ok(())
}

fn print_features(features: &FeatureVector) {
    println!(
        "\nConverted features: N={}, P={}, K={}, Temperature={}°C, Humidity={}%, pH={}, Rainfall={}mm",
        features.n,
        features.p,
        features.k,
        features.temperature,
        features.humidity,
        features.ph,
        features.rainfall
    );
}
