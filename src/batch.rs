use std::collections::HashMap;
use std::path::Path;

use log::{info, warn};
use ndarray::Array2;

use crate::mapper::FeatureVector;
use crate::recommender::{Recommender, RecommenderError};

/// Column names the batch input table must carry, in this exact order.
///
/// Order matters: the model consumes features positionally, so the check is
/// exact-sequence equality rather than set equality.
pub const EXPECTED_COLUMNS: [&str; FeatureVector::LEN] =
    ["N", "P", "K", "temperature", "humidity", "ph", "rainfall"];

/// Summary of one batch prediction run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Number of rows predicted.
    pub rows: usize,
    /// Count of empty or non-numeric fields encountered in the input.
    pub missing_values: usize,
    /// Predicted crop distribution, most frequent first.
    pub crop_counts: Vec<(String, usize)>,
}

/// Reads a feature table, predicts the most likely crop per row, and writes
/// the same table with a `Predicted Crop` column appended.
///
/// Validation is strict on the header (see [`EXPECTED_COLUMNS`]) and lenient
/// on the values: empty or unparseable fields are counted, warned about once,
/// and carried into prediction as NaN. Cleaning those up beforehand is the
/// caller's responsibility. Nothing is written on a schema mismatch.
pub fn run_batch(
    recommender: &Recommender,
    input: &Path,
    output: &Path,
) -> Result<BatchReport, RecommenderError> {
    info!("Reading input table from {:?}", input);
    let mut reader = csv::Reader::from_path(input)
        .map_err(|e| RecommenderError::TableError(format!("cannot read {:?}: {}", input, e)))?;

    let headers = reader.headers()?.clone();
    let found: Vec<String> = headers.iter().map(str::to_string).collect();
    if found != EXPECTED_COLUMNS {
        return Err(RecommenderError::SchemaMismatch {
            expected: EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            found,
        });
    }
    info!("Column validation passed");

    let mut records = Vec::new();
    let mut values = Vec::new();
    let mut missing_values = 0usize;
    for result in reader.records() {
        let record = result?;
        for field in record.iter() {
            match field.trim().parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    missing_values += 1;
                    values.push(f64::NAN);
                }
            }
        }
        records.push(record);
    }

    if missing_values > 0 {
        warn!(
            "{} missing or non-numeric values in the input; affected predictions are unreliable",
            missing_values
        );
    }

    let rows = Array2::from_shape_vec((records.len(), FeatureVector::LEN), values)
        .map_err(|e| RecommenderError::TableError(format!("failed to shape input rows: {}", e)))?;

    info!("Predicting {} rows", records.len());
    let labels = recommender.predict_labels(&rows)?;

    // Output is only created once validation and prediction have succeeded
    let mut writer = csv::Writer::from_path(output)
        .map_err(|e| RecommenderError::TableError(format!("cannot write {:?}: {}", output, e)))?;

    let mut header_row = headers.clone();
    header_row.push_field("Predicted Crop");
    writer.write_record(&header_row)?;

    for (record, label) in records.iter().zip(labels.iter()) {
        let mut row = record.clone();
        row.push_field(label);
        writer.write_record(&row)?;
    }
    writer
        .flush()
        .map_err(|e| RecommenderError::TableError(e.to_string()))?;
    info!("Wrote {} predictions to {:?}", labels.len(), output);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in &labels {
        *counts.entry(label.as_str()).or_insert(0) += 1;
    }
    let mut crop_counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(crop, count)| (crop.to_string(), count))
        .collect();
    crop_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(BatchReport {
        rows: records.len(),
        missing_values,
        crop_counts,
    })
}
