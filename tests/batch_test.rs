use std::env;
use std::fs;
use std::path::PathBuf;

use cropsense::{run_batch, CentroidModel, LabelDecoder, Recommender, RecommenderError};

const INPUT_HEADER: &str = "N,P,K,temperature,humidity,ph,rainfall";

fn test_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join("cropsense-batch-tests").join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Two classes split purely on rainfall: low rainfall predicts grapes,
/// high rainfall predicts rice.
fn test_recommender() -> Recommender {
    let model = CentroidModel {
        feature_means: vec![0.0; 7],
        feature_stds: vec![1.0; 7],
        centroids: vec![
            vec![90.0, 40.0, 40.0, 25.0, 80.0, 6.5, 200.0],
            vec![20.0, 12.0, 25.0, 30.0, 45.0, 7.5, 40.0],
        ],
    };
    Recommender::builder()
        .with_model(Box::new(model))
        .with_decoder(LabelDecoder::new(vec!["rice".into(), "grapes".into()]))
        .build()
        .unwrap()
}

#[test]
fn test_round_trip_preserves_rows_and_appends_prediction() -> Result<(), RecommenderError> {
    let dir = test_dir("round-trip");
    let input = dir.join("input.csv");
    let output = dir.join("output.csv");
    fs::write(
        &input,
        format!(
            "{}\n90,40,40,25.5,80,6.5,200\n21,13,26,29.0,46,7.4,42\n88,39,41,24.0,79,6.6,190\n",
            INPUT_HEADER
        ),
    )
    .unwrap();

    let report = run_batch(&test_recommender(), &input, &output)?;
    assert_eq!(report.rows, 3);
    assert_eq!(report.missing_values, 0);

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], format!("{},Predicted Crop", INPUT_HEADER));
    // Original values echoed unchanged, prediction appended
    assert_eq!(lines[1], "90,40,40,25.5,80,6.5,200,rice");
    assert_eq!(lines[2], "21,13,26,29.0,46,7.4,42,grapes");
    assert_eq!(lines[3], "88,39,41,24.0,79,6.6,190,rice");

    // Distribution is most-frequent first
    assert_eq!(
        report.crop_counts,
        vec![("rice".to_string(), 2), ("grapes".to_string(), 1)]
    );
    Ok(())
}

#[test]
fn test_batch_is_idempotent() -> Result<(), RecommenderError> {
    let dir = test_dir("idempotent");
    let input = dir.join("input.csv");
    let first = dir.join("first.csv");
    let second = dir.join("second.csv");
    fs::write(
        &input,
        format!("{}\n90,40,40,25.5,80,6.5,200\n21,13,26,29.0,46,7.4,42\n", INPUT_HEADER),
    )
    .unwrap();

    let recommender = test_recommender();
    run_batch(&recommender, &input, &first)?;
    run_batch(&recommender, &input, &second)?;

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
    Ok(())
}

#[test]
fn test_missing_column_is_rejected_and_writes_nothing() {
    let dir = test_dir("schema");
    let input = dir.join("input.csv");
    let output = dir.join("output.csv");
    // No ph column
    fs::write(&input, "N,P,K,temperature,humidity,rainfall\n90,40,40,25.5,80,200\n").unwrap();

    let result = run_batch(&test_recommender(), &input, &output);
    match result {
        Err(RecommenderError::SchemaMismatch { expected, found }) => {
            assert!(expected.contains(&"ph".to_string()));
            assert!(!found.contains(&"ph".to_string()));
        }
        other => panic!("expected SchemaMismatch, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn test_reordered_columns_are_rejected() {
    let dir = test_dir("order");
    let input = dir.join("input.csv");
    let output = dir.join("output.csv");
    // Same column set, wrong order
    fs::write(&input, "P,N,K,temperature,humidity,ph,rainfall\n40,90,40,25.5,80,6.5,200\n").unwrap();

    let result = run_batch(&test_recommender(), &input, &output);
    assert!(matches!(
        result,
        Err(RecommenderError::SchemaMismatch { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn test_missing_values_warn_but_do_not_stop_the_run() -> Result<(), RecommenderError> {
    let dir = test_dir("nulls");
    let input = dir.join("input.csv");
    let output = dir.join("output.csv");
    fs::write(
        &input,
        format!("{}\n90,40,40,25.5,80,6.5,200\n21,,26,29.0,46,7.4,42\n", INPUT_HEADER),
    )
    .unwrap();

    let report = run_batch(&test_recommender(), &input, &output)?;
    assert_eq!(report.rows, 2);
    assert_eq!(report.missing_values, 1);
    assert!(output.exists());

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 3);
    Ok(())
}

#[test]
fn test_empty_table_yields_empty_output() -> Result<(), RecommenderError> {
    let dir = test_dir("empty");
    let input = dir.join("input.csv");
    let output = dir.join("output.csv");
    fs::write(&input, format!("{}\n", INPUT_HEADER)).unwrap();

    let report = run_batch(&test_recommender(), &input, &output)?;
    assert_eq!(report.rows, 0);
    assert!(report.crop_counts.is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 1);
    Ok(())
}
