use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use super::error::RecommenderError;

/// Minimal capability interface for a trained crop classifier.
///
/// `predict` must always be available. `predict_proba` is an optional
/// capability with a default body that reports [`RecommenderError::CapabilityUnsupported`],
/// so models without calibrated probabilities can still serve the batch flow
/// while the interactive flow fails with a clear message.
///
/// Rows are feature vectors in training order (see
/// [`FeatureVector`](crate::FeatureVector)); class indices refer to the label
/// decoder's fit order.
pub trait CropClassifier: Send + Sync {
    /// Number of classes the model was fitted on.
    fn num_classes(&self) -> usize;

    /// Predicts the most likely class index for each feature row.
    fn predict(&self, rows: &Array2<f64>) -> Result<Vec<usize>, RecommenderError>;

    /// Predicts the full class-probability distribution for each row,
    /// shaped rows x classes with each row summing to 1.
    fn predict_proba(&self, rows: &Array2<f64>) -> Result<Array2<f64>, RecommenderError> {
        let _ = rows;
        Err(RecommenderError::CapabilityUnsupported(
            "this model does not produce class probabilities".into(),
        ))
    }
}

/// A nearest-centroid classifier over standardized features.
///
/// Each class is represented by the centroid of its training rows in
/// standardized feature space. Prediction picks the closest centroid;
/// probabilities are a softmax over negative Euclidean distances. The whole
/// model is plain data and round-trips through serde_json as the persisted
/// model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentroidModel {
    /// Per-feature means used for standardization, training order.
    pub feature_means: Vec<f64>,
    /// Per-feature standard deviations used for standardization.
    pub feature_stds: Vec<f64>,
    /// One centroid per class, indexed by class index.
    pub centroids: Vec<Vec<f64>>,
}

impl CentroidModel {
    fn check_width(&self, rows: &Array2<f64>) -> Result<(), RecommenderError> {
        if rows.ncols() != self.feature_means.len() {
            return Err(RecommenderError::PredictionError(format!(
                "expected {} features per row, got {}",
                self.feature_means.len(),
                rows.ncols()
            )));
        }
        Ok(())
    }

    fn standardize(&self, row: ArrayView1<f64>) -> Vec<f64> {
        row.iter()
            .enumerate()
            .map(|(j, &value)| {
                let std = self.feature_stds[j];
                if std > 1e-12 {
                    (value - self.feature_means[j]) / std
                } else {
                    value - self.feature_means[j]
                }
            })
            .collect()
    }

    /// Euclidean distance from a standardized row to every class centroid.
    fn distances(&self, row: ArrayView1<f64>) -> Vec<f64> {
        let standardized = self.standardize(row);
        self.centroids
            .iter()
            .map(|centroid| {
                standardized
                    .iter()
                    .zip(centroid.iter())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f64>()
                    .sqrt()
            })
            .collect()
    }
}

impl CropClassifier for CentroidModel {
    fn num_classes(&self) -> usize {
        self.centroids.len()
    }

    fn predict(&self, rows: &Array2<f64>) -> Result<Vec<usize>, RecommenderError> {
        if self.centroids.is_empty() {
            return Err(RecommenderError::PredictionError(
                "model has no classes".into(),
            ));
        }
        self.check_width(rows)?;

        let mut indices = Vec::with_capacity(rows.nrows());
        for row in rows.rows() {
            let distances = self.distances(row);
            let best = distances
                .iter()
                .enumerate()
                .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
                .map(|(index, _)| index)
                .unwrap_or(0);
            indices.push(best);
        }
        Ok(indices)
    }

    fn predict_proba(&self, rows: &Array2<f64>) -> Result<Array2<f64>, RecommenderError> {
        if self.centroids.is_empty() {
            return Err(RecommenderError::PredictionError(
                "model has no classes".into(),
            ));
        }
        self.check_width(rows)?;

        let num_classes = self.centroids.len();
        let mut probabilities = Vec::with_capacity(rows.nrows() * num_classes);
        for row in rows.rows() {
            let scores: Vec<f64> = self.distances(row).iter().map(|d| -d).collect();
            // Softmax with the usual max-shift for numerical stability
            let max = scores
                .iter()
                .cloned()
                .fold(f64::NEG_INFINITY, f64::max);
            let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
            let sum: f64 = exps.iter().sum();
            probabilities.extend(exps.iter().map(|e| e / sum));
        }

        Array2::from_shape_vec((rows.nrows(), num_classes), probabilities).map_err(|e| {
            RecommenderError::PredictionError(format!("failed to shape probabilities: {}", e))
        })
    }
}
