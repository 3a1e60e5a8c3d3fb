use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::error::RecommenderError;
use super::model::CropClassifier;
use crate::artifacts::ArtifactStore;
use crate::mapper::FeatureVector;

/// Decodes a classifier's numeric class indices back to crop names.
///
/// Classes are stored in fit order, which is also the tie-break order for
/// ranked recommendations. Round-trips through serde_json as the persisted
/// decoder artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelDecoder {
    classes: Vec<String>,
}

impl LabelDecoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Class labels in fit order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Translates class indices into crop labels.
    pub fn decode(&self, indices: &[usize]) -> Result<Vec<String>, RecommenderError> {
        indices
            .iter()
            .map(|&index| {
                self.classes.get(index).cloned().ok_or_else(|| {
                    RecommenderError::PredictionError(format!(
                        "class index {} out of range for {} known classes",
                        index,
                        self.classes.len()
                    ))
                })
            })
            .collect()
    }
}

/// A single ranked crop suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub crop: String,
    pub probability: f64,
}

/// Pairs a trained classifier with its label decoder and exposes the two
/// prediction surfaces the pipeline needs: a ranked probability view for the
/// interactive flow and a most-likely-label view for the batch flow.
///
/// # Example
/// ```
/// use cropsense::{CentroidModel, LabelDecoder, Recommender, map_answers, FarmerAnswers};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let model = CentroidModel {
///     feature_means: vec![0.0; 7],
///     feature_stds: vec![1.0; 7],
///     centroids: vec![vec![0.0; 7], vec![100.0; 7]],
/// };
/// let recommender = Recommender::builder()
///     .with_model(Box::new(model))
///     .with_decoder(LabelDecoder::new(vec!["rice".into(), "wheat".into()]))
///     .build()?;
///
/// let features = map_answers(&FarmerAnswers::default());
/// let top = recommender.top_k(&features, 3)?;
/// assert!(!top.is_empty());
/// # Ok(())
/// # }
/// ```
pub struct Recommender {
    model: Box<dyn CropClassifier>,
    decoder: LabelDecoder,
}

impl Recommender {
    /// Creates a new RecommenderBuilder for fluent construction
    pub fn builder() -> RecommenderBuilder {
        RecommenderBuilder::new()
    }

    /// Class labels known to the model, in fit order.
    pub fn classes(&self) -> &[String] {
        self.decoder.classes()
    }

    /// Ranks every known crop for one feature vector, descending by
    /// probability. The sort is stable, so equal probabilities keep the
    /// decoder's fit order.
    ///
    /// Requires the model's probability capability; models without it report
    /// [`RecommenderError::CapabilityUnsupported`].
    pub fn rank(&self, features: &FeatureVector) -> Result<Vec<Recommendation>, RecommenderError> {
        let rows = Array2::from_shape_vec((1, FeatureVector::LEN), features.to_array().to_vec())
            .map_err(|e| {
                RecommenderError::PredictionError(format!("failed to shape features: {}", e))
            })?;
        let probabilities = self.model.predict_proba(&rows)?;

        if probabilities.ncols() != self.decoder.classes().len() {
            return Err(RecommenderError::PredictionError(format!(
                "model produced {} class probabilities but the decoder knows {} classes",
                probabilities.ncols(),
                self.decoder.classes().len()
            )));
        }

        let mut ranked: Vec<Recommendation> = self
            .decoder
            .classes()
            .iter()
            .zip(probabilities.row(0).iter())
            .map(|(crop, &probability)| Recommendation {
                crop: crop.clone(),
                probability,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(ranked)
    }

    /// The K highest-probability crops for one feature vector.
    pub fn top_k(
        &self,
        features: &FeatureVector,
        k: usize,
    ) -> Result<Vec<Recommendation>, RecommenderError> {
        let mut ranked = self.rank(features)?;
        ranked.truncate(k);
        Ok(ranked)
    }

    /// Most likely crop label for each feature row. This is the batch
    /// surface: no ranking, no explanations, just one label per row.
    pub fn predict_labels(&self, rows: &Array2<f64>) -> Result<Vec<String>, RecommenderError> {
        let indices = self.model.predict(rows)?;
        self.decoder.decode(&indices)
    }
}

/// A builder for constructing a Recommender with a fluent interface.
#[derive(Default)]
pub struct RecommenderBuilder {
    model: Option<Box<dyn CropClassifier>>,
    decoder: Option<LabelDecoder>,
}

impl RecommenderBuilder {
    pub fn new() -> Self {
        Self {
            model: None,
            decoder: None,
        }
    }

    /// Loads both the model and the label decoder from persisted artifacts.
    ///
    /// A missing or unreadable artifact reports
    /// [`RecommenderError::MissingArtifact`]; the caller is expected to print
    /// the diagnostic and end the run.
    pub fn with_artifacts(self, store: &ArtifactStore) -> Result<Self, RecommenderError> {
        let model = store.load_model()?;
        let decoder = store.load_decoder()?;
        log::info!(
            "Loaded model ({} classes) and label decoder from {:?}",
            model.num_classes(),
            store.artifacts_dir()
        );
        Ok(self.with_model(Box::new(model)).with_decoder(decoder))
    }

    /// Sets the classifier directly. Useful for tests and for callers that
    /// manage their own artifacts.
    pub fn with_model(mut self, model: Box<dyn CropClassifier>) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets the label decoder directly.
    pub fn with_decoder(mut self, decoder: LabelDecoder) -> Self {
        self.decoder = Some(decoder);
        self
    }

    /// Validates the pair and builds the Recommender.
    ///
    /// # Errors
    /// * `PredictionError` if the model or decoder is missing, the decoder is
    ///   empty, or the model's class count disagrees with the decoder's.
    pub fn build(self) -> Result<Recommender, RecommenderError> {
        let model = self.model.ok_or_else(|| {
            RecommenderError::PredictionError("no model set on the builder".into())
        })?;
        let decoder = self.decoder.ok_or_else(|| {
            RecommenderError::PredictionError("no label decoder set on the builder".into())
        })?;

        if decoder.classes().is_empty() {
            return Err(RecommenderError::PredictionError(
                "label decoder has no classes".into(),
            ));
        }
        if model.num_classes() != decoder.classes().len() {
            return Err(RecommenderError::PredictionError(format!(
                "model has {} classes but the decoder has {}",
                model.num_classes(),
                decoder.classes().len()
            )));
        }

        Ok(Recommender { model, decoder })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_out_of_range() {
        let decoder = LabelDecoder::new(vec!["rice".into()]);
        assert!(decoder.decode(&[0]).is_ok());
        assert!(matches!(
            decoder.decode(&[1]),
            Err(RecommenderError::PredictionError(_))
        ));
    }

    #[test]
    fn test_build_requires_both_parts() {
        let result = Recommender::builder().build();
        assert!(matches!(
            result,
            Err(RecommenderError::PredictionError(_))
        ));
    }
}
