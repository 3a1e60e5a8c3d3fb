//! A small agricultural decision-support pipeline: a trained classifier maps
//! soil and climate measurements to a recommended crop, consumed either as
//! batch prediction over a CSV of measurements or as an interactive Q&A flow
//! that converts farmer-friendly answers into the model's feature vector.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use cropsense::{map_answers, CentroidModel, FarmerAnswers, LabelDecoder, Recommender};
//!
//! let model = CentroidModel {
//!     feature_means: vec![0.0; 7],
//!     feature_stds: vec![1.0; 7],
//!     centroids: vec![vec![0.0; 7], vec![100.0; 7]],
//! };
//!
//! let recommender = Recommender::builder()
//!     .with_model(Box::new(model))
//!     .with_decoder(LabelDecoder::new(vec!["rice".into(), "wheat".into()]))
//!     .build()?;
//!
//! let answers = FarmerAnswers {
//!     soil_type: "loamy".into(),
//!     fertilizer_use: "medium".into(),
//!     temperature_feel: "warm".into(),
//!     humidity_feel: "humid".into(),
//!     ph_feel: "neutral".into(),
//!     rainfall_season: "high".into(),
//! };
//!
//! let ranked = recommender.top_k(&map_answers(&answers), 3)?;
//! println!("Best crop: {}", ranked[0].crop);
//! # Ok(())
//! # }
//! ```
//!
//! # Fallback Policy
//!
//! The answer-to-feature mapping is a total function: qualitative answers
//! outside the documented option lists quietly fall back to per-question
//! defaults instead of failing, so an unrecognized answer never blocks a
//! recommendation.

pub mod artifacts;
pub mod batch;
pub mod catalog;
pub mod interactive;
pub mod mapper;
pub mod recommender;

pub use artifacts::{ArtifactError, ArtifactStore};
pub use batch::{run_batch, BatchReport, EXPECTED_COLUMNS};
pub use mapper::{map_answers, FarmerAnswers, FeatureVector};
pub use recommender::{
    CentroidModel, CropClassifier, LabelDecoder, Recommendation, Recommender, RecommenderBuilder,
    RecommenderError,
};

pub fn init_logger() {
    env_logger::init();
}
