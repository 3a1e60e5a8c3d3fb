//! The model adapter: a capability trait for trained classifiers, the
//! concrete persisted model, the label decoder, and the ranking logic that
//! turns raw probability output into ordered crop recommendations.

mod error;
mod model;
mod recommender;

pub use error::RecommenderError;
pub use model::{CentroidModel, CropClassifier};
pub use recommender::{LabelDecoder, Recommendation, Recommender, RecommenderBuilder};
