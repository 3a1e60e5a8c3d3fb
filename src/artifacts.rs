use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::recommender::{CentroidModel, LabelDecoder};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Malformed artifact {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Locates and loads the persisted model and label decoder.
///
/// Both artifacts live under a single artifacts directory as JSON files with
/// well-known names. They are produced by an external training pipeline,
/// loaded once at process start, and held read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    artifacts_dir: PathBuf,
}

impl ArtifactStore {
    const MODEL_FILE: &'static str = "crop_model.json";
    const DECODER_FILE: &'static str = "label_decoder.json";

    /// Creates an ArtifactStore over the default artifacts directory.
    pub fn new_default() -> Self {
        Self::new(Self::default_artifacts_dir())
    }

    /// Returns the default artifacts directory path
    pub fn default_artifacts_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("CROPSENSE_ARTIFACTS") {
            return PathBuf::from(path);
        }

        // 2. Use platform-specific data directory
        if let Some(data_dir) = dirs::data_dir() {
            return data_dir.join("cropsense").join("artifacts");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cropsense").join("artifacts");
        }

        // 4. If all else fails, use system temp directory (platform agnostic)
        env::temp_dir().join("cropsense").join("artifacts")
    }

    pub fn new<P: AsRef<Path>>(artifacts_dir: P) -> Self {
        Self {
            artifacts_dir: artifacts_dir.as_ref().to_path_buf(),
        }
    }

    pub fn artifacts_dir(&self) -> &Path {
        &self.artifacts_dir
    }

    pub fn model_path(&self) -> PathBuf {
        self.artifacts_dir.join(Self::MODEL_FILE)
    }

    pub fn decoder_path(&self) -> PathBuf {
        self.artifacts_dir.join(Self::DECODER_FILE)
    }

    /// True when both the model and the decoder files exist.
    pub fn artifacts_present(&self) -> bool {
        let model_path = self.model_path();
        let decoder_path = self.decoder_path();
        log::info!("Checking for artifacts:");
        log::info!(
            "  Model path: {:?} (exists: {})",
            model_path,
            model_path.exists()
        );
        log::info!(
            "  Decoder path: {:?} (exists: {})",
            decoder_path,
            decoder_path.exists()
        );
        model_path.exists() && decoder_path.exists()
    }

    /// Loads the persisted classifier.
    pub fn load_model(&self) -> Result<CentroidModel, ArtifactError> {
        self.load_json(&self.model_path())
    }

    /// Loads the persisted label decoder.
    pub fn load_decoder(&self) -> Result<LabelDecoder, ArtifactError> {
        self.load_json(&self.decoder_path())
    }

    /// Writes the classifier artifact, creating the directory if needed.
    pub fn save_model(&self, model: &CentroidModel) -> Result<(), ArtifactError> {
        self.save_json(&self.model_path(), model)
    }

    /// Writes the label decoder artifact, creating the directory if needed.
    pub fn save_decoder(&self, decoder: &LabelDecoder) -> Result<(), ArtifactError> {
        self.save_json(&self.decoder_path(), decoder)
    }

    fn load_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::NotFound(format!(
                "{:?} (expected an artifact produced by the training pipeline)",
                path
            )));
        }
        log::info!("Loading artifact from {:?}", path);
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| ArtifactError::Malformed {
            path: path.display().to_string(),
            source,
        })
    }

    fn save_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<(), ArtifactError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        log::info!("Writing artifact to {:?}", path);
        let contents = serde_json::to_string_pretty(value)
            .map_err(|source| ArtifactError::Malformed {
                path: path.display().to_string(),
                source,
            })?;
        fs::write(path, contents)?;
        Ok(())
    }
}
