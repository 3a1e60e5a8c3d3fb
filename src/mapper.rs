use serde::{Deserialize, Serialize};

/// The seven numeric features the crop model consumes, in the order the
/// model was trained on: N, P, K, temperature, humidity, pH, rainfall.
///
/// Units are fixed: kg/ha-equivalent indices for N/P/K, degrees Celsius,
/// relative humidity percent, pH on the 0-14 scale, and millimetres of
/// rainfall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

impl FeatureVector {
    /// Number of features the model consumes.
    pub const LEN: usize = 7;

    /// Returns the features as an array in training order.
    pub fn to_array(&self) -> [f64; Self::LEN] {
        [
            self.n,
            self.p,
            self.k,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

/// Qualitative answers collected from the farmer.
///
/// Fields are expected to be trimmed and lowercased already; the interactive
/// collector does this before handing answers to [`map_answers`]. Values
/// outside the documented option lists are fine and fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarmerAnswers {
    /// One of: sandy, loamy, clay, red, black
    pub soil_type: String,
    /// One of: none, low, medium, high
    pub fertilizer_use: String,
    /// One of: cool, warm, hot
    pub temperature_feel: String,
    /// One of: dry, moderate, humid
    pub humidity_feel: String,
    /// One of: acidic, neutral, alkaline
    pub ph_feel: String,
    /// One of: low, medium, high, very_high
    pub rainfall_season: String,
}

/// Converts farmer-friendly answers into the numeric features the model
/// expects.
///
/// Every lookup is a discrete quantization with a documented default, so the
/// function is total: any combination of inputs, recognized or not, yields a
/// complete [`FeatureVector`]. No interpolation happens between categories.
///
/// # Example
/// ```
/// use cropsense::{map_answers, FarmerAnswers};
///
/// let answers = FarmerAnswers {
///     soil_type: "loamy".into(),
///     fertilizer_use: "medium".into(),
///     temperature_feel: "warm".into(),
///     humidity_feel: "humid".into(),
///     ph_feel: "neutral".into(),
///     rainfall_season: "high".into(),
/// };
/// let features = map_answers(&answers);
/// assert_eq!(features.n, 35.0);
/// assert_eq!(features.rainfall, 1500.0);
/// ```
pub fn map_answers(answers: &FarmerAnswers) -> FeatureVector {
    // Base NPK from soil type
    let (base_n, base_p, base_k) = match answers.soil_type.as_str() {
        "sandy" => (15.0, 10.0, 20.0),
        "loamy" => (25.0, 15.0, 25.0),
        "clay" => (20.0, 12.0, 30.0),
        "red" => (18.0, 8.0, 22.0),
        "black" => (22.0, 18.0, 35.0),
        _ => (20.0, 12.0, 25.0),
    };

    // Additive adjustment from fertilizer intensity
    let (adj_n, adj_p, adj_k) = match answers.fertilizer_use.as_str() {
        "low" => (5.0, 3.0, 5.0),
        "medium" => (10.0, 8.0, 10.0),
        "high" => (15.0, 12.0, 15.0),
        // "none" and anything unrecognized contribute nothing
        _ => (0.0, 0.0, 0.0),
    };

    let temperature = match answers.temperature_feel.as_str() {
        "cool" => 18.0,
        "hot" => 32.0,
        _ => 25.0,
    };

    let humidity = match answers.humidity_feel.as_str() {
        "dry" => 40.0,
        "humid" => 85.0,
        _ => 65.0,
    };

    let ph = match answers.ph_feel.as_str() {
        "acidic" => 5.5,
        "alkaline" => 8.5,
        _ => 7.0,
    };

    let rainfall = match answers.rainfall_season.as_str() {
        "low" => 500.0,
        "high" => 1500.0,
        "very_high" => 2000.0,
        _ => 1000.0,
    };

    FeatureVector {
        n: base_n + adj_n,
        p: base_p + adj_p,
        k: base_k + adj_k,
        temperature,
        humidity,
        ph,
        rainfall,
    }
}
