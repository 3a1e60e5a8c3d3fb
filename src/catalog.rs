use lazy_static::lazy_static;
use std::collections::HashMap;

/// Fallback sentence for crops the catalog does not know about.
const GENERIC_NOTE: &str =
    "Suitable for current soil and climate conditions based on analysis.";

lazy_static! {
    /// Agronomic notes keyed by lowercase crop name.
    static ref CROP_NOTES: HashMap<&'static str, &'static str> = {
        let mut notes = HashMap::new();
        notes.insert("rice", "Thrives in warm, humid conditions with high rainfall. Requires rich soil with good water retention.");
        notes.insert("wheat", "Prefers cool temperatures and moderate rainfall. Grows well in loamy soils with balanced nutrients.");
        notes.insert("maize", "Adaptable to warm climates with moderate rainfall. Tolerates various soil types but needs adequate nutrients.");
        notes.insert("cotton", "Requires warm temperatures and moderate humidity. Prefers well-drained soils with good sunlight.");
        notes.insert("sugarcane", "Needs hot, humid climate with high rainfall. Grows best in fertile, well-irrigated soils.");
        notes.insert("coffee", "Thrives in cool, humid mountain climates. Requires well-drained, acidic soils with shade.");
        notes.insert("tea", "Prefers cool, humid conditions with acidic soils. Needs consistent rainfall and good drainage.");
        notes.insert("banana", "Requires warm, humid climate with rich, well-drained soil. Needs consistent moisture.");
        notes.insert("apple", "Prefers cool temperatures and moderate humidity. Grows well in well-drained, loamy soils.");
        notes.insert("grapes", "Adaptable to warm, dry climates. Prefers well-drained soils with moderate fertility.");
        notes.insert("orange", "Needs warm temperatures and moderate humidity. Prefers slightly acidic, well-drained soils.");
        notes.insert("mango", "Thrives in hot, dry to moderately humid conditions. Adaptable to various soil types.");
        notes.insert("coconut", "Requires hot, humid coastal climate. Grows in sandy to loamy soils with good drainage.");
        notes.insert("papaya", "Prefers warm, humid conditions with well-drained soil. Fast-growing in rich soils.");
        notes.insert("pomegranate", "Adaptable to dry, warm climates. Prefers well-drained soils with moderate fertility.");
        notes.insert("tomato", "Requires warm temperatures and moderate humidity. Grows best in rich, well-drained soils.");
        notes.insert("potato", "Prefers cool temperatures and moderate humidity. Needs well-drained, loose soils.");
        notes.insert("onion", "Adaptable to various climates but prefers moderate temperatures. Needs well-drained soils.");
        notes.insert("garlic", "Requires cool to moderate temperatures with low humidity. Prefers well-drained, fertile soils.");
        notes.insert("beans", "Adaptable to various climates. Prefers well-drained soils with moderate fertility.");
        notes
    };
}

/// Returns a short agronomic note for a crop, suffixed with the confidence
/// formatted as a one-decimal percentage.
///
/// Lookup is by lowercase crop name. Unknown crops get a generic note; this
/// function never fails.
///
/// # Example
/// ```
/// use cropsense::catalog::explain;
///
/// let text = explain("rice", 0.8765);
/// assert!(text.contains("water retention"));
/// assert!(text.ends_with("(Confidence: 87.7%)"));
/// ```
pub fn explain(crop: &str, confidence: f64) -> String {
    let note = CROP_NOTES.get(crop).copied().unwrap_or(GENERIC_NOTE);
    format!("{} (Confidence: {:.1}%)", note, confidence * 100.0)
}
