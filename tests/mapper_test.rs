use cropsense::{map_answers, FarmerAnswers, FeatureVector};

fn answers(
    soil: &str,
    fert: &str,
    temp: &str,
    humidity: &str,
    ph: &str,
    rainfall: &str,
) -> FarmerAnswers {
    FarmerAnswers {
        soil_type: soil.into(),
        fertilizer_use: fert.into(),
        temperature_feel: temp.into(),
        humidity_feel: humidity.into(),
        ph_feel: ph.into(),
        rainfall_season: rainfall.into(),
    }
}

#[test]
fn test_npk_is_base_plus_adjustment_for_every_combination() {
    let soils = [
        ("sandy", (15.0, 10.0, 20.0)),
        ("loamy", (25.0, 15.0, 25.0)),
        ("clay", (20.0, 12.0, 30.0)),
        ("red", (18.0, 8.0, 22.0)),
        ("black", (22.0, 18.0, 35.0)),
    ];
    let fertilizers = [
        ("none", (0.0, 0.0, 0.0)),
        ("low", (5.0, 3.0, 5.0)),
        ("medium", (10.0, 8.0, 10.0)),
        ("high", (15.0, 12.0, 15.0)),
    ];

    for (soil, base) in soils {
        for (fert, adj) in fertilizers {
            let features = map_answers(&answers(soil, fert, "warm", "moderate", "neutral", "medium"));
            assert_eq!(features.n, base.0 + adj.0, "N for {}/{}", soil, fert);
            assert_eq!(features.p, base.1 + adj.1, "P for {}/{}", soil, fert);
            assert_eq!(features.k, base.2 + adj.2, "K for {}/{}", soil, fert);
        }
    }
}

#[test]
fn test_documented_example_loamy_medium() {
    let features = map_answers(&answers("loamy", "medium", "warm", "moderate", "neutral", "medium"));
    assert_eq!(features.n, 35.0);
    assert_eq!(features.p, 23.0);
    assert_eq!(features.k, 35.0);
}

#[test]
fn test_unknown_soil_and_fertilizer_fall_back_to_defaults() {
    let features = map_answers(&answers("peaty", "tonnes", "warm", "moderate", "neutral", "medium"));
    assert_eq!(features.n, 20.0);
    assert_eq!(features.p, 12.0);
    assert_eq!(features.k, 25.0);
}

#[test]
fn test_all_unrecognized_answers_still_yield_a_full_vector() {
    let features = map_answers(&answers("???", "", "tropical", "sticky", "sour", "monsoon"));
    assert_eq!(
        features,
        FeatureVector {
            n: 20.0,
            p: 12.0,
            k: 25.0,
            temperature: 25.0,
            humidity: 65.0,
            ph: 7.0,
            rainfall: 1000.0,
        }
    );
    assert_eq!(features.to_array().len(), FeatureVector::LEN);
}

#[test]
fn test_categorical_lookups_are_exact_not_interpolated() {
    let hot = map_answers(&answers("loamy", "none", "hot", "dry", "acidic", "very_high"));
    assert_eq!(hot.temperature, 32.0);
    assert_eq!(hot.humidity, 40.0);
    assert_eq!(hot.ph, 5.5);
    assert_eq!(hot.rainfall, 2000.0);

    let cool = map_answers(&answers("loamy", "none", "cool", "humid", "alkaline", "low"));
    assert_eq!(cool.temperature, 18.0);
    assert_eq!(cool.humidity, 85.0);
    assert_eq!(cool.ph, 8.5);
    assert_eq!(cool.rainfall, 500.0);
}

#[test]
fn test_case_sensitive_on_pre_lowercased_input() {
    // The collector lowercases before mapping; the mapper itself treats
    // anything non-lowercase as unrecognized.
    let features = map_answers(&answers("Loamy", "Medium", "warm", "moderate", "neutral", "medium"));
    assert_eq!((features.n, features.p, features.k), (20.0, 12.0, 25.0));
}
