#![cfg(feature = "serde")]

use circulinear::offset::{BufferCalculator, BufferOptions};

#[test]
fn buffer_options_from_json() {
    let options: BufferOptions = serde_json::from_str(r#"{ "posEqualEps": 0.001 }"#).unwrap();
    assert_eq!(options.pos_equal_eps, 0.001);

    // missing fields fall back to the defaults
    let options: BufferOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, BufferOptions::new());
}

#[test]
fn buffer_options_round_trip_through_calculator() {
    let json = serde_json::to_string(BufferCalculator::<f64>::DEFAULT.options()).unwrap();
    assert!(json.contains("posEqualEps"));
    let options: BufferOptions = serde_json::from_str(&json).unwrap();
    let calculator = BufferCalculator::<f64>::DEFAULT.with_options(options);
    assert_eq!(calculator, BufferCalculator::<f64>::DEFAULT);
}
