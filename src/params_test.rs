use super::*;

#[test]
fn defaults_match_initial_state() {
    let params = RenderParameters::default();
    assert_eq!(params.sides, 5);
    assert_eq!(params.repetitions, 1);
    assert!(params.rotation.abs() < f64::EPSILON);
    assert!((params.size - 100.0).abs() < f64::EPSILON);
    assert_eq!(params.color, "#6366f1");
    assert_eq!(params.background_color, "#ffffff");
}

#[test]
fn serializes_with_snake_case_fields() {
    let value = serde_json::to_value(RenderParameters::default()).unwrap();
    assert_eq!(value["background_color"], "#ffffff");
    assert_eq!(value["sides"], 5);
    assert!(value.get("backgroundColor").is_none());
}
