use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_object_and_array_forms() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<Color>(json!([1.0, 2.0])).is_err());
}

#[test]
fn hsl_primary_hues() {
    let red = Color::hsl(0.0, 1.0, 0.5);
    assert!((red.r - 1.0).abs() < 1e-9 && red.g.abs() < 1e-9 && red.b.abs() < 1e-9);

    let blue = Color::hsl(240.0, 1.0, 0.5);
    assert!((blue.b - 1.0).abs() < 1e-9 && blue.r.abs() < 1e-9);

    // Negative hues wrap like CSS.
    assert_eq!(Color::hsl(-120.0, 1.0, 0.5), Color::hsl(240.0, 1.0, 0.5));
}

#[test]
fn serializes_as_hex_and_round_trips() {
    let v = serde_json::to_value(Color::WHITE).unwrap();
    assert_eq!(v, json!("#ffffffff"));
    let back: Color = serde_json::from_value(v).unwrap();
    assert_eq!(back, Color::WHITE);
}

#[test]
fn non_ascii_hex_is_rejected_not_panicking() {
    assert!(serde_json::from_value::<Color>(json!("#ffé000")).is_err());
}
