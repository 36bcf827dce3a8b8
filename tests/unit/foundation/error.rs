use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AdError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AdError::surface("x")
            .to_string()
            .contains("surface unavailable:")
    );
    assert!(
        AdError::capture("x")
            .to_string()
            .contains("capture unavailable:")
    );
    assert!(AdError::encode("x").to_string().contains("encode error:"));
    assert!(
        AdError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AdError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: AdError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, AdError::Serde(_)));
}
