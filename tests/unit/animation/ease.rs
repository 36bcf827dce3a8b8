use super::*;

const ALL: [Ease; 5] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_fixed() {
    for e in ALL {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert_eq!(e.apply(1.0), 1.0, "{e:?}");
    }
}

#[test]
fn input_is_clamped() {
    for e in ALL {
        assert_eq!(e.apply(-2.0), 0.0);
        assert_eq!(e.apply(7.0), 1.0);
        assert_eq!(e.apply(f64::NAN), 0.0);
    }
}

#[test]
fn in_out_quad_is_symmetric_around_half() {
    assert_eq!(Ease::InOutQuad.apply(0.5), 0.5);
    assert!((Ease::InOutQuad.apply(0.25) - 0.125).abs() < 1e-12);
    assert!((Ease::InOutQuad.apply(0.75) - 0.875).abs() < 1e-12);
}

#[test]
fn every_curve_is_monotonic() {
    for e in ALL {
        let mut prev = 0.0;
        for i in 0..=200 {
            let v = e.apply(i as f64 / 200.0);
            assert!(v >= prev, "{e:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn serde_names_are_snake_case() {
    let v = serde_json::to_value(Ease::InOutQuad).unwrap();
    assert_eq!(v, serde_json::json!("in_out_quad"));
}
