use super::*;

#[test]
fn invisible_before_delay() {
    let r = Reveal::ramp(0.4, 0.6, Ease::InOutQuad);
    assert_eq!(r.opacity(0.0), 0.0);
    assert_eq!(r.opacity(0.39), 0.0);
    assert_eq!(r.opacity(0.4), 0.0);
}

#[test]
fn exactly_one_once_elapsed() {
    let r = Reveal::ramp(0.4, 0.6, Ease::InOutQuad);
    assert_eq!(r.opacity(1.0), 1.0);
    assert_eq!(r.opacity(1.7), 1.0);
    assert_eq!(r.opacity(1000.0), 1.0);
}

#[test]
fn monotonic_through_the_ramp() {
    for ease in [Ease::Linear, Ease::InOutQuad] {
        let r = Reveal::ramp(0.5, 2.0, ease);
        let mut prev = 0.0;
        for i in 0..=300 {
            let v = r.opacity(i as f64 * 0.01);
            assert!(v >= prev);
            prev = v;
        }
    }
}

#[test]
fn zero_duration_is_a_step_at_delay() {
    let r = Reveal::ramp(1.0, 0.0, Ease::InOutQuad);
    assert_eq!(r.opacity(0.999), 0.0);
    assert_eq!(r.opacity(1.0), 1.0);
    assert_eq!(Reveal::instant().opacity(0.0), 1.0);
}

#[test]
fn fade_out_reaches_floor_and_holds() {
    let f = FadeOut {
        start: 2.0,
        duration: 1.0,
        floor: 0.8,
    };
    assert_eq!(f.factor(0.0), 1.0);
    assert_eq!(f.factor(2.0), 1.0);
    assert!((f.factor(2.5) - 0.9).abs() < 1e-12);
    assert!((f.factor(3.0) - 0.8).abs() < 1e-12);
    assert!((f.factor(9.0) - 0.8).abs() < 1e-12);
}

#[test]
fn caption_alpha_multiplies_reveal_and_fade() {
    let r = Reveal::instant();
    let f = FadeOut {
        start: 2.0,
        duration: 1.0,
        floor: 0.8,
    };
    assert_eq!(caption_alpha(&r, None, 2.9), 1.0);
    assert!((caption_alpha(&r, Some(&f), 3.0) - 0.8).abs() < 1e-12);
}

#[test]
fn validation_rejects_negative_and_non_finite() {
    assert!(Reveal::ramp(-1.0, 1.0, Ease::Linear).validate("x").is_err());
    assert!(
        Reveal::ramp(0.0, f64::INFINITY, Ease::Linear)
            .validate("x")
            .is_err()
    );
    assert!(
        FadeOut {
            start: 0.0,
            duration: 1.0,
            floor: 1.5
        }
        .validate("x")
        .is_err()
    );
}
