use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps { num: 30, den: 0 }.validate().is_err());
}

#[test]
fn frame_time_is_exact_for_integer_fps() {
    let fps = Fps::new(30, 1).unwrap();
    for i in [0u64, 1, 7, 29, 30, 599] {
        assert_eq!(fps.frame_time_secs(FrameIndex(i)), i as f64 / 30.0);
    }
}

#[test]
fn ntsc_frame_time_uses_rational_rate() {
    let fps = Fps::new(30_000, 1001).unwrap();
    let t = fps.frame_time_secs(FrameIndex(30_000));
    assert!((t - 1001.0).abs() < 1e-9);
}

#[test]
fn frames_for_twenty_seconds_at_thirty_is_six_hundred() {
    assert_eq!(Fps::default().frames_for_secs(20.0), 600);
    assert_eq!(Fps::new(24, 1).unwrap().frames_for_secs(0.5), 12);
}

#[test]
fn canvas_raster_dims_guard_bounds() {
    assert_eq!(Canvas::default().raster_dims().unwrap(), (1280, 720));
    assert!(
        Canvas {
            width: 0,
            height: 10
        }
        .raster_dims()
        .is_err()
    );
    assert!(
        Canvas {
            width: 70_000,
            height: 10
        }
        .raster_dims()
        .is_err()
    );
}
