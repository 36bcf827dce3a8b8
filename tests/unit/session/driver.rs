use super::*;

#[test]
fn frame_index_linear_covers_duration_exactly() {
    let mut src = FrameIndexLinear::covering(20.0, Fps::default()).unwrap();
    assert_eq!(src.total_frames, 600);
    assert_eq!(src.time_at(FrameIndex(0)), Some(0.0));
    assert_eq!(src.time_at(FrameIndex(599)), Some(599.0 / 30.0));
    assert_eq!(src.time_at(FrameIndex(600)), None);
}

#[test]
fn unthrottled_run_visits_every_tick_in_order() {
    let mut src = FrameIndexLinear {
        fps: Fps::default(),
        total_frames: 90,
    };
    let mut seen = Vec::new();
    let stats = FrameDriver::new(Pacing::Unthrottled)
        .run(&mut src, |tick| {
            seen.push(tick);
            Ok(())
        })
        .unwrap();
    assert_eq!(stats.frames, 90);
    assert!(!stats.cancelled);
    for (i, tick) in seen.iter().enumerate() {
        assert_eq!(tick.index, FrameIndex(i as u64));
        assert_eq!(tick.t, i as f64 / 30.0);
    }
}

#[test]
fn frame_interval_pacing_waits_between_frames() {
    let mut src = FrameIndexLinear {
        fps: Fps::new(200, 1).unwrap(),
        total_frames: 5,
    };
    let start = Instant::now();
    let stats = FrameDriver::new(Pacing::FrameInterval)
        .run(&mut src, |_| Ok(()))
        .unwrap();
    assert_eq!(stats.frames, 5);
    // Frame 4 is not started before 4 * 5ms.
    assert!(start.elapsed() >= Duration::from_millis(20));
}

#[test]
fn callback_error_stops_the_loop() {
    let mut src = FrameIndexLinear {
        fps: Fps::default(),
        total_frames: 10,
    };
    let mut calls = 0;
    let err = FrameDriver::new(Pacing::Unthrottled)
        .run(&mut src, |tick| {
            calls += 1;
            if tick.index == FrameIndex(3) {
                return Err(AdError::encode("boom"));
            }
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, AdError::Encode(_)));
    assert_eq!(calls, 4);
}

#[test]
fn cancel_token_stops_unbounded_source() {
    let mut src = WallClockModulo::starting_now(20.0, Fps::default()).unwrap();
    let token = CancelToken::new();
    let inner = token.clone();
    let stats = FrameDriver::new(Pacing::Unthrottled)
        .with_cancel(token)
        .run(&mut src, |tick| {
            assert!((0.0..20.0).contains(&tick.t));
            if tick.index == FrameIndex(9) {
                inner.cancel();
            }
            Ok(())
        })
        .unwrap();
    assert_eq!(stats.frames, 10);
    assert!(stats.cancelled);
}

#[test]
fn wall_clock_wraps_at_duration() {
    let src = WallClockModulo::starting_now(20.0, Fps::default()).unwrap();
    assert_eq!(src.time_for_elapsed(Duration::from_secs(0)), 0.0);
    assert_eq!(src.time_for_elapsed(Duration::from_secs(20)), 0.0);
    assert_eq!(src.time_for_elapsed(Duration::from_millis(21_500)), 1.5);
}

#[test]
fn invalid_sources_are_rejected() {
    assert!(WallClockModulo::starting_now(0.0, Fps::default()).is_err());
    assert!(FrameIndexLinear::covering(f64::NAN, Fps::default()).is_err());
    let mut bad = FrameIndexLinear {
        fps: Fps { num: 0, den: 1 },
        total_frames: 1,
    };
    assert!(
        FrameDriver::new(Pacing::Unthrottled)
            .run(&mut bad, |_| Ok(()))
            .is_err()
    );
}

#[test]
fn pacing_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_string(&Pacing::FrameInterval).unwrap(),
        "\"frame-interval\""
    );
    let p: Pacing = serde_json::from_str("\"unthrottled\"").unwrap();
    assert_eq!(p, Pacing::Unthrottled);
}
