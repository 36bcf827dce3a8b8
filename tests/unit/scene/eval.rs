use super::*;

fn plan(t: f64) -> FramePlan {
    evaluate(&Timeline::default(), Canvas::default(), t).unwrap()
}

#[test]
fn congruent_times_give_identical_plans() {
    for t in [0.0, 1.25, 3.0, 9.75, 16.5, 19.0] {
        assert_eq!(plan(t), plan(t + 20.0));
        assert_eq!(plan(t), plan(t + 60.0));
    }
    assert_eq!(plan(0.0), plan(20.0));
}

#[test]
fn intro_title_eases_in_over_two_seconds() {
    let p = plan(0.0);
    assert_eq!(p.scene, 0);
    assert_eq!(p.captions[0].text, "SWARGAYATRA");
    assert_eq!(p.captions[0].alpha, 0.0);
    assert_eq!(plan(1.0).captions[0].alpha, 0.5);
    assert_eq!(plan(2.0).captions[0].alpha, 1.0);
    assert!((p.captions[0].center_y - 720.0 * 0.38).abs() < 1e-9);
}

#[test]
fn delayed_sub_lines_stay_hidden_until_their_delay() {
    let p = plan(0.4);
    assert_eq!(p.captions[1].alpha, 0.0);
    assert_eq!(p.captions[2].alpha, 0.0);
    let p = plan(1.5);
    assert!((p.captions[1].alpha - 0.5).abs() < 1e-12);
    assert!((p.captions[2].alpha - 0.2).abs() < 1e-12);
}

#[test]
fn bullets_reveal_in_order_and_stack_by_line_height() {
    let p = plan(3.0 + 0.5);
    assert_eq!(p.scene, 1);
    let items: Vec<_> = p.captions[1..].iter().collect();
    assert_eq!(items.len(), 4);
    assert!(items[0].alpha > items[1].alpha);
    assert_eq!(items[2].alpha, 0.0);
    assert!((items[1].center_y - items[0].center_y - 44.0).abs() < 1e-9);
    assert!(items[0].text.starts_with('\u{2022}'));
    assert_eq!(items[3].key, CaptionKey { scene: 1, slot: 4 });
}

#[test]
fn opacity_is_monotonic_within_each_window_reveal_phase() {
    let tl = Timeline::default();
    for (si, scene) in tl.scenes.iter().enumerate() {
        if si == 4 {
            continue; // outro fades out
        }
        let steps = ((scene.end - scene.start) * 100.0) as usize;
        let mut prev: Option<Vec<f64>> = None;
        for k in 0..steps {
            let t = scene.start + k as f64 * 0.01;
            let p = evaluate(&tl, Canvas::default(), t).unwrap();
            assert_eq!(p.scene, si);
            let alphas: Vec<f64> = p.captions.iter().map(|c| c.alpha).collect();
            if let Some(prev) = &prev {
                for (a, b) in prev.iter().zip(&alphas) {
                    assert!(b >= a, "scene {si} t={t}");
                }
            }
            prev = Some(alphas);
        }
    }
}

#[test]
fn everything_is_fully_visible_once_elapsed() {
    let p = plan(6.99);
    assert!(p.captions.iter().all(|c| c.alpha == 1.0));
    let p = plan(16.99);
    assert!(p.captions.iter().all(|c| c.alpha == 1.0));
}

#[test]
fn outro_dims_to_eighty_percent() {
    assert_eq!(plan(17.0).captions[0].alpha, 1.0);
    assert_eq!(plan(19.0).captions[0].alpha, 1.0);
    assert!((plan(19.5).captions[0].alpha - 0.9).abs() < 1e-9);
    assert!(plan(19.999).captions[1].alpha >= 0.8);
}

#[test]
fn visible_skips_transparent_captions() {
    let p = plan(3.0);
    assert_eq!(p.visible().count(), 0);
    assert_eq!(plan(5.0).visible().count(), 5);
}
