use super::*;

fn book(weights: &[u16]) -> FontBook {
    FontBook {
        faces: weights
            .iter()
            .enumerate()
            .map(|(id, &weight)| FontFace {
                id,
                weight,
                index: 0,
                bytes: Arc::new(vec![0u8; 4]),
            })
            .collect(),
    }
}

#[test]
fn face_for_picks_closest_weight() {
    let b = book(&[400, 700]);
    assert_eq!(b.face_for(300).weight(), 400);
    assert_eq!(b.face_for(600).weight(), 700);
    assert_eq!(b.face_for(900).weight(), 700);
}

#[test]
fn face_for_breaks_ties_towards_heavier() {
    let b = book(&[500, 700]);
    assert_eq!(b.face_for(600).weight(), 700);
}

#[test]
fn single_face_serves_every_weight() {
    let b = FontBook::from_bytes(vec![1, 2, 3]).unwrap();
    assert_eq!(b.len(), 1);
    assert_eq!(b.face_for(900).bytes(), &[1, 2, 3]);
}

#[test]
fn empty_or_missing_font_is_surface_unavailable() {
    assert!(matches!(
        FontBook::from_bytes(Vec::new()),
        Err(AdError::SurfaceUnavailable(_))
    ));
    assert!(matches!(
        FontBook::from_file(Path::new("target/definitely/missing.ttf")),
        Err(AdError::SurfaceUnavailable(_))
    ));
}

#[test]
fn system_layout_has_positive_extent_when_fonts_exist() {
    let Ok(fonts) = FontBook::system() else {
        eprintln!("skipping: no system fonts");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let layout = engine
        .layout_line(
            "SWARGAYATRA",
            fonts.face_for(800),
            LineStyle {
                size_px: 84.0,
                weight: 800,
                letter_spacing: 1.5,
                brush: TextBrush::default(),
            },
        )
        .unwrap();
    assert!(layout.width() > 0.0);
    assert!(layout.height() > 0.0);
}
