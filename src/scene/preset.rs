use crate::animation::ease::Ease;
use crate::animation::reveal::{FadeOut, Reveal};
use crate::foundation::color::Color;
use crate::scene::model::{Background, BulletList, Caption, Scene, Timeline};

/// Brand name shown on the intro, outro and landing page.
pub const BRAND: &str = "SWARGAYATRA";
/// Contact line shared by the ad and the landing page.
pub const PHONE_DISPLAY: &str = "+91 99999 99999";
/// Dialable form of [`PHONE_DISPLAY`].
pub const PHONE_TEL: &str = "+919999999999";

fn caption(text: &str, size_px: f32, y: f64, weight: u16, reveal: Reveal) -> Caption {
    Caption {
        text: text.to_owned(),
        size_px,
        y,
        weight,
        letter_spacing: 0.0,
        color: Color::WHITE,
        reveal,
        fade_out: None,
    }
}

fn bullets(items: &[&str], y_start: f64) -> BulletList {
    BulletList {
        items: items.iter().map(|s| (*s).to_owned()).collect(),
        y_start,
        line_height_px: 44.0,
        size_px: 28.0,
        weight: 500,
        stagger: 0.4,
        ramp: 0.6,
        ease: Ease::InOutQuad,
        marker: "\u{2022}".to_owned(),
        color: Color::WHITE,
    }
}

fn title(text: &str, size_px: f32, y: f64) -> Caption {
    caption(text, size_px, y, 800, Reveal::ramp(0.0, 0.8, Ease::InOutQuad))
}

/// The 20 second SwargaYatra ad: intro, services, value props, contact, outro.
pub fn swargayatra_timeline() -> Timeline {
    let outro_fade = FadeOut {
        start: 2.0,
        duration: 1.0,
        floor: 0.8,
    };

    let intro = Scene {
        name: "intro".to_owned(),
        start: 0.0,
        end: 3.0,
        captions: vec![
            Caption {
                letter_spacing: 1.5,
                ..caption(BRAND, 84.0, 0.38, 800, Reveal::ramp(0.0, 2.0, Ease::InOutQuad))
            },
            caption(
                "Dignified Farewells in Bangalore",
                34.0,
                0.50,
                700,
                Reveal::ramp(0.5, 2.0, Ease::Linear),
            ),
            caption(
                "24/7 Compassionate Support",
                28.0,
                0.58,
                600,
                Reveal::ramp(1.1, 2.0, Ease::Linear),
            ),
        ],
        bullets: None,
    };

    let services = Scene {
        name: "services".to_owned(),
        start: 3.0,
        end: 7.0,
        captions: vec![title("Complete Funeral Care", 52.0, 0.28)],
        bullets: Some(bullets(
            &[
                "Hearse van & mortuary coordination",
                "Priests, rituals, and materials",
                "Documentation & permits assistance",
                "Electric & traditional cremation",
            ],
            0.42,
        )),
    };

    let value_props = Scene {
        name: "value_props".to_owned(),
        start: 7.0,
        end: 12.0,
        captions: vec![title("Why Families Trust Us", 48.0, 0.30)],
        bullets: Some(bullets(
            &[
                "Pan-Bangalore rapid response",
                "Transparent, fair pricing",
                "Dedicated coordinator end-to-end",
                "Culturally sensitive care",
            ],
            0.44,
        )),
    };

    let contact = Scene {
        name: "contact".to_owned(),
        start: 12.0,
        end: 17.0,
        captions: vec![
            title("We\u{2019}re Here, 24/7", 56.0, 0.34),
            caption(
                &format!("Call {PHONE_DISPLAY}"),
                46.0,
                0.48,
                700,
                Reveal::ramp(0.4, 1.0, Ease::Linear),
            ),
            caption(
                "swargayatra.in",
                36.0,
                0.58,
                600,
                Reveal::ramp(0.9, 1.0, Ease::Linear),
            ),
        ],
        bullets: None,
    };

    let outro = Scene {
        name: "outro".to_owned(),
        start: 17.0,
        end: 20.0,
        captions: vec![
            Caption {
                letter_spacing: 1.8,
                fade_out: Some(outro_fade),
                ..caption(BRAND, 86.0, 0.42, 900, Reveal::instant())
            },
            Caption {
                fade_out: Some(outro_fade),
                ..caption(
                    "Bangalore \u{2022} Serving with compassion",
                    32.0,
                    0.54,
                    600,
                    Reveal::instant(),
                )
            },
        ],
        bullets: None,
    };

    Timeline {
        background: Background::default(),
        scenes: vec![intro, services, value_props, contact, outro],
    }
}

impl Default for Timeline {
    fn default() -> Self {
        swargayatra_timeline()
    }
}
