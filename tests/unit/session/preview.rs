use super::*;
use crate::foundation::core::Canvas;

struct Flat {
    times: Vec<f64>,
}

impl FrameSource for Flat {
    fn canvas(&self) -> Canvas {
        Canvas {
            width: 4,
            height: 2,
        }
    }

    fn render_frame(&mut self, t: f64) -> AdResult<FrameRGBA> {
        self.times.push(t);
        Ok(FrameRGBA {
            width: 4,
            height: 2,
            data: [10u8, 20, 30, 255].repeat(8),
        })
    }
}

fn opts(name: &str) -> PreviewOpts {
    PreviewOpts {
        fps: Fps::new(100, 1).unwrap(),
        duration: 20.0,
        run_for: Some(Duration::from_millis(50)),
        out: PathBuf::from("target").join("preview_unit").join(name),
        write_every: 2,
    }
}

#[test]
fn preview_stops_after_run_for_and_writes_latest_png() {
    let o = opts("timed.png");
    let _ = std::fs::remove_file(&o.out);
    let mut src = Flat { times: Vec::new() };
    let stats = run_preview(&mut src, &o, CancelToken::new()).unwrap();

    assert!(stats.cancelled);
    assert!(stats.frames >= 1);
    assert_eq!(stats.frames as usize, src.times.len());
    assert!(src.times.iter().all(|t| (0.0..20.0).contains(t)));
    assert!(src.times.windows(2).all(|w| w[0] <= w[1]));

    let img = image::open(&o.out).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 2));
    assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 255]);
}

#[test]
fn cancelled_token_renders_nothing() {
    let mut o = opts("cancelled.png");
    o.run_for = None;
    let token = CancelToken::new();
    token.cancel();
    let mut src = Flat { times: Vec::new() };
    let stats = run_preview(&mut src, &o, token).unwrap();
    assert_eq!(stats.frames, 0);
    assert!(src.times.is_empty());
}
