use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        canvas: Canvas {
            width: 2,
            height: 1,
        },
        fps: Fps::default(),
        total_frames: 2,
    }
}

fn frame(v: u8) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![v; 8],
    }
}

#[test]
fn finish_concatenates_frames_in_order() {
    let mut s = InMemorySink::new();
    s.begin(cfg()).unwrap();
    s.push_frame(FrameIndex(0), &frame(1)).unwrap();
    s.push_frame(FrameIndex(1), &frame(2)).unwrap();
    let media = s.finish().unwrap();
    assert_eq!(media.format, VideoFormat::RawRgba);
    assert_eq!(media.chunks, 2);
    assert_eq!(&media.bytes[..8], &[1u8; 8]);
    assert_eq!(&media.bytes[8..], &[2u8; 8]);
}

#[test]
fn rejects_out_of_order_and_mismatched_frames() {
    let mut s = InMemorySink::new();
    s.begin(cfg()).unwrap();
    s.push_frame(FrameIndex(1), &frame(1)).unwrap();
    assert!(s.push_frame(FrameIndex(1), &frame(1)).is_err());
    let wrong = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0; 4],
    };
    assert!(s.push_frame(FrameIndex(2), &wrong).is_err());
}

#[test]
fn push_before_begin_fails() {
    let mut s = InMemorySink::new();
    assert!(s.push_frame(FrameIndex(0), &frame(0)).is_err());
    assert!(s.finish().is_err());
}
