use super::*;

#[test]
fn file_names_are_fixed_per_format() {
    assert_eq!(VideoFormat::Webm.file_name(), "swargayatra-ad.webm");
    assert_eq!(VideoFormat::Mp4.file_name(), "swargayatra-ad.mp4");
    assert_eq!(VideoFormat::Webm.mime(), "video/webm");
}

#[test]
fn clones_share_bytes() {
    let a = Artifact::new(1, "x.webm".to_owned(), VideoFormat::Webm, vec![1, 2, 3]);
    let b = a.clone();
    assert_eq!(a, b);
    assert_eq!(b.bytes(), &[1, 2, 3]);
    assert_eq!(b.generation(), 1);
    assert_eq!(b.len(), 3);
}

#[test]
fn save_in_writes_under_file_name() {
    let dir = PathBuf::from("target").join("artifact_unit");
    let _ = std::fs::remove_dir_all(&dir);
    let a = Artifact::new(2, "clip.webm".to_owned(), VideoFormat::Webm, vec![7; 10]);
    let path = a.save_in(&dir).unwrap();
    assert_eq!(path, dir.join("clip.webm"));
    assert_eq!(std::fs::read(&path).unwrap(), vec![7; 10]);
}

#[test]
fn save_in_rejects_path_like_names() {
    let a = Artifact::new(1, "../evil.webm".to_owned(), VideoFormat::Webm, vec![]);
    assert!(a.save_in(Path::new("target")).is_err());
}
