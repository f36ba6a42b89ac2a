use super::*;

#[test]
fn default_naming_matches_exported_sequence() {
    let naming = FrameNaming::default();
    assert_eq!(
        naming.source(FrameIndex(0)),
        "/iphone17blackvid_000/iphone17blackvid_000.jpg"
    );
    assert_eq!(
        naming.source(FrameIndex(79)),
        "/iphone17blackvid_000/iphone17blackvid_079.jpg"
    );
}

#[test]
fn sources_are_ordered_and_trailing_slash_is_ignored() {
    let naming = FrameNaming::new("frames/", "shot", "webp");
    let sources = naming.sources(3);
    assert_eq!(
        sources,
        vec![
            "frames/shot_000.webp".to_string(),
            "frames/shot_001.webp".to_string(),
            "frames/shot_002.webp".to_string(),
        ]
    );
    assert!(naming.sources(0).is_empty());
}

#[test]
fn validate_rejects_bad_parts() {
    assert!(FrameNaming::default().validate().is_ok());
    assert!(FrameNaming::new("/a", "", "jpg").validate().is_err());
    assert!(FrameNaming::new("/a", "x", "").validate().is_err());
    assert!(FrameNaming::new("/a", "x", ".jpg").validate().is_err());
    assert!(FrameNaming::new("/a", "x/y", "jpg").validate().is_err());
}
