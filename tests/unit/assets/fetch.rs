use super::*;

#[test]
fn normalize_strips_origin_slash_and_query() {
    assert_eq!(
        normalize_source_path("/frames/shot_000.jpg").unwrap(),
        "frames/shot_000.jpg"
    );
    assert_eq!(
        normalize_source_path("./frames//shot_001.jpg?v=2").unwrap(),
        "frames/shot_001.jpg"
    );
    assert_eq!(
        normalize_source_path("frames\\shot_002.jpg#x").unwrap(),
        "frames/shot_002.jpg"
    );
}

#[test]
fn normalize_rejects_escapes_and_empty() {
    assert!(normalize_source_path("").is_err());
    assert!(normalize_source_path("/").is_err());
    assert!(normalize_source_path("/frames/../secret.jpg").is_err());
    assert!(normalize_source_path("https://cdn.example/x.jpg").is_err());
}

#[test]
fn dir_fetcher_resolves_under_root() {
    let fetcher = DirFetcher::new("/srv/public");
    assert_eq!(
        fetcher.resolve("/seq/a_000.png").unwrap(),
        PathBuf::from("/srv/public/seq/a_000.png")
    );
}

#[test]
fn closures_are_fetchers() {
    let fetcher = |source: &str| -> ScrollreelResult<Vec<u8>> { Ok(source.as_bytes().to_vec()) };
    assert_eq!(fetcher.fetch("abc").unwrap(), b"abc".to_vec());
}

#[test]
fn dir_fetcher_missing_file_is_error() {
    let fetcher = DirFetcher::new(std::env::temp_dir().join("scrollreel_no_such_root"));
    let err = fetcher.fetch("/seq/a_000.png").unwrap_err();
    assert!(err.to_string().contains("read frame"));
}
