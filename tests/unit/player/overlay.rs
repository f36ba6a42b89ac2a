use super::*;

#[test]
fn loading_shows_overlay_only() {
    let o = OverlayFade::default().sample(None);
    assert_eq!(o.overlay, 1.0);
    assert_eq!(o.content, 0.0);
    assert!(o.blocks_input());
}

#[test]
fn fades_run_on_their_own_schedules() {
    let fade = OverlayFade::default();

    let start = fade.sample(Some(0.0));
    assert_eq!(start.overlay, 1.0);
    assert_eq!(start.content, 0.0);

    let mid = fade.sample(Some(0.4));
    assert!((mid.overlay - 0.5).abs() < 1e-9);
    assert_eq!(mid.content, 0.0);

    let later = fade.sample(Some(1.0));
    assert_eq!(later.overlay, 0.0);
    assert!(!later.blocks_input());
    assert!(later.content > 0.0 && later.content < 1.0);

    let done = fade.sample(Some(fade.settled_after()));
    assert_eq!(done.overlay, 0.0);
    assert_eq!(done.content, 1.0);
    assert_eq!(fade.settled_after(), 1.5);
}

#[test]
fn zero_durations_snap() {
    let fade = OverlayFade {
        overlay_secs: 0.0,
        content_delay_secs: 0.0,
        content_secs: 0.0,
        ..OverlayFade::default()
    };
    let o = fade.sample(Some(0.0));
    assert_eq!(o.overlay, 0.0);
    assert_eq!(o.content, 1.0);
}
