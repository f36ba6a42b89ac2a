use super::*;

#[test]
fn four_viewport_region_spans_three_viewports_of_scroll() {
    let region = ScrollRegion::from_viewports(0.0, 4.0, 900.0);
    assert_eq!(region.height, 3600.0);
    assert_eq!(region.scroll_distance(900.0), 2700.0);
    assert_eq!(region.progress(0.0, 900.0), 0.0);
    assert_eq!(region.progress(1350.0, 900.0), 0.5);
    assert_eq!(region.progress(2700.0, 900.0), 1.0);
}

#[test]
fn overscroll_is_passed_through() {
    let region = ScrollRegion::new(100.0, 1100.0);
    assert!(region.progress(50.0, 100.0) < 0.0);
    assert!(region.progress(1200.0, 100.0) > 1.0);
}

#[test]
fn region_shorter_than_viewport_is_a_step() {
    let region = ScrollRegion::new(200.0, 500.0);
    assert_eq!(region.progress(199.0, 800.0), 0.0);
    assert_eq!(region.progress(200.0, 800.0), 1.0);
}
