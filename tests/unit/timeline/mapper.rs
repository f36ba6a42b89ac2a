use super::*;

#[test]
fn map_frame_endpoints() {
    for n in [1u32, 2, 80, 120] {
        assert_eq!(map_frame(0.0, n), FrameIndex(0));
        assert_eq!(map_frame(1.0, n), FrameIndex(n - 1));
    }
}

#[test]
fn map_frame_is_bounded_and_monotonic() {
    for n in [1u32, 3, 80] {
        let mut prev = FrameIndex(0);
        for step in 0..=1000 {
            let p = f64::from(step) / 1000.0;
            let idx = map_frame(p, n);
            assert!(idx.0 < n);
            assert!(idx >= prev, "not monotonic at p={p} n={n}");
            prev = idx;
        }
    }
}

#[test]
fn map_frame_clamps_overscroll_and_degenerate_inputs() {
    assert_eq!(map_frame(-0.3, 80), FrameIndex(0));
    assert_eq!(map_frame(1.7, 80), FrameIndex(79));
    assert_eq!(map_frame(f64::INFINITY, 80), FrameIndex(79));
    assert_eq!(map_frame(f64::NAN, 80), FrameIndex(0));
    assert_eq!(map_frame(0.5, 0), FrameIndex(0));
}

#[test]
fn map_frame_rounds_to_nearest() {
    // 0.5 * 79 = 39.5 rounds up.
    assert_eq!(map_frame(0.5, 80), FrameIndex(40));
    assert_eq!(map_frame(0.1, 80), FrameIndex(8));
}

#[test]
fn sweep_of_80_steps_visits_every_frame_once() {
    let n = 80u32;
    let visited: Vec<u32> = (0..n)
        .map(|k| map_frame(f64::from(k) / f64::from(n - 1), n).0)
        .collect();
    assert_eq!(visited, (0..n).collect::<Vec<_>>());
}

#[test]
fn track_interpolates_and_clamps_to_endpoints() {
    let track = OpacityTrack::new(vec![0.25, 0.3, 0.5, 0.55], vec![0.0, 1.0, 1.0, 0.0]).unwrap();
    assert_eq!(track.sample(0.0), 0.0);
    assert!((track.sample(0.275) - 0.5).abs() < 1e-9);
    assert_eq!(track.sample(0.4), 1.0);
    assert!((track.sample(0.525) - 0.5).abs() < 1e-9);
    assert_eq!(track.sample(0.9), 0.0);
    assert_eq!(track.sample(f64::NAN), 0.0);
}

#[test]
fn equal_breakpoints_form_an_instant_step() {
    let track = OpacityTrack::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0, 0.0, 1.0, 1.0]).unwrap();
    assert_eq!(track.sample(0.4999), 0.0);
    assert_eq!(track.sample(0.5), 1.0);
    assert_eq!(track.sample(0.75), 1.0);
}

#[test]
fn single_point_track_is_constant() {
    let track = OpacityTrack::new(vec![0.3], vec![0.6]).unwrap();
    assert_eq!(track.sample(0.0), 0.6);
    assert_eq!(track.sample(1.0), 0.6);
}

#[test]
fn track_validation() {
    assert!(OpacityTrack::new(vec![], vec![]).is_err());
    assert!(OpacityTrack::new(vec![0.0, 1.0], vec![1.0]).is_err());
    assert!(OpacityTrack::new(vec![0.5, 0.2], vec![1.0, 0.0]).is_err());
    assert!(OpacityTrack::new(vec![0.0, 1.0], vec![1.0, 1.5]).is_err());
    assert!(OpacityTrack::new(vec![0.0, f64::NAN], vec![1.0, 1.0]).is_err());
}

#[test]
fn showcase_opacities_stay_in_range_and_continuous() {
    let table = CheckpointTable::showcase();
    table.validate().unwrap();

    let steps = 10_000;
    let mut prev = table.map_opacities(0.0);
    for step in 1..=steps {
        let p = f64::from(step) / f64::from(steps);
        let cur = table.map_opacities(p);
        for ((name, a), (_, b)) in prev.iter().zip(cur.iter()) {
            assert!((0.0..=1.0).contains(&b), "{name} out of range at {p}");
            // Steepest showcase ramp is 1.0 over 0.05 progress.
            assert!((a - b).abs() <= 20.0 / f64::from(steps) + 1e-9, "{name} jumps at {p}");
        }
        prev = cur;
    }
}

#[test]
fn showcase_shows_at_most_one_caption_fully() {
    let table = CheckpointTable::showcase();
    for step in 0..=1000 {
        let p = f64::from(step) / 1000.0;
        assert!(table.map_opacities(p).fully_visible().len() <= 1, "overlap at {p}");
    }
    assert_eq!(table.map_opacities(0.0).fully_visible(), vec!["title"]);
    assert_eq!(table.map_opacities(0.4).fully_visible(), vec!["precision"]);
    assert_eq!(table.map_opacities(0.7).fully_visible(), vec!["titanium"]);
    assert_eq!(table.map_opacities(1.0).fully_visible(), vec!["cta"]);
}

#[test]
fn opacities_lookup_and_display() {
    let ops = CheckpointTable::showcase().map_opacities(0.225);
    assert!((ops.get("title").unwrap() - 0.5).abs() < 1e-9);
    assert_eq!(ops.get("precision"), Some(0.0));
    assert_eq!(ops.get("missing"), None);
    assert!(ops.to_string().starts_with("title=0.500 precision=0.000"));
}

#[test]
fn table_rejects_duplicate_names_and_parses_json() {
    let mut table = CheckpointTable::showcase();
    table.layers[1].name = "title".to_string();
    assert!(table.validate().is_err());

    let json = r#"[{"name":"only","breakpoints":[0.0,1.0],"opacities":[0.0,1.0]}]"#;
    let parsed: CheckpointTable = serde_json::from_str(json).unwrap();
    parsed.validate().unwrap();
    assert_eq!(parsed.layers.len(), 1);
    assert!((parsed.map_opacities(0.25).get("only").unwrap() - 0.25).abs() < 1e-9);
}
