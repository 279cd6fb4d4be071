//! Cut list invariants across both grammars and the chapter adapter.

use trackforged_parser::{
    chapters_to_cuts, parse_splits, parse_timecode, Chapter, Cut, Error, SourceMetadata,
};

fn assert_well_formed(cuts: &[Cut]) {
    for cut in cuts {
        assert!(cut.end() > cut.start(), "empty window: {cut}");
        assert!(cut.start() >= 0.0, "negative start: {cut}");
        assert!(!cut.label().is_empty(), "unlabeled cut: {cut}");
    }
}

#[test]
fn test_timecode_examples() {
    assert_eq!(parse_timecode("1:02:03").unwrap(), 3723.0);
    assert_eq!(parse_timecode("2:30").unwrap(), 150.0);
    assert_eq!(parse_timecode("5").unwrap(), 300.0);
    assert!(matches!(
        parse_timecode(""),
        Err(Error::InvalidTimecode { .. })
    ));
}

#[test]
fn test_marker_specs_are_well_formed() {
    let specs = [
        "0:00,1:00,2:00",
        "3:00,0:00,1:30,1:30",
        "0,1,2,3,4,5",
        "0:00:00;0:10:00;0:20:00",
        "1:00\n2:00\n\n",
    ];
    for spec in specs {
        for duration in [None, Some(60.0), Some(1500.0)] {
            let cuts = parse_splits(spec, duration).unwrap();
            assert_well_formed(&cuts);
            for pair in cuts.windows(2) {
                assert!(pair[0].start() < pair[1].start(), "out of order in {spec}");
                assert_eq!(pair[0].end(), pair[1].start(), "gap in {spec}");
            }
        }
    }
}

#[test]
fn test_range_specs_keep_input_order_and_duplicates() {
    let cuts = parse_splits("2:00-3:00=Same,0:00-1:00=Same,1:00-2:00", None).unwrap();
    assert_well_formed(&cuts);

    let got: Vec<_> = cuts.iter().map(|c| (c.start(), c.label())).collect();
    assert_eq!(
        got,
        vec![(120.0, "Same"), (0.0, "Same"), (60.0, "part03")]
    );
}

#[test]
fn test_spec_errors() {
    let cases: &[(&str, Option<f64>)] = &[
        ("1:00", None),
        ("", None),
        ("0:00-end", None),
        ("1:00-0:30", Some(100.0)),
        ("0:00,0:30-1:00", Some(100.0)),
        ("oops-", Some(100.0)),
    ];
    for (spec, duration) in cases {
        assert!(parse_splits(spec, *duration).is_err(), "{spec:?} should fail");
    }
}

#[test]
fn test_chapters_contiguous() {
    let meta = SourceMetadata {
        id: Some("abc123".into()),
        title: Some("Mix".into()),
        duration: Some(600.0),
        chapters: vec![
            Chapter::starting_at(0.0).with_title("One"),
            Chapter::starting_at(180.0).with_title("Two"),
            Chapter::starting_at(420.0).with_title("Three"),
        ],
    };

    let cuts = chapters_to_cuts(&meta);
    assert_eq!(cuts.len(), 3);
    assert_well_formed(&cuts);

    let bounds: Vec<_> = cuts.iter().map(|c| (c.start(), c.end())).collect();
    assert_eq!(bounds, vec![(0.0, 180.0), (180.0, 420.0), (420.0, 600.0)]);
    for pair in cuts.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start());
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_metadata_from_info_json() {
    let json = r#"{
        "id": "xyz",
        "title": "Live at the Hall",
        "duration": 250.0,
        "uploader": "someone",
        "chapters": [
            {"start_time": 0.0, "end_time": 100.0, "title": "Open"},
            {"start_time": 100.0, "title": null}
        ]
    }"#;
    let meta: SourceMetadata = serde_json::from_str(json).unwrap();
    let cuts = chapters_to_cuts(&meta);
    assert_eq!(cuts[0].label(), "01 - Open");
    assert_eq!(cuts[1].label(), "02 - part02");
    assert_eq!(cuts[1].end(), 250.0);

    let no_chapters: SourceMetadata =
        serde_json::from_str(r#"{"id": "x", "chapters": null}"#).unwrap();
    assert!(no_chapters.chapters.is_empty());
}
