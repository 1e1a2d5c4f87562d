use integration_tests::harness::{EventLog, Recorder, capture_events, gender_line};
use pretty_assertions::assert_eq;
use predgraph_core::{RunConfig, run_with};
use tracing::Level;

/// Gender records on lines 1-3, unrelated events on 4-9 and another gender
/// record on line 10. Only the first run is charted, and the dropped line is
/// reported.
#[test]
fn records_after_a_gap_are_dropped_and_reported() {
    let mut lines = vec![
        gender_line("u1", "2021-01-01T00:00:00Z", 0.1, 0.8),
        gender_line("u1", "2021-01-02T00:00:00Z", 0.2, 0.7),
        gender_line("u1", "2021-01-03T00:00:00Z", 0.3, 0.6),
    ];
    lines.extend((4..10).map(|i| format!(r#"{{"event_type":"event_{i}"}}"#)));
    lines.push(gender_line("u1", "2021-01-10T00:00:00Z", 0.9, 0.1));
    let log = EventLog::write(&lines);
    let recorder = Recorder::new();
    let cfg = RunConfig::new(log.path()).with_out_dir(log.dir());

    let (result, events) = capture_events(|| run_with(&cfg, recorder.factory()));

    result.unwrap();
    let gender = &recorder.calls()[0];
    assert_eq!(
        gender.x_axis,
        vec!["2021-01-01", "2021-01-02", "2021-01-03"]
    );
    assert_eq!(gender.values("Male"), Some(&[0.1, 0.2, 0.3][..]));

    let warnings: Vec<_> = events.iter().filter(|e| e.level == Level::WARN).collect();
    assert_eq!(warnings.len(), 1, "events: {events:?}");
    assert_eq!(warnings[0].field("schema"), Some("predicted_gender"));
    assert_eq!(warnings[0].field("dropped"), Some("1"));
}

#[test]
fn progress_is_logged_per_pass() {
    let log = EventLog::write(&[gender_line("u1", "2021-01-01T00:00:00Z", 0.5, 0.5)]);
    let recorder = Recorder::new();
    let cfg = RunConfig::new(log.path()).with_out_dir(log.dir());

    let (result, events) = capture_events(|| run_with(&cfg, recorder.factory()));

    result.unwrap();
    let counts: Vec<_> = events
        .iter()
        .filter_map(|e| Some((e.field("schema")?, e.field("records")?)))
        .collect();
    assert_eq!(counts, vec![("gender", "1"), ("age", "0")]);
}
