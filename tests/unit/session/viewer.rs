use super::*;
use crate::encode::path::PathDescription;
use crate::encode::sink::InMemorySink;
use crate::foundation::error::HeartlineError;

#[derive(Debug, Default)]
struct FailingSink {
    calls: usize,
}

impl PathSink for FailingSink {
    fn submit(&mut self, _path: &PathDescription) -> HeartlineResult<()> {
        self.calls += 1;
        if self.calls > 1 {
            return Err(HeartlineError::render("surface lost"));
        }
        Ok(())
    }
}

fn viewer() -> Viewer<InMemorySink, InMemorySink> {
    Viewer::new(&MorphConfig::normalized(), 1280.0, InMemorySink::new())
        .unwrap()
        .with_readout(InMemorySink::new())
}

#[test]
fn new_viewer_presents_idle_line() {
    let v = viewer();
    assert_eq!(v.sink().paths().len(), 1);
    let idle = v.director().idle_path(v.stage()).to_string();
    assert_eq!(v.sink().last(), Some(idle.as_str()));
}

#[test]
fn frames_before_start_are_silent() {
    let mut v = viewer();
    assert!(v.frame(Millis(16.0)).unwrap().is_none());
    assert_eq!(v.sink().paths().len(), 1);
    assert!(v.readout().readouts().is_empty());
}

#[test]
fn each_frame_pushes_path_and_readout() {
    let mut v = viewer();
    assert!(v.start(Millis(0.0)));
    assert!(!v.start(Millis(1.0)));
    for i in 0..5 {
        v.frame(Millis(i as f64 * 16.0)).unwrap().unwrap();
    }
    assert_eq!(v.sink().paths().len(), 6);
    assert_eq!(v.readout().readouts().len(), 5);
    assert_eq!(v.readout().last_readout(), Some("k = 4.00"));
}

#[test]
fn sink_failure_propagates_to_frame_caller() {
    let mut v = Viewer::new(&MorphConfig::normalized(), 1280.0, FailingSink::default()).unwrap();
    v.start(Millis(0.0));
    let err = v.frame(Millis(16.0)).unwrap_err();
    assert!(matches!(err, HeartlineError::Render(_)));
}

#[test]
fn non_finite_timestamp_is_an_animation_error() {
    let mut v = viewer();
    assert!(v.frame(Millis(f64::NAN)).unwrap().is_none());
    v.start(Millis(0.0));
    let err = v.frame(Millis(f64::NAN)).unwrap_err();
    assert!(matches!(err, HeartlineError::Animation(_)));
    assert_eq!(v.sink().paths().len(), 1);
    assert!(v.readout().readouts().is_empty());
    assert!(v.frame(Millis(16.0)).unwrap().is_some());
}

#[test]
fn resize_while_idle_presents_new_line() {
    let mut v = viewer();
    assert!(v.resize(400.0).unwrap());
    assert_eq!(v.sink().paths().len(), 2);
    assert!(!v.resize(420.0).unwrap());
    assert_eq!(v.sink().paths().len(), 2);
}

#[test]
fn resize_while_running_waits_for_next_frame() {
    let mut v = viewer();
    v.start(Millis(0.0));
    v.frame(Millis(2000.0)).unwrap();
    let pushed = v.sink().paths().len();

    assert!(v.resize(400.0).unwrap());
    assert_eq!(v.sink().paths().len(), pushed);

    let f = v.frame(Millis(2016.0)).unwrap().unwrap();
    let expected = v.stage().sampler().glyph_strip(f.k, 1.0);
    assert_eq!(f.path, crate::encode::path::encode([expected]));
}

#[test]
fn stopped_viewer_never_touches_the_sink() {
    let mut v = viewer();
    let token = v.stop_token();
    v.start(Millis(0.0));
    v.frame(Millis(16.0)).unwrap();
    let pushed = v.sink().paths().len();

    token.stop();
    assert!(v.frame(Millis(32.0)).unwrap().is_none());
    assert!(v.resize(400.0).unwrap());
    assert!(v.frame(Millis(48.0)).unwrap().is_none());
    assert_eq!(v.sink().paths().len(), pushed);
}
