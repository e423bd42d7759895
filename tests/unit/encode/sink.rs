use super::*;
use crate::encode::path::encode;
use crate::foundation::core::Point;

#[test]
fn readout_uses_two_decimals() {
    assert_eq!(format_k_readout(0.2249), "k = 0.22");
    assert_eq!(format_k_readout(4.0), "k = 4.00");
    assert_eq!(format_k_readout(17.996), "k = 18.00");
}

#[test]
fn in_memory_sink_records_in_order() {
    let mut sink = InMemorySink::new();
    assert!(sink.last().is_none());
    sink.submit(&encode([[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]]))
        .unwrap();
    sink.submit(&encode([[Point::new(2.0, 0.0)]])).unwrap();
    assert_eq!(sink.paths().len(), 2);
    assert_eq!(sink.paths()[0], "M 0 0 L 1 0");
    assert_eq!(sink.last(), Some("M 2 0"));
}

#[test]
fn mutable_references_forward() {
    fn push(mut s: impl PathSink) {
        s.submit(&encode([[Point::new(1.0, 1.0)]])).unwrap();
    }
    let mut sink = InMemorySink::new();
    push(&mut sink);
    assert_eq!(sink.last(), Some("M 1 1"));
}

#[test]
fn readouts_are_kept_apart_from_paths() {
    let mut sink = InMemorySink::new();
    sink.submit(&encode([[Point::new(0.0, 0.0)]])).unwrap();
    sink.show(&format_k_readout(4.0)).unwrap();
    sink.submit(&encode([[Point::new(1.0, 0.0)]])).unwrap();
    assert_eq!(sink.paths(), ["M 0 0", "M 1 0"]);
    assert_eq!(sink.readouts(), ["k = 4.00"]);
    assert_eq!(sink.last(), Some("M 1 0"));
    assert_eq!(sink.last_readout(), Some("k = 4.00"));
}
