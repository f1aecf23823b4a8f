//! Rejected operations must leave the receiver untouched and surface a
//! warning through `tracing` without interrupting the caller.

use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use vector_core::{ops, AngleAdapter, Vector};

/// In-memory log sink shared with the subscriber.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a WARN-level subscriber and return everything it logged.
fn capture_warnings(f: impl FnOnce()) -> String {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    log.contents()
}

#[test]
fn test_div_by_zero_warns_and_keeps_vector() {
    let mut v = Vector::new(4.0, 6.0, 8.0);
    let log = capture_warnings(|| {
        v.div([2.0, 0.0]);
    });
    assert_eq!(v.array(), [4.0, 6.0, 8.0]);
    assert!(log.contains("divide by 0"), "log was: {log}");
}

#[test]
fn test_static_div_by_zero_warns() {
    let v = Vector::new(1.0, 2.0, 3.0);
    let mut out = Vector::zero();
    let log = capture_warnings(|| {
        out = ops::div(&v, 0.0);
    });
    assert_eq!(out, v);
    assert!(log.contains("WARN"), "log was: {log}");
}

#[test]
fn test_non_finite_mult_warns() {
    let mut v = Vector::new(1.0, 2.0, 3.0);
    let log = capture_warnings(|| {
        v.mult(f64::NAN).add(1.0);
    });
    // the chain continues past the rejected step
    assert_eq!(v.array(), [2.0, 2.0, 3.0]);
    assert!(log.contains("not finite"), "log was: {log}");
}

#[test]
fn test_rem_by_zero_is_silent() {
    let mut v = Vector::new(3.0, 4.0, 5.0);
    let log = capture_warnings(|| {
        v.rem(0.0);
    });
    assert_eq!(v.array(), [3.0, 4.0, 5.0]);
    assert!(log.is_empty(), "log was: {log}");
}

#[test]
fn test_likely_2d_division_is_silent() {
    let mut v = Vector::new(4.0, 6.0, 0.0);
    let log = capture_warnings(|| {
        v.div(&Vector::new(2.0, 2.0, 0.0));
    });
    assert_eq!(v.array(), [2.0, 3.0, 0.0]);
    assert!(log.is_empty(), "log was: {log}");
}

#[test]
fn test_rotate_by_infinite_angle_warns_and_keeps_vector() {
    let mut v = Vector::new(3.0, 4.0, 0.0);
    let log = capture_warnings(|| {
        v.rotate(f64::INFINITY);
    });
    assert_eq!(v, Vector::new(3.0, 4.0, 0.0));
    assert!(log.contains("Vector::rotate"), "log was: {log}");
    assert!(log.contains("not finite"), "log was: {log}");
}

#[test]
fn test_adapted_set_heading_nan_warns() {
    let mut v = Vector::adapted(AngleAdapter::degrees(), 3.0, 4.0, 0.0);
    let log = capture_warnings(|| {
        v.set_heading(f64::NAN);
    });
    assert_eq!(v, Vector::new(3.0, 4.0, 0.0));
    assert!(log.contains("Vector::set_heading"), "log was: {log}");
}

#[test]
fn test_lerp_infinite_amount_warns() {
    let mut v = Vector::zero();
    let log = capture_warnings(|| {
        v.lerp((2.0, 0.0, 0.0), f64::INFINITY);
    });
    assert_eq!(v, Vector::zero());
    assert!(log.contains("Vector::lerp"), "log was: {log}");
}

#[test]
fn test_mult_overflow_warns() {
    let mut v = Vector::new(1e308, 0.0, 0.0);
    let log = capture_warnings(|| {
        v.mult(10.0);
    });
    assert_eq!(v, Vector::new(1e308, 0.0, 0.0));
    assert!(log.contains("Vector::mult"), "log was: {log}");
}

#[test]
fn test_slerp_non_finite_amount_warns() {
    let mut v = Vector::new(3.0, 0.0, 0.0);
    let log = capture_warnings(|| {
        v.slerp(&Vector::new(0.0, 1.0, 0.0), f64::INFINITY);
    });
    assert_eq!(v, Vector::new(3.0, 0.0, 0.0));
    assert!(log.contains("Vector::slerp"), "log was: {log}");
}

#[test]
fn test_set_mag_nan_leaves_magnitude() {
    let mut v = Vector::new(3.0, 4.0, 0.0);
    let log = capture_warnings(|| {
        v.set_mag(f64::NAN);
    });
    assert_eq!(v.array(), [3.0, 4.0, 0.0]);
    assert!(log.contains("Vector::set_mag"), "log was: {log}");

    let copy = capture_warnings(|| {
        assert_eq!(ops::set_mag(&v, f64::INFINITY), v);
    });
    assert!(copy.contains("WARN"), "log was: {copy}");
}
