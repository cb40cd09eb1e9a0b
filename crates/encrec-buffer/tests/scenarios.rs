//! Recording buffer walkthroughs at fixed SDRAM addresses.

use encrec_buffer::{RecordingBuffer, RecordingConfig};
use encrec_core::{SdramAddress, Value};
use encrec_test_utils::{enabled_region, region_with_flag};

fn values(xs: &[f32]) -> Vec<Value> {
    xs.iter().map(|&x| Value::from_f32(x)).collect()
}

fn recorded(buffer: &RecordingBuffer) -> Vec<f32> {
    buffer.recorded().map(Value::to_f32).collect()
}

#[test]
fn disabled_region_ignores_records() {
    let region = region_with_flag(0, 0x1000, 3);
    let before = region.clone();
    let mut buffer = RecordingBuffer::initialise(Some(region), &RecordingConfig::new()).unwrap();
    assert!(!buffer.is_enabled());

    buffer.record(&values(&[1.0, 2.0, 3.0])).unwrap();

    assert_eq!(buffer.cursor_address(), Some(SdramAddress(0x1000)));
    assert_eq!(buffer.region(), &before);
}

#[test]
fn enabled_region_appends_in_call_order() {
    let mut buffer =
        RecordingBuffer::initialise(Some(enabled_region(0x2000, 4)), &RecordingConfig::new())
            .unwrap();
    assert_eq!(buffer.cursor_address(), Some(SdramAddress(0x2000)));

    buffer.record(&values(&[1.0, 2.0])).unwrap();
    assert_eq!(buffer.cursor_address(), Some(SdramAddress(0x2008)));

    buffer.record(&values(&[3.0, 4.0])).unwrap();
    assert_eq!(buffer.cursor_address(), Some(SdramAddress(0x2010)));
    assert_eq!(recorded(&buffer), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn reset_then_record_overwrites_from_base() {
    let mut buffer =
        RecordingBuffer::initialise(Some(enabled_region(0x2000, 4)), &RecordingConfig::new())
            .unwrap();
    buffer.record(&values(&[1.0, 2.0])).unwrap();
    buffer.record(&values(&[3.0, 4.0])).unwrap();

    buffer.reset();
    assert_eq!(buffer.cursor_address(), Some(SdramAddress(0x2000)));

    buffer.record(&values(&[9.0, 9.0])).unwrap();
    let data: Vec<f32> = buffer
        .region()
        .values(1, 4)
        .map(Value::to_f32)
        .collect();
    assert_eq!(data, vec![9.0, 9.0, 3.0, 4.0]);
    assert_eq!(recorded(&buffer), vec![9.0, 9.0]);
}

#[test]
fn missing_region_disables_recording_for_the_run() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut buffer = RecordingBuffer::initialise_or_disabled(None, &RecordingConfig::new());
    for _ in 0..10 {
        buffer.record(&values(&[1.0])).unwrap();
    }
    assert!(!buffer.is_enabled());
    assert_eq!(buffer.recorded_len(), 0);
}
