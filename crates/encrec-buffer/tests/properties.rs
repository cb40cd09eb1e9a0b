//! Property tests for the recording buffer contract.

use encrec_buffer::{RecordingBuffer, RecordingConfig, Region, DATA_OFFSET};
use encrec_core::Value;
use encrec_test_utils::region_with_flag;
use proptest::prelude::*;

const DATA_BASE: u32 = 0x4000;

fn arb_vectors() -> impl Strategy<Value = Vec<Vec<Value>>> {
    proptest::collection::vec(
        proptest::collection::vec(any::<i32>().prop_map(Value), 0..6),
        0..12,
    )
}

#[derive(Clone, Debug)]
enum Op {
    Record(Vec<Value>),
    Reset,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(
        prop_oneof![
            3 => proptest::collection::vec(any::<i32>().prop_map(Value), 0..4).prop_map(Op::Record),
            1 => Just(Op::Reset),
        ],
        0..20,
    )
}

fn init(flag: u32, data_words: usize) -> RecordingBuffer {
    RecordingBuffer::initialise(
        Some(region_with_flag(flag, DATA_BASE, data_words)),
        &RecordingConfig::new(),
    )
    .unwrap()
}

fn data(region: &Region, len: usize) -> Vec<Value> {
    region.values(DATA_OFFSET, len).collect()
}

proptest! {
    #[test]
    fn disabled_never_writes(vectors in arb_vectors()) {
        let mut buffer = init(0, 64);
        let base = buffer.cursor_address();
        for v in &vectors {
            buffer.record(v).unwrap();
            prop_assert_eq!(buffer.cursor_address(), base);
        }
        prop_assert!(buffer.region().words()[DATA_OFFSET..].iter().all(|&w| w == 0));
    }

    #[test]
    fn enabled_data_is_concatenation(vectors in arb_vectors()) {
        let total: usize = vectors.iter().map(Vec::len).sum();
        let mut buffer = init(1, total);
        for v in &vectors {
            buffer.record(v).unwrap();
        }
        prop_assert_eq!(buffer.cursor(), total);
        let expected: Vec<Value> = vectors.concat();
        prop_assert_eq!(data(buffer.region(), total), expected);
    }

    #[test]
    fn reset_is_idempotent(prefix in arb_vectors(), resets in 1usize..5) {
        let total: usize = prefix.iter().map(Vec::len).sum();
        let mut once = init(1, total);
        let mut many = init(1, total);
        for v in &prefix {
            once.record(v).unwrap();
            many.record(v).unwrap();
        }
        once.reset();
        for _ in 0..resets {
            many.reset();
        }
        prop_assert_eq!(once.cursor(), 0);
        prop_assert_eq!(many.cursor(), 0);
        prop_assert_eq!(once.cursor_address(), many.cursor_address());
        prop_assert_eq!(once.region(), many.region());
    }

    #[test]
    fn record_after_reset_starts_at_base(
        first in proptest::collection::vec(any::<i32>().prop_map(Value), 1..8),
        second in proptest::collection::vec(any::<i32>().prop_map(Value), 1..8),
    ) {
        let mut buffer = init(1, 16);
        buffer.record(&first).unwrap();
        buffer.reset();
        buffer.record(&second).unwrap();

        let mut expected = second.clone();
        if first.len() > second.len() {
            expected.extend_from_slice(&first[second.len()..]);
        }
        prop_assert_eq!(data(buffer.region(), expected.len()), expected);
        prop_assert_eq!(buffer.cursor(), second.len());
    }

    #[test]
    fn enable_flag_survives_any_ops(flag in 0u32..3, ops in arb_ops()) {
        let mut buffer = init(flag, 128);
        let enabled = buffer.is_enabled();
        prop_assert_eq!(enabled, flag != 0);
        for op in ops {
            match op {
                Op::Record(v) => buffer.record(&v).unwrap(),
                Op::Reset => buffer.reset(),
            }
            prop_assert_eq!(buffer.is_enabled(), enabled);
        }
    }

    #[test]
    fn overflow_leaves_state_untouched(
        fill in 0usize..8,
        extra in 1usize..8,
    ) {
        let mut buffer = init(1, 8);
        buffer.record(&vec![Value(1); fill]).unwrap();
        let before = buffer.region().clone();
        let over = vec![Value(2); 8 - fill + extra];
        prop_assert!(buffer.record(&over).is_err());
        prop_assert_eq!(buffer.cursor(), fill);
        prop_assert_eq!(buffer.region(), &before);
    }
}
