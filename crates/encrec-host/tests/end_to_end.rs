//! Full recording cycle: host builds region images, each core records
//! its neuron slice every step, the host reads the regions back and
//! assembles the probe.

use encrec_buffer::{RecordingBuffer, RecordingConfig};
use encrec_core::{EncoderVector, SdramAddress};
use encrec_host::{
    decode_region, encode_region, EncoderProbe, EncoderRecordingRegion, ProbeData,
    TraceAssembler,
};
use encrec_test_utils::EncoderSource;

const N_DIMS: usize = 3;
const N_NEURONS: usize = 5;

/// Simulate one core: record `vectors` (step-major) and return the bytes
/// the host would read back from SDRAM.
fn run_core(
    layout: &EncoderRecordingRegion,
    address: SdramAddress,
    n_neurons: usize,
    vectors: &[EncoderVector],
) -> Vec<u8> {
    let image = layout.build_image(address, n_neurons).unwrap();
    let mut transfer = Vec::new();
    encode_region(&mut transfer, &image).unwrap();

    // Load onto the "board".
    let region = decode_region(&mut transfer.as_slice(), address, image.len_words()).unwrap();
    let config = RecordingConfig::new().with_expected_dims(layout.n_dims);
    let mut buffer = RecordingBuffer::initialise(Some(region), &config).unwrap();
    for v in vectors {
        buffer.record(v).unwrap();
    }

    let mut out = Vec::new();
    encode_region(&mut out, &buffer.into_region()).unwrap();
    out
}

fn expected_row(vectors: &[EncoderVector], n_neurons: usize, step: usize, neuron: usize) -> Vec<f32> {
    vectors[step * n_neurons + neuron]
        .iter()
        .map(|v| v.to_f32())
        .collect()
}

#[test]
fn two_cores_round_trip_into_ensemble_trace() {
    let n_steps = 4;
    let layout = EncoderRecordingRegion::new(n_steps, N_DIMS);
    let slices = [(0..2, SdramAddress(0x6000_0000)), (2..5, SdramAddress(0x6000_1000))];

    let mut asm = TraceAssembler::new(n_steps, N_NEURONS, N_DIMS).unwrap();
    let mut recorded = Vec::new();
    for (i, (slice, address)) in slices.iter().enumerate() {
        let mut source = EncoderSource::new(i as u64, N_DIMS);
        let vectors = source.run(n_steps, slice.len());
        let bytes = run_core(&layout, *address, slice.len(), &vectors);

        let n_words = layout.size_words(slice.len()).unwrap();
        let region = decode_region(&mut bytes.as_slice(), *address, n_words).unwrap();
        let part = layout.read_back(&region, slice.len(), n_steps).unwrap();
        asm.insert(slice.clone(), &part).unwrap();
        recorded.push((slice.clone(), vectors));
    }
    let trace = asm.finish().unwrap();
    assert_eq!(trace.shape(), (n_steps, N_NEURONS, N_DIMS));

    for (slice, vectors) in &recorded {
        for step in 0..n_steps {
            for (local, neuron) in slice.clone().enumerate() {
                assert_eq!(
                    trace.row(step, neuron),
                    expected_row(vectors, slice.len(), step, local).as_slice()
                );
            }
        }
    }
}

#[test]
fn disabled_layout_reads_back_nothing() {
    let layout = EncoderRecordingRegion::disabled(N_DIMS);
    let mut source = EncoderSource::new(9, N_DIMS);
    let vectors = source.run(4, 2);
    let address = SdramAddress(0x6000_0000);
    let bytes = run_core(&layout, address, 2, &vectors);

    assert_eq!(bytes, vec![0, 0, 0, 0]);
    let region = decode_region(&mut bytes.as_slice(), address, 1).unwrap();
    let trace = layout.read_back(&region, 2, 0).unwrap();
    assert!(trace.is_empty());
}

#[test]
fn probe_accumulates_sampled_runs() {
    let n_steps = 6;
    let layout = EncoderRecordingRegion::new(n_steps, N_DIMS);
    let address = SdramAddress(0x6000_0000);
    let probe = EncoderProbe::new(3, 1..5).unwrap().with_neuron_stride(2).unwrap();
    let mut data = ProbeData::new();

    for run in 0..2u64 {
        let vectors = EncoderSource::new(100 + run, N_DIMS).run(n_steps, N_NEURONS);
        let bytes = run_core(&layout, address, N_NEURONS, &vectors);
        let n_words = layout.size_words(N_NEURONS).unwrap();
        let region = decode_region(&mut bytes.as_slice(), address, n_words).unwrap();
        let trace = layout.read_back(&region, N_NEURONS, n_steps).unwrap();
        data.push_run(probe.apply(&trace).unwrap()).unwrap();
    }

    let t = data.trace().unwrap();
    // Steps 0 and 3 of each run, neurons 1 and 3.
    assert_eq!(t.shape(), (4, 2, N_DIMS));
    let second_run = EncoderSource::new(101, N_DIMS).run(n_steps, N_NEURONS);
    assert_eq!(t.row(3, 0), expected_row(&second_run, N_NEURONS, 3, 1).as_slice());
    assert_eq!(t.row(3, 1), expected_row(&second_run, N_NEURONS, 3, 3).as_slice());
}

#[test]
fn truncated_transfer_is_reported() {
    let layout = EncoderRecordingRegion::new(2, N_DIMS);
    let address = SdramAddress(0x6000_0000);
    let vectors = EncoderSource::new(3, N_DIMS).run(2, 1);
    let mut bytes = run_core(&layout, address, 1, &vectors);
    bytes.truncate(bytes.len() - 2);
    let n_words = layout.size_words(1).unwrap();
    let err = decode_region(&mut bytes.as_slice(), address, n_words).unwrap_err();
    assert!(matches!(
        err,
        encrec_host::HostError::Truncated {
            expected_words: 7,
            read_words: 6
        }
    ));
}
