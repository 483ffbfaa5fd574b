use physlink_rs::channel::{Channel, MemoryChannel};
use physlink_rs::phy::{SYMBOL_TABLE, SessionDecoder, encoder};
use physlink_rs::utils::consts::{PAYLOAD_BYTES, PREAMBLE_LEN};
use rand::Rng;

#[test]
fn offline_round_trip_without_network() {
    let decoder = SessionDecoder::new(&SYMBOL_TABLE);
    let mut rng = rand::rng();

    for _ in 0..16 {
        let payload: Vec<u8> =
            (0..PAYLOAD_BYTES).map(|_| rng.random()).collect();
        let samples =
            encoder::simulate_transmission(&SYMBOL_TABLE, &payload, 100, 40);
        let mut channel = MemoryChannel::new(samples);

        let report = decoder
            .decode(&mut channel)
            .expect("clean channel should decode");
        assert_eq!(report.baseline, 100.0);
        assert_eq!(report.payload, payload);
    }
}

#[test]
fn round_trip_survives_bounded_noise() {
    let decoder = SessionDecoder::new(&SYMBOL_TABLE);
    let mut rng = rand::rng();

    let payload: Vec<u8> = (0..PAYLOAD_BYTES).map(|_| rng.random()).collect();
    let mut samples =
        encoder::simulate_transmission(&SYMBOL_TABLE, &payload, 100, 40);

    // Jitter the frame well inside the ±40 swing; the preamble stays
    // clean so the baseline lands exactly on 100.
    for sample in samples.iter_mut().skip(PREAMBLE_LEN) {
        let jitter = rng.random_range(-10i16..=10);
        *sample = (i16::from(*sample) + jitter).clamp(0, 255) as u8;
    }

    let mut channel = MemoryChannel::new(samples);
    let report = decoder
        .decode(&mut channel)
        .expect("noisy channel should still decode");
    assert_eq!(report.payload, payload);
}

#[test]
fn echo_and_status_reply_contract() {
    let payload: Vec<u8> = (0..PAYLOAD_BYTES as u8).collect();
    let samples =
        encoder::simulate_transmission(&SYMBOL_TABLE, &payload, 100, 20);
    let mut channel = MemoryChannel::new(samples);
    channel.push_sample(1); // the server's acknowledgment byte

    let report = SessionDecoder::new(&SYMBOL_TABLE)
        .decode(&mut channel)
        .unwrap();
    for &byte in &report.payload {
        channel.write_byte(byte).unwrap();
    }

    assert_eq!(channel.written(), payload.as_slice());
    assert_eq!(channel.read_sample().unwrap(), Some(1));
    assert_eq!(channel.read_sample().unwrap(), None);
}
