//! ToneSequencer playback tests with a recording sink

mod common;

use std::time::Duration;

use common::{Emitted, RecordingSink};
use rust_morse_player::audio::{total_units, ToneSequencer};
use rust_morse_player::codec::SymbolCodec;
use rust_morse_player::config::AudioConfig;
use rust_morse_player::error::ErrorKind;

const UNIT_MS: u64 = 10;

fn config() -> AudioConfig {
    AudioConfig {
        unit_ms: UNIT_MS as f64,
        sample_rate: 8000,
        ..AudioConfig::default()
    }
}

fn sequencer() -> ToneSequencer<RecordingSink> {
    ToneSequencer::new(config(), RecordingSink::new()).unwrap()
}

fn units(n: u64) -> Duration {
    Duration::from_millis(n * UNIT_MS)
}

#[test]
fn test_sos_total_duration() {
    let mut seq = sequencer();
    seq.play("... --- ...").unwrap();

    // 3×(1+1) + 3 + 3×(3+1) + 3 + 3×(1+1), net of trailing element gaps.
    let plan = seq.plan("... --- ...").unwrap();
    assert_eq!(total_units(&plan), 27);
    assert_eq!(seq.sink().total_duration(), units(27));
}

#[test]
fn test_sos_segment_shape() {
    let mut seq = sequencer();
    seq.play("... --- ...").unwrap();
    let sink = seq.into_sink();

    let tone_frames: Vec<usize> = sink.tones().iter().map(|b| b.frames()).collect();
    // 10 ms at 8 kHz = 80 frames
    assert_eq!(tone_frames, vec![80, 80, 80, 240, 240, 240, 80, 80, 80]);
    assert_eq!(
        sink.silences(),
        vec![
            units(1),
            units(1),
            units(3),
            units(1),
            units(1),
            units(3),
            units(1),
            units(1),
        ]
    );
    assert_eq!(sink.finished, 1);
}

#[test]
fn test_word_gap_from_encoded_text() {
    let morse = SymbolCodec::international().encode("E E").unwrap();
    assert_eq!(morse, ".     .");

    let mut seq = sequencer();
    seq.play(&morse).unwrap();
    assert_eq!(seq.sink().silences(), vec![units(7)]);
    assert_eq!(seq.sink().total_duration(), units(9));
}

#[test]
fn test_stray_characters_become_pauses() {
    let mut seq = sequencer();
    seq.play(".x-").unwrap();
    assert_eq!(seq.sink().silences(), vec![units(2)]);
}

#[test]
fn test_stray_characters_outside_tones_still_pause() {
    let mut seq = sequencer();
    seq.play("x").unwrap();
    assert!(seq.sink().tones().is_empty());
    assert_eq!(seq.sink().silences(), vec![units(1)]);
    assert_eq!(seq.sink().total_duration(), units(1));

    let mut seq = sequencer();
    seq.play("x.x").unwrap();
    assert_eq!(seq.sink().silences(), vec![units(1), units(1)]);
    assert_eq!(seq.sink().total_duration(), units(3));
}

#[test]
fn test_empty_play_has_no_side_effect() {
    let mut seq = sequencer();
    let err = seq.play("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
    assert!(seq.sink().emitted.is_empty());
    assert_eq!(seq.sink().finished, 0);
}

#[test]
fn test_sink_failure_aborts_remaining_segments() {
    let mut seq = ToneSequencer::new(config(), RecordingSink::failing_at(3)).unwrap();
    let err = seq.play("... --- ...").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Audio);
    assert_eq!(seq.sink().emitted.len(), 3);
    assert_eq!(seq.sink().finished, 0);
}

#[test]
fn test_synthesis_is_deterministic() {
    let a = sequencer().synthesize_tone(0.25).unwrap();
    let b = sequencer().synthesize_tone(0.25).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.frames(), 2000);
}

#[test]
fn test_same_length_tones_are_identical() {
    let mut seq = sequencer();
    seq.play("..").unwrap();
    let sink = seq.sink();
    match (&sink.emitted[0], &sink.emitted[2]) {
        (Emitted::Tone(a), Emitted::Tone(b)) => assert_eq!(a, b),
        other => panic!("unexpected segments: {other:?}"),
    }
}

#[test]
fn test_invalid_construction_fails_before_sink_is_used() {
    let err = ToneSequencer::with_overrides(&config(), Some(f64::NAN), None, RecordingSink::new())
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);

    let err = ToneSequencer::with_overrides(&config(), None, Some(0.0), RecordingSink::new())
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
