//! Test helpers and fixtures for wavescan integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `TIME_EPSILON` (1e-6): Region boundaries computed from sample indices
//! - `LOUDNESS_WINDOW_SLACK` (0.05): Loud region edges (one analysis window)
//! - `PIXEL_EPSILON` (1e-3): Rendering coordinates

#![allow(dead_code)]

pub mod tolerances;

use std::f64::consts::{PI, SQRT_2};
use wavescan::prelude::*;

/// Default test sample rate (CD audio)
pub const TEST_SAMPLE_RATE: u32 = 44100;

/// Controller with the default configuration.
pub fn test_scan() -> WaveScan {
    WaveScan::builder()
        .build()
        .expect("Failed to create test controller")
}

pub fn seconds(secs: f64) -> usize {
    (secs * TEST_SAMPLE_RATE as f64).round() as usize
}

/// Generate silence (zero samples).
pub fn generate_silence(num_samples: usize) -> Vec<f32> {
    vec![0.0; num_samples]
}

/// Sine wave with the given peak amplitude, phase starting at 0.
pub fn generate_sine(frequency: f64, amplitude: f64, num_samples: usize) -> Vec<f32> {
    let sr = TEST_SAMPLE_RATE as f64;
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sr;
            (amplitude * (2.0 * PI * frequency * t).sin()) as f32
        })
        .collect()
}

/// Soft-saturated sine: loud, smooth, and never near full scale.
///
/// `0.85 * tanh(4 * sin(2*pi*f*t))` peaks at ~0.849 with an RMS well above
/// 0.6 and a per-sample change far below any click threshold.
pub fn generate_saturated(frequency: f64, num_samples: usize) -> Vec<f32> {
    let sr = TEST_SAMPLE_RATE as f64;
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sr;
            (0.85 * (4.0 * (2.0 * PI * frequency * t).sin()).tanh()) as f32
        })
        .collect()
}

/// Constant (DC) signal.
pub fn generate_dc(value: f32, num_samples: usize) -> Vec<f32> {
    vec![value; num_samples]
}

/// Ten second review fixture:
/// - 0-2s digital silence
/// - 2-7s 440 Hz sine at RMS 0.2 (audible, not loud)
/// - 7-10s saturated 50 Hz hum (loud)
pub fn review_fixture() -> Vec<f32> {
    let mut samples = generate_silence(seconds(2.0));
    let tone = generate_sine(440.0, 0.2 * SQRT_2, seconds(5.0));
    samples.extend(tone);
    samples.extend(generate_saturated(50.0, seconds(3.0)));
    samples
}

/// Encode mono samples as a 32-bit float WAV file in memory.
pub fn wav_bytes(samples: &[f32]) -> Vec<u8> {
    wav_bytes_with_channels(samples, 1)
}

/// Encode interleaved samples as a 32-bit float WAV file in memory.
pub fn wav_bytes_with_channels(interleaved: &[f32], channels: u16) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate: TEST_SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).expect("Failed to open writer");
        for &sample in interleaved {
            writer.write_sample(sample).expect("Failed to write sample");
        }
        writer.finalize().expect("Failed to finalize WAV");
    }
    cursor.into_inner()
}

/// Assert that `log` contains exactly the given reasons, in order.
pub fn assert_log_reasons(log: &[LogEntry], expected: &[&str]) {
    let reasons: Vec<&str> = log.iter().map(|e| e.reason).collect();
    assert_eq!(reasons, expected, "unexpected log: {log:#?}");
}
