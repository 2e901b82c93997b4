//! Decoded sample storage for one recording.

/// Immutable reference-channel samples of a decoded recording.
///
/// Only channel 0 of the source is retained; `channels` remembers how many the
/// source had. A buffer is replaced wholesale when a new file is loaded and is
/// never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: f64,
    channels: usize,
}

impl SampleBuffer {
    /// Create a mono buffer.
    pub fn new(samples: Vec<f32>, sample_rate: f64) -> Self {
        Self {
            samples,
            sample_rate,
            channels: 1,
        }
    }

    /// Keep the first channel of interleaved audio `[c0, c1, .., c0, c1, ..]`.
    pub fn from_interleaved(interleaved: &[f32], channels: usize, sample_rate: f64) -> Self {
        let channels = channels.max(1);
        let samples = interleaved.iter().step_by(channels).copied().collect();
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Channel count of the source the buffer was decoded from.
    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds (`len / sample_rate`), 0 for a non-positive rate.
    pub fn duration(&self) -> f64 {
        if self.sample_rate > 0.0 {
            self.samples.len() as f64 / self.sample_rate
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_duration() {
        let buffer = SampleBuffer::new(vec![0.0; 22050], 44100.0);
        assert_relative_eq!(buffer.duration(), 0.5);
        assert_eq!(buffer.channels(), 1);
    }

    #[test]
    fn test_zero_rate_has_zero_duration() {
        let buffer = SampleBuffer::new(vec![0.0; 100], 0.0);
        assert_eq!(buffer.duration(), 0.0);
    }

    #[test]
    fn test_from_interleaved_keeps_first_channel() {
        let interleaved = [0.1, -0.1, 0.2, -0.2, 0.3, -0.3];
        let buffer = SampleBuffer::from_interleaved(&interleaved, 2, 48000.0);
        assert_eq!(buffer.samples(), &[0.1, 0.2, 0.3]);
        assert_eq!(buffer.channels(), 2);
    }
}
