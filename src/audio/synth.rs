//! Offline tone synthesis.
//!
//! Tones are rendered once at startup from a fixed Fourier series and handed
//! to the mixer as in-memory WAV files.

use std::f32::consts::TAU;

use super::histogram::BUCKETS;

pub const SAMPLE_RATE: u32 = 22_050;

/// Length of each rendered tone in seconds
pub const TONE_SECONDS: f32 = 0.6;

/// Frequency of the lowest bucket (bottom row)
pub const BASE_HZ: f32 = 55.0;

/// Semitone offsets of a major pentatonic scale
const PENTATONIC: [u32; 5] = [0, 2, 4, 7, 9];

/// Periodic wave as (cosine, sine) coefficients per harmonic, fundamental first.
/// A soft organ-like timbre: odd harmonics dominate and the series falls off fast.
pub const HARMONICS: [(f32, f32); 8] = [
    (0.0, 1.0),
    (0.0, 0.32),
    (0.12, 0.45),
    (0.0, 0.10),
    (0.05, 0.18),
    (0.0, 0.04),
    (0.02, 0.07),
    (0.0, 0.02),
];

/// Frequency for a pitch bucket. Bucket 0 is the top row and sounds highest.
pub fn pitch_frequency(pitch_bucket: usize) -> f32 {
    let step = (BUCKETS - 1 - pitch_bucket.min(BUCKETS - 1)) as u32;
    let semitones = (step / 5) * 12 + PENTATONIC[(step % 5) as usize];
    BASE_HZ * 2f32.powf(semitones as f32 / 12.0)
}

/// Render a plucked tone: short linear attack, exponential decay.
/// Harmonics above Nyquist are skipped; output stays within [-1, 1].
pub fn render_tone(frequency: f32, seconds: f32, sample_rate: u32) -> Vec<f32> {
    let nyquist = sample_rate as f32 / 2.0;
    let partials: Vec<(f32, f32, f32)> = HARMONICS
        .iter()
        .enumerate()
        .map(|(i, &(a, b))| (frequency * (i + 1) as f32, a, b))
        .filter(|&(f, ..)| f < nyquist)
        .collect();
    let norm: f32 = partials.iter().map(|&(_, a, b)| a.abs() + b.abs()).sum::<f32>().max(f32::EPSILON);

    let len = (seconds * sample_rate as f32) as usize;
    let attack = (0.01 * sample_rate as f32).max(1.0);

    (0..len)
        .map(|n| {
            let t = n as f32 / sample_rate as f32;
            let wave: f32 = partials
                .iter()
                .map(|&(f, a, b)| a * (TAU * f * t).cos() + b * (TAU * f * t).sin())
                .sum();
            let envelope = (n as f32 / attack).min(1.0) * (-6.0 * t / seconds).exp();
            wave / norm * envelope
        })
        .collect()
}

/// Wrap mono samples in a 16-bit PCM WAV container
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    const CHANNELS: u16 = 1;
    const BITS: u16 = 16;
    let block_align = CHANNELS * BITS / 8;
    let data_len = (samples.len() * block_align as usize) as u32;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&CHANNELS.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());

    for &sample in samples {
        let pcm = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        out.extend_from_slice(&pcm.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_descends_with_rows() {
        assert_eq!(pitch_frequency(BUCKETS - 1), BASE_HZ);
        for bucket in 1..BUCKETS {
            assert!(pitch_frequency(bucket - 1) > pitch_frequency(bucket), "bucket {bucket}");
        }
        // Five scale steps up is one octave
        assert!((pitch_frequency(BUCKETS - 6) - 2.0 * BASE_HZ).abs() < 1e-3);
    }

    #[test]
    fn test_tone_is_bounded() {
        let tone = render_tone(440.0, 0.2, SAMPLE_RATE);
        assert_eq!(tone.len(), (0.2 * SAMPLE_RATE as f32) as usize);
        assert_eq!(tone[0], 0.0);
        assert!(tone.iter().all(|s| s.abs() <= 1.0));
        assert!(tone.iter().any(|s| s.abs() > 0.1));
    }

    #[test]
    fn test_high_tone_drops_aliasing_harmonics() {
        // Every harmonic but the fundamental is above Nyquist
        let tone = render_tone(8000.0, 0.05, SAMPLE_RATE);
        assert!(tone.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn test_wav_header() {
        let wav = encode_wav(&[0.0, 1.0, -1.0], 8000);
        assert_eq!(wav.len(), 44 + 6);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(u32::from_le_bytes(wav[24..28].try_into().unwrap()), 8000);
        assert_eq!(u32::from_le_bytes(wav[40..44].try_into().unwrap()), 6);
        assert_eq!(i16::from_le_bytes([wav[46], wav[47]]), i16::MAX);
        assert_eq!(i16::from_le_bytes([wav[48], wav[49]]), -i16::MAX);
    }
}
