//! Sonification of births.
//!
//! Each generation's [`NewbornReport`] is binned into a [`BirthHistogram`];
//! rows pick the pitch and columns pick when, within the tick, the note
//! sounds. Audio is strictly optional: if the mixer cannot be set up the
//! simulation runs silently.

pub mod histogram;
pub mod synth;

use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};
use thiserror::Error;

use crate::domain::NewbornReport;
pub use histogram::{BirthHistogram, MAX_VOICES, Voice};
use histogram::BUCKETS;
use synth::{SAMPLE_RATE, TONE_SECONDS, encode_wav, pitch_frequency, render_tone};

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("failed to load tone for pitch bucket {bucket}: {reason}")]
    Load { bucket: usize, reason: String },
}

/// A voice waiting for its onset time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledVoice {
    pub at: f64,
    pub pitch_bucket: usize,
    pub volume: f32,
}

/// Voices scheduled against wall-clock seconds
#[derive(Debug, Default)]
pub struct VoiceQueue {
    pending: Vec<ScheduledVoice>,
}

impl VoiceQueue {
    /// Queue voices relative to a tick at `now` lasting `period` seconds.
    /// Loudness is shared out so a dense generation does not clip.
    pub fn schedule(&mut self, voices: &[Voice], now: f64, period: f64, master: f32) {
        if voices.is_empty() {
            return;
        }
        let share = master / (voices.len() as f32).sqrt();
        self.pending.extend(voices.iter().map(|v| ScheduledVoice {
            at: now + v.onset as f64 * period,
            pitch_bucket: v.pitch_bucket,
            volume: (v.gain * share).clamp(0.0, 1.0),
        }));
    }

    /// Remove and return voices whose time has come, earliest first
    pub fn take_due(&mut self, now: f64) -> Vec<ScheduledVoice> {
        let mut due: Vec<_> = self.pending.iter().copied().filter(|v| v.at <= now).collect();
        self.pending.retain(|v| v.at > now);
        due.sort_by(|a, b| a.at.total_cmp(&b.at));
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Plays birth voices through macroquad's mixer
pub struct Sonifier {
    tones: Vec<Sound>,
    queue: VoiceQueue,
    volume: f32,
    muted: bool,
}

impl Sonifier {
    /// Render and upload one tone per pitch bucket
    pub async fn load(volume: f32) -> Result<Self, AudioError> {
        let mut tones = Vec::with_capacity(BUCKETS);
        for bucket in 0..BUCKETS {
            let samples = render_tone(pitch_frequency(bucket), TONE_SECONDS, SAMPLE_RATE);
            let wav = encode_wav(&samples, SAMPLE_RATE);
            let sound = load_sound_from_bytes(&wav).await.map_err(|e| AudioError::Load {
                bucket,
                reason: format!("{e:?}"),
            })?;
            tones.push(sound);
        }
        log::info!("Audio ready: {} tones at {} Hz", tones.len(), SAMPLE_RATE);

        Ok(Self {
            tones,
            queue: VoiceQueue::default(),
            volume: volume.clamp(0.0, 1.0),
            muted: false,
        })
    }

    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if self.muted {
            self.queue.clear();
        }
        log::info!("Audio {}", if self.muted { "muted" } else { "unmuted" });
    }

    /// Schedule the voices for one generation's births
    pub fn on_generation(&mut self, report: &NewbornReport, now: f64, period: f64) {
        if self.muted || report.is_empty() {
            return;
        }
        let voices = BirthHistogram::from_report(report).plan_voices();
        self.queue.schedule(&voices, now, period, self.volume);
    }

    /// Play whatever is due; call once per frame
    pub fn pump(&mut self, now: f64) {
        for voice in self.queue.take_due(now) {
            if let Some(sound) = self.tones.get(voice.pitch_bucket) {
                play_sound(sound, PlaySoundParams { looped: false, volume: voice.volume });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(pitch_bucket: usize, gain: f32, onset: f32) -> Voice {
        Voice { pitch_bucket, gain, onset }
    }

    #[test]
    fn test_schedule_spreads_over_period() {
        let mut queue = VoiceQueue::default();
        queue.schedule(&[voice(3, 1.0, 0.5), voice(7, 0.5, 0.0)], 10.0, 0.2, 1.0);

        assert_eq!(queue.len(), 2);
        let due = queue.take_due(10.0);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].pitch_bucket, 7);

        assert!(queue.take_due(10.05).is_empty());
        let due = queue.take_due(10.2);
        assert_eq!(due[0].pitch_bucket, 3);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_volume_shared_between_voices() {
        let mut queue = VoiceQueue::default();
        let voices: Vec<_> = (0..4).map(|b| voice(b, 1.0, 0.0)).collect();
        queue.schedule(&voices, 0.0, 1.0, 0.8);

        let due = queue.take_due(0.0);
        assert_eq!(due.len(), 4);
        assert!(due.iter().all(|v| (v.volume - 0.4).abs() < 1e-6));
    }

    #[test]
    fn test_no_voices_no_schedule() {
        let mut queue = VoiceQueue::default();
        queue.schedule(&[], 0.0, 1.0, 1.0);
        assert!(queue.is_empty());
    }
}
