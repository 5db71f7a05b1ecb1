//! Synth
//!
//! Square-wave rendering of pitch sequences and export to 16-bit mono WAV.
//! Each pitch becomes one fixed-length segment; segments play back to back
//! in the order given.

use crate::pitch::Pitch;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors returned by the synthesizer.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Invalid builder settings.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Asked to export a sequence with no pitches.
    #[error("cannot export an empty pitch sequence")]
    EmptySequence,

    /// Creating the output directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or writing the WAV file failed.
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

/// Builder for a `Synth`.
pub struct SynthBuilder {
    sample_rate: u32,
    note_duration_ms: u32,
    amplitude: f32,
}

impl SynthBuilder {
    /// Start with default parameters:
    /// sample_rate = 44_100, note_duration_ms = 750, amplitude = 0.5.
    pub fn new() -> Self {
        SynthBuilder {
            sample_rate: 44_100,
            note_duration_ms: 750,
            amplitude: 0.5,
        }
    }

    /// Set the output sample rate in Hz.
    pub fn sample_rate(mut self, rate: u32) -> Self {
        self.sample_rate = rate;
        self
    }

    /// Set how long each pitch sounds, in milliseconds.
    pub fn note_duration_ms(mut self, ms: u32) -> Self {
        self.note_duration_ms = ms;
        self
    }

    /// Set the peak amplitude (0.0..=1.0].
    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Finalize and create the Synth.
    pub fn build(self) -> Result<Synth, SynthError> {
        if self.sample_rate == 0 {
            return Err(SynthError::Configuration("sample_rate cannot be zero".into()));
        }
        if self.note_duration_ms == 0 {
            return Err(SynthError::Configuration(
                "note_duration_ms cannot be zero".into(),
            ));
        }
        if !(self.amplitude > 0.0 && self.amplitude <= 1.0) {
            return Err(SynthError::Configuration(format!(
                "amplitude must be in (0, 1], got {}",
                self.amplitude
            )));
        }

        Ok(self.finish())
    }

    pub(crate) fn finish(self) -> Synth {
        let samples_per_note =
            (self.sample_rate as u64 * self.note_duration_ms as u64 / 1000) as usize;
        Synth {
            sample_rate: self.sample_rate,
            note_duration_ms: self.note_duration_ms,
            amplitude: self.amplitude,
            samples_per_note,
        }
    }
}

impl Default for SynthBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Square-wave synthesizer.
#[derive(Debug, Clone)]
pub struct Synth {
    sample_rate: u32,
    note_duration_ms: u32,
    amplitude: f32,
    samples_per_note: usize,
}

impl Synth {
    /// Start customizing with a builder.
    pub fn builder() -> SynthBuilder {
        SynthBuilder::new()
    }

    /// Output sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Length of each note in milliseconds.
    pub fn note_duration_ms(&self) -> u32 {
        self.note_duration_ms
    }

    /// Samples in each note segment.
    pub fn samples_per_note(&self) -> usize {
        self.samples_per_note
    }

    /// Render `pitches` back to back as a mono buffer in `[-amplitude, amplitude]`.
    pub fn render(&self, pitches: &[Pitch]) -> Vec<f32> {
        let mut out = Vec::with_capacity(pitches.len() * self.samples_per_note);
        for pitch in pitches {
            let cycles_per_sample = pitch.frequency() / self.sample_rate as f64;
            out.extend((0..self.samples_per_note).map(|i| {
                let phase = (i as f64 * cycles_per_sample).fract();
                if phase < 0.5 {
                    self.amplitude
                } else {
                    -self.amplitude
                }
            }));
        }
        out
    }

    /// Render `pitches` into `<dir>/<file_stem>.wav`, creating `dir` if needed.
    ///
    /// Returns the path written.
    pub fn export(&self, dir: &Path, pitches: &[Pitch]) -> Result<PathBuf, SynthError> {
        if pitches.is_empty() {
            return Err(SynthError::EmptySequence);
        }
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.wav", file_stem(pitches)));

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec)?;
        for sample in self.render(pitches) {
            writer.write_sample((sample.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16)?;
        }
        writer.finalize()?;

        log::debug!("wrote {} pitches to {}", pitches.len(), path.display());
        Ok(path)
    }
}

impl Default for Synth {
    fn default() -> Self {
        SynthBuilder::new().finish()
    }
}

/// File name (without extension) for a pitch sequence: `"A2_C#3_E3"`.
pub fn file_stem(pitches: &[Pitch]) -> String {
    pitches
        .iter()
        .map(Pitch::to_string)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchClass;

    #[test]
    fn builder_rejects_bad_settings() {
        assert!(matches!(
            Synth::builder().sample_rate(0).build(),
            Err(SynthError::Configuration(_))
        ));
        assert!(matches!(
            Synth::builder().note_duration_ms(0).build(),
            Err(SynthError::Configuration(_))
        ));
        assert!(matches!(
            Synth::builder().amplitude(1.5).build(),
            Err(SynthError::Configuration(_))
        ));
        assert!(matches!(
            Synth::builder().amplitude(f32::NAN).build(),
            Err(SynthError::Configuration(_))
        ));
    }

    #[test]
    fn segments_are_concatenated() {
        let synth = Synth::builder()
            .sample_rate(8_000)
            .note_duration_ms(250)
            .build()
            .unwrap();
        let pitches = [
            Pitch::new(PitchClass::A, 4),
            Pitch::new(PitchClass::E, 2),
        ];
        let samples = synth.render(&pitches);
        assert_eq!(samples.len(), 2 * 2_000);
        assert!(samples.iter().all(|s| s.abs() == 0.5));
        assert!(synth.render(&[]).is_empty());
    }

    #[test]
    fn square_wave_period() {
        let synth = Synth::builder()
            .sample_rate(44_000)
            .note_duration_ms(100)
            .amplitude(1.0)
            .build()
            .unwrap();
        // A4 = 440 Hz: 100 samples per cycle, first half high
        let samples = synth.render(&[Pitch::new(PitchClass::A, 4)]);
        assert_eq!(samples[0], 1.0);
        assert_eq!(samples[49], 1.0);
        assert_eq!(samples[51], -1.0);
        assert_eq!(samples[99], -1.0);
        assert_eq!(samples[101], 1.0);
    }

    #[test]
    fn stems_join_names() {
        let pitches = [
            Pitch::new(PitchClass::A, 2),
            Pitch::new(PitchClass::Cs, 3),
            Pitch::new(PitchClass::E, 3),
        ];
        assert_eq!(file_stem(&pitches), "A2_C#3_E3");
        assert_eq!(file_stem(&[]), "");
    }

    #[test]
    fn export_rejects_empty() {
        let synth = Synth::default();
        assert!(matches!(
            synth.export(Path::new("unused"), &[]),
            Err(SynthError::EmptySequence)
        ));
    }
}
