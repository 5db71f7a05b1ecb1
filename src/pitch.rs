//! Pitch
//!
//! The twelve pitch classes, octave-qualified pitches and their
//! equal-tempered frequencies (A4 = 440 Hz).

use std::cmp::Ordering;
use std::fmt::Display;
use thiserror::Error;

/// Number of pitch classes in the chromatic cycle.
pub const SEMITONES: u8 = 12;

/// Reference pitch A4 in Hz.
const A4_FREQUENCY: f64 = 440.0;

/// Key number of A4 on an 88-key piano.
const A4_KEY_NUMBER: i32 = 49;

/// Sharp-only spelling, indexed by pitch class.
const NAMES: [&str; SEMITONES as usize] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Errors for out-of-range pitch input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PitchError {
    /// The pitch class was not in `0..=11`.
    #[error("invalid pitch class {got}: expected 0..=11")]
    InvalidPitchClass {
        /// The rejected value.
        got: u8,
    },
}

/// Twelve chromatic pitch classes, starting from A.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    /// A
    A,
    /// A sharp / B flat
    As,
    /// B
    B,
    /// C
    C,
    /// C sharp / D flat
    Cs,
    /// D
    D,
    /// D sharp / E flat
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    Fs,
    /// G
    G,
    /// G sharp / A flat
    Gs,
}

impl PitchClass {
    /// All pitch classes in cycle order, A first.
    pub const ALL: [PitchClass; SEMITONES as usize] = [
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
    ];

    /// Convert an index in `0..=11` (0 = A) to a pitch class.
    pub const fn from_index(idx: u8) -> Result<PitchClass, PitchError> {
        if idx < SEMITONES {
            Ok(Self::ALL[idx as usize])
        } else {
            Err(PitchError::InvalidPitchClass { got: idx })
        }
    }

    /// Position in the cycle, 0 = A.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sharp-only display name, e.g. `"C#"`.
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Step `semitones` up the cycle, wrapping modulo 12.
    pub const fn transpose(self, semitones: u8) -> PitchClass {
        let idx = (self.index() as u16 + semitones as u16) % SEMITONES as u16;
        Self::ALL[idx as usize]
    }

    /// Semitones above C within an octave, counting C as 1 and B as 12.
    const fn c_relative(self) -> u8 {
        (self.index() + 9) % SEMITONES + 1
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for PitchClass {
    type Error = PitchError;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        PitchClass::from_index(idx)
    }
}

/// A pitch class in a specific octave.
///
/// Octaves follow scientific pitch notation: the number changes between
/// B and C, so B3 is directly followed by C4.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pitch {
    /// The pitch class.
    pub class: PitchClass,
    /// The octave number.
    pub octave: u8,
}

impl Pitch {
    /// Create a pitch.
    pub const fn new(class: PitchClass, octave: u8) -> Self {
        Pitch { class, octave }
    }

    /// Key number on an 88-key piano: A0 = 1, C4 = 40, A4 = 49.
    ///
    /// Signed because octave 0 below A0 goes negative.
    pub const fn key_number(&self) -> i32 {
        12 * (self.octave as i32 - 1) + self.class.c_relative() as i32 + 3
    }

    /// Equal-tempered frequency in Hz.
    pub fn frequency(&self) -> f64 {
        let steps = (self.key_number() - A4_KEY_NUMBER) as f64;
        2f64.powf(steps / 12.0) * A4_FREQUENCY
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key_number().cmp(&other.key_number())
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}

/// Frequency in Hz of `pitch_class` (0 = A) in `octave`.
///
/// Returns `Err(PitchError::InvalidPitchClass)` if `pitch_class > 11`.
pub fn calculate_frequency(pitch_class: u8, octave: u8) -> Result<f64, PitchError> {
    let class = PitchClass::from_index(pitch_class)?;
    Ok(Pitch::new(class, octave).frequency())
}

/// Sharp-only name of `pitch_class` (0 = A).
///
/// Returns `Err(PitchError::InvalidPitchClass)` if `pitch_class > 11`.
pub fn pitch_class_name(pitch_class: u8) -> Result<&'static str, PitchError> {
    Ok(PitchClass::from_index(pitch_class)?.name())
}
