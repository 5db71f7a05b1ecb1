//! # fretboard_chords
//!
//! A model of the six-string guitar fretboard in standard tuning: convert
//! between (string, fret) coordinates and octave-qualified pitches, compute
//! equal-tempered frequencies, and find every pitch on the board that belongs
//! to a chord.
//!
//! ## Example
//! ```rust
//! use fretboard_chords::{find_major_chord, resolve, FretboardRenderer, PitchClass};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) What does the A string sound at the 4th fret?
//!     let pitch = resolve(1, 4)?;
//!     println!("{pitch} at {:.2} Hz", pitch.frequency());
//!
//!     // 2) Every pitch of an A major triad, lowest first
//!     let mut chord: Vec<_> = find_major_chord(PitchClass::A).into_iter().collect();
//!     chord.sort();
//!
//!     // 3) Draw it
//!     print!("{}", FretboardRenderer::new().render_pitches(&chord));
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! The `synth` and `deck` modules turn pitch sequences into WAV clips and
//! flashcards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Pitch classes, pitches and frequencies.
pub use pitch::{calculate_frequency, pitch_class_name, Pitch, PitchClass, PitchError};

/// Fretboard geometry and chord search.
pub use fretboard::{
    find_chord, find_chord_positions, find_major_chord, find_minor_chord, positions,
    positions_of, resolve, ChordKind, FretboardError, GuitarString, Position,
};

/// Text diagrams.
pub use render::{FretboardRenderer, FretboardRendererBuilder, Marker};

/// Audio rendering.
pub use synth::{file_stem, Synth, SynthBuilder, SynthError};

/// Flashcard generation.
pub use deck::{Card, Deck, DeckBuilder};

/// Pitch model module.
pub mod pitch;

/// Fretboard model module.
pub mod fretboard;

/// Fretboard diagram module.
pub mod render;

/// Square-wave synthesis module.
pub mod synth;

/// Flashcard deck module.
pub mod deck;
