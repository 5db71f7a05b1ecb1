//! Fretboard
//!
//! Six-string guitar in standard tuning, open string through the twelfth
//! fret. Maps (string, fret) coordinates to pitches and searches the board
//! for every pitch belonging to a chord.

use crate::pitch::{Pitch, PitchClass, SEMITONES};
use std::collections::HashSet;
use std::fmt::Display;
use thiserror::Error;

/// Number of strings.
pub const NUM_STRINGS: usize = 6;

/// Highest fret on the modelled board.
pub const MAX_FRET: u8 = 12;

/// Frets per string including the open string.
const NUM_FRETS: usize = MAX_FRET as usize + 1;

/// Pitch class (0 = A) sounded at each fret, lowest string first.
const PITCH_CLASSES: [[u8; NUM_FRETS]; NUM_STRINGS] = [
    [7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5, 6, 7],   // E2
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0],   // A2
    [5, 6, 7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5],   // D3
    [10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10],  // G3
    [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 1, 2],   // B3
    [7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5, 6, 7],   // E4
];

/// Octave at each fret. Each row steps up once, where B rolls over to C.
const OCTAVES: [[u8; NUM_FRETS]; NUM_STRINGS] = [
    [2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3],
    [2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
    [3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4],
    [3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4],
    [3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
    [4, 4, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5],
];

/// Errors when addressing the fretboard
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FretboardError {
    /// String or fret index outside the board.
    #[error("invalid coordinate (string {string}, fret {fret}): expected string 0..=5, fret 0..=12")]
    InvalidCoordinate {
        /// The requested string index.
        string: u8,
        /// The requested fret index.
        fret: u8,
    },
}

/// The six strings, lowest (thickest) first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GuitarString {
    /// Low E (E2)
    LowE,
    /// A (A2)
    A,
    /// D (D3)
    D,
    /// G (G3)
    G,
    /// B (B3)
    B,
    /// High E (E4)
    HighE,
}

impl GuitarString {
    /// All strings, lowest first.
    pub const ALL: [GuitarString; NUM_STRINGS] = [
        GuitarString::LowE,
        GuitarString::A,
        GuitarString::D,
        GuitarString::G,
        GuitarString::B,
        GuitarString::HighE,
    ];

    /// Convert a string index (0 = low E) into a string.
    pub const fn from_index(idx: u8) -> Option<GuitarString> {
        if (idx as usize) < NUM_STRINGS {
            Some(Self::ALL[idx as usize])
        } else {
            None
        }
    }

    /// String index, 0 = low E.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Pitch of the open string.
    pub fn open_pitch(self) -> Pitch {
        Position { string: self, fret: 0 }.pitch()
    }

    /// Pitch class of the open string.
    pub fn open_class(self) -> PitchClass {
        self.open_pitch().class
    }
}

/// A validated (string, fret) coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    string: GuitarString,
    fret: u8,
}

impl Position {
    /// Create a position, failing if `fret > 12`.
    pub fn new(string: GuitarString, fret: u8) -> Result<Self, FretboardError> {
        if fret > MAX_FRET {
            return Err(FretboardError::InvalidCoordinate {
                string: string.index(),
                fret,
            });
        }
        Ok(Position { string, fret })
    }

    /// The string.
    pub fn string(&self) -> GuitarString {
        self.string
    }

    /// The fret, 0 = open.
    pub fn fret(&self) -> u8 {
        self.fret
    }

    /// The pitch sounded here.
    pub fn pitch(&self) -> Pitch {
        let (s, f) = (self.string as usize, self.fret as usize);
        let class = PitchClass::ALL[PITCH_CLASSES[s][f] as usize];
        Pitch::new(class, OCTAVES[s][f])
    }
}

/// Pitch sounded at `string` (0 = low E) and `fret` (0 = open).
///
/// Returns `Err(FretboardError::InvalidCoordinate)` if `string > 5` or `fret > 12`.
pub fn resolve(string: u8, fret: u8) -> Result<Pitch, FretboardError> {
    let guitar_string =
        GuitarString::from_index(string).ok_or(FretboardError::InvalidCoordinate { string, fret })?;
    Ok(Position::new(guitar_string, fret)?.pitch())
}

/// Every coordinate on the board, string by string from the low E, frets ascending.
pub fn positions() -> impl Iterator<Item = Position> {
    GuitarString::ALL
        .into_iter()
        .flat_map(|string| (0..=MAX_FRET).map(move |fret| Position { string, fret }))
}

/// Every coordinate sounding exactly `pitch`.
pub fn positions_of(pitch: Pitch) -> Vec<Position> {
    positions().filter(|p| p.pitch() == pitch).collect()
}

/// Every distinct pitch on the board whose class is `root` plus one of `intervals`.
///
/// Intervals are semitone offsets reduced modulo 12. Pitches reachable from
/// several coordinates appear once. An empty formula matches nothing.
pub fn find_chord_positions(root: PitchClass, intervals: &[u8]) -> HashSet<Pitch> {
    let targets: HashSet<PitchClass> = intervals
        .iter()
        .map(|&i| root.transpose(i % SEMITONES))
        .collect();
    if targets.is_empty() {
        return HashSet::new();
    }

    positions()
        .map(|p| p.pitch())
        .filter(|pitch| targets.contains(&pitch.class))
        .collect()
}

/// Every pitch on the board belonging to the major triad on `root`.
pub fn find_major_chord(root: PitchClass) -> HashSet<Pitch> {
    find_chord(root, ChordKind::Major)
}

/// Every pitch on the board belonging to the minor triad on `root`.
pub fn find_minor_chord(root: PitchClass) -> HashSet<Pitch> {
    find_chord(root, ChordKind::Minor)
}

/// Every pitch on the board belonging to the `kind` triad on `root`.
pub fn find_chord(root: PitchClass, kind: ChordKind) -> HashSet<Pitch> {
    find_chord_positions(root, kind.intervals())
}

/// Supported triad qualities
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChordKind {
    /// Major triad (e.g., A-C#-E)
    Major,
    /// Minor triad (e.g., A-C-E)
    Minor,
}

impl ChordKind {
    /// Both qualities.
    pub const ALL: [ChordKind; 2] = [ChordKind::Major, ChordKind::Minor];

    /// Semitone offsets from the root.
    pub const fn intervals(self) -> &'static [u8] {
        match self {
            ChordKind::Major => &[0, 4, 7],
            ChordKind::Minor => &[0, 3, 7],
        }
    }
}

impl Display for ChordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
