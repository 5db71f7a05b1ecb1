//! Render
//!
//! Plain-text fretboard diagrams. Frets 1 through 12 are drawn as cells,
//! each string labelled with its open note:
//!
//! ```text
//!     1    2    3    4    5    6    7    8    9   10   11   12
//!    ---  ---  ---  ---  ---  ---  ---  ---  ---  ---  ---  ---
//! E|   ||   ||   ||   ||4A ||   ||   ||   ||   ||   ||   ||   |
//! ```

use crate::fretboard::{positions, GuitarString, MAX_FRET};
use crate::pitch::{Pitch, PitchClass};
use std::fmt::Write;

/// Something to highlight on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Every occurrence of a pitch class, in any octave. Labelled `" A"`.
    Class(PitchClass),
    /// One exact pitch. Labelled with octave then name, `"4A"`.
    Pitch(Pitch),
}

impl Marker {
    fn label(&self) -> String {
        match self {
            Marker::Class(class) => format!(" {class}"),
            Marker::Pitch(pitch) => format!("{}{}", pitch.octave, pitch.class),
        }
    }

    fn matches(&self, pitch: Pitch) -> bool {
        match self {
            Marker::Class(class) => pitch.class == *class,
            Marker::Pitch(p) => pitch == *p,
        }
    }
}

impl From<Pitch> for Marker {
    fn from(pitch: Pitch) -> Self {
        Marker::Pitch(pitch)
    }
}

impl From<PitchClass> for Marker {
    fn from(class: PitchClass) -> Self {
        Marker::Class(class)
    }
}

/// Builder for `FretboardRenderer`
pub struct FretboardRendererBuilder {
    highest_string_first: bool,
}

impl FretboardRendererBuilder {
    /// Start with the high E string on the top line.
    pub fn new() -> Self {
        FretboardRendererBuilder {
            highest_string_first: true,
        }
    }

    /// Draw the high E string on top (`true`) or the low E string on top (`false`).
    pub fn highest_string_first(mut self, value: bool) -> Self {
        self.highest_string_first = value;
        self
    }

    /// Build the `FretboardRenderer`
    pub fn build(self) -> FretboardRenderer {
        FretboardRenderer {
            highest_string_first: self.highest_string_first,
        }
    }
}

impl Default for FretboardRendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws text fretboards.
#[derive(Debug, Clone)]
pub struct FretboardRenderer {
    highest_string_first: bool,
}

impl FretboardRenderer {
    /// Return a builder to customize layout
    pub fn builder() -> FretboardRendererBuilder {
        FretboardRendererBuilder::new()
    }

    /// Create a renderer with the high E string on top
    pub fn new() -> Self {
        FretboardRendererBuilder::new().build()
    }

    /// Draw the board with `markers` highlighted.
    ///
    /// When several markers land on the same cell the last one wins.
    /// Open strings are never highlighted.
    pub fn render(&self, markers: &[Marker]) -> String {
        let mut cells: Vec<Vec<Option<String>>> =
            vec![vec![None; MAX_FRET as usize + 1]; GuitarString::ALL.len()];
        for position in positions() {
            let pitch = position.pitch();
            let label = markers.iter().rev().find(|m| m.matches(pitch)).map(Marker::label);
            cells[position.string().index() as usize][position.fret() as usize] = label;
        }

        let rule = format!("  {}", " --- ".repeat(MAX_FRET as usize));
        let mut out = String::new();
        for fret in 1..=MAX_FRET {
            // writing into a String cannot fail
            let _ = write!(out, "{fret:5}");
        }
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');

        let mut strings = GuitarString::ALL;
        if self.highest_string_first {
            strings.reverse();
        }
        for string in strings {
            out.push_str(string.open_class().name());
            for cell in &cells[string.index() as usize][1..] {
                match cell {
                    Some(label) => {
                        let _ = write!(out, "|{label:3}|");
                    }
                    None => out.push_str("|   |"),
                }
            }
            out.push('\n');
        }

        out.push_str(&rule);
        out.push('\n');
        out
    }

    /// Draw the board with each of `pitches` highlighted at its exact octave.
    pub fn render_pitches<'a, I>(&self, pitches: I) -> String
    where
        I: IntoIterator<Item = &'a Pitch>,
    {
        let markers: Vec<Marker> = pitches.into_iter().copied().map(Marker::from).collect();
        self.render(&markers)
    }
}

impl Default for FretboardRenderer {
    fn default() -> Self {
        FretboardRenderer::new()
    }
}
