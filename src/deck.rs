//! Deck
//!
//! Flashcard facts for practising the fretboard: one deck of single notes
//! and, per chord quality, one deck per root. Each card pairs a question
//! with a rendered board and the name of an exported audio clip. Packaging
//! cards into an archive is left to the caller.

use crate::fretboard::{find_chord, positions, ChordKind};
use crate::pitch::{Pitch, PitchClass};
use crate::render::FretboardRenderer;
use crate::synth::{Synth, SynthBuilder, SynthError};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Prefix shared by every deck name.
const DECK_ROOT: &str = "GuitarChords";

/// A single flashcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Front side, e.g. `"A Major"` or `"E2"`.
    pub question: String,
    /// Back side: the rendered board inside `<pre>`.
    pub answer: String,
    /// Sound reference, e.g. `"[sound:A2_C#3_E3.wav]"`.
    pub sound: String,
}

/// A named collection of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Hierarchical name, `::`-separated.
    pub name: String,
    /// Cards in presentation order.
    pub cards: Vec<Card>,
}

/// Generates decks, writing their audio clips into one directory.
pub struct DeckBuilder {
    audio_dir: PathBuf,
    renderer: FretboardRenderer,
    note_synth: Synth,
    chord_synth: Synth,
}

impl DeckBuilder {
    /// Create a builder exporting audio into `audio_dir`.
    ///
    /// Single notes last 2 s and chord arpeggios 750 ms per note.
    pub fn new(audio_dir: impl Into<PathBuf>) -> Self {
        DeckBuilder {
            audio_dir: audio_dir.into(),
            renderer: FretboardRenderer::new(),
            note_synth: SynthBuilder::new().note_duration_ms(2_000).finish(),
            chord_synth: Synth::default(),
        }
    }

    /// Set the board renderer.
    pub fn renderer(mut self, renderer: FretboardRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Set the synthesizer used for single-note cards.
    pub fn note_synth(mut self, synth: Synth) -> Self {
        self.note_synth = synth;
        self
    }

    /// Set the synthesizer used for chord cards.
    pub fn chord_synth(mut self, synth: Synth) -> Self {
        self.chord_synth = synth;
        self
    }

    /// One card per distinct pitch on the board, lowest first.
    pub fn note_deck(&self) -> Result<Deck, SynthError> {
        let pitches: BTreeSet<Pitch> = positions().map(|p| p.pitch()).collect();
        let cards = pitches
            .into_iter()
            .map(|pitch| self.card(pitch.to_string(), &[pitch], &self.note_synth))
            .collect::<Result<Vec<_>, _>>()?;

        let deck = Deck {
            name: format!("{DECK_ROOT}::Notes"),
            cards,
        };
        log::info!("built deck {} with {} cards", deck.name, deck.cards.len());
        Ok(deck)
    }

    /// One deck per root, A through G#, each holding that root's `kind` chord.
    pub fn chord_decks(&self, kind: ChordKind) -> Result<Vec<Deck>, SynthError> {
        PitchClass::ALL
            .iter()
            .map(|&root| -> Result<Deck, SynthError> {
                let mut pitches: Vec<Pitch> = find_chord(root, kind).into_iter().collect();
                pitches.sort_unstable();
                let card = self.card(format!("{root} {kind}"), &pitches, &self.chord_synth)?;
                let deck = Deck {
                    name: format!("{DECK_ROOT}::{kind}Chords::{root}"),
                    cards: vec![card],
                };
                log::info!("built deck {} ({} pitches)", deck.name, pitches.len());
                Ok(deck)
            })
            .collect()
    }

    fn card(
        &self,
        question: String,
        pitches: &[Pitch],
        synth: &Synth,
    ) -> Result<Card, SynthError> {
        let path = synth.export(&self.audio_dir, pitches)?;
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Card {
            question,
            answer: format!("<pre>{}</pre>", self.renderer.render_pitches(pitches)),
            sound: format!("[sound:{file}]"),
        })
    }
}
