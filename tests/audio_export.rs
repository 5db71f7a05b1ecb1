//! Integration tests for WAV export and flashcard deck generation.

use fretboard_chords::{
    file_stem, find_minor_chord, ChordKind, DeckBuilder, Pitch, PitchClass, Synth, SynthError,
};
use rustfft::{num_complex::Complex, FftPlanner};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn load_wav_mono_f32(path: &Path) -> (Vec<f32>, u32) {
    let mut reader = hound::WavReader::open(path).expect("failed to open .wav file");
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    let samples = reader
        .samples::<i16>()
        .map(|s| s.expect("decode error") as f32 / i16::MAX as f32)
        .collect();
    (samples, spec.sample_rate)
}

/// Gather all .wav files under `dir`
fn collect_wavs(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| e.path().to_path_buf())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("wav"))
        .collect();
    files.sort();
    files
}

/// Frequency of the strongest FFT bin
fn dominant_frequency(samples: &[f32], sample_rate: u32) -> f32 {
    let mut buffer: Vec<Complex<f32>> = samples.iter().map(|&s| Complex { re: s, im: 0.0 }).collect();
    let fft = FftPlanner::<f32>::new().plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    let (peak, _) = buffer[1..buffer.len() / 2]
        .iter()
        .map(|c| c.norm_sqr())
        .enumerate()
        .fold((0, 0.0_f32), |best, (i, m)| if m > best.1 { (i, m) } else { best });
    (peak + 1) as f32 * sample_rate as f32 / samples.len() as f32
}

#[test]
fn exported_tone_has_the_right_pitch() {
    let tmp = tempfile::tempdir().unwrap();
    // one second per note: 1 Hz FFT bins
    let synth = Synth::builder()
        .sample_rate(22_050)
        .note_duration_ms(1_000)
        .build()
        .unwrap();

    for pitch in [
        Pitch::new(PitchClass::E, 2),
        Pitch::new(PitchClass::A, 4),
        Pitch::new(PitchClass::E, 5),
    ] {
        let path = synth.export(tmp.path(), &[pitch]).unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), format!("{pitch}.wav"));

        let (samples, rate) = load_wav_mono_f32(&path);
        assert_eq!(rate, 22_050);
        assert_eq!(samples.len(), 22_050);

        let measured = dominant_frequency(&samples, rate);
        let expected = pitch.frequency() as f32;
        assert!(
            (measured - expected).abs() <= 1.0,
            "{pitch}: expected {expected:.2} Hz, measured {measured:.2} Hz"
        );
    }
}

#[test]
fn chord_clip_plays_pitches_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let synth = Synth::builder()
        .sample_rate(8_000)
        .note_duration_ms(500)
        .build()
        .unwrap();
    let mut chord: Vec<Pitch> = find_minor_chord(PitchClass::E).into_iter().collect();
    chord.sort();

    let path = synth.export(&tmp.path().join("nested/audio"), &chord).unwrap();
    assert_eq!(
        path.file_stem().unwrap().to_str().unwrap(),
        file_stem(&chord)
    );
    assert!(file_stem(&chord).starts_with("E2_G2_B2_E3"));

    let (samples, _) = load_wav_mono_f32(&path);
    assert_eq!(samples.len(), chord.len() * synth.samples_per_note());
}

#[test]
fn empty_sequence_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let err = Synth::default().export(tmp.path(), &[]).unwrap_err();
    assert!(matches!(err, SynthError::EmptySequence));
    assert!(collect_wavs(tmp.path()).is_empty());
}

#[test]
fn decks_reference_exported_audio() {
    let tmp = tempfile::tempdir().unwrap();
    let fast = Synth::builder()
        .sample_rate(4_000)
        .note_duration_ms(10)
        .build()
        .unwrap();
    let builder = DeckBuilder::new(tmp.path())
        .note_synth(fast.clone())
        .chord_synth(fast);

    let notes = builder.note_deck().unwrap();
    assert_eq!(notes.name, "GuitarChords::Notes");
    assert_eq!(notes.cards.len(), 37);
    assert_eq!(notes.cards[0].question, "E2");
    assert_eq!(notes.cards[36].question, "E5");
    assert_eq!(notes.cards[0].sound, "[sound:E2.wav]");
    assert!(notes.cards[1].answer.starts_with("<pre>"));
    // F2 only sounds at the low E string's first fret
    assert_eq!(notes.cards[1].answer.matches("|2F |").count(), 1);

    let mut decks = builder.chord_decks(ChordKind::Major).unwrap();
    decks.extend(builder.chord_decks(ChordKind::Minor).unwrap());
    assert_eq!(decks.len(), 24);
    assert_eq!(decks[0].name, "GuitarChords::MajorChords::A");
    assert_eq!(decks[0].cards[0].question, "A Major");
    assert_eq!(decks[13].name, "GuitarChords::MinorChords::A#");
    assert_eq!(decks[13].cards[0].question, "A# Minor");

    let files = collect_wavs(tmp.path());
    assert_eq!(files.len(), 37 + 24);
    for card in notes.cards.iter().chain(decks.iter().flat_map(|d| d.cards.iter())) {
        let name = card
            .sound
            .strip_prefix("[sound:")
            .and_then(|s| s.strip_suffix(']'))
            .unwrap();
        assert!(tmp.path().join(name).is_file(), "missing {name}");
    }
}
