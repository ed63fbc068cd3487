//! End-to-end properties spanning the pitch, scale and interval modules.

use assert_approx_eq::assert_approx_eq;
use tonality::interval::{Interval, IntervalQuality};
use tonality::note::{Note, PitchClass};
use tonality::pitch::{Pitch, Pitched};
use tonality::ratio::Ratio;
use tonality::scale::{IntervalFormula, Scale};
use tonality::tuning::{Temperament, Tuning, TuningConfiguration};

#[test]
fn every_rotation_of_the_major_formula_yields_an_eight_note_scale_on_any_root() {
    for root_index in 0..12 {
        let root = PitchClass::from_index(root_index);
        for rotation in 0..12 {
            let scale = Scale::new(root, IntervalFormula::major().rotated(rotation));
            let degrees: Vec<_> = scale.degrees().collect();
            assert_eq!(degrees.len(), 8);
            assert_eq!(degrees.first(), Some(&root));
            assert_eq!(degrees.last(), Some(&root));
        }
    }
}

#[test]
fn transposition_round_trips_for_any_semitone_count() {
    for midi_number in [0, 60, 69, 127] {
        let note = Note::from_midi_number(midi_number);
        for k in -36..36 {
            assert_eq!(note.transposed_by(k).transposed_by(-k), note);
        }
    }
}

#[test]
fn frequency_is_strictly_monotonic_in_the_semitone_offset() {
    for temperament in [
        Temperament::EqualTemperament,
        Temperament::JustIntonation,
        Temperament::Pythagorean,
        Temperament::Meantone,
        Temperament::WellTemperament,
    ] {
        let tuning = TuningConfiguration::new(temperament, 440.0).unwrap();
        let frequencies: Vec<_> = (0..128)
            .map(|midi_number| tuning.pitch_of(Note::from_midi_number(midi_number)).as_hz())
            .collect();
        assert!(frequencies.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn cents_between_frequencies() {
    for hz in [110.0, 261.63, 440.0, 880.0] {
        let pitch = Pitch::from_hz(hz);
        assert_approx_eq!(Ratio::between_pitches(pitch, pitch).as_cents(), 0.0);
        assert_approx_eq!(
            Ratio::between_pitches(pitch, Pitch::from_hz(2.0 * hz)).as_cents(),
            1200.0
        );
        assert_approx_eq!(
            Ratio::between_pitches(Pitch::from_hz(2.0 * hz), pitch).as_cents(),
            -1200.0
        );
    }
}

#[test]
fn a4_sounds_at_the_reference_and_doubles_per_octave() {
    let a4 = PitchClass::A.in_octave(4);
    assert_approx_eq!(a4.pitch().as_hz(), 440.0);
    assert_approx_eq!(a4.transposed_by(12).pitch().as_hz(), 880.0);
    assert_approx_eq!(a4.transposed_by(-12).pitch().as_hz(), 220.0);
}

#[test]
fn c_major_spells_the_natural_notes() {
    let spelled: Vec<_> = Scale::new(PitchClass::C, IntervalFormula::major())
        .degrees()
        .map(|pitch_class| pitch_class.to_string())
        .collect();
    assert_eq!(spelled, ["C", "D", "E", "F", "G", "A", "B", "C"]);
}

#[test]
fn the_fifth_is_perfect_and_approximates_three_halves() {
    let fifth = Interval::from_semitones(7);
    assert_eq!(fifth.quality(), IntervalQuality::Perfect);
    assert_eq!(fifth.just_ratio(), (3, 2));
}

#[test]
fn relative_and_parallel_dorian_of_c_major() {
    let major = IntervalFormula::major();

    let d_dorian = Scale::relative_mode(PitchClass::C, &major, 1).unwrap();
    let degrees: Vec<_> = d_dorian.degrees().collect();
    assert_eq!(
        degrees,
        [
            PitchClass::D,
            PitchClass::E,
            PitchClass::F,
            PitchClass::G,
            PitchClass::A,
            PitchClass::B,
            PitchClass::C,
            PitchClass::D,
        ]
    );

    let c_dorian = Scale::parallel_mode(PitchClass::C, &major, 1).unwrap();
    let degrees: Vec<_> = c_dorian.degrees().collect();
    assert_eq!(
        degrees,
        [
            PitchClass::C,
            PitchClass::D,
            PitchClass::DSharp,
            PitchClass::F,
            PitchClass::G,
            PitchClass::A,
            PitchClass::ASharp,
            PitchClass::C,
        ]
    );
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let tuning = TuningConfiguration::new(Temperament::Meantone, 432.0).unwrap();
    let note = PitchClass::FSharp.in_octave(3);
    assert_eq!(
        tuning.pitch_of(note).as_hz().to_bits(),
        tuning.pitch_of(note).as_hz().to_bits()
    );

    let scale = Scale::relative_mode(PitchClass::E, &IntervalFormula::melodic_minor(), 2).unwrap();
    assert_eq!(
        scale.degrees().collect::<Vec<_>>(),
        scale.degrees().collect::<Vec<_>>()
    );

    let interval = Interval::between(note, PitchClass::A.in_octave(4));
    assert_eq!(interval.name(true), interval.name(true));
}
