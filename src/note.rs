use crate::pitch::{Pitch, Pitched};
use crate::tuning::{Tuning, TuningConfiguration};
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

pub const A4_NOTE: Note = Note { midi_number: 69 };

/// One of the 12 note names within an octave, ignoring the octave number.
///
/// Enharmonic spellings (C#/Db) share a single canonical chromatic index. Which spelling is
/// rendered is decided at display time via format flags (see the [`Display`] impl).
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

const PITCH_CLASSES: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

impl PitchClass {
    /// Canonical chromatic index with C = 0 and B = 11.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Retrieves the [`PitchClass`] for the given chromatic index.
    ///
    /// The operation is total: any integer is normalized into the range 0..12 first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::note::PitchClass;
    /// assert_eq!(PitchClass::from_index(0), PitchClass::C);
    /// assert_eq!(PitchClass::from_index(9), PitchClass::A);
    /// assert_eq!(PitchClass::from_index(12), PitchClass::C);
    /// assert_eq!(PitchClass::from_index(-3), PitchClass::A);
    /// ```
    pub fn from_index(index: i32) -> Self {
        PITCH_CLASSES[index.rem_euclid(12) as usize]
    }

    /// Moves `self` up or down the chromatic circle, wrapping around at the octave.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::note::PitchClass;
    /// assert_eq!(PitchClass::A.transposed_by(3), PitchClass::C);
    /// assert_eq!(PitchClass::C.transposed_by(-1), PitchClass::B);
    /// assert_eq!(PitchClass::G.transposed_by(0), PitchClass::G);
    /// ```
    pub fn transposed_by(self, semitones: i32) -> PitchClass {
        Self::from_index(i32::from(self.index()) + semitones)
    }

    /// Creates a [`Note`] from `self` and an octave number (scientific pitch notation, A4 = 440 Hz
    /// territory).
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::note::{Note, PitchClass};
    /// assert_eq!(PitchClass::C.in_octave(4), Note::from_midi_number(60));
    /// assert_eq!(PitchClass::A.in_octave(4), Note::from_midi_number(69));
    /// ```
    pub fn in_octave(self, octave: i32) -> Note {
        Note::from_midi_number((octave + 1) * 12 + i32::from(self.index()))
    }

    fn name(self, sign: Sign) -> String {
        let index = usize::from(self.index());
        let (sharp, flat) = (SHARP_NAMES[index], FLAT_NAMES[index]);
        match sign {
            Sign::Sharp => sharp.to_owned(),
            Sign::Flat => flat.to_owned(),
            Sign::Both if sharp == flat => sharp.to_owned(),
            Sign::Both => format!("{sharp}/{flat}"),
        }
    }
}

enum Sign {
    Sharp,
    Flat,
    Both,
}

fn sign_of(f: &Formatter) -> Sign {
    match (f.sign_plus(), f.sign_minus()) {
        (true, false) => Sign::Sharp,
        (false, true) => Sign::Flat,
        _ => Sign::Both,
    }
}

/// ```
/// # use tonality::note::PitchClass;
/// assert_eq!(PitchClass::D.to_string(), "D");
/// assert_eq!(PitchClass::CSharp.to_string(), "C#/Db");
///
/// // Format flags select the enharmonic spelling
/// assert_eq!(format!("{:+}", PitchClass::CSharp), "C#");
/// assert_eq!(format!("{:-}", PitchClass::CSharp), "Db");
/// assert_eq!(format!("{:>5}", PitchClass::E), "    E");
/// ```
impl Display for PitchClass {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(&self.name(sign_of(f)))
    }
}

/// [`PitchClass`]es parse from their conventional names, sharp or flat spelling alike.
///
/// # Examples
///
/// ```
/// # use tonality::note::PitchClass;
/// assert_eq!("C".parse(), Ok(PitchClass::C));
/// assert_eq!("F#".parse(), Ok(PitchClass::FSharp));
/// assert_eq!("Gb".parse(), Ok(PitchClass::FSharp));
/// assert_eq!(
///     "H".parse::<PitchClass>().unwrap_err(),
///     "Invalid pitch class 'H': Must be a note name like C, F# or Bb"
/// );
/// ```
impl FromStr for PitchClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let position = SHARP_NAMES
            .iter()
            .position(|name| *name == s)
            .or_else(|| FLAT_NAMES.iter().position(|name| *name == s));
        match position {
            Some(index) => Ok(PITCH_CLASSES[index]),
            None => Err(format!(
                "Invalid pitch class '{s}': Must be a note name like C, F# or Bb"
            )),
        }
    }
}

/// A musical note with a clearly defined chromatic location: a [`PitchClass`] plus an octave.
///
/// Internally, notes are stored as their MIDI note number, s.t. the total semitone offset from
/// the reference note A4 (MIDI 69) is well-defined and notes are totally ordered.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Note {
    midi_number: i32,
}

impl Note {
    pub fn from_midi_number(midi_number: i32) -> Self {
        Self { midi_number }
    }

    pub fn midi_number(self) -> i32 {
        self.midi_number
    }

    /// ```
    /// # use tonality::note::{Note, PitchClass};
    /// assert_eq!(Note::from_midi_number(69).pitch_class(), PitchClass::A);
    /// assert_eq!(Note::from_midi_number(-2).pitch_class(), PitchClass::ASharp);
    /// ```
    pub fn pitch_class(self) -> PitchClass {
        PitchClass::from_index(self.midi_number)
    }

    /// ```
    /// # use tonality::note::Note;
    /// assert_eq!(Note::from_midi_number(69).octave(), 4);
    /// assert_eq!(Note::from_midi_number(0).octave(), -1);
    /// ```
    pub fn octave(self) -> i32 {
        self.midi_number.div_euclid(12) - 1
    }

    /// Moves `self` by the given number of semitones, crossing octave boundaries as needed.
    ///
    /// Transposing by 0 is the identity and `transposed_by(k)` followed by `transposed_by(-k)`
    /// returns to the original note for any `k`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::note::{Note, PitchClass};
    /// let a4 = PitchClass::A.in_octave(4);
    /// assert_eq!(a4.transposed_by(12), PitchClass::A.in_octave(5));
    /// assert_eq!(a4.transposed_by(-10), PitchClass::B.in_octave(3));
    /// assert_eq!(a4.transposed_by(0), a4);
    /// ```
    pub fn transposed_by(self, semitones: i32) -> Note {
        Note::from_midi_number(self.midi_number + semitones)
    }

    /// Counts the number of semitones [left inclusive, right exclusive) between `self` and
    /// `other`.
    pub fn num_semitones_before(self, other: Note) -> i32 {
        other.midi_number - self.midi_number
    }
}

/// The pitch of a bare [`Note`] is evaluated at the default tuning, i.e. 12-tone equal
/// temperament with A4 sounding at 440 Hz.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use tonality::note::PitchClass;
/// # use tonality::pitch::Pitched;
/// assert_approx_eq!(PitchClass::A.in_octave(4).pitch().as_hz(), 440.0);
/// assert_approx_eq!(PitchClass::C.in_octave(4).pitch().as_hz(), 261.625565);
/// ```
impl Pitched for Note {
    fn pitch(self) -> Pitch {
        TuningConfiguration::default().pitch_of(self)
    }
}

/// ```
/// # use tonality::note::Note;
/// assert_eq!(Note::from_midi_number(0).to_string(), "C -1");
/// assert_eq!(Note::from_midi_number(69).to_string(), "A 4");
/// assert_eq!(Note::from_midi_number(70).to_string(), "A#/Bb 4");
///
/// // Format flags
/// assert_eq!(format!("{:+}", Note::from_midi_number(70)), "A# 4");
/// assert_eq!(format!("{:-}", Note::from_midi_number(70)), "Bb 4");
/// assert_eq!(format!("{:>10}", Note::from_midi_number(70)), "   A#/Bb 4");
/// ```
impl Display for Note {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(&format!(
            "{} {}",
            self.pitch_class().name(sign_of(f)),
            self.octave()
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pitch_classes_wrap_around_the_chromatic_circle() {
        for index in -36..36 {
            let pitch_class = PitchClass::from_index(index);
            assert_eq!(i32::from(pitch_class.index()), index.rem_euclid(12));
            assert_eq!(pitch_class.transposed_by(12), pitch_class);
            assert_eq!(pitch_class.transposed_by(-12), pitch_class);
        }
    }

    #[test]
    fn transposition_round_trip() {
        let a4 = PitchClass::A.in_octave(4);
        for k in -30..30 {
            assert_eq!(a4.transposed_by(k).transposed_by(-k), a4);
        }
    }

    #[test]
    fn note_splits_into_pitch_class_and_octave() {
        for midi_number in -24..144 {
            let note = Note::from_midi_number(midi_number);
            assert_eq!(note.pitch_class().in_octave(note.octave()), note);
        }
    }

    #[test]
    fn every_spelling_parses_to_its_canonical_index() {
        for index in 0..12 {
            let pitch_class = PitchClass::from_index(index);
            assert_eq!(SHARP_NAMES[index as usize].parse(), Ok(pitch_class));
            assert_eq!(FLAT_NAMES[index as usize].parse(), Ok(pitch_class));
        }
        assert!("c".parse::<PitchClass>().is_err());
        assert!("C##".parse::<PitchClass>().is_err());
        assert!("".parse::<PitchClass>().is_err());
    }
}
