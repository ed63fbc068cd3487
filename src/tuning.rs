//! Tuning systems mapping notes to frequencies and back.

use crate::note::{Note, PitchClass, A4_NOTE};
use crate::pitch::{Pitch, A4_PITCH};
use crate::ratio::Ratio;
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

/// A [`Tuning`] maps notes or, in general, addresses of type `N` to a [`Pitch`] or vice versa.
pub trait Tuning<N> {
    /// Finds the [`Pitch`] for the given note or address.
    fn pitch_of(&self, note_or_address: N) -> Pitch;

    /// Finds the closest note or address for the given [`Pitch`].
    fn find_by_pitch(&self, pitch: Pitch) -> Approximation<N>;
}

/// The result of an inverse (frequency to note) lookup.
///
/// The `deviation` is the distance of the input pitch from the pitch of `approx_value`, positive
/// when the input is sharp of it.
#[derive(Copy, Clone, Debug)]
pub struct Approximation<N> {
    pub approx_value: N,
    pub deviation: Ratio,
}

/// 5-limit just intonation, indexed by chromatic distance from the tonic C.
///
/// Doubles as the canonical ratio-approximation table of the interval classifier.
pub(crate) const JUST_RATIOS: [(u32, u32); 12] = [
    (1, 1),   // C
    (16, 15), // C#/Db
    (9, 8),   // D
    (6, 5),   // D#/Eb
    (5, 4),   // E
    (4, 3),   // F
    (45, 32), // F#/Gb
    (3, 2),   // G
    (8, 5),   // G#/Ab
    (5, 3),   // A
    (16, 9),  // A#/Bb
    (15, 8),  // B
];

/// Pythagorean tuning, a chain of pure 3/2 fifths around the tonic C.
const PYTHAGOREAN_RATIOS: [(u32, u32); 12] = [
    (1, 1),     // C
    (256, 243), // C#/Db
    (9, 8),     // D
    (32, 27),   // D#/Eb
    (81, 64),   // E
    (4, 3),     // F
    (729, 512), // F#/Gb
    (3, 2),     // G
    (128, 81),  // G#/Ab
    (27, 16),   // A
    (16, 9),    // A#/Bb
    (243, 128), // B
];

/// Quarter-comma meantone: eleven fifths of size 5^(1/4) (696.578 cents) from Eb to G#.
/// Major thirds come out pure at the cost of a wolf fifth on G#-Eb.
const MEANTONE_CENTS: [f64; 12] = [
    0.0, 76.049, 193.157, 310.265, 386.314, 503.422, 579.471, 696.578, 772.627, 889.735,
    1006.843, 1082.892,
];

/// Werckmeister III, the classic circulating well temperament.
const WERCKMEISTER_CENTS: [f64; 12] = [
    0.0, 90.225, 192.18, 294.135, 390.225, 498.045, 588.27, 696.09, 792.18, 888.27, 996.09,
    1092.18,
];

/// Historical A4 reference frequencies as they appear in pitch-standard charts.
pub const PITCH_STANDARDS: [(&str, f64); 8] = [
    ("Baroque Pitch", 415.0),
    ("Classical Pitch", 430.0),
    ("Scientific Pitch", 430.54),
    ("Verdi Pitch", 432.0),
    ("Modern Standard Pitch", 440.0),
    ("Boston Symphony Pitch", 441.0),
    ("Berlin Philharmonic Pitch", 443.0),
    ("New Philharmonic Pitch", 452.0),
];

/// The supported octave-repeating tuning systems.
///
/// Each system determines a fixed cents offset per pitch class relative to the tonic C. The
/// absolute frequency scale is set by the [`TuningConfiguration`] which anchors A4 to the
/// configured reference frequency in every system.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Temperament {
    /// 12 equal logarithmic steps of 100 cents per octave.
    #[default]
    EqualTemperament,
    /// 5-limit just intonation built from small-integer frequency ratios.
    JustIntonation,
    /// A chain of pure 3/2 fifths.
    Pythagorean,
    /// Quarter-comma meantone with pure major thirds.
    Meantone,
    /// Werckmeister III circulating temperament.
    WellTemperament,
}

impl Temperament {
    /// The cents offset of the given pitch class above the tonic C within one octave.
    ///
    /// # Examples
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use tonality::note::PitchClass;
    /// # use tonality::tuning::Temperament;
    /// assert_approx_eq!(
    ///     Temperament::EqualTemperament.cents_above_tonic(PitchClass::G),
    ///     700.0
    /// );
    /// assert_approx_eq!(
    ///     Temperament::Pythagorean.cents_above_tonic(PitchClass::G),
    ///     701.955,
    ///     0.001
    /// );
    /// assert_approx_eq!(
    ///     Temperament::JustIntonation.cents_above_tonic(PitchClass::E),
    ///     386.314,
    ///     0.001
    /// );
    /// ```
    pub fn cents_above_tonic(self, pitch_class: PitchClass) -> f64 {
        let index = usize::from(pitch_class.index());
        match self {
            Temperament::EqualTemperament => f64::from(pitch_class.index()) * 100.0,
            Temperament::JustIntonation => ratio_as_cents(JUST_RATIOS[index]),
            Temperament::Pythagorean => ratio_as_cents(PYTHAGOREAN_RATIOS[index]),
            Temperament::Meantone => MEANTONE_CENTS[index],
            Temperament::WellTemperament => WERCKMEISTER_CENTS[index],
        }
    }
}

fn ratio_as_cents((numer, denom): (u32, u32)) -> f64 {
    Ratio::from_float(f64::from(numer) / f64::from(denom)).as_cents()
}

impl Display for Temperament {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            Temperament::EqualTemperament => "equal temperament",
            Temperament::JustIntonation => "just intonation",
            Temperament::Pythagorean => "Pythagorean tuning",
            Temperament::Meantone => "quarter-comma meantone",
            Temperament::WellTemperament => "well temperament (Werckmeister III)",
        };
        f.pad(name)
    }
}

/// [`Temperament`]s parse from the identifiers UI widgets pass around.
///
/// Unknown identifiers are a configuration error, not a silent default.
///
/// # Examples
///
/// ```
/// # use tonality::tuning::Temperament;
/// assert_eq!("equal".parse(), Ok(Temperament::EqualTemperament));
/// assert_eq!("Just Intonation".parse(), Ok(Temperament::JustIntonation));
/// assert_eq!("werckmeister".parse(), Ok(Temperament::WellTemperament));
/// assert_eq!(
///     "stretched".parse::<Temperament>().unwrap_err(),
///     "Invalid tuning system 'stretched': Must be one of equal, just, pythagorean, meantone or well"
/// );
/// ```
impl FromStr for Temperament {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equal" | "equal temperament" | "12-edo" => Ok(Temperament::EqualTemperament),
            "just" | "just intonation" => Ok(Temperament::JustIntonation),
            "pythagorean" => Ok(Temperament::Pythagorean),
            "meantone" | "quarter-comma meantone" => Ok(Temperament::Meantone),
            "well" | "well temperament" | "werckmeister" | "werckmeister iii" => {
                Ok(Temperament::WellTemperament)
            }
            _ => Err(format!(
                "Invalid tuning system '{s}': Must be one of equal, just, pythagorean, meantone or well"
            )),
        }
    }
}

/// An immutable tuning configuration: one active [`Temperament`] plus the reference frequency of
/// A4.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use tonality::note::Note;
/// # use tonality::tuning::{Temperament, Tuning, TuningConfiguration};
/// let c4 = Note::from_midi_number(60);
/// let a4 = Note::from_midi_number(69);
///
/// let standard = TuningConfiguration::default();
/// assert_approx_eq!(standard.pitch_of(c4).as_hz(), 261.625565);
/// assert_approx_eq!(standard.pitch_of(a4).as_hz(), 440.0);
///
/// let verdi = TuningConfiguration::new(Temperament::EqualTemperament, 432.0).unwrap();
/// assert_approx_eq!(verdi.pitch_of(c4).as_hz(), 256.868737);
/// assert_approx_eq!(verdi.pitch_of(a4).as_hz(), 432.0);
///
/// let just = TuningConfiguration::new(Temperament::JustIntonation, 440.0).unwrap();
/// assert_approx_eq!(just.pitch_of(c4).as_hz(), 264.0);
/// assert_approx_eq!(just.pitch_of(a4).as_hz(), 440.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TuningConfiguration {
    temperament: Temperament,
    a4_hz: f64,
}

impl TuningConfiguration {
    /// Creates a configuration, rejecting non-positive or non-finite reference frequencies.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::tuning::{Temperament, TuningConfiguration, TuningError};
    /// assert!(TuningConfiguration::new(Temperament::EqualTemperament, 415.0).is_ok());
    /// assert_eq!(
    ///     TuningConfiguration::new(Temperament::EqualTemperament, 0.0),
    ///     Err(TuningError::InvalidReferenceFrequency(0.0))
    /// );
    /// ```
    pub fn new(temperament: Temperament, a4_hz: f64) -> Result<Self, TuningError> {
        if a4_hz.is_finite() && a4_hz > 0.0 {
            Ok(Self { temperament, a4_hz })
        } else {
            Err(TuningError::InvalidReferenceFrequency(a4_hz))
        }
    }

    pub fn temperament(&self) -> Temperament {
        self.temperament
    }

    pub fn a4_pitch(&self) -> Pitch {
        Pitch::from_hz(self.a4_hz)
    }

    /// The cents offset of the given note above A4 under this configuration.
    ///
    /// All temperaments are anchored at A4, s.t. the reference note sounds at the reference
    /// frequency no matter which system is active.
    fn cents_above_a4(&self, note: Note) -> f64 {
        self.temperament.cents_above_tonic(note.pitch_class())
            - self.temperament.cents_above_tonic(PitchClass::A)
            + f64::from(note.octave() - A4_NOTE.octave()) * 1200.0
    }
}

/// The default configuration is 12-tone equal temperament with A4 sounding at 440 Hz.
impl Default for TuningConfiguration {
    fn default() -> Self {
        Self {
            temperament: Temperament::default(),
            a4_hz: A4_PITCH.as_hz(),
        }
    }
}

impl Tuning<Note> for TuningConfiguration {
    fn pitch_of(&self, note: Note) -> Pitch {
        self.a4_pitch() * Ratio::from_cents(self.cents_above_a4(note))
    }

    fn find_by_pitch(&self, pitch: Pitch) -> Approximation<Note> {
        let total_cents = Ratio::between_pitches(self.a4_pitch(), pitch).as_cents();

        // Degrees of the non-equal systems deviate from 100-cents spacing by far less than a
        // whole step, so the best match is always near the equal-tempered guess.
        let guess = A4_NOTE.midi_number() + (total_cents / 100.0).round() as i32;
        let best = (guess - 2..=guess + 2)
            .map(Note::from_midi_number)
            .min_by(|a, b| {
                let deviation_of = |note: &Note| (total_cents - self.cents_above_a4(*note)).abs();
                deviation_of(a).total_cmp(&deviation_of(b))
            })
            .unwrap_or(A4_NOTE);

        Approximation {
            approx_value: best,
            deviation: Ratio::from_cents(total_cents - self.cents_above_a4(best)),
        }
    }
}

/// Convenience implementation enabling to write `()` instead of
/// [`TuningConfiguration`]`::default()`.
impl Tuning<Note> for () {
    fn pitch_of(&self, note: Note) -> Pitch {
        TuningConfiguration::default().pitch_of(note)
    }

    fn find_by_pitch(&self, pitch: Pitch) -> Approximation<Note> {
        TuningConfiguration::default().find_by_pitch(pitch)
    }
}

/// Configuration errors reported at the boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum TuningError {
    /// The reference frequency was zero, negative or not finite.
    InvalidReferenceFrequency(f64),
}

impl Display for TuningError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TuningError::InvalidReferenceFrequency(hz) => {
                write!(f, "Reference frequency must be finite and positive but was {hz}")
            }
        }
    }
}

impl Error for TuningError {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pitch::Pitched;
    use assert_approx_eq::assert_approx_eq;

    const ALL_TEMPERAMENTS: [Temperament; 5] = [
        Temperament::EqualTemperament,
        Temperament::JustIntonation,
        Temperament::Pythagorean,
        Temperament::Meantone,
        Temperament::WellTemperament,
    ];

    #[test]
    fn a4_is_anchored_to_the_reference_frequency_in_every_system() {
        for temperament in ALL_TEMPERAMENTS {
            for a4_hz in [415.0, 432.0, 440.0, 443.0] {
                let tuning = TuningConfiguration::new(temperament, a4_hz).unwrap();
                assert_approx_eq!(
                    tuning.pitch_of(PitchClass::A.in_octave(4)).as_hz(),
                    a4_hz
                );
                assert_approx_eq!(
                    tuning.pitch_of(PitchClass::A.in_octave(5)).as_hz(),
                    2.0 * a4_hz
                );
            }
        }
    }

    #[test]
    fn frequencies_increase_monotonically_in_every_system() {
        for temperament in ALL_TEMPERAMENTS {
            let tuning = TuningConfiguration::new(temperament, 440.0).unwrap();
            let mut previous = 0.0;
            for midi_number in 0..128 {
                let hz = tuning.pitch_of(Note::from_midi_number(midi_number)).as_hz();
                assert!(
                    hz > previous,
                    "{temperament}: {hz} Hz at MIDI {midi_number} not above {previous} Hz"
                );
                previous = hz;
            }
        }
    }

    #[test]
    fn just_intonation_has_pure_thirds_and_fifths_above_the_tonic() {
        let just = TuningConfiguration::new(Temperament::JustIntonation, 440.0).unwrap();
        let c4 = just.pitch_of(PitchClass::C.in_octave(4)).as_hz();
        let e4 = just.pitch_of(PitchClass::E.in_octave(4)).as_hz();
        let g4 = just.pitch_of(PitchClass::G.in_octave(4)).as_hz();

        assert_approx_eq!(c4, 264.0);
        assert_approx_eq!(e4 / c4, 5.0 / 4.0);
        assert_approx_eq!(g4 / c4, 3.0 / 2.0);
    }

    #[test]
    fn pythagorean_stacks_pure_fifths() {
        let pythagorean = TuningConfiguration::new(Temperament::Pythagorean, 440.0).unwrap();
        let c4 = pythagorean.pitch_of(PitchClass::C.in_octave(4)).as_hz();
        let g4 = pythagorean.pitch_of(PitchClass::G.in_octave(4)).as_hz();
        let d5 = pythagorean.pitch_of(PitchClass::D.in_octave(5)).as_hz();

        assert_approx_eq!(c4, 440.0 * 16.0 / 27.0);
        assert_approx_eq!(g4 / c4, 3.0 / 2.0);
        assert_approx_eq!(d5 / g4, 3.0 / 2.0);
    }

    #[test]
    fn meantone_has_pure_major_thirds() {
        let meantone = TuningConfiguration::new(Temperament::Meantone, 440.0).unwrap();
        let c4 = meantone.pitch_of(PitchClass::C.in_octave(4)).as_hz();
        let e4 = meantone.pitch_of(PitchClass::E.in_octave(4)).as_hz();

        assert_approx_eq!(e4 / c4, 5.0 / 4.0, 1e-5);
    }

    #[test]
    fn well_temperament_narrows_some_fifths() {
        let well = TuningConfiguration::new(Temperament::WellTemperament, 440.0).unwrap();
        let c4 = well.pitch_of(PitchClass::C.in_octave(4)).as_hz();
        let g4 = well.pitch_of(PitchClass::G.in_octave(4)).as_hz();
        let a4 = well.pitch_of(PitchClass::A.in_octave(4)).as_hz();

        // C-G is one of the tempered fifths (696.09 instead of 701.955 cents).
        assert_approx_eq!(
            Ratio::from_float(g4 / c4).as_cents(),
            696.09,
            0.001
        );
        assert_approx_eq!(a4, 440.0);
    }

    #[test]
    fn inverse_lookup_finds_the_nearest_note() {
        let standard = TuningConfiguration::default();

        let exact = standard.find_by_pitch(Pitch::from_hz(880.0));
        assert_eq!(exact.approx_value, PitchClass::A.in_octave(5));
        assert_approx_eq!(exact.deviation.as_cents(), 0.0);

        let sharp_of_a4 = Pitch::from_hz(445.0).find_in(&standard);
        assert_eq!(sharp_of_a4.approx_value, PitchClass::A.in_octave(4));
        assert_approx_eq!(sharp_of_a4.deviation.as_cents(), 19.562, 0.001);

        let flat_of_a4 = standard.find_by_pitch(Pitch::from_hz(436.0));
        assert_eq!(flat_of_a4.approx_value, PitchClass::A.in_octave(4));
        assert!(flat_of_a4.deviation.as_cents() < 0.0);
    }

    #[test]
    fn inverse_lookup_round_trips_in_every_system() {
        for temperament in ALL_TEMPERAMENTS {
            let tuning = TuningConfiguration::new(temperament, 440.0).unwrap();
            for midi_number in 12..120 {
                let note = Note::from_midi_number(midi_number);
                let found = tuning.find_by_pitch(tuning.pitch_of(note));
                assert_eq!(found.approx_value, note);
                assert_approx_eq!(found.deviation.as_cents(), 0.0);
            }
        }
    }

    #[test]
    fn rejects_invalid_reference_frequencies() {
        for a4_hz in [0.0, -440.0, f64::NAN, f64::INFINITY] {
            let result = TuningConfiguration::new(Temperament::EqualTemperament, a4_hz);
            assert!(result.is_err(), "{a4_hz} should be rejected");
        }
    }
}
