//! The circle of fifths and key signatures.

use crate::note::PitchClass;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Iterates all 12 pitch classes in fifths order, starting at `start`.
///
/// # Examples
///
/// ```
/// # use tonality::key::circle_of_fifths;
/// # use tonality::note::PitchClass;
/// let fifths: Vec<_> = circle_of_fifths(PitchClass::C)
///     .map(|pitch_class| format!("{pitch_class:+}"))
///     .collect();
/// assert_eq!(
///     fifths,
///     ["C", "G", "D", "A", "E", "B", "F#", "C#", "G#", "D#", "A#", "F"]
/// );
/// ```
pub fn circle_of_fifths(start: PitchClass) -> impl Iterator<Item = PitchClass> {
    (0..12).map(move |position| start.transposed_by(7 * position))
}

/// The number of sharps or flats a key is notated with.
///
/// Keys are identified by their canonical pitch-class index, so the 6-accidental keys and the
/// 5/7-accidental pairs have an enharmonically equivalent spelling, exposed through
/// [`KeySignature::enharmonic_equivalent`].
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeySignature {
    Natural,
    Sharps(u8),
    Flats(u8),
}

impl KeySignature {
    /// The signature of the major key on the given root, preferring the spelling with fewer
    /// accidentals.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::key::KeySignature;
    /// # use tonality::note::PitchClass;
    /// assert_eq!(KeySignature::of_major(PitchClass::C), KeySignature::Natural);
    /// assert_eq!(KeySignature::of_major(PitchClass::E), KeySignature::Sharps(4));
    /// assert_eq!(KeySignature::of_major(PitchClass::F), KeySignature::Flats(1));
    /// assert_eq!(KeySignature::of_major(PitchClass::FSharp), KeySignature::Sharps(6));
    /// ```
    pub fn of_major(root: PitchClass) -> KeySignature {
        // Position of the root on the sharp side of the circle; 7 fifths equal one chromatic step.
        let num_fifths = (i32::from(root.index()) * 7).rem_euclid(12) as u8;
        match num_fifths {
            0 => KeySignature::Natural,
            1..=6 => KeySignature::Sharps(num_fifths),
            _ => KeySignature::Flats(12 - num_fifths),
        }
    }

    /// The signature of the minor key on the given root, i.e. of its relative major a minor
    /// third up.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::key::KeySignature;
    /// # use tonality::note::PitchClass;
    /// assert_eq!(KeySignature::of_minor(PitchClass::A), KeySignature::Natural);
    /// assert_eq!(KeySignature::of_minor(PitchClass::E), KeySignature::Sharps(1));
    /// assert_eq!(KeySignature::of_minor(PitchClass::D), KeySignature::Flats(1));
    /// ```
    pub fn of_minor(root: PitchClass) -> KeySignature {
        Self::of_major(root.transposed_by(3))
    }

    /// The enharmonically equivalent notation of the same key, if it stays within 7 accidentals.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::key::KeySignature;
    /// // F# major (6 sharps) can equally be written as Gb major (6 flats)
    /// assert_eq!(
    ///     KeySignature::Sharps(6).enharmonic_equivalent(),
    ///     Some(KeySignature::Flats(6))
    /// );
    /// // B major (5 sharps) has the rare Cb major spelling (7 flats)
    /// assert_eq!(
    ///     KeySignature::Sharps(5).enharmonic_equivalent(),
    ///     Some(KeySignature::Flats(7))
    /// );
    /// assert_eq!(KeySignature::Sharps(2).enharmonic_equivalent(), None);
    /// ```
    pub fn enharmonic_equivalent(self) -> Option<KeySignature> {
        match self {
            KeySignature::Sharps(num_sharps) if num_sharps >= 5 => {
                Some(KeySignature::Flats(12 - num_sharps))
            }
            KeySignature::Flats(num_flats) if num_flats >= 5 => {
                Some(KeySignature::Sharps(12 - num_flats))
            }
            _ => None,
        }
    }

    pub fn num_accidentals(self) -> u8 {
        match self {
            KeySignature::Natural => 0,
            KeySignature::Sharps(num_sharps) => num_sharps,
            KeySignature::Flats(num_flats) => num_flats,
        }
    }
}

/// ```
/// # use tonality::key::KeySignature;
/// assert_eq!(KeySignature::Natural.to_string(), "no accidentals");
/// assert_eq!(KeySignature::Sharps(3).to_string(), "3#");
/// assert_eq!(KeySignature::Flats(2).to_string(), "2b");
/// ```
impl Display for KeySignature {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            KeySignature::Natural => f.pad("no accidentals"),
            KeySignature::Sharps(num_sharps) => f.pad(&format!("{num_sharps}#")),
            KeySignature::Flats(num_flats) => f.pad(&format!("{num_flats}b")),
        }
    }
}
