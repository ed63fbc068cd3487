//! Classification of intervals by semitone distance.

use crate::note::Note;
use crate::tuning::JUST_RATIOS;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

const SIMPLE_NAMES: [&str; 12] = [
    "Perfect Unison",
    "Minor 2nd",
    "Major 2nd",
    "Minor 3rd",
    "Major 3rd",
    "Perfect 4th",
    "Augmented 4th",
    "Perfect 5th",
    "Minor 6th",
    "Major 6th",
    "Minor 7th",
    "Major 7th",
];

/// Degree number of each simple interval, for compound (9th-14th) naming.
const DEGREES: [u8; 12] = [1, 2, 2, 3, 3, 4, 4, 5, 6, 6, 7, 7];

/// The quality categories of Western interval naming.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum IntervalQuality {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
}

impl Display for IntervalQuality {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(match self {
            IntervalQuality::Perfect => "Perfect",
            IntervalQuality::Major => "Major",
            IntervalQuality::Minor => "Minor",
            IntervalQuality::Augmented => "Augmented",
            IntervalQuality::Diminished => "Diminished",
        })
    }
}

/// A classified interval: a semitone distance normalized into one octave plus the number of
/// octaves folded away.
///
/// Classification is a pure lookup; calling it twice with the same input yields identical
/// results.
///
/// # Examples
///
/// ```
/// # use tonality::interval::{Interval, IntervalQuality};
/// let fifth = Interval::from_semitones(7);
/// assert_eq!(fifth.quality(), IntervalQuality::Perfect);
/// assert_eq!(fifth.just_ratio(), (3, 2));
/// assert_eq!(fifth.to_string(), "Perfect 5th");
///
/// let twelfth = Interval::from_semitones(19);
/// assert_eq!(twelfth.semitones_in_octave(), 7);
/// assert_eq!(twelfth.octaves(), 1);
/// ```
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Interval {
    octaves: i32,
    semitones: u8,
}

impl Interval {
    /// Classifies a bare semitone distance.
    ///
    /// Any integer is accepted: the distance is normalized modulo 12 with the octave count
    /// tracked separately, s.t. descending distances keep a meaningful degree.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::interval::Interval;
    /// assert_eq!(Interval::from_semitones(14).semitones_in_octave(), 2);
    /// assert_eq!(Interval::from_semitones(14).octaves(), 1);
    /// assert_eq!(Interval::from_semitones(-1).semitones_in_octave(), 11);
    /// assert_eq!(Interval::from_semitones(-1).octaves(), -1);
    /// ```
    pub fn from_semitones(semitones: i32) -> Self {
        Self {
            octaves: semitones.div_euclid(12),
            semitones: semitones.rem_euclid(12) as u8,
        }
    }

    /// Classifies the distance between two notes, positive when `b` is the higher one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::interval::Interval;
    /// # use tonality::note::PitchClass;
    /// let c4 = PitchClass::C.in_octave(4);
    /// let g4 = PitchClass::G.in_octave(4);
    /// assert_eq!(Interval::between(c4, g4), Interval::from_semitones(7));
    /// assert_eq!(Interval::between(g4, c4), Interval::from_semitones(-7));
    /// ```
    pub fn between(a: Note, b: Note) -> Self {
        Self::from_semitones(a.num_semitones_before(b))
    }

    /// The normalized semitone distance within one octave (0..12).
    pub fn semitones_in_octave(self) -> u8 {
        self.semitones
    }

    /// The number of whole octaves folded away during normalization.
    pub fn octaves(self) -> i32 {
        self.octaves
    }

    pub fn total_semitones(self) -> i32 {
        self.octaves * 12 + i32::from(self.semitones)
    }

    /// The quality category. The tritone is reported as augmented; its equally valid diminished
    /// reading is available through [`Interval::alternative_quality`].
    pub fn quality(self) -> IntervalQuality {
        match self.semitones {
            0 | 5 | 7 => IntervalQuality::Perfect,
            2 | 4 | 9 | 11 => IntervalQuality::Major,
            1 | 3 | 8 | 10 => IntervalQuality::Minor,
            _ => IntervalQuality::Augmented,
        }
    }

    /// The second valid quality where the canonical mapping is ambiguous.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::interval::{Interval, IntervalQuality};
    /// let tritone = Interval::from_semitones(6);
    /// assert_eq!(tritone.quality(), IntervalQuality::Augmented);
    /// assert_eq!(tritone.alternative_quality(), Some(IntervalQuality::Diminished));
    /// assert_eq!(Interval::from_semitones(7).alternative_quality(), None);
    /// ```
    pub fn alternative_quality(self) -> Option<IntervalQuality> {
        (self.semitones == 6).then_some(IntervalQuality::Diminished)
    }

    /// The canonical name, along with the second valid name for the tritone.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::interval::Interval;
    /// assert_eq!(Interval::from_semitones(4).names(), ("Major 3rd", None));
    /// assert_eq!(
    ///     Interval::from_semitones(6).names(),
    ///     ("Augmented 4th", Some("Diminished 5th"))
    /// );
    /// assert_eq!(Interval::from_semitones(12).names(), ("Perfect Octave", None));
    /// ```
    pub fn names(self) -> (&'static str, Option<&'static str>) {
        match self.semitones {
            0 if self.octaves != 0 => ("Perfect Octave", None),
            6 => ("Augmented 4th", Some("Diminished 5th")),
            semitones => (SIMPLE_NAMES[usize::from(semitones)], None),
        }
    }

    /// The display name, optionally using compound (9th-14th) names for intervals between one
    /// and two octaves.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::interval::Interval;
    /// assert_eq!(Interval::from_semitones(14).name(true), "Major 9th");
    /// assert_eq!(Interval::from_semitones(14).name(false), "Major 2nd (+1o)");
    /// assert_eq!(Interval::from_semitones(17).name(true), "Perfect 11th");
    /// assert_eq!(Interval::from_semitones(7).name(true), "Perfect 5th");
    /// ```
    pub fn name(self, compound_allowed: bool) -> String {
        if compound_allowed && self.octaves == 1 && self.semitones > 0 {
            let degree = DEGREES[usize::from(self.semitones)] + 7;
            match self.alternative_quality() {
                Some(alternative) => format!(
                    "{} {}/{} {}",
                    self.quality(),
                    ordinal(degree),
                    alternative,
                    ordinal(degree + 1)
                ),
                None => format!("{} {}", self.quality(), ordinal(degree)),
            }
        } else {
            self.to_string()
        }
    }

    /// The canonical just-intonation approximation of the normalized degree as a frequency
    /// ratio.
    ///
    /// This is a fixed lookup into the same 5-limit table the just-intonation tuning uses, not a
    /// computed best rational approximation, so results are deterministic (the tritone maps to
    /// 45/32). Folded octaves are tracked separately, except for the plain octave itself:
    /// beyond one octave the lookup reduces to the normalized degree, so a compound interval
    /// shares the ratio of its simple counterpart and [`Interval::octaves`] carries the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::interval::Interval;
    /// assert_eq!(Interval::from_semitones(7).just_ratio(), (3, 2));
    /// assert_eq!(Interval::from_semitones(4).just_ratio(), (5, 4));
    /// assert_eq!(Interval::from_semitones(12).just_ratio(), (2, 1));
    /// assert_eq!(Interval::from_semitones(-12).just_ratio(), (1, 2));
    /// assert_eq!(Interval::from_semitones(19).just_ratio(), (3, 2));
    /// assert_eq!(Interval::from_semitones(24).just_ratio(), (1, 1));
    /// ```
    pub fn just_ratio(self) -> (u32, u32) {
        match (self.octaves, self.semitones) {
            (1, 0) => (2, 1),
            (-1, 0) => (1, 2),
            _ => JUST_RATIOS[usize::from(self.semitones)],
        }
    }

    /// Whether the normalized degree is a member of the major scale built on the lower note.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::interval::Interval;
    /// assert!(Interval::from_semitones(0).is_diatonic());
    /// assert!(Interval::from_semitones(4).is_diatonic());
    /// assert!(Interval::from_semitones(12).is_diatonic());
    /// assert!(!Interval::from_semitones(6).is_diatonic());
    /// assert!(!Interval::from_semitones(13).is_diatonic());
    /// ```
    pub fn is_diatonic(self) -> bool {
        matches!(self.semitones, 0 | 2 | 4 | 5 | 7 | 9 | 11)
    }
}

fn ordinal(degree: u8) -> String {
    let suffix = match degree % 10 {
        1 if degree != 11 => "st",
        2 if degree != 12 => "nd",
        3 if degree != 13 => "rd",
        _ => "th",
    };
    format!("{degree}{suffix}")
}

/// Renders the simple interval name; distances beyond one octave carry an octave marker.
///
/// For the ambiguous tritone both names are rendered by default; the sign flags select one
/// spelling, mirroring the enharmonic flags of [`PitchClass`](crate::note::PitchClass).
///
/// # Examples
///
/// ```
/// # use tonality::interval::Interval;
/// assert_eq!(Interval::from_semitones(9).to_string(), "Major 6th");
/// assert_eq!(Interval::from_semitones(12).to_string(), "Perfect Octave");
/// assert_eq!(Interval::from_semitones(19).to_string(), "Perfect 5th (+1o)");
/// assert_eq!(Interval::from_semitones(-7).to_string(), "Perfect 4th (-1o)");
///
/// let tritone = Interval::from_semitones(6);
/// assert_eq!(tritone.to_string(), "Augmented 4th/Diminished 5th");
/// assert_eq!(format!("{tritone:+}"), "Augmented 4th");
/// assert_eq!(format!("{tritone:-}"), "Diminished 5th");
/// ```
impl Display for Interval {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let (primary, alternative) = self.names();
        let base = match (alternative, f.sign_plus(), f.sign_minus()) {
            (Some(_), true, false) | (None, _, _) => primary.to_owned(),
            (Some(alternative), false, true) => alternative.to_owned(),
            (Some(alternative), _, _) => format!("{primary}/{alternative}"),
        };

        if self.octaves != 0 && self.total_semitones() != 12 {
            f.pad(&format!("{base} ({:+}o)", self.octaves))
        } else {
            f.pad(&base)
        }
    }
}
