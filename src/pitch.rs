use crate::ratio::Ratio;
use crate::tuning::{Approximation, Tuning};
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Div;
use std::ops::Mul;

/// A4 at standard concert pitch.
pub const A4_PITCH: Pitch = Pitch { hz: 440.0 };

/// An absolute frequency in Hz.
///
/// # Panics
///
/// Only finite positive frequencies are representable.
///
/// ```should_panic
/// # use tonality::pitch::Pitch;
/// Pitch::from_hz(-440.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Pitch {
    hz: f64,
}

impl Pitch {
    pub fn from_hz(hz: f64) -> Pitch {
        assert!(
            hz.is_finite() && hz > 0.0,
            "Frequency must be finite and positive but was {hz}"
        );
        Pitch { hz }
    }

    pub fn as_hz(self) -> f64 {
        self.hz
    }
}

/// Raising a [`Pitch`] by a [`Ratio`] is a multiplication in linear frequency space.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use tonality::pitch::Pitch;
/// # use tonality::ratio::Ratio;
/// assert_approx_eq!((Pitch::from_hz(220.0) * Ratio::octave()).as_hz(), 440.0);
/// assert_approx_eq!((Pitch::from_hz(440.0) / Ratio::octave()).as_hz(), 220.0);
/// ```
impl Mul<Ratio> for Pitch {
    type Output = Pitch;

    fn mul(self, rhs: Ratio) -> Self::Output {
        Pitch::from_hz(self.as_hz() * rhs.as_float())
    }
}

impl Div<Ratio> for Pitch {
    type Output = Pitch;

    fn div(self, rhs: Ratio) -> Self::Output {
        Pitch::from_hz(self.as_hz() / rhs.as_float())
    }
}

/// ```
/// # use tonality::pitch::Pitch;
/// assert_eq!(Pitch::from_hz(440.0).to_string(), "440.000 Hz");
/// assert_eq!(format!("{:.1}", Pitch::from_hz(261.625565)), "261.6 Hz");
/// ```
impl Display for Pitch {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:.*} Hz", f.precision().unwrap_or(3), self.hz)
    }
}

/// Objects which have a pitch, either inherently ([`Pitch`] itself) or derived from a tuning
/// ([`Note`](crate::note::Note) at standard concert pitch).
pub trait Pitched: Copy {
    /// Retrieves the pitch of the object.
    fn pitch(self) -> Pitch;

    /// Finds the closest note or scale address of `self` within the given tuning.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::note::Note;
    /// # use tonality::pitch::Pitch;
    /// # use tonality::pitch::Pitched;
    /// assert_eq!(
    ///     Pitch::from_hz(880.0).find_in(&()).approx_value,
    ///     Note::from_midi_number(81)
    /// );
    /// ```
    fn find_in<N, T: Tuning<N>>(self, tuning: &T) -> Approximation<N> {
        tuning.find_by_pitch(self.pitch())
    }
}

impl Pitched for Pitch {
    fn pitch(self) -> Pitch {
        self
    }
}
