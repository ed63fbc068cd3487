//! Linear and logarithmic operations on frequency ratios.

use crate::pitch::Pitched;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The relative distance between two pitches.
///
/// In linear frequency space the distance is a factor, in logarithmic frequency space it is an
/// offset measured in octaves, semitones or cents (1200 cents per octave). Conversions are
/// available through the `from_<repr1>` and `as_<repr2>` accessors.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use tonality::ratio::Ratio;
/// assert_approx_eq!(Ratio::from_float(1.5).as_cents(), 701.955, 0.001);
/// assert_approx_eq!(Ratio::from_cents(400.0).as_semitones(), 4.0);
/// assert_approx_eq!(Ratio::from_semitones(3.0).as_octaves(), 0.25);
/// assert_approx_eq!(Ratio::from_octaves(3.0).as_float(), 8.0);
/// ```
///
/// # Panics
///
/// Panics if the *linear* value is not a finite positive number.
///
/// ```should_panic
/// # use tonality::ratio::Ratio;
/// Ratio::from_float(0.0); // Frequencies are positive, so their ratios must be, too
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ratio {
    float_value: f64,
}

impl Ratio {
    pub fn from_float(float_value: f64) -> Self {
        assert!(
            float_value.is_finite() && float_value > 0.0,
            "Ratio must be finite and positive but was {float_value}"
        );
        Self { float_value }
    }

    pub fn from_cents(cents_value: f64) -> Self {
        Self::from_octaves(cents_value / 1200.0)
    }

    pub fn from_semitones(semitones: impl Into<f64>) -> Self {
        Self::from_octaves(semitones.into() / 12.0)
    }

    pub fn from_octaves(octaves: impl Into<f64>) -> Self {
        Self::from_float(octaves.into().exp2())
    }

    pub fn octave() -> Self {
        Self::from_float(2.0)
    }

    /// Evaluates the distance between two [`Pitched`] entities.
    ///
    /// The sign convention is upwards: the result is larger than 1 (positive in cents) when
    /// `pitch_b` is the higher one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use tonality::pitch::Pitch;
    /// # use tonality::ratio::Ratio;
    /// let f = Pitch::from_hz(330.0);
    /// assert_approx_eq!(Ratio::between_pitches(f, f).as_cents(), 0.0);
    /// assert_approx_eq!(
    ///     Ratio::between_pitches(f, Pitch::from_hz(660.0)).as_cents(),
    ///     1200.0
    /// );
    /// assert_approx_eq!(
    ///     Ratio::between_pitches(Pitch::from_hz(440.0), f).as_float(),
    ///     3.0 / 4.0
    /// );
    /// ```
    pub fn between_pitches(pitch_a: impl Pitched, pitch_b: impl Pitched) -> Self {
        Ratio::from_float(pitch_b.pitch().as_hz() / pitch_a.pitch().as_hz())
    }

    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use tonality::ratio::Ratio;
    /// assert_approx_eq!(Ratio::from_float(4.0).inv().as_float(), 0.25);
    /// assert_approx_eq!(Ratio::from_cents(150.0).inv().as_cents(), -150.0);
    /// ```
    pub fn inv(self) -> Ratio {
        Self {
            float_value: 1.0 / self.float_value,
        }
    }

    pub fn as_float(self) -> f64 {
        self.float_value
    }

    pub fn as_cents(self) -> f64 {
        self.as_semitones() * 100.0
    }

    pub fn as_semitones(self) -> f64 {
        self.as_octaves() * 12.0
    }

    pub fn as_octaves(self) -> f64 {
        self.float_value.log2()
    }
}

/// The default [`Ratio`] represents equivalence of two frequencies.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use tonality::ratio::Ratio;
/// assert_approx_eq!(Ratio::default().as_float(), 1.0);
/// assert_approx_eq!(Ratio::default().as_cents(), 0.0);
/// ```
impl Default for Ratio {
    fn default() -> Self {
        Self::from_float(1.0)
    }
}

/// [`Ratio`]s can be formatted as float or, with the alternate flag, as cents.
///
/// # Examples
///
/// ```
/// # use tonality::ratio::Ratio;
/// assert_eq!(format!("{}", Ratio::from_float(1.5)), "1.5000");
/// assert_eq!(format!("{:.2}", Ratio::from_float(1.0 / 1.5)), "0.67");
/// assert_eq!(format!("{:#.2}", Ratio::from_float(1.5)), "+701.96c");
/// assert_eq!(format!("{:#.2}", Ratio::from_float(1.0 / 1.5)), "-701.96c");
/// ```
impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let formatted = if f.alternate() {
            format!(
                "{:+.precision$}c",
                self.as_cents(),
                precision = f.precision().unwrap_or(1)
            )
        } else {
            format!(
                "{:.precision$}",
                self.as_float(),
                precision = f.precision().unwrap_or(4)
            )
        };
        f.pad_integral(true, "", &formatted)
    }
}
