//! Scale formulas, scale generation and modal rotation.

use crate::note::{Note, PitchClass};
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::iter;

/// An ordered sequence of semitone steps defining the shape of a scale.
///
/// A formula whose steps sum to 12 is *closed*: it repeats at the octave and can be rotated into
/// the modes of its family. Formulas with a different span (open scales) are valid as well but
/// have no modes.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IntervalFormula {
    steps: Vec<u8>,
}

impl IntervalFormula {
    /// Creates a formula from explicit semitone steps.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::scale::{FormulaError, IntervalFormula};
    /// let formula = IntervalFormula::new(vec![2, 2, 1, 2, 2, 2, 1]).unwrap();
    /// assert_eq!(formula, IntervalFormula::major());
    /// assert_eq!(IntervalFormula::new(vec![]), Err(FormulaError::Empty));
    /// ```
    pub fn new(steps: Vec<u8>) -> Result<Self, FormulaError> {
        if steps.is_empty() {
            Err(FormulaError::Empty)
        } else {
            Ok(Self { steps })
        }
    }

    fn from_steps(steps: &[u8]) -> Self {
        Self {
            steps: steps.to_vec(),
        }
    }

    pub fn chromatic() -> Self {
        Self::from_steps(&[1; 12])
    }

    pub fn major() -> Self {
        Self::from_steps(&[2, 2, 1, 2, 2, 2, 1])
    }

    pub fn natural_minor() -> Self {
        Self::from_steps(&[2, 1, 2, 2, 1, 2, 2])
    }

    pub fn harmonic_minor() -> Self {
        Self::from_steps(&[2, 1, 2, 2, 1, 3, 1])
    }

    pub fn melodic_minor() -> Self {
        Self::from_steps(&[2, 1, 2, 2, 2, 2, 1])
    }

    pub fn major_pentatonic() -> Self {
        Self::from_steps(&[2, 2, 3, 2, 3])
    }

    pub fn minor_pentatonic() -> Self {
        Self::from_steps(&[3, 2, 2, 3, 2])
    }

    pub fn whole_tone() -> Self {
        Self::from_steps(&[2; 6])
    }

    pub fn bebop_dominant() -> Self {
        Self::from_steps(&[2, 2, 1, 2, 2, 1, 1, 1])
    }

    /// Looks up a formula by the preset names UI widgets pass around.
    ///
    /// Unknown names fall back to the chromatic scale. This fallback is deliberate and part of
    /// the contract, not a silent failure mode: the chromatic scale contains every pitch class,
    /// so a widget wired to an outdated name still renders something playable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::scale::IntervalFormula;
    /// assert_eq!(IntervalFormula::named("Harmonic Minor"), IntervalFormula::harmonic_minor());
    /// assert_eq!(IntervalFormula::named("no such scale"), IntervalFormula::chromatic());
    /// ```
    pub fn named(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "major" | "ionian" | "major diatonic" => Self::major(),
            "minor" | "natural minor" | "aeolian" | "minor diatonic" => Self::natural_minor(),
            "harmonic minor" => Self::harmonic_minor(),
            "melodic minor" => Self::melodic_minor(),
            "major pentatonic" => Self::major_pentatonic(),
            "minor pentatonic" => Self::minor_pentatonic(),
            "whole tone" => Self::whole_tone(),
            "bebop" | "bebop dominant" => Self::bebop_dominant(),
            _ => Self::chromatic(),
        }
    }

    pub fn steps(&self) -> &[u8] {
        &self.steps
    }

    pub fn num_steps(&self) -> usize {
        self.steps.len()
    }

    /// The total number of semitones the formula spans.
    pub fn span(&self) -> u32 {
        self.steps.iter().map(|&step| u32::from(step)).sum()
    }

    /// Whether the formula repeats at the octave.
    pub fn is_closed(&self) -> bool {
        self.span() == 12
    }

    /// Cyclic left rotation of the step sequence, yielding the interval pattern of the `n`-th
    /// mode of the same family.
    ///
    /// The operation is total over all integers: `n` is normalized modulo the number of steps,
    /// and rotations compose, i.e. `f.rotated(a).rotated(b) == f.rotated(a + b)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::scale::IntervalFormula;
    /// let dorian = IntervalFormula::major().rotated(1);
    /// assert_eq!(dorian.steps(), [2, 1, 2, 2, 2, 1, 2]);
    /// assert_eq!(dorian.rotated(-1), IntervalFormula::major());
    /// assert_eq!(IntervalFormula::major().rotated(7), IntervalFormula::major());
    /// ```
    pub fn rotated(&self, n: i32) -> IntervalFormula {
        let mut steps = self.steps.clone();
        steps.rotate_left(n.rem_euclid(self.steps.len() as i32) as usize);
        IntervalFormula { steps }
    }
}

fn ensure_closed(formula: &IntervalFormula) -> Result<(), FormulaError> {
    if formula.is_closed() {
        Ok(())
    } else {
        Err(FormulaError::NotOctaveRepeating {
            span: formula.span(),
        })
    }
}

/// A root [`PitchClass`] combined with an [`IntervalFormula`].
///
/// The scale itself is a derived value: [`Scale::degrees`] evaluates it lazily and the same
/// inputs always produce the same sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scale {
    root: PitchClass,
    formula: IntervalFormula,
}

impl Scale {
    pub fn new(root: PitchClass, formula: IntervalFormula) -> Self {
        Self { root, formula }
    }

    /// The mode of `parent` starting on its `degree_index`-th scale degree.
    ///
    /// The new root is that degree of the parent scale built on `root`, and the formula is the
    /// parent formula rotated by the same amount. Not to be confused with
    /// [`Scale::parallel_mode`] which keeps the original root.
    ///
    /// Out-of-range degree indices wrap around the formula length. Rotation is only meaningful
    /// for octave-repeating formulas, so open formulas are rejected.
    ///
    /// # Examples
    ///
    /// D Dorian is the second mode of C major:
    ///
    /// ```
    /// # use tonality::note::PitchClass;
    /// # use tonality::scale::{IntervalFormula, Scale};
    /// let dorian = Scale::relative_mode(PitchClass::C, &IntervalFormula::major(), 1).unwrap();
    /// assert_eq!(dorian.root(), PitchClass::D);
    /// assert_eq!(dorian.to_string(), "D E F G A B C D");
    /// ```
    pub fn relative_mode(
        root: PitchClass,
        parent: &IntervalFormula,
        degree_index: i32,
    ) -> Result<Scale, FormulaError> {
        ensure_closed(parent)?;
        let normalized = degree_index.rem_euclid(parent.num_steps() as i32) as usize;
        let offset = parent.steps()[..normalized]
            .iter()
            .map(|&step| i32::from(step))
            .sum();
        Ok(Scale::new(
            root.transposed_by(offset),
            parent.rotated(degree_index),
        ))
    }

    /// The mode with the rotated formula on the *unchanged* root.
    ///
    /// # Examples
    ///
    /// C Dorian keeps the root C but flattens the 3rd and 7th:
    ///
    /// ```
    /// # use tonality::note::PitchClass;
    /// # use tonality::scale::{IntervalFormula, Scale};
    /// let dorian = Scale::parallel_mode(PitchClass::C, &IntervalFormula::major(), 1).unwrap();
    /// assert_eq!(dorian.root(), PitchClass::C);
    /// assert_eq!(format!("{:-}", dorian), "C D Eb F G A Bb C");
    /// ```
    pub fn parallel_mode(
        root: PitchClass,
        parent: &IntervalFormula,
        degree_index: i32,
    ) -> Result<Scale, FormulaError> {
        ensure_closed(parent)?;
        Ok(Scale::new(root, parent.rotated(degree_index)))
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn formula(&self) -> &IntervalFormula {
        &self.formula
    }

    pub fn is_closed(&self) -> bool {
        self.formula.is_closed()
    }

    /// Evaluates the scale degrees, root first, one pitch class per formula step afterwards.
    ///
    /// The returned iterator is lazy and restartable; for a closed formula the last element wraps
    /// around to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::note::PitchClass;
    /// # use tonality::scale::{IntervalFormula, Scale};
    /// let c_major = Scale::new(PitchClass::C, IntervalFormula::major());
    /// assert_eq!(c_major.degrees().count(), 8);
    /// assert_eq!(c_major.degrees().next(), Some(PitchClass::C));
    /// assert_eq!(c_major.degrees().last(), Some(PitchClass::C));
    /// ```
    pub fn degrees(&self) -> impl Iterator<Item = PitchClass> + '_ {
        iter::once(self.root).chain(self.formula.steps().iter().scan(
            i32::from(self.root.index()),
            |degree, &step| {
                *degree += i32::from(step);
                Some(PitchClass::from_index(*degree))
            },
        ))
    }

    /// Expands the scale into concrete [`Note`]s, ascending from the root in the given octave.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::note::PitchClass;
    /// # use tonality::scale::{IntervalFormula, Scale};
    /// let a_minor = Scale::new(PitchClass::A, IntervalFormula::natural_minor());
    /// let midi_numbers: Vec<_> = a_minor.notes(4).iter().map(|note| note.midi_number()).collect();
    /// assert_eq!(midi_numbers, [69, 71, 72, 74, 76, 77, 79, 81]);
    /// ```
    pub fn notes(&self, octave: i32) -> Vec<Note> {
        let mut note = self.root.in_octave(octave);
        let mut notes = vec![note];
        for &step in self.formula.steps() {
            note = note.transposed_by(i32::from(step));
            notes.push(note);
        }
        notes
    }
}

/// Renders the scale degrees separated by spaces. The enharmonic format flags of
/// [`PitchClass`] apply.
///
/// # Examples
///
/// ```
/// # use tonality::note::PitchClass;
/// # use tonality::scale::{IntervalFormula, Scale};
/// let fsharp_major = Scale::new(PitchClass::FSharp, IntervalFormula::major());
/// assert_eq!(format!("{:+}", fsharp_major), "F# G# A# B C# D# F F#");
/// ```
impl Display for Scale {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (position, degree) in self.degrees().enumerate() {
            if position > 0 {
                write!(f, " ")?;
            }
            match (f.sign_plus(), f.sign_minus()) {
                (true, false) => write!(f, "{degree:+}")?,
                (false, true) => write!(f, "{degree:-}")?,
                _ => write!(f, "{degree}")?,
            }
        }
        Ok(())
    }
}

/// The seven modes of the major scale in degree order.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum DiatonicMode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl DiatonicMode {
    pub const ALL: [DiatonicMode; 7] = [
        DiatonicMode::Ionian,
        DiatonicMode::Dorian,
        DiatonicMode::Phrygian,
        DiatonicMode::Lydian,
        DiatonicMode::Mixolydian,
        DiatonicMode::Aeolian,
        DiatonicMode::Locrian,
    ];

    /// The 0-based degree of the major scale this mode starts on.
    pub fn degree(self) -> u8 {
        self as u8
    }

    /// Total over all integers: the degree wraps around the seven modes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tonality::scale::DiatonicMode;
    /// assert_eq!(DiatonicMode::from_degree(1), DiatonicMode::Dorian);
    /// assert_eq!(DiatonicMode::from_degree(7), DiatonicMode::Ionian);
    /// assert_eq!(DiatonicMode::from_degree(-1), DiatonicMode::Locrian);
    /// ```
    pub fn from_degree(degree: i32) -> Self {
        Self::ALL[degree.rem_euclid(7) as usize]
    }

    /// # Examples
    ///
    /// ```
    /// # use tonality::scale::{DiatonicMode, IntervalFormula};
    /// assert_eq!(DiatonicMode::Ionian.formula(), IntervalFormula::major());
    /// assert_eq!(DiatonicMode::Aeolian.formula(), IntervalFormula::natural_minor());
    /// ```
    pub fn formula(self) -> IntervalFormula {
        IntervalFormula::major().rotated(i32::from(self.degree()))
    }
}

impl Display for DiatonicMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(match self {
            DiatonicMode::Ionian => "Ionian",
            DiatonicMode::Dorian => "Dorian",
            DiatonicMode::Phrygian => "Phrygian",
            DiatonicMode::Lydian => "Lydian",
            DiatonicMode::Mixolydian => "Mixolydian",
            DiatonicMode::Aeolian => "Aeolian",
            DiatonicMode::Locrian => "Locrian",
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// The step sequence was empty.
    Empty,
    /// The formula does not span exactly one octave, so it has no modes.
    NotOctaveRepeating { span: u32 },
}

impl Display for FormulaError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FormulaError::Empty => write!(f, "Formula must contain at least one step"),
            FormulaError::NotOctaveRepeating { span } => {
                write!(f, "Formula spans {span} semitones instead of an octave")
            }
        }
    }
}

impl Error for FormulaError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_presets_are_closed() {
        let presets = [
            IntervalFormula::chromatic(),
            IntervalFormula::major(),
            IntervalFormula::natural_minor(),
            IntervalFormula::harmonic_minor(),
            IntervalFormula::melodic_minor(),
            IntervalFormula::major_pentatonic(),
            IntervalFormula::minor_pentatonic(),
            IntervalFormula::whole_tone(),
            IntervalFormula::bebop_dominant(),
        ];

        for formula in presets {
            assert!(formula.is_closed(), "{formula:?} does not span an octave");
        }
    }

    #[test]
    fn rotations_compose() {
        let formula = IntervalFormula::major();
        for a in -10..10 {
            for b in -10..10 {
                assert_eq!(formula.rotated(a).rotated(b), formula.rotated(a + b));
            }
        }
    }

    #[test]
    fn closed_scales_wrap_around_to_the_root() {
        for root_index in 0..12 {
            let root = PitchClass::from_index(root_index);
            let scale = Scale::new(root, IntervalFormula::harmonic_minor());
            let degrees: Vec<_> = scale.degrees().collect();
            assert_eq!(degrees.len(), 8);
            assert_eq!(degrees.first(), Some(&root));
            assert_eq!(degrees.last(), Some(&root));
        }
    }

    #[test]
    fn open_formulas_generate_but_have_no_modes() {
        let synthetic = IntervalFormula::new(vec![2, 2, 2]).unwrap();
        assert!(!synthetic.is_closed());

        let scale = Scale::new(PitchClass::C, synthetic.clone());
        let degrees: Vec<_> = scale.degrees().collect();
        assert_eq!(
            degrees,
            [PitchClass::C, PitchClass::D, PitchClass::E, PitchClass::FSharp]
        );

        assert_eq!(
            Scale::relative_mode(PitchClass::C, &synthetic, 1),
            Err(FormulaError::NotOctaveRepeating { span: 6 })
        );
        assert_eq!(
            Scale::parallel_mode(PitchClass::C, &synthetic, 1),
            Err(FormulaError::NotOctaveRepeating { span: 6 })
        );
    }

    #[test]
    fn relative_and_parallel_modes_differ() {
        let major = IntervalFormula::major();

        let relative = Scale::relative_mode(PitchClass::C, &major, 4).unwrap();
        assert_eq!(relative.root(), PitchClass::G);
        assert_eq!(relative.to_string(), "G A B C D E F G");

        let parallel = Scale::parallel_mode(PitchClass::C, &major, 4).unwrap();
        assert_eq!(parallel.root(), PitchClass::C);
        assert_eq!(format!("{parallel:-}"), "C D E F G A Bb C");
    }

    #[test]
    fn degree_indices_wrap() {
        let major = IntervalFormula::major();
        assert_eq!(
            Scale::relative_mode(PitchClass::D, &major, 8).unwrap(),
            Scale::relative_mode(PitchClass::D, &major, 1).unwrap()
        );
        assert_eq!(
            Scale::parallel_mode(PitchClass::D, &major, -6).unwrap(),
            Scale::parallel_mode(PitchClass::D, &major, 1).unwrap()
        );
    }

    #[test]
    fn notes_ascend_across_octave_boundaries() {
        let b_major = Scale::new(PitchClass::B, IntervalFormula::major());
        let notes = b_major.notes(3);
        assert_eq!(notes.first(), Some(&PitchClass::B.in_octave(3)));
        assert_eq!(notes.last(), Some(&PitchClass::B.in_octave(4)));
        assert!(notes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn mode_formulas_match_their_interval_patterns() {
        assert_eq!(DiatonicMode::Dorian.formula().steps(), [2, 1, 2, 2, 2, 1, 2]);
        assert_eq!(DiatonicMode::Lydian.formula().steps(), [2, 2, 2, 1, 2, 2, 1]);
        assert_eq!(DiatonicMode::Locrian.formula().steps(), [1, 2, 2, 1, 2, 2, 2]);
        for mode in DiatonicMode::ALL {
            assert_eq!(DiatonicMode::from_degree(i32::from(mode.degree())), mode);
        }
    }

    #[test]
    fn named_lookup_accepts_ui_spellings() {
        assert_eq!(IntervalFormula::named("Major"), IntervalFormula::major());
        assert_eq!(
            IntervalFormula::named("Natural Minor"),
            IntervalFormula::natural_minor()
        );
        assert_eq!(
            IntervalFormula::named("bebop dominant"),
            IntervalFormula::bebop_dominant()
        );
        // Documented fallback for unknown names
        assert_eq!(IntervalFormula::named("klingon"), IntervalFormula::chromatic());
    }
}
