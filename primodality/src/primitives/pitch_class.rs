use std::fmt;

use super::{octave_reduce, Ratio};
use crate::error::TuningResult;

/// Ratio, that always lies in the first octave: `denom <= numer < 2 * denom`.
///
/// Modes, which contain a pitch class, are held by
/// [Universe](crate::universe::Universe), not by the pitch class itself.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct PitchClass {
    ratio: Ratio,
}
impl PitchClass {
    /// # Example
    /// ```
    /// # use primodality::primitives::{PitchClass, Ratio};
    /// let pc = PitchClass::new(42, 5).unwrap();
    /// assert_eq!(pc.ratio(), Ratio::new(21, 20).unwrap());
    /// ```
    pub fn new(numer: u64, denom: u64) -> TuningResult<Self> {
        Ok(Self {
            ratio: octave_reduce(numer, denom)?,
        })
    }
    pub fn from_ratio(ratio: Ratio) -> TuningResult<Self> {
        Self::new(ratio.numer()?, ratio.denom()?)
    }
    pub fn ratio(&self) -> Ratio {
        self.ratio
    }
}
impl Default for PitchClass {
    fn default() -> Self {
        Self {
            ratio: Ratio::UNISON,
        }
    }
}
impl From<PitchClass> for Ratio {
    fn from(value: PitchClass) -> Self {
        value.ratio
    }
}
impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ratio, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::primitives::{PitchClass, Ratio};

    #[test]
    fn test_pitch_class() {
        let a = PitchClass::new(7, 1).unwrap();
        let b = PitchClass::from_ratio(Ratio::new(7, 16).unwrap()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "7/4");
        assert!(a.ratio().is_octave_reduced());
        assert!(PitchClass::new(0, 1).is_err());
        assert!(
            PitchClass::new(1, 1).unwrap() < PitchClass::new(3, 1).unwrap()
        );
        assert!(PitchClass::new(1, u64::MAX).is_err());
        let widest = PitchClass::new(u64::MAX, 1).unwrap();
        assert!(widest.ratio().is_octave_reduced());
    }
}
