//! Exact fractions and octave normalization.
//!
//! [Ratio] wraps [Fraction], which keeps the value in lowest terms, so
//! equality and hashing work on the reduced pair, and ordering works on the
//! real value. Only finite non-negative fractions can become a [Ratio].

use std::{fmt, str::FromStr};

use fraction::{CheckedDiv, CheckedMul, Fraction, ToPrimitive, Zero};
use num_integer::gcd;

use crate::error::{TuningError, TuningResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ratio {
    fraction: Fraction,
}
impl Ratio {
    pub const UNISON: Ratio = Ratio {
        fraction: Fraction::new_raw(1, 1),
    };
    pub const OCTAVE: Ratio = Ratio {
        fraction: Fraction::new_raw(2, 1),
    };

    /// Build simplified ratio.
    ///
    /// # Example
    /// ```
    /// # use primodality::primitives::Ratio;
    /// let r = Ratio::new(4, 6).unwrap();
    /// assert_eq!((r.numer().unwrap(), r.denom().unwrap()), (2, 3));
    /// assert!(Ratio::new(1, 0).is_err());
    /// ```
    pub fn new(numer: u64, denom: u64) -> TuningResult<Self> {
        Self::try_from(Fraction::new(numer, denom))
    }

    pub fn get(&self) -> Fraction {
        self.fraction
    }
    pub fn numer(&self) -> TuningResult<u64> {
        self.fraction.numer().copied().ok_or(TuningError::DomainError(
            format!("Can not get numerator from {}", self.fraction),
        ))
    }
    pub fn denom(&self) -> TuningResult<u64> {
        self.fraction.denom().copied().ok_or(TuningError::DomainError(
            format!("Can not get denominator from {}", self.fraction),
        ))
    }
    pub fn is_zero(&self) -> bool {
        self.fraction.is_zero()
    }

    pub fn multiply(self, other: Self) -> TuningResult<Self> {
        let product = self.fraction.checked_mul(&other.fraction).ok_or(
            TuningError::Overflow(format!("{} * {}", self, other)),
        )?;
        Self::try_from(product)
    }

    /// Zero divisor gives [TuningError::DivisionByZero].
    pub fn divide(self, other: Self) -> TuningResult<Self> {
        let quotient = self.fraction.checked_div(&other.fraction).ok_or(
            TuningError::Overflow(format!("{} / {}", self, other)),
        )?;
        Self::try_from(quotient)
    }

    /// Interval between two ratios: the larger one over the smaller one.
    pub fn interval_to(self, other: Self) -> TuningResult<Self> {
        match self >= other {
            true => self.divide(other),
            false => other.divide(self),
        }
    }

    /// Reduce the ratio into the first octave, \[1, 2).
    pub fn octave_reduce(self) -> TuningResult<Self> {
        octave_reduce(self.numer()?, self.denom()?)
    }

    pub fn is_octave_reduced(&self) -> bool {
        Self::UNISON <= *self && *self < Self::OCTAVE
    }

    pub fn to_f64(&self) -> f64 {
        self.fraction.to_f64().unwrap_or(f64::NAN)
    }

    /// Size of the ratio in cents (1200 per octave).
    pub fn cents(&self) -> f64 {
        1200.0 * self.to_f64().log2()
    }
}

/// Reduce `numer/denom` into the first octave, \[1, 2).
///
/// Factors of 2 are stripped from both parts, then the smaller part is doubled
/// until the ratio fits, and the result is simplified. Doubling is done in
/// 128 bits, so only a result, which does not fit into `u64`, is an error.
///
/// # Example
/// ```
/// # use primodality::primitives::{octave_reduce, Ratio};
/// assert_eq!(octave_reduce(9, 4).unwrap(), Ratio::new(9, 8).unwrap());
/// assert_eq!(octave_reduce(1, 3).unwrap(), Ratio::new(4, 3).unwrap());
/// assert_eq!(octave_reduce(8, 1).unwrap(), Ratio::UNISON);
/// ```
pub fn octave_reduce(numer: u64, denom: u64) -> TuningResult<Ratio> {
    if denom == 0 {
        return Err(TuningError::DivisionByZero(format!(
            "can not octave-reduce {}/0",
            numer
        )));
    }
    if numer == 0 {
        return Err(TuningError::DomainError(format!(
            "zero ratio has no octave-reduced form (0/{})",
            denom
        )));
    }
    let mut wide_numer = u128::from(numer >> numer.trailing_zeros());
    let mut wide_denom = u128::from(denom >> denom.trailing_zeros());
    while wide_numer < wide_denom {
        wide_numer <<= 1;
    }
    while wide_denom << 1 < wide_numer {
        wide_denom <<= 1;
    }
    let divisor = gcd(wide_numer, wide_denom);
    let narrow = |value: u128| {
        u64::try_from(value / divisor).map_err(|_| {
            TuningError::Overflow(format!(
                "octave-reduced form of {}/{} is {}/{}",
                numer,
                denom,
                wide_numer / divisor,
                wide_denom / divisor
            ))
        })
    };
    Ratio::new(narrow(wide_numer)?, narrow(wide_denom)?)
}

impl Default for Ratio {
    fn default() -> Self {
        Self::UNISON
    }
}
impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.fraction.numer(), self.fraction.denom()) {
            (Some(numer), Some(denom)) => write!(f, "{}/{}", numer, denom),
            _ => write!(f, "{}", self.fraction),
        }
    }
}
impl FromStr for Ratio {
    type Err = TuningError;

    /// Accepts `n/d` or a bare integer `n`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<u64>()
                .map_err(|_| TuningError::Parse(s.to_string()))
        };
        match s.split_once('/') {
            Some((numer, denom)) => Self::new(parse(numer)?, parse(denom)?),
            None => Self::new(parse(s)?, 1),
        }
    }
}
impl From<Ratio> for Fraction {
    fn from(value: Ratio) -> Self {
        value.fraction
    }
}
impl TryFrom<Fraction> for Ratio {
    type Error = TuningError;

    fn try_from(value: Fraction) -> Result<Self, Self::Error> {
        if value.is_nan() || value.is_infinite() {
            return Err(TuningError::DivisionByZero(format!(
                "fraction {} has no finite value",
                value
            )));
        }
        if value.is_sign_negative() && !value.is_zero() {
            return Err(TuningError::DomainError(format!(
                "negative fraction {} can not be a ratio",
                value
            )));
        }
        match value.is_zero() {
            true => Ok(Self {
                fraction: Fraction::zero(),
            }),
            false => Ok(Self { fraction: value }),
        }
    }
}
