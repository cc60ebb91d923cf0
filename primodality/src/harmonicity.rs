//! Number-theoretic measures of how complex (dissonant) an interval is.
//!
//! Lower is more consonant. Both heights are zero only for unison.

use itertools::Itertools;

use crate::error::{TuningError, TuningResult};
use crate::primitives::Ratio;

/// Aggregated heights of every interval between the pitches of a chord.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct ChordHeights {
    pub tenney_arithmetic: f64,
    pub tenney_geometric: f64,
    pub wilson_arithmetic: f64,
    pub wilson_geometric: f64,
}

fn check_non_zero(ratio: Ratio, measure: &str) -> TuningResult<()> {
    match ratio.is_zero() {
        true => Err(TuningError::DomainError(format!(
            "{} is not defined for zero ratio",
            measure
        ))),
        false => Ok(()),
    }
}

/// Prime factors of `n` with multiplicity, ascending.
///
/// 0 and 1 have no prime factors.
///
/// # Example
/// ```
/// # use primodality::harmonicity::prime_factors;
/// assert_eq!(prime_factors(12), vec![2, 2, 3]);
/// assert_eq!(prime_factors(17), vec![17]);
/// assert!(prime_factors(1).is_empty());
/// ```
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut divisor = 2;
    while n > 1 && divisor <= n / divisor {
        while n % divisor == 0 {
            factors.push(divisor);
            n /= divisor;
        }
        divisor += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// `log2(numer * denom)`.
///
/// # Example
/// ```
/// # use primodality::{harmonicity::tenney_height, primitives::Ratio};
/// let fifth = Ratio::new(3, 2).unwrap();
/// assert!((tenney_height(fifth).unwrap() - 6f64.log2()).abs() < 1e-12);
/// assert_eq!(tenney_height(Ratio::UNISON).unwrap(), 0.0);
/// ```
pub fn tenney_height(ratio: Ratio) -> TuningResult<f64> {
    check_non_zero(ratio, "Tenney height")?;
    Ok((ratio.numer()? as f64 * ratio.denom()? as f64).log2())
}

/// Sum of prime factors of numerator and denominator, with multiplicity.
///
/// # Example
/// ```
/// # use primodality::{harmonicity::wilson_height, primitives::Ratio};
/// assert_eq!(wilson_height(Ratio::new(4, 3).unwrap()).unwrap(), 7);
/// assert_eq!(wilson_height(Ratio::UNISON).unwrap(), 0);
/// ```
pub fn wilson_height(ratio: Ratio) -> TuningResult<u64> {
    check_non_zero(ratio, "Wilson height")?;
    Ok(prime_factors(ratio.numer()?)
        .into_iter()
        .chain(prime_factors(ratio.denom()?))
        .sum())
}

/// `exp(mean(ln(values)))`.
///
/// Empty input gives 0. Every value must be positive and finite.
pub fn geometric_mean(values: &[f64]) -> TuningResult<f64> {
    if values.is_empty() {
        return Ok(0.0);
    }
    if let Some(bad) = values.iter().find(|v| !(v.is_finite() && **v > 0.0))
    {
        return Err(TuningError::DomainError(format!(
            "geometric mean needs positive values, got: {}",
            bad
        )));
    }
    let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
    Ok((log_sum / values.len() as f64).exp())
}

fn arithmetic_mean(values: &[f64]) -> f64 {
    match values.is_empty() {
        true => 0.0,
        false => values.iter().sum::<f64>() / values.len() as f64,
    }
}

/// Heights over every pair of distinct ratios (larger over smaller).
///
/// Intervals are not octave-reduced here: reduce the ratios first, if
/// octave-invariant scoring is needed. Repeated ratios count once.
/// With less than two distinct ratios, everything is zero.
pub fn calculate_chord_heights(ratios: &[Ratio]) -> TuningResult<ChordHeights> {
    let distinct = ratios.iter().copied().sorted().dedup().collect_vec();
    let intervals = distinct
        .iter()
        .tuple_combinations()
        .map(|(low, high)| high.divide(*low))
        .collect::<TuningResult<Vec<_>>>()?;
    if intervals.is_empty() {
        return Ok(ChordHeights::default());
    }
    let tenney = intervals
        .iter()
        .map(|i| tenney_height(*i))
        .collect::<TuningResult<Vec<_>>>()?;
    let wilson = intervals
        .iter()
        .map(|i| wilson_height(*i).map(|h| h as f64))
        .collect::<TuningResult<Vec<_>>>()?;
    log::trace!(
        "chord heights for {} ratios over {} intervals",
        distinct.len(),
        intervals.len()
    );
    Ok(ChordHeights {
        tenney_arithmetic: arithmetic_mean(&tenney),
        tenney_geometric: geometric_mean(&tenney)?,
        wilson_arithmetic: arithmetic_mean(&wilson),
        wilson_geometric: geometric_mean(&wilson)?,
    })
}
