//! Chords from a pool of pitches, and their ranking by harmonicity.
use std::fmt;

use itertools::Itertools;

use crate::error::{TuningError, TuningResult};
use crate::harmonicity::{
    calculate_chord_heights, tenney_height, wilson_height, ChordHeights,
};
use crate::primitives::Ratio;

/// Smallest chord, that has an interval.
static MIN_CHORD_SIZE: usize = 2;

/// Pitches, sorted ascending, with every interval between them.
///
/// Intervals go in pair order (`0-1`, `0-2`, ..., `1-2`, ...), each is
/// `higher / lower`, octave-reduced.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Chord {
    ratios: Vec<Ratio>,
    intervals: Vec<Ratio>,
}
impl Chord {
    /// # Example
    /// ```
    /// # use primodality::{chord::Chord, primitives::Ratio};
    /// let chord = Chord::new([
    ///     Ratio::new(3, 2).unwrap(),
    ///     Ratio::UNISON,
    ///     Ratio::new(5, 4).unwrap(),
    /// ])
    /// .unwrap();
    /// assert_eq!(chord.to_string(), "[1/1, 5/4, 3/2]");
    /// assert_eq!(chord.intervals()[2], Ratio::new(6, 5).unwrap());
    /// assert!(Chord::new([Ratio::UNISON]).is_err());
    /// ```
    pub fn new(ratios: impl IntoIterator<Item = Ratio>) -> TuningResult<Self> {
        let ratios = ratios.into_iter().sorted().collect_vec();
        if ratios.len() < MIN_CHORD_SIZE {
            return Err(TuningError::InsufficientSize {
                expected: MIN_CHORD_SIZE,
                found: ratios.len(),
            });
        }
        let intervals = ratios
            .iter()
            .tuple_combinations()
            .map(|(low, high)| high.divide(*low)?.octave_reduce())
            .collect::<TuningResult<Vec<_>>>()?;
        Ok(Self { ratios, intervals })
    }

    pub fn ratios(&self) -> &[Ratio] {
        &self.ratios
    }
    pub fn intervals(&self) -> &[Ratio] {
        &self.intervals
    }

    /// Mean Tenney height of the intervals.
    pub fn tenney_height(&self) -> TuningResult<f64> {
        let sum = self
            .intervals
            .iter()
            .map(|i| tenney_height(*i))
            .sum::<TuningResult<f64>>()?;
        Ok(sum / self.intervals.len() as f64)
    }

    /// Mean Wilson height of the intervals.
    pub fn wilson_height(&self) -> TuningResult<f64> {
        let sum = self
            .intervals
            .iter()
            .map(|i| wilson_height(*i))
            .sum::<TuningResult<u64>>()?;
        Ok(sum as f64 / self.intervals.len() as f64)
    }

    /// Heights of raw (not octave-reduced) intervals between the pitches.
    pub fn heights(&self) -> TuningResult<ChordHeights> {
        calculate_chord_heights(&self.ratios)
    }
}
impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.ratios.iter().join(", "))
    }
}

/// Chord with its mean heights.
#[derive(Debug, PartialEq, Clone)]
pub struct AnalyzedChord {
    pub chord: Chord,
    pub tenney_height: f64,
    pub wilson_height: f64,
}

/// Every combination of `size` distinct pitches from the pool.
///
/// Repeated pitches in the pool count once, otherwise pool order is kept.
/// If the pool is smaller than `size`, no chords are made.
pub fn generate_chords(
    pool: &[Ratio],
    size: usize,
) -> TuningResult<Vec<Chord>> {
    if size < MIN_CHORD_SIZE {
        return Err(TuningError::InsufficientSize {
            expected: MIN_CHORD_SIZE,
            found: size,
        });
    }
    let chords = pool
        .iter()
        .copied()
        .unique()
        .combinations(size)
        .map(Chord::new)
        .collect::<TuningResult<Vec<_>>>()?;
    log::debug!(
        "generated {} chords of {} from pool of {}",
        chords.len(),
        size,
        pool.len()
    );
    Ok(chords)
}

/// Score chords and sort them: lower Tenney height first, then lower Wilson
/// height. Equal chords keep their order.
pub fn analyze_chords(
    chords: impl IntoIterator<Item = Chord>,
) -> TuningResult<Vec<AnalyzedChord>> {
    let mut analyzed = chords
        .into_iter()
        .map(|chord| {
            Ok(AnalyzedChord {
                tenney_height: chord.tenney_height()?,
                wilson_height: chord.wilson_height()?,
                chord,
            })
        })
        .collect::<TuningResult<Vec<_>>>()?;
    analyzed.sort_by(|a, b| {
        a.tenney_height
            .total_cmp(&b.tenney_height)
            .then_with(|| a.wilson_height.total_cmp(&b.wilson_height))
    });
    Ok(analyzed)
}

/// First `n` analyzed chords, as they are.
pub fn get_best_chords(
    analyzed: &[AnalyzedChord],
    n: usize,
) -> &[AnalyzedChord] {
    &analyzed[..n.min(analyzed.len())]
}

#[cfg(test)]
mod tests {
    use crate::chord::{
        analyze_chords, generate_chords, get_best_chords, Chord,
    };
    use crate::error::TuningError;
    use crate::primitives::Ratio;

    fn ratio(numer: u64, denom: u64) -> Ratio {
        Ratio::new(numer, denom).unwrap()
    }

    fn major_triad() -> Chord {
        Chord::new([ratio(1, 1), ratio(5, 4), ratio(3, 2)]).unwrap()
    }

    #[test]
    fn test_chord_initialization() {
        let chord = major_triad();
        assert_eq!(chord.ratios().len(), 3);
        assert_eq!(
            chord.intervals(),
            &[ratio(5, 4), ratio(3, 2), ratio(6, 5)]
        );
    }

    #[test]
    fn test_intervals_are_octave_reduced() {
        let chord =
            Chord::new([ratio(1, 1), ratio(3, 1), ratio(5, 1)]).unwrap();
        assert_eq!(
            chord.intervals(),
            &[ratio(3, 2), ratio(5, 4), ratio(5, 3)]
        );
    }

    #[test]
    fn test_heights() {
        let chord = major_triad();
        assert!((chord.tenney_height().unwrap() - 3.937927).abs() < 1e-6);
        assert!((chord.wilson_height().unwrap() - 8.0).abs() < 1e-9);
        let heights = chord.heights().unwrap();
        assert!((heights.tenney_arithmetic - 3.937927).abs() < 1e-6);
    }

    #[test]
    fn test_too_small() {
        assert_eq!(
            Chord::new([ratio(3, 2)]),
            Err(TuningError::InsufficientSize {
                expected: 2,
                found: 1
            })
        );
        assert!(matches!(
            generate_chords(&[ratio(1, 1), ratio(3, 2)], 1),
            Err(TuningError::InsufficientSize { .. })
        ));
    }

    #[test]
    fn test_generate_chords() {
        let pool = [ratio(1, 1), ratio(5, 4), ratio(3, 2), ratio(7, 4)];
        assert_eq!(generate_chords(&pool, 3).unwrap().len(), 4);
        assert_eq!(generate_chords(&pool, 2).unwrap().len(), 6);
        assert!(generate_chords(&pool, 5).unwrap().is_empty());
        let doubled = [ratio(1, 1), ratio(5, 4), ratio(1, 1)];
        assert_eq!(generate_chords(&doubled, 2).unwrap().len(), 1);
    }

    #[test]
    fn test_analyze_and_best() {
        let pool = [ratio(1, 1), ratio(5, 4), ratio(3, 2), ratio(7, 4)];
        let analyzed =
            analyze_chords(generate_chords(&pool, 3).unwrap()).unwrap();
        assert_eq!(analyzed.len(), 4);
        for window in analyzed.windows(2) {
            assert!(window[0].tenney_height <= window[1].tenney_height);
        }
        let best = get_best_chords(&analyzed, 2);
        assert_eq!(best.len(), 2);
        assert!(best[0].tenney_height <= best[1].tenney_height);
        assert_eq!(best[0].chord, major_triad());
        assert_eq!(get_best_chords(&analyzed, 10).len(), 4);
    }
}
