//! Text report of one exploration run.
use std::fmt::Write;

use itertools::Itertools;
use primodality::{
    chord::{analyze_chords, generate_chords, get_best_chords},
    distance::{compute_mode_distances, nearest_modes, ranked_relations},
    primitives::{ModeId, PitchClass, Ratio},
    universe::{build_universe, Universe},
    TuningError,
};

use crate::config::ExplorerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Tuning(#[from] TuningError),
    #[error("Can not write report: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("Can not choose focus: {0}")]
    Focus(String),
}
pub type ExplorerResult<T> = Result<T, ExplorerError>;

fn tones(tones: impl IntoIterator<Item = PitchClass>) -> String {
    format!("[{}]", tones.into_iter().join(", "))
}

/// Focus pitch class from config, or the lowest one.
fn choose_pitch_class(
    universe: &Universe,
    config: &ExplorerConfig,
) -> ExplorerResult<PitchClass> {
    match &config.focus_pitch_class {
        Some(raw) => {
            let pc = PitchClass::from_ratio(raw.parse::<Ratio>()?)?;
            match universe.contains_pitch_class(&pc) {
                true => Ok(pc),
                false => Err(ExplorerError::Focus(format!(
                    "pitch class {} is not in the universe",
                    pc
                ))),
            }
        }
        None => universe
            .pitch_classes()
            .next()
            .map(|(pc, _)| *pc)
            .ok_or(ExplorerError::Focus("universe is empty".to_string())),
    }
}

fn choose_mode(
    universe: &Universe,
    pitch_class: &PitchClass,
    rank: usize,
) -> ExplorerResult<ModeId> {
    let modes = universe.modes_of(pitch_class).ok_or(ExplorerError::Focus(
        format!("pitch class {} has no modes", pitch_class),
    ))?;
    modes.iter().nth(rank).copied().ok_or(ExplorerError::Focus(format!(
        "mode rank {} is out of range: {} has {} modes",
        rank,
        pitch_class,
        modes.len()
    )))
}

/// Build the universe from config and describe it.
pub fn explore(config: &ExplorerConfig) -> ExplorerResult<String> {
    let mut out = String::new();
    writeln!(out, "branches {{{}}}", config.branches.iter().join(", "))?;
    writeln!(out, "modes {{{}}}", config.degrees.iter().join(", "))?;
    writeln!(out)?;

    log::info!("computing pitch classes and modes");
    let universe = build_universe(
        config.branches.iter().copied(),
        config.degrees.iter().copied(),
    )?;
    writeln!(out, "{} pitch classes", universe.pitch_class_count())?;
    writeln!(out, "{} modes", universe.mode_count())?;
    writeln!(out)?;

    log::info!("computing mode distances");
    let distances = compute_mode_distances(&universe)?;
    writeln!(out, "Top {} mode relations:", config.top_relations)?;
    for (pair, distance) in ranked_relations(&distances)
        .into_iter()
        .take(config.top_relations)
    {
        let (weighted, common, tenney) = distance.key();
        writeln!(
            out,
            "({}, {}) ({:.4}, {}, {:.4})",
            pair.lower(),
            pair.higher(),
            weighted,
            common,
            tenney
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Pitch Classes:")?;
    for (pc, modes) in universe.pitch_classes() {
        writeln!(out, "{} - Modes: {}", pc, modes.iter().join(", "))?;
    }
    writeln!(out)?;
    writeln!(out, "Modes:")?;
    for (mode, pcs) in universe.modes() {
        writeln!(
            out,
            "{} - Pitch Classes: {}",
            mode,
            tones(pcs.iter().copied())
        )?;
    }
    writeln!(out)?;

    let focus_pc = choose_pitch_class(&universe, config)?;
    writeln!(out, "Chosen PC: {}", focus_pc)?;
    let focus_mode = choose_mode(&universe, &focus_pc, config.focus_mode_rank)?;
    let focus_tones = universe.pitch_classes_of(&focus_mode).ok_or(
        ExplorerError::Focus(format!(
            "mode {} is not in the universe",
            focus_mode
        )),
    )?;
    writeln!(out, "Chosen Mode: {}", focus_mode)?;
    writeln!(out, "{}", tones(focus_tones.iter().copied()))?;
    writeln!(out)?;

    let related = nearest_modes(&distances, &focus_mode);
    writeln!(out, "{} related modes", related.len())?;
    match related.get(config.related_rank) {
        None => writeln!(
            out,
            "No related mode at rank {}",
            config.related_rank
        )?,
        Some((other, distance)) => {
            writeln!(out, "Chosen mode 2: {} {:?}", other, distance.key())?;
            let comparison = universe
                .compare_modes(&focus_mode, other)
                .ok_or(ExplorerError::Focus(format!(
                    "mode {} is not in the universe",
                    other
                )))?;
            writeln!(out, "Mode 1: {}", focus_mode)?;
            writeln!(out, "Unique Tones 1: {}", tones(comparison.unique_a))?;
            writeln!(out, "Common Tones: {}", tones(comparison.common))?;
            writeln!(out, "Unique Tones 2: {}", tones(comparison.unique_b))?;
            writeln!(out, "Mode 2: {}", other)?;
        }
    }
    writeln!(out)?;

    log::info!("analyzing chords of {}", config.chord_size);
    let pool = focus_tones.iter().map(|pc| pc.ratio()).collect_vec();
    let analyzed = analyze_chords(generate_chords(&pool, config.chord_size)?)?;
    writeln!(
        out,
        "Best chords of {} in {}:",
        config.chord_size, focus_mode
    )?;
    for analyzed in get_best_chords(&analyzed, config.best_chords) {
        writeln!(
            out,
            "{} Tenney Height: {:.4} Wilson Height: {:.4}",
            analyzed.chord, analyzed.tenney_height, analyzed.wilson_height
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{explore, ExplorerError};
    use crate::config::ExplorerConfig;
    use primodality::TuningError;

    #[test]
    fn test_default_report() {
        let report = explore(&ExplorerConfig::default()).unwrap();
        assert!(report
            .starts_with("branches {1, 3, 5, 7}\nmodes {5, 6, 7, 8, 9}"));
        assert!(report.contains("40 modes"));
        assert!(report.contains("Top 10 mode relations:"));
        assert!(report.contains("Chosen PC: 1/1"));
        assert!(report.contains("Chosen Mode: b1 m5 over"));
        assert!(report.contains("Best chords of 3 in b1 m5 over:"));
    }

    #[test]
    fn test_focus_from_config() {
        let config = ExplorerConfig {
            branches: [1, 7].into_iter().collect(),
            degrees: [5].into_iter().collect(),
            focus_pitch_class: Some("7/4".to_string()),
            ..Default::default()
        };
        let report = explore(&config).unwrap();
        assert!(report.contains("Chosen PC: 7/4"));
        assert!(report.contains("Chosen Mode: b7 m5 over"));
    }

    #[test]
    fn test_bad_focus() {
        let config = ExplorerConfig {
            focus_pitch_class: Some("23/16".to_string()),
            ..Default::default()
        };
        assert!(matches!(explore(&config), Err(ExplorerError::Focus(_))));
        let config = ExplorerConfig {
            focus_mode_rank: 1000,
            ..Default::default()
        };
        assert!(matches!(explore(&config), Err(ExplorerError::Focus(_))));
    }

    #[test]
    fn test_bad_parameters() {
        let config = ExplorerConfig {
            degrees: [1, 5].into_iter().collect(),
            ..Default::default()
        };
        assert!(matches!(
            explore(&config),
            Err(ExplorerError::Tuning(TuningError::InvalidParameter(_)))
        ));
        let config = ExplorerConfig {
            chord_size: 1,
            ..Default::default()
        };
        assert!(matches!(
            explore(&config),
            Err(ExplorerError::Tuning(TuningError::InsufficientSize { .. }))
        ));
    }
}
