use itertools::Itertools;
use primodality::{
    chord::{analyze_chords, generate_chords, get_best_chords},
    primitives::{Direction, ModeId, Ratio},
    universe::build_universe,
};

fn ratio(numer: u64, denom: u64) -> Ratio {
    Ratio::new(numer, denom).unwrap()
}

#[test]
fn test_best_triads() {
    let pool = [ratio(1, 1), ratio(5, 4), ratio(3, 2), ratio(7, 4)];
    let triads = generate_chords(&pool, 3).expect("Can not generate chords");
    assert_eq!(triads.len(), 4);
    let analyzed = analyze_chords(triads).expect("Can not analyze chords");
    let best = get_best_chords(&analyzed, 2);
    assert_eq!(best.len(), 2);
    assert!(best[0].tenney_height <= best[1].tenney_height);
    assert_eq!(
        best[0].chord.ratios(),
        &[ratio(1, 1), ratio(5, 4), ratio(3, 2)]
    );
}

#[test]
fn test_chords_from_mode() {
    let universe = build_universe([1], [8]).expect("Can not build universe");
    let mode = ModeId::new(1, 8, Direction::Overtone).unwrap();
    let pool = universe
        .pitch_classes_of(&mode)
        .unwrap()
        .iter()
        .map(|pc| pc.ratio())
        .collect_vec();
    let analyzed = analyze_chords(
        generate_chords(&pool, 3).expect("Can not generate chords"),
    )
    .expect("Can not analyze chords");
    // 8 choose 3
    assert_eq!(analyzed.len(), 56);
    analyzed
        .iter()
        .tuple_windows()
        .map(|(a, b)| {
            assert!(
                a.tenney_height < b.tenney_height
                    || (a.tenney_height == b.tenney_height
                        && a.wilson_height <= b.wilson_height)
            )
        })
        .count();
    // harmonics 4:5:6 share the lowest height with their transpositions
    let lowest = analyzed[0].tenney_height;
    assert!((lowest - 3.937927).abs() < 1e-6);
    assert!(analyzed
        .iter()
        .take_while(|a| (a.tenney_height - lowest).abs() < 1e-9)
        .any(|a| a.chord.ratios() == [ratio(1, 1), ratio(5, 4), ratio(3, 2)]));
}
