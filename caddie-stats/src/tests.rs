//! Unit coverage for round analysis and hole history.
#![expect(clippy::expect_used, reason = "tests should fail fast on unexpected values")]

use caddie_core::{BallPosition, Lie, MissDirection};
use rstest::{fixture, rstest};

use crate::{
    HandicapTier, HoleCard, HoleScore, RoundRecord, ShotCategory, ShotOutcome, analyze_rounds,
    default_statistics, hole_history, summarise_strokes_gained,
};

fn round(course: &str, card: &[(u8, u8)], strokes: &[(u8, u32)]) -> RoundRecord {
    RoundRecord {
        course_id: Some(course.to_owned()),
        holes: card
            .iter()
            .map(|&(number, par)| HoleCard {
                number,
                par: Some(par),
            })
            .collect(),
        scores: strokes
            .iter()
            .map(|&(hole, taken)| HoleScore {
                hole_number: Some(hole),
                strokes: Some(taken),
            })
            .collect(),
        shots: Vec::new(),
    }
}

#[fixture]
fn two_rounds() -> Vec<RoundRecord> {
    let card = [(1, 4), (2, 3), (3, 5), (4, 4)];
    vec![
        round("links", &card, &[(1, 4), (2, 2), (3, 6), (4, 6)]),
        round("links", &card, &[(1, 5), (2, 3), (3, 5), (4, 7)]),
    ]
}

#[rstest]
#[case(0.0, HandicapTier::Low)]
#[case(5.0, HandicapTier::Low)]
#[case(5.1, HandicapTier::Mid)]
#[case(15.0, HandicapTier::Mid)]
#[case(22.0, HandicapTier::High)]
#[case(25.0, HandicapTier::High)]
#[case(30.0, HandicapTier::Beginner)]
fn tiers_by_handicap(#[case] handicap: f64, #[case] expected: HandicapTier) {
    assert_eq!(HandicapTier::of(handicap), expected);
}

#[rstest]
fn defaults_without_handicap_assume_fifteen() {
    let stats = default_statistics(None);
    assert_eq!(stats.handicap, None);
    assert_eq!(stats.scoring_distribution, HandicapTier::Mid.distribution());
    assert_eq!(stats.tendencies.miss_direction, MissDirection::Right);
    assert!((stats.tendencies.three_putts_per_round - 2.25).abs() < 1e-9);
}

#[rstest]
fn scratch_defaults_floor_the_per_round_heuristics() {
    let stats = default_statistics(Some(0.0));
    assert_eq!(stats.tendencies.miss_direction, MissDirection::Balanced);
    assert!((stats.tendencies.doubles_per_round - 0.5).abs() < 1e-9);
    assert!((stats.tendencies.miss_short_pct - 52.0).abs() < 1e-9);
}

#[rstest]
fn distribution_counts_every_hole(two_rounds: Vec<RoundRecord>) {
    let stats = analyze_rounds(&two_rounds, Some(12.0));
    let dist = &stats.scoring_distribution;
    assert_eq!(stats.rounds_analyzed, 2);
    assert!((dist.birdies - 12.5).abs() < 1e-9);
    assert!((dist.pars - 37.5).abs() < 1e-9);
    assert!((dist.bogeys - 25.0).abs() < 1e-9);
    assert!((dist.doubles - 12.5).abs() < 1e-9);
    assert!((dist.triples_plus - 12.5).abs() < 1e-9);
    assert!((dist.total() - 100.0).abs() < 1e-9);
}

#[rstest]
fn par_averages_and_tendencies(two_rounds: Vec<RoundRecord>) {
    let stats = analyze_rounds(&two_rounds, Some(12.0));
    assert!((stats.par_averages.par3 - 2.5).abs() < 1e-9);
    assert!((stats.par_averages.par4 - 5.5).abs() < 1e-9);
    assert!((stats.par_averages.par5 - 5.5).abs() < 1e-9);
    let tendencies = &stats.tendencies;
    assert_eq!(tendencies.miss_direction, MissDirection::Right);
    assert!((tendencies.doubles_per_round - 1.0).abs() < 1e-9);
    assert!((tendencies.par5_bogey_rate - 50.0).abs() < 1e-9);
    assert!((tendencies.three_putts_per_round - 1.8).abs() < 1e-9);
    assert!((tendencies.scoring_zone_bogey_rate - 25.0).abs() < 1e-9);
}

#[rstest]
fn rounds_without_a_handicap_stay_balanced(two_rounds: Vec<RoundRecord>) {
    let stats = analyze_rounds(&two_rounds, None);
    assert_eq!(stats.tendencies.miss_direction, MissDirection::Balanced);
    assert!((stats.tendencies.miss_short_pct - 58.0).abs() < 1e-9);
}

#[rstest]
fn unplayed_pars_fall_back() {
    let rounds = [round("links", &[(1, 4)], &[(1, 4)])];
    let stats = analyze_rounds(&rounds, Some(4.0));
    assert!((stats.par_averages.par3 - 3.5).abs() < 1e-9);
    assert!((stats.par_averages.par5 - 5.5).abs() < 1e-9);
    assert!((stats.tendencies.par5_bogey_rate - 20.0).abs() < 1e-9);
}

#[rstest]
fn holes_missing_from_the_card_are_par_four() {
    let rounds = [round("links", &[], &[(9, 5)])];
    let stats = analyze_rounds(&rounds, None);
    assert!((stats.scoring_distribution.bogeys - 100.0).abs() < 1e-9);
}

#[rstest]
fn incomplete_scores_fall_back_to_defaults() {
    let mut partial = round("links", &[(1, 4)], &[]);
    partial.scores.push(HoleScore {
        hole_number: Some(1),
        strokes: None,
    });
    let stats = analyze_rounds(&[partial], Some(30.0));
    assert_eq!(stats.rounds_analyzed, 0);
    assert_eq!(
        stats.scoring_distribution,
        HandicapTier::Beginner.distribution()
    );
}

#[rstest]
fn hole_history_filters_course_and_hole(two_rounds: Vec<RoundRecord>) {
    let mut rounds = two_rounds;
    rounds.push(round("elsewhere", &[(4, 4)], &[(4, 3)]));
    let history = hole_history(&rounds, "links", 4).expect("hole 4 was played");
    assert_eq!(history.times_played, 2);
    assert!((history.avg_score - 6.5).abs() < 1e-9);
    assert_eq!(history.best_score, 6);
    assert_eq!(history.worst_score, 7);
    assert!((history.birdie_rate - 0.0).abs() < 1e-9);
    assert!((history.bogey_rate - 100.0).abs() < 1e-9);
}

#[rstest]
fn hole_history_uses_each_rounds_par() {
    let rounds = [
        round("links", &[(2, 3)], &[(2, 3)]),
        round("links", &[(2, 4)], &[(2, 3)]),
        round("links", &[(2, 4)], &[(2, 5)]),
    ];
    let history = hole_history(&rounds, "links", 2).expect("hole 2 was played");
    assert!((history.avg_score - 3.67).abs() < 1e-9);
    assert!((history.birdie_rate - 33.3).abs() < 1e-9);
    assert!((history.bogey_rate - 33.3).abs() < 1e-9);
}

#[rstest]
fn unplayed_hole_has_no_history(two_rounds: Vec<RoundRecord>) {
    assert_eq!(hole_history(&two_rounds, "links", 18), None);
    assert_eq!(hole_history(&two_rounds, "unknown", 1), None);
}

#[rstest]
#[case(BallPosition::InPlay { distance: 410.0, lie: Lie::Tee }, 4, Some(ShotCategory::OffTheTee))]
#[case(BallPosition::InPlay { distance: 165.0, lie: Lie::Tee }, 3, Some(ShotCategory::Approach))]
#[case(BallPosition::InPlay { distance: 140.0, lie: Lie::Fairway }, 4, Some(ShotCategory::Approach))]
#[case(BallPosition::InPlay { distance: 20.0, lie: Lie::Sand }, 4, Some(ShotCategory::ShortGame))]
#[case(BallPosition::InPlay { distance: 12.0, lie: Lie::Green }, 4, Some(ShotCategory::Putting))]
#[case(BallPosition::Holed, 4, None)]
fn shot_categories(
    #[case] start: BallPosition,
    #[case] par: u8,
    #[case] expected: Option<ShotCategory>,
) {
    assert_eq!(ShotCategory::of(start, par), expected);
}

#[rstest]
fn strokes_gained_without_shots_is_zero(two_rounds: Vec<RoundRecord>) {
    let summary = summarise_strokes_gained(&two_rounds, Some(10.0));
    assert_eq!(summary, caddie_core::StrokesGainedSummary::default());
}

#[rstest]
fn strokes_gained_averages_tracked_rounds() {
    let mut tracked = round("links", &[(1, 4)], &[(1, 2)]);
    tracked.shots = vec![
        ShotOutcome {
            hole_number: 1,
            start: BallPosition::InPlay {
                distance: 5.0,
                lie: Lie::Green,
            },
            end: BallPosition::Holed,
            strokes: 1,
        },
        ShotOutcome {
            hole_number: 1,
            start: BallPosition::InPlay {
                distance: 150.0,
                lie: Lie::Fairway,
            },
            end: BallPosition::InPlay {
                distance: 5.0,
                lie: Lie::Green,
            },
            strokes: 1,
        },
    ];
    let untracked = round("links", &[(1, 4)], &[(1, 4)]);
    let summary = summarise_strokes_gained(&[tracked, untracked], Some(0.0));
    assert!((summary.putting - 0.28).abs() < 1e-9);
    assert!((summary.approach - 0.64).abs() < 1e-9);
    assert!((summary.total - 0.92).abs() < 1e-9);
    assert!((summary.off_the_tee - 0.0).abs() < 1e-9);
}

#[rstest]
fn camel_case_records_deserialise() {
    let json = r#"{
        "courseId": "links",
        "holes": [{"number": 1, "par": 3}],
        "scores": [{"holeNumber": 1, "strokes": 2}, {"holeNumber": 2}]
    }"#;
    let record: RoundRecord = serde_json::from_str(json).expect("parse round");
    assert!(record.is_on("links"));
    assert_eq!(record.scored_holes().count(), 1);
    assert_eq!(record.par_for(2), 4);
}
