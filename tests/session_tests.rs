//! End-to-end checks of the session API: judging flow, restore fallback,
//! skip policy and both rankings.

use owl_ranking::config::{RankingSettings, SkipPolicy, default_owls};
use owl_ranking::domain::{Choice, Outcome, Pair};
use owl_ranking::rating::estimate_strengths;
use owl_ranking::scheduler::enumerate_pairs;
use owl_ranking::session::{SessionSnapshot, SessionState};
use rand::SeedableRng;
use rand::rngs::StdRng;

const XYZ: [&str; 3] = ["X", "Y", "Z"];

#[test]
fn test_default_owl_session_has_every_pair() {
    let state = SessionState::initialize(&default_owls(), &mut StdRng::seed_from_u64(42));
    assert_eq!(state.progress(), (0, 171));
}

#[test]
fn test_seeded_sessions_share_pair_order() {
    let a = SessionState::initialize(&XYZ, &mut StdRng::seed_from_u64(99));
    let b = SessionState::initialize(&XYZ, &mut StdRng::seed_from_u64(99));
    assert_eq!(a.snapshot().pairs, b.snapshot().pairs);
}

#[test]
fn test_judging_every_pair_completes_session() {
    let mut state = SessionState::initialize(&default_owls(), &mut StdRng::seed_from_u64(1));
    let policy = SkipPolicy::default();
    let mut judged = 0;
    let mut skipped = 0;

    while !state.is_complete() {
        if state.maybe_auto_resolve(&policy).is_some() {
            skipped += 1;
            continue;
        }
        // Pairs are stored lower index first, so the lower index always wins
        state.apply_choice(Choice::First);
        judged += 1;
    }

    assert_eq!(judged + skipped, 171);
    assert!(skipped > 0);
    assert_eq!(state.ledger().len(), 171);
    assert_eq!(state.ledger().scores().iter().sum::<i64>(), 0);
    assert_eq!(state.current_pair(), None);
    let ranking = state.simple_ranking();
    assert_eq!(ranking.len(), 19);
    assert!(ranking[0].value >= ranking[18].value);
}

#[test]
fn test_restore_with_wrong_score_length_starts_fresh() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = SessionState::initialize(&XYZ, &mut rng);
    state.apply_choice(Choice::First);

    let mut snapshot = state.snapshot();
    snapshot.scores = vec![1, -1];

    let restored = SessionState::restore(&XYZ, snapshot, &mut rng);
    assert_eq!(restored.progress(), (0, 3));
    assert!(restored.ledger().is_empty());
    assert_eq!(restored.ledger().scores(), &[0, 0, 0]);
}

#[test]
fn test_restore_with_wrong_pair_count_starts_fresh() {
    let mut rng = StdRng::seed_from_u64(7);
    let snapshot = SessionSnapshot {
        pairs: vec![Pair::new(0, 1)],
        scores: vec![0, 0, 0],
        outcomes: Vec::new(),
        cursor: 0,
    };

    let restored = SessionState::restore(&XYZ, snapshot, &mut rng);
    assert_eq!(restored.progress(), (0, 3));
}

#[test]
fn test_snapshot_survives_json_encoding() {
    let mut state = SessionState::initialize(&XYZ, &mut StdRng::seed_from_u64(5));
    state.apply_choice(Choice::Second);

    let json = serde_json::to_string(&state.snapshot()).unwrap();
    let decoded: SessionSnapshot = serde_json::from_str(&json).unwrap();
    let restored = SessionState::try_restore(&XYZ, decoded).unwrap();

    assert_eq!(restored, state);
}

#[test]
fn test_skip_policy_threshold_five() {
    let names = ["A", "B", "C", "D", "E", "F"];
    let mut outcomes = vec![Outcome::new(0, 2); 10];
    outcomes.extend(vec![Outcome::new(1, 3); 2]);
    let mut pairs: Vec<Pair> = enumerate_pairs(6).into_iter().filter(|p| *p != Pair::new(0, 1)).collect();
    pairs.insert(12, Pair::new(0, 1));

    let snapshot = SessionSnapshot {
        pairs,
        scores: vec![10, 2, -10, -2, 0, 0],
        outcomes,
        cursor: 12,
    };
    let mut state = SessionState::try_restore(&names, snapshot).unwrap();

    assert_eq!(state.current_pair(), Some(Pair::new(0, 1)));
    let resolved = state.maybe_auto_resolve(&SkipPolicy { threshold: 5 });
    assert_eq!(resolved, Some(Outcome::new(0, 1)));
    assert_eq!(state.progress(), (13, 15));

    // Equal scores never skip, even with a zero threshold
    let mut fresh = SessionState::initialize(&names, &mut StdRng::seed_from_u64(0));
    assert_eq!(fresh.maybe_auto_resolve(&SkipPolicy { threshold: 0 }), None);
}

#[test]
fn test_empty_ledger_strength_ranking_is_alphabetical() {
    let names = ["Snowy Owl", "Barn Owl", "Elf Owl"];
    let state = SessionState::initialize(&names, &mut StdRng::seed_from_u64(0));
    let ranked = state.strength_ranking(&RankingSettings::default());

    assert!(ranked.iter().all(|r| r.value == 1.0));
    let order: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(order, vec!["Barn Owl", "Elf Owl", "Snowy Owl"]);
}

#[test]
fn test_strength_ranking_is_repeatable_mid_session() {
    let mut state = SessionState::initialize(&default_owls(), &mut StdRng::seed_from_u64(3));
    for _ in 0..40 {
        state.apply_choice(Choice::First);
    }
    let before = state.snapshot();

    let settings = RankingSettings::default();
    let first = state.strength_ranking(&settings);
    let second = state.strength_ranking(&settings);

    assert_eq!(first, second);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.value.to_bits(), b.value.to_bits());
    }
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_xyz_scenario() {
    let outcomes = [Outcome::new(0, 1), Outcome::new(0, 1), Outcome::new(1, 2), Outcome::new(2, 0)];
    let settings = RankingSettings::default();
    let estimate = estimate_strengths(&outcomes, 3, &settings);

    assert!(estimate.converged);
    assert!(estimate.iterations <= settings.max_iterations);
    let s = &estimate.strengths;
    assert!(s[0] > s[1] && s[0] > s[2]);
    assert!((estimate.mean() - 1.0).abs() < 1e-9);
}
