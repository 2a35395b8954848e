//! Randomized full-game playouts through the public session surface.
use qrv_board::*;
use qrv_ensemble::*;
use qrv_session::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

const CAP: usize = 512;

/// every (x, y) the session currently reports playable
fn hints(session: &Session) -> Vec<(usize, usize)> {
    (0..Session::side())
        .flat_map(|y| (0..Session::side()).map(move |x| (x, y)))
        .filter(|&(x, y)| session.is_playable(x, y))
        .collect()
}

/// plays random hinted moves to the end, checking invariants after each
fn playout(seed: u64, ceiling: Ceiling) -> (Session, Vec<(usize, usize)>) {
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let mut session = Session::with_ceiling(ceiling);
    let mut moves = Vec::new();
    while let Status::InProgress(color) = session.status() {
        let options = hints(&session);
        assert!(!options.is_empty(), "in-progress game with no hint");
        let &(x, y) = options.choose(rng).expect("non-empty");
        let before = session.ensemble().current().clone();
        session.submit(x, y).expect("hinted move is accepted");
        moves.push((x, y));
        let square = Square::try_from((x, y)).unwrap();
        let after = session.ensemble().current();
        // topology: exactly the played square was filled, in every realization
        assert_eq!(after.occupied(), before.occupied() | u64::from(square));
        assert!(after.members().iter().all(|r| !r.grid().is_vacant(square)));
        // bounded population
        assert!(after.population() <= CAP);
        // the mover asserted their own color
        assert_eq!(session.ensemble().lineage().last().map(|p| p.color), Some(color));
        // probabilities
        for s in Square::all() {
            match after.black_probability(s) {
                Some(p) => assert!(p <= 100),
                None => assert!(after.is_vacant(s)),
            }
        }
    }
    (session, moves)
}

#[test]
fn games_terminate_with_consistent_outcome() {
    for seed in 0..4 {
        let (session, moves) = playout(seed, Ceiling::Capped(CAP));
        let score = session.score();
        assert!(moves.len() <= qrv_core::CELLS - 4);
        assert!(score.black + score.white <= qrv_core::CELLS);
        assert_eq!(session.status(), Status::Over(score.outcome()));
        assert!(hints(&session).is_empty());
    }
}

#[test]
fn legality_agrees_with_realizations() {
    let ref mut rng = SmallRng::seed_from_u64(99);
    let mut session = Session::with_ceiling(Ceiling::Capped(CAP));
    for _ in 0..10 {
        let Status::InProgress(color) = session.status() else {
            break;
        };
        for square in Square::all() {
            let (x, y) = square.into();
            let any = session
                .ensemble()
                .current()
                .members()
                .iter()
                .any(|r| r.can_place(square, color));
            assert_eq!(session.is_playable(x, y), any);
        }
        let &(x, y) = hints(&session).choose(rng).expect("hint");
        session.submit(x, y).unwrap();
    }
}

#[test]
fn replay_is_bit_identical() {
    let (a, moves) = playout(17, Ceiling::Capped(CAP));
    let mut b = Session::with_ceiling(Ceiling::Capped(CAP));
    for (x, y) in moves {
        b.submit(x, y).unwrap();
    }
    let ga = a.ensemble().current();
    let gb = b.ensemble().current();
    assert_eq!(ga, gb);
    assert_eq!(ga.total_weight().to_bits(), gb.total_weight().to_bits());
    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.ensemble().lineage(), b.ensemble().lineage());
}

#[test]
fn unbounded_opening_doubles_at_most() {
    let ref mut rng = SmallRng::seed_from_u64(3);
    let mut session = Session::new();
    for _ in 0..6 {
        if session.status().is_over() {
            break;
        }
        let before = session.ensemble().current().population();
        let &(x, y) = hints(&session).choose(rng).expect("hint");
        session.submit(x, y).unwrap();
        let after = session.ensemble().current().population();
        assert!(after >= 1 && after <= 2 * before);
    }
}
