//! Reversi Binary
//!
//! Plays probabilistic Reversi in the terminal, two humans at one keyboard.
//!
//! Options: --ceiling, --auto, --seed, --json

mod args;
mod prompt;
mod render;

use clap::Parser;
use qrv_ensemble::Ceiling;
use qrv_session::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

fn main() -> anyhow::Result<()> {
    qrv_core::log()?;
    let args = args::Args::parse();
    let ceiling = Ceiling::from(args.ceiling);
    let ref mut rng = SmallRng::seed_from_u64(args.seed);
    let mut session = Session::with_ceiling(ceiling);
    log::info!("starting session, ensemble {}", ceiling);
    loop {
        println!("{}", render::board(&session.snapshot()));
        if args.json {
            println!("{}", serde_json::to_string(&session.snapshot())?);
        }
        let Status::InProgress(color) = session.status() else {
            break;
        };
        let (x, y) = match args.auto {
            true => *playable(&session)
                .choose(rng)
                .ok_or_else(|| anyhow::anyhow!("{} to move with no playable square", color))?,
            false => match prompt::square(color)? {
                Some(square) => square.into(),
                None => {
                    log::warn!("abandoned at turn {}", session.turn());
                    return Ok(());
                }
            },
        };
        match session.submit(x, y) {
            Ok(()) => continue,
            Err(SessionError::Illegal(e)) => eprintln!("{}", e),
            Err(e) => return Err(e.into()),
        }
    }
    println!("{}", session.ensemble().lineage());
    println!("{} | {}", session.status(), session.score());
    Ok(())
}

fn playable(session: &Session) -> Vec<(usize, usize)> {
    (0..Session::side())
        .flat_map(|y| (0..Session::side()).map(move |x| (x, y)))
        .filter(|&(x, y)| session.is_playable(x, y))
        .collect()
}
