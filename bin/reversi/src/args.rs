use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Probabilistic Reversi in the terminal")]
pub struct Args {
    /// Most realizations kept per turn. 0 keeps them all.
    #[arg(long, default_value_t = qrv_core::ENSEMBLE_CEILING)]
    pub ceiling: usize,
    /// Play random hinted squares for both colors until the game ends.
    #[arg(long)]
    pub auto: bool,
    /// Seed for --auto.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Also print each snapshot as JSON.
    #[arg(long)]
    pub json: bool,
}
