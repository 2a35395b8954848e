//! Core type aliases, traits, and constants for qreversi.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the qreversi workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Relative likelihood carried by a single board realization.
/// Only ratios between weights are meaningful.
pub type Weight = f64;
/// Rounded black-occupancy probability of a cell, in `0..=100`.
pub type Percent = u8;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and autoplay.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// BOARD GEOMETRY
// ============================================================================
/// Side length of the square board.
pub const SIZE: usize = 6;
/// Number of cells on the board. Must fit in a u64 occupancy mask.
pub const CELLS: usize = SIZE * SIZE;
/// Index of the lower-right cell of the central 2x2 block.
pub const CENTER: usize = SIZE / 2;

// ============================================================================
// ENSEMBLE PARAMETERS
// Every turn branches each realization on every legal stone color.
// ============================================================================
/// Number of seed realizations: every Black/White assignment of the 4 center cells.
pub const SEEDS: usize = 1 << 4;
/// Initial weight of each seed realization.
pub const SEED_WEIGHT: Weight = 1.0;
/// Weight multiplier for a child whose stone matches the asserted color.
pub const ABUNDANCE_RATIO: Weight = 1.2;
/// Default population cap used by the terminal binary (2^16 realizations).
pub const ENSEMBLE_CEILING: usize = 0x10000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> std::io::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e))
}
