//! Exhaustive census of 6-card poker hands.
//!
//! Every 6-card combination of a standard deck is enumerated, classified
//! into one of seventeen [`classify::Category`] labels, and tallied into a
//! [`census::Frequency`] table.
//!
//! ## Evaluation modes
//!
//! - [`classify::Exclusive`]: each hand gets its single best category,
//!   chosen by a fixed priority cascade. Counts sum to the population.
//! - [`classify::Inclusive`]: each hand gets every category it satisfies,
//!   plus categories implied by the stronger ones.
//!
//! ## Pipeline
//!
//! [`census::Census`] drives a lazy [`cards::HandIterator`] through batches
//! classified on a fixed-size rayon pool, merging the batch tallies into one
//! owned accumulator.
pub mod cards;
pub mod census;
pub mod classify;

// ============================================================================
// POPULATION
// ============================================================================
/// Cards per hand. Nothing else is supported.
pub const HAND_SIZE: usize = 6;
/// Cards in a standard deck.
pub const DECK_SIZE: usize = 52;
/// C(52, 6), the number of distinct 6-card hands.
pub const N_HANDS: usize = 20_358_520;

// ============================================================================
// PIPELINE DEFAULTS
// ============================================================================
/// Hands per batch handed to a worker.
pub const BATCH_SIZE: usize = 100;
/// Worker threads in the classification pool.
pub const N_WORKERS: usize = 16;
/// Progress lines logged over the course of one census.
pub const PROGRESS_INTERVAL: usize = 10;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
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
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
