//! Hog: a two-player dice race to a goal score, and the tabular
//! learners that teach a policy to play it.
//!
//! This crate root holds the type aliases, tuning constants and runtime
//! helpers shared by every module.
//!
//! # Module Structure
//!
//! - `dice` — Dice sources (fair, scripted, closures)
//! - `rules` — Turn engine, round resolver and the per-game state machine
//! - `learning` — Value tables, state keys, exploration and averaging
//! - `training` — Q-learning and state-value self-play, evaluation
//! - `players` — Human, robot and random players plus the duel driver
//! - `save` — Binary table persistence and metadata sidecars
pub mod dice;
pub mod learning;
pub mod players;
pub mod rules;
pub mod save;
pub mod training;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Points held by a player. Unbounded during a turn, capped at the goal once stored.
pub type Score = u16;
/// Face value shown by a single die.
pub type Face = u8;
/// Estimated values, rewards and targets.
pub type Utility = f32;
/// Exploration rates and other probabilities.
pub type Probability = f32;
/// Seat index at the table (0 = player A, 1 = player B).
pub type Position = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of players at the table.
pub const N: usize = 2;
/// Score that ends the game. Also the largest goal the digit rules support.
pub const GOAL: Score = 100;
/// Largest number of dice a player may roll in one turn.
pub const MAX_ROLLS: u8 = 10;
/// Number of distinct actions (free bonus plus one through ten dice).
pub const ACTIONS: usize = MAX_ROLLS as usize + 1;
/// Default die.
pub const SIDES: Face = 6;
/// Face that collapses a whole turn to a single point.
pub const PIG_OUT_FACE: Face = 1;
/// Points scored by a pig-out.
pub const PIG_OUT_SCORE: Score = 1;
/// Ceiling of the free bonus, paid in full while the opponent is in single digits.
pub const FREE_BONUS: Score = 10;
/// Dice-count difference from the previous turn that earns the repeat bonus.
pub const REPEAT_DISTANCE: u8 = 2;
/// Points paid by the repeat bonus.
pub const REPEAT_BONUS: Score = 3;

// ============================================================================
// Q-LEARNING
// One-step temporal difference over (own, opponent, action).
// ============================================================================
/// Step size toward the temporal-difference target.
pub const Q_LEARNING_RATE: Utility = 0.6;
/// Discount applied to the successor's best action value.
pub const Q_DISCOUNT: Utility = 0.95;
/// Probability of a uniformly random action during training.
pub const Q_EPSILON: Probability = 0.2;
/// Reward credited per step of the winning trajectory.
pub const Q_STEP_REWARD: Utility = 1.0;

// ============================================================================
// STATE-VALUE SELF-PLAY
// Backward propagation of the terminal reward through visited score pairs.
// ============================================================================
/// Step size toward the discounted reward.
pub const V_LEARNING_RATE: Utility = 0.2;
/// Discount applied while propagating the reward backward.
pub const V_DISCOUNT: Utility = 0.9;
/// Probability of a uniformly random action during self-play.
pub const V_EPSILON: Probability = 0.3;
/// Monte Carlo samples per stochastic action when estimating successor values.
pub const V_SAMPLES: usize = 64;
/// Reward for winning a game.
pub const WIN_REWARD: Utility = 1.0;
/// Reward for losing a game.
pub const LOSS_REWARD: Utility = 0.0;

// ============================================================================
// TRAINING INFRASTRUCTURE
// ============================================================================
/// Turns after which a game is abandoned without any table update.
pub const TURN_CAP: usize = 1000;
/// Default number of training games.
pub const TRAINING_GAMES: usize = 100_000;
/// Default number of evaluation games.
pub const EVALUATION_GAMES: usize = 10_000;
/// Interval between progress log messages during training.
pub const TRAINING_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);
/// Default directory for learned tables.
pub const TABLE_DIR: &str = "tables";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

/// Global interrupt flag for graceful shutdown coordination.
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Optional training deadline from TRAIN_DURATION env var.
static DEADLINE: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();

/// Check if graceful shutdown was requested (via stdin "Q") or deadline reached.
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
        || DEADLINE
            .get()
            .map_or(false, |d| std::time::Instant::now() >= *d)
}

/// Register graceful interrupt handler. Type "Q" + Enter to stop after the current game.
/// Optionally set TRAIN_DURATION env var (e.g., "2h", "30m") for timed runs.
pub fn brb() {
    if let Ok(duration) = std::env::var("TRAIN_DURATION") {
        match parse_duration(&duration) {
            Some(deadline) => {
                let _ = DEADLINE.set(std::time::Instant::now() + deadline);
                log::info!("training will stop after {}", duration);
            }
            None => log::warn!("ignoring unparseable TRAIN_DURATION {:?}", duration),
        }
    }
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, finishing current game...");
                    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (index, unit) = s.char_indices().last()?;
    let value: u64 = s[..index].parse().ok()?;
    let scale = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86400,
        _ => return None,
    };
    value.checked_mul(scale).map(std::time::Duration::from_secs)
}
