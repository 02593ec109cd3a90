//! Deal four playing cards for the 24 Game and hand them to a solver.
//!
//! The core (cards, solver links, the shuffle state machine) is plain Rust and
//! runs anywhere. The `client` feature adds a leptos front-end that renders the
//! table in the browser, and `wasm32` builds expose the core to JavaScript.
pub mod cards;
pub mod solver;
pub mod table;

#[cfg(feature = "client")]
pub mod client;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

// ============================================================================
// CONFIGURATION
// ============================================================================
/// Base address of the external 24 solver.
pub const SOLVER_URL: &str = "http://24solver.us-west-2.elasticbeanstalk.com/";
/// Number of cards on the table.
pub const HAND_SIZE: usize = 4;
/// How long the old hand takes to animate out before the new one is dealt.
pub const DEAL_DELAY: std::time::Duration = std::time::Duration::from_millis(500);
/// How long the new hand takes to settle before the table is idle again.
pub const REVEAL_DELAY: std::time::Duration = std::time::Duration::from_millis(100);
/// Page title and heading.
pub const TITLE: &str = "24 Game";
/// Instructions shown above the cards.
pub const RULES: &str = "Try to make 24 using these four numbers with basic arithmetic (+, -, ×, ÷). \
                         You must use each number exactly once. You can use parentheses.";

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation from the thread-local generator.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Route `log` records to the browser console.
#[cfg(feature = "client")]
pub fn log() {
    console_log::init_with_level(log::Level::Debug).expect("initialize logger");
}
