mod clock;
mod phase;
mod scheduler;
mod shuffler;
mod state;
mod tick;

pub use clock::*;
pub use phase::*;
pub use scheduler::*;
pub use shuffler::*;
pub use state::*;
pub use tick::*;
