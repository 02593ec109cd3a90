mod app;
mod face;
mod timers;
mod window;

pub use app::*;
pub use face::*;
pub use timers::*;
pub use window::*;

#[cfg(all(test, target_arch = "wasm32"))]
mod tests;
