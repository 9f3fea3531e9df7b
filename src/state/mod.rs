mod gate;
mod persistence;
mod session;
mod stack;

pub use gate::AccessGate;
pub use persistence::{load_input, save_input};
pub use session::{Projection, Session};
pub use stack::{Stack, StackItem};
