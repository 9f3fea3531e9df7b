pub mod calculator;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod recommend;
pub mod state;

pub use error::{RecompError, Result};
pub use models::{BodyCompositionInput, BodyCompositionResult, MacroResult};
