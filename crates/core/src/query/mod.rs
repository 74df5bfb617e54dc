pub mod engine;

pub use engine::{QueryEngine, SUGGEST_LIMIT};
