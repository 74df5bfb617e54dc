pub mod package;
pub mod query;
pub mod stats;

pub use package::*;
pub use query::*;
pub use stats::*;
