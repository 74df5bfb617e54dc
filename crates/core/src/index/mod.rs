//! Derived lookup structures over the record list.

pub mod normalize;
pub mod reference;

pub use normalize::normalize_ref;
pub use reference::ReverseIndex;
