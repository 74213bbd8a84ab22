mod catalog;
pub use catalog::*;
