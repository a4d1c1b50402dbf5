pub mod cards;
pub mod carousel;
pub mod constants;
pub mod longpress;

pub use cards::*;
pub use carousel::*;
pub use constants::*;
pub use longpress::*;
