pub mod footer;
pub mod navbar;

pub use footer::*;
pub use navbar::*;
