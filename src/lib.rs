mod load;
mod secret;
pub mod shared;

pub use load::*;
pub use secret::*;
