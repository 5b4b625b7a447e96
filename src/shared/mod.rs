mod base;
mod connection;
mod sync;

pub use base::*;
pub use connection::*;
pub use sync::*;
