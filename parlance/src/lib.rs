mod clients;
mod error;
mod traits;
mod waits;

pub use clients::*;
pub use error::*;
pub use traits::*;
pub use waits::*;
