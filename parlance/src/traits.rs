mod speaker;

pub use speaker::*;
