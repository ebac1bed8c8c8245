mod dummy_speaker;

pub use dummy_speaker::*;
