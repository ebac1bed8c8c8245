mod clients;
mod conversation;
mod error;

pub use crate::{clients::*, conversation::*, error::*};
