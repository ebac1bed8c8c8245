#![doc = include_str!("../README.md")]

mod conversation_command;
mod error;

pub use crate::{conversation_command::*, error::*};
