#![no_std]

#[macro_use]
mod log;

mod error;

pub mod config;
pub mod device;
pub mod events;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::device::D7s;
pub use crate::error::{Error, Result};
