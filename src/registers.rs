//! Register map definitions for the D7S seismic sensor.
//!
//! Register addresses are 16 bits wide and travel on the bus as
//! (high byte, low byte).

use modular_bitfield::prelude::*;

use crate::params::{DeviceState, Threshold};

/// 7-bit I²C address of the D7S.
pub const DEVICE_ADDRESS: u8 = 0x55;

/// Register address of `STATE`.
pub const REG_STATE: u16 = 0x1000;
/// Register address of `EVENT`.
pub const REG_EVENT: u16 = 0x1002;
/// Register address of `MODE`.
pub const REG_MODE: u16 = 0x1003;
/// Register address of `CTRL`.
pub const REG_CTRL: u16 = 0x1004;
/// Register address of `MAIN_SI_H` (instantaneous SI, 0.1 cm/s per LSB).
pub const REG_MAIN_SI: u16 = 0x2000;
/// Register address of `MAIN_PGA_H` (instantaneous PGA, 1 gal per LSB).
pub const REG_MAIN_PGA: u16 = 0x2002;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every single-byte register value type.
pub trait Register: From<u8> + Into<u8> + Copy {
    /// Register address as documented in the datasheet.
    const ADDRESS: u16;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Reading the register clears its contents on the device.
    const CLEAR_ON_READ: bool;
}

/// Bitfield representation of the `STATE` register (address `0x1000`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    // Operating state (bits 2:0).
    pub raw_state: B3,
    #[skip]
    __: B5,
}

impl State {
    /// Decodes the operating state field.
    pub fn state(&self) -> DeviceState {
        DeviceState::from_bits(self.raw_state())
    }
}

impl Register for State {
    const ADDRESS: u16 = REG_STATE;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const CLEAR_ON_READ: bool = false;
}

impl From<u8> for State {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<State> for u8 {
    fn from(value: State) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `EVENT` register (address `0x1002`).
///
/// Reading the register clears it on the device.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    // Shutoff judgement output (bit 0).
    pub shutoff: bool,
    // Collapse judgement output (bit 1).
    pub collapse: bool,
    #[skip]
    __: B6,
}

impl Register for Event {
    const ADDRESS: u16 = REG_EVENT;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const CLEAR_ON_READ: bool = true;
}

impl From<u8> for Event {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Event> for u8 {
    fn from(value: Event) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CTRL` register (address `0x1004`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    #[skip]
    __: B3,
    // Shutoff/collapse threshold level (bit 3).
    pub threshold: Threshold,
    // Axis selection (bits 7:4). Kept raw so undocumented values survive a read.
    pub raw_axis: B4,
}

impl Register for Control {
    const ADDRESS: u16 = REG_CTRL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const CLEAR_ON_READ: bool = false;
}

impl From<u8> for Control {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Control> for u8 {
    fn from(value: Control) -> Self {
        value.into_bytes()[0]
    }
}
