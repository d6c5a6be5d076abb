//! Strongly typed parameter enumerations for the D7S driver.
//!
//! These enums map directly to datasheet field encodings and are used by the
//! high-level driver APIs. Prefer these types over raw integers to keep
//! register values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use d7s::params::{AxisSetting, DeviceState, Threshold};
//!
//! assert_eq!(AxisSetting::try_from(3), Ok(AxisSetting::AutoSwitch));
//! assert_eq!(DeviceState::from_bits(0x81), DeviceState::NormalModeNotInStandby);
//! let _ = Threshold::Low;
//! ```

use modular_bitfield::prelude::Specifier;

/// Operating state reported by the `STATE` register (bits 2:0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Normal mode, standby. The sensor is idle and ready.
    NormalMode,
    /// Normal mode, not in standby. An earthquake is being processed.
    NormalModeNotInStandby,
    /// Initial installation mode.
    InitialInstallationMode,
    /// Offset acquisition mode.
    OffsetAcquisitionMode,
    /// Self-diagnostic mode.
    SelfTestMode,
    /// Undocumented 3-bit value.
    Reserved(u8),
}

impl DeviceState {
    /// Mask selecting the state field inside the raw register byte.
    pub const MASK: u8 = 0x07;

    /// Decodes a raw `STATE` register byte, ignoring bits outside the state field.
    pub const fn from_bits(raw: u8) -> Self {
        match raw & Self::MASK {
            0 => Self::NormalMode,
            1 => Self::NormalModeNotInStandby,
            2 => Self::InitialInstallationMode,
            3 => Self::OffsetAcquisitionMode,
            4 => Self::SelfTestMode,
            other => Self::Reserved(other),
        }
    }

    /// Returns the 3-bit encoding of this state.
    pub const fn bits(self) -> u8 {
        match self {
            Self::NormalMode => 0,
            Self::NormalModeNotInStandby => 1,
            Self::InitialInstallationMode => 2,
            Self::OffsetAcquisitionMode => 3,
            Self::SelfTestMode => 4,
            Self::Reserved(raw) => raw & Self::MASK,
        }
    }
}

/// Axis selection written to `CTRL[7:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AxisSetting {
    /// Use the Y and Z axes.
    ForceYz = 0,
    /// Use the X and Z axes.
    ForceXz = 1,
    /// Use the X and Y axes.
    ForceXy = 2,
    /// Switch axes automatically based on the sensor inclination.
    AutoSwitch = 3,
    /// Select axes once during initial installation.
    SwitchAtInstallation = 4,
}

impl AxisSetting {
    /// Largest valid raw axis encoding.
    pub const MAX: u8 = 4;
}

impl TryFrom<u8> for AxisSetting {
    type Error = u8;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::ForceYz),
            1 => Ok(Self::ForceXz),
            2 => Ok(Self::ForceXy),
            3 => Ok(Self::AutoSwitch),
            4 => Ok(Self::SwitchAtInstallation),
            other => Err(other),
        }
    }
}

/// Shutoff/collapse decision threshold stored in `CTRL[3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum Threshold {
    /// High threshold (datasheet default).
    High = 0,
    /// Low threshold.
    Low = 1,
}

/// Commands accepted by the `MODE` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ModeCommand {
    /// Return to normal mode.
    Normal = 0x01,
    /// Enter initial installation mode.
    InitialInstallation = 0x02,
    /// Enter offset acquisition mode.
    OffsetAcquisition = 0x03,
    /// Enter self-diagnostic mode.
    SelfTest = 0x04,
}
