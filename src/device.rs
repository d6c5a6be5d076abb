//! High-level D7S device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::events::EventLatch;
use crate::interface::D7sInterface;
use crate::interface::i2c::I2cInterface;
use crate::params::{AxisSetting, DeviceState, ModeCommand, Threshold};
use crate::registers::{
    Control,
    Event,
    Register,
    RegisterAccess,
    State,
    REG_MAIN_PGA,
    REG_MAIN_SI,
    REG_MODE,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

// Instantaneous SI is reported in tenths of cm/s.
const SI_LSB_PER_CM_S: f32 = 10.0;

/// High-level synchronous driver for the D7S seismic sensor.
pub struct D7s<IFACE, D> {
    interface: IFACE,
    delay: D,
    config: Config,
    events: EventLatch,
}

impl<IFACE, D> D7s<IFACE, D> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface and delay provider.
    pub fn new(interface: IFACE, delay: D, config: Config) -> Self {
        Self {
            interface,
            delay,
            config,
            events: EventLatch::new(),
        }
    }

    /// Consumes the driver and returns the owned interface, delay provider, and configuration.
    pub fn release(self) -> (IFACE, D, Config) {
        (self.interface, self.delay, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a mutable reference to the active configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Returns the latched shutoff/collapse flags without touching the bus.
    pub fn events(&self) -> EventLatch {
        self.events
    }
}

impl<I2C, D> D7s<I2cInterface<I2C>, D>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I²C transports.
    pub fn new_i2c(i2c: I2C, delay: D, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c), delay, config)
    }

    /// Releases the driver, returning the I²C bus, delay provider, and configuration.
    pub fn release_i2c(self) -> (I2C, D, Config) {
        let (iface, delay, config) = self.release();
        (iface.release(), delay, config)
    }
}

impl<IFACE, D, CommE> D7s<IFACE, D>
where
    IFACE: D7sInterface<Error = CommE>,
    D: DelayNs,
{
    // ==================================================================
    // == State & Mode ==================================================
    // ==================================================================
    /// Reads the current operating state.
    pub fn state(&mut self) -> Result<DeviceState, CommE> {
        let state: State = self.read_reg()?;
        Ok(state.state())
    }

    /// Returns `true` while the sensor is processing an earthquake.
    pub fn is_earthquake_occurring(&mut self) -> Result<bool, CommE> {
        Ok(self.state()? == DeviceState::NormalModeNotInStandby)
    }

    /// Returns `true` when the sensor is idle in normal mode.
    pub fn is_ready(&mut self) -> Result<bool, CommE> {
        Ok(self.state()? == DeviceState::NormalMode)
    }

    /// Reads the raw `MODE` register.
    pub fn mode(&mut self) -> Result<u8, CommE> {
        self.read_byte(REG_MODE)
    }

    /// Writes a command to the `MODE` register.
    pub fn set_mode(&mut self, command: ModeCommand) -> Result<(), CommE> {
        self.write_byte(REG_MODE, command as u8)
    }

    /// Requests the initial installation mode.
    ///
    /// The mode register is logged before and after the command. The transition is not
    /// verified; poll [`state`](Self::state) or [`is_ready`](Self::is_ready) to follow it.
    pub fn initialize(&mut self) -> Result<(), CommE> {
        let before = self.mode()?;
        info!("d7s mode before initialize: {=u8}", before);

        self.set_mode(ModeCommand::InitialInstallation)?;

        let after = self.mode()?;
        info!("d7s mode after initialize: {=u8}", after);
        Ok(())
    }

    // ==================================================================
    // == Control Register ==============================================
    // ==================================================================
    /// Selects the axes used for the SI calculation.
    pub fn set_axis(&mut self, axis: AxisSetting) -> Result<(), CommE> {
        self.update_reg(|ctrl: &mut Control| ctrl.set_raw_axis(axis as u8))
    }

    /// Selects the axes from a raw encoding.
    ///
    /// Values above [`AxisSetting::MAX`] are ignored: no register access happens and
    /// `Ok(())` is returned.
    pub fn set_axis_raw(&mut self, axis: u8) -> Result<(), CommE> {
        match AxisSetting::try_from(axis) {
            Ok(axis) => self.set_axis(axis),
            Err(raw) => {
                debug!("d7s ignoring invalid axis setting {=u8}", raw);
                Ok(())
            }
        }
    }

    /// Reads the configured axis selection.
    pub fn axis(&mut self) -> Result<AxisSetting, CommE> {
        let ctrl: Control = self.read_reg()?;
        AxisSetting::try_from(ctrl.raw_axis()).map_err(Error::UnexpectedValue)
    }

    /// Selects the shutoff/collapse threshold level.
    pub fn set_threshold(&mut self, threshold: Threshold) -> Result<(), CommE> {
        self.update_reg(|ctrl: &mut Control| ctrl.set_threshold(threshold))
    }

    /// Reads the configured threshold level.
    pub fn threshold(&mut self) -> Result<Threshold, CommE> {
        let ctrl: Control = self.read_reg()?;
        Ok(ctrl.threshold())
    }

    // ==================================================================
    // == Instantaneous Data ============================================
    // ==================================================================
    /// Instantaneous SI in cm/s.
    pub fn instantaneous_si(&mut self) -> Result<f32, CommE> {
        let raw = self.read_word(REG_MAIN_SI)?;
        Ok(raw as f32 / SI_LSB_PER_CM_S)
    }

    /// Instantaneous peak ground acceleration in gal (cm/s²).
    pub fn instantaneous_pga(&mut self) -> Result<u16, CommE> {
        self.read_word(REG_MAIN_PGA)
    }

    // ==================================================================
    // == Events ========================================================
    // ==================================================================
    /// Polls the `EVENT` register and merges it into the latch.
    pub fn refresh_events(&mut self) -> Result<EventLatch, CommE> {
        let event: Event = self.read_reg()?;
        self.events.accumulate(event);
        Ok(self.events)
    }

    /// Returns `true` once a collapse event has been seen since the last reset.
    pub fn is_in_collapse(&mut self) -> Result<bool, CommE> {
        Ok(self.refresh_events()?.collapse())
    }

    /// Returns `true` once a shutoff event has been seen since the last reset.
    pub fn is_in_shutoff(&mut self) -> Result<bool, CommE> {
        Ok(self.refresh_events()?.shutoff())
    }

    /// Clears the hardware `EVENT` register and the latch.
    ///
    /// Call this after handling an earthquake so old flags do not pollute the next one.
    pub fn reset_events(&mut self) -> Result<(), CommE> {
        // Reading EVENT clears it on the device.
        let _: Event = self.read_reg()?;
        self.events.clear();
        debug!("d7s events reset");
        Ok(())
    }

    // ==================================================================
    // == Internal Bus Helpers ==========================================
    // ==================================================================
    fn read_reg<R: Register>(&mut self) -> Result<R, CommE> {
        // A failed clear-on-read may already have cleared the register, so a retry could
        // observe zero and lose the value.
        let attempts = if R::CLEAR_ON_READ {
            1
        } else {
            self.config.max_attempts
        };
        self.read_retrying(R::ADDRESS, attempts, |iface| iface.read_register(R::ADDRESS))
            .map(R::from)
    }

    fn update_reg<R, F>(&mut self, mutate: F) -> Result<(), CommE>
    where
        R: Register,
        F: FnOnce(&mut R),
    {
        debug_assert_eq!(R::ACCESS, RegisterAccess::ReadWrite);

        let current: R = self.read_reg()?;
        let mut updated = current;
        mutate(&mut updated);
        self.write_byte(R::ADDRESS, updated.into())
    }

    fn read_byte(&mut self, register: u16) -> Result<u8, CommE> {
        let attempts = self.config.max_attempts;
        self.read_retrying(register, attempts, |iface| iface.read_register(register))
    }

    fn read_word(&mut self, register: u16) -> Result<u16, CommE> {
        let attempts = self.config.max_attempts;
        self.read_retrying(register, attempts, |iface| {
            let mut raw = [0u8; 2];
            iface.read_many(register, &mut raw)?;
            Ok(u16::from_be_bytes(raw))
        })
    }

    fn write_byte(&mut self, register: u16, value: u8) -> Result<(), CommE> {
        trace!("d7s write {=u16:#x} <- {=u8:#x}", register, value);
        self.settle();
        let result = self.interface.write_register(register, value);
        self.settle();
        result.map_err(Error::from)
    }

    fn read_retrying<T, F>(
        &mut self,
        register: u16,
        max_attempts: u8,
        mut read: F,
    ) -> Result<T, CommE>
    where
        F: FnMut(&mut IFACE) -> core::result::Result<T, CommE>,
    {
        self.config.validate().map_err(|_| Error::InvalidConfig)?;

        let mut attempt = 1;
        loop {
            self.settle();
            match read(&mut self.interface) {
                Ok(value) => {
                    self.settle();
                    trace!("d7s read {=u16:#x}", register);
                    return Ok(value);
                }
                Err(err) if attempt >= max_attempts => {
                    error!(
                        "d7s read {=u16:#x} failed after {=u8} attempts",
                        register, attempt
                    );
                    return Err(Error::Interface(err));
                }
                Err(_) => {
                    warn!(
                        "d7s read {=u16:#x} failed, attempt {=u8}/{=u8}",
                        register, attempt, max_attempts
                    );
                    attempt += 1;
                }
            }
        }
    }

    fn settle(&mut self) {
        if self.config.settle_delay_us > 0 {
            self.delay.delay_us(self.config.settle_delay_us);
        }
    }
}
