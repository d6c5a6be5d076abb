#![allow(dead_code)]

pub use d7s::config::Config;
pub use d7s::interface::i2c::I2cInterface;
pub use d7s::D7s;

use embedded_hal_mock as hal;
pub use hal::eh1::delay::NoopDelay;
pub use hal::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEV_ADDR: u8 = 0x55;

pub type Device = D7s<I2cInterface<I2cMock>, NoopDelay>;

pub fn device(trans: &[I2cTrans]) -> Device {
    let config = Config::new().settle_delay_us(0).build();
    D7s::new_i2c(I2cMock::new(trans), NoopDelay::new(), config)
}

pub fn finish(dev: Device) {
    let (mut i2c, _, _) = dev.release_i2c();
    i2c.done();
}

pub fn trans_read(reg: u16, response: Vec<u8>) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, reg.to_be_bytes().to_vec(), response)
}

pub fn trans_write(reg: u16, value: u8) -> I2cTrans {
    let [high, low] = reg.to_be_bytes();
    I2cTrans::write(DEV_ADDR, vec![high, low, value])
}
