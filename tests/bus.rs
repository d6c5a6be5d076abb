mod common;

use common::*;
use d7s::Error;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::{CheckedDelay, Transaction as DelayTrans};

#[test]
fn read_recovers_from_transient_error() {
    let trans = [
        trans_read(0x1000, vec![0x00]).with_error(ErrorKind::Other),
        trans_read(0x1000, vec![0x00]).with_error(ErrorKind::Other),
        trans_read(0x1000, vec![0x00]),
    ];
    let mut dev = device(&trans);
    assert!(dev.is_ready().unwrap());
    finish(dev);
}

#[test]
fn read_gives_up_after_max_attempts() {
    let trans = [
        trans_read(0x2002, vec![0x00, 0x00]).with_error(ErrorKind::Other),
        trans_read(0x2002, vec![0x00, 0x00]).with_error(ErrorKind::Other),
        trans_read(0x2002, vec![0x00, 0x00]).with_error(ErrorKind::Bus),
    ];
    let mut dev = device(&trans);
    assert_eq!(dev.instantaneous_pga(), Err(Error::Interface(ErrorKind::Bus)));
    finish(dev);
}

#[test]
fn single_attempt_config_does_not_retry() {
    let trans = [trans_read(0x1000, vec![0x00]).with_error(ErrorKind::Other)];
    let config = Config::new().settle_delay_us(0).max_attempts(1).build();
    let mut dev = D7s::new_i2c(I2cMock::new(&trans), NoopDelay::new(), config);
    assert_eq!(dev.state(), Err(Error::Interface(ErrorKind::Other)));
    finish(dev);
}

#[test]
fn write_error_is_reported() {
    let trans = [trans_write(0x1003, 0x02).with_error(ErrorKind::Other)];
    let mut dev = device(&trans);
    assert_eq!(
        dev.set_mode(d7s::params::ModeCommand::InitialInstallation),
        Err(Error::Interface(ErrorKind::Other))
    );
    finish(dev);
}

#[test]
fn zero_attempts_is_invalid_config() {
    let trans: [I2cTrans; 0] = [];
    let config = Config::new().max_attempts(0).build();
    let mut dev = D7s::new_i2c(I2cMock::new(&trans), NoopDelay::new(), config);
    assert_eq!(dev.state(), Err(Error::InvalidConfig));
    finish(dev);
}

#[test]
fn default_settle_delay_still_completes() {
    let trans = [trans_read(0x1000, vec![0x00])];
    let mut dev = D7s::new_i2c(I2cMock::new(&trans), NoopDelay::new(), Config::default());
    assert!(dev.is_ready().unwrap());
    finish(dev);
}

#[test]
fn settle_delay_wraps_every_bus_phase() {
    let trans = [
        trans_read(0x1004, vec![0x00]).with_error(ErrorKind::Other),
        trans_read(0x1004, vec![0xA7]),
        trans_write(0x1004, 0x37),
    ];
    let delays = [
        // before the failed read
        DelayTrans::delay_us(500),
        // before the retry
        DelayTrans::delay_us(500),
        // after the successful read
        DelayTrans::delay_us(500),
        // around the write
        DelayTrans::delay_us(500),
        DelayTrans::delay_us(500),
    ];
    let config = Config::new().settle_delay_us(500).build();
    let mut dev = D7s::new_i2c(I2cMock::new(&trans), CheckedDelay::new(&delays), config);
    dev.set_axis_raw(3).unwrap();

    let (mut i2c, mut delay, _) = dev.release_i2c();
    i2c.done();
    delay.done();
}
