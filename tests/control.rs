mod common;

use common::*;
use d7s::Error;
use d7s::params::{AxisSetting, Threshold};

#[test]
fn set_axis_keeps_low_nibble() {
    let trans = [
        trans_read(0x1004, vec![0xA7]),
        // write CTRL: (3 << 4) | 0x07
        trans_write(0x1004, 0x37),
    ];
    let mut dev = device(&trans);
    dev.set_axis(AxisSetting::AutoSwitch).unwrap();
    finish(dev);
}

#[test]
fn set_axis_raw_valid_value() {
    let trans = [trans_read(0x1004, vec![0x08]), trans_write(0x1004, 0x48)];
    let mut dev = device(&trans);
    dev.set_axis_raw(4).unwrap();
    finish(dev);
}

#[test]
fn set_axis_raw_invalid_value_touches_nothing() {
    let trans: [I2cTrans; 0] = [];
    let mut dev = device(&trans);
    dev.set_axis_raw(5).unwrap();
    dev.set_axis_raw(0xFF).unwrap();
    finish(dev);
}

#[test]
fn axis_decodes_high_nibble() {
    let trans = [trans_read(0x1004, vec![0x2F]), trans_read(0x1004, vec![0x90])];
    let mut dev = device(&trans);
    assert_eq!(dev.axis().unwrap(), AxisSetting::ForceXy);
    assert_eq!(dev.axis(), Err(Error::UnexpectedValue(9)));
    finish(dev);
}

#[test]
fn threshold_round_trip_through_ctrl() {
    let trans = [
        trans_read(0x1004, vec![0x30]),
        // write CTRL: threshold low, axis untouched
        trans_write(0x1004, 0x38),
        trans_read(0x1004, vec![0x38]),
    ];
    let mut dev = device(&trans);
    dev.set_threshold(Threshold::Low).unwrap();
    assert_eq!(dev.threshold().unwrap(), Threshold::Low);
    finish(dev);
}
