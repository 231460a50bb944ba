//! Behavioural tests for `LocationSource` adapters.

use carelink_core::{FixedLocation, LocationSource, LocationSourceExt};
use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

const DEVICE: Coord<f64> = Coord { x: 2.3522, y: 48.8566 };
const DEFAULT: Coord<f64> = Coord { x: -7.5898, y: 33.5731 };

#[fixture]
fn device() -> RefCell<Option<Coord<f64>>> {
    RefCell::new(None)
}

#[fixture]
fn reading() -> RefCell<Option<Coord<f64>>> {
    RefCell::new(None)
}

#[given("a device that reports a location fix")]
fn given_fix(#[from(device)] device: &RefCell<Option<Coord<f64>>>) {
    *device.borrow_mut() = FixedLocation(DEVICE).current_location();
}

#[given("a device without a location fix")]
fn given_no_fix(#[from(device)] device: &RefCell<Option<Coord<f64>>>) {
    *device.borrow_mut() = None;
}

#[when("the location is read through a fallback")]
fn read_location(
    #[from(device)] device: &RefCell<Option<Coord<f64>>>,
    #[from(reading)] reading: &RefCell<Option<Coord<f64>>>,
) {
    let source = (*device.borrow()).with_fallback(DEFAULT);
    *reading.borrow_mut() = source.current_location();
}

#[then("the device location is returned")]
fn then_device(#[from(reading)] reading: &RefCell<Option<Coord<f64>>>) {
    assert_eq!(*reading.borrow(), Some(DEVICE));
}

#[then("the default location is returned")]
fn then_default(#[from(reading)] reading: &RefCell<Option<Coord<f64>>>) {
    assert_eq!(*reading.borrow(), Some(DEFAULT));
}

#[scenario(path = "tests/features/location_source.feature", index = 0)]
fn device_fix_used(device: RefCell<Option<Coord<f64>>>, reading: RefCell<Option<Coord<f64>>>) {
    let _ = (device, reading);
}

#[scenario(path = "tests/features/location_source.feature", index = 1)]
fn missing_fix_falls_back(
    device: RefCell<Option<Coord<f64>>>,
    reading: RefCell<Option<Coord<f64>>>,
) {
    let _ = (device, reading);
}
