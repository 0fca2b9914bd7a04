#[path = "../common/mod.rs"]
mod common;

use libpn532::device::{Device, DeviceBuilder};
use libpn532::test_support;
use libpn532::transport::{MockTransport, Transport};

#[test]
fn initialize_transitions_the_handle() {
    let mut mock = MockTransport::new();
    test_support::seed_initialize(&mut mock);

    let boxed: Box<dyn Transport> = Box::new(mock);
    let device = Device::new_with_transport(boxed);
    let mut initialized = device.initialize().expect("initialize");

    // Initialized-only API is available after the transition.
    initialized.delay_ms(1);
    assert!(initialized.elapsed_ms() > 0);
}

#[test]
fn builder_without_transport_is_device_not_found() {
    match DeviceBuilder::new().build_uninitialized() {
        Err(libpn532::Error::DeviceNotFound) => {}
        other => panic!("expected DeviceNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn builder_with_mock_builds_and_initializes() {
    let mut mock = MockTransport::new();
    test_support::seed_initialize(&mut mock);

    let device = DeviceBuilder::new()
        .with_transport(Box::new(mock))
        .build_uninitialized()
        .expect("build");
    device.initialize().expect("initialize");
}

#[test]
fn reinitialize_runs_the_bringup_again() {
    let (device, inner) = test_support::initialized_mock_device(vec![]).unwrap();
    test_support::seed_initialize(&mut inner.borrow_mut());

    let _device = device.reinitialize().expect("reinitialize");

    // Two identical SAM configuration frames, one per bring-up.
    let frames = inner.borrow().written_frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], frames[1]);
}
