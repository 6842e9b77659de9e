use serial_button_osc::serial::{ByteSource, SerialChannel, SerialError};

#[test]
fn open_invalid_device_fails_with_device_error() {
    let mut channel = SerialChannel::new("/definitely/not/a/device", 115_200);
    match channel.open() {
        Err(SerialError::Device { path, .. }) => {
            assert_eq!(path, "/definitely/not/a/device");
        }
        Ok(()) => panic!("open should fail for a missing device"),
        Err(other) => panic!("expected a device error, got {}", other),
    }
    assert!(!channel.is_open());
}

#[test]
fn reads_are_rejected_while_closed() {
    let mut channel = SerialChannel::new("/dev/ttyAMA0", 115_200);
    assert!(matches!(
        channel.bytes_available(),
        Err(SerialError::NotOpen)
    ));
    assert!(matches!(channel.drain(1), Err(SerialError::NotOpen)));
}

#[test]
fn close_is_idempotent_while_unopened() {
    let mut channel = SerialChannel::new("/dev/ttyAMA0", 115_200);
    channel.close();
    channel.close();
    assert!(!channel.is_open());
}
