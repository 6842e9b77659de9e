//! Decouples detected input events from the transport used to notify
//! external listeners.

use crate::serial::Event;

/// Outbound notification sink: `send(address, args)`.
///
/// Delivery is fire-and-forget; implementations handle their own failures
/// and must not block the polling thread for long.
pub trait EventSink {
    fn send(&mut self, address: &str, args: &[i32]);
}

/// Forwards each event to an injected sink under a fixed message address.
pub struct Dispatcher {
    sink: Box<dyn EventSink>,
    address: String,
}

impl Dispatcher {
    pub fn new(sink: Box<dyn EventSink>, address: impl Into<String>) -> Self {
        Self {
            sink,
            address: address.into(),
        }
    }

    /// Invoked inline on the polling thread, once per detected event.
    /// Button presses carry no argument; switch changes carry 0 or 1.
    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::ButtonPressed => self.sink.send(&self.address, &[]),
            Event::SwitchChanged(value) => self.sink.send(&self.address, &[i32::from(value)]),
        }
    }
}
