//! Bridges a physical button or toggle switch on a serial line to OSC
//! messages over UDP.
//!
//! A fixed-interval polling loop drains the serial device, a detector
//! policy turns the drained bytes into discrete input events, and a
//! dispatcher forwards each event to an injected outbound sink.

pub mod dispatch;
pub mod osc;
pub mod serial;

pub use dispatch::{Dispatcher, EventSink};
pub use osc::OscSender;
pub use serial::{
    ButtonDetector, Detector, Event, EventReader, SerialChannel, ShutdownHandle, SwitchDetector,
};
