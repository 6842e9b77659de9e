pub mod channel;
pub mod detector;
pub mod reader;

pub use channel::{ByteSource, SerialChannel};
pub use detector::{ButtonDetector, Detector, Event, SwitchConfigError, SwitchDetector};
pub use reader::{EventReader, ShutdownHandle, DEFAULT_POLL_INTERVAL};

#[derive(Debug, thiserror::Error)]
pub enum SerialError {
    #[error("failed to open {path}: {source}")]
    Device {
        path: String,
        #[source]
        source: serialport::Error,
    },

    #[error("serial port not open")]
    NotOpen,

    #[error("serial port error: {0}")]
    Port(#[from] serialport::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SerialError>;
