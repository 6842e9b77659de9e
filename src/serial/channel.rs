use std::io::Read;
use std::time::Duration;

use serialport::{ClearBuffer, SerialPort};

use super::{Result, SerialError};

// Reads only cover bytes the driver has already reported available, so
// this timeout should never be hit in practice.
const READ_TIMEOUT: Duration = Duration::from_millis(1000);

/// Byte-draining read capability of an open serial device.
///
/// `EventReader` polls through this seam; tests substitute a scripted
/// source for the real port.
pub trait ByteSource {
    /// Open the underlying device. Idempotent.
    fn open(&mut self) -> Result<()>;

    /// Release the device if open. Idempotent.
    fn close(&mut self);

    /// Number of bytes currently buffered by the OS/device layer.
    fn bytes_available(&mut self) -> Result<usize>;

    /// Read exactly `count` bytes, then discard any further unread input
    /// buffered by the device. Bytes that arrive between the availability
    /// check and this call are dropped, not queued for the next poll; this
    /// caps backlog growth at the cost of losing closely-spaced events.
    fn drain(&mut self, count: usize) -> Result<Vec<u8>>;
}

/// Exclusive handle to a serial device at a fixed baud rate.
///
/// Created at configuration time, opened before the run loop starts and
/// closed on shutdown. Reads are only valid while open.
pub struct SerialChannel {
    path: String,
    baud_rate: u32,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialChannel {
    pub fn new(path: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            path: path.into(),
            baud_rate,
            port: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.port.is_some()
    }

    fn port(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.port.as_mut().ok_or(SerialError::NotOpen)
    }
}

impl ByteSource for SerialChannel {
    fn open(&mut self) -> Result<()> {
        if self.port.is_some() {
            return Ok(());
        }

        let port = serialport::new(&self.path, self.baud_rate)
            .timeout(READ_TIMEOUT)
            .open()
            .map_err(|source| SerialError::Device {
                path: self.path.clone(),
                source,
            })?;
        self.port = Some(port);

        log::info!("serial: open {} {}", self.path, self.baud_rate);
        Ok(())
    }

    fn close(&mut self) {
        if self.port.take().is_some() {
            log::info!("serial: close {}", self.path);
        }
    }

    fn bytes_available(&mut self) -> Result<usize> {
        let count = self.port()?.bytes_to_read()?;
        Ok(count as usize)
    }

    fn drain(&mut self, count: usize) -> Result<Vec<u8>> {
        let port = self.port()?;
        let mut batch = vec![0u8; count];
        port.read_exact(&mut batch)?;
        port.clear(ClearBuffer::Input)?;
        Ok(batch)
    }
}
