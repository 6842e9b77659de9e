//! OSC over UDP: one datagram per event, no acknowledgment.

use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use rosc::encoder;
use rosc::{OscMessage, OscPacket, OscType};

use crate::dispatch::EventSink;

#[derive(Debug, thiserror::Error)]
pub enum OscError {
    #[error("cannot resolve {0}")]
    Resolve(String),

    #[error("OSC encoding error: {0}")]
    Encode(#[from] rosc::OscError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OscError>;

/// Fire-and-forget OSC sender with a fixed destination.
pub struct OscSender {
    socket: UdpSocket,
    destination: SocketAddr,
}

impl OscSender {
    /// Bind an ephemeral local socket and resolve the destination once.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let destination = (host, port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| OscError::Resolve(format!("{host}:{port}")))?;
        let socket = UdpSocket::bind("0.0.0.0:0")?;

        log::info!("osc: sending to {}", destination);
        Ok(Self {
            socket,
            destination,
        })
    }

    /// Encode and send one OSC message.
    pub fn send_message(&self, address: &str, args: Vec<OscType>) -> Result<()> {
        let packet = OscPacket::Message(OscMessage {
            addr: address.to_string(),
            args,
        });
        let datagram = encoder::encode(&packet)?;
        self.socket.send_to(&datagram, self.destination)?;
        Ok(())
    }
}

impl EventSink for OscSender {
    // Send failures are logged and swallowed so a missing listener never
    // takes down the polling loop.
    fn send(&mut self, address: &str, args: &[i32]) {
        let args = args.iter().copied().map(OscType::Int).collect();
        if let Err(e) = self.send_message(address, args) {
            log::warn!("osc: send failed: {}", e);
        }
    }
}
