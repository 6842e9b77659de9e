use anyhow::Context;
use clap::Parser;

use serial_button_osc::dispatch::Dispatcher;
use serial_button_osc::osc::OscSender;
use serial_button_osc::serial::{
    ButtonDetector, Detector, EventReader, SerialChannel, ShutdownHandle, SwitchDetector,
};

/// Send an OSC message when a big red button is pressed
#[derive(Parser, Debug)]
#[command(name = "serial-button-osc", version, about)]
struct Args {
    /// Serial port device
    #[arg(value_name = "DEV", default_value = "/dev/ttyAMA0")]
    dev: String,

    /// OSC message address
    #[arg(value_name = "MESSAGE", default_value = "/button")]
    message: String,

    /// Destination hostname or IP address
    #[arg(short, long, value_name = "ADDR", default_value = "127.0.0.1")]
    address: String,

    /// Destination port to send to
    #[arg(short, long, default_value_t = 6000)]
    port: u16,

    /// Serial port baud rate
    #[arg(short, long, default_value_t = 115_200)]
    rate: u32,

    /// Serial char for button press
    #[arg(
        long,
        value_name = "BUTTON_CHAR",
        default_value = "3",
        value_parser = parse_event_char
    )]
    button_char: u8,

    /// Read the button as a switch and send the off/on int value as message arg
    #[arg(short, long)]
    switch: bool,

    /// Serial chars for switch values off/on
    #[arg(
        long,
        value_name = "SWITCH_CHARS",
        default_value = "01",
        value_parser = parse_switch_chars
    )]
    switch_chars: (u8, u8),

    /// Enable verbose printing
    #[arg(short, long)]
    verbose: bool,
}

fn parse_event_char(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err("value must be a single ASCII character".to_string()),
    }
}

// Extra chars beyond the first two are accepted and ignored.
fn parse_switch_chars(s: &str) -> Result<(u8, u8), String> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return Err("value must have min len of 2".to_string());
    }
    if !bytes[0].is_ascii() || !bytes[1].is_ascii() {
        return Err("off/on values must be single ASCII characters".to_string());
    }
    if bytes[0] == bytes[1] {
        return Err("off and on chars must be distinct".to_string());
    }
    Ok((bytes[0], bytes[1]))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let detector = if args.switch {
        let (off, on) = args.switch_chars;
        Detector::Switch(SwitchDetector::new(off, on)?)
    } else {
        Detector::Button(ButtonDetector::new(args.button_char))
    };

    let sender = OscSender::connect(&args.address, args.port)
        .with_context(|| format!("cannot reach {}:{}", args.address, args.port))?;
    let dispatcher = Dispatcher::new(Box::new(sender), args.message);

    let channel = SerialChannel::new(args.dev.clone(), args.rate);
    let shutdown = ShutdownHandle::new();
    let mut reader = EventReader::new(channel, detector, dispatcher, shutdown.clone());

    ctrlc::set_handler(move || shutdown.stop()).context("failed to set signal handler")?;

    reader
        .run()
        .with_context(|| format!("serial device {}", args.dev))?;
    Ok(())
}
