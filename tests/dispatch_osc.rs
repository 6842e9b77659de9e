use std::net::UdpSocket;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rosc::{OscPacket, OscType};
use serial_button_osc::dispatch::{Dispatcher, EventSink};
use serial_button_osc::osc::OscSender;
use serial_button_osc::serial::Event;

#[derive(Clone, Default)]
struct RecordingSink {
    sent: Arc<Mutex<Vec<(String, Vec<i32>)>>>,
}

impl EventSink for RecordingSink {
    fn send(&mut self, address: &str, args: &[i32]) {
        self.sent
            .lock()
            .unwrap()
            .push((address.to_string(), args.to_vec()));
    }
}

#[test]
fn button_press_sends_bare_message() {
    let sink = RecordingSink::default();
    let sent = sink.sent.clone();
    let mut dispatcher = Dispatcher::new(Box::new(sink), "/button");

    dispatcher.dispatch(Event::ButtonPressed);

    assert_eq!(*sent.lock().unwrap(), vec![("/button".to_string(), vec![])]);
}

#[test]
fn switch_change_sends_int_argument() {
    let sink = RecordingSink::default();
    let sent = sink.sent.clone();
    let mut dispatcher = Dispatcher::new(Box::new(sink), "/switch");

    dispatcher.dispatch(Event::SwitchChanged(true));
    dispatcher.dispatch(Event::SwitchChanged(false));

    assert_eq!(
        *sent.lock().unwrap(),
        vec![
            ("/switch".to_string(), vec![1]),
            ("/switch".to_string(), vec![0]),
        ]
    );
}

#[test]
fn osc_sender_delivers_one_datagram_per_event() {
    let receiver = UdpSocket::bind("127.0.0.1:0").expect("bind receiver");
    receiver
        .set_read_timeout(Some(Duration::from_secs(2)))
        .expect("set timeout");
    let port = receiver.local_addr().expect("local addr").port();

    let mut sender = OscSender::connect("127.0.0.1", port).expect("connect");
    sender.send("/button", &[1]);

    let mut buf = [0u8; rosc::decoder::MTU];
    let (len, _) = receiver.recv_from(&mut buf).expect("datagram arrives");
    let (_, packet) = rosc::decoder::decode_udp(&buf[..len]).expect("valid OSC");
    match packet {
        OscPacket::Message(message) => {
            assert_eq!(message.addr, "/button");
            assert_eq!(message.args, vec![OscType::Int(1)]);
        }
        other => panic!("unexpected packet: {:?}", other),
    }
}

#[test]
fn unresolvable_destination_fails_at_connect() {
    assert!(OscSender::connect("this.host.does.not.resolve.invalid", 6000).is_err());
}
