//! Emit synthetic FreePIE orientation frames for testing the bridge.
//!
//! Sends a slow yaw sweep to 127.0.0.1:5555 at ~60 Hz.
//! Usage: cargo run --example sender -- [port] [channel]

use freepie_bridge::protocol::{encode_frame, WireFrame, PAYLOAD_FLOATS};
use freepie_bridge::Flags;
use std::net::{Ipv4Addr, UdpSocket};
use std::time::Duration;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let port: u16 = args
        .next()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5555);
    let channel: u8 = args.next().and_then(|v| v.parse().ok()).unwrap_or(0);

    let socket = match UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to open sender socket: {}", e);
            std::process::exit(1);
        }
    };

    println!("Sending to 127.0.0.1:{} on channel {}...", port, channel);

    let mut yaw = 0f32;
    loop {
        let mut payload = [0f32; PAYLOAD_FLOATS];
        payload[0] = yaw;
        payload[1] = 0.0; // pitch
        payload[2] = 0.0; // roll
        let bytes = encode_frame(&WireFrame {
            channel,
            flags: Flags::ORIENTATION,
            payload,
        });

        if let Err(e) = socket.send_to(&bytes, (Ipv4Addr::LOCALHOST, port)) {
            eprintln!("Send failed: {}", e);
            std::process::exit(1);
        }

        yaw += 0.01;
        if yaw > std::f32::consts::PI {
            yaw -= 2.0 * std::f32::consts::PI;
        }
        std::thread::sleep(Duration::from_millis(16));
    }
}
