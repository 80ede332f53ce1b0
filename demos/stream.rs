//! Poll a FreePIE UDP source and print received orientations.
//!
//! Usage: cargo run --example stream -- '{"channel": 0, "port": 5555}'
//! Press Ctrl+C to stop.

use freepie_bridge::{Device, DeviceConfig, FreePieError, Pose, TrackerSink};

struct PrintSink {
    count: u64,
}

impl TrackerSink for PrintSink {
    fn send_pose(&mut self, pose: &Pose) {
        self.count += 1;
        let q = pose.orientation;
        println!(
            "#{:<6} quat=[{:+.4}, {:+.4}, {:+.4}, {:+.4}]",
            self.count, q.w, q.x, q.y, q.z
        );
    }
}

fn main() {
    env_logger::init();

    let params = std::env::args().nth(1).unwrap_or_default();
    let cfg = if params.is_empty() {
        DeviceConfig::default()
    } else {
        DeviceConfig::from_json_str(&params)
    };

    let mut device = match Device::new(cfg, PrintSink { count: 0 }) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to open device: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Device '{}' listening on port {} (Ctrl+C to stop)...",
        device.name(),
        device.local_port().unwrap_or(0)
    );

    let mut dry_cycles = 0u64;
    loop {
        match device.update() {
            Ok(()) => dry_cycles = 0,
            Err(FreePieError::Timeout) => {
                dry_cycles += 1;
                // ~150ms per dry cycle; report roughly every 3 seconds
                if dry_cycles % 20 == 0 {
                    println!("waiting for data...");
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
