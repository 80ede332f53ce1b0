//! # freepie-bridge - UDP bridge from FreePIE head tracking to a tracker host
//!
//! Receives FreePIE's 50-byte UDP orientation datagrams and exposes them as
//! poses for a motion-tracking host. Provides:
//! - Wire frame decoding (channel byte, flags byte, 12-float payload)
//! - Euler-to-quaternion conversion for the two recognized payload layouts
//! - A bounded-budget receiver that drains pending datagrams without blocking
//! - A device session driven by the host's periodic `update()` polling
//!
//! ## Quick Start
//! ```no_run
//! use freepie_bridge::{Device, DeviceConfig, Pose, TrackerSink};
//!
//! struct PrintSink;
//! impl TrackerSink for PrintSink {
//!     fn send_pose(&mut self, pose: &Pose) {
//!         println!("orientation: {:?}", pose.orientation);
//!     }
//! }
//!
//! let cfg = DeviceConfig::from_json_str(r#"{"channel": 0, "port": 5555}"#);
//! let mut device = Device::new(cfg, PrintSink).unwrap();
//! loop {
//!     let _ = device.update(); // Err means no fresh pose this cycle
//! }
//! ```

pub mod error;
pub mod types;
pub mod config;
pub mod protocol;
pub mod net;
pub mod receiver;
pub mod device;

pub use config::DeviceConfig;
pub use device::{Device, TrackerSink};
pub use error::FreePieError;
pub use net::{DatagramSource, UdpTransport};
pub use types::*;

/// Result type alias for freepie-bridge operations.
pub type Result<T> = std::result::Result<T, FreePieError>;
