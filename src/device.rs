use crate::config::DeviceConfig;
use crate::net::UdpTransport;
use crate::receiver::{self, DEFAULT_BUDGET};
use crate::types::Pose;
use crate::Result;

/// Host-facing tracker interface the session reports poses into.
///
/// Stands in for whatever mechanism the host uses to consume tracker data;
/// the session only needs the ability to hand over a pose.
pub trait TrackerSink {
    fn send_pose(&mut self, pose: &Pose);
}

/// A FreePIE bridge session: owns the receive socket for its lifetime and
/// answers the host's periodic [`update`](Device::update) calls.
///
/// The socket is bound at construction and released when the device drops.
/// There is no reconnect logic: a transport error ends that cycle's update
/// and the same socket is polled again next cycle.
pub struct Device<S: TrackerSink> {
    config: DeviceConfig,
    transport: UdpTransport,
    sink: S,
}

impl<S: TrackerSink> Device<S> {
    /// Bind the receive socket and create the session.
    pub fn new(config: DeviceConfig, sink: S) -> Result<Device<S>> {
        let transport = UdpTransport::bind(config.port)?;
        log::info!(
            "FreePIE device '{}' listening on UDP port {} (channel {})",
            config.display_name(),
            transport.local_port()?,
            config.channel
        );
        Ok(Device {
            config,
            transport,
            sink,
        })
    }

    /// One host-driven update cycle.
    ///
    /// Waits up to 150 ms for a channel-matching orientation, then reports an
    /// identity-position pose carrying it to the sink. `Err` means no pose
    /// was published this cycle (nothing fresh, or a transport error); the
    /// session stays usable either way.
    pub fn update(&mut self) -> Result<()> {
        let orientation =
            receiver::poll_latest_orientation(&mut self.transport, self.config.channel, DEFAULT_BUDGET)?;

        let mut pose = Pose::identity();
        pose.orientation = orientation;
        self.sink.send_pose(&pose);

        Ok(())
    }

    /// Device name reported to the host.
    pub fn name(&self) -> &str {
        self.config.display_name()
    }

    /// The locally bound UDP port.
    pub fn local_port(&self) -> Result<u16> {
        Ok(self.transport.local_port()?)
    }
}
