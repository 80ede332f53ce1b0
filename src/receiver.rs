use crate::net::DatagramSource;
use crate::protocol::{self, FRAME_SIZE};
use crate::types::Quaternion;
use crate::{FreePieError, Result};
use std::time::{Duration, Instant};

/// Default wall-clock budget for one receive cycle. Bounds how long a host
/// update call can stall when the source is silent.
pub const DEFAULT_BUDGET: Duration = Duration::from_millis(150);

/// Sleep between empty drain passes, giving the scheduler a slice for a
/// datagram to arrive under light jitter.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Drain pending datagrams and return the freshest orientation on the given
/// channel, waiting at most `budget`.
///
/// Each pass drains the source without blocking:
/// - a transport error ends the cycle immediately with `Err`;
/// - datagrams shorter than a wire frame are skipped;
/// - a channel mismatch stops the current drain pass, leaving the rest of
///   the burst buffered for the next pass;
/// - each decodable orientation overwrites the previous one, so the last
///   frame of a burst wins.
///
/// A pass that recorded an orientation returns it right away instead of
/// waiting out the budget. If the budget elapses with nothing recorded the
/// cycle ends with `Err(Timeout)`, the normal "nothing new" outcome. At
/// least one drain pass runs even with a zero budget.
pub fn poll_latest_orientation<S: DatagramSource>(
    source: &mut S,
    channel: u8,
    budget: Duration,
) -> Result<Quaternion> {
    let start = Instant::now();
    // Exact frame size: longer datagrams are truncated, same as the
    // reference receiver.
    let mut buf = [0u8; FRAME_SIZE];
    let mut latest: Option<Quaternion> = None;

    loop {
        loop {
            let len = match source.poll_recv(&mut buf)? {
                Some(len) => len,
                None => break,
            };
            if len < FRAME_SIZE {
                continue;
            }
            let frame = match protocol::parse_frame(&buf) {
                Some(frame) => frame,
                None => continue,
            };
            if frame.channel != channel {
                break;
            }
            if let Some(euler) = frame.orientation() {
                latest = Some(protocol::euler_to_quaternion(euler));
            }
        }

        if let Some(q) = latest {
            return Ok(q);
        }
        if start.elapsed() > budget {
            return Err(FreePieError::Timeout);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{encode_frame, euler_to_quaternion, WireFrame, PAYLOAD_FLOATS};
    use crate::types::{EulerAngles, Flags};
    use std::collections::VecDeque;
    use std::io;

    /// Replays a fixed sequence of poll outcomes, then reports empty forever.
    struct ScriptedSource {
        events: VecDeque<io::Result<Option<Vec<u8>>>>,
        polls: usize,
    }

    impl ScriptedSource {
        fn new(events: Vec<io::Result<Option<Vec<u8>>>>) -> ScriptedSource {
            ScriptedSource {
                events: events.into(),
                polls: 0,
            }
        }
    }

    impl DatagramSource for ScriptedSource {
        fn poll_recv(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>> {
            self.polls += 1;
            match self.events.pop_front() {
                None | Some(Ok(None)) => Ok(None),
                Some(Ok(Some(bytes))) => {
                    let len = bytes.len().min(buf.len());
                    buf[..len].copy_from_slice(&bytes[..len]);
                    Ok(Some(len))
                }
                Some(Err(e)) => Err(e),
            }
        }
    }

    fn orientation_frame(channel: u8, yaw: f32, pitch: f32, roll: f32) -> Vec<u8> {
        let mut payload = [0f32; PAYLOAD_FLOATS];
        payload[0] = yaw;
        payload[1] = pitch;
        payload[2] = roll;
        encode_frame(&WireFrame {
            channel,
            flags: Flags::ORIENTATION,
            payload,
        })
        .to_vec()
    }

    fn expected_quat(yaw: f32, pitch: f32, roll: f32) -> Quaternion {
        euler_to_quaternion(EulerAngles { yaw, pitch, roll })
    }

    const TEST_BUDGET: Duration = Duration::from_millis(30);

    #[test]
    fn test_single_frame_succeeds() {
        let mut source = ScriptedSource::new(vec![Ok(Some(orientation_frame(0, 0.1, 0.2, 0.3)))]);
        let q = poll_latest_orientation(&mut source, 0, TEST_BUDGET).unwrap();
        assert_eq!(q, expected_quat(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_last_frame_of_burst_wins() {
        let mut source = ScriptedSource::new(vec![
            Ok(Some(orientation_frame(0, 0.1, 0.0, 0.0))),
            Ok(Some(orientation_frame(0, 0.9, 0.0, 0.0))),
        ]);
        let q = poll_latest_orientation(&mut source, 0, TEST_BUDGET).unwrap();
        assert_eq!(q, expected_quat(0.9, 0.0, 0.0));
    }

    #[test]
    fn test_channel_mismatch_times_out() {
        let mut source = ScriptedSource::new(vec![Ok(Some(orientation_frame(5, 0.1, 0.2, 0.3)))]);
        let start = Instant::now();
        let res = poll_latest_orientation(&mut source, 1, TEST_BUDGET);
        assert!(matches!(res, Err(FreePieError::Timeout)));
        assert!(start.elapsed() >= TEST_BUDGET);
    }

    #[test]
    fn test_mismatch_stops_drain_but_burst_survives() {
        // First pass ends at the mismatched frame; the valid frame behind it
        // is picked up on the next pass.
        let mut source = ScriptedSource::new(vec![
            Ok(Some(orientation_frame(5, 9.0, 9.0, 9.0))),
            Ok(Some(orientation_frame(0, 0.1, 0.2, 0.3))),
        ]);
        let q = poll_latest_orientation(&mut source, 0, TEST_BUDGET).unwrap();
        assert_eq!(q, expected_quat(0.1, 0.2, 0.3));
        // Pass 1: mismatch (1 poll). Pass 2: frame + empty (2 polls).
        assert_eq!(source.polls, 3);
    }

    #[test]
    fn test_runt_datagram_skipped_mid_burst() {
        let mut source = ScriptedSource::new(vec![
            Ok(Some(vec![0u8; 10])),
            Ok(Some(orientation_frame(0, 0.1, 0.2, 0.3))),
        ]);
        let q = poll_latest_orientation(&mut source, 0, TEST_BUDGET).unwrap();
        assert_eq!(q, expected_quat(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_non_orientation_flags_time_out() {
        let mut payload = [0f32; PAYLOAD_FLOATS];
        payload[0] = 0.1;
        let raw_only = encode_frame(&WireFrame {
            channel: 0,
            flags: Flags::RAW,
            payload,
        });
        let mut source = ScriptedSource::new(vec![Ok(Some(raw_only.to_vec()))]);
        let res = poll_latest_orientation(&mut source, 0, TEST_BUDGET);
        assert!(matches!(res, Err(FreePieError::Timeout)));
    }

    #[test]
    fn test_silence_times_out_within_bound() {
        let mut source = ScriptedSource::new(vec![]);
        let start = Instant::now();
        let res = poll_latest_orientation(&mut source, 0, TEST_BUDGET);
        assert!(matches!(res, Err(FreePieError::Timeout)));
        let elapsed = start.elapsed();
        assert!(elapsed >= TEST_BUDGET);
        // Bounded: generous ceiling to tolerate slow CI schedulers.
        assert!(elapsed < TEST_BUDGET + Duration::from_millis(500));
    }

    #[test]
    fn test_transport_error_fails_immediately() {
        let mut source = ScriptedSource::new(vec![
            Ok(Some(orientation_frame(0, 0.1, 0.2, 0.3))),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")),
        ]);
        let start = Instant::now();
        // Fatal even though an orientation was already recorded this pass.
        let res = poll_latest_orientation(&mut source, 0, Duration::from_secs(5));
        assert!(matches!(res, Err(FreePieError::Io(_))));
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_zero_budget_still_drains_once() {
        let mut source = ScriptedSource::new(vec![Ok(Some(orientation_frame(0, 0.1, 0.2, 0.3)))]);
        let q = poll_latest_orientation(&mut source, 0, Duration::ZERO).unwrap();
        assert_eq!(q, expected_quat(0.1, 0.2, 0.3));
    }
}
