use crate::types::{EulerAngles, Flags, Quaternion};

// -- Frame geometry --
pub const FRAME_SIZE: usize = 50;
pub const PAYLOAD_FLOATS: usize = 12;

const CHANNEL_OFFSET: usize = 0;
const FLAGS_OFFSET: usize = 1;
const PAYLOAD_OFFSET: usize = 2;

/// One decoded FreePIE datagram.
///
/// Wire layout (50 bytes, little-endian, no padding):
/// - `[0]`: channel (0-255; the receiving config restricts itself to 0-15)
/// - `[1]`: flags bitmask
/// - `[2..50]`: 12 x f32 payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireFrame {
    pub channel: u8,
    pub flags: Flags,
    pub payload: [f32; PAYLOAD_FLOATS],
}

impl WireFrame {
    /// Extract yaw/pitch/roll if this frame's flags carry orientation.
    ///
    /// ORIENTATION alone puts the angles at payload[0..3]; ORIENTATION|RAW
    /// puts them at payload[9..12] after three raw sensor triples. Any other
    /// flag combination carries no orientation, which is a normal outcome
    /// rather than an error.
    pub fn orientation(&self) -> Option<EulerAngles> {
        if self.flags == Flags::ORIENTATION {
            Some(EulerAngles {
                yaw: self.payload[0],
                pitch: self.payload[1],
                roll: self.payload[2],
            })
        } else if self.flags == Flags::ORIENTATION | Flags::RAW {
            Some(EulerAngles {
                yaw: self.payload[9],
                pitch: self.payload[10],
                roll: self.payload[11],
            })
        } else {
            None
        }
    }
}

/// Parse a 50-byte FreePIE datagram into a WireFrame.
///
/// Fields are read at fixed offsets rather than overlaying a struct on the
/// buffer, keeping the wire contract explicit. Returns None for buffers
/// shorter than FRAME_SIZE.
pub fn parse_frame(data: &[u8]) -> Option<WireFrame> {
    if data.len() < FRAME_SIZE {
        return None;
    }

    let channel = data[CHANNEL_OFFSET];
    // Unknown high bits are kept so that equality against the two recognized
    // combinations rejects them in orientation().
    let flags = Flags::from_bits_retain(data[FLAGS_OFFSET]);

    let mut payload = [0f32; PAYLOAD_FLOATS];
    for (i, value) in payload.iter_mut().enumerate() {
        let off = PAYLOAD_OFFSET + i * 4;
        *value = f32::from_le_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]]);
    }

    Some(WireFrame {
        channel,
        flags,
        payload,
    })
}

/// Serialize a WireFrame into its 50-byte wire form. Exact inverse of
/// parse_frame; used by the sender demo and tests.
pub fn encode_frame(frame: &WireFrame) -> [u8; FRAME_SIZE] {
    let mut buf = [0u8; FRAME_SIZE];
    buf[CHANNEL_OFFSET] = frame.channel;
    buf[FLAGS_OFFSET] = frame.flags.bits();
    for (i, value) in frame.payload.iter().enumerate() {
        let off = PAYLOAD_OFFSET + i * 4;
        buf[off..off + 4].copy_from_slice(&value.to_le_bytes());
    }
    buf
}

/// Convert yaw/pitch/roll (radians) to a quaternion using the half-angle
/// aerospace-sequence formula.
///
/// No normalization is applied: well-formed Euler input already yields a
/// near-unit quaternion within floating-point tolerance.
pub fn euler_to_quaternion(e: EulerAngles) -> Quaternion {
    let c1 = (e.yaw / 2.0).cos();
    let s1 = (e.yaw / 2.0).sin();
    let c2 = (e.pitch / 2.0).cos();
    let s2 = (e.pitch / 2.0).sin();
    let c3 = (e.roll / 2.0).cos();
    let s3 = (e.roll / 2.0).sin();
    let c1c2 = c1 * c2;
    let s1s2 = s1 * s2;
    Quaternion {
        w: c1c2 * c3 - s1s2 * s3,
        x: c1c2 * s3 + s1s2 * c3,
        y: s1 * c2 * c3 + c1 * s2 * s3,
        z: c1 * s2 * c3 - s1 * c2 * s3,
    }
}
