bitflags::bitflags! {
    /// Flags byte of a FreePIE wire frame, declaring which data groups the
    /// 12-float payload carries.
    ///
    /// Only two combinations carry orientation: `ORIENTATION` alone
    /// (yaw/pitch/roll at payload[0..3]) and `ORIENTATION | RAW`
    /// (yaw/pitch/roll at payload[9..12], after three raw sensor triples).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u8 {
        const RAW         = 1 << 0;
        const ORIENTATION = 1 << 1;
    }
}

/// Orientation as yaw/pitch/roll in radians, produced per decoded frame and
/// consumed immediately by the quaternion converter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

/// Unit quaternion [w, x, y, z] representing device orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
}

/// Pose reported to the tracker host.
///
/// FreePIE carries no translation data, so position is always the origin;
/// only the orientation is meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position [x, y, z] in meters. Always zero for this source.
    pub position: [f32; 3],
    pub orientation: Quaternion,
}

impl Pose {
    /// Identity pose: origin position, identity orientation.
    pub fn identity() -> Pose {
        Pose {
            position: [0.0; 3],
            orientation: Quaternion::IDENTITY,
        }
    }
}
