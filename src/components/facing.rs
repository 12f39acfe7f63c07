//! Compass facing of a camera rig.
//!
//! The rig only ever translates in the horizontal plane, so the vertical part
//! of a drag gesture has to be pushed into one of the ground axes. Which axis
//! (and which sign) depends on where the camera is looking; that mapping is
//! kept in [`PAN_REMAP`], indexed by [`FacingDirection`].

use raylib::prelude::Vector3;

/// One of the eight compass buckets the rig yaw can fall into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum FacingDirection {
    #[default]
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Ground axis that receives the vertical component of a pan delta.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GroundAxis {
    X,
    Z,
}

/// How a facing folds the vertical drag component into the ground plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanRemap {
    /// Axis receiving the vertical component.
    pub axis: GroundAxis,
    /// Multiplier applied to the vertical component before adding it.
    pub sign: f32,
}

/// Pan remapping per facing, in [`FacingDirection::ALL`] order.
///
/// Diagonal facings have no entry yet; panning while facing one of them just
/// drops the vertical component.
pub const PAN_REMAP: [Option<PanRemap>; 8] = [
    // North
    Some(PanRemap {
        axis: GroundAxis::Z,
        sign: 1.0,
    }),
    // NorthEast
    None,
    // East
    Some(PanRemap {
        axis: GroundAxis::X,
        sign: -1.0,
    }),
    // SouthEast
    None,
    // South
    Some(PanRemap {
        axis: GroundAxis::Z,
        sign: -1.0,
    }),
    // SouthWest
    None,
    // West
    Some(PanRemap {
        axis: GroundAxis::X,
        sign: 1.0,
    }),
    // NorthWest
    None,
];

impl FacingDirection {
    /// All facings, clockwise from North in 45° steps.
    pub const ALL: [FacingDirection; 8] = [
        FacingDirection::North,
        FacingDirection::NorthEast,
        FacingDirection::East,
        FacingDirection::SouthEast,
        FacingDirection::South,
        FacingDirection::SouthWest,
        FacingDirection::West,
        FacingDirection::NorthWest,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Bucket a yaw (degrees, any range) into the nearest facing.
    pub fn from_yaw(yaw: f32) -> Self {
        let step = (yaw.rem_euclid(360.0) / 45.0).round_ties_even() as usize % 8;
        Self::ALL[step]
    }

    /// Yaw in degrees this facing corresponds to, in [0, 360).
    pub fn yaw(self) -> f32 {
        self.index() as f32 * 45.0
    }

    /// Pan remapping for this facing, `None` for the unmapped diagonals.
    pub fn pan_remap(self) -> Option<PanRemap> {
        PAN_REMAP[self.index()]
    }

    /// Fold a raw world-space drag delta into a ground-plane translation.
    ///
    /// The vertical component is added to the axis this facing maps it to and
    /// then zeroed.
    pub fn redirect_pan(self, delta: Vector3) -> Vector3 {
        let mut out = delta;
        if let Some(remap) = self.pan_remap() {
            match remap.axis {
                GroundAxis::X => out.x += delta.y * remap.sign,
                GroundAxis::Z => out.z += delta.y * remap.sign,
            }
        }
        out.y = 0.0;
        out
    }

    /// NorthEast, SouthEast, SouthWest or NorthWest; none of them has a pan
    /// mapping.
    pub fn is_diagonal(self) -> bool {
        self.index() % 2 == 1
    }
}
