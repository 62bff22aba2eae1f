use glam::Vec3;

/// How the controls interpret the shared transform.
///
/// The spherical math is shared between both modes; only the few
/// mode-specific decisions below differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlMode {
    /// The position is authoritative and the spherical state describes the
    /// view direction.
    FirstPerson,
    /// The position orbits the target and the spherical state describes the
    /// offset from target to position.
    ThirdPerson {
        /// Offset of the look-at point from the target.
        pivot_offset: Vec3,
    },
}

impl ControlMode {
    /// Whether this is the orbiting (third-person) mode.
    #[must_use]
    pub const fn is_orbit(self) -> bool {
        matches!(self, Self::ThirdPerson { .. })
    }

    /// Vector the spherical state is derived from by `look_at`.
    ///
    /// Orbit: offset from target to position. First person: unit direction
    /// from position to target.
    #[must_use]
    pub fn spherical_source(self, position: Vec3, target: Vec3) -> Vec3 {
        match self {
            Self::ThirdPerson { .. } => position - target,
            Self::FirstPerson => (target - position).normalize_or_zero(),
        }
    }

    /// Sign applied to the azimuth delta.
    #[must_use]
    pub fn theta_sign(invert_x: bool) -> f32 {
        if invert_x {
            1.0
        } else {
            -1.0
        }
    }

    /// Sign applied to the polar delta.
    ///
    /// | mode         | invert_y | sign |
    /// |--------------|----------|------|
    /// | first person | false    | +1   |
    /// | first person | true     | -1   |
    /// | orbit        | false    | -1   |
    /// | orbit        | true     | +1   |
    #[must_use]
    pub fn phi_sign(self, invert_y: bool) -> f32 {
        if self.is_orbit() ^ invert_y {
            -1.0
        } else {
            1.0
        }
    }

    /// Sign that turns the spherical direction into the view direction.
    #[must_use]
    pub const fn view_sign(self) -> f32 {
        match self {
            Self::ThirdPerson { .. } => -1.0,
            Self::FirstPerson => 1.0,
        }
    }
}
