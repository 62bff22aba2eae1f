//! Serde helpers for range bounds that default to an infinity.
//!
//! JSON has no representation for infinite floats, so unbounded limits are
//! written as `null` (TOML omits the key) and read back as the matching
//! infinity.

/// Upper bounds: a missing value means `+∞`.
pub(crate) mod upper {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(crate) fn serialize<S: Serializer>(
        value: &f32,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        super::serialize_bound(*value, serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<f32, D::Error> {
        Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or(f32::INFINITY))
    }
}

/// Lower bounds: a missing value means `-∞`.
pub(crate) mod lower {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(crate) fn serialize<S: Serializer>(
        value: &f32,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        super::serialize_bound(*value, serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<f32, D::Error> {
        Ok(Option::<f32>::deserialize(deserializer)?
            .unwrap_or(f32::NEG_INFINITY))
    }
}

fn serialize_bound<S: serde::Serializer>(
    value: f32,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f32(value)
    } else {
        serializer.serialize_none()
    }
}
