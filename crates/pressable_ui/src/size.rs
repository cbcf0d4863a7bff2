//! Size tiers and their fixed geometry.

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// Closed set of control sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SizeTier {
    /// Compact controls (toolbars, inline actions).
    Small = 0,
    /// Default size.
    #[default]
    Medium = 1,
    /// Prominent call-to-action size.
    Large = 2,
}

/// Geometry for one size tier, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec {
    /// Control height.
    pub height: f32,
    /// Label font size.
    pub font_size: f32,
    /// Corner radius of the control shape.
    pub corner_radius: f32,
}

const SIZE_TABLE: [SizeSpec; 3] = [
    SizeSpec {
        height: 44.0,
        font_size: 15.0,
        corner_radius: 10.0,
    },
    SizeSpec {
        height: 50.0,
        font_size: 17.0,
        corner_radius: 12.0,
    },
    SizeSpec {
        height: 56.0,
        font_size: 19.0,
        corner_radius: 14.0,
    },
];

impl SizeTier {
    /// Every tier, smallest first.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Converts a raw tier index.
    ///
    /// # Panics
    ///
    /// Panics on an index outside `0..=2`. The tier set is closed, so an
    /// unknown index is a programming error.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Small,
            1 => Self::Medium,
            2 => Self::Large,
            _ => panic!("size tier index out of range"),
        }
    }

    /// Returns the geometry for this tier.
    #[inline]
    #[must_use]
    pub const fn spec(self) -> SizeSpec {
        SIZE_TABLE[self as usize]
    }

    /// Lowercase name, as used in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl TryFrom<&str> for SizeTier {
    type Error = StyleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| StyleError::UnknownSizeTier(value.to_owned()))
    }
}

/// Returns the geometry for `tier`.
#[inline]
#[must_use]
pub const fn size_spec(tier: SizeTier) -> SizeSpec {
    tier.spec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values() {
        let expected = [(44.0, 15.0, 10.0), (50.0, 17.0, 12.0), (56.0, 19.0, 14.0)];
        for (tier, (height, font_size, corner_radius)) in SizeTier::ALL.into_iter().zip(expected) {
            let spec = size_spec(tier);
            assert_eq!(spec.height, height, "{tier:?}");
            assert_eq!(spec.font_size, font_size, "{tier:?}");
            assert_eq!(spec.corner_radius, corner_radius, "{tier:?}");
        }
    }

    #[test]
    fn test_geometry_strictly_increasing() {
        for pair in SizeTier::ALL.windows(2) {
            let (a, b) = (pair[0].spec(), pair[1].spec());
            assert!(a.height < b.height);
            assert!(a.font_size < b.font_size);
            assert!(a.corner_radius < b.corner_radius);
        }
    }

    #[test]
    fn test_from_index_matches_discriminant() {
        for tier in SizeTier::ALL {
            assert_eq!(SizeTier::from_index(tier as u8), tier);
        }
    }

    #[test]
    #[should_panic(expected = "size tier index out of range")]
    fn test_from_index_out_of_range_panics() {
        let _ = SizeTier::from_index(3);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(SizeTier::try_from("Large").unwrap(), SizeTier::Large);
        assert!(matches!(
            SizeTier::try_from("xl"),
            Err(StyleError::UnknownSizeTier(name)) if name == "xl"
        ));
    }
}
