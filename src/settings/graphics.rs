//! Option mappings for the graphics tab: texture filtering, water, lights.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

pub const WATER_TEXTURE_SIZES: [i64; 3] = [512, 1024, 2048];
pub const MAX_REFLECTION_DETAIL: i64 = 5;
pub const MAX_RAIN_RIPPLE_DETAIL: i64 = 2;

pub const MIN_MAX_LIGHTS: i64 = 8;
pub const MAX_MAX_LIGHTS: i64 = 32;
pub const MAX_LIGHTS_INCREMENT: i64 = 8;

/// Value of `General/texture mipmap`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFiltering {
    Nearest,
    Linear,
    None,
}

impl TextureFiltering {
    /// Options offered by the filtering combo box, by position
    pub const OPTIONS: [TextureFiltering; 2] = [TextureFiltering::Nearest, TextureFiltering::Linear];

    pub fn from_position(pos: usize) -> Option<Self> {
        let option = Self::OPTIONS.get(pos).copied();
        if option.is_none() {
            warn!(pos, "Unexpected texture filtering option");
        }
        option
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextureFiltering::Nearest => "nearest",
            TextureFiltering::Linear => "linear",
            TextureFiltering::None => "none",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextureFiltering::Linear => "Trilinear",
            TextureFiltering::Nearest => "Bilinear",
            TextureFiltering::None => "Disabled",
        }
    }
}

impl FromStr for TextureFiltering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(TextureFiltering::Nearest),
            "linear" => Ok(TextureFiltering::Linear),
            "none" => Ok(TextureFiltering::None),
            other => Err(format!("unknown texture mipmap option '{}'", other)),
        }
    }
}

/// Caption for the stored mipmap value; unknown values show as "Other"
pub fn texture_filtering_label(value: &str) -> &'static str {
    match value.parse::<TextureFiltering>() {
        Ok(filtering) => filtering.label(),
        Err(_) => {
            warn!(value, "Invalid texture mipmap option");
            "Other"
        }
    }
}

/// Stored `Water/rtt size` for a combo position
pub fn water_texture_size(pos: usize) -> Option<i64> {
    WATER_TEXTURE_SIZES.get(pos).copied()
}

/// Combo position for a stored size: the largest option not above it
pub fn water_texture_index(size: i64) -> Option<usize> {
    WATER_TEXTURE_SIZES.iter().rposition(|&option| size >= option)
}

pub fn clamp_reflection_detail(level: i64) -> i64 {
    level.clamp(0, MAX_REFLECTION_DETAIL)
}

pub fn clamp_rain_ripple_detail(level: i64) -> i64 {
    level.clamp(0, MAX_RAIN_RIPPLE_DETAIL)
}

/// `8 * (pos + 1)`
pub fn max_lights_for_index(pos: usize) -> i64 {
    MAX_LIGHTS_INCREMENT * (pos as i64 + 1)
}

/// Combo position for a stored count; only multiples of 8 in 8..=32 have one
pub fn max_lights_index(count: i64) -> Option<usize> {
    if (MIN_MAX_LIGHTS..=MAX_MAX_LIGHTS).contains(&count) && count % MAX_LIGHTS_INCREMENT == 0 {
        usize::try_from(count / MAX_LIGHTS_INCREMENT - 1).ok()
    } else {
        None
    }
}

/// Value of `Shaders/lighting method`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingMethod {
    Legacy,
    ShadersCompatibility,
    Shaders,
}

impl LightingMethod {
    pub const ALL: [LightingMethod; 3] = [
        LightingMethod::Legacy,
        LightingMethod::ShadersCompatibility,
        LightingMethod::Shaders,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LightingMethod::Legacy => "legacy",
            LightingMethod::ShadersCompatibility => "shaders compatibility",
            LightingMethod::Shaders => "shaders",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LightingMethod::Legacy => "Legacy",
            LightingMethod::ShadersCompatibility => "Shaders (compatibility)",
            LightingMethod::Shaders => "Shaders",
        }
    }
}

impl fmt::Display for LightingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LightingMethod {
    type Err = String;

    /// Unrecognised names fall back to `shaders`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "legacy" => LightingMethod::Legacy,
            "shaders compatibility" => LightingMethod::ShadersCompatibility,
            _ => LightingMethod::Shaders,
        })
    }
}
