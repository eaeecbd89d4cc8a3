//! Built-in defaults for the settings the settings window edits

use super::store::SettingValue;

pub const VIDEO: &str = "Video";
pub const GENERAL: &str = "General";
pub const WATER: &str = "Water";
pub const SHADERS: &str = "Shaders";
pub const TERRAIN: &str = "Terrain";
pub const CAMERA: &str = "Camera";
pub const SOUND: &str = "Sound";
pub const GUI: &str = "GUI";

pub const RESOLUTION_X: &str = "resolution x";
pub const RESOLUTION_Y: &str = "resolution y";
pub const WINDOW_MODE: &str = "window mode";
pub const WINDOW_BORDER: &str = "window border";
pub const TEXTURE_MIPMAP: &str = "texture mipmap";
pub const PREFERRED_LOCALES: &str = "preferred locales";
pub const RTT_SIZE: &str = "rtt size";
pub const REFLECTION_DETAIL: &str = "reflection detail";
pub const RAIN_RIPPLE_DETAIL: &str = "rain ripple detail";
pub const MAX_LIGHTS: &str = "max lights";
pub const LIGHTING_METHOD: &str = "lighting method";

pub fn builtin_defaults() -> Vec<(&'static str, &'static str, SettingValue)> {
    use SettingValue::*;
    vec![
        (VIDEO, RESOLUTION_X, Int(800)),
        (VIDEO, RESOLUTION_Y, Int(600)),
        (VIDEO, WINDOW_MODE, Int(2)),
        (VIDEO, WINDOW_BORDER, Bool(true)),
        (VIDEO, "vsync", Bool(false)),
        (VIDEO, "framerate limit", Float(300.0)),
        (GENERAL, TEXTURE_MIPMAP, String("nearest".into())),
        (GENERAL, PREFERRED_LOCALES, StringArray(vec!["en".into()])),
        (WATER, "shader", Bool(true)),
        (WATER, RTT_SIZE, Int(512)),
        (WATER, REFLECTION_DETAIL, Int(2)),
        (WATER, RAIN_RIPPLE_DETAIL, Int(1)),
        (SHADERS, MAX_LIGHTS, Int(8)),
        (SHADERS, LIGHTING_METHOD, String("shaders compatibility".into())),
        (SHADERS, "light bounds multiplier", Float(1.65)),
        (SHADERS, "maximum light distance", Float(8192.0)),
        (SHADERS, "light fade start", Float(0.85)),
        (SHADERS, "minimum interior brightness", Float(0.08)),
        (TERRAIN, "distant terrain", Bool(false)),
        (CAMERA, "viewing distance", Float(7168.0)),
        (CAMERA, "field of view", Float(60.0)),
        (SOUND, "master volume", Float(1.0)),
        (GUI, "subtitles", Bool(false)),
    ]
}

/// Settings restored by "reset lighting"
pub const LIGHTING_RESET_SETTINGS: [&str; 6] = [
    LIGHTING_METHOD,
    "light bounds multiplier",
    "maximum light distance",
    "light fade start",
    "minimum interior brightness",
    MAX_LIGHTS,
];
