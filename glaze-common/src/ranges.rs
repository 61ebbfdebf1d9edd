//! Server-advertised parameter descriptors
//!
//! The generation server describes every tunable field as a record carrying a
//! concrete default. A snapshot of these is taken once per session and every
//! tab derives its defaults from it. No validation happens here; clamping
//! out-of-range values is a widget concern.

use serde::{Deserialize, Serialize};

/// A numeric parameter range with a server default
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberRange<T> {
    pub default: T,
    pub min: T,
    pub max: T,
    pub step: T,
}

/// An enumerated parameter with a default key and the allowed keys
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectParam {
    pub default: String,
    pub keys: Vec<String>,
}

/// A free-text parameter with a server default
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextParam {
    pub default: String,
}

/// A boolean parameter with a server default
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ToggleParam {
    pub default: bool,
}

/// Snapshot of every tunable field the server advertises.
///
/// Supplied once at session construction and kept immutable for the lifetime
/// of the store; tab resets re-derive from it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerParams {
    // base image parameters
    pub batch: NumberRange<u32>,
    pub cfg: NumberRange<f32>,
    pub eta: NumberRange<f32>,
    pub prompt: TextParam,
    pub negative_prompt: TextParam,
    pub scheduler: SelectParam,
    pub seed: NumberRange<i64>,
    pub steps: NumberRange<u32>,
    #[serde(rename = "tiledVAE")]
    pub tiled_vae: ToggleParam,
    pub tiles: NumberRange<u32>,
    pub overlap: NumberRange<f32>,
    pub stride: NumberRange<u32>,

    // text to image
    pub width: NumberRange<u32>,
    pub height: NumberRange<u32>,

    // image to image
    pub loopback: NumberRange<u32>,
    pub strength: NumberRange<f32>,

    // inpaint
    pub fill_color: TextParam,
    pub filter: SelectParam,
    pub noise: SelectParam,
    pub tile_order: SelectParam,

    // outpaint margins
    pub left: NumberRange<u32>,
    pub right: NumberRange<u32>,
    pub top: NumberRange<u32>,
    pub bottom: NumberRange<u32>,

    // upscaling
    pub denoise: NumberRange<f32>,
    pub face_outscale: NumberRange<u32>,
    pub face_strength: NumberRange<f32>,
    pub outscale: NumberRange<u32>,
    pub scale: NumberRange<u32>,
    pub upscale_order: SelectParam,

    // highres
    pub highres_iterations: NumberRange<u32>,
    pub highres_steps: NumberRange<u32>,
    pub highres_scale: NumberRange<u32>,
    pub highres_strength: NumberRange<f32>,

    // model selection
    pub control: SelectParam,
    pub correction: SelectParam,
    pub model: SelectParam,
    pub pipeline: SelectParam,
    pub platform: SelectParam,
    pub upscaling: SelectParam,
}
