//! Responses from the generation backend

use serde::{Deserialize, Serialize};

use crate::params::{BlendParams, Img2ImgParams, InpaintParams, Txt2ImgParams, UpscaleReqParams};

/// One generated output within a response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageOutput {
    /// Unique key for this output, assigned by the server
    pub key: String,
    /// URL the output can be fetched from
    pub url: String,
}

/// Pixel size of generated outputs
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// A generation response, possibly still in flight
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageResponse {
    pub outputs: Vec<ImageOutput>,
    pub size: ImageSize,
}

impl ImageResponse {
    /// Key identifying this response in history: the first output's key.
    pub fn key(&self) -> Option<&str> {
        self.outputs.first().map(|output| output.key.as_str())
    }
}

/// Completion status reported for a pending response
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub progress: u32,
}

/// Everything needed to run a generation again
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RetryParams {
    Txt2Img(Txt2ImgParams),
    Img2Img(Img2ImgParams),
    Inpaint(InpaintParams),
    Upscale(UpscaleReqParams),
    Blend(BlendParams),
}
