//! Generation parameter records and their typed patches
//!
//! Every editable record has a `*Patch` companion with all-optional fields and
//! an `apply` that shallow-merges the patch over the record: fields left
//! `None` keep their previous value. Image and mask source fields use
//! `Option<Option<ImageSource>>` in patches so that `Some(None)` clears the
//! image while `None` leaves it untouched.
//!
//! Defaults derive from the [`ServerParams`] snapshot; source fields always
//! derive to no image.

use serde::{Deserialize, Serialize};

use crate::ranges::ServerParams;

/// Number of blend source slots offered by the UI
pub const BLEND_SOURCES: usize = 2;

/// Reference to a user-supplied image (upload or a prior output)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Display name, usually the original file name
    pub name: String,
    /// Object URL the view can render
    pub url: String,
}

// =============================================================================
// Base parameters
// =============================================================================

/// Parameters shared by every diffusion tab
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseImgParams {
    pub prompt: String,
    pub negative_prompt: String,
    pub scheduler: String,
    pub seed: i64,
    pub steps: u32,
    pub cfg: f32,
    pub eta: f32,
    pub batch: u32,
    #[serde(rename = "tiledVAE")]
    pub tiled_vae: bool,
    pub tiles: u32,
    pub overlap: f32,
    pub stride: u32,
}

/// Partial update for [`BaseImgParams`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaseImgPatch {
    pub prompt: Option<String>,
    pub negative_prompt: Option<String>,
    pub scheduler: Option<String>,
    pub seed: Option<i64>,
    pub steps: Option<u32>,
    pub cfg: Option<f32>,
    pub eta: Option<f32>,
    pub batch: Option<u32>,
    pub tiled_vae: Option<bool>,
    pub tiles: Option<u32>,
    pub overlap: Option<f32>,
    pub stride: Option<u32>,
}

impl BaseImgParams {
    /// Concrete defaults for every base field, taken from the server snapshot.
    pub fn from_server(server: &ServerParams) -> Self {
        Self {
            prompt: server.prompt.default.clone(),
            negative_prompt: server.negative_prompt.default.clone(),
            scheduler: server.scheduler.default.clone(),
            seed: server.seed.default,
            steps: server.steps.default,
            cfg: server.cfg.default,
            eta: server.eta.default,
            batch: server.batch.default,
            tiled_vae: server.tiled_vae.default,
            tiles: server.tiles.default,
            overlap: server.overlap.default,
            stride: server.stride.default,
        }
    }

    pub fn apply(&mut self, patch: BaseImgPatch) {
        if let Some(v) = patch.prompt {
            self.prompt = v;
        }
        if let Some(v) = patch.negative_prompt {
            self.negative_prompt = v;
        }
        if let Some(v) = patch.scheduler {
            self.scheduler = v;
        }
        if let Some(v) = patch.seed {
            self.seed = v;
        }
        if let Some(v) = patch.steps {
            self.steps = v;
        }
        if let Some(v) = patch.cfg {
            self.cfg = v;
        }
        if let Some(v) = patch.eta {
            self.eta = v;
        }
        if let Some(v) = patch.batch {
            self.batch = v;
        }
        if let Some(v) = patch.tiled_vae {
            self.tiled_vae = v;
        }
        if let Some(v) = patch.tiles {
            self.tiles = v;
        }
        if let Some(v) = patch.overlap {
            self.overlap = v;
        }
        if let Some(v) = patch.stride {
            self.stride = v;
        }
    }
}

// =============================================================================
// Tab parameter sets
// =============================================================================

/// Text-to-image tab parameters
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Txt2ImgParams {
    #[serde(flatten)]
    pub base: BaseImgParams,
    pub width: u32,
    pub height: u32,
}

/// Partial update for [`Txt2ImgParams`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Txt2ImgPatch {
    pub base: BaseImgPatch,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Txt2ImgParams {
    pub fn from_server(server: &ServerParams) -> Self {
        Self {
            base: BaseImgParams::from_server(server),
            width: server.width.default,
            height: server.height.default,
        }
    }

    pub fn apply(&mut self, patch: Txt2ImgPatch) {
        self.base.apply(patch.base);
        if let Some(v) = patch.width {
            self.width = v;
        }
        if let Some(v) = patch.height {
            self.height = v;
        }
    }
}

/// Image-to-image tab parameters
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Img2ImgParams {
    #[serde(flatten)]
    pub base: BaseImgParams,
    pub source: Option<ImageSource>,
    pub source_filter: String,
    pub strength: f32,
    pub loopback: u32,
}

/// Partial update for [`Img2ImgParams`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Img2ImgPatch {
    pub base: BaseImgPatch,
    /// `Some(None)` clears the source image
    pub source: Option<Option<ImageSource>>,
    pub source_filter: Option<String>,
    pub strength: Option<f32>,
    pub loopback: Option<u32>,
}

impl Img2ImgParams {
    pub fn from_server(server: &ServerParams) -> Self {
        Self {
            base: BaseImgParams::from_server(server),
            source: None,
            source_filter: String::new(),
            strength: server.strength.default,
            loopback: server.loopback.default,
        }
    }

    pub fn apply(&mut self, patch: Img2ImgPatch) {
        self.base.apply(patch.base);
        if let Some(v) = patch.source {
            self.source = v;
        }
        if let Some(v) = patch.source_filter {
            self.source_filter = v;
        }
        if let Some(v) = patch.strength {
            self.strength = v;
        }
        if let Some(v) = patch.loopback {
            self.loopback = v;
        }
    }
}

/// Inpaint tab parameters
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InpaintParams {
    #[serde(flatten)]
    pub base: BaseImgParams,
    pub source: Option<ImageSource>,
    pub mask: Option<ImageSource>,
    pub fill_color: String,
    pub filter: String,
    pub noise: String,
    pub strength: f32,
    pub tile_order: String,
}

/// Partial update for [`InpaintParams`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InpaintPatch {
    pub base: BaseImgPatch,
    /// `Some(None)` clears the source image
    pub source: Option<Option<ImageSource>>,
    /// `Some(None)` clears the mask
    pub mask: Option<Option<ImageSource>>,
    pub fill_color: Option<String>,
    pub filter: Option<String>,
    pub noise: Option<String>,
    pub strength: Option<f32>,
    pub tile_order: Option<String>,
}

impl InpaintParams {
    pub fn from_server(server: &ServerParams) -> Self {
        Self {
            base: BaseImgParams::from_server(server),
            source: None,
            mask: None,
            fill_color: server.fill_color.default.clone(),
            filter: server.filter.default.clone(),
            noise: server.noise.default.clone(),
            strength: server.strength.default,
            tile_order: server.tile_order.default.clone(),
        }
    }

    pub fn apply(&mut self, patch: InpaintPatch) {
        self.base.apply(patch.base);
        if let Some(v) = patch.source {
            self.source = v;
        }
        if let Some(v) = patch.mask {
            self.mask = v;
        }
        if let Some(v) = patch.fill_color {
            self.fill_color = v;
        }
        if let Some(v) = patch.filter {
            self.filter = v;
        }
        if let Some(v) = patch.noise {
            self.noise = v;
        }
        if let Some(v) = patch.strength {
            self.strength = v;
        }
        if let Some(v) = patch.tile_order {
            self.tile_order = v;
        }
    }
}

/// Outpaint margins, enabled per generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutpaintPixels {
    pub enabled: bool,
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

/// Partial update for [`OutpaintPixels`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OutpaintPatch {
    pub enabled: Option<bool>,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub top: Option<u32>,
    pub bottom: Option<u32>,
}

impl OutpaintPixels {
    pub fn from_server(server: &ServerParams) -> Self {
        Self {
            enabled: false,
            left: server.left.default,
            right: server.right.default,
            top: server.top.default,
            bottom: server.bottom.default,
        }
    }

    pub fn apply(&mut self, patch: OutpaintPatch) {
        if let Some(v) = patch.enabled {
            self.enabled = v;
        }
        if let Some(v) = patch.left {
            self.left = v;
        }
        if let Some(v) = patch.right {
            self.right = v;
        }
        if let Some(v) = patch.top {
            self.top = v;
        }
        if let Some(v) = patch.bottom {
            self.bottom = v;
        }
    }
}

/// Highres second-pass parameters
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighresParams {
    pub enabled: bool,
    pub highres_iterations: u32,
    pub highres_method: String,
    pub highres_steps: u32,
    pub highres_scale: u32,
    pub highres_strength: f32,
}

/// Partial update for [`HighresParams`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighresPatch {
    pub enabled: Option<bool>,
    pub highres_iterations: Option<u32>,
    pub highres_method: Option<String>,
    pub highres_steps: Option<u32>,
    pub highres_scale: Option<u32>,
    pub highres_strength: Option<f32>,
}

impl HighresParams {
    pub fn from_server(server: &ServerParams) -> Self {
        Self {
            enabled: false,
            highres_iterations: server.highres_iterations.default,
            highres_method: String::new(),
            highres_steps: server.highres_steps.default,
            highres_scale: server.highres_scale.default,
            highres_strength: server.highres_strength.default,
        }
    }

    pub fn apply(&mut self, patch: HighresPatch) {
        if let Some(v) = patch.enabled {
            self.enabled = v;
        }
        if let Some(v) = patch.highres_iterations {
            self.highres_iterations = v;
        }
        if let Some(v) = patch.highres_method {
            self.highres_method = v;
        }
        if let Some(v) = patch.highres_steps {
            self.highres_steps = v;
        }
        if let Some(v) = patch.highres_scale {
            self.highres_scale = v;
        }
        if let Some(v) = patch.highres_strength {
            self.highres_strength = v;
        }
    }
}

/// Upscale post-processing parameters, shared by every tab
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpscaleParams {
    pub enabled: bool,
    pub denoise: f32,
    pub faces: bool,
    pub face_outscale: u32,
    pub face_strength: f32,
    pub outscale: u32,
    pub scale: u32,
    pub upscale_order: String,
}

/// Partial update for [`UpscaleParams`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpscalePatch {
    pub enabled: Option<bool>,
    pub denoise: Option<f32>,
    pub faces: Option<bool>,
    pub face_outscale: Option<u32>,
    pub face_strength: Option<f32>,
    pub outscale: Option<u32>,
    pub scale: Option<u32>,
    pub upscale_order: Option<String>,
}

impl UpscaleParams {
    pub fn from_server(server: &ServerParams) -> Self {
        Self {
            enabled: false,
            denoise: server.denoise.default,
            faces: false,
            face_outscale: server.face_outscale.default,
            face_strength: server.face_strength.default,
            outscale: server.outscale.default,
            scale: server.scale.default,
            upscale_order: server.upscale_order.default.clone(),
        }
    }

    pub fn apply(&mut self, patch: UpscalePatch) {
        if let Some(v) = patch.enabled {
            self.enabled = v;
        }
        if let Some(v) = patch.denoise {
            self.denoise = v;
        }
        if let Some(v) = patch.faces {
            self.faces = v;
        }
        if let Some(v) = patch.face_outscale {
            self.face_outscale = v;
        }
        if let Some(v) = patch.face_strength {
            self.face_strength = v;
        }
        if let Some(v) = patch.outscale {
            self.outscale = v;
        }
        if let Some(v) = patch.scale {
            self.scale = v;
        }
        if let Some(v) = patch.upscale_order {
            self.upscale_order = v;
        }
    }
}

/// Upscale tab request parameters
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpscaleReqParams {
    pub prompt: String,
    pub negative_prompt: String,
    pub source: Option<ImageSource>,
}

/// Partial update for [`UpscaleReqParams`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpscaleReqPatch {
    pub prompt: Option<String>,
    pub negative_prompt: Option<String>,
    /// `Some(None)` clears the source image
    pub source: Option<Option<ImageSource>>,
}

impl UpscaleReqParams {
    pub fn from_server(server: &ServerParams) -> Self {
        Self {
            prompt: server.prompt.default.clone(),
            negative_prompt: server.negative_prompt.default.clone(),
            source: None,
        }
    }

    pub fn apply(&mut self, patch: UpscaleReqPatch) {
        if let Some(v) = patch.prompt {
            self.prompt = v;
        }
        if let Some(v) = patch.negative_prompt {
            self.negative_prompt = v;
        }
        if let Some(v) = patch.source {
            self.source = v;
        }
    }
}

/// Blend tab parameters. Defaults are client-side: no mask, no sources.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendParams {
    pub mask: Option<ImageSource>,
    pub sources: Vec<Option<ImageSource>>,
}

/// Partial update for [`BlendParams`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlendPatch {
    /// `Some(None)` clears the mask
    pub mask: Option<Option<ImageSource>>,
    pub sources: Option<Vec<Option<ImageSource>>>,
}

impl BlendParams {
    pub fn apply(&mut self, patch: BlendPatch) {
        if let Some(v) = patch.mask {
            self.mask = v;
        }
        if let Some(v) = patch.sources {
            self.sources = v;
        }
    }
}

// =============================================================================
// Cross-cutting records
// =============================================================================

/// Inpaint brush parameters. Client-side defaults, not server-provided yet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrushParams {
    pub color: u32,
    pub size: u32,
    pub strength: f32,
}

impl Default for BrushParams {
    fn default() -> Self {
        Self {
            color: 255,
            size: 8,
            strength: 0.5,
        }
    }
}

/// Partial update for [`BrushParams`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrushPatch {
    pub color: Option<u32>,
    pub size: Option<u32>,
    pub strength: Option<f32>,
}

impl BrushParams {
    pub fn apply(&mut self, patch: BrushPatch) {
        if let Some(v) = patch.color {
            self.color = v;
        }
        if let Some(v) = patch.size {
            self.size = v;
        }
        if let Some(v) = patch.strength {
            self.strength = v;
        }
    }
}

/// Selected model assets and execution platform
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelParams {
    pub control: String,
    pub correction: String,
    pub model: String,
    pub pipeline: String,
    pub platform: String,
    pub upscaling: String,
}

/// Partial update for [`ModelParams`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelPatch {
    pub control: Option<String>,
    pub correction: Option<String>,
    pub model: Option<String>,
    pub pipeline: Option<String>,
    pub platform: Option<String>,
    pub upscaling: Option<String>,
}

impl ModelParams {
    pub fn from_server(server: &ServerParams) -> Self {
        Self {
            control: server.control.default.clone(),
            correction: server.correction.default.clone(),
            model: server.model.default.clone(),
            pipeline: server.pipeline.default.clone(),
            platform: server.platform.default.clone(),
            upscaling: server.upscaling.default.clone(),
        }
    }

    pub fn apply(&mut self, patch: ModelPatch) {
        if let Some(v) = patch.control {
            self.control = v;
        }
        if let Some(v) = patch.correction {
            self.correction = v;
        }
        if let Some(v) = patch.model {
            self.model = v;
        }
        if let Some(v) = patch.pipeline {
            self.pipeline = v;
        }
        if let Some(v) = patch.platform {
            self.platform = v;
        }
        if let Some(v) = patch.upscaling {
            self.upscaling = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_params_serialize_flat_inside_tab_records() {
        let params = Txt2ImgParams {
            base: BaseImgParams {
                prompt: "a red panda".into(),
                steps: 30,
                ..Default::default()
            },
            width: 512,
            height: 768,
        };

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["prompt"], "a red panda");
        assert_eq!(value["steps"], 30);
        assert_eq!(value["width"], 512);
        assert!(value.get("base").is_none());
        assert!(value.get("tiledVAE").is_some());
    }

    #[test]
    fn patch_with_nested_source_clears_image() {
        let mut params = Img2ImgParams {
            source: Some(ImageSource {
                name: "cat.png".into(),
                url: "blob:cat".into(),
            }),
            ..Default::default()
        };

        // absent source leaves the image alone
        params.apply(Img2ImgPatch {
            strength: Some(0.8),
            ..Default::default()
        });
        assert!(params.source.is_some());
        assert_eq!(params.strength, 0.8);

        params.apply(Img2ImgPatch {
            source: Some(None),
            ..Default::default()
        });
        assert!(params.source.is_none());
    }
}
