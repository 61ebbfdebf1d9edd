//! Merged session state
//!
//! One value per UI session, constructed from the [`ServerParams`] snapshot
//! the server advertises. Tab resets re-derive their sub-tree from that
//! snapshot, so a reset value can never alias earlier edits.

use glaze_common::{
    BaseImgParams, BlendParams, BrushParams, ExtrasFile, HighresParams, Img2ImgParams,
    InpaintParams, ModelParams, OutpaintPixels, ServerParams, Txt2ImgParams, UpscaleParams,
    UpscaleReqParams,
};
use serde::{Deserialize, Serialize};

use super::history::HistoryState;
use super::prompts::PromptLibrary;

/// Color scheme preference. Unset falls back to the browser preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Unset,
}

/// The merged client state: every slice plus the snapshot it derives from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Server parameter snapshot taken at construction; immutable afterwards
    pub server: ServerParams,

    // tab slices
    pub txt2img: Txt2ImgParams,
    pub img2img: Img2ImgParams,
    pub inpaint: InpaintParams,
    pub outpaint: OutpaintPixels,
    pub highres: HighresParams,
    pub upscale: UpscaleParams,
    pub upscale_tab: UpscaleReqParams,
    pub blend: BlendParams,

    // cross-cutting slices
    pub brush: BrushParams,
    pub model: ModelParams,
    /// User-editable base defaults, seeded from the server snapshot
    pub defaults: BaseImgParams,
    pub theme: Theme,
    pub history: HistoryState,
    pub extras: ExtrasFile,
    pub prompts: PromptLibrary,
}

impl SessionState {
    /// Derive every slice from the server snapshot. Image and mask sources
    /// start out unset, booleans false, everything else at the server default.
    pub fn new(server: ServerParams) -> Self {
        Self {
            txt2img: Txt2ImgParams::from_server(&server),
            img2img: Img2ImgParams::from_server(&server),
            inpaint: InpaintParams::from_server(&server),
            outpaint: OutpaintPixels::from_server(&server),
            highres: HighresParams::from_server(&server),
            upscale: UpscaleParams::from_server(&server),
            upscale_tab: UpscaleReqParams::from_server(&server),
            blend: BlendParams::default(),
            brush: BrushParams::default(),
            model: ModelParams::from_server(&server),
            defaults: BaseImgParams::from_server(&server),
            theme: Theme::default(),
            history: HistoryState::default(),
            extras: ExtrasFile::default(),
            prompts: PromptLibrary::default(),
            server,
        }
    }

    pub fn reset_txt2img(&mut self) {
        self.txt2img = Txt2ImgParams::from_server(&self.server);
    }

    pub fn reset_img2img(&mut self) {
        self.img2img = Img2ImgParams::from_server(&self.server);
    }

    pub fn reset_inpaint(&mut self) {
        self.inpaint = InpaintParams::from_server(&self.server);
    }

    pub fn reset_highres(&mut self) {
        self.highres = HighresParams::from_server(&self.server);
    }

    pub fn reset_upscale_tab(&mut self) {
        self.upscale_tab = UpscaleReqParams::from_server(&self.server);
    }

    pub fn reset_blend(&mut self) {
        self.blend = BlendParams::default();
    }

    /// Reset the tabs covered by the reset-all control. History, extras,
    /// saved prompts, theme, brush and model selection are left alone.
    pub fn reset_all(&mut self) {
        self.reset_txt2img();
        self.reset_img2img();
        self.reset_inpaint();
        self.reset_upscale_tab();
        self.reset_blend();
    }
}
