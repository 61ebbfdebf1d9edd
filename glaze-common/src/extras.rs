//! Extras catalog: the model assets selectable in the UI
//!
//! Mirrors the server's extras file: five independent ordered lists, each
//! keyed by a `name` that stays unique within its list.

use serde::{Deserialize, Serialize};

/// A catalog entry addressable by name
pub trait Named {
    fn name(&self) -> &str;
}

/// Insert or replace by name. An existing entry keeps its position; a new
/// name is appended.
pub fn upsert<T: Named>(list: &mut Vec<T>, entry: T) {
    match list.iter().position(|it| it.name() == entry.name()) {
        Some(idx) => list[idx] = entry,
        None => list.push(entry),
    }
}

/// Remove every entry with a matching name.
pub fn remove<T: Named>(list: &mut Vec<T>, name: &str) {
    list.retain(|it| it.name() != name);
}

/// A face-correction model
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectionModel {
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub label: String,
}

/// A diffusion checkpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffusionModel {
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub label: String,
}

/// An additional network (LoRA, textual inversion) applied on top of a model
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraNetwork {
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub label: String,
    /// Base model the network was trained against, when known
    #[serde(default)]
    pub model: String,
}

/// A downloadable source file with an explicit destination
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraSource {
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub dest: String,
}

/// An upscaling model
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpscalingModel {
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub scale: u32,
}

impl Named for CorrectionModel {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for DiffusionModel {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for ExtraNetwork {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for ExtraSource {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for UpscalingModel {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The registry of available model assets
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtrasFile {
    pub correction: Vec<CorrectionModel>,
    pub diffusion: Vec<DiffusionModel>,
    pub networks: Vec<ExtraNetwork>,
    pub sources: Vec<ExtraSource>,
    pub upscaling: Vec<UpscalingModel>,
}

/// Partial update replacing whole lists of [`ExtrasFile`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtrasPatch {
    pub correction: Option<Vec<CorrectionModel>>,
    pub diffusion: Option<Vec<DiffusionModel>>,
    pub networks: Option<Vec<ExtraNetwork>>,
    pub sources: Option<Vec<ExtraSource>>,
    pub upscaling: Option<Vec<UpscalingModel>>,
}

impl ExtrasFile {
    /// Replace each list present in the patch wholesale; absent lists keep
    /// their entries.
    pub fn apply(&mut self, patch: ExtrasPatch) {
        if let Some(v) = patch.correction {
            self.correction = v;
        }
        if let Some(v) = patch.diffusion {
            self.diffusion = v;
        }
        if let Some(v) = patch.networks {
            self.networks = v;
        }
        if let Some(v) = patch.sources {
            self.sources = v;
        }
        if let Some(v) = patch.upscaling {
            self.upscaling = v;
        }
    }

    pub fn add_correction_model(&mut self, model: CorrectionModel) {
        upsert(&mut self.correction, model);
    }

    pub fn remove_correction_model(&mut self, name: &str) {
        remove(&mut self.correction, name);
    }

    pub fn add_diffusion_model(&mut self, model: DiffusionModel) {
        upsert(&mut self.diffusion, model);
    }

    pub fn remove_diffusion_model(&mut self, name: &str) {
        remove(&mut self.diffusion, name);
    }

    pub fn add_extra_network(&mut self, network: ExtraNetwork) {
        upsert(&mut self.networks, network);
    }

    pub fn remove_extra_network(&mut self, name: &str) {
        remove(&mut self.networks, name);
    }

    pub fn add_extra_source(&mut self, source: ExtraSource) {
        upsert(&mut self.sources, source);
    }

    pub fn remove_extra_source(&mut self, name: &str) {
        remove(&mut self.sources, name);
    }

    pub fn add_upscaling_model(&mut self, model: UpscalingModel) {
        upsert(&mut self.upscaling, model);
    }

    pub fn remove_upscaling_model(&mut self, name: &str) {
        remove(&mut self.upscaling, name);
    }
}
