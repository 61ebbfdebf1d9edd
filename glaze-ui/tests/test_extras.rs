use glaze_common::{
    CorrectionModel, DiffusionModel, ExtraNetwork, ExtraSource, ExtrasFile, ExtrasPatch,
    UpscalingModel,
};

fn diffusion(name: &str, source: &str) -> DiffusionModel {
    DiffusionModel {
        name: name.into(),
        source: source.into(),
        format: "safetensors".into(),
        ..Default::default()
    }
}

#[test]
fn upsert_replaces_by_name_preserving_position() {
    let mut extras = ExtrasFile::default();
    extras.add_diffusion_model(diffusion("v1-5", "civitai://1"));
    extras.add_diffusion_model(diffusion("v2-1", "civitai://2"));

    extras.add_diffusion_model(diffusion("v1-5", "https://mirror/v1-5"));

    assert_eq!(extras.diffusion.len(), 2);
    assert_eq!(extras.diffusion[0].name, "v1-5");
    assert_eq!(extras.diffusion[0].source, "https://mirror/v1-5");
    assert_eq!(extras.diffusion[1].name, "v2-1");
}

#[test]
fn upsert_appends_unknown_names() {
    let mut extras = ExtrasFile::default();
    extras.add_diffusion_model(diffusion("v1-5", "civitai://1"));
    extras.add_diffusion_model(diffusion("v2-1", "civitai://2"));

    assert_eq!(extras.diffusion.len(), 2);
    assert_eq!(extras.diffusion[1].name, "v2-1");
}

#[test]
fn names_stay_unique_under_any_upsert_sequence() {
    let mut extras = ExtrasFile::default();
    for source in ["a", "b", "c", "d"] {
        extras.add_upscaling_model(UpscalingModel {
            name: "esrgan".into(),
            source: source.into(),
            scale: 4,
            ..Default::default()
        });
    }

    assert_eq!(extras.upscaling.len(), 1);
    assert_eq!(extras.upscaling[0].source, "d");
}

#[test]
fn remove_after_upsert_leaves_no_entry_with_the_name() {
    let mut extras = ExtrasFile::default();
    extras.add_correction_model(CorrectionModel {
        name: "gfpgan".into(),
        source: "https://gfpgan".into(),
        ..Default::default()
    });
    extras.add_correction_model(CorrectionModel {
        name: "gfpgan".into(),
        source: "https://gfpgan-v2".into(),
        ..Default::default()
    });

    extras.remove_correction_model("gfpgan");

    assert!(extras.correction.iter().all(|it| it.name != "gfpgan"));
    assert!(extras.correction.is_empty());
}

#[test]
fn each_list_is_independent() {
    let mut extras = ExtrasFile::default();
    extras.add_extra_network(ExtraNetwork {
        name: "shared-name".into(),
        source: "lora://1".into(),
        format: "lora".into(),
        ..Default::default()
    });
    extras.add_extra_source(ExtraSource {
        name: "shared-name".into(),
        source: "https://file".into(),
        dest: "models".into(),
        ..Default::default()
    });

    extras.remove_extra_network("shared-name");

    assert!(extras.networks.is_empty());
    assert_eq!(extras.sources.len(), 1);
}

#[test]
fn set_all_replaces_present_lists_wholesale() {
    let mut extras = ExtrasFile::default();
    extras.add_diffusion_model(diffusion("v1-5", "civitai://1"));
    extras.add_diffusion_model(diffusion("v2-1", "civitai://2"));
    extras.add_correction_model(CorrectionModel {
        name: "gfpgan".into(),
        source: "https://gfpgan".into(),
        ..Default::default()
    });

    extras.apply(ExtrasPatch {
        diffusion: Some(vec![diffusion("xl", "civitai://3")]),
        ..Default::default()
    });

    // the named list is replaced, not merged
    assert_eq!(extras.diffusion.len(), 1);
    assert_eq!(extras.diffusion[0].name, "xl");
    // absent lists keep their entries
    assert_eq!(extras.correction.len(), 1);
}
