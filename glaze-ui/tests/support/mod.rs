//! Shared fixtures for the store tests

#![allow(dead_code)]

use glaze_common::{
    ImageOutput, ImageResponse, ImageSize, NumberRange, RetryParams, SelectParam, ServerParams,
    TextParam, Txt2ImgParams,
};

/// A server snapshot with distinctive defaults, so derivation bugs show up.
pub fn server_fixture() -> ServerParams {
    ServerParams {
        batch: NumberRange {
            default: 1,
            min: 1,
            max: 5,
            step: 1,
        },
        cfg: NumberRange {
            default: 6.0,
            min: 1.0,
            max: 30.0,
            step: 0.1,
        },
        eta: NumberRange {
            default: 0.0,
            min: 0.0,
            max: 1.0,
            step: 0.01,
        },
        prompt: TextParam {
            default: "an astronaut eating a hamburger".into(),
        },
        scheduler: SelectParam {
            default: "euler-a".into(),
            keys: vec!["euler-a".into(), "ddim".into(), "dpm-multi".into()],
        },
        seed: NumberRange {
            default: -1,
            min: -1,
            max: i64::MAX,
            step: 1,
        },
        steps: NumberRange {
            default: 25,
            min: 1,
            max: 200,
            step: 1,
        },
        tiles: NumberRange {
            default: 512,
            min: 128,
            max: 1024,
            step: 128,
        },
        overlap: NumberRange {
            default: 0.25,
            min: 0.0,
            max: 0.9,
            step: 0.01,
        },
        stride: NumberRange {
            default: 128,
            min: 64,
            max: 512,
            step: 64,
        },
        width: NumberRange {
            default: 512,
            min: 128,
            max: 1024,
            step: 8,
        },
        height: NumberRange {
            default: 512,
            min: 128,
            max: 1024,
            step: 8,
        },
        loopback: NumberRange {
            default: 0,
            min: 0,
            max: 10,
            step: 1,
        },
        strength: NumberRange {
            default: 0.5,
            min: 0.0,
            max: 1.0,
            step: 0.01,
        },
        fill_color: TextParam {
            default: "#000000".into(),
        },
        filter: SelectParam {
            default: "none".into(),
            keys: vec!["none".into(), "gaussian".into()],
        },
        noise: SelectParam {
            default: "histogram".into(),
            keys: vec!["histogram".into(), "uniform".into()],
        },
        tile_order: SelectParam {
            default: "grid".into(),
            keys: vec!["grid".into(), "spiral".into()],
        },
        left: NumberRange {
            default: 0,
            min: 0,
            max: 512,
            step: 8,
        },
        right: NumberRange {
            default: 0,
            min: 0,
            max: 512,
            step: 8,
        },
        top: NumberRange {
            default: 0,
            min: 0,
            max: 512,
            step: 8,
        },
        bottom: NumberRange {
            default: 0,
            min: 0,
            max: 512,
            step: 8,
        },
        denoise: NumberRange {
            default: 0.5,
            min: 0.0,
            max: 1.0,
            step: 0.01,
        },
        face_outscale: NumberRange {
            default: 1,
            min: 1,
            max: 4,
            step: 1,
        },
        face_strength: NumberRange {
            default: 0.5,
            min: 0.0,
            max: 1.0,
            step: 0.01,
        },
        outscale: NumberRange {
            default: 1,
            min: 1,
            max: 4,
            step: 1,
        },
        scale: NumberRange {
            default: 4,
            min: 1,
            max: 4,
            step: 1,
        },
        upscale_order: SelectParam {
            default: "correction-both".into(),
            keys: vec!["correction-both".into(), "correction-first".into()],
        },
        highres_iterations: NumberRange {
            default: 1,
            min: 1,
            max: 4,
            step: 1,
        },
        highres_steps: NumberRange {
            default: 150,
            min: 1,
            max: 200,
            step: 1,
        },
        highres_scale: NumberRange {
            default: 4,
            min: 1,
            max: 4,
            step: 1,
        },
        highres_strength: NumberRange {
            default: 0.5,
            min: 0.0,
            max: 1.0,
            step: 0.01,
        },
        correction: SelectParam {
            default: "correction-gfpgan".into(),
            keys: vec!["correction-gfpgan".into()],
        },
        model: SelectParam {
            default: "diffusion-v1-5".into(),
            keys: vec!["diffusion-v1-5".into(), "diffusion-v2-1".into()],
        },
        platform: SelectParam {
            default: "amd".into(),
            keys: vec!["amd".into(), "cpu".into(), "cuda".into()],
        },
        upscaling: SelectParam {
            default: "upscaling-real-esrgan".into(),
            keys: vec!["upscaling-real-esrgan".into()],
        },
        ..Default::default()
    }
}

/// A single-output response identified by `key`.
pub fn image(key: &str) -> ImageResponse {
    ImageResponse {
        outputs: vec![ImageOutput {
            key: key.to_string(),
            url: format!("/output/{key}.png"),
        }],
        size: ImageSize {
            width: 512,
            height: 512,
        },
    }
}

/// Retry parameters for a text-to-image run at server defaults.
pub fn retry(server: &ServerParams) -> RetryParams {
    RetryParams::Txt2Img(Txt2ImgParams::from_server(server))
}
