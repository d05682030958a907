//! Edit and adjustment application.

use super::edges::edges;
use crate::types::{Adjustment, Edit, FlipAxis, Frame, Rotation};
use image::imageops::{self, FilterType};
use image::DynamicImage;

/// Apply a one-shot edit to a frame.
pub fn apply_edit(frame: &Frame, edit: &Edit) -> Frame {
    match *edit {
        Edit::Grayscale => grayscale(frame),

        Edit::EdgeDetect { low, high } => edges(frame, low, high),

        Edit::Rotate(rotation) => rotate(frame, rotation),

        Edit::Flip(axis) => flip(frame, axis),

        Edit::Resize { percent } => resize(frame, percent),
    }
}

/// Apply a continuous adjustment at its current value to a frame.
pub fn apply_adjustment(frame: &Frame, adjustment: &Adjustment) -> Frame {
    match *adjustment {
        Adjustment::Blur(intensity) => blur(frame, intensity),
        Adjustment::Brightness(offset) => brightness(frame, offset),
        Adjustment::Contrast(level) => contrast(frame, level),
    }
}

/// Desaturate, keeping three channels.
pub fn grayscale(frame: &Frame) -> Frame {
    let luma = imageops::grayscale(frame);
    DynamicImage::ImageLuma8(luma).to_rgb8()
}

/// Gaussian blur.
///
/// `intensity` is the kernel size (forced odd, at most 50); 0 returns an
/// unchanged copy. Sigma follows the usual derivation from kernel size.
pub fn blur(frame: &Frame, intensity: u32) -> Frame {
    let intensity = intensity.min(Adjustment::BLUR_MAX);
    if intensity == 0 {
        return frame.clone();
    }

    let kernel = if intensity % 2 == 0 {
        intensity + 1
    } else {
        intensity
    };
    let sigma = 0.3 * ((kernel as f32 - 1.0) * 0.5 - 1.0) + 0.8;

    imageops::blur(frame, sigma)
}

/// Add a saturating offset in -100..=100 to every sample.
pub fn brightness(frame: &Frame, offset: i32) -> Frame {
    let offset = offset.clamp(-Adjustment::BRIGHTNESS_RANGE, Adjustment::BRIGHTNESS_RANGE);
    imageops::brighten(frame, offset)
}

/// Scale every sample by `level / 100`, saturating. 100 is neutral.
pub fn contrast(frame: &Frame, level: u32) -> Frame {
    let alpha = level.min(Adjustment::CONTRAST_MAX) as f32 / 100.0;

    let mut out = frame.clone();
    for sample in out.iter_mut() {
        *sample = (*sample as f32 * alpha).round().min(255.0) as u8;
    }
    out
}

pub fn rotate(frame: &Frame, rotation: Rotation) -> Frame {
    match rotation {
        Rotation::Cw90 => imageops::rotate90(frame),
        Rotation::Half => imageops::rotate180(frame),
        Rotation::Ccw90 => imageops::rotate270(frame),
    }
}

pub fn flip(frame: &Frame, axis: FlipAxis) -> Frame {
    match axis {
        FlipAxis::Horizontal => imageops::flip_horizontal(frame),
        FlipAxis::Vertical => imageops::flip_vertical(frame),
    }
}

/// Scale both sides by `percent` (clamped to 10..=200), never below 1px.
pub fn resize(frame: &Frame, percent: u32) -> Frame {
    let percent = percent.clamp(Edit::RESIZE_MIN, Edit::RESIZE_MAX) as u64;

    let scale = |side: u32| ((side as u64 * percent / 100) as u32).max(1);
    let (width, height) = (scale(frame.width()), scale(frame.height()));

    imageops::resize(frame, width, height, FilterType::Triangle)
}
