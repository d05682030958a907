//! Core types for the editor.

use crate::error::EditorError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// An owned 8-bit RGB pixel buffer.
pub type Frame = image::RgbImage;

/// Content fingerprint of a frame (SHA-256 over dimensions and samples).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    /// Compute the fingerprint of a frame.
    pub fn of(frame: &Frame) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(frame.width().to_le_bytes());
        hasher.update(frame.height().to_le_bytes());
        hasher.update(frame.as_raw());
        Fingerprint(hasher.finalize().into())
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Fingerprint(arr))
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({}...)", &self.to_hex()[..8])
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// One stored point in edit history.
///
/// A snapshot owns its frame outright. It is only ever created from a frame
/// moved into the history store or from a fresh copy, and it exposes the
/// pixels read-only, so a stored frame cannot change underneath the stack.
#[derive(Clone, PartialEq)]
pub struct Snapshot {
    frame: Frame,
}

impl Snapshot {
    pub(crate) fn new(frame: Frame) -> Self {
        Self { frame }
    }

    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    /// Read-only view of the stored pixels.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Take the pixels out, consuming the snapshot.
    pub fn into_frame(self) -> Frame {
        self.frame
    }

    /// Number of sample bytes held.
    pub fn byte_len(&self) -> usize {
        self.frame.as_raw().len()
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&self.frame)
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Snapshot({}x{})", self.width(), self.height())
    }
}

/// A continuous control whose drag collapses into one history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Control {
    Blur,
    Brightness,
    Contrast,
}

impl Control {
    pub fn as_str(&self) -> &'static str {
        match self {
            Control::Blur => "blur",
            Control::Brightness => "brightness",
            Control::Contrast => "contrast",
        }
    }

    /// The control's resting value (no visible change).
    pub fn neutral(&self) -> Adjustment {
        match self {
            Control::Blur => Adjustment::Blur(0),
            Control::Brightness => Adjustment::Brightness(0),
            Control::Contrast => Adjustment::Contrast(Adjustment::CONTRAST_NEUTRAL),
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Control {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blur" => Ok(Control::Blur),
            "brightness" => Ok(Control::Brightness),
            "contrast" => Ok(Control::Contrast),
            other => Err(EditorError::UnknownControl(other.to_string())),
        }
    }
}

/// A continuous control together with its live value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "control", content = "value")]
pub enum Adjustment {
    /// Blur intensity, 0..=50.
    Blur(u32),
    /// Brightness offset, -100..=100.
    Brightness(i32),
    /// Contrast level, 0..=200 (100 leaves the image unchanged).
    Contrast(u32),
}

impl Adjustment {
    pub const BLUR_MAX: u32 = 50;
    pub const BRIGHTNESS_RANGE: i32 = 100;
    pub const CONTRAST_MAX: u32 = 200;
    pub const CONTRAST_NEUTRAL: u32 = 100;

    pub fn control(&self) -> Control {
        match self {
            Adjustment::Blur(_) => Control::Blur,
            Adjustment::Brightness(_) => Control::Brightness,
            Adjustment::Contrast(_) => Control::Contrast,
        }
    }

    /// Human-readable action label, e.g. `Blur (12)`.
    pub fn label(&self) -> String {
        match self {
            Adjustment::Blur(v) => format!("Blur ({})", v),
            Adjustment::Brightness(v) => format!("Brightness ({})", v),
            Adjustment::Contrast(v) => format!("Contrast ({})", v),
        }
    }
}

/// Quarter-turn rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    /// 90 degrees clockwise.
    Cw90,
    /// 180 degrees.
    Half,
    /// 90 degrees counter-clockwise (270 clockwise).
    Ccw90,
}

impl Rotation {
    pub fn degrees(&self) -> u32 {
        match self {
            Rotation::Cw90 => 90,
            Rotation::Half => 180,
            Rotation::Ccw90 => 270,
        }
    }
}

impl TryFrom<u32> for Rotation {
    type Error = EditorError;

    fn try_from(degrees: u32) -> Result<Self, Self::Error> {
        match degrees {
            90 => Ok(Rotation::Cw90),
            180 => Ok(Rotation::Half),
            270 => Ok(Rotation::Ccw90),
            other => Err(EditorError::InvalidRotation(other)),
        }
    }
}

/// Mirror axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipAxis {
    /// Mirror left to right.
    Horizontal,
    /// Flip top to bottom.
    Vertical,
}

impl fmt::Display for FlipAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipAxis::Horizontal => f.write_str("horizontal"),
            FlipAxis::Vertical => f.write_str("vertical"),
        }
    }
}

impl FromStr for FlipAxis {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(FlipAxis::Horizontal),
            "vertical" => Ok(FlipAxis::Vertical),
            other => Err(EditorError::InvalidFlipAxis(other.to_string())),
        }
    }
}

/// A discrete, one-shot edit. Each application is one history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edit {
    Grayscale,
    /// Edge detection with hysteresis thresholds on the gradient magnitude.
    EdgeDetect { low: u32, high: u32 },
    Rotate(Rotation),
    Flip(FlipAxis),
    /// Scale both sides by a percentage, clamped to 10..=200.
    Resize { percent: u32 },
}

impl Edit {
    pub const EDGE_LOW_DEFAULT: u32 = 80;
    pub const EDGE_HIGH_DEFAULT: u32 = 160;
    pub const RESIZE_MIN: u32 = 10;
    pub const RESIZE_MAX: u32 = 200;

    /// Edge detection with the default thresholds.
    pub fn edge_detect() -> Self {
        Edit::EdgeDetect {
            low: Self::EDGE_LOW_DEFAULT,
            high: Self::EDGE_HIGH_DEFAULT,
        }
    }

    /// Human-readable action label.
    pub fn label(&self) -> String {
        match self {
            Edit::Grayscale => "Grayscale applied".to_string(),
            Edit::EdgeDetect { .. } => "Edge detection applied".to_string(),
            Edit::Rotate(r) => format!("Rotated {}°", r.degrees()),
            Edit::Flip(axis) => format!("Flipped {}", axis),
            Edit::Resize { percent } => format!(
                "Resized to {}%",
                (*percent).clamp(Self::RESIZE_MIN, Self::RESIZE_MAX)
            ),
        }
    }
}

/// What a status bar shows about the open document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub filename: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ImageInfo {
    fn default() -> Self {
        Self {
            filename: "No file loaded".to_string(),
            width: 0,
            height: 0,
        }
    }
}

/// History statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub capacity: usize,
    /// Total sample bytes held across both stacks.
    pub bytes: usize,
}
