//! Pixel transforms.
//!
//! Every function here is pure: it reads its input frame and returns a
//! newly allocated one. Adjustment sessions depend on this, since they
//! re-run a transform on the same base frame many times.

mod edges;
mod transforms;

pub use edges::edges;
pub use transforms::{
    apply_adjustment, apply_edit, blur, brightness, contrast, flip, grayscale, resize, rotate,
};
