//! Edge detection.
//!
//! Sobel gradients on the luma channel, thinned by non-maximum
//! suppression, then hysteresis: pixels above `high` are edges, pixels
//! above `low` are edges only if connected to one.

use crate::types::Frame;
use image::{imageops, GrayImage, Rgb};

const EDGE: Rgb<u8> = Rgb([255, 255, 255]);

/// Detect edges, returning white edges on black.
///
/// Thresholds apply to the L1 gradient magnitude (`|gx| + |gy|`). If
/// `low > high` they are swapped.
pub fn edges(frame: &Frame, low: u32, high: u32) -> Frame {
    let (width, height) = frame.dimensions();
    let mut out = Frame::new(width, height);
    if width < 3 || height < 3 {
        return out;
    }

    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    let luma = imageops::grayscale(frame);
    let (magnitude, direction) = gradients(&luma);
    let thin = suppress_non_maxima(width, height, &magnitude, &direction);

    let idx = |x: u32, y: u32| (y * width + x) as usize;
    let mut stack: Vec<(u32, u32)> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if thin[idx(x, y)] > high {
                out.put_pixel(x, y, EDGE);
                stack.push((x, y));
            }
        }
    }

    // Grow strong edges through connected weak pixels
    while let Some((x, y)) = stack.pop() {
        for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                if thin[idx(nx, ny)] > low && out.get_pixel(nx, ny) != &EDGE {
                    out.put_pixel(nx, ny, EDGE);
                    stack.push((nx, ny));
                }
            }
        }
    }

    out
}

/// Gradient direction quantized to the neighbour pair it points between.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Horizontal,
    Vertical,
    /// Down-right / up-left.
    Diagonal,
    /// Up-right / down-left.
    AntiDiagonal,
}

impl Direction {
    fn quantize(gx: i32, gy: i32) -> Self {
        let (ax, ay) = (gx.abs(), gy.abs());
        // tan(22.5°) ≈ 0.4
        if ay * 5 <= ax * 2 {
            Direction::Horizontal
        } else if ax * 5 <= ay * 2 {
            Direction::Vertical
        } else if (gx > 0) == (gy > 0) {
            Direction::Diagonal
        } else {
            Direction::AntiDiagonal
        }
    }

    fn offsets(self) -> [(i32, i32); 2] {
        match self {
            Direction::Horizontal => [(-1, 0), (1, 0)],
            Direction::Vertical => [(0, -1), (0, 1)],
            Direction::Diagonal => [(-1, -1), (1, 1)],
            Direction::AntiDiagonal => [(1, -1), (-1, 1)],
        }
    }
}

fn gradients(luma: &GrayImage) -> (Vec<u32>, Vec<Direction>) {
    let (width, height) = luma.dimensions();
    let len = (width * height) as usize;
    let mut magnitude = vec![0u32; len];
    let mut direction = vec![Direction::Horizontal; len];

    let at = |x: u32, y: u32| luma.get_pixel(x, y)[0] as i32;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let (tl, t, tr) = (at(x - 1, y - 1), at(x, y - 1), at(x + 1, y - 1));
            let (l, r) = (at(x - 1, y), at(x + 1, y));
            let (bl, b, br) = (at(x - 1, y + 1), at(x, y + 1), at(x + 1, y + 1));

            let gx = (tr + 2 * r + br) - (tl + 2 * l + bl);
            let gy = (bl + 2 * b + br) - (tl + 2 * t + tr);

            let i = (y * width + x) as usize;
            magnitude[i] = (gx.abs() + gy.abs()) as u32;
            direction[i] = Direction::quantize(gx, gy);
        }
    }

    (magnitude, direction)
}

fn suppress_non_maxima(
    width: u32,
    height: u32,
    magnitude: &[u32],
    direction: &[Direction],
) -> Vec<u32> {
    let mut thin = vec![0u32; magnitude.len()];

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let i = (y * width + x) as usize;
            let m = magnitude[i];
            if m == 0 {
                continue;
            }

            let [a, b] = direction[i].offsets();
            let neighbour = |(dx, dy): (i32, i32)| {
                let nx = (x as i32 + dx) as u32;
                let ny = (y as i32 + dy) as u32;
                magnitude[(ny * width + nx) as usize]
            };

            // Strict on one side so flat ridges keep a single pixel
            if m > neighbour(a) && m >= neighbour(b) {
                thin[i] = m;
            }
        }
    }

    thin
}
