use std::ops::Deref;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use super::error::{QRError, QRResult};
use crate::builder::QR;

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub const COUNT: u8 = 8;

    pub fn new(pattern: u8) -> Self {
        debug_assert!(pattern < Self::COUNT, "Invalid masking pattern");
        Self(pattern)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self)
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = QRError;
    fn try_from(pattern: u8) -> QRResult<Self> {
        if pattern >= Self::COUNT {
            return Err(QRError::InvalidMaskingPattern(pattern));
        }
        Ok(Self(pattern))
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        let rc = r as i32 * c as i32;
        (rc & 1) + (rc % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        let rc = r as i32 * c as i32;
        ((rc & 1) + (rc % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        let rc = r as i32 * c as i32;
        ((((r + c) & 1) as i32) + (rc % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_functions(self) -> fn(i16, i16) -> bool {
        debug_assert!(*self < Self::COUNT, "Invalid pattern");

        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!(),
        }
    }
}

// Mask selection
//------------------------------------------------------------------------------

/// Scores every mask on its own copy of the unmasked symbol.
pub fn evaluate_masks(qr: &QR) -> [u32; 8] {
    debug_assert!(qr.mask().is_none(), "Masks must be evaluated on an unmasked symbol");

    let mut scores = [0; 8];

    #[cfg(feature = "parallel")]
    let iter = scores.par_iter_mut();
    #[cfg(not(feature = "parallel"))]
    let iter = scores.iter_mut();

    iter.enumerate().for_each(|(m, score)| {
        let mut masked = qr.clone();
        masked.apply_mask(MaskPattern(m as u8));
        *score = compute_total_penalty(&masked);
    });

    trace!(?scores, "Mask penalties");
    scores
}

/// Applies the mask with the lowest penalty, ties going to the lowest id.
pub fn apply_best_mask(qr: &mut QR) -> MaskPattern {
    let scores = evaluate_masks(qr);
    let best = scores.iter().enumerate().min_by_key(|&(m, s)| (*s, m)).map_or(0, |(m, _)| m);
    let best_mask = MaskPattern(best as u8);
    qr.apply_mask(best_mask);
    best_mask
}

// Penalty
//------------------------------------------------------------------------------

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let blk_pen = compute_block_penalty(qr);
    let run_pen = compute_run_penalty(qr);
    let bal_pen = compute_balance_penalty(qr);
    blk_pen + run_pen + bal_pen
}

pub fn compute_block_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = *qr.get(r, c);
            if clr == *qr.get(r + 1, c) && clr == *qr.get(r, c + 1) && clr == *qr.get(r + 1, c + 1)
            {
                pen += N2;
            }
        }
    }
    pen
}

/// Long runs and finder-like 1:1:3:1:1 patterns across every row and column.
pub fn compute_run_penalty(qr: &QR) -> u32 {
    let w = qr.width() as i16;
    let mut runs = Vec::with_capacity(w as usize + 1);
    let mut pen = 0;
    for i in 0..w {
        pen += compute_line_penalty((0..w).map(|c| qr.is_dark(i, c)), &mut runs);
        pen += compute_line_penalty((0..w).map(|r| qr.is_dark(r, i)), &mut runs);
    }
    pen
}

// Run lengths alternate light and dark starting with a light run, which is
// empty when the line starts dark. Dark runs sit at odd indices.
fn compute_line_penalty(line: impl Iterator<Item = bool>, runs: &mut Vec<u32>) -> u32 {
    runs.clear();
    runs.push(0);
    let mut last = false;
    for dark in line {
        match runs.last_mut() {
            Some(run) if dark == last => *run += 1,
            _ => {
                runs.push(1);
                last = dark;
            }
        }
    }

    let mut pen: u32 = runs.iter().filter(|&&run| run >= 5).map(|run| N1 + run - 5).sum();

    let h = runs.len() - 1;
    let mut i = 3;
    while i + 1 < h {
        let core = runs[i];
        let unit = runs[i - 1];
        if runs[i - 2] == unit
            && runs[i + 1] == unit
            && runs[i + 2] == unit
            && unit * 3 == core
            && (runs[i - 3] == 0
                || i + 3 > h
                || runs[i - 3] * 3 >= core * 4
                || runs[i + 3] * 3 >= core * 4)
        {
            pen += N3;
        }
        i += 2;
    }
    pen
}

pub fn compute_balance_penalty(qr: &QR) -> u32 {
    let dark_cnt = qr.count_dark_modules() as u32;
    let w = qr.width() as u32;
    let tot = w * w;
    let diff = (dark_cnt * 2).abs_diff(tot) * 10;
    if diff == 0 {
        return 0;
    }
    (diff - 1) / tot * N4
}


// Global constants
//------------------------------------------------------------------------------

static N1: u32 = 3;
static N2: u32 = 3;
static N3: u32 = 40;
static N4: u32 = 10;
