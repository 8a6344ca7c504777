//! Sprinkle layout: distributes decorative marks evenly across concentric
//! bands filling an annulus.
//!
//! The pipeline is split into small pure steps so each can be exercised on
//! its own:
//! 1. [`solve_bands`] decides how many bands fit and how wide the gaps are.
//! 2. [`band_radii`] places the band centre lines.
//! 3. [`marks_per_band`] shares a coverage-driven mark budget between bands.
//! 4. [`place_band`] walks each band from a random starting angle.
//!
//! [`layout_sprinkles`] runs all of them and assigns palette indices.

use crate::constants::{
    HALF_SPRINKLE_WIDTH, MAX_BANDS, MAX_SPRINKLES, SPRINKLE_COLORS, SPRINKLE_HEIGHT,
    SPRINKLE_WIDTH,
};
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Ring-shaped region between two radii, centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annulus {
    pub inner_radius: f32,
    pub outer_radius: f32,
}

impl Annulus {
    pub fn new(inner_radius: f32, outer_radius: f32) -> Self {
        Self {
            inner_radius,
            outer_radius,
        }
    }

    /// Clamp to a well-formed annulus: finite, non-negative radii with
    /// `outer >= inner`. An inverted annulus collapses to zero width.
    pub fn sanitized(self) -> Self {
        let inner = finite_or_zero(self.inner_radius).max(0.0);
        let outer = finite_or_zero(self.outer_radius).max(inner);
        Self::new(inner, outer)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.outer_radius - self.inner_radius
    }
}

/// How many bands fit in an annulus and the even gap left between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BandPlan {
    pub band_count: usize,
    pub gap_width: f32,
}

/// Mark budget for a set of bands.
///
/// `per_band` is floored per band, so its sum may fall short of
/// `total_marks` but never exceeds it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Allocation {
    pub total_marks: usize,
    pub per_band: SmallVec<[usize; 8]>,
}

impl Allocation {
    pub fn allocated(&self) -> usize {
        self.per_band.iter().sum()
    }
}

/// One concentric ring of marks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub radius: f32,
    pub mark_count: usize,
}

/// Position and orientation of one mark within its band.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Angle in radians, measured from +y towards +x.
    pub angle: f32,
    pub position: Vec2,
    /// Tangent to the band.
    pub rotation_degrees: f32,
}

/// A placed and coloured mark.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub band_index: usize,
    #[serde(flatten)]
    pub placement: Placement,
    /// Index into [`SPRINKLE_COLORS`].
    pub color_index: usize,
}

impl Mark {
    #[inline]
    pub fn color(&self) -> &'static str {
        SPRINKLE_COLORS[self.color_index % SPRINKLE_COLORS.len()]
    }
}

/// Angular range walked when placing a band's marks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AngularWalk {
    /// `[θ0, θ0 + 2π]`: emits `n + 1` marks, first and last coincide.
    /// Matches the established look of the donut.
    #[default]
    Inclusive,
    /// `[θ0, θ0 + 2π)`: emits exactly `n` marks.
    HalfOpen,
}

/// Full result of one layout pass. Recomputed from scratch on every render.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SprinkleLayout {
    pub plan: BandPlan,
    pub total_marks: usize,
    pub bands: Vec<Band>,
    pub marks: Vec<Mark>,
}

/// Centre-line radii for `band_count` bands starting at `inner_radius`.
///
/// The first band sits one gap plus half a footprint past the inner edge;
/// each following band advances by one footprint plus one gap.
pub fn band_radii(inner_radius: f32, band_count: usize, gap_width: f32) -> Vec<f32> {
    (0..band_count)
        .map(|i| {
            let i = i as f32;
            let inner_half_widths = (i + 1.0) * HALF_SPRINKLE_WIDTH;
            let outer_half_widths = i * HALF_SPRINKLE_WIDTH;
            let mid_band_gaps = i * gap_width;
            inner_radius + gap_width + inner_half_widths + outer_half_widths + mid_band_gaps
        })
        .collect()
}

/// Number of whole bands that fit and the leftover width split into
/// `band_count + 1` equal gaps. Too thin for one band yields an empty plan.
/// At most [`MAX_BANDS`] bands are planned; any extra width goes to the gaps.
pub fn solve_bands(annulus: Annulus) -> BandPlan {
    let annulus = annulus.sanitized();
    let width = annulus.width();
    let theoretical = width / SPRINKLE_WIDTH;
    if theoretical < 1.0 {
        return BandPlan::default();
    }
    let band_count = (theoretical.floor() as usize).min(MAX_BANDS);
    let unused = width - band_count as f32 * SPRINKLE_WIDTH;
    BandPlan {
        band_count,
        gap_width: (unused / (band_count + 1) as f32).max(0.0),
    }
}

/// Share a mark budget between bands in proportion to the circumference of
/// each band's inner footprint edge. The budget saturates at [`MAX_SPRINKLES`].
pub fn marks_per_band(radii: &[f32], coverage: f32) -> Allocation {
    let coverage = finite_or_zero(coverage).clamp(0.0, 1.0);
    let edge_circumferences: SmallVec<[f32; 8]> = radii
        .iter()
        .map(|r| (TAU * (r - HALF_SPRINKLE_WIDTH)).max(0.0))
        .collect();
    let total_circumference: f32 = edge_circumferences.iter().sum();
    if !(total_circumference > 0.0 && total_circumference.is_finite()) {
        return Allocation {
            total_marks: 0,
            per_band: radii.iter().map(|_| 0).collect(),
        };
    }

    let budget = (total_circumference / SPRINKLE_HEIGHT * coverage).round();
    let total_marks = budget.min(MAX_SPRINKLES as f32) as usize;
    let per_band: SmallVec<[usize; 8]> = edge_circumferences
        .iter()
        .map(|c| (total_marks as f32 * (c / total_circumference)).floor() as usize)
        .collect();
    debug_assert!(per_band.iter().sum::<usize>() <= total_marks);

    Allocation {
        total_marks,
        per_band,
    }
}

/// Walk one band from a random start angle in steps of `2π / mark_count`.
pub fn place_band<R: Rng + ?Sized>(band: Band, rng: &mut R, walk: AngularWalk) -> Vec<Placement> {
    if band.mark_count == 0 {
        return Vec::new();
    }
    let start: f32 = rng.gen_range(0.0..TAU);
    let step = TAU / band.mark_count as f32;
    let steps = match walk {
        AngularWalk::Inclusive => band.mark_count + 1,
        AngularWalk::HalfOpen => band.mark_count,
    };
    (0..steps)
        .map(|k| {
            let angle = start + k as f32 * step;
            Placement {
                angle,
                position: Vec2::new(band.radius * angle.sin(), band.radius * angle.cos()),
                rotation_degrees: angle.to_degrees() + 90.0,
            }
        })
        .collect()
}

/// Lay out sprinkles across `annulus` for the given coverage fraction.
pub fn layout_sprinkles<R: Rng + ?Sized>(
    annulus: Annulus,
    coverage: f32,
    rng: &mut R,
    walk: AngularWalk,
) -> SprinkleLayout {
    let annulus = annulus.sanitized();
    let plan = solve_bands(annulus);
    if plan.band_count == 0 {
        log::debug!(
            "[layout] annulus {:.2}..{:.2} too thin for a band",
            annulus.inner_radius,
            annulus.outer_radius
        );
        return SprinkleLayout {
            plan,
            ..SprinkleLayout::default()
        };
    }

    let radii = band_radii(annulus.inner_radius, plan.band_count, plan.gap_width);
    let allocation = marks_per_band(&radii, coverage);
    let bands: Vec<Band> = radii
        .iter()
        .zip(allocation.per_band.iter())
        .map(|(&radius, &mark_count)| Band { radius, mark_count })
        .collect();

    let marks: Vec<Mark> = bands
        .iter()
        .enumerate()
        .flat_map(|(band_index, band)| {
            place_band(*band, &mut *rng, walk)
                .into_iter()
                .map(move |placement| (band_index, placement))
        })
        .enumerate()
        .map(|(k, (band_index, placement))| Mark {
            band_index,
            placement,
            color_index: k % SPRINKLE_COLORS.len(),
        })
        .collect();

    log::debug!(
        "[layout] bands={} gap={:.3} budget={} allocated={} marks={}",
        plan.band_count,
        plan.gap_width,
        allocation.total_marks,
        allocation.allocated(),
        marks.len()
    );

    SprinkleLayout {
        plan,
        total_marks: allocation.total_marks,
        bands,
        marks,
    }
}

#[inline]
pub(crate) fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
