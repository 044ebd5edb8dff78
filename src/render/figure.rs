// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry of the clipped-rect / path-line figure.
//!
//! The figure is four staggered parts drawn on the left half of the
//! viewport and mirrored onto the right half:
//!
//! 1. A horizontal line along the center, growing from the left edge
//! 2. A line rising from the quarter mark towards the top center
//! 3. A rectangle filling the top-left quarter, clipped to the
//!    quadrilateral under that rising line
//! 4. A filled triangle growing down from the top center
//!
//! Geometry is in half-local coordinates with the origin at the viewport
//! center; each entry in `mirrors` maps it onto the canvas.

use kurbo::{Affine, BezPath, Cap, Line, Point, Rect, Size, Stroke};
use masonry::vello::peniko::Color;

use crate::animation::scale::{divide_scale, sinify};
use crate::settings;
use crate::theme;

/// Everything needed to paint one node at one scale
#[derive(Debug, Clone)]
pub struct Figure {
    pub color: Color,
    pub stroke: Stroke,
    /// Center-to-left-edge line (part 1)
    pub base_line: Line,
    /// Quarter-mark rising line (part 2)
    pub rising_line: Line,
    /// Clip region for the rectangle
    pub clip: BezPath,
    /// Growing rectangle (part 3), drawn inside `clip`
    pub rect: Rect,
    /// Filled triangle (part 4)
    pub triangle: BezPath,
    /// Left half, then right half (mirrored about the vertical center)
    pub mirrors: [Affine; 2],
}

impl Figure {
    /// Build the figure for palette node `index` at progress `scale`.
    pub fn new(index: usize, scale: f64, size: Size) -> Self {
        let (w, h) = (size.width, size.height);
        let parts = settings::figure::PARTS;
        let sf = sinify(scale);
        let sf1 = divide_scale(sf, 0, parts);
        let sf2 = divide_scale(sf, 1, parts);
        let sf3 = divide_scale(sf, 2, parts);
        let sf4 = divide_scale(sf, 3, parts);

        let base_line = Line::new((-w / 2.0, 0.0), (-w / 2.0 + w * 0.25 * sf1, 0.0));
        let rising_line = Line::new(
            (-w / 4.0, 0.0),
            (-w / 4.0 + (w / 4.0) * sf2, -(h / 2.0) * sf2),
        );

        let clip = polygon(&[
            Point::new(-w / 2.0, 0.0),
            Point::new(-w / 4.0, 0.0),
            Point::new(0.0, -h / 2.0),
            Point::new(-w / 2.0, -h / 2.0),
        ]);
        let rect = Rect::new(-w / 2.0, -h / 2.0, -w / 2.0 + (w * 0.5) * sf3, 0.0);

        let triangle = polygon(&[
            Point::new(0.0, -h / 2.0),
            Point::new((-w / 4.0) * sf4, -h / 2.0 + (h / 2.0) * sf4),
            Point::new(0.0, -h / 2.0 + (h / 2.0) * sf4),
        ]);

        let center = Affine::translate((w / 2.0, h / 2.0));
        let mirrors = [0.0, 1.0].map(|j| center * Affine::scale_non_uniform(1.0 - 2.0 * j, 1.0));

        let stroke_width = w.min(h) / settings::figure::STROKE_FACTOR;

        Self {
            color: theme::palette::COLORS[index],
            stroke: Stroke::new(stroke_width).with_caps(Cap::Round),
            base_line,
            rising_line,
            clip,
            rect,
            triangle,
            mirrors,
        }
    }
}

fn polygon(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for pt in rest {
            path.line_to(*pt);
        }
        path.close_path();
    }
    path
}
