// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint a `Figure` into a Vello scene

use super::figure::Figure;
use kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color};
use peniko::{Fill, Mix};

/// Clear the canvas to a solid color
pub fn paint_background(scene: &mut Scene, canvas_size: Size, color: Color) {
    fill_color(scene, &canvas_size.to_rect(), color);
}

/// Paint both mirrored halves of the figure.
///
/// Each half carries its own transform, and the clip layer is popped
/// before the triangle, so nothing leaks from one half into the other.
pub fn paint_figure(scene: &mut Scene, figure: &Figure) {
    let brush = Brush::Solid(figure.color);

    for transform in figure.mirrors {
        scene.stroke(&figure.stroke, transform, &brush, None, &figure.base_line);
        scene.stroke(&figure.stroke, transform, &brush, None, &figure.rising_line);

        scene.push_layer(Mix::Clip, 1.0, transform, &figure.clip);
        scene.fill(Fill::NonZero, transform, &brush, None, &figure.rect);
        scene.pop_layer();

        scene.fill(Fill::NonZero, transform, &brush, None, &figure.triangle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    const SIZE: Size = Size::new(900.0, 600.0);

    #[test]
    fn test_background_only_scene_has_no_clips() {
        let mut scene = Scene::new();
        paint_background(&mut scene, SIZE, theme::canvas::BACKGROUND);
        let encoding = scene.encoding();
        assert!(!encoding.is_empty());
        assert_eq!(encoding.n_paths, 1);
        assert_eq!(encoding.n_open_clips, 0);
    }

    #[test]
    fn test_peak_figure_paints_both_halves() {
        let mut scene = Scene::new();
        paint_figure(&mut scene, &Figure::new(0, 0.5, SIZE));
        let encoding = scene.encoding();
        assert!(!encoding.is_empty());
        // Per half: two strokes, the clip, the rect and the triangle
        assert!(encoding.n_paths >= 2 * 4);
    }

    #[test]
    fn test_clip_layers_are_balanced() {
        for scale in [0.0, 0.25, 0.5, 1.0] {
            let mut scene = Scene::new();
            paint_figure(&mut scene, &Figure::new(2, scale, SIZE));
            assert_eq!(scene.encoding().n_open_clips, 0);
        }
    }

    #[test]
    fn test_halves_use_mirrored_transforms() {
        let figure = Figure::new(0, 0.5, SIZE);
        let mut one_half = figure.clone();
        one_half.mirrors = [figure.mirrors[0]; 2];

        let mut mirrored = Scene::new();
        paint_figure(&mut mirrored, &figure);
        let mut doubled = Scene::new();
        paint_figure(&mut doubled, &one_half);

        assert_ne!(
            mirrored.encoding().transforms,
            doubled.encoding().transforms
        );
    }
}
