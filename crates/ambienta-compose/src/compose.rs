//! Mosaic generation.
//!
//! One batch = `count` independent iterations. Each iteration permutes the
//! selected category keys, plans a near-square grid, resolves every tile
//! through the configured chain, composites onto a canvas and PNG-encodes
//! it. Iterations run to completion; partial batches are never returned.

use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::error::ComposeError;
use crate::layout::{self, MosaicPlan, TileSlot};
use crate::resolve::TileResolver;
use crate::shuffle::ShuffleSource;

/// Knobs for tile and canvas geometry.
#[derive(Debug, Clone, Copy)]
pub struct ComposeOptions {
    pub tile_width: u32,
    pub tile_height: u32,
    /// Spacing around and between tiles.
    pub gap: u32,
    pub background: Rgba<u8>,
    pub border: Rgba<u8>,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            tile_width: 320,
            tile_height: 240,
            gap: 12,
            background: Rgba([24, 24, 28, 255]),
            border: Rgba([223, 223, 228, 255]),
        }
    }
}

/// One finished mosaic. Ephemeral by design: callers decide whether the
/// bytes ever reach a file.
#[derive(Debug)]
pub struct Composition {
    /// 1-based position within the batch.
    pub iteration: u32,
    /// The drawn permutation, in tile order (row-major).
    pub keys: Vec<String>,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Drives shuffle, layout, resolution and drawing for mosaic batches.
pub struct Composer {
    resolver: Box<dyn TileResolver>,
    shuffle: Box<dyn ShuffleSource>,
    options: ComposeOptions,
}

impl Composer {
    pub fn new(resolver: Box<dyn TileResolver>, shuffle: Box<dyn ShuffleSource>) -> Self {
        Self {
            resolver,
            shuffle,
            options: ComposeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ComposeOptions) -> Self {
        self.options = options;
        self
    }

    /// Generate `count` mosaics from the selected category keys.
    ///
    /// An empty key list is rejected before any work happens. Duplicate
    /// permutations across iterations are acceptable; each draw is
    /// independent.
    pub fn generate(
        &mut self,
        keys: &[String],
        count: u32,
    ) -> Result<Vec<Composition>, ComposeError> {
        if keys.is_empty() {
            return Err(ComposeError::EmptySelection);
        }
        let mut batch = Vec::with_capacity(count as usize);
        for iteration in 1..=count {
            let mut order: Vec<String> = keys.to_vec();
            self.shuffle.shuffle(&mut order);
            let plan = layout::plan_mosaic(
                &order,
                self.options.tile_width,
                self.options.tile_height,
                self.options.gap,
            );
            let canvas = self.render(&plan);
            let png = encode_png(&canvas)?;
            tracing::debug!(
                iteration,
                tiles = plan.slots.len(),
                width = plan.width,
                height = plan.height,
                "mosaic rendered"
            );
            batch.push(Composition {
                iteration,
                keys: order,
                width: plan.width,
                height: plan.height,
                png,
            });
        }
        Ok(batch)
    }

    fn render(&self, plan: &MosaicPlan) -> RgbaImage {
        let mut canvas: RgbaImage =
            ImageBuffer::from_pixel(plan.width, plan.height, self.options.background);
        for slot in &plan.slots {
            match self.resolver.resolve(&slot.key) {
                Ok(tile) => self.draw_tile(&mut canvas, &tile, slot),
                Err(err) => {
                    // One bad tile costs one slot, never the mosaic.
                    tracing::warn!(key = %slot.key, "tile unresolved, slot left empty: {err}");
                }
            }
            draw_hollow_rect_mut(
                &mut canvas,
                Rect::at(slot.x as i32, slot.y as i32)
                    .of_size(self.options.tile_width, self.options.tile_height),
                self.options.border,
            );
        }
        canvas
    }

    fn draw_tile(&self, canvas: &mut RgbaImage, tile: &RgbaImage, slot: &TileSlot) {
        let fitted = layout::fit_rect(
            tile.width(),
            tile.height(),
            self.options.tile_width,
            self.options.tile_height,
        );
        let scaled = image::imageops::resize(
            tile,
            fitted.width,
            fitted.height,
            image::imageops::FilterType::Lanczos3,
        );
        overlay(canvas, &scaled, slot.x + fitted.dx, slot.y + fitted.dy);
    }
}

/// Alpha-blend `src` onto `dest` with its top-left corner at (`left`, `top`).
fn overlay(dest: &mut RgbaImage, src: &RgbaImage, left: u32, top: u32) {
    let (width, height) = (dest.width(), dest.height());
    for (x, y, pixel) in src.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        let dest_x = left + x;
        let dest_y = top + y;
        if dest_x < width && dest_y < height {
            let dest_pixel = dest.get_pixel_mut(dest_x, dest_y);
            let alpha = f32::from(pixel[3]) / 255.0;
            let inv_alpha = 1.0 - alpha;
            dest_pixel[0] =
                (f32::from(pixel[0]) * alpha + f32::from(dest_pixel[0]) * inv_alpha) as u8;
            dest_pixel[1] =
                (f32::from(pixel[1]) * alpha + f32::from(dest_pixel[1]) * inv_alpha) as u8;
            dest_pixel[2] =
                (f32::from(pixel[2]) * alpha + f32::from(dest_pixel[2]) * inv_alpha) as u8;
            dest_pixel[3] = 255;
        }
    }
}

fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ComposeError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::resolve::PlaceholderResolver;
    use crate::shuffle::SeededShuffle;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn keys(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("room{i}")).collect()
    }

    fn small_options() -> ComposeOptions {
        ComposeOptions {
            tile_width: 64,
            tile_height: 48,
            gap: 4,
            ..ComposeOptions::default()
        }
    }

    fn seeded_composer(seed: u64) -> Composer {
        Composer::new(
            Box::new(PlaceholderResolver::new(64, 48)),
            Box::new(SeededShuffle::new(seed)),
        )
        .with_options(small_options())
    }

    #[test]
    fn empty_selection_is_rejected_before_any_work() {
        let mut composer = seeded_composer(1);
        let err = composer.generate(&[], 3).unwrap_err();
        assert!(matches!(err, ComposeError::EmptySelection));
    }

    #[test]
    fn batch_has_count_mosaics_with_planned_geometry() {
        let mut composer = seeded_composer(9);
        let batch = composer.generate(&keys(6), 3).unwrap();
        assert_eq!(batch.len(), 3);

        // Six tiles lay out 3x2.
        for composition in &batch {
            assert_eq!(composition.width, 4 + 3 * (64 + 4));
            assert_eq!(composition.height, 4 + 2 * (48 + 4));
            assert_eq!(&composition.png[..8], &PNG_MAGIC);
        }
        assert_eq!(batch[0].iteration, 1);
        assert_eq!(batch[2].iteration, 3);
    }

    #[test]
    fn encoded_png_decodes_back_to_canvas_size() {
        let mut composer = seeded_composer(4);
        let batch = composer.generate(&keys(5), 1).unwrap();
        let decoded = image::load_from_memory(&batch[0].png).unwrap();
        assert_eq!(decoded.width(), batch[0].width);
        assert_eq!(decoded.height(), batch[0].height);
    }

    #[test]
    fn same_seed_reproduces_the_batch() {
        let batch_a = seeded_composer(77).generate(&keys(7), 4).unwrap();
        let batch_b = seeded_composer(77).generate(&keys(7), 4).unwrap();
        for (a, b) in batch_a.iter().zip(&batch_b) {
            assert_eq!(a.keys, b.keys);
            assert_eq!(a.png, b.png);
        }
    }

    #[test]
    fn each_mosaic_is_a_permutation_of_the_input() {
        let input = keys(8);
        let mut composer = seeded_composer(3);
        let batch = composer.generate(&input, 5).unwrap();
        let mut expected = input.clone();
        expected.sort();
        for composition in batch {
            let mut drawn = composition.keys.clone();
            drawn.sort();
            assert_eq!(drawn, expected);
        }
    }

    /// Resolver that fails for one key and delegates the rest.
    struct FlakyResolver {
        bad_key: String,
        inner: PlaceholderResolver,
    }

    impl TileResolver for FlakyResolver {
        fn resolve(&self, key: &str) -> Result<RgbaImage, ResolveError> {
            if key == self.bad_key {
                return Err(ResolveError::NotFound {
                    key: key.to_string(),
                });
            }
            self.inner.resolve(key)
        }
    }

    #[test]
    fn one_unresolvable_tile_does_not_abort_the_mosaic() {
        let resolver = FlakyResolver {
            bad_key: "room1".to_string(),
            inner: PlaceholderResolver::new(64, 48),
        };
        let mut composer = Composer::new(Box::new(resolver), Box::new(SeededShuffle::new(2)))
            .with_options(small_options());

        let batch = composer.generate(&keys(4), 2).unwrap();
        assert_eq!(batch.len(), 2, "all iterations complete");
        assert!(batch[0].keys.contains(&"room1".to_string()));
    }
}
