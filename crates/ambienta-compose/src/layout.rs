//! Pure mosaic geometry.
//!
//! Everything here is arithmetic over tile counts and pixel boxes; no image
//! data is touched. The drawing code consumes a [`MosaicPlan`] verbatim, so
//! layout behavior is testable without a rasterizer.

/// Grid dimensions for `tile_count` tiles: near-square, wider than tall.
///
/// `columns = ceil(sqrt(n))`, `rows = ceil(n / columns)`. Zero tiles give a
/// zero grid; callers reject empty input before planning.
pub fn grid_dims(tile_count: usize) -> (u32, u32) {
    if tile_count == 0 {
        return (0, 0);
    }
    let columns = (tile_count as f64).sqrt().ceil() as u32;
    let rows = (tile_count as u32).div_ceil(columns);
    (columns, rows)
}

/// A source image scaled to fit a box, preserving aspect ratio, centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FittedRect {
    pub width: u32,
    pub height: u32,
    /// Offset of the scaled image inside the box.
    pub dx: u32,
    pub dy: u32,
}

/// Scale-to-fit for a `src_w x src_h` image inside a `box_w x box_h` box.
/// Degenerate (zero-sized) sources fill the whole box.
pub fn fit_rect(src_w: u32, src_h: u32, box_w: u32, box_h: u32) -> FittedRect {
    if src_w == 0 || src_h == 0 {
        return FittedRect {
            width: box_w,
            height: box_h,
            dx: 0,
            dy: 0,
        };
    }
    let scale = (f64::from(box_w) / f64::from(src_w)).min(f64::from(box_h) / f64::from(src_h));
    let width = ((f64::from(src_w) * scale).round() as u32).clamp(1, box_w);
    let height = ((f64::from(src_h) * scale).round() as u32).clamp(1, box_h);
    FittedRect {
        width,
        height,
        dx: (box_w - width) / 2,
        dy: (box_h - height) / 2,
    }
}

/// One tile's place in the mosaic, in grid and pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSlot {
    pub key: String,
    pub col: u32,
    pub row: u32,
    /// Pixel origin of the tile box on the canvas.
    pub x: u32,
    pub y: u32,
}

/// Full geometry of one mosaic: grid shape, canvas size and every slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicPlan {
    pub columns: u32,
    pub rows: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub gap: u32,
    pub width: u32,
    pub height: u32,
    pub slots: Vec<TileSlot>,
}

/// Lay out `ordered_keys` row-major on a near-square grid with a uniform
/// gap around and between tiles. The order of `ordered_keys` is the order
/// tiles appear, left to right, top to bottom.
pub fn plan_mosaic(
    ordered_keys: &[String],
    tile_width: u32,
    tile_height: u32,
    gap: u32,
) -> MosaicPlan {
    let (columns, rows) = grid_dims(ordered_keys.len());
    let slots = ordered_keys
        .iter()
        .enumerate()
        .map(|(idx, key)| {
            let col = idx as u32 % columns;
            let row = idx as u32 / columns;
            TileSlot {
                key: key.clone(),
                col,
                row,
                x: gap + col * (tile_width + gap),
                y: gap + row * (tile_height + gap),
            }
        })
        .collect();
    MosaicPlan {
        columns,
        rows,
        tile_width,
        tile_height,
        gap,
        width: gap + columns * (tile_width + gap),
        height: gap + rows * (tile_height + gap),
        slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn keys(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("k{i}")).collect()
    }

    #[test]
    fn grid_dims_for_small_counts() {
        let expected = [
            (1, (1, 1)),
            (2, (2, 1)),
            (3, (2, 2)),
            (4, (2, 2)),
            (5, (3, 2)),
            (6, (3, 2)),
            (7, (3, 3)),
            (8, (3, 3)),
            (9, (3, 3)),
            (10, (4, 3)),
            (11, (4, 3)),
            (12, (4, 3)),
        ];
        for (n, dims) in expected {
            assert_eq!(grid_dims(n), dims, "n = {n}");
        }
        assert_eq!(grid_dims(0), (0, 0));
    }

    #[test]
    fn fit_rect_letterboxes_wide_sources() {
        // 200x100 into 100x100: full width, half height, centered vertically.
        let fitted = fit_rect(200, 100, 100, 100);
        assert_eq!(fitted, FittedRect { width: 100, height: 50, dx: 0, dy: 25 });
    }

    #[test]
    fn fit_rect_pillarboxes_tall_sources() {
        let fitted = fit_rect(100, 200, 100, 100);
        assert_eq!(fitted, FittedRect { width: 50, height: 100, dx: 25, dy: 0 });
    }

    #[test]
    fn fit_rect_upscales_small_sources() {
        let fitted = fit_rect(10, 10, 100, 80);
        assert_eq!(fitted, FittedRect { width: 80, height: 80, dx: 10, dy: 0 });
    }

    #[test]
    fn fit_rect_degenerate_source_fills_box() {
        let fitted = fit_rect(0, 10, 60, 40);
        assert_eq!(fitted, FittedRect { width: 60, height: 40, dx: 0, dy: 0 });
    }

    #[test]
    fn plan_positions_are_row_major() {
        let plan = plan_mosaic(&keys(5), 100, 80, 10);
        assert_eq!((plan.columns, plan.rows), (3, 2));
        assert_eq!(plan.width, 10 + 3 * 110);
        assert_eq!(plan.height, 10 + 2 * 90);
        assert_eq!(plan.slots.len(), 5);

        // Third slot sits at column 2 of row 0, fourth wraps to row 1.
        assert_eq!((plan.slots[2].col, plan.slots[2].row), (2, 0));
        assert_eq!((plan.slots[3].col, plan.slots[3].row), (0, 1));
        assert_eq!((plan.slots[3].x, plan.slots[3].y), (10, 100));
        assert_eq!(plan.slots[4].key, "k4");
    }

    proptest! {
        #[test]
        fn grid_is_minimal_and_sufficient(n in 1usize..400) {
            let (columns, rows) = grid_dims(n);
            let n32 = n as u32;
            prop_assert!(columns * rows >= n32, "grid holds all tiles");
            prop_assert!(columns * (rows - 1) < n32, "no fully empty trailing row");
            prop_assert!((columns - 1) * (columns - 1) < n32, "columns not oversized");
            prop_assert!(rows <= columns, "wider than tall");
        }

        #[test]
        fn fitted_rect_stays_inside_the_box(
            src_w in 1u32..4000,
            src_h in 1u32..4000,
            box_w in 1u32..512,
            box_h in 1u32..512,
        ) {
            let fitted = fit_rect(src_w, src_h, box_w, box_h);
            prop_assert!(fitted.width <= box_w);
            prop_assert!(fitted.height <= box_h);
            prop_assert!(fitted.dx + fitted.width <= box_w);
            prop_assert!(fitted.dy + fitted.height <= box_h);
            // One axis touches the box (no wasted scale), within rounding.
            prop_assert!(fitted.width == box_w || fitted.height == box_h);
        }

        #[test]
        fn every_key_gets_exactly_one_slot(n in 1usize..60) {
            let input = keys(n);
            let plan = plan_mosaic(&input, 64, 48, 4);
            let mut planned: Vec<&str> = plan.slots.iter().map(|slot| slot.key.as_str()).collect();
            planned.sort_unstable();
            let mut expected: Vec<&str> = input.iter().map(String::as_str).collect();
            expected.sort_unstable();
            prop_assert_eq!(planned, expected);
        }
    }
}
