//! Dimension snapping and table lookup.
//!
//! Pergola tables round a requested size UP to the next available grid
//! value. Above the largest grid value the rounding clamps to that value,
//! while the lookup reports the size as unpriceable.

use super::price_table::PriceTable;
use crate::config::UNPRICEABLE;

/// Smallest outer dimension of `table` that is >= `requested`.
///
/// Clamps to the largest key when `requested` exceeds every key. Returns 0
/// for an empty table.
pub fn round_up_to_next_available_projection(table: &PriceTable, requested: u32) -> u32 {
    table
        .outer_keys()
        .find(|&key| key >= requested)
        .or_else(|| table.max_outer())
        .unwrap_or(0)
}

/// Smallest width >= `requested` in the row selected by rounding `projection`.
///
/// Clamps to the widest entry of that row when `requested` exceeds it.
pub fn round_up_to_next_available_width(table: &PriceTable, projection: u32, requested: u32) -> u32 {
    let outer = round_up_to_next_available_projection(table, projection);
    let Some(row) = table.row(outer) else {
        return 0;
    };

    row.keys()
        .copied()
        .find(|&width| width >= requested)
        .or_else(|| row.keys().next_back().copied())
        .unwrap_or(0)
}

/// Round both dimensions up and read the cell.
///
/// Returns [`UNPRICEABLE`] when either requested dimension lies above the
/// table (or above the resolved row), or when the cell is missing.
pub fn get_price_from_table(table: &PriceTable, projection: u32, width: u32) -> f64 {
    let Some(max_outer) = table.max_outer() else {
        return UNPRICEABLE;
    };
    if projection > max_outer {
        return UNPRICEABLE;
    }

    let outer = round_up_to_next_available_projection(table, projection);
    let Some(row) = table.row(outer) else {
        return UNPRICEABLE;
    };
    match row.keys().next_back() {
        Some(&widest) if width <= widest => {}
        _ => return UNPRICEABLE,
    }

    let rounded_width = round_up_to_next_available_width(table, projection, width);
    table.price_at(outer, rounded_width).unwrap_or(UNPRICEABLE)
}

/// Closest value in `options` to `value`. Ties resolve to the earlier option.
///
/// Returns `value` unchanged when `options` is empty.
pub fn nearest_option(options: &[u32], value: u32) -> u32 {
    let mut best: Option<u32> = None;
    for &option in options {
        best = match best {
            Some(current) if option.abs_diff(value) >= current.abs_diff(value) => Some(current),
            _ => Some(option),
        };
    }
    best.unwrap_or(value)
}

/// Snap both dimensions to the nearest grid value present in `table`.
///
/// Returns `(outer, width)`.
pub fn snap_to_nearest(table: &PriceTable, outer: u32, width: u32) -> (u32, u32) {
    let outers: Vec<u32> = table.outer_keys().collect();
    let widths: Vec<u32> = table.all_widths().into_iter().collect();
    (nearest_option(&outers, outer), nearest_option(&widths, width))
}
