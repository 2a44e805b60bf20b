//! List resolution: children placed consecutively along a primary axis.
//!
//! Horizontal lists run left to right and vertical lists run top to
//! bottom. Along the primary axis a list either wraps to the sum of its
//! children, or divides its free space among `FillParent` children by
//! weight. The cross axis behaves like a frame.

use crate::fill::Axis;
use crate::layout::{Layout, place};

pub(crate) fn resolve(list: &mut Layout, main: Axis) {
    list.measure_children();
    size_main_axis(list, main);
    list.size_stacked_axis(main.cross());
    // Slots are the grants; the aspect clamp may shrink a child inside its
    // own slot but never moves its siblings.
    let slots: Vec<i32> = list.children().iter().map(|c| c.tile().size(main)).collect();
    list.clamp_aspect();
    place_main_axis(list, main, &slots);
    list.place_children(main.cross());
    list.update_children();
}

/// Total spacing between `n` consecutive children.
fn gaps(list: &Layout) -> i64 {
    i64::from(list.spacing()) * (list.len() as i64 - 1).max(0)
}

/// Sum of the primary-axis sizes of children that do not fill their
/// parent.
fn fixed_extent(list: &Layout, main: Axis) -> i64 {
    list.children()
        .iter()
        .map(|c| c.tile())
        .filter(|t| !t.fill(main).is_fill_parent())
        .map(|t| i64::from(t.size(main)))
        .sum()
}

/// Saturate a widened intermediate back into pixel range.
fn narrow(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn size_main_axis(list: &mut Layout, main: Axis) {
    let pad = 2 * i64::from(list.padding());
    let gap_total = gaps(list);

    if list.tile().fill(main).is_wrap() {
        if list.is_empty() {
            log::warn!("Wrapping an empty {:?}; using padding only", list.kind());
        }
        let content: i64 = list
            .children()
            .iter()
            .map(|c| i64::from(c.tile().size(main)))
            .sum();
        list.tile_mut()
            .assign_size(main, narrow(content + gap_total + pad));
        return;
    }

    let has_fillers = list
        .children()
        .iter()
        .any(|c| c.tile().fill(main).is_fill_parent());
    if !has_fillers {
        return;
    }
    let total_weight: i64 = list
        .children()
        .iter()
        .map(|c| c.tile())
        .filter(|t| t.fill(main).is_fill_parent())
        .map(|t| i64::from(t.weight(main)))
        .sum();
    if total_weight == 0 {
        log::debug!("{:?} fillers have zero total weight; sizes kept", list.kind());
        return;
    }

    // Integer shares; the remainder is dropped, and a negative budget is
    // passed through unclamped.
    let available =
        i64::from(list.tile().size(main)) - pad - fixed_extent(list, main) - gap_total;
    for child in list.children_mut() {
        let tile = child.tile_mut();
        if tile.fill(main).is_fill_parent() {
            let share = available * i64::from(tile.weight(main)) / total_weight;
            tile.assign_size(main, narrow(share));
        }
    }
}

fn place_main_axis(list: &mut Layout, main: Axis, slots: &[i32]) {
    let padding = list.padding();
    let spacing = list.spacing();
    let count = list.len() as i64;

    // Leftover space is shared evenly between slots only when no child
    // absorbs it by filling.
    let has_fillers = list
        .children()
        .iter()
        .any(|c| c.tile().fill(main).is_fill_parent());
    let excess = if has_fillers || count == 0 {
        0
    } else {
        let free = i64::from(list.tile().size(main))
            - 2 * i64::from(padding)
            - fixed_extent(list, main)
            - gaps(list);
        narrow(free / count)
    };

    let forward = main == Axis::Horizontal;
    let mut cursor = if forward {
        list.tile().min(main) + padding
    } else {
        list.tile().max(main) - padding
    };

    for (child, &granted) in list.children_mut().iter_mut().zip(slots) {
        let tile = child.tile_mut();
        let slot = granted + excess;
        if forward {
            place(tile, main, cursor, cursor + slot);
            cursor += slot + spacing;
        } else {
            place(tile, main, cursor - slot, cursor);
            cursor -= slot + spacing;
        }
    }
}
