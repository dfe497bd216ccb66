//! Drop resolution for single and group drags.

use crate::grid::Grid;
use crate::types::{DropOutcome, GlyphId, GroupDrag, GroupMember};

/// Capture the current selection as a group drag.
///
/// Members are recorded in row-major cell order; `None` when fewer than two
/// characters are selected.
pub(crate) fn capture_group(grid: &Grid) -> Option<GroupDrag> {
    let layout = *grid.layout();
    let members: Vec<GroupMember> = grid
        .selected()
        .filter_map(|(index, glyph)| {
            let (row, col) = layout.position(index)?;
            Some(GroupMember {
                glyph: glyph.id,
                row,
                col,
            })
        })
        .collect();
    if members.len() < 2 {
        return None;
    }
    GroupDrag::new(members)
}

/// Drop one character on `target`: move into an empty cell, swap with an
/// occupied one, ignore a drop on its own cell.
pub(crate) fn drop_single(grid: &mut Grid, glyph: GlyphId, target: usize) -> DropOutcome {
    let Some(source) = grid.position_of(glyph) else {
        return DropOutcome::Ignored;
    };
    if source == target || target >= grid.len() {
        return DropOutcome::Ignored;
    }
    let occupied = grid.is_occupied(target);
    if !grid.swap(source, target) {
        return DropOutcome::Ignored;
    }
    if occupied {
        DropOutcome::Swapped
    } else {
        DropOutcome::Moved
    }
}

/// Drop a group so that its base lands on `target`.
///
/// Each member keeps its offset from the group base. Members are processed in
/// capture order and each step sees the grid as left by the previous one, so
/// overlapping source/destination cells give order-dependent results.
///
/// - The destination is addressed by linear index only; a column past the
///   right edge spills onto the next row.
/// - A destination index past the end of the grid skips that member.
/// - Whatever occupies the destination moves into the member's current cell.
///   For characters outside the group that is the displacement swap; for a
///   group member that has not moved yet it is a parking spot until its own
///   turn comes.
pub(crate) fn drop_group(grid: &mut Grid, group: &GroupDrag, target: usize) -> DropOutcome {
    let layout = *grid.layout();
    let Some((target_row, target_col)) = layout.position(target) else {
        return DropOutcome::Ignored;
    };

    let mut moved = 0;
    let mut skipped = 0;
    for member in &group.members {
        let (offset_row, offset_col) = group.offset_of(member);
        let dest = layout.linear_index(
            target_row.saturating_add(offset_row),
            target_col.saturating_add(offset_col),
        );
        if dest >= grid.len() {
            log::debug!("group drop: {:?} skipped, cell {dest} outside grid", member.glyph);
            skipped += 1;
            continue;
        }
        let Some(current) = grid.position_of(member.glyph) else {
            skipped += 1;
            continue;
        };
        if current == dest {
            moved += 1;
            continue;
        }
        if let Some(occupant) = grid.glyph_at(dest) {
            if !group.contains(occupant.id) {
                log::debug!("group drop: displacing {:?} into cell {current}", occupant.id);
            }
        }
        grid.swap(current, dest);
        moved += 1;
    }

    DropOutcome::Group { moved, skipped }
}
