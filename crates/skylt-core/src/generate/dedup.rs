use crate::model::{RowKey, ScheduleRow};
use std::collections::HashMap;

/// Collapse `rows` to one row per identity.
///
/// The last row seen for a key wins, but it takes the position where that
/// key first appeared. Returns the number of rows removed.
pub fn dedup_schedule(rows: &mut Vec<ScheduleRow>) -> usize {
    let before = rows.len();
    let mut slot_of: HashMap<RowKey, usize> = HashMap::with_capacity(rows.len());
    let mut kept: Vec<ScheduleRow> = Vec::with_capacity(rows.len());

    for row in rows.drain(..) {
        match slot_of.get(&row.key()) {
            Some(&slot) => kept[slot] = row,
            None => {
                slot_of.insert(row.key(), kept.len());
                kept.push(row);
            }
        }
    }

    *rows = kept;
    before - rows.len()
}
