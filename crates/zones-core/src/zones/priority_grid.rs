//! Priority grid: hand-specified grids with one enlarged center zone.
//!
//! Each supported zone count has a fixed [`GridTemplate`]: proportional row
//! heights and column widths (in 1/10000ths) plus a cell map that assigns every
//! grid cell to a zone.  A zone spanning several cells becomes the bounding box
//! of those cells.  Zone counts without a template use the regular grid.
//!
//! These tables are a compatibility contract with the window manager: changing
//! a template changes the zones users already rely on.
//!
//! ```text
//!  2 zones          3 zones            5 zones
//! +--------+---+   +--+------+--+    +--+------+--+
//! |        |   |   |  |      |  |    |0 |      |2 |
//! |   0    | 1 |   |0 |  1   |2 |    +--+  1   +--+
//! |        |   |   |  |      |  |    |3 |      |4 |
//! +--------+---+   +--+------+--+    +--+------+--+
//! ```

use crate::domain::geometry::Rect;

use super::{split_axis, ZoneError};

/// Smallest zone count with a priority template.
pub const MIN_ZONE_COUNT: u32 = 2;
/// Largest zone count with a priority template.
pub const MAX_ZONE_COUNT: u32 = 11;

/// A proportional grid with a cell → zone assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTemplate {
    /// Row heights, top to bottom, summing to 10000.
    pub row_weights: &'static [u32],
    /// Column widths, left to right, summing to 10000.
    pub column_weights: &'static [u32],
    /// `cells[row][column]` is the zone index occupying that cell.
    pub cells: &'static [&'static [usize]],
}

const ONE_ROW: &[u32] = &[10000];
const TWO_ROWS: &[u32] = &[5000, 5000];
const THREE_ROWS: &[u32] = &[3333, 3334, 3333];
const FOUR_ROWS: &[u32] = &[2500, 2500, 2500, 2500];

const WIDE_LEFT: &[u32] = &[6667, 3333];
const WIDE_CENTER: &[u32] = &[2500, 5000, 2500];
const FOUR_COLUMNS: &[u32] = &[2500, 2500, 2500, 2500];

const TEMPLATES: [GridTemplate; 10] = [
    // 2
    GridTemplate {
        row_weights: ONE_ROW,
        column_weights: WIDE_LEFT,
        cells: &[&[0, 1]],
    },
    // 3
    GridTemplate {
        row_weights: ONE_ROW,
        column_weights: WIDE_CENTER,
        cells: &[&[0, 1, 2]],
    },
    // 4
    GridTemplate {
        row_weights: TWO_ROWS,
        column_weights: WIDE_CENTER,
        cells: &[&[0, 1, 2], &[0, 1, 3]],
    },
    // 5
    GridTemplate {
        row_weights: TWO_ROWS,
        column_weights: WIDE_CENTER,
        cells: &[&[0, 1, 2], &[3, 1, 4]],
    },
    // 6
    GridTemplate {
        row_weights: THREE_ROWS,
        column_weights: WIDE_CENTER,
        cells: &[&[0, 1, 2], &[0, 1, 3], &[4, 1, 5]],
    },
    // 7
    GridTemplate {
        row_weights: THREE_ROWS,
        column_weights: WIDE_CENTER,
        cells: &[&[0, 1, 2], &[3, 1, 4], &[5, 1, 6]],
    },
    // 8
    GridTemplate {
        row_weights: THREE_ROWS,
        column_weights: FOUR_COLUMNS,
        cells: &[&[0, 1, 1, 2], &[3, 1, 1, 4], &[5, 6, 7, 7]],
    },
    // 9
    GridTemplate {
        row_weights: THREE_ROWS,
        column_weights: FOUR_COLUMNS,
        cells: &[&[0, 1, 1, 2], &[3, 1, 1, 4], &[5, 6, 7, 8]],
    },
    // 10
    GridTemplate {
        row_weights: FOUR_ROWS,
        column_weights: FOUR_COLUMNS,
        cells: &[&[0, 1, 1, 2], &[3, 1, 1, 4], &[5, 1, 1, 6], &[7, 8, 8, 9]],
    },
    // 11
    GridTemplate {
        row_weights: FOUR_ROWS,
        column_weights: FOUR_COLUMNS,
        cells: &[&[0, 1, 1, 2], &[3, 1, 1, 4], &[5, 1, 1, 6], &[7, 8, 9, 10]],
    },
];

/// Returns the template for `zone_count`, or `None` outside
/// [`MIN_ZONE_COUNT`]`..=`[`MAX_ZONE_COUNT`].
pub fn template(zone_count: u32) -> Option<&'static GridTemplate> {
    if !(MIN_ZONE_COUNT..=MAX_ZONE_COUNT).contains(&zone_count) {
        return None;
    }
    TEMPLATES.get((zone_count - MIN_ZONE_COUNT) as usize)
}

impl GridTemplate {
    /// Number of distinct zones in the cell map.
    pub fn zone_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Scales the template to `area`, separating cells by `spacing`.
    pub(crate) fn zones(&self, area: Rect, spacing: u32) -> Result<Vec<Rect>, ZoneError> {
        let rows = split_axis(area.y, area.height, self.row_weights, spacing)?;
        let columns = split_axis(area.x, area.width, self.column_weights, spacing)?;

        // (first_row, last_row, first_column, last_column) per zone.
        let mut bounds: Vec<Option<(usize, usize, usize, usize)>> = vec![None; self.zone_count()];
        for (row, cells) in self.cells.iter().enumerate() {
            for (column, &zone) in cells.iter().enumerate() {
                let entry = bounds[zone].get_or_insert((row, row, column, column));
                entry.0 = entry.0.min(row);
                entry.1 = entry.1.max(row);
                entry.2 = entry.2.min(column);
                entry.3 = entry.3.max(column);
            }
        }

        Ok(bounds
            .into_iter()
            .flatten()
            .map(|(top, bottom, left, right)| {
                let x = columns[left].start;
                let y = rows[top].start;
                Rect::new(
                    x,
                    y,
                    (columns[right].end() - x) as u32,
                    (rows[bottom].end() - y) as u32,
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_exists_for_every_supported_count() {
        for count in MIN_ZONE_COUNT..=MAX_ZONE_COUNT {
            let template = template(count).expect("template must exist");
            assert_eq!(template.zone_count(), count as usize, "count {count}");
        }
    }

    #[test]
    fn test_template_is_none_outside_supported_range() {
        assert!(template(1).is_none());
        assert!(template(12).is_none());
    }

    #[test]
    fn test_templates_are_well_formed() {
        for count in MIN_ZONE_COUNT..=MAX_ZONE_COUNT {
            let t = template(count).unwrap();
            assert_eq!(t.row_weights.iter().sum::<u32>(), 10000, "rows of {count}");
            assert_eq!(t.column_weights.iter().sum::<u32>(), 10000, "columns of {count}");
            assert_eq!(t.cells.len(), t.row_weights.len(), "row count of {count}");
            assert!(t.cells.iter().all(|row| row.len() == t.column_weights.len()));
        }
    }

    #[test]
    fn test_every_zone_occupies_a_full_rectangle_of_cells() {
        for count in MIN_ZONE_COUNT..=MAX_ZONE_COUNT {
            let t = template(count).unwrap();
            for zone in 0..t.zone_count() {
                let cells: Vec<(usize, usize)> = t
                    .cells
                    .iter()
                    .enumerate()
                    .flat_map(|(r, row)| {
                        row.iter()
                            .enumerate()
                            .filter(move |&(_, z)| *z == zone)
                            .map(move |(c, _)| (r, c))
                    })
                    .collect();
                let rows = cells.iter().map(|c| c.0);
                let cols = cells.iter().map(|c| c.1);
                let height = rows.clone().max().unwrap() - rows.min().unwrap() + 1;
                let width = cols.clone().max().unwrap() - cols.min().unwrap() + 1;
                assert_eq!(height * width, cells.len(), "zone {zone} of {count}");
            }
        }
    }

    #[test]
    fn test_three_zone_template_has_wide_center_zone() {
        let zones = template(3)
            .unwrap()
            .zones(Rect::new(0, 0, 2000, 1000), 0)
            .unwrap();
        assert_eq!(
            zones,
            vec![
                Rect::new(0, 0, 500, 1000),
                Rect::new(500, 0, 1000, 1000),
                Rect::new(1500, 0, 500, 1000),
            ]
        );
    }

    #[test]
    fn test_spanning_zone_includes_inner_gutter() {
        // Zone 1 of the 4-zone template spans both rows of the middle column.
        let zones = template(4)
            .unwrap()
            .zones(Rect::new(0, 0, 2000, 1010), 10)
            .unwrap();
        assert_eq!(zones[1].y, 0);
        assert_eq!(zones[1].height, 1010);
        assert_eq!(zones[0].height, 1010);
        assert_eq!(zones[2].height, 500);
        assert_eq!(zones[3].y, 510);
    }
}
