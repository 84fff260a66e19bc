//! Focus layout: a diagonal stack of equally sized zones.
//!
//! Zone 0 is at the back of the stack; the last zone is on top and is the one
//! activated by default.

use crate::domain::geometry::Rect;

/// Size of every focus zone, as a percentage of the work area on each axis.
pub const FOCUS_SIZE_PERCENT: u32 = 40;

/// Diagonal offset between consecutive focus zones, in pixels.
pub const FOCUS_STEP: u32 = 50;

/// Builds `count` focus zones centered in `area`.
///
/// The step shrinks when the full stack would not fit in the work area.
pub fn focus_zones(area: Rect, count: u32) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let width = percent_of(area.width, FOCUS_SIZE_PERCENT);
    let height = percent_of(area.height, FOCUS_SIZE_PERCENT);

    let steps = count - 1;
    let step = if steps == 0 {
        0
    } else {
        FOCUS_STEP
            .min((area.width - width) / steps)
            .min((area.height - height) / steps)
    };

    let stack_width = width + step * steps;
    let stack_height = height + step * steps;
    let origin_x = area.x + ((area.width - stack_width) / 2) as i32;
    let origin_y = area.y + ((area.height - stack_height) / 2) as i32;

    (0..count)
        .map(|index| {
            let offset = (step * index) as i32;
            Rect::new(origin_x + offset, origin_y + offset, width, height)
        })
        .collect()
}

/// Index of the zone that is on top of the stack, `None` for no zones.
pub fn active_index(count: u32) -> Option<usize> {
    count.checked_sub(1).map(|last| last as usize)
}

fn percent_of(length: u32, percent: u32) -> u32 {
    let scaled = u64::from(length) * u64::from(percent) / 100;
    (scaled as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_zones_share_size_and_step_diagonally() {
        let zones = focus_zones(Rect::new(0, 0, 1920, 1040), 3);
        assert_eq!(zones.len(), 3);
        assert!(zones.iter().all(|z| z.width == 768 && z.height == 416));
        assert_eq!(zones[1].x - zones[0].x, 50);
        assert_eq!(zones[1].y - zones[0].y, 50);
    }

    #[test]
    fn test_focus_stack_is_centered() {
        let area = Rect::new(0, 0, 1920, 1040);
        let zones = focus_zones(area, 3);
        let left_margin = zones[0].x - area.x;
        let right_margin = area.right() - zones[2].right();
        assert!((left_margin - right_margin).abs() <= 1);
    }

    #[test]
    fn test_focus_step_shrinks_to_fit_many_zones() {
        let area = Rect::new(0, 0, 1000, 500);
        let zones = focus_zones(area, 40);
        assert!(zones.iter().all(|z| area.contains_rect(z)));
    }

    #[test]
    fn test_focus_single_zone_has_no_offset() {
        let zones = focus_zones(Rect::new(100, 100, 1000, 1000), 1);
        assert_eq!(zones, vec![Rect::new(400, 400, 400, 400)]);
    }

    #[test]
    fn test_active_index_is_last_zone() {
        assert_eq!(active_index(10), Some(9));
        assert_eq!(active_index(0), None);
    }
}
