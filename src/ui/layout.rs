use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct DashboardLayout {
    pub navbar: Rect,
    pub address_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> DashboardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navbar
            Constraint::Length(3), // Address bar
            Constraint::Min(5),    // Routed view
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    DashboardLayout {
        navbar: chunks[0],
        address_bar: chunks[1],
        content: chunks[2],
        status_bar: chunks[3],
    }
}

/// Dropdown anchored to the top-right corner, just under the navbar.
pub fn dropdown_area(area: Rect, rows: usize) -> Rect {
    let width = area.width.min(56);
    let height = ((rows as u16).saturating_mul(2) + 2)
        .max(3)
        .min(area.height.saturating_sub(1));
    Rect::new(area.right().saturating_sub(width), area.y + 1, width, height)
}

/// Centered box of at most `width` x `height`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 24);
        let l = compute_layout(area);
        assert_eq!(l.navbar.height, 1);
        assert_eq!(l.address_bar.height, 3);
        assert_eq!(l.status_bar.y, 23);
        assert_eq!(l.content.height, 24 - 1 - 3 - 1);
    }

    #[test]
    fn test_dropdown_stays_inside() {
        let area = Rect::new(0, 0, 40, 10);
        let d = dropdown_area(area, 50);
        assert!(d.right() <= area.right());
        assert!(d.bottom() <= area.bottom());
        assert_eq!(dropdown_area(area, 0).height, 3);
    }
}
