//! Custom Ratatui widget that renders the [`Page`] translated upward by the
//! damped scroll offset.
//!
//! The widget draws in content-space rows and maps each one through the
//! offset, so "scrolling" is purely a render-time translation — exactly the
//! transform the sync loop animates.  Sections outside the viewport are
//! skipped; partially visible ones are clipped row by row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
};

use crate::core::page::{
    FlexDirection, Page, BLOCK_HEIGHT, GUTTER, HEADING, H_PADDING, TOP_MARGIN,
};

use super::theme::Theme;

/// The page widget itself — created fresh each frame.
pub struct PageWidget<'a> {
    page: &'a Page,
    /// Whole-row translation applied to all content (rows scrolled past
    /// the top of the viewport).
    row_offset: u16,
}

impl<'a> PageWidget<'a> {
    pub fn new(page: &'a Page, row_offset: u16) -> Self {
        Self { page, row_offset }
    }

    /// Map a content row to a screen row, or `None` when it falls outside
    /// the viewport.
    fn screen_row(&self, area: Rect, content_row: u16) -> Option<u16> {
        let rel = content_row.checked_sub(self.row_offset)?;
        if rel >= area.height {
            return None;
        }
        Some(area.y + rel)
    }
}

impl Widget for PageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // ── heading ────────────────────────────────────────────
        if let Some(y) = self.screen_row(area, TOP_MARGIN) {
            let width = HEADING.len() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            buf.set_stringn(x, y, HEADING, area.right().saturating_sub(x) as usize,
                Theme::heading_style());
        }

        // ── sections ───────────────────────────────────────────
        let sections = self.page.sections().iter().zip(self.page.layouts());
        for (index, (section, layout)) in sections.enumerate() {
            let bottom = layout.top.saturating_add(layout.height);
            if bottom <= self.row_offset
                || layout.top >= self.row_offset.saturating_add(area.height)
            {
                continue; // fully above or below the viewport
            }

            let (block_x, text_x) = match section.direction {
                FlexDirection::Row => (
                    area.x + H_PADDING,
                    area.x + H_PADDING + layout.block_width + GUTTER,
                ),
                FlexDirection::RowReverse => (
                    area.x + area.width.saturating_sub(H_PADDING + layout.block_width),
                    area.x + H_PADDING,
                ),
            };

            // Solid block: a background fill, clipped to the viewport.
            for row in 0..BLOCK_HEIGHT.min(layout.height) {
                if let Some(y) = self.screen_row(area, layout.top + row) {
                    let fill = Rect::new(block_x, y, layout.block_width, 1)
                        .intersection(area);
                    buf.set_style(fill, Theme::block_style(index));
                }
            }

            // Paragraph text, one pre-wrapped line per content row.
            if text_x >= area.right() {
                continue;
            }
            for (line_index, line) in layout.text_lines.iter().enumerate() {
                if let Some(y) = self.screen_row(area, layout.top + line_index as u16) {
                    buf.set_stringn(
                        text_x,
                        y,
                        line,
                        layout.text_width as usize,
                        Theme::paragraph_style(),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::alternating_sections;

    fn rendered(page: &Page, offset: u16, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        PageWidget::new(page, offset).render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        let area = *buf.area();
        (area.left()..area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    fn measured_page() -> Page {
        let mut page = Page::new(alternating_sections(2));
        page.measure(80);
        page
    }

    #[test]
    fn heading_sits_on_its_content_row_at_rest() {
        let page = measured_page();
        let buf = rendered(&page, 0, 80, 24);
        assert!(row_text(&buf, TOP_MARGIN).contains(HEADING));
    }

    #[test]
    fn offset_translates_content_upward() {
        let page = measured_page();
        let at_rest = rendered(&page, 0, 80, 24);
        let scrolled = rendered(&page, 3, 80, 24);

        let first_text_row = page.layouts()[0].top;
        // The row drawn at `first_text_row` moves up by exactly the offset.
        assert_eq!(
            row_text(&at_rest, first_text_row),
            row_text(&scrolled, first_text_row - 3),
        );
        // And the heading (row 1) is gone once scrolled past.
        assert!(!row_text(&scrolled, 0).contains(HEADING));
    }

    #[test]
    fn sections_swap_sides_with_direction() {
        let mut page = Page::new(alternating_sections(2));
        page.measure(80);
        let layout_height: u16 = page.content_height();
        let buf = rendered(&page, 0, 80, layout_height + 4);

        let first = &page.layouts()[0];
        let second = &page.layouts()[1];

        // Row: text column starts right of the block.
        let row_line = row_text(&buf, first.top);
        let text_start = H_PADDING + first.block_width + GUTTER;
        assert_eq!(row_line[..text_start as usize].trim(), "");

        // RowReverse: text hugs the left padding instead.
        let rev_line = row_text(&buf, second.top);
        assert!(rev_line
            .chars()
            .skip(H_PADDING as usize)
            .next()
            .is_some_and(|c| c != ' '));
    }

    #[test]
    fn degenerate_areas_render_nothing() {
        let page = measured_page();
        // Must not panic on zero-sized or sliver viewports.
        let _ = rendered(&page, 0, 0, 0);
        let _ = rendered(&page, 0, 3, 24);
        let _ = rendered(&page, 500, 80, 24);
    }
}
