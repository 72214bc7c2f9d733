//! Page content model and height measurement.
//!
//! The page is a heading followed by alternating left/right sections.  Its
//! rendered height depends on terminal width (text wraps), so the layout is
//! measured up front and re-measured on resize.  The measured height is the
//! scroll range the rest of the app mirrors: the scrollbar length and the
//! clamp bound for the real scroll offset both come from here.  No I/O
//! happens in this module.

/// Horizontal arrangement of a section's two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    /// Visual block on the left, text on the right.
    Row,
    /// Text on the left, visual block on the right.
    RowReverse,
}

/// One content section: a solid block beside a paragraph of filler text.
#[derive(Debug, Clone)]
pub struct Section {
    pub direction: FlexDirection,
}

/// The demo's alternating row / row-reverse section list.
pub fn alternating_sections(count: usize) -> Vec<Section> {
    (0..count)
        .map(|i| Section {
            direction: if i % 2 == 0 {
                FlexDirection::Row
            } else {
                FlexDirection::RowReverse
            },
        })
        .collect()
}

/// Placeholder paragraph shown in every section.
pub const PLACEHOLDER: &str = "Lorem ipsum dolor sit amet consectetur adipisicing elit. \
    In laudantium esse fugiat illum tempore sapiente soluta labore voluptas iusto deleniti \
    ab suscipit dolores quisquam corrupti facilis, id temporibus mollitia repellat omnis \
    tempora commodi eveniet. Incidunt, perspiciatis, adipisci laboriosam dolores quos dolor \
    voluptate odio magnam aperiam, alias asperiores pariatur! Nisi, libero!";

pub const HEADING: &str = "Smooth Scrolling";

// ── layout constants (rows / cols) ──────────────────────────────

/// Blank rows above the heading.
pub const TOP_MARGIN: u16 = 1;
/// Rows between the heading and the first section.
const HEADING_GAP: u16 = 2;
/// Blank rows between sections and below the last one.
const SECTION_GAP: u16 = 2;
/// Height of each section's solid block.
pub const BLOCK_HEIGHT: u16 = 8;
/// Columns of padding on each page edge.
pub const H_PADDING: u16 = 2;
/// Columns between a section's block and its text.
pub const GUTTER: u16 = 4;

/// Measured geometry for one section, in content-space rows.
#[derive(Debug, Clone)]
pub struct SectionLayout {
    /// First content row of the section.
    pub top: u16,
    /// Section height: the taller of the block and the wrapped text.
    pub height: u16,
    /// Paragraph pre-wrapped at the measured text width, so rendered
    /// height always equals measured height.
    pub text_lines: Vec<String>,
    pub block_width: u16,
    pub text_width: u16,
}

/// The scrollable page: section list plus the last measured layout.
pub struct Page {
    sections: Vec<Section>,
    layouts: Vec<SectionLayout>,
    content_height: u16,
}

impl Page {
    /// An unmeasured page.  `measure` must run before the first draw;
    /// until then the content height is zero and nothing scrolls.
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            layouts: Vec::new(),
            content_height: 0,
        }
    }

    /// Lay the page out at the given terminal width.  Called on startup
    /// and on every resize.
    pub fn measure(&mut self, width: u16) {
        let inner = width.saturating_sub(H_PADDING * 2);
        // Block takes two fifths of the row, text the rest.  Widened so
        // the doubling can't overflow u16 on very wide terminals.
        let block_width = (u32::from(inner) * 2 / 5) as u16;
        let text_width = inner.saturating_sub(block_width + GUTTER);

        let mut y = TOP_MARGIN + 1 + HEADING_GAP; // margin + heading row + gap
        self.layouts.clear();

        for _ in &self.sections {
            let text_lines = wrap_text(PLACEHOLDER, text_width as usize);
            let height = BLOCK_HEIGHT.max(text_lines.len() as u16);
            self.layouts.push(SectionLayout {
                top: y,
                height,
                text_lines,
                block_width,
                text_width,
            });
            y = y.saturating_add(height + SECTION_GAP);
        }

        self.content_height = y;
        tracing::debug!(width, content_height = self.content_height, "page measured");
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn layouts(&self) -> &[SectionLayout] {
        &self.layouts
    }

    /// Total content height in rows — the mirrored scroll extent.
    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    /// Largest valid scroll offset for a viewport of `height` rows.
    pub fn max_scroll(&self, height: u16) -> u16 {
        self.content_height.saturating_sub(height)
    }
}

/// Greedy word wrap.  Words longer than the width get a line of their own
/// rather than being split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.len() + 1 + word.len() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_alternate_direction() {
        let sections = alternating_sections(4);
        assert_eq!(sections[0].direction, FlexDirection::Row);
        assert_eq!(sections[1].direction, FlexDirection::RowReverse);
        assert_eq!(sections[2].direction, FlexDirection::Row);
        assert_eq!(sections[3].direction, FlexDirection::RowReverse);
    }

    #[test]
    fn measured_height_covers_every_section() {
        let mut page = Page::new(alternating_sections(6));
        page.measure(100);

        let last = page.layouts().last().unwrap();
        assert_eq!(page.content_height(), last.top + last.height + 2);

        // Sections are laid out strictly top to bottom with the fixed gap.
        for pair in page.layouts().windows(2) {
            assert_eq!(pair[1].top, pair[0].top + pair[0].height + 2);
        }
    }

    #[test]
    fn scroll_range_mirrors_content_height() {
        let mut page = Page::new(alternating_sections(6));
        page.measure(100);

        let h = page.content_height();
        assert!(h > 0);
        // Viewport shorter than the content: range is exactly the overflow.
        assert_eq!(page.max_scroll(30), h - 30);
        // Viewport taller than the content: nothing to scroll.
        assert_eq!(page.max_scroll(h + 50), 0);
    }

    #[test]
    fn remeasure_tracks_width_changes() {
        let mut page = Page::new(alternating_sections(6));
        page.measure(160);
        let wide = page.content_height();

        page.measure(60);
        let narrow = page.content_height();
        // Narrower text column wraps to more lines, so the page grows.
        assert!(narrow > wide);

        page.measure(160);
        assert_eq!(page.content_height(), wide);
    }

    #[test]
    fn measure_survives_extreme_widths() {
        let mut page = Page::new(alternating_sections(2));
        page.measure(u16::MAX);

        let inner = u16::MAX - H_PADDING * 2;
        let layout = &page.layouts()[0];
        assert_eq!(layout.block_width, (u32::from(inner) * 2 / 5) as u16);
        assert!(page.content_height() > 0);
    }

    #[test]
    fn rendered_text_height_equals_measured_height() {
        let mut page = Page::new(alternating_sections(1));
        page.measure(80);

        let layout = &page.layouts()[0];
        assert_eq!(
            layout.height,
            BLOCK_HEIGHT.max(layout.text_lines.len() as u16)
        );
        for line in &layout.text_lines {
            assert!(line.len() <= layout.text_width as usize);
        }
    }

    #[test]
    fn wrap_never_exceeds_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert!(!lines.is_empty());
        for line in &lines {
            assert!(line.len() <= 10);
        }
        // No words lost.
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_handles_degenerate_widths() {
        assert!(wrap_text("anything", 0).is_empty());
        // A word wider than the line still comes out whole.
        assert_eq!(wrap_text("extraordinary", 5), vec!["extraordinary"]);
    }
}
