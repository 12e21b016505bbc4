//! Results grid: section titles followed by rows of kaomoji cells
//!
//! [`GridLayout`] turns a [`ResultsView`] into terminal lines for a given
//! width. It is computed on every draw and also answers cursor movement and
//! mouse hit tests, so what is drawn and what is clicked always agree.

use crate::clipboard::COPIED_LABEL;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::{EntryId, ResultNode, ResultsView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Widget},
};
use std::ops::Range;

const CELL_PADDING: u16 = 2;

/// One kaomoji cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Which entry the cell shows
    pub entry: EntryId,
    /// The kaomoji
    pub text: String,
    /// Layout line holding the cell
    pub line: usize,
    /// Column within the line
    pub column: usize,
}

/// One terminal line of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridLine {
    /// Section heading
    Title(String),
    /// Cells, as a range into [`GridLayout::cells`]
    Cells(Range<usize>),
    /// Placeholder for a tag without entries
    Message(String),
    /// Spacing between sections
    Blank,
}

/// Cursor movement inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Previous cell
    Left,
    /// Next cell
    Right,
    /// Same column on the previous row of cells
    Up,
    /// Same column on the next row of cells
    Down,
}

/// Lines and cells of the results grid for one width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    /// Width of every cell
    pub cell_width: u16,
    /// Cells per row
    pub columns: usize,
    /// Lines, top to bottom
    pub lines: Vec<GridLine>,
    /// Cells in reading order
    pub cells: Vec<GridCell>,
}

fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

impl GridLayout {
    /// Lay out `results` for a grid `width` columns wide
    #[must_use]
    pub fn compute(results: &ResultsView, width: u16) -> Self {
        let widest = results
            .sections()
            .flat_map(|s| s.entries.iter())
            .map(|e| text_width(e))
            .chain(std::iter::once(text_width(COPIED_LABEL)))
            .max()
            .unwrap_or(0);
        let cell_width = widest.saturating_add(CELL_PADDING).min(width.max(1));
        let columns = usize::from((width / cell_width).max(1));

        let mut lines = Vec::new();
        let mut cells = Vec::new();

        for node in &results.nodes {
            if !lines.is_empty() {
                lines.push(GridLine::Blank);
            }
            match node {
                ResultNode::Section(section) => {
                    lines.push(GridLine::Title(section.title.clone()));
                    for (row, chunk) in section.entries.chunks(columns).enumerate() {
                        let start = cells.len();
                        let line = lines.len();
                        cells.extend(chunk.iter().enumerate().map(|(column, text)| GridCell {
                            entry: EntryId::new(&section.tag, row * columns + column),
                            text: text.clone(),
                            line,
                            column,
                        }));
                        lines.push(GridLine::Cells(start..cells.len()));
                    }
                }
                ResultNode::NoResults { message, .. } => {
                    lines.push(GridLine::Message(message.clone()));
                }
            }
        }

        Self {
            cell_width,
            columns,
            lines,
            cells,
        }
    }

    /// Whether there are no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell reached from `index` by `direction`
    #[must_use]
    pub fn neighbor(&self, index: usize, direction: Move) -> Option<usize> {
        let cell = self.cells.get(index)?;
        match direction {
            Move::Left => index.checked_sub(1),
            Move::Right => (index + 1 < self.cells.len()).then_some(index + 1),
            Move::Up => self.lines[..cell.line]
                .iter()
                .rev()
                .find_map(|line| Self::column_in(line, cell.column)),
            Move::Down => self.lines[cell.line + 1..]
                .iter()
                .find_map(|line| Self::column_in(line, cell.column)),
        }
    }

    fn column_in(line: &GridLine, column: usize) -> Option<usize> {
        match line {
            GridLine::Cells(range) if !range.is_empty() => {
                Some(range.start + column.min(range.len() - 1))
            }
            _ => None,
        }
    }

    /// Cell at `offset` columns from the left edge on layout line `line`
    #[must_use]
    pub fn hit(&self, offset: u16, line: usize) -> Option<usize> {
        let column = usize::from(offset / self.cell_width.max(1));
        self.cells
            .iter()
            .position(|c| c.line == line && c.column == column)
    }

    /// Scroll offset that keeps cell `cursor` visible in `height` lines
    #[must_use]
    pub fn scroll_for(&self, cursor: usize, scroll: usize, height: usize) -> usize {
        let Some(cell) = self.cells.get(cursor) else {
            return 0;
        };
        if height == 0 {
            return scroll;
        }
        if cell.line <= scroll {
            // Keep the section title in view when possible
            match cell.line.checked_sub(1).map(|l| &self.lines[l]) {
                Some(GridLine::Title(_)) => cell.line - 1,
                _ => cell.line,
            }
        } else if cell.line >= scroll + height {
            cell.line + 1 - height
        } else {
            scroll
        }
    }
}

/// Results grid widget
pub struct KaomojiGrid<'a> {
    layout: &'a GridLayout,
    labels: &'a [&'a str],
    cursor: Option<usize>,
    scroll: usize,
    theme: &'a Theme,
    block: Option<Block<'a>>,
}

impl<'a> KaomojiGrid<'a> {
    /// Create a grid widget; `labels` holds the text to show for each cell
    #[must_use]
    pub const fn new(layout: &'a GridLayout, labels: &'a [&'a str], theme: &'a Theme) -> Self {
        Self {
            layout,
            labels,
            cursor: None,
            scroll: 0,
            theme,
            block: None,
        }
    }

    /// Highlight a cell
    #[must_use]
    pub const fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// First layout line to draw
    #[must_use]
    pub const fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Set border block
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn render_cells(&self, range: &Range<usize>, area: Rect, y: u16, buf: &mut Buffer) {
        for index in range.clone() {
            let cell = &self.layout.cells[index];
            let label = self.labels.get(index).copied().unwrap_or(cell.text.as_str());
            let offset = u16::try_from(cell.column)
                .unwrap_or(u16::MAX)
                .saturating_mul(self.layout.cell_width);
            if offset >= area.width {
                break;
            }

            let style = if self.cursor == Some(index) {
                self.theme.selected_style()
            } else if label != cell.text {
                self.theme.copied_style()
            } else {
                self.theme.normal_style()
            };
            let line = Line::from(Span::styled(format!(" {label} "), style));
            let width = self.layout.cell_width.min(area.width - offset);
            buf.set_line(area.x + offset, y, &line, width);
        }
    }
}

impl Widget for KaomojiGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = self.block.as_ref().map_or(area, |b| {
            let inner = b.inner(area);
            b.clone().render(area, buf);
            inner
        });

        if area.height == 0 {
            return;
        }

        let visible = self
            .layout
            .lines
            .iter()
            .skip(self.scroll)
            .take(usize::from(area.height));

        for (y, line) in (area.y..).zip(visible) {
            match line {
                GridLine::Title(title) => {
                    let line = Line::styled(title.as_str(), self.theme.title_style());
                    buf.set_line(area.x, y, &line, area.width);
                }
                GridLine::Cells(range) => self.render_cells(range, area, y, buf),
                GridLine::Message(message) => {
                    let style = self.theme.dimmed_style().add_modifier(Modifier::ITALIC);
                    buf.set_line(area.x, y, &Line::styled(message.as_str(), style), area.width);
                }
                GridLine::Blank => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Query;
    use crate::testing::catalog_from;
    use crate::view::{Selection, render_results};

    fn layout(width: u16) -> GridLayout {
        let catalog = catalog_from(&[
            ("joy", &["(^_^)", "(^o^)", "(^.^)", "(^-^)"]),
            ("sad", &["(T_T)"]),
        ]);
        let results = render_results(&Query::new(&catalog), &Selection::All);
        GridLayout::compute(&results, width)
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_compute_wraps_into_columns() {
        // "Copied!" is the widest label: 7 + padding
        let layout = layout(30);
        assert_eq!(layout.cell_width, 9);
        assert_eq!(layout.columns, 3);

        assert_eq!(layout.lines[0], GridLine::Title("Joy (4)".into()));
        assert_eq!(layout.lines[1], GridLine::Cells(0..3));
        assert_eq!(layout.lines[2], GridLine::Cells(3..4));
        assert_eq!(layout.lines[3], GridLine::Blank);
        assert_eq!(layout.lines[4], GridLine::Title("Sad (1)".into()));
        assert_eq!(layout.cells[3].entry, EntryId::new("joy", 3));
        assert_eq!(layout.cells[4].entry, EntryId::new("sad", 0));
    }

    #[test]
    fn test_narrow_width_still_has_one_column() {
        let layout = layout(4);
        assert_eq!(layout.columns, 1);
        assert_eq!(layout.cells.len(), 5);
    }

    #[test]
    fn test_neighbor_moves() {
        let layout = layout(30);
        assert_eq!(layout.neighbor(0, Move::Left), None);
        assert_eq!(layout.neighbor(0, Move::Right), Some(1));
        assert_eq!(layout.neighbor(2, Move::Down), Some(3));
        assert_eq!(layout.neighbor(3, Move::Up), Some(0));
        // Across sections, clamped to the shorter row
        assert_eq!(layout.neighbor(3, Move::Down), Some(4));
        assert_eq!(layout.neighbor(4, Move::Right), None);
        assert_eq!(layout.neighbor(9, Move::Up), None);
    }

    #[test]
    fn test_hit() {
        let layout = layout(30);
        assert_eq!(layout.hit(0, 1), Some(0));
        assert_eq!(layout.hit(10, 1), Some(1));
        assert_eq!(layout.hit(10, 2), None);
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let layout = layout(30);
        // Cursor on the sad entry (line 5) with a 2-line viewport
        assert_eq!(layout.scroll_for(4, 0, 2), 4);
        // Moving back up reveals the title above the first row
        assert_eq!(layout.scroll_for(0, 4, 2), 0);
        assert_eq!(layout.scroll_for(1, 0, 3), 0);
    }

    #[test]
    fn test_placeholder_layout() {
        let catalog = catalog_from(&[("joy", &["(^_^)"])]);
        let results = render_results(&Query::new(&catalog), &Selection::Tag("dragon".into()));
        let layout = GridLayout::compute(&results, 40);

        assert!(layout.is_empty());
        assert_eq!(
            layout.lines,
            vec![GridLine::Message("No kaomoji found for \"dragon\"".into())]
        );
    }

    #[test]
    fn test_render_shows_labels() {
        let layout = layout(30);
        let labels: Vec<&str> = vec!["(^_^)", COPIED_LABEL, "(^.^)", "(^-^)", "(T_T)"];
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        KaomojiGrid::new(&layout, &labels, &theme)
            .cursor(Some(0))
            .render(area, &mut buf);

        assert!(row_text(&buf, 0).starts_with("Joy (4)"));
        let cells = row_text(&buf, 1);
        assert!(cells.contains("(^_^)"));
        assert!(cells.contains(COPIED_LABEL));
        assert!(!cells.contains("(^o^)"));
        assert!(row_text(&buf, 2).contains("(^-^)"));
    }
}
