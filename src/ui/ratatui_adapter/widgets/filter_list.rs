//! Filter panel widget: "All", category headers, and tag controls

use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::{ControlId, FilterPanel, PanelRow};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// First row to draw so that `cursor` stays visible
#[must_use]
pub const fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 || cursor < height {
        0
    } else {
        cursor + 1 - height
    }
}

/// Filter panel widget
pub struct FilterList<'a> {
    panel: &'a FilterPanel,
    rows: &'a [PanelRow],
    active: Option<&'a ControlId>,
    cursor: Option<usize>,
    theme: &'a Theme,
    block: Option<Block<'a>>,
}

impl<'a> FilterList<'a> {
    /// Create a widget over the panel's visible `rows`
    #[must_use]
    pub const fn new(panel: &'a FilterPanel, rows: &'a [PanelRow], theme: &'a Theme) -> Self {
        Self {
            panel,
            rows,
            active: None,
            cursor: None,
            theme,
            block: None,
        }
    }

    /// Mark the active control
    #[must_use]
    pub const fn active(mut self, active: Option<&'a ControlId>) -> Self {
        self.active = active;
        self
    }

    /// Highlight the row under the cursor
    #[must_use]
    pub const fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set border block
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn expander(&self, id: &ControlId) -> &'static str {
        let ControlId::Category(name) = id else {
            return "";
        };
        match self.panel.categories.iter().find(|c| c.name == *name) {
            Some(category) if category.expanded => "▾ ",
            Some(_) => "▸ ",
            None => "",
        }
    }

    fn row_line(&self, index: usize, row: &'a PanelRow) -> Line<'a> {
        let is_cursor = self.cursor == Some(index);
        let is_active = self.active == Some(&row.id);

        let label_style = if is_cursor {
            self.theme.selected_style()
        } else if is_active {
            self.theme.active_style()
        } else {
            self.theme.normal_style()
        };

        Line::from(vec![
            Span::styled(if is_cursor { ">" } else { " " }, self.theme.cursor_style()),
            Span::raw(" "),
            Span::raw("  ".repeat(row.depth)),
            Span::raw(self.expander(&row.id)),
            Span::styled(row.label.as_str(), label_style),
            Span::styled(format!(" ({})", row.badge), self.theme.badge_style()),
            Span::styled(if is_active { " ●" } else { "" }, self.theme.active_style()),
        ])
    }
}

impl Widget for FilterList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = self.block.as_ref().map_or(area, |b| {
            let inner = b.inner(area);
            b.clone().render(area, buf);
            inner
        });

        if area.height == 0 {
            return;
        }

        let height = usize::from(area.height);
        let start = scroll_offset(self.cursor.unwrap_or(0), height);

        for (y, (index, row)) in (area.y..).zip(self.rows.iter().enumerate().skip(start).take(height)) {
            let line = self.row_line(index, row);
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}
