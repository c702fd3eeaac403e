//! Task Row Rendering
//!
//! Builds the list items for the main screen: charcoal rows, purple once
//! completed, with the check mark blended toward the row color while the
//! toggle fade is still running.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use crate::effects::{self, Fade};
use crate::theme;

use super::state::Task;

/// Check-mark column, including its trailing gap.
const MARK_DONE: &str = " \u{2713} ";
const MARK_OPEN: &str = "   ";

/// Build one list item per task, wrapping long text within `width` columns.
pub fn task_rows(tasks: &[Task], check_fade: Option<&Fade>, width: u16) -> Vec<ListItem<'static>> {
    let text_width = (width as usize).saturating_sub(MARK_OPEN.len() + 1).max(8);
    let opacity = check_fade.map(|f| f.opacity()).unwrap_or(1.0);

    tasks
        .iter()
        .map(|task| {
            let (row_bg, row_rgb) = if task.completed {
                (theme::ROW_DONE, theme::ROW_DONE_RGB)
            } else {
                (theme::ROW, theme::ROW_RGB)
            };
            let text_style = Style::new().fg(theme::TEXT).bg(row_bg);
            let mark_style = if task.completed {
                Style::new()
                    .fg(effects::blend(theme::CHECK_RGB, row_rgb, opacity))
                    .bg(row_bg)
            } else {
                text_style
            };
            let mark = if task.completed { MARK_DONE } else { MARK_OPEN };

            let wrapped = textwrap::wrap(&task.text, text_width);
            let mut lines: Vec<Line> = Vec::with_capacity(wrapped.len().max(1));
            for (i, piece) in wrapped.iter().enumerate() {
                let lead = if i == 0 {
                    Span::styled(mark.to_string(), mark_style)
                } else {
                    Span::styled(MARK_OPEN.to_string(), text_style)
                };
                lines.push(Line::from(vec![
                    lead,
                    Span::styled(piece.to_string(), text_style),
                ]));
            }
            if lines.is_empty() {
                lines.push(Line::from(Span::styled(mark.to_string(), mark_style)));
            }

            ListItem::new(lines).style(Style::new().bg(row_bg))
        })
        .collect()
}
