use crate::app::{AppState, Pane};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(block) = state.visible_block() else {
        return;
    };

    let copied = state.copy_indicator.is_active(&block.id);
    let available_width = area.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();

    if let Some(endpoint) = state.selected_endpoint() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", endpoint.method.as_str()),
                Style::default()
                    .fg(state.theme.method_color(endpoint.method))
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ),
            Span::raw(" "),
            Span::styled(
                endpoint.path.clone(),
                Style::default()
                    .fg(state.theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for wrapped in wrap_text(&endpoint.description, available_width) {
            lines.push(Line::from(Span::styled(
                wrapped,
                Style::default().fg(state.theme.muted),
            )));
        }
        lines.push(Line::default());
        lines.push(pane_tabs_line(state, endpoint.request.is_some()));
    } else if let Some(step) = state.selected_guide_step() {
        lines.push(Line::from(Span::styled(
            step.title.clone(),
            Style::default()
                .fg(state.theme.foreground)
                .add_modifier(Modifier::BOLD),
        )));
        for wrapped in wrap_text(&step.blurb, available_width) {
            lines.push(Line::from(Span::styled(
                wrapped,
                Style::default().fg(state.theme.muted),
            )));
        }
    }

    lines.push(Line::default());
    for code_line in block.code.lines() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(code_line, available_width),
            Style::default().fg(state.theme.foreground),
        )));
    }

    let title = if copied {
        Line::from(vec![
            Span::raw(format!(" {} ", block.id)),
            Span::styled(
                "✓ copied ",
                Style::default()
                    .fg(state.theme.copied)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(format!(" {} (y to copy) ", block.id))
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(state.theme.foreground));

    f.render_widget(paragraph, area);
}

fn pane_tabs_line(state: &AppState, has_request: bool) -> Line<'static> {
    let selected = Style::default()
        .fg(state.theme.cursor)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED);
    let unselected = Style::default().fg(state.theme.muted);

    let mut spans = Vec::new();
    if has_request {
        spans.push(Span::styled(
            " Request ",
            if state.pane == Pane::Request {
                selected
            } else {
                unselected
            },
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        " Response ",
        if state.pane == Pane::Response || !has_request {
            selected
        } else {
            unselected
        },
    ));
    Line::from(spans)
}

/// Clip a code line to the pane width; code never soft-wraps.
fn truncate_to_width(line: &str, max_width: usize) -> String {
    if line.width() <= max_width {
        return line.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in line.chars() {
        let char_width = c.to_string().width();
        if width + char_width + 1 > max_width {
            break;
        }
        out.push(c);
        width += char_width;
    }
    out.push('…');
    out
}

fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_line.is_empty() {
            current_line = word.to_string();
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(current_line);
            current_line = word.to_string();
            current_width = word_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_line_unchanged() {
        assert_eq!(truncate_to_width("curl", 40), "curl");
    }

    #[test]
    fn test_truncate_long_line_ellipsized() {
        let out = truncate_to_width("curl http://localhost:8787/products", 10);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 10);
    }

    #[test]
    fn test_wrap_text_splits_on_words() {
        let lines = wrap_text("Retrieve a specific product by ID", 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width() <= 12);
        }
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
