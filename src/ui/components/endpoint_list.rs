use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();

    match state.current_resource() {
        Some(resource) => {
            for (idx, endpoint) in resource.endpoints.iter().enumerate() {
                let is_cursor = idx == state.cursor();

                let method_style = if is_cursor {
                    Style::default()
                        .fg(state.theme.cursor)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                        .fg(state.theme.method_color(endpoint.method))
                        .add_modifier(Modifier::BOLD)
                };
                let path_style = if is_cursor {
                    Style::default()
                        .fg(state.theme.cursor)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(state.theme.foreground)
                };

                items.push(ListItem::new(Line::from(vec![
                    Span::styled(format!(" {:<6} ", endpoint.method.as_str()), method_style),
                    Span::styled(endpoint.path.clone(), path_style),
                ])));
                items.push(ListItem::new(Line::from(Span::styled(
                    format!("        {}", endpoint.description),
                    Style::default().fg(state.theme.muted),
                ))));
            }
        }
        None => {
            for (idx, step) in state.reference.guide.iter().enumerate() {
                let is_cursor = idx == state.cursor();
                let style = if is_cursor {
                    Style::default()
                        .fg(state.theme.cursor)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(state.theme.foreground)
                };
                items.push(ListItem::new(Line::from(Span::styled(
                    format!(" {}. {}", idx + 1, step.title),
                    style,
                ))));
            }
        }
    }

    let title = format!(" {} ", state.tab_title(state.tab));
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(state.theme.foreground));

    f.render_widget(list, area);
}
