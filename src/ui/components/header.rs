use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let titles: Vec<Line> = (0..state.tab_count())
        .map(|i| Line::from(format!(" {} ", state.tab_title(i))))
        .collect();

    let base_url_copied = state.copy_indicator.is_active("base-url");
    let base_url_label = if base_url_copied {
        format!("{} ✓ copied", state.reference.base_urls.join("  |  "))
    } else {
        state.reference.base_urls.join("  |  ")
    };
    let base_url_style = if base_url_copied {
        Style::default().fg(state.theme.copied)
    } else {
        Style::default().fg(state.theme.muted)
    };

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", state.reference.title),
            Style::default()
                .fg(state.theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(base_url_label, base_url_style),
        Span::raw(" "),
    ]);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(state.theme.foreground))
        .highlight_style(
            Style::default()
                .fg(state.theme.cursor)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .select(state.tab);

    f.render_widget(tabs, area);
}
