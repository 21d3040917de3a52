use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let position = format!("{} {}/{}", state.tab_title(state.tab), state.cursor() + 1, {
        match state.current_resource() {
            Some(resource) => resource.endpoints.len(),
            None => state.reference.guide.len(),
        }
    });

    let nav_hint = "y copy  u copy url  Tab req/resp  ? help  q quit";
    let version_text = format!("v{VERSION}");

    let left_content = match state.status_error() {
        Some(err) => format!(" {position} | {err}"),
        None => format!(" {position}"),
    };

    let padding = area.width.saturating_sub(
        left_content.len() as u16 + nav_hint.len() as u16 + version_text.len() as u16 + 3,
    );

    let status_line = format!(
        "{} {} {:>padding$} {}",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding as usize
    );

    let style = if state.status_error().is_some() {
        base_style
            .fg(state.theme.error)
            .add_modifier(Modifier::BOLD)
    } else {
        base_style
    };

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));

    f.render_widget(status, area);
}
