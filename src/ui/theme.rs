use crate::config::Config;
use crate::docs::Method;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,
    pub muted: Color,
    pub copied: Color,
    pub error: Color,
    pub method_get: Color,
    pub method_post: Color,
    pub method_put: Color,
    pub method_delete: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            cursor: Color::Cyan,
            muted: Color::DarkGray,
            copied: Color::Green,
            error: Color::Red,
            method_get: Color::Green,
            method_post: Color::Blue,
            method_put: Color::Yellow,
            method_delete: Color::Red,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            ..Self::default_theme()
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            cursor: Color::Blue,
            muted: Color::Gray,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
            ..Self::default_theme()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }

    /// Badge color per HTTP method (GET green, POST blue, PUT yellow,
    /// DELETE red).
    pub fn method_color(&self, method: Method) -> Color {
        match method {
            Method::Get => self.method_get,
            Method::Post => self.method_post,
            Method::Put => self.method_put,
            Method::Delete => self.method_delete,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
