use crossterm::style::{style, Color, Stylize};

pub struct Theme {
    pub result: Color,
    pub error: Color,
    pub info: Color,
    pub prompt: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    result: Color::Rgb {
        r: 166,
        g: 227,
        b: 161,
    }, // Green
    error: Color::Rgb {
        r: 243,
        g: 139,
        b: 168,
    }, // Red
    info: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    }, // Grey
    prompt: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    }, // Blue
};

/// Applies the theme, or passes text through untouched when colour is off
pub struct Painter {
    theme: &'static Theme,
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Painter {
            theme: &DEFAULT_THEME,
            enabled,
        }
    }

    pub fn result(&self, text: &str) -> String {
        self.paint(text, self.theme.result)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, self.theme.error)
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(text, self.theme.info)
    }

    pub fn prompt(&self, text: &str) -> String {
        self.paint(text, self.theme.prompt)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }
}
