/// Visual configuration handed to the dashboard and its render helpers.
///
/// Passed down as a property so screens can be themed (or tested) without
/// touching global state.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    pub info: String,
    pub warning: String,
    pub accent: String,
    pub rank_badge: String,
    /// Colors cycled through by the category bars
    pub category_palette: Vec<String>,
    pub chart: ChartViewport,
}

/// Fixed drawing area of the trend chart, in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartViewport {
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
}

impl Default for ChartViewport {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 100.0,
            stroke_width: 3.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#13ec5b".to_string(),
            background: "#102216".to_string(),
            surface: "#1c2e22".to_string(),
            text: "#ffffff".to_string(),
            text_muted: "#9db9a6".to_string(),
            info: "#60a5fa".to_string(),
            warning: "#fb923c".to_string(),
            accent: "#c084fc".to_string(),
            rank_badge: "#f59e0b".to_string(),
            category_palette: vec![
                "#ef4444".to_string(),
                "#3b82f6".to_string(),
                "#f59e0b".to_string(),
                "#a855f7".to_string(),
            ],
            chart: ChartViewport::default(),
        }
    }
}

impl Theme {
    /// Palette color for the category at `index`, wrapping around.
    pub fn category_color(&self, index: usize) -> &str {
        if self.category_palette.is_empty() {
            return &self.primary;
        }
        &self.category_palette[index % self.category_palette.len()]
    }
}

/// `#rrggbb` plus a two-digit alpha, for tinted icon backgrounds.
pub fn tint(color: &str, alpha_hex: &str) -> String {
    format!("{}{}", color, alpha_hex)
}
