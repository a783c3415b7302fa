//! Colour palettes.
//!
//! Inline `style:` strings are built from these values. The only stylesheet
//! is [`RESPONSIVE_CSS`], for breakpoints.

use plotters::style::HSLColor;
use wtd_data::alerts::AlertLevel;
use wtd_sensors::metric::Metric;
use wtd_sensors::status::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub secondary: &'static str,
    pub primary: &'static str,
    pub grid: &'static str,
    pub axis: &'static str,
    pub brush_fill: &'static str,
    pub gauge_track: &'static str,
    pub normal: &'static str,
    pub warning: &'static str,
    pub critical: &'static str,
    pub success: &'static str,
}

pub const DARK: Palette = Palette {
    background: "hsl(222, 47%, 7%)",
    card: "hsl(222, 47%, 11%)",
    border: "hsl(217, 33%, 20%)",
    text: "hsl(210, 40%, 98%)",
    muted: "hsl(215, 20%, 65%)",
    secondary: "hsl(217, 33%, 17%)",
    primary: "hsl(199, 89%, 48%)",
    grid: "hsl(217, 33%, 25%)",
    axis: "hsl(215, 20%, 55%)",
    brush_fill: "hsl(222, 47%, 11%)",
    gauge_track: "hsl(217, 33%, 20%)",
    normal: "hsl(199, 89%, 48%)",
    warning: "hsl(38, 92%, 50%)",
    critical: "hsl(0, 72%, 51%)",
    success: "hsl(142, 71%, 45%)",
};

pub const LIGHT: Palette = Palette {
    background: "hsl(210, 40%, 98%)",
    card: "hsl(0, 0%, 100%)",
    border: "hsl(214, 32%, 91%)",
    text: "hsl(222, 47%, 11%)",
    muted: "hsl(215, 16%, 47%)",
    secondary: "hsl(210, 40%, 96%)",
    primary: "hsl(199, 95%, 32%)",
    grid: "hsl(214, 32%, 85%)",
    axis: "hsl(215, 16%, 47%)",
    brush_fill: "hsl(210, 40%, 96%)",
    gauge_track: "hsl(214, 32%, 91%)",
    normal: "hsl(199, 95%, 32%)",
    warning: "hsl(32, 95%, 44%)",
    critical: "hsl(0, 72%, 45%)",
    success: "hsl(142, 71%, 35%)",
};

/// Browser chrome colour for `<meta name="theme-color">`.
pub fn theme_color(dark: bool) -> &'static str {
    if dark {
        "#0f172a"
    } else {
        "#f8fafc"
    }
}

impl Palette {
    pub fn for_dark(dark: bool) -> Palette {
        if dark {
            DARK
        } else {
            LIGHT
        }
    }

    pub fn status(&self, status: Status) -> &'static str {
        match status {
            Status::Normal => self.normal,
            Status::Warning => self.warning,
            Status::Critical => self.critical,
        }
    }

    pub fn alert(&self, level: AlertLevel) -> &'static str {
        match level {
            AlertLevel::Warning => self.warning,
            AlertLevel::Critical => self.critical,
            AlertLevel::Resolved => self.success,
        }
    }

    /// Rounded bordered panel.
    pub fn card_style(&self) -> String {
        format!(
            "background: {}; border: 1px solid {}; border-radius: 12px; padding: 20px; color: {};",
            self.card, self.border, self.text
        )
    }
}

/// Line colour and lightness (percent) for a charted metric.
pub fn metric_color(metric: Metric) -> (&'static str, u8) {
    match metric {
        Metric::WaterLevel => ("hsl(199, 89%, 48%)", 48),
        Metric::FlowRate => ("hsl(173, 80%, 40%)", 40),
        Metric::Pressure => ("hsl(262, 83%, 58%)", 58),
        Metric::Ph => ("hsl(38, 92%, 50%)", 50),
        Metric::Turbidity => ("hsl(142, 71%, 45%)", 45),
        Metric::Temperature => ("hsl(0, 72%, 51%)", 51),
        Metric::DissolvedOxygen => ("hsl(217, 91%, 60%)", 60),
    }
}

/// Glyph shown beside a metric's name.
pub fn metric_icon(metric: Metric) -> &'static str {
    match metric {
        Metric::WaterLevel => "\u{1F4A7}",
        Metric::FlowRate => "\u{224B}",
        Metric::Pressure => "\u{23F2}",
        Metric::Ph => "\u{2697}",
        Metric::Turbidity => "\u{25D0}",
        Metric::Temperature => "\u{1F321}",
        Metric::DissolvedOxygen => "\u{1F4A8}",
    }
}

/// Media-query classes for the parts of the layout that inline styles
/// cannot express.
pub const RESPONSIVE_CSS: &str = "
.wtd-desktop-only { display: none; }
.wtd-mobile-only { display: block; }
@media (min-width: 1024px) {
  .wtd-desktop-only { display: flex; }
  .wtd-mobile-only { display: none !important; }
}
.wtd-grid-gauges { display: grid; grid-template-columns: repeat(2, 1fr); gap: 24px; }
.wtd-grid-cards { display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px; }
@media (min-width: 768px) {
  .wtd-grid-gauges { grid-template-columns: repeat(3, 1fr); }
  .wtd-grid-cards { grid-template-columns: repeat(4, 1fr); }
}
@media (min-width: 1024px) {
  .wtd-grid-gauges { grid-template-columns: repeat(6, 1fr); }
}
";

/// Text colour readable on a metric's chip.
pub fn chip_text(metric: Metric) -> &'static str {
    let (_, lightness) = metric_color(metric);
    if lightness > 50 {
        "#ffffff"
    } else {
        "#0f172a"
    }
}

/// `hsl(h, s%, l%)` to `hsla(h, s%, l%, a)`.
pub fn with_alpha(hsl: &str, alpha: f64) -> String {
    match hsl.strip_prefix("hsl(").and_then(|s| s.strip_suffix(')')) {
        Some(inner) => format!("hsla({}, {})", inner, alpha),
        None => hsl.to_string(),
    }
}

/// Plot colour for an `hsl(h, s%, l%)` string. Anything else draws black.
pub fn plot_color(hsl: &str) -> HSLColor {
    let parts: Option<Vec<f64>> = hsl
        .strip_prefix("hsl(")
        .and_then(|s| s.strip_suffix(')'))
        .map(|inner| {
            inner
                .split(',')
                .filter_map(|part| part.trim().trim_end_matches('%').parse::<f64>().ok())
                .collect()
        });
    match parts.as_deref() {
        Some([h, s, l]) => HSLColor(h / 360.0, s / 100.0, l / 100.0),
        _ => HSLColor(0.0, 0.0, 0.0),
    }
}
