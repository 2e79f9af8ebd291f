//! Visual theme for the report's status tags.

use console::Style;

/// Bracketed status tag that leads a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Ok,
    Warning,
    Missing,
    Optional,
    NotInstalled,
    AlwaysAvailable,
    Info,
    NotSet,
}

impl Tag {
    /// The tag as printed, brackets included.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warning => "[WARNING]",
            Self::Missing => "[MISSING]",
            Self::Optional => "[OPTIONAL]",
            Self::NotInstalled => "[NOT INSTALLED]",
            Self::AlwaysAvailable => "[ALWAYS AVAILABLE]",
            Self::Info => "[INFO]",
            Self::NotSet => "[NOT SET]",
        }
    }
}

/// Report theme.
#[derive(Debug, Clone)]
pub struct ReportTheme {
    /// Style for `[OK]` (green).
    pub ok: Style,
    /// Style for `[WARNING]` and `[NOT INSTALLED]` (orange).
    pub warning: Style,
    /// Style for `[MISSING]` (red bold).
    pub missing: Style,
    /// Style for `[OPTIONAL]` and `[NOT SET]` (yellow).
    pub optional: Style,
    /// Style for `[INFO]` and `[ALWAYS AVAILABLE]` (magenta).
    pub info: Style,
    /// Style for banners and section headers (bold).
    pub header: Style,
    /// Style for install hints and continuation lines (dim).
    pub hint: Style,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportTheme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            ok: Style::new().green(),
            warning: Style::new().color256(208),
            missing: Style::new().red().bold(),
            optional: Style::new().yellow(),
            info: Style::new().magenta(),
            header: Style::new().bold(),
            hint: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            ok: Style::new(),
            warning: Style::new(),
            missing: Style::new(),
            optional: Style::new(),
            info: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Pick the coloured or plain theme.
    pub fn for_terminal(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a tag in its style.
    pub fn format_tag(&self, tag: Tag) -> String {
        let style = match tag {
            Tag::Ok => &self.ok,
            Tag::Warning | Tag::NotInstalled => &self.warning,
            Tag::Missing => &self.missing,
            Tag::Optional | Tag::NotSet => &self.optional,
            Tag::Info | Tag::AlwaysAvailable => &self.info,
        };
        format!("{}", style.apply_to(tag.label()))
    }

    /// Format a header or banner line.
    pub fn format_header(&self, text: &str) -> String {
        format!("{}", self.header.apply_to(text))
    }

    /// Format a hint line.
    pub fn format_hint(&self, text: &str) -> String {
        format!("{}", self.hint.apply_to(text))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
