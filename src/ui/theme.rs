//! Visual theme and styling.

use console::Style;

/// startcheck's visual theme.
#[derive(Debug, Clone)]
pub struct StartcheckTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for section headers (cyan bold).
    pub header: Style,
    /// Style for subsection titles (bold).
    pub subheader: Style,
    /// Style for checked boxes (green).
    pub checked: Style,
    /// Style for unchecked boxes (dim).
    pub unchecked: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
}

impl Default for StartcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl StartcheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().cyan(),
            subheader: Style::new().bold(),
            checked: Style::new().green(),
            unchecked: Style::new().dim(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            subheader: Style::new(),
            checked: Style::new(),
            unchecked: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a section header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a subsection title.
    pub fn format_subheader(&self, title: &str) -> String {
        format!("{}", self.subheader.apply_to(title))
    }

    /// Format a hint line.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("{}", self.hint.apply_to(hint))
    }

    /// Format a checkbox line, e.g. `[x] Check oil level`.
    pub fn format_checkbox(&self, checked: bool, label: &str) -> String {
        if checked {
            format!("{} {}", self.checked.apply_to("[x]"), label)
        } else {
            format!("{} {}", self.unchecked.apply_to("[ ]"), label)
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = StartcheckTheme::plain();
        let msg = theme.format_success("Saved");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Saved"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = StartcheckTheme::plain();
        let msg = theme.format_warning("Unsaved changes");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Unsaved changes"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = StartcheckTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn theme_formats_checkboxes() {
        let theme = StartcheckTheme::plain();
        assert_eq!(theme.format_checkbox(true, "Oil level"), "[x] Oil level");
        assert_eq!(theme.format_checkbox(false, "Oil level"), "[ ] Oil level");
    }

    #[test]
    fn plain_header_is_unstyled() {
        let theme = StartcheckTheme::plain();
        assert_eq!(theme.format_header("1. Pre-Start Checks"), "1. Pre-Start Checks");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = StartcheckTheme::default();
        let new = StartcheckTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
