//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use crate::tui::theme::ThemeKind;

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        let themes: Vec<&str> = ThemeKind::all().iter().map(ThemeKind::name).collect();

        format!(
            r#"# keyscope configuration

# Theme for keys, separator and log: {theme_list}
# KEYSCOPE_THEME env var overrides
theme = "{theme}"

# Logging configuration (RUST_LOG env var overrides)
# The keyboard view owns the terminal, so logs only go to files.
[logging]
level = "{log_level}"
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme_list = themes.join(", "),
            theme = self.theme.name(),
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
