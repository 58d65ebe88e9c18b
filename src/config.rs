use std::borrow::Cow;
use std::path::PathBuf;

use crate::cli::entry::GlobalOptions;

pub const DEFAULT_OUTPUT_DIR: &str = "outputs";
pub const RESULTS_FILE: &str = "results.txt";

/// Process-wide configuration, resolved once at startup and handed to the
/// components that need it.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding user-created files and the results report.
    pub output_dir: PathBuf,
    /// Whether debug-mode console notices are printed.
    pub debug: bool,
}

impl Settings {
    pub fn from_options(options: &GlobalOptions) -> Self {
        Self {
            output_dir: options.output_dir.clone(),
            debug: !options.no_debug,
        }
    }

    /// Display name of the output directory, as used in user-facing messages.
    pub fn dir_name(&self) -> Cow<'_, str> {
        match self.output_dir.file_name() {
            Some(name) => name.to_string_lossy(),
            None => self.output_dir.to_string_lossy(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            debug: true,
        }
    }
}
