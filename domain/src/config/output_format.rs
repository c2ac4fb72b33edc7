//! Output format value object

use serde::{Deserialize, Serialize};

/// How prediction results are rendered
///
/// This is a domain concept shared by the config file and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored result box (default)
    #[default]
    Pretty,
    /// Single uncolored line
    Plain,
    /// JSON output
    Json,
}
