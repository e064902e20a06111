//! CLI command handlers, one per file.

mod completions;
mod decode;
mod diagram;
mod url;

pub use completions::run_completions;
pub use decode::run_decode;
pub use diagram::run_diagram;
pub use url::run_url;
