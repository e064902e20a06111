pub mod config;
pub mod diagram;
pub mod error;
pub mod logging;
pub mod payload;
pub mod render_url;

pub use error::LinkError;
