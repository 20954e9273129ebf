//! Document rendering
//!
//! The archiver never converts markup itself; it hands each entry link to an
//! external render service and stores whatever artifact bytes come back.
//! - `traits` defines the [`DocumentRenderer`] seam and [`RenderError`]
//! - `http` is the render service client
//! - `retry` is the optional transient-failure decorator

pub mod http;
pub mod retry;
pub mod traits;

pub use http::HttpRenderer;
pub use retry::RetryingRenderer;
pub use traits::{DocumentRenderer, RenderError};

/// Fixed page/style configuration passed through to the render service
///
/// Opaque to the archiver: Letter pages with the archive margins, and float
/// suppression so themed layouts collapse into a single printable column.
pub const PAGE_STYLESHEET: &str = r#"
@page {
    size: Letter;
    margin: 0in 0.44in 0.2in 0.44in;
}

.content-area {
    float: none !important;
    margin: 5 !important;
}

.alignright, .alignleft, * {
    float: none !important;
}
"#;
