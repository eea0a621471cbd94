//! wakachi-web crate
//!
//! Web form serving Japanese text segmentation over HTTP.
//!
//! ## Endpoints
//! - `GET /` - Empty segmentation form
//! - `POST /` - Segment the submitted text and render the result table
//! - `GET /healthz` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5000/ \
//!   -d 'text=東京タワーは東京の観光名所です' \
//!   -d 'pos_filter=名詞動詞'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;
pub mod view;

pub use api::AppState;
pub use config::Config;
pub use errors::ApiError;
pub use models::{ResultRow, SegmentForm};
pub use service::{LazySegmentService, SegmentService};
