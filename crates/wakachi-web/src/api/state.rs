//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::SegmentService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and the segmentation service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Segmentation Service
  ///
  /// - Production: `Arc::new(LazySegmentService::new(&config))`
  /// - Test: `Arc::new(StubSegmentService)`
  pub service: Arc<dyn SegmentService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn SegmentService>) -> Self {
    Self { config, service }
  }
}
