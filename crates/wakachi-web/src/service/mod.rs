//! サービスモジュール
mod segment_service;

pub use segment_service::{LazySegmentService, SegmentService};
