//! モデルモジュール

mod form;
mod row;

pub use form::SegmentForm;
pub use row::ResultRow;
