pub mod engine;
pub mod pipeline;
pub mod reader;
pub mod render;
pub mod template;

pub use crate::domain::model::{ContactLog, LogRecord, LogTable, RenderedPage, StationProfile};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
