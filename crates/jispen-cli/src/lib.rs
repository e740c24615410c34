//! CLI library components for the JISPEN exporter.

pub mod logging;
pub mod pipeline;
