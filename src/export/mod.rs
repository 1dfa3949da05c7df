// src/export/mod.rs

mod clipboard;
mod csv;
pub mod fs_utils;
mod json;
pub mod logic;
pub mod model;
mod text;

pub use logic::{ExportLogic, ExportTarget};
pub use model::{DayExport, ItemExport};

use clap::ValueEnum;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Text,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "text",
        }
    }
}
