//! Output generation for processed articles.
//!
//! Writers receive an explicit [`OutputContext`] instead of reaching for a
//! shared global; it is built once per run in `main`.
//!
//! # Submodules
//!
//! - [`json`]: One JSON document per processed article
//! - [`bulk_load`]: CSV of word rows for loading into the vocabulary table
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── json/
//! │   └── 2025-05-06/
//! │       ├── 0b6f…c1.json
//! │       └── 7d2a…94.json
//! └── word_events_2025-05-06.csv
//! ```

pub mod bulk_load;
pub mod json;

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Where and under which date a run writes its outputs.
#[derive(Debug, Clone)]
pub struct OutputContext {
    json_dir: PathBuf,
    csv_path: PathBuf,
    run_date: NaiveDate,
}

impl OutputContext {
    pub fn new(output_dir: impl AsRef<Path>, run_date: NaiveDate) -> Self {
        let output_dir = output_dir.as_ref();
        Self {
            json_dir: output_dir.join("json").join(run_date.to_string()),
            csv_path: output_dir.join(format!("word_events_{run_date}.csv")),
            run_date,
        }
    }

    /// Directory holding this run's article JSON files.
    pub fn json_dir(&self) -> &Path {
        &self.json_dir
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn run_date(&self) -> NaiveDate {
        self.run_date
    }

    pub fn article_json_path(&self, article_id: Uuid) -> PathBuf {
        self.json_dir.join(format!("{article_id}.json"))
    }
}
