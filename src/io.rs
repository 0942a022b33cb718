use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;

pub mod param_parser;
pub mod write_to_csv;
pub mod write_to_vtu;

/// Per-run output directory, `outputs/run_<unix seconds>`.
pub static OUTPUT_DIR: Lazy<PathBuf> = Lazy::new(|| {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0);
    PathBuf::from("outputs").join(format!("run_{timestamp}"))
});
