// JSON dataset writing.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::pipeline::Datasets;

pub const LEAGUE_TRENDS_FILE: &str = "league_trends.json";
pub const SCORING_MIX_FILE: &str = "scoring_mix.json";
pub const TEAM_SCATTER_FILE: &str = "team_scatter.json";
pub const THREE_HEATMAP_FILE: &str = "three_heatmap.json";
pub const TEAM_MAP_FILE: &str = "team_map.json";
pub const MOMENTUM_FILE: &str = "momentum_spiral.json";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Serialize `records` as a pretty-printed JSON array into `path`.
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<(), OutputError> {
    let body = serde_json::to_string_pretty(records).map_err(|e| OutputError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, body).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write all six datasets into `output_dir`, creating it if needed.
/// Returns the written paths in a fixed order.
pub fn write_datasets(output_dir: &Path, datasets: &Datasets) -> Result<Vec<PathBuf>, OutputError> {
    std::fs::create_dir_all(output_dir).map_err(|e| OutputError::CreateDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let target = |name: &str| output_dir.join(name);
    let written = vec![
        target(LEAGUE_TRENDS_FILE),
        target(SCORING_MIX_FILE),
        target(TEAM_SCATTER_FILE),
        target(THREE_HEATMAP_FILE),
        target(TEAM_MAP_FILE),
        target(MOMENTUM_FILE),
    ];

    write_json(&written[0], &datasets.league_trends)?;
    write_json(&written[1], &datasets.scoring_mix)?;
    write_json(&written[2], &datasets.team_scatter)?;
    write_json(&written[3], &datasets.three_heatmap)?;
    write_json(&written[4], &datasets.team_map)?;
    write_json(&written[5], &datasets.momentum)?;

    Ok(written)
}
