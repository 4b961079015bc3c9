// Batch pipeline: load inputs, aggregate, build every dataset, write JSON.
//
// Stages run strictly in order. Nothing is written until all six datasets
// are built, so a failed load leaves the output directory untouched.

use anyhow::Context;
use chrono::Utc;
use courtside_core::aggregate::{aggregate_team_games, reduce_seasons};
use courtside_core::lookup::{StandingsIndex, TeamMetadataIndex};
use courtside_core::metrics::{
    build_league_trends, build_momentum_series, build_scoring_mix, build_team_map,
    build_team_scatter, build_three_heatmap, GeoSnapshotRow, HeatmapRow, LeagueTrend,
    MomentumPoint, ScoringMix, TeamScatterRow,
};
use courtside_core::season_index::GameSeasonIndex;
use courtside_core::settings::{MomentumWeights, SeasonThresholds};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::loader::{self, InputTables};
use crate::output;

/// The six derived datasets of one run.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub league_trends: Vec<LeagueTrend>,
    pub scoring_mix: Vec<ScoringMix>,
    pub team_scatter: Vec<TeamScatterRow>,
    pub three_heatmap: Vec<HeatmapRow>,
    pub team_map: Vec<GeoSnapshotRow>,
    pub momentum: Vec<MomentumPoint>,
}

/// Run every aggregation stage and metric builder over loaded inputs.
pub fn build_datasets(
    inputs: &InputTables,
    seasons: &SeasonThresholds,
    weights: &MomentumWeights,
) -> Datasets {
    let season_index = GameSeasonIndex::build(&inputs.games);
    info!("Season index covers {} games", season_index.len());

    let team_games = aggregate_team_games(&inputs.box_scores, &season_index, seasons.min_season);
    let aggregates = reduce_seasons(team_games.values());
    info!(
        "Aggregated {} team-games into {} seasons / {} team-seasons",
        team_games.len(),
        aggregates.seasons.len(),
        aggregates.team_seasons.len()
    );

    let metadata = TeamMetadataIndex::build(&inputs.teams);
    let standings = StandingsIndex::build(&inputs.standings, seasons.min_season);
    info!(
        "Lookups ready: {} teams, {} standings records",
        metadata.len(),
        standings.len()
    );

    let league_trends = build_league_trends(&aggregates.seasons);
    let momentum = build_momentum_series(&league_trends, weights);

    Datasets {
        scoring_mix: build_scoring_mix(&aggregates.seasons),
        team_scatter: build_team_scatter(
            &aggregates,
            &metadata,
            &standings,
            seasons.scatter_min_season,
        ),
        three_heatmap: build_three_heatmap(
            &aggregates,
            &metadata,
            &standings,
            seasons.heatmap_min_season,
        ),
        team_map: build_team_map(&aggregates, &metadata, &standings),
        league_trends,
        momentum,
    }
}

/// Full run relative to `base_dir`: returns the paths of the written files.
pub fn run_in(base_dir: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let started = Utc::now();
    let data_dir = base_dir.join(&config.paths.data_dir);
    let output_dir = base_dir.join(&config.paths.output_dir);

    let inputs = loader::load_all(&data_dir)
        .with_context(|| format!("failed to load input tables from {}", data_dir.display()))?;

    let datasets = build_datasets(&inputs, &config.seasons, &config.momentum);
    info!(
        "Built datasets: {} trends, {} mix, {} scatter, {} heatmap, {} map, {} momentum",
        datasets.league_trends.len(),
        datasets.scoring_mix.len(),
        datasets.team_scatter.len(),
        datasets.three_heatmap.len(),
        datasets.team_map.len(),
        datasets.momentum.len()
    );

    let written = output::write_datasets(&output_dir, &datasets)
        .context("failed to write output datasets")?;
    info!(
        "Wrote {} datasets to {} in {} ms",
        written.len(),
        output_dir.display(),
        (Utc::now() - started).num_milliseconds()
    );
    Ok(written)
}

/// Full run relative to the current working directory.
pub fn run(config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    run_in(&cwd, config)
}
