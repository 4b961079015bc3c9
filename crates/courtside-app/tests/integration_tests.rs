// Integration tests for the courtside pipeline.
//
// These run the full load -> aggregate -> build -> write path against the
// CSV fixtures in tests/fixtures/data and check the resulting datasets.

use std::fs;
use std::path::{Path, PathBuf};

use courtside_app::config::{Config, PathsConfig};
use courtside_app::loader;
use courtside_app::output;
use courtside_app::pipeline::{self, Datasets};
use courtside_core::settings::{MomentumWeights, SeasonThresholds};

// ===========================================================================
// Test helpers
// ===========================================================================

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data")
}

fn fixture_datasets() -> Datasets {
    let inputs = loader::load_all(&fixture_dir()).expect("fixtures should load");
    pipeline::build_datasets(
        &inputs,
        &SeasonThresholds::default(),
        &MomentumWeights::default(),
    )
}

fn config_for(output_dir: &Path) -> Config {
    Config {
        paths: PathsConfig {
            data_dir: fixture_dir().display().to_string(),
            output_dir: output_dir.display().to_string(),
        },
        ..Config::default()
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ===========================================================================
// Dataset contents
// ===========================================================================

#[test]
fn league_trends_from_fixtures() {
    let datasets = fixture_datasets();
    let trends = &datasets.league_trends;

    // 1999 is below the season floor and the season-less game is unknown.
    let seasons: Vec<i32> = trends.iter().map(|t| t.season).collect();
    assert_eq!(seasons, vec![2015, 2016]);

    assert_eq!(trends[0].team_games, 4);
    assert!(approx(trends[0].avg_three_attempts, 9.5));
    assert!(approx(trends[0].avg_three_rate, 0.3551));
    assert!(approx(trends[0].avg_points, 36.25));
    assert!(approx(trends[0].avg_three_pct, 0.3684));

    assert_eq!(trends[1].team_games, 2);
    assert!(approx(trends[1].avg_three_attempts, 11.5));
    assert!(approx(trends[1].avg_three_rate, 0.3151));
    assert!(approx(trends[1].avg_points, 44.0));
    assert!(approx(trends[1].avg_three_pct, 0.3478));
}

#[test]
fn scoring_mix_from_fixtures() {
    let datasets = fixture_datasets();
    let mix = &datasets.scoring_mix;
    assert_eq!(mix.len(), 2);

    assert_eq!(mix[0].season, 2015);
    assert!(approx(mix[0].two_pct, 0.5379));
    assert!(approx(mix[0].three_pct, 0.2897));
    assert!(approx(mix[0].ft_pct, 0.1724));

    assert_eq!(mix[1].season, 2016);
    assert!(approx(mix[1].two_pct, 0.5909));
    assert!(approx(mix[1].three_pct, 0.2727));
    assert!(approx(mix[1].ft_pct, 0.1364));
}

#[test]
fn team_scatter_from_fixtures() {
    let datasets = fixture_datasets();
    let scatter = &datasets.team_scatter;

    let order: Vec<(i32, &str)> = scatter.iter().map(|r| (r.season, r.team.as_str())).collect();
    assert_eq!(
        order,
        vec![
            (2015, "Cavaliers"),
            (2015, "Warriors"),
            (2016, "Seattle"),
            (2016, "Warriors"),
        ]
    );

    let warriors = &scatter[1];
    assert_eq!(warriors.team_id, "1");
    assert_eq!(warriors.city, "Golden State");
    assert_eq!(warriors.abbr, "GSW");
    assert_eq!(warriors.conference, "West");
    assert!(approx(warriors.avg_three_attempts, 11.5));
    assert!(approx(warriors.three_pct, 0.3913));
    assert!(approx(warriors.three_rate, 0.4423));
    // The later-dated snapshot wins over the December one.
    assert_eq!(warriors.win_pct, Some(0.8902));
    assert_eq!(warriors.wins, Some(73.0));
    assert_eq!(warriors.losses, Some(9.0));
    assert_eq!(warriors.games_played, 2);

    // No metadata and no decisions: standings name, empty metadata, null pct.
    let seattle = &scatter[2];
    assert_eq!(seattle.abbr, "");
    assert_eq!(seattle.conference, "West");
    assert_eq!(seattle.win_pct, None);
    assert_eq!(seattle.wins, Some(0.0));
    assert_eq!(seattle.games_played, 1);
}

#[test]
fn heatmap_and_map_from_fixtures() {
    let datasets = fixture_datasets();
    assert_eq!(datasets.three_heatmap.len(), 4);
    let cavs = &datasets.three_heatmap[0];
    assert_eq!(cavs.team, "Cavaliers");
    assert!(approx(cavs.points_per_game, 37.5));
    assert!(approx(cavs.attempts_per_game, 7.5));

    // Latest season only; Seattle has no coordinates.
    let map = &datasets.team_map;
    assert_eq!(map.len(), 1);
    assert_eq!(map[0].season, 2016);
    assert_eq!(map[0].abbr, "GSW");
    assert!(approx(map[0].off_rtg, 46.0));
    assert!(approx(map[0].three_rate, 0.4286));
    assert!(approx(map[0].three_pct, 0.4));
    assert_eq!(map[0].wins, Some(67.0));
    assert!(approx(map[0].lat, 37.768));
}

#[test]
fn momentum_from_fixtures() {
    let datasets = fixture_datasets();
    let momentum = &datasets.momentum;
    assert_eq!(momentum.len(), 2);
    assert_eq!(momentum[0].season, 2015);
    assert!(approx(momentum[0].momentum, 0.85));
    assert!(approx(momentum[1].momentum, 0.15));
    assert!(approx(momentum[1].avg_points, 44.0));
}

#[test]
fn scoring_components_reconstruct_points() {
    let datasets = fixture_datasets();
    for mix in &datasets.scoring_mix {
        assert!(mix.two_pct >= 0.0 && mix.three_pct >= 0.0 && mix.ft_pct >= 0.0);
        assert!((mix.two_pct + mix.three_pct + mix.ft_pct - 1.0).abs() < 1e-3);
    }
}

// ===========================================================================
// Full runs
// ===========================================================================

#[test]
fn run_writes_all_six_files() {
    let tmp = std::env::temp_dir().join("courtside_it_full_run");
    let _ = fs::remove_dir_all(&tmp);

    let written = pipeline::run_in(&tmp, &config_for(&tmp.join("public/data"))).unwrap();
    assert_eq!(written.len(), 6);

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            output::LEAGUE_TRENDS_FILE,
            output::SCORING_MIX_FILE,
            output::TEAM_SCATTER_FILE,
            output::THREE_HEATMAP_FILE,
            output::TEAM_MAP_FILE,
            output::MOMENTUM_FILE,
        ]
    );

    let scatter: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written[2]).unwrap()).unwrap();
    let first = &scatter[0];
    assert_eq!(first["season"], 2015);
    assert_eq!(first["team"], "Cavaliers");
    assert_eq!(first["teamId"], "2");
    assert_eq!(first["gamesPlayed"], 2);
    assert!(first.get("avgThreeAttempts").is_some());
    assert!(scatter[2]["winPct"].is_null());

    let momentum: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written[5]).unwrap()).unwrap();
    assert_eq!(momentum.as_array().unwrap().len(), 2);
    assert!(momentum[0].get("momentum").is_some());

    let _ = fs::remove_dir_all(&tmp);
}

#[test]
fn missing_input_aborts_without_output() {
    let tmp = std::env::temp_dir().join("courtside_it_missing_input");
    let _ = fs::remove_dir_all(&tmp);
    fs::create_dir_all(tmp.join("data")).unwrap();
    fs::copy(fixture_dir().join("games.csv"), tmp.join("data/games.csv")).unwrap();

    let config = Config {
        paths: PathsConfig {
            data_dir: "data".into(),
            output_dir: "out".into(),
        },
        ..Config::default()
    };
    let err = pipeline::run_in(&tmp, &config).unwrap_err();
    assert!(format!("{err:#}").contains("games_details.csv"));
    assert!(!tmp.join("out").exists());

    let _ = fs::remove_dir_all(&tmp);
}

#[test]
fn raised_season_floor_drops_earlier_seasons() {
    let inputs = loader::load_all(&fixture_dir()).unwrap();
    let seasons = SeasonThresholds {
        min_season: 2016,
        ..SeasonThresholds::default()
    };
    let datasets = pipeline::build_datasets(&inputs, &seasons, &MomentumWeights::default());
    assert_eq!(datasets.league_trends.len(), 1);
    assert_eq!(datasets.league_trends[0].season, 2016);
    assert!(datasets.team_scatter.iter().all(|r| r.season == 2016));
    assert_eq!(datasets.momentum[0].momentum, 0.0);
}

#[test]
fn short_and_non_utf8_rows_still_count() {
    let tmp = std::env::temp_dir().join("courtside_it_dirty_rows");
    let _ = fs::remove_dir_all(&tmp);
    fs::create_dir_all(tmp.join("data")).unwrap();
    for file in ["games.csv", "teams.csv", "ranking.csv"] {
        fs::copy(fixture_dir().join(file), tmp.join("data").join(file)).unwrap();
    }

    let mut details =
        b"GAME_ID,TEAM_ID,PLAYER_NAME,FGM,FGA,FG3M,FG3A,FTM,FTA,PTS,PLUS_MINUS\n".to_vec();
    details.extend_from_slice(b"21500001,1,Curry,10,20,5,10,4,5,29,8\n");
    details.extend_from_slice(b"21500001,1,Don\xE8ic,2,4,0,1,0,0,4,-2\n");
    details.extend_from_slice(b"21500001,2,Truncated,2,4\n");
    fs::write(tmp.join("data").join(loader::GAME_DETAILS_FILE), details).unwrap();

    let inputs = loader::load_all(&tmp.join("data")).unwrap();
    assert_eq!(inputs.box_scores.len(), 3);

    let datasets = pipeline::build_datasets(
        &inputs,
        &SeasonThresholds::default(),
        &MomentumWeights::default(),
    );
    let trend = &datasets.league_trends[0];
    assert_eq!(trend.season, 2015);
    assert_eq!(trend.team_games, 2);
    // Team 1 scores 33, the truncated team 2 line has no PTS cell.
    assert!(approx(trend.avg_points, 16.5));

    let _ = fs::remove_dir_all(&tmp);
}
