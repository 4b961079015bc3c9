// Typed input rows and the data-cleaning helpers applied to their fields.
//
// Every numeric or season field is kept as the raw cell text so that a
// malformed value never fails the whole row at deserialization time. The
// helpers below turn that text into numbers under two policies:
// parse-or-default (box-score counts) and parse-or-skip (seasons, dates).

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Input rows
// ---------------------------------------------------------------------------

/// One row of the games table.
#[derive(Debug, Clone, Deserialize)]
pub struct GameRow {
    #[serde(rename = "GAME_ID")]
    pub game_id: String,
    #[serde(rename = "SEASON", default)]
    pub season: Option<String>,
}

/// One per-player box-score row of the game-details table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoxScoreRow {
    #[serde(rename = "GAME_ID")]
    pub game_id: String,
    #[serde(rename = "TEAM_ID")]
    pub team_id: String,
    #[serde(rename = "FGM", default)]
    pub fgm: Option<String>,
    #[serde(rename = "FGA", default)]
    pub fga: Option<String>,
    #[serde(rename = "FG3M", default)]
    pub fg3m: Option<String>,
    #[serde(rename = "FG3A", default)]
    pub fg3a: Option<String>,
    #[serde(rename = "FTM", default)]
    pub ftm: Option<String>,
    #[serde(rename = "FTA", default)]
    pub fta: Option<String>,
    #[serde(rename = "PTS", default)]
    pub pts: Option<String>,
}

/// One row of the teams table.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRow {
    #[serde(rename = "TEAM_ID")]
    pub team_id: String,
    #[serde(rename = "NICKNAME", default)]
    pub nickname: Option<String>,
    #[serde(rename = "CITY", default)]
    pub city: Option<String>,
    #[serde(rename = "ABBREVIATION", default)]
    pub abbreviation: Option<String>,
}

/// One dated standings snapshot row of the rankings table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsRow {
    #[serde(rename = "TEAM_ID")]
    pub team_id: String,
    #[serde(rename = "SEASON_ID", default)]
    pub season_id: Option<String>,
    #[serde(rename = "STANDINGSDATE", default)]
    pub standings_date: Option<String>,
    #[serde(rename = "CONFERENCE", default)]
    pub conference: Option<String>,
    #[serde(rename = "TEAM", default)]
    pub team: Option<String>,
    #[serde(rename = "W", default)]
    pub wins: Option<String>,
    #[serde(rename = "L", default)]
    pub losses: Option<String>,
}

// ---------------------------------------------------------------------------
// Parse helpers
// ---------------------------------------------------------------------------

/// Parse a numeric cell, treating a missing, empty, or non-numeric value as 0.0.
/// Non-finite parses (`NaN`, `inf`) are also absorbed as 0.0.
pub fn parse_or_zero(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a season cell as an integer year. `None` means the row must be skipped.
pub fn parse_season(raw: Option<&str>) -> Option<i32> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i32>().ok())
}

/// Season year encoded in the trailing four characters of a season identifier
/// (e.g. `22015` -> 2015). Shorter identifiers are parsed whole.
pub fn season_from_id(season_id: &str) -> Option<i32> {
    let season_id = season_id.trim();
    if season_id.is_empty() {
        return None;
    }
    let start = season_id
        .char_indices()
        .rev()
        .nth(3)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    season_id[start..].parse::<i32>().ok()
}

/// Trimmed owned text, empty when the cell is absent.
pub fn trimmed(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

/// Round to a fixed number of decimal places for output stability.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `numerator / denominator`, or 0.0 when the denominator is zero.
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_zero_coerces_bad_values() {
        assert_eq!(parse_or_zero(Some("12")), 12.0);
        assert_eq!(parse_or_zero(Some(" 3.5 ")), 3.5);
        assert_eq!(parse_or_zero(Some("")), 0.0);
        assert_eq!(parse_or_zero(Some("DNP")), 0.0);
        assert_eq!(parse_or_zero(Some("NaN")), 0.0);
        assert_eq!(parse_or_zero(None), 0.0);
    }

    #[test]
    fn parse_season_skips_non_integers() {
        assert_eq!(parse_season(Some("2015")), Some(2015));
        assert_eq!(parse_season(Some(" 2003 ")), Some(2003));
        assert_eq!(parse_season(Some("2015.5")), None);
        assert_eq!(parse_season(Some("")), None);
        assert_eq!(parse_season(None), None);
    }

    #[test]
    fn season_from_id_uses_trailing_four_chars() {
        assert_eq!(season_from_id("22015"), Some(2015));
        assert_eq!(season_from_id("12019"), Some(2019));
        assert_eq!(season_from_id("2008"), Some(2008));
        assert_eq!(season_from_id("999"), Some(999));
        assert_eq!(season_from_id("2201X"), None);
        assert_eq!(season_from_id(""), None);
    }

    #[test]
    fn rounding_and_ratios() {
        assert_eq!(round_to(0.424_242, 4), 0.4242);
        assert_eq!(round_to(104.123_456, 3), 104.123);
        assert_eq!(ratio_or_zero(5.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(5.0, 10.0), 0.5);
    }

    #[test]
    fn trimmed_defaults_to_empty() {
        assert_eq!(trimmed(Some("  Lakers ")), "Lakers");
        assert_eq!(trimmed(None), "");
    }
}
