// Game identifier -> season lookup built from the games table.

use std::collections::HashMap;

use crate::model::{parse_season, GameRow};

/// Maps a game identifier to the season it was played in.
///
/// A game missing from the index has an unknown season and is excluded from
/// every downstream aggregate.
#[derive(Debug, Clone, Default)]
pub struct GameSeasonIndex {
    seasons: HashMap<String, i32>,
}

impl GameSeasonIndex {
    /// Build the index in one pass. Rows with a missing or non-integer season
    /// are skipped; for duplicate game identifiers the last row wins.
    pub fn build<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a GameRow>,
    {
        let mut seasons = HashMap::new();
        for row in rows {
            let Some(season) = parse_season(row.season.as_deref()) else {
                continue;
            };
            seasons.insert(row.game_id.clone(), season);
        }
        Self { seasons }
    }

    pub fn season_of(&self, game_id: &str) -> Option<i32> {
        self.seasons.get(game_id).copied()
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, season: Option<&str>) -> GameRow {
        GameRow {
            game_id: id.to_string(),
            season: season.map(str::to_string),
        }
    }

    #[test]
    fn skips_unparsable_seasons() {
        let rows = vec![
            game("1", Some("2015")),
            game("2", None),
            game("3", Some("twenty")),
        ];
        let index = GameSeasonIndex::build(&rows);
        assert_eq!(index.len(), 1);
        assert_eq!(index.season_of("1"), Some(2015));
        assert_eq!(index.season_of("2"), None);
        assert_eq!(index.season_of("3"), None);
    }

    #[test]
    fn duplicate_game_last_row_wins() {
        let rows = vec![game("1", Some("2014")), game("1", Some("2015"))];
        let index = GameSeasonIndex::build(&rows);
        assert_eq!(index.season_of("1"), Some(2015));
    }

    #[test]
    fn unknown_game_has_no_season() {
        let index = GameSeasonIndex::build(&Vec::<GameRow>::new());
        assert!(index.is_empty());
        assert_eq!(index.season_of("42"), None);
    }
}
