// Aggregation core: raw box-score rows in, season and team-season summaries
// and the derived visualization datasets out. No file I/O lives here.

pub mod aggregate;
pub mod lookup;
pub mod metrics;
pub mod model;
pub mod season_index;
pub mod settings;
