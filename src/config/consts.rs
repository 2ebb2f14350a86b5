// src/config/consts.rs

// Net config
pub const DEFAULT_BASE_URL: &str = "https://cricbuzz-cricket.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "cricbuzz-cricket.p.rapidapi.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "cric_dash/0.3";

pub const HEADER_API_KEY: &str = "x-rapidapi-key";
pub const HEADER_API_HOST: &str = "x-rapidapi-host";

// Endpoints (relative to base url)
pub const SERIES_PATH: &str = "/series/v1";
pub const RANKINGS_PATH: &str = "/stats/v1/rankings";
pub const RECORDS_PATH: &str = "/stats/v1/topstats/0";

// Environment overrides
pub const ENV_API_KEY: &str = "CRIC_DASH_API_KEY";
pub const ENV_API_HOST: &str = "CRIC_DASH_API_HOST";
pub const ENV_BASE_URL: &str = "CRIC_DASH_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "CRIC_DASH_TIMEOUT_SECS";

// Config file, looked up in the working directory
pub const CONFIG_FILE: &str = "cric_dash.toml";

// Logging
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Known filter domains. The fetcher passes values through unchecked;
// these only feed selectors and CLI help.
pub const SERIES_TYPES: [&str; 4] = ["international", "league", "domestic", "women"];
pub const FORMAT_TYPES: [&str; 3] = ["test", "odi", "t20"];
pub const CATEGORIES: [&str; 4] = ["batsmen", "bowlers", "allrounders", "teams"];
pub const STATS_TYPES: [&str; 8] = [
    "mostRuns",
    "mostWickets",
    "highestScore",
    "highestAvg",
    "mostHundreds",
    "mostFifties",
    "mostSixes",
    "bestBowlingInnings",
];
