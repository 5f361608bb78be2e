// Configuration constants for the search driver
use std::time::Duration;

pub const SOURCE_NUMBER_COUNT: usize = 6;
pub const MAX_EQUATION_LEN: usize = 2 * SOURCE_NUMBER_COUNT - 1;
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);
pub const DEFAULT_CHECK_INTERVAL: u64 = 1_000;
pub const DEFAULT_DEDUP_CAPACITY: usize = 1_000_000;
