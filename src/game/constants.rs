// Number pools and target range used when generating games
use std::ops::RangeInclusive;

pub const SMALL_NUMBERS: [i64; 20] = [
    1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10,
];
pub const LARGE_NUMBERS: [i64; 4] = [25, 50, 75, 100];
pub const TARGET_RANGE: RangeInclusive<i64> = 100..=999;
pub const MIN_SMALL: usize = 2;
