use std::time::Duration;

/// How long a recorded pathfinding failure keeps suppressing transfers
/// between the same ordered building pair.
pub const RECENT_FAILURE_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Default maximum Manhattan distance (grid cells) between matched offers.
pub const DEFAULT_MAX_MATCH_DISTANCE: i32 = 120;
