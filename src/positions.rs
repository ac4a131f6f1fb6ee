/// Sort rank assigned to position codes the dataset doesn't map.
pub const UNKNOWN_RANK: u32 = 999;

/// Map a position code to its roster sort rank.
///
/// Rosters are always displayed in role order (leader first, coach last).
/// Codes outside the table sort after every mapped code.
pub fn rank(code: &str) -> u32 {
    match code {
        "IGL" => 1,
        "AWP" => 2,
        "Lurker" => 3,
        "Rifler" => 4,
        "Support" => 5,
        "Coach" => 6,
        _ => UNKNOWN_RANK,
    }
}
