use crate::Chips;
use crate::LEVELS;

/// Blind level for `hand`, counting from the hand that opened the
/// current schedule. Holds at the top level once it is reached.
pub fn level(hand: u64, origin: u64, hands_per_level: u64) -> usize {
    let played = hand.saturating_sub(origin);
    let level = played / hands_per_level.max(1);
    (level as usize).min(LEVELS.len() - 1)
}

/// (small, big) for a level index.
pub fn blinds(level: usize) -> (Chips, Chips) {
    LEVELS[level.min(LEVELS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_hands_per_level() {
        assert_eq!(level(1, 1, 8), 0);
        assert_eq!(level(8, 1, 8), 0);
        assert_eq!(level(9, 1, 8), 1);
        assert_eq!(level(17, 1, 8), 2);
        assert_eq!(blinds(level(9, 1, 8)), (15, 30));
    }

    #[test]
    fn schedule_restarts_from_origin() {
        assert_eq!(level(40, 40, 8), 0);
        assert_eq!(level(48, 40, 8), 1);
    }

    #[test]
    fn top_level_holds() {
        assert_eq!(level(10_000, 1, 8), LEVELS.len() - 1);
        assert_eq!(blinds(99), (200, 400));
    }
}
