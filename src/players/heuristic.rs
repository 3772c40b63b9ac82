//! Cheap hand-strength estimates in `[0, 1]` for the scripted seats.
//!
//! Preflop uses a formula over the two hole cards. Postflop evaluates
//! the best hand made so far, maps its category onto a fixed table, and
//! adds small bonuses for a top kicker and for live draws.
use crate::Probability;
use crate::cards::board::Board;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::rank::Rank;
use crate::cards::strength::Strength;
use crate::cards::street::Street;
use crate::cards::suit::Suit;

/// Base score per hand category, High Card through Straight Flush.
const CATEGORY: [Probability; 9] = [0.26, 0.46, 0.58, 0.68, 0.78, 0.84, 0.92, 0.96, 0.99];

/// Strength of a hole against whatever part of the board is public.
pub fn estimate(hole: Hole, board: &Board) -> Probability {
    if board.is_empty() {
        preflop(hole)
    } else {
        postflop(hole, board)
    }
}

pub fn preflop(hole: Hole) -> Probability {
    let (hi, lo) = hole.sorted();
    let high = hi.rank().value() as Probability;
    let low = lo.rank().value() as Probability;
    let mut score = 0.15;
    score += (high - 2.) / 16. * 0.34;
    if hole.paired() {
        score += 0.33;
    }
    if hole.suited() {
        score += 0.08;
    }
    if high - low <= 2. {
        score += 0.08;
    }
    if high >= 11. && low >= 10. {
        score += 0.12;
    }
    score.clamp(0.08, 0.97)
}

pub fn postflop(hole: Hole, board: &Board) -> Probability {
    let hand = Hand::add(Hand::from(hole), Hand::from(board));
    let strength = Strength::from(hand);
    let kicker = strength.primary().map(|r| r.value()).unwrap_or(8) as Probability;
    let mut score = CATEGORY[strength.ranking().index()];
    score += kicker / 14. * 0.08;
    if board.street() != Street::Rive {
        if flush_draw(hand) {
            score += 0.07;
        }
        if straight_draw(hand) {
            score += 0.05;
        }
    }
    score.clamp(0.06, 0.995)
}

/// Exactly four cards of one suit.
pub fn flush_draw(hand: Hand) -> bool {
    Suit::all().iter().any(|suit| hand.of(suit).size() == 4)
}

/// Four or more connected ranks, the ace also counting low.
pub fn straight_draw(hand: Hand) -> bool {
    let ranks = u16::from(hand);
    let ace = (ranks & u16::from(Rank::Ace) != 0) as u16;
    let mut bits = (ranks << 1) | ace;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;
    bits > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole(s: &str) -> Hole {
        Hole::try_from(s).unwrap()
    }
    fn board(s: &str) -> Board {
        Board::try_from(s).unwrap()
    }

    #[test]
    fn preflop_examples() {
        // 0.15 + 12/16*0.34 + 0.33 + 0.08 + 0.12
        assert!((preflop(hole("As Ad")) - 0.935).abs() < 1e-5);
        // 0.15 + 5/16*0.34
        assert!((preflop(hole("7c 2d")) - 0.25625).abs() < 1e-5);
        // 0.15 + 0.34 + 0.08 + 0.08 + 0.12
        assert!((preflop(hole("Ks As")) - (0.15 + 12. / 16. * 0.34 + 0.28)).abs() < 1e-5);
    }

    #[test]
    fn preflop_ordering() {
        assert!(preflop(hole("Qh Qd")) > preflop(hole("Ah 9d")));
        assert!(preflop(hole("Jh Th")) > preflop(hole("Jh 4c")));
        assert!(preflop(hole("7c 2d")) < 0.3);
    }

    #[test]
    fn draws() {
        assert!(flush_draw(Hand::try_from("Ah 7h 2h Kh 9c").unwrap()));
        assert!(!flush_draw(Hand::try_from("Ah 7h 2h Kh 9h").unwrap()));
        assert!(straight_draw(Hand::try_from("5c 6d 7h 8s Kc").unwrap()));
        assert!(straight_draw(Hand::try_from("Ac 2d 3h 4s Tc").unwrap()));
        assert!(!straight_draw(Hand::try_from("Qc Kd Ah 2s 9c").unwrap()));
    }

    #[test]
    fn postflop_examples() {
        // high card, ace kicker, no draws
        let s = postflop(hole("As 7d"), &board("Kc 9h 2s"));
        assert!((s - (0.26 + 0.08)).abs() < 1e-5);
        // flopped set of nines with a four-flush
        let s = postflop(hole("9h 9s"), &board("9c 4s 2s Js"));
        assert!((s - (0.68 + 9. / 14. * 0.08 + 0.07)).abs() < 1e-5);
        // draws are ignored on the river
        let s = postflop(hole("9h 9s"), &board("9c 4s 2s Js Kd"));
        assert!((s - (0.68 + 9. / 14. * 0.08)).abs() < 1e-5);
        // quads on the board plus an ace
        assert!(postflop(hole("Ah 3c"), &board("8c 8d 8h 8s 2d")) > 0.96);
    }
}
