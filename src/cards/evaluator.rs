use super::hand::Hand;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// A lazy evaluator for a hand's strength.
///
/// Works on any set of one to seven cards. Categories are tried from
/// strongest to weakest and the first match wins, so each finder only has
/// to recognise its own shape and pick its tiebreak ranks.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn strength(&self) -> Strength {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .map(Strength::from)
            .expect("at least one card in Hand")
    }

    fn find_straight_flush(&self) -> Option<(Ranking, Vec<Rank>)> {
        self.find_suit_of_flush()
            .map(|suit| u16::from(self.0.of(&suit)))
            .and_then(|ranks| self.find_rank_of_straight(ranks))
            .map(|high| (Ranking::StraightFlush, vec![high]))
    }
    fn find_4_oak(&self) -> Option<(Ranking, Vec<Rank>)> {
        self.find_rank_of_n_oak(4, &[]).map(|quad| {
            let kicks = self.find_kickers(1, &[quad]);
            (Ranking::FourOAK, [vec![quad], kicks].concat())
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<(Ranking, Vec<Rank>)> {
        self.find_rank_of_n_oak(3, &[]).and_then(|trip| {
            self.find_rank_of_n_oak(2, &[trip])
                .map(|pair| (Ranking::FullHouse, vec![trip, pair]))
        })
    }
    fn find_flush(&self) -> Option<(Ranking, Vec<Rank>)> {
        self.find_suit_of_flush().map(|suit| {
            let ranks = Self::descending(u16::from(self.0.of(&suit)));
            (Ranking::Flush, ranks.into_iter().take(5).collect())
        })
    }
    fn find_straight(&self) -> Option<(Ranking, Vec<Rank>)> {
        self.find_rank_of_straight(u16::from(self.0))
            .map(|high| (Ranking::Straight, vec![high]))
    }
    fn find_3_oak(&self) -> Option<(Ranking, Vec<Rank>)> {
        self.find_rank_of_n_oak(3, &[]).map(|trip| {
            let kicks = self.find_kickers(2, &[trip]);
            (Ranking::ThreeOAK, [vec![trip], kicks].concat())
        })
    }
    fn find_2_oak_2_oak(&self) -> Option<(Ranking, Vec<Rank>)> {
        self.find_rank_of_n_oak(2, &[]).and_then(|hi| {
            self.find_rank_of_n_oak(2, &[hi]).map(|lo| {
                let kicks = self.find_kickers(1, &[hi, lo]);
                (Ranking::TwoPair, [vec![hi, lo], kicks].concat())
            })
        })
    }
    fn find_2_oak(&self) -> Option<(Ranking, Vec<Rank>)> {
        self.find_rank_of_n_oak(2, &[]).map(|pair| {
            let kicks = self.find_kickers(3, &[pair]);
            (Ranking::OnePair, [vec![pair], kicks].concat())
        })
    }
    fn find_1_oak(&self) -> Option<(Ranking, Vec<Rank>)> {
        Some(self.find_kickers(5, &[]))
            .filter(|kicks| !kicks.is_empty())
            .map(|kicks| (Ranking::HighCard, kicks))
    }

    /// Highest straight in a rank mask, with the ace also playing low.
    fn find_rank_of_straight(&self, ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    /// A suit holding five or more cards. With more than one candidate the
    /// one with the best descending rank list wins.
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .filter(|suit| self.0.of(suit).size() >= 5)
            .max_by_key(|suit| u16::from(self.0.of(suit)))
    }
    /// Highest rank held at least `n` times, skipping some ranks.
    fn find_rank_of_n_oak(&self, n: usize, skip: &[Rank]) -> Option<Rank> {
        Rank::descending()
            .filter(|rank| !skip.contains(rank))
            .find(|rank| self.0.n_of(*rank) >= n)
    }
    /// Up to `n` highest distinct ranks outside of `skip`.
    fn find_kickers(&self, n: usize, skip: &[Rank]) -> Vec<Rank> {
        Rank::descending()
            .filter(|rank| !skip.contains(rank))
            .filter(|rank| self.0.n_of(*rank) > 0)
            .take(n)
            .collect()
    }
    fn descending(ranks: u16) -> Vec<Rank> {
        Rank::descending()
            .filter(|rank| ranks & u16::from(*rank) != 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> Strength {
        Strength::from(Hand::try_from(s).unwrap())
    }
    fn ranks(s: &str) -> Vec<Rank> {
        s.chars()
            .map(|c| Rank::try_from(c.to_string().as_str()).unwrap())
            .collect()
    }

    #[test]
    fn high_card() {
        let s = eval("As Kh Qd Jc 9s 3d 2c");
        assert_eq!(s.ranking(), Ranking::HighCard);
        assert_eq!(s.values(), ranks("AKQJ9"));
    }

    #[test]
    fn one_pair() {
        let s = eval("As Ah Kd Qc Js 4d 2h");
        assert_eq!(s.ranking(), Ranking::OnePair);
        assert_eq!(s.values(), ranks("AKQJ"));
    }

    #[test]
    fn two_pair_from_three_pairs() {
        let s = eval("As Ah Kd Kc Qs Qh Jd");
        assert_eq!(s.ranking(), Ranking::TwoPair);
        assert_eq!(s.values(), ranks("AKQ"));
    }

    #[test]
    fn three_oak() {
        let s = eval("As Ah Ad Kc Qs 7d 2h");
        assert_eq!(s.ranking(), Ranking::ThreeOAK);
        assert_eq!(s.values(), ranks("AKQ"));
    }

    #[test]
    fn royal_flush_with_deuce_and_trey() {
        let s = eval("As Ks Qs Js Ts 2d 3c");
        assert_eq!(s.ranking(), Ranking::StraightFlush);
        assert_eq!(s.values(), ranks("A"));
        assert_eq!(s.values()[0].value(), 14);
    }

    #[test]
    fn full_house_sevens_over_deuces() {
        let s = eval("7s 7h 7d 2c 2d Ks Qh");
        assert_eq!(s.ranking(), Ranking::FullHouse);
        assert_eq!(s.values(), ranks("72"));
    }

    #[test]
    fn full_house_from_two_trips() {
        let s = eval("As Ah Ad Kc Ks Kh Qd");
        assert_eq!(s.ranking(), Ranking::FullHouse);
        assert_eq!(s.values(), ranks("AK"));
    }

    #[test]
    fn wheel_straight() {
        let s = eval("As 2h 3d 4c 5s 9h Kd");
        assert_eq!(s.ranking(), Ranking::Straight);
        assert_eq!(s.values(), ranks("5"));
        assert_eq!(s.values()[0].value(), 5);
    }

    #[test]
    fn six_high_beats_wheel() {
        let s = eval("As 2s 3h 4d 5c 6s");
        assert_eq!(s.ranking(), Ranking::Straight);
        assert_eq!(s.values(), ranks("6"));
    }

    #[test]
    fn wheel_straight_flush() {
        let s = eval("As 2s 3s 4s 5s Kh Kd");
        assert_eq!(s.ranking(), Ranking::StraightFlush);
        assert_eq!(s.values(), ranks("5"));
    }

    #[test]
    fn flush_keeps_top_five() {
        let s = eval("4h 6h 7h 8h 9h Jh Ts");
        assert_eq!(s.ranking(), Ranking::Flush);
        assert_eq!(s.values(), ranks("J9876"));
    }

    #[test]
    fn four_oak_kicker_ignores_pairs() {
        let s = eval("As Ah Ad Ac Ks Kh Qd");
        assert_eq!(s.ranking(), Ranking::FourOAK);
        assert_eq!(s.values(), ranks("AK"));
    }

    #[test]
    fn partial_boards() {
        assert_eq!(eval("Ah Kd").ranking(), Ranking::HighCard);
        assert_eq!(eval("Ah Ad 7c 8c 9d").ranking(), Ranking::OnePair);
        assert_eq!(eval("Ah Ad 7c 8c 9d 9h").values(), ranks("A98"));
    }

    #[test]
    fn ordering_by_category_then_values() {
        assert!(eval("As Ks Qs Js Ts") > eval("Ac Ad Ah As Kc"));
        assert!(eval("Ac Ad 9h 8s 2c") > eval("Kc Kd Ah Qs Jc"));
        assert!(eval("Ac Ad 9h 8s 3c") > eval("As Ah 9d 8c 2d"));
        assert_eq!(eval("Ac Ad 9h 8s 3c"), eval("As Ah 9d 8c 3d"));
    }
}
