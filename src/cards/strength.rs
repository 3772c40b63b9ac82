use super::evaluator::Evaluator;
use super::hand::Hand;
use super::rank::Rank;
use super::ranking::Ranking;

/// A hand's strength: its category plus the ordered tiebreak ranks.
///
/// Ordering compares the category first, then the tiebreak lists element
/// by element. Two hands of the same category always carry lists of the
/// same length, so this matches treating missing entries as zero.
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord, serde::Serialize)]
pub struct Strength {
    ranking: Ranking,
    values: Vec<Rank>,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn values(&self) -> &[Rank] {
        &self.values
    }
    /// The leading tiebreak rank (straight high card, trip rank, top pair...).
    pub fn primary(&self) -> Option<Rank> {
        self.values.first().copied()
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Evaluator::from(hand).strength()
    }
}

impl From<(Ranking, Vec<Rank>)> for Strength {
    fn from((ranking, values): (Ranking, Vec<Rank>)) -> Self {
        Self { ranking, values }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let values = self.values.iter().map(Rank::to_string).collect::<String>();
        write!(f, "{:<16}{}", self.ranking, values)
    }
}
