use crate::Chips;
use crate::Position;

/// One layer of the pot: chips everybody at this investment level put in,
/// and who may still win them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Pot {
    pub amount: Chips,
    pub contributors: Vec<Position>,
    pub eligible: Vec<Position>,
}

impl Pot {
    /// Peels whole-hand investments into layers, main pot first.
    ///
    /// Each entry is `(seat, spent, folded)`. The lowest remaining
    /// investment level `L` forms a layer worth `(L - previous)` from every
    /// seat still at or above `L`. Folded seats pay into layers but are
    /// never eligible to win them.
    pub fn layers(investments: &[(Position, Chips, bool)]) -> Vec<Pot> {
        let mut entries = investments
            .iter()
            .copied()
            .filter(|(_, spent, _)| *spent > 0)
            .collect::<Vec<_>>();
        entries.sort_by_key(|(seat, spent, _)| (*spent, *seat));
        let mut pots = Vec::new();
        let mut prev = 0;
        while let Some(&(_, level, _)) = entries.first() {
            let mut contributors = entries.iter().map(|(s, _, _)| *s).collect::<Vec<_>>();
            let mut eligible = entries
                .iter()
                .filter(|(_, _, folded)| !folded)
                .map(|(s, _, _)| *s)
                .collect::<Vec<_>>();
            contributors.sort();
            eligible.sort();
            pots.push(Pot {
                amount: (level - prev) * contributors.len() as Chips,
                contributors,
                eligible,
            });
            entries.retain(|(_, spent, _)| *spent != level);
            prev = level;
        }
        pots
    }
    /// What each contributor put into this layer.
    pub fn share(&self) -> Chips {
        self.amount / self.contributors.len().max(1) as Chips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folded_short_stack_pays_in_but_cannot_win() {
        let pots = Pot::layers(&[(0, 50, true), (1, 100, false), (2, 300, false)]);
        assert_eq!(pots.len(), 3);
        assert_eq!(pots[0].amount, 150);
        assert_eq!(pots[0].contributors, vec![0, 1, 2]);
        assert_eq!(pots[0].eligible, vec![1, 2]);
        assert_eq!(pots[1].amount, 100);
        assert_eq!(pots[1].contributors, vec![1, 2]);
        assert_eq!(pots[1].eligible, vec![1, 2]);
        assert_eq!(pots[2].amount, 200);
        assert_eq!(pots[2].contributors, vec![2]);
        assert_eq!(pots[2].eligible, vec![2]);
    }

    #[test]
    fn single_level_is_one_pot() {
        let pots = Pot::layers(&[(0, 40, false), (1, 40, false), (2, 0, true), (3, 40, true)]);
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].amount, 120);
        assert_eq!(pots[0].eligible, vec![0, 1]);
    }

    #[test]
    fn layers_sum_to_investments() {
        let investments = [(0, 75, false), (1, 1500, false), (2, 310, true), (3, 75, false)];
        let pots = Pot::layers(&investments);
        let total = investments.iter().map(|(_, s, _)| s).sum::<Chips>();
        assert_eq!(pots.iter().map(|p| p.amount).sum::<Chips>(), total);
    }
}
