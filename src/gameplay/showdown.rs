use super::pot::Pot;
use super::settlement::Settlement;
use crate::Chips;
use crate::N;
use crate::Position;
use crate::cards::ranking::Ranking;

/// How one pot layer was paid out.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Award {
    pub amount: Chips,
    pub winners: Vec<(Position, Chips)>,
    pub ranking: Option<Ranking>,
    /// Nobody eligible was left, so contributors took their chips back.
    pub refund: bool,
}

/// Ephemeral ledger that pays out every pot layer at the end of a hand.
///
/// Each layer goes to the best strength among its eligible seats. Ties
/// split evenly and leftover chips go one at a time to the tied winners in
/// seat order starting just after the dealer.
pub struct Showdown {
    settlements: Vec<Settlement>,
    dealer: Position,
}

impl From<(Vec<Settlement>, Position)> for Showdown {
    fn from((settlements, dealer): (Vec<Settlement>, Position)) -> Self {
        Self {
            settlements,
            dealer,
        }
    }
}

impl Showdown {
    pub fn settle(mut self) -> (Vec<Settlement>, Vec<Award>) {
        let awards = self
            .pots()
            .into_iter()
            .map(|pot| self.distribute(pot))
            .collect::<Vec<_>>();
        (self.settlements, awards)
    }

    fn pots(&self) -> Vec<Pot> {
        Pot::layers(
            &self
                .settlements
                .iter()
                .map(|s| (s.position, s.risked, s.is_folded()))
                .collect::<Vec<_>>(),
        )
    }
    fn distribute(&mut self, pot: Pot) -> Award {
        if pot.eligible.is_empty() {
            return self.refund(pot);
        }
        let best = pot
            .eligible
            .iter()
            .filter_map(|p| self.row(*p).strength.clone())
            .max();
        let winners = self
            .order()
            .filter(|p| pot.eligible.contains(p))
            .filter(|p| self.row(*p).strength == best)
            .collect::<Vec<_>>();
        let share = pot.amount / winners.len() as Chips;
        let extra = (pot.amount % winners.len() as Chips) as usize;
        let payouts = winners
            .iter()
            .enumerate()
            .map(|(i, p)| (*p, share + if i < extra { 1 } else { 0 }))
            .collect::<Vec<_>>();
        for (p, chips) in payouts.iter() {
            self.row_mut(*p).reward += chips;
            log::trace!("[showdown] P{} takes {} of {}", p, chips, pot.amount);
        }
        Award {
            amount: pot.amount,
            winners: payouts,
            ranking: best.map(|s| s.ranking()),
            refund: false,
        }
    }
    fn refund(&mut self, pot: Pot) -> Award {
        let share = pot.share();
        for p in pot.contributors.iter() {
            self.row_mut(*p).reward += share;
        }
        Award {
            amount: pot.amount,
            winners: pot.contributors.iter().map(|p| (*p, share)).collect(),
            ranking: None,
            refund: true,
        }
    }
    /// Seats in payout order: the first one after the dealer goes first.
    fn order(&self) -> impl Iterator<Item = Position> + '_ {
        (1..=N).map(move |i| (self.dealer + i) % N)
    }
    fn row(&self, position: Position) -> &Settlement {
        self.settlements
            .iter()
            .find(|s| s.position == position)
            .expect("settlement row for every seat")
    }
    fn row_mut(&mut self, position: Position) -> &mut Settlement {
        self.settlements
            .iter_mut()
            .find(|s| s.position == position)
            .expect("settlement row for every seat")
    }
}
