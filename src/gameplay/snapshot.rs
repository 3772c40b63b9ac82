use super::action::Action;
use super::bounds::Bounds;
use super::game::Game;
use super::seat::Kind;
use crate::Chips;
use crate::Position;
use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::cards::ranking::Ranking;
use crate::cards::street::Street;

/// What a presentation may show about one seat.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SeatView {
    pub name: &'static str,
    pub human: bool,
    pub stack: Chips,
    pub stake: Chips,
    pub folded: bool,
    pub all_in: bool,
    pub last: Option<Action>,
    /// The human's cards, or anyone's once turned over at showdown.
    pub hole: Option<Hole>,
    pub shown: Option<Ranking>,
}

/// Read-only view of the table. Only the disclosed board is included,
/// and bot cards stay hidden until showdown.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Snapshot {
    pub hand: u64,
    /// `None` before the first hand.
    pub street: Option<Street>,
    pub over: bool,
    pub pot: Chips,
    pub stakes: Chips,
    pub min_raise: Chips,
    pub blinds: (Chips, Chips),
    pub dealer: Position,
    pub small: Position,
    pub big: Position,
    pub actor: Option<Position>,
    pub board: Board,
    pub seats: Vec<SeatView>,
    /// Legal moves, present only while the human is on the clock.
    pub bounds: Option<Bounds>,
    pub level: usize,
    pub stage: &'static str,
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        let actor = game.turn().position();
        let seats = game
            .seats()
            .iter()
            .map(|seat| {
                let human = seat.kind() == Kind::Human;
                let shown = seat.shown().map(|s| s.ranking());
                SeatView {
                    name: seat.name(),
                    human,
                    stack: seat.stack(),
                    stake: seat.stake(),
                    folded: seat.is_folded(),
                    all_in: seat.is_shoving(),
                    last: seat.last(),
                    hole: seat.hole().filter(|_| human || shown.is_some()),
                    shown,
                }
            })
            .collect();
        Self {
            hand: game.hand(),
            street: Some(game.street()).filter(|_| !game.is_idle()),
            over: game.is_over(),
            pot: game.pot(),
            stakes: game.stakes(),
            min_raise: game.min_raise(),
            blinds: game.blinds(),
            dealer: game.dealer(),
            small: game.small(),
            big: game.big(),
            actor,
            board: game.board(),
            seats,
            bounds: actor
                .filter(|p| game.seat(*p).is_human())
                .map(|p| game.bounds_for(p)),
            level: 0,
            stage: "",
        }
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let street = self.street.map(|s| s.label()).unwrap_or("Idle");
        writeln!(
            f,
            "#{} {} | {} | blinds {}/{} | pot {} | {}",
            self.hand, self.stage, street, self.blinds.0, self.blinds.1, self.pot, self.board
        )?;
        for (i, seat) in self.seats.iter().enumerate() {
            let button = if i == self.dealer { "D" } else { " " };
            let arrow = if Some(i) == self.actor { ">" } else { " " };
            let cards = seat.hole.map(|h| h.to_string()).unwrap_or_default();
            let last = seat.last.map(|a| a.label()).unwrap_or_default();
            let status = if seat.folded {
                "folded"
            } else if seat.all_in {
                "all-in"
            } else {
                ""
            };
            writeln!(
                f,
                "{}{} {:<6} {:>6} {:>5}  {:<6} {:<6} {}",
                arrow, button, seat.name, seat.stack, seat.stake, cards, status, last
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HUMAN;
    use crate::N;
    use crate::cards::deck::Deck;
    use crate::gameplay::action::Decision;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn idle_table() {
        let snapshot = Snapshot::from(&Game::default());
        assert_eq!(snapshot.street, None);
        assert!(snapshot.over);
        assert!(snapshot.seats.iter().all(|s| s.hole.is_none()));
    }

    #[test]
    fn only_the_human_cards_are_visible() {
        let mut game = Game::default();
        let ref mut rng = SmallRng::seed_from_u64(3);
        game.start(1, (10, 20), Deck::shuffled(rng)).unwrap();
        let snapshot = Snapshot::from(&game);
        for (i, seat) in snapshot.seats.iter().enumerate() {
            assert_eq!(seat.hole.is_some(), i == HUMAN);
        }
        assert_eq!(snapshot.seats.len(), N);
        assert_eq!(snapshot.street, Some(Street::Pref));
        assert!(snapshot.board.is_empty());
    }

    #[test]
    fn undisclosed_cards_stay_hidden() {
        let mut game = Game::default();
        let ref mut rng = SmallRng::seed_from_u64(3);
        game.start(1, (10, 20), Deck::shuffled(rng)).unwrap();
        for p in [3, 0, 1] {
            game.apply(p, Decision::CheckCall).unwrap();
        }
        // seat 2 is the human big blind and gets the bounds
        let snapshot = Snapshot::from(&game);
        assert_eq!(snapshot.actor, Some(HUMAN));
        assert_eq!(snapshot.bounds.map(|b| b.to_call), Some(0));
        game.apply(2, Decision::CheckCall).unwrap();
        game.deal().unwrap();
        assert!(Snapshot::from(&game).board.is_empty());
        game.reveal().unwrap();
        assert_eq!(Snapshot::from(&game).board.len(), 3);
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(Snapshot::from(&Game::default())).unwrap();
        assert_eq!(json["seats"][2]["name"], "You");
        assert_eq!(json["street"], serde_json::Value::Null);
    }
}
