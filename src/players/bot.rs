use super::heuristic;
use super::player::Player;
use crate::Chips;
use crate::Position;
use crate::Probability;
use crate::gameplay::action::Decision;
use crate::gameplay::game::Game;
use crate::gameplay::seat::Kind;
use crate::cards::street::Street;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Scripted opponent.
///
/// Reads only its own hole cards and the public board, estimates its
/// strength, and rolls once per decision. Aggression `a` (stage profile
/// times seat temper) divides the fold and raise thresholds and multiplies
/// the raise frequency, so `a == 1` is the baseline table:
///
/// | facing a bet | condition                                   | move  |
/// |--------------|---------------------------------------------|-------|
/// | yes          | preflop, strength < 0.42, roll < 0.72       | fold  |
/// | yes          | strength < 0.30, roll < 0.55                | fold  |
/// | yes          | strength > 0.76, deep enough, roll < 0.58   | raise |
/// | yes          | otherwise                                   | call  |
/// | no           | strength > 0.68, roll < 0.54                | raise |
/// | no           | otherwise                                   | check |
#[derive(Debug, Clone)]
pub struct Bot {
    aggro: Probability,
    rng: SmallRng,
}

impl Bot {
    pub fn new(aggro: Probability, seed: u64) -> Self {
        Self {
            aggro,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Picks a decision for `position`. Always legal for the current turn.
    pub fn choose<R>(game: &Game, position: Position, aggro: Probability, rng: &mut R) -> Decision
    where
        R: Rng,
    {
        let seat = game.seat(position);
        let temper = match seat.kind() {
            Kind::Bot { temper } => temper,
            Kind::Human => 1.0,
        };
        let a = (aggro * temper).max(0.1);
        let bounds = game.bounds_for(position);
        let bb = game.big_blind();
        let strength = seat
            .hole()
            .map(|hole| heuristic::estimate(hole, &game.board()))
            .unwrap_or(0.3);
        let roll = rng.random::<Probability>();
        let raise = Decision::Raise(Self::sizing(game, position, strength));
        if bounds.to_call > 0 {
            if game.street() == Street::Pref && strength < 0.42 && roll < 0.72 / a {
                Decision::Fold
            } else if strength < 0.30 && roll < 0.55 / a {
                Decision::Fold
            } else if strength > 0.76 / a
                && seat.stack() > bounds.to_call + bb
                && roll < (0.58 * a).min(0.95)
                && bounds.may_raise
            {
                raise
            } else {
                Decision::CheckCall
            }
        } else if strength > 0.68 / a
            && seat.stack() > bb
            && roll < (0.54 * a).min(0.95)
            && bounds.may_raise
        {
            raise
        } else {
            Decision::CheckCall
        }
    }

    /// Pot- and strength-scaled raise target, rounded to big blinds and
    /// pulled into the legal range.
    pub fn sizing(game: &Game, position: Position, strength: Probability) -> Chips {
        let bounds = game.bounds_for(position);
        let bb = game.big_blind();
        let stakes = game.stakes();
        let scaled = game.pot() as Probability * (0.3 + strength) / bb as Probability;
        let mut target = stakes + bb.max(scaled.round() as Chips * bb);
        if stakes == 0 {
            target = target.max(2 * bb);
        }
        bounds.clamp(target)
    }
}

impl Player for Bot {
    fn decide(&mut self, game: &Game, position: Position) -> Decision {
        Self::choose(game, position, self.aggro, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::N;
    use crate::cards::deck::Deck;
    use crate::gameplay::rejection::Rejection;
    use crate::gameplay::turn::Turn;

    fn started(seed: u64) -> Game {
        let mut game = Game::default();
        let ref mut rng = SmallRng::seed_from_u64(seed);
        game.start(1, (10, 20), Deck::shuffled(rng)).unwrap();
        game
    }

    #[test]
    fn sizing_respects_bounds() {
        let game = started(5);
        // pot 30, bet 20: 20 + max(20, round(30*(0.3+s)/20)*20)
        assert_eq!(Bot::sizing(&game, 3, 0.9), 60);
        assert_eq!(Bot::sizing(&game, 3, 0.1), 40);
        // a short stack can only shove
        let mut game = Game::from([1500, 1500, 1500, 35]);
        let ref mut rng = SmallRng::seed_from_u64(5);
        game.start(1, (10, 20), Deck::shuffled(rng)).unwrap();
        assert_eq!(Bot::sizing(&game, 3, 0.9), 35);
    }

    #[test]
    fn postflop_opening_bet_is_at_least_two_blinds() {
        let mut game = started(9);
        for p in [3, 0, 1, 2] {
            game.apply(p, Decision::CheckCall).unwrap();
        }
        game.deal().unwrap();
        game.reveal().unwrap();
        // pot 80: 0 + max(20, round(80*0.4/20)*20) = 40
        assert_eq!(Bot::sizing(&game, 1, 0.1), 40);
        // tiny pots still open for two blinds
        assert!(Bot::sizing(&game, 1, 0.0) >= 40);
    }

    #[test]
    fn decisions_are_always_legal() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        for seed in 0..200 {
            let mut game = started(seed);
            loop {
                match game.turn() {
                    Turn::Choice(p) => {
                        let aggro = [1.0, 1.12, 1.25, 1.4][p % 4];
                        let decision = Bot::choose(&game, p, aggro, rng);
                        let result = game.apply(p, decision);
                        assert!(result.is_ok(), "{} rejected: {:?}", decision, result);
                    }
                    Turn::Chance => game.deal().unwrap(),
                    Turn::Reveal => game.reveal().unwrap(),
                    Turn::Showdown => drop(game.showdown().unwrap()),
                    Turn::Terminal => break,
                }
            }
            assert!(game.is_over());
            assert_eq!(game.chips(), crate::STACK * N as Chips);
            assert_eq!(game.apply(0, Decision::Fold), Err(Rejection::HandOver));
        }
    }

    #[test]
    fn player_trait_is_deterministic_per_seed() {
        let game = started(4);
        let a = Bot::new(1.0, 77).decide(&game, 3);
        let b = Bot::new(1.0, 77).decide(&game, 3);
        assert_eq!(a, b);
    }
}
