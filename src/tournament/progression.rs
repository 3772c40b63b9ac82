use super::blinds;
use super::stage::STAGES;
use super::stage::Stage;
use crate::Chips;
use crate::HUMAN;
use crate::N;
use crate::gameplay::event::Event;
use crate::gameplay::game::Game;

/// Stage ladder and blind schedule, applied between hands.
///
/// Busting every bot while the human still has chips climbs one stage:
/// bots are restacked for the new stage, the human collects the stage
/// bonus, and the blinds start over. When one seat or none has chips
/// left, the table resets to the first stage with fresh stacks.
#[derive(Debug, Clone)]
pub struct Tournament {
    stage: usize,
    level: usize,
    origin: u64,
    stack: Chips,
    hands_per_level: u64,
}

impl Tournament {
    pub fn new(stack: Chips, hands_per_level: u64) -> Self {
        Self {
            stage: 0,
            level: 0,
            origin: 1,
            stack,
            hands_per_level,
        }
    }
    pub fn stage(&self) -> &'static Stage {
        Stage::at(self.stage)
    }
    pub fn level(&self) -> usize {
        self.level
    }
    pub fn blinds(&self) -> (Chips, Chips) {
        blinds::blinds(self.level)
    }

    /// Brings stacks, stage and blinds up to date for the hand about to
    /// be dealt. Must only be called between hands.
    pub fn before_hand(&mut self, game: &mut Game, hand: u64) -> Vec<Event> {
        let mut events = Vec::new();
        let human = game.seat(HUMAN).stack() > 0;
        let bots = (0..N).filter(|p| *p != HUMAN).all(|p| game.seat(p).stack() == 0);
        let funded = game.seats().iter().filter(|s| s.stack() > 0).count();
        if human && bots {
            self.stage = (self.stage + 1).min(STAGES.len() - 1);
            self.level = 0;
            self.origin = hand;
            let stage = self.stage();
            for p in (0..N).filter(|p| *p != HUMAN) {
                game.set_stack(p, stage.npc_chips);
            }
            game.bonus(HUMAN, stage.bonus);
            log::info!("[tournament] stage up: {} (+{})", stage.name, stage.bonus);
            events.push(Event::StageUp {
                hand,
                stage: stage.name,
                bonus: stage.bonus,
            });
        } else if funded <= 1 {
            self.stage = 0;
            self.level = 0;
            self.origin = hand;
            for p in 0..N {
                game.set_stack(p, self.stack);
            }
            game.reset_button();
            log::info!("[tournament] table reset to {}", self.stack);
            events.push(Event::TableReset {
                hand,
                stack: self.stack,
            });
        }
        let level = blinds::level(hand, self.origin, self.hands_per_level);
        if level != self.level {
            self.level = level;
            log::debug!("[tournament] level {} blinds {:?}", level, self.blinds());
            events.push(Event::LevelUp {
                hand,
                level,
                blinds: self.blinds(),
            });
        }
        events
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new(crate::STACK, crate::HANDS_PER_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinds_rise_every_eight_hands() {
        let mut tournament = Tournament::default();
        let mut game = Game::default();
        for hand in 1..=8 {
            assert!(tournament.before_hand(&mut game, hand).is_empty());
        }
        let events = tournament.before_hand(&mut game, 9);
        assert_eq!(
            events,
            vec![Event::LevelUp {
                hand: 9,
                level: 1,
                blinds: (15, 30)
            }]
        );
        assert_eq!(tournament.blinds(), (15, 30));
    }

    #[test]
    fn busting_every_bot_climbs_a_stage() {
        let mut tournament = Tournament::default();
        let mut game = Game::from([0, 0, 6000, 0]);
        for hand in 1..=20 {
            tournament.before_hand(&mut Game::default(), hand);
        }
        assert_eq!(tournament.level(), 2);
        let events = tournament.before_hand(&mut game, 21);
        assert_eq!(tournament.stage().name, "Card Club");
        assert_eq!(tournament.level(), 0);
        assert_eq!(tournament.blinds(), (10, 20));
        assert_eq!(game.seat(HUMAN).stack(), 7000);
        assert_eq!(game.seat(0).stack(), 2500);
        assert_eq!(game.seat(3).stack(), 2500);
        assert_eq!(
            events,
            vec![Event::StageUp {
                hand: 21,
                stage: "Card Club",
                bonus: 1000
            }]
        );
        // the schedule restarts from the hand that opened the stage
        assert!(tournament.before_hand(&mut game, 28).is_empty());
        assert_eq!(tournament.before_hand(&mut game, 29).len(), 1);
    }

    #[test]
    fn final_stage_repeats() {
        let mut tournament = Tournament::default();
        for hand in 1..=STAGES.len() as u64 + 2 {
            let mut game = Game::from([0, 0, 1000, 0]);
            tournament.before_hand(&mut game, hand);
        }
        assert_eq!(tournament.stage().name, "Final Table");
        assert_eq!(tournament.stage(), STAGES.last().unwrap());
    }

    #[test]
    fn busted_human_resets_the_table() {
        let mut tournament = Tournament::default();
        let mut climbed = Game::from([0, 0, 1000, 0]);
        tournament.before_hand(&mut climbed, 1);
        assert_eq!(tournament.stage().name, "Card Club");
        let mut game = Game::from([0, 0, 0, 6000]);
        let events = tournament.before_hand(&mut game, 2);
        assert_eq!(events, vec![Event::TableReset { hand: 2, stack: 1500 }]);
        assert_eq!(tournament.stage().name, "Back Room");
        assert!(game.seats().iter().all(|s| s.stack() == 1500));
        assert_eq!(game.dealer(), N - 1);
    }

    #[test]
    fn two_funded_seats_keep_playing() {
        let mut tournament = Tournament::default();
        let mut game = Game::from([0, 3000, 3000, 0]);
        assert!(tournament.before_hand(&mut game, 1).is_empty());
        assert_eq!(game.seat(1).stack(), 3000);
    }
}
