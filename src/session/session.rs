use super::pending::Pending;
use super::ticket::Ticket;
use crate::HUMAN;
use crate::cards::deck::Deck;
use crate::config::Config;
use crate::gameplay::action::Action;
use crate::gameplay::action::Decision;
use crate::gameplay::bounds::Bounds;
use crate::gameplay::event::Event;
use crate::gameplay::game::Game;
use crate::gameplay::rejection::Rejection;
use crate::gameplay::snapshot::Snapshot;
use crate::gameplay::turn::Turn;
use crate::players::bot::Bot;
use crate::players::player::Player;
use crate::tournament::progression::Tournament;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;

/// Drives one table from hand to hand.
///
/// Every step that a presentation may want to pace (a bot thinking, a
/// street being dealt, cards being turned over, the showdown) is exposed
/// through [`Session::pending`] together with a [`Ticket`]. The caller
/// waits however long it likes and hands the ticket back to
/// [`Session::resume`]. Each accepted call bumps the step counter, so a
/// ticket that outlived its step is rejected as stale and changes nothing.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    tournament: Tournament,
    config: Config,
    rng: SmallRng,
    step: u64,
    events: Vec<Event>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self {
            game: Game::from([config.stack; crate::N]),
            tournament: Tournament::new(config.stack, config.hands_per_level),
            config,
            rng,
            step: 0,
            events: Vec::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Read-only access.
impl Session {
    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn tournament(&self) -> &Tournament {
        &self.tournament
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn hand(&self) -> u64 {
        self.game.hand()
    }
    pub fn step(&self) -> u64 {
        self.step
    }
    /// The ticket that is valid right now.
    pub fn ticket(&self) -> Ticket {
        Ticket {
            hand: self.game.hand(),
            step: self.step,
        }
    }
    pub fn pending(&self) -> Pending {
        let ticket = self.ticket();
        match self.game.turn() {
            Turn::Terminal => Pending::Idle,
            Turn::Choice(seat) if self.game.seat(seat).is_human() => Pending::Human {
                seat,
                bounds: self.game.bounds_for(seat),
            },
            Turn::Choice(seat) => Pending::Bot { seat, ticket },
            Turn::Chance => Pending::Deal { ticket },
            Turn::Reveal => Pending::Reveal { ticket },
            Turn::Showdown => Pending::Showdown { ticket },
        }
    }
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::from(&self.game);
        snapshot.level = self.tournament.level();
        snapshot.stage = self.tournament.stage().name;
        snapshot
    }
    /// Legal moves of whoever is on the clock.
    pub fn bounds(&self) -> Option<Bounds> {
        self.game.bounds()
    }
    /// How long a presentation should wait before resuming `pending`.
    /// Purely cosmetic: outcomes never depend on it.
    pub fn delay(&self, pending: &Pending) -> Duration {
        let pace = self.config.pace;
        match pending {
            Pending::Idle | Pending::Human { .. } => Duration::ZERO,
            Pending::Bot { ticket, .. } => pace.think + jitter(ticket, pace.jitter),
            Pending::Deal { .. } if self.is_runout() => pace.runout,
            Pending::Deal { .. } => pace.street,
            Pending::Reveal { .. } => Duration::ZERO,
            Pending::Showdown { .. } => pace.street,
        }
    }
    /// Takes every event since the last call, in order.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    fn is_runout(&self) -> bool {
        self.game.seats().iter().filter(|s| s.can_act()).count() < 2
    }
}

/// Driving the table.
impl Session {
    /// Runs the between-hands progression and deals the next hand.
    pub fn start_hand(&mut self) -> Result<u64, Rejection> {
        if !self.game.is_over() {
            return Err(Rejection::InProgress);
        }
        let hand = self.game.hand() + 1;
        let events = self.tournament.before_hand(&mut self.game, hand);
        let deck = Deck::shuffled(&mut self.rng);
        self.game.start(hand, self.tournament.blinds(), deck)?;
        self.events.extend(events);
        self.advance();
        log::debug!(
            "[session] hand #{} at {} level {}",
            hand,
            self.tournament.stage(),
            self.tournament.level() + 1
        );
        Ok(hand)
    }

    /// The human's move. Only accepted while the human is on the clock.
    pub fn submit(&mut self, decision: Decision) -> Result<Action, Rejection> {
        self.guard()?;
        if self.game.turn() != Turn::Choice(HUMAN) {
            return Err(Rejection::NotHuman);
        }
        let action = self.game.apply(HUMAN, decision)?;
        self.advance();
        Ok(action)
    }

    /// Runs the deferred step the ticket was issued for.
    pub fn resume(&mut self, ticket: Ticket) -> Result<(), Rejection> {
        self.check(ticket)?;
        match self.game.turn() {
            Turn::Choice(seat) if self.game.seat(seat).is_human() => {
                return Err(Rejection::NotReady);
            }
            Turn::Choice(seat) => {
                let aggro = self.tournament.stage().aggro;
                let decision = Bot::choose(&self.game, seat, aggro, &mut self.rng);
                self.game.apply(seat, decision)?;
            }
            Turn::Chance => self.game.deal()?,
            Turn::Reveal => self.game.reveal()?,
            Turn::Showdown => drop(self.game.showdown()?),
            Turn::Terminal => return Err(Rejection::HandOver),
        }
        self.advance();
        Ok(())
    }

    /// The human's turn timer ran out. Folds them if the ticket is still
    /// current.
    pub fn timeout(&mut self, ticket: Ticket) -> Result<Action, Rejection> {
        self.check(ticket)?;
        if self.game.turn() != Turn::Choice(HUMAN) {
            return Err(Rejection::NotHuman);
        }
        log::debug!("[session] turn timer expired {}", ticket);
        let action = self.game.apply(HUMAN, Decision::Fold)?;
        self.advance();
        Ok(action)
    }

    /// Resolves deferred steps without waiting until the human must act
    /// or the hand is over. Returns where it stopped.
    pub fn autoplay(&mut self) -> Result<Pending, Rejection> {
        loop {
            let pending = self.pending();
            match pending.ticket() {
                Some(ticket) => self.resume(ticket)?,
                None => return Ok(pending),
            }
        }
    }

    /// Plays one whole hand, asking `human` whenever the human seat is on
    /// the clock.
    pub fn play_hand<P>(&mut self, human: &mut P) -> Result<u64, Rejection>
    where
        P: Player,
    {
        let hand = self.start_hand()?;
        while self.autoplay()?.is_human() {
            let decision = human.decide(&self.game, HUMAN);
            self.submit(decision)?;
        }
        Ok(hand)
    }

    fn guard(&self) -> Result<(), Rejection> {
        if self.game.is_idle() {
            Err(Rejection::Idle)
        } else if self.game.is_over() {
            Err(Rejection::HandOver)
        } else {
            Ok(())
        }
    }
    fn check(&self, ticket: Ticket) -> Result<(), Rejection> {
        self.guard()?;
        if ticket != self.ticket() {
            log::trace!("[session] stale {} (now {})", ticket, self.ticket());
            return Err(Rejection::Stale {
                hand: ticket.hand,
                step: ticket.step,
            });
        }
        Ok(())
    }
    fn advance(&mut self) {
        self.step += 1;
        self.events.extend(self.game.drain());
    }
}

/// Spreads bot think times without touching the game's random stream.
fn jitter(ticket: &Ticket, span: Duration) -> Duration {
    let span = span.as_millis() as u64;
    if span == 0 {
        return Duration::ZERO;
    }
    let mix = ticket.hand.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ ticket.step.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    Duration::from_millis((mix >> 17) % (span + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chips;
    use crate::N;
    use crate::config::Pace;

    fn seeded(seed: u64) -> Session {
        Session::new(Config::seeded(seed))
    }

    /// Deals hands until the human is on the clock.
    fn until_human(session: &mut Session) -> Bounds {
        for _ in 0..100 {
            if session.pending().is_idle() {
                session.start_hand().unwrap();
            }
            if let Pending::Human { bounds, .. } = session.autoplay().unwrap() {
                return bounds;
            }
        }
        panic!("human never got to act");
    }

    #[test]
    fn idle_before_the_first_hand() {
        let mut session = seeded(1);
        assert_eq!(session.pending(), Pending::Idle);
        assert_eq!(session.submit(Decision::Fold), Err(Rejection::Idle));
        assert_eq!(session.resume(session.ticket()), Err(Rejection::Idle));
        assert_eq!(session.snapshot().stage, "Back Room");
    }

    #[test]
    fn cannot_start_twice() {
        let mut session = seeded(1);
        assert_eq!(session.start_hand(), Ok(1));
        assert_eq!(session.start_hand(), Err(Rejection::InProgress));
    }

    #[test]
    fn first_events_describe_the_deal() {
        let mut session = seeded(2);
        session.start_hand().unwrap();
        let events = session.drain();
        assert!(matches!(events[0], Event::HandStart { hand: 1, dealer: 0, small: 1, big: 2, .. }));
        let holes = events
            .iter()
            .filter(|e| matches!(e, Event::HoleCards { .. }))
            .count();
        assert_eq!(holes, N);
        assert!(session.drain().is_empty());
    }

    #[test]
    fn stale_tickets_change_nothing() {
        let mut session = seeded(3);
        session.start_hand().unwrap();
        let ticket = match session.pending() {
            Pending::Bot { ticket, .. } => ticket,
            other => panic!("expected a bot turn, got {}", other),
        };
        session.resume(ticket).unwrap();
        let before = session.snapshot();
        let step = session.step();
        assert_eq!(
            session.resume(ticket),
            Err(Rejection::Stale {
                hand: ticket.hand,
                step: ticket.step
            })
        );
        assert_eq!(session.timeout(ticket).map(|_| ()), Err(Rejection::Stale { hand: 1, step: ticket.step }));
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.step(), step);
    }

    #[test]
    fn tickets_from_an_old_hand_are_stale() {
        let mut session = seeded(4);
        session.start_hand().unwrap();
        let old = session.ticket();
        session.autoplay().unwrap();
        while !session.pending().is_idle() {
            session.submit(Decision::Fold).unwrap();
            session.autoplay().unwrap();
        }
        session.start_hand().unwrap();
        assert!(matches!(session.resume(old), Err(Rejection::Stale { .. })));
    }

    #[test]
    fn human_moves_only_on_their_turn() {
        let mut session = seeded(5);
        session.start_hand().unwrap();
        // seat 3 opens preflop on the first hand
        assert_eq!(session.submit(Decision::CheckCall), Err(Rejection::NotHuman));
        let bounds = until_human(&mut session);
        assert_eq!(session.bounds(), Some(bounds));
        assert_eq!(session.snapshot().bounds, Some(bounds));
        let ticket = session.ticket();
        assert_eq!(session.resume(ticket), Err(Rejection::NotReady));
        assert!(session.submit(Decision::CheckCall).is_ok());
    }

    #[test]
    fn illegal_human_raise_is_rejected_without_effect() {
        let mut session = seeded(6);
        let bounds = until_human(&mut session);
        if bounds.may_raise && bounds.min_to <= bounds.max_to && bounds.min_to > bounds.to_call + 1 {
            let before = session.snapshot();
            let step = session.step();
            let result = session.submit(Decision::Raise(bounds.min_to - 1));
            assert!(matches!(result, Err(Rejection::UnderRaise { .. })));
            assert_eq!(session.snapshot(), before);
            assert_eq!(session.step(), step);
        }
    }

    #[test]
    fn timer_folds_the_human() {
        let mut session = seeded(7);
        until_human(&mut session);
        let ticket = session.ticket();
        assert_eq!(session.timeout(ticket), Ok(Action::Fold));
        assert!(session.game().seat(HUMAN).is_folded());
        assert!(session.timeout(ticket).is_err());
    }

    #[test]
    fn chips_are_conserved_within_every_hand() {
        for seed in 0..20 {
            let mut session = seeded(seed);
            let mut proxy = Bot::new(1.0, seed);
            for _ in 0..40 {
                session.start_hand().unwrap();
                let chips = session.game().chips();
                while session.autoplay().unwrap().is_human() {
                    let decision = proxy.decide(session.game(), HUMAN);
                    session.submit(decision).unwrap();
                    assert_eq!(session.game().chips(), chips);
                }
                assert_eq!(session.game().chips(), chips);
                assert!(session.game().seats().iter().all(|s| s.stack() >= 0));
            }
        }
    }

    #[test]
    fn same_seed_same_session() {
        let run = |seed: u64| -> Vec<Event> {
            let mut session = seeded(seed);
            let mut proxy = Bot::new(1.0, seed);
            let mut events = Vec::new();
            for _ in 0..10 {
                session.play_hand(&mut proxy).unwrap();
                events.extend(session.drain());
            }
            events
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn every_hand_ends_with_hand_end() {
        let mut session = seeded(8);
        let mut proxy = Bot::new(1.0, 8);
        for _ in 0..25 {
            let hand = session.play_hand(&mut proxy).unwrap();
            let events = session.drain();
            assert!(events.iter().all(|e| e.hand() == hand));
            assert!(matches!(events.last(), Some(Event::HandEnd { .. })));
            assert_eq!(session.pending(), Pending::Idle);
        }
    }

    #[test]
    fn pacing_hints() {
        let session = seeded(9);
        let ticket = Ticket { hand: 3, step: 11 };
        assert_eq!(session.delay(&Pending::Bot { seat: 0, ticket }), Duration::ZERO);

        let mut config = Config::seeded(9);
        config.pace = Pace::default();
        let session = Session::new(config);
        for step in 0..50 {
            let ticket = Ticket { hand: 1, step };
            let delay = session.delay(&Pending::Bot { seat: 0, ticket });
            assert!(delay >= Duration::from_millis(700));
            assert!(delay <= Duration::from_millis(1150));
        }
        assert_eq!(session.delay(&Pending::Deal { ticket }), Duration::from_millis(750));
        assert_eq!(session.delay(&Pending::Idle), Duration::ZERO);
    }

    #[test]
    fn custom_stacks() {
        let mut config = Config::seeded(10);
        config.stack = 400;
        let mut session = Session::new(config);
        session.start_hand().unwrap();
        assert_eq!(session.game().chips(), 400 * N as Chips);
    }
}
