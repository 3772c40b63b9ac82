use super::action::Action;
use super::action::Decision;
use super::bounds::Bounds;
use super::event::Event;
use super::pnl::PnL;
use super::rejection::Rejection;
use super::seat::Kind;
use super::seat::Seat;
use super::settlement::Settlement;
use super::showdown::Award;
use super::showdown::Showdown;
use super::turn::Turn;
use crate::Chips;
use crate::HUMAN;
use crate::N;
use crate::NAMES;
use crate::Position;
use crate::TEMPERS;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::cards::strength::Strength;

/// Table and hand state for one table of four.
///
/// Seats and their stacks live across hands; everything else is reset by
/// [`Game::start`]. The betting round is a state machine read through
/// [`Game::turn`] and driven by exactly one mutating call per step:
/// [`Game::apply`] for a seat's decision, [`Game::deal`] and
/// [`Game::reveal`] for the two halves of a street transition, and
/// [`Game::showdown`] once river betting closes. Any call that does not
/// match the current turn is rejected and leaves the table untouched.
#[derive(Debug, Clone)]
pub struct Game {
    seats: Vec<Seat>,
    deck: Deck,
    board: Board,
    revealed: usize,
    street: Street,
    pot: Chips,
    stakes: Chips,
    min_raise: Chips,
    blinds: (Chips, Chips),
    dealer: Position,
    small: Position,
    big: Position,
    ticker: Position,
    hand: u64,
    over: bool,
    events: Vec<Event>,
}

impl Default for Game {
    fn default() -> Self {
        Self::from([crate::STACK; N])
    }
}

/// Seats named and typed in table order, with the given stacks.
impl From<[Chips; N]> for Game {
    fn from(stacks: [Chips; N]) -> Self {
        let seats = (0..N)
            .map(|i| {
                let kind = if i == HUMAN {
                    Kind::Human
                } else {
                    Kind::Bot { temper: TEMPERS[i] }
                };
                Seat::new(NAMES[i], kind, stacks[i])
            })
            .collect();
        Self {
            seats,
            deck: Deck::new(),
            board: Board::empty(),
            revealed: 0,
            street: Street::Pref,
            pot: 0,
            stakes: 0,
            min_raise: crate::B_BLIND,
            blinds: (crate::S_BLIND, crate::B_BLIND),
            dealer: N - 1,
            small: 0,
            big: 0,
            ticker: 0,
            hand: 0,
            over: true,
            events: Vec::new(),
        }
    }
}

/// Public state accessors.
impl Game {
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, position: Position) -> &Seat {
        &self.seats[position]
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn stakes(&self) -> Chips {
        self.stakes
    }
    pub fn min_raise(&self) -> Chips {
        self.min_raise
    }
    pub fn blinds(&self) -> (Chips, Chips) {
        self.blinds
    }
    pub fn big_blind(&self) -> Chips {
        self.blinds.1
    }
    pub fn dealer(&self) -> Position {
        self.dealer
    }
    pub fn small(&self) -> Position {
        self.small
    }
    pub fn big(&self) -> Position {
        self.big
    }
    pub fn hand(&self) -> u64 {
        self.hand
    }
    pub fn is_over(&self) -> bool {
        self.over
    }
    pub fn is_idle(&self) -> bool {
        self.hand == 0
    }
    /// Community cards that have been disclosed.
    pub fn board(&self) -> Board {
        self.board.prefix(self.revealed)
    }
    /// Every chip on the table or in front of a seat.
    pub fn chips(&self) -> Chips {
        self.pot + self.seats.iter().map(Seat::stack).sum::<Chips>()
    }
    /// Takes the events emitted since the last call.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn turn(&self) -> Turn {
        if self.over {
            Turn::Terminal
        } else if !self.is_round_complete() {
            Turn::Choice(self.ticker)
        } else if self.board.len() > self.revealed {
            Turn::Reveal
        } else if self.street == Street::Rive {
            Turn::Showdown
        } else {
            Turn::Chance
        }
    }
    /// Legal moves for the seat on the clock.
    pub fn bounds(&self) -> Option<Bounds> {
        self.turn().position().map(|p| self.bounds_for(p))
    }
    pub fn bounds_for(&self, position: Position) -> Bounds {
        let seat = self.seat(position);
        let max_to = seat.stake() + seat.stack();
        Bounds {
            to_call: (self.stakes - seat.stake()).max(0),
            min_to: self.min_to(),
            max_to,
            may_raise: seat.can_act() && max_to > self.stakes,
        }
    }
    /// Every seat that can still act has acted and matched the bet.
    pub fn is_round_complete(&self) -> bool {
        self.seats
            .iter()
            .filter(|s| s.can_act())
            .all(|s| s.acted() && s.stake() == self.stakes)
    }
    /// First seat after `from`, going round the table, that satisfies `predicate`.
    pub fn next_index<F>(&self, from: Position, predicate: F) -> Option<Position>
    where
        F: Fn(&Seat) -> bool,
    {
        (1..=N)
            .map(|i| (from + i) % N)
            .find(|i| predicate(&self.seats[*i]))
    }
}

/// Hand lifecycle.
impl Game {
    /// Shuffled deck in, hole cards out, blinds posted, preflop open.
    pub fn start(&mut self, hand: u64, blinds: (Chips, Chips), deck: Deck) -> Result<(), Rejection> {
        if !self.over {
            return Err(Rejection::InProgress);
        }
        if self.seats.iter().filter(|s| s.stack() > 0).count() < 2 {
            return Err(Rejection::NotReady);
        }
        for seat in self.seats.iter_mut() {
            seat.reset();
        }
        self.hand = hand;
        self.over = false;
        self.deck = deck;
        self.board.clear();
        self.revealed = 0;
        self.street = Street::Pref;
        self.pot = 0;
        self.stakes = 0;
        self.blinds = blinds;
        self.min_raise = blinds.1;
        self.move_button();
        self.events.push(Event::HandStart {
            hand: self.hand,
            dealer: self.dealer,
            small: self.small,
            big: self.big,
            blinds: self.blinds,
            stacks: self.seats.iter().map(Seat::stack).collect(),
        });
        log::debug!(
            "[game] hand #{} dealer P{} blinds {}/{}",
            self.hand,
            self.dealer,
            blinds.0,
            blinds.1
        );
        self.deal_holes();
        self.post(self.small, blinds.0);
        self.post(self.big, blinds.1);
        self.stakes = self.seats.iter().map(Seat::stake).max().unwrap_or(0);
        self.min_raise = blinds.1;
        for seat in self.seats.iter_mut() {
            seat.set_acted(!seat.can_act());
        }
        self.ticker = self.next_actor(self.big).unwrap_or(self.big);
        self.settle_quiet_round();
        Ok(())
    }

    /// Validates and applies one decision for the seat on the clock.
    pub fn apply(&mut self, position: Position, decision: Decision) -> Result<Action, Rejection> {
        if self.over {
            return Err(Rejection::HandOver);
        }
        if self.turn() != Turn::Choice(position) {
            return Err(Rejection::OutOfTurn(position));
        }
        if !self.seat(position).can_act() {
            return Err(Rejection::CannotAct(position));
        }
        let action = match decision {
            Decision::Fold => self.fold(position),
            Decision::CheckCall => self.call(position),
            Decision::Raise(to) => self.raise(position, to)?,
        };
        self.seats[position].touch(action);
        self.events.push(Event::Action {
            hand: self.hand,
            seat: position,
            action,
            pot: self.pot,
        });
        log::debug!("[game] P{} {} (pot {})", position, action, self.pot);
        if self.live() == 1 {
            self.award_uncontested();
        } else if !self.is_round_complete() {
            self.ticker = self.next_actor(position).unwrap_or(position);
        }
        Ok(action)
    }

    /// Draws the next street's cards without disclosing them.
    pub fn deal(&mut self) -> Result<(), Rejection> {
        if self.turn() != Turn::Chance {
            return Err(Rejection::NotReady);
        }
        for _ in 0..self.street.next().n_observed() {
            let card = self.deck.draw();
            self.board.add(card);
        }
        Ok(())
    }

    /// Discloses the drawn cards and opens the new betting round.
    pub fn reveal(&mut self) -> Result<(), Rejection> {
        if self.turn() != Turn::Reveal {
            return Err(Rejection::NotReady);
        }
        self.revealed = self.board.len();
        self.street = self.board.street();
        self.stakes = 0;
        self.min_raise = self.blinds.1;
        for seat in self.seats.iter_mut() {
            seat.reset_street();
        }
        self.ticker = self.next_actor(self.dealer).unwrap_or(self.dealer);
        self.settle_quiet_round();
        self.events.push(Event::Board {
            hand: self.hand,
            street: self.street,
            board: self.board(),
        });
        log::debug!("[game] {} {}", self.street, self.board);
        Ok(())
    }

    /// Evaluates every live hand and pays out each pot layer.
    pub fn showdown(&mut self) -> Result<Vec<Award>, Rejection> {
        if self.turn() != Turn::Showdown {
            return Err(Rejection::NotReady);
        }
        let board = Hand::from(&self.board);
        let mut rows = Vec::with_capacity(N);
        for (i, seat) in self.seats.iter_mut().enumerate() {
            let strength = match (seat.is_live(), seat.hole()) {
                (true, Some(hole)) => Some(Strength::from(Hand::add(Hand::from(hole), board))),
                _ => None,
            };
            if let (Some(strength), Some(hole)) = (strength.clone(), seat.hole()) {
                seat.show(strength.clone());
                self.events.push(Event::Reveal {
                    hand: self.hand,
                    seat: i,
                    hole,
                    strength,
                });
            }
            rows.push(Settlement::from((i, seat.spent(), seat.state(), strength)));
        }
        let (rows, awards) = Showdown::from((rows, self.dealer)).settle();
        debug_assert!(rows.iter().map(|r| r.reward).sum::<Chips>() == self.pot);
        for row in rows.iter() {
            self.seats[row.position].win(row.reward);
            log::trace!("[game] {}", row);
        }
        for award in awards.iter() {
            self.events.push(Event::Award {
                hand: self.hand,
                award: award.clone(),
                uncontested: false,
            });
        }
        self.conclude(&rows);
        Ok(awards)
    }
}

/// Tournament hooks between hands.
impl Game {
    pub fn set_stack(&mut self, position: Position, chips: Chips) {
        debug_assert!(self.over);
        self.seats[position].set_stack(chips);
    }
    pub fn bonus(&mut self, position: Position, chips: Chips) {
        debug_assert!(self.over);
        self.seats[position].win(chips);
    }
    /// Puts the button back so the next hand starts on seat 0.
    pub fn reset_button(&mut self) {
        self.dealer = N - 1;
    }
}

/// Betting internals.
impl Game {
    fn min_to(&self) -> Chips {
        if self.stakes == 0 {
            self.blinds.1
        } else {
            self.stakes + self.min_raise
        }
    }
    fn live(&self) -> usize {
        self.seats.iter().filter(|s| s.is_live()).count()
    }
    fn commit(&mut self, position: Position, chips: Chips) -> Chips {
        let chips = self.seats[position].commit(chips);
        self.pot += chips;
        chips
    }
    fn fold(&mut self, position: Position) -> Action {
        self.seats[position].fold();
        Action::Fold
    }
    fn call(&mut self, position: Position) -> Action {
        let owed = (self.stakes - self.seat(position).stake()).max(0);
        if owed == 0 {
            return Action::Check;
        }
        let paid = self.commit(position, owed);
        if self.seat(position).is_shoving() {
            Action::Shove(self.seat(position).stake())
        } else {
            Action::Call(paid)
        }
    }
    fn raise(&mut self, position: Position, to: Chips) -> Result<Action, Rejection> {
        let prev = self.stakes;
        let stake = self.seat(position).stake();
        let max_to = stake + self.seat(position).stack();
        if max_to <= prev {
            return Err(Rejection::NoRaise);
        }
        let min_to = self.min_to();
        let target = to.max(stake + 1).min(max_to);
        let shove = target == max_to;
        if target < min_to && !shove {
            return Err(Rejection::UnderRaise { to: target, min: min_to });
        }
        if target <= prev && !shove {
            return Err(Rejection::NoIncrease(target));
        }
        if target <= stake {
            return Err(Rejection::NoIncrease(target));
        }
        self.commit(position, target - stake);
        let size = target - prev;
        self.stakes = target;
        let reopen = if prev == 0 {
            self.min_raise = self.blinds.1.max(size);
            true
        } else if size >= self.min_raise {
            self.min_raise = size;
            true
        } else {
            false
        };
        if reopen {
            for (i, seat) in self.seats.iter_mut().enumerate() {
                if i != position && seat.can_act() {
                    seat.set_acted(false);
                }
            }
        }
        Ok(if shove {
            Action::Shove(target)
        } else if prev == 0 {
            Action::Bet(target)
        } else {
            Action::Raise(target)
        })
    }
    fn post(&mut self, position: Position, blind: Chips) {
        let chips = self.commit(position, blind);
        if chips > 0 {
            let action = Action::Blind(chips);
            self.seats[position].touch(action);
            self.events.push(Event::Action {
                hand: self.hand,
                seat: position,
                action,
                pot: self.pot,
            });
        }
    }
    /// Next seat after `from` that still owes a decision this round.
    fn next_actor(&self, from: Position) -> Option<Position> {
        let stakes = self.stakes;
        self.next_index(from, |s| s.can_act() && (!s.acted() || s.stake() < stakes))
    }
    /// With at most one seat able to act and nothing owed, there is no one
    /// left to bet against; close the round so the board runs out.
    fn settle_quiet_round(&mut self) {
        let stakes = self.stakes;
        let actors = self.seats.iter().filter(|s| s.can_act()).count();
        if actors <= 1 {
            for seat in self.seats.iter_mut() {
                if seat.can_act() && seat.stake() == stakes {
                    seat.set_acted(true);
                }
            }
        }
    }
    fn move_button(&mut self) {
        let funded = |s: &Seat| s.stack() > 0;
        self.dealer = self.next_index(self.dealer, funded).unwrap_or(self.dealer);
        self.small = self.next_index(self.dealer, funded).unwrap_or(self.dealer);
        self.big = self.next_index(self.small, funded).unwrap_or(self.small);
    }
    fn deal_holes(&mut self) {
        let order = (1..=N)
            .map(|i| (self.dealer + i) % N)
            .filter(|i| !self.seats[*i].is_folded())
            .collect::<Vec<_>>();
        let firsts = order.iter().map(|_| self.deck.draw()).collect::<Vec<_>>();
        let seconds = order.iter().map(|_| self.deck.draw()).collect::<Vec<_>>();
        for ((i, a), b) in order.into_iter().zip(firsts).zip(seconds) {
            let hole = Hole::from((a, b));
            self.seats[i].deal(hole);
            self.events.push(Event::HoleCards {
                hand: self.hand,
                seat: i,
                hole: Some(hole).filter(|_| i == HUMAN),
            });
        }
    }
    fn award_uncontested(&mut self) {
        let winner = self
            .seats
            .iter()
            .position(Seat::is_live)
            .expect("one live seat");
        let pot = self.pot;
        self.seats[winner].win(pot);
        log::debug!("[game] P{} takes {} uncontested", winner, pot);
        self.events.push(Event::Award {
            hand: self.hand,
            award: Award {
                amount: pot,
                winners: vec![(winner, pot)],
                ranking: None,
                refund: false,
            },
            uncontested: true,
        });
        let rows = self
            .seats
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let mut row = Settlement::from((i, s.spent(), s.state(), None));
                row.reward = if i == winner { pot } else { 0 };
                row
            })
            .collect::<Vec<_>>();
        self.conclude(&rows);
    }
    fn conclude(&mut self, rows: &[Settlement]) {
        self.pot = 0;
        self.over = true;
        self.events.push(Event::HandEnd {
            hand: self.hand,
            results: rows.iter().map(PnL::from).collect(),
        });
        log::info!(
            "[game] hand #{} settled: {}",
            self.hand,
            rows.iter()
                .map(|r| format!("{} {:+}", self.seats[r.position].name(), r.pnl()))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} | pot {} | board {}", self.street, self.pot, self.board())?;
        for (i, seat) in self.seats.iter().enumerate() {
            let button = if i == self.dealer { "D" } else { " " };
            writeln!(f, "{} {}", button, seat)?;
        }
        Ok(())
    }
}
