use super::card::Card;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered, shuffled stack of the 52 cards.
///
/// Rebuilt and shuffled at the start of every hand. Cards come off the
/// end. Four seats and a five-card board use at most 13 cards, so running
/// dry is a broken invariant and panics rather than being reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh deck in sorted order.
    pub fn new() -> Self {
        Self((0..52u8).map(Card::from).collect())
    }
    /// A fresh deck in uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.0.shuffle(rng);
        deck
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn draw(&mut self) -> Card {
        self.0.pop().expect("deck exhausted")
    }
}

/// Stacked deck: the last card of the vector is drawn first.
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let deck = Deck::shuffled(rng);
        assert_eq!(deck.len(), 52);
        assert_eq!(Hand::from(deck.0.as_slice()).size(), 52);
        assert_ne!(deck, Deck::new());
    }

    #[test]
    fn draws_from_the_top() {
        let mut deck = Deck::new();
        assert_eq!(deck.draw(), Card::from(51u8));
        assert_eq!(deck.len(), 51);
        assert!(!Hand::from(deck.0.as_slice()).contains(&Card::from(51u8)));
    }

    #[test]
    #[should_panic(expected = "deck exhausted")]
    fn exhaustion_is_fatal() {
        let mut deck = Deck::from(vec![]);
        deck.draw();
    }
}
