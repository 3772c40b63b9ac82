use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// Community cards in the order they were dealt.
///
/// The engine may hold cards here before they are disclosed. How many are
/// public is tracked by the game, so `Board` itself knows nothing about
/// visibility; use [`Board::prefix`] to take the revealed part.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn add(&mut self, card: Card) {
        assert!(self.0.len() < 5, "board is full");
        self.0.push(card);
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    /// The first `n` cards.
    pub fn prefix(&self, n: usize) -> Board {
        Self(self.0.iter().take(n).copied().collect())
    }
    pub fn street(&self) -> Street {
        match self.0.len() {
            0 => Street::Pref,
            3 => Street::Flop,
            4 => Street::Turn,
            5 => Street::Rive,
            n => panic!("no street with {} board cards", n),
        }
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.cards())
    }
}

impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        match cards.len() {
            0 | 3 | 4 | 5 => Ok(Self(cards)),
            n => Err(format!("a board cannot hold {} cards", n)),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
