use super::card::Card;
use super::hand::Hand;

/// A seat's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, serde::Serialize)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    /// Higher card first.
    pub fn sorted(&self) -> (Card, Card) {
        if self.0.rank() >= self.1.rank() {
            (self.0, self.1)
        } else {
            (self.1, self.0)
        }
    }
    pub fn suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }
    pub fn paired(&self) -> bool {
        self.0.rank() == self.1.rank()
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b, "duplicate hole card {}", a);
        Self(a, b)
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        Hand::add(Hand::from(hole.0), Hand::from(hole.1))
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] if a != b => Ok(Self(*a, *b)),
            _ => Err(format!("expected 2 distinct cards: {}", s)),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}
