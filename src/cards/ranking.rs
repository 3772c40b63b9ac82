/// A hand's category, weakest to strongest.
///
/// The discriminant is the category index exposed to presentations and
/// used by the bot's postflop strength table.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, serde::Serialize)]
pub enum Ranking {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl Ranking {
    pub const fn index(&self) -> usize {
        *self as usize
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Ranking::HighCard => "High Card",
            Ranking::OnePair => "Pair",
            Ranking::TwoPair => "Two Pair",
            Ranking::ThreeOAK => "Three of a Kind",
            Ranking::Straight => "Straight",
            Ranking::Flush => "Flush",
            Ranking::FullHouse => "Full House",
            Ranking::FourOAK => "Four of a Kind",
            Ranking::StraightFlush => "Straight Flush",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
