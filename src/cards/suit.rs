/// Card suit: spades, hearts, clubs, diamonds.
///
/// Suits carry no weight in the 24 Game; they only decide how a card is
/// drawn. Hearts and diamonds render red, the others black.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Suit {
    #[default]
    Spade = 0,
    Heart = 1,
    Club = 2,
    Diamond = 3,
}

impl Suit {
    /// All four suits in display order.
    pub const fn all() -> [Suit; 4] {
        [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond]
    }
    /// Unicode suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
        }
    }
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Heart | Suit::Diamond)
    }
    /// Uniform draw over the four suits.
    pub fn draw<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from(rng.random_range(0..4u8))
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Spade,
            1 => Suit::Heart,
            2 => Suit::Club,
            3 => Suit::Diamond,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "s" | "♠" => Ok(Suit::Spade),
            "h" | "♥" => Ok(Suit::Heart),
            "c" | "♣" => Ok(Suit::Club),
            "d" | "♦" => Ok(Suit::Diamond),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
