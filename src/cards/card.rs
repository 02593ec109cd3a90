use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// A playing card as a `(Rank, Suit)` pair.
///
/// Cards are immutable values. The 24 Game only ever reads a card's
/// [`value`](Card::value); the suit is kept for display.
///
/// # Parsing
///
/// Cards parse from rank then suit, e.g. `"A♠"`, `"10♦"` or `"Kh"`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// The number this card contributes to the puzzle, 1 through 13.
    pub fn value(&self) -> u8 {
        self.rank.value()
    }
    /// Independent uniform draws of suit and rank.
    pub fn draw<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let suit = Suit::draw(rng);
        let rank = Rank::draw(rng);
        Self::from((rank, suit))
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self::draw(&mut rand::rng())
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank, c.suit)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// str isomorphism
/// the suit is always the final character, so "10" needs no special casing
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => {
                let rank = Rank::try_from(&s[..i])?;
                let suit = Suit::try_from(&s[i..])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}
