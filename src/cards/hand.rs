use super::card::Card;
use crate::Arbitrary;
use crate::HAND_SIZE;

/// The four cards on the table, in deal order.
///
/// A Hand is replaced wholesale on every shuffle and never edited in place.
/// Cards are drawn independently, so the same card may appear twice; this is
/// not a deck.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
    /// Card values in deal order.
    pub fn values(&self) -> [u8; HAND_SIZE] {
        self.0.map(|c| c.value())
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }
    /// Four independent card draws.
    pub fn deal<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| Card::draw(rng)))
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        Self::deal(&mut rand::rng())
    }
}

/// [Card; 4] isomorphism
impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}
impl From<Hand> for [Card; HAND_SIZE] {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// Vec<Card> injection, only when exactly four cards are given
impl TryFrom<Vec<Card>> for Hand {
    type Error = anyhow::Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let n = cards.len();
        <[Card; HAND_SIZE]>::try_from(cards)
            .map(Self)
            .map_err(|_| anyhow::anyhow!("hand needs {} cards, got {}", HAND_SIZE, n))
    }
}

/// str isomorphism
/// this follows from Vec<Card> injection
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, String>>()
            .map_err(anyhow::Error::msg)
            .and_then(Self::try_from)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.map(|c| c.to_string());
        write!(f, "{}", cards.join(" "))
    }
}
