use crate::SOLVER_URL;
use crate::cards::Hand;

/// Links a hand to the external 24 solver.
///
/// The solver takes the four card values as query parameters `n1..n4`, in
/// the order the cards were dealt. We only build the address; the response
/// is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solver {
    base: String,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SOLVER_URL)
    }
}

impl Solver {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
    pub fn base(&self) -> &str {
        &self.base
    }
    /// `n1=V1&n2=V2&n3=V3&n4=V4`
    pub fn query(hand: &Hand) -> String {
        hand.values()
            .iter()
            .enumerate()
            .map(|(i, v)| format!("n{}={}", i + 1, v))
            .collect::<Vec<_>>()
            .join("&")
    }
    /// Full solver address for this hand.
    pub fn url(&self, hand: &Hand) -> String {
        format!("{}?{}", self.base, Self::query(hand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn worked_example() {
        let hand = Hand::try_from("A♠ K♥ 7♣ 10♦").expect("parse");
        assert!(
            Solver::default().url(&hand)
                == "http://24solver.us-west-2.elasticbeanstalk.com/?n1=1&n2=13&n3=7&n4=10"
        );
    }

    #[test]
    fn idempotent() {
        let hand = Hand::random();
        let solver = Solver::default();
        assert!(solver.url(&hand) == solver.url(&hand));
    }

    #[test]
    fn suits_do_not_matter() {
        let a = Hand::try_from("J♠ Q♠ K♠ A♠").expect("parse");
        let b = Hand::try_from("J♥ Q♦ K♣ A♥").expect("parse");
        assert!(Solver::query(&a) == Solver::query(&b));
        assert!(Solver::query(&a) == "n1=11&n2=12&n3=13&n4=1");
    }

    #[test]
    fn custom_base() {
        let hand = Hand::try_from("2c 2c 2c 2c").expect("parse");
        let solver = Solver::new("https://example.test/solve");
        assert!(solver.url(&hand) == "https://example.test/solve?n1=2&n2=2&n3=2&n4=2");
    }
}
