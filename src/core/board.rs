//! Board module - the card deck and its state transitions
//!
//! The board owns the per-card state; pairing rules and turn sequencing live
//! in [`crate::core::round`]. Deck generation draws the first `pairs` symbols
//! from the active theme, duplicates each into a pair and shuffles the whole
//! deck with the seeded RNG.

use crate::core::rng::SimpleRng;
use crate::core::theme::Theme;
use crate::types::CardState;

/// A single card, identified by its index into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub symbol: &'static str,
    pub state: CardState,
}

/// The dealt deck for one round
#[derive(Debug, Clone)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Deal a fresh board: `pairs` symbol pairs from `theme`, shuffled.
    ///
    /// If the theme carries fewer symbols than requested the tail is padded
    /// with uniformly chosen symbols that are already in the deck. With the
    /// shipped themes (18 symbols, at most 18 pairs) padding never triggers.
    pub fn deal(theme: Theme, pairs: usize, rng: &mut SimpleRng) -> Self {
        let symbols = theme.symbols();
        let mut faces: Vec<&'static str> = symbols.iter().take(pairs).copied().collect();
        while faces.len() < pairs {
            faces.push(faces[rng.pick_index(faces.len())]);
        }

        let mut deck: Vec<Card> = faces
            .into_iter()
            .flat_map(|symbol| {
                [
                    Card {
                        symbol,
                        state: CardState::Hidden,
                    },
                    Card {
                        symbol,
                        state: CardState::Hidden,
                    },
                ]
            })
            .collect();
        rng.shuffle(&mut deck);

        Self { cards: deck }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn state(&self, index: usize) -> Option<CardState> {
        self.cards.get(index).map(|c| c.state)
    }

    /// Turn a hidden card face up. Returns false if the index is out of
    /// range or the card is not hidden.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.cards.get_mut(index) {
            Some(card) if card.state == CardState::Hidden => {
                card.state = CardState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Turn a revealed card back face down
    pub fn conceal(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            if card.state == CardState::Revealed {
                card.state = CardState::Hidden;
            }
        }
    }

    /// Remove a revealed card from play
    pub fn mark_matched(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.state = CardState::Matched;
        }
    }

    /// Indices of all face-down cards
    pub fn hidden_indices(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.state == CardState::Hidden)
            .map(|(i, _)| i)
            .collect()
    }

    /// The other hidden card sharing `index`'s symbol, if its partner is
    /// still face down (it may instead be sitting revealed in the pending
    /// pair).
    pub fn hidden_partner_of(&self, index: usize) -> Option<usize> {
        let symbol = self.cards.get(index)?.symbol;
        self.cards
            .iter()
            .enumerate()
            .find(|(i, c)| *i != index && c.symbol == symbol && c.state == CardState::Hidden)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(pairs: usize) -> Board {
        let mut rng = SimpleRng::new(42);
        Board::deal(Theme::Fruits, pairs, &mut rng)
    }

    #[test]
    fn deal_produces_each_symbol_exactly_twice() {
        for pairs in [8usize, 12, 18] {
            let board = deal(pairs);
            assert_eq!(board.len(), pairs * 2);

            let mut counts = std::collections::HashMap::new();
            for card in board.cards() {
                *counts.entry(card.symbol).or_insert(0u32) += 1;
                assert_eq!(card.state, CardState::Hidden);
            }
            assert_eq!(counts.len(), pairs);
            assert!(counts.values().all(|&n| n == 2));
        }
    }

    #[test]
    fn padding_repeats_existing_symbols_when_theme_is_short() {
        // 20 pairs from an 18-symbol theme forces two padded pairs.
        let mut rng = SimpleRng::new(3);
        let board = Board::deal(Theme::Fruits, 20, &mut rng);
        assert_eq!(board.len(), 40);

        let mut counts = std::collections::HashMap::new();
        for card in board.cards() {
            *counts.entry(card.symbol).or_insert(0u32) += 1;
        }
        // Every face still comes from the theme and every count is even.
        for (symbol, n) in counts {
            assert!(Theme::Fruits.symbols().contains(&symbol));
            assert_eq!(n % 2, 0);
        }
    }

    #[test]
    fn reveal_rejects_non_hidden_cards() {
        let mut board = deal(8);
        assert!(board.reveal(0));
        assert!(!board.reveal(0), "already revealed");
        board.mark_matched(0);
        assert!(!board.reveal(0), "already matched");
        assert!(!board.reveal(999), "out of range");
    }

    #[test]
    fn conceal_only_touches_revealed_cards() {
        let mut board = deal(8);
        board.reveal(1);
        board.mark_matched(2);
        board.conceal(1);
        board.conceal(2);
        assert_eq!(board.state(1), Some(CardState::Hidden));
        assert_eq!(board.state(2), Some(CardState::Matched));
    }

    #[test]
    fn hidden_partner_skips_revealed_twin() {
        let mut board = deal(8);
        let first = 0;
        let partner = board.hidden_partner_of(first).unwrap();
        assert_eq!(
            board.card(first).unwrap().symbol,
            board.card(partner).unwrap().symbol
        );

        // Once the twin is revealed there is no hidden partner left.
        board.reveal(partner);
        assert_eq!(board.hidden_partner_of(first), None);
    }

    #[test]
    fn same_seed_same_deck() {
        let mut a = SimpleRng::new(7);
        let mut b = SimpleRng::new(7);
        let deck_a = Board::deal(Theme::Animals, 12, &mut a);
        let deck_b = Board::deal(Theme::Animals, 12, &mut b);
        assert_eq!(deck_a.cards(), deck_b.cards());
    }
}
