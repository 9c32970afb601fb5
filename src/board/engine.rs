//! Board engine: dealing, revealing, pairwise comparison, hiding.
//!
//! The board owns the 16 cards, the pending selection, and the match
//! rule. It never schedules anything itself: a mismatch leaves both
//! cards face-up, and the caller decides when to flip them back (see
//! [`crate::session`] for the delayed-hide plumbing).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::card::{Card, CardState, Position, Symbol};
use super::{CARD_COUNT, PAIR_COUNT};
use crate::core::config::ConfigError;
use crate::core::rng::GameRng;

/// Identifies one dealt board within a session.
///
/// Bumped on every deal. Delayed hides carry the id they were issued
/// against, so a hide outliving its board cannot touch the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardId(pub u64);

impl BoardId {
    /// Create a new board id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The id of the next deal.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.0)
    }
}

/// Outcome of a single reveal call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// The card was already face-up or matched; nothing changed.
    Ignored,

    /// First card of a comparison. It stays face-up as the pending
    /// selection until a second card is revealed.
    FirstPick { position: Position, symbol: Symbol },

    /// The second card matched the pending selection; both are Matched.
    Match { first: Position, second: Position },

    /// The second card did not match. Both stay Revealed; the caller is
    /// expected to hide them after the configured display delay.
    Mismatch { first: Position, second: Position },
}

/// A dealt board of 16 cards hiding 8 symbol pairs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    cards: Vec<Card>,
    pending: Option<Position>,
    matched: u8,
}

impl Board {
    /// Deal a fresh board from a symbol pool.
    ///
    /// Samples 8 distinct symbols from the pool without repetition,
    /// duplicates each, and shuffles the 16 faces onto the grid with the
    /// injected RNG. Duplicates in the pool collapse before counting.
    pub fn deal(id: BoardId, pool: &[Symbol], rng: &mut GameRng) -> Result<Self, ConfigError> {
        let mut distinct: Vec<Symbol> = Vec::with_capacity(pool.len());
        for &symbol in pool {
            if !distinct.contains(&symbol) {
                distinct.push(symbol);
            }
        }
        if distinct.len() < PAIR_COUNT {
            return Err(ConfigError::PoolTooSmall {
                required: PAIR_COUNT,
                found: distinct.len(),
            });
        }

        let mut faces = rng.sample_distinct(&distinct, PAIR_COUNT);
        faces.extend_from_within(..);
        rng.shuffle(&mut faces);

        debug!(%id, seed = rng.seed(), "dealt board");
        Ok(Self::with_faces(id, faces))
    }

    /// Build a board with a fixed layout, for tests and replays.
    ///
    /// Every symbol must appear exactly twice.
    pub fn from_layout(id: BoardId, layout: [Symbol; CARD_COUNT]) -> Result<Self, ConfigError> {
        let mut counts: FxHashMap<Symbol, u8> = FxHashMap::default();
        for &symbol in &layout {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        for (&symbol, &count) in &counts {
            if count != 2 {
                return Err(ConfigError::UnpairedSymbol(symbol));
            }
        }

        Ok(Self::with_faces(id, layout.to_vec()))
    }

    fn with_faces(id: BoardId, faces: Vec<Symbol>) -> Self {
        debug_assert_eq!(faces.len(), CARD_COUNT);
        Self {
            id,
            cards: faces.into_iter().map(Card::hidden).collect(),
            pending: None,
            matched: 0,
        }
    }

    /// Reveal the card at `position`.
    ///
    /// Revealing a card that is already face-up (including the pending
    /// selection itself) or matched is a no-op returning
    /// [`RevealOutcome::Ignored`].
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range; that is a contract
    /// violation in the caller, not a game condition.
    pub fn reveal(&mut self, position: Position) -> RevealOutcome {
        assert!(position.in_bounds(), "{position} is off the board");

        if !self.cards[position.index()].is_hidden() {
            trace!(board = %self.id, %position, "reveal ignored");
            return RevealOutcome::Ignored;
        }

        self.cards[position.index()].state = CardState::Revealed;
        let symbol = self.cards[position.index()].symbol;

        match self.pending.take() {
            None => {
                self.pending = Some(position);
                RevealOutcome::FirstPick { position, symbol }
            }
            Some(first) => {
                if self.cards[first.index()].symbol == symbol {
                    self.cards[first.index()].state = CardState::Matched;
                    self.cards[position.index()].state = CardState::Matched;
                    self.matched += 2;
                    debug!(board = %self.id, %first, second = %position, %symbol, "pair matched");
                    RevealOutcome::Match {
                        first,
                        second: position,
                    }
                } else {
                    debug!(board = %self.id, %first, second = %position, "mismatch");
                    RevealOutcome::Mismatch {
                        first,
                        second: position,
                    }
                }
            }
        }
    }

    /// Flip a mismatched pair face-down again.
    ///
    /// Only cards still in the Revealed state are touched: a card that
    /// has since become Matched (or was never revealed) is silently
    /// absorbed, so a delayed hide racing a fast player is harmless.
    pub fn hide(&mut self, first: Position, second: Position) {
        for position in [first, second] {
            assert!(position.in_bounds(), "{position} is off the board");
            let card = &mut self.cards[position.index()];
            if card.is_revealed() {
                card.state = CardState::Hidden;
            } else {
                trace!(board = %self.id, %position, "hide absorbed");
            }
        }

        // A comparison cannot stay pending on a face-down card.
        if let Some(pending) = self.pending {
            if self.cards[pending.index()].is_hidden() {
                self.pending = None;
            }
        }
    }

    /// True iff all 16 cards are matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched as usize == CARD_COUNT
    }

    /// This board's id within the session.
    #[must_use]
    pub fn id(&self) -> BoardId {
        self.id
    }

    /// The card at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    #[must_use]
    pub fn card(&self, position: Position) -> &Card {
        assert!(position.in_bounds(), "{position} is off the board");
        &self.cards[position.index()]
    }

    /// All 16 cards in row-major order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The first card of an in-progress comparison, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Position> {
        self.pending
    }

    /// How many cards are matched so far.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(faces: &str) -> [Symbol; CARD_COUNT] {
        let faces: Vec<Symbol> = faces.chars().map(Symbol::new).collect();
        faces.try_into().expect("layout must have 16 faces")
    }

    fn board(faces: &str) -> Board {
        Board::from_layout(BoardId::new(0), layout(faces)).unwrap()
    }

    #[test]
    fn test_deal_has_eight_pairs() {
        let mut rng = GameRng::new(42);
        let board = Board::deal(BoardId::new(0), &crate::core::DEFAULT_SYMBOLS, &mut rng).unwrap();

        let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
        for card in board.cards() {
            *counts.entry(card.symbol).or_insert(0) += 1;
            assert!(card.is_hidden());
        }

        assert_eq!(counts.len(), PAIR_COUNT);
        assert!(counts.values().all(|&count| count == 2));
        assert_eq!(board.pending(), None);
        assert_eq!(board.matched_count(), 0);
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = Board::deal(
            BoardId::new(0),
            &crate::core::DEFAULT_SYMBOLS,
            &mut GameRng::new(42),
        )
        .unwrap();
        let b = Board::deal(
            BoardId::new(0),
            &crate::core::DEFAULT_SYMBOLS,
            &mut GameRng::new(42),
        )
        .unwrap();

        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn test_deal_pool_too_small() {
        let pool: Vec<Symbol> = "ABCDEFG".chars().map(Symbol::new).collect();
        let result = Board::deal(BoardId::new(0), &pool, &mut GameRng::new(1));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::PoolTooSmall {
                required: 8,
                found: 7
            }
        );
    }

    #[test]
    fn test_deal_collapses_duplicate_pool_entries() {
        let pool: Vec<Symbol> = "AABBCCDDEEFFGG".chars().map(Symbol::new).collect();
        let result = Board::deal(BoardId::new(0), &pool, &mut GameRng::new(1));

        assert!(result.is_err());
    }

    #[test]
    fn test_from_layout_rejects_unpaired() {
        let result = Board::from_layout(BoardId::new(0), layout("ABABCDCDEFEFGHGA"));
        assert!(matches!(result, Err(ConfigError::UnpairedSymbol(_))));
    }

    #[test]
    fn test_first_pick() {
        let mut board = board("ABABCDCDEFEFGHGH");

        let outcome = board.reveal(Position::new(0));

        assert_eq!(
            outcome,
            RevealOutcome::FirstPick {
                position: Position::new(0),
                symbol: Symbol::new('A'),
            }
        );
        assert_eq!(board.pending(), Some(Position::new(0)));
        assert!(board.card(Position::new(0)).is_revealed());

        let revealed = board.cards().iter().filter(|c| c.is_revealed()).count();
        assert_eq!(revealed, 1);
    }

    #[test]
    fn test_repick_pending_card_is_ignored() {
        let mut board = board("ABABCDCDEFEFGHGH");

        board.reveal(Position::new(0));
        let outcome = board.reveal(Position::new(0));

        assert_eq!(outcome, RevealOutcome::Ignored);
        assert_eq!(board.pending(), Some(Position::new(0)));
        assert_eq!(board.matched_count(), 0);
    }

    #[test]
    fn test_match_transitions_both_cards() {
        let mut board = board("ABABCDCDEFEFGHGH");

        board.reveal(Position::new(0));
        let outcome = board.reveal(Position::new(2));

        assert_eq!(
            outcome,
            RevealOutcome::Match {
                first: Position::new(0),
                second: Position::new(2),
            }
        );
        assert!(board.card(Position::new(0)).is_matched());
        assert!(board.card(Position::new(2)).is_matched());
        assert_eq!(board.pending(), None);
        assert_eq!(board.matched_count(), 2);
    }

    #[test]
    fn test_mismatch_leaves_both_revealed() {
        let mut board = board("ABABCDCDEFEFGHGH");

        board.reveal(Position::new(0));
        let outcome = board.reveal(Position::new(1));

        assert_eq!(
            outcome,
            RevealOutcome::Mismatch {
                first: Position::new(0),
                second: Position::new(1),
            }
        );
        assert!(board.card(Position::new(0)).is_revealed());
        assert!(board.card(Position::new(1)).is_revealed());
        assert_eq!(board.pending(), None);
    }

    #[test]
    fn test_reveal_matched_card_is_ignored() {
        let mut board = board("ABABCDCDEFEFGHGH");

        board.reveal(Position::new(0));
        board.reveal(Position::new(2));
        let outcome = board.reveal(Position::new(0));

        assert_eq!(outcome, RevealOutcome::Ignored);
        assert!(board.card(Position::new(0)).is_matched());
    }

    #[test]
    fn test_hide_returns_mismatched_pair_to_hidden() {
        let mut board = board("ABABCDCDEFEFGHGH");

        board.reveal(Position::new(0));
        board.reveal(Position::new(1));
        board.hide(Position::new(0), Position::new(1));

        assert!(board.card(Position::new(0)).is_hidden());
        assert!(board.card(Position::new(1)).is_hidden());
    }

    #[test]
    fn test_hide_never_unmatches() {
        let mut board = board("ABABCDCDEFEFGHGH");

        board.reveal(Position::new(0));
        board.reveal(Position::new(2));
        board.hide(Position::new(0), Position::new(2));

        assert!(board.card(Position::new(0)).is_matched());
        assert!(board.card(Position::new(2)).is_matched());
        assert_eq!(board.matched_count(), 2);
    }

    #[test]
    fn test_hide_is_idempotent() {
        let mut board = board("ABABCDCDEFEFGHGH");

        board.reveal(Position::new(0));
        board.reveal(Position::new(1));
        board.hide(Position::new(0), Position::new(1));
        board.hide(Position::new(0), Position::new(1));

        assert!(board.card(Position::new(0)).is_hidden());
        assert!(board.card(Position::new(1)).is_hidden());
    }

    #[test]
    fn test_hide_pending_card_clears_pending() {
        let mut board = board("ABABCDCDEFEFGHGH");

        board.reveal(Position::new(0));
        board.hide(Position::new(0), Position::new(0));

        assert_eq!(board.pending(), None);
        assert!(board.card(Position::new(0)).is_hidden());
    }

    #[test]
    fn test_reveal_while_mismatch_awaits_hide() {
        let mut board = board("ABABCDCDEFEFGHGH");

        // Mismatched pair still face-up, player keeps going.
        board.reveal(Position::new(0));
        board.reveal(Position::new(1));
        let outcome = board.reveal(Position::new(2));

        assert_eq!(
            outcome,
            RevealOutcome::FirstPick {
                position: Position::new(2),
                symbol: Symbol::new('A'),
            }
        );
        assert!(board.card(Position::new(0)).is_revealed());
        assert!(board.card(Position::new(1)).is_revealed());
    }

    #[test]
    fn test_complete_board() {
        let mut board = board("AABBCCDDEEFFGGHH");

        for pair in 0..PAIR_COUNT as u8 {
            assert!(!board.is_complete());
            board.reveal(Position::new(pair * 2));
            board.reveal(Position::new(pair * 2 + 1));
        }

        assert!(board.is_complete());
        assert_eq!(board.matched_count(), CARD_COUNT);
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_reveal_out_of_range_panics() {
        let mut board = board("ABABCDCDEFEFGHGH");
        board.reveal(Position::new(16));
    }

    #[test]
    fn test_board_id_next() {
        assert_eq!(BoardId::new(0).next(), BoardId::new(1));
        assert_eq!(format!("{}", BoardId::new(3)), "Board(3)");
    }
}
