use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    CardId, HandUpdateError, Participant, PlayerId, SetupError, ALL_RANKS, ALL_SUITS,
    ALL_VARIANTS, NUM_CORNER_CARDS,
};

/// 52 ranks × 2 variants + 4 corner cards.
pub const DECK_SIZE: usize = 108;

/// Builds the full deck in a fixed order: per suit and variant, the face
/// cards followed by the jack, then the four corner cards.
pub fn create_deck() -> Vec<CardId> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in ALL_SUITS {
        for variant in ALL_VARIANTS {
            deck.extend(ALL_RANKS.iter().map(|&rank| CardId::Face {
                suit,
                rank,
                variant,
            }));
            deck.push(CardId::Jack { suit, variant });
        }
    }
    deck.extend((1..=NUM_CORNER_CARDS).map(|variant| CardId::Corner { variant }));
    deck
}

/// Returns a uniformly shuffled copy of `deck`; the input is left as is.
pub fn shuffle<R: Rng + ?Sized>(deck: &[CardId], rng: &mut R) -> Vec<CardId> {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

pub fn create_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<CardId> {
    shuffle(&create_deck(), rng)
}

/// The cards held by one player. Only that player may see them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateHand {
    pub uid: PlayerId,
    pub cards: Vec<CardId>,
    pub hand_version: u64,
}

/// The dealer's piles, shared by all players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateDeck {
    /// Cards are drawn from the front.
    pub draw_pile: Vec<CardId>,
    pub discard_pile: Vec<CardId>,
    pub deck_version: u64,
}

/// Shuffles a fresh deck and deals `hand_size` cards to every participant, in
/// the given order, from the front of the pile.
pub fn deal<R: Rng + ?Sized>(
    participants: &[Participant],
    hand_size: usize,
    rng: &mut R,
) -> Result<(PrivateDeck, Vec<PrivateHand>), SetupError> {
    let needed = participants.len() * hand_size;
    if needed > DECK_SIZE {
        return Err(SetupError::NotEnoughCards {
            needed,
            available: DECK_SIZE,
        });
    }
    let mut draw_pile = create_shuffled_deck(rng);
    let hands = participants
        .iter()
        .map(|p| PrivateHand {
            uid: p.uid.clone(),
            cards: draw_pile.drain(..hand_size).collect(),
            hand_version: 1,
        })
        .collect();
    let deck = PrivateDeck {
        draw_pile,
        discard_pile: Vec::new(),
        deck_version: 1,
    };
    Ok((deck, hands))
}

impl PrivateDeck {
    /// Removes one copy of `card` from `hand`, discards it and draws a
    /// replacement. Returns the drawn card, or `None` if the draw pile is
    /// exhausted.
    ///
    /// On error neither the hand nor the deck is changed.
    pub fn settle_play(
        &mut self,
        hand: &mut PrivateHand,
        card: CardId,
    ) -> Result<Option<CardId>, HandUpdateError> {
        let idx = hand
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or_else(|| HandUpdateError::CardNotInHand {
                uid: hand.uid.clone(),
                card,
            })?;
        hand.cards.remove(idx);
        self.discard_pile.push(card);

        let drawn = if self.draw_pile.is_empty() {
            warn!(uid = %hand.uid, "Draw pile is exhausted, no replacement card");
            None
        } else {
            Some(self.draw_pile.remove(0))
        };
        hand.cards.extend(drawn);
        hand.hand_version += 1;
        self.deck_version += 1;
        Ok(drawn)
    }
}
