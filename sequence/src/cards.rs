use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The suit of a [card](CardId).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Clover,
}

/// The rank of a non-jack face card.
///
/// Jacks are not a rank here: they have no place on the board and are
/// represented by [`CardId::Jack`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Queen,
    King,
    Ace,
}

/// Each face card and each jack exists twice in the deck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Variant {
    One = 1,
    Two = 2,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Clover];

pub const ALL_RANKS: [Rank; 12] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

pub const ALL_VARIANTS: [Variant; 2] = [Variant::One, Variant::Two];

/// Number of distinct corner cards in the deck.
pub const NUM_CORNER_CARDS: u8 = 4;

/// A single card of the 108-card deck.
///
/// The textual form is `"{suit}_{rank}_{variant}"`, e.g. `"spade_2_1"` or
/// `"heart_j_2"`, and `"o_o_{n}"` for the four corner cards. It is only used
/// for (de)serialization, everything else works with the enum directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CardId {
    Face {
        suit: Suit,
        rank: Rank,
        variant: Variant,
    },
    Jack {
        suit: Suit,
        variant: Variant,
    },
    /// Variant is in `1..=4`.
    Corner { variant: u8 },
}

/// What a board cell is labeled with: a card identity without its variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BaseCard {
    Face { suit: Suit, rank: Rank },
    Corner,
}

impl CardId {
    /// The board label this card maps to, `None` for jacks.
    pub fn base(self) -> Option<BaseCard> {
        match self {
            CardId::Face { suit, rank, .. } => Some(BaseCard::Face { suit, rank }),
            CardId::Corner { .. } => Some(BaseCard::Corner),
            CardId::Jack { .. } => None,
        }
    }

    pub fn is_jack(self) -> bool {
        matches!(self, CardId::Jack { .. })
    }
}

impl Suit {
    fn as_str(self) -> &'static str {
        match self {
            Suit::Spade => "spade",
            Suit::Heart => "heart",
            Suit::Diamond => "diamond",
            Suit::Clover => "clover",
        }
    }
}

impl Rank {
    fn as_str(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Queen => "q",
            Rank::King => "k",
            Rank::Ace => "a",
        }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            CardId::Face {
                suit,
                rank,
                variant,
            } => write!(f, "{}_{}_{}", suit.as_str(), rank.as_str(), variant as u8),
            CardId::Jack { suit, variant } => write!(f, "{}_j_{}", suit.as_str(), variant as u8),
            CardId::Corner { variant } => write!(f, "o_o_{}", variant),
        }
    }
}

impl std::fmt::Display for BaseCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            BaseCard::Face { suit, rank } => write!(f, "{}_{}", suit.as_str(), rank.as_str()),
            BaseCard::Corner => write!(f, "corner"),
        }
    }
}

/// The error type for the [`FromStr`] instance of [`CardId`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardIdParseError {
    #[error("card id '{0}' does not have the form suit_rank_variant")]
    Malformed(String),
    #[error("unknown suit '{0}'")]
    InvalidSuit(String),
    #[error("unknown rank '{0}'")]
    InvalidRank(String),
    #[error("invalid variant '{0}'")]
    InvalidVariant(String),
}

impl FromStr for CardId {
    type Err = CardIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('_');
        let (Some(suit_str), Some(rank_str), Some(variant_str), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(CardIdParseError::Malformed(String::from(s)));
        };
        let invalid_variant = || CardIdParseError::InvalidVariant(String::from(variant_str));

        if suit_str == "o" && rank_str == "o" {
            return match variant_str.parse::<u8>() {
                Ok(variant @ 1..=NUM_CORNER_CARDS) => Ok(CardId::Corner { variant }),
                _ => Err(invalid_variant()),
            };
        }

        let suit = match suit_str {
            "spade" => Suit::Spade,
            "heart" => Suit::Heart,
            "diamond" => Suit::Diamond,
            "clover" => Suit::Clover,
            _ => return Err(CardIdParseError::InvalidSuit(String::from(suit_str))),
        };
        let variant = match variant_str {
            "1" => Variant::One,
            "2" => Variant::Two,
            _ => return Err(invalid_variant()),
        };
        let rank = match rank_str {
            "j" => return Ok(CardId::Jack { suit, variant }),
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "q" => Rank::Queen,
            "k" => Rank::King,
            "a" => Rank::Ace,
            _ => return Err(CardIdParseError::InvalidRank(String::from(rank_str))),
        };
        Ok(CardId::Face {
            suit,
            rank,
            variant,
        })
    }
}

impl TryFrom<String> for CardId {
    type Error = CardIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CardId> for String {
    fn from(card: CardId) -> String {
        card.to_string()
    }
}

/// Shorthand for creating cards from their textual id.
///
/// This macro is just calling the [`FromStr`] instance of [`CardId`].
/// ```
/// # use sequence::{card, CardId, Rank, Suit, Variant};
/// assert_eq!(
///     card!("heart_10_2"),
///     CardId::Face { suit: Suit::Heart, rank: Rank::Ten, variant: Variant::Two }
/// );
/// assert_eq!(card!("o_o_3"), CardId::Corner { variant: 3 });
/// ```
#[macro_export]
macro_rules! card {
    ($id:literal) => {
        <$crate::CardId as std::str::FromStr>::from_str($id)
            .expect("Invalid card id given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_shapes() {
        assert_eq!(
            card!("clover_7_1"),
            CardId::Face {
                suit: Suit::Clover,
                rank: Rank::Seven,
                variant: Variant::One
            }
        );
        assert_eq!(
            card!("spade_j_2"),
            CardId::Jack {
                suit: Suit::Spade,
                variant: Variant::Two
            }
        );
        assert_eq!(card!("o_o_4"), CardId::Corner { variant: 4 });
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            "spade_2".parse::<CardId>(),
            Err(CardIdParseError::Malformed(_))
        ));
        assert!(matches!(
            "club_2_1".parse::<CardId>(),
            Err(CardIdParseError::InvalidSuit(_))
        ));
        assert!(matches!(
            "heart_1_1".parse::<CardId>(),
            Err(CardIdParseError::InvalidRank(_))
        ));
        assert!(matches!(
            "heart_2_3".parse::<CardId>(),
            Err(CardIdParseError::InvalidVariant(_))
        ));
        assert!(matches!(
            "o_o_5".parse::<CardId>(),
            Err(CardIdParseError::InvalidVariant(_))
        ));
        assert!(matches!(
            "o_o_0".parse::<CardId>(),
            Err(CardIdParseError::InvalidVariant(_))
        ));
    }

    #[test]
    fn serializes_as_text_id() {
        let card = card!("diamond_q_2");
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"diamond_q_2\"");
        assert_eq!(serde_json::from_str::<CardId>(&json).unwrap(), card);
        assert!(serde_json::from_str::<CardId>("\"diamond_x_2\"").is_err());
    }

    #[test]
    fn base_drops_variant() {
        assert_eq!(card!("heart_5_1").base(), card!("heart_5_2").base());
        assert_eq!(card!("o_o_1").base(), Some(BaseCard::Corner));
        assert_eq!(card!("heart_j_1").base(), None);
    }

    quickcheck::quickcheck! {
        fn display_parse_roundtrip(card: CardId) -> bool {
            card.to_string().parse::<CardId>() == Ok(card)
        }
    }
}
