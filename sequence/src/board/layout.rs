use crate::BaseCard;
use crate::Rank::*;
use crate::Suit::*;

const X: BaseCard = BaseCard::Corner;

const fn f(suit: crate::Suit, rank: crate::Rank) -> BaseCard {
    BaseCard::Face { suit, rank }
}

/// The labels of all 100 cells, row by row.
#[rustfmt::skip]
pub static BOARD_LAYOUT: [BaseCard; 100] = [
    // row 0
    X, f(Spade, Two), f(Spade, Three), f(Spade, Four), f(Spade, Five),
    f(Spade, Six), f(Spade, Seven), f(Spade, Eight), f(Spade, Nine), X,
    // row 1
    f(Clover, Six), f(Clover, Five), f(Clover, Four), f(Clover, Three), f(Clover, Two),
    f(Heart, Ace), f(Heart, King), f(Heart, Queen), f(Heart, Ten), f(Spade, Ten),
    // row 2
    f(Clover, Seven), f(Spade, Ace), f(Diamond, Two), f(Diamond, Three), f(Diamond, Four),
    f(Diamond, Five), f(Diamond, Six), f(Diamond, Seven), f(Heart, Nine), f(Spade, Queen),
    // row 3
    f(Clover, Eight), f(Spade, King), f(Clover, Six), f(Clover, Five), f(Clover, Four),
    f(Clover, Three), f(Clover, Two), f(Diamond, Eight), f(Heart, Eight), f(Spade, King),
    // row 4
    f(Clover, Nine), f(Spade, Queen), f(Clover, Seven), f(Heart, Six), f(Heart, Five),
    f(Heart, Four), f(Heart, Ace), f(Diamond, Nine), f(Heart, Seven), f(Spade, Ace),
    // row 5
    f(Clover, Ten), f(Spade, Ten), f(Clover, Eight), f(Heart, Seven), f(Heart, Two),
    f(Heart, Three), f(Heart, King), f(Diamond, Ten), f(Heart, Six), f(Diamond, Two),
    // row 6
    f(Clover, Queen), f(Spade, Nine), f(Clover, Nine), f(Heart, Eight), f(Heart, Nine),
    f(Heart, Ten), f(Heart, Queen), f(Diamond, Queen), f(Heart, Five), f(Diamond, Three),
    // row 7
    f(Clover, King), f(Spade, Eight), f(Clover, Ten), f(Clover, Queen), f(Clover, King),
    f(Clover, Ace), f(Diamond, Ace), f(Diamond, King), f(Heart, Four), f(Diamond, Four),
    // row 8
    f(Clover, Ace), f(Spade, Seven), f(Spade, Six), f(Spade, Five), f(Spade, Four),
    f(Spade, Three), f(Spade, Two), f(Heart, Two), f(Heart, Three), f(Diamond, Five),
    // row 9
    X, f(Diamond, Ace), f(Diamond, King), f(Diamond, Queen), f(Diamond, Ten),
    f(Diamond, Nine), f(Diamond, Eight), f(Diamond, Seven), f(Diamond, Six), X,
];
