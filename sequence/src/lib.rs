pub use action::*;
pub use board::*;
pub use cards::*;
pub use cell_set::*;
pub use chips::*;
pub use deck::*;
pub use detector::*;
pub use errors::*;
pub use highlight::*;
pub use jacks::*;
pub use legal::*;
pub use protocol::*;
pub use rules::*;
pub use state::*;
pub use table::*;
pub use timeout::*;
pub use turn::*;
pub use visualization::*;

mod action;
#[cfg(test)]
mod arbitrary;
mod bitset;
mod board;
mod cards;
mod cell_set;
mod chips;
mod deck;
mod detector;
mod errors;
mod highlight;
mod jacks;
mod legal;
mod protocol;
mod rules;
mod state;
mod table;
mod timeout;
mod turn;
mod visualization;
