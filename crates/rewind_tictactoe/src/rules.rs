//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from the
//! history machine so they can be tested and composed on their own.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
