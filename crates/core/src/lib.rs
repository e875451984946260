//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod consumables;
pub mod deck;
pub mod events;
pub mod hand;
pub mod joker;
pub mod pipeline;
pub mod rng;
pub mod run;
pub mod scoring;
pub mod shop;
pub mod state;

pub use cards::*;
pub use config::*;
pub use consumables::*;
pub use deck::*;
pub use events::*;
pub use hand::*;
pub use joker::*;
pub use pipeline::*;
pub use rng::*;
pub use run::*;
pub use scoring::*;
pub use shop::*;
pub use state::*;
