//! A blackjack table drawn with [`cardboard`].
//!
//! The scoring types ([`Card`], [`Hand`], [`Deck`]) are plain data with no
//! GPU strings attached; the table types ([`PlayerSeat`], [`Dealer`],
//! [`Table`], the widgets in [`ui`]) pair them with drawables and fixed
//! pixel layouts.

pub mod card;
pub mod dealer;
pub mod deck;
pub mod game;
pub mod hand;
pub mod player;
pub mod ui;

pub use card::{Card, CardSprite, Suit};
pub use dealer::Dealer;
pub use deck::{Deck, DECK_SIZE};
pub use game::{Phase, Table};
pub use hand::{arrange, Hand, CARD_SPACING};
pub use player::{PlayerSeat, PlayerState};
pub use ui::{Button, ButtonState, Label};

use cardboard::{Drawable, Renderer};

/// Load a quad or die trying; every asset here ships with the game.
pub(crate) fn must_load(renderer: &Renderer, path: &str) -> Drawable {
    renderer
        .load_quad(path)
        .unwrap_or_else(|err| panic!("couldn't load {path}: {err}"))
}
