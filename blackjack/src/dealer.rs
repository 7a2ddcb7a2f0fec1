//! The dealer: a hand with a face-down hole card and house play rules.

use cardboard::glam::Vec3;
use cardboard::{Entity, Renderer};
use rand::Rng;

use crate::{arrange, Card, CardSprite, Deck, Hand};

/// The dealer stands on any total of 17 or more.
const DEALER_STAND: u32 = 17;

/// The house's seat: an up-card, a hole card dealt face down, and draws to
/// [`DEALER_STAND`] once every player has finished.
pub struct Dealer {
    pub pos: Vec3,
    pub hand: Hand,
    hole: Option<Card>,
    sprites: Vec<CardSprite>,
}

impl Dealer {
    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            hand: Hand::new(),
            hole: None,
            sprites: Vec::new(),
        }
    }

    fn add_card(&mut self, renderer: &Renderer, card: Card, rng: &mut impl Rng) {
        self.hand.add_card(card);
        self.sprites.push(CardSprite::new(renderer, card));
        let layout = arrange(self.pos, self.sprites.len(), rng);
        for (sprite, transform) in self.sprites.iter_mut().zip(layout) {
            sprite.transform = transform;
        }
    }

    /// Deal the opening two cards: one showing, one face down.  While the
    /// hole card is down it scores 0, so [`Hand::value`] is the dealer's
    /// visible total.
    pub fn deal_initial(&mut self, renderer: &Renderer, deck: &mut Deck, rng: &mut impl Rng) {
        if let Some(up) = deck.draw() {
            self.add_card(renderer, up, rng);
        }
        self.hole = deck.draw();
        if self.hole.is_some() {
            self.add_card(renderer, Card::face_down(), rng);
        }
    }

    /// Turn the hole card over in place; the fan layout stays put.
    pub fn reveal_hole(&mut self, renderer: &Renderer) {
        let Some(card) = self.hole.take() else {
            return;
        };
        let slot = self
            .hand
            .cards()
            .iter()
            .position(|c| c.is_face_down())
            .unwrap_or(self.hand.len() - 1);
        self.hand.replace_card(slot, card);
        let transform = self.sprites[slot].transform;
        self.sprites[slot] = CardSprite::new(renderer, card);
        self.sprites[slot].transform = transform;
    }

    /// Reveal the hole card, then draw until standing.
    pub fn play(&mut self, renderer: &Renderer, deck: &mut Deck, rng: &mut impl Rng) {
        self.reveal_hole(renderer);
        while self.hand.value() < DEALER_STAND {
            let Some(card) = deck.draw() else {
                break;
            };
            self.add_card(renderer, card, rng);
        }
        log::info!("dealer stands on {}", self.hand.value());
    }

    pub fn reset(&mut self) {
        self.hand.clear();
        self.sprites.clear();
        self.hole = None;
    }
}

impl Entity for Dealer {
    fn render(&mut self, renderer: &mut Renderer) {
        for sprite in &mut self.sprites {
            sprite.render(renderer);
        }
    }
}
