//! A player's seat: label, placeholder, hand, and the hit/stand buttons.

use cardboard::glam::Vec3;
use cardboard::{Entity, Input, Renderer};
use rand::Rng;

use crate::game::Phase;
use crate::{arrange, Card, CardSprite, Hand};
use crate::ui::{Button, Label};

/// Where a seat stands in the round.  Recomputed every frame from the
/// current hand value and round phase; never latched from events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// No cards yet.
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
    Tied,
    Bust,
    Blackjack,
}

impl PlayerState {
    /// Status banner image for terminal states, under `content/player/`.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            PlayerState::Won => Some("won.png"),
            PlayerState::Lost => Some("lost.png"),
            PlayerState::Tied => Some("tied.png"),
            PlayerState::Bust => Some("bust.png"),
            PlayerState::Blackjack => Some("blackjack.png"),
            PlayerState::Idle | PlayerState::Playing => None,
        }
    }

    /// Derive the state for a seat from its hand and the round phase.
    /// `dealer_total` is the dealer's final total, present once the round
    /// has settled.
    pub fn derive(hand: &Hand, phase: Phase, dealer_total: Option<u32>) -> Self {
        if hand.is_empty() {
            return PlayerState::Idle;
        }
        if hand.is_bust() {
            return PlayerState::Bust;
        }
        if hand.is_blackjack() {
            return PlayerState::Blackjack;
        }
        let Some(dealer_total) = dealer_total else {
            return PlayerState::Playing;
        };
        if phase != Phase::Settled {
            return PlayerState::Playing;
        }
        if dealer_total > 21 {
            return PlayerState::Won;
        }
        match hand.value().cmp(&dealer_total) {
            std::cmp::Ordering::Greater => PlayerState::Won,
            std::cmp::Ordering::Equal => PlayerState::Tied,
            std::cmp::Ordering::Less => PlayerState::Lost,
        }
    }
}

// Child placement relative to the seat position, in pixels.
const PLACEHOLDER_OFFSET: Vec3 = Vec3::new(0.0, 52.0, 0.0);
const HAND_OFFSET: Vec3 = Vec3::new(-15.0, 52.0, 0.0);
const HIT_OFFSET: Vec3 = Vec3::new(-5.0, 330.0, 0.0);
const STAND_OFFSET: Vec3 = Vec3::new(91.0, 330.0, 0.0);

/// One seat at the table.  Only the current seat gets buttons; everyone
/// gets a numbered label, a card placeholder, and their hand.
pub struct PlayerSeat {
    pub pos: Vec3,
    pub hand: Hand,
    is_current: bool,
    stood: bool,
    state: PlayerState,
    label: Label,
    placeholder: Label,
    hit_button: Button,
    stand_button: Button,
    banner: Option<(PlayerState, Label)>,
    sprites: Vec<CardSprite>,
}

impl PlayerSeat {
    pub fn new(renderer: &Renderer, number: u8, is_current: bool, pos: Vec3) -> Self {
        let label_path = if is_current {
            "content/player/player_you.png".to_string()
        } else {
            format!("content/player/player_{number}.png")
        };
        Self {
            pos,
            hand: Hand::new(),
            is_current,
            stood: false,
            state: PlayerState::Idle,
            label: Label::new(renderer, &label_path),
            placeholder: Label::new(renderer, "content/player/placeholder.png"),
            hit_button: Button::new(
                renderer,
                "content/player/hit.png",
                "content/player/hit_hover.png",
            ),
            stand_button: Button::new(
                renderer,
                "content/player/stand.png",
                "content/player/stand_hover.png",
            ),
            banner: None,
            sprites: Vec::new(),
        }
    }

    pub fn is_current(&self) -> bool {
        self.is_current
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// True once this seat has stood, busted, or been dealt a natural.
    pub fn turn_over(&self) -> bool {
        self.stood || self.hand.is_bust() || self.hand.is_blackjack()
    }

    pub fn stand(&mut self) {
        self.stood = true;
    }

    pub fn wants_hit(&self) -> bool {
        self.hit_button.clicked()
    }

    pub fn wants_stand(&self) -> bool {
        self.stand_button.clicked()
    }

    /// Take a card and re-fan the whole hand from the pivot.
    pub fn add_card(&mut self, renderer: &Renderer, card: Card, rng: &mut impl Rng) {
        self.hand.add_card(card);
        self.sprites.push(CardSprite::new(renderer, card));
        let layout = arrange(self.pos + HAND_OFFSET, self.sprites.len(), rng);
        for (sprite, transform) in self.sprites.iter_mut().zip(layout) {
            sprite.transform = transform;
        }
    }

    /// Throw in the cards for the next round.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.sprites.clear();
        self.stood = false;
        self.state = PlayerState::Idle;
    }

    /// Recompute the seat's state for this frame.
    pub fn refresh_state(&mut self, phase: Phase, dealer_total: Option<u32>) {
        self.state = PlayerState::derive(&self.hand, phase, dealer_total);
    }
}

impl Entity for PlayerSeat {
    fn update(&mut self, input: &Input, dt: f32) {
        if !self.is_current {
            return;
        }
        self.hit_button.update(input, dt);
        self.stand_button.update(input, dt);
    }

    fn render(&mut self, renderer: &mut Renderer) {
        self.label.transform.pos = self.pos;
        self.placeholder.transform.pos = self.pos + PLACEHOLDER_OFFSET;

        self.label.render(renderer);
        self.placeholder.render(renderer);
        for sprite in &mut self.sprites {
            sprite.render(renderer);
        }

        if let Some(name) = self.state.banner() {
            let cached = matches!(&self.banner, Some((s, _)) if *s == self.state);
            if !cached {
                let label = Label::new(renderer, &format!("content/player/{name}"));
                self.banner = Some((self.state, label));
            }
            if let Some((_, banner)) = self.banner.as_mut() {
                banner.transform.pos = self.pos + PLACEHOLDER_OFFSET;
                banner.render(renderer);
            }
        }

        if self.is_current {
            self.hit_button.transform.pos = self.pos + HIT_OFFSET;
            self.stand_button.transform.pos = self.pos + STAND_OFFSET;
            self.hit_button.render(renderer);
            self.stand_button.render(renderer);
        }
    }
}
