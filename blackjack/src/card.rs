//! Card identity, scoring, and the on-table card sprite.

use cardboard::{Drawable, Entity, Renderer, Transform};

/// Card suit, including the card back shown for face-down cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    /// Face-down: the card's identity is hidden and it scores 0.
    Back,
}

impl Suit {
    /// The four real suits, in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
            Suit::Back => "back",
        }
    }

    pub fn pip(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
            Suit::Back => "",
        }
    }

    fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Back => 'b',
        }
    }
}

/// A playing card: rank 1–13 (ace through king) in a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// The face-down card dealt as the dealer's hole card.
    pub const fn face_down() -> Self {
        Self {
            suit: Suit::Back,
            rank: 1,
        }
    }

    pub const fn is_face_down(self) -> bool {
        matches!(self.suit, Suit::Back)
    }

    /// Scoring value: aces count 11, faces count 10, number cards count
    /// their rank.  A face-down card counts 0 whatever its rank, as does
    /// any rank outside 1–13.
    pub const fn value(self) -> u32 {
        if self.is_face_down() {
            return 0;
        }
        match self.rank {
            1 => 11,
            2..=10 => self.rank as u32,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Image file name under the card content directory, `1h.png` through
    /// `13s.png`, with `1b.png` for the back.
    pub fn texture_name(self) -> String {
        format!("{}{}.png", self.rank, self.suit.letter())
    }
}

/// A card lying on the table: its identity plus the quad that draws it.
pub struct CardSprite {
    pub card: Card,
    pub transform: Transform,
    quad: Drawable,
}

impl CardSprite {
    pub fn new(renderer: &Renderer, card: Card) -> Self {
        let quad = crate::must_load(
            renderer,
            &format!("content/cards/{}", card.texture_name()),
        );
        Self {
            card,
            transform: Transform::default(),
            quad,
        }
    }
}

impl Entity for CardSprite {
    fn render(&mut self, renderer: &mut Renderer) {
        self.quad.set_transform(&self.transform);
        renderer.draw(&self.quad);
    }
}
