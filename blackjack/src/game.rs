//! The table: seats, dealer, deck, and the round state machine.

use cardboard::glam::Vec3;
use cardboard::input::Key;
use cardboard::{App, Color, Entity, Renderer};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ui::Label;
use crate::{Dealer, Deck, PlayerSeat};

/// Felt green behind the background image.
const TABLE_COLOR: Color = Color::from_hex(0x095b43ff);

/// First seat position; the rest step right by [`SEAT_STRIDE`].
const FIRST_SEAT: Vec3 = Vec3::new(70.0, 325.0, 0.0);
const SEAT_STRIDE: Vec3 = Vec3::new(320.0, 0.0, 0.0);
const DEALER_POS: Vec3 = Vec3::new(560.0, -40.0, 0.0);

const SEAT_COUNT: u8 = 4;
/// The interactive seat ("you").
const CURRENT_SEAT: u8 = 3;

/// Reshuffle the shoe between rounds once it runs this low.
const RESHUFFLE_AT: usize = 20;

/// Where the round is.  Phases only move forward until the round restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The current seat may hit or stand.
    PlayerTurn,
    /// The dealer reveals the hole card and draws out.
    DealerTurn,
    /// Outcomes are on display; space deals the next round.
    Settled,
}

/// The whole blackjack table.
pub struct Table {
    background: Label,
    seats: Vec<PlayerSeat>,
    dealer: Dealer,
    deck: Deck,
    rng: StdRng,
    phase: Phase,
}

impl Table {
    fn start_round(&mut self, renderer: &Renderer) {
        if self.deck.remaining() < RESHUFFLE_AT {
            self.deck = Deck::shuffled(&mut self.rng);
        }
        for seat in &mut self.seats {
            seat.reset();
        }
        self.dealer.reset();

        for _ in 0..2 {
            for i in 0..self.seats.len() {
                if let Some(card) = self.deck.draw() {
                    self.seats[i].add_card(renderer, card, &mut self.rng);
                }
            }
        }
        self.dealer.deal_initial(renderer, &mut self.deck, &mut self.rng);
        self.phase = Phase::PlayerTurn;
    }

    fn dealer_total(&self) -> Option<u32> {
        (self.phase == Phase::Settled).then(|| self.dealer.hand.value())
    }

    fn current_seat(&self) -> usize {
        self.seats
            .iter()
            .position(|s| s.is_current())
            .expect("table always has a current seat")
    }
}

/// One process-wide generator drives shuffling and card jitter.  Set
/// `BLACKJACK_SEED` to make a whole session reproducible.
fn table_rng() -> StdRng {
    match std::env::var("BLACKJACK_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
    {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl cardboard::Game for Table {
    fn new(app: &mut App) -> Self {
        let mut rng = table_rng();
        let deck = Deck::shuffled(&mut rng);
        let seats = (1..=SEAT_COUNT)
            .map(|n| {
                PlayerSeat::new(
                    &app.renderer,
                    n,
                    n == CURRENT_SEAT,
                    FIRST_SEAT + (n - 1) as f32 * SEAT_STRIDE,
                )
            })
            .collect();
        let mut table = Self {
            background: Label::new(&app.renderer, "content/game/background.png"),
            seats,
            dealer: Dealer::new(DEALER_POS),
            deck,
            rng,
            phase: Phase::PlayerTurn,
        };
        table.start_round(&app.renderer);
        table
    }

    fn update(&mut self, app: &mut App, dt: f32) {
        for seat in &mut self.seats {
            seat.update(&app.input, dt);
        }

        match self.phase {
            Phase::PlayerTurn => {
                let you = self.current_seat();
                if self.seats[you].turn_over() {
                    self.phase = Phase::DealerTurn;
                } else if self.seats[you].wants_hit() {
                    if let Some(card) = self.deck.draw() {
                        self.seats[you].add_card(&app.renderer, card, &mut self.rng);
                    }
                } else if self.seats[you].wants_stand() {
                    self.seats[you].stand();
                    self.phase = Phase::DealerTurn;
                }
            }
            Phase::DealerTurn => {
                self.dealer
                    .play(&app.renderer, &mut self.deck, &mut self.rng);
                self.phase = Phase::Settled;
                let you = self.current_seat();
                log::info!(
                    "round settled: dealer {}, player {}",
                    self.dealer.hand.value(),
                    self.seats[you].hand.value()
                );
            }
            Phase::Settled => {
                if app.input.is_key_pressed(Key::Space) {
                    self.start_round(&app.renderer);
                }
            }
        }

        let dealer_total = self.dealer_total();
        let phase = self.phase;
        for seat in &mut self.seats {
            seat.refresh_state(phase, dealer_total);
        }
    }

    fn render(&mut self, app: &mut App) {
        let renderer = &mut app.renderer;
        renderer.clear(TABLE_COLOR);
        self.background.render(renderer);
        for seat in &mut self.seats {
            seat.render(renderer);
        }
        self.dealer.render(renderer);
        renderer.present();
    }
}
