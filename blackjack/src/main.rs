use blackjack::Table;
use winit::dpi::LogicalSize;

fn main() -> Result<(), cardboard::Error> {
    let builder = winit::window::WindowBuilder::new()
        .with_title("blackjack")
        .with_inner_size(LogicalSize::new(1280.0, 720.0))
        .with_resizable(false);
    cardboard::App::run::<Table>(builder)
}
