/// Everything that can go wrong while bringing up or feeding the renderer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no valid adapter found for GPU requirements")]
    NoUsableAdapter,
    #[error("couldn't acquire a graphics device")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("couldn't create a rendering surface")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("couldn't create the window")]
    Window(#[from] winit::error::OsError),
    #[error("event loop failure")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("couldn't decode image")]
    Image(#[from] image::ImageError),
}
