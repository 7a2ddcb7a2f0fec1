//! A thin, friendly quad renderer for card tables, built with WGPU.
//!
//! Cardboard draws exactly one kind of thing: a textured quad placed by a
//! [`Transform`].  Each [`Drawable`] owns its GPU resources (vertex and
//! index buffers, texture, model-matrix uniform) for its whole lifetime,
//! and the [`Renderer`] sequences every frame as `clear` → `draw`* →
//! `present`.
//!
//! Cardboard can be used two ways (not mutually exclusive):
//! 1. As a standalone renderer: make a [`Wgpu`] and a [`Renderer`] for a
//!    surface you configure, create [`Drawable`]s, and call
//!    [`Renderer::clear`], [`Renderer::draw`], and [`Renderer::present`]
//!    from your own loop.
//! 2. As an application framework: implement [`Game`] and hand it to
//!    [`App::run`], which owns the window, the [`Input`] sampler, and a
//!    fixed-timestep [`Clock`].

mod gpu;
pub use gpu::Wgpu;
pub use wgpu;

mod error;
pub use error::Error;

mod transform;
pub use transform::Transform;

mod color;
pub use color::Color;

mod geom;
pub use geom::Rect;

mod drawable;
pub use drawable::{Drawable, Vertex, QUAD_INDICES};

mod renderer;
pub use renderer::{RenderStats, Renderer};

pub mod input;
pub use input::Input;

mod events;
pub use events::{EventPhase, RendererEvents};

mod clock;
pub use clock::Clock;

mod entity;
pub use entity::Entity;

mod app;
pub use app::{App, Game};

pub use glam;
