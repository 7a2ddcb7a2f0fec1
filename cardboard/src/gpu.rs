//! A wrapper for WGPU state.

use std::sync::Arc;

use crate::Error;

/// A wrapper for a WGPU instance, adapter, device, and queue.
pub struct Wgpu {
    instance: Arc<wgpu::Instance>,
    adapter: Arc<wgpu::Adapter>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
}

impl Wgpu {
    /// Create a [`Wgpu`] structure with already-created GPU resources.
    pub fn with_resources(
        instance: Arc<wgpu::Instance>,
        adapter: Arc<wgpu::Adapter>,
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
    ) -> Self {
        Self {
            instance,
            adapter,
            device,
            queue,
        }
    }

    /// Create a [`Wgpu`] structure by initializing WGPU for display onto the
    /// given surface.
    pub async fn new(
        instance: Arc<wgpu::Instance>,
        surface: Option<&wgpu::Surface<'static>>,
    ) -> Result<Self, Error> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                // Request an adapter which can render to our surface
                compatible_surface: surface,
            })
            .await
            .ok_or(Error::NoUsableAdapter)?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults()
                        .using_resolution(adapter.limits()),
                },
                None,
            )
            .await?;

        Ok(Self::with_resources(
            instance,
            Arc::new(adapter),
            Arc::new(device),
            Arc::new(queue),
        ))
    }

    /// Returns this GPU wrapper's [`wgpu::Instance`].
    pub fn instance(&self) -> &wgpu::Instance {
        &self.instance
    }
    /// Returns this GPU wrapper's [`wgpu::Adapter`].
    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }
    /// Returns this GPU wrapper's [`wgpu::Device`].
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }
    /// Returns this GPU wrapper's [`wgpu::Queue`].
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}
