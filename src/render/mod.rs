//! GPU-Rendering mit wgpu.

mod callback;
mod point_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use point_renderer::PointRenderer;
pub use types::{PointInstance, Uniforms, Vertex};
use types::RenderContext;

use eframe::{egui_wgpu, wgpu};

/// Haupt-Renderer der Demo.
///
/// Verwaltet GPU-Buffer und Pipeline selbst; API: `new()` + `render_scene()`.
pub struct Renderer {
    point_renderer: PointRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let shader = render_state
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Spline Reveal Shader"),
                source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
            });

        Self {
            point_renderer: PointRenderer::new(render_state, &shader),
        }
    }

    /// Rendert die komplette Szene
    pub fn render_scene(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        render_pass: &mut wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        if scene.is_empty() {
            return;
        }

        let ctx = RenderContext {
            device,
            queue,
            viewport_size: scene.viewport_size,
        };
        self.point_renderer.render(&ctx, render_pass, scene);
    }
}
