//! wgpu Custom Render Callback für egui-Integration.

use super::Renderer;
use crate::shared::RenderScene;
use std::sync::{Arc, Mutex};

/// Render-Daten für den wgpu Callback
pub struct WgpuRenderData {
    /// Die Render-Szene für diesen Frame
    pub scene: RenderScene,
}

/// Custom wgpu Render Callback, zeichnet die Punkte in den Zeichenbereich
pub struct WgpuRenderCallback {
    /// Geteilter Renderer-Zustand
    pub renderer: Arc<Mutex<Renderer>>,
    /// Render-Daten für diesen Frame
    pub render_data: WgpuRenderData,
    pub device: eframe::wgpu::Device,
    pub queue: eframe::wgpu::Queue,
}

impl eframe::egui_wgpu::CallbackTrait for WgpuRenderCallback {
    fn prepare(
        &self,
        _device: &eframe::wgpu::Device,
        _queue: &eframe::wgpu::Queue,
        _screen_descriptor: &eframe::egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut eframe::wgpu::CommandEncoder,
        _callback_resources: &mut eframe::egui_wgpu::CallbackResources,
    ) -> Vec<eframe::wgpu::CommandBuffer> {
        Vec::new()
    }

    fn paint<'b>(
        &'b self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        _callback_resources: &'b eframe::egui_wgpu::CallbackResources,
    ) {
        let Ok(mut renderer) = self.renderer.lock() else {
            log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)");
            return;
        };
        renderer.render_scene(
            &self.device,
            &self.queue,
            render_pass,
            &self.render_data.scene,
        );
    }
}
