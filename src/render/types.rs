//! Rendering-Typen: Quad-Vertex, Punkt-Instanzen, Uniforms.

use bytemuck::{Pod, Zeroable};

use crate::core::RenderGeometry;

/// Gemeinsamer Kontext für Sub-Renderer.
///
/// Bündelt die GPU-Ressourcen und die Viewport-Größe des aktuellen Frames.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
    /// Viewport-Größe in Pixeln [width, height]
    pub viewport_size: [f32; 2],
}

/// Ecke des Einheits-Quads, aus dem jeder Punkt aufgespannt wird
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Ecke in [-1, 1]²
    pub corner: [f32; 2],
}

impl Vertex {
    /// Zwei Dreiecke für ein Quad.
    pub const QUAD: [Vertex; 6] = [
        Vertex { corner: [-1.0, -1.0] },
        Vertex { corner: [1.0, -1.0] },
        Vertex { corner: [1.0, 1.0] },
        Vertex { corner: [-1.0, -1.0] },
        Vertex { corner: [1.0, 1.0] },
        Vertex { corner: [-1.0, 1.0] },
    ];

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Instanz-Daten für einen Punkt (Kontroll- oder Kurvenpunkt)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    /// Position in NDC
    pub position: [f32; 2],
    /// RGBA-Farbe
    pub color: [f32; 4],
    /// Kantenlänge in Pixeln
    pub size_px: f32,
    _padding: [f32; 1],
}

impl PointInstance {
    /// Erstellt eine neue Punkt-Instanz.
    pub fn new(position: [f32; 2], color: [f32; 4], size_px: f32) -> Self {
        Self {
            position,
            color,
            size_px,
            _padding: [0.0; 1],
        }
    }

    /// Hängt alle Punkte einer Geometrie mit einheitlicher Größe an `out` an.
    pub fn extend_from_geometry(out: &mut Vec<PointInstance>, geometry: &RenderGeometry, size_px: f32) {
        out.extend(
            geometry
                .to_points()
                .into_iter()
                .map(|p| PointInstance::new([p.position.x, p.position.y], p.color, size_px)),
        );
    }

    /// Beschreibt das Instanz-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Instance,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 2,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as eframe::wgpu::BufferAddress,
                    shader_location: 3,
                    format: eframe::wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Uniform-Daten (16-Byte-ausgerichtet)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
    _padding: [f32; 2],
}

impl Uniforms {
    pub fn new(viewport_size: [f32; 2]) -> Self {
        Self {
            viewport_size,
            _padding: [0.0; 2],
        }
    }
}
