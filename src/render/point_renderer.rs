//! Punkt-Renderer mit GPU-Instancing.

use super::types::{PointInstance, RenderContext, Uniforms, Vertex};
use crate::shared::RenderScene;
use eframe::{egui_wgpu, wgpu};
use wgpu::util::DeviceExt;

/// Renderer für Kontroll- und Kurvenpunkte
pub struct PointRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_buffer: Option<wgpu::Buffer>,
    instance_capacity: usize,
    /// Wiederverwendbarer Scratch-Buffer für Instanzdaten
    instance_scratch: Vec<PointInstance>,
}

impl PointRenderer {
    /// Erstellt einen neuen Punkt-Renderer
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Point Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Point Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Point Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Point Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Point Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc(), PointInstance::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            // Muss zu NativeOptions::multisampling passen
            multisample: wgpu::MultisampleState {
                count: 4,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&Vertex::QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline,
            vertex_buffer,
            uniform_buffer,
            bind_group,
            instance_buffer: None,
            instance_capacity: 0,
            instance_scratch: Vec::new(),
        }
    }

    /// Zeichnet zuerst die Kontrollpunkte, darüber die aufgedeckten Kurvenpunkte.
    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        let [width, height] = ctx.viewport_size;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }

        let mut instances = std::mem::take(&mut self.instance_scratch);
        instances.clear();
        PointInstance::extend_from_geometry(
            &mut instances,
            &scene.control_points,
            scene.control_point_size_px,
        );
        PointInstance::extend_from_geometry(
            &mut instances,
            &scene.curve_points,
            scene.curve_point_size_px,
        );

        if instances.is_empty() {
            self.instance_scratch = instances;
            return;
        }

        ctx.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[Uniforms::new(ctx.viewport_size)]),
        );

        // Instance-Buffer nur bei Bedarf vergrößern
        if self.instance_buffer.is_none() || instances.len() > self.instance_capacity {
            let capacity = instances.len().next_power_of_two();
            log::debug!("PointRenderer: Instance-Buffer auf {} Punkte vergrößert", capacity);
            self.instance_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Point Instance Buffer"),
                size: (capacity * std::mem::size_of::<PointInstance>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.instance_capacity = capacity;
        }

        let Some(instance_buffer) = self.instance_buffer.as_ref() else {
            log::error!("PointRenderer: missing instance buffer before draw call");
            self.instance_scratch = instances;
            return;
        };
        ctx.queue
            .write_buffer(instance_buffer, 0, bytemuck::cast_slice(&instances));

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, instance_buffer.slice(..));
        render_pass.draw(0..Vertex::QUAD.len() as u32, 0..instances.len() as u32);
        self.instance_scratch = instances;
    }
}
