use super::helpers;
use super::targets::HDR_FORMAT;
use crate::core::particles::Particle;
use wgpu;

const PARTICLE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

/// Instanced billboards re-uploaded from the CPU particle field every frame.
pub(crate) struct ParticleResources {
    pipeline: wgpu::RenderPipeline,
    instances: wgpu::Buffer,
    capacity: u32,
    count: u32,
}

impl ParticleResources {
    pub(crate) fn new(device: &wgpu::Device, frame_bgl: &wgpu::BindGroupLayout, capacity: usize) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_particles"),
            bind_group_layouts: &[frame_bgl],
            push_constant_ranges: &[],
        });
        let additive = wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        };
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particles_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_particle"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Particle>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &PARTICLE_ATTRS,
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(helpers::depth_state(false, wgpu::CompareFunction::Less)),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_particle"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: HDR_FORMAT,
                    blend: Some(wgpu::BlendState {
                        color: additive,
                        alpha: additive,
                    }),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let capacity = capacity.max(1) as u32;
        let instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particle_instances"),
            size: capacity as u64 * std::mem::size_of::<Particle>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            pipeline,
            instances,
            capacity,
            count: 0,
        }
    }

    pub(crate) fn upload(&mut self, queue: &wgpu::Queue, particles: &[Particle]) {
        let n = particles.len().min(self.capacity as usize);
        if n > 0 {
            queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(&particles[..n]));
        }
        self.count = n as u32;
    }

    /// Expects the frame bind group to be set at group 0.
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.instances.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
