use crate::constants::*;
use crate::core::camera::{CameraPose, Projection};
use crate::core::mesh::MeshData;
use crate::core::particles::Particle;
use crate::core::placement::{Placement, Variant};
use web_sys as web;
use wgpu;

mod helpers;
mod particles;
mod post;
mod scene;
mod targets;

pub use scene::SceneImages;

use particles::ParticleResources;
use post::{PostBindGroups, PostPass, PostResources, PostUniforms};
use scene::SceneResources;
use targets::RenderTargets;

/// Everything the scene pass needs that is fixed after loading.
pub struct SceneContent<'a> {
    pub images: SceneImages<'a>,
    pub house: &'a MeshData,
    pub pine: &'a MeshData,
    pub stylized: &'a MeshData,
    pub placements: &'a [Placement],
    pub plane_y: f32,
    pub particle_capacity: usize,
}

/// Per-frame inputs from the frame loop.
pub struct FrameView<'a> {
    pub pose: CameraPose,
    pub time_sec: f32,
    pub glitch: f32,
    pub particles: &'a [Particle],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    targets: RenderTargets,
    scene: SceneResources,
    particles: ParticleResources,
    post: PostResources,
    post_groups: PostBindGroups,

    plane_y: f32,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, content: &SceneContent<'_>) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {:?} {}x{}", format, width, height);

        let targets = RenderTargets::new(&device, width, height);
        let scene = SceneResources::new(
            &device,
            &queue,
            &content.images,
            [
                (Variant::House, content.house),
                (Variant::PineTree, content.pine),
                (Variant::StylizedTree, content.stylized),
            ],
            content.placements,
        );
        let particles = ParticleResources::new(&device, &scene.frame_bgl, content.particle_capacity);
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let post = post::create_post_resources(&device, &post_shader, format);
        let post_groups = post.bind_groups(&device, &targets);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene,
            particles,
            post,
            post_groups,
            plane_y: content.plane_y,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and dependent bind groups
            self.targets = RenderTargets::new(&self.device, width, height);
            self.post_groups = self.post.bind_groups(&self.device, &self.targets);
        }
    }

    pub fn render(&mut self, view: &FrameView<'_>) -> Result<(), wgpu::SurfaceError> {
        let projection = Projection::new(self.width as f32 / self.height.max(1) as f32);
        let frame_u = scene::frame_uniforms(
            view.pose.view_matrix(),
            projection.matrix(),
            view.pose.eye,
            view.time_sec,
            self.plane_y,
        );
        self.queue
            .write_buffer(&self.scene.frame_buffer, 0, bytemuck::bytes_of(&frame_u));
        self.particles.upload(&self.queue, view.particles);

        let frame = self.surface.get_current_texture()?;
        let swap_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.scene.draw(&mut rpass);
            self.particles.draw(&mut rpass);
        }

        let (bw, bh) = self.targets.bloom_size;
        let base = PostUniforms {
            resolution: [bw as f32, bh as f32],
            time: view.time_sec,
            glitch: view.glitch,
            blur_dir: [0.0, 0.0],
            bloom_strength: BLOOM_STRENGTH,
            threshold: BLOOM_THRESHOLD,
            aberration: ABERRATION_OFFSET,
            smoothing: BLOOM_SMOOTHING,
            _pad: 0.0,
        };
        self.post.write(&self.queue, PostPass::Bright, &base);
        self.post.write(
            &self.queue,
            PostPass::BlurH,
            &PostUniforms {
                blur_dir: [1.0, 0.0],
                ..base
            },
        );
        self.post.write(
            &self.queue,
            PostPass::BlurV,
            &PostUniforms {
                blur_dir: [0.0, 1.0],
                ..base
            },
        );
        self.post.write(
            &self.queue,
            PostPass::Composite,
            &PostUniforms {
                resolution: [self.width as f32, self.height as f32],
                ..base
            },
        );

        // bright pass -> bloom_a, blur h -> bloom_b, blur v -> bloom_a, composite -> swapchain
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            &self.post.bright_pipeline,
            &self.post_groups.hdr_bright,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_a,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_b,
            None,
        );
        post::blit(
            &mut encoder,
            "composite",
            &swap_view,
            &self.post.composite_pipeline,
            &self.post_groups.hdr_composite,
            Some(&self.post_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Reconfigure after a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}
