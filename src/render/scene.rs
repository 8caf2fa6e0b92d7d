use super::helpers;
use super::targets::HDR_FORMAT;
use crate::constants::*;
use crate::core::constants::{GROUND_SIZE, GROUND_TEXTURE_REPEAT};
use crate::core::mesh::{MeshData, MeshVertex};
use crate::core::placement::{Placement, Variant};
use glam::{Mat4, Quat, Vec3};
use web_sys as web;
use wgpu;
use wgpu::util::DeviceExt;

/// Per-frame camera and lighting block, shared by the scene and particle shaders.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) inv_view_proj: [[f32; 4]; 4],
    pub(crate) eye: [f32; 4],
    pub(crate) sun: [f32; 4],
    pub(crate) rim: [f32; 4],
    pub(crate) cam_right: [f32; 4],
    pub(crate) cam_up: [f32; 4],
    pub(crate) params: [f32; 4],
    pub(crate) lighting: [f32; 4],
    pub(crate) particle: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    model: [[f32; 4]; 4],
    tint: [f32; 4],
}

impl InstanceRaw {
    pub(crate) fn from_placement(p: &Placement) -> Self {
        let model = Mat4::from_scale_rotation_translation(
            Vec3::splat(p.scale),
            Quat::from_rotation_y(p.rotation_y),
            p.position,
        );
        let tint = match p.variant {
            Variant::House => HOUSE_TINT,
            Variant::PineTree => PINE_TINT,
            Variant::StylizedTree => STYLIZED_TINT,
        };
        Self {
            model: model.to_cols_array_2d(),
            tint,
        }
    }
}

const MESH_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4
];

/// Decoded images for the scene pass; any of them may be missing.
pub struct SceneImages<'a> {
    pub ground_diffuse: Option<&'a web::ImageBitmap>,
    pub ground_roughness: Option<&'a web::ImageBitmap>,
    pub backdrop: Option<&'a web::ImageBitmap>,
}

/// One model drawn at all of its placements.
struct ModelBatch {
    variant: Variant,
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
    instances: wgpu::Buffer,
    instance_count: u32,
}

impl ModelBatch {
    fn new(device: &wgpu::Device, variant: Variant, mesh: &MeshData, placements: &[Placement]) -> Self {
        let raw: Vec<InstanceRaw> = placements
            .iter()
            .filter(|p| p.variant == variant)
            .map(InstanceRaw::from_placement)
            .collect();
        let label = format!("{:?}", variant);
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{}_vertices", label)),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{}_indices", label)),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        // a zero-sized buffer is not bindable, keep at least one slot
        let contents: &[u8] = if raw.is_empty() {
            &[0u8; std::mem::size_of::<InstanceRaw>()]
        } else {
            bytemuck::cast_slice(&raw)
        };
        let instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{}_instances", label)),
            contents,
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            variant,
            vertices,
            indices,
            index_count: mesh.indices.len() as u32,
            instances,
            instance_count: raw.len() as u32,
        }
    }
}

pub(crate) struct SceneResources {
    pub(crate) frame_bgl: wgpu::BindGroupLayout,
    pub(crate) frame_buffer: wgpu::Buffer,
    pub(crate) frame_bg: wgpu::BindGroup,
    textures_bg: wgpu::BindGroup,
    sky_pipeline: wgpu::RenderPipeline,
    ground_pipeline: wgpu::RenderPipeline,
    model_pipeline: wgpu::RenderPipeline,
    batches: Vec<ModelBatch>,
}

impl SceneResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        images: &SceneImages<'_>,
        models: [(Variant, &MeshData); 3],
        placements: &[Placement],
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });

        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let textures_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_textures_bgl"),
            entries: &[
                helpers::texture_entry(0),
                helpers::texture_entry(1),
                helpers::texture_entry(2),
                helpers::sampler_entry(3),
                helpers::sampler_entry(4),
            ],
        });
        let diffuse = helpers::upload_image(
            device,
            queue,
            "ground_diffuse",
            images.ground_diffuse,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            [110, 100, 90, 255],
        );
        let rough = helpers::upload_image(
            device,
            queue,
            "ground_roughness",
            images.ground_roughness,
            wgpu::TextureFormat::Rgba8Unorm,
            [200, 200, 200, 255],
        );
        let backdrop = helpers::upload_image(
            device,
            queue,
            "backdrop",
            images.backdrop,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            [150, 160, 180, 255],
        );
        let repeat_sampler = helpers::linear_sampler(device, "repeat_sampler", wgpu::AddressMode::Repeat);
        let clamp_sampler =
            helpers::linear_sampler(device, "clamp_sampler", wgpu::AddressMode::ClampToEdge);
        let textures_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_textures_bg"),
            layout: &textures_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&diffuse),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&rough),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&backdrop),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&repeat_sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::Sampler(&clamp_sampler),
                },
            ],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_scene"),
            bind_group_layouts: &[&frame_bgl, &textures_bgl],
            push_constant_ranges: &[],
        });
        let sky_pipeline = scene_pipeline(
            device,
            &layout,
            &shader,
            "sky_pipeline",
            "vs_sky",
            "fs_sky",
            &[],
            helpers::depth_state(false, wgpu::CompareFunction::Always),
        );
        let ground_pipeline = scene_pipeline(
            device,
            &layout,
            &shader,
            "ground_pipeline",
            "vs_ground",
            "fs_ground",
            &[],
            helpers::depth_state(true, wgpu::CompareFunction::Less),
        );
        let model_pipeline = scene_pipeline(
            device,
            &layout,
            &shader,
            "model_pipeline",
            "vs_model",
            "fs_model",
            &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &MESH_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<InstanceRaw>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &INSTANCE_ATTRS,
                },
            ],
            helpers::depth_state(true, wgpu::CompareFunction::Less),
        );

        let batches = models
            .iter()
            .map(|(variant, mesh)| ModelBatch::new(device, *variant, mesh, placements))
            .collect::<Vec<_>>();
        for b in &batches {
            log::info!(
                "[gpu] {:?}: {} instances x {} indices",
                b.variant,
                b.instance_count,
                b.index_count
            );
        }

        Self {
            frame_bgl,
            frame_buffer,
            frame_bg,
            textures_bg,
            sky_pipeline,
            ground_pipeline,
            model_pipeline,
            batches,
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.frame_bg, &[]);
        rpass.set_bind_group(1, &self.textures_bg, &[]);

        rpass.set_pipeline(&self.sky_pipeline);
        rpass.draw(0..3, 0..1);

        rpass.set_pipeline(&self.ground_pipeline);
        rpass.draw(0..6, 0..1);

        rpass.set_pipeline(&self.model_pipeline);
        for b in self.batches.iter().filter(|b| b.instance_count > 0 && b.index_count > 0) {
            rpass.set_vertex_buffer(0, b.vertices.slice(..));
            rpass.set_vertex_buffer(1, b.instances.slice(..));
            rpass.set_index_buffer(b.indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..b.index_count, 0, 0..b.instance_count);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    label: &str,
    vs: &str,
    fs: &str,
    buffers: &[wgpu::VertexBufferLayout<'_>],
    depth: wgpu::DepthStencilState,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(depth),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs),
            targets: &[Some(wgpu::ColorTargetState {
                format: HDR_FORMAT,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

/// Frame block for the given camera matrices and scene parameters.
pub(crate) fn frame_uniforms(
    view: Mat4,
    proj: Mat4,
    eye: Vec3,
    time_sec: f32,
    plane_y: f32,
) -> FrameUniforms {
    let view_proj = proj * view;
    // columns of the inverse view are the camera basis in world space
    let inv_view = view.inverse();
    let right = inv_view.x_axis.truncate();
    let up = inv_view.y_axis.truncate();
    let sun = Vec3::from_array(SUN_DIRECTION).normalize();
    let rim = Vec3::from_array(RIM_DIRECTION).normalize();
    FrameUniforms {
        view_proj: view_proj.to_cols_array_2d(),
        inv_view_proj: view_proj.inverse().to_cols_array_2d(),
        eye: eye.extend(1.0).to_array(),
        sun: sun.extend(SUN_INTENSITY).to_array(),
        rim: rim.extend(RIM_INTENSITY).to_array(),
        cam_right: right.extend(0.0).to_array(),
        cam_up: up.extend(0.0).to_array(),
        params: [time_sec, plane_y, BACKDROP_INTENSITY, ENVIRONMENT_INTENSITY],
        lighting: [
            GROUND_SIZE * 0.5,
            GROUND_TEXTURE_REPEAT,
            AMBIENT_INTENSITY,
            HEMI_INTENSITY,
        ],
        particle: [PARTICLE_WORLD_SCALE, PARTICLE_OPACITY, 0.0, 0.0],
    }
}
