//! Flattened triangle meshes extracted from glTF/GLB models.

use super::assets::AssetError;
use super::terrain::Aabb;
use glam::{Mat3, Mat4, Vec3};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// All triangle primitives of a model's default scene, node transforms applied.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub bounds: Aabb,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Unit box resting on y = 0, used when a model fails to load.
    pub fn unit_box() -> Self {
        let faces: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z),
            (Vec3::Y, Vec3::Z, Vec3::X),
            (Vec3::NEG_Y, Vec3::Z, Vec3::NEG_X),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::X, Vec3::NEG_Y),
        ];
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (n, u, v) in faces {
            let base = vertices.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let p = (n + u * su + v * sv) * 0.5 + Vec3::new(0.0, 0.5, 0.0);
                vertices.push(MeshVertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                });
            }
            // wind counter-clockwise as seen from outside
            if u.cross(v).dot(n) > 0.0 {
                indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
            } else {
                indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
            }
        }
        let bounds = Aabb::from_points(vertices.iter().map(|v| Vec3::from_array(v.position)));
        Self {
            vertices,
            indices,
            bounds,
        }
    }
}

/// Parse a GLB (or self-contained glTF) and flatten its default scene.
pub fn load_glb(path: &str, bytes: &[u8]) -> Result<MeshData, AssetError> {
    let (document, buffers, _images) = gltf::import_slice(bytes).map_err(|e| AssetError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| AssetError::MissingMesh {
            path: path.to_string(),
        })?;

    let mut mesh = MeshData::default();
    for node in scene.nodes() {
        append_node(&node, &buffers, Mat4::IDENTITY, &mut mesh);
    }
    if mesh.indices.is_empty() {
        return Err(AssetError::MissingMesh {
            path: path.to_string(),
        });
    }
    log::info!(
        "[assets] {} triangles={} bounds=({:.1},{:.1},{:.1})..({:.1},{:.1},{:.1})",
        path,
        mesh.triangle_count(),
        mesh.bounds.min.x,
        mesh.bounds.min.y,
        mesh.bounds.min.z,
        mesh.bounds.max.x,
        mesh.bounds.max.y,
        mesh.bounds.max.z
    );
    Ok(mesh)
}

fn append_node(node: &gltf::Node, buffers: &[gltf::buffer::Data], parent: Mat4, out: &mut MeshData) {
    let transform = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    let normal_matrix = Mat3::from_mat4(transform).inverse().transpose();

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<Vec3> = positions
                .map(|p| transform.transform_point3(Vec3::from_array(p)))
                .collect();
            let normals: Vec<Vec3> = match reader.read_normals() {
                Some(ns) => ns
                    .map(|n| (normal_matrix * Vec3::from_array(n)).normalize_or_zero())
                    .collect(),
                None => vec![Vec3::Y; positions.len()],
            };

            let base = out.vertices.len() as u32;
            for (p, n) in positions.iter().zip(normals.iter()) {
                out.bounds.grow(*p);
                out.vertices.push(MeshVertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                });
            }
            match reader.read_indices() {
                Some(indices) => out.indices.extend(indices.into_u32().map(|i| base + i)),
                None => out
                    .indices
                    .extend((0..positions.len() as u32 / 3 * 3).map(|i| base + i)),
            }
        }
    }

    for child in node.children() {
        append_node(&child, buffers, transform, out);
    }
}
