// Host-side tests for the asset manifest, load progress, meshes and terrain bounds.
// `core` builds on every target, so these link against the library directly.

use glam::Vec3;
use portfolio_web::core::assets::{asset_url, AssetKind};
use portfolio_web::core::mesh::{load_glb, MeshData};
use portfolio_web::core::terrain::{plane_height, Aabb};
use portfolio_web::core::{AssetError, AssetId, LoadProgress};
use std::collections::HashSet;

#[test]
fn manifest_paths_are_unique() {
    let paths: HashSet<_> = AssetId::ALL.iter().map(|id| id.path()).collect();
    assert_eq!(paths.len(), AssetId::ALL.len());
    assert_eq!(AssetId::Terrain.kind(), AssetKind::Model);
    assert_eq!(AssetId::Backdrop.kind(), AssetKind::Image);
    assert_eq!(AssetId::Font.kind(), AssetKind::Font);
    for id in AssetId::ALL {
        match id.kind() {
            AssetKind::Model => assert!(id.path().ends_with(".glb")),
            AssetKind::Image => assert!(id.path().ends_with(".jpg")),
            AssetKind::Font => assert!(id.path().ends_with(".json")),
        }
    }
}

#[test]
fn asset_urls_join_cleanly() {
    assert_eq!(asset_url(".", AssetId::House), "./models/fantasy_house.glb");
    assert_eq!(asset_url("", AssetId::House), "/models/fantasy_house.glb");
    assert_eq!(
        asset_url("https://cdn.example.com/site/", AssetId::Font),
        "https://cdn.example.com/site/fonts/gentilis_bold.typeface.json"
    );
}

#[test]
fn load_progress_counts_failures_as_settled() {
    let mut p = LoadProgress::new(8);
    assert_eq!(p.fraction(), 0.0);
    assert_eq!(p.label(), "Loading 0%");
    for _ in 0..3 {
        p.record(true);
    }
    p.record(false);
    assert_eq!(p.settled(), 4);
    assert_eq!(p.label(), "Loading 50%");
    assert!(!p.is_done());
    for _ in 0..4 {
        p.record(true);
    }
    assert!(p.is_done());
    assert_eq!(p.fraction(), 1.0);
    assert_eq!((p.loaded, p.failed), (7, 1));

    assert_eq!(LoadProgress::new(0).fraction(), 1.0);
}

#[test]
fn garbage_model_bytes_fail_to_decode() {
    match load_glb("models/broken.glb", b"definitely not a glb") {
        Err(AssetError::Decode { path, .. }) => assert_eq!(path, "models/broken.glb"),
        other => panic!("expected decode error, got {:?}", other.map(|m| m.triangle_count())),
    }
}

#[test]
fn asset_errors_name_the_file() {
    let e = AssetError::Status {
        path: "hdri/forest_sunrise.jpg".into(),
        status: 404,
    };
    assert_eq!(e.to_string(), "hdri/forest_sunrise.jpg returned HTTP 404");
}

#[test]
fn fallback_box_rests_on_the_ground() {
    let mesh = MeshData::unit_box();
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.bounds.min, Vec3::new(-0.5, 0.0, -0.5));
    assert_eq!(mesh.bounds.max, Vec3::new(0.5, 1.0, 0.5));

    // every triangle winds counter-clockwise around its outward normal
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(mesh.vertices[i as usize].position));
        let n = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}

#[test]
fn aabb_grows_around_points() {
    let b = Aabb::from_points([Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 4.0, 0.0)]);
    assert_eq!(b.min, Vec3::new(-1.0, -2.0, 0.0));
    assert_eq!(b.max, Vec3::new(1.0, 4.0, 3.0));
    assert!((b.height_at(0.5) - 1.0).abs() < 1e-6);

    assert!(Aabb::EMPTY.is_empty());
    assert!(!b.is_empty());
    assert_eq!(Aabb::EMPTY.height_at(0.5), 0.0);
}

#[test]
fn plane_sits_fifteen_percent_up_the_terrain() {
    assert_eq!(plane_height(None), 0.0);
    let terrain = Aabb {
        min: Vec3::new(-5000.0, -100.0, -5000.0),
        max: Vec3::new(5000.0, 900.0, 5000.0),
    };
    assert!((plane_height(Some(&terrain)) - 50.0).abs() < 1e-3);
    assert_eq!(plane_height(Some(&Aabb::EMPTY)), 0.0);
}
