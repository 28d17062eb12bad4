// Properties of the generated court over many sampled configurations.

use std::f32::consts::PI;

use approx::assert_abs_diff_eq;
use glam::Quat;
use rand::{rngs::StdRng, Rng, SeedableRng};

use court_scene::court_lib::{
    BoxParams, CourtConfig, CourtGeometryGenerator, MaterialKind, Shape, ShapeKind,
    CENTER_CIRCLE_RADIUS, MARKING_EPSILON,
};

fn sample_configs(count: usize) -> Vec<CourtConfig> {
    let mut rng = StdRng::seed_from_u64(0xC0_u64);
    (0..count)
        .map(|_| {
            let width = rng.gen_range(5.0..40.0);
            let length = rng.gen_range(width..80.0);
            CourtConfig {
                width,
                length,
                floor_thickness: rng.gen_range(0.01..2.0),
                marking_thickness: rng.gen_range(0.0..0.5),
                three_point_radius_factor: rng.gen_range(0.05..0.49),
                ring_segments: rng.gen_range(32..128),
            }
        })
        .collect()
}

#[test]
fn floor_is_centered_box_of_court_extents() {
    for config in sample_configs(64) {
        let floor = CourtGeometryGenerator::generate_floor(&config);
        assert_eq!(
            floor.shape,
            Shape::Box(BoxParams {
                width: config.length,
                height: config.floor_thickness,
                depth: config.width,
            })
        );
        assert_eq!(floor.transform.position, glam::Vec3::ZERO);
        assert_eq!(floor.material, MaterialKind::Floor);
    }
}

#[test]
fn every_marking_sits_just_above_the_floor() {
    for config in sample_configs(64) {
        let scene = CourtGeometryGenerator::generate_court(&config);
        let expected = config.floor_thickness / 2.0 + MARKING_EPSILON;
        for shape in scene.iter().filter(|s| s.material == MaterialKind::Marking) {
            assert_eq!(shape.transform.position.y, expected);
            assert!(shape.transform.position.y > config.floor_thickness / 2.0);
        }
    }
}

#[test]
fn center_circle_radius_is_fixed() {
    for config in sample_configs(64) {
        let circle = CourtGeometryGenerator::generate_center_circle(&config);
        let ring = circle.shape.as_ring().copied().expect("center circle is a ring");
        assert_abs_diff_eq!(ring.band_width(), config.marking_thickness, epsilon = 1e-5);
        assert_abs_diff_eq!(ring.mid_radius(), CENTER_CIRCLE_RADIUS, epsilon = 1e-5);
        assert_eq!(ring.theta_segments, config.ring_segments);
    }
}

#[test]
fn arcs_sit_on_baselines_and_mirror_each_other() {
    for config in sample_configs(64) {
        let scene = CourtGeometryGenerator::generate_court(&config);
        let west = &scene.shapes()[3];
        let east = &scene.shapes()[4];

        assert_eq!(west.transform.position.x, -config.length / 2.0);
        assert_eq!(east.transform.position.x, config.length / 2.0);
        assert_eq!(west.shape, east.shape);

        let spun = Quat::from_rotation_y(PI) * west.transform.rotation_quat();
        let east_rot = east.transform.rotation_quat();
        // q and -q are the same rotation
        assert_abs_diff_eq!(spun.dot(east_rot).abs(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn generation_is_idempotent() {
    for config in sample_configs(16) {
        let first = CourtGeometryGenerator::generate_court(&config);
        let second = CourtGeometryGenerator::generate_court(&config);
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }
}

#[test]
fn reference_court_example() {
    let config = CourtConfig {
        width: 15.0,
        length: 28.0,
        floor_thickness: 0.2,
        marking_thickness: 0.1,
        three_point_radius_factor: 0.4,
        ring_segments: 64,
    };
    let scene = CourtGeometryGenerator::generate_court(&config);
    let kinds: Vec<ShapeKind> = scene.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        [ShapeKind::Box, ShapeKind::Plane, ShapeKind::Ring, ShapeKind::Ring, ShapeKind::Ring]
    );

    assert_eq!(CourtGeometryGenerator::three_point_radius(&config), 6.0);
    for arc in &scene.shapes()[3..] {
        let ring = arc.shape.as_ring().copied().expect("arc is a ring");
        assert_abs_diff_eq!(ring.inner_radius, 5.95, epsilon = 1e-6);
        assert_abs_diff_eq!(ring.outer_radius, 6.05, epsilon = 1e-6);
    }
    assert_eq!(scene.shapes()[3].transform.position.x, -14.0);
    assert_eq!(scene.shapes()[4].transform.position.x, 14.0);
}

#[test]
fn zero_marking_thickness_is_not_an_error() {
    let config = CourtConfig { marking_thickness: 0.0, ..CourtConfig::default() };
    let scene = CourtGeometryGenerator::try_generate_court(&config).expect("valid config");
    for shape in scene.iter().filter(|s| s.kind() == ShapeKind::Ring) {
        let ring = shape.shape.as_ring().copied().expect("ring");
        assert_eq!(ring.inner_radius, ring.outer_radius);
    }
}

#[test]
fn invalid_config_yields_no_scene() {
    let config = CourtConfig { length: 10.0, ..CourtConfig::default() };
    assert!(CourtGeometryGenerator::try_generate_court(&config).is_err());
}

#[test]
fn thick_markings_never_invert_rings() {
    for thickness in [0.5, 2.0, 3.6, 4.0, 12.0] {
        let config = CourtConfig { marking_thickness: thickness, ..CourtConfig::default() };
        match CourtGeometryGenerator::try_generate_court(&config) {
            Ok(scene) => {
                for shape in scene.iter().filter(|s| s.kind() == ShapeKind::Ring) {
                    let ring = shape.shape.as_ring().copied().expect("ring");
                    assert!(ring.inner_radius >= 0.0, "{} -> {:?}", thickness, ring);
                }
            }
            Err(err) => assert!(thickness / 2.0 >= CENTER_CIRCLE_RADIUS, "{}", err),
        }
    }
}
