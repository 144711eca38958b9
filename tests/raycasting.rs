use rayvis::geometry::normalize_degrees;
use rayvis::projection::{Projection, corrected_distance, shade};
use rayvis::raycast::cast_ray;
use rayvis::{Intents, Map, Mover, Point, RayCamera, Viewport, Wall, render};

const EPS: f64 = 1e-9;

fn viewport() -> Viewport {
    Viewport::default()
}

fn camera(map: &Map, fov: f64, rays: u32) -> RayCamera {
    RayCamera::new(viewport(), map.width(), fov, rays)
}

#[test]
fn ray_angles_are_normalized() {
    let map = Map::new(viewport());
    for fov in [20.0, 60.0, 119.0] {
        let cam = camera(&map, fov, 51);
        for direction in [-1e6, -720.5, -0.25, 0.0, 90.0, 359.999, 1e5] {
            for slot in 0..cam.ray_count() {
                let a = normalize_degrees(direction + cam.angle_from_center(slot));
                assert!((0.0..360.0).contains(&a), "{direction} slot {slot}: {a}");
            }
        }
    }
}

#[test]
fn odd_fan_is_symmetric() {
    let map = Map::new(viewport());
    for (fov, count) in [(60.0, 1), (60.0, 7), (90.0, 101), (20.0, 999)] {
        let rays = render(&map, &camera(&map, fov, count), Point::new(300.0, 200.0), 0.0);
        let center = rays[count as usize / 2].angle_from_center;
        assert!(center.abs() < 1e-6, "center ray at {center}");
        for k in 0..count as usize {
            let mirrored = rays[count as usize - 1 - k].angle_from_center;
            assert!((rays[k].angle_from_center + mirrored).abs() < 1e-6);
        }
    }
}

#[test]
fn empty_map_never_hits() {
    let map = Map::from_walls(viewport(), Vec::new());
    for direction in [0.0, 45.0, 180.0, 300.0] {
        let rays = render(&map, &camera(&map, 90.0, 64), Point::new(240.0, 240.0), direction);
        assert_eq!(rays.len(), 64);
        assert!(rays.iter().all(|r| r.hit.is_none()));
    }
}

#[test]
fn boundary_contains_every_ray() {
    let map = Map::bounded(viewport());
    let (right, top) = (map.width() as f64 - 1.0, map.height() as f64 - 1.0);
    let position = Point::new(200.0, 260.0);
    let cam = camera(&map, 90.0, 45);

    for step in 0..16 {
        let rays = render(&map, &cam, position, step as f64 * 22.5);
        for ray in rays {
            let hit = ray.hit.expect("boundary must stop every ray");
            let on = [
                hit.x.abs() < 1e-6,
                (hit.x - right).abs() < 1e-6,
                hit.y.abs() < 1e-6,
                (hit.y - top).abs() < 1e-6,
            ];
            assert_eq!(on.iter().filter(|&&b| b).count(), 1, "{hit:?}");
            let d = position.distance(hit);
            assert!(d > 0.0 && d.is_finite());
        }
    }
}

#[test]
fn perpendicular_wall_has_flat_depth() {
    let map = Map::from_walls(viewport(), vec![Wall::new(100.0, -1000.0, 100.0, 1000.0)]);
    let position = Point::new(0.0, 0.0);
    // 90 degrees faces +x
    let rays = render(&map, &camera(&map, 60.0, 5), position, 90.0);

    let center = rays[2];
    assert_eq!(center.angle_from_center, 0.0);
    let p = center.projection(position).expect("center ray hits");
    assert!((p.true_distance - 100.0).abs() < EPS);
    assert!((p.corrected_distance - 100.0).abs() < EPS);

    for ray in rays.iter().filter(|r| r.slot != 2) {
        let p = ray.projection(position).expect("every ray hits");
        assert!(p.corrected_distance < p.true_distance);
        assert!((p.corrected_distance - 100.0).abs() < 1e-6);
    }
}

#[test]
fn shade_darkens_with_distance() {
    let position = Point::new(0.0, 0.0);
    let mut last = f64::INFINITY;
    for d in (0..=800).step_by(10) {
        let p = Projection::new(position, Point::new(d as f64, 0.0), 10.0);
        assert!((0.0..=1.0).contains(&p.shade));
        assert!(p.shade <= last);
        last = p.shade;
    }
    assert_eq!(shade(corrected_distance(800.0, 0.0)), 0.0);
}

#[test]
fn mover_stays_inside_bounds() {
    let map = Map::new(viewport());
    let mut mover = Mover::default();
    let all = [
        Intents::FORWARD,
        Intents::BACKWARD,
        Intents::STRAFE_LEFT,
        Intents::STRAFE_RIGHT,
        Intents::FORWARD | Intents::STRAFE_LEFT | Intents::TURN_RIGHT,
        Intents::BACKWARD | Intents::STRAFE_RIGHT | Intents::TURN_LEFT,
        Intents::TURN_RIGHT,
    ];
    let dts = [0.001, 0.016, 0.1, 0.5, 3.0];

    for i in 0..5000usize {
        let intents = all[i % all.len()] | all[(i * 7 / 3) % all.len()];
        mover.update(dts[i % dts.len()], intents, &map);
        let p = mover.position;
        assert!(p.x > 1.0 && p.x < map.width() as f64 - 1.0, "{p:?}");
        assert!(p.y > 1.0 && p.y < map.height() as f64 - 1.0, "{p:?}");
    }
}

#[test]
fn straight_ray_hits_wall_head_on() {
    let map = Map::from_walls(viewport(), vec![Wall::new(100.0, 0.0, 100.0, 100.0)]);
    let position = Point::new(0.0, 50.0);
    let rays = render(&map, &camera(&map, 60.0, 1), position, 90.0);
    assert_eq!(rays.len(), 1);

    let ray = rays[0];
    assert_eq!(ray.angle_from_center, 0.0);
    let hit = ray.hit.expect("wall straight ahead");
    assert!((hit.x - 100.0).abs() < EPS && (hit.y - 50.0).abs() < EPS);
    let p = ray.projection(position).expect("projection");
    assert!((p.true_distance - 100.0).abs() < EPS);
}

#[test]
fn oblique_ray_is_depth_corrected() {
    let walls = [Wall::new(100.0, 0.0, 100.0, 100.0)];
    let position = Point::new(60.0, 50.0);
    // Facing +x, the ray 45 degrees clockwise of center
    let hit = cast_ray(&walls, position, 90.0 + 45.0).expect("wall in reach");
    assert!((hit.x - 100.0).abs() < EPS);
    assert!((hit.y - 10.0).abs() < 1e-6);

    let p = Projection::new(position, hit, 45.0);
    assert!((p.corrected_distance - p.true_distance * 0.5f64.sqrt()).abs() < 1e-9);
    assert!((p.corrected_distance - 40.0).abs() < 1e-6);
}

#[test]
fn single_ray_points_at_center() {
    let map = Map::new(viewport());
    let rays = render(&map, &camera(&map, 60.0, 1), Point::new(300.0, 200.0), 17.0);
    assert_eq!(rays.len(), 1);
    assert_eq!(rays[0].slot, 0);
    assert!(rays[0].angle_from_center.abs() < EPS);
}

#[test]
fn eye_on_a_wall_stays_finite() {
    let vp = viewport();
    let mut walls = Map::bounded(vp).walls().to_vec();
    walls.push(Wall::new(100.0, 0.0, 100.0, 100.0));
    let map = Map::from_walls(vp, walls);
    let position = Point::new(100.0, 50.0);

    for direction in [0.0, 45.0, 90.0, 180.0, 270.0] {
        for ray in render(&map, &camera(&map, 90.0, 33), position, direction) {
            if let Some(p) = ray.projection(position) {
                assert!(p.height.is_finite() && p.height > 0.0);
                assert!((0.0..=1.0).contains(&p.shade));
            }
        }
    }

    let touching = Projection::new(position, position, 0.0);
    assert!(touching.height.is_finite());
    assert_eq!(touching.shade, 1.0);
}

#[test]
fn degenerate_fov_does_not_produce_nan() {
    let map = Map::new(viewport());
    for fov in [0.0, 1e-9, 179.999, 180.0] {
        let rays = render(&map, &camera(&map, fov, 9), Point::new(300.0, 200.0), 0.0);
        assert_eq!(rays.len(), 9);
        for ray in rays {
            assert!(!ray.angle_from_center.is_nan(), "fov {fov}");
            if let Some(p) = ray.projection(Point::new(300.0, 200.0)) {
                assert!(!p.height.is_nan() && !p.shade.is_nan());
            }
        }
    }
}

#[test]
fn zero_length_wall_is_tolerated() {
    let vp = viewport();
    let mut walls = vec![Wall::new(300.0, 300.0, 300.0, 300.0)];
    walls.extend_from_slice(Map::bounded(vp).walls());
    let map = Map::from_walls(vp, walls);
    let rays = render(&map, &camera(&map, 60.0, 20), Point::new(300.0, 200.0), 0.0);
    assert!(rays.iter().all(|r| r.hit.is_some()));
}
