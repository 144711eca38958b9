use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use rayvis::raycast::cast_ray;
use rayvis::renderer::{Scene, render_frame};
use rayvis::{Map, Point, RayCamera, Viewport, render};

fn bench_ray_fan(c: &mut Criterion) {
    let viewport = Viewport::default();
    let map = Map::new(viewport);
    let position = Point::new(300.0, 200.0);

    for rays in [60, 480, 1000] {
        let camera = RayCamera::new(viewport, map.width(), 70.0, rays);
        c.bench_function(&format!("render_fan_{rays}"), |b| {
            b.iter(|| black_box(render(&map, &camera, position, black_box(33.0))));
        });
    }

    c.bench_function("cast_ray_full_turn", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for step in 0..360 {
                if cast_ray(map.walls(), position, step as f64).is_some() {
                    hits += 1;
                }
            }
            black_box(hits);
        });
    });

    let camera = RayCamera::new(viewport, map.width(), 70.0, 480);
    let rays = render(&map, &camera, position, 33.0);
    let mut fb = vec![0u32; viewport.width as usize * viewport.height as usize];
    c.bench_function("render_frame_480", |b| {
        b.iter(|| {
            let scene = Scene {
                map: &map,
                camera: &camera,
                position,
                rays: &rays,
                sliders: &[],
            };
            render_frame(&mut fb, viewport.width as usize, viewport.height as usize, &scene);
            black_box(fb[0]);
        });
    });
}

criterion_group!(benches, bench_ray_fan);
criterion_main!(benches);
