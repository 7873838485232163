use pathfollow_core::{
    curve::{bspline, catmull_rom},
    ControlPoint, CurveMode, Path,
};

fn approx3(a: [f32; 3], b: [f32; 3], eps: f32) {
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= eps, "left={a:?} right={b:?} eps={eps}");
    }
}

fn dist(a: [f32; 3], b: [f32; 3]) -> f32 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
}

fn mk_path(positions: &[[f32; 3]]) -> Path {
    let points = positions
        .iter()
        .map(|&position| ControlPoint {
            position,
            orientation: [0.0, 0.0, 0.0, 1.0],
        })
        .collect();
    Path::new(points, positions.len() as f32).expect("valid path")
}

fn square() -> Path {
    mk_path(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ])
}

fn pentagon() -> Path {
    mk_path(&[
        [0.0, 2.0, 6.0],
        [5.7, 2.0, 1.9],
        [3.5, 3.0, -4.9],
        [-3.5, 3.0, -4.9],
        [-5.7, 2.0, 1.9],
    ])
}

#[test]
fn catmull_rom_passes_through_segment_endpoints() {
    let path = pentagon();
    for seg in 0..path.point_count() {
        approx3(catmull_rom(&path, seg, 0.0), path.point(seg).position, 1e-6);
        approx3(catmull_rom(&path, seg, 1.0), path.point(seg + 1).position, 1e-5);
    }
}

#[test]
fn catmull_rom_is_c1_across_segment_boundaries() {
    let path = pentagon();
    let h = 1e-3;
    for seg in 0..path.point_count() {
        let end = catmull_rom(&path, seg, 1.0);
        let before = catmull_rom(&path, seg, 1.0 - h);
        let start = catmull_rom(&path, seg + 1, 0.0);
        let after = catmull_rom(&path, seg + 1, h);
        for axis in 0..3 {
            let left = (end[axis] - before[axis]) / h;
            let right = (after[axis] - start[axis]) / h;
            assert!(
                (left - right).abs() < 1e-1,
                "tangent jump at seg {seg} axis {axis}: {left} vs {right}"
            );
        }
    }
}

#[test]
fn bspline_is_continuous_and_wraps() {
    let path = pentagon();
    let n = path.point_count();
    for seg in 0..n {
        approx3(bspline(&path, seg, 1.0), bspline(&path, seg + 1, 0.0), 1e-5);
    }
    // Last segment closes onto the first.
    approx3(bspline(&path, n - 1, 1.0), bspline(&path, 0, 0.0), 1e-5);
}

#[test]
fn bspline_does_not_interpolate_control_points() {
    let path = square();
    let mid = bspline(&path, 0, 0.5);
    approx3(mid, [0.95833, 0.5, 0.0], 1e-4);
    for p in path.points() {
        assert!(dist(mid, p.position) > 0.1, "{mid:?} too close to {:?}", p.position);
    }
    // Start of segment 0 is the weighted average (p0 + 4 p1 + p2) / 6.
    approx3(bspline(&path, 0, 0.0), [5.0 / 6.0, 1.0 / 6.0, 0.0], 1e-6);
}

#[test]
fn modes_dispatch_to_their_basis() {
    let path = square();
    approx3(
        CurveMode::CatmullRom.evaluate(&path, 2, 0.3),
        catmull_rom(&path, 2, 0.3),
        0.0,
    );
    approx3(
        CurveMode::Bezier.evaluate(&path, 2, 0.3),
        bspline(&path, 2, 0.3),
        0.0,
    );
}

#[test]
fn tiny_paths_evaluate_without_panicking() {
    let single = mk_path(&[[3.0, 4.0, 5.0]]);
    approx3(catmull_rom(&single, 0, 0.7), [3.0, 4.0, 5.0], 1e-5);
    approx3(bspline(&single, 0, 0.7), [3.0, 4.0, 5.0], 1e-5);

    let pair = mk_path(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
    approx3(catmull_rom(&pair, 1, 0.0), [2.0, 0.0, 0.0], 1e-6);
    approx3(catmull_rom(&pair, 1, 1.0), [0.0, 0.0, 0.0], 1e-5);
}

#[test]
fn segment_indices_beyond_point_count_wrap() {
    let path = square();
    approx3(catmull_rom(&path, 6, 0.25), catmull_rom(&path, 2, 0.25), 0.0);
    approx3(bspline(&path, 7, 0.25), bspline(&path, 3, 0.25), 0.0);
}
