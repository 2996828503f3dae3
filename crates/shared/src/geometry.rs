//! Sample geometry: an icosphere surface and a uniform random point cloud.

use std::collections::HashMap;

use glam::DVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Point3, PointCloud, Surface};

pub const DEFAULT_SUBDIVISIONS: u32 = 3;
pub const DEFAULT_RADIUS: f64 = 1.0;
pub const DEFAULT_POINT_COUNT: usize = 1000;

// Counter-clockwise seen from outside, indices into the golden-ratio vertices below.
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> Vec<DVec3> {
    let t = (1.0 + 5f64.sqrt()) / 2.0;
    [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .into_iter()
    .map(|(x, y, z)| DVec3::new(x, y, z).normalize())
    .collect()
}

/// Icosphere: an icosahedron whose faces are split into four `subdivisions` times,
/// with every vertex pushed out to `radius`.
///
/// Produces `10 * 4^n + 2` vertices and `20 * 4^n` triangles.
pub fn icosphere(subdivisions: u32, radius: f64) -> Surface {
    let mut vertices = icosahedron_vertices();
    let mut faces = ICOSAHEDRON_FACES.to_vec();

    for _ in 0..subdivisions {
        faces = subdivide(&mut vertices, &faces);
    }

    Surface {
        vertices: vertices.iter().map(|v| (*v * radius).to_array()).collect(),
        faces,
    }
}

fn subdivide(vertices: &mut Vec<DVec3>, faces: &[[u32; 3]]) -> Vec<[u32; 3]> {
    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::with_capacity(faces.len() * 3 / 2);
    let mut out = Vec::with_capacity(faces.len() * 4);

    for &[a, b, c] in faces {
        let ab = midpoint(vertices, &mut midpoints, a, b);
        let bc = midpoint(vertices, &mut midpoints, b, c);
        let ca = midpoint(vertices, &mut midpoints, c, a);
        out.extend_from_slice(&[[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
    }

    out
}

// Shared edges reuse the same midpoint vertex so the sphere stays watertight.
fn midpoint(
    vertices: &mut Vec<DVec3>,
    cache: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = (a.min(b), a.max(b));
    *cache.entry(key).or_insert_with(|| {
        let m = ((vertices[a as usize] + vertices[b as usize]) * 0.5).normalize();
        vertices.push(m);
        (vertices.len() - 1) as u32
    })
}

/// `count` points uniform in the centered unit cube `[-0.5, 0.5)^3`
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Point3> {
    (0..count)
        .map(|_| {
            [
                rng.random::<f64>() - 0.5,
                rng.random::<f64>() - 0.5,
                rng.random::<f64>() - 0.5,
            ]
        })
        .collect()
}

/// Параметры генерации тестовой геометрии
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometrySettings {
    pub subdivisions: u32,
    pub radius: f64,
    pub points: usize,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_SUBDIVISIONS,
            radius: DEFAULT_RADIUS,
            points: DEFAULT_POINT_COUNT,
        }
    }
}

/// Геометрия, сгенерированная один раз при старте и далее только читаемая
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleGeometry {
    pub surface: Surface,
    pub cloud: PointCloud,
}

impl SampleGeometry {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, settings: &GeometrySettings) -> Self {
        Self {
            surface: icosphere(settings.subdivisions, settings.radius),
            cloud: PointCloud::new(random_points(rng, settings.points)),
        }
    }
}
