//! Wavefront OBJ reading for mesh import. Only geometry is read: `v`, `vn` and `f`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use math::hcm::{vec3, Point3, Vec3};
use shape::{InterpTriangle, Object, ObjectSet, Shape, Triangle};

use crate::error::{ParseError, Result};

/// One face corner: a position index and, if given, a normal index (both 0-based).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Corner {
    position: usize,
    normal: Option<usize>,
}

/// Reads every face of the OBJ file at `path` as triangles. Polygons are split into a fan around
/// their first corner.
pub fn read_obj(path: &Path) -> Result<ObjectSet> {
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_owned(),
        source,
    })?;
    let mesh_error = |line: usize, message: String| ParseError::Mesh {
        path: path.to_owned(),
        line,
        message,
    };

    let mut positions: Vec<Point3> = vec![];
    let mut normals: Vec<Vec3> = vec![];
    let mut set = ObjectSet::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| ParseError::Io {
            path: path.to_owned(),
            source,
        })?;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let v = parse_xyz(parts).map_err(|m| mesh_error(line_no, m))?;
                positions.push(v.into());
            }
            Some("vn") => {
                let n = parse_xyz(parts).map_err(|m| mesh_error(line_no, m))?;
                normals.push(n);
            }
            Some("f") => {
                let corners = parts
                    .map(|c| parse_corner(c, positions.len(), normals.len()))
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|m| mesh_error(line_no, m))?;
                if corners.len() < 3 {
                    return Err(mesh_error(
                        line_no,
                        format!("face needs at least 3 corners, found {}", corners.len()),
                    ));
                }
                for k in 1..corners.len() - 1 {
                    let tri = [corners[0], corners[k], corners[k + 1]];
                    set.push(Object::new(make_triangle(&tri, &positions, &normals)));
                }
            }
            Some(keyword) if keyword.starts_with('#') => {}
            Some(keyword) => debug!("{}:{}: skipping '{}'", path.display(), line_no, keyword),
            None => {}
        }
    }
    info!(
        "read {}: {} vertices, {} normals, {} triangles",
        path.display(),
        positions.len(),
        normals.len(),
        set.len()
    );
    Ok(set)
}

fn parse_xyz<'s>(mut parts: impl Iterator<Item = &'s str>) -> std::result::Result<Vec3, String> {
    let mut xyz = [0.0f32; 3];
    for value in xyz.iter_mut() {
        let text = parts.next().ok_or("expected 3 coordinates")?;
        *value = text
            .parse()
            .map_err(|_| format!("bad coordinate '{}'", text))?;
    }
    Ok(vec3(xyz[0], xyz[1], xyz[2]))
}

/// Parses `p`, `p/t`, `p//n` or `p/t/n`. The texture index is ignored.
fn parse_corner(
    text: &str,
    position_count: usize,
    normal_count: usize,
) -> std::result::Result<Corner, String> {
    let mut fields = text.split('/');
    let position = fields
        .next()
        .and_then(|p| resolve_index(p, position_count))
        .ok_or_else(|| format!("bad vertex index in '{}'", text))?;
    let normal = match fields.nth(1) {
        Some(n) if !n.is_empty() => Some(
            resolve_index(n, normal_count).ok_or_else(|| format!("bad normal index in '{}'", text))?,
        ),
        _ => None,
    };
    Ok(Corner { position, normal })
}

/// OBJ indices start at 1; negative ones count back from the last element read so far.
fn resolve_index(text: &str, count: usize) -> Option<usize> {
    let i: i64 = text.parse().ok()?;
    let count = count as i64;
    let resolved = if i > 0 { i - 1 } else { count + i };
    if i != 0 && (0..count).contains(&resolved) {
        Some(resolved as usize)
    } else {
        None
    }
}

fn make_triangle(corners: &[Corner; 3], positions: &[Point3], normals: &[Vec3]) -> Shape {
    let vertices = [
        positions[corners[0].position],
        positions[corners[1].position],
        positions[corners[2].position],
    ];
    match (corners[0].normal, corners[1].normal, corners[2].normal) {
        (Some(n0), Some(n1), Some(n2)) => Shape::InterpTriangle(InterpTriangle::new(
            vertices,
            [normals[n0], normals[n1], normals[n2]],
        )),
        _ => Shape::Triangle(Triangle::new(vertices)),
    }
}
