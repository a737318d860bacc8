use std::io::Write;
use std::path::Path;

use anyhow::Context;
use meshpick_mesh::{parse_index, DefaultMesh, Query};

use crate::args;

fn load(path: &Path) -> anyhow::Result<DefaultMesh> {
    let mesh: DefaultMesh = meshpick_obj::read_obj(path).map_err(|e| {
        log::error!("{:#}", e);
        e
    })?;
    log::info!("Size of Mesh: {} kB", mesh.footprint().kilobytes());
    Ok(mesh)
}

pub fn info_command<W: Write>(args: args::InfoArgs, out: &mut W) -> anyhow::Result<()> {
    let mesh = load(&args.obj_path)?;
    writeln!(out, "Vertices: {}", mesh.vertex_count())?;
    writeln!(out, "Faces: {}", mesh.triangle_count())?;
    writeln!(out, "Size of Mesh: {:.3} kB", mesh.footprint().kilobytes())?;
    if let Some((min, max)) = mesh.bounds() {
        writeln!(
            out,
            "Bounds: ({}, {}, {}) to ({}, {}, {})",
            min.x, min.y, min.z, max.x, max.y, max.z
        )?;
    }
    Ok(())
}

pub fn vertex_command<W: Write>(args: args::AdjacencyArgs, out: &mut W) -> anyhow::Result<()> {
    let index = parse_index(&args.index)?;
    adjacency(&args.obj_path, Query::Vertex(index), out)
}

pub fn face_command<W: Write>(args: args::AdjacencyArgs, out: &mut W) -> anyhow::Result<()> {
    let index = parse_index(&args.index)?;
    adjacency(&args.obj_path, Query::Face(index), out)
}

fn adjacency<W: Write>(path: &Path, query: Query, out: &mut W) -> anyhow::Result<()> {
    let mesh = load(path)?;
    let selection = query
        .run(&mesh)
        .with_context(|| format!("{:?} query failed for {}", query, path.display()))?;
    for (index, facet) in selection
        .facet_indices()
        .iter()
        .zip(selection.triangles(&mesh))
    {
        writeln!(out, "{}: {} {} {}", index, facet.p0, facet.p1, facet.p2)?;
    }
    Ok(())
}
