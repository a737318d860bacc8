use anyhow::{bail, Context};
use log::{debug, info, warn};
use meshpick_mesh::{Facet, MeshError, TriangleMesh, Vector3};
use std::io::BufRead;
use std::path::Path;
use std::str::SplitWhitespace;

/// Accumulates the `v` and `f` records of an OBJ file.
#[derive(Default)]
struct ObjBuilder {
    points: Vec<Vector3>,
    facets: Vec<Facet>,
    // 1-based source line of each facet, so bounds errors can point back into the file.
    facet_lines: Vec<usize>,
    // Corners past the third on polygon faces. We only load triangles.
    dropped_corners: usize,
}

impl ObjBuilder {
    fn parse_line(&mut self, line_number: usize, line: &str) -> anyhow::Result<()> {
        let mut tokens = line.split_whitespace();
        // Everything other than vertex positions and faces (comments, normals, texture
        // coordinates, groups, materials) is skipped.
        match tokens.next() {
            Some("v") => self.parse_vertex(tokens),
            Some("f") => self.parse_face(line_number, tokens),
            _ => Ok(()),
        }
    }

    fn parse_vertex(&mut self, mut tokens: SplitWhitespace) -> anyhow::Result<()> {
        let x = next_coordinate(&mut tokens)?;
        let y = next_coordinate(&mut tokens)?;
        let z = next_coordinate(&mut tokens)?;
        // An optional w component or vertex colours may follow.
        self.points.push(Vector3::new(x, y, z));
        Ok(())
    }

    fn parse_face(
        &mut self,
        line_number: usize,
        mut tokens: SplitWhitespace,
    ) -> anyhow::Result<()> {
        let p0 = self.next_corner(&mut tokens)?;
        let p1 = self.next_corner(&mut tokens)?;
        let p2 = self.next_corner(&mut tokens)?;
        // A trailing comment is not a corner.
        self.dropped_corners += tokens.take_while(|t| !t.starts_with('#')).count();
        self.facets.push(Facet::new(p0, p1, p2));
        self.facet_lines.push(line_number);
        Ok(())
    }

    /// Reads one `index/texture/normal` corner and returns the 0-based vertex index.
    fn next_corner(&self, tokens: &mut SplitWhitespace) -> anyhow::Result<u32> {
        let token = tokens.next().context("face has fewer than 3 vertices")?;
        // Only the position index matters, drop any texture or normal reference.
        let index = token.split_once('/').map_or(token, |(index, _)| index);
        let index: i64 = index
            .parse()
            .with_context(|| format!("invalid face index {:?}", token))?;

        // OBJ indices are 1-based. Negative indices count back from the most recent vertex.
        let resolved = match index {
            0 => bail!("face index 0 is invalid, OBJ indices start at 1"),
            i if i > 0 => i - 1,
            i => {
                let resolved = self.points.len() as i64 + i;
                if resolved < 0 {
                    bail!(
                        "relative face index {} reaches before the first vertex ({} read so far)",
                        i,
                        self.points.len()
                    );
                }
                resolved
            }
        };
        u32::try_from(resolved).with_context(|| format!("face index {} is too large", index))
    }

    fn build<M: TriangleMesh>(self) -> anyhow::Result<M> {
        if self.dropped_corners > 0 {
            warn!(
                "ignored {} vertices from non-triangular faces",
                self.dropped_corners
            );
        }
        info!(
            "Vertices: {}, Faces: {}",
            self.points.len(),
            self.facets.len()
        );
        let facet_lines = self.facet_lines;
        M::from_indexed(self.points, self.facets).map_err(|e| {
            let line_number = match &e {
                MeshError::FacetOutOfBounds { facet, .. } => facet_lines.get(*facet).copied(),
                _ => None,
            };
            match line_number {
                Some(line_number) => anyhow::Error::new(e).context(format!("line {}", line_number)),
                None => anyhow::Error::new(e),
            }
        })
    }
}

fn next_coordinate(tokens: &mut SplitWhitespace) -> anyhow::Result<f32> {
    let token = tokens
        .next()
        .context("vertex has fewer than 3 coordinates")?;
    token
        .parse()
        .with_context(|| format!("invalid coordinate {:?}", token))
}

fn read_lines<M: TriangleMesh, R: BufRead>(reader: R) -> anyhow::Result<M> {
    let mut builder = ObjBuilder::default();
    for (i, line) in reader.lines().enumerate() {
        // Line numbers are reported 1-based to match text editors.
        let line_number = i + 1;
        let line = line.with_context(|| format!("failed to read line {}", line_number))?;
        builder
            .parse_line(line_number, &line)
            .with_context(|| format!("line {}: {:?}", line_number, line.trim()))?;
    }
    debug!(
        "parsed {} vertex and {} face records",
        builder.points.len(),
        builder.facets.len()
    );
    builder.build()
}

/// Loads a mesh from the OBJ file at `p`.
pub fn read_obj<M: TriangleMesh, P: AsRef<Path>>(p: P) -> anyhow::Result<M> {
    let p = p.as_ref();
    let f = std::fs::File::open(p).with_context(|| format!("failed to open {}", p.display()))?;
    read_lines(std::io::BufReader::new(f)).with_context(|| format!("failed to load {}", p.display()))
}

/// Parses a mesh from OBJ text already held in memory.
pub fn parse_obj<M: TriangleMesh>(data: &str) -> anyhow::Result<M> {
    read_lines(data.as_bytes())
}

pub trait ObjReader: BufRead {
    fn read_obj<M: TriangleMesh>(&mut self) -> anyhow::Result<M>;
}

impl<T: BufRead> ObjReader for T {
    fn read_obj<M: TriangleMesh>(&mut self) -> anyhow::Result<M> {
        read_lines(self)
    }
}
