use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    pub obj_path: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct AdjacencyArgs {
    pub obj_path: PathBuf,

    /// 0-based vertex or face index.
    pub index: String,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print vertex and face counts, memory footprint and bounds.
    Info(InfoArgs),
    /// List the triangles that use a vertex.
    Vertex(AdjacencyArgs),
    /// List the other triangles that share a vertex with a face.
    Face(AdjacencyArgs),
}
