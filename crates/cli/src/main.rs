use clap::Parser;

mod args;
mod report;

use args::{Args, Commands};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut stdout = std::io::stdout().lock();
    match args.command {
        Commands::Info(args) => report::info_command(args, &mut stdout),
        Commands::Vertex(args) => report::vertex_command(args, &mut stdout),
        Commands::Face(args) => report::face_command(args, &mut stdout),
    }
}
