use clap::Parser;
use meshpick_viewer::ViewerConfig;

fn main() -> anyhow::Result<()> {
    meshpick_viewer::run(ViewerConfig::parse())
}
