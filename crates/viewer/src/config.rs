use clap::Parser;
use std::path::PathBuf;

/// The OBJ file loaded when none is given on the command line.
pub const DEFAULT_MODEL_PATH: &str = "res/cube/cube.obj";

/// Loads an OBJ model and highlights the triangles around a vertex or face.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ViewerConfig {
    /// Path to a triangulated OBJ file.
    #[arg(default_value = DEFAULT_MODEL_PATH)]
    pub path: PathBuf,

    /// Start with the control panel hidden (toggle with 'h').
    #[arg(long)]
    pub hide_gui: bool,

    /// Start with the wireframe hidden.
    #[arg(long)]
    pub no_mesh: bool,

    /// Initial distance between the camera and the model centre. Defaults to a distance
    /// that fits the whole model in view.
    #[arg(long)]
    pub distance: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ViewerConfig::parse_from(["meshpick-viewer"]);
        assert_eq!(PathBuf::from(DEFAULT_MODEL_PATH), config.path);
        assert!(!config.hide_gui);
        assert!(!config.no_mesh);
        assert_eq!(None, config.distance);
    }

    #[test]
    fn overrides() {
        let config = ViewerConfig::parse_from([
            "meshpick-viewer",
            "models/car.obj",
            "--hide-gui",
            "--distance",
            "25",
        ]);
        assert_eq!(PathBuf::from("models/car.obj"), config.path);
        assert!(config.hide_gui);
        assert_eq!(Some(25.0), config.distance);
    }
}
