use egui::{Color32, Context, RichText};
use meshpick_mesh::{parse_index, IndexedMesh, Query, QueryError, Selection};

use crate::config::ViewerConfig;

const STATUS_COLOR: Color32 = Color32::from_rgb(255, 170, 0);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectMode {
    Vertex,
    Face,
}

/// Everything the control panel edits.
pub struct PanelState {
    pub visible: bool,
    pub show_mesh: bool,
    pub input: String,
    pub select_vertex: bool,
    pub select_face: bool,
    pub status: Option<String>,
    selection: Option<Selection>,
    selection_changed: bool,
}

impl PanelState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            visible: !config.hide_gui,
            show_mesh: !config.no_mesh,
            input: String::new(),
            select_vertex: false,
            select_face: false,
            status: None,
            selection: None,
            selection_changed: false,
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Returns true once after each change to the selection.
    pub fn take_selection_changed(&mut self) -> bool {
        std::mem::take(&mut self.selection_changed)
    }

    /// Reacts to one of the select buttons having been flipped.
    ///
    /// Highlighted triangles are reset on every press. If the button is now on, the other
    /// button is switched off and the typed index is queried against `mesh`.
    pub fn toggled(&mut self, mode: SelectMode, mesh: &IndexedMesh) {
        self.selection = None;
        self.selection_changed = true;
        self.status = None;

        let is_on = match mode {
            SelectMode::Vertex => self.select_vertex,
            SelectMode::Face => self.select_face,
        };
        if !is_on {
            return;
        }
        match mode {
            SelectMode::Vertex => self.select_face = false,
            SelectMode::Face => self.select_vertex = false,
        }

        match self.run_query(mode, mesh) {
            Ok(selection) => {
                log::info!(
                    "{:?} selected {} triangles",
                    selection.query(),
                    selection.len()
                );
                self.selection = Some(selection);
            }
            Err(e) => {
                log::warn!("{}", e);
                self.status = Some(e.to_string());
            }
        }
    }

    fn run_query(&self, mode: SelectMode, mesh: &IndexedMesh) -> Result<Selection, QueryError> {
        let index = parse_index(&self.input)?;
        let query = match mode {
            SelectMode::Vertex => Query::Vertex(index),
            SelectMode::Face => Query::Face(index),
        };
        query.run(mesh)
    }
}

/// Draws the control panel and applies any button presses to `state`.
pub fn draw_panel(ctx: &Context, state: &mut PanelState, mesh: &IndexedMesh) {
    egui::SidePanel::left("control_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("meshpick");
            ui.add_space(8.0);

            ui.checkbox(&mut state.show_mesh, "View Mesh");
            ui.add_space(8.0);

            ui.label("Vertex/Face Index:");
            ui.text_edit_singleline(&mut state.input);
            ui.add_space(4.0);

            let mut toggled = None;
            ui.horizontal(|ui| {
                if ui
                    .toggle_value(&mut state.select_vertex, "Select Vertex")
                    .changed()
                {
                    toggled = Some(SelectMode::Vertex);
                }
                if ui
                    .toggle_value(&mut state.select_face, "Select Face")
                    .changed()
                {
                    toggled = Some(SelectMode::Face);
                }
            });
            if let Some(mode) = toggled {
                state.toggled(mode, mesh);
            }

            if let Some(status) = &state.status {
                ui.label(RichText::new(status).color(STATUS_COLOR));
            }

            ui.separator();
            ui.label(format!("Vertices: {}", mesh.vertex_count()));
            ui.label(format!("Faces: {}", mesh.triangle_count()));
            ui.label(format!(
                "Mesh Size: {:.3} kB",
                mesh.footprint().kilobytes()
            ));
            ui.label(format!(
                "Selected: {}",
                state.selection().map_or(0, Selection::len)
            ));
            ui.add_space(8.0);
            ui.label(
                RichText::new("drag to orbit, scroll to zoom\nf: fullscreen  h: hide panel")
                    .small()
                    .weak(),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshpick_mesh::{Facet, Vector3};

    fn state() -> PanelState {
        PanelState {
            visible: true,
            show_mesh: true,
            input: String::new(),
            select_vertex: false,
            select_face: false,
            status: None,
            selection: None,
            selection_changed: false,
        }
    }

    fn mesh() -> IndexedMesh {
        IndexedMesh::new(
            vec![Vector3::new(0.0, 0.0, 0.0); 4],
            vec![Facet::new(0, 1, 2), Facet::new(0, 2, 3)],
        )
        .unwrap()
    }

    #[test]
    fn vertex_toggle_runs_query() {
        let mut state = state();
        state.input = "3".to_string();
        state.select_face = true;
        state.select_vertex = true;
        state.toggled(SelectMode::Vertex, &mesh());

        assert!(!state.select_face);
        assert!(state.take_selection_changed());
        assert!(!state.take_selection_changed());
        assert_eq!(&[1], state.selection().unwrap().facet_indices());
        assert_eq!(None, state.status);
    }

    #[test]
    fn toggling_off_clears_selection() {
        let mut state = state();
        state.input = "0".to_string();
        state.select_face = true;
        state.toggled(SelectMode::Face, &mesh());
        assert_eq!(&[1], state.selection().unwrap().facet_indices());

        state.select_face = false;
        state.toggled(SelectMode::Face, &mesh());
        assert!(state.selection().is_none());
        assert!(state.take_selection_changed());
    }

    #[test]
    fn bad_input_sets_status() {
        let mut state = state();
        state.input = "two".to_string();
        state.select_vertex = true;
        state.toggled(SelectMode::Vertex, &mesh());
        assert!(state.selection().is_none());
        assert_eq!(
            Some("invalid input: enter an integer".to_string()),
            state.status
        );

        state.input = "4".to_string();
        state.toggled(SelectMode::Vertex, &mesh());
        assert_eq!(
            Some("vertex index 4 out of bounds (mesh has 4 vertices)".to_string()),
            state.status
        );
    }
}
