// src/ui/dialog.rs
use eframe::egui;
use crate::config::ScenarioFile;

/// Edits the name and description stored with a scenario.
#[derive(Default)]
pub struct ScenarioDialog {
    name: String,
    description: String,
    open: bool,
}

impl ScenarioDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, scenario: &ScenarioFile) {
        self.open = true;
        self.name = scenario.name.clone();
        self.description = scenario.description.clone().unwrap_or_default();
    }

    /// Returns `Some(true)` on the frame the edits were applied.
    pub fn show(&mut self, ctx: &egui::Context, scenario: &mut ScenarioFile) -> Option<bool> {
        if !self.open {
            return None;
        }

        let mut changed = false;
        let mut should_close = false;

        let result = egui::Window::new("Datos del escenario")
            .collapsible(false)
            .resizable(false)
            .fixed_size([320.0, 180.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let name_valid = !self.name.trim().is_empty();

                    ui.horizontal(|ui| {
                        ui.label("Nombre:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.name)
                                .desired_width(220.0)
                                .hint_text("Nombre del escenario")
                        );
                    });

                    ui.horizontal(|ui| {
                        ui.label("Descripción:");
                        ui.add(
                            egui::TextEdit::multiline(&mut self.description)
                                .desired_width(220.0)
                                .desired_rows(3)
                                .hint_text("Notas opcionales")
                        );
                    });

                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        if ui.button("Cancelar").clicked() {
                            should_close = true;
                        }

                        if ui.add_enabled(name_valid, egui::Button::new("Aceptar")).clicked() {
                            scenario.name = self.name.trim().to_string();
                            let description = self.description.trim();
                            scenario.description = (!description.is_empty()).then(|| description.to_string());
                            changed = true;
                            should_close = true;
                        }
                    });

                    if !name_valid {
                        ui.colored_label(egui::Color32::RED, "El nombre es obligatorio");
                    }
                });
            });

        if should_close {
            self.open = false;
        }

        result.map(|_| changed)
    }
}
