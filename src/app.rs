// src/app.rs
use eframe::egui;
use rfd::FileDialog;
use anyhow::Result;
use tracing::{error, info, warn};

use crate::config::{AppSettings, Inputs};
use crate::state::{AppState, Screen};
use crate::ui::ScenarioDialog;

pub struct CorkApp {
    state: AppState,
    scenario_dialog: ScenarioDialog,
}

impl CorkApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let restored = if settings.restore_last_session {
            cc.storage.and_then(|storage| eframe::get_value::<Inputs>(storage, eframe::APP_KEY))
        } else {
            None
        };

        let inputs = match restored {
            Some(inputs) if inputs.validate().is_empty() => {
                info!("restored inputs from last session");
                inputs
            }
            Some(_) => {
                warn!("discarding invalid inputs from last session");
                Inputs::default()
            }
            None => Inputs::default(),
        };

        Self {
            state: AppState::with_inputs(settings, inputs),
            scenario_dialog: ScenarioDialog::new(),
        }
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.heading("Federica Cork");
        ui.label(
            "Herramientas de análisis de la viabilidad técnica \
             Disponibilidad de materia prima - Costo de adquisición",
        );
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Archivo", |ui| {
                if ui.button("Nuevo escenario").clicked() {
                    self.state.reset();
                    ui.close_menu();
                }
                if ui.button("Abrir escenario...").clicked() {
                    self.open_scenario();
                    ui.close_menu();
                }
                if ui.button("Guardar").clicked() {
                    if self.state.scenario_path.is_some() {
                        let result = self.state.save_scenario();
                        self.report("Error al guardar el escenario", result);
                    } else {
                        self.save_scenario_as();
                    }
                    ui.close_menu();
                }
                if ui.button("Guardar como...").clicked() {
                    self.save_scenario_as();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Datos del escenario...").clicked() {
                    self.scenario_dialog.open(&self.state.scenario);
                    ui.close_menu();
                }
                if ui.button("Exportar gráfico (CSV)...").clicked() {
                    self.export_chart();
                    ui.close_menu();
                }
            });

            ui.separator();

            let tabs = [
                (Screen::Dashboard, "Panel"),
                (Screen::About, "Acerca de"),
            ];

            for (mode, label) in tabs {
                if ui.selectable_label(self.state.current_screen == mode, label).clicked() {
                    self.state.current_screen = mode;
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(&self.state.scenario.name);
            });
        });
    }

    fn file_dialog(&self, title: &str) -> FileDialog {
        let dialog = FileDialog::new().set_title(title);
        match self.state.settings.start_dir() {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }

    fn open_scenario(&mut self) {
        let file_dialog = self.file_dialog("Abrir escenario")
            .add_filter("RON files", &["ron"]);

        if let Some(path) = file_dialog.pick_file() {
            let result = self.state.open_scenario(&path);
            self.report("Error al abrir el escenario", result);
        }
    }

    fn save_scenario_as(&mut self) {
        let file_dialog = self.file_dialog("Guardar escenario como")
            .add_filter("RON files", &["ron"])
            .set_file_name("escenario.ron");

        if let Some(path) = file_dialog.save_file() {
            let result = self.state.save_scenario_as(&path);
            self.report("Error al guardar el escenario", result);
        }
    }

    fn export_chart(&mut self) {
        let file_dialog = self.file_dialog("Exportar gráfico")
            .add_filter("CSV files", &["csv"])
            .set_file_name("recuperacion.csv");

        if let Some(path) = file_dialog.save_file() {
            let result = self.state.export_chart(&path);
            self.report("Error al exportar el gráfico", result);
        }
    }

    fn report(&mut self, context: &str, result: Result<()>) {
        if let Err(e) = result {
            error!("{}: {:#}", context, e);
            self.state.error_message = Some(format!("{}: {:#}", context, e));
        }
    }
}

impl eframe::App for CorkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
            ui.add_space(4.0);
            self.show_header(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match self.state.current_screen {
                    Screen::Dashboard => {
                        crate::ui::dashboard::show_dashboard_view(ui, &mut self.state);
                    },
                    Screen::About => {
                        crate::ui::about::show_about_view(ui);
                    },
                }
            });
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }

        if self.scenario_dialog.is_open() {
            if let Some(true) = self.scenario_dialog.show(ctx, &mut self.state.scenario) {
                info!(name = %self.state.scenario.name, "updated scenario details");
            }
        }

        // Widgets edited the inputs in place; bring the derived figures up to date
        if self.state.refresh() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state.inputs);
    }
}
