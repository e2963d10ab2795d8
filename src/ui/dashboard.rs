// src/ui/dashboard.rs
use eframe::egui;
use crate::analysis::Readout;
use crate::config::InputField;
use crate::state::{AppState, DashboardState};
use crate::ui::chart;

pub fn show_dashboard_view(ui: &mut egui::Ui, state: &mut AppState) {
    let available_size = ui.available_size();

    egui::Grid::new("dashboard_grid")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            // Left panel - inputs and readouts
            ui.vertical(|ui| {
                ui.set_width(available_size.x * 0.25);
                show_availability_card(ui, state);
                ui.add_space(12.0);
                show_requirement_card(ui, state);
            });

            // Right panel - chart
            ui.vertical(|ui| {
                ui.set_min_width(available_size.x * 0.7);
                show_chart_panel(ui, &state.dashboard);
            });
            ui.end_row();
        });
}

fn show_availability_card(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Disponibilidad de corcho");
        ui.separator();

        let dashboard = &state.dashboard;
        let inputs = &mut state.inputs;

        field_row(ui, InputField::BottlesPerYear, dashboard, |ui| {
            ui.add(egui::DragValue::new(&mut inputs.bottles_per_year).speed(10.0));
        });
        field_row(ui, InputField::CorkWeightPerBottle, dashboard, |ui| {
            ui.add(
                egui::DragValue::new(&mut inputs.cork_weight_per_bottle)
                    .speed(0.001)
                    .max_decimals(4)
            );
        });

        ui.add_space(4.0);
        readout_row(ui, "Disponibilidad (kg)", &dashboard.availability);
    });
}

fn show_requirement_card(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Requerimientos corcho");
        ui.separator();

        let dashboard = &state.dashboard;
        let inputs = &mut state.inputs;

        field_row(ui, InputField::UtilizationRatePercent, dashboard, |ui| {
            ui.add(
                egui::Slider::new(&mut inputs.utilization_rate_percent, 0..=100)
                    .step_by(1.0)
                    .suffix("%")
            );
        });
        field_row(ui, InputField::UnitsPerYear, dashboard, |ui| {
            ui.add(egui::DragValue::new(&mut inputs.units_per_year).speed(1.0));
        });
        field_row(ui, InputField::CorkPerUnit, dashboard, |ui| {
            ui.add(
                egui::DragValue::new(&mut inputs.cork_per_unit)
                    .speed(0.01)
                    .max_decimals(3)
            );
        });

        ui.add_space(4.0);
        readout_row(ui, "Requerimiento (kg)", &dashboard.requirement);
    });
}

fn show_chart_panel(ui: &mut egui::Ui, dashboard: &DashboardState) {
    match &dashboard.chart {
        Ok(series) => {
            chart::show_recovery_chart(ui, series);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Tasa de recuperación mínima:");
                ui.strong(chart::crossing_summary(series.crossing()));
            });
        }
        Err(e) => {
            ui.group(|ui| {
                ui.set_min_height(360.0);
                ui.centered_and_justified(|ui| {
                    ui.colored_label(egui::Color32::YELLOW, format!("Gráfico no disponible: {}", e));
                });
            });
        }
    }
}

/// A labelled input widget followed by any message blaming that field.
fn field_row(
    ui: &mut egui::Ui,
    field: InputField,
    dashboard: &DashboardState,
    add_widget: impl FnOnce(&mut egui::Ui),
) {
    ui.label(field.label());
    add_widget(ui);
    for error in dashboard.field_errors(field) {
        ui.colored_label(egui::Color32::RED, format!("⚠ {}", error));
    }
    ui.add_space(4.0);
}

fn readout_row(ui: &mut egui::Ui, label: &str, readout: &Readout) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if readout.error().is_some() {
                ui.colored_label(egui::Color32::RED, &readout.text);
            } else {
                ui.strong(&readout.text);
            }
        });
    });
}
