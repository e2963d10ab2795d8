// src/ui/chart.rs
use eframe::egui;
use egui_plot::{Corner, Legend, Line, Plot, Points, VLine};
use crate::analysis::{ChartSeries, Crossing, RECOVERED_SERIES, REQUIRED_SERIES};

const RECOVERED_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 150, 255);
const REQUIRED_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 110, 80);

pub fn show_recovery_chart(ui: &mut egui::Ui, chart: &ChartSeries) {
    let labels = chart.labels.clone();
    ui.label(egui::RichText::new(labels.title).strong());
    ui.add_space(4.0);

    let hover_source = chart.clone();
    let suffix = labels.x_suffix;
    let value_label = labels.value_label;

    let plot = Plot::new("recovery_chart")
        .height(360.0)
        .legend(Legend::default().position(Corner::LeftTop))
        .x_axis_label(labels.x_label)
        .y_axis_label(labels.value_label)
        .include_x(0.0)
        .include_x(100.0)
        .include_y(0.0)
        .allow_scroll(false)
        .x_axis_formatter(move |x, _chars, _range| format!("{:.0}{}", x, suffix))
        .label_formatter(move |_name, point| {
            // unified hover: both series at the nearest axis point
            match hover_source.values_near(point.x) {
                Some((pct, recovered, required)) => format!(
                    "{}{}\n{}: {:.1} {}\n{}: {:.1} {}",
                    pct, suffix,
                    RECOVERED_SERIES, recovered, value_label,
                    REQUIRED_SERIES, required, value_label,
                ),
                None => String::new(),
            }
        });

    plot.show(ui, |plot_ui| {
        plot_ui.line(
            Line::new(chart.required_points())
                .name(REQUIRED_SERIES)
                .color(REQUIRED_COLOR)
                .width(2.0),
        );
        plot_ui.line(
            Line::new(chart.recovered_points())
                .name(RECOVERED_SERIES)
                .color(RECOVERED_COLOR)
                .width(2.0),
        );

        if let Crossing::Within { rate, .. } = chart.crossing() {
            plot_ui.vline(
                VLine::new(rate)
                    .color(egui::Color32::GRAY)
                    .style(egui_plot::LineStyle::dashed_loose()),
            );
            plot_ui.points(
                Points::new(vec![[rate, chart.requirement]])
                    .radius(5.0)
                    .color(egui::Color32::DARK_GREEN),
            );
        }
    });
}

/// One-line summary of where the two lines meet.
pub fn crossing_summary(crossing: Crossing) -> String {
    match crossing {
        Crossing::Within { rate, closest_point } => {
            format!("{:.1}% (punto más cercano: {}%)", rate, closest_point)
        }
        Crossing::Beyond { rate } => format!("{:.1}%: supera el 99% del eje", rate),
        Crossing::Never => "sin disponibilidad de corcho".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_summary() {
        assert_eq!(
            crossing_summary(Crossing::Within { rate: 37.14, closest_point: 37 }),
            "37.1% (punto más cercano: 37%)"
        );
        assert_eq!(crossing_summary(Crossing::Beyond { rate: 150.0 }), "150.0%: supera el 99% del eje");
        assert_eq!(crossing_summary(Crossing::Never), "sin disponibilidad de corcho");
    }
}
