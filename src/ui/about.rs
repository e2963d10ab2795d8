// src/ui/about.rs
use eframe::egui;

const INTRO: &str = "Esta es una herramienta interactiva que permite analizar la relación entre cantidad de \
materia prima requerida y la cantidad disponible en función de la tasa de recuperación esperada para el material. Para ello:";

const STEPS: [&str; 2] = [
    "Calcula la Disponibilidad anual en kilogramos de materia prima en función del estimado de botellas \
comercializadas al año (Botellas año) y el contenido en kilogramos del corcho de cada botella (Peso corcho).",
    "Calcula el Requerimiento anual en kilogramos en función de las unidades anuales estimadas a producir, la \
cantidad de corcho promedio por producto y la tasa de aprovechamiento de la materia prima (es decir, qué \
porcentaje del corcho recogido es realmente reutilizable).",
];

const CROSSING: &str = "El punto de cruce de las líneas permite determinar la tasa de recuperación mínima requerida.";

pub fn show_about_view(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Cómo usar la herramienta");
        ui.add_space(8.0);

        ui.label(INTRO);
        for step in STEPS {
            ui.label(format!("• {}", step));
        }
        ui.add_space(8.0);
        ui.label(CROSSING);
        ui.add_space(8.0);
        ui.strong("¡Experimenta cambiando algunos de los valores!");
    });
}
