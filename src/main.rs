use eframe::egui;
use sensor_finder::app::SensorFinderApp;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([800.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sensor Finder – Explore products",
        options,
        Box::new(|_cc| Ok(Box::new(SensorFinderApp::default()))),
    )
}
