use eframe::egui;
use log::{error, info};

mod ui;

use ui::app_state::BarberBookingApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Boika the Barber booking application");

    // Phone-shaped window; the whole UI is laid out for a narrow screen
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 880.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("Boika the Barber")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Boika the Barber",
        options,
        Box::new(|cc| match BarberBookingApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized barber booking app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
