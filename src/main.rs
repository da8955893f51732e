use bunker_lesson::LessonApp;
use bunker_lesson::config::LessonConfig;
use std::sync::Arc;

fn init_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> eframe::Result<()> {
    init_logging();

    let config = LessonConfig::from_env();
    log::debug!("{config:?}");

    // no window without valid content
    let content = match config.load_content() {
        Ok(content) => Arc::new(content),
        Err(err) => {
            log::error!("refusing to start: {err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([900.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(LessonApp::new(content)))),
    )
}
