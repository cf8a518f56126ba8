mod api;
mod app;
mod application;
mod config;
mod domain;
mod logging;
mod navigation;
mod ui;
mod utils;

use config::AppConfig;

fn main() -> iced::Result {
    logging::init_logging();
    let config = AppConfig::from_env();

    iced::application(
        move || app::ResolverApp::new(config.clone()),
        app::update,
        app::view,
    )
    .title("Spotify Downloader")
    .run()
}
