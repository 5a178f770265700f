mod app;
mod audio;
mod bundle;
mod config;
mod error;
mod playback;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
