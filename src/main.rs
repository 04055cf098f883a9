//! Standalone vantage viewer. Pass an options TOML as the first argument
//! to override the defaults.

use std::path::Path;

use vantage::{
    options::Options,
    viewport::{hud_lines, Frame, RenderPass, Scene, ViewState},
    Viewer,
};

/// Scene that draws nothing and logs the HUD readout whenever it changes.
#[derive(Default)]
struct ReadoutScene {
    last: Vec<String>,
}

impl Scene for ReadoutScene {
    fn setup(&mut self, state: &mut ViewState) {
        log::info!(
            "{} ({}x{}), flags: {:?}",
            state.mode(),
            state.viewport().width(),
            state.viewport().height(),
            state.settings()
        );
    }

    fn draw_2d(&mut self, frame: &Frame<'_>) {
        debug_assert_eq!(frame.pass, RenderPass::Overlay2D);
        let lines = hud_lines(frame.state);
        if lines != self.last {
            log::debug!("[{}] {}", frame.number, lines.join(" | "));
            self.last = lines;
        }
    }
}

fn load_options(arg: Option<String>) -> Options {
    let Some(path) = arg else {
        return Options::default();
    };
    match Options::load(Path::new(&path)) {
        Ok(options) => {
            log::info!("Loaded options from {path}");
            options
        }
        Err(e) => {
            log::warn!("Ignoring options file {path}: {e}");
            Options::default()
        }
    }
}

fn main() {
    env_logger::init();

    let options = load_options(std::env::args().nth(1));

    if let Err(e) = Viewer::builder()
        .with_options(options)
        .build()
        .run(Box::new(ReadoutScene::default()))
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}
