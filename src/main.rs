use diagram_maker::{ConfigResult, EditorConfig};

/// Loads the config file named by the first argument, or the defaults when none is given.
fn load_config() -> ConfigResult<EditorConfig> {
    let config = match std::env::args().nth(1) {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    config.with_env_overrides()?.validate()
}

fn main() -> Result<(), eframe::Error> {
    // Set up logging; RUST_LOG=diagram_maker=debug traces every transition
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(2);
        }
    };

    diagram_maker::run_app(config)
}
