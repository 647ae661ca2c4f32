use encore::{Settings, app_core::Encore, logging};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(config_path.as_deref())?;

    logging::init(settings.log_file.as_deref())?;

    Encore::new(settings)?.run()
}
