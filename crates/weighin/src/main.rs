use clap::Parser;
use relm4::prelude::*;
use std::path::PathBuf;
use weighin::config::{self, ConfigSource, Overrides};
use weighin::gui::app::AppModel;
use weighin::sys::runtime;

#[derive(Parser, Debug)]
#[command(version, about = "Pick a weight on a rotating dial", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Smallest selectable weight
    #[arg(long, allow_negative_numbers = true)]
    min: Option<i64>,

    /// Largest selectable weight
    #[arg(long, allow_negative_numbers = true)]
    max: Option<i64>,

    /// Weight under the indicator at startup
    #[arg(long, allow_negative_numbers = true)]
    initial: Option<i64>,

    /// Write the default configuration file, print its path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let overrides = Overrides {
        min: cli.min,
        max: cli.max,
        initial: cli.initial,
    };
    let source = match cli.config {
        Some(path) => ConfigSource::new(path, overrides),
        None => ConfigSource::default_location(overrides)?,
    };

    if cli.init_config {
        let path = config::write_default_config(source.path())?;
        println!("{}", path.display());
        return Ok(());
    }

    // A bad range typed on the command line is an error, a bad file is not.
    let config = if overrides == Overrides::default() {
        config::load_or_default(&source)
    } else {
        source.load()?
    };
    log::debug!("Loaded configuration: {:?}", config);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx, source.path().to_path_buf());

    // GTK must not see our own flags.
    let app = RelmApp::new("org.weighin.scale").with_args(Vec::new());

    app.run::<AppModel>((config, source, rx));
    Ok(())
}
