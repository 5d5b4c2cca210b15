// std imports
use std::{
    io::{stderr, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use wildsift::{App, cli, config, error::*};

const WILDSIFT_DEBUG_LOG: &str = "WILDSIFT_DEBUG_LOG";
const WILDSIFT_DEBUG_LOG_STYLE: &str = "WILDSIFT_DEBUG_LOG_STYLE";

// ---

fn init_logging() {
    let debug = std::env::var_os(WILDSIFT_DEBUG_LOG).is_some();

    let mut builder = if debug {
        let env = logger::Env::new()
            .filter(WILDSIFT_DEBUG_LOG)
            .write_style(WILDSIFT_DEBUG_LOG_STYLE);
        let mut builder = logger::Builder::from_env(env);
        builder.format_timestamp_micros();
        builder
    } else {
        let mut builder = logger::Builder::new();
        builder.filter_level(log::LevelFilter::Error).format_timestamp(None);
        builder
    };
    builder.format_target(debug).init();

    log::debug!("debug logging enabled by {}", WILDSIFT_DEBUG_LOG);
}

fn run() -> Result<bool> {
    init_logging();

    let opt = cli::Opt::parse();

    let (configs, no_default) = opt.config_files();
    let settings = config::at(configs.iter().cloned()).no_default(no_default).load()?;
    log::debug!("settings: {:?}", settings);

    let app = App::new(opt.options(&settings));

    if !opt.any.is_empty() {
        return Ok(app.check_any(&opt.any));
    }

    let selected = app.run(opt.inputs(), &mut stdout().lock())?;

    Ok(selected != 0)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            err.log_to(&mut stderr()).ok();
            process::exit(2);
        }
    }
}
