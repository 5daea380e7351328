// crates/flag_status/src/main.rs

use anyhow::Result;
use chrono::Local;
use clap::ArgMatches;
use flag_status::config::{self, AppConfig};
use flag_status::{logging, run};
use show_status::open_image;

fn main() {
    let matches = config::command().get_matches();
    logging::init(matches.get_flag("verbose"));

    if let Err(err) = try_main(&matches) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn try_main(matches: &ArgMatches) -> Result<()> {
    let config = AppConfig::from_matches(matches)?;
    log::debug!("{:?}", config);

    let display = run(&config, Local::now().date_naive())?;
    println!("{}", display);

    if let Some(image) = &display.image {
        if config.disable_viewer {
            log::info!("viewer disabled; not opening {}", image.display());
        } else {
            open_image(image, &config.viewer)?;
        }
    }

    Ok(())
}
