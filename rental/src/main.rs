use clap::{Arg, ArgAction, ArgMatches, Command};
use rental_frontend::settings::Settings;
use rental_tracker::{ReturnPolicy, Stock, TrackerError};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] TrackerError),
}

#[tokio::main]
async fn main() {
    let logpath = match get_logging_path() {
        Ok(it) => it,
        Err(_) => return,
    };

    let logfile = tracing_appender::rolling::daily(logpath, "log");
    tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .init();

    debug!("starting application");

    let mut settings = Settings::default();
    if let Err(err) = map_args_to_settings(&cli().get_matches(), &mut settings) {
        error!("closing application with error: {:?}", err);
        eprintln!("{}", err);
        std::process::exit(2);
    }

    debug!("starting with settings: {:?}", settings);

    match rental_frontend::run(settings).await {
        Ok(()) => {
            debug!("closing application");
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
        }
    }
}

fn cli() -> Command {
    Command::new("rental")
        .about("rental - a terminal rental desk for consoles")
        .args([
            // NOTE: options
            Arg::new("stock")
                .long("stock")
                .value_name("ITEM=COUNT")
                .action(ArgAction::Append)
                .help("override the unit count of a console type, e.g. --stock ps5=4"),
            Arg::new("permissive-returns")
                .long("permissive-returns")
                .action(ArgAction::SetTrue)
                .default_value("false")
                .help("accept returns by type even if every unit is in stock or rented out"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) -> Result<(), Error> {
    if args.get_flag("permissive-returns") {
        settings.return_policy = ReturnPolicy::Permissive;
    }

    let mut stock = Stock::default();
    if let Some(overrides) = args.get_many::<String>("stock") {
        for value in overrides {
            let (item, count) = Stock::parse_override(value)?;
            stock.set(item, count);
        }
    }
    settings.stock = stock;

    Ok(())
}

fn get_logging_path() -> Result<String, Error> {
    let cache_dir = match dirs::cache_dir() {
        Some(cache_dir) => match cache_dir.to_str() {
            Some(cache_dir_string) => cache_dir_string.to_string(),
            None => return Err(Error::Initialization),
        },
        None => return Err(Error::Initialization),
    };

    Ok(format!("{}{}", cache_dir, "/rental/logs"))
}

#[cfg(test)]
mod test {
    use rental_tracker::ItemType;

    use super::*;

    fn settings_from(args: &[&str]) -> Result<Settings, Error> {
        let matches = cli().try_get_matches_from(args).expect("arguments must parse");
        let mut settings = Settings::default();
        map_args_to_settings(&matches, &mut settings)?;
        Ok(settings)
    }

    #[test]
    fn defaults_without_arguments() {
        let settings = settings_from(&["rental"]).expect("settings");

        assert_eq!(ReturnPolicy::Capped, settings.return_policy);
        assert_eq!(2, settings.stock.get(ItemType::Ps3));
        assert_eq!(3, settings.stock.get(ItemType::Ps4));
    }

    #[test]
    fn stock_overrides_are_applied_in_order() {
        let settings = settings_from(&[
            "rental",
            "--stock",
            "ps5=4",
            "--stock",
            "PS5=6",
            "--stock",
            "ps vr=0",
        ])
        .expect("settings");

        assert_eq!(6, settings.stock.get(ItemType::Ps5));
        assert_eq!(0, settings.stock.get(ItemType::PsVr));
        assert_eq!(2, settings.stock.get(ItemType::Ps3));
    }

    #[test]
    fn permissive_returns_flag() {
        let settings = settings_from(&["rental", "--permissive-returns"]).expect("settings");
        assert_eq!(ReturnPolicy::Permissive, settings.return_policy);
    }

    #[test]
    fn invalid_stock_override_is_rejected() {
        assert!(settings_from(&["rental", "--stock", "ps6=1"]).is_err());
        assert!(settings_from(&["rental", "--stock", "ps5"]).is_err());
        assert!(settings_from(&["rental", "--stock", "ps5=-1"]).is_err());
    }
}
