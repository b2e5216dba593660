use std::io;

mod cli;
use cli::*;

mod config;
use config::Config;

mod manager;
use manager::TrainManager;

mod report;

mod schema;
use schema::SchemaFile;

mod store;
use store::Store;

mod train;

use utils::aliases::getenv;
use utils::data::Manager;
use utils::error::{CliError, CliResult, ExitCode, ProcessResult};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(config::LOG_VAR, "warn"))
        .init();

    let options = Options::parse_normalized();

    run(options).process()
}

fn run(options: Options) -> CliResult {
    let config =
        Config::resolve(options.subcmd.file().data.clone(), getenv).map_err(CliError::from_display)?;

    log::debug!("using {:?}", config);

    let store = Store::new(&config.data_path, SchemaFile::new(&config.schema_path));
    let mut manager = TrainManager::load(&store).map_err(CliError::from_display)?;

    match options.subcmd {
        SubCmd::Add(param) => subcmd_add(&mut manager, param),
        SubCmd::Display(_) => subcmd_display(&manager),
        SubCmd::Select(param) => subcmd_select(&manager, param),
    }?;

    manager
        .save_if_modified(&store)
        .map_err(CliError::from_display)
}

fn subcmd_add(manager: &mut TrainManager, param: AddParameters) -> CliResult {
    manager.add_train(param.number, param.destination, param.start_time);

    Ok(())
}

fn subcmd_display(manager: &TrainManager) -> CliResult {
    let stdout = io::stdout();
    report::display_trains(manager.data(), &mut stdout.lock())
        .map_err(CliError::wrap("Failed to write to stdout"))
}

fn subcmd_select(manager: &TrainManager, param: SelectParameters) -> CliResult {
    let selected = manager.select_by_destination(&param.dest);

    let stdout = io::stdout();
    report::display_trains(selected, &mut stdout.lock())
        .map_err(CliError::wrap("Failed to write to stdout"))
}
