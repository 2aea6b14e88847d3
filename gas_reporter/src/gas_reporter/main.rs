//!
//! The gas reporter executable.
//!

pub(crate) mod arguments;

use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => gas_reporter::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            gas_reporter::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let mut config = gas_reporter::Config::load(arguments.config.as_deref())?;
    if let Some(rpc_url) = arguments.rpc_url {
        config.rpc_url = rpc_url;
    }
    if let Some(artifacts) = arguments.artifacts {
        config.artifacts = artifacts;
    }
    if let Some(src) = arguments.src {
        config.src = src;
    }
    if let Some(output) = arguments.output {
        config.output = Some(output);
    }
    config.show_time_spent |= arguments.show_time_spent;

    let console = gas_reporter::Console::new(config.show_time_spent, arguments.quiet);
    console.status(
        "Starting",
        format!(
            "{} v{}",
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION")
        )
        .as_str(),
    );

    let client = gas_reporter::HttpClient::new(config.rpc_url.as_str())?;
    let client_version = client
        .probe()
        .map_err(|error| anyhow::anyhow!("Node {} probing: {error}", config.rpc_url))?;
    console.status(
        "Connected",
        format!("to {} ({client_version})", config.rpc_url).as_str(),
    );

    let run_time_start = Instant::now();
    let (records, failures) = match (arguments.events, arguments.from_block) {
        (Some(path), _) => {
            let mut session = gas_reporter::Session::new(
                client,
                console.clone(),
                config.artifacts.clone(),
                Some(config.src.clone()),
            );
            session.handle_all(gas_reporter::EventReader::new(open_events(path.as_path())?))?;
            let failures = session.failures();
            (session.finish()?, failures)
        }
        (None, Some(from_block)) => {
            let records =
                gas_reporter::Records::build(config.artifacts.as_path(), Some(config.src.as_path()))?;
            let mut controller = gas_reporter::RunController::new(client, records);
            console.status("Scanning", format!("blocks from {from_block}").as_str());
            let attribution = controller.attribute_range(from_block)?;
            console.status(
                "Attributed",
                format!(
                    "{} deployments and {} calls out of {} gas",
                    attribution.deployments, attribution.calls, attribution.gas_used
                )
                .as_str(),
            );
            (controller.finish(), 0)
        }
        (None, None) => anyhow::bail!("Neither an event stream nor a start block is specified"),
    };

    let report = gas_reporter::GasReport::from(&records);
    if !arguments.quiet && (arguments.verbose || !report.is_empty()) {
        print!("{report}");
    }
    if let Some(path) = config.output.as_ref() {
        report.write_to_file(path.as_path())?;
    }

    console.status(
        "Finished",
        format!(
            "attribution in {}m{:02}s",
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
        )
        .as_str(),
    );

    if failures > 0 {
        anyhow::bail!("{failures} tests failed");
    }

    Ok(())
}

///
/// Opens the event stream file, or stdin for `-`.
///
fn open_events(path: &Path) -> anyhow::Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(std::io::stdin().lock()));
    }
    let file = std::fs::File::open(path)
        .map_err(|error| anyhow::anyhow!("Event stream file {path:?} opening: {error}"))?;
    Ok(Box::new(std::io::BufReader::new(file)))
}
