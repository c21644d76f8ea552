use anyhow::Result;
use clap::Parser;
use console::style;
use fps_scan::cli::Cli;
use fps_scan::component::FpsFinder;
use fps_scan::config::Config;
use fps_scan::init;
use fps_scan::tools::FfprobeProbe;
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init::init(cli.verbose);

    match run(&cli) {
        Ok(()) => {
            info!("Program exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Program error: {e:#}");
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let request = cli.scan_request(&config)?;
    let probe = FfprobeProbe::new(cli.ffprobe_path(&config));

    let finder = FpsFinder::new(request, probe, cli.output_format(), !cli.quiet);
    finder.run()?;
    Ok(())
}
