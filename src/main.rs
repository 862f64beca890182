use anyhow::Result;
use bundler::bundle::Bundler;
use bundler::cli::Cli;
use bundler::config::Config;
use bundler::filter::ExclusionFilter;
use bundler::{output, utils};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use std::io;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?;

    let root = utils::paths::expand_tilde(&cli.directory)?;
    let output_path = utils::paths::expand_tilde(&cli.output)?;

    let bundler = Bundler::new(root, build_filter(&cli, &config))
        .follow_symlinks(cli.follow_symlinks || config.bundle.follow_symlinks)
        .sort_entries(!cli.no_sort && config.bundle.sort_entries);

    let stats = bundler.run(&output_path)?;

    if !cli.quiet {
        output::print_success(&format!("Bundled into {}", output_path.display()));
        output::print_info(&format!(
            "{} file(s) written, {} binary placeholder(s), {} excluded, {} unreadable",
            stats.files_bundled, stats.binary_placeholders, stats.files_skipped, stats.read_errors
        ));
    }

    Ok(())
}

fn build_filter(cli: &Cli, config: &Config) -> ExclusionFilter {
    let (mut dirs, mut patterns) = if cli.no_default_excludes {
        (Vec::new(), Vec::new())
    } else {
        (
            config.bundle.exclude_dirs.clone(),
            config.bundle.exclude_patterns.clone(),
        )
    };
    dirs.extend(cli.exclude_dirs.iter().cloned());
    patterns.extend(cli.exclude_patterns.iter().cloned());

    ExclusionFilter::new(dirs, patterns)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
