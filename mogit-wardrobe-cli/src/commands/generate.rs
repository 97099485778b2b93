use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mogit_wardrobe_lib::{
    HttpFetcher, RunOptions, RunProgress, Settings, WOWHEAD_CATALOG, run_catalog,
};

use crate::cli_types::GenerateArgs;
use crate::error::CliError;

/// Fetch all selected categories and write their data files.
pub(crate) fn run_generate(args: GenerateArgs, quiet: bool) -> Result<(), CliError> {
    let settings = Settings::load();
    let out_dir = settings.resolve_output_dir(args.out);
    let user_agent = settings.resolve_user_agent(args.user_agent);
    log::debug!(
        "Output directory: {} ({})",
        out_dir.value.display(),
        out_dir.source
    );
    log::debug!("User agent: {} ({})", user_agent.value, user_agent.source);

    let fetcher = HttpFetcher::with_user_agent(user_agent.value);
    let options = RunOptions {
        out_dir: out_dir.value,
        only: args.categories,
        dry_run: args.dry_run,
    };

    let spinner = fetch_spinner(quiet);
    let result = run_catalog(WOWHEAD_CATALOG, &fetcher, &options, &|event| {
        report_progress(&spinner, event)
    });
    spinner.finish_and_clear();
    let summary = result?;

    if summary.categories.is_empty() {
        log::warn!("No categories selected, nothing to do.");
        return Ok(());
    }

    log::info!("");
    if options.dry_run {
        log::info!(
            "{} Dry run: {} sets across {} categories, no files written",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.total_written(),
            summary.categories.len(),
        );
    } else {
        log::info!(
            "{} Wrote {} sets to {} files in {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.total_written(),
            summary.files_written().len(),
            options.out_dir.display(),
        );
    }
    Ok(())
}

fn fetch_spinner(quiet: bool) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if quiet {
        spinner.set_draw_target(ProgressDrawTarget::hidden());
    }
    let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style.tick_chars("/-\\|"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn report_progress(spinner: &ProgressBar, event: RunProgress) {
    match event {
        RunProgress::Fetching {
            armor,
            url,
            index,
            total,
        } => {
            spinner.set_message(format!("{armor} [{}/{total}] {url}", index + 1));
        }
        RunProgress::CategoryFinished {
            armor,
            fetched,
            written,
            path,
        } => {
            let target = match path {
                Some(p) => p.display().to_string(),
                None => "dry run, not written".to_string(),
            };
            spinner.suspend(|| {
                log::info!(
                    "{} {}: {} sets ({} fetched) -> {}",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    armor.if_supports_color(Stdout, |t| t.bold()),
                    written,
                    fetched,
                    target.if_supports_color(Stdout, |t| t.cyan()),
                );
            });
        }
        RunProgress::CategoryStarted { .. } | RunProgress::Fetched { .. } | RunProgress::Done => {}
    }
}
