use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mogit_wardrobe_lib::Settings;
use mogit_wardrobe_lib::settings::{save_output_dir, settings_path};

use crate::error::CliError;

/// Show the resolved settings and where each value comes from.
pub(crate) fn run_config_show() {
    let path = settings_path();
    let settings = Settings::load();

    log::info!(
        "{}",
        "MogIt wardrobe settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  Settings file: {}{}",
        path.display(),
        if path.exists() {
            String::new()
        } else {
            format!(" {}", "(not found)".if_supports_color(Stdout, |t| t.dimmed()))
        },
    );

    let out_dir = settings.resolve_output_dir(None);
    log::info!(
        "  Output dir:    {} {}",
        out_dir.value.display(),
        format!("({})", out_dir.source).if_supports_color(Stdout, |t| t.dimmed()),
    );

    let user_agent = settings.resolve_user_agent(None);
    log::info!(
        "  User agent:    {} {}",
        user_agent.value,
        format!("({})", user_agent.source).if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Save or clear the default output directory.
pub(crate) fn run_config_set_output(dir: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings_path();
    save_output_dir(&path, dir.as_deref())
        .map_err(|e| CliError::config(format!("could not save {}: {e}", path.display())))?;

    match dir {
        Some(d) => log::info!(
            "{} Output directory set to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            d.display(),
        ),
        None => log::info!(
            "{} Output directory cleared",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        ),
    }
    Ok(())
}
