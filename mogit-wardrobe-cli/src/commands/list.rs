use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mogit_wardrobe_lib::{WOWHEAD_CATALOG, file_name};

pub(crate) fn run_list() {
    log::info!("Categories:");
    log::info!("");

    for source in WOWHEAD_CATALOG {
        let armor = source.armor;
        log::info!(
            "  {} [type {}] -> {}",
            armor.name().if_supports_color(Stdout, |t| t.bold()),
            armor.type_id(),
            file_name(armor).if_supports_color(Stdout, |t| t.cyan()),
        );
        for url in source.urls {
            log::info!("    {url}");
        }
    }
}
