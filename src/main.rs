// SPDX-License-Identifier: MPL-2.0
use folio_lens::application::loader::VaultLoader;
use folio_lens::application::port::NoopLayout;
use folio_lens::application::query::{CatalogBuilder, VideoVault};
use folio_lens::config::{self, Config};
use folio_lens::diagnostics::WarningEvent;
use folio_lens::domain::media::CategoryFilter;
use folio_lens::domain::video::VideoType;
use folio_lens::infrastructure::{load_catalog, YouTubeClient};
use folio_lens::{logging, paths, Gallery, GallerySettings};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

const HELP: &str = "\
folio_lens - preview a gallery catalog and video vault

USAGE:
  folio_lens [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Use DIR instead of the platform config directory
  --catalog <FILE>     Media catalog (TOML)
  --filter <NAME>      Category to show (default: all)
  --open <INDEX>       Open the lightbox on the INDEX-th visible item
  --fetch              Load the video vault from the configured playlists
  --type <TYPE>        Only list vault videos of TYPE (music-video, studio-session,
                       live-performance)
  --pages <N>          \"Load more\" steps to apply to the vault listing
  --events             Print the recorded events as JSON
  -h, --help           Print this help
";

struct Flags {
    config_dir: Option<String>,
    catalog: Option<PathBuf>,
    filter: Option<String>,
    open: Option<usize>,
    fetch: bool,
    video_type: Option<VideoType>,
    pages: usize,
    events: bool,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        catalog: args.opt_value_from_str("--catalog")?,
        filter: args.opt_value_from_str("--filter")?,
        open: args.opt_value_from_str("--open")?,
        fetch: args.contains("--fetch"),
        video_type: args.opt_value_from_str("--type")?,
        pages: args.opt_value_from_str("--pages")?.unwrap_or(0),
        events: args.contains("--events"),
    };
    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: unused arguments {rest:?}");
    }
    Ok(Some(flags))
}

#[tokio::main]
async fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, warning) = config::load();
    logging::init(config.general.log_level.as_deref());
    if let Some(key) = warning {
        tracing::warn!(key, "settings file ignored");
    }

    match run(&flags, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(flags: &Flags, config: &Config) -> folio_lens::error::Result<()> {
    let categories = config.gallery.declared_categories();
    let catalog = match &flags.catalog {
        Some(path) => load_catalog(path, categories)?,
        None => CatalogBuilder::new(categories).build(),
    };

    let vault = VideoVault::new(config.vault.static_videos(), config.vault.page_size());
    let settings = GallerySettings::from_config(config);
    let mut gallery = Gallery::new(catalog, NoopLayout, &settings).with_vault(vault);
    if config.vault.api_key().is_none() && !config.vault.playlists.is_empty() {
        gallery.record(WarningEvent::ConfigFallback {
            key: "vault.api_key".to_string(),
        });
    }
    gallery.layout_ready();

    if let Some(filter) = &flags.filter {
        gallery.select_filter(CategoryFilter::parse(filter));
    }
    print_gallery(&gallery);

    if let Some(index) = flags.open {
        let now = Instant::now();
        gallery.open_lightbox(index, now);
        match gallery.lightbox().info() {
            Some(info) => println!("\nlightbox {}  {}", info.position_label(), info.caption),
            None => println!("\nlightbox: no visible item at index {index}"),
        }
        gallery.close_lightbox(now);
    }

    if flags.fetch {
        fetch_vault(&mut gallery, config).await?;
    }
    if flags.video_type.is_some() {
        gallery.set_video_type(flags.video_type);
    }
    for _ in 0..flags.pages {
        if gallery.load_more_videos() == 0 {
            break;
        }
    }
    print_vault(gallery.vault());

    if flags.events {
        match gallery.diagnostics().to_json() {
            Ok(json) => println!("\n{json}"),
            Err(err) => tracing::warn!(error = %err, "event export failed"),
        }
    }
    gallery.teardown();
    Ok(())
}

async fn fetch_vault(
    gallery: &mut Gallery<NoopLayout>,
    config: &Config,
) -> folio_lens::error::Result<()> {
    let Some(api_key) = config.vault.api_key() else {
        tracing::warn!("no [vault] api_key configured, showing static videos only");
        return Ok(());
    };
    let client = Arc::new(YouTubeClient::new(api_key)?);
    let sources = config.vault.playlist_sources();
    let mut loader = VaultLoader::for_vault(client, gallery.vault(), sources)
        .with_page_cap(config.vault.page_cap());
    if let Some(seed) = config.vault.shuffle_seed {
        loader = loader.with_seed(seed);
    }
    let summary = loader.load(gallery.vault_mut()).await?;
    gallery.record_load_summary(&summary);
    Ok(())
}

fn print_gallery(gallery: &Gallery<NoopLayout>) {
    let chips: Vec<String> = gallery
        .controls()
        .iter()
        .map(|chip| {
            if chip.active {
                format!("[{}]", chip.label())
            } else {
                chip.label().to_string()
            }
        })
        .collect();
    println!("filters: {}", chips.join("  "));
    for entry in gallery.visible_entries() {
        let category = entry.category().map_or("-", |c| c.as_str());
        println!("  {:<16} {:<12} {}", entry.id(), category, entry.caption());
    }
}

fn print_vault(vault: &VideoVault) {
    if vault.entries().is_empty() {
        return;
    }
    let counts: Vec<String> = vault
        .type_counts()
        .iter()
        .map(|(video_type, count)| format!("{video_type}: {count}"))
        .collect();
    println!("\nvideos ({})", counts.join(", "));
    for entry in vault.displayed() {
        println!(
            "  {:<12} {:<12} {}",
            entry.video_id(),
            entry.video_type(),
            entry.title()
        );
    }
    if vault.has_more() {
        println!("  ... {} more", vault.visible_count() - vault.items_displayed());
    }
}
