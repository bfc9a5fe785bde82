// SPDX-License-Identifier: MPL-2.0
use async_trait::async_trait;
use folio_lens::application::loader::{PlaylistSource, VaultLoader};
use folio_lens::application::port::{FetchError, PlaylistPage, RecordingLayout, VideoSource};
use folio_lens::application::query::{CatalogBuilder, MediaCatalog, MediaSpec, VideoVault};
use folio_lens::config::{self, Config, PlaylistRef, VideoRef};
use folio_lens::domain::media::{Category, CategoryFilter, MediaId};
use folio_lens::domain::ui::{PageSize, SwipeDirection, SwipeGesture, SwipeThreshold};
use folio_lens::domain::video::{VideoId, VideoMetadata, VideoType};
use folio_lens::infrastructure::parse_catalog;
use folio_lens::{Gallery, GallerySettings};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tempfile::tempdir;

const TAGS: [&str; 6] = ["Landing", "Landing", "Vectors", "Mockups", "Vectors", "Logos"];

fn six_images() -> MediaCatalog {
    let mut builder = CatalogBuilder::new(
        ["Landing", "Vectors", "Mockups", "Logos"]
            .into_iter()
            .map(Category::new),
    );
    for (i, tag) in TAGS.iter().enumerate() {
        builder
            .push(
                MediaSpec::image(format!("img{}", i + 1), format!("img{}.jpg", i + 1), tag)
                    .with_caption(format!("Image {}", i + 1)),
            )
            .expect("valid entry");
    }
    builder.build()
}

fn ready_gallery(catalog: MediaCatalog) -> Gallery<RecordingLayout> {
    let mut gallery = Gallery::new(
        catalog,
        RecordingLayout::default(),
        &GallerySettings::default(),
    );
    gallery.layout_ready();
    gallery
}

fn ids(gallery: &Gallery<RecordingLayout>) -> Vec<String> {
    gallery
        .visible_entries()
        .iter()
        .map(|e| e.id().as_str().to_string())
        .collect()
}

#[test]
fn vectors_filter_then_lightbox_wraps() {
    let mut gallery = ready_gallery(six_images());
    gallery.select_filter(CategoryFilter::parse("Vectors"));
    assert_eq!(ids(&gallery), vec!["img3", "img5"]);

    gallery.open_lightbox(0, Instant::now());
    let current = |g: &Gallery<RecordingLayout>| g.lightbox().current().map(|e| e.id().clone());
    assert_eq!(current(&gallery), Some(MediaId::new("img3")));

    gallery.lightbox_next();
    assert_eq!(gallery.lightbox().current_index(), Some(1));
    assert_eq!(current(&gallery), Some(MediaId::new("img5")));

    gallery.lightbox_next();
    assert_eq!(gallery.lightbox().current_index(), Some(0));
    assert_eq!(
        gallery.lightbox().info().map(|i| i.position_label()),
        Some("1 / 2".to_string())
    );
}

#[test]
fn filtering_is_idempotent_and_complete() {
    let mut gallery = ready_gallery(six_images());
    for name in ["Landing", "Vectors", "Mockups", "Logos"] {
        gallery.select_filter(CategoryFilter::parse(name));
        let first = ids(&gallery);
        gallery.select_filter(CategoryFilter::parse(name));
        assert_eq!(ids(&gallery), first);
        assert!(gallery
            .visible_entries()
            .iter()
            .all(|e| e.category().map(Category::as_str) == Some(name)));
    }

    gallery.select_filter(CategoryFilter::All);
    assert_eq!(ids(&gallery), vec!["img1", "img2", "img3", "img4", "img5", "img6"]);
}

#[test]
fn swipe_navigates_only_past_threshold() {
    let mut gallery = ready_gallery(six_images());
    gallery.open_lightbox(2, Instant::now());

    gallery.lightbox_swipe(SwipeGesture::new(-20.0, -100.0));
    assert_eq!(gallery.lightbox().current_index(), Some(2));

    let commit = SwipeGesture::new(-200.0, -100.0);
    assert_eq!(
        commit.direction(SwipeThreshold::default()),
        Some(SwipeDirection::Next)
    );
    gallery.lightbox_swipe(commit);
    assert_eq!(gallery.lightbox().current_index(), Some(3));

    gallery.lightbox_swipe(SwipeGesture::new(200.0, 100.0));
    assert_eq!(gallery.lightbox().current_index(), Some(2));
}

#[test]
fn empty_catalog_is_inert() {
    let mut gallery = ready_gallery(MediaCatalog::default());
    assert!(gallery.visible_entries().is_empty());
    gallery.open_lightbox(0, Instant::now());
    gallery.lightbox_next();
    assert!(!gallery.lightbox().is_open());
    assert!(!gallery.is_lightbox_shown());
    assert!(!gallery.is_scroll_locked());
}

#[test]
fn catalog_file_feeds_the_gallery() {
    let content = r#"
        categories = ["Landing", "Vectors"]

        [[media]]
        id = "hero"
        src = "hero.jpg"
        tags = ["Landing"]

        [[media]]
        id = "icon"
        src = "icon.svg"
        tags = ["Vectors"]
    "#;
    let catalog = parse_catalog(content, []).expect("valid catalog");
    let mut gallery = ready_gallery(catalog);
    gallery.select_filter(CategoryFilter::parse("vectors"));
    assert!(ids(&gallery).is_empty());
    gallery.select_filter(CategoryFilter::parse("Vectors"));
    assert_eq!(ids(&gallery), vec!["icon"]);
}

#[test]
fn config_round_trip_drives_settings() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.gallery.categories = vec!["Landing".to_string(), "Logos".to_string()];
    config.vault.page_size = Some(2);
    config.vault.static_videos = vec![VideoRef {
        id: "abc".to_string(),
        video_type: VideoType::MusicVideo,
    }];
    config.vault.playlists = vec![PlaylistRef {
        id: "PL1".to_string(),
        video_type: VideoType::LivePerformance,
    }];
    config::save_to_path(&config, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(loaded, config);
    assert_eq!(loaded.vault.page_size(), PageSize::new(2));
    assert_eq!(loaded.vault.playlist_sources().len(), 1);
    assert_eq!(
        GallerySettings::from_config(&loaded),
        GallerySettings::from_config(&config)
    );
}

// =============================================================================
// Video vault
// =============================================================================

/// Serves two pages of one playlist and titles every requested id.
struct TwoPagePlaylist;

#[async_trait]
impl VideoSource for TwoPagePlaylist {
    async fn fetch_metadata(
        &self,
        ids: &[VideoId],
    ) -> Result<HashMap<VideoId, VideoMetadata>, FetchError> {
        Ok(ids
            .iter()
            .map(|id| {
                (
                    id.clone(),
                    VideoMetadata {
                        title: format!("Title {id}"),
                        thumbnail_url: format!("{id}.jpg"),
                    },
                )
            })
            .collect())
    }

    async fn fetch_playlist_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage, FetchError> {
        if playlist_id != "PL1" {
            return Err(FetchError::Api {
                code: 404,
                message: "playlistNotFound".to_string(),
            });
        }
        let (ids, next) = match page_token {
            None => (vec!["p1", "p2", "p3"], Some("page-2".to_string())),
            Some("page-2") => (vec!["p4", "p5"], None),
            Some(other) => return Err(FetchError::Decode(format!("unknown token {other}"))),
        };
        Ok(PlaylistPage {
            video_ids: ids.into_iter().map(VideoId::new).collect(),
            next_page_token: next,
        })
    }
}

fn static_vault() -> VideoVault {
    VideoVault::new(
        [
            (VideoId::new("s1"), VideoType::MusicVideo),
            (VideoId::new("s2"), VideoType::StudioSession),
        ],
        PageSize::new(4),
    )
}

#[tokio::test]
async fn two_page_playlist_merges_after_static_entries() {
    let source = Arc::new(TwoPagePlaylist);
    let loader = VaultLoader::new(Arc::clone(&source), Vec::new(), Vec::new());
    let fetch = loader.fetch_all_pages("PL1").await;
    let fetched: Vec<&str> = fetch.ids.iter().map(VideoId::as_str).collect();
    assert_eq!(fetched, vec!["p1", "p2", "p3", "p4", "p5"]);
    assert_eq!(fetch.pages, 2);

    let mut gallery = ready_gallery(six_images()).with_vault(static_vault());
    let loader = VaultLoader::for_vault(
        source,
        gallery.vault(),
        vec![PlaylistSource::new("PL1", VideoType::LivePerformance)],
    )
    .with_seed(7);
    let summary = loader.load(gallery.vault_mut()).await.expect("load completes");
    gallery.record_load_summary(&summary);

    let order: Vec<&str> = gallery
        .vault()
        .entries()
        .iter()
        .map(|e| e.video_id().as_str())
        .collect();
    assert_eq!(&order[..2], &["s1", "s2"]);
    let mut tail: Vec<&str> = order[2..].to_vec();
    tail.sort_unstable();
    assert_eq!(tail, vec!["p1", "p2", "p3", "p4", "p5"]);

    assert!(gallery.vault().is_finished());
    assert!(gallery.vault().entries().iter().all(|e| e.is_resolved()));
    assert_eq!(summary.playlist_videos, 5);
    assert_eq!(summary.failed_requests, 0);
    assert!(gallery.diagnostics().is_empty());
}

#[tokio::test]
async fn same_seed_gives_same_order() {
    let mut orders = Vec::new();
    for _ in 0..2 {
        let mut vault = static_vault();
        VaultLoader::for_vault(
            Arc::new(TwoPagePlaylist),
            &vault,
            vec![PlaylistSource::new("PL1", VideoType::MusicVideo)],
        )
        .with_seed(42)
        .load(&mut vault)
        .await
        .expect("load completes");
        orders.push(
            vault
                .entries()
                .iter()
                .map(|e| e.video_id().clone())
                .collect::<Vec<_>>(),
        );
    }
    assert_eq!(orders[0], orders[1]);
}

#[tokio::test]
async fn failed_playlist_keeps_the_rest_and_is_recorded() {
    let mut gallery = ready_gallery(six_images()).with_vault(static_vault());
    let loader = VaultLoader::for_vault(
        Arc::new(TwoPagePlaylist),
        gallery.vault(),
        vec![
            PlaylistSource::new("missing", VideoType::MusicVideo),
            PlaylistSource::new("PL1", VideoType::StudioSession),
        ],
    );
    let summary = loader.load(gallery.vault_mut()).await.expect("load completes");
    gallery.record_load_summary(&summary);

    assert_eq!(summary.failed_requests, 1);
    assert_eq!(gallery.vault().entries().len(), 7);
    assert_eq!(gallery.diagnostics().len(), 1);
}

#[tokio::test]
async fn paging_grows_monotonically_after_load() {
    let mut gallery = ready_gallery(six_images()).with_vault(static_vault());
    VaultLoader::for_vault(
        Arc::new(TwoPagePlaylist),
        gallery.vault(),
        vec![PlaylistSource::new("PL1", VideoType::MusicVideo)],
    )
    .load(gallery.vault_mut())
    .await
    .expect("load completes");

    let mut shown = gallery.vault().displayed().len();
    assert_eq!(shown, 4);
    while gallery.vault().has_more() {
        gallery.load_more_videos();
        let now = gallery.vault().displayed().len();
        assert!(now > shown);
        shown = now;
    }
    assert_eq!(shown, 7);

    gallery.set_video_type(Some(VideoType::StudioSession));
    let visible: Vec<&str> = gallery
        .vault()
        .displayed()
        .iter()
        .map(|e| e.video_id().as_str())
        .collect();
    assert_eq!(visible, vec!["s2"]);
    assert!(!gallery.vault().has_more());
}
