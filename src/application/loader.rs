// SPDX-License-Identifier: MPL-2.0
//! Asynchronous vault loader.
//!
//! The loader walks the configured playlists one after the other, follows
//! each playlist's continuation tokens up to a page cap, shuffles the ids
//! once, and fetches metadata in batches. Every result is sent as a
//! [`VaultUpdate`] so the view applies them in a deterministic order.
//!
//! Remote failures never abort a load: they are logged and the failing
//! call contributes nothing. Only cancellation stops the loader early.

use crate::application::port::video::VideoSource;
use crate::application::query::vault::{VaultUpdate, VideoVault};
use crate::domain::ui::PageCap;
use crate::domain::video::{VideoId, VideoMetadata, VideoType};
use futures_util::future::join_all;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Maximum number of ids the video host accepts per metadata request.
pub const METADATA_BATCH_MAX: usize = 50;

/// Cancellation token type alias for consistency across the crate.
pub type CancellationToken = Arc<AtomicBool>;

/// Checks whether the token has been set.
#[must_use]
pub fn is_cancelled(token: &CancellationToken) -> bool {
    token.load(Ordering::Relaxed)
}

/// Reasons a vault load stops before completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultError {
    /// The token was set or the receiving view went away.
    Cancelled,
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::Cancelled => write!(f, "Vault load cancelled"),
        }
    }
}

impl std::error::Error for VaultError {}

/// A remote playlist feeding the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSource {
    pub playlist_id: String,
    pub video_type: VideoType,
}

impl PlaylistSource {
    #[must_use]
    pub fn new(playlist_id: impl Into<String>, video_type: VideoType) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            video_type,
        }
    }
}

/// Counters describing a finished load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Playlist ids received across all playlists.
    pub playlist_videos: usize,
    /// Metadata records received.
    pub resolved: usize,
    /// Remote calls that failed and were skipped.
    pub failed_requests: usize,
    /// Playlists truncated by the page cap.
    pub capped_playlists: usize,
}

/// Ids gathered from one playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistFetch {
    pub ids: Vec<VideoId>,
    pub pages: usize,
    pub failed: bool,
    pub capped: bool,
}

/// Loads playlists and metadata from a [`VideoSource`].
pub struct VaultLoader<S: VideoSource> {
    source: Arc<S>,
    static_ids: Vec<VideoId>,
    playlists: Vec<PlaylistSource>,
    page_cap: PageCap,
    rng: StdRng,
    cancel: CancellationToken,
}

impl<S: VideoSource> fmt::Debug for VaultLoader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultLoader")
            .field("static_ids", &self.static_ids.len())
            .field("playlists", &self.playlists)
            .field("page_cap", &self.page_cap)
            .finish_non_exhaustive()
    }
}

impl<S: VideoSource> VaultLoader<S> {
    /// Creates a loader with an OS-seeded shuffle.
    pub fn new(source: Arc<S>, static_ids: Vec<VideoId>, playlists: Vec<PlaylistSource>) -> Self {
        Self {
            source,
            static_ids,
            playlists,
            page_cap: PageCap::default(),
            rng: StdRng::from_os_rng(),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Builds a loader for the static entries already present in `vault`.
    pub fn for_vault(source: Arc<S>, vault: &VideoVault, playlists: Vec<PlaylistSource>) -> Self {
        let static_ids = vault
            .static_entries()
            .iter()
            .map(|e| e.video_id().clone())
            .collect();
        Self::new(source, static_ids, playlists)
    }

    #[must_use]
    pub fn with_page_cap(mut self, page_cap: PageCap) -> Self {
        self.page_cap = page_cap;
        self
    }

    /// Uses a fixed shuffle seed, for reproducible ordering.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Returns a handle that cancels the load when set to `true`.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        Arc::clone(&self.cancel)
    }

    /// Follows continuation tokens until the last page or the page cap.
    ///
    /// A failing page stops the walk; ids from earlier pages are kept.
    pub async fn fetch_all_pages(&self, playlist_id: &str) -> PlaylistFetch {
        let mut fetch = PlaylistFetch::default();
        let mut token: Option<String> = None;

        loop {
            if fetch.pages >= self.page_cap.value() {
                tracing::warn!(
                    playlist_id,
                    pages = fetch.pages,
                    "playlist page cap reached, remaining pages skipped"
                );
                fetch.capped = true;
                break;
            }
            if is_cancelled(&self.cancel) {
                break;
            }

            match self
                .source
                .fetch_playlist_page(playlist_id, token.as_deref())
                .await
            {
                Ok(page) => {
                    fetch.pages += 1;
                    fetch.ids.extend(page.video_ids);
                    match page.next_page_token {
                        Some(next) => token = Some(next),
                        None => break,
                    }
                }
                Err(err) => {
                    tracing::warn!(playlist_id, error = %err, "playlist page fetch failed");
                    fetch.failed = true;
                    break;
                }
            }
        }
        fetch
    }

    /// Fetches metadata for `ids`, split into batches the host accepts.
    ///
    /// Returns the merged results and the number of failed batches.
    pub async fn fetch_metadata(
        &self,
        ids: &[VideoId],
    ) -> (HashMap<VideoId, VideoMetadata>, usize) {
        let requests = ids
            .chunks(METADATA_BATCH_MAX)
            .map(|chunk| self.source.fetch_metadata(chunk));
        let mut merged = HashMap::with_capacity(ids.len());
        let mut failed = 0;
        for result in join_all(requests).await {
            match result {
                Ok(batch) => merged.extend(batch),
                Err(err) => {
                    tracing::warn!(error = %err, "video metadata fetch failed");
                    failed += 1;
                }
            }
        }
        (merged, failed)
    }

    /// Runs the whole load, sending updates to `tx`.
    ///
    /// Static metadata is requested first, then each playlist in
    /// configuration order: ids, then their metadata.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Cancelled`] if the token is set or the
    /// receiver is dropped. No update is sent after that point.
    pub async fn run(mut self, tx: mpsc::Sender<VaultUpdate>) -> Result<LoadSummary, VaultError> {
        let mut summary = LoadSummary::default();

        if !self.static_ids.is_empty() {
            let (metadata, failed) = self.fetch_metadata(&self.static_ids).await;
            summary.failed_requests += failed;
            summary.resolved += metadata.len();
            self.send(&tx, VaultUpdate::Metadata(metadata)).await?;
        }

        let playlists = std::mem::take(&mut self.playlists);
        for (index, playlist) in playlists.iter().enumerate() {
            let fetch = self.fetch_all_pages(&playlist.playlist_id).await;
            self.ensure_live()?;
            summary.failed_requests += usize::from(fetch.failed);
            summary.capped_playlists += usize::from(fetch.capped);
            summary.playlist_videos += fetch.ids.len();

            let mut ids = fetch.ids;
            if ids.is_empty() {
                continue;
            }
            ids.shuffle(&mut self.rng);
            let metadata_ids = ids.clone();
            self.send(
                &tx,
                VaultUpdate::Playlist {
                    index,
                    video_type: playlist.video_type,
                    ids,
                },
            )
            .await?;

            let (metadata, failed) = self.fetch_metadata(&metadata_ids).await;
            summary.failed_requests += failed;
            summary.resolved += metadata.len();
            self.send(&tx, VaultUpdate::Metadata(metadata)).await?;
        }

        self.send(&tx, VaultUpdate::Finished).await?;
        tracing::info!(
            playlist_videos = summary.playlist_videos,
            resolved = summary.resolved,
            failed = summary.failed_requests,
            "vault load complete"
        );
        Ok(summary)
    }

    /// Runs the load and applies every update to `vault` as it arrives.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Cancelled`] if the token is set mid-load.
    /// Updates received before cancellation stay applied.
    pub async fn load(self, vault: &mut VideoVault) -> Result<LoadSummary, VaultError> {
        let (tx, mut rx) = mpsc::channel(16);
        let apply = async {
            while let Some(update) = rx.recv().await {
                vault.apply(update);
            }
        };
        let (result, ()) = tokio::join!(self.run(tx), apply);
        result
    }

    fn ensure_live(&self) -> Result<(), VaultError> {
        if is_cancelled(&self.cancel) {
            Err(VaultError::Cancelled)
        } else {
            Ok(())
        }
    }

    async fn send(
        &self,
        tx: &mpsc::Sender<VaultUpdate>,
        update: VaultUpdate,
    ) -> Result<(), VaultError> {
        self.ensure_live()?;
        tx.send(update).await.map_err(|_| VaultError::Cancelled)
    }
}
