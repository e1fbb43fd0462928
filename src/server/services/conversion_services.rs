use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use async_trait::async_trait;
use mockall::automock;
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::database::media_store::DynMediaStore;
use crate::server::error::{AppResult, Error};
use crate::server::utils::media_format_utils::{MediaFormat, split_media_key};

/// only needs to outlive the download that follows immediately
const DOWNLOAD_PRESIGN_TTL: Duration = Duration::from_secs(120);

pub type DynConversionService = Arc<dyn ConversionServiceTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait ConversionServiceTrait {
    /// derives the compressed variant of a stored media object
    async fn convert(&self, media_id: &str) -> AppResult<()>;
}

/// download, shell out to the right converter, upload, clean up. the actual
/// conversion runs detached so the pub/sub handler returns long before ffmpeg
/// finishes.
pub struct ConversionService {
    store: DynMediaStore,
    http: reqwest::Client,
    config: Arc<AppConfig>,
}

impl ConversionService {
    pub fn new(store: DynMediaStore, http: reqwest::Client, config: Arc<AppConfig>) -> Self {
        Self {
            store,
            http,
            config,
        }
    }

    /// fetch through a presigned url instead of straight off the bucket
    /// client, same path a browser download would take
    async fn download(&self, media_id: &str, target: &Path) -> AppResult<()> {
        let url = self.store.presign_get(media_id, DOWNLOAD_PRESIGN_TTL).await?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("media download request failed")?;

        if !response.status().is_success() {
            return Err(Error::InternalServerErrorWithContext(format!(
                "media download for {} returned {}",
                media_id,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .context("failed to read media download body")?;

        tokio::fs::create_dir_all(&self.config.media_tmp_dir)
            .await
            .context("failed to create media tmp dir")?;
        tokio::fs::write(target, &bytes)
            .await
            .with_context(|| format!("failed to write {}", target.display()))?;

        Ok(())
    }
}

#[async_trait]
impl ConversionServiceTrait for ConversionService {
    async fn convert(&self, media_id: &str) -> AppResult<()> {
        let (id, extension) = split_media_key(media_id).ok_or(Error::UnrecognizedFormat)?;
        let format = MediaFormat::from_extension(extension).ok_or(Error::UnrecognizedFormat)?;

        let tmp_dir = PathBuf::from(&self.config.media_tmp_dir);
        let input = tmp_dir.join(media_id);
        let output = tmp_dir.join(format!("{}.{}", id, format.converted_extension()));
        let output_key = format!("{}.{}", id, format.converted_extension());

        self.download(media_id, &input).await?;

        info!("converting {} to {}", media_id, output_key);

        // single slot channel decouples the slow converter from the caller
        let (done_tx, mut done_rx) = mpsc::channel::<anyhow::Result<()>>(1);

        let config = self.config.clone();
        let converter_input = input.clone();
        let converter_output = output.clone();
        tokio::spawn(async move {
            let result = match format {
                MediaFormat::Mp4 => {
                    mp4_to_webm(&config.ffmpeg_path, &converter_input, &converter_output).await
                }
                MediaFormat::Png | MediaFormat::Jpeg => {
                    img_to_webp(&config.cwebp_path, &converter_input, &converter_output).await
                }
                MediaFormat::Gif => {
                    gif_to_webp(&config.gif2webp_path, &converter_input, &converter_output).await
                }
            };
            let _ = done_tx.send(result).await;
        });

        let store = self.store.clone();
        tokio::spawn(async move {
            let Some(result) = done_rx.recv().await else {
                return;
            };

            if let Err(e) = result {
                error!("conversion of {} failed: {:#}", output_key, e);
                let _ = tokio::fs::remove_file(&input).await;
                return;
            }

            debug!("finished conversion, uploading {}", output_key);

            if let Err(e) = store.upload_file(&output_key, &output).await {
                error!("upload of converted {} failed: {:#}", output_key, e);
                return;
            }

            if let Err(e) = clean_up(&input, &output).await {
                warn!("couldn't clean up conversion temp files: {:#}", e);
            }
        });

        Ok(())
    }
}

async fn clean_up(input: &Path, output: &Path) -> anyhow::Result<()> {
    tokio::fs::remove_file(output)
        .await
        .with_context(|| format!("failed to remove {}", output.display()))?;
    tokio::fs::remove_file(input)
        .await
        .with_context(|| format!("failed to remove {}", input.display()))?;
    Ok(())
}

async fn run_converter(mut command: Command) -> anyhow::Result<()> {
    let output = command.output().await.context("failed to spawn converter")?;

    debug!(
        "converter output: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    if !output.status.success() {
        bail!(
            "converter exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// vp9/opus webm, scaled and letterboxed to 720p like the upstream encoder
/// settings this replaced
async fn mp4_to_webm(ffmpeg: &str, input: &Path, output: &Path) -> anyhow::Result<()> {
    let mut command = Command::new(ffmpeg);
    command
        .arg("-y")
        .arg("-i")
        .arg(input)
        .args([
            "-acodec",
            "libopus",
            "-b:a",
            "48000",
            "-vcodec",
            "libvpx-vp9",
            "-b:v",
            "0",
            "-crf",
            "50",
            "-deadline",
            "realtime",
            "-cpu-used",
            "-8",
            "-vf",
            "scale='min(1280,iw)':'min(720,ih)':force_original_aspect_ratio=decrease,pad=1280:720:(ow-iw)/2:(oh-ih)/2",
            "-f",
            "webm",
        ])
        .arg(output);

    run_converter(command).await
}

async fn img_to_webp(cwebp: &str, input: &Path, output: &Path) -> anyhow::Result<()> {
    let mut command = Command::new(cwebp);
    command.arg(input).arg("-o").arg(output);

    run_converter(command).await
}

async fn gif_to_webp(gif2webp: &str, input: &Path, output: &Path) -> anyhow::Result<()> {
    let mut command = Command::new(gif2webp);
    command.arg(input).arg("-o").arg(output);

    run_converter(command).await
}
