use crate::{
    client::RestApi, entities::Folder, errors::LarderError, html, loader::FolderLoader, utils,
};
use anyhow::anyhow;
use chrono::Local;
use futures::{stream, StreamExt};
use log::{debug, info, warn};
use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{
    sync::{mpsc, Mutex},
    time::{self, Duration},
};

/// The backup pipeline: fan the per-folder bookmark fetches out over a
/// bounded worker pool and drain completed folders onto a single output
/// stream, each folder serialized under one writer lock.
///
/// Folders are written in fetch-completion order, not in server list
/// order; every folder appears exactly once in a completed run.
pub struct BackupPipeline<A: RestApi> {
    loader: FolderLoader<A>,
    max_workers: usize,
    throttling: Duration,
}

impl<A: RestApi> BackupPipeline<A> {
    pub fn new(loader: FolderLoader<A>, max_workers: usize, throttling: Duration) -> Self {
        Self {
            loader,
            max_workers,
            throttling,
        }
    }

    /// Run a full account backup into `target_dir` and return the path of
    /// the written file.
    ///
    /// The output goes to a temporary path first and is renamed into place
    /// only after the footer is written, so an interrupted or failed run
    /// never leaves a file indistinguishable from a complete backup.
    pub async fn run(&self, target_dir: &Path) -> Result<PathBuf, anyhow::Error> {
        let target_file = target_dir.join(format!(
            "LarderBackup_{}.html",
            Local::now().format("%Y-%m-%d_%H:%M:%S")
        ));
        let temp_file = target_file.with_extension("tmp");

        info!("Retrieving folders ...");
        let folders = self.loader.fetch_folders().await?;
        info!("... {} folders retrieved.", folders.len());

        let file = utils::create_file(&temp_file)?;
        let writer = Arc::new(Mutex::new(BufWriter::new(file)));

        writer
            .lock()
            .await
            .write_all(html::DOCUMENT_HEADER.as_bytes())?;

        let result = self.write_folders(folders, writer.clone()).await;

        match result {
            Ok(()) => {
                let mut writer = writer.lock().await;
                writer.write_all(html::DOCUMENT_FOOTER.as_bytes())?;
                writer.flush()?;
                drop(writer);

                utils::rename_file(&temp_file, &target_file)?;
                info!("Completed writing to {}", target_file.display());

                Ok(target_file)
            }
            Err(err) => {
                utils::remove_file(&temp_file)?;
                Err(err.into())
            }
        }
    }

    /// Fetch every folder's bookmarks concurrently and serialize each
    /// completed folder to `writer`.
    ///
    /// The worker pool bounds the fetch side; completed folders go through
    /// an unbounded queue to one writer task per folder, so a folder block
    /// is written as soon as its fetch completes. A fetch failure is
    /// surfaced once all in-flight work has drained; the writer tasks
    /// observe the closed queue and finish without writing.
    pub async fn write_folders<W>(
        &self,
        folders: Vec<Folder>,
        writer: Arc<Mutex<W>>,
    ) -> Result<(), LarderError>
    where
        W: Write + Send + 'static,
    {
        let (sender, receiver) = mpsc::unbounded_channel::<Folder>();
        let receiver = Arc::new(Mutex::new(receiver));

        // One writer task per folder; each consumes exactly one completed
        // folder from the queue, not necessarily "its own".
        let write_tasks = (0..folders.len())
            .map(|_| {
                let receiver = receiver.clone();
                let writer = writer.clone();

                tokio::spawn(async move {
                    let folder = receiver.lock().await.recv().await;

                    if let Some(folder) = folder {
                        let mut writer = writer.lock().await;
                        debug!("Writing output for {} ...", folder.name);
                        html::write_folder(&mut *writer, &folder).map_err(|err| {
                            LarderError::WriteFile {
                                path: "backup output".to_owned(),
                                err: err.to_string(),
                            }
                        })?;
                        debug!("... done writing output for {}", folder.name);
                    }

                    Ok::<(), LarderError>(())
                })
            })
            .collect::<Vec<_>>();

        let mut fetch_stream = stream::iter(folders)
            .map(|mut folder| {
                let sender = sender.clone();
                async move {
                    self.loader.refresh_bookmarks(&mut folder).await?;
                    sender
                        .send(folder)
                        .map_err(|_| anyhow!("Can't enqueue folder: queue closed"))?;
                    time::sleep(self.throttling).await;
                    Ok::<(), LarderError>(())
                }
            })
            .buffer_unordered(self.max_workers);

        let mut first_error = None;

        while let Some(item) = fetch_stream.next().await {
            if let Err(err) = item {
                warn!("{err}");
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        // Close the queue so writer tasks without a matching folder drain.
        drop(fetch_stream);
        drop(sender);
        info!("All bookmarks retrieved.");

        for write_task in write_tasks {
            write_task
                .await
                .map_err(|err| anyhow!("Write task failed: {err}"))??;
        }

        if let Some(err) = first_error {
            return Err(err);
        }

        Ok(())
    }
}
