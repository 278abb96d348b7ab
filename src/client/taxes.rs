use super::session::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::TaxDocumentSummary;
use crate::period::Period;
use crate::ui;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

/// Builds the local filename for one tax-document PDF.
///
/// `Nota Fiscal 72` at 18013.04 for 2016-06 becomes
/// `2016-06_Nota_Fiscal_72-18013.04.pdf`.
pub fn pdf_filename(period: Period, description: &str, total_value: f64) -> String {
    format!(
        "{:04}-{:02}_{}-{:.2}.pdf",
        period.year,
        period.month,
        description.replace(' ', "_"),
        total_value
    )
}

impl ApiClient {
    /// Lists the payable tax documents for the given period.
    pub async fn list_tax_documents(&self, period: Period) -> AppResult<Vec<TaxDocumentSummary>> {
        info!(period = %period, "Fetching tax document list");
        let value = self
            .get_json(&format!(
                "/impostopagar/list/{}/{}",
                period.month, period.year
            ))
            .await?;
        serde_json::from_value(value).map_err(|e| {
            AppError::ParseError(format!("Unexpected tax document listing shape: {e}"))
        })
    }

    /// Downloads a single tax-document PDF to `target`, overwriting it.
    ///
    /// The body is streamed to a `.part` file and renamed when complete, so a
    /// broken connection never leaves a truncated PDF behind. A non-success
    /// status is reported and skipped rather than aborting the batch; returns
    /// whether the file was written.
    pub async fn download_tax_document(&self, id: &str, target: &Path) -> AppResult<bool> {
        let session = self.session()?;
        let url = self.endpoint(&format!(
            "/impostopagar/download/{}/{}",
            session.token, id
        ));

        let mut response = self.send_get(&url).await?;
        if !response.status().is_success() {
            warn!(
                id = id,
                status = response.status().as_u16(),
                "Failed to download tax document, skipping"
            );
            return Ok(false);
        }

        let mut tmp = target.as_os_str().to_owned();
        tmp.push(".part");
        let tmp_path = PathBuf::from(tmp);

        let mut file = File::create(&tmp_path).await.map_err(|e| {
            AppError::IoError(format!(
                "Failed to create temp file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await.map_err(|e| {
                AppError::IoError(format!(
                    "Failed to write to temp file {}: {}",
                    tmp_path.display(),
                    e
                ))
            })?;
        }

        // Ensure the file is closed before renaming
        drop(file);

        fs::rename(&tmp_path, target).await.map_err(|e| {
            AppError::IoError(format!(
                "Failed to rename temp file {} to {}: {}",
                tmp_path.display(),
                target.display(),
                e
            ))
        })?;

        Ok(true)
    }

    /// Downloads every tax document for the period into `output_dir`.
    ///
    /// Downloads are strictly sequential. Filenames follow [`pdf_filename`].
    /// Returns the number of files actually written; documents whose download
    /// fails are logged and skipped.
    pub async fn download_all_tax_documents(
        &self,
        period: Period,
        output_dir: &Path,
    ) -> AppResult<usize> {
        info!(period = %period, "Downloading all tax documents");
        let documents = self.list_tax_documents(period).await?;

        if documents.is_empty() {
            info!(period = %period, "No tax documents for period");
            return Ok(0);
        }

        if !output_dir.exists() {
            fs::create_dir_all(output_dir).await.map_err(|e| {
                AppError::IoError(format!(
                    "Failed to create directory {}: {}",
                    output_dir.display(),
                    e
                ))
            })?;
        }

        let pb = ui::create_progress_bar(documents.len() as u64)?;
        let mut downloaded = 0;

        for document in &documents {
            let filename = pdf_filename(period, &document.description, document.total_value);
            pb.set_message(format!("Downloading {filename}..."));

            if self
                .download_tax_document(&document.id, &output_dir.join(&filename))
                .await?
            {
                downloaded += 1;
            }
            pb.inc(1);
        }

        pb.finish_with_message(format!(
            "Downloaded {downloaded} of {} tax document(s)",
            documents.len()
        ));
        info!(
            period = %period,
            downloaded = downloaded,
            total = documents.len(),
            "Tax document download finished"
        );

        Ok(downloaded)
    }
}
