use crate::config::MergeConfig;
use crate::error::{BatchError, SourceError};
use crate::merge::{MergeOutcome, merge_one_source};
use crate::report::BatchReport;
use lotcopy_io::{
    CalamineAdapter, IoError, SpreadsheetReader, SpreadsheetWriter, UmyaAdapter, UmyaSheet,
    read_selected_sheet,
};
use std::path::Path;

/// Merge every source into `destination` and save it in place.
pub fn run_batch<P: AsRef<Path>>(
    sources: &[P],
    destination: &Path,
    config: &MergeConfig,
) -> Result<BatchReport, BatchError> {
    run_batch_to(sources, destination, None, config)
}

/// Merge every source into `destination`, in order.
///
/// - `output`: where to save the result; when `None`, updates `destination` in place.
///
/// The destination is opened once and saved once, after the last source, whether
/// or not any source succeeded. A source that cannot be opened or whose table
/// cannot be located is recorded in the report and skipped. With no sources
/// the destination is not touched at all.
pub fn run_batch_to<P: AsRef<Path>>(
    sources: &[P],
    destination: &Path,
    output: Option<&Path>,
    config: &MergeConfig,
) -> Result<BatchReport, BatchError> {
    let _batch = tracing::info_span!(
        "batch",
        destination = %destination.display(),
        sources = sources.len()
    )
    .entered();

    let mut report = BatchReport::default();
    if sources.is_empty() {
        tracing::info!("no source files given");
        return Ok(report);
    }

    let open_error = |source: IoError| BatchError::OpenDestination {
        path: destination.to_path_buf(),
        source,
    };
    let umya_error = |e: <UmyaAdapter as SpreadsheetReader>::Error| {
        open_error(IoError::from_backend(UmyaAdapter::BACKEND, e))
    };

    if !destination.exists() {
        return Err(open_error(IoError::FileNotFound(destination.to_path_buf())));
    }
    let mut adapter = UmyaAdapter::open_path(destination).map_err(umya_error)?;
    let names = adapter.sheet_names().map_err(umya_error)?;
    let selector = config.destination_selector();
    let active = adapter.active_sheet();
    let sheet_name = selector
        .resolve(&names, active.as_deref())
        .map_err(open_error)?;
    tracing::debug!(%selector, sheet = %sheet_name, "destination sheet selected");

    {
        let mut sheet = adapter.worksheet_mut(&sheet_name).map_err(umya_error)?;
        for source in sources {
            let path = source.as_ref();
            let _source = tracing::info_span!("merge_source", path = %path.display()).entered();
            match merge_path(path, &mut sheet, config) {
                Ok(outcome) => {
                    tracing::info!(
                        rows = outcome.rows_copied,
                        width = outcome.source_width,
                        "source merged"
                    );
                    report.record(&outcome);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "source skipped");
                    report.record_error(path, &err);
                }
            }
        }
    }
    report.finish();

    let saved_to = output.unwrap_or(destination);
    let saved = match output {
        Some(path) => adapter.save_as_path(path),
        None => adapter.save(),
    };
    saved.map_err(|e| BatchError::SaveDestination {
        path: saved_to.to_path_buf(),
        source: IoError::from_backend(UmyaAdapter::BACKEND, e),
    })?;

    tracing::info!(
        status = report.status.as_str(),
        rows = report.rows_added,
        errors = report.errors.len(),
        saved_to = %saved_to.display(),
        "batch finished"
    );
    Ok(report)
}

fn merge_path(
    path: &Path,
    dest: &mut UmyaSheet<'_>,
    config: &MergeConfig,
) -> Result<MergeOutcome, SourceError> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.to_path_buf()).into());
    }
    let mut reader = CalamineAdapter::open_path(path)
        .map_err(|e| IoError::from_backend(CalamineAdapter::BACKEND, e))?;
    let source = read_selected_sheet(&mut reader, &config.source_selector())?;
    Ok(merge_one_source(&source, dest, config)?)
}
