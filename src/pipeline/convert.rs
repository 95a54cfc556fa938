//! Converting a single DeepLabCut output file

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use tempfile::Builder;

use super::{ConversionResult, ConversionStrategy, ConvertError, OutputFormat, TableLoader};

/// Message attached to results skipped because the destination is already there
pub const ALREADY_EXISTS: &str = "the converted file already exists";

/// Mode given to newly created outputs on Unix, in place of the 0600 of staged files.
/// The process umask is not applied. Replaced outputs keep their previous mode.
#[cfg(unix)]
pub const NEW_FILE_MODE: u32 = 0o644;

/// Converts files into one output format.
///
/// Built once per run and reused for every file: the format lookup happens in
/// [`Converter::new`], so a bad identifier is caught before any file is touched.
pub struct Converter<'a> {
    format: OutputFormat,
    strategy: Box<dyn ConversionStrategy>,
    loader: &'a dyn TableLoader,
    destination_dir: Option<PathBuf>,
    overwrite: bool,
}

impl<'a> Converter<'a> {
    /// Create a converter for a registered format identifier such as `"csv"`
    pub fn new(format: &str, loader: &'a dyn TableLoader) -> Result<Self, ConvertError> {
        Ok(Self::for_format(format.parse()?, loader))
    }

    pub fn for_format(format: OutputFormat, loader: &'a dyn TableLoader) -> Self {
        Self {
            format,
            strategy: format.strategy(),
            loader,
            destination_dir: None,
            overwrite: false,
        }
    }

    /// Write every converted file into `dir` instead of next to its source
    pub fn with_destination_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.destination_dir = dir;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Where the converted form of `source` ends up
    pub fn destination_for(&self, source: &Path) -> PathBuf {
        let default = self.strategy.destination_path(source);
        match (&self.destination_dir, default.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => default,
        }
    }

    /// Convert one file.
    ///
    /// Load and write problems become a failed [`ConversionResult`], with the full error
    /// chain written to `diagnostics`. Only a destination directory that cannot be created
    /// is returned as an error.
    pub fn convert(
        &self,
        source: &Path,
        diagnostics: &mut dyn Write,
    ) -> Result<ConversionResult, ConvertError> {
        let destination = self.destination_for(source);
        let parent = parent_dir(&destination).to_path_buf();

        if !parent.exists() {
            log::debug!("creating {}", parent.display());
            fs::create_dir_all(&parent).map_err(|source| ConvertError::CreateDirectory {
                path: parent.clone(),
                source,
            })?;
        } else if destination.exists() && !self.overwrite {
            return Ok(ConversionResult::skipped(destination, ALREADY_EXISTS));
        }

        match self.write_converted(source, &destination, &parent) {
            Ok(()) => Ok(ConversionResult::success(destination)),
            Err(err) => {
                report_failure(diagnostics, source, &err);
                Ok(ConversionResult::failed(
                    destination,
                    format!("failed to convert: {err:#}"),
                ))
            }
        }
    }

    // The table is staged in a temporary file beside the destination and renamed into
    // place, so a failed write never leaves a truncated destination behind.
    fn write_converted(&self, source: &Path, destination: &Path, parent: &Path) -> Result<()> {
        let mut table = self
            .loader
            .load(source)
            .with_context(|| format!("Failed to load {}", source.display()))?;

        let mut staged = Builder::new()
            .prefix(".dlc2csv-")
            .suffix(".partial")
            .tempfile_in(parent)
            .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;

        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            self.strategy.serialize(&mut table, &mut writer)?;
            writer
                .flush()
                .with_context(|| format!("Failed to write {}", destination.display()))?;
        }

        #[cfg(unix)]
        fs::set_permissions(staged.path(), output_permissions(destination))
            .with_context(|| format!("Failed to set permissions for {}", destination.display()))?;

        staged
            .persist(destination)
            .with_context(|| format!("Failed to move output into {}", destination.display()))?;

        Ok(())
    }
}

/// Convert a single file with a one-off [`Converter`], reporting diagnostics to stderr
pub fn convert(
    source: &Path,
    format: &str,
    destination_dir: Option<&Path>,
    overwrite: bool,
    loader: &dyn TableLoader,
) -> Result<ConversionResult, ConvertError> {
    Converter::new(format, loader)?
        .with_destination_dir(destination_dir.map(Path::to_path_buf))
        .with_overwrite(overwrite)
        .convert(source, &mut io::stderr().lock())
}

#[cfg(unix)]
fn output_permissions(destination: &Path) -> fs::Permissions {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(destination)
        .map(|meta| meta.permissions())
        .unwrap_or_else(|_| fs::Permissions::from_mode(NEW_FILE_MODE))
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn report_failure(diagnostics: &mut dyn Write, source: &Path, err: &anyhow::Error) {
    // Diagnostics are best effort; a broken error stream must not stop the batch.
    let _ = writeln!(
        diagnostics,
        "{} {}",
        style("error while converting").red().bold().for_stderr(),
        source.display()
    );
    let _ = writeln!(diagnostics, "{err:?}");
    let _ = diagnostics.flush();
}
