pub mod snapshot;
pub mod subset;
pub mod summary;

pub use snapshot::{snapshot_file_name, FoldSnapshotWriter};
pub use summary::{FoldSummary, RunSummary, SequenceScore};

use crate::config::AppConfig;
use crate::data::Corpus;
use crate::engines::generation::Population;
use crate::error::{MinsetError, Result};
use crate::types::GeneBounds;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const PARAMETERS_FILE: &str = "parameters.toml";
pub const SUBSET_LIST_FILE: &str = "subset.list";
pub const SUBSET_SEQ_FILE: &str = "subset.seq";
pub const BASESET_SEQ_FILE: &str = "baseset.seq";
pub const SUMMARY_FILE: &str = "summary.json";

/// Writes the result files of a run into one directory.
pub struct OutputWriter {
    directory: PathBuf,
}

impl OutputWriter {
    /// Create the output directory if needed.
    pub fn prepare<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        std::fs::create_dir_all(&directory).map_err(|e| MinsetError::resource(&directory, e))?;
        Ok(Self { directory })
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.directory.join(file_name)
    }

    pub fn snapshot_writer(&self, config: &AppConfig) -> FoldSnapshotWriter {
        FoldSnapshotWriter::new(
            &self.directory,
            config.output.snapshot_format,
            config.ga.bounds(),
            config.ga.repeat,
            config.ga.jackknife,
        )
    }

    pub fn write_parameters(&self, config: &AppConfig) -> Result<()> {
        let text = toml::to_string_pretty(config)?;
        self.write_file(PARAMETERS_FILE, |out| out.write_all(text.as_bytes()))
    }

    pub fn write_baseset(&self, corpus: &Corpus) -> Result<()> {
        self.write_file(BASESET_SEQ_FILE, |out| out.write_all(corpus.reference().as_bytes()))
    }

    /// `subset.list` for the fittest genomes and `subset.seq` for the best one.
    pub fn write_subset(&self, corpus: &Corpus, population: &Population, bounds: GeneBounds) -> Result<()> {
        self.write_file(SUBSET_LIST_FILE, |out| {
            subset::write_subset_table(out, corpus, population)
        })?;

        let text = population
            .best()
            .map(|best| corpus.subset_text(&best.genome, bounds))
            .unwrap_or_default();
        self.write_file(SUBSET_SEQ_FILE, |out| out.write_all(text.as_bytes()))
    }

    pub fn write_summary(&self, summary: &RunSummary) -> Result<()> {
        let json = summary.to_json()?;
        self.write_file(SUMMARY_FILE, |out| writeln!(out, "{}", json))
    }

    fn write_file<F>(&self, file_name: &str, write: F) -> Result<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let path = self.path(file_name);
        let file = File::create(&path).map_err(|e| MinsetError::resource(&path, e))?;
        let mut out = BufWriter::new(file);
        write(&mut out)
            .and_then(|_| out.flush())
            .map_err(|e| MinsetError::resource(&path, e))?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}
