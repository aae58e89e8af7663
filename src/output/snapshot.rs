//! Pool snapshots written per jackknife fold.
//!
//! ASCII layout, per snapshot:
//!
//! ```text
//! #<generation>
//!   0: 1 0 1 0.8000
//!   1: 0 1 1 0.6000
//!
//! ```
//!
//! Only the `fitmate` fittest genomes are listed. The binary layout has no
//! header; every genome of the pool is written as its index (`u32`, little
//! endian), one ASCII `'0'`/`'1'` byte per gene and the fitness (`f32`, little
//! endian, NaN when unscored).

use crate::config::SnapshotFormat;
use crate::engines::generation::{Population, SnapshotSink};
use crate::error::{MinsetError, Result};
use crate::types::GeneBounds;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// `<repeat>_<repeats>.<fold>_<folds>.ga`, with 1-based counters.
pub fn snapshot_file_name(repeat: usize, repeats: usize, fold: usize, folds: usize) -> String {
    format!("{}_{}.{}_{}.ga", repeat + 1, repeats, fold + 1, folds)
}

pub fn write_ascii<W: Write>(out: &mut W, population: &Population, generation: usize) -> std::io::Result<()> {
    writeln!(out, "#{}", generation)?;
    for (ix, individual) in population.fittest().iter().enumerate() {
        write!(out, "{:3}: ", ix)?;
        for gene in &individual.genome {
            write!(out, "{:1} ", gene)?;
        }
        match individual.fitness {
            Some(fitness) => writeln!(out, "{:6.4}", fitness)?,
            None => writeln!(out, "{:>6}", "-")?,
        }
    }
    writeln!(out)
}

pub fn write_binary<W: Write>(out: &mut W, population: &Population, bounds: GeneBounds) -> std::io::Result<()> {
    for (ix, individual) in population.individuals().iter().enumerate() {
        out.write_all(&(ix as u32).to_le_bytes())?;
        let bits: Vec<u8> = individual
            .genome
            .iter()
            .map(|&g| if bounds.is_selected(g) { b'1' } else { b'0' })
            .collect();
        out.write_all(&bits)?;
        let fitness = individual.fitness.map_or(f32::NAN, |f| f as f32);
        out.write_all(&fitness.to_le_bytes())?;
    }
    Ok(())
}

/// Writes one snapshot file per fold into a directory.
pub struct FoldSnapshotWriter {
    directory: PathBuf,
    format: SnapshotFormat,
    bounds: GeneBounds,
    repeats: usize,
    folds: usize,
    current: Option<(PathBuf, BufWriter<File>)>,
}

impl FoldSnapshotWriter {
    pub fn new<P: AsRef<Path>>(
        directory: P,
        format: SnapshotFormat,
        bounds: GeneBounds,
        repeats: usize,
        folds: usize,
    ) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            format,
            bounds,
            repeats,
            folds,
            current: None,
        }
    }
}

impl SnapshotSink for FoldSnapshotWriter {
    fn begin_fold(&mut self, repeat: usize, fold: usize) -> Result<()> {
        self.end_fold()?;
        let path = self
            .directory
            .join(snapshot_file_name(repeat, self.repeats, fold, self.folds));
        let file = File::create(&path).map_err(|e| MinsetError::resource(&path, e))?;
        log::debug!("Writing snapshots to {}", path.display());
        self.current = Some((path, BufWriter::new(file)));
        Ok(())
    }

    fn record(&mut self, population: &Population, generation: usize, _is_final: bool) -> Result<()> {
        let (path, out) = self.current.as_mut().ok_or_else(|| {
            MinsetError::Evaluation("snapshot recorded outside of a fold".to_string())
        })?;
        let written = match self.format {
            SnapshotFormat::Ascii => write_ascii(out, population, generation),
            SnapshotFormat::Binary => write_binary(out, population, self.bounds),
        };
        written.map_err(|e| MinsetError::resource(path.as_path(), e))
    }

    fn end_fold(&mut self) -> Result<()> {
        if let Some((path, mut out)) = self.current.take() {
            out.flush().map_err(|e| MinsetError::resource(&path, e))?;
        }
        Ok(())
    }
}
