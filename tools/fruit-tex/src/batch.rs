//! Batch generation across a catalog and a set of sizes
//!
//! Every `(fruit, size)` pair is an independent job with its own random
//! source. A failing job is recorded in the [`BatchReport`] and the
//! remaining jobs still run.

use crate::assemble::assemble;
use crate::catalog::{Catalog, FruitSpec, GenerationRequest};
use crate::error::{BatchItemError, PersistError};
use crate::seed::{task_rng, task_seed};
use crate::texture::PixelBuffer;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Default output root, relative to the working directory
pub const DEFAULT_OUTPUT_ROOT: &str = "resources/textures/fruits";

/// Size of the standard texture set
pub const STANDARD_SIZE: u32 = 512;

/// Sizes of the variant texture sets
pub const VARIANT_SIZES: [u32; 5] = [64, 128, 256, 512, 1024];

/// Destination for finished textures
///
/// The buffer is moved in; the generator never sees it again.
pub trait TextureSink: Sync {
    fn persist(&self, buffer: PixelBuffer, path: &Path) -> Result<(), PersistError>;
}

/// Writes PNG files, creating parent directories as needed
#[derive(Debug, Default, Clone, Copy)]
pub struct PngSink;

impl TextureSink for PngSink {
    fn persist(&self, buffer: PixelBuffer, path: &Path) -> Result<(), PersistError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PersistError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        write(&buffer, path)
    }
}

#[cfg(feature = "png-export")]
fn write(buffer: &PixelBuffer, path: &Path) -> Result<(), PersistError> {
    crate::texture::write_png(buffer, path)
}

#[cfg(not(feature = "png-export"))]
fn write(_buffer: &PixelBuffer, _path: &Path) -> Result<(), PersistError> {
    Err(PersistError::CodecUnavailable)
}

/// How output files are arranged under the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLayout {
    /// `<root>/<name>.png`
    Flat,
    /// `<root>/<size>x<size>/<name>.png`
    PerSize,
}

impl OutputLayout {
    pub fn path_for(self, root: &Path, fruit: &str, size: u32) -> PathBuf {
        let file = format!("{fruit}.png");
        match self {
            OutputLayout::Flat => root.join(file),
            OutputLayout::PerSize => root.join(format!("{size}x{size}")).join(file),
        }
    }
}

/// Which sizes to generate and where to put them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    pub sizes: Vec<u32>,
    pub layout: OutputLayout,
}

impl BatchPlan {
    /// One flat set at `size`
    pub fn standard(size: u32) -> Self {
        Self {
            sizes: vec![size],
            layout: OutputLayout::Flat,
        }
    }

    /// One per-size directory for each of `sizes`
    pub fn variants(sizes: &[u32]) -> Self {
        Self {
            sizes: sizes.to_vec(),
            layout: OutputLayout::PerSize,
        }
    }
}

/// A job that did not produce a file
#[derive(Debug)]
pub struct BatchFailure {
    pub fruit: String,
    pub size: u32,
    pub path: PathBuf,
    pub error: BatchItemError,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.written.len() + self.failures.len()
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: BatchReport) {
        self.written.extend(other.written);
        self.failures.extend(other.failures);
    }
}

/// Drives assembly and persistence over every `(fruit, size)` pair
#[derive(Debug, Clone)]
pub struct BatchGenerator {
    root: PathBuf,
    run_seed: u64,
    parallel: bool,
}

impl BatchGenerator {
    pub fn new(root: impl Into<PathBuf>, run_seed: u64) -> Self {
        Self {
            root: root.into(),
            run_seed,
            parallel: true,
        }
    }

    /// Run jobs on the rayon pool (default) or one after another
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    /// Output path for one job
    pub fn path_for(&self, layout: OutputLayout, fruit: &str, size: u32) -> PathBuf {
        layout.path_for(&self.root, fruit, size)
    }

    /// Generate and persist every fruit in `catalog` at every size in `plan`
    pub fn run<S: TextureSink>(&self, catalog: &Catalog, plan: &BatchPlan, sink: &S) -> BatchReport {
        let jobs: Vec<(&FruitSpec, u32)> = plan
            .sizes
            .iter()
            .flat_map(|&size| catalog.iter().map(move |spec| (spec, size)))
            .collect();

        tracing::info!(
            jobs = jobs.len(),
            root = %self.root.display(),
            seed = self.run_seed,
            "Starting texture batch"
        );

        let outcomes: Vec<Result<PathBuf, BatchFailure>> = if self.parallel {
            jobs.par_iter()
                .map(|&(spec, size)| self.run_job(spec, size, plan.layout, sink))
                .collect()
        } else {
            jobs.iter()
                .map(|&(spec, size)| self.run_job(spec, size, plan.layout, sink))
                .collect()
        };

        let mut report = BatchReport::default();
        for outcome in outcomes {
            match outcome {
                Ok(path) => report.written.push(path),
                Err(failure) => report.failures.push(failure),
            }
        }

        tracing::info!(
            written = report.written.len(),
            failed = report.failures.len(),
            "Texture batch finished"
        );
        report
    }

    fn run_job<S: TextureSink>(
        &self,
        spec: &FruitSpec,
        size: u32,
        layout: OutputLayout,
        sink: &S,
    ) -> Result<PathBuf, BatchFailure> {
        let path = self.path_for(layout, &spec.name, size);
        let mut rng = task_rng(self.run_seed, &spec.name, size);

        let result = assemble(&GenerationRequest::new(spec, size), &mut rng)
            .map_err(BatchItemError::from)
            .and_then(|buffer| sink.persist(buffer, &path).map_err(BatchItemError::from));

        match result {
            Ok(()) => {
                tracing::debug!(
                    fruit = %spec.name,
                    size,
                    seed = task_seed(self.run_seed, &spec.name, size),
                    path = %path.display(),
                    "Wrote texture"
                );
                Ok(path)
            }
            Err(error) => {
                tracing::warn!(fruit = %spec.name, size, %error, "Texture failed");
                Err(BatchFailure {
                    fruit: spec.name.clone(),
                    size,
                    path,
                    error,
                })
            }
        }
    }
}
