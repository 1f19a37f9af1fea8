//! Procedural fruit texture synthesis
//!
//! Builds square RGB textures for a catalog of fruits without any painted
//! source art. Each texture is a highlight-to-shadow gradient decorated by a
//! family-specific overlay (seeds, stripes, lattice, dimples, bubbles) and
//! finished with noise and a light blur.
//!
//! # Single texture
//! ```no_run
//! use fruit_tex::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let grape = catalog.require("grape")?;
//! let tex = assemble_seeded(&GenerationRequest::new(grape, 256), SeedPolicy::Fixed(7))?;
//! assert_eq!(tex.size(), 256);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Whole catalog
//! ```no_run
//! use fruit_tex::prelude::*;
//!
//! let generator = BatchGenerator::new("resources/textures/fruits", SeedPolicy::default().resolve());
//! let report = generator.run(&Catalog::builtin(), &BatchPlan::standard(512), &PngSink);
//! for failure in &report.failures {
//!     eprintln!("{} @ {}: {}", failure.fruit, failure.size, failure.error);
//! }
//! ```

pub mod assemble;
pub mod batch;
pub mod catalog;
pub mod config;
pub mod error;
pub mod overlay;
pub mod seed;
pub mod texture;

pub use error::{BatchItemError, ConfigError, PersistError, TextureError};

/// Commonly used types
pub mod prelude {
    pub use crate::assemble::{assemble, assemble_seeded, assemble_with};
    pub use crate::batch::{
        BatchGenerator, BatchPlan, BatchReport, OutputLayout, PngSink, TextureSink,
    };
    pub use crate::catalog::{Catalog, FruitSpec, GenerationRequest};
    pub use crate::config::GeneratorConfig;
    pub use crate::overlay::PatternFamily;
    pub use crate::seed::{task_rng, SeedPolicy, TextureRng};
    pub use crate::texture::{Color, GradientKind, PixelBuffer};
}
