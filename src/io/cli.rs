//! Command-line interface that turns an image and a tile directory into a mosaic

use crate::algorithm::assembler::MosaicAssembler;
use crate::io::error::Result;
use crate::io::image::{decode_image, encode_image};
use crate::io::library::build_tile_library;
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::info;
use std::num::{NonZeroU32, NonZeroUsize};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Rebuild an image as a mosaic of tile images"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Source image to reproduce
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Directory of tile images
    #[arg(value_name = "TILES_DIR")]
    pub tiles_dir: PathBuf,

    /// Path of the mosaic to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Height in pixels every tile is scaled to
    #[arg(value_name = "TILE_HEIGHT")]
    pub tile_height: NonZeroU32,

    /// Tiles shortlisted by average colour before pixel comparison
    #[arg(value_name = "CANDIDATES")]
    pub candidates: NonZeroUsize,
}

/// Runs one mosaic job: library, source image, assembly, output
pub struct MosaicJob {
    cli: Cli,
    progress: ProgressManager,
}

impl MosaicJob {
    /// Create a job drawing progress to stderr
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: ProgressManager::new(),
        }
    }

    /// Create a job with a custom progress tracker
    pub const fn with_progress(cli: Cli, progress: ProgressManager) -> Self {
        Self { cli, progress }
    }

    /// Arguments this job was created from
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Progress tracker for this job
    pub const fn progress(&self) -> &ProgressManager {
        &self.progress
    }

    /// Build the mosaic and write it to the output path
    ///
    /// # Errors
    ///
    /// Returns an error if the tile library or source image cannot be loaded,
    /// or the mosaic cannot be written
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();

        let library = build_tile_library(&self.cli.tiles_dir, self.cli.tile_height.get())?;
        let image = decode_image(&self.cli.image)?;
        info!(
            "Loaded source image '{}' ({}x{})",
            self.cli.image.display(),
            image.nrows(),
            image.ncols()
        );

        let assembler = MosaicAssembler::new(&library, self.cli.candidates.get())?;
        self.progress.initialize(assembler.cell_count(&image));
        let mosaic = assembler.assemble_with_progress(&image, |_| self.progress.cell_done());
        self.progress.finish();

        encode_image(&mosaic, &self.cli.output)?;
        info!(
            "Wrote mosaic to '{}' in {:.2?}",
            self.cli.output.display(),
            start_time.elapsed()
        );

        Ok(())
    }
}
