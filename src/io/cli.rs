//! Command-line interface for batch converting PNG files into build guides

use crate::algorithm::pipeline::{AnalyzeRequest, Pipeline};
use crate::algorithm::steps::{SectionMode, StepOptions};
use crate::io::configuration::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_MAX_PLACEMENTS_PER_STEP,
    DEFAULT_ROWS_PER_SECTION, DEFAULT_ROWS_PER_STEP, MAX_GRID_DIMENSION, MAX_PLACEMENTS_PER_STEP,
    MAX_ROWS_PER_SECTION, MAX_ROWS_PER_STEP, MIN_GRID_DIMENSION, MIN_PLACEMENTS_PER_STEP,
    OUTPUT_SUFFIX, PREVIEW_SCALE, PREVIEW_SUFFIX, STANDARD_SHAPES,
};
use crate::io::error::{BrickError, Result, invalid_parameter};
use crate::io::image::{RasterOptions, grid_from_path};
use crate::io::progress::{ProgressManager, Stage};
use crate::io::report::GuideReport;
use crate::io::visualization::export_preview;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "brickplan")]
#[command(
    author,
    version,
    about = "Turn images into brick mosaics with step-by-step build guides"
)]
/// Command-line arguments for the guide generation tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid width in studs
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_WIDTH,
          value_parser = clap::value_parser!(u32).range(i64::from(MIN_GRID_DIMENSION)..=i64::from(MAX_GRID_DIMENSION)))]
    pub width: u32,

    /// Grid height in studs
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT,
          value_parser = clap::value_parser!(u32).range(i64::from(MIN_GRID_DIMENSION)..=i64::from(MAX_GRID_DIMENSION)))]
    pub height: u32,

    /// Reduce the image to at most this many colors
    #[arg(short, long)]
    pub colors: Option<usize>,

    /// Comma separated shapes to pack with (1x1 is always included)
    #[arg(short, long, value_delimiter = ',', default_values_t = STANDARD_SHAPES.map(String::from))]
    pub shapes: Vec<String>,

    /// Only place shapes in their catalog orientation
    #[arg(long)]
    pub no_rotate: bool,

    /// Use only 1x1 pieces
    #[arg(long)]
    pub no_optimize: bool,

    /// How the model is divided into sections
    #[arg(long, value_enum, default_value_t = SectionMode::Rows)]
    pub section_mode: SectionMode,

    /// Rows per section in rows mode
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_SECTION,
          value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ROWS_PER_SECTION)))]
    pub rows_per_section: u32,

    /// Rows grouped into one step
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_STEP,
          value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ROWS_PER_STEP)))]
    pub rows_per_step: u32,

    /// Most pieces a single step may introduce
    #[arg(long, default_value_t = DEFAULT_MAX_PLACEMENTS_PER_STEP,
          value_parser = clap::value_parser!(u32).range(i64::from(MIN_PLACEMENTS_PER_STEP)..=i64::from(MAX_PLACEMENTS_PER_STEP)))]
    pub max_placements_per_step: u32,

    /// Also write a PNG preview of the placed pieces
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Raster settings derived from the arguments
    pub const fn raster_options(&self) -> RasterOptions {
        RasterOptions {
            width: self.width,
            height: self.height,
            max_colors: self.colors,
        }
    }

    /// Analyze-phase settings derived from the arguments
    pub fn analyze_request(&self) -> AnalyzeRequest {
        AnalyzeRequest {
            shapes: self.shapes.clone(),
            allow_rotate: !self.no_rotate,
            optimize: !self.no_optimize,
            cache_result: true,
            ttl: None,
        }
    }

    /// Step-planning settings derived from the arguments
    pub const fn step_options(&self) -> StepOptions {
        StepOptions {
            section_mode: self.section_mode,
            rows_per_section: self.rows_per_section as usize,
            rows_per_step: self.rows_per_step as usize,
            max_placements_per_step: self.max_placements_per_step as usize,
        }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    pipeline: Pipeline,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            pipeline: Pipeline::default(),
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Shape options are validated once before any file is read.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape list is rejected, target validation
    /// fails, or a file cannot be processed
    pub fn process(&mut self) -> Result<()> {
        self.pipeline.catalog().normalize(&self.cli.shapes)?;

        let files = self.collect_files()?;

        if files.is_empty() {
            info!(path = %self.cli.target.display(), "nothing to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG image",
                ))
            }
        } else if target.is_dir() {
            let read_error = |e| BrickError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            };

            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && !Self::is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            warn!(input = %input_path.display(), "skipping, guide already exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        self.report_stage(index, Stage::Decode);
        let grid = grid_from_path(input_path, &self.cli.raster_options())?;

        self.report_stage(index, Stage::Analyze);
        let analysis = self.pipeline.analyze(&grid, &self.cli.analyze_request())?;

        self.report_stage(index, Stage::Plan);
        let step_options = self.cli.step_options();
        let plan = match analysis.token.as_deref() {
            Some(token) => self.pipeline.build_steps(token, &step_options)?,
            None => crate::algorithm::steps::plan(&analysis.placements, &step_options),
        };

        self.report_stage(index, Stage::Write);
        if self.cli.preview {
            export_preview(
                &analysis.placements,
                PREVIEW_SCALE,
                Self::get_preview_path(input_path),
            )?;
        }

        let source = input_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let report = GuideReport::new(source, analysis, step_options, plan);
        report.write_to(Self::get_output_path(input_path))?;

        info!(
            input = %input_path.display(),
            pieces = report.bricks.len(),
            steps = report.steps.len(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "guide written"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    fn report_stage(&mut self, index: usize, stage: Stage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, stage);
        }
    }

    // Previews written next to the inputs must not be picked up as inputs
    fn is_generated_output(path: &Path) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(PREVIEW_SUFFIX))
    }

    /// Path of the JSON guide written for an input image
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.json", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    /// Path of the PNG preview written for an input image
    pub fn get_preview_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let preview_name = format!("{}{}.png", stem.to_string_lossy(), PREVIEW_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(preview_name)
        } else {
            PathBuf::from(preview_name)
        }
    }
}
