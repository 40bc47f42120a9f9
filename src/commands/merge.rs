//! Merge command implementation
//!
//! The merge command is the thin orchestrator around the engine:
//! 1. Resolve the type selector and derive default merge flags
//! 2. List metadata files on the manifest and project sides
//! 3. Partition manifest files into matching pairs and missing files
//! 4. Merge each matching pair in place
//! 5. Copy each missing file into the project tree
//! 6. Report merged, copied and failed files
//!
//! File-scoped failures are collected and reported at the end of the run;
//! `--fail-fast` stops at the first one instead.

use anyhow::Result;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the merge command
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Metadata type to merge (Profile, CustomLabels, Translations)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub metadata_type: String,

    /// Directory holding the retrieved manifest metadata
    #[arg(short, long, value_name = "PATH", env = "METAMERGE_MANIFEST_DIR")]
    pub manifest_dir: PathBuf,

    /// Project metadata root to merge into (defaults to current directory)
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub project_dir: PathBuf,

    /// Collapse duplicate-keyed entries even if the type default says not to
    #[arg(short, long)]
    pub dedup: bool,

    /// Merge entry properties field-by-field even if the type default says not to
    #[arg(short = 'e', long)]
    pub merge_props: bool,

    /// Abort on the first file-scoped failure instead of collecting them
    #[arg(long)]
    pub fail_fast: bool,

    /// Show what would be done without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the merge command
pub fn execute(args: MergeArgs) -> Result<()> {
    use metamerge::copier::copy_missing_file;
    use metamerge::filesystem::list_metadata_files;
    use metamerge::matcher::find_matching_files;
    use metamerge::merge::xml::merge_metadata_files;
    use metamerge::merge::MergeOptions;
    use metamerge::metadata::{derive_default_flags, MetadataType};
    use metamerge::report::{RunReport, Stage};

    let start_time = Instant::now();

    // Configuration errors are fatal before any file is touched.
    let metadata_type = MetadataType::parse(&args.metadata_type)?;
    let config = metadata_type.config();

    let defaults = derive_default_flags(metadata_type);
    let options = MergeOptions {
        dedup: args.dedup || defaults.dedup,
        merge_props: args.merge_props || defaults.merge_props,
        ..MergeOptions::from_flags(defaults)
    };

    if !args.manifest_dir.is_dir() {
        anyhow::bail!(
            "Manifest directory not found: {}",
            args.manifest_dir.display()
        );
    }
    if !args.project_dir.is_dir() {
        anyhow::bail!(
            "Project directory not found: {}",
            args.project_dir.display()
        );
    }

    let manifest_files = list_metadata_files(&args.manifest_dir, config)?;
    let project_files = list_metadata_files(&args.project_dir, config)?;
    if !args.quiet && args.verbose {
        println!(
            "Found {} manifest and {} project {} file(s)",
            manifest_files.len(),
            project_files.len(),
            metadata_type
        );
    }

    let matched = find_matching_files(&manifest_files, &project_files, config)?;
    if matched.is_empty() {
        if !args.quiet {
            println!("No {} components to merge", metadata_type);
        }
        return Ok(());
    }

    if args.dry_run && !args.quiet {
        println!("DRY RUN MODE - No changes will be made");
        println!();
    }

    let total = (matched.matching.len() + matched.missing.len()) as u64;
    let bar = if args.quiet || args.dry_run {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .expect("valid progress template")
                .progress_chars("#>-"),
        );
        bar
    };

    let mut report = RunReport::new();
    let mut aborted = false;

    for pair in &matched.matching {
        bar.set_message(format!("merging {}", pair.target.display()));
        debug!("merging {} -> {}", pair.source.display(), pair.target.display());
        if args.dry_run {
            if !args.quiet {
                println!("would merge {} -> {}", pair.source.display(), pair.target.display());
            }
        } else {
            match merge_metadata_files(&pair.source, &pair.target, &pair.target, config, &options)
            {
                Ok(()) => report.record_merged(pair.target.clone()),
                Err(e) => {
                    report.record_failure(pair.source.clone(), Stage::Merge, e);
                    if args.fail_fast {
                        aborted = true;
                        break;
                    }
                }
            }
        }
        bar.inc(1);
    }

    if !aborted {
        for missing in &matched.missing {
            bar.set_message(format!("copying {}", missing.display()));
            debug!("copying {}", missing.display());
            if args.dry_run {
                if !args.quiet {
                    println!("would copy {}", missing.display());
                }
            } else {
                match copy_missing_file(missing, &args.project_dir, config) {
                    Ok(dest) => report.record_copied(dest),
                    Err(e) => {
                        report.record_failure(missing.clone(), Stage::Copy, e);
                        if args.fail_fast {
                            aborted = true;
                            break;
                        }
                    }
                }
            }
            bar.inc(1);
        }
    }

    bar.finish_and_clear();

    if !args.quiet {
        let duration = start_time.elapsed();
        println!(
            "{} {} merged, {} copied in {:.2}s",
            style("Done:").green().bold(),
            report.merged.len(),
            report.copied.len(),
            duration.as_secs_f64()
        );
        if args.verbose {
            for path in &report.merged {
                println!("  merged {}", path.display());
            }
            for path in &report.copied {
                println!("  copied {}", path.display());
            }
        }
    }

    if report.has_failures() {
        for failure in &report.failures {
            eprintln!(
                "{} [{}] {}: {}",
                style("error:").red().bold(),
                failure.stage,
                failure.path.display(),
                failure.error
            );
        }
        anyhow::bail!(
            "{} file(s) failed{}",
            report.failures.len(),
            if aborted { " (aborted on first failure)" } else { "" }
        );
    }

    Ok(())
}
