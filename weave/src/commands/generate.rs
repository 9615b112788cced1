use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, eyre};
use weave_codegen::{
    dispatch::ArtifactFactory,
    session::{Services, Session},
};
use weave_core::{FsWriter, Overwrite, find_ancestor_with_file};

use crate::{
    manifest::{MANIFEST_FILE, Manifest},
    ops,
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to weave.toml (defaults to the nearest one above the current directory)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// List the files that would be written without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Keep files that already exist
    #[arg(long)]
    pub keep_existing: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::open(&self.manifest_path()?)?;

        let services = Services::new();
        let solution = ops::scaffold(&manifest, &services.inflector)?;

        let mut session = Session::new(&services);
        ArtifactFactory::with_defaults()
            .generate(&solution.into(), &mut session)
            .wrap_err("Failed to generate code")?;
        let mut context = session.into_context();

        println!("{} ({})", manifest.solution.name, manifest.namespace());
        println!();

        if self.dry_run {
            for path in context.paths() {
                println!("  {}", self.output.join(path).display());
            }
            println!();
            println!("{} files would be generated", context.len());
            return Ok(());
        }

        let overwrite = if self.keep_existing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        };
        let writer = FsWriter::new(&self.output).overwrite(overwrite);
        let report = context.flush(&writer).wrap_err("Failed to write files")?;

        println!("Generated: {}", self.output.display());
        println!("  {} written", report.written);
        if report.skipped > 0 {
            println!("  {} kept", report.skipped);
        }

        Ok(())
    }

    fn manifest_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.manifest {
            return Ok(path.clone());
        }

        let cwd = std::env::current_dir().wrap_err("Failed to read current directory")?;
        let dir = find_ancestor_with_file(&cwd, MANIFEST_FILE)?
            .ok_or_else(|| eyre!("No {} found in {} or its parents", MANIFEST_FILE, cwd.display()))?;
        Ok(dir.join(MANIFEST_FILE))
    }
}
