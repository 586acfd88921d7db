use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use rayon::prelude::*;

use ped_builder::assembler::assemble;
use ped_builder::loader::{family_files, load_family_file};
use ped_builder::output::{render_dot, write_json};
use ped_builder::registry::FamilyRegistry;

fn main() -> anyhow::Result<ExitCode> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let family_dir = PathBuf::from(
        args.next()
            .context("usage: ped-builder <family-dir> [output.json] [dot-dir]")?,
    );
    let output_path = args
        .next()
        .map_or_else(|| PathBuf::from("output.json"), PathBuf::from);
    let dot_dir = args.next().map(PathBuf::from);

    let files = family_files(&family_dir)
        .with_context(|| format!("listing family files in {}", family_dir.display()))?;
    if files.is_empty() {
        warn!("no family files found in {}", family_dir.display());
        return Ok(ExitCode::SUCCESS);
    }
    info!(
        "processing {} family file(s) from {}",
        files.len(),
        family_dir.display()
    );

    // Family groups share no state, so one worker per group up to the core count
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_cpus::get().min(files.len()))
        .build()
        .context("building worker pool")?;

    let bar = ProgressBar::new(files.len() as u64).with_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .context("progress template")?,
    );

    let results: Vec<(PathBuf, ped_builder::Result<FamilyRegistry>)> = pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let result = load_family_file(path).and_then(|mut registry| {
                    assemble(&mut registry)?;
                    Ok(registry)
                });
                bar.inc(1);
                (path.clone(), result)
            })
            .collect()
    });
    bar.finish_and_clear();

    // A failed group is reported and skipped; the assembled ones are still emitted
    let mut assembled = Vec::new();
    let mut failures = 0usize;
    for (path, result) in results {
        match result {
            Ok(registry) => assembled.push(registry),
            Err(err) => {
                failures += 1;
                error!("{}: {err}", path.display());
            }
        }
    }

    write_json(&output_path, &assembled)
        .with_context(|| format!("writing {}", output_path.display()))?;
    info!(
        "wrote {} person(s) from {} group(s) to {}",
        assembled.iter().map(FamilyRegistry::len).sum::<usize>(),
        assembled.len(),
        output_path.display()
    );

    if let Some(dot_dir) = dot_dir {
        write_graph_descriptions(&dot_dir, &assembled)?;
    }

    if failures == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!("{failures} family group(s) failed");
        Ok(ExitCode::FAILURE)
    }
}

fn write_graph_descriptions(dot_dir: &Path, assembled: &[FamilyRegistry]) -> anyhow::Result<()> {
    fs::create_dir_all(dot_dir)
        .with_context(|| format!("creating dot directory {}", dot_dir.display()))?;
    for registry in assembled {
        let path = dot_dir.join(format!("{}.gv", registry.group()));
        fs::write(&path, render_dot(registry))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    info!(
        "wrote {} graph description(s) to {}",
        assembled.len(),
        dot_dir.display()
    );
    Ok(())
}
