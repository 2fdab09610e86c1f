// src/compiler.rs
//! External LaTeX compiler invocation
//!
//! Each compile call stages the source in its own uuid-named job directory
//! under the configured workspace root, so concurrent requests never share
//! files, then runs pdflatex and reads the produced PDF back.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};
use uuid::Uuid;

const TEX_FILENAME: &str = "resume.tex";
const PDF_FILENAME: &str = "resume.pdf";

pub struct LatexCompiler {
    workspace_root: PathBuf,
    latex_bin: String,
    keep_artifacts: bool,
}

impl LatexCompiler {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self {
            workspace_root,
            latex_bin: "pdflatex".to_string(),
            keep_artifacts: false,
        }
    }

    pub fn with_latex_bin(mut self, bin: String) -> Self {
        self.latex_bin = bin;
        self
    }

    /// Keep the job directory after compilation, for debugging failed runs.
    pub fn with_keep_artifacts(mut self, keep: bool) -> Self {
        self.keep_artifacts = keep;
        self
    }

    /// Compile LaTeX source into PDF bytes.
    pub fn compile(&self, latex_source: &str) -> Result<Vec<u8>> {
        let job_dir = self.workspace_root.join(Uuid::new_v4().to_string());
        fs::create_dir_all(&job_dir)
            .with_context(|| format!("Failed to create job directory: {}", job_dir.display()))?;

        let result = self.compile_in(&job_dir, latex_source);

        if !self.keep_artifacts {
            if let Err(e) = fs::remove_dir_all(&job_dir) {
                warn!(
                    "Failed to clean up job directory {}: {}",
                    job_dir.display(),
                    e
                );
            }
        }

        result
    }

    fn compile_in(&self, job_dir: &Path, latex_source: &str) -> Result<Vec<u8>> {
        let tex_path = job_dir.join(TEX_FILENAME);
        fs::write(&tex_path, latex_source)
            .with_context(|| format!("Failed to write LaTeX source: {}", tex_path.display()))?;

        info!(
            "Compiling {} in {}",
            TEX_FILENAME,
            job_dir.display()
        );

        let output = Command::new(&self.latex_bin)
            .arg("-interaction=nonstopmode")
            .arg("-halt-on-error")
            .arg(TEX_FILENAME)
            .current_dir(job_dir)
            .output()
            .with_context(|| format!("Failed to execute {}", self.latex_bin))?;

        if !output.status.success() {
            // Unescaped markup reaching the compiler shows up here, so the
            // log tail is worth carrying in the error.
            let log = String::from_utf8_lossy(&output.stdout);
            let tail: String = log
                .lines()
                .rev()
                .take(10)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect::<Vec<_>>()
                .join("\n");
            anyhow::bail!(
                "{} exited with {}: {}",
                self.latex_bin,
                output.status,
                tail
            );
        }

        let pdf_path = job_dir.join(PDF_FILENAME);
        fs::read(&pdf_path)
            .with_context(|| format!("Compiled PDF not found: {}", pdf_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_workspace() -> PathBuf {
        std::env::temp_dir().join(format!("resumaker-test-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_failed_compile_reports_error_and_cleans_up() {
        let root = temp_workspace();
        // "false" exits non-zero without touching the job directory
        let compiler = LatexCompiler::new(root.clone()).with_latex_bin("false".to_string());

        let result = compiler.compile("\\documentclass{article}");
        assert!(result.is_err());

        // workspace root remains, but no job directories are left behind
        let leftovers = fs::read_dir(&root).unwrap().count();
        assert_eq!(leftovers, 0);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_missing_binary_is_an_error_not_a_panic() {
        let root = temp_workspace();
        let compiler =
            LatexCompiler::new(root.clone()).with_latex_bin("definitely-not-pdflatex".to_string());

        assert!(compiler.compile("x").is_err());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_keep_artifacts_leaves_job_directory() {
        let root = temp_workspace();
        let compiler = LatexCompiler::new(root.clone())
            .with_latex_bin("false".to_string())
            .with_keep_artifacts(true);

        let _ = compiler.compile("\\documentclass{article}");

        let leftovers = fs::read_dir(&root).unwrap().count();
        assert_eq!(leftovers, 1);

        fs::remove_dir_all(&root).unwrap();
    }
}
