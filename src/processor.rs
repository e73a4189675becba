//! Core skeleton processing orchestration.
//! Collects the package metadata, then rewrites the fixed list of skeleton
//! files one step at a time, stopping at the first failure. Files rewritten
//! by earlier steps are left as they are.

use log::{debug, warn};
use std::fmt;
use std::path::PathBuf;

use crate::config::SkeletonConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::fs::FileSystem;
use crate::metadata::{collect, PackageMetadata};
use crate::renderer::apply;
use crate::resolver::Resolver;

/// One substitution step, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Manifest,
    Readme,
    ServiceProvider,
    TestCase,
    ExampleTest,
    License,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Manifest,
        Step::Readme,
        Step::ServiceProvider,
        Step::TestCase,
        Step::ExampleTest,
        Step::License,
    ];
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Manifest => "package manifest",
            Step::Readme => "readme",
            Step::ServiceProvider => "service provider",
            Step::TestCase => "test case",
            Step::ExampleTest => "example test",
            Step::License => "license",
        };
        f.write_str(name)
    }
}

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    CollectingInput,
    /// Index into `Step::ALL`
    Substituting(usize),
    Completed,
    Failed,
}

/// What a finished step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub path: PathBuf,
    pub replacements: usize,
    /// Set when the step renamed its file
    pub renamed_to: Option<PathBuf>,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.renamed_to {
            Some(target) => write!(
                f,
                "{}: '{}' -> '{}' ({} replacement(s))",
                self.step,
                self.path.display(),
                target.display(),
                self.replacements
            ),
            None => write!(
                f,
                "{}: '{}' ({} replacement(s))",
                self.step,
                self.path.display(),
                self.replacements
            ),
        }
    }
}

/// Final result of a run.
#[derive(Debug)]
pub enum Outcome {
    Completed {
        reports: Vec<StepReport>,
    },
    Failed {
        kind: ErrorKind,
        /// `None` when the run failed before the first step
        step: Option<Step>,
        error: Error,
        /// Steps that finished before the failure
        reports: Vec<StepReport>,
    },
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed { .. })
    }

    pub fn state(&self) -> RunState {
        match self {
            Outcome::Completed { .. } => RunState::Completed,
            Outcome::Failed { .. } => RunState::Failed,
        }
    }

    pub fn reports(&self) -> &[StepReport] {
        match self {
            Outcome::Completed { reports } | Outcome::Failed { reports, .. } => reports,
        }
    }

    /// Turns the outcome into a plain `Result`, dropping the reports.
    pub fn into_result(self) -> Result<()> {
        match self {
            Outcome::Completed { .. } => Ok(()),
            Outcome::Failed { error, .. } => Err(error),
        }
    }
}

/// Rewrites the skeleton files for one set of metadata.
pub struct Processor<'a> {
    fs: &'a dyn FileSystem,
    config: &'a SkeletonConfig,
    metadata: &'a PackageMetadata,
}

impl<'a> Processor<'a> {
    pub fn new(fs: &'a dyn FileSystem, config: &'a SkeletonConfig, metadata: &'a PackageMetadata) -> Self {
        Self { fs, config, metadata }
    }

    /// Runs a single step.
    ///
    /// # Errors
    /// * `Error::FileError` if the step's file cannot be read, written or
    ///   renamed
    pub fn run_step(&self, step: Step) -> Result<StepReport> {
        let path = match step {
            Step::Manifest => &self.config.manifest,
            Step::Readme => &self.config.readme,
            Step::ServiceProvider => &self.config.provider_stub,
            Step::TestCase => &self.config.test_case,
            Step::ExampleTest => &self.config.example_test,
            Step::License => &self.config.license,
        };

        let tokens = match step {
            Step::License => self.metadata.license_tokens(),
            _ => self.metadata.tokens(),
        };
        let replacements = apply(self.fs, path, &tokens)?;

        let renamed_to = if step == Step::ServiceProvider {
            let target = self.config.provider_target(self.metadata.class_name());
            self.fs.rename(path, &target)?;
            Some(target)
        } else {
            None
        };

        Ok(StepReport { step, path: path.clone(), replacements, renamed_to })
    }

    /// Runs every step in order, calling `on_step` after each success.
    pub fn process<F: FnMut(&StepReport)>(&self, mut on_step: F) -> Outcome {
        let mut reports = Vec::with_capacity(Step::ALL.len());

        for (index, step) in Step::ALL.into_iter().enumerate() {
            debug!("{:?}: {}", RunState::Substituting(index), step);
            match self.run_step(step) {
                Ok(report) => {
                    on_step(&report);
                    reports.push(report);
                }
                Err(error) => {
                    warn!("Step '{}' failed, {} step(s) skipped.", step, Step::ALL.len() - index - 1);
                    return Outcome::Failed { kind: error.kind(), step: Some(step), error, reports };
                }
            }
        }

        debug!("{:?}", RunState::Completed);
        Outcome::Completed { reports }
    }
}

/// Single entry point: resolves the metadata, then processes every file.
///
/// Nothing is written when input collection fails.
pub fn init<F: FnMut(&StepReport)>(
    resolver: &Resolver<'_>,
    fs: &dyn FileSystem,
    config: &SkeletonConfig,
    year: i32,
    on_step: F,
) -> Outcome {
    debug!("{:?}", RunState::CollectingInput);
    let metadata = match collect(resolver, year, &config.namespace_separator) {
        Ok(metadata) => metadata,
        Err(error) => {
            return Outcome::Failed { kind: error.kind(), step: None, error, reports: Vec::new() };
        }
    };

    Processor::new(fs, config, &metadata).process(on_step)
}
