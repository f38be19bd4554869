//! Deploy Use Case
//!
//! Runs the planned steps strictly in order:
//! 1. Activate the virtual environment
//! 2. Install requirements (if the manifest exists)
//! 3. Create the ignore file (if missing)
//! 4. Untrack the secrets file (if it exists)
//! 5. Stage, 6. commit, 7. push
//! 8. Report completion and wait for acknowledgment
//!
//! No step stops the sequence. Unchecked failures are recorded as
//! `Failed`; untracking and commit failures as `Suppressed`.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::ports::{
    Acknowledger, CommandRunner, DeployEvent, DeployEventSink, FileSystem, NoopEventSink,
};
use crate::domain::services::DeployPlan;
use crate::domain::value_objects::{
    render_ignore_file, EnvChange, FailurePolicy, Invocation, Step, StepOutcome, VenvActivation,
};

use super::options::DeployOptions;
use super::result::DeployReport;

/// Printed unconditionally when the sequence ends
pub const COMPLETION_MESSAGE: &str = "Deploy process finished!";

/// State carried from one step to the next
#[derive(Debug, Default)]
struct RunContext {
    /// Environment changes from venv activation, applied to every later command
    env: Vec<EnvChange>,
}

/// Deploy use case - the sequencer
///
/// Parameterized by its ports so tests can record invocations instead of
/// spawning processes.
pub struct DeployUseCase<R, FS, A>
where
    R: CommandRunner,
    FS: FileSystem,
    A: Acknowledger,
{
    runner: R,
    file_system: FS,
    acknowledger: A,
}

impl<R, FS, A> DeployUseCase<R, FS, A>
where
    R: CommandRunner,
    FS: FileSystem,
    A: Acknowledger,
{
    pub fn new(runner: R, file_system: FS, acknowledger: A) -> Self {
        Self {
            runner,
            file_system,
            acknowledger,
        }
    }

    /// Run the sequence silently
    pub fn execute(&self, plan: &DeployPlan, options: &DeployOptions) -> DeployReport {
        self.execute_with_events(plan, options, Arc::new(NoopEventSink))
    }

    /// Run the sequence, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        plan: &DeployPlan,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployReport {
        let mut report = DeployReport::new(options.dry_run);
        let mut ctx = RunContext::default();

        info!(
            workdir = %options.workdir.display(),
            steps = plan.len(),
            dry_run = options.dry_run,
            "deploy started"
        );
        event_sink.on_event(DeployEvent::Started {
            workdir: options.workdir.clone(),
            step_count: plan.len(),
            dry_run: options.dry_run,
        });

        for (index, step) in plan.steps().iter().enumerate() {
            let outcome = self.run_step(index, step, plan, options, &mut ctx, &event_sink);
            debug!(step = %step.kind(), ?outcome, "step finished");
            event_sink.on_event(DeployEvent::StepFinished {
                index,
                kind: step.kind(),
                outcome: outcome.clone(),
            });
            report.push(index, step.kind(), outcome);
        }

        event_sink.on_event(DeployEvent::Completed {
            completed: report.completed_count(),
            skipped: report.skipped_count(),
            failed: report.failed_count(),
            suppressed: report.suppressed_count(),
        });

        if options.pause {
            if let Err(e) = self.acknowledger.wait() {
                warn!("acknowledgment wait failed: {}", e);
            }
        }

        report
    }

    fn run_step(
        &self,
        index: usize,
        step: &Step,
        plan: &DeployPlan,
        options: &DeployOptions,
        ctx: &mut RunContext,
        event_sink: &Arc<dyn DeployEventSink>,
    ) -> StepOutcome {
        let workdir = options.workdir.as_path();

        match step {
            Step::ActivateVenv { path } => {
                self.started(index, step, None, event_sink);
                self.activate(&workdir.join(path), options, ctx)
            }
            Step::InstallRequirements { manifest } => {
                if !self.file_system.exists(&workdir.join(manifest)) {
                    return StepOutcome::skipped(format!("{} not found", manifest.display()));
                }
                self.spawn_step(index, step, plan, options, ctx, event_sink)
            }
            Step::EnsureGitignore { path, entries } => {
                let target = workdir.join(path);
                if self.file_system.exists(&target) {
                    return StepOutcome::skipped(format!("{} already exists", path.display()));
                }
                self.started(index, step, None, event_sink);
                if options.dry_run {
                    return StepOutcome::Planned;
                }
                match self.file_system.write(&target, &render_ignore_file(entries)) {
                    Ok(()) => StepOutcome::Completed,
                    Err(e) => {
                        warn!("failed to write {}: {}", target.display(), e);
                        StepOutcome::Failed {
                            code: None,
                            message: Some(e.to_string()),
                        }
                    }
                }
            }
            Step::UntrackSecrets { path } => {
                if !self.file_system.exists(&workdir.join(path)) {
                    return StepOutcome::skipped(format!("{} not found", path.display()));
                }
                self.spawn_step(index, step, plan, options, ctx, event_sink)
            }
            Step::Stage { .. } | Step::Commit { .. } | Step::Push { .. } => {
                self.spawn_step(index, step, plan, options, ctx, event_sink)
            }
        }
    }

    fn started(
        &self,
        index: usize,
        step: &Step,
        command: Option<String>,
        event_sink: &Arc<dyn DeployEventSink>,
    ) {
        event_sink.on_event(DeployEvent::StepStarted {
            index,
            kind: step.kind(),
            command,
        });
    }

    /// Activation failure is unchecked: later steps run with the inherited environment.
    fn activate(&self, root: &Path, options: &DeployOptions, ctx: &mut RunContext) -> StepOutcome {
        let venv = VenvActivation::new(root);
        let script = venv.activation_script();

        if !self.file_system.exists(&script) {
            warn!("virtual environment not found: {}", script.display());
            return StepOutcome::Failed {
                code: None,
                message: Some(format!("activation script not found: {}", script.display())),
            };
        }

        match venv.env_changes(options.base_path.as_deref()) {
            Ok(changes) => {
                ctx.env = changes;
                if options.dry_run {
                    StepOutcome::Planned
                } else {
                    StepOutcome::Completed
                }
            }
            Err(e) => {
                warn!("cannot build PATH for {}: {}", root.display(), e);
                StepOutcome::Failed {
                    code: None,
                    message: Some(e.to_string()),
                }
            }
        }
    }

    fn spawn_step(
        &self,
        index: usize,
        step: &Step,
        plan: &DeployPlan,
        options: &DeployOptions,
        ctx: &RunContext,
        event_sink: &Arc<dyn DeployEventSink>,
    ) -> StepOutcome {
        let Some(invocation) = plan.invocation(step, &options.workdir) else {
            return StepOutcome::Completed;
        };
        let invocation = invocation.with_env(&ctx.env);

        self.started(index, step, Some(invocation.to_string()), event_sink);
        if options.dry_run {
            return StepOutcome::Planned;
        }

        self.spawn(&invocation, step.failure_policy())
    }

    fn spawn(&self, invocation: &Invocation, policy: FailurePolicy) -> StepOutcome {
        debug!(
            program = %invocation.program_lossy(),
            args = ?invocation.args_lossy(),
            "spawning"
        );

        match (self.runner.run(invocation), policy) {
            (Ok(status), _) if status.is_success() => StepOutcome::Completed,
            (Ok(status), FailurePolicy::Suppressed) => {
                debug!(code = ?status.code, "`{}` failed; ignored", invocation);
                StepOutcome::Suppressed { code: status.code }
            }
            (Ok(status), FailurePolicy::Unchecked) => {
                warn!(code = ?status.code, "`{}` failed", invocation);
                StepOutcome::Failed {
                    code: status.code,
                    message: status.stderr.map(|s| s.trim().to_string()),
                }
            }
            (Err(e), FailurePolicy::Suppressed) => {
                debug!("`{}` could not run: {}; ignored", invocation, e);
                StepOutcome::Suppressed { code: None }
            }
            (Err(e), FailurePolicy::Unchecked) => {
                warn!("`{}` could not run: {}", invocation, e);
                StepOutcome::Unavailable {
                    error: e.to_string(),
                }
            }
        }
    }
}
