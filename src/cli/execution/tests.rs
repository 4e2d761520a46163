use super::*;
use crate::cli::grammar::{ParseOutcome, parse};
use crate::cli::testing::{args, current_registry};
use crate::ui::recording::RecordingUi;
use crate::utils::paths;
use tempfile::TempDir;

struct Harness {
    _home: TempDir,
    env: Environment,
    registry: CommandRegistry,
    recorder: Rc<RecordingUi>,
    ui: Rc<dyn Ui>,
}

impl Harness {
    fn new() -> Self {
        let home = tempfile::tempdir().unwrap();
        let env = Environment {
            home: Some(home.path().to_path_buf()),
            ..Environment::default()
        };
        let recorder = Rc::new(RecordingUi::default());
        let ui: Rc<dyn Ui> = recorder.clone();
        Self {
            _home: home,
            env,
            registry: current_registry(),
            recorder,
            ui,
        }
    }

    fn run(&self, tokens: &[&str]) -> ExecutionOutcome {
        let ParseOutcome::Success(invocation) = parse(&args(tokens), &self.registry) else {
            panic!("fixture args should parse: {:?}", tokens);
        };
        let ctx = ExecutionContext {
            env: &self.env,
            ui: &self.ui,
            registry: &self.registry,
        };
        execute(invocation, &ctx)
    }
}

#[test]
fn successful_run_executes_and_flushes_once() {
    let harness = Harness::new();
    let outcome = harness.run(&["probe", "here"]);

    assert!(matches!(outcome, ExecutionOutcome::Ok));
    assert!(harness.recorder.out_contains("Current probe ran here"));
    assert_eq!(harness.recorder.flushes.get(), 1);
}

#[test]
fn extra_arguments_are_a_usage_failure_and_skip_the_command() {
    let harness = Harness::new();
    let outcome = harness.run(&["probe", "here", "surplus"]);

    assert!(matches!(outcome, ExecutionOutcome::UsageFailure));
    assert!(!harness.recorder.out_contains("probe ran"));
    assert!(harness.recorder.err_contains("unexpected argument 'surplus'"));
    assert_eq!(harness.recorder.flushes.get(), 1);
}

#[test]
fn setup_failure_skips_execute() {
    let harness = Harness::new();
    let outcome = harness.run(&["probe", "--outcome", "setup-fail"]);

    assert!(matches!(outcome, ExecutionOutcome::Failed));
    assert!(!harness.recorder.out_contains("probe ran"));
    assert_eq!(harness.recorder.flushes.get(), 1);
}

#[test]
fn command_without_lifecycle_is_unexpected() {
    let harness = Harness::new();
    let outcome = harness.run(&["strict", "--org", "acme"]);

    assert!(matches!(
        outcome,
        ExecutionOutcome::Unexpected(CliError::NonConformingCommand)
    ));
    assert_eq!(harness.recorder.flushes.get(), 1);
}

#[test]
fn config_mutations_are_persisted() {
    let harness = Harness::new();
    let outcome = harness.run(&["probe", "--outcome", "retarget"]);

    assert!(matches!(outcome, ExecutionOutcome::Ok));
    let written = std::fs::read_to_string(paths::config_file(&harness.env).unwrap()).unwrap();
    assert!(written.contains("https://api.example.com"));
}

#[test]
fn untouched_config_is_not_written() {
    let harness = Harness::new();
    harness.run(&["probe"]);

    assert!(!paths::config_file(&harness.env).unwrap().exists());
    assert!(paths::plugin_home(&harness.env).unwrap().is_dir());
}

#[test]
fn execute_failure_is_displayed_and_flushed() {
    let harness = Harness::new();
    harness.run(&["probe", "--outcome", "fail"]);
    assert_eq!(harness.recorder.flushes.get(), 1);
    assert_eq!(harness.recorder.errors.borrow().len(), 1);
}
