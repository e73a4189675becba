use kiln::config::SkeletonConfig;
use kiln::error::{Error, ErrorKind, Result};
use kiln::fs::LocalFileSystem;
use kiln::processor::{init, Outcome, RunState, Step};
use kiln::prompt::{NonInteractivePrompter, PromptRequest, Prompter};
use kiln::renderer::{apply, TokenMap};
use kiln::resolver::{FlagSource, InteractiveSource, Resolver};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

const YEAR: i32 = 2026;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn copy_skeleton() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let source = fixtures().join("skeleton");
    for entry in WalkDir::new(&source) {
        let entry = entry.unwrap();
        let target = temp_dir.path().join(entry.path().strip_prefix(&source).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
    temp_dir
}

fn flags() -> FlagSource {
    FlagSource::new()
        .with("package-name", Some("My Cool Lib".to_string()))
        .with("vendor", Some("Acme".to_string()))
        .with("description", Some("Does cool things".to_string()))
        .with("author-name", Some("Jane Doe".to_string()))
        .with("author-email", Some("jane@acme.io".to_string()))
        .with("homepage", Some("https://github.com/acme/my-cool-lib".to_string()))
        .with("author-homepage", Some("https://acme.io".to_string()))
}

fn run(dir: &Path, flags: &FlagSource) -> (Outcome, Vec<Step>) {
    let prompter = NonInteractivePrompter;
    let interactive = InteractiveSource::new(&prompter);
    let resolver = Resolver::new(flags, &interactive);
    let fs = LocalFileSystem::new(dir);
    let mut seen = Vec::new();
    let outcome = init(&resolver, &fs, &SkeletonConfig::default(), YEAR, |report| {
        seen.push(report.step)
    });
    (outcome, seen)
}

fn read(dir: &Path, path: &str) -> String {
    fs::read_to_string(dir.join(path)).unwrap()
}

#[test_log::test]
fn test_end_to_end_matches_expected_tree() {
    let temp_dir = copy_skeleton();

    let (outcome, seen) = run(temp_dir.path(), &flags());

    assert!(outcome.is_completed(), "{:?}", outcome);
    assert_eq!(outcome.state(), RunState::Completed);
    assert_eq!(seen, Step::ALL.to_vec());
    assert!(!dir_diff::is_different(temp_dir.path(), fixtures().join("expected")).unwrap());
}

#[test]
fn test_end_to_end_derived_names() {
    let temp_dir = copy_skeleton();
    let dir = temp_dir.path();

    let (outcome, _) = run(dir, &flags());
    let reports = outcome.reports().to_vec();
    outcome.into_result().unwrap();

    assert!(!dir.join("src/ServiceProvider.stub").exists());
    let provider = read(dir, "src/PackageServiceProvider.php");
    assert!(provider.contains("namespace Acme\\MyCoolLib;"));
    assert!(provider.contains("class PackageServiceProvider extends ServiceProvider"));

    let manifest = read(dir, "composer.json");
    assert!(manifest.contains("\"name\": \"acme/my-cool-lib\""));
    assert!(!manifest.contains("{{"));

    let provider_report = reports.iter().find(|r| r.step == Step::ServiceProvider).unwrap();
    assert_eq!(provider_report.renamed_to, Some(PathBuf::from("src/PackageServiceProvider.php")));
}

#[test]
fn test_class_name_suffix_is_not_doubled() {
    let temp_dir = copy_skeleton();
    let dir = temp_dir.path();

    let flags = flags().with("class-name", Some("CoolServiceProvider".to_string()));
    let (outcome, _) = run(dir, &flags);

    assert!(outcome.is_completed());
    assert!(dir.join("src/CoolServiceProvider.php").exists());
    assert!(read(dir, "tests/TestCase.php").contains("CoolServiceProvider::class"));
}

#[test]
fn test_spelled_out_suffix_is_not_doubled() {
    let temp_dir = copy_skeleton();
    let dir = temp_dir.path();

    let flags = flags().with("class-name", Some("acme service provider".to_string()));
    let (outcome, _) = run(dir, &flags);

    assert!(outcome.is_completed(), "{:?}", outcome);
    assert!(dir.join("src/AcmeServiceProvider.php").exists());
    assert!(read(dir, "tests/TestCase.php").contains("AcmeServiceProvider::class"));
    assert!(!read(dir, "tests/TestCase.php").contains("ServiceProviderServiceProvider"));
}

#[test]
fn test_class_name_with_path_separators_stays_in_skeleton() {
    let temp_dir = copy_skeleton();
    let dir = temp_dir.path();

    let flags = flags().with("class-name", Some("../../outside".to_string()));
    let (outcome, _) = run(dir, &flags);

    assert!(outcome.is_completed(), "{:?}", outcome);
    assert!(dir.join("src/OutsideServiceProvider.php").exists());
    assert!(!dir.join("src/ServiceProvider.stub").exists());
    let parent = dir.parent().unwrap();
    assert!(!parent.join("outsideServiceProvider.php").exists());
    assert!(!parent.join("OutsideServiceProvider.php").exists());
}

#[test]
fn test_missing_package_name_modifies_nothing() {
    let temp_dir = copy_skeleton();
    let dir = temp_dir.path();

    let flags = FlagSource::new()
        .with("description", Some("Does cool things".to_string()))
        .with("author-name", Some("Jane Doe".to_string()))
        .with("author-email", Some("jane@acme.io".to_string()));
    let (outcome, seen) = run(dir, &flags);

    match outcome {
        Outcome::Failed { kind, step, error, reports } => {
            assert_eq!(kind, ErrorKind::InvalidInput);
            assert_eq!(step, None);
            assert!(reports.is_empty());
            assert!(matches!(error, Error::InvalidInput { ref field, .. } if field == "package-name"));
        }
        other => panic!("Expected failure, got {:?}", other),
    }
    assert!(seen.is_empty());
    assert!(!dir_diff::is_different(dir, fixtures().join("skeleton")).unwrap());
}

#[test]
fn test_invalid_email_flag_fails_before_any_step() {
    let temp_dir = copy_skeleton();
    let dir = temp_dir.path();

    let flags = flags().with("author-email", Some("not-an-email".to_string()));
    let (outcome, _) = run(dir, &flags);

    assert!(matches!(
        outcome,
        Outcome::Failed { kind: ErrorKind::InvalidInput, step: None, .. }
    ));
    assert!(!dir_diff::is_different(dir, fixtures().join("skeleton")).unwrap());
}

#[test]
fn test_missing_file_stops_remaining_steps() {
    let temp_dir = copy_skeleton();
    let dir = temp_dir.path();
    fs::remove_file(dir.join("tests/TestCase.php")).unwrap();

    let (outcome, seen) = run(dir, &flags());

    assert_eq!(seen, vec![Step::Manifest, Step::Readme, Step::ServiceProvider]);
    match outcome {
        Outcome::Failed { kind, step, error, .. } => {
            assert_eq!(kind, ErrorKind::Io);
            assert_eq!(step, Some(Step::TestCase));
            assert!(error.to_string().contains("TestCase.php"));
        }
        other => panic!("Expected failure, got {:?}", other),
    }

    // Earlier steps stay applied, later ones never ran.
    assert!(!read(dir, "composer.json").contains("{{"));
    assert!(dir.join("src/PackageServiceProvider.php").exists());
    assert!(read(dir, "tests/ExampleTest.php").contains("{{namespace}}"));
    assert!(read(dir, "LICENSE.md").contains("{{year}}"));
}

#[test]
fn test_existing_provider_file_is_not_overwritten() {
    let temp_dir = copy_skeleton();
    let dir = temp_dir.path();
    fs::write(dir.join("src/PackageServiceProvider.php"), "keep me").unwrap();

    let (outcome, _) = run(dir, &flags());

    assert!(matches!(
        outcome,
        Outcome::Failed { kind: ErrorKind::Io, step: Some(Step::ServiceProvider), .. }
    ));
    assert_eq!(read(dir, "src/PackageServiceProvider.php"), "keep me");
}

#[test]
fn test_license_only_gets_copyright_fields() {
    let temp_dir = copy_skeleton();
    let dir = temp_dir.path();

    run(dir, &flags()).0.into_result().unwrap();

    let license = read(dir, "LICENSE.md");
    assert!(license.contains("Copyright (c) 2026 Jane Doe"));
    assert!(license.contains("{{author_email}}"));
}

#[test]
fn test_apply_replaces_exact_occurrences() {
    let temp_dir = TempDir::new().unwrap();
    let fs_root = LocalFileSystem::new(temp_dir.path());
    let tokens = TokenMap::new().with("{{package_name}}", "my-cool-lib");

    for (name, content, expected, count) in [
        ("zero.txt", "plain text\n", "plain text\n", 0),
        ("one.txt", "pkg: {{package_name}}\n", "pkg: my-cool-lib\n", 1),
        (
            "many.txt",
            "{{package_name}}/{{package_name}} {{ package_name }}{{package_name}}",
            "my-cool-lib/my-cool-lib {{ package_name }}my-cool-lib",
            3,
        ),
    ] {
        fs::write(temp_dir.path().join(name), content).unwrap();
        assert_eq!(apply(&fs_root, Path::new(name), &tokens).unwrap(), count, "{name}");
        assert_eq!(read(temp_dir.path(), name), expected, "{name}");

        // Tokens are consumed, so a second pass changes nothing.
        assert_eq!(apply(&fs_root, Path::new(name), &tokens).unwrap(), 0, "{name}");
        assert_eq!(read(temp_dir.path(), name), expected, "{name}");
    }
}

#[test]
fn test_apply_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let fs_root = LocalFileSystem::new(temp_dir.path());

    let err = apply(&fs_root, Path::new("missing.txt"), &TokenMap::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

/// Answers prompts from a script, in order.
struct ScriptedPrompter {
    answers: RefCell<Vec<&'static str>>,
    labels: RefCell<Vec<String>>,
}

impl Prompter for ScriptedPrompter {
    fn input(&self, request: &PromptRequest<'_>) -> Result<String> {
        self.labels.borrow_mut().push(request.label.to_string());
        let mut answers = self.answers.borrow_mut();
        let answer = if answers.is_empty() { "" } else { answers.remove(0) };
        if let (Some(validate), false) = (request.validator, answer.is_empty()) {
            validate(answer).map_err(|message| Error::invalid_input(request.label, message))?;
        }
        Ok(answer.to_string())
    }
}

#[test]
fn test_interactive_run_prompts_for_missing_values() {
    let temp_dir = copy_skeleton();
    let dir = temp_dir.path();

    // author name, author email, vendor (blank), package name, description,
    // class name (blank), homepage, author homepage
    let prompter = ScriptedPrompter {
        answers: RefCell::new(vec![
            "Jane Doe",
            "jane@acme.io",
            "",
            "My Cool Lib",
            "Does cool things",
            "",
            "",
            "",
        ]),
        labels: RefCell::new(Vec::new()),
    };
    let flags = FlagSource::new();
    let interactive = InteractiveSource::new(&prompter);
    let resolver = Resolver::new(&flags, &interactive);
    let fs_root = LocalFileSystem::new(dir);

    let outcome = init(&resolver, &fs_root, &SkeletonConfig::default(), YEAR, |_| {});

    assert!(outcome.is_completed(), "{:?}", outcome);
    assert_eq!(prompter.labels.borrow().len(), 8);
    let manifest = read(dir, "composer.json");
    assert!(manifest.contains("\"name\": \"jane/my-cool-lib\""));
    assert!(manifest.contains("Jane\\\\MyCoolLib\\\\PackageServiceProvider"));
}

#[test]
fn test_flags_skip_their_prompts() {
    let temp_dir = copy_skeleton();
    let prompter = ScriptedPrompter {
        answers: RefCell::new(Vec::new()),
        labels: RefCell::new(Vec::new()),
    };
    let flags = flags();
    let interactive = InteractiveSource::new(&prompter);
    let resolver = Resolver::new(&flags, &interactive);
    let fs_root = LocalFileSystem::new(temp_dir.path());

    let outcome = init(&resolver, &fs_root, &SkeletonConfig::default(), YEAR, |_| {});

    assert!(outcome.is_completed());
    // Only the class name had no flag.
    assert_eq!(*prompter.labels.borrow(), vec!["Service provider class name".to_string()]);
}
