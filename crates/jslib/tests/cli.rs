use std::fs;
use std::path::Path;

use assert_cmd::Command; // Bring Command into scope
use predicates::prelude::*; // Bring predicate traits into scope
use tempfile::tempdir;

/// Default plugin coordinates, as declared by a freshly applied plugin
const DEFAULT_PLUGINS: [(&str, &str, &str); 11] = [
    ("org.jenkins-ci.plugins", "git", "3.5.1"),
    ("org.jenkins-ci.plugins.workflow", "workflow-api", "2.22"),
    ("org.jenkins-ci.plugins.workflow", "workflow-basic-steps", "2.6"),
    ("org.jenkins-ci.plugins.workflow", "workflow-cps", "2.40"),
    ("org.jenkins-ci.plugins.workflow", "workflow-durable-task-step", "2.15"),
    ("org.jenkins-ci.plugins.workflow", "workflow-cps-global-lib", "2.9"),
    ("org.jenkins-ci.plugins.workflow", "workflow-job", "2.14.1"),
    ("org.jenkins-ci.plugins.workflow", "workflow-multibranch", "2.16"),
    ("org.jenkins-ci.plugins.workflow", "workflow-scm-step", "2.6"),
    ("org.jenkins-ci.plugins.workflow", "workflow-step-api", "2.13"),
    ("org.jenkins-ci.plugins.workflow", "workflow-support", "2.15"),
];

/// Write a JSON fixture where every default plugin publishes an hpi and a jar.
fn write_fixture(path: &Path) {
    let modules: Vec<serde_json::Value> = DEFAULT_PLUGINS
        .iter()
        .map(|(group, name, version)| {
            serde_json::json!({
                "group": group,
                "name": name,
                "version": version,
                "packaging": "hpi",
                "artifacts": ["hpi", "jar"],
            })
        })
        .collect();
    let fixture = serde_json::json!({ "name": "fixture", "modules": modules });
    fs::write(path, serde_json::to_string_pretty(&fixture).unwrap()).unwrap();
}

fn jslib(project_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jslib").unwrap();
    cmd.arg("--project-dir").arg(project_dir);
    cmd
}

#[test]
fn test_help_lists_subcommands() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("jslib")?;
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("describe"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("plan"));
    Ok(())
}

#[test]
fn test_describe() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    jslib(dir.path())
        .arg("describe")
        .assert()
        .success()
        .stdout(predicate::str::contains("JenkinsPublic https://repo.jenkins-ci.org/public/"))
        .stdout(predicate::str::contains("jenkinsPluginHpisAndJpis"))
        .stdout(predicate::str::contains("<- jenkinsPlugins (PluginLibraries)"))
        .stdout(predicate::str::contains("groovy: [src, vars]"));
    Ok(())
}

#[test]
fn test_describe_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = jslib(dir.path()).args(["describe", "--json"]).output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["evaluated"], true);
    assert_eq!(report["java"]["target_compatibility"], "1.8");
    let buckets = report["buckets"].as_array().unwrap();
    assert!(buckets.iter().any(|b| b["name"] == "jenkinsPluginLibraries"));
    Ok(())
}

#[test]
fn test_dependencies_use_settings_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("jslib.toml"), "[versions]\ncore = \"2.100.0\"\n")?;

    jslib(dir.path())
        .arg("dependencies")
        .assert()
        .success()
        .stdout(predicate::str::contains("jenkinsCoreLibraries\n  org.jenkins-ci.main:jenkins-core:2.100.0"))
        .stdout(predicate::str::contains("org.jenkins-ci.main:jenkins-war:2.100.0"))
        .stdout(predicate::str::contains("  org.jenkins-ci.plugins:git:3.5.1"));
    Ok(())
}

#[test]
fn test_resolve_plugin_packages_and_libraries() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let fixture = dir.path().join("fixture.json");
    write_fixture(&fixture);

    jslib(dir.path())
        .args(["resolve", "jenkinsPluginHpisAndJpis", "--repository"])
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("org.jenkins-ci.plugins:git:3.5.1@hpi\n"))
        .stdout(predicate::str::contains("@jar").not());

    jslib(dir.path())
        .args(["resolve", "jenkinsPluginLibraries", "--files", "--repository"])
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("git-3.5.1.jar\n"))
        .stdout(predicate::str::contains("workflow-cps-global-lib-2.9.jar\n"));
    Ok(())
}

#[test]
fn test_resolve_reports_missing_plugin() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let fixture = dir.path().join("fixture.json");
    write_fixture(&fixture);
    fs::write(dir.path().join("jslib.toml"), "[plugins]\ngit = \"9.9.9\"\n")?;

    jslib(dir.path())
        .args(["resolve", "jenkinsPluginLibraries", "--repository"])
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains("org.jenkins-ci.plugins:git:9.9.9"))
        .stderr(predicate::str::contains("module not found"));
    Ok(())
}

#[test]
fn test_plan() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    jslib(dir.path())
        .args(["plan", "integrationTest"])
        .assert()
        .success()
        .stdout("classes\nintegrationTestClasses\nintegrationTest\n");

    jslib(dir.path())
        .args(["plan", "publish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task 'publish' not found"));
    Ok(())
}

#[test]
fn test_init_writes_settings_once() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    jslib(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("jslib.toml"));

    let written = fs::read_to_string(dir.path().join("jslib.toml"))?;
    assert!(written.contains("core = \"2.73.1\""));
    assert!(written.contains("workflow-cps = \"2.40\""));

    jslib(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    Ok(())
}

#[test]
fn test_unsupported_settings_format() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let settings = dir.path().join("settings.ini");
    fs::write(&settings, "core=2.100.0")?;

    jslib(dir.path())
        .arg("--settings")
        .arg(&settings)
        .arg("describe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported configuration format"));
    Ok(())
}
