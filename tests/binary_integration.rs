/*!
 * Integration test running the srcdump binary from inside a project
 */

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use std::thread;
use std::time::Duration;

use tempfile::tempdir;

#[test]
fn test_binary_reports_its_own_directory() {
    let project = tempdir().unwrap();
    let root = project.path();

    fs::create_dir(root.join("a")).unwrap();
    fs::write(root.join("a").join("x.swift"), "let a=1").unwrap();
    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".git").join("ignored.swift"), "ignored").unwrap();

    // The tool reports on the directory holding the executable
    let output = run_copied(root, &[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let report = fs::read_to_string(root.join("output.txt")).unwrap();
    let name = root.file_name().unwrap().to_string_lossy();

    assert!(report.starts_with(&format!(
        "Struttura del progetto:\n{}/\n    srcdump\n    a/\n        x.swift\n",
        name
    )));
    assert!(!report.contains(".git"));
    assert!(report.ends_with(&format!(
        "\nContenuti dei file .swift:\n\n{sep}\nFile: {}\n{sep}\nlet a=1",
        root.join("a").join("x.swift").display(),
        sep = "=".repeat(40)
    )));
    assert_eq!(report.matches("File: ").count(), 1);
}

// Copy the built binary into `dir` and run it from there with `args`
fn run_copied(dir: &Path, args: &[&str]) -> Output {
    let exe = dir.join("srcdump");
    fs::copy(env!("CARGO_BIN_EXE_srcdump"), &exe).unwrap();
    run_with_retry(&exe, args)
}

// A concurrent fork can briefly hold a freshly copied file open for writing
fn run_with_retry(exe: &Path, args: &[&str]) -> Output {
    (0..10)
        .find_map(|_| match Command::new(exe).args(args).output() {
            Err(e) if e.raw_os_error() == Some(26) => {
                thread::sleep(Duration::from_millis(50));
                None
            }
            result => Some(result.unwrap()),
        })
        .unwrap()
}

#[test]
fn test_arguments_are_ignored() {
    for args in [&["extra"][..], &["--help"][..], &["--version", "-x", "more"][..]] {
        let project = tempdir().unwrap();
        fs::write(project.path().join("main.swift"), "print(1)").unwrap();

        let output = run_copied(project.path(), args);
        assert!(output.status.success(), "failed with {:?}", args);
        assert!(output.stdout.is_empty());

        let report = fs::read_to_string(project.path().join("output.txt")).unwrap();
        assert!(report.ends_with("\nprint(1)"));
    }
}

#[cfg(unix)]
#[test]
fn test_symlinked_binary_reports_link_directory() {
    let install = tempdir().unwrap();
    let project = tempdir().unwrap();
    fs::write(project.path().join("app.swift"), "let linked = 1").unwrap();

    let exe = install.path().join("srcdump");
    fs::copy(env!("CARGO_BIN_EXE_srcdump"), &exe).unwrap();
    let link = project.path().join("srcdump");
    std::os::unix::fs::symlink(&exe, &link).unwrap();

    let output = run_with_retry(&link, &[]);
    assert!(output.status.success());

    let report = fs::read_to_string(project.path().join("output.txt")).unwrap();
    assert!(report.contains("let linked = 1"));
    assert!(!install.path().join("output.txt").exists());
}
