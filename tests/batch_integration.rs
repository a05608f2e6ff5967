//! Integration tests for file and directory level analysis.

use docprops::io::collect_inputs;
use docprops::{analyze_file, analyze_files, AnalysisOptions, Defaults, FileWalker};
use docprops::{EolStyle, IndentStyle};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temp directory with test files.
fn create_test_project(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut paths = Vec::with_capacity(files.len());

    for (name, content) in files {
        let file_path = temp_dir.path().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        paths.push(file_path);
    }

    (temp_dir, paths)
}

#[test]
fn test_results_keep_input_order() {
    let files = [
        ("tabs.c", "int f() {\n\tif (x) {\n\t\tgo();\n\t}\n}\n"),
        ("spaces.py", "def f():\n    if x:\n        go()\n"),
        ("dos.txt", "one\r\ntwo\r\n"),
        ("mac.txt", "one\rtwo\r"),
    ];
    let (_temp_dir, paths) = create_test_project(&files);

    let results = analyze_files(&paths, "utf-8", AnalysisOptions::default(), &Defaults::default());

    assert_eq!(results.len(), 4);
    for (result, path) in results.iter().zip(&paths) {
        assert_eq!(&result.path, path);
        assert!(result.readable);
    }
    assert_eq!(results[0].verdict.indent, IndentStyle::Tabs);
    assert_eq!(results[1].verdict.indent, IndentStyle::Spaces);
    assert_eq!(results[2].verdict.eol, EolStyle::Dos);
    assert_eq!(results[3].verdict.eol, EolStyle::MacClassic);
}

#[test]
fn test_latin1_file_is_decoded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("legacy.txt");
    // "caf\xe9" is not valid UTF-8
    fs::write(&path, b"a\n\tcaf\xe9\n\t\tb\n").unwrap();

    let result = analyze_file(&path, "latin1", AnalysisOptions::default(), &Defaults::default());
    assert!(result.readable);
    assert_eq!(result.verdict.indent, IndentStyle::Tabs);
}

#[test]
fn test_directory_scan_honours_ignore_patterns() {
    let files = [
        ("src/main.c", "x\n"),
        ("src/util/helpers.c", "x\n"),
        ("README", "x\n"),
        ("build/out.min.js", "x\n"),
    ];
    let (temp_dir, _) = create_test_project(&files);

    let found = collect_inputs(&[temp_dir.path().to_path_buf()], |root| {
        FileWalker::new(root).with_ignore_patterns(vec!["README".into(), "*.min.js".into()])
    })
    .unwrap();

    let names: Vec<_> = found
        .iter()
        .map(|p| p.strip_prefix(temp_dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![PathBuf::from("src/main.c"), PathBuf::from("src/util/helpers.c")]
    );
}

#[test]
fn test_parallel_and_sequential_agree() {
    let files: Vec<(String, String)> = (0..20)
        .map(|i| {
            let body = if i % 2 == 0 {
                "f {\n\tg {\n\t\th\n\t}\n}\n"
            } else {
                "f:\n  g:\n    h\n"
            };
            (format!("file_{i}.txt"), body.to_string())
        })
        .collect();
    let borrowed: Vec<(&str, &str)> = files.iter().map(|(n, c)| (n.as_str(), c.as_str())).collect();
    let (_temp_dir, paths) = create_test_project(&borrowed);

    let defaults = Defaults::default();
    let parallel = analyze_files(&paths, "utf-8", AnalysisOptions::default(), &defaults);
    let sequential = docprops::batch::analyze_files_sequential(
        &paths,
        "utf-8",
        AnalysisOptions::default(),
        &defaults,
    );

    assert_eq!(parallel, sequential);
}
