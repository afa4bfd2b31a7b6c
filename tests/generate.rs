//! End-to-end runs of the ccloud binary against fixture catalogs.
//!
//! Rendering needs a TrueType font on the host; tests that reach the raster
//! stage skip themselves when none of the known system fonts exist.
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
];

fn font_available() -> bool {
    SYSTEM_FONTS.iter().any(|path| Path::new(path).is_file())
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn write_catalog(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("catalog.csv");
        fs::write(&path, contents).expect("failed to write catalog fixture");
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, input: &Path, extra: &[&str]) -> std::process::Output {
        let output = self.path("cloud.jpg");
        Command::new(env!("CARGO_BIN_EXE_ccloud"))
            .arg("--input")
            .arg(input)
            .arg("--output")
            .arg(&output)
            .args(extra)
            .output()
            .expect("failed to run ccloud")
    }

    fn report(&self) -> serde_json::Value {
        let contents =
            fs::read_to_string(self.path("run.json")).expect("run report was not written");
        serde_json::from_str(&contents).expect("run report is not valid JSON")
    }
}

#[test]
fn missing_input_file_ends_cleanly() {
    let fixture = Fixture::new();

    let result = fixture.run(
        &fixture.path("absent.csv"),
        &["--report", fixture.path("run.json").to_str().unwrap()],
    );

    assert!(result.status.success(), "process should not abort");
    assert!(!fixture.path("cloud.jpg").exists());
    let report = fixture.report();
    assert_eq!(report["outcome"], "skipped");
    assert!(report["reason"]
        .as_str()
        .unwrap()
        .contains("not found"));
}

#[test]
fn missing_column_skips_render() {
    let fixture = Fixture::new();
    let input = fixture.write_catalog("TITLE\nMath Worksheet Grade 3\n");

    let result = fixture.run(
        &input,
        &["--report", fixture.path("run.json").to_str().unwrap()],
    );

    assert!(result.status.success());
    assert!(!fixture.path("cloud.jpg").exists());
    let report = fixture.report();
    assert_eq!(report["outcome"], "skipped");
    assert_eq!(report["distinct_words"], 0);
}

#[test]
fn all_stopword_catalog_skips_render() {
    let fixture = Fixture::new();
    let input = fixture.write_catalog("NAME\nWorksheet\nGrade 3 Lessons\n");

    let result = fixture.run(&input, &[]);

    assert!(result.status.success());
    assert!(!fixture.path("cloud.jpg").exists());
}

#[test]
fn catalog_renders_to_jpeg() {
    if !font_available() {
        eprintln!("Skipping: no system font available for rendering");
        return;
    }
    let fixture = Fixture::new();
    let input = fixture.write_catalog(
        "NAME,PRICE\nMath Worksheet Grade 3,4.99\nFun Activity!!,2.50\nMath Flash Cards,3.25\n",
    );

    let result = fixture.run(
        &input,
        &["--report", fixture.path("run.json").to_str().unwrap()],
    );

    assert!(result.status.success());
    let out = fixture.path("cloud.jpg");
    assert!(out.is_file());
    assert!(fs::metadata(&out).unwrap().len() > 0);

    let report = fixture.report();
    assert_eq!(report["outcome"], "written");
    assert_eq!(report["output"], out.to_str().unwrap());
    assert!(report["distinct_words"].as_u64().unwrap() >= 4);
}

#[test]
fn rerun_overwrites_existing_artifact() {
    if !font_available() {
        eprintln!("Skipping: no system font available for rendering");
        return;
    }
    let fixture = Fixture::new();
    let input = fixture.write_catalog("NAME\nScience Kit\nScience Poster\n");
    fs::write(fixture.path("cloud.jpg"), b"stale").unwrap();

    let result = fixture.run(&input, &[]);

    assert!(result.status.success());
    let len = fs::metadata(fixture.path("cloud.jpg")).unwrap().len();
    assert!(len > 5, "stale placeholder should be overwritten");
}
