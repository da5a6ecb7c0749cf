use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path =
            std::env::temp_dir().join(format!("penline_cli_{tag}_{}_{}", std::process::id(), ts));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_penline(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_penline"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("run penline")
}

#[test]
fn eval_commands_write_default_svg() {
    let dir = TestDir::new("eval_svg");
    let output = run_penline(
        &["-e", "moveto 10 10", "-e", "fill on", "-e", "rectangle 20 30"],
        &dir.path,
    );

    assert!(output.status.success(), "process failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("line 2: fill mode on"),
        "expected fill note in stdout, got: {stdout}"
    );

    let svg = fs::read_to_string(dir.path.join("drawing.svg")).expect("read svg output");
    assert!(svg.contains("<svg"), "expected svg root element");
    assert!(svg.contains("<rect"), "expected rendered rectangle");
}

#[test]
fn file_input_writes_svg_named_after_script() {
    let dir = TestDir::new("file_svg");
    fs::write(
        dir.path.join("house.pen"),
        "moveto 50 100\nrectangle 100 80\n\npen red\ntriangle 100 60 60\n",
    )
    .expect("write sample script");

    let out_dir = dir.path.join("out");
    fs::create_dir_all(&out_dir).expect("create output dir");

    let output = run_penline(&["house.pen", "-o", "out/house.svg"], &dir.path);
    assert!(output.status.success(), "process failed: {output:?}");

    let svg = fs::read_to_string(out_dir.join("house.svg")).expect("read svg output");
    assert!(svg.contains("<polygon"), "expected triangle: {svg}");
    assert!(svg.contains("#ff0000"), "expected red pen: {svg}");

    let output = run_penline(&["house.pen"], &dir.path);
    assert!(output.status.success(), "process failed: {output:?}");
    assert!(dir.path.join("house.svg").is_file(), "expected house.svg");
}

#[test]
fn bad_lines_are_reported_and_fail_the_run() {
    let dir = TestDir::new("bad_lines");
    let output = run_penline(
        &["-e", "moveto 1 1", "-e", "jump 3", "-e", "circle", "-e", "circle 4"],
        &dir.path,
    );

    assert_eq!(output.status.code(), Some(1), "process: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: line 2: unknown command `jump`"),
        "stderr: {stderr}"
    );
    assert!(
        stderr.contains("Error: line 3: invalid arguments for `circle`"),
        "stderr: {stderr}"
    );
    // The good lines still produce a drawing.
    let svg = fs::read_to_string(dir.path.join("drawing.svg")).expect("read svg output");
    assert!(svg.contains("<ellipse"), "svg: {svg}");
}

#[test]
fn check_mode_validates_without_output() {
    let dir = TestDir::new("check");
    let output = run_penline(&["--check", "-e", "moveto 1 2", "-e", "pen red"], &dir.path);
    assert!(output.status.success(), "process failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 commands ok"), "stdout: {stdout}");
    assert!(!dir.path.join("drawing.svg").exists(), "check mode wrote svg");

    let output = run_penline(&["--check", "-e", "fill maybe"], &dir.path);
    assert_eq!(output.status.code(), Some(1), "process: {output:?}");
}

#[test]
fn reads_commands_from_stdin() {
    let dir = TestDir::new("stdin");
    let mut child = Command::new(env!("CARGO_BIN_EXE_penline"))
        .args(["-o", "piped.svg"])
        .current_dir(&dir.path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn penline");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(b"moveto 5 5\ndrawto 50 50\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait for penline");

    assert!(output.status.success(), "process failed: {output:?}");
    let svg = fs::read_to_string(dir.path.join("piped.svg")).expect("read svg output");
    assert!(svg.contains("<line"), "svg: {svg}");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TestDir::new("missing");
    let output = run_penline(&["nope.pen"], &dir.path);
    assert_eq!(output.status.code(), Some(2), "process: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read nope.pen"), "stderr: {stderr}");
}

#[test]
fn grammar_lists_every_verb() {
    let dir = TestDir::new("grammar");
    let output = run_penline(&["--grammar"], &dir.path);
    assert!(output.status.success(), "process failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for form in [
        "moveto <x> <y>",
        "triangle <base> <side1> <side2>",
        "pen <red|green|blue>",
        "fill <on|off>",
        "reset",
    ] {
        assert!(stdout.contains(form), "missing {form}: {stdout}");
    }
}

#[test]
fn canvas_size_flags_set_svg_size() {
    let dir = TestDir::new("size");
    let output = run_penline(
        &["--width", "320", "--height", "240", "-e", "clear"],
        &dir.path,
    );
    assert!(output.status.success(), "process failed: {output:?}");
    let svg = fs::read_to_string(dir.path.join("drawing.svg")).expect("read svg output");
    assert!(svg.contains("viewBox=\"0 0 320 240\""), "svg: {svg}");
}

#[test]
fn eval_values_are_single_commands() {
    let dir = TestDir::new("eval_blank");
    let output = run_penline(&["-e", "moveto 1 1", "-e", "", "-e", "circle 2"], &dir.path);

    assert_eq!(output.status.code(), Some(1), "process: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: line 2: unknown command"),
        "stderr: {stderr}"
    );

    let output = run_penline(&["--check", "-e", ""], &dir.path);
    assert_eq!(output.status.code(), Some(1), "process: {output:?}");
}

#[test]
fn eval_and_file_are_exclusive() {
    let dir = TestDir::new("eval_file");
    fs::write(dir.path.join("dot.pen"), "moveto 1 1\n").expect("write sample script");

    let output = run_penline(&["dot.pen", "-e", "circle 3"], &dir.path);
    assert_eq!(output.status.code(), Some(2), "process: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"), "stderr: {stderr}");
    assert!(!dir.path.join("dot.svg").exists());
    assert!(!dir.path.join("drawing.svg").exists());
}

#[test]
fn verbose_flag_logs_input_and_output() {
    let dir = TestDir::new("verbose");
    fs::write(dir.path.join("dot.pen"), "moveto 1 1\n").expect("write sample script");

    let output = run_penline(&["-v", "dot.pen"], &dir.path);
    assert!(output.status.success(), "process failed: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reading script"), "stderr: {stderr}");
    assert!(stderr.contains("writing svg"), "stderr: {stderr}");

    let output = run_penline(&["dot.pen"], &dir.path);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("writing svg"), "stderr: {stderr}");
}
