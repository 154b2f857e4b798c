use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn write(dir: &Path, rel: &str, contents: &str) {
    let full = dir.join(rel);
    std::fs::create_dir_all(full.parent().expect("parent")).expect("mkdir");
    std::fs::write(full, contents).expect("write");
}

fn scaffold_site(dir: &Path) {
    write(
        dir,
        "site/data/manifest.json",
        r#"{
            "site": { "default_session": "MAIN" },
            "sessions": [
                { "id": "MAIN", "label": "Home", "readme": "" },
                {
                    "id": "S1",
                    "label": "Session 1",
                    "docs_root": "sessions/001/docs",
                    "code_root": "sessions/001/code",
                    "readme": "sessions/001/docs/readme.md"
                }
            ]
        }"#,
    );
    write(
        dir,
        "site/data/docs_paths.txt",
        "./sessions/001/docs/readme.md\n./sessions/001/docs/01_intro.md\n",
    );
    write(dir, "site/data/code_paths.txt", "./sessions/001/code/app.py\n");
    write(dir, "sessions/001/docs/readme.md", "# 세션 1\n\n소개 문서\n");
    write(dir, "sessions/001/docs/01_intro.md", "# Intro\n");
    write(dir, "sessions/001/code/app.py", "def main():\n    pass\n");
}

fn courseview(site: &Path) -> Command {
    let mut cmd = Command::cargo_bin("courseview").expect("binary");
    cmd.arg("--site").arg(site);
    cmd
}

#[test]
fn test_tree_prints_docs_labels() {
    let dir = tempfile::tempdir().expect("tempdir");
    scaffold_site(dir.path());

    courseview(dir.path())
        .args(["tree", "S1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md"))
        .stdout(predicate::str::contains("01 INTRO.md"));
}

#[test]
fn test_tree_code_view_keeps_raw_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    scaffold_site(dir.path());

    courseview(dir.path())
        .args(["tree", "S1", "--view", "code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app.py"))
        .stdout(predicate::str::contains("README.md").not());
}

#[test]
fn test_tree_html_emits_file_buttons() {
    let dir = tempfile::tempdir().expect("tempdir");
    scaffold_site(dir.path());

    courseview(dir.path())
        .args(["tree", "S1", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-path=\"sessions/001/docs/readme.md\""));
}

#[test]
fn test_tree_rejects_unknown_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    scaffold_site(dir.path());

    courseview(dir.path())
        .args(["tree", "NOPE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOPE"));
}

#[test]
fn test_render_markdown_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    scaffold_site(dir.path());

    courseview(dir.path())
        .args(["render", "sessions/001/docs/readme.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>세션 1</h1>"));
}

#[test]
fn test_render_code_document_highlights() {
    let dir = tempfile::tempdir().expect("tempdir");
    scaffold_site(dir.path());

    courseview(dir.path())
        .args(["render", "sessions/001/code/app.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language-python"))
        .stdout(predicate::str::contains("tok-kw"));
}

#[test]
fn test_render_missing_document_reports_error_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    scaffold_site(dir.path());

    courseview(dir.path())
        .args(["render", "sessions/001/docs/gone.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("오류가 발생했습니다"));
}

#[test]
fn test_home_falls_back_to_builtin_data() {
    let dir = tempfile::tempdir().expect("tempdir");
    scaffold_site(dir.path());

    // No site/data/home.json, so the built-in content renders.
    courseview(dir.path())
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI Engineer 교육"));
}

#[test]
fn test_open_deep_link() {
    let dir = tempfile::tempdir().expect("tempdir");
    scaffold_site(dir.path());

    courseview(dir.path())
        .args(["open", "#s=S1&v=docs&p=sessions/001/docs/01_intro.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sessions/001/docs/01_intro.md"))
        .stdout(predicate::str::contains("<h1>Intro</h1>"));
}

#[test]
fn test_open_empty_fragment_lands_on_home() {
    let dir = tempfile::tempdir().expect("tempdir");
    scaffold_site(dir.path());

    courseview(dir.path())
        .args(["open", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("#s=MAIN&v=code"))
        .stdout(predicate::str::contains("AI Engineer 교육"));
}

#[test]
fn test_route_read_emits_json() {
    courseview(Path::new("."))
        .args(["route", "read", "#s=S1&v=code&p=a%2Fb.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"session_id\": \"S1\""))
        .stdout(predicate::str::contains("\"view\": \"code\""))
        .stdout(predicate::str::contains("a/b.md"));
}

#[test]
fn test_route_write_round_trips() {
    courseview(Path::new("."))
        .args(["route", "write", "S1", "--view", "code", "--path", "a/b c.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#s=S1&v=code&p=a%2Fb+c.md"));
}

#[test]
fn test_route_write_rejects_unknown_view() {
    courseview(Path::new("."))
        .args(["route", "write", "S1", "--view", "grid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("grid"));
}
