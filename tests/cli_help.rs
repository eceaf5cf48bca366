use assert_cmd::Command;

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("exo-disposition").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn datasets_lists_all_three() {
    let mut cmd = Command::cargo_bin("exo-disposition").unwrap();
    cmd.arg("datasets");
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "kepler\nk2planets\ntess\n");
}
