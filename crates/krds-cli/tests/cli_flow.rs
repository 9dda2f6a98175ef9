use std::ffi::OsString;

fn args(parts: &[&str]) -> Vec<OsString> {
    parts.iter().map(OsString::from).collect()
}

#[test]
fn pages_and_jump_commands_succeed() {
    krds_cli::run(args(&["krds", "-q", "pages", "50", "99"])).expect("pages runs");
    krds_cli::run(args(&["krds", "-q", "jump", "abc", "--current", "4", "--total", "9"]))
        .expect("jump runs");
}

#[test]
fn grid_replays_range_clicks() {
    krds_cli::run(args(&[
        "krds",
        "-q",
        "grid",
        "2026",
        "10",
        "--today",
        "2026-10-16",
        "--range",
        "--select",
        "2026-10-20",
        "--select",
        "2026-10-06",
        "--disable-weekends",
    ]))
    .expect("grid runs");
}

#[test]
fn rejects_current_page_outside_total() {
    let err = krds_cli::run(args(&["krds", "-q", "pages", "12", "10"]))
        .expect_err("current beyond total");
    assert!(format!("{err:#}").contains("outside"));
}

#[test]
fn missing_config_file_is_reported() {
    let err = krds_cli::run(args(&[
        "krds",
        "-q",
        "--config",
        "/nonexistent/krds.toml",
        "pages",
        "1",
        "3",
    ]))
    .expect_err("missing config");
    assert!(format!("{err:#}").contains("--config"));
}
