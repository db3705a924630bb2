use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const PEOPLE: &str = r#"{
  "people": [
    {"id": 1, "name": "Ada", "age": 36, "city": "London"},
    {"id": 2, "name": "Bo", "age": 12, "city": "Oslo"},
    {"id": 3, "name": "Cy", "age": 70, "city": "Oslo"}
  ]
}"#;

fn qj(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qj"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("qj binary runs")
}

fn qj_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_qj"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("qj binary spawns");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("qj binary exits")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("utf-8 stdout")
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().into_owned()
}

#[test]
fn query_filter_and_projection_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "people.json", PEOPLE);
    let out = qj(&["query", "people[age>=18 && city==Oslo].{id,name}", &file, "--compact"]);
    assert!(out.status.success(), "{out:?}");
    assert_eq!(stdout(&out), "[{\"id\":3,\"name\":\"Cy\"}]\n");
}

#[test]
fn query_string_result_prints_raw() {
    let out = qj_stdin(&["query", "people.0.name"], PEOPLE);
    assert!(out.status.success(), "{out:?}");
    assert_eq!(stdout(&out), "Ada\n");
}

#[test]
fn query_pretty_by_default() {
    let out = qj_stdin(&["query", "people.1.{id,age}", "-"], PEOPLE);
    assert!(out.status.success(), "{out:?}");
    assert_eq!(stdout(&out), "{\n  \"id\": 2,\n  \"age\": 12\n}\n");
}

#[test]
fn absent_result_prints_nothing() {
    let out = qj_stdin(&["query", "people.0.email"], PEOPLE);
    assert!(out.status.success(), "{out:?}");
    assert_eq!(stdout(&out), "");
}

#[test]
fn index_on_object_fails() {
    let out = qj_stdin(&["query", "people.0.0"], PEOPLE);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("index"), "{err}");
}

#[test]
fn filter_without_field_is_compile_error() {
    let out = qj_stdin(&["query", "people.[age>1]"], PEOPLE);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("filter without field"), "{err}");
}

#[test]
fn ndjson_one_line_per_document() {
    let input = "{\"user\":{\"name\":\"Ada\"}}\n\n{\"user\":{\"name\":\"Bo\"}}\n";
    let out = qj_stdin(&["query", "user", "--ndjson"], input);
    assert!(out.status.success(), "{out:?}");
    assert_eq!(stdout(&out), "{\"name\":\"Ada\"}\n{\"name\":\"Bo\"}\n");
}

#[test]
fn explain_lists_segments() {
    let out = qj(&["explain", "people[age>18].name"]);
    assert!(out.status.success(), "{out:?}");
    let text = stdout(&out);
    assert!(text.starts_with("Query: people[age>18].name\n"), "{text}");
    assert!(text.contains("where age > 18"), "{text}");
    assert!(text.contains("field       \"name\""), "{text}");
}

#[test]
fn block_with_header_and_query() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "people.json", PEOPLE);
    let block = write(
        dir.path(),
        "roster.qjson",
        "#qj-id: 12\n#qj-id-desc: Roster\n#qj-file: people.json\n",
    );
    let out = qj(&["block", &block, "--query", "people[city==Oslo].name", "--compact"]);
    assert!(out.status.success(), "{out:?}");
    assert_eq!(stdout(&out), "Roster\nID: 12\n[\"Bo\",\"Cy\"]\n");
}

#[test]
fn block_without_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let block = write(dir.path(), "bad.qjson", "{\"a\": 1}\n");
    let out = qj(&["block", &block]);
    assert!(!out.status.success());
}

#[test]
fn format_fills_placeholders() {
    let out = qj_stdin(&["format", "{name} is {age} ({missing})"], r#"{"name":"Ada","age":36}"#);
    assert!(out.status.success(), "{out:?}");
    assert_eq!(stdout(&out), "Ada is 36 ({missing})\n");
}

#[test]
fn config_output_section_applies() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "qj.toml", "[output]\npretty = false\n");
    let file = write(dir.path(), "people.json", PEOPLE);
    let out = qj(&["--config", &config, "query", "people.2.{name,age}", &file]);
    assert!(out.status.success(), "{out:?}");
    assert_eq!(stdout(&out), "{\"name\":\"Cy\",\"age\":70}\n");
}

#[test]
fn config_log_file_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "qj.toml",
        "[logging]\nlevel = \"debug\"\nfile = \"logs/qj.log\"\n",
    );
    let out = qj_stdin(&["--config", &config, "query", "people.0.email"], PEOPLE);
    assert!(out.status.success(), "{out:?}");
    let log = std::fs::read_to_string(dir.path().join("logs/qj.log")).unwrap();
    assert!(log.contains("[conf] configuration loaded"), "{log}");
    assert!(log.contains("[pipe] query produced no value"), "{log}");
}

#[test]
fn failures_and_bad_predicates_are_logged() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "qj.toml",
        "[logging]\nlevel = \"info\"\nfile = \"qj.log\"\n",
    );

    let out = qj_stdin(&["--config", &config, "query", "people.0.0"], PEOPLE);
    assert!(!out.status.success());
    let out = qj(&["--config", &config, "explain", "people[oops]"]);
    assert!(out.status.success(), "{out:?}");

    let log = std::fs::read_to_string(dir.path().join("qj.log")).unwrap();
    assert!(log.contains("ERROR [sys] command failed"), "{log}");
    assert!(log.contains("cannot index into non-array"), "{log}");
    assert!(log.contains("WARN [pipe] filter predicate does not parse"), "{log}");
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "qj.toml", "[logging]\nlevel = \"loud\"\n");
    let out = qj(&["--config", &config, "explain", "a"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("logging.level"), "{err}");
}
