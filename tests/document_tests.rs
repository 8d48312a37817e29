use std::sync::Arc;

use packagetest::grammar::{
    Assignment, CharStream, Expression, FunctionCall, List, Selector, StringLiteral,
};
use packagetest::{BuildFile, ModuleFile, SyntaxErrorKind};

fn bound_build_file() -> BuildFile {
    BuildFile::builder()
        .target_name("an.awesome.module")
        .srcs(["src/main/java/**/*.java"])
        .srcs_glob()
        .deps([
            "@maven//:com_mycompany_app_another_dependency",
            "//anothermodule:an.other.module",
        ])
        .build()
}

fn bound_module_file() -> ModuleFile {
    ModuleFile::builder()
        .artifacts(["com.mycompany.app:another-dependency:1.0", "junit:junit:4.13.2"])
        .repositories(["file:///tmp/m2", "https://repo1.maven.org/maven2"])
        .build()
}

#[test]
fn test_build_file_round_trip() {
    let written = bound_build_file().to_text();
    let read = BuildFile::builder().srcs_glob().build();
    read.read_str(&written).unwrap();

    assert_eq!(read.name(), Some("an.awesome.module"));
    assert_eq!(read.srcs(), Some(vec!["src/main/java/**/*.java"]));
    assert_eq!(
        read.deps(),
        Some(vec![
            "@maven//:com_mycompany_app_another_dependency",
            "//anothermodule:an.other.module",
        ])
    );
    // a filled capture writes like the literal it was read from
    assert_eq!(read.to_text(), written);
}

#[test]
fn test_module_file_round_trip() {
    let written = bound_module_file().to_text();
    let read = ModuleFile::builder().build();
    read.read_str(&written).unwrap();

    assert_eq!(
        read.artifacts(),
        Some(vec!["com.mycompany.app:another-dependency:1.0", "junit:junit:4.13.2"])
    );
    assert_eq!(
        read.repositories(),
        Some(vec!["file:///tmp/m2", "https://repo1.maven.org/maven2"])
    );
    assert_eq!(read.to_text(), written);
}

#[test]
fn test_write_is_idempotent() {
    let file = bound_module_file();
    assert_eq!(file.to_text(), file.to_text());
    assert_eq!(bound_module_file().to_text(), file.to_text());
}

#[test]
fn test_bound_document_accepts_its_own_output() {
    let build = bound_build_file();
    build.read_str(&build.to_text()).unwrap();
    let module = bound_module_file();
    module.read_str(&module.to_text()).unwrap();
}

#[test]
fn test_hand_formatted_build_file() {
    let source = r#"
java_library(
    name = "an.other.module",
    srcs = glob([
        "src/main/java/**/*.java",
    ]),
    visibility = ["//visibility:public"],
    deps = [
        "@maven//:com_mycompany_app_another_dependency"
    ],
)
"#;
    let file = BuildFile::builder().srcs_glob().build();
    file.read_str(source).unwrap();
    assert_eq!(file.name(), Some("an.other.module"));
    assert_eq!(
        file.deps(),
        Some(vec!["@maven//:com_mycompany_app_another_dependency"])
    );
}

#[test]
fn test_trailing_comma_is_optional() {
    let with = List::capture(StringLiteral::capture);
    with.read(&mut CharStream::new(r#"["a","b",]"#)).unwrap();
    let without = List::capture(StringLiteral::capture);
    without.read(&mut CharStream::new(r#"["a","b"]"#)).unwrap();

    let values = |list: &List<StringLiteral>| -> Vec<String> {
        list.elements()
            .unwrap()
            .iter()
            .map(|s| s.value().unwrap().to_string())
            .collect()
    };
    assert_eq!(values(&with), vec!["a", "b"]);
    assert_eq!(values(&with), values(&without));
}

#[test]
fn test_selector_segment_count() {
    let two = Selector::parse("maven.install");
    two.read(&mut CharStream::new("maven.install(")).unwrap();

    let one = Selector::parse("maven");
    let err = one.read(&mut CharStream::new("maven.install(")).unwrap_err();
    assert_eq!(
        err.kind,
        SyntaxErrorKind::SizeMismatch {
            what: "selector",
            expected: 1,
            found: 2
        }
    );
}

#[test]
fn test_assignment_mismatch_names_both_values() {
    let assignment = Assignment::new("name", Arc::new(StringLiteral::new("bar")));
    let err = assignment
        .read(&mut CharStream::new(r#"name="foo""#))
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("bar") && msg.contains("foo"), "{msg}");
}

#[test]
fn test_call_argument_order_is_fixed() {
    let call = FunctionCall::new(
        "f",
        vec![
            Arc::new(Assignment::new("a", Arc::new(StringLiteral::capture()))),
            Arc::new(Assignment::new("b", Arc::new(StringLiteral::capture()))),
        ],
    );
    call.read(&mut CharStream::new(r#"f(a="1",b="2")"#)).unwrap();
    let swapped = FunctionCall::new(
        "f",
        vec![
            Arc::new(Assignment::new("a", Arc::new(StringLiteral::capture()))),
            Arc::new(Assignment::new("b", Arc::new(StringLiteral::capture()))),
        ],
    );
    assert!(swapped
        .read(&mut CharStream::new(r#"f(b="2",a="1")"#))
        .is_err());
}

#[test]
fn test_truncated_document_fails() {
    let text = bound_module_file().to_text();
    // cut inside a string literal
    let truncated = &text[..text.find("junit:junit").unwrap()];
    let err = ModuleFile::builder().build().read_str(truncated).unwrap_err();
    assert!(matches!(err.kind, SyntaxErrorKind::UnexpectedEnd { .. }));
}
