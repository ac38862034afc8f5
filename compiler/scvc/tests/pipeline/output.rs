//! Output naming, merging of several inputs, and determinism.

use std::fs;

use pretty_assertions::assert_eq;

use crate::common::{definitions, without_timestamp, Workspace};

#[test]
fn output_is_named_after_the_first_input() {
    let ws = Workspace::new();
    ws.file("first.scv", "struct A {}");
    ws.file("second.scv", "struct B {}");

    let (_, result) = ws.run(&["first.scv", "second.scv"]);
    let path = result.unwrap().unwrap();
    assert_eq!(path, ws.root().join("first.hpp"));
    assert!(!ws.root().join("second.hpp").exists());

    let header = fs::read_to_string(path).unwrap();
    assert_eq!(definitions(&header), vec!["A", "B"]);
}

#[test]
fn inputs_pulled_in_by_requires_are_not_merged_twice() {
    let ws = Workspace::new();
    ws.file("main.scv", "requires extra\nstruct Main { Extra e }");
    ws.file("extra.scv", "struct Extra {}");

    let header = ws.header(&["main.scv", "extra.scv"]);
    assert_eq!(definitions(&header), vec!["Extra", "Main"]);
}

#[test]
fn same_input_twice_is_compiled_once() {
    let ws = Workspace::new();
    ws.file("a.scv", "struct A {}");
    let header = ws.header(&["a.scv", "a.scv"]);
    assert_eq!(definitions(&header), vec!["A"]);
}

#[test]
fn recompiling_differs_only_in_the_timestamp() {
    let ws = Workspace::new();
    ws.file(
        "shapes.scv",
        "trait Describe requires <ostream> {\n\
         \x20 code {\n\
         \x20   void describe(std::ostream& out) const {\n\
         \x20     out << \"@Type\";\n\
         \x20     @ForMemberIn(Type) code { out << \" @Member\"; }\n\
         \x20   }\n\
         \x20 }\n\
         }\n\
         struct Circle is Describe { Point center; f64 radius; }\n\
         struct Point { f64 x; f64 y; }\n",
    );

    let first = ws.header(&["shapes.scv"]);
    let second = ws.header(&["shapes.scv"]);
    assert_eq!(without_timestamp(&first), without_timestamp(&second));
    assert!(first.contains("#include <ostream>\n"));
    assert_eq!(definitions(&first), vec!["Point", "Circle"]);
}

#[test]
fn header_layout() {
    let ws = Workspace::new();
    ws.file("one.scv", "struct One { bool flag }");

    let header = ws.header(&["one.scv"]);
    let body = without_timestamp(&header);
    assert_eq!(
        body,
        "\n#pragma once\n\n#include <cstdint>\n#include <string>\n\n\
         struct One;\n\n\
         struct One {\n\tbool flag;\n};"
    );
    assert!(header.ends_with("};\n"));
}
