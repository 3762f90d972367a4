use std::collections::HashSet;

#[macro_use]
extern crate pretty_assertions;
use test_case::test_case;
use tito_names::{parser, Name, NameError, StringArrayName, StringName, DEFAULT_DELIMITER};

fn array(components: &[&str], delimiter: char) -> StringArrayName {
    StringArrayName::from_components(components, delimiter).unwrap()
}

fn joined(components: &[&str], delimiter: char) -> StringName {
    StringName::from_components(components, delimiter).unwrap()
}

#[test]
fn plain_components_join_with_delimiter() {
    let components = ["oss", "cs", "fau", "de"];
    assert_eq!(array(&components, '.').as_string(), "oss.cs.fau.de");
    assert_eq!(joined(&components, '.').as_string(), "oss.cs.fau.de");
}

#[test]
fn masked_delimiters_stay_inside_one_component() {
    let components = [r"oss\.cs\.fau\.de"];
    let names: [Box<dyn Name>; 2] = [
        Box::new(array(&components, '.')),
        Box::new(joined(&components, '.')),
    ];
    for n in names {
        assert_eq!(n.no_components(), 1);
        assert_eq!(n.as_string(), "oss.cs.fau.de");
    }
}

#[test]
fn empty_and_blank_components_are_counted() {
    let components = ["", "", " ", ""];
    assert_eq!(array(&components, '.').no_components(), 4);
    assert_eq!(joined(&components, '.').no_components(), 4);
    assert_eq!(joined(&components, '.').as_string(), ".. .");
}

#[test]
fn escape_character_as_delimiter_unmasks_pairs() {
    let components = [r"oss\\", r"\\cs", r"fau\.", "de"];
    assert_eq!(array(&components, '\\').as_string(), r"oss\\\cs\fau.\de");
    assert_eq!(joined(&components, '\\').as_string(), r"oss\\\cs\fau.\de");
    assert!(array(&components, '\\').is_equal(&joined(&components, '\\')));
}

#[test]
fn escaped_dot_is_stored_bare_under_escape_delimiter() {
    let n = joined(&["oss", "cs"], '\\').set_component(1, r"fau\.").unwrap();
    assert_eq!(n.component(1).unwrap(), "fau.");

    let stored = n.component(1).unwrap();
    let there = parser::remask(&stored, DEFAULT_DELIMITER, '\\').unwrap();
    assert_eq!(parser::remask(&there, '\\', DEFAULT_DELIMITER).unwrap(), stored);
    assert!(parser::unmask(r"fau\.", '\\').is_err());
}

#[test]
fn insert_at_end_of_parsed_name() {
    let n = StringName::new("oss.cs.fau", '.').unwrap();
    let n = n.insert(3, "de").unwrap();
    assert_eq!(n.as_string(), "oss.cs.fau.de");

    let n = StringArrayName::parse("oss.cs.fau", '.').unwrap();
    let n = n.insert(3, "de").unwrap();
    assert_eq!(n.as_string(), "oss.cs.fau.de");
}

#[test]
fn concat_remasks_across_delimiters() {
    let a = StringName::new("oss.cs#fau", '#').unwrap();
    let b = StringName::new(r"de,com#org\,io", ',').unwrap();
    let c = a.concat(&b).unwrap();
    assert_eq!(c.as_string(), "oss.cs#fau#de#com#org,io");
    assert_eq!(c.as_data_string(), r"oss\.cs.fau.de.com#org,io");
    assert_eq!(c.no_components(), 4);

    let a = StringArrayName::parse("oss.cs#fau", '#').unwrap();
    let c = a.concat(&b).unwrap();
    assert_eq!(c.as_string(), "oss.cs#fau#de#com#org,io");
}

#[test]
fn concat_carries_escaped_escapes() {
    let n = StringName::new("oss.cs#fau", '#').unwrap();
    let m = StringName::new(r"cs.fau\\,de#com\,io", ',').unwrap();
    let n = n.concat(&m).unwrap();
    assert_eq!(n.as_string(), r"oss.cs#fau#cs.fau\#de#com,io");
    assert_eq!(n.as_data_string(), r"oss\.cs.fau.cs\.fau\\.de#com,io");
}

#[test]
fn concat_with_empty_names() {
    let empty = StringName::new("", '#').unwrap().remove(0).unwrap();
    let one = StringArrayName::from_components(["test"], ',').unwrap();

    assert_eq!(empty.concat(&one).unwrap().as_data_string(), "test");
    assert_eq!(one.concat(&empty).unwrap().as_data_string(), "test");
    assert_eq!(empty.concat(&empty).unwrap().as_data_string(), "");

    let blank = StringName::new("", '#').unwrap();
    let m = StringName::new(r"de,com#org\,io", ',').unwrap();
    assert_eq!(blank.concat(&m).unwrap().as_data_string(), ".de.com#org,io");
}

#[test]
fn concat_into_escape_delimited_name() {
    let n = StringArrayName::from_components([r"a\\"], '\\').unwrap();
    let m = StringName::new(r"b.c\.d", '.').unwrap();
    let n = n.concat(&m).unwrap();
    assert_eq!(n.components(), vec![r"a\\", "b", "c.d"]);
    assert_eq!(n.as_string(), r"a\\b\c.d");
    assert_eq!(n.as_data_string(), r"a\\.b.c\.d");
}

#[test_case(r"oss#cs\\#fau\#.de", '#' => r"oss.cs\\.fau#\.de" ; "hash delimiter")]
#[test_case(r"de,com#org\,io", ',' => "de.com#org,io" ; "comma delimiter")]
#[test_case(r"oss\.cs\\fau.de", '.' => r"oss\.cs\\fau.de" ; "default delimiter")]
#[test_case(r"a\\\b", '\\' => r"a\\.b" ; "escape delimiter")]
fn data_string_uses_default_delimiter(source: &str, delimiter: char) -> String {
    let n = StringName::new(source, delimiter).unwrap();
    let m = StringArrayName::parse(source, delimiter).unwrap();
    assert_eq!(n.as_data_string(), m.as_data_string());
    n.as_data_string()
}

#[test]
fn as_string_with_other_delimiter() {
    let n = StringArrayName::from_components(["oss", r"cs\.fau", "de"], '.').unwrap();
    assert_eq!(n.as_string_with('/'), "oss/cs.fau/de");
    assert_eq!(n.as_string_with(DEFAULT_DELIMITER), "oss.cs.fau.de");
}

#[test]
fn equality_needs_same_delimiter() {
    let dotted = StringName::new("oss", '.').unwrap();
    let hashed = StringName::new("oss", '#').unwrap();
    assert_eq!(dotted.as_data_string(), hashed.as_data_string());
    assert!(!dotted.is_equal(&hashed));
    assert_ne!(dotted, hashed);
}

#[test]
fn representations_compare_equal_and_hash_alike() {
    let a = StringArrayName::from_components(["oss", r"cs\#fau", "de"], '#').unwrap();
    let s = StringName::new(r"oss#cs\#fau#de", '#').unwrap();

    assert!(a.is_equal(&s));
    assert!(s.is_equal(&a));
    assert!(a == s);
    assert!(s == a);
    assert_eq!(a.hash_code(), s.hash_code());
    assert_eq!(a.as_string(), s.as_string());

    let set: HashSet<StringName> = [s.clone(), StringName::from(&a)].into_iter().collect();
    assert_eq!(set.len(), 1);
    assert_eq!(StringArrayName::from(s), a);
}

#[test]
fn clone_is_equal_with_same_hash() {
    let n = StringName::new("oss.cs.fau.de", '#').unwrap();
    let m = n.clone();
    assert_eq!(m.as_string(), "oss.cs.fau.de");
    assert!(n.is_equal(&m));
    assert_eq!(n.hash_code(), m.hash_code());
}

#[test]
fn display_and_from_str_use_data_strings() {
    let n = StringName::new("oss.cs#fau", '#').unwrap();
    assert_eq!(n.to_string(), r"oss\.cs.fau");

    let parsed: StringArrayName = n.to_string().parse().unwrap();
    assert_eq!(parsed.delimiter(), DEFAULT_DELIMITER);
    assert_eq!(parsed.components(), vec![r"oss\.cs", "fau"]);
    assert_eq!(parsed.as_data_string(), n.as_data_string());
}

#[test]
fn preconditions_are_illegal_arguments() {
    let n = StringName::new("os.cs.fau.de", '.').unwrap();
    for result in [
        n.component(4).map(|_| ()),
        n.set_component(4, "org").map(|_| ()),
        n.set_component(3, r"org\").map(|_| ()),
        n.set_component(3, r"\org").map(|_| ()),
        n.insert(5, "org").map(|_| ()),
        n.insert(3, "o.rg").map(|_| ()),
        n.append(r"org\").map(|_| ()),
        n.remove(4).map(|_| ()),
    ] {
        assert!(matches!(result, Err(NameError::IllegalArgument(_))));
    }
}

#[test]
fn failed_mutation_leaves_name_unchanged() {
    let n = StringArrayName::from_components(["oss", "cs"], '.').unwrap();
    assert!(n.insert(1, "a.b").is_err());
    assert_eq!(n.no_components(), 2);
    assert_eq!(n.as_string(), "oss.cs");
}

#[test]
fn names_serialize_as_records() {
    let n = StringArrayName::from_components(["oss", r"cs\.fau"], '.').unwrap();
    let json = serde_json::to_string(&n).unwrap();
    assert_eq!(json, r#"{"delimiter":".","components":["oss","cs\\.fau"]}"#);

    let back: StringName = serde_json::from_str(&json).unwrap();
    assert!(back.is_equal(&n));
    assert_eq!(back.as_string(), "oss.cs.fau");
}

#[test]
fn deserialization_validates_records() {
    let multi = r#"{"delimiter":"->","components":["oss"]}"#;
    assert!(serde_json::from_str::<StringName>(multi).is_err());

    let unmasked = r#"{"delimiter":".","components":["oss.cs"]}"#;
    assert!(serde_json::from_str::<StringArrayName>(unmasked).is_err());
}
