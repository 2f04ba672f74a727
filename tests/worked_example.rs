#![allow(non_snake_case, reason = "field names follow the document being modelled")]

use std::collections::{BTreeMap, HashMap};

use jpath::derive::Reflect;
use jpath::{ErrorKind, Operation, PathAccessor, ReflectPathAccess};

#[derive(Reflect)]
struct Root {
    F1: String,
    T2: Tree,
}

#[derive(Reflect)]
struct Tree {
    S1: Vec<i32>,
    S2: Vec<Leaf>,
}

#[derive(Reflect)]
struct Leaf {
    H1: String,
    H2: i64,
    M1: HashMap<String, String>,
}

fn root() -> Root {
    Root {
        F1: "a".into(),
        T2: Tree {
            S1: vec![2, 3, 4],
            S2: vec![
                Leaf {
                    H1: "h1".into(),
                    H2: 0,
                    M1: HashMap::new(),
                },
                Leaf {
                    H1: "h2".into(),
                    H2: 0,
                    M1: HashMap::from([("cats".into(), "swim".into())]),
                },
            ],
        },
    }
}

#[test]
fn query_nested_values() {
    let root = root();

    assert_eq!(root.query_as::<i32>("T2/S1/1").unwrap(), &3);
    assert_eq!(root.query_as::<String>("T2/S2/1/M1/cats").unwrap(), "swim");
    assert_eq!(root.query_as::<String>("/F1/").unwrap(), "a");
}

#[test]
fn assign_then_query() {
    let mut root = root();

    root.assign("T2/S2/0/H2", 2_u8).unwrap();
    assert_eq!(root.query_as::<i64>("T2/S2/0/H2").unwrap(), &2);
    assert_eq!(root.T2.S2[0].H2, 2);

    jpath::assign(&mut root, "T2/S1/0", 20_i64).unwrap();
    assert_eq!(root.T2.S1, [20, 3, 4]);
}

#[test]
fn error_classification() {
    let mut root = root();

    let err = root.query("C1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.operation(), Operation::Query);

    let err = root.query("T2/S1/9").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadArgument);

    let err = root.assign("T2/S2/1/M1/cats", "run").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert_eq!(err.operation(), Operation::Assign);
    assert_eq!(err.to_string(), "assign: cannot set map entry value");

    assert!(root.query("T2/S2/1/H2/x").unwrap_err().is_not_found());

    let err = root.assign("T2/S1/0", "three").unwrap_err();
    assert!(err.is_bad_argument());
    assert_eq!(root.T2.S1, [2, 3, 4]);
}

#[test]
fn errors_outlive_the_path() {
    let root = root();
    let err = {
        let path = String::from("T2/S9");
        root.query(path.as_str()).unwrap_err().into_owned()
    };
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        format!(
            "query: no such field: segment `S9` at offset 3 of `{}`",
            std::any::type_name::<Tree>()
        )
    );
}

#[test]
fn reusable_accessor_over_a_map_of_records() {
    let mut forest: BTreeMap<String, Root> = BTreeMap::new();
    forest.insert("north".into(), root());

    let accessor = PathAccessor::parse_static("north/T2/S2/1/H1");
    assert_eq!(accessor.query_as::<String>(&forest).unwrap(), "h2");
    assert!(accessor.assign(&mut forest, "x").unwrap_err().is_unsupported());
}
