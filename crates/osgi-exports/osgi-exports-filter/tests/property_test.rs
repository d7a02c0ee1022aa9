//! Property tests for the parser and export definitions.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use osgi_exports_filter::{parse_header, ClassPattern, ExportDefinition};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn package_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9_]{0,6}", 1..4).prop_map(|parts| parts.join("."))
}

fn glob_strategy() -> impl Strategy<Value = String> {
    "\\*?[A-Z][A-Za-z0-9]{0,5}\\*?"
}

/// One clause: packages plus optional include / exclude globs, with a
/// version attribute and an unknown directive mixed in.
fn clause_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(package_strategy(), 1..4),
        prop::collection::vec(glob_strategy(), 0..3),
        prop::collection::vec(glob_strategy(), 0..3),
        any::<bool>(),
    )
        .prop_map(|(packages, includes, excludes, quoted)| {
            let mut clause = packages.join(";");
            if !includes.is_empty() {
                clause.push_str(&format!(";include:=\"{}\"", includes.join(",")));
            }
            clause.push_str(";version=\"[1.0,2.0)\"");
            if !excludes.is_empty() {
                if quoted {
                    clause.push_str(&format!(";exclude:=\"{}\"", excludes.join(",")));
                } else {
                    clause.push_str(&format!(";exclude:={}", excludes[0]));
                }
            }
            clause.push_str(";x-internal:=true");
            clause
        })
}

fn compile_all(globs: &[String]) -> Vec<ClassPattern> {
    globs
        .iter()
        .map(|g| ClassPattern::from_glob(g).unwrap())
        .collect()
}

// =============================================================================
// Equality ignores supply order and compilation identity
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn definition_equality_ignores_order(
        packages in prop::collection::vec(package_strategy(), 1..5),
        includes in prop::collection::vec(glob_strategy(), 0..4),
        excludes in prop::collection::vec(glob_strategy(), 0..4),
    ) {
        let a = ExportDefinition::new(
            packages.iter().cloned(),
            compile_all(&includes),
            compile_all(&excludes),
        );

        let mut packages_rev = packages.clone();
        packages_rev.reverse();
        let mut includes_rev = includes.clone();
        includes_rev.reverse();
        let mut excludes_rev = excludes.clone();
        excludes_rev.reverse();

        let b = ExportDefinition::new(
            packages_rev,
            compile_all(&includes_rev),
            compile_all(&excludes_rev),
        );

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }
}

// =============================================================================
// One definition per clause
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn definition_count_matches_clause_count(
        clauses in prop::collection::vec(clause_strategy(), 1..6),
    ) {
        // a leading package unique to each clause keeps definitions distinct
        let header = clauses
            .iter()
            .enumerate()
            .map(|(i, clause)| format!("clause{i};{clause}"))
            .collect::<Vec<_>>()
            .join(",");
        let definitions = parse_header(&header).unwrap();

        prop_assert_eq!(definitions.len(), clauses.len());
    }
}

// =============================================================================
// Parsing is deterministic
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn parsing_is_deterministic(input in "[a-z.;,:=\"\\\\*A-Z ]{0,40}") {
        let first = parse_header(&input);
        let second = parse_header(&input);
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Errors point inside the input or at its end
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn error_index_is_within_bounds(input in "[a-z.;,:=\"\\\\*A-Z -]{0,40}") {
        if let Err(e) = parse_header(&input) {
            prop_assert!(e.index() <= input.chars().count());
            prop_assert_eq!(e.input(), input.as_str());
        }
    }
}
