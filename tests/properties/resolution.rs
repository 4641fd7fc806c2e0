//! Property tests for resolution through the library API.

use std::collections::BTreeSet;
use std::rc::Rc;

use proptest::prelude::*;
use tempfile::tempdir;

use kiln::domain::ports::ClassResolver;
use kiln::infrastructure::{ParentChain, PathResourceFinder};
use kiln::{CollectingHandler, Compiler, DeclFrontend, SessionOptions};

fn class_names() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set(
        proptest::string::string_regex("[A-Z][a-z]{0,6}").unwrap(),
        1..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every class in a reference ring is compiled exactly once and
    /// gets exactly one artifact, however the ring is shaped.
    #[test]
    fn property_rings_compile_each_class_once(names in class_names()) {
        let dir = tempdir().unwrap();
        let names: Vec<&String> = names.iter().collect();
        for (i, name) in names.iter().enumerate() {
            let next = names[(i + 1) % names.len()];
            std::fs::write(
                dir.path().join(format!("{}.src", name)),
                format!("class {} uses {};", name, next),
            )
            .unwrap();
        }
        let compiler = Compiler::new(
            SessionOptions::default(),
            Rc::new(DeclFrontend::new()),
            Box::new(PathResourceFinder::new(vec![dir.path().to_path_buf()])),
            Box::new(ParentChain::default()),
        );

        let entry = dir.path().join(format!("{}.src", names[0]));
        let outcome = compiler.compile(&[entry], &mut CollectingHandler::new()).unwrap();

        prop_assert!(outcome.succeeded());
        prop_assert_eq!(outcome.units_compiled, names.len());
        prop_assert_eq!(outcome.artifacts.len(), names.len());
        let unique: BTreeSet<_> = outcome.artifacts.iter().collect();
        prop_assert_eq!(unique.len(), names.len());
    }

    /// PROPERTY: resolving again returns the very same representation.
    #[test]
    fn property_resolution_is_idempotent(names in class_names()) {
        let dir = tempdir().unwrap();
        for name in &names {
            std::fs::write(dir.path().join(format!("{}.src", name)), format!("class {};", name))
                .unwrap();
        }
        let compiler = Compiler::new(
            SessionOptions::default(),
            Rc::new(DeclFrontend::new()),
            Box::new(PathResourceFinder::new(vec![dir.path().to_path_buf()])),
            Box::new(ParentChain::default()),
        );
        let resolver = compiler.resolver();

        for name in &names {
            let first = resolver.resolve(name).unwrap().unwrap();
            let second = resolver.resolve(name).unwrap().unwrap();
            prop_assert!(Rc::ptr_eq(&first, &second));
        }
        prop_assert_eq!(compiler.session().unit_count(), names.len());
    }
}
