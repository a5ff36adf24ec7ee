//! Property-based tests for the persistent value adapter.
//!
//! These tests verify read-fallback and write/reload round-trips for
//! arbitrary values over both the memory and SQLite media.

use std::rc::Rc;

use biolingua::storage::{DurableStorage, MemoryStorage, PersistentValue, SqliteStorage};
use biolingua::types::history::{ExplanationMode, HistoryEntry, ResultPayload};
use proptest::prelude::*;

fn arb_mode() -> impl Strategy<Value = ExplanationMode> {
    prop_oneof![
        Just(ExplanationMode::Beginner),
        Just(ExplanationMode::Advanced),
        "[A-Z][a-z]{2,12}".prop_map(ExplanationMode::from),
    ]
}

fn arb_payload() -> impl Strategy<Value = ResultPayload> {
    (
        proptest::option::of(".{0,40}"),
        proptest::option::of("[a-zA-Z ]{1,20}"),
        proptest::option::of(".{0,60}"),
        proptest::option::of(".{0,80}"),
    )
        .prop_map(|(english_sentence, english_term, definition, explanation)| ResultPayload {
            english_sentence,
            english_term,
            definition,
            explanation,
        })
}

fn arb_entry() -> impl Strategy<Value = HistoryEntry> {
    (
        "[a-z0-9]{9}",
        0i64..4_102_444_800_000,
        "[a-zA-ZçğıöşüÇĞİÖŞÜ ]{1,30}",
        arb_mode(),
        arb_payload(),
    )
        .prop_map(|(id, timestamp, query_input, mode, results)| HistoryEntry {
            id,
            timestamp,
            query_input,
            mode,
            results,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// A fresh key always yields the supplied fallback.
    #[test]
    fn fresh_key_yields_fallback(
        key in "[a-zA-Z.]{1,20}",
        fallback in proptest::collection::vec(".{0,10}", 0..5),
    ) {
        let storage: Rc<dyn DurableStorage> = Rc::new(MemoryStorage::new());
        let value = PersistentValue::open(storage, key, fallback.clone());
        prop_assert_eq!(value.get(), &fallback);
    }

    /// A written history log reloads deep-equal, whatever fallback the reader passes.
    #[test]
    fn history_roundtrips_through_memory(
        log in proptest::collection::vec(arb_entry(), 0..12),
        other in proptest::collection::vec(arb_entry(), 0..3),
    ) {
        let storage: Rc<dyn DurableStorage> = Rc::new(MemoryStorage::new());
        let mut writer = PersistentValue::new(storage.clone(), "bioLinguaHistory", Vec::new());
        writer.set(log.clone());

        let reader = PersistentValue::open(storage, "bioLinguaHistory", other);
        prop_assert_eq!(reader.get(), &log);
    }

    /// Same round-trip over SQLite, with free-form strings.
    #[test]
    fn strings_roundtrip_through_sqlite(
        values in proptest::collection::vec(any::<String>(), 0..8),
    ) {
        let storage: Rc<dyn DurableStorage> =
            Rc::new(SqliteStorage::open_in_memory().expect("in-memory sqlite"));
        let mut writer = PersistentValue::new(storage.clone(), "k", Vec::<String>::new());
        writer.set(values.clone());

        let reader = PersistentValue::open(storage, "k", vec!["fallback".to_string()]);
        prop_assert_eq!(reader.get(), &values);
    }
}
