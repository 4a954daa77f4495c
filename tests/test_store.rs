use phonebook::store::{FieldOrder, InMemoryBackend, StoreBackend, StoreBuilder};
use phonebook::{LoadReport, PhoneBook, PhonebookErrorType, Record, load_file, save_file};
use pretty_assertions::assert_eq;
use std::fs;

fn sample_book() -> PhoneBook {
    let mut book = PhoneBook::new();
    for (last, first, phone) in [
        ("Smith", "Anna", "111"),
        ("Jones", "Bob", "222"),
        ("Adams", "Cy", "333"),
        ("Taylor", "Dee", "444"),
    ] {
        book.insert(Record::new(last, first, phone)).unwrap();
    }
    book
}

fn ordered(book: &PhoneBook) -> Vec<Record> {
    book.ordered_sequence().cloned().collect()
}

fn structure(book: &PhoneBook) -> Vec<Record> {
    book.structural_sequence().cloned().collect()
}

// ============= Serialization Tests =============
#[test]
fn test_serialize_in_structural_order() {
    let lines = sample_book().serialize();
    assert_eq!(
        lines,
        vec!["ANNA,SMITH,111", "BOB,JONES,222", "CY,ADAMS,333", "DEE,TAYLOR,444"]
    );
}

#[test]
fn test_serialize_empty_book() {
    assert!(PhoneBook::new().serialize().is_empty());
}

#[test]
fn test_deserialize_reads_first_name_first() {
    let mut book = PhoneBook::new();
    let report = book.deserialize(["Bob,Jones,222", "Anna,Smith,111"]);

    assert_eq!(report.loaded, 2);
    let record = book.find("Jones", "Bob").unwrap();
    assert_eq!(record.phone(), "222");
    assert!(book.find("Bob", "Jones").is_none());
}

#[test]
fn test_deserialize_replaces_content() {
    let mut book = sample_book();
    book.deserialize(["Eve,Young,555"]);
    assert_eq!(book.len(), 1);
    assert!(book.find("Smith", "Anna").is_none());
}

#[test]
fn test_deserialize_skips_duplicates() {
    let mut book = PhoneBook::new();
    let report = book.deserialize(["Anna,Smith,111", "ANNA,smith,999", "Bob,Jones,222"]);

    assert_eq!(
        report,
        LoadReport {
            loaded: 2,
            skipped_duplicates: 1,
            skipped_blank: 0,
        }
    );
    // First occurrence wins
    assert_eq!(book.find("Smith", "Anna").unwrap().phone(), "111");
    assert_eq!(book.len(), 2);
}

#[test]
fn test_deserialize_skips_blank_lines_and_carriage_returns() {
    let mut book = PhoneBook::new();
    let report = book.deserialize(vec![
        "Anna,Smith,111\r".to_string(),
        String::new(),
        "   ".to_string(),
        "Bob,Jones,222".to_string(),
    ]);

    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped_blank, 2);
    assert_eq!(report.skipped(), 2);
    assert_eq!(book.find("Smith", "Anna").unwrap().phone(), "111");
}

#[test]
fn test_round_trip_preserves_shape() {
    let book = sample_book();
    let mut restored = PhoneBook::new();
    restored.deserialize(book.serialize());

    assert_eq!(ordered(&restored), ordered(&book));
    assert_eq!(structure(&restored), structure(&book));
    assert_eq!(restored.height(), book.height());
}

// ============= Store Tests =============
#[test]
fn test_in_memory_store_round_trip() {
    let book = sample_book();
    let mut store = StoreBuilder::in_memory().build();
    assert!(!store.exists());

    assert_eq!(store.save(&book).unwrap(), 4);
    assert!(store.exists());

    let mut restored = PhoneBook::new();
    let report = store.load(&mut restored).unwrap();
    assert_eq!(report.loaded, 4);
    assert_eq!(structure(&restored), structure(&book));
}

#[test]
fn test_load_missing_store_leaves_book_untouched() {
    let store = StoreBuilder::in_memory().build();
    let mut book = sample_book();

    let err = store.load(&mut book).unwrap_err();
    assert_eq!(*err.kind(), PhonebookErrorType::StoreMissing);
    assert_eq!(book.len(), 4);
    assert!(book.contains("Smith", "Anna"));
}

#[test]
fn test_save_empty_book_keeps_store() {
    let backend = InMemoryBackend::with_lines(["Anna,Smith,111"]);
    let mut store = StoreBuilder::in_memory().with_backend(backend).build();

    assert_eq!(store.save(&PhoneBook::new()).unwrap(), 0);
    assert_eq!(store.backend().lines().unwrap(), ["Anna,Smith,111"]);
}

#[test]
fn test_last_first_field_order() {
    let mut store = StoreBuilder::in_memory()
        .with_field_order(FieldOrder::LastFirstPhone)
        .build();
    assert_eq!(store.field_order(), FieldOrder::LastFirstPhone);

    store.save(&sample_book()).unwrap();
    let backend = store.into_backend();
    assert_eq!(backend.lines().unwrap()[0], "SMITH,ANNA,111");

    let store = StoreBuilder::in_memory()
        .with_backend(backend)
        .with_field_order(FieldOrder::LastFirstPhone)
        .build();
    let mut book = PhoneBook::new();
    store.load(&mut book).unwrap();
    assert_eq!(book.find("Smith", "Anna").unwrap().phone(), "111");
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phonebook.txt");
    let book = sample_book();

    let mut store = StoreBuilder::for_file(&path).build();
    assert!(!store.exists());
    store.save(&book).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert_eq!(raw, "ANNA,SMITH,111\nBOB,JONES,222\nCY,ADAMS,333\nDEE,TAYLOR,444\n");

    let mut restored = PhoneBook::new();
    store.load(&mut restored).unwrap();
    assert_eq!(structure(&restored), structure(&book));
}

#[test]
fn test_file_store_save_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phonebook.txt");
    fs::write(&path, "Old,Entry,000\nOther,Entry,001\nThird,Entry,002\n").unwrap();

    let mut book = PhoneBook::new();
    book.insert(Record::new("Young", "Eve", "555")).unwrap();
    StoreBuilder::for_file(&path).build().save(&book).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "EVE,YOUNG,555\n");
}

#[test]
fn test_file_store_reads_hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phonebook.txt");
    fs::write(&path, "anna,smith,111\r\n\r\nbob,jones\nanna,Smith,999\n").unwrap();

    let mut book = PhoneBook::new();
    let report = StoreBuilder::for_file(&path).build().load(&mut book).unwrap();

    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped_blank, 1);
    assert_eq!(report.skipped_duplicates, 1);
    assert_eq!(book.find("Jones", "Bob").unwrap().phone(), "");
}

#[test]
fn test_file_store_create_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("phonebook.txt");

    let mut store = StoreBuilder::for_file(&path).with_create_dirs().build();
    store.save(&sample_book()).unwrap();
    assert!(store.backend().exists());
    assert_eq!(store.backend().path(), path.as_path());
}

// ============= Quick API Tests =============
#[test]
fn test_quick_api_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phonebook.txt");
    let book = sample_book();

    assert_eq!(save_file(&book, &path).unwrap(), 4);
    let restored = load_file(&path).unwrap();
    assert_eq!(ordered(&restored), ordered(&book));
}

#[test]
fn test_quick_api_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(dir.path().join("absent.txt")).unwrap_err();
    assert_eq!(*err.kind(), PhonebookErrorType::StoreMissing);
    assert!(err.to_string().starts_with("No saved phonebook found"));
}

#[test]
fn test_quick_api_empty_save_does_not_create_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phonebook.txt");
    assert_eq!(save_file(&PhoneBook::new(), &path).unwrap(), 0);
    assert!(!path.exists());
}
