use phonebook::model::{Key, Record};
use phonebook::store::FieldOrder;
use pretty_assertions::assert_eq;

// ============= Key Tests =============
#[test]
fn test_key_normalizes_case() {
    let key = Key::new("mcDonald", "aNNa");
    assert_eq!(key.last(), "MCDONALD");
    assert_eq!(key.first(), "ANNA");
    assert_eq!(key, Key::new("MCDONALD", "anna"));
    assert_eq!(key.to_string(), "MCDONALD, ANNA");
}

#[test]
fn test_key_orders_by_last_then_first() {
    let mut keys = vec![
        Key::new("Smith", "Anna"),
        Key::new("Jones", "Bob"),
        Key::new("Smith", "Al"),
        Key::new("Adams", "Zed"),
    ];
    keys.sort();

    let names: Vec<_> = keys.iter().map(|k| k.to_string()).collect();
    assert_eq!(names, ["ADAMS, ZED", "JONES, BOB", "SMITH, AL", "SMITH, ANNA"]);
}

#[test]
fn test_key_prefix_sorts_first() {
    assert!(Key::new("Smith", "") < Key::new("Smith", "A"));
    assert!(Key::new("Sm", "Zed") < Key::new("Smith", "Al"));
}

// ============= Record Tests =============
#[test]
fn test_record_keeps_phone_verbatim() {
    let record = Record::new("smith", "anna", "+1 (555) 010-99");
    assert_eq!(record.last(), "SMITH");
    assert_eq!(record.first(), "ANNA");
    assert_eq!(record.phone(), "+1 (555) 010-99");
    assert_eq!(record.key(), &Key::new("Smith", "Anna"));
}

#[test]
fn test_record_display_as_table_row() {
    let record = Record::new("Smith", "Anna", "111");
    assert_eq!(record.to_string(), "ANNA\t\t\t\tSMITH\t\t\t\t111");
}

// ============= Encode / Decode Tests =============
#[test]
fn test_encode_wire_order() {
    let record = Record::new("Smith", "Anna", "111");
    assert_eq!(record.encode(FieldOrder::FirstLastPhone), "ANNA,SMITH,111");
    assert_eq!(record.encode(FieldOrder::LastFirstPhone), "SMITH,ANNA,111");
}

#[test]
fn test_decode_wire_order() {
    let record = Record::decode("Bob,Jones,222", FieldOrder::FirstLastPhone);
    assert_eq!(record, Record::new("Jones", "Bob", "222"));

    let record = Record::decode("Jones,Bob,222", FieldOrder::LastFirstPhone);
    assert_eq!(record, Record::new("Jones", "Bob", "222"));
}

#[test]
fn test_decode_drops_extra_fields() {
    let record = Record::decode("Anna,Smith,111,ext 4,x", FieldOrder::FirstLastPhone);
    assert_eq!(record.phone(), "111");
    assert_eq!(record.last(), "SMITH");
}

#[test]
fn test_decode_missing_fields_are_empty() {
    let record = Record::decode("Anna,Smith", FieldOrder::FirstLastPhone);
    assert_eq!(record.first(), "ANNA");
    assert_eq!(record.last(), "SMITH");
    assert_eq!(record.phone(), "");

    let record = Record::decode("Anna", FieldOrder::FirstLastPhone);
    assert_eq!(record.first(), "ANNA");
    assert_eq!(record.last(), "");
    assert_eq!(record.phone(), "");
}

#[test]
fn test_comma_in_field_does_not_survive() {
    let record = Record::new("Smith, Jr", "Anna", "111");
    let decoded = Record::decode(&record.encode(FieldOrder::FirstLastPhone), FieldOrder::FirstLastPhone);
    assert_eq!(decoded.last(), "SMITH");
    assert_eq!(decoded.phone(), " JR");
    assert!(decoded != record);
}
