//! Reporter Tests
//!
//! Tests verify:
//! - Bucket line format and ordering
//! - Collision rate line, including the empty table

use phonebook::report::{write_report, SEPARATOR};
use phonebook::{HashTable, Record};

fn render(table: &HashTable<Record>) -> String {
    let mut out = Vec::new();
    write_report(table, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn sample_table(table_size: usize) -> HashTable<Record> {
    let mut table = HashTable::new(table_size).unwrap();
    for (name, number) in [("Alice", "12345"), ("Bob", "67890"), ("Carol", "555")] {
        table.insert(name, Record::new(name, number));
    }
    table
}

#[test]
fn test_report_empty_table() {
    let table = HashTable::new(16).unwrap();
    assert_eq!(
        render(&table),
        format!("{}\nCollision Rate = 0.00%\n", SEPARATOR)
    );
}

#[test]
fn test_report_reference_size() {
    let table = sample_table(100_000);
    let expected = concat!(
        "15143: |Alice, 12345| -> \n",
        "48530: |Carol, 555| -> \n",
        "90900: |Bob, 67890| -> \n",
        "########################\n",
        "Collision Rate = 0.00%\n",
    );
    assert_eq!(render(&table), expected);
}

#[test]
fn test_report_with_collisions() {
    let table = sample_table(2);
    let expected = concat!(
        "0: |Carol, 555| -> |Bob, 67890| -> \n",
        "1: |Alice, 12345| -> \n",
        "########################\n",
        "Collision Rate = 50.00%\n",
    );
    assert_eq!(render(&table), expected);
}

#[test]
fn test_report_rate_two_decimals() {
    let mut table = HashTable::new(3).unwrap();
    let names = ["Alice", "Bob", "Carol", "Dave", "Eve", "Frank", "Grace"];
    for name in names {
        table.insert(name, Record::new(name, "0"));
    }

    let stats = table.collision_stats();
    let rate = table.collision_rate().unwrap();
    let report = render(&table);
    assert!(report.ends_with(&format!("Collision Rate = {:.2}%\n", rate)));
    assert_eq!(stats.occupied(), report.lines().count() - 2);
}
