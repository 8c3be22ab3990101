use voicepick_inventory::{InventoryRecord, InventoryTable};

use crate::intent::Intent;

pub const NOT_RECOGNIZED: &str = "Command not recognized.";

/// Resolve an intent against the table and format the answer.
///
/// Read-only with respect to `table`; the same intent against the same table
/// always yields the same text. Misses are answered, never raised.
pub fn respond(intent: &Intent, table: &InventoryTable) -> String {
    match intent {
        Intent::DescribeProduct { subject } => match table.find_by_name(subject) {
            Some(record) => describe(record),
            None => format!("Product {subject} not found."),
        },
        Intent::LocateProduct { subject } => match table.find_by_name(subject) {
            Some(record) => locate(record),
            None => format!("Location for {subject} not found."),
        },
        Intent::Unrecognized => NOT_RECOGNIZED.to_string(),
    }
}

fn describe(record: &InventoryRecord) -> String {
    format!(
        "Product: {}.\nQuantity: {}.\nReplenish Date: {}.",
        record.product_name(),
        record.quantity(),
        record.replenish_date()
    )
}

fn locate(record: &InventoryRecord) -> String {
    format!(
        "{} is stored at {}.",
        record.product_name(),
        record.shelf_location()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::classify;

    fn bolt_table() -> InventoryTable {
        InventoryTable::new(vec![
            InventoryRecord::new("Bolt 5mm", 120, "A-12", "2024-05-01").unwrap(),
        ])
    }

    #[test]
    fn describe_hit_lists_name_quantity_date() {
        let text = respond(&classify("Tell me about bolt 5mm"), &bolt_table());
        assert_eq!(text, "Product: Bolt 5mm.\nQuantity: 120.\nReplenish Date: 2024-05-01.");
    }

    #[test]
    fn describe_miss_echoes_subject() {
        let text = respond(&classify("tell me about Widget A"), &bolt_table());
        assert_eq!(text, "Product Widget A not found.");
    }

    #[test]
    fn locate_hit_uses_stored_name() {
        let text = respond(&classify("where is BOLT 5MM"), &bolt_table());
        assert_eq!(text, "Bolt 5mm is stored at A-12.");
    }

    #[test]
    fn locate_miss_echoes_subject() {
        let text = respond(&classify("where is  Sprocket  "), &bolt_table());
        assert_eq!(text, "Location for Sprocket not found.");
    }

    #[test]
    fn unrecognized_is_fixed_text() {
        assert_eq!(respond(&Intent::Unrecognized, &bolt_table()), NOT_RECOGNIZED);
        assert_eq!(respond(&classify("what time is it"), &bolt_table()), "Command not recognized.");
    }

    #[test]
    fn respond_is_idempotent() {
        let table = bolt_table();
        let intent = classify("tell me about bolt 5mm");
        assert_eq!(respond(&intent, &table), respond(&intent, &table));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_table_misses() {
        let table = InventoryTable::empty();
        let intent = classify("tell me about Widget A");
        assert_eq!(intent, Intent::DescribeProduct { subject: "Widget A".into() });
        assert_eq!(respond(&intent, &table), "Product Widget A not found.");
    }

    #[test]
    fn zero_quantity_is_reported() {
        let table = InventoryTable::new(vec![
            InventoryRecord::new("Hex Nut", 0, "C-01", "").unwrap(),
        ]);
        assert_eq!(
            respond(&classify("tell me about hex nut"), &table),
            "Product: Hex Nut.\nQuantity: 0.\nReplenish Date: ."
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: unknown names always get the exact locate-miss message.
            #[test]
            fn locate_miss_message(name in "[A-Za-z][A-Za-z0-9 ]{0,20}[A-Za-z0-9]") {
                prop_assume!(!name.trim().eq_ignore_ascii_case("bolt 5mm"));
                prop_assume!(!name.to_ascii_lowercase().contains("tell me about "));
                let text = respond(&classify(&format!("where is {name}")), &bolt_table());
                prop_assert_eq!(text, format!("Location for {} not found.", name.trim()));
            }
        }
    }
}
