#[cfg(test)]
mod tests {
    use crate::parser::{Dialect, KnownNumbers, ParserRegistry, Update};
    use crate::table::{PriceTable, TableConfig, TableError};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    // ========================================================================
    // Manual Entry Tests
    // ========================================================================

    #[test]
    fn test_add_entry_accumulates() {
        let mut table = PriceTable::standard();
        assert_eq!(table.add_entry("15", 50.0).unwrap(), 50.0);
        assert_eq!(table.add_entry("15", 25.5).unwrap(), 75.5);
        assert_eq!(table.price("15"), Some(75.5));
        assert_eq!(table.history().len(), 2);
    }

    #[test]
    fn test_add_entry_keeps_width() {
        let mut table = PriceTable::standard();
        table.add_entry("000", 10.0).unwrap();
        assert_eq!(table.price("000"), Some(10.0));
        assert_eq!(table.price("00"), None);
        assert_eq!(table.price("0000"), None);
    }

    #[test]
    fn test_add_entry_rejects_invalid_input() {
        let mut table = PriceTable::standard();
        assert_eq!(
            table.add_entry("123", 5.0),
            Err(TableError::InvalidNumber("123".to_string()))
        );
        assert_eq!(
            table.add_entry("7", 5.0),
            Err(TableError::InvalidNumber("7".to_string()))
        );
        assert!(matches!(
            table.add_entry("07", f64::NAN),
            Err(TableError::InvalidPrice(_))
        ));
        assert!(matches!(
            table.add_entry("07", f64::INFINITY),
            Err(TableError::InvalidPrice(_))
        ));
        assert!(table.history().is_empty());
    }

    #[test]
    fn test_add_entry_accepts_negative_correction() {
        let mut table = PriceTable::standard();
        table.add_entry("64", 50.0).unwrap();
        assert_eq!(table.add_entry("64", -20.0).unwrap(), 30.0);
        assert_eq!(table.add_entry("65", -5.0).unwrap(), -5.0);
        assert_eq!(table.history().len(), 3);
    }

    #[test]
    fn test_add_entry_not_in_custom_table() {
        let mut table = PriceTable::from_numbers(["10", "20"]);
        assert_eq!(
            table.add_entry("30", 5.0),
            Err(TableError::NotInTable("30".to_string()))
        );
    }

    #[test]
    fn test_undo_last_restores_previous_value() {
        let mut table = PriceTable::standard();
        table.add_entry("42", 10.0).unwrap();
        table.add_entry("42", 5.0).unwrap();

        let entry = table.undo_last().unwrap();
        assert_eq!(entry.next, 15.0);
        assert_eq!(table.price("42"), Some(10.0));

        table.undo_last().unwrap();
        assert_eq!(table.price("42"), None);
        assert_eq!(table.undo_last(), Err(TableError::NothingToUndo));
    }

    // ========================================================================
    // Message Update Tests
    // ========================================================================

    #[test]
    fn test_apply_updates_accumulates_and_skips_unknown() {
        let mut table = PriceTable::standard();
        table.add_entry("87", 10.0).unwrap();

        let updates = vec![
            Update::new("87", 50.0),
            Update::new("87", 5.0),
            Update::new("123", 40.0),
        ];
        assert_eq!(table.apply_updates(&updates), 2);
        assert_eq!(table.price("87"), Some(65.0));
    }

    #[test]
    fn test_undo_message_restores_snapshot() {
        let mut table = PriceTable::standard();
        table.add_entry("10", 1.0).unwrap();
        table.apply_updates(&[Update::new("10", 4.0), Update::new("20", 2.0)]);

        table.undo_message().unwrap();
        assert_eq!(table.price("10"), Some(1.0));
        assert_eq!(table.price("20"), None);
        assert!(!table.has_message_snapshot());
        assert_eq!(table.undo_message(), Err(TableError::NoMessageToUndo));
    }

    #[test]
    fn test_values_kept_to_cents() {
        let mut table = PriceTable::standard();
        table.apply_updates(&[Update::new("01", 0.1), Update::new("01", 0.2)]);
        assert_eq!(table.price("01"), Some(0.3));
    }

    #[test]
    fn test_reset_clears_values_and_history() {
        let mut table = PriceTable::standard();
        table.add_entry("11", 3.0).unwrap();
        table.reset();
        assert_eq!(table.filled().count(), 0);
        assert!(table.history().is_empty());
    }

    #[test]
    fn test_table_is_known_numbers() {
        let table = PriceTable::standard();
        assert!(table.contains("07"));
        assert!(table.contains("777"));
        assert!(!table.contains("778"));
    }

    // ========================================================================
    // Text Representation Tests
    // ========================================================================

    #[test]
    fn test_to_text_format() {
        let mut table = PriceTable::standard();
        table.add_entry("49", 50.0).unwrap();
        table.add_entry("25", 100.0).unwrap();
        assert_eq!(table.to_text(), r#""25":100.00; "49":50.00"#);
    }

    #[test]
    fn test_to_text_parses_back_as_json_dialect() {
        let mut table = PriceTable::standard();
        table.add_entry("05", 12.5).unwrap();
        table.add_entry("555", 40.0).unwrap();
        table.add_entry("5555", 7.0).unwrap();

        let registry = ParserRegistry::new();
        let result = registry.parse(&table.to_text(), &table).unwrap();
        assert_eq!(result.dialect, Dialect::Json);

        let mut copy = PriceTable::standard();
        copy.apply_updates(&result.updates);
        assert_eq!(copy.to_text(), table.to_text());
    }

    // ========================================================================
    // Settlement Tests
    // ========================================================================

    #[test]
    fn test_grand_total_and_commission() {
        let mut table = PriceTable::standard();
        table.add_entry("10", 100.0).unwrap();
        table.add_entry("999", 50.0).unwrap();

        let config = TableConfig::default();
        assert_close(table.grand_total(), 150.0);
        assert_close(table.commission(&config), 15.0);
    }

    #[test]
    fn test_settle_open_number_and_pools() {
        let mut table = PriceTable::standard();
        table.add_entry("37", 10.0).unwrap();
        table.add_entry("777", 11.0).unwrap();
        table.add_entry("3333", 22.0).unwrap();
        table.add_entry("333", 5.0).unwrap();
        table.add_entry("12", 100.0).unwrap();

        let settlement = table.settle(Some("37"), &TableConfig::default());
        let expected_open = 10.0 * 90.0 + 11.0 * 9.090909 + 22.0 * 9.090909;

        assert_eq!(settlement.open.as_deref(), Some("37"));
        assert_close(settlement.grand_total, 148.0);
        assert_close(settlement.open_price, expected_open);
        assert_close(settlement.final_total, 148.0 - expected_open);
    }

    #[test]
    fn test_settle_pads_open_number() {
        let mut table = PriceTable::standard();
        table.add_entry("07", 2.0).unwrap();

        let settlement = table.settle(Some("7"), &TableConfig::default());
        assert_eq!(settlement.open.as_deref(), Some("07"));
        assert_close(settlement.open_price, 180.0);
    }

    #[test]
    fn test_settle_without_open_number() {
        let mut table = PriceTable::standard();
        table.add_entry("777", 11.0).unwrap();

        let none = table.settle(None, &TableConfig::default());
        assert_eq!(none.open, None);
        assert_close(none.open_price, 0.0);
        assert_close(none.final_total, 11.0);

        let outside = table.settle(Some("123"), &TableConfig::default());
        assert_eq!(outside.open, None);
        assert_close(outside.open_price, 0.0);
    }

    #[test]
    fn test_settle_blank_open_number_pays_nothing() {
        let mut table = PriceTable::standard();
        table.add_entry("00", 1.0).unwrap();

        let settlement = table.settle(Some(""), &TableConfig::default());
        assert_eq!(settlement.open, None);
        assert_close(settlement.open_price, 0.0);
        assert_close(settlement.final_total, 1.0);
    }

    #[test]
    fn test_settle_reads_open_number_as_whole_number() {
        let mut table = PriceTable::standard();
        table.add_entry("07", 2.0).unwrap();

        let settlement = table.settle(Some("007"), &TableConfig::default());
        assert_eq!(settlement.open.as_deref(), Some("07"));
        assert_close(settlement.open_price, 180.0);
    }

    #[test]
    fn test_custom_config() {
        let mut table = PriceTable::standard();
        table.add_entry("50", 10.0).unwrap();

        let config = TableConfig::default()
            .commission_rate(0.05)
            .open_multiplier(80.0);
        let settlement = table.settle(Some("50"), &config);
        assert_close(settlement.commission, 0.5);
        assert_close(settlement.open_price, 800.0);
    }
}
