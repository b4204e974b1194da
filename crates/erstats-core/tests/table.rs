use erstats_core::table::{Cell, Record, Table};

struct Clinic {
    name: &'static str,
    city: &'static str,
    score: u32,
}

impl Record for Clinic {
    const COLUMNS: &'static [&'static str] = &["Clinic", "City", "Score"];

    fn cells(&self) -> Vec<Cell> {
        vec![self.name.into(), self.city.into(), self.score.into()]
    }
}

#[test]
fn records_project_in_definition_order() {
    let table = Table::from_records(
        "clinics",
        &[
            Clinic { name: "B", city: "Cebu", score: 70 },
            Clinic { name: "A", city: "Davao", score: 90 },
        ],
    );

    assert_eq!(table.columns, ["Clinic", "City", "Score"]);
    let names: Vec<String> = table
        .column("Clinic")
        .unwrap()
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(names, ["B", "A"]);
    assert!(table.column("Missing").is_none());
    assert!(table.check_schema().is_empty());
}

#[test]
fn schema_check_flags_short_rows_and_blank_fields() {
    let table = Table {
        id: "clinics".to_string(),
        columns: vec!["Clinic".into(), "City".into(), "Score".into()],
        rows: vec![
            vec![Cell::text("A"), Cell::text("Cebu"), Cell::Number(1)],
            vec![Cell::text("B"), Cell::Number(2)],
            vec![Cell::text("C"), Cell::text("  "), Cell::Number(3)],
        ],
    };

    let violations = table.check_schema();
    assert_eq!(violations.len(), 2);

    assert_eq!(violations[0].row, 1);
    assert_eq!(violations[0].column, None);
    assert!(violations[0].to_string().contains("has 2 cells"));

    assert_eq!(violations[1].row, 2);
    assert_eq!(violations[1].column.as_deref(), Some("City"));
}

#[test]
fn cells_display_and_convert() {
    assert_eq!(Cell::Number(14200).to_string(), "14200");
    assert_eq!(Cell::Decimal(2.5).to_string(), "2.5");
    assert_eq!(Cell::text("Manila").to_string(), "Manila");

    assert_eq!(Cell::Number(7).as_f64(), Some(7.0));
    assert_eq!(Cell::text("7").as_f64(), None);
    assert!(Cell::text("").is_blank());
    assert!(!Cell::Number(0).is_blank());

    let json = serde_json::to_string(&vec![Cell::Number(1), Cell::text("x")]).unwrap();
    assert_eq!(json, r#"[1,"x"]"#);
}
