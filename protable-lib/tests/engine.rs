//! Tests for the table query engine.

use protable_lib::model::{Record, Value};
use protable_lib::query::Direction;
use protable_lib::schema::{Column, FilterItem, FilterSpec, SortOption, TableSchema};
use protable_lib::{PipelineOrder, ProTable, TableConfig};
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn invoices() -> Vec<Record> {
    vec![
        Record::new().set("id", 1).set("amt", 30).set("status", "paid"),
        Record::new().set("id", 2).set("amt", 10).set("status", "open"),
        Record::new().set("id", 3).set("amt", 20).set("status", "paid"),
    ]
}

fn schema() -> TableSchema {
    TableSchema::new(vec![
        Column::new("id", "#"),
        Column::new("amt", "Amount"),
        Column::new("status", "Status"),
    ])
    .with_sort_options(vec![
        SortOption::new("id", "Number"),
        SortOption::new("amt", "Amount"),
    ])
    .with_filters(vec![
        FilterSpec::new("status", "Status")
            .item(FilterItem::new("open", "Open"))
            .item(FilterItem::new("paid", "Paid")),
    ])
}

fn id(record: &Record) -> Option<f64> {
    match record.get("id") {
        Some(Value::Number(n)) => Some(*n),
        _ => None,
    }
}

fn ids(table: &ProTable) -> Vec<f64> {
    table.page().iter().filter_map(id).collect()
}

fn numbered(count: usize) -> Vec<Record> {
    (0..count).map(|i| Record::new().set("id", i)).collect()
}

#[test]
fn test_initial_state() {
    init_logger();
    let table = ProTable::new(invoices(), schema());

    assert_eq!(table.page_index(), 0);
    assert_eq!(table.page_size(), 100);
    assert_eq!(table.page_size_options(), &[25, 50, 100]);
    assert_eq!(table.sort(), None);
    assert_eq!(table.state().direction(), Direction::Desc);
    assert!(table.state().filters().is_empty());
    assert_eq!(ids(&table), vec![1.0, 2.0, 3.0]);
    assert_eq!(table.filtered_count(), 3);
}

#[test]
fn test_sort_ascending_first_page() {
    init_logger();
    let mut table = ProTable::new(invoices(), schema());
    table.set_page_size(2);
    table.set_sort_field("amt");
    let page = table.set_sort_direction(Direction::Asc);

    assert_eq!(page.len(), 2);
    assert_eq!(page.total_count(), 3);
    assert_eq!(page.indices(), &[1, 2]);
    assert_eq!(ids(&table), vec![2.0, 3.0]);
}

#[test]
fn test_filter_scenario() {
    init_logger();
    let mut table = ProTable::new(invoices(), schema());
    let page = table.set_filter("status", "open");

    assert_eq!(page.total_count(), 1);
    assert_eq!(page.len(), 1);
    assert_eq!(page.get(0).and_then(id), Some(2.0));
}

#[test]
fn test_filter_replaces_previous_value() {
    init_logger();
    let mut table = ProTable::new(invoices(), schema());
    table.set_filter("status", "open");
    table.set_filter("status", "paid");

    assert_eq!(ids(&table), vec![1.0, 3.0]);
    assert_eq!(table.state().filters().len(), 1);
}

#[test]
fn test_clear_filters() {
    init_logger();
    let mut table = ProTable::new(invoices(), schema());
    table.set_filter("status", "open");
    assert_eq!(table.clear_filter("status").total_count(), 3);

    table.set_filter("status", "open");
    table.set_filter("amt", 10);
    assert_eq!(table.filtered_count(), 1);
    assert_eq!(table.clear_filters().total_count(), 3);
}

#[test]
fn test_unknown_filter_key_matches_nothing() {
    init_logger();
    let mut table = ProTable::new(invoices(), schema());
    let page = table.set_filter("currency", "usd");

    assert!(page.is_empty());
    assert_eq!(page.total_count(), 0);
}

#[test]
fn test_filter_keeps_page_index_by_default() {
    init_logger();
    let mut table = ProTable::new(numbered(60), schema());
    table.set_page_size(25);
    table.set_page(2);
    let page = table.set_filter("id", 3);

    assert_eq!(page.page_index(), 2);
    assert!(page.is_empty());
    assert_eq!(page.total_count(), 1);
}

#[test]
fn test_filter_resets_page_index_when_configured() {
    init_logger();
    let config = TableConfig::default().with_reset_page_on_filter(true);
    let mut table = ProTable::with_config(numbered(60), schema(), config).unwrap();
    table.set_page_size(25);
    table.set_page(2);
    let page = table.set_filter("id", 3);

    assert_eq!(page.page_index(), 0);
    assert_eq!(page.len(), 1);
}

#[test]
fn test_page_size_change_resets_page_index() {
    init_logger();
    let mut table = ProTable::new(numbered(120), schema());
    table.set_page(1);
    assert_eq!(table.page().len(), 20);

    let page = table.set_page_size(50);
    assert_eq!(page.page_index(), 0);
    assert_eq!(page.len(), 50);
    assert_eq!(page.page_count(), 3);
}

#[test]
fn test_disallowed_page_size_is_accepted() {
    init_logger();
    let mut table = ProTable::new(numbered(10), schema());

    assert_eq!(table.set_page_size(3).len(), 3);

    let page = table.set_page_size(0);
    assert!(page.is_empty());
    assert_eq!(page.page_count(), 0);
    assert!(!page.has_more());

    for _ in 0..5 {
        table.next_page();
    }
    assert_eq!(table.page_index(), 0);
}

#[test]
fn test_out_of_range_page_is_empty() {
    init_logger();
    let mut table = ProTable::new(invoices(), schema());
    let page = table.set_page(5);

    assert!(page.is_empty());
    assert_eq!(page.total_count(), 3);
    assert_eq!(page.page_index(), 5);
}

#[test]
fn test_next_and_previous_page() {
    init_logger();
    let mut table = ProTable::new(numbered(60), schema());
    table.set_page_size(25);

    assert_eq!(table.next_page().page_index(), 1);
    assert_eq!(table.next_page().page_index(), 2);
    assert_eq!(table.next_page().page_index(), 2);
    assert_eq!(table.page().len(), 10);

    table.set_page(0);
    assert_eq!(table.previous_page().page_index(), 0);
}

#[test]
fn test_toggle_sort() {
    init_logger();
    let mut table = ProTable::new(invoices(), schema());

    table.toggle_sort("amt");
    assert_eq!(ids(&table), vec![2.0, 3.0, 1.0]);

    table.toggle_sort("amt");
    assert_eq!(ids(&table), vec![1.0, 3.0, 2.0]);

    let page = table.toggle_sort("id");
    assert_eq!(page.indices(), &[0, 1, 2]);
    assert_eq!(table.state().direction(), Direction::Asc);
}

#[test]
fn test_sort_field_keeps_direction() {
    init_logger();
    let mut table = ProTable::new(invoices(), schema());
    table.set_sort_field("amt");

    assert_eq!(ids(&table), vec![1.0, 3.0, 2.0]);

    table.toggle_sort_direction();
    assert_eq!(ids(&table), vec![2.0, 3.0, 1.0]);

    table.clear_sort();
    assert_eq!(ids(&table), vec![1.0, 2.0, 3.0]);
    assert_eq!(table.state().direction(), Direction::Asc);
}

#[test]
fn test_sort_spans_page_boundaries() {
    init_logger();
    let records: Vec<Record> = [5, 4, 3, 2, 1]
        .into_iter()
        .map(|n| Record::new().set("id", n))
        .collect();
    let config = TableConfig::default()
        .with_page_size_options(vec![2])
        .with_default_page_size(2)
        .with_default_direction(Direction::Asc);
    let mut table = ProTable::with_config(records, schema(), config).unwrap();

    table.set_sort_field("id");
    assert_eq!(ids(&table), vec![1.0, 2.0]);
    table.set_page(1);
    assert_eq!(ids(&table), vec![3.0, 4.0]);
}

#[test]
fn test_window_then_sort_pipeline() {
    init_logger();
    let records: Vec<Record> = [5, 4, 3, 2, 1]
        .into_iter()
        .map(|n| Record::new().set("id", n))
        .collect();
    let config = TableConfig::default()
        .with_page_size_options(vec![2])
        .with_default_page_size(2)
        .with_default_direction(Direction::Asc)
        .with_pipeline(PipelineOrder::FilterPaginateSort);
    let mut table = ProTable::with_config(records, schema(), config).unwrap();

    table.set_sort_field("id");
    assert_eq!(ids(&table), vec![4.0, 5.0]);
    table.set_page(1);
    assert_eq!(ids(&table), vec![2.0, 3.0]);
    assert_eq!(table.filtered_count(), 5);
}

#[test]
fn test_set_records_recomputes() {
    init_logger();
    let mut table = ProTable::new(invoices(), schema());
    table.set_filter("status", "paid");

    let mut refreshed = invoices();
    refreshed.push(Record::new().set("id", 4).set("amt", 5).set("status", "paid"));
    let page = table.set_records(refreshed);

    assert_eq!(page.total_count(), 3);
    assert_eq!(table.records().len(), 4);
}

#[test]
fn test_dirty_flag_and_revision() {
    init_logger();
    let mut table = ProTable::new(invoices(), schema());
    let initial = table.revision();
    assert!(table.is_dirty());

    table.clear_dirty();
    assert!(!table.is_dirty());

    table.set_page(0);
    assert!(table.is_dirty());
    assert_eq!(table.revision(), initial + 1);
}

#[test]
fn test_filter_panel_toggle() {
    init_logger();
    let mut table = ProTable::new(invoices(), schema());
    let revision = table.revision();

    assert!(!table.filter_panel_open());
    assert!(table.toggle_filter_panel());
    assert!(table.filter_panel_open());
    assert!(!table.toggle_filter_panel());
    assert_eq!(table.revision(), revision);
}

#[test]
fn test_page_cells_use_renderers() {
    init_logger();
    let columns = vec![
        Column::new("id", "#").render_with(|_, _, row| (row + 1).to_string()),
        Column::new("amt", "Amount").render_with(|v, _, _| format!("${}", v)),
        Column::new("status", "Status"),
    ];
    let mut table = ProTable::new(invoices(), TableSchema::new(columns.clone()));
    table.toggle_sort("amt");

    assert_eq!(
        table.page().cells(&columns),
        vec![
            vec!["1", "$10", "open"],
            vec!["2", "$20", "paid"],
            vec!["3", "$30", "paid"],
        ]
    );
}

#[test]
fn test_invalid_config_is_rejected() {
    init_logger();
    let config = TableConfig::default().with_page_size_options(vec![]);
    assert!(ProTable::with_config(invoices(), schema(), config).is_err());
}

#[test]
fn test_records_and_schema_from_json() {
    init_logger();
    let records: Vec<Record> = serde_json::from_str(
        r#"[
            {"id": 1, "amt": 30, "customer": {"name": "Contoso"}},
            {"id": 2, "amt": 10, "status": "open"},
            {"id": 3, "amt": 20}
        ]"#,
    )
    .unwrap();
    let schema: TableSchema = serde_json::from_str(
        r##"{
            "columns": [{"key": "id", "label": "#"}, {"key": "amt", "label": "Amount", "align": "right"}],
            "sort_options": [{"key": "amt", "label": "Amount"}],
            "filters": [{"key": "status", "label": "Status", "items": [{"key": "open", "label": "Open"}]}]
        }"##,
    )
    .unwrap();

    let mut table = ProTable::new(records, schema);
    assert!(table.schema().filter_spec("status").is_some());

    table.set_filter("status", "open");
    assert_eq!(ids(&table), vec![2.0]);
}
