use std::sync::Arc;

use emgraph_core::budget::{BudgetError, ValueSource};
use emgraph_core::config::BudgetConfig;
use emgraph_core::migration::InputFile;
use emgraph_core::{BudgetResolver, BudgetTagger, Manifest, MemoryGraph, MemoryStaging, Migrator};
use serde_json::{json, Value};
use tempfile::TempDir;

const TOLERANCE: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Builds an iteration export with the reference data a mass budget needs.
struct ModelBuilder {
    records: Vec<Value>,
    next: usize,
}

impl ModelBuilder {
    fn new() -> Self {
        let mut builder = Self {
            records: Vec::new(),
            next: 0,
        };
        builder.push(json!({
            "classKind": "SimpleUnit", "iid": "U1", "revisionNumber": 1,
            "name": "unit", "shortName": "u", "isDeprecated": false
        }));
        for (iid, name) in [
            ("S-kg", "kilogram"),
            ("S-g", "gram"),
            ("S-t", "tonne"),
            ("S-lb", "pound"),
            ("S-1", "1"),
            ("S-pct", "percent"),
        ] {
            builder.push(json!({
                "classKind": "RatioScale", "iid": iid, "revisionNumber": 1,
                "name": name, "shortName": name, "numberSet": "REAL_NUMBER_SET",
                "isMinimumInclusive": true, "isMaximumInclusive": true,
                "isDeprecated": false, "unit": "U1"
            }));
        }
        for (iid, name) in [
            ("T-mass", "mass"),
            ("T-qty", "number of items"),
            ("T-margin", "mass margin"),
        ] {
            builder.push(json!({
                "classKind": "SimpleQuantityKind", "iid": iid, "revisionNumber": 1,
                "name": name, "shortName": name, "symbol": name, "isDeprecated": false
            }));
        }
        builder
    }

    fn push(&mut self, record: Value) {
        self.records.push(record);
    }

    fn option(&mut self, iid: &str, name: &str) {
        self.push(json!({
            "classKind": "Option", "iid": iid, "revisionNumber": 1,
            "name": name, "shortName": name
        }));
    }

    fn element(&mut self, iid: &str, name: &str, parameters: &[String]) {
        self.push(json!({
            "classKind": "ElementDefinition", "iid": iid, "revisionNumber": 1,
            "name": name, "shortName": name, "parameter": parameters
        }));
    }

    /// A parameter with one value set per `(published, option)` pair.
    fn parameter(
        &mut self,
        parameter_type: &str,
        scale: &str,
        values: &[(&str, Option<&str>)],
    ) -> String {
        self.next += 1;
        let iid = format!("P{}", self.next);
        let option_dependent = values.iter().any(|(_, option)| option.is_some());

        let mut value_sets = Vec::new();
        for (i, (published, option)) in values.iter().enumerate() {
            let vs = format!("{iid}-VS{i}");
            self.push(json!({
                "classKind": "ParameterValueSet", "iid": vs, "revisionNumber": 1,
                "valueSwitch": "MANUAL",
                "published": format!("[\"{published}\"]"),
                "manual": format!("[\"{published}\"]"),
                "computed": "[\"-\"]", "formula": "[\"-\"]", "reference": "[\"-\"]",
                "actualOption": option
            }));
            value_sets.push(vs);
        }

        self.push(json!({
            "classKind": "Parameter", "iid": iid, "revisionNumber": 1,
            "allowDifferentOwnerOfOverride": false, "expectsOverride": false,
            "isOptionDependent": option_dependent,
            "parameterType": parameter_type, "scale": scale,
            "valueSet": value_sets
        }));
        iid
    }

    async fn migrate(self, dir: &TempDir) -> Arc<MemoryGraph> {
        std::fs::write(
            dir.path().join("iteration.json"),
            Value::Array(self.records).to_string(),
        )
        .unwrap();

        let graph = Arc::new(MemoryGraph::new());
        let mut migrator = Migrator::new(graph.clone(), MemoryStaging::new());
        let report = migrator
            .run(&Manifest::new(vec![InputFile::new(dir.path(), "iteration")]))
            .await
            .unwrap();
        assert!(!report.has_warnings(), "fixture should migrate cleanly");
        graph
    }
}

/// Three elements in kilograms, grams and tonnes.
fn three_elements(model: &mut ModelBuilder) {
    let m1 = model.parameter("T-mass", "S-kg", &[("2.0", None)]);
    let mar1 = model.parameter("T-margin", "S-pct", &[("20", None)]);
    model.element("E1", "Battery", &[m1, mar1]);

    let m2 = model.parameter("T-mass", "S-g", &[("500", None)]);
    let q2 = model.parameter("T-qty", "S-1", &[("4", None)]);
    model.element("E2", "Wheel", &[m2, q2]);

    let m3 = model.parameter("T-mass", "S-t", &[("1", None)]);
    let mar3 = model.parameter("T-margin", "S-pct", &[("0", None)]);
    model.element("E3", "Structure", &[m3, mar3]);
}

#[tokio::test]
async fn test_budget_over_mixed_units() {
    let temp_dir = TempDir::new().unwrap();
    let mut model = ModelBuilder::new();
    model.option("O1", "Baseline");
    three_elements(&mut model);
    let graph = model.migrate(&temp_dir).await;

    let tagging = BudgetTagger::new(graph.clone()).tag(None).await.unwrap();
    assert_eq!(tagging.mass_parameters, 3);
    assert_eq!(tagging.tagged, 3);

    let report = BudgetResolver::new(graph).resolve("O1").await.unwrap();
    assert_eq!(report.display_name(), "Baseline");
    assert_eq!(report.line_items.len(), 3);
    assert!(close(report.total, 1004.8), "total was {}", report.total);
    assert!(close(report.total_with_system_margin, 1105.28));
    assert!(!report.has_warnings());

    let wheel = report
        .line_items
        .iter()
        .find(|item| item.element.as_deref() == Some("Wheel"))
        .unwrap();
    assert_eq!(wheel.quantity.value, 4.0);
    assert_eq!(wheel.quantity.source, ValueSource::Parameter);
    assert_eq!(wheel.margin.value, 20.0);
    assert_eq!(wheel.margin.source, ValueSource::Default);
    assert!(close(wheel.total, 2.4));
}

#[tokio::test]
async fn test_defaults_without_quantity_or_margin() {
    let temp_dir = TempDir::new().unwrap();
    let mut model = ModelBuilder::new();
    model.option("O1", "Baseline");
    let mass = model.parameter("T-mass", "S-kg", &[("10", None)]);
    model.element("E1", "Harness", &[mass]);
    let graph = model.migrate(&temp_dir).await;

    BudgetTagger::new(graph.clone()).tag(None).await.unwrap();
    let report = BudgetResolver::new(graph).resolve("O1").await.unwrap();

    let item = &report.line_items[0];
    assert_eq!(item.quantity.value, 1.0);
    assert_eq!(item.quantity.source, ValueSource::Default);
    assert_eq!(item.margin.value, 20.0);
    assert_eq!(item.margin.source, ValueSource::Default);
    assert!(close(report.total, 12.0));
}

#[tokio::test]
async fn test_option_dependent_quantity() {
    let temp_dir = TempDir::new().unwrap();
    let mut model = ModelBuilder::new();
    model.option("O1", "Two wheels");
    model.option("O2", "Three wheels");
    let mass = model.parameter("T-mass", "S-kg", &[("1.5", None)]);
    let quantity = model.parameter("T-qty", "S-1", &[("2", Some("O1")), ("3", Some("O2"))]);
    let margin = model.parameter("T-margin", "S-pct", &[("0", None)]);
    model.element("E1", "Wheel", &[mass, quantity, margin]);
    let graph = model.migrate(&temp_dir).await;

    BudgetTagger::new(graph.clone()).tag(None).await.unwrap();
    let resolver = BudgetResolver::new(graph);

    let first = resolver.resolve("O1").await.unwrap();
    let second = resolver.resolve("O2").await.unwrap();
    assert!(close(first.total, 3.0));
    assert!(close(second.total, 4.5));
    assert_eq!(first.line_items[0].quantity.source, ValueSource::Parameter);

    assert_eq!(resolver.resolve("O1").await.unwrap(), first);
}

#[tokio::test]
async fn test_missing_option_value_falls_back() {
    let temp_dir = TempDir::new().unwrap();
    let mut model = ModelBuilder::new();
    model.option("O1", "Baseline");
    model.option("O2", "Light");
    let mass = model.parameter("T-mass", "S-kg", &[("5", None)]);
    let quantity = model.parameter("T-qty", "S-1", &[("2", Some("O1"))]);
    model.element("E1", "Tank", &[mass, quantity]);
    let graph = model.migrate(&temp_dir).await;

    BudgetTagger::new(graph.clone()).tag(None).await.unwrap();
    let report = BudgetResolver::new(graph).resolve("O2").await.unwrap();

    let item = &report.line_items[0];
    assert_eq!(item.quantity.value, 1.0);
    assert_eq!(item.quantity.source, ValueSource::OptionFallback);
    assert!(report.has_warnings());
}

#[tokio::test]
async fn test_last_matching_sibling_and_value_set_win() {
    let temp_dir = TempDir::new().unwrap();
    let mut model = ModelBuilder::new();
    model.option("O1", "Baseline");
    let mass = model.parameter("T-mass", "S-kg", &[("1", None)]);
    let quantity = model.parameter("T-qty", "S-1", &[("2", None), ("3", None)]);
    let low = model.parameter("T-margin", "S-pct", &[("10", None)]);
    let high = model.parameter("T-margin", "S-pct", &[("50", None)]);
    model.element("E1", "Thruster", &[mass, quantity, low, high]);
    let graph = model.migrate(&temp_dir).await;

    BudgetTagger::new(graph.clone()).tag(None).await.unwrap();
    let report = BudgetResolver::new(graph).resolve("O1").await.unwrap();

    let item = &report.line_items[0];
    assert_eq!(item.quantity.value, 3.0);
    assert_eq!(item.margin.value, 50.0);
    assert!(close(report.total, 4.5));
}

#[tokio::test]
async fn test_unknown_unit_passes_through() {
    let temp_dir = TempDir::new().unwrap();
    let mut model = ModelBuilder::new();
    model.option("O1", "Baseline");
    let mass = model.parameter("T-mass", "S-lb", &[("10", None)]);
    let margin = model.parameter("T-margin", "S-pct", &[("0", None)]);
    model.element("E1", "Ballast", &[mass, margin]);
    let graph = model.migrate(&temp_dir).await;

    BudgetTagger::new(graph.clone()).tag(None).await.unwrap();
    let report = BudgetResolver::new(graph).resolve("O1").await.unwrap();

    assert!(close(report.total, 10.0));
    assert_eq!(report.unconverted_units.len(), 1);
    assert!(report.unconverted_units[0].contains("pound"));
    assert!(report.has_warnings());
}

#[tokio::test]
async fn test_tagging_respects_option_and_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let mut model = ModelBuilder::new();
    model.option("O1", "Baseline");
    model.option("O2", "Light");
    let shared = model.parameter("T-mass", "S-kg", &[("1", None)]);
    let per_option = model.parameter("T-mass", "S-kg", &[("7", Some("O1")), ("3", Some("O2"))]);
    model.element("E1", "Panel", &[shared, per_option]);
    let graph = model.migrate(&temp_dir).await;

    let tagger = BudgetTagger::new(graph.clone());
    let first = tagger.tag(None).await.unwrap();
    assert_eq!(first.options, 2);
    assert_eq!(first.mass_parameters, 2);
    // Shared value set for both options, one per-option value set each.
    assert_eq!(first.tagged, 4);

    let again = tagger.tag(None).await.unwrap();
    assert_eq!(again.tagged, 0);
    assert_eq!(again.existing, 4);

    let resolver = BudgetResolver::new(graph);
    let reports = resolver.resolve_all().await.unwrap();
    assert_eq!(reports.len(), 2);
    // (1 + 7) * 1.2 and (1 + 3) * 1.2
    assert!(close(reports[0].total, 9.6));
    assert!(close(reports[1].total, 4.8));
}

#[tokio::test]
async fn test_custom_system_margin() {
    let temp_dir = TempDir::new().unwrap();
    let mut model = ModelBuilder::new();
    model.option("O1", "Baseline");
    let mass = model.parameter("T-mass", "S-kg", &[("100", None)]);
    let margin = model.parameter("T-margin", "S-pct", &[("0", None)]);
    model.element("E1", "Frame", &[mass, margin]);
    let graph = model.migrate(&temp_dir).await;

    let config = BudgetConfig {
        system_margin: 25.0,
        ..BudgetConfig::default()
    };
    BudgetTagger::with_config(graph.clone(), config.clone())
        .tag(Some("O1"))
        .await
        .unwrap();
    let report = BudgetResolver::with_config(graph, config)
        .resolve("O1")
        .await
        .unwrap();

    assert!(close(report.total, 100.0));
    assert!(close(report.total_with_system_margin, 125.0));
}

#[tokio::test]
async fn test_resolve_rejects_non_options() {
    let temp_dir = TempDir::new().unwrap();
    let mut model = ModelBuilder::new();
    model.option("O1", "Baseline");
    let graph = model.migrate(&temp_dir).await;
    let resolver = BudgetResolver::new(graph);

    assert!(matches!(
        resolver.resolve("O404").await,
        Err(BudgetError::OptionNotFound(_))
    ));
    assert!(matches!(
        resolver.resolve("U1").await,
        Err(BudgetError::NotAnOption { .. })
    ));
}
