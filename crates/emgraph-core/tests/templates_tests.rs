use emgraph_core::model::{InsertStatement, RelationKind};
use emgraph_core::templates::{EntityTemplate, TemplateError};
use emgraph_core::{ClassKind, Literal, Record, RelationshipDescriptor, TemplateRegistry};
use serde_json::{json, Value};

type Rendered = (InsertStatement, Vec<RelationshipDescriptor>);

fn render(value: Value) -> Result<Rendered, TemplateError> {
    let record = Record::from_value(value)?;
    let registry = TemplateRegistry::new();
    let template = registry.template_for(record.class_kind()).unwrap();
    let mut staged = Vec::new();
    let statement = template.render(&record, &mut staged)?;
    Ok((statement, staged))
}

fn element_definition() -> Value {
    json!({
        "classKind": "ElementDefinition",
        "iid": "E1",
        "revisionNumber": 3,
        "name": "Battery \"pack\"",
        "shortName": "BAT",
        "owner": "D1",
        "parameter": ["P1", "P2"],
        "category": [],
        "containedElement": [],
        "alias": [],
        "definition": [],
        "hyperLink": [],
        "parameterGroup": [],
        "referencedElement": []
    })
}

#[test]
fn test_element_definition_statement() {
    let (statement, _) = render(element_definition()).unwrap();

    assert_eq!(statement.class, ClassKind::ElementDefinition);
    assert_eq!(statement.iid, "E1");
    assert_eq!(statement.attribute("classKind"), Some(&Literal::text("ElementDefinition")));
    assert_eq!(statement.attribute("revisionNumber"), Some(&Literal::Number(3.0)));
    assert_eq!(statement.attribute("name"), Some(&Literal::text("Battery pack")));
    assert_eq!(statement.attribute("shortName"), Some(&Literal::text("BAT")));
    assert!(!statement.has_attribute("owner"));
}

#[test]
fn test_element_definition_descriptors() {
    let (_, staged) = render(element_definition()).unwrap();

    assert_eq!(staged.len(), 3);
    let labels: Vec<&str> = staged.iter().map(|d| d.relationship.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Containement_parameter", "Containement_parameter", "Reference_owner"]
    );

    let owner = staged.iter().find(|d| d.relationship == "Reference_owner").unwrap();
    assert_eq!(owner.kind(), Some(RelationKind::Reference));
    assert_eq!(owner.role1, "refers_owner");
    assert_eq!(owner.class1, "ElementDefinition");
    assert_eq!(owner.player1, "E1");
    assert_eq!(owner.role2, "isrefered_owner");
    assert_eq!(owner.class2, "DomainOfExpertise");
    assert_eq!(owner.player2, "D1");

    let players: Vec<&str> = staged
        .iter()
        .filter(|d| d.relationship == "Containement_parameter")
        .map(|d| d.player2.as_str())
        .collect();
    assert_eq!(players, vec!["P1", "P2"]);
}

#[test]
fn test_parameter_flags_and_references() {
    let (statement, staged) = render(json!({
        "classKind": "Parameter",
        "iid": "P1",
        "revisionNumber": 1,
        "allowDifferentOwnerOfOverride": false,
        "expectsOverride": false,
        "isOptionDependent": true,
        "owner": "D1",
        "parameterType": "T1",
        "scale": "S1",
        "stateDependence": null,
        "group": null,
        "valueSet": ["VS1", "VS2"],
        "parameterSubscription": []
    }))
    .unwrap();

    assert_eq!(statement.attribute("isOptionDependent"), Some(&Literal::Bool(true)));
    assert_eq!(statement.attribute("expectsOverride"), Some(&Literal::Bool(false)));

    let mut labels: Vec<&str> = staged.iter().map(|d| d.relationship.as_str()).collect();
    labels.sort();
    assert_eq!(
        labels,
        vec![
            "Containement_valueSet",
            "Containement_valueSet",
            "Reference_owner",
            "Reference_parameterType",
            "Reference_scale",
        ]
    );
    let scale = staged.iter().find(|d| d.relationship == "Reference_scale").unwrap();
    assert_eq!(scale.class2, "MeasurementScale");
}

#[test]
fn test_value_set_published_is_sanitized() {
    let (statement, staged) = render(json!({
        "classKind": "ParameterValueSet",
        "iid": "VS1",
        "revisionNumber": 1,
        "valueSwitch": "MANUAL",
        "published": "[\"2.5\"]",
        "formula": "[\"-\"]",
        "computed": "[\"-\"]",
        "manual": "[\"2.5\"]",
        "reference": "[\"-\"]",
        "actualOption": "O1",
        "actualState": null
    }))
    .unwrap();

    assert_eq!(statement.attribute("published"), Some(&Literal::Number(2.5)));
    assert_eq!(statement.attribute("formula"), Some(&Literal::Null));
    assert_eq!(staged.len(), 1);
    assert_eq!(staged[0].relationship, "Reference_actualOption");
    assert_eq!(staged[0].class2, "Option");
}

#[test]
fn test_missing_required_field() {
    let mut value = element_definition();
    value.as_object_mut().unwrap().remove("shortName");

    let err = render(value).unwrap_err();
    assert_eq!(
        err,
        TemplateError::MissingField {
            class: "ElementDefinition".to_string(),
            iid: "E1".to_string(),
            field: "shortName".to_string(),
        }
    );
}

#[test]
fn test_wrong_field_type() {
    let mut value = element_definition();
    value["parameter"] = json!("P1");

    assert!(matches!(
        render(value),
        Err(TemplateError::InvalidField { ref field, .. }) if field == "parameter"
    ));
}

#[test]
fn test_non_finite_number_is_invalid() {
    let value = json!({
        "classKind": "DecompositionRule",
        "iid": "R1",
        "revisionNumber": 1,
        "name": "Units",
        "shortName": "units",
        "isDeprecated": false,
        "minContained": "NaN",
        "containingCategory": "C1",
        "containedCategory": []
    });

    assert!(matches!(
        render(value),
        Err(TemplateError::InvalidField { ref field, .. }) if field == "minContained"
    ));
}

#[test]
fn test_failed_render_stages_nothing() {
    let record = Record::from_value(json!({
        "classKind": "ElementUsage",
        "iid": "U1",
        "revisionNumber": 1,
        "name": "Battery",
        "shortName": "BAT",
        "interfaceEnd": "NONE",
        "owner": "D1"
    }))
    .unwrap();
    let registry = TemplateRegistry::new();
    let template = registry.template_for_kind(ClassKind::ElementUsage).unwrap();

    let mut staged = Vec::new();
    let err = template.render(&record, &mut staged).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::MissingField { ref field, .. } if field == "elementDefinition"
    ));
    assert!(staged.is_empty());
}

#[test]
fn test_ordered_references_follow_key_order() {
    let (_, staged) = render(json!({
        "classKind": "Iteration",
        "iid": "I1",
        "revisionNumber": 1,
        "option": [{"k": 20, "v": "O2"}, {"k": 10, "v": "O1"}],
        "element": [],
        "iterationSetup": "IS1"
    }))
    .unwrap();

    let options: Vec<&str> = staged
        .iter()
        .filter(|d| d.relationship == "Containement_option")
        .map(|d| d.player2.as_str())
        .collect();
    assert_eq!(options, vec!["O1", "O2"]);
}

#[test]
fn test_required_fields_listed() {
    let registry = TemplateRegistry::new();
    let template = registry.template_for("ParameterValueSet").unwrap();
    let fields = template.required_fields();
    assert!(fields.contains(&"published"));
    assert!(fields.contains(&"valueSwitch"));
    assert!(!fields.contains(&"actualOption"));
}

#[test]
fn test_unknown_class_has_no_template() {
    let registry = TemplateRegistry::new();
    assert!(registry.template_for("Widget").is_none());
    assert!(!registry.can_migrate("Widget"));
    assert!(registry.can_migrate("Parameter"));
    assert_eq!(registry.len(), ClassKind::ALL.len());
}
