//! Static schemas for every migratable class.
//!
//! One file per area of the data model. [`schema_for`] is the single place
//! that maps a class tag to its schema.

mod annotation;
mod element;
mod engineering_model;
mod parameter;
mod parameter_type;
mod reference_data;
mod requirements;
mod scale_unit;
mod site_directory;

use crate::model::ClassKind;

use super::schema::ClassSchema;

pub(crate) fn schema_for(kind: ClassKind) -> &'static ClassSchema {
    match kind {
        ClassKind::ActualFiniteState => &engineering_model::ACTUAL_FINITE_STATE,
        ClassKind::ActualFiniteStateList => &engineering_model::ACTUAL_FINITE_STATE_LIST,
        ClassKind::Alias => &annotation::ALIAS,
        ClassKind::AndExpression => &requirements::AND_EXPRESSION,
        ClassKind::ArrayParameterType => &parameter_type::ARRAY_PARAMETER_TYPE,
        ClassKind::BinaryRelationship => &engineering_model::BINARY_RELATIONSHIP,
        ClassKind::BinaryRelationshipRule => &reference_data::BINARY_RELATIONSHIP_RULE,
        ClassKind::BooleanExpression => &requirements::BOOLEAN_EXPRESSION,
        ClassKind::BooleanParameterType => &parameter_type::BOOLEAN_PARAMETER_TYPE,
        ClassKind::BuiltInRuleVerification => &engineering_model::BUILT_IN_RULE_VERIFICATION,
        ClassKind::Category => &annotation::CATEGORY,
        ClassKind::Citation => &annotation::CITATION,
        ClassKind::CommonFileStore => &engineering_model::COMMON_FILE_STORE,
        ClassKind::CompoundParameterType => &parameter_type::COMPOUND_PARAMETER_TYPE,
        ClassKind::Constant => &reference_data::CONSTANT,
        ClassKind::ConversionBasedUnit => &scale_unit::CONVERSION_BASED_UNIT,
        ClassKind::CyclicRatioScale => &scale_unit::CYCLIC_RATIO_SCALE,
        ClassKind::DateParameterType => &parameter_type::DATE_PARAMETER_TYPE,
        ClassKind::DateTimeParameterType => &parameter_type::DATE_TIME_PARAMETER_TYPE,
        ClassKind::DecompositionRule => &reference_data::DECOMPOSITION_RULE,
        ClassKind::DefinedThing => &annotation::DEFINED_THING,
        ClassKind::Definition => &annotation::DEFINITION,
        ClassKind::DerivedQuantityKind => &parameter_type::DERIVED_QUANTITY_KIND,
        ClassKind::DerivedUnit => &scale_unit::DERIVED_UNIT,
        ClassKind::DomainFileStore => &engineering_model::DOMAIN_FILE_STORE,
        ClassKind::DomainOfExpertise => &site_directory::DOMAIN_OF_EXPERTISE,
        ClassKind::DomainOfExpertiseGroup => &site_directory::DOMAIN_OF_EXPERTISE_GROUP,
        ClassKind::ElementBase => &element::ELEMENT_BASE,
        ClassKind::ElementDefinition => &element::ELEMENT_DEFINITION,
        ClassKind::ElementUsage => &element::ELEMENT_USAGE,
        ClassKind::EmailAddress => &site_directory::EMAIL_ADDRESS,
        ClassKind::EngineeringModel => &engineering_model::ENGINEERING_MODEL,
        ClassKind::EngineeringModelSetup => &site_directory::ENGINEERING_MODEL_SETUP,
        ClassKind::EnumerationParameterType => &parameter_type::ENUMERATION_PARAMETER_TYPE,
        ClassKind::EnumerationValueDefinition => &parameter_type::ENUMERATION_VALUE_DEFINITION,
        ClassKind::ExclusiveOrExpression => &requirements::EXCLUSIVE_OR_EXPRESSION,
        ClassKind::ExternalIdentifierMap => &engineering_model::EXTERNAL_IDENTIFIER_MAP,
        ClassKind::File => &engineering_model::FILE,
        ClassKind::FileRevision => &engineering_model::FILE_REVISION,
        ClassKind::FileStore => &engineering_model::FILE_STORE,
        ClassKind::FileType => &reference_data::FILE_TYPE,
        ClassKind::Folder => &engineering_model::FOLDER,
        ClassKind::Glossary => &annotation::GLOSSARY,
        ClassKind::HyperLink => &annotation::HYPER_LINK,
        ClassKind::IdCorrespondence => &engineering_model::ID_CORRESPONDENCE,
        ClassKind::IntervalScale => &scale_unit::INTERVAL_SCALE,
        ClassKind::Iteration => &element::ITERATION,
        ClassKind::IterationSetup => &site_directory::ITERATION_SETUP,
        ClassKind::LinearConversionUnit => &scale_unit::LINEAR_CONVERSION_UNIT,
        ClassKind::LogarithmicScale => &scale_unit::LOGARITHMIC_SCALE,
        ClassKind::MappingToReferenceScale => &scale_unit::MAPPING_TO_REFERENCE_SCALE,
        ClassKind::MeasurementScale => &scale_unit::MEASUREMENT_SCALE,
        ClassKind::MeasurementUnit => &scale_unit::MEASUREMENT_UNIT,
        ClassKind::ModelLogEntry => &engineering_model::MODEL_LOG_ENTRY,
        ClassKind::ModelReferenceDataLibrary => &reference_data::MODEL_REFERENCE_DATA_LIBRARY,
        ClassKind::MultiRelationship => &engineering_model::MULTI_RELATIONSHIP,
        ClassKind::MultiRelationshipRule => &reference_data::MULTI_RELATIONSHIP_RULE,
        ClassKind::NaturalLanguage => &site_directory::NATURAL_LANGUAGE,
        ClassKind::NestedElement => &element::NESTED_ELEMENT,
        ClassKind::NestedParameter => &element::NESTED_PARAMETER,
        ClassKind::NotExpression => &requirements::NOT_EXPRESSION,
        ClassKind::Option => &element::OPTION,
        ClassKind::OrExpression => &requirements::OR_EXPRESSION,
        ClassKind::OrdinalScale => &scale_unit::ORDINAL_SCALE,
        ClassKind::Organization => &site_directory::ORGANIZATION,
        ClassKind::Parameter => &parameter::PARAMETER,
        ClassKind::ParameterBase => &parameter::PARAMETER_BASE,
        ClassKind::ParameterGroup => &element::PARAMETER_GROUP,
        ClassKind::ParameterOrOverrideBase => &parameter::PARAMETER_OR_OVERRIDE_BASE,
        ClassKind::ParameterOverride => &parameter::PARAMETER_OVERRIDE,
        ClassKind::ParameterOverrideValueSet => &parameter::PARAMETER_OVERRIDE_VALUE_SET,
        ClassKind::ParameterSubscription => &parameter::PARAMETER_SUBSCRIPTION,
        ClassKind::ParameterSubscriptionValueSet => &parameter::PARAMETER_SUBSCRIPTION_VALUE_SET,
        ClassKind::ParameterType => &parameter_type::PARAMETER_TYPE,
        ClassKind::ParameterTypeComponent => &parameter_type::PARAMETER_TYPE_COMPONENT,
        ClassKind::ParameterValueSet => &parameter::PARAMETER_VALUE_SET,
        ClassKind::ParameterValueSetBase => &parameter::PARAMETER_VALUE_SET_BASE,
        ClassKind::ParameterizedCategoryRule => &reference_data::PARAMETERIZED_CATEGORY_RULE,
        ClassKind::ParametricConstraint => &requirements::PARAMETRIC_CONSTRAINT,
        ClassKind::Participant => &site_directory::PARTICIPANT,
        ClassKind::ParticipantPermission => &site_directory::PARTICIPANT_PERMISSION,
        ClassKind::ParticipantRole => &site_directory::PARTICIPANT_ROLE,
        ClassKind::Person => &site_directory::PERSON,
        ClassKind::PersonPermission => &site_directory::PERSON_PERMISSION,
        ClassKind::PersonRole => &site_directory::PERSON_ROLE,
        ClassKind::PossibleFiniteState => &engineering_model::POSSIBLE_FINITE_STATE,
        ClassKind::PossibleFiniteStateList => &engineering_model::POSSIBLE_FINITE_STATE_LIST,
        ClassKind::PrefixedUnit => &scale_unit::PREFIXED_UNIT,
        ClassKind::Publication => &element::PUBLICATION,
        ClassKind::QuantityKind => &parameter_type::QUANTITY_KIND,
        ClassKind::QuantityKindFactor => &parameter_type::QUANTITY_KIND_FACTOR,
        ClassKind::RatioScale => &scale_unit::RATIO_SCALE,
        ClassKind::ReferenceDataLibrary => &reference_data::REFERENCE_DATA_LIBRARY,
        ClassKind::ReferenceSource => &reference_data::REFERENCE_SOURCE,
        ClassKind::ReferencerRule => &reference_data::REFERENCER_RULE,
        ClassKind::RelationalExpression => &requirements::RELATIONAL_EXPRESSION,
        ClassKind::Relationship => &engineering_model::RELATIONSHIP,
        ClassKind::Requirement => &requirements::REQUIREMENT,
        ClassKind::RequirementsContainer => &requirements::REQUIREMENTS_CONTAINER,
        ClassKind::RequirementsGroup => &requirements::REQUIREMENTS_GROUP,
        ClassKind::RequirementsSpecification => &requirements::REQUIREMENTS_SPECIFICATION,
        ClassKind::Rule => &reference_data::RULE,
        ClassKind::RuleVerification => &engineering_model::RULE_VERIFICATION,
        ClassKind::RuleVerificationList => &engineering_model::RULE_VERIFICATION_LIST,
        ClassKind::RuleViolation => &engineering_model::RULE_VIOLATION,
        ClassKind::ScalarParameterType => &parameter_type::SCALAR_PARAMETER_TYPE,
        ClassKind::ScaleReferenceQuantityValue => &scale_unit::SCALE_REFERENCE_QUANTITY_VALUE,
        ClassKind::ScaleValueDefinition => &scale_unit::SCALE_VALUE_DEFINITION,
        ClassKind::SimpleParameterValue => &requirements::SIMPLE_PARAMETER_VALUE,
        ClassKind::SimpleParameterizableThing => &requirements::SIMPLE_PARAMETERIZABLE_THING,
        ClassKind::SimpleQuantityKind => &parameter_type::SIMPLE_QUANTITY_KIND,
        ClassKind::SimpleUnit => &scale_unit::SIMPLE_UNIT,
        ClassKind::SiteDirectory => &site_directory::SITE_DIRECTORY,
        ClassKind::SiteLogEntry => &site_directory::SITE_LOG_ENTRY,
        ClassKind::SiteReferenceDataLibrary => &reference_data::SITE_REFERENCE_DATA_LIBRARY,
        ClassKind::SpecializedQuantityKind => &parameter_type::SPECIALIZED_QUANTITY_KIND,
        ClassKind::TelephoneNumber => &site_directory::TELEPHONE_NUMBER,
        ClassKind::Term => &annotation::TERM,
        ClassKind::TextParameterType => &parameter_type::TEXT_PARAMETER_TYPE,
        ClassKind::Thing => &annotation::THING,
        ClassKind::TimeOfDayParameterType => &parameter_type::TIME_OF_DAY_PARAMETER_TYPE,
        ClassKind::TopContainer => &site_directory::TOP_CONTAINER,
        ClassKind::UnitFactor => &scale_unit::UNIT_FACTOR,
        ClassKind::UnitPrefix => &scale_unit::UNIT_PREFIX,
        ClassKind::UserPreference => &site_directory::USER_PREFERENCE,
        ClassKind::UserRuleVerification => &engineering_model::USER_RULE_VERIFICATION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_its_own_schema() {
        for kind in ClassKind::ALL {
            assert_eq!(schema_for(kind).kind, kind);
        }
    }

    #[test]
    fn test_relation_labels_are_unique_per_class() {
        for kind in ClassKind::ALL {
            let mut labels: Vec<_> = schema_for(kind)
                .relations
                .iter()
                .map(|r| (r.label(), r.target))
                .collect();
            let total = labels.len();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), total, "duplicate relation on {kind}");
        }
    }
}
