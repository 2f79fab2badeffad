//! Closed set of engineering-model class kinds.
//!
//! Every `classKind` tag the migration understands is a variant here. The
//! hierarchy mirrors ECSS-E-TM-10-25A so that a relationship endpoint typed
//! with an abstract class (`MeasurementScale`, `Thing`, ...) matches entities
//! of any concrete subclass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A class of the engineering data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassKind {
    ActualFiniteState,
    ActualFiniteStateList,
    Alias,
    AndExpression,
    ArrayParameterType,
    BinaryRelationship,
    BinaryRelationshipRule,
    BooleanExpression,
    BooleanParameterType,
    BuiltInRuleVerification,
    Category,
    Citation,
    CommonFileStore,
    CompoundParameterType,
    Constant,
    ConversionBasedUnit,
    CyclicRatioScale,
    DateParameterType,
    DateTimeParameterType,
    DecompositionRule,
    DefinedThing,
    Definition,
    DerivedQuantityKind,
    DerivedUnit,
    DomainFileStore,
    DomainOfExpertise,
    DomainOfExpertiseGroup,
    ElementBase,
    ElementDefinition,
    ElementUsage,
    EmailAddress,
    EngineeringModel,
    EngineeringModelSetup,
    EnumerationParameterType,
    EnumerationValueDefinition,
    ExclusiveOrExpression,
    ExternalIdentifierMap,
    File,
    FileRevision,
    FileStore,
    FileType,
    Folder,
    Glossary,
    HyperLink,
    IdCorrespondence,
    IntervalScale,
    Iteration,
    IterationSetup,
    LinearConversionUnit,
    LogarithmicScale,
    MappingToReferenceScale,
    MeasurementScale,
    MeasurementUnit,
    ModelLogEntry,
    ModelReferenceDataLibrary,
    MultiRelationship,
    MultiRelationshipRule,
    NaturalLanguage,
    NestedElement,
    NestedParameter,
    NotExpression,
    Option,
    OrExpression,
    OrdinalScale,
    Organization,
    Parameter,
    ParameterBase,
    ParameterGroup,
    ParameterOrOverrideBase,
    ParameterOverride,
    ParameterOverrideValueSet,
    ParameterSubscription,
    ParameterSubscriptionValueSet,
    ParameterType,
    ParameterTypeComponent,
    ParameterValueSet,
    ParameterValueSetBase,
    ParameterizedCategoryRule,
    ParametricConstraint,
    Participant,
    ParticipantPermission,
    ParticipantRole,
    Person,
    PersonPermission,
    PersonRole,
    PossibleFiniteState,
    PossibleFiniteStateList,
    PrefixedUnit,
    Publication,
    QuantityKind,
    QuantityKindFactor,
    RatioScale,
    ReferenceDataLibrary,
    ReferenceSource,
    ReferencerRule,
    RelationalExpression,
    Relationship,
    Requirement,
    RequirementsContainer,
    RequirementsGroup,
    RequirementsSpecification,
    Rule,
    RuleVerification,
    RuleVerificationList,
    RuleViolation,
    ScalarParameterType,
    ScaleReferenceQuantityValue,
    ScaleValueDefinition,
    SimpleParameterValue,
    SimpleParameterizableThing,
    SimpleQuantityKind,
    SimpleUnit,
    SiteDirectory,
    SiteLogEntry,
    SiteReferenceDataLibrary,
    SpecializedQuantityKind,
    TelephoneNumber,
    Term,
    TextParameterType,
    Thing,
    TimeOfDayParameterType,
    TopContainer,
    UnitFactor,
    UnitPrefix,
    UserPreference,
    UserRuleVerification,
}

impl ClassKind {
    pub const ALL: [ClassKind; 126] = [
        Self::ActualFiniteState,
        Self::ActualFiniteStateList,
        Self::Alias,
        Self::AndExpression,
        Self::ArrayParameterType,
        Self::BinaryRelationship,
        Self::BinaryRelationshipRule,
        Self::BooleanExpression,
        Self::BooleanParameterType,
        Self::BuiltInRuleVerification,
        Self::Category,
        Self::Citation,
        Self::CommonFileStore,
        Self::CompoundParameterType,
        Self::Constant,
        Self::ConversionBasedUnit,
        Self::CyclicRatioScale,
        Self::DateParameterType,
        Self::DateTimeParameterType,
        Self::DecompositionRule,
        Self::DefinedThing,
        Self::Definition,
        Self::DerivedQuantityKind,
        Self::DerivedUnit,
        Self::DomainFileStore,
        Self::DomainOfExpertise,
        Self::DomainOfExpertiseGroup,
        Self::ElementBase,
        Self::ElementDefinition,
        Self::ElementUsage,
        Self::EmailAddress,
        Self::EngineeringModel,
        Self::EngineeringModelSetup,
        Self::EnumerationParameterType,
        Self::EnumerationValueDefinition,
        Self::ExclusiveOrExpression,
        Self::ExternalIdentifierMap,
        Self::File,
        Self::FileRevision,
        Self::FileStore,
        Self::FileType,
        Self::Folder,
        Self::Glossary,
        Self::HyperLink,
        Self::IdCorrespondence,
        Self::IntervalScale,
        Self::Iteration,
        Self::IterationSetup,
        Self::LinearConversionUnit,
        Self::LogarithmicScale,
        Self::MappingToReferenceScale,
        Self::MeasurementScale,
        Self::MeasurementUnit,
        Self::ModelLogEntry,
        Self::ModelReferenceDataLibrary,
        Self::MultiRelationship,
        Self::MultiRelationshipRule,
        Self::NaturalLanguage,
        Self::NestedElement,
        Self::NestedParameter,
        Self::NotExpression,
        Self::Option,
        Self::OrExpression,
        Self::OrdinalScale,
        Self::Organization,
        Self::Parameter,
        Self::ParameterBase,
        Self::ParameterGroup,
        Self::ParameterOrOverrideBase,
        Self::ParameterOverride,
        Self::ParameterOverrideValueSet,
        Self::ParameterSubscription,
        Self::ParameterSubscriptionValueSet,
        Self::ParameterType,
        Self::ParameterTypeComponent,
        Self::ParameterValueSet,
        Self::ParameterValueSetBase,
        Self::ParameterizedCategoryRule,
        Self::ParametricConstraint,
        Self::Participant,
        Self::ParticipantPermission,
        Self::ParticipantRole,
        Self::Person,
        Self::PersonPermission,
        Self::PersonRole,
        Self::PossibleFiniteState,
        Self::PossibleFiniteStateList,
        Self::PrefixedUnit,
        Self::Publication,
        Self::QuantityKind,
        Self::QuantityKindFactor,
        Self::RatioScale,
        Self::ReferenceDataLibrary,
        Self::ReferenceSource,
        Self::ReferencerRule,
        Self::RelationalExpression,
        Self::Relationship,
        Self::Requirement,
        Self::RequirementsContainer,
        Self::RequirementsGroup,
        Self::RequirementsSpecification,
        Self::Rule,
        Self::RuleVerification,
        Self::RuleVerificationList,
        Self::RuleViolation,
        Self::ScalarParameterType,
        Self::ScaleReferenceQuantityValue,
        Self::ScaleValueDefinition,
        Self::SimpleParameterValue,
        Self::SimpleParameterizableThing,
        Self::SimpleQuantityKind,
        Self::SimpleUnit,
        Self::SiteDirectory,
        Self::SiteLogEntry,
        Self::SiteReferenceDataLibrary,
        Self::SpecializedQuantityKind,
        Self::TelephoneNumber,
        Self::Term,
        Self::TextParameterType,
        Self::Thing,
        Self::TimeOfDayParameterType,
        Self::TopContainer,
        Self::UnitFactor,
        Self::UnitPrefix,
        Self::UserPreference,
        Self::UserRuleVerification,
    ];

    /// Graph type label, identical to the `classKind` tag of the export.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActualFiniteState => "ActualFiniteState",
            Self::ActualFiniteStateList => "ActualFiniteStateList",
            Self::Alias => "Alias",
            Self::AndExpression => "AndExpression",
            Self::ArrayParameterType => "ArrayParameterType",
            Self::BinaryRelationship => "BinaryRelationship",
            Self::BinaryRelationshipRule => "BinaryRelationshipRule",
            Self::BooleanExpression => "BooleanExpression",
            Self::BooleanParameterType => "BooleanParameterType",
            Self::BuiltInRuleVerification => "BuiltInRuleVerification",
            Self::Category => "Category",
            Self::Citation => "Citation",
            Self::CommonFileStore => "CommonFileStore",
            Self::CompoundParameterType => "CompoundParameterType",
            Self::Constant => "Constant",
            Self::ConversionBasedUnit => "ConversionBasedUnit",
            Self::CyclicRatioScale => "CyclicRatioScale",
            Self::DateParameterType => "DateParameterType",
            Self::DateTimeParameterType => "DateTimeParameterType",
            Self::DecompositionRule => "DecompositionRule",
            Self::DefinedThing => "DefinedThing",
            Self::Definition => "Definition",
            Self::DerivedQuantityKind => "DerivedQuantityKind",
            Self::DerivedUnit => "DerivedUnit",
            Self::DomainFileStore => "DomainFileStore",
            Self::DomainOfExpertise => "DomainOfExpertise",
            Self::DomainOfExpertiseGroup => "DomainOfExpertiseGroup",
            Self::ElementBase => "ElementBase",
            Self::ElementDefinition => "ElementDefinition",
            Self::ElementUsage => "ElementUsage",
            Self::EmailAddress => "EmailAddress",
            Self::EngineeringModel => "EngineeringModel",
            Self::EngineeringModelSetup => "EngineeringModelSetup",
            Self::EnumerationParameterType => "EnumerationParameterType",
            Self::EnumerationValueDefinition => "EnumerationValueDefinition",
            Self::ExclusiveOrExpression => "ExclusiveOrExpression",
            Self::ExternalIdentifierMap => "ExternalIdentifierMap",
            Self::File => "File",
            Self::FileRevision => "FileRevision",
            Self::FileStore => "FileStore",
            Self::FileType => "FileType",
            Self::Folder => "Folder",
            Self::Glossary => "Glossary",
            Self::HyperLink => "HyperLink",
            Self::IdCorrespondence => "IdCorrespondence",
            Self::IntervalScale => "IntervalScale",
            Self::Iteration => "Iteration",
            Self::IterationSetup => "IterationSetup",
            Self::LinearConversionUnit => "LinearConversionUnit",
            Self::LogarithmicScale => "LogarithmicScale",
            Self::MappingToReferenceScale => "MappingToReferenceScale",
            Self::MeasurementScale => "MeasurementScale",
            Self::MeasurementUnit => "MeasurementUnit",
            Self::ModelLogEntry => "ModelLogEntry",
            Self::ModelReferenceDataLibrary => "ModelReferenceDataLibrary",
            Self::MultiRelationship => "MultiRelationship",
            Self::MultiRelationshipRule => "MultiRelationshipRule",
            Self::NaturalLanguage => "NaturalLanguage",
            Self::NestedElement => "NestedElement",
            Self::NestedParameter => "NestedParameter",
            Self::NotExpression => "NotExpression",
            Self::Option => "Option",
            Self::OrExpression => "OrExpression",
            Self::OrdinalScale => "OrdinalScale",
            Self::Organization => "Organization",
            Self::Parameter => "Parameter",
            Self::ParameterBase => "ParameterBase",
            Self::ParameterGroup => "ParameterGroup",
            Self::ParameterOrOverrideBase => "ParameterOrOverrideBase",
            Self::ParameterOverride => "ParameterOverride",
            Self::ParameterOverrideValueSet => "ParameterOverrideValueSet",
            Self::ParameterSubscription => "ParameterSubscription",
            Self::ParameterSubscriptionValueSet => "ParameterSubscriptionValueSet",
            Self::ParameterType => "ParameterType",
            Self::ParameterTypeComponent => "ParameterTypeComponent",
            Self::ParameterValueSet => "ParameterValueSet",
            Self::ParameterValueSetBase => "ParameterValueSetBase",
            Self::ParameterizedCategoryRule => "ParameterizedCategoryRule",
            Self::ParametricConstraint => "ParametricConstraint",
            Self::Participant => "Participant",
            Self::ParticipantPermission => "ParticipantPermission",
            Self::ParticipantRole => "ParticipantRole",
            Self::Person => "Person",
            Self::PersonPermission => "PersonPermission",
            Self::PersonRole => "PersonRole",
            Self::PossibleFiniteState => "PossibleFiniteState",
            Self::PossibleFiniteStateList => "PossibleFiniteStateList",
            Self::PrefixedUnit => "PrefixedUnit",
            Self::Publication => "Publication",
            Self::QuantityKind => "QuantityKind",
            Self::QuantityKindFactor => "QuantityKindFactor",
            Self::RatioScale => "RatioScale",
            Self::ReferenceDataLibrary => "ReferenceDataLibrary",
            Self::ReferenceSource => "ReferenceSource",
            Self::ReferencerRule => "ReferencerRule",
            Self::RelationalExpression => "RelationalExpression",
            Self::Relationship => "Relationship",
            Self::Requirement => "Requirement",
            Self::RequirementsContainer => "RequirementsContainer",
            Self::RequirementsGroup => "RequirementsGroup",
            Self::RequirementsSpecification => "RequirementsSpecification",
            Self::Rule => "Rule",
            Self::RuleVerification => "RuleVerification",
            Self::RuleVerificationList => "RuleVerificationList",
            Self::RuleViolation => "RuleViolation",
            Self::ScalarParameterType => "ScalarParameterType",
            Self::ScaleReferenceQuantityValue => "ScaleReferenceQuantityValue",
            Self::ScaleValueDefinition => "ScaleValueDefinition",
            Self::SimpleParameterValue => "SimpleParameterValue",
            Self::SimpleParameterizableThing => "SimpleParameterizableThing",
            Self::SimpleQuantityKind => "SimpleQuantityKind",
            Self::SimpleUnit => "SimpleUnit",
            Self::SiteDirectory => "SiteDirectory",
            Self::SiteLogEntry => "SiteLogEntry",
            Self::SiteReferenceDataLibrary => "SiteReferenceDataLibrary",
            Self::SpecializedQuantityKind => "SpecializedQuantityKind",
            Self::TelephoneNumber => "TelephoneNumber",
            Self::Term => "Term",
            Self::TextParameterType => "TextParameterType",
            Self::Thing => "Thing",
            Self::TimeOfDayParameterType => "TimeOfDayParameterType",
            Self::TopContainer => "TopContainer",
            Self::UnitFactor => "UnitFactor",
            Self::UnitPrefix => "UnitPrefix",
            Self::UserPreference => "UserPreference",
            Self::UserRuleVerification => "UserRuleVerification",
        }
    }

    /// Direct supertype in the class hierarchy. `Thing` is the root.
    pub fn parent(&self) -> Option<ClassKind> {
        match self {
            Self::ActualFiniteState
            | Self::ActualFiniteStateList
            | Self::Alias
            | Self::BooleanExpression
            | Self::Citation
            | Self::DefinedThing
            | Self::Definition
            | Self::EmailAddress
            | Self::ExternalIdentifierMap
            | Self::File
            | Self::FileRevision
            | Self::FileStore
            | Self::Folder
            | Self::HyperLink
            | Self::IdCorrespondence
            | Self::Iteration
            | Self::IterationSetup
            | Self::MappingToReferenceScale
            | Self::ModelLogEntry
            | Self::NaturalLanguage
            | Self::NestedElement
            | Self::NestedParameter
            | Self::Organization
            | Self::ParameterBase
            | Self::ParameterGroup
            | Self::ParameterSubscriptionValueSet
            | Self::ParameterTypeComponent
            | Self::ParameterValueSetBase
            | Self::ParametricConstraint
            | Self::Participant
            | Self::ParticipantPermission
            | Self::Person
            | Self::PersonPermission
            | Self::Publication
            | Self::QuantityKindFactor
            | Self::Relationship
            | Self::RuleVerification
            | Self::RuleViolation
            | Self::ScaleReferenceQuantityValue
            | Self::SimpleParameterValue
            | Self::SiteLogEntry
            | Self::TelephoneNumber
            | Self::TopContainer
            | Self::UnitFactor
            | Self::UserPreference => Some(Self::Thing),
            Self::AndExpression
            | Self::ExclusiveOrExpression
            | Self::NotExpression
            | Self::OrExpression
            | Self::RelationalExpression => Some(Self::BooleanExpression),
            Self::ArrayParameterType => Some(Self::CompoundParameterType),
            Self::BinaryRelationship
            | Self::MultiRelationship => Some(Self::Relationship),
            Self::BinaryRelationshipRule
            | Self::DecompositionRule
            | Self::MultiRelationshipRule
            | Self::ParameterizedCategoryRule
            | Self::ReferencerRule => Some(Self::Rule),
            Self::BooleanParameterType
            | Self::DateParameterType
            | Self::DateTimeParameterType
            | Self::EnumerationParameterType
            | Self::QuantityKind
            | Self::TextParameterType
            | Self::TimeOfDayParameterType => Some(Self::ScalarParameterType),
            Self::BuiltInRuleVerification
            | Self::UserRuleVerification => Some(Self::RuleVerification),
            Self::Category
            | Self::Constant
            | Self::DomainOfExpertise
            | Self::DomainOfExpertiseGroup
            | Self::ElementBase
            | Self::EngineeringModelSetup
            | Self::EnumerationValueDefinition
            | Self::FileType
            | Self::Glossary
            | Self::MeasurementScale
            | Self::MeasurementUnit
            | Self::Option
            | Self::ParameterType
            | Self::ParticipantRole
            | Self::PersonRole
            | Self::PossibleFiniteState
            | Self::PossibleFiniteStateList
            | Self::ReferenceDataLibrary
            | Self::ReferenceSource
            | Self::RequirementsContainer
            | Self::Rule
            | Self::RuleVerificationList
            | Self::ScaleValueDefinition
            | Self::SimpleParameterizableThing
            | Self::Term
            | Self::UnitPrefix => Some(Self::DefinedThing),
            Self::CommonFileStore
            | Self::DomainFileStore => Some(Self::FileStore),
            Self::CompoundParameterType
            | Self::ScalarParameterType => Some(Self::ParameterType),
            Self::ConversionBasedUnit
            | Self::DerivedUnit
            | Self::SimpleUnit => Some(Self::MeasurementUnit),
            Self::CyclicRatioScale => Some(Self::RatioScale),
            Self::DerivedQuantityKind
            | Self::SimpleQuantityKind
            | Self::SpecializedQuantityKind => Some(Self::QuantityKind),
            Self::ElementDefinition
            | Self::ElementUsage => Some(Self::ElementBase),
            Self::EngineeringModel
            | Self::SiteDirectory => Some(Self::TopContainer),
            Self::IntervalScale
            | Self::LogarithmicScale
            | Self::OrdinalScale
            | Self::RatioScale => Some(Self::MeasurementScale),
            Self::LinearConversionUnit
            | Self::PrefixedUnit => Some(Self::ConversionBasedUnit),
            Self::ModelReferenceDataLibrary
            | Self::SiteReferenceDataLibrary => Some(Self::ReferenceDataLibrary),
            Self::Parameter
            | Self::ParameterOverride => Some(Self::ParameterOrOverrideBase),
            Self::ParameterOrOverrideBase
            | Self::ParameterSubscription => Some(Self::ParameterBase),
            Self::ParameterOverrideValueSet
            | Self::ParameterValueSet => Some(Self::ParameterValueSetBase),
            Self::Requirement => Some(Self::SimpleParameterizableThing),
            Self::RequirementsGroup
            | Self::RequirementsSpecification => Some(Self::RequirementsContainer),
            Self::Thing => None,
        }
    }

    /// Abstract classes never appear as `classKind` in a well-formed export,
    /// but descriptors may name them as the class of an endpoint.
    pub fn is_abstract(&self) -> bool {
        matches!(
            self,
            Self::Thing
                | Self::DefinedThing
                | Self::TopContainer
                | Self::ReferenceDataLibrary
                | Self::ParameterType
                | Self::ScalarParameterType
                | Self::QuantityKind
                | Self::MeasurementScale
                | Self::MeasurementUnit
                | Self::ConversionBasedUnit
                | Self::Rule
                | Self::ElementBase
                | Self::ParameterBase
                | Self::ParameterOrOverrideBase
                | Self::ParameterValueSetBase
                | Self::FileStore
                | Self::BooleanExpression
                | Self::Relationship
                | Self::RequirementsContainer
                | Self::SimpleParameterizableThing
                | Self::RuleVerification
        )
    }

    /// The class followed by all of its ancestors, most specific first.
    pub fn lineage(&self) -> Vec<ClassKind> {
        let mut kinds = vec![*self];
        let mut current = *self;
        while let Some(parent) = current.parent() {
            kinds.push(parent);
            current = parent;
        }
        kinds
    }

    /// Whether this class is `other` or one of its subclasses.
    pub fn is_a(&self, other: ClassKind) -> bool {
        let mut current = Some(*self);
        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }
        false
    }
}

/// Error returned when a `classKind` tag has no matching variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown class kind: {0}")]
pub struct UnknownClassKind(pub String);

impl FromStr for ClassKind {
    type Err = UnknownClassKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| UnknownClassKind(s.to_string()))
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_tag() {
        for kind in ClassKind::ALL {
            assert_eq!(kind.as_str().parse::<ClassKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_tag() {
        let err = "SpaceshipDefinition".parse::<ClassKind>().unwrap_err();
        assert_eq!(err.0, "SpaceshipDefinition");
        assert_eq!(err.to_string(), "unknown class kind: SpaceshipDefinition");
    }

    #[test]
    fn test_trailing_whitespace_tolerated() {
        assert_eq!("Option ".parse::<ClassKind>().unwrap(), ClassKind::Option);
    }

    #[test]
    fn test_subclass_matching() {
        assert!(ClassKind::CyclicRatioScale.is_a(ClassKind::RatioScale));
        assert!(ClassKind::CyclicRatioScale.is_a(ClassKind::MeasurementScale));
        assert!(ClassKind::Parameter.is_a(ClassKind::ParameterOrOverrideBase));
        assert!(ClassKind::AndExpression.is_a(ClassKind::BooleanExpression));
        assert!(ClassKind::ElementDefinition.is_a(ClassKind::Thing));
        assert!(!ClassKind::MeasurementScale.is_a(ClassKind::RatioScale));
        assert!(!ClassKind::Parameter.is_a(ClassKind::ParameterValueSetBase));
    }

    #[test]
    fn test_every_class_reaches_thing() {
        for kind in ClassKind::ALL {
            assert_eq!(kind.lineage().last(), Some(&ClassKind::Thing), "{kind}");
        }
    }

    #[test]
    fn test_lineage_order() {
        assert_eq!(
            ClassKind::SimpleQuantityKind.lineage(),
            vec![
                ClassKind::SimpleQuantityKind,
                ClassKind::QuantityKind,
                ClassKind::ScalarParameterType,
                ClassKind::ParameterType,
                ClassKind::DefinedThing,
                ClassKind::Thing,
            ]
        );
    }
}
