//! Element definitions, usages, options and iterations.

use crate::model::ClassKind;
use crate::templates::schema::{
    contains, contains_ordered, flag, refers, refers_one, text, text_opt, value, ClassSchema,
};

pub(crate) static ELEMENT_BASE: ClassSchema = ClassSchema {
    kind: ClassKind::ElementBase,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
    ],
};

pub(crate) static ELEMENT_DEFINITION: ClassSchema = ClassSchema {
    kind: ClassKind::ElementDefinition,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("containedElement", ClassKind::ElementUsage),
        refers("category", ClassKind::Category),
        contains("parameter", ClassKind::Parameter),
        contains("parameterGroup", ClassKind::ParameterGroup),
        refers("referencedElement", ClassKind::NestedElement),
        refers_one("owner", ClassKind::DomainOfExpertise),
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
    ],
};

pub(crate) static ELEMENT_USAGE: ClassSchema = ClassSchema {
    kind: ClassKind::ElementUsage,
    attributes: &[
        text("name"),
        text("shortName"),
        text("interfaceEnd"),
    ],
    relations: &[
        refers_one("elementDefinition", ClassKind::ElementDefinition).required(),
        refers("category", ClassKind::Category),
        refers_one("owner", ClassKind::DomainOfExpertise),
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("parameterOverride", ClassKind::ParameterOverride),
        refers("excludeOption", ClassKind::Option),
    ],
};

pub(crate) static NESTED_ELEMENT: ClassSchema = ClassSchema {
    kind: ClassKind::NestedElement,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isVolatile"),
    ],
    relations: &[
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("nestedParameter", ClassKind::NestedParameter),
        refers_one("rootElement", ClassKind::ElementDefinition).required(),
        refers("elementUsage", ClassKind::ElementUsage),
    ],
};

pub(crate) static NESTED_PARAMETER: ClassSchema = ClassSchema {
    kind: ClassKind::NestedParameter,
    attributes: &[
        text("path"),
        value("formula"),
        flag("isVolatile"),
        value("actualValue"),
    ],
    relations: &[
        refers_one("actualState", ClassKind::ActualFiniteState),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        refers_one("associatedParameter", ClassKind::ParameterBase).required(),
    ],
};

pub(crate) static OPTION: ClassSchema = ClassSchema {
    kind: ClassKind::Option,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
        contains("nestedElement", ClassKind::NestedElement),
    ],
};

pub(crate) static ITERATION: ClassSchema = ClassSchema {
    kind: ClassKind::Iteration,
    attributes: &[text_opt("sourceIterationIid")],
    relations: &[
        contains("publication", ClassKind::Publication),
        contains("possibleFiniteStateList", ClassKind::PossibleFiniteStateList),
        contains("element", ClassKind::ElementDefinition),
        contains("relation", ClassKind::Relationship).from_field("relationship"),
        contains("externalIdentifierMap", ClassKind::ExternalIdentifierMap),
        contains("requirementsSpecification", ClassKind::RequirementsSpecification),
        contains("domainFileStore", ClassKind::DomainFileStore),
        contains("actualFiniteStateList", ClassKind::ActualFiniteStateList),
        contains("ruleVerificationList", ClassKind::RuleVerificationList),
        refers_one("iterationSetup", ClassKind::IterationSetup),
        refers_one("topElement", ClassKind::ElementDefinition),
        refers_one("defaultOption", ClassKind::Option),
        contains_ordered("option", ClassKind::Option),
    ],
};

pub(crate) static PUBLICATION: ClassSchema = ClassSchema {
    kind: ClassKind::Publication,
    attributes: &[text("createdOn")],
    relations: &[
        refers("domain", ClassKind::DomainOfExpertise),
        refers("publishedParameter", ClassKind::ParameterOrOverrideBase),
    ],
};

pub(crate) static PARAMETER_GROUP: ClassSchema = ClassSchema {
    kind: ClassKind::ParameterGroup,
    attributes: &[text("name")],
    relations: &[refers_one("containingGroup", ClassKind::ParameterOrOverrideBase)],
};
