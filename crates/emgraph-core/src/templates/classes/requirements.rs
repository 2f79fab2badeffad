//! Requirements, groups and parametric constraints.

use crate::model::ClassKind;
use crate::templates::schema::{contains, flag, refers, refers_one, text, ClassSchema};

pub(crate) static REQUIREMENTS_CONTAINER: ClassSchema = ClassSchema {
    kind: ClassKind::RequirementsContainer,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("group", ClassKind::RequirementsGroup),
    ],
};

pub(crate) static REQUIREMENTS_SPECIFICATION: ClassSchema = ClassSchema {
    kind: ClassKind::RequirementsSpecification,
    attributes: &[
        flag("isDeprecated"),
        text("name"),
        text("shortName"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("group", ClassKind::RequirementsGroup),
        refers_one("owner", ClassKind::DomainOfExpertise),
        contains("requirement", ClassKind::Requirement),
        refers("category", ClassKind::Category),
        contains("parameterValue", ClassKind::SimpleParameterValue),
    ],
};

pub(crate) static REQUIREMENTS_GROUP: ClassSchema = ClassSchema {
    kind: ClassKind::RequirementsGroup,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("group", ClassKind::RequirementsGroup),
    ],
};

pub(crate) static REQUIREMENT: ClassSchema = ClassSchema {
    kind: ClassKind::Requirement,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("group", ClassKind::ParameterGroup),
        refers("category", ClassKind::Category),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("parametricConstraint", ClassKind::ParametricConstraint),
        contains("parameterValue", ClassKind::SimpleParameterValue),
    ],
};

pub(crate) static SIMPLE_PARAMETERIZABLE_THING: ClassSchema = ClassSchema {
    kind: ClassKind::SimpleParameterizableThing,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("parameterValue", ClassKind::SimpleParameterValue),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
    ],
};

pub(crate) static SIMPLE_PARAMETER_VALUE: ClassSchema = ClassSchema {
    kind: ClassKind::SimpleParameterValue,
    attributes: &[text("value")],
    relations: &[
        refers_one("parameterType", ClassKind::ParameterType).required(),
        refers_one("scale", ClassKind::MeasurementScale),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
    ],
};

pub(crate) static PARAMETRIC_CONSTRAINT: ClassSchema = ClassSchema {
    kind: ClassKind::ParametricConstraint,
    attributes: &[],
    relations: &[
        refers_one("topExpression", ClassKind::BooleanExpression),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("expression", ClassKind::BooleanExpression),
    ],
};

pub(crate) static BOOLEAN_EXPRESSION: ClassSchema = ClassSchema {
    kind: ClassKind::BooleanExpression,
    attributes: &[],
    relations: &[],
};

pub(crate) static AND_EXPRESSION: ClassSchema = ClassSchema {
    kind: ClassKind::AndExpression,
    attributes: &[],
    relations: &[refers("term", ClassKind::BooleanExpression)],
};

pub(crate) static OR_EXPRESSION: ClassSchema = ClassSchema {
    kind: ClassKind::OrExpression,
    attributes: &[],
    relations: &[refers("term", ClassKind::BooleanExpression)],
};

pub(crate) static EXCLUSIVE_OR_EXPRESSION: ClassSchema = ClassSchema {
    kind: ClassKind::ExclusiveOrExpression,
    attributes: &[],
    relations: &[refers("term", ClassKind::BooleanExpression)],
};

pub(crate) static NOT_EXPRESSION: ClassSchema = ClassSchema {
    kind: ClassKind::NotExpression,
    attributes: &[],
    relations: &[refers_one("term", ClassKind::BooleanExpression).required()],
};

pub(crate) static RELATIONAL_EXPRESSION: ClassSchema = ClassSchema {
    kind: ClassKind::RelationalExpression,
    attributes: &[text("value"), text("relationalOperator")],
    relations: &[
        refers_one("parameterType", ClassKind::ParameterType).required(),
        refers_one("scale", ClassKind::MeasurementScale),
    ],
};
