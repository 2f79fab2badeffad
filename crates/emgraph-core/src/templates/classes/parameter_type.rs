//! Parameter types and quantity kinds.

use crate::model::ClassKind;
use crate::templates::schema::{
    contains, contains_ordered, flag, joined, joined_ordered, number, refers, refers_one, text,
    text_opt, ClassSchema,
};

pub(crate) static PARAMETER_TYPE: ClassSchema = ClassSchema {
    kind: ClassKind::ParameterType,
    attributes: &[
        text("name"),
        text("shortName"),
        text("symbol"),
        flag("isDeprecated"),
        number("numberOfValues"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
    ],
};

pub(crate) static SCALAR_PARAMETER_TYPE: ClassSchema = ClassSchema {
    kind: ClassKind::ScalarParameterType,
    attributes: &[
        text("name"),
        text("shortName"),
        text("symbol"),
        flag("isDeprecated"),
        number("numberOfValues"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
    ],
};

pub(crate) static BOOLEAN_PARAMETER_TYPE: ClassSchema = ClassSchema {
    kind: ClassKind::BooleanParameterType,
    attributes: &[
        text("name"),
        text("shortName"),
        text("symbol"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
    ],
};

pub(crate) static DATE_PARAMETER_TYPE: ClassSchema = ClassSchema {
    kind: ClassKind::DateParameterType,
    attributes: &[
        text("name"),
        text("shortName"),
        text("symbol"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
    ],
};

pub(crate) static DATE_TIME_PARAMETER_TYPE: ClassSchema = ClassSchema {
    kind: ClassKind::DateTimeParameterType,
    attributes: &[
        text("name"),
        text("shortName"),
        text("symbol"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
    ],
};

pub(crate) static TIME_OF_DAY_PARAMETER_TYPE: ClassSchema = ClassSchema {
    kind: ClassKind::TimeOfDayParameterType,
    attributes: &[
        text("name"),
        text("shortName"),
        text("symbol"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
    ],
};

pub(crate) static TEXT_PARAMETER_TYPE: ClassSchema = ClassSchema {
    kind: ClassKind::TextParameterType,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
        text("symbol"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
    ],
};

pub(crate) static ENUMERATION_PARAMETER_TYPE: ClassSchema = ClassSchema {
    kind: ClassKind::EnumerationParameterType,
    attributes: &[
        text("name"),
        text("shortName"),
        text("symbol"),
        flag("allowMultiSelect"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
        contains_ordered("valueDefinition", ClassKind::EnumerationValueDefinition),
    ],
};

pub(crate) static ENUMERATION_VALUE_DEFINITION: ClassSchema = ClassSchema {
    kind: ClassKind::EnumerationValueDefinition,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
    ],
};

pub(crate) static COMPOUND_PARAMETER_TYPE: ClassSchema = ClassSchema {
    kind: ClassKind::CompoundParameterType,
    attributes: &[
        text("name"),
        text("shortName"),
        text("symbol"),
        flag("isDeprecated"),
        flag("isFinalized"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
    ],
};

pub(crate) static ARRAY_PARAMETER_TYPE: ClassSchema = ClassSchema {
    kind: ClassKind::ArrayParameterType,
    attributes: &[
        text("name"),
        text("shortName"),
        text("symbol"),
        flag("isDeprecated"),
        flag("isTensor"),
        flag("isFinalized"),
        joined_ordered("dimension"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
    ],
};

pub(crate) static PARAMETER_TYPE_COMPONENT: ClassSchema = ClassSchema {
    kind: ClassKind::ParameterTypeComponent,
    attributes: &[text("shortName")],
    relations: &[
        refers_one("parameterType", ClassKind::ParameterType).required(),
        refers_one("scale", ClassKind::MeasurementScale),
    ],
};

pub(crate) static QUANTITY_KIND: ClassSchema = ClassSchema {
    kind: ClassKind::QuantityKind,
    attributes: &[
        text("name"),
        text("shortName"),
        text("symbol"),
        flag("isDeprecated"),
        number("numberOfValues"),
        text("quantityDimensionExpression"),
        text_opt("quantityDimensionSymbol"),
        joined("quantityDimensionExponent"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
        refers("possibleScale", ClassKind::MeasurementScale),
        refers_one("defaultScale", ClassKind::MeasurementScale).required(),
        refers("allPossibleScale", ClassKind::MeasurementScale),
    ],
};

pub(crate) static SIMPLE_QUANTITY_KIND: ClassSchema = ClassSchema {
    kind: ClassKind::SimpleQuantityKind,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
        text("symbol"),
        text_opt("quantityDimensionSymbol"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
        refers("possibleScale", ClassKind::MeasurementScale),
        refers_one("defaultScale", ClassKind::MeasurementScale),
    ],
};

pub(crate) static DERIVED_QUANTITY_KIND: ClassSchema = ClassSchema {
    kind: ClassKind::DerivedQuantityKind,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
        text("symbol"),
        text_opt("quantityDimensionSymbol"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
        contains_ordered("quantityKindFactor", ClassKind::QuantityKindFactor),
        refers("possibleScale", ClassKind::MeasurementScale),
        refers_one("defaultScale", ClassKind::MeasurementScale).required(),
    ],
};

pub(crate) static SPECIALIZED_QUANTITY_KIND: ClassSchema = ClassSchema {
    kind: ClassKind::SpecializedQuantityKind,
    attributes: &[
        text("name"),
        text("shortName"),
        text("symbol"),
        flag("isDeprecated"),
        text_opt("quantityDimensionSymbol"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
        refers("possibleScale", ClassKind::MeasurementScale),
        refers_one("defaultScale", ClassKind::MeasurementScale).required(),
        refers_one("general", ClassKind::QuantityKind).required(),
    ],
};

pub(crate) static QUANTITY_KIND_FACTOR: ClassSchema = ClassSchema {
    kind: ClassKind::QuantityKindFactor,
    attributes: &[text_opt("exponent")],
    relations: &[refers_one("quantityKind", ClassKind::QuantityKind).required()],
};
