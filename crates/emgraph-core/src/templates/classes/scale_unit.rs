//! Measurement scales and units.

use crate::model::ClassKind;
use crate::templates::schema::{contains, flag, refers_one, text, text_opt, value, ClassSchema};

pub(crate) static MEASUREMENT_SCALE: ClassSchema = ClassSchema {
    kind: ClassKind::MeasurementScale,
    attributes: &[
        text("name"),
        text("shortName"),
        text("numberSet"),
        flag("isMinimumInclusive"),
        flag("isMaximumInclusive"),
        flag("isDeprecated"),
        text_opt("minimumPermissibleValue"),
        text_opt("maximumPermissibleValue"),
        text_opt("positiveValueConnotation"),
        text_opt("negativeValueConnotation"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("valueDefinition", ClassKind::ScaleValueDefinition),
        contains("mappingToReferenceScale", ClassKind::MappingToReferenceScale),
        refers_one("unit", ClassKind::MeasurementUnit).required(),
    ],
};

pub(crate) static ORDINAL_SCALE: ClassSchema = ClassSchema {
    kind: ClassKind::OrdinalScale,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
        flag("useShortNameValues"),
        text("numberSet"),
        flag("isMinimumInclusive"),
        flag("isMaximumInclusive"),
        text_opt("minimumPermissibleValue"),
        text_opt("maximumPermissibleValue"),
        text_opt("positiveValueConnotation"),
        text_opt("negativeValueConnotation"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("valueDefinition", ClassKind::ScaleValueDefinition),
        contains("mappingToReferenceScale", ClassKind::MappingToReferenceScale),
        refers_one("unit", ClassKind::MeasurementUnit).required(),
    ],
};

pub(crate) static INTERVAL_SCALE: ClassSchema = ClassSchema {
    kind: ClassKind::IntervalScale,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
        text("numberSet"),
        flag("isMinimumInclusive"),
        flag("isMaximumInclusive"),
        text_opt("minimumPermissibleValue"),
        text_opt("maximumPermissibleValue"),
        text_opt("positiveValueConnotation"),
        text_opt("negativeValueConnotation"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("valueDefinition", ClassKind::ScaleValueDefinition),
        contains("mappingToReferenceScale", ClassKind::MappingToReferenceScale),
        refers_one("unit", ClassKind::MeasurementUnit).required(),
    ],
};

pub(crate) static RATIO_SCALE: ClassSchema = ClassSchema {
    kind: ClassKind::RatioScale,
    attributes: &[
        text("name"),
        text("shortName"),
        text("numberSet"),
        flag("isMinimumInclusive"),
        flag("isMaximumInclusive"),
        flag("isDeprecated"),
        text_opt("minimumPermissibleValue"),
        text_opt("maximumPermissibleValue"),
        text_opt("positiveValueConnotation"),
        text_opt("negativeValueConnotation"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("valueDefinition", ClassKind::ScaleValueDefinition),
        contains("mappingToReferenceScale", ClassKind::MappingToReferenceScale),
        refers_one("unit", ClassKind::MeasurementUnit).required(),
    ],
};

pub(crate) static CYCLIC_RATIO_SCALE: ClassSchema = ClassSchema {
    kind: ClassKind::CyclicRatioScale,
    attributes: &[
        text("name"),
        text("shortName"),
        text("modulus"),
        text("numberSet"),
        flag("isMinimumInclusive"),
        flag("isMaximumInclusive"),
        flag("isDeprecated"),
        text_opt("minimumPermissibleValue"),
        text_opt("maximumPermissibleValue"),
        text_opt("positiveValueConnotation"),
        text_opt("negativeValueConnotation"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("valueDefinition", ClassKind::ScaleValueDefinition),
        contains("mappingToReferenceScale", ClassKind::MappingToReferenceScale),
        refers_one("unit", ClassKind::MeasurementUnit).required(),
    ],
};

pub(crate) static LOGARITHMIC_SCALE: ClassSchema = ClassSchema {
    kind: ClassKind::LogarithmicScale,
    attributes: &[
        flag("isDeprecated"),
        text("name"),
        text("shortName"),
        text("numberSet"),
        flag("isMinimumInclusive"),
        flag("isMaximumInclusive"),
        text("logarithmBase"),
        text("factor"),
        text("exponent"),
        text_opt("minimumPermissibleValue"),
        text_opt("maximumPermissibleValue"),
        text_opt("positiveValueConnotation"),
        text_opt("negativeValueConnotation"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("valueDefinition", ClassKind::ScaleValueDefinition),
        contains("mappingToReferenceScale", ClassKind::MappingToReferenceScale),
        refers_one("unit", ClassKind::MeasurementUnit).required(),
        contains("referenceQuantityValue", ClassKind::ScaleReferenceQuantityValue),
        refers_one("referenceQuantityKind", ClassKind::QuantityKind).required(),
    ],
};

pub(crate) static SCALE_VALUE_DEFINITION: ClassSchema = ClassSchema {
    kind: ClassKind::ScaleValueDefinition,
    attributes: &[
        text("name"),
        text("shortName"),
        text("value"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
    ],
};

pub(crate) static MAPPING_TO_REFERENCE_SCALE: ClassSchema = ClassSchema {
    kind: ClassKind::MappingToReferenceScale,
    attributes: &[],
    relations: &[
        refers_one("referenceScaleValue", ClassKind::ScaleValueDefinition).required(),
        refers_one("dependentScaleValue", ClassKind::ScaleValueDefinition).required(),
    ],
};

pub(crate) static SCALE_REFERENCE_QUANTITY_VALUE: ClassSchema = ClassSchema {
    kind: ClassKind::ScaleReferenceQuantityValue,
    attributes: &[value("value")],
    relations: &[refers_one("scale", ClassKind::MeasurementScale).required()],
};

pub(crate) static MEASUREMENT_UNIT: ClassSchema = ClassSchema {
    kind: ClassKind::MeasurementUnit,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
    ],
};

pub(crate) static SIMPLE_UNIT: ClassSchema = ClassSchema {
    kind: ClassKind::SimpleUnit,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
    ],
};

pub(crate) static DERIVED_UNIT: ClassSchema = ClassSchema {
    kind: ClassKind::DerivedUnit,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
    ],
};

pub(crate) static CONVERSION_BASED_UNIT: ClassSchema = ClassSchema {
    kind: ClassKind::ConversionBasedUnit,
    attributes: &[
        text("name"),
        text("shortName"),
        text("conversionFactor"),
        flag("isDeprecated"),
    ],
    relations: &[
        refers_one("referenceUnit", ClassKind::MeasurementUnit).required(),
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
    ],
};

pub(crate) static LINEAR_CONVERSION_UNIT: ClassSchema = ClassSchema {
    kind: ClassKind::LinearConversionUnit,
    attributes: &[
        text("name"),
        text("shortName"),
        text("conversionFactor"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("referenceUnit", ClassKind::MeasurementUnit).required(),
    ],
};

pub(crate) static PREFIXED_UNIT: ClassSchema = ClassSchema {
    kind: ClassKind::PrefixedUnit,
    attributes: &[flag("isDeprecated")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("referenceUnit", ClassKind::MeasurementUnit).required(),
        refers_one("prefix", ClassKind::UnitPrefix).required(),
    ],
};

pub(crate) static UNIT_FACTOR: ClassSchema = ClassSchema {
    kind: ClassKind::UnitFactor,
    attributes: &[text("exponent")],
    relations: &[refers_one("unit", ClassKind::MeasurementUnit).required()],
};

pub(crate) static UNIT_PREFIX: ClassSchema = ClassSchema {
    kind: ClassKind::UnitPrefix,
    attributes: &[
        text("name"),
        text("shortName"),
        text("conversionFactor"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
    ],
};
