//! Reference data libraries and rules.

use crate::model::ClassKind;
use crate::templates::schema::{
    contains, flag, number, number_opt, refers, refers_one, refers_ordered, text, text_opt, value,
    ClassSchema,
};

pub(crate) static REFERENCE_DATA_LIBRARY: ClassSchema = ClassSchema {
    kind: ClassKind::ReferenceDataLibrary,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("definedCategory", ClassKind::Category),
        contains("parameterType", ClassKind::ParameterType),
        contains("scale", ClassKind::MeasurementScale),
        contains("unitPrefix", ClassKind::UnitPrefix),
        contains("unit", ClassKind::MeasurementUnit),
        contains("fileType", ClassKind::FileType),
        contains("glossary", ClassKind::Glossary),
        contains("referenceSource", ClassKind::ReferenceSource),
        contains("rule", ClassKind::Rule),
        contains("constant", ClassKind::Constant),
        refers_ordered("baseQuantityKind", ClassKind::QuantityKind),
        refers("baseUnit", ClassKind::MeasurementUnit),
        refers_one("requiredRdl", ClassKind::SiteReferenceDataLibrary),
    ],
};

pub(crate) static SITE_REFERENCE_DATA_LIBRARY: ClassSchema = ClassSchema {
    kind: ClassKind::SiteReferenceDataLibrary,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("definedCategory", ClassKind::Category),
        contains("parameterType", ClassKind::ParameterType),
        contains("scale", ClassKind::MeasurementScale),
        contains("unitPrefix", ClassKind::UnitPrefix),
        contains("unit", ClassKind::MeasurementUnit),
        contains("fileType", ClassKind::FileType),
        contains("glossary", ClassKind::Glossary),
        contains("referenceSource", ClassKind::ReferenceSource),
        contains("rule", ClassKind::Rule),
        contains("constant", ClassKind::Constant),
        refers_ordered("baseQuantityKind", ClassKind::QuantityKind),
        refers("baseUnit", ClassKind::MeasurementUnit),
        refers_one("requiredRdl", ClassKind::SiteReferenceDataLibrary),
    ],
};

pub(crate) static MODEL_REFERENCE_DATA_LIBRARY: ClassSchema = ClassSchema {
    kind: ClassKind::ModelReferenceDataLibrary,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("definedCategory", ClassKind::Category),
        contains("parameterType", ClassKind::ParameterType),
        contains("scale", ClassKind::MeasurementScale),
        contains("unitPrefix", ClassKind::UnitPrefix),
        contains("unit", ClassKind::MeasurementUnit),
        contains("fileType", ClassKind::FileType),
        contains("glossary", ClassKind::Glossary),
        contains("referenceSource", ClassKind::ReferenceSource),
        contains("rule", ClassKind::Rule),
        contains("constant", ClassKind::Constant),
        refers_ordered("baseQuantityKind", ClassKind::QuantityKind),
        refers("baseUnit", ClassKind::MeasurementUnit),
        refers_one("requiredRdl", ClassKind::SiteReferenceDataLibrary),
    ],
};

pub(crate) static CONSTANT: ClassSchema = ClassSchema {
    kind: ClassKind::Constant,
    attributes: &[
        text("name"),
        text("shortName"),
        value("value"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("parameterType", ClassKind::ParameterType).required(),
        refers_one("scale", ClassKind::MeasurementScale),
        refers("category", ClassKind::Category),
    ],
};

pub(crate) static FILE_TYPE: ClassSchema = ClassSchema {
    kind: ClassKind::FileType,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
        text("extension"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
    ],
};

pub(crate) static REFERENCE_SOURCE: ClassSchema = ClassSchema {
    kind: ClassKind::ReferenceSource,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
        text_opt("versionIdentifier"),
        text_opt("versionDate"),
        text_opt("author"),
        number_opt("publicationYear"),
        text_opt("language"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
        refers_one("publisher", ClassKind::Organization),
        refers_one("publishedIn", ClassKind::ReferenceSource),
    ],
};

pub(crate) static RULE: ClassSchema = ClassSchema {
    kind: ClassKind::Rule,
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

pub(crate) static DECOMPOSITION_RULE: ClassSchema = ClassSchema {
    kind: ClassKind::DecompositionRule,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
        number("minContained"),
        number_opt("maxContained"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("containingCategory", ClassKind::Category).required(),
        refers("containedCategory", ClassKind::Category),
    ],
};

pub(crate) static BINARY_RELATIONSHIP_RULE: ClassSchema = ClassSchema {
    kind: ClassKind::BinaryRelationshipRule,
    attributes: &[
        flag("isDeprecated"),
        text("forwardrelationName").from_field("forwardRelationshipName"),
        text("inverserelationName").from_field("inverseRelationshipName"),
        text("name"),
        text("shortName"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("relationCategory", ClassKind::Category)
            .from_field("relationshipCategory")
            .required(),
        refers_one("sourceCategory", ClassKind::Category).required(),
        refers_one("targetCategory", ClassKind::Category).required(),
    ],
};

pub(crate) static MULTI_RELATIONSHIP_RULE: ClassSchema = ClassSchema {
    kind: ClassKind::MultiRelationshipRule,
    attributes: &[
        flag("isDeprecated"),
        number("minRelated"),
        number("maxRelated"),
        text("name"),
        text("shortName"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("relationCategory", ClassKind::Category)
            .from_field("relationshipCategory")
            .required(),
        refers("relatedCategory", ClassKind::Category),
    ],
};

pub(crate) static PARAMETERIZED_CATEGORY_RULE: ClassSchema = ClassSchema {
    kind: ClassKind::ParameterizedCategoryRule,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("category", ClassKind::Category).required(),
        refers("parameterType", ClassKind::ParameterType),
    ],
};

pub(crate) static REFERENCER_RULE: ClassSchema = ClassSchema {
    kind: ClassKind::ReferencerRule,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
        number("minReferenced"),
        number("maxReferenced"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("referencingCategory", ClassKind::Category).required(),
        refers("referencedCategory", ClassKind::Category),
    ],
};
