//! Naming, definitions, categories and glossaries.

use crate::model::ClassKind;
use crate::templates::schema::{
    contains, flag, flag_opt, joined, joined_ordered, refers, refers_one, text, text_opt, value,
    ClassSchema,
};

pub(crate) static THING: ClassSchema = ClassSchema {
    kind: ClassKind::Thing,
    attributes: &[],
    relations: &[],
};

pub(crate) static DEFINED_THING: ClassSchema = ClassSchema {
    kind: ClassKind::DefinedThing,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
    ],
};

pub(crate) static ALIAS: ClassSchema = ClassSchema {
    kind: ClassKind::Alias,
    attributes: &[
        flag("isSynonym"),
        text("languageCode"),
        text("content"),
    ],
    relations: &[],
};

pub(crate) static DEFINITION: ClassSchema = ClassSchema {
    kind: ClassKind::Definition,
    attributes: &[
        text("languageCode"),
        value("content"),
        joined_ordered("note"),
        joined_ordered("example"),
    ],
    relations: &[contains("citation", ClassKind::Citation)],
};

pub(crate) static HYPER_LINK: ClassSchema = ClassSchema {
    kind: ClassKind::HyperLink,
    attributes: &[
        text("uri"),
        text("languageCode"),
        text("content"),
    ],
    relations: &[],
};

pub(crate) static CITATION: ClassSchema = ClassSchema {
    kind: ClassKind::Citation,
    attributes: &[
        text_opt("location"),
        text_opt("remark"),
        flag("isAdaptation"),
        text("shortName"),
    ],
    relations: &[refers_one("source", ClassKind::ReferenceSource).required()],
};

pub(crate) static CATEGORY: ClassSchema = ClassSchema {
    kind: ClassKind::Category,
    attributes: &[
        text("name"),
        text("shortName"),
        flag_opt("isAbstract"),
        flag_opt("isDeprecated"),
        joined("permissibleClass"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("superCategory", ClassKind::Category),
    ],
};

pub(crate) static TERM: ClassSchema = ClassSchema {
    kind: ClassKind::Term,
    attributes: &[
        flag("isDeprecated"),
        text("name"),
        text("shortName"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
    ],
};

pub(crate) static GLOSSARY: ClassSchema = ClassSchema {
    kind: ClassKind::Glossary,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("category", ClassKind::Category),
        contains("term", ClassKind::Term),
    ],
};
