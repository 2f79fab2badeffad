//! Engineering model containers, file stores, finite states and relationships.

use crate::model::ClassKind;
use crate::templates::schema::{
    contains, flag, joined, refers, refers_one, text, text_opt, ClassSchema,
};

pub(crate) static ENGINEERING_MODEL: ClassSchema = ClassSchema {
    kind: ClassKind::EngineeringModel,
    attributes: &[],
    relations: &[
        contains("logEntry", ClassKind::ModelLogEntry),
        refers_one("engineeringModelSetup", ClassKind::EngineeringModelSetup).required(),
        contains("commonFileStore", ClassKind::CommonFileStore),
        contains("iteration", ClassKind::Iteration),
    ],
};

pub(crate) static MODEL_LOG_ENTRY: ClassSchema = ClassSchema {
    kind: ClassKind::ModelLogEntry,
    attributes: &[
        text("languageCode"),
        text("content"),
        text("createdOn"),
        text("level"),
        joined("affectedItemIid"),
    ],
    relations: &[
        refers("category", ClassKind::Category),
        refers_one("author", ClassKind::Person),
    ],
};

pub(crate) static FILE_STORE: ClassSchema = ClassSchema {
    kind: ClassKind::FileStore,
    attributes: &[text("createdOn"), text("name")],
    relations: &[
        contains("folder", ClassKind::Folder),
        contains("file", ClassKind::File),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
    ],
};

pub(crate) static DOMAIN_FILE_STORE: ClassSchema = ClassSchema {
    kind: ClassKind::DomainFileStore,
    attributes: &[
        flag("isHidden"),
        text("name"),
        text("createdOn"),
    ],
    relations: &[
        refers_one("owner", ClassKind::DomainOfExpertise),
        contains("folder", ClassKind::Folder),
        contains("file", ClassKind::File),
    ],
};

pub(crate) static COMMON_FILE_STORE: ClassSchema = ClassSchema {
    kind: ClassKind::CommonFileStore,
    attributes: &[text("createdOn"), text("name")],
    relations: &[
        contains("folder", ClassKind::Folder),
        contains("file", ClassKind::File),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
    ],
};

pub(crate) static FOLDER: ClassSchema = ClassSchema {
    kind: ClassKind::Folder,
    attributes: &[
        text("createdOn"),
        text("name"),
        text("path"),
    ],
    relations: &[
        refers_one("creator", ClassKind::Participant).required(),
        refers_one("containingFolder", ClassKind::Folder),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
    ],
};

pub(crate) static FILE: ClassSchema = ClassSchema {
    kind: ClassKind::File,
    attributes: &[],
    relations: &[
        refers("category", ClassKind::Category),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        refers_one("lockedBy", ClassKind::Person),
        contains("fileRevision", ClassKind::FileRevision),
    ],
};

pub(crate) static FILE_REVISION: ClassSchema = ClassSchema {
    kind: ClassKind::FileRevision,
    attributes: &[
        text("createdOn"),
        text("name"),
        text("contentHash"),
        text("path"),
    ],
    relations: &[
        refers_one("creator", ClassKind::Participant).required(),
        refers_one("containingFolder", ClassKind::Folder),
        refers("fileType", ClassKind::FileType),
    ],
};

pub(crate) static EXTERNAL_IDENTIFIER_MAP: ClassSchema = ClassSchema {
    kind: ClassKind::ExternalIdentifierMap,
    attributes: &[
        text("name"),
        text("externalModelName"),
        text("externalToolName"),
        text_opt("externalToolVersion"),
    ],
    relations: &[
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("correspondence", ClassKind::IdCorrespondence),
        refers_one("externalFormat", ClassKind::ReferenceSource),
    ],
};

pub(crate) static ID_CORRESPONDENCE: ClassSchema = ClassSchema {
    kind: ClassKind::IdCorrespondence,
    attributes: &[text("internalThing"), text("externalId")],
    relations: &[refers_one("owner", ClassKind::DomainOfExpertise).required()],
};

pub(crate) static POSSIBLE_FINITE_STATE_LIST: ClassSchema = ClassSchema {
    kind: ClassKind::PossibleFiniteStateList,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("possibleState", ClassKind::PossibleFiniteState),
        refers_one("defaultState", ClassKind::PossibleFiniteState),
        refers("category", ClassKind::Category),
    ],
};

pub(crate) static POSSIBLE_FINITE_STATE: ClassSchema = ClassSchema {
    kind: ClassKind::PossibleFiniteState,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
    ],
};

pub(crate) static ACTUAL_FINITE_STATE_LIST: ClassSchema = ClassSchema {
    kind: ClassKind::ActualFiniteStateList,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        refers("excludeOption", ClassKind::Option),
        refers("possibleFiniteStateList", ClassKind::PossibleFiniteStateList),
        contains("actualState", ClassKind::ActualFiniteState),
    ],
};

pub(crate) static ACTUAL_FINITE_STATE: ClassSchema = ClassSchema {
    kind: ClassKind::ActualFiniteState,
    attributes: &[
        text("name"),
        text("shortName"),
        text("kind"),
    ],
    relations: &[
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        refers("possibleState", ClassKind::PossibleFiniteState),
    ],
};

pub(crate) static RELATIONSHIP: ClassSchema = ClassSchema {
    kind: ClassKind::Relationship,
    attributes: &[],
    relations: &[
        refers("category", ClassKind::Category),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
    ],
};

pub(crate) static BINARY_RELATIONSHIP: ClassSchema = ClassSchema {
    kind: ClassKind::BinaryRelationship,
    attributes: &[],
    relations: &[
        refers_one("source", ClassKind::Thing).required(),
        refers_one("target", ClassKind::Thing).required(),
        refers("category", ClassKind::Category),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
    ],
};

pub(crate) static MULTI_RELATIONSHIP: ClassSchema = ClassSchema {
    kind: ClassKind::MultiRelationship,
    attributes: &[],
    relations: &[
        refers("category", ClassKind::Category),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        refers("relatedThing", ClassKind::Thing),
    ],
};

pub(crate) static RULE_VERIFICATION_LIST: ClassSchema = ClassSchema {
    kind: ClassKind::RuleVerificationList,
    attributes: &[text("name"), text("shortName")],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("ruleVerification", ClassKind::RuleVerification),
    ],
};

pub(crate) static RULE_VERIFICATION: ClassSchema = ClassSchema {
    kind: ClassKind::RuleVerification,
    attributes: &[
        flag("isActive"),
        text_opt("executedOn"),
        text("name"),
        text("status"),
    ],
    relations: &[
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("violation", ClassKind::RuleViolation),
    ],
};

pub(crate) static BUILT_IN_RULE_VERIFICATION: ClassSchema = ClassSchema {
    kind: ClassKind::BuiltInRuleVerification,
    attributes: &[
        flag("isActive"),
        text_opt("executedOn"),
        text("name"),
        text("status"),
    ],
    relations: &[
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("violation", ClassKind::RuleViolation),
    ],
};

pub(crate) static USER_RULE_VERIFICATION: ClassSchema = ClassSchema {
    kind: ClassKind::UserRuleVerification,
    attributes: &[
        flag("isActive"),
        text_opt("executedOn"),
        text("name"),
        text("status"),
    ],
    relations: &[
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("violation", ClassKind::RuleViolation),
        refers_one("rule", ClassKind::Rule).required(),
    ],
};

pub(crate) static RULE_VIOLATION: ClassSchema = ClassSchema {
    kind: ClassKind::RuleViolation,
    attributes: &[text("description"), joined("violatingThing")],
    relations: &[],
};
