//! Site directory: people, organizations, domains and model setups.

use crate::model::ClassKind;
use crate::templates::schema::{
    contains, flag, joined, number, refers, refers_one, text, text_opt, ClassSchema,
};

pub(crate) static TOP_CONTAINER: ClassSchema = ClassSchema {
    kind: ClassKind::TopContainer,
    attributes: &[],
    relations: &[],
};

pub(crate) static SITE_DIRECTORY: ClassSchema = ClassSchema {
    kind: ClassKind::SiteDirectory,
    attributes: &[
        text("name"),
        text("shortName"),
        text("createdOn"),
    ],
    relations: &[
        contains("organization", ClassKind::Organization),
        contains("person", ClassKind::Person),
        contains("participantRole", ClassKind::ParticipantRole),
        contains("model", ClassKind::EngineeringModelSetup),
        contains("personRole", ClassKind::PersonRole),
        contains("logEntry", ClassKind::SiteLogEntry),
        contains("domainGroup", ClassKind::DomainOfExpertiseGroup),
        contains("domain", ClassKind::DomainOfExpertise),
        contains("naturalLanguage", ClassKind::NaturalLanguage),
        contains("siteReferenceDataLibrary", ClassKind::SiteReferenceDataLibrary),
        refers_one("defaultParticipantRole", ClassKind::ParticipantRole),
        refers_one("defaultPersonRole", ClassKind::PersonRole),
    ],
};

pub(crate) static ORGANIZATION: ClassSchema = ClassSchema {
    kind: ClassKind::Organization,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
    ],
    relations: &[],
};

pub(crate) static PERSON: ClassSchema = ClassSchema {
    kind: ClassKind::Person,
    attributes: &[
        text("shortName"),
        flag("isDeprecated"),
        flag("isActive"),
        text("givenName"),
        text("surname"),
        text_opt("organizationalUnit"),
        text_opt("password"),
    ],
    relations: &[
        contains("emailAddress", ClassKind::EmailAddress),
        contains("telephoneNumber", ClassKind::TelephoneNumber),
        contains("userPreference", ClassKind::UserPreference),
        refers_one("organization", ClassKind::Organization),
        refers_one("defaultDomain", ClassKind::DomainOfExpertise),
        refers_one("role", ClassKind::PersonRole),
        refers_one("defaultEmailAddress", ClassKind::EmailAddress),
        refers_one("defaultTelephoneNumber", ClassKind::TelephoneNumber),
    ],
};

pub(crate) static EMAIL_ADDRESS: ClassSchema = ClassSchema {
    kind: ClassKind::EmailAddress,
    attributes: &[text("vcardType"), text("value")],
    relations: &[],
};

pub(crate) static TELEPHONE_NUMBER: ClassSchema = ClassSchema {
    kind: ClassKind::TelephoneNumber,
    attributes: &[text("vcardType"), text("value")],
    relations: &[],
};

pub(crate) static USER_PREFERENCE: ClassSchema = ClassSchema {
    kind: ClassKind::UserPreference,
    attributes: &[text("shortName"), text("value")],
    relations: &[],
};

pub(crate) static PERSON_ROLE: ClassSchema = ClassSchema {
    kind: ClassKind::PersonRole,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("personPermission", ClassKind::PersonPermission),
    ],
};

pub(crate) static PERSON_PERMISSION: ClassSchema = ClassSchema {
    kind: ClassKind::PersonPermission,
    attributes: &[
        text("accessRight"),
        text("objectClass"),
        flag("isDeprecated"),
    ],
    relations: &[],
};

pub(crate) static PARTICIPANT_ROLE: ClassSchema = ClassSchema {
    kind: ClassKind::ParticipantRole,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("participantPermission", ClassKind::ParticipantPermission),
    ],
};

pub(crate) static PARTICIPANT_PERMISSION: ClassSchema = ClassSchema {
    kind: ClassKind::ParticipantPermission,
    attributes: &[
        text("accessRight"),
        text("objectClass"),
        flag("isDeprecated"),
    ],
    relations: &[],
};

pub(crate) static NATURAL_LANGUAGE: ClassSchema = ClassSchema {
    kind: ClassKind::NaturalLanguage,
    attributes: &[
        text("languageCode"),
        text("nativeName"),
        text("name"),
    ],
    relations: &[],
};

pub(crate) static DOMAIN_OF_EXPERTISE: ClassSchema = ClassSchema {
    kind: ClassKind::DomainOfExpertise,
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
    ],
};

pub(crate) static DOMAIN_OF_EXPERTISE_GROUP: ClassSchema = ClassSchema {
    kind: ClassKind::DomainOfExpertiseGroup,
    attributes: &[
        text("name"),
        text("shortName"),
        flag("isDeprecated"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        refers("domain", ClassKind::DomainOfExpertise),
    ],
};

pub(crate) static ENGINEERING_MODEL_SETUP: ClassSchema = ClassSchema {
    kind: ClassKind::EngineeringModelSetup,
    attributes: &[
        text("name"),
        text("shortName"),
        text("kind"),
        text("studyPhase"),
        text("engineeringModelIid"),
        text_opt("sourceEngineeringModelSetupIid"),
    ],
    relations: &[
        contains("alias", ClassKind::Alias),
        contains("definition", ClassKind::Definition),
        contains("hyperLink", ClassKind::HyperLink),
        contains("participant", ClassKind::Participant),
        contains("requiredRdl", ClassKind::ModelReferenceDataLibrary),
        contains("iterationSetup", ClassKind::IterationSetup),
        refers("activeDomain", ClassKind::DomainOfExpertise),
    ],
};

pub(crate) static ITERATION_SETUP: ClassSchema = ClassSchema {
    kind: ClassKind::IterationSetup,
    attributes: &[
        text("iterationIid"),
        number("iterationNumber"),
        text("description"),
        flag("isDeleted"),
        text_opt("frozenOn"),
        text("createdOn"),
    ],
    relations: &[refers_one("sourceIterationSetup", ClassKind::IterationSetup)],
};

pub(crate) static PARTICIPANT: ClassSchema = ClassSchema {
    kind: ClassKind::Participant,
    attributes: &[flag("isActive")],
    relations: &[
        refers_one("role", ClassKind::PersonRole).required(),
        refers_one("person", ClassKind::Person).required(),
        refers_one("selectedDomain", ClassKind::DomainOfExpertise).required(),
        refers("domain", ClassKind::DomainOfExpertise),
    ],
};

pub(crate) static SITE_LOG_ENTRY: ClassSchema = ClassSchema {
    kind: ClassKind::SiteLogEntry,
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
