//! Parameters, overrides, subscriptions and their value sets.

use crate::model::ClassKind;
use crate::templates::schema::{contains, flag, refers_one, text, value, ClassSchema};

pub(crate) static PARAMETER_BASE: ClassSchema = ClassSchema {
    kind: ClassKind::ParameterBase,
    attributes: &[flag("isOptionDependent")],
    relations: &[
        refers_one("parameterType", ClassKind::ParameterType).required(),
        refers_one("scale", ClassKind::MeasurementScale),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        refers_one("stateDependence", ClassKind::ActualFiniteStateList),
        refers_one("group", ClassKind::ParameterGroup),
    ],
};

pub(crate) static PARAMETER_OR_OVERRIDE_BASE: ClassSchema = ClassSchema {
    kind: ClassKind::ParameterOrOverrideBase,
    attributes: &[flag("isOptionDependent")],
    relations: &[
        refers_one("parameterType", ClassKind::ParameterType).required(),
        refers_one("scale", ClassKind::MeasurementScale),
        refers_one("stateDependence", ClassKind::ActualFiniteStateList),
        refers_one("group", ClassKind::ParameterGroup),
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("parameterSubscription", ClassKind::ParameterSubscription),
    ],
};

pub(crate) static PARAMETER: ClassSchema = ClassSchema {
    kind: ClassKind::Parameter,
    attributes: &[
        flag("allowDifferentOwnerOfOverride"),
        flag("expectsOverride"),
        flag("isOptionDependent"),
    ],
    relations: &[
        refers_one("owner", ClassKind::DomainOfExpertise),
        refers_one("parameterType", ClassKind::ParameterType),
        refers_one("scale", ClassKind::MeasurementScale),
        refers_one("stateDependence", ClassKind::ActualFiniteStateList),
        refers_one("group", ClassKind::ParameterGroup),
        contains("valueSet", ClassKind::ParameterValueSet),
        refers_one("requestedBy", ClassKind::DomainOfExpertise),
        contains("parameterSubscription", ClassKind::ParameterSubscription),
    ],
};

pub(crate) static PARAMETER_OVERRIDE: ClassSchema = ClassSchema {
    kind: ClassKind::ParameterOverride,
    attributes: &[],
    relations: &[
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        contains("valueSet", ClassKind::ParameterOverrideValueSet),
        contains("parameterSubscription", ClassKind::ParameterSubscription),
        refers_one("parameter", ClassKind::Parameter).required(),
    ],
};

pub(crate) static PARAMETER_SUBSCRIPTION: ClassSchema = ClassSchema {
    kind: ClassKind::ParameterSubscription,
    attributes: &[],
    relations: &[
        refers_one("owner", ClassKind::DomainOfExpertise),
        contains("valueSet", ClassKind::ParameterValueSet),
    ],
};

pub(crate) static PARAMETER_VALUE_SET_BASE: ClassSchema = ClassSchema {
    kind: ClassKind::ParameterValueSetBase,
    attributes: &[
        text("valueSwitch"),
        value("computed"),
        value("manual"),
        value("reference"),
        value("actualValue"),
        value("published"),
        value("formula"),
    ],
    relations: &[
        refers_one("owner", ClassKind::DomainOfExpertise).required(),
        refers_one("actualState", ClassKind::ActualFiniteState),
        refers_one("actualOption", ClassKind::Option),
    ],
};

pub(crate) static PARAMETER_VALUE_SET: ClassSchema = ClassSchema {
    kind: ClassKind::ParameterValueSet,
    attributes: &[
        text("valueSwitch"),
        value("published"),
        value("formula"),
        value("computed"),
        value("manual"),
        value("reference"),
    ],
    relations: &[
        refers_one("actualState", ClassKind::ActualFiniteState),
        refers_one("actualOption", ClassKind::Option),
    ],
};

pub(crate) static PARAMETER_OVERRIDE_VALUE_SET: ClassSchema = ClassSchema {
    kind: ClassKind::ParameterOverrideValueSet,
    attributes: &[
        text("valueSwitch"),
        value("computed"),
        value("manual"),
        value("reference"),
        value("published"),
        value("formula"),
    ],
    relations: &[
        refers_one("parameterValueSet", ClassKind::ParameterValueSet).required(),
    ],
};

pub(crate) static PARAMETER_SUBSCRIPTION_VALUE_SET: ClassSchema = ClassSchema {
    kind: ClassKind::ParameterSubscriptionValueSet,
    attributes: &[text("valueSwitch"), value("manual")],
    relations: &[],
};
