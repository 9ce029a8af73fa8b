use otaguard_common::version::Version;

/// One control unit currently installed on a vehicle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcuStatus {
    /// Identifier of the controller class, e.g. `BCM`
    pub ecu_type: String,
    pub version: Version,
}

impl EcuStatus {
    pub fn new(ecu_type: impl Into<String>, version: impl Into<Version>) -> Self {
        Self {
            ecu_type: ecu_type.into(),
            version: version.into(),
        }
    }
}

/// One minimum-version requirement attached to an update package.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependencyRule {
    /// The ECU type this rule targets
    pub required_type: String,
    pub min_version: Version,
}

impl DependencyRule {
    pub fn new(required_type: impl Into<String>, min_version: impl Into<Version>) -> Self {
        Self {
            required_type: required_type.into(),
            min_version: min_version.into(),
        }
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    Hash,
    PartialEq,
    Eq,
    strum::Display,
    serde::Serialize,
    serde::Deserialize,
    utoipa::ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RuleStatus {
    Pass,
    Fail,
}

/// Outcome of evaluating a single dependency rule.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct RuleResult {
    /// The ECU type the rule targeted
    pub rule: String,
    pub status: RuleStatus,
    /// Rendered installed version, present on PASS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    /// Rendered minimum version, present on PASS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_version: Option<String>,
    /// Human-readable failure cause, present on FAIL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RuleResult {
    pub fn pass(rule: impl Into<String>, current: Version, required: Version) -> Self {
        Self {
            rule: rule.into(),
            status: RuleStatus::Pass,
            current_version: Some(current.to_string()),
            required_version: Some(required.to_string()),
            reason: None,
        }
    }

    pub fn fail(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            status: RuleStatus::Fail,
            current_version: None,
            required_version: None,
            reason: Some(reason.into()),
        }
    }
}

/// The aggregate decision plus the itemized per-rule report.
///
/// `is_available` is always the conjunction of the per-rule statuses; it is
/// never computed independently of `details`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct Verdict {
    pub is_available: bool,
    pub details: Vec<RuleResult>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_renders_as_upper_case() {
        assert_eq!(RuleStatus::Pass.to_string(), "PASS");
        assert_eq!(RuleStatus::Fail.to_string(), "FAIL");
        assert_eq!(
            serde_json::to_value(RuleStatus::Fail).unwrap(),
            serde_json::json!("FAIL")
        );
    }

    #[test]
    fn pass_result_omits_reason() {
        let result = RuleResult::pass("BCM", Version::new(1, 2, 0), Version::new(1, 2, 0));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rule": "BCM",
                "status": "PASS",
                "current_version": "1.2.0",
                "required_version": "1.2.0",
            })
        );
    }

    #[test]
    fn fail_result_omits_versions() {
        let result = RuleResult::fail("VCU", "ECU not found for this rule");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rule": "VCU",
                "status": "FAIL",
                "reason": "ECU not found for this rule",
            })
        );
    }
}
