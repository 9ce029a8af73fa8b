//! The dependency validation engine.
//!
//! A pure, single-pass transformation: given the vehicle's installed ECU
//! versions and an update package's minimum-version rules, produce a per-rule
//! report and the overall go/no-go verdict. No I/O, no shared state; calls are
//! independent and may run in parallel.

use crate::model::{DependencyRule, EcuStatus, RuleResult, RuleStatus, Verdict};
use otaguard_common::version::Version;

/// Returns true iff `current` satisfies the minimum `required` version.
///
/// Standard tuple ordering: major first, then minor, then patch. Equal
/// triples are compatible. Not symmetric for unequal inputs.
pub fn compare_versions(current: Version, required: Version) -> bool {
    current >= required
}

/// Evaluate every rule, in input order, against the installed ECU set.
///
/// One [`RuleResult`] is emitted per rule: a missing target ECU or an
/// installed version below the minimum is a per-rule FAIL, never an error of
/// the engine. On duplicate ECU types the first entry in input order wins.
pub fn validate(ecu_statuses: &[EcuStatus], rules: &[DependencyRule]) -> Verdict {
    let mut details = Vec::with_capacity(rules.len());

    for rule in rules {
        let target = ecu_statuses
            .iter()
            .find(|ecu| ecu.ecu_type == rule.required_type);

        let Some(target) = target else {
            details.push(RuleResult::fail(
                &rule.required_type,
                "ECU not found for this rule",
            ));
            continue;
        };

        if compare_versions(target.version, rule.min_version) {
            details.push(RuleResult::pass(
                &rule.required_type,
                target.version,
                rule.min_version,
            ));
        } else {
            details.push(RuleResult::fail(
                &rule.required_type,
                format!(
                    "version below minimum: current {} < required {}",
                    target.version, rule.min_version
                ),
            ));
        }
    }

    // vacuously true for an empty rule set
    let is_available = details
        .iter()
        .all(|result| result.status == RuleStatus::Pass);

    Verdict {
        is_available,
        details,
    }
}
