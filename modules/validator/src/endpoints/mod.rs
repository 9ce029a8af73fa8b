use crate::{
    model::{DependencyRule, EcuStatus, RuleResult, RuleStatus},
    service,
};
use actix_web::{post, web, HttpResponse, Responder};
use otaguard_common::version::Version;
use utoipa::{OpenApi, ToSchema};

pub fn configure(config: &mut web::ServiceConfig) {
    config.service(check_update);
}

#[derive(OpenApi)]
#[openapi(
    paths(check_update),
    components(schemas(
        CheckRequest,
        CheckResponse,
        EcuInfo,
        RuleInfo,
        RuleResult,
        RuleStatus,
    )),
    tags()
)]
pub struct ApiDoc;

/// One installed ECU, as submitted by the caller.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct EcuInfo {
    #[serde(rename = "type")]
    pub ecu_type: String,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl From<EcuInfo> for EcuStatus {
    fn from(ecu: EcuInfo) -> Self {
        EcuStatus::new(ecu.ecu_type, Version::new(ecu.major, ecu.minor, ecu.patch))
    }
}

/// One minimum-version rule, as submitted by the caller.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct RuleInfo {
    pub required_type: String,
    pub min_major: u32,
    pub min_minor: u32,
    pub min_patch: u32,
}

impl From<RuleInfo> for DependencyRule {
    fn from(rule: RuleInfo) -> Self {
        DependencyRule::new(
            rule.required_type,
            Version::new(rule.min_major, rule.min_minor, rule.min_patch),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct CheckRequest {
    pub vehicle_id: String,
    pub package_id: String,
    pub ecus: Vec<EcuInfo>,
    pub rules: Vec<RuleInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct CheckResponse {
    pub vehicle_id: String,
    pub package_id: String,
    pub is_available: bool,
    pub details: Vec<RuleResult>,
}

#[utoipa::path(
    tag = "validator",
    operation_id = "checkUpdate",
    request_body = CheckRequest,
    responses(
        (status = 200, description = "Validation performed; the verdict is carried in the body", body = CheckResponse),
        (status = 400, description = "Malformed request"),
    ),
)]
#[post("/check-update")]
pub async fn check_update(web::Json(request): web::Json<CheckRequest>) -> impl Responder {
    let ecus: Vec<EcuStatus> = request.ecus.into_iter().map(Into::into).collect();
    let rules: Vec<DependencyRule> = request.rules.into_iter().map(Into::into).collect();

    let verdict = service::validate(&ecus, &rules);
    log::debug!(
        "vehicle {} / package {}: available={}",
        request.vehicle_id,
        request.package_id,
        verdict.is_available
    );

    HttpResponse::Ok().json(CheckResponse {
        vehicle_id: request.vehicle_id,
        package_id: request.package_id,
        is_available: verdict.is_available,
        details: verdict.details,
    })
}

#[cfg(test)]
mod test;
