pub mod openapi;
pub mod sample_data;
pub mod tracing;

use actix_web::{
    error::{InternalError, JsonPayloadError},
    middleware::Logger,
    web, App, HttpRequest, HttpResponse, HttpServer, Responder,
};
use anyhow::Context;
use otaguard_common::{config, db::Database, error::ErrorInformation};
use serde_json::json;
use utoipa_rapidoc::RapiDoc;

/// Run the API server.
pub struct Run {
    pub database: config::Database,
    pub http: HttpServerConfig,
    /// Bootstrap the database and insert sample data before serving
    pub devmode: bool,
}

#[derive(Clone, Debug, clap::Args)]
#[command(
    rename_all_env = "SCREAMING_SNAKE_CASE",
    next_help_heading = "HTTP endpoint"
)]
#[group(id = "http")]
pub struct HttpServerConfig {
    /// The number of worker threads, defaults to zero, which falls back to the number of cores.
    #[arg(
        id = "http-server-workers",
        long,
        env = "HTTP_SERVER_WORKERS",
        default_value_t = 0
    )]
    pub workers: usize,

    /// The address to listen on
    #[arg(
        id = "http-server-bind-address",
        long,
        env = "HTTP_SERVER_BIND_ADDR",
        default_value_t = default::bind_addr(),
    )]
    pub bind_addr: String,

    /// The port to listen on
    #[arg(
        id = "http-server-bind-port",
        long,
        env = "HTTP_SERVER_BIND_PORT",
        default_value_t = 8080
    )]
    pub bind_port: u16,

    /// The JSON request limit, in bytes
    #[arg(
        id = "http-server-json-limit",
        long,
        env = "HTTP_SERVER_JSON_LIMIT",
        default_value_t = default::json_limit(),
    )]
    pub json_limit: usize,
}

mod default {
    pub fn bind_addr() -> String {
        "::1".to_string()
    }

    pub const fn json_limit() -> usize {
        2 * 1024 * 1024
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            bind_addr: default::bind_addr(),
            bind_port: 8080,
            json_limit: default::json_limit(),
        }
    }
}

impl Run {
    pub async fn run(self) -> anyhow::Result<()> {
        if self.devmode {
            log::warn!("devmode: bootstrapping the database and inserting sample data");
            let db = Database::bootstrap(&self.database).await?;
            sample_data::sample_data(&db).await?;
            db.close().await?;
        }

        let json_limit = self.http.json_limit;
        let doc = openapi::openapi();

        let mut http = HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .configure(|svc| configure(svc, json_limit))
                .service(RapiDoc::with_openapi("/openapi.json", doc.clone()).path("/docs"))
        });

        if self.http.workers > 0 {
            http = http.workers(self.http.workers);
        }

        let http = http
            .bind((self.http.bind_addr.as_str(), self.http.bind_port))
            .context("failed to bind HTTP endpoint")?;

        log::info!("running HTTP endpoint on:");
        for (addr, scheme) in http.addrs_with_scheme() {
            log::info!("   {scheme}://{addr}");
        }

        http.run().await.context("failed to run HTTP endpoint")?;

        Ok(())
    }
}

/// Build the HTTP service in a consistent way, for the server and for tests.
pub fn configure(svc: &mut web::ServiceConfig, json_limit: usize) {
    svc.app_data(
        web::JsonConfig::default()
            .limit(json_limit)
            .error_handler(json_error_handler),
    )
    .service(web::resource("/").to(index))
    .configure(otaguard_module_validator::configure);
}

/// Static liveness message; the actual API lives one level down.
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "OTA dependency validator is running"
    }))
}

/// Malformed request bodies never reach the validation core. They are
/// rejected here with a structured 400 response.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let information = ErrorInformation::new("MalformedRequest", &err);
    InternalError::from_response(err, HttpResponse::BadRequest().json(information)).into()
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_http::StatusCode;
    use actix_web::test::{call_and_read_body_json, call_service, init_service, TestRequest};
    use serde_json::Value;
    use test_log::test;

    #[test(actix_web::test)]
    async fn index_reports_liveness() {
        let app = init_service(
            App::new().configure(|svc| configure(svc, default::json_limit())),
        )
        .await;

        let req = TestRequest::get().uri("/").to_request();
        let body: Value = call_and_read_body_json(&app, req).await;

        assert_eq!(body["message"], "OTA dependency validator is running");
    }

    #[test(actix_web::test)]
    async fn malformed_json_yields_structured_400() {
        let app = init_service(
            App::new().configure(|svc| configure(svc, default::json_limit())),
        )
        .await;

        let req = TestRequest::post()
            .uri("/check-update")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();

        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_web::test::read_body_json(resp).await;
        assert_eq!(body["error"], "MalformedRequest");
    }

    #[test(actix_web::test)]
    async fn verdict_is_carried_in_the_body_not_the_status() {
        let app = init_service(
            App::new().configure(|svc| configure(svc, default::json_limit())),
        )
        .await;

        let req = TestRequest::post()
            .uri("/check-update")
            .set_json(serde_json::json!({
                "vehicle_id": "V002",
                "package_id": "PKG_BMS_30",
                "ecus": [{"type": "BCM", "major": 1, "minor": 0, "patch": 0}],
                "rules": [{"required_type": "BCM", "min_major": 1, "min_minor": 2, "min_patch": 0}],
            }))
            .to_request();

        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_web::test::read_body_json(resp).await;
        assert_eq!(body["is_available"], false);
    }
}
