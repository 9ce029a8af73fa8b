use utoipa::openapi::{Info, OpenApi};

pub fn openapi() -> OpenApi {
    let mut doc = <otaguard_module_validator::endpoints::ApiDoc as utoipa::OpenApi>::openapi();
    doc.info = Info::new("otaguard", env!("CARGO_PKG_VERSION"));
    doc
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_check_update() {
        let doc = openapi();
        assert!(doc.paths.paths.contains_key("/check-update"));
    }
}
