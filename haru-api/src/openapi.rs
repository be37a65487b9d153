//! OpenAPI document for the HARU API

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::content::vocabulary,
        crate::routes::content::history,
        crate::routes::content::literature,
        crate::routes::health::ping,
        crate::routes::health::liveness,
        crate::routes::health::readiness,
    ),
    components(schemas(
        haru_core::VocabularyRecord,
        haru_core::VocabWord,
        haru_core::HistoryRecord,
        haru_core::LiteratureRecord,
        crate::error::ErrorBody,
        crate::error::ErrorCode,
        crate::routes::health::HealthResponse,
        crate::routes::health::HealthStatus,
        crate::routes::health::HealthDetails,
        crate::routes::health::ComponentHealth,
        crate::routes::health::CacheHealth,
    )),
    tags(
        (name = "Content", description = "Daily generated content"),
        (name = "Health", description = "Health check endpoints"),
    ),
    info(
        title = "HARU API",
        description = "Daily learning-content service: vocabulary, history, literature",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().unwrap();
        assert!(json.contains("/api/generate"));
        assert!(json.contains("/api/history"));
        assert!(json.contains("/api/literature"));
        assert!(json.contains("/health/ready"));
    }
}
