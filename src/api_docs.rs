use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::loan::return_loan,
    ),
    tags(
        (name = "lendkeeper", description = "Lending reconciliation API")
    )
)]
pub struct ApiDoc;
