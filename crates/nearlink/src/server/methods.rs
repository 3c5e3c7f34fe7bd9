use axum::Json;

use nearlink_core::rpc::catalog::{self, MethodCategory};

#[derive(serde::Serialize)]
pub(super) struct MethodsResponse {
    categories: &'static [MethodCategory],
    total: usize,
}

/// Catalog listing consumed by the UI to render the method grid. Purely
/// static data; no RPC round-trip involved.
pub(super) async fn list_methods() -> Json<MethodsResponse> {
    Json(MethodsResponse {
        categories: catalog::METHOD_CATALOG,
        total: catalog::method_count(),
    })
}
