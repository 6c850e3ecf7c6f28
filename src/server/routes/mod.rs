pub(crate) mod orders;

use crate::server::controller::error::CustomError;
use actix_web::{HttpRequest, HttpResponse};
use log::debug;

/// fallback for requests matching no route
pub(crate) async fn not_found(req: HttpRequest) -> Result<HttpResponse, CustomError> {
    debug!("no route for {} {}", req.method(), req.path());
    Err(CustomError::RouteNotFound)
}

#[cfg(test)]
mod test {
    use crate::server::app;
    use crate::server::state::AppState;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn unknown_routes() {
        let app = test::init_service(app(AppState::new(true))).await;
        for req in [
            test::TestRequest::get().uri("/products"),
            test::TestRequest::get().uri("/orders/1/items"),
            test::TestRequest::put().uri("/orders/1"),
        ] {
            let res = test::call_service(&app, req.to_request()).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(res).await;
            assert_eq!(body, json!({"error": {"message": "Not found"}}));
        }
    }
}
