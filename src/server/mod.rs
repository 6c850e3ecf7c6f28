//! main file for the server

pub mod model;
mod controller;
mod routes;
mod state;

use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, HttpServer};

/// Run the server
pub async fn run(ServerConfig { addr, echo_created_order }: ServerConfig) -> std::io::Result<()> {
    let state = AppState::new(echo_created_order);
    HttpServer::new(move || app(state.clone()))
        .bind(addr)?
        .run()
        .await
}

/// Assemble the application: middlewares, order routes and the not-found fallback
pub(crate) fn app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(NormalizePath::trim())
        .wrap(Logger::default())
        .service(routes::orders::scope())
        .default_service(web::to(routes::not_found))
}
