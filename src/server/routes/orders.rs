use crate::server::model::order::{
    GetOrderResponse, MessageResponse, Order, PostOrdersResponse, ORDERS_FETCHED_MSG, ORDER_CREATED_MSG,
    ORDER_DELETED_MSG, ORDER_DETAILS_MSG,
};
use crate::server::state::AppState;
use actix_web::{delete, post, route, web, HttpMessage, HttpRequest, HttpResponse, Scope};
use futures_util::StreamExt;
use log::{debug, warn};
use std::collections::HashMap;

/// bodies past this size are dropped, the order is still created
const MAX_ORDER_BODY_SIZE: usize = 262_144;

/// All order routes, mounted under `/orders`
pub(crate) fn scope() -> Scope {
    web::scope("/orders")
        .service(get_orders)
        .service(post_orders)
        .service(get_order)
        .service(delete_order)
}

#[route("", method = "GET", method = "HEAD")]
/// list orders
async fn get_orders() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: ORDERS_FETCHED_MSG,
    })
}

#[post("")]
/// create an order, echoing the submitted fields when enabled
async fn post_orders(req: HttpRequest, payload: web::Payload, data: web::Data<AppState>) -> HttpResponse {
    let order = match data.echoes_created_order() {
        true => Some(match read_body(payload).await {
            Some(body) => read_order(&req, &body),
            None => Order::default(),
        }),
        false => None,
    };
    debug!("order created, echo={:?}", order);
    HttpResponse::Created().json(PostOrdersResponse {
        message: ORDER_CREATED_MSG,
        order,
    })
}

#[route("/{order_id}", method = "GET", method = "HEAD")]
/// order details, the id is not looked up
async fn get_order(order_id: web::Path<String>) -> HttpResponse {
    let order_id = order_id.into_inner();
    debug!("order details requested, order_id={}", order_id);
    HttpResponse::Ok().json(GetOrderResponse {
        message: ORDER_DETAILS_MSG,
        order_id,
    })
}

#[delete("/{order_id}")]
/// delete an order, nothing is removed
async fn delete_order(order_id: web::Path<String>) -> HttpResponse {
    debug!("order deletion requested, order_id={}", order_id);
    HttpResponse::Ok().json(MessageResponse {
        message: ORDER_DELETED_MSG,
    })
}

/// Collect the body up to `MAX_ORDER_BODY_SIZE`, `None` when it is larger or broken.
async fn read_body(mut payload: web::Payload) -> Option<web::BytesMut> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                warn!("ignoring unreadable order body, {}", e);
                return None;
            }
        };
        if body.len() + chunk.len() > MAX_ORDER_BODY_SIZE {
            warn!("ignoring order body larger than {} bytes", MAX_ORDER_BODY_SIZE);
            return None;
        }
        body.extend_from_slice(&chunk);
    }
    Some(body)
}

/// Never fails: a body that can't be read yields an empty order.
fn read_order(req: &HttpRequest, body: &[u8]) -> Order {
    if body.is_empty() {
        return Order::default();
    }
    match req.content_type() {
        json if json.eq_ignore_ascii_case("application/json") => match serde_json::from_slice(body) {
            Ok(value) => Order::from_json(&value),
            Err(e) => {
                warn!("ignoring malformed json order body, {}", e);
                Order::default()
            }
        },
        form if form.eq_ignore_ascii_case("application/x-www-form-urlencoded") => {
            let fields = std::str::from_utf8(body)
                .ok()
                .and_then(|s| web::Query::<HashMap<String, String>>::from_query(s).ok());
            match fields {
                Some(fields) => Order::from_form(fields.into_inner()),
                None => {
                    warn!("ignoring malformed form order body");
                    Order::default()
                }
            }
        }
        other => {
            debug!("ignoring order body with content type `{}`", other);
            Order::default()
        }
    }
}
