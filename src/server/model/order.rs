use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub(crate) const ORDERS_FETCHED_MSG: &str = "Orders were fetched";
pub(crate) const ORDER_CREATED_MSG: &str = "Order was created";
pub(crate) const ORDER_DETAILS_MSG: &str = "Order details";
pub(crate) const ORDER_DELETED_MSG: &str = "Order deleted";

const PRODUCT_ID_FIELD: &str = "productId";
const QUANTITY_FIELD: &str = "quantity";

/// Echo of the order fields a client submitted. Nothing is validated or stored.
#[derive(Debug, Default, PartialEq, Serialize)]
pub(crate) struct Order {
    #[serde(rename = "productId", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
}

impl Order {
    /// Pick the order fields out of a json body; anything but an object gives an empty order.
    pub fn from_json(body: &Value) -> Self {
        match body.as_object() {
            Some(fields) => Self {
                product_id: fields.get(PRODUCT_ID_FIELD).cloned(),
                quantity: fields.get(QUANTITY_FIELD).cloned(),
            },
            None => Self::default(),
        }
    }

    pub fn from_form(mut fields: HashMap<String, String>) -> Self {
        Self {
            product_id: fields.remove(PRODUCT_ID_FIELD).map(Value::String),
            quantity: fields.remove(QUANTITY_FIELD).map(Value::String),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostOrdersResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetOrderResponse {
    pub message: &'static str,
    #[serde(rename = "orderId")]
    pub order_id: String,
}
