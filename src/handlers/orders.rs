use axum::{Json, extract::State, http::StatusCode};

use crate::assembler;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{OrderListResponse, OrderModel};
use crate::routes;
use crate::state::AppState;

/// GET /orders handler - List every order
///
/// Orders are read-only: the list endpoint is the whole surface for this
/// record type.
#[utoipa::path(
    get,
    path = routes::ORDERS,
    responses(
        (status = 200, description = "Every stored order", body = OrderListResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<OrderListResponse>), ApiError> {
    let data: Vec<OrderModel> = state
        .orders
        .find_all()?
        .iter()
        .map(|(id, order)| assembler::order_list_item(*id, order))
        .collect();

    tracing::info!("Listed {} orders", data.len());
    Ok((
        StatusCode::OK,
        Json(OrderListResponse {
            data,
            links: assembler::collection_links(routes::ORDERS),
        }),
    ))
}
