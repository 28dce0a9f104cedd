use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::OrderStatus;

/// Candidate employee submitted by clients on create and replace. Any
/// client-supplied identity field is ignored; identities come from storage.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmployeeInput {
    pub name: String,
    pub role: String,
}

/// A navigational link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Links attached to a single-resource representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResourceLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    /// Link back to the list endpoint. Omitted inside list envelopes, which
    /// carry a single collection-level link instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<Link>,
}

/// Links attached to a list envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
}

/// An employee representation with navigational links
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmployeeModel {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub links: ResourceLinks,
}

/// Response type for the employee list endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<EmployeeModel>,
    pub links: CollectionLinks,
}

/// An order representation with navigational links
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrderModel {
    pub id: Uuid,
    pub description: String,
    pub status: OrderStatus,
    pub links: ResourceLinks,
}

/// Response type for the order list endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrderListResponse {
    pub data: Vec<OrderModel>,
    pub links: CollectionLinks,
}
