//! Converts stored records into response representations with links.
//!
//! Hrefs are plain strings built from the route constants and the record
//! identity. A representation built outside a list carries both a self link
//! and a collection link; inside a list each element carries only its self
//! link and the envelope carries the one collection link.

use uuid::Uuid;

use crate::models::{CollectionLinks, EmployeeModel, Link, OrderModel, ResourceLinks};
use crate::routes;
use crate::store::{Employee, Order};

fn item_href(base: &str, id: Uuid) -> String {
    format!("{base}/{id}")
}

/// Full employee representation: self link plus collection link.
pub fn employee_model(id: Uuid, employee: &Employee) -> EmployeeModel {
    EmployeeModel {
        id,
        name: employee.name.clone(),
        role: employee.role.clone(),
        links: ResourceLinks {
            self_link: Link::new(item_href(routes::EMPLOYEES, id)),
            collection: Some(Link::new(routes::EMPLOYEES)),
        },
    }
}

/// Employee representation for use inside a list envelope: self link only.
pub fn employee_list_item(id: Uuid, employee: &Employee) -> EmployeeModel {
    EmployeeModel {
        id,
        name: employee.name.clone(),
        role: employee.role.clone(),
        links: ResourceLinks {
            self_link: Link::new(item_href(routes::EMPLOYEES, id)),
            collection: None,
        },
    }
}

/// Order representation for use inside a list envelope: self link only.
pub fn order_list_item(id: Uuid, order: &Order) -> OrderModel {
    OrderModel {
        id,
        description: order.description.clone(),
        status: order.status,
        links: ResourceLinks {
            self_link: Link::new(item_href(routes::ORDERS, id)),
            collection: None,
        },
    }
}

/// Envelope links for a list endpoint rooted at `base`.
pub fn collection_links(base: &str) -> CollectionLinks {
    CollectionLinks {
        self_link: Link::new(base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::OrderStatus;

    #[test]
    fn test_employee_model_carries_self_and_collection_links() {
        let id = Uuid::new_v4();
        let employee = Employee {
            name: "Bilbo Baggins".to_string(),
            role: "burglar".to_string(),
        };

        let model = employee_model(id, &employee);

        assert_eq!(model.id, id);
        assert_eq!(model.name, "Bilbo Baggins");
        assert_eq!(model.role, "burglar");
        assert_eq!(model.links.self_link.href, format!("/employees/{}", id));
        assert_eq!(model.links.collection, Some(Link::new("/employees")));
    }

    #[test]
    fn test_employee_list_item_carries_self_link_only() {
        let id = Uuid::new_v4();
        let employee = Employee {
            name: "Frodo Baggins".to_string(),
            role: "thief".to_string(),
        };

        let model = employee_list_item(id, &employee);

        assert_eq!(model.links.self_link.href, format!("/employees/{}", id));
        assert_eq!(model.links.collection, None);
    }

    #[test]
    fn test_order_list_item_links() {
        let id = Uuid::new_v4();
        let order = Order {
            description: "MacBook Pro".to_string(),
            status: OrderStatus::Completed,
        };

        let model = order_list_item(id, &order);

        assert_eq!(model.id, id);
        assert_eq!(model.description, "MacBook Pro");
        assert_eq!(model.status, OrderStatus::Completed);
        assert_eq!(model.links.self_link.href, format!("/orders/{}", id));
        assert_eq!(model.links.collection, None);
    }

    #[test]
    fn test_collection_links() {
        assert_eq!(collection_links(routes::ORDERS).self_link.href, "/orders");
    }

    #[test]
    fn test_link_serialization() {
        let id = Uuid::new_v4();
        let employee = Employee {
            name: "Bilbo Baggins".to_string(),
            role: "burglar".to_string(),
        };

        // Outside a list the "self" and "collection" rels are both present.
        let json = serde_json::to_value(employee_model(id, &employee)).unwrap();
        assert_eq!(
            json["links"]["self"]["href"],
            format!("/employees/{}", id)
        );
        assert_eq!(json["links"]["collection"]["href"], "/employees");

        // Inside a list the collection rel is omitted entirely.
        let json = serde_json::to_value(employee_list_item(id, &employee)).unwrap();
        assert!(json["links"].get("collection").is_none());
    }
}
