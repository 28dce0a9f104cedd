//! Populates storage with sample records at process start.

use anyhow::Result;

use crate::state::AppState;
use crate::store::{Employee, Order, OrderStatus};

/// Insert the demo employees and orders, logging each. Runs once at
/// startup; a storage failure here aborts the process.
pub fn preload(state: &AppState) -> Result<()> {
    for employee in [
        Employee {
            name: "Bilbo Baggins".to_string(),
            role: "burglar".to_string(),
        },
        Employee {
            name: "Frodo Baggins".to_string(),
            role: "thief".to_string(),
        },
    ] {
        let id = state.employees.save(None, employee.clone())?;
        tracing::info!("Preloaded employee {}: {} ({})", id, employee.name, employee.role);
    }

    for order in [
        Order {
            description: "MacBook Pro".to_string(),
            status: OrderStatus::Completed,
        },
        Order {
            description: "iPhone".to_string(),
            status: OrderStatus::InProgress,
        },
    ] {
        let id = state.orders.save(None, order.clone())?;
        tracing::info!("Preloaded order {}: {} ({:?})", id, order.description, order.status);
    }

    Ok(())
}
