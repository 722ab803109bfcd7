//! Client-side stores for the basket and the order list.
//!
//! Both stores live in Leptos context and persist their contents to
//! `localStorage` so a reload keeps the basket. Absent or unreadable stored
//! data loads as the empty collection rather than failing the app.

use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use shared::{CartLine, Order, OrderStatus, Tool};
use uuid::Uuid;

const CART_KEY: &str = "tool2u_cart";
const ORDERS_KEY: &str = "tool2u_orders";

/// Sum of line quantities across the whole basket.
pub fn count_items(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

/// Orders that still need attention from the customer or staff.
pub fn count_in_progress(orders: &[Order]) -> u32 {
    orders.iter().filter(|o| o.status.is_in_progress()).count() as u32
}

fn add_line(lines: &mut Vec<CartLine>, tool: Tool) {
    if let Some(line) = lines.iter_mut().find(|l| l.tool.id == tool.id) {
        line.quantity += 1;
    } else {
        lines.push(CartLine { tool, quantity: 1 });
    }
}

fn apply_status(orders: &mut [Order], id: Uuid, status: OrderStatus) {
    if let Some(order) = orders.iter_mut().find(|o| o.id == id) {
        order.status = status;
    }
}

fn apply_quantity(lines: &mut Vec<CartLine>, tool_id: Uuid, quantity: u32) {
    if quantity == 0 {
        lines.retain(|l| l.tool.id != tool_id);
    } else if let Some(line) = lines.iter_mut().find(|l| l.tool.id == tool_id) {
        line.quantity = quantity;
    }
}

#[derive(Clone)]
pub struct CartState {
    pub items: RwSignal<Vec<CartLine>>,
}

impl CartState {
    pub fn new() -> Self {
        let stored: Vec<CartLine> = LocalStorage::get(CART_KEY).unwrap_or_default();

        Self {
            items: create_rw_signal(stored),
        }
    }

    fn persist(&self) {
        LocalStorage::set(CART_KEY, &self.items.get_untracked()).ok();
    }

    /// Adds one unit of the tool, merging with an existing line if present.
    pub fn add(&self, tool: Tool) {
        self.items.update(|lines| add_line(lines, tool));
        self.persist();
    }

    /// Sets a line's quantity; zero removes the line.
    pub fn set_quantity(&self, tool_id: Uuid, quantity: u32) {
        self.items.update(|lines| apply_quantity(lines, tool_id, quantity));
        self.persist();
    }

    pub fn remove(&self, tool_id: Uuid) {
        self.set_quantity(tool_id, 0);
    }

    pub fn clear(&self) {
        self.items.set(Vec::new());
        LocalStorage::delete(CART_KEY);
    }

    pub fn total_items(&self) -> u32 {
        self.items.with(|lines| count_items(lines))
    }

    pub fn estimated_total_thb(&self) -> u32 {
        self.items
            .with(|lines| lines.iter().map(CartLine::line_total_thb).sum())
    }
}

#[derive(Clone)]
pub struct OrderState {
    pub orders: RwSignal<Vec<Order>>,
}

impl OrderState {
    pub fn new() -> Self {
        let stored: Vec<Order> = LocalStorage::get(ORDERS_KEY).unwrap_or_default();

        Self {
            orders: create_rw_signal(stored),
        }
    }

    fn persist(&self) {
        LocalStorage::set(ORDERS_KEY, &self.orders.get_untracked()).ok();
    }

    /// Turns the given basket lines into a new pending order, newest first.
    pub fn place(&self, lines: Vec<CartLine>) -> Order {
        let order = Order {
            id: Uuid::new_v4(),
            lines,
            status: OrderStatus::Pending,
            placed_at: chrono::Utc::now(),
        };

        self.orders.update(|orders| orders.insert(0, order.clone()));
        self.persist();
        order
    }

    pub fn set_status(&self, id: Uuid, status: OrderStatus) {
        self.orders.update(|orders| apply_status(orders, id, status));
        self.persist();
    }

    pub fn pending_count(&self) -> u32 {
        self.orders.with(|orders| count_in_progress(orders))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tool(id: u128, name: &str, rate: u32) -> Tool {
        Tool {
            id: Uuid::from_u128(id),
            name: name.to_string(),
            category: "Power Tools".to_string(),
            daily_rate_thb: rate,
        }
    }

    fn order(status: OrderStatus) -> Order {
        Order {
            id: Uuid::new_v4(),
            lines: vec![CartLine {
                tool: tool(1, "Cordless Drill", 250),
                quantity: 1,
            }],
            status,
            placed_at: Utc::now(),
        }
    }

    #[test]
    fn test_count_items_sums_quantities() {
        let lines = vec![
            CartLine { tool: tool(1, "Cordless Drill", 250), quantity: 2 },
            CartLine { tool: tool(2, "Angle Grinder", 300), quantity: 1 },
        ];
        assert_eq!(count_items(&lines), 3);
        assert_eq!(count_items(&[]), 0);
    }

    #[test]
    fn test_count_in_progress_skips_settled_orders() {
        let orders = vec![
            order(OrderStatus::Pending),
            order(OrderStatus::Delivered),
            order(OrderStatus::Processing),
        ];
        assert_eq!(count_in_progress(&orders), 2);

        let all_settled = vec![order(OrderStatus::Delivered), order(OrderStatus::Cancelled)];
        assert_eq!(count_in_progress(&all_settled), 0);
    }

    #[test]
    fn test_add_line_merges_duplicate_tools() {
        let mut lines = Vec::new();
        add_line(&mut lines, tool(1, "Cordless Drill", 250));
        add_line(&mut lines, tool(1, "Cordless Drill", 250));
        add_line(&mut lines, tool(2, "Angle Grinder", 300));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(count_items(&lines), 3);
    }

    #[test]
    fn test_zero_quantity_removes_line() {
        let mut lines = Vec::new();
        add_line(&mut lines, tool(1, "Cordless Drill", 250));
        add_line(&mut lines, tool(2, "Angle Grinder", 300));

        apply_quantity(&mut lines, Uuid::from_u128(1), 4);
        assert_eq!(lines[0].quantity, 4);

        apply_quantity(&mut lines, Uuid::from_u128(1), 0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].tool.id, Uuid::from_u128(2));
    }

    #[test]
    fn test_status_change_settles_an_order() {
        let mut orders = vec![order(OrderStatus::Pending), order(OrderStatus::Processing)];
        assert_eq!(count_in_progress(&orders), 2);

        let delivered_id = orders[0].id;
        apply_status(&mut orders, delivered_id, OrderStatus::Delivered);
        assert_eq!(orders[0].status, OrderStatus::Delivered);
        assert_eq!(count_in_progress(&orders), 1);

        // Unknown ids leave the list untouched.
        apply_status(&mut orders, Uuid::from_u128(999), OrderStatus::Cancelled);
        assert_eq!(count_in_progress(&orders), 1);
    }

    #[test]
    fn test_persisted_cart_format_parses() {
        let json = r#"[{
            "tool": {
                "id": "00000000-0000-0000-0000-000000000001",
                "name": "Cordless Drill",
                "category": "Power Tools",
                "daily_rate_thb": 250
            },
            "quantity": 2
        }]"#;

        let lines: Vec<CartLine> = serde_json::from_str(json).unwrap();
        assert_eq!(count_items(&lines), 2);
    }
}
