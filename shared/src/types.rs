use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// Catalog Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    /// Rental price per day, in Thai baht.
    pub daily_rate_thb: u32,
}

// ============================================================================
// Cart Types
// ============================================================================

/// One entry in the shopping basket. `quantity` is always positive; a line
/// that drops to zero is removed from the basket instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub tool: Tool,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total_thb(&self) -> u32 {
        self.tool.daily_rate_thb * self.quantity
    }
}

// ============================================================================
// Order Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    PaymentVerification,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::PaymentVerification => "payment_verification",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Human-readable label for status badges.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::PaymentVerification => "Payment verification",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// True for orders that still need attention: counted in the navbar badge.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Processing | OrderStatus::PaymentVerification
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown order status: {0}")]
pub struct ParseOrderStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "payment_verification" => Ok(OrderStatus::PaymentVerification),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(ParseOrderStatusError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub lines: Vec<CartLine>,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total_thb(&self) -> u32 {
        self.lines.iter().map(CartLine::line_total_thb).sum()
    }

    /// Short id shown in order lists.
    pub fn reference(&self) -> String {
        self.id.simple().to_string()[..8].to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(name: &str, rate: u32) -> Tool {
        Tool {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: "Power Tools".to_string(),
            daily_rate_thb: rate,
        }
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::PaymentVerification,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("refunded".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_in_progress_statuses() {
        assert!(OrderStatus::Pending.is_in_progress());
        assert!(OrderStatus::Processing.is_in_progress());
        assert!(OrderStatus::PaymentVerification.is_in_progress());
        assert!(!OrderStatus::Shipped.is_in_progress());
        assert!(!OrderStatus::Delivered.is_in_progress());
        assert!(!OrderStatus::Cancelled.is_in_progress());
    }

    #[test]
    fn test_status_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&OrderStatus::PaymentVerification).unwrap();
        assert_eq!(json, "\"payment_verification\"");

        let back: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(back, OrderStatus::Delivered);
    }

    #[test]
    fn test_order_totals() {
        let order = Order {
            id: Uuid::new_v4(),
            lines: vec![
                CartLine { tool: tool("Cordless Drill", 250), quantity: 2 },
                CartLine { tool: tool("Angle Grinder", 300), quantity: 1 },
            ],
            status: OrderStatus::Pending,
            placed_at: Utc::now(),
        };

        assert_eq!(order.total_items(), 3);
        assert_eq!(order.total_thb(), 800);
        assert_eq!(order.reference().len(), 8);
    }
}
