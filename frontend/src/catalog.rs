use shared::Tool;
use uuid::{uuid, Uuid};

/// The rental inventory shipped with the app. Ids are fixed so basket lines
/// persisted across reloads keep matching their catalog entries.
pub fn rental_catalog() -> Vec<Tool> {
    fn tool(id: Uuid, name: &str, category: &str, daily_rate_thb: u32) -> Tool {
        Tool {
            id,
            name: name.to_string(),
            category: category.to_string(),
            daily_rate_thb,
        }
    }

    vec![
        tool(
            uuid!("7b0c2aa1-44f4-4a3f-9a27-2d3b5f0a6c01"),
            "Cordless Drill 18V",
            "Power Tools",
            250,
        ),
        tool(
            uuid!("7b0c2aa1-44f4-4a3f-9a27-2d3b5f0a6c02"),
            "Angle Grinder 4\"",
            "Power Tools",
            300,
        ),
        tool(
            uuid!("7b0c2aa1-44f4-4a3f-9a27-2d3b5f0a6c03"),
            "Circular Saw 7-1/4\"",
            "Power Tools",
            350,
        ),
        tool(
            uuid!("7b0c2aa1-44f4-4a3f-9a27-2d3b5f0a6c04"),
            "Extension Ladder 6m",
            "Access Equipment",
            400,
        ),
        tool(
            uuid!("7b0c2aa1-44f4-4a3f-9a27-2d3b5f0a6c05"),
            "Pressure Washer 140 bar",
            "Cleaning",
            500,
        ),
        tool(
            uuid!("7b0c2aa1-44f4-4a3f-9a27-2d3b5f0a6c06"),
            "Inverter Welder 200A",
            "Welding",
            600,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_stable_and_unique() {
        let first = rental_catalog();
        let second = rental_catalog();
        assert_eq!(first, second);

        let mut ids: Vec<Uuid> = first.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), first.len());
    }
}
