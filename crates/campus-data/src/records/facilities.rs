//! Buildings and rooms.

use chrono::{DateTime, Utc};

use crate::geo::Point;

table_record! {
    /// A campus building.
    pub struct Building in "buildings" {
        building_id: String => Text,
        building_name: String => Text,
        building_coordinates: Point => Point,
        building_created_timestamp: DateTime<Utc> => Timestamp,
    }
}

table_record! {
    /// A room on one floor of a building.
    pub struct Room in "rooms" {
        room_id: String => Text,
        building_id: String => Text,
        room_name: String => Text,
        room_capacity: i32 => Integer,
        room_floor: i32 => Integer,
    }
}
