//! Building and room generation.

use crate::faker::Faker;
use crate::geo::{Point, nearby_point};
use crate::records::{Building, Room};

/// Radius around the campus centre that buildings are placed within.
pub const CAMPUS_RADIUS_KM: f64 = 10.0;

/// Generate `count` buildings scattered around `center`.
///
/// Buildings were constructed between fifty and ten years before the
/// reference time.
pub fn generate_buildings(faker: &mut Faker, count: usize, center: Point) -> Vec<Building> {
    (0..count)
        .map(|_| {
            let oldest = faker.years_ago(50);
            let newest = faker.years_ago(10);
            Building {
                building_id: faker.id(),
                building_name: format!("{} Building", faker.last_name()),
                building_coordinates: nearby_point(faker.rng(), center, CAMPUS_RADIUS_KM),
                building_created_timestamp: faker.between(oldest, newest),
            }
        })
        .collect()
}

/// Generate the rooms of every building.
///
/// Each building has 1 to 11 floors and a fixed number of rooms per floor,
/// between 10 and 31. Rooms are named after their floor and position.
pub fn generate_rooms(faker: &mut Faker, buildings: &[Building]) -> Vec<Room> {
    let mut rooms = Vec::new();
    for building in buildings {
        let floors = faker.number(1, 11);
        let rooms_per_floor = faker.number(10, 31);
        for floor in 1..=floors {
            for position in 1..=rooms_per_floor {
                rooms.push(Room {
                    room_id: faker.id(),
                    building_id: building.building_id.clone(),
                    room_name: format!("{floor}{position:02}"),
                    room_capacity: i32::try_from(faker.number(100, 301)).unwrap_or(100),
                    room_floor: i32::try_from(floor).unwrap_or(i32::MAX),
                });
            }
        }
    }
    rooms
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Utc;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::config::DEFAULT_CAMPUS_CENTER;

    #[fixture]
    fn faker() -> Faker {
        Faker::from_seed(37, Utc::now(), 32)
    }

    #[rstest]
    fn buildings_predate_the_last_decade(mut faker: Faker) {
        let buildings = generate_buildings(&mut faker, 12, DEFAULT_CAMPUS_CENTER);
        let newest = faker.years_ago(10);
        let oldest = faker.years_ago(50);

        assert_eq!(buildings.len(), 12);
        for building in &buildings {
            assert!(building.building_created_timestamp <= newest);
            assert!(building.building_created_timestamp >= oldest);
        }
    }

    #[rstest]
    fn rooms_fill_every_floor_evenly(mut faker: Faker) {
        let buildings = generate_buildings(&mut faker, 4, DEFAULT_CAMPUS_CENTER);
        let rooms = generate_rooms(&mut faker, &buildings);

        for building in &buildings {
            let mut per_floor: HashMap<i32, usize> = HashMap::new();
            for room in rooms
                .iter()
                .filter(|room| room.building_id == building.building_id)
            {
                assert!((100..=301).contains(&room.room_capacity));
                *per_floor.entry(room.room_floor).or_default() += 1;
            }
            let floors = per_floor.len();
            assert!((1..=11).contains(&floors));
            for floor in 1..=i32::try_from(floors).expect("small") {
                assert!(per_floor.contains_key(&floor), "missing floor {floor}");
            }
            let mut counts: Vec<usize> = per_floor.into_values().collect();
            counts.dedup();
            assert_eq!(counts.len(), 1, "floors hold different room counts");
            assert!(counts.iter().all(|count| (10..=31).contains(count)));
        }
    }
}
