//! Elliptical rooms inscribed in their bounding box.

use dungen_core::{Point, Tile};
use rand::Rng;

use crate::generator::{RoomGenerator, sample_dimensions};
use crate::geometry::inside_ellipse;
use crate::room::Room;

/// Generates a disk of floor ringed by wall, with empty corners.
///
/// Sides are forced odd so the ellipse has an integer center; a sampled
/// even side is bumped up by one and may therefore exceed the requested
/// maximum.
#[derive(Debug, Clone, Copy, Default)]
pub struct EllipseGenerator;

impl RoomGenerator for EllipseGenerator {
    fn sample_size(&self, rng: &mut impl Rng, min: i32, max: i32) -> Point {
        let s = sample_dimensions(rng, min, max);
        Point::new(force_odd(s.x), force_odd(s.y))
    }

    fn build(&self, _rng: &mut impl Rng, origin: Point, size: Point) -> Option<Room> {
        let mut room = Room::new(origin, size.x, size.y);
        let bounds = room.tiles().bounds();
        let center = Point::new(size.x / 2, size.y / 2);
        let (rx, ry) = (center.x, center.y);

        if rx == 0 || ry == 0 {
            // One tile thick: no interior, nothing but wall.
            for p in bounds {
                room.set_tile(p, Tile::Wall);
            }
            return Some(room);
        }

        for p in bounds {
            let d = p - center;
            if inside_ellipse(d.x, d.y, rx, ry) {
                room.set_tile(p, Tile::Floor);
            }
        }
        for p in bounds {
            if room.tile(p) != Some(Tile::Floor) && room.has_cardinal_neighbor(p, Tile::Floor) {
                room.set_tile(p, Tile::Wall);
            }
        }
        Some(room)
    }
}

#[inline]
fn force_odd(n: i32) -> i32 {
    if n % 2 == 0 { n + 1 } else { n }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build(w: i32, h: i32) -> Room {
        let mut rng = StdRng::seed_from_u64(0);
        EllipseGenerator
            .build(&mut rng, Point::ZERO, Point::new(w, h))
            .unwrap()
    }

    fn render(room: &Room) -> Vec<String> {
        room.tiles()
            .rows()
            .map(|row| row.iter().map(|t| t.glyph()).collect())
            .collect()
    }

    #[test]
    fn sizes_are_odd() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let s = EllipseGenerator.sample_size(&mut rng, 4, 10);
            assert_eq!(s.x % 2, 1);
            assert_eq!(s.y % 2, 1);
            assert!((5..=11).contains(&s.x));
            assert!((5..=11).contains(&s.y));
        }
    }

    #[test]
    fn seven_by_five_layout() {
        let room = build(7, 5);
        assert_eq!(
            render(&room),
            vec![
                " ##### ",
                "#.....#",
                "#.....#",
                "#.....#",
                " ##### ",
            ]
        );
    }

    #[test]
    fn floor_is_point_symmetric() {
        let room = build(7, 5);
        let center = Point::new(3, 2);
        for (p, tile) in room.tiles().iter() {
            let mirror = center - (p - center);
            if tile == Tile::Floor {
                assert_eq!(room.tile(mirror), Some(Tile::Floor), "{p} vs {mirror}");
            }
        }
    }

    #[test]
    fn corners_stay_empty() {
        let room = build(11, 9);
        for p in [
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(0, 8),
            Point::new(10, 8),
        ] {
            assert_eq!(room.tile(p), Some(Tile::Empty));
        }
    }

    #[test]
    fn walls_touch_floor() {
        let room = build(13, 9);
        for (p, tile) in room.tiles().iter() {
            if tile == Tile::Wall {
                assert!(room.has_cardinal_neighbor(p, Tile::Floor), "stray wall at {p}");
            }
        }
    }

    #[test]
    fn three_by_three_is_a_cross() {
        assert_eq!(render(&build(3, 3)), vec![" # ", "#.#", " # "]);
    }

    #[test]
    fn thin_ellipse_is_all_wall() {
        let room = build(1, 7);
        assert_eq!(room.tiles().count(Tile::Wall), 7);
        let room = build(9, 1);
        assert_eq!(room.tiles().count(Tile::Wall), 9);
    }
}
