//! # Collision Detection
//!
//! Movement validation against the obstacle field: wrap-corrected circle
//! overlap with the flyover rule. Pure over its inputs, bounded by the
//! registry size, called once per proposed move.

use crate::obstacle::ObstacleField;
use mirage_shared::{MapSize, Vec2};

/// The moving body being validated.
#[derive(Clone, Copy, Debug)]
pub struct Probe {
    /// Collision radius.
    pub radius: f32,
    /// Height above the ground plane. Obstacles no taller than this are
    /// flown over unconditionally, whatever the horizontal overlap.
    pub height: f32,
}

/// True when the proposed position collides with any registered obstacle.
///
/// Short-circuits on the first hit; when several obstacles overlap the
/// proposed position there is no guarantee which one terminated the scan.
/// Displacements fold through the nearest map seam, so a move wrapped by a
/// full period collides exactly like the unwrapped one.
#[must_use]
pub fn check_collision(
    field: &ObstacleField,
    probe: &Probe,
    proposed: Vec2,
    map: MapSize,
) -> bool {
    for obstacle in field.obstacles() {
        // Flyover: tall movers pass over short obstacles.
        if probe.height >= obstacle.height {
            continue;
        }

        let delta = map.wrap_delta(proposed - Vec2::new(obstacle.x, obstacle.y));
        let combined = obstacle.radius + probe.radius;
        if delta.length_squared() < combined * combined {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::ObstacleField;

    fn single_obstacle_field() -> ObstacleField {
        let mut field = ObstacleField::new();
        // x, y, radius, height, id, kind
        field.insert_batch(&[10.0, 10.0, 2.0, 1.0, 1.0, 0.0]);
        field
    }

    const MAP: MapSize = MapSize::new(100.0, 100.0);

    #[test]
    fn test_adjacent_move_collides() {
        let field = single_obstacle_field();
        let probe = Probe {
            radius: 0.5,
            height: 0.0,
        };
        // Distance 1 from the obstacle center, combined radius 2.5.
        assert!(check_collision(&field, &probe, Vec2::new(11.0, 10.0), MAP));
    }

    #[test]
    fn test_clear_move_does_not_collide() {
        let field = single_obstacle_field();
        let probe = Probe {
            radius: 0.5,
            height: 0.0,
        };
        assert!(!check_collision(&field, &probe, Vec2::new(20.0, 10.0), MAP));
    }

    #[test]
    fn test_flyover_ignores_overlap() {
        let field = single_obstacle_field();
        let tall = Probe {
            radius: 0.5,
            height: 1.0, // equal height already clears
        };
        assert!(!check_collision(&field, &tall, Vec2::new(10.0, 10.0), MAP));
    }

    #[test]
    fn test_full_period_wrap_collides_identically() {
        let field = single_obstacle_field();
        let probe = Probe {
            radius: 0.5,
            height: 0.0,
        };
        let direct = Vec2::new(10.0, 10.0);
        let wrapped = Vec2::new(10.0 + MAP.width, 10.0);
        assert_eq!(
            check_collision(&field, &probe, direct, MAP),
            check_collision(&field, &probe, wrapped, MAP),
        );
        assert!(check_collision(&field, &probe, wrapped, MAP));
    }

    #[test]
    fn test_zero_radius_obstacle_never_blocks_zero_radius_probe() {
        let mut field = ObstacleField::new();
        field.insert_batch(&[10.0, 10.0, 0.0, 5.0, 1.0, 0.0]);
        let point = Probe {
            radius: 0.0,
            height: 0.0,
        };
        // Combined radius zero: even a dead-center hit is not < 0.
        assert!(!check_collision(&field, &point, Vec2::new(10.0, 10.0), MAP));
    }
}
