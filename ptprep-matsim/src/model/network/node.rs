use super::NodeId;
use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// a point location in the network where links start and end. coordinates
/// are in the projected coordinate system of the source network file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub coord: Coord<f64>,
}

impl Node {
    pub fn new(id: NodeId, x: f64, y: f64) -> Node {
        Node {
            id,
            coord: Coord { x, y },
        }
    }

    pub fn get_point(&self) -> Point<f64> {
        Point(self.coord)
    }
}
