use glam::Vec2;

/// An axis-aligned rectangle described by its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub corner: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(corner: Vec2, size: Vec2) -> Self {
        Self { corner, size }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.corner.x
            && point.x <= self.corner.x + self.size.x
            && point.y >= self.corner.y
            && point.y <= self.corner.y + self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_edge_inclusive() {
        let r = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(40.0, 60.0)));
        assert!(r.contains(Vec2::new(25.0, 33.0)));
        assert!(!r.contains(Vec2::new(9.9, 30.0)));
        assert!(!r.contains(Vec2::new(41.0, 30.0)));
    }
}
