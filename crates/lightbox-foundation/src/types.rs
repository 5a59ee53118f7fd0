use lightbox_geometry::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer sample in the container's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Event timestamp in milliseconds; only differences matter.
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            time_ms,
        }
    }

    pub fn down(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, position, time_ms)
    }

    pub fn moved(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, position, time_ms)
    }

    pub fn up(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, position, time_ms)
    }

    pub fn cancel(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, position, time_ms)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}
