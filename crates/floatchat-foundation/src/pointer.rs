use floatchat_core::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer event as delivered by the host.
///
/// `uptime_ms` is the host's monotonic event timestamp; it becomes the
/// sample time for the release velocity estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub uptime_ms: u64,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Point, uptime_ms: u64) -> Self {
        Self {
            id,
            kind,
            position,
            uptime_ms,
        }
    }

    pub fn down(id: PointerId, position: Point, uptime_ms: u64) -> Self {
        Self::new(id, PointerEventKind::Down, position, uptime_ms)
    }

    pub fn moved(id: PointerId, position: Point, uptime_ms: u64) -> Self {
        Self::new(id, PointerEventKind::Move, position, uptime_ms)
    }

    pub fn up(id: PointerId, position: Point, uptime_ms: u64) -> Self {
        Self::new(id, PointerEventKind::Up, position, uptime_ms)
    }

    pub fn cancel(id: PointerId, position: Point, uptime_ms: u64) -> Self {
        Self::new(id, PointerEventKind::Cancel, position, uptime_ms)
    }
}
