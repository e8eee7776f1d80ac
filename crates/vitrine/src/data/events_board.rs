//! Sample content for the events-management dashboard demo.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Live,
    Ended,
}

impl EventStatus {
    pub fn name(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Live => "Live",
            EventStatus::Ended => "Ended",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ManagedEvent {
    pub name: &'static str,
    pub date: &'static str,
    pub venue: &'static str,
    pub status: EventStatus,
    pub capacity: u32,
    pub registered: u32,
    pub organizer: &'static str,
}

impl ManagedEvent {
    /// Registrations as a fraction of capacity, clamped for overbooking.
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.registered as f64 / self.capacity as f64).min(1.0)
    }
}

pub fn events() -> Vec<ManagedEvent> {
    vec![
        ManagedEvent {
            name: "Product Summit 2026",
            date: "2026-09-14",
            venue: "Harborview Convention Center",
            status: EventStatus::Upcoming,
            capacity: 1200,
            registered: 847,
            organizer: "Dana Whitfield",
        },
        ManagedEvent {
            name: "Design Systems Meetup",
            date: "2026-08-26",
            venue: "Studio 42",
            status: EventStatus::Live,
            capacity: 80,
            registered: 80,
            organizer: "Kofi Mensah",
        },
        ManagedEvent {
            name: "Quarterly All Hands",
            date: "2026-10-02",
            venue: "Main Auditorium",
            status: EventStatus::Upcoming,
            capacity: 450,
            registered: 121,
            organizer: "Lena Brandt",
        },
        ManagedEvent {
            name: "API Workshop Series",
            date: "2026-08-25",
            venue: "Training Room B",
            status: EventStatus::Live,
            capacity: 30,
            registered: 28,
            organizer: "Marcus Oyelaran",
        },
        ManagedEvent {
            name: "Spring Hackathon",
            date: "2026-04-18",
            venue: "Innovation Lab",
            status: EventStatus::Ended,
            capacity: 200,
            registered: 214,
            organizer: "Dana Whitfield",
        },
        ManagedEvent {
            name: "Customer Advisory Board",
            date: "2026-06-09",
            venue: "Boardroom 1",
            status: EventStatus::Ended,
            capacity: 25,
            registered: 22,
            organizer: "Lena Brandt",
        },
        ManagedEvent {
            name: "Partner Expo",
            date: "2026-11-20",
            venue: "Harborview Convention Center",
            status: EventStatus::Upcoming,
            capacity: 2000,
            registered: 356,
            organizer: "Kofi Mensah",
        },
    ]
}
