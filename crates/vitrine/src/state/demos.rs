/// Identifies one of the six demo screens.
///
/// This is the whole of the "view selector": switching demos reassigns the
/// active id and nothing else. Each demo keeps its own state struct, so
/// leaving and returning preserves it until the user resets the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DemoId {
    #[default]
    Agency,
    EventsBoard,
    Banking,
    Market,
    Mortgage,
    Catering,
}

impl DemoId {
    pub const ALL: [DemoId; 6] = [
        DemoId::Agency,
        DemoId::EventsBoard,
        DemoId::Banking,
        DemoId::Market,
        DemoId::Mortgage,
        DemoId::Catering,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DemoId::Agency => "Agency",
            DemoId::EventsBoard => "Events",
            DemoId::Banking => "Banking",
            DemoId::Market => "Market",
            DemoId::Mortgage => "Mortgage",
            DemoId::Catering => "Catering",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            DemoId::Agency => 0,
            DemoId::EventsBoard => 1,
            DemoId::Banking => 2,
            DemoId::Market => 3,
            DemoId::Mortgage => 4,
            DemoId::Catering => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips() {
        for demo in DemoId::ALL {
            assert_eq!(DemoId::from_index(demo.index()), Some(demo));
        }
        assert_eq!(DemoId::from_index(DemoId::ALL.len()), None);
    }
}
