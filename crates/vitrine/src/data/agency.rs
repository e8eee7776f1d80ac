//! Sample content for the creative agency demo.

#[derive(Debug, Clone)]
pub struct Project {
    pub title: &'static str,
    pub client: &'static str,
    pub year: u16,
    pub discipline: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Clone)]
pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Monolith",
            client: "Arcform Architecture",
            year: 2024,
            discipline: "Brand identity",
            blurb: "A full identity system for a brutalist architecture studio: wordmark, signage and a print program built around poured-concrete textures.",
        },
        Project {
            title: "Low Tide",
            client: "Harborline Hotels",
            year: 2024,
            discipline: "Web design",
            blurb: "Booking site for a boutique coastal hotel group, led by full-bleed photography and an unusually patient scroll rhythm.",
        },
        Project {
            title: "Signal & Noise",
            client: "Waveform Records",
            year: 2023,
            discipline: "Art direction",
            blurb: "Campaign and sleeve art for a three-album electronic series, generated from the masters' own spectrograms.",
        },
        Project {
            title: "Field Notes",
            client: "Meridian Outdoors",
            year: 2023,
            discipline: "Packaging",
            blurb: "Seasonal packaging refresh for a trail-gear label, with topographic-line illustration across forty SKUs.",
        },
        Project {
            title: "Second Shift",
            client: "Foundry Coffee",
            year: 2022,
            discipline: "Brand identity",
            blurb: "Naming and identity for a roastery opening inside a decommissioned steel mill, down to the enamel mugs.",
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            name: "Brand identity",
            description: "Naming, visual systems and guidelines that survive contact with real-world use.",
        },
        Service {
            name: "Web design",
            description: "Marketing sites and product surfaces, designed and built in-house.",
        },
        Service {
            name: "Art direction",
            description: "Campaigns, photography and motion for launches that need a point of view.",
        },
        Service {
            name: "Packaging",
            description: "Structural and graphic packaging from first sketch to press check.",
        },
    ]
}

pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember { name: "Mara Voss", role: "Founder, Creative Director" },
        TeamMember { name: "Devon Reyes", role: "Design Lead" },
        TeamMember { name: "Ines Okafor", role: "Strategy" },
        TeamMember { name: "Theo Lindqvist", role: "Engineering" },
        TeamMember { name: "Priya Natarajan", role: "Producer" },
    ]
}
