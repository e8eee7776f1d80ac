//! Sample content for the NFT marketplace demo.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NftCategory {
    Art,
    Photography,
    Music,
    Collectible,
}

impl NftCategory {
    pub const ALL: [NftCategory; 4] = [
        NftCategory::Art,
        NftCategory::Photography,
        NftCategory::Music,
        NftCategory::Collectible,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NftCategory::Art => "Art",
            NftCategory::Photography => "Photography",
            NftCategory::Music => "Music",
            NftCategory::Collectible => "Collectible",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NftListing {
    pub title: &'static str,
    pub collection: &'static str,
    pub creator: &'static str,
    pub category: NftCategory,
    pub price_eth: f64,
    pub likes: u32,
}

pub fn listings() -> Vec<NftListing> {
    vec![
        NftListing {
            title: "Fractured Dawn #7",
            collection: "Fractured Dawn",
            creator: "voidpainter",
            category: NftCategory::Art,
            price_eth: 2.40,
            likes: 318,
        },
        NftListing {
            title: "Neon Alley, Osaka",
            collection: "Night Walks",
            creator: "k.shutter",
            category: NftCategory::Photography,
            price_eth: 0.85,
            likes: 122,
        },
        NftListing {
            title: "Modular Dreams (stems)",
            collection: "Patch Notes",
            creator: "ondelay",
            category: NftCategory::Music,
            price_eth: 1.10,
            likes: 77,
        },
        NftListing {
            title: "Chrome Gecko #112",
            collection: "Chrome Geckos",
            creator: "geckoworks",
            category: NftCategory::Collectible,
            price_eth: 0.32,
            likes: 905,
        },
        NftListing {
            title: "Fractured Dawn #19",
            collection: "Fractured Dawn",
            creator: "voidpainter",
            category: NftCategory::Art,
            price_eth: 3.05,
            likes: 201,
        },
        NftListing {
            title: "Fog Over the Narrows",
            collection: "Night Walks",
            creator: "k.shutter",
            category: NftCategory::Photography,
            price_eth: 0.64,
            likes: 58,
        },
        NftListing {
            title: "Chrome Gecko #41",
            collection: "Chrome Geckos",
            creator: "geckoworks",
            category: NftCategory::Collectible,
            price_eth: 0.29,
            likes: 640,
        },
        NftListing {
            title: "Sine Language",
            collection: "Patch Notes",
            creator: "ondelay",
            category: NftCategory::Music,
            price_eth: 1.95,
            likes: 164,
        },
    ]
}
