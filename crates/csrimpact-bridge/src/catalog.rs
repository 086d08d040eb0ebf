//! Static reference data: sectors, showcase projects, and partner names.
//!
//! Everything here is immutable demo content. Funding deltas from simulated
//! donations are layered on top by the backend and never written back.

/// Closed set of glyph identifiers for sector cards.
///
/// The frontend maps each variant to a concrete icon through one exhaustive
/// `match`, so adding a variant cannot produce a missing-icon state at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorIcon {
    BookOpen,
    Wheat,
    Heart,
    Leaf,
    Users,
    Cpu,
}

/// A static category tag used to group projects.
#[derive(Debug, Clone, Copy)]
pub struct Sector {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: SectorIcon,
    /// Approximate number of projects advertised for the sector.
    pub project_count: u32,
}

pub static SECTORS: [Sector; 6] = [
    Sector {
        id: "edu",
        name: "Education",
        icon: SectorIcon::BookOpen,
        project_count: 120,
    },
    Sector {
        id: "agri",
        name: "Agriculture",
        icon: SectorIcon::Wheat,
        project_count: 85,
    },
    Sector {
        id: "health",
        name: "Health",
        icon: SectorIcon::Heart,
        project_count: 200,
    },
    Sector {
        id: "env",
        name: "Environment",
        icon: SectorIcon::Leaf,
        project_count: 150,
    },
    Sector {
        id: "women",
        name: "Women Empowerment",
        icon: SectorIcon::Users,
        project_count: 90,
    },
    Sector {
        id: "tech",
        name: "Tech for Good",
        icon: SectorIcon::Cpu,
        project_count: 45,
    },
];

/// A showcase project. Raised amounts here are the static baseline; settled
/// donations only exist as an in-memory overlay for the current run.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub sector_id: &'static str,
    pub description: &'static str,
    pub funds_required: u64,
    pub funds_raised: u64,
    pub creator: &'static str,
    pub verified: bool,
    pub donors: &'static [&'static str],
    pub days_left: u32,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        id: "p1",
        title: "Digital Literacy for Rural Schools",
        sector_id: "edu",
        description: "Providing laptops and internet connectivity to 50 government schools in rural Maharashtra.",
        funds_required: 5_000_000,
        funds_raised: 3_200_000,
        creator: "Pratham Education",
        verified: true,
        donors: &["Tata Group", "Infosys Foundation"],
        days_left: 45,
    },
    Project {
        id: "p2",
        title: "Sustainable Farming Kits",
        sector_id: "agri",
        description: "Distributing organic farming starter kits to small-scale farmers in Punjab.",
        funds_required: 2_500_000,
        funds_raised: 500_000,
        creator: "Green Earth NGO",
        verified: true,
        donors: &["Anonymous"],
        days_left: 60,
    },
    Project {
        id: "p3",
        title: "Clean Water Initiative",
        sector_id: "health",
        description: "Installing RO water purifiers in drought-affected villages.",
        funds_required: 1_500_000,
        funds_raised: 1_500_000,
        creator: "WaterForLife",
        verified: true,
        donors: &["Dell", "TVS"],
        days_left: 0,
    },
];

/// Corporate partners shown in the dashboard marquee strip.
pub static PARTNERS: [&str; 8] = [
    "Tata Group",
    "Infosys",
    "BYJU'S",
    "Dell",
    "TVS",
    "Amazon",
    "Wipro",
    "Reliance Foundation",
];

/// Looks up a sector by id. A miss means the caller should render its
/// not-found state, never fail.
pub fn sector_by_id(id: &str) -> Option<&'static Sector> {
    SECTORS.iter().find(|s| s.id == id)
}

/// Looks up a project by id.
pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// All showcase projects belonging to a sector.
pub fn projects_in_sector(sector_id: &str) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| p.sector_id == sector_id)
}

/// Suggests a sector for a mission description via linear keyword matching.
///
/// Returns `None` for blank input. The check order is significant: earlier
/// sector keyword groups shadow later ones, and a text matching nothing
/// falls back to education.
pub fn suggest_sector(description: &str) -> Option<&'static Sector> {
    let text = description.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    const KEYWORD_GROUPS: [(&str, &[&str]); 6] = [
        ("agri", &["farm", "crop", "soil", "water"]),
        ("health", &["health", "doctor", "medicine", "patient"]),
        ("env", &["tree", "climate", "recycle", "waste"]),
        ("women", &["woman", "women", "girl", "gender"]),
        ("tech", &["tech", "digital", "computer", "app"]),
        ("edu", &["school", "teach", "student", "literacy"]),
    ];

    let matched = KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(id, _)| *id)
        .unwrap_or("edu");

    sector_by_id(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_hit_and_miss() {
        assert_eq!(sector_by_id("health").map(|s| s.name), Some("Health"));
        assert!(sector_by_id("space").is_none());
        assert_eq!(project_by_id("p2").map(|p| p.creator), Some("Green Earth NGO"));
        assert!(project_by_id("p99").is_none());
    }

    #[test]
    fn sector_filter_matches_catalog() {
        let ids: Vec<&str> = projects_in_sector("edu").map(|p| p.id).collect();
        assert_eq!(ids, vec!["p1"]);
        assert_eq!(projects_in_sector("women").count(), 0);
    }

    #[test]
    fn suggestion_follows_keyword_groups() {
        let cases = [
            ("We provide clean water to rural villages", "agri"),
            ("Mobile clinics bringing doctors to remote towns", "health"),
            ("Planting trees along degraded riverbanks", "env"),
            ("Vocational training for young women", "women"),
            ("A digital learning app for city children", "tech"),
            ("After-school literacy clubs", "edu"),
            ("General community support", "edu"),
        ];
        for (text, expected) in cases {
            assert_eq!(
                suggest_sector(text).map(|s| s.id),
                Some(expected),
                "text: {text}"
            );
        }
    }

    #[test]
    fn blank_mission_yields_no_suggestion() {
        assert!(suggest_sector("").is_none());
        assert!(suggest_sector("   ").is_none());
    }
}
