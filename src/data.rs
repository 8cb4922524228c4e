//! Static site content. Everything the sections render is defined here as
//! plain typed tables so the components stay purely presentational.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    /// CSS icon class, same convention as the devicon classes used for
    /// tech icons.
    pub icon: &'static str,
    pub path: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section {
        id: "home",
        label: "Home",
        icon: "extra-home",
        path: "/",
    },
    Section {
        id: "about",
        label: "About",
        icon: "extra-user",
        path: "/about",
    },
    Section {
        id: "projects",
        label: "Projects",
        icon: "extra-code",
        path: "/projects",
    },
    Section {
        id: "timeline",
        label: "Timeline",
        icon: "extra-clock",
        path: "/timeline",
    },
    Section {
        id: "contact",
        label: "Contact",
        icon: "extra-mail",
        path: "/contact",
    },
];

/// Section whose `path` matches the current pathname; unknown paths fall
/// back to home, matching the router's own fallback.
pub fn section_for_path(pathname: &str) -> &'static Section {
    SECTIONS
        .iter()
        .find(|s| s.path == pathname)
        .unwrap_or(&SECTIONS[0])
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
    pub year: u32,
    pub images: &'static [ProjectImage],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Ledgerline",
        description: "Self-hosted budgeting dashboard with double-entry bookkeeping, \
                      CSV bank imports, and rule-based transaction categorization. \
                      Renders a full year of spending as interactive canvas charts.",
        tech: &["Rust", "Leptos", "Axum", "SQLite", "Tailwind CSS"],
        link: "https://github.com/rcalloway/ledgerline",
        year: 2025,
        images: &[
            ProjectImage {
                src: "/images/ledgerline-dashboard.png",
                alt: "Ledgerline dashboard",
                caption: "Monthly cash-flow view with category breakdown",
            },
            ProjectImage {
                src: "/images/ledgerline-import.png",
                alt: "Ledgerline import screen",
                caption: "CSV import with live rule preview",
            },
        ],
    },
    Project {
        title: "Hallway",
        description: "Realtime collaborative whiteboard built on CRDTs. Cursors, \
                      sticky notes, and freehand strokes sync peer-to-peer over \
                      WebRTC with a relay fallback.",
        tech: &["TypeScript", "React", "Yjs", "WebRTC", "Vite"],
        link: "https://github.com/rcalloway/hallway",
        year: 2024,
        images: &[ProjectImage {
            src: "/images/hallway-board.png",
            alt: "Hallway board",
            caption: "Three collaborators on one board",
        }],
    },
    Project {
        title: "Brewlog",
        description: "Mobile-first coffee brewing journal. Tracks beans, grind \
                      settings, and extraction times, then charts how each variable \
                      moves the tasting score.",
        tech: &["Flutter", "Dart", "Firebase", "SQLite"],
        link: "https://github.com/rcalloway/brewlog",
        year: 2023,
        images: &[],
    },
    Project {
        title: "Pathfinder Playground",
        description: "Interactive visualizer for graph search algorithms. Step \
                      through A*, Dijkstra, and flow-field pathfinding on editable \
                      grids with live cost overlays.",
        tech: &["Python", "Flask", "JavaScript", "Canvas API"],
        link: "https://github.com/rcalloway/pathfinder-playground",
        year: 2022,
        images: &[],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2024 - present",
        role: "Software Engineer",
        company: "Northbeam Systems",
        location: "Portland, OR",
        description: "Building data-ingest and visualization tooling for an \
                      industrial monitoring platform.",
        achievements: &[
            "Rewrote the telemetry ingest path in Rust, cutting p99 processing \
             latency from 900ms to 70ms at the same hardware budget.",
            "Shipped a plugin system for customer-defined alert rules, now used \
             by 40+ installations.",
            "Led the migration from hand-rolled SQL to a typed query layer, \
             removing a class of injection and nullability bugs.",
        ],
        technologies: &["Rust", "PostgreSQL", "Kafka", "TypeScript", "Grafana"],
    },
    TimelineEntry {
        year: "2022 - 2024",
        role: "Full-Stack Developer",
        company: "Fernworks",
        location: "Remote",
        description: "Client work across e-commerce and internal tools for a \
                      six-person consultancy.",
        achievements: &[
            "Delivered 9 client projects end to end, from scoping through deploy \
             and handoff.",
            "Introduced preview deployments to the agency workflow, shrinking \
             review cycles from days to hours.",
            "Built a shared component library that cut new-project boot time \
             roughly in half.",
        ],
        technologies: &["React", "Next.js", "Node.js", "Stripe", "Vercel"],
    },
    TimelineEntry {
        year: "2021 - 2022",
        role: "Software Engineering Intern",
        company: "Cascadia Transit Lab",
        location: "Seattle, WA",
        description: "Research group building open transit data tooling.",
        achievements: &[
            "Wrote a GTFS-realtime ingestion service consumed by three public \
             dashboards.",
            "Added property-based tests to the schedule matcher, surfacing two \
             long-standing edge-case bugs.",
        ],
        technologies: &["Python", "FastAPI", "PostgreSQL", "Docker"],
    },
];

pub const TECH_STACK: &[&str] = &[
    "Rust",
    "TypeScript",
    "JavaScript",
    "Python",
    "React",
    "Leptos",
    "Next.js",
    "Node.js",
    "Axum",
    "Flask",
    "PostgreSQL",
    "SQLite",
    "Redis",
    "Kafka",
    "Docker",
    "Terraform",
    "AWS",
    "Tailwind CSS",
    "WebAssembly",
    "Git",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Soft,
}

impl SkillCategory {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Frontend => "#3b82f6",
            Self::Backend => "#10b981",
            Self::Tools => "#f59e0b",
            Self::Soft => "#8b5cf6",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
            Self::Soft => "soft",
        }
    }

    pub fn all() -> &'static [SkillCategory] {
        &[Self::Frontend, Self::Backend, Self::Tools, Self::Soft]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// 0-100.
    pub level: u32,
    pub category: SkillCategory,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Rust",
        level: 90,
        category: SkillCategory::Backend,
    },
    Skill {
        name: "TypeScript",
        level: 88,
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "React",
        level: 85,
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "Leptos",
        level: 80,
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "PostgreSQL",
        level: 78,
        category: SkillCategory::Backend,
    },
    Skill {
        name: "Python",
        level: 75,
        category: SkillCategory::Backend,
    },
    Skill {
        name: "Docker",
        level: 72,
        category: SkillCategory::Tools,
    },
    Skill {
        name: "AWS",
        level: 65,
        category: SkillCategory::Tools,
    },
    Skill {
        name: "Mentoring",
        level: 82,
        category: SkillCategory::Soft,
    },
    Skill {
        name: "Writing",
        level: 86,
        category: SkillCategory::Soft,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TechOrbitItem {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub size: u32,
    pub speed: f64,
}

pub const TECH_ORBIT: &[TechOrbitItem] = &[
    TechOrbitItem {
        name: "Rust",
        icon: "devicon-rust-original",
        color: "#dea584",
        size: 40,
        speed: 1.0,
    },
    TechOrbitItem {
        name: "TypeScript",
        icon: "devicon-typescript-plain",
        color: "#3178c6",
        size: 35,
        speed: 1.2,
    },
    TechOrbitItem {
        name: "React",
        icon: "devicon-react-original",
        color: "#61dafb",
        size: 34,
        speed: 0.8,
    },
    TechOrbitItem {
        name: "PostgreSQL",
        icon: "devicon-postgresql-plain",
        color: "#336791",
        size: 32,
        speed: 1.1,
    },
    TechOrbitItem {
        name: "Python",
        icon: "devicon-python-plain",
        color: "#3776ab",
        size: 32,
        speed: 0.9,
    },
    TechOrbitItem {
        name: "Docker",
        icon: "devicon-docker-plain",
        color: "#2496ed",
        size: 30,
        speed: 1.4,
    },
    TechOrbitItem {
        name: "AWS",
        icon: "devicon-amazonwebservices-plain-wordmark",
        color: "#ff9900",
        size: 28,
        speed: 1.3,
    },
    TechOrbitItem {
        name: "Git",
        icon: "devicon-git-plain",
        color: "#f05032",
        size: 26,
        speed: 1.5,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub download: Option<&'static str>,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        icon: "devicon-github-plain",
        url: "https://github.com/rcalloway",
        description: "Check out my code",
        download: None,
    },
    SocialLink {
        name: "LinkedIn",
        icon: "devicon-linkedin-plain",
        url: "https://linkedin.com/in/robin-calloway",
        description: "Let's connect professionally",
        download: None,
    },
    SocialLink {
        name: "Email",
        icon: "extra-mail",
        url: "mailto:hello@robincalloway.dev",
        description: "Send me an email",
        download: None,
    },
    SocialLink {
        name: "Mastodon",
        icon: "extra-chat",
        url: "https://hachyderm.io/@rcalloway",
        description: "Follow my thoughts",
        download: None,
    },
    SocialLink {
        name: "RSS",
        icon: "extra-rss",
        url: "/feed.xml",
        description: "Occasional write-ups",
        download: None,
    },
    SocialLink {
        name: "Resume",
        icon: "extra-download",
        url: "/RobinCallowayResume.pdf",
        description: "Download my resume",
        download: Some("RobinCallowayResume.pdf"),
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TimeZoneInfo {
    pub city: &'static str,
    pub flag: &'static str,
    /// Fixed UTC offset in seconds; DST shifts are out of scope.
    pub offset_secs: i32,
}

/// Home zone first; the response-time indicator keys off it.
pub const TIME_ZONES: &[TimeZoneInfo] = &[
    TimeZoneInfo {
        city: "Portland",
        flag: "\u{1F1FA}\u{1F1F8}",
        offset_secs: -7 * 3600,
    },
    TimeZoneInfo {
        city: "New York",
        flag: "\u{1F1FA}\u{1F1F8}",
        offset_secs: -4 * 3600,
    },
    TimeZoneInfo {
        city: "London",
        flag: "\u{1F1EC}\u{1F1E7}",
        offset_secs: 3600,
    },
    TimeZoneInfo {
        city: "Tokyo",
        flag: "\u{1F1EF}\u{1F1F5}",
        offset_secs: 9 * 3600,
    },
];

pub const NAME: &str = "Robin Calloway";
pub const TAGLINE: &str = "Systems-curious full-stack engineer";
pub const HOME_CITY: &str = "Portland, OR";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_lookup_by_path() {
        assert_eq!(section_for_path("/projects").id, "projects");
        assert_eq!(section_for_path("/").id, "home");
        // Unknown paths fall back to home.
        assert_eq!(section_for_path("/nope").id, "home");
    }

    #[test]
    fn home_zone_is_first() {
        assert_eq!(TIME_ZONES[0].city, "Portland");
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }
}
