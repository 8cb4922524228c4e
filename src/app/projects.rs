use leptos::prelude::*;
use leptos_meta::Title;

use crate::data;

use super::widgets::ProjectImageCarousel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maturity {
    Latest,
    Recent,
    Mature,
    Legacy,
}

impl Maturity {
    pub fn from_age(age: u32) -> Self {
        match age {
            0 => Self::Latest,
            1 => Self::Recent,
            2 => Self::Mature,
            _ => Self::Legacy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Recent => "Recent",
            Self::Mature => "Mature",
            Self::Legacy => "Legacy",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            Self::Latest => "bg-green/10 text-green border-green/30",
            Self::Recent => "bg-blue/10 text-blue border-blue/30",
            Self::Mature => "bg-purple/10 text-purple border-purple/30",
            Self::Legacy => "bg-yellow/10 text-yellow border-yellow/30",
        }
    }
}

pub fn project_age(year: u32, current_year: u32) -> u32 {
    current_year.saturating_sub(year)
}

pub fn age_label(age: u32) -> String {
    match age {
        0 => "Latest".to_string(),
        1 => "1 year ago".to_string(),
        n => format!("{n} years ago"),
    }
}

/// Projects newest-first.
pub fn sorted_projects() -> Vec<&'static data::Project> {
    let mut projects: Vec<_> = data::PROJECTS.iter().collect();
    projects.sort_by(|a, b| b.year.cmp(&a.year));
    projects
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let current_year = {
        use chrono::Datelike;
        chrono::Utc::now().year() as u32
    };

    view! {
        <Title text="Projects" />
        <div class="space-y-8">
            <div>
                <h2 class="text-3xl font-bold mb-4">"Projects"</h2>
                <p class="text-base text-muted">
                    "A collection of projects showcasing my evolution as a developer, \
                    from recent work back to the foundations."
                </p>
            </div>

            <div class="grid gap-6 md:grid-cols-2">
                {sorted_projects()
                    .into_iter()
                    .map(|project| {
                        let age = project_age(project.year, current_year);
                        let maturity = Maturity::from_age(age);
                        view! {
                            <div class="h-full flex flex-col overflow-hidden rounded-lg border border-muted/30 bg-brightBlack/20 hover:shadow-lg transition-all duration-300 group">
                                <div class="p-4 flex-shrink-0">
                                    <div class="flex items-start justify-between mb-2">
                                        <div class="flex items-center gap-2">
                                            <i class="extra-calendar text-muted text-xs"></i>
                                            <span class="text-sm text-muted">
                                                {age_label(age)}
                                            </span>
                                        </div>
                                        <div class="flex items-center gap-2">
                                            <span class=format!(
                                                "px-2 py-1 text-xs rounded border {}",
                                                maturity.badge_class(),
                                            )>{maturity.label()}</span>
                                            <a
                                                href=project.link
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label="Open repository"
                                                class="opacity-0 group-hover:opacity-100 transition-opacity h-8 w-8 flex items-center justify-center rounded hover:bg-brightBlack/40"
                                            >
                                                <i class="extra-external-link text-xs"></i>
                                            </a>
                                        </div>
                                    </div>
                                    <h3 class="text-lg font-semibold group-hover:text-blue transition-colors leading-tight">
                                        {project.title}
                                    </h3>
                                    <p class="text-sm text-muted mt-1">
                                        "Built in " {project.year}
                                    </p>
                                </div>

                                <div class="px-4 pb-4 flex-1 flex flex-col space-y-4">
                                    {(!project.images.is_empty())
                                        .then(|| {
                                            view! {
                                                <ProjectImageCarousel images=project.images />
                                            }
                                        })}
                                    <p class="text-sm text-muted leading-relaxed flex-shrink-0">
                                        {project.description}
                                    </p>
                                    <div class="flex flex-wrap gap-2 mt-auto pt-2">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="px-2 py-1 text-xs bg-brightBlack/40 rounded border border-muted/30">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="mt-12 p-6 bg-brightBlack/20 rounded-lg border border-muted/30">
                <h3 class="text-lg font-semibold mb-4 flex items-center gap-2">
                    <i class="extra-trending-up text-blue"></i>
                    "Project Evolution"
                </h3>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                    {[
                        ("2022", "Foundation", "Learning core web technologies", "text-yellow"),
                        ("2023", "Mobile", "Cross-platform apps & storage", "text-purple"),
                        ("2024", "Realtime", "CRDTs, sync, collaboration", "text-blue"),
                        ("2025", "Systems", "Rust across the whole stack", "text-green"),
                    ]
                        .into_iter()
                        .map(|(year, focus, description, color)| {
                            view! {
                                <div class="text-center">
                                    <div class=format!("text-lg font-bold {color} mb-1")>
                                        {year}
                                    </div>
                                    <div class="text-sm font-medium mb-1">{focus}</div>
                                    <div class="text-xs text-muted">{description}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_is_relative_and_never_negative() {
        assert_eq!(project_age(2025, 2026), 1);
        assert_eq!(project_age(2026, 2025), 0);
    }

    #[test]
    fn age_labels() {
        assert_eq!(age_label(0), "Latest");
        assert_eq!(age_label(1), "1 year ago");
        assert_eq!(age_label(4), "4 years ago");
    }

    #[test]
    fn maturity_buckets() {
        assert_eq!(Maturity::from_age(0), Maturity::Latest);
        assert_eq!(Maturity::from_age(1), Maturity::Recent);
        assert_eq!(Maturity::from_age(2), Maturity::Mature);
        assert_eq!(Maturity::from_age(7), Maturity::Legacy);
    }

    #[test]
    fn projects_sort_newest_first() {
        let sorted = sorted_projects();
        for pair in sorted.windows(2) {
            assert!(pair[0].year >= pair[1].year);
        }
    }
}
