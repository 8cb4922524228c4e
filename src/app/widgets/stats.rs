use leptos::prelude::*;

struct Stat {
    icon: &'static str,
    label: &'static str,
    value: f64,
    unit: &'static str,
    color: &'static str,
}

const STATS: &[Stat] = &[
    Stat {
        icon: "extra-code",
        label: "Lines of Code",
        value: 312_480.0,
        unit: "",
        color: "text-blue",
    },
    Stat {
        icon: "extra-coffee",
        label: "Cups of Coffee",
        value: 1_942.0,
        unit: "",
        color: "text-yellow",
    },
    Stat {
        icon: "extra-clock",
        label: "Hours Coding",
        value: 6_230.0,
        unit: " h",
        color: "text-green",
    },
    Stat {
        icon: "extra-zap",
        label: "Projects Built",
        value: 23.0,
        unit: "",
        color: "text-purple",
    },
];

/// Compact human formatting: 1.2K, 3.4M, plain integers below a thousand.
pub fn format_value(value: f64, unit: &str) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M{unit}", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K{unit}", value / 1_000.0)
    } else {
        format!("{}{unit}", value.floor() as i64)
    }
}

#[component]
pub fn LiveStats() -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
            {STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="bg-brightBlack/20 rounded-lg border border-muted/30 p-4 text-center">
                            <div class=format!("{} mb-2 flex justify-center", stat.color)>
                                <i class=format!("{} text-xl", stat.icon)></i>
                            </div>
                            <div class="text-2xl font-bold">
                                {format_value(stat.value, stat.unit)}
                            </div>
                            <div class="text-sm text-muted mt-1">{stat.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_floor() {
        assert_eq!(format_value(23.0, ""), "23");
        assert_eq!(format_value(999.9, ""), "999");
    }

    #[test]
    fn thousands_get_one_decimal() {
        assert_eq!(format_value(1_942.0, ""), "1.9K");
        assert_eq!(format_value(6_230.0, " h"), "6.2K h");
    }

    #[test]
    fn millions_get_one_decimal() {
        assert_eq!(format_value(1_234_567.0, ""), "1.2M");
    }
}
