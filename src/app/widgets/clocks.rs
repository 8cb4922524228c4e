use chrono::{DateTime, FixedOffset, Timelike, Utc};
use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::data;

pub fn zone_time(now_utc: DateTime<Utc>, offset_secs: i32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(offset_secs).expect("zone offset should be in range");
    now_utc.with_timezone(&offset)
}

pub fn format_clock(time: &DateTime<FixedOffset>) -> String {
    time.format("%-I:%M %p").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            18..=21 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Night => "extra-moon",
            _ => "extra-sun",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Morning => "text-yellow",
            Self::Afternoon => "text-yellow",
            Self::Evening => "text-purple",
            Self::Night => "text-blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Online,
    Away,
    Offline,
}

impl Availability {
    /// Rough office-hours model over the home-zone hour.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            9..=16 => Self::Online,
            7..=8 | 17..=21 => Self::Away,
            _ => Self::Offline,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Online => "Usually responds within 1-2 hours",
            Self::Away => "Usually responds within 4-6 hours",
            Self::Offline => "Usually responds within 8-12 hours",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Away => "Away",
            Self::Offline => "Offline",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Online => "extra-zap",
            Self::Away => "extra-coffee",
            Self::Offline => "extra-clock",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Online => "text-green",
            Self::Away => "text-yellow",
            Self::Offline => "text-muted",
        }
    }
}

/// "Where I am" card: home-zone clock plus a small world clock grid over
/// the fixed-offset zone table.
#[component]
pub fn WorldClock() -> impl IntoView {
    let (now, set_now) = signal(Utc::now());
    let _ = use_interval_fn(move || set_now(Utc::now()), 1000);

    let home = &data::TIME_ZONES[0];

    view! {
        <div class="bg-brightBlack/20 rounded-lg border border-muted/30 p-6">
            <div class="flex items-center gap-2 mb-6">
                <i class="extra-location text-blue"></i>
                <h3 class="text-lg font-semibold">"Where I Am"</h3>
            </div>

            <div class="mb-6 p-4 bg-blue/10 rounded-lg border border-blue/30">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <span class="w-3 h-3 bg-blue rounded-full animate-pulse"></span>
                        <div class="font-medium">
                            {home.flag}" "{data::HOME_CITY}
                        </div>
                    </div>
                    <div class="text-right">
                        <div class="text-lg font-bold text-blue">
                            {move || format_clock(&zone_time(now.get(), home.offset_secs))}
                        </div>
                        <div class="text-xs text-muted">"Local Time"</div>
                    </div>
                </div>
            </div>

            <div class="space-y-3">
                <h4 class="text-sm font-medium flex items-center gap-2">
                    <i class="extra-clock text-xs"></i>
                    "World Clock"
                </h4>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                    {data::TIME_ZONES
                        .iter()
                        .map(|zone| {
                            view! {
                                <div class="flex items-center justify-between p-3 bg-brightBlack/30 rounded-lg">
                                    <div class="flex items-center gap-2">
                                        <span class="text-lg">{zone.flag}</span>
                                        <div>
                                            <div class="text-sm font-medium">{zone.city}</div>
                                            {move || {
                                                let time = zone_time(now.get(), zone.offset_secs);
                                                let period = DayPeriod::from_hour(time.hour());
                                                view! {
                                                    <div class=format!(
                                                        "text-xs {} flex items-center gap-1",
                                                        period.color(),
                                                    )>
                                                        <i class=format!("{} text-xs", period.icon())></i>
                                                        {period.label()}
                                                    </div>
                                                }
                                            }}
                                        </div>
                                    </div>
                                    <div class="text-sm font-bold">
                                        {move || format_clock(&zone_time(now.get(), zone.offset_secs))}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="mt-4 p-3 bg-green/10 rounded-lg border border-green/30">
                <div class="flex items-center gap-2 text-green">
                    <i class="extra-coffee text-xs"></i>
                    <span class="text-sm">"Best response time: 9 AM - 5 PM PT (weekdays)"</span>
                </div>
            </div>
        </div>
    }
}

/// Office-hours banner on the contact page, refreshed every minute.
#[component]
pub fn ResponseTimeIndicator() -> impl IntoView {
    let home_offset = data::TIME_ZONES[0].offset_secs;
    let (hour, set_hour) = signal(zone_time(Utc::now(), home_offset).hour());
    let _ = use_interval_fn(
        move || set_hour(zone_time(Utc::now(), home_offset).hour()),
        60_000,
    );

    view! {
        {move || {
            let availability = Availability::from_hour(hour.get());
            view! {
                <div class="p-4 rounded-lg border border-muted/30 bg-brightBlack/20">
                    <div class="flex items-center gap-3">
                        <div class="relative">
                            <i class=format!(
                                "{} {}",
                                availability.icon(),
                                availability.color(),
                            )></i>
                            {(availability == Availability::Online)
                                .then(|| {
                                    view! {
                                        <span class="absolute -top-1 -right-1 w-3 h-3 bg-green rounded-full animate-pulse"></span>
                                    }
                                })}
                        </div>
                        <div>
                            <div class="text-sm font-medium">{availability.label()}</div>
                            <div class="text-xs text-muted">{availability.message()}</div>
                        </div>
                    </div>
                </div>
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn zone_time_applies_fixed_offset() {
        let noon_utc = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(zone_time(noon_utc, -7 * 3600).hour(), 5);
        assert_eq!(zone_time(noon_utc, 9 * 3600).hour(), 21);
        // Half-hour offsets survive.
        assert_eq!(zone_time(noon_utc, 19_800).minute(), 30);
    }

    #[test]
    fn clock_format_is_twelve_hour_without_padding() {
        let morning = Utc.with_ymd_and_hms(2025, 6, 1, 9, 5, 0).unwrap();
        assert_eq!(format_clock(&zone_time(morning, 0)), "9:05 AM");
        let evening = Utc.with_ymd_and_hms(2025, 6, 1, 21, 30, 0).unwrap();
        assert_eq!(format_clock(&zone_time(evening, 0)), "9:30 PM");
        let midnight = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(format_clock(&zone_time(midnight, 0)), "12:00 AM");
    }

    #[test]
    fn day_period_boundaries() {
        assert_eq!(DayPeriod::from_hour(5), DayPeriod::Night);
        assert_eq!(DayPeriod::from_hour(6), DayPeriod::Morning);
        assert_eq!(DayPeriod::from_hour(11), DayPeriod::Morning);
        assert_eq!(DayPeriod::from_hour(12), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_hour(17), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_hour(18), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_hour(21), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_hour(22), DayPeriod::Night);
    }

    #[test]
    fn availability_boundaries() {
        assert_eq!(Availability::from_hour(8), Availability::Away);
        assert_eq!(Availability::from_hour(9), Availability::Online);
        assert_eq!(Availability::from_hour(16), Availability::Online);
        assert_eq!(Availability::from_hour(17), Availability::Away);
        assert_eq!(Availability::from_hour(21), Availability::Away);
        assert_eq!(Availability::from_hour(22), Availability::Offline);
        assert_eq!(Availability::from_hour(3), Availability::Offline);
    }
}
