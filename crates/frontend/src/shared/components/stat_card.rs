use crate::shared::components::table::number_format::{
    format_number_int, format_number_with_decimals, format_percent,
};
use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            let abs = val.abs();
            let body = if abs >= 1_000_000.0 {
                format!("{}M", format_number_with_decimals(abs / 1_000_000.0, 1))
            } else if abs >= 1_000.0 && abs.fract() == 0.0 {
                format_number_int(abs)
            } else {
                format_number_with_decimals(abs, 2)
            };
            if val < 0.0 {
                format!("-{}{}", currency, body)
            } else {
                format!("{}{}", currency, body)
            }
        }
        ValueFormat::Number { decimals } => format_number_with_decimals(val, *decimals),
        ValueFormat::Percent { decimals } => format_percent(val, *decimals),
        ValueFormat::Integer => format_number_int(val),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    #[prop(into, optional)]
    status: Signal<IndicatorStatus>,
    /// Change % relative to previous period
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format),
        None => "-".to_string(),
    };

    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = if pct > 0.5 {
                ("\u{2191}", "stat-card__change stat-card__change--up")
            } else if pct < -0.5 {
                ("\u{2193}", "stat-card__change stat-card__change--down")
            } else {
                ("", "stat-card__change stat-card__change--flat")
            };
            let text = format!("{}{:.1}%", arrow, pct.abs());
            view! { <span class=cls>{text}</span> }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_format() {
        let gbp = ValueFormat::gbp();
        assert_eq!(format_value(48250.0, &gbp), "£48,250");
        assert_eq!(format_value(1250.75, &gbp), "£1,250.75");
        assert_eq!(format_value(-310.5, &gbp), "-£310.50");
        assert_eq!(format_value(2_460_000.0, &gbp), "£2.5M");
    }

    #[test]
    fn test_other_formats() {
        assert_eq!(format_value(62.5, &ValueFormat::Percent { decimals: 1 }), "62.5%");
        assert_eq!(format_value(1234.0, &ValueFormat::Integer), "1,234");
        assert_eq!(format_value(3.14159, &ValueFormat::Number { decimals: 2 }), "3.14");
    }
}
