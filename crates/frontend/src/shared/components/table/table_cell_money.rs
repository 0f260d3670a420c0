//! Content of a money table cell
//!
//! ```ignore
//! <TableCell class="text-right"><TableCellMoney value=invoice.total_amount /></TableCell>
//! <TableCellMoney value=fund.balance color_by_sign=true bold=true />
//! ```

use super::number_format::format_gbp_opt;
use leptos::prelude::*;

/// `£` amount; a missing value renders as a dash
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// Green for positive, red for negative
    #[prop(optional, default = false)]
    color_by_sign: bool,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || format_gbp_opt(value.get());

    let cell_style = move || {
        let mut styles = Vec::new();
        if color_by_sign {
            match value.get() {
                Some(v) if v > 0.0 => styles.push("color: var(--color-success-700)"),
                Some(v) if v < 0.0 => styles.push("color: var(--color-error-700)"),
                _ => {}
            }
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <span class="money" style=cell_style>
            {formatted_text}
        </span>
    }
}
