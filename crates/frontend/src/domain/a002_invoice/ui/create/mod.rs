use contracts::domain::a002_invoice::{CreateInvoiceDto, Invoice};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use crate::shared::aggregate::today;
use crate::shared::components::table::number_format::format_gbp;
use crate::shared::components::page_header::PageHeader;
use crate::shared::form_wizard::{
    use_create_form, FieldDef, FormDefinition, FormError, FormField, FormReview, FormState,
    FormWizard, WizardStep,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_WIZARD};

pub static INVOICE_FORM: FormDefinition = FormDefinition {
    form_key: "a002_invoice_new",
    fields: &[
        FieldDef::required("client_name", "Client"),
        FieldDef::optional("description", "Description"),
        FieldDef::required("issue_date", "Issue date"),
        FieldDef::optional("due_date", "Due date"),
        FieldDef::required("net_amount", "Net amount"),
        FieldDef::optional("vat_rate_percent", "VAT rate %").with_default("20"),
    ],
};

pub fn build_dto(form: &FormState) -> Result<CreateInvoiceDto, FormError> {
    Ok(CreateInvoiceDto {
        client_name: form.get("client_name").trim().to_string(),
        issue_date: form.required_date("issue_date")?,
        due_date: form.date("due_date")?,
        net_amount: form.required_amount("net_amount")?,
        vat_rate_percent: form.amount("vat_rate_percent")?.unwrap_or(0.0),
        description: form.text("description"),
    })
}

/// "VAT £200.00, total £1,200.00" for the review step; empty until the
/// amounts parse.
fn totals_line(form: &FormState) -> String {
    match build_dto(form) {
        Ok(dto) => format!(
            "VAT {}, total {}",
            format_gbp(dto.vat_amount()),
            format_gbp(dto.total_amount())
        ),
        Err(_) => String::new(),
    }
}

#[component]
pub fn InvoiceCreateWizard(on_cancel: Callback<()>, on_created: Callback<String>) -> impl IntoView {
    let create = use_create_form::<Invoice, CreateInvoiceDto>(&INVOICE_FORM, build_dto, on_created);
    let form = create.form;

    form.update(|f| {
        if f.get("issue_date").is_empty() {
            let _ = f.set("issue_date", today().format("%Y-%m-%d").to_string());
        }
    });

    let steps = vec![
        WizardStep::new("Client", move || {
            view! {
                <div class="form__grid">
                    <FormField form=form key="client_name" placeholder="Client name" />
                    <FormField form=form key="description" multiline=true />
                </div>
            }
        }),
        WizardStep::new("Amounts & dates", move || {
            view! {
                <div class="form__grid">
                    <FormField form=form key="issue_date" input_type="date" />
                    <FormField form=form key="due_date" input_type="date" />
                    <FormField form=form key="net_amount" input_type="number" placeholder="0.00" />
                    <FormField form=form key="vat_rate_percent" input_type="number" />
                </div>
            }
        }),
        WizardStep::new("Review", move || {
            view! {
                <FormReview form=form />
                <div class="wizard__totals">{move || form.with(totals_line)}</div>
            }
        }),
    ];

    view! {
        <PageFrame page_id=page_id(&Invoice::full_name(), PAGE_CAT_WIZARD) category=PAGE_CAT_WIZARD>
            <PageHeader title="New invoice" />
            <FormWizard
                form=form
                steps=steps
                on_submit=create.on_submit
                on_save_draft=create.on_save_draft
                on_cancel=on_cancel
                submitting=create.submitting
                error=create.error
                submit_label="Create invoice"
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled() -> FormState {
        let mut form = FormState::new(&INVOICE_FORM);
        form.set("client_name", "Acme Ltd").unwrap();
        form.set("issue_date", "2026-10-01").unwrap();
        form.set("net_amount", "1,000").unwrap();
        form
    }

    #[test]
    fn test_build_dto() {
        let dto = build_dto(&filled()).unwrap();
        assert_eq!(dto.client_name, "Acme Ltd");
        assert_eq!(dto.issue_date, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        assert_eq!(dto.due_date, None);
        assert_eq!(dto.net_amount, 1000.0);
        assert_eq!(dto.vat_rate_percent, 20.0);
        assert_eq!(dto.description, None);
    }

    #[test]
    fn test_totals_line() {
        assert_eq!(totals_line(&filled()), "VAT £200.00, total £1,200.00");

        let mut form = filled();
        form.set("net_amount", "").unwrap();
        assert_eq!(totals_line(&form), "");
    }

    #[test]
    fn test_bad_date_is_reported_with_label() {
        let mut form = filled();
        form.set("due_date", "31/10/2026").unwrap();
        let err = build_dto(&form).unwrap_err();
        assert_eq!(err.to_string(), "Due date: '31/10/2026' is not a valid date");
    }
}
