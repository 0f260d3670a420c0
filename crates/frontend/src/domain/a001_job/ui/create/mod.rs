use contracts::domain::a001_job::{CreateJobDto, Job, JobType};
use contracts::enums::Priority;
use contracts::shared::categorical::Categorical;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::form_wizard::{
    use_create_form, FieldDef, FormDefinition, FormError, FormField, FormReview, FormSelect,
    FormState, FormWizard, WizardStep,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_WIZARD};

pub static JOB_FORM: FormDefinition = FormDefinition {
    form_key: "a001_job_new",
    fields: &[
        FieldDef::required("title", "Title"),
        FieldDef::optional("job_type", "Type").with_default("bookkeeping"),
        FieldDef::optional("priority", "Priority").with_default("medium"),
        FieldDef::optional("notes", "Notes"),
        FieldDef::required("client_id", "Client reference"),
        FieldDef::optional("assignee", "Assignee"),
        FieldDef::optional("due_date", "Due date"),
        FieldDef::optional("budget_hours", "Budget hours"),
        FieldDef::optional("fee", "Fee"),
    ],
};

fn category<E: Categorical>(form: &FormState, key: &'static str, label: &'static str) -> Result<E, FormError> {
    E::from_code(form.get(key).trim()).ok_or_else(|| FormError::Invalid {
        field: label,
        reason: "choose one of the listed values".into(),
    })
}

/// Request body from the wizard values
pub fn build_dto(form: &FormState) -> Result<CreateJobDto, FormError> {
    Ok(CreateJobDto {
        title: form.get("title").trim().to_string(),
        client_id: form.get("client_id").trim().to_string(),
        job_type: category::<JobType>(form, "job_type", "Type")?,
        priority: category::<Priority>(form, "priority", "Priority")?,
        assignee: form.text("assignee"),
        due_date: form.date("due_date")?,
        budget_hours: form.amount("budget_hours")?,
        fee: form.amount("fee")?,
        notes: form.text("notes"),
    })
}

#[component]
pub fn JobCreateWizard(on_cancel: Callback<()>, on_created: Callback<String>) -> impl IntoView {
    let create = use_create_form::<Job, CreateJobDto>(&JOB_FORM, build_dto, on_created);
    let form = create.form;

    let steps = vec![
        WizardStep::new("Details", move || {
            view! {
                <div class="form__grid">
                    <FormField form=form key="title" placeholder="e.g. Year end accounts 2026" />
                    <FormSelect form=form key="job_type" options=JobType::options() />
                    <FormSelect form=form key="priority" options=Priority::options() />
                    <FormField form=form key="notes" multiline=true />
                </div>
            }
        }),
        WizardStep::new("Client", move || {
            view! {
                <div class="form__grid">
                    <FormField form=form key="client_id" placeholder="Client id" />
                    <FormField form=form key="assignee" placeholder="Who does the work" />
                </div>
            }
        }),
        WizardStep::new("Schedule & fees", move || {
            view! {
                <div class="form__grid">
                    <FormField form=form key="due_date" input_type="date" />
                    <FormField form=form key="budget_hours" input_type="number" />
                    <FormField form=form key="fee" input_type="number" placeholder="0.00" />
                </div>
            }
        }),
        WizardStep::new("Review", move || view! { <FormReview form=form /> }),
    ];

    view! {
        <PageFrame page_id=page_id(&Job::full_name(), PAGE_CAT_WIZARD) category=PAGE_CAT_WIZARD>
            <PageHeader title="New job" />
            <FormWizard
                form=form
                steps=steps
                on_submit=create.on_submit
                on_save_draft=create.on_save_draft
                on_cancel=on_cancel
                submitting=create.submitting
                error=create.error
                submit_label="Create job"
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled() -> FormState {
        let mut form = FormState::new(&JOB_FORM);
        form.set("title", " Payroll October ").unwrap();
        form.set("client_id", "c-42").unwrap();
        form.set("due_date", "2026-10-31").unwrap();
        form.set("fee", "450").unwrap();
        form
    }

    #[test]
    fn test_build_dto_uses_defaults() {
        let dto = build_dto(&filled()).unwrap();
        assert_eq!(dto.title, "Payroll October");
        assert_eq!(dto.client_id, "c-42");
        assert_eq!(dto.job_type, JobType::Bookkeeping);
        assert_eq!(dto.priority, Priority::Medium);
        assert_eq!(dto.due_date, NaiveDate::from_ymd_opt(2026, 10, 31));
        assert_eq!(dto.fee, Some(450.0));
        assert_eq!(dto.budget_hours, None);
        assert_eq!(dto.assignee, None);
    }

    #[test]
    fn test_build_dto_rejects_bad_values() {
        let mut form = filled();
        form.set("fee", "lots").unwrap();
        assert!(matches!(
            build_dto(&form),
            Err(FormError::Invalid { field: "Fee", .. })
        ));

        let mut form = filled();
        form.set("job_type", "audit").unwrap();
        assert!(matches!(
            build_dto(&form),
            Err(FormError::Invalid { field: "Type", .. })
        ));
    }

    #[test]
    fn test_required_fields() {
        let form = FormState::new(&JOB_FORM);
        assert_eq!(form.missing_required(), vec!["Title", "Client reference"]);
        assert!(filled().can_submit());
    }
}
