use catalog_ui::{
    edit_dialog::{DialogState, SubmitOutcome},
    view::Action,
};
use species_core::{FieldError, FormField, SpeciesId, Toast, ToastVariant};

use crate::helper::TestHelper;

#[tokio::test]
async fn empty_scientific_name_is_rejected_without_calling_store() {
    let helper = TestHelper::with_lion();
    let mut dialog = helper.lion_editor();
    dialog.open();
    dialog.set_input(FormField::ScientificName, "");

    let outcome = dialog.submit().await;

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected validation failure, got {outcome:?}");
    };
    assert_eq!(
        errors.get(FormField::ScientificName),
        Some(&FieldError::Required {
            field: FormField::ScientificName
        })
    );
    assert!(helper.store.updates().is_empty());
    assert!(helper.notifier.toasts().is_empty());
    assert_eq!(dialog.state(), DialogState::Open);
}

#[tokio::test]
async fn validation_errors_are_rendered_next_to_their_input() {
    let helper = TestHelper::with_lion();
    let mut dialog = helper.lion_editor();
    dialog.open();
    dialog.set_input(FormField::ScientificName, "");
    dialog.set_input(FormField::TotalPopulation, "lots");

    dialog.submit().await;

    let lines = dialog.render().dialog.unwrap().lines();
    assert_eq!(
        lines,
        vec![
            "Scientific Name: []\n  ! Scientific name is required",
            "Common Name: [Lion]",
            "Total Population: [lots]\n  ! Expected number",
            "Description: []",
            "<Cancel>",
            "<Save Changes>",
        ]
    );
}

#[tokio::test]
async fn valid_submission_updates_once_and_closes_with_success_toast() {
    let helper = TestHelper::with_lion();
    let mut dialog = helper.lion_editor();
    dialog.open();
    dialog.set_input(FormField::ScientificName, "Panthera leo melanochaita");
    dialog.set_input(FormField::TotalPopulation, "23000");

    let outcome = dialog.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Saved(_)));
    assert_eq!(dialog.state(), DialogState::Closed);

    let updates = helper.store.updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].0, SpeciesId::new(7));
    assert_eq!(updates[0].1.scientific_name, "Panthera leo melanochaita");
    assert_eq!(updates[0].1.total_population, Some(23_000));

    let row = helper.row(SpeciesId::new(7));
    assert_eq!(row.scientific_name, "Panthera leo melanochaita");
    assert_eq!(row.kingdom, "Animalia");

    assert_eq!(
        helper.notifier.toasts(),
        vec![Toast::new(
            "Species Updated",
            "Panthera leo melanochaita has been updated successfully."
        )]
    );
}

#[tokio::test]
async fn store_failure_keeps_dialog_open_with_destructive_toast() {
    let helper = TestHelper::with_lion();
    helper
        .store
        .fail_with("new row violates row-level security policy for table \"species\"");
    let mut dialog = helper.lion_editor();
    dialog.open();

    let outcome = dialog.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(
            "new row violates row-level security policy for table \"species\"".into()
        )
    );
    assert_eq!(dialog.state(), DialogState::Open);

    let toasts = helper.notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Error");
    assert_eq!(toasts[0].variant, ToastVariant::Destructive);
    assert_eq!(
        toasts[0].description,
        "new row violates row-level security policy for table \"species\""
    );
}

#[tokio::test]
async fn failed_submission_can_be_retried() {
    let helper = TestHelper::with_lion();
    helper.store.fail_with("timeout");
    let mut dialog = helper.lion_editor();
    dialog.open();

    assert!(matches!(dialog.submit().await, SubmitOutcome::Failed(_)));

    helper.store.succeed();
    assert!(matches!(dialog.submit().await, SubmitOutcome::Saved(_)));
    assert_eq!(helper.store.updates().len(), 2);
    assert!(!dialog.is_open());
}

#[tokio::test]
async fn submitting_a_closed_dialog_does_nothing() {
    let helper = TestHelper::with_lion();
    let mut dialog = helper.lion_editor();

    assert_eq!(dialog.submit().await, SubmitOutcome::Closed);
    assert!(helper.store.updates().is_empty());
}

#[tokio::test]
async fn corrected_input_clears_previous_errors() {
    let helper = TestHelper::with_lion();
    let mut dialog = helper.lion_editor();
    dialog.open();
    dialog.set_input(FormField::ScientificName, "");
    dialog.submit().await;
    assert!(!dialog.errors().is_empty());

    dialog.set_input(FormField::ScientificName, "Panthera leo");
    dialog.submit().await;

    assert!(dialog.errors().is_empty());
}

#[test]
fn cancel_closes_and_reopening_keeps_working_copy() {
    let helper = TestHelper::with_lion();
    let mut dialog = helper.lion_editor();

    dialog.open();
    dialog.set_input(FormField::CommonName, "African lion");
    dialog.cancel();
    assert_eq!(dialog.state(), DialogState::Closed);

    dialog.open();
    assert_eq!(dialog.form().common_name, "African lion");

    dialog.dismiss();
    assert!(!dialog.is_open());
}

#[tokio::test]
async fn working_copy_is_not_resynced_with_changed_record() {
    let helper = TestHelper::with_lion();
    let mut first = helper.lion_editor();
    let mut second = helper.lion_editor();

    second.open();
    second.set_input(FormField::CommonName, "African lion");
    second.submit().await;

    assert_eq!(
        helper.row(SpeciesId::new(7)).common_name.as_deref(),
        Some("African lion")
    );
    first.open();
    assert_eq!(first.form().common_name, "Lion");
}

#[test]
fn closed_dialog_renders_only_trigger() {
    let helper = TestHelper::with_lion();
    let dialog = helper.lion_editor();

    let panel = dialog.render();

    assert_eq!(panel.dialog, None);
    assert_eq!(
        panel.buttons().map(|b| b.action).collect::<Vec<_>>(),
        vec![Action::OpenEdit]
    );
}

#[test]
fn open_dialog_renders_form_prefilled_from_record() {
    let helper = TestHelper::with_lion();
    let mut dialog = helper.lion_editor();
    dialog.open();

    let view = dialog.render().dialog.unwrap();

    assert_eq!(view.title, "Edit Species");
    assert_eq!(
        view.lines(),
        vec![
            "Scientific Name: [Panthera leo]",
            "Common Name: [Lion]",
            "Total Population: [20000]",
            "Description: []",
            "<Cancel>",
            "<Save Changes>",
        ]
    );
    assert_eq!(
        view.buttons().map(|b| b.action).collect::<Vec<_>>(),
        vec![Action::CancelEdit, Action::SubmitEdit]
    );
}
