//! Async services.
//!
//! Wraps the network-facing pieces of the submission workflow in Iced
//! `Task`s so `App::update` stays synchronous.

use iced::Task;

use vms_client::{MigrationApi, MigrationClient};
use vms_model::{MigrationRequest, TargetSpecFile, media_type_for};

use crate::message::Message;

/// Issues the migration request to the engine.
///
/// The caller has already validated the draft and entered `Submitting`;
/// this Task produces exactly one `SubmitFinished` message.
pub fn submit_migration(client: MigrationClient, request: MigrationRequest) -> Task<Message> {
    Task::perform(
        async move { client.submit(&request).await },
        Message::SubmitFinished,
    )
}

/// Opens the target-spec file dialog and reads the chosen file.
///
/// The `.csv/.xlsx/.xls` filter is a hint only; the dialog still lets the
/// platform offer other files and nothing is content-checked client-side.
pub fn pick_target_spec() -> Task<Message> {
    Task::perform(
        async {
            let handle = rfd::AsyncFileDialog::new()
                .set_title("Upload Target Design Spec")
                .add_filter("Specification", &vms_model::ACCEPTED_EXTENSIONS)
                .pick_file()
                .await?;

            let file_name = handle.file_name();
            let bytes = handle.read().await;
            Some(TargetSpecFile {
                media_type: media_type_for(&file_name).to_string(),
                file_name,
                bytes,
            })
        },
        Message::FileSelected,
    )
}
