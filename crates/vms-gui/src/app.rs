//! Main application module.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//! All state changes happen in `update()`; views are pure functions.

use iced::widget::{Space, column, container, row, scrollable, stack};
use iced::{Element, Length, Subscription, Task};

use vms_client::{MigrationClient, Notification};

use crate::component::toast::view_toast;
use crate::message::Message;
use crate::service;
use crate::settings::Settings;
use crate::state::AppState;
use crate::theme::{SPACING_LG, SPACING_MD};
use crate::view::{view_form, view_results};

/// How long a toast stays up before auto-dismissal.
const TOAST_DISMISS_SECS: u64 = 4;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and any startup
    /// tasks.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        tracing::info!(endpoint = %settings.endpoint, "using migration engine");

        let app = Self {
            state: AppState::with_settings(settings),
        };
        (app, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Request editing
            // =================================================================
            Message::FieldChanged(field, value) => {
                self.state.request = self.state.request.set(field, value);
                Task::none()
            }

            Message::PickFileClicked => service::pick_target_spec(),

            Message::FileSelected(Some(file)) => {
                tracing::info!(file = %file.file_name, "target spec attached");
                self.state.request = self.state.request.attach(file);
                Task::none()
            }

            // Dialog cancelled; keep whatever was attached before.
            Message::FileSelected(None) => Task::none(),

            // =================================================================
            // Submission lifecycle
            // =================================================================
            Message::SubmitPressed => self.handle_submit(),

            Message::SubmitFinished(outcome) => {
                let note = self.state.workflow.finish(outcome);
                self.state.toast = Some(note.into());
                Task::none()
            }

            // =================================================================
            // Toast notifications
            // =================================================================
            Message::ToastDismissed => {
                self.state.toast = None;
                Task::none()
            }
        }
    }

    /// Start a submission attempt.
    ///
    /// On a valid draft the info toast is shown immediately — before the
    /// network call resolves — and the request goes out as a background
    /// task. A rejected draft surfaces the validation message and issues
    /// no network call.
    fn handle_submit(&mut self) -> Task<Message> {
        match self.state.workflow.begin(&self.state.request) {
            Ok(note) => {
                self.state.toast = Some(note.into());
                match MigrationClient::new(self.state.settings.endpoint.clone()) {
                    Ok(client) => {
                        service::submit_migration(client, self.state.request.clone())
                    }
                    // Client construction failures resolve the attempt
                    // through the normal failure path.
                    Err(err) => Task::done(Message::SubmitFinished(Err(err))),
                }
            }
            Err(err) => {
                self.state.toast = Some(Notification::error(err.to_string()).into());
                Task::none()
            }
        }
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        let mut page = column![view_form(&self.state)].spacing(SPACING_LG);

        // No result yet means no results panel at all.
        if let Some(result) = self.state.workflow.result() {
            page = page.push(view_results(result));
        }

        let content = scrollable(container(page).padding(SPACING_LG))
            .width(Length::Fill)
            .height(Length::Fill);

        // If there's a toast, stack it over the content at bottom-right.
        if let Some(toast) = &self.state.toast {
            let toast_row = row![
                Space::new().width(Length::Fill),
                container(view_toast(toast)).padding([0.0, SPACING_LG]),
            ];
            let toast_overlay = column![
                Space::new().height(Length::Fill),
                toast_row,
                Space::new().height(SPACING_MD),
            ];

            return stack![
                container(content)
                    .width(Length::Fill)
                    .height(Length::Fill),
                toast_overlay,
            ]
            .into();
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        "Vault Migration Studio".to_string()
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::time;
        use std::time::Duration;

        // Toast auto-dismiss timer.
        if self.state.toast.is_some() {
            time::every(Duration::from_secs(TOAST_DISMISS_SECS)).map(|_| Message::ToastDismissed)
        } else {
            Subscription::none()
        }
    }
}
