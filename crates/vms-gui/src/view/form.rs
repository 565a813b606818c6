//! Migration request form.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use vms_model::{ACCEPTED_EXTENSIONS, RequestField};

use crate::component::text_field::TextField;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{BORDER_RADIUS_SM, SPACING_MD, SPACING_SM, SPACING_XS};
use crate::view::results::subjects_hint;

/// Render the request form.
pub fn view_form(state: &AppState) -> Element<'_, Message> {
    let request = &state.request;

    let study_id = TextField::new("Study ID", &request.study_id, "", |value| {
        Message::FieldChanged(RequestField::StudyId, value)
    })
    .required(true)
    .view();

    let site_id = TextField::new("Site ID", &request.site_id, "", |value| {
        Message::FieldChanged(RequestField::SiteId, value)
    })
    .required(true)
    .view();

    let site_country = TextField::new("Site Country", &request.site_country, "", |value| {
        Message::FieldChanged(RequestField::SiteCountry, value)
    })
    .required(true)
    .view();

    let subjects = TextField::new(
        "Subjects mapping (old:new, comma separated)",
        &request.subjects,
        "Example: SCR-0001:SCR-0053, SCR-0002:SCR-0054",
        |value| Message::FieldChanged(RequestField::Subjects, value),
    )
    .required(true)
    .helper(subjects_hint(&request.subjects))
    .view();

    // File picker row: chosen name or a hint listing accepted extensions.
    let file_label: Element<'_, Message> = match &request.target_spec {
        Some(spec) => row![
            lucide::circle_check().size(14),
            Space::new().width(SPACING_XS),
            text(&spec.file_name).size(13),
        ]
        .align_y(Alignment::Center)
        .into(),
        None => text(format!(
            "No file selected ({})",
            ACCEPTED_EXTENSIONS.join(", ")
        ))
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        })
        .into(),
    };

    let file_row = column![
        text("Upload Target Design Spec *").size(12),
        Space::new().height(SPACING_XS),
        row![
            button(text("Choose file...").size(13))
                .on_press(Message::PickFileClicked)
                .padding([SPACING_XS, SPACING_SM]),
            Space::new().width(SPACING_SM),
            file_label,
        ]
        .align_y(Alignment::Center),
    ];

    // The trigger is disabled while a request is in flight, so at most
    // one submission can be outstanding.
    let submit = button(text("Submit").size(14))
        .on_press_maybe(state.workflow.can_submit().then_some(Message::SubmitPressed))
        .padding([SPACING_SM, SPACING_MD]);

    let content = column![
        text("Vault Data Migration").size(20),
        row![study_id, Space::new().width(SPACING_MD), site_id],
        site_country,
        subjects,
        file_row,
        container(submit).width(Length::Fill).align_x(Alignment::Center),
    ]
    .spacing(SPACING_MD);

    container(content)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                border: iced::Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
