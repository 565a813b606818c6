//! Labeled text input component.
//!
//! Builder-style text field with a label, optional required marker,
//! placeholder, and helper line.

use iced::widget::{Space, column, row, text, text_input};
use iced::{Element, Length, Theme};

/// A text input field with label and optional helper text.
///
/// # Example
/// ```ignore
/// TextField::new("Study ID", &value, "", |s| Message::FieldChanged(RequestField::StudyId, s))
///     .required(true)
///     .view()
/// ```
pub struct TextField<M> {
    label: String,
    value: String,
    placeholder: String,
    on_change: Box<dyn Fn(String) -> M>,
    required: bool,
    helper: Option<String>,
}

impl<M: Clone + 'static> TextField<M> {
    /// Create a new text field.
    pub fn new(
        label: impl Into<String>,
        value: &str,
        placeholder: impl Into<String>,
        on_change: impl Fn(String) -> M + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            placeholder: placeholder.into(),
            on_change: Box::new(on_change),
            required: false,
            helper: None,
        }
    }

    /// Mark field as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set a helper line shown under the input.
    pub fn helper(mut self, helper: Option<impl Into<String>>) -> Self {
        self.helper = helper.map(Into::into);
        self
    }

    /// Build the text field element.
    pub fn view(self) -> Element<'static, M> {
        let label_text = if self.required {
            format!("{} *", self.label)
        } else {
            self.label
        };

        let helper_el: Element<'static, M> = if let Some(helper) = self.helper {
            text(helper)
                .size(11)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.color),
                })
                .into()
        } else {
            Space::new().height(0.0).into()
        };

        let value = self.value;
        let placeholder = self.placeholder;
        let on_change = self.on_change;

        column![
            row![
                text(label_text).size(12),
                Space::new().width(Length::Fill),
            ],
            Space::new().height(4.0),
            text_input(&placeholder, &value)
                .on_input(on_change)
                .padding([10.0, 12.0])
                .size(14),
            helper_el,
        ]
        .into()
    }
}
