use egui::{Button, Color32, Context, Frame, Id, Margin, Modal, Ui, Visuals};

use crate::DialogHostOptions;

/// What the user did with a dialog this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DialogAction {
    None,
    Confirm,
    Cancel,
}

/// The parts every dialog shares: title, buttons and colors.
#[derive(Clone, Debug)]
pub(crate) struct Chrome {
    pub accent_color: Option<Color32>,
    pub title: Option<String>,
    pub ok_text: String,
    pub cancel_text: String,

    /// `None` follows the app's theme.
    pub theme_dark: Option<bool>,
}

impl Chrome {
    pub fn new(options: &DialogHostOptions) -> Self {
        Self {
            accent_color: None,
            title: None,
            ok_text: options.default_ok_text.clone(),
            cancel_text: options.default_cancel_text.clone(),
            theme_dark: None,
        }
    }

    fn visuals(&self) -> Option<Visuals> {
        self.theme_dark
            .map(|dark| if dark { Visuals::dark() } else { Visuals::light() })
    }

    /// Show `content` in a modal between the title and the buttons.
    ///
    /// `content` returns whether the current selection may be confirmed.
    /// Pressing escape or clicking outside the dialog cancels it.
    pub fn show(
        &self,
        ctx: &Context,
        id: Id,
        content: impl FnOnce(&mut Ui) -> bool,
    ) -> DialogAction {
        let visuals = self.visuals();

        let mut modal = Modal::new(id);
        if let Some(visuals) = &visuals {
            modal = modal.frame(
                Frame::new()
                    .fill(visuals.window_fill)
                    .stroke(visuals.window_stroke)
                    .corner_radius(visuals.window_corner_radius)
                    .inner_margin(Margin::same(12)),
            );
        }

        let response = modal.show(ctx, |ui| {
            if let Some(visuals) = visuals {
                ui.style_mut().visuals = visuals;
            }
            if let Some(accent) = self.accent_color {
                ui.visuals_mut().selection.bg_fill = accent;
            }
            ui.set_min_width(220.0);

            if let Some(title) = &self.title {
                ui.heading(title.as_str());
                ui.separator();
            }

            let can_confirm = content(ui);

            ui.separator();
            let mut action = DialogAction::None;
            ui.horizontal(|ui| {
                if ui.button(self.cancel_text.as_str()).clicked() {
                    action = DialogAction::Cancel;
                }
                if ui
                    .add_enabled(can_confirm, Button::new(self.ok_text.as_str()))
                    .clicked()
                {
                    action = DialogAction::Confirm;
                }
            });
            action
        });

        if response.inner == DialogAction::None && response.should_close() {
            DialogAction::Cancel
        } else {
            response.inner
        }
    }
}
