use client_core::RegistrationController;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::FormField;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::submit_form, reducer::apply_ui_event};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub endpoint: String,
}

pub struct SignupApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: RegistrationController,
    backend_status: String,
    endpoint: String,
}

impl SignupApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            controller: RegistrationController::new(),
            backend_status: "Backend worker not started".to_string(),
            endpoint: startup.endpoint,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.controller, &mut self.backend_status, event);
        }
    }

    fn field_row(&mut self, ui: &mut egui::Ui, field: FormField) -> egui::Response {
        ui.label(egui::RichText::new(field.label()).strong());

        let masked = field
            .secret()
            .is_some_and(|secret| !self.controller.visibility().is_visible(secret));
        let mut buf = self.controller.form().edit_buffer(field);

        let response = ui
            .horizontal(|ui| {
                let toggle_width = if field.secret().is_some() { 72.0 } else { 0.0 };
                let edit = egui::TextEdit::singleline(&mut *buf)
                    .id_salt(field)
                    .password(masked)
                    .hint_text(
                        egui::RichText::new(field.placeholder())
                            .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
                    );
                let response =
                    ui.add_sized([ui.available_width() - toggle_width, 34.0], edit);

                if let Some(secret) = field.secret() {
                    let visible = self.controller.visibility().is_visible(secret);
                    let (text, hover) = visibility_toggle_text(visible);
                    if ui
                        .add_sized([64.0, 34.0], egui::Button::new(text))
                        .on_hover_text(hover)
                        .clicked()
                    {
                        self.controller.toggle_visibility(secret);
                    }
                }
                response
            })
            .inner;

        if let Some(hint) = field.format_hint(&buf) {
            ui.small(egui::RichText::new(hint).color(ui.visuals().warn_fg_color));
        }

        if response.changed() {
            self.controller.set_field(field, buf.as_str());
        }
        response
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.controller.notice() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(notice.notice());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.dismiss_notice();
        }
    }

    fn show_signup_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let card_width = avail.x.clamp(360.0, 480.0);
            ui.add_space((avail.y * 0.08).clamp(12.0, 60.0));

            ui.vertical_centered(|ui| {
                ui.set_width(card_width);

                egui::Frame::NONE
                    .fill(ui.visuals().faint_bg_color)
                    .corner_radius(14.0)
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.noninteractive.bg_stroke.color,
                    ))
                    .inner_margin(egui::Margin::symmetric(20, 18))
                    .show(ui, |ui| {
                        ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 8.0);
                        ui.vertical_centered(|ui| ui.heading("Sign up"));
                        ui.add_space(8.0);

                        let mut submit_via_enter = false;
                        for field in FormField::ALL {
                            let response = self.field_row(ui, field);
                            let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                            if response.lost_focus() && enter_pressed {
                                submit_via_enter = true;
                            }
                            ui.add_space(4.0);
                        }

                        ui.add_space(6.0);
                        let busy = self.controller.is_submitting();
                        let label = if busy { "Registering..." } else { "Register" };
                        let button =
                            egui::Button::new(egui::RichText::new(label).strong().size(16.0))
                                .min_size(egui::vec2(ui.available_width(), 40.0));
                        let clicked = ui.add_enabled(!busy, button).clicked();
                        if clicked || (submit_via_enter && !busy) {
                            submit_form(
                                &mut self.controller,
                                &self.cmd_tx,
                                &mut self.backend_status,
                            );
                        }

                        if let Some(message) = self
                            .controller
                            .status_message()
                            .filter(|message| !message.is_empty())
                        {
                            ui.add_space(6.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    egui::RichText::new(message)
                                        .size(16.0)
                                        .color(ui.visuals().error_fg_color),
                                );
                            });
                        }

                        ui.add_space(8.0);
                        ui.separator();
                        ui.horizontal_wrapped(|ui| {
                            ui.small("Endpoint:");
                            ui.small(egui::RichText::new(&self.endpoint).weak());
                        });
                        ui.horizontal_wrapped(|ui| {
                            ui.small("Status:");
                            ui.small(egui::RichText::new(&self.backend_status).weak());
                        });
                    });
            });
        });
    }
}

/// Button text and tooltip for a masked field's toggle.
fn visibility_toggle_text(visible: bool) -> (&'static str, &'static str) {
    if visible {
        ("Hide", "Mask this field")
    } else {
        ("Show", "Show this field in plain text")
    }
}

impl eframe::App for SignupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_signup_screen(ctx);
        self.show_notice(ctx);

        if self.controller.is_submitting() {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
