use egui::{RichText, Ui};
use payops_business::{DashboardTab, Route, ThemePreference};

use crate::{pages, state::State, widgets};

pub struct PayopsApp {
    pub state: State,
}

impl PayopsApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Applies the configured theme to the egui context.
    pub fn apply_theme(&self, ctx: &egui::Context) {
        let theme = match self.state.config.theme() {
            ThemePreference::System => egui::ThemePreference::System,
            ThemePreference::Light => egui::ThemePreference::Light,
            ThemePreference::Dark => egui::ThemePreference::Dark,
        };
        ctx.set_theme(theme);
    }
}

impl eframe::App for PayopsApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = &mut self.state;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                top_bar(state, ui);
            });
        });

        if state.route == Route::Dashboard {
            egui::SidePanel::left("dashboard_sidebar")
                .resizable(false)
                .default_width(220.0)
                .show(ctx, |ui| {
                    sidebar(state, ui);
                });
        }

        let route = state.route;
        egui::CentralPanel::default().show(ctx, |ui| match route {
            Route::Dashboard => {
                pages::dashboard_page(state, ui);
            }
            Route::NotFound => {
                pages::not_found_page(state, ui);
            }
            route => {
                pages::auth_page(state, ui, route);
            }
        });

        widgets::transfer_details(ctx, &mut state.selected_transfer);
    }
}

fn top_bar(state: &mut State, ui: &mut Ui) {
    if ui.button(RichText::new("PayOps").strong()).clicked() {
        state.navigate(Route::Dashboard);
    }
    ui.separator();
    ui.label(RichText::new(state.route.title()).weak());

    ui.menu_button("Account", |ui| {
        for route in Route::AUTH {
            if ui.button(route.title()).clicked() {
                state.navigate(route);
                ui.close();
            }
        }
    });
}

fn sidebar(state: &mut State, ui: &mut Ui) {
    ui.add_space(8.0);
    for tab in DashboardTab::ALL {
        if ui
            .selectable_label(state.active_tab == tab, tab.label())
            .clicked()
        {
            state.active_tab = tab;
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.add_space(12.0);
        let phone = state.config.support_phone().map(str::to_owned);
        if let Some(action) = widgets::support_center(ui, phone.as_deref(), state.show_support_phone)
        {
            state.apply_support_action(action);
        }
    });
}
