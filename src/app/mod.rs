pub mod actions;
pub mod panels;
pub mod view;

use std::path::PathBuf;

use eframe::{egui, App, Frame};

use crate::{
    dialogs::NativeDialogs,
    image_utils::Settings,
    resources::Translations,
    ui::KeyboardState,
};

use self::{
    actions::{
        report, shortcut_action, shortcut_window_action, MainViewActionHandler,
        MainWindowActionHandler,
    },
    view::MainView,
};

/// Top-level window: lays out the main view above a status bar and owns the window lifecycle.
pub struct ImageResizerApp {
    pub view: MainView,
    pub view_handler: MainViewActionHandler<NativeDialogs>,
    pub window_handler: MainWindowActionHandler,
}

impl ImageResizerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        lang: &'static Translations,
        settings: Settings,
        initial_file: Option<PathBuf>,
    ) -> Self {
        let mut view = MainView::new(lang, settings);
        if let Some(path) = initial_file {
            let result = view.open_image_at(&path);
            report(&mut view, result);
        }
        Self {
            view,
            view_handler: MainViewActionHandler::new(NativeDialogs),
            window_handler: MainWindowActionHandler,
        }
    }
}

impl App for ImageResizerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        let _ = frame;

        let keys = KeyboardState::read(ctx);
        if let Some(window_action) = shortcut_window_action(&keys) {
            self.window_handler.handle(ctx, window_action);
            return;
        }

        let mut action = shortcut_action(&keys);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(egui::RichText::new(self.view.status.as_str()).monospace());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(clicked) = self.view.show(ui) {
                action = Some(clicked);
            }
        });

        if let Some(action) = action {
            self.view_handler.handle(&mut self.view, action);
            ctx.request_repaint();
        }
    }
}
