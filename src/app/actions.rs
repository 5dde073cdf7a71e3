use anyhow::Result;
use eframe::egui::{self, ViewportCommand};

use crate::{dialogs::FileDialogs, image_utils::InterpolationMethod, ui::KeyboardState};

use super::view::MainView;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ViewAction {
    OpenImage,
    ResizeImage(InterpolationMethod),
    DownloadResizedImage,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum WindowAction {
    Quit,
}

/// Window-level shortcut for this frame. Quitting wins over every other key.
pub fn shortcut_window_action(keys: &KeyboardState) -> Option<WindowAction> {
    keys.quit.then_some(WindowAction::Quit)
}

/// View shortcut for this frame; `None` while a quit is pending.
pub fn shortcut_action(keys: &KeyboardState) -> Option<ViewAction> {
    if keys.quit {
        None
    } else if keys.open {
        Some(ViewAction::OpenImage)
    } else if keys.download {
        Some(ViewAction::DownloadResizedImage)
    } else {
        None
    }
}

/// Routes panel events to the main view. Owns the dialogs the view prompts with.
pub struct MainViewActionHandler<D: FileDialogs> {
    pub dialogs: D,
}

impl<D: FileDialogs> MainViewActionHandler<D> {
    pub fn new(dialogs: D) -> Self {
        Self { dialogs }
    }

    pub fn handle(&mut self, view: &mut MainView, action: ViewAction) {
        let result = match action {
            ViewAction::OpenImage => view.open_image(&mut self.dialogs),
            ViewAction::ResizeImage(method) => view.resize_image(method),
            ViewAction::DownloadResizedImage => view.save_image(&mut self.dialogs).map(|_| ()),
        };
        report(view, result);
    }
}

/// Surfaces a failed view operation in the status bar and the log.
pub fn report(view: &mut MainView, result: Result<()>) {
    if let Err(err) = result {
        log::error!("{err:#}");
        view.status = format!("{err:#}");
    }
}

pub struct MainWindowActionHandler;

impl MainWindowActionHandler {
    pub fn handle(&self, ctx: &egui::Context, action: WindowAction) {
        match action {
            WindowAction::Quit => ctx.send_viewport_cmd(ViewportCommand::Close),
        }
    }
}
