//! Main event loop.
//!
//! The loop sleeps until either a terminal event arrives or the controller's
//! snapshot changes, and repaints only when something visible did.

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use log::{debug, info};
use typeahead::SearchController;

use crate::error::AppError;
use crate::input::{Action, handle_key};
use crate::terminal::TerminalGuard;

pub struct App {
    controller: SearchController,
}

impl App {
    pub fn new(controller: SearchController) -> Self {
        Self { controller }
    }

    pub async fn run(self) -> Result<(), AppError> {
        let mut changes = self.controller.subscribe();

        let mut terminal = TerminalGuard::new()?;
        let mut events = EventStream::new();

        terminal.draw(&self.controller.view())?;
        info!("Event loop started");

        loop {
            let mut redraw = false;

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) => {
                        match handle_key(key, &self.controller.query()) {
                            Action::Edit(text) => self.controller.on_query_change(text),
                            Action::Quit => {
                                info!("Quit requested");
                                break;
                            }
                            Action::Ignore => {}
                        }
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        debug!("Terminal resized to {}x{}", width, height);
                        redraw = true;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        info!("Event stream closed");
                        break;
                    }
                },
                Ok(()) = changes.changed() => {
                    changes.mark_unchanged();
                    redraw = true;
                }
            }

            if redraw {
                terminal.draw(&self.controller.view())?;
            }
        }

        Ok(())
    }
}
