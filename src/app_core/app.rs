use crate::{
    Settings,
    key_handler::{self, Action},
    player::{ClockTransport, PlaybackController, TransportEvent},
    tui,
    ui_state::UiState,
};
use anyhow::Result;
use crossbeam_channel::{Receiver, unbounded};
use ratatui::crossterm::{
    ExecutableCommand,
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

pub struct Encore {
    pub(crate) settings: Settings,
    pub(crate) controller: PlaybackController<ClockTransport, UiState>,
    events: Receiver<TransportEvent>,
    pub(crate) quit: bool,
}

impl Encore {
    pub fn new(settings: Settings) -> Result<Self> {
        let catalog = Arc::new(settings.catalog()?);
        let (event_tx, event_rx) = unbounded();

        let transport = ClockTransport::new(event_tx, settings.source_profiles());
        let display = UiState::new(Arc::clone(&catalog));
        let controller =
            PlaybackController::new(transport, display, catalog, settings.initial_volume);

        Ok(Encore {
            settings,
            controller,
            events: event_rx,
            quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        std::io::stdout().execute(EnableMouseCapture)?;
        terminal.clear()?;

        info!(
            tracks = self.controller.catalog().len(),
            "encore started"
        );

        let outcome = self.main_loop(&mut terminal);

        let _ = std::io::stdout().execute(DisableMouseCapture);
        ratatui::restore();

        if let Err(e) = &outcome {
            error!("exiting on error: {e:#}");
        }
        outcome
    }

    fn main_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
        // MAIN ROUTINE
        loop {
            self.controller.transport_mut().tick(Instant::now());
            self.pump_transport_events();
            self.controller.display_mut().prune_notifications();

            match key_handler::next_event()? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_handler::handle_key_event(&key) {
                        self.dispatch(action);
                    }
                }
                Some(Event::Mouse(mouse)) => {
                    let action = key_handler::handle_mouse_event(&mouse, self.controller.display());
                    if let Some(action) = action {
                        self.dispatch(action);
                    }
                }
                _ => (),
            }

            terminal.draw(|f| tui::render(f, self.controller.display_mut()))?;

            if self.quit {
                info!("shutting down");
                break;
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, action: Action) {
        if let Err(e) = self.handle_action(action) {
            self.controller.display_mut().set_error(e);
        }
    }

    pub(crate) fn pump_transport_events(&mut self) {
        let events: Vec<TransportEvent> = self.events.try_iter().collect();
        for event in events {
            self.controller.handle_event(event);
        }
    }
}
