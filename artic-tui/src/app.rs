//! The artwork table application and its event loop.

use std::io;
use std::sync::Arc;

use artic_lib::api::CatalogSource;
use artic_lib::api::Page;
use artic_lib::api::UiPage;
use artic_lib::error::Error;
use artic_lib::view::FetchRequest;
use artic_lib::view::PageChangeEvent;
use artic_lib::view::TableView;
use crossterm::event::Event;
use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::keys::{Action, action_for};
use crate::terminal::TerminalGuard;
use crate::ui::{self, Frame};
use crate::widgets::Spinner;

/// A finished fetch on its way back to the UI task.
type FetchOutcome = (FetchRequest, Result<Page, Error>);

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns the table state for the session.
///
/// All state lives on the UI task. Fetches run as spawned tasks and report
/// back over a channel; starting a new fetch cancels the previous one.
pub struct App {
    view: TableView,
    source: Arc<dyn CatalogSource>,
    cursor: usize,
    spinner: Spinner,
    tick: usize,
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    in_flight: Option<CancellationToken>,
}

impl App {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        Self {
            view: TableView::new(),
            source,
            cursor: 0,
            spinner: Spinner::new(),
            tick: 0,
            fetch_tx,
            fetch_rx,
            in_flight: None,
        }
    }

    /// Issues the initial load of the first page.
    pub fn start(&mut self) {
        let request = self.view.mount();
        self.spawn_fetch(request);
    }

    /// Runs until the user quits or the terminal event stream ends.
    pub async fn run(mut self, terminal: &mut TerminalGuard) -> io::Result<()> {
        self.start();

        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(self.spinner.frame_duration());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            self.draw(terminal)?;

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) => {
                        if let Some(action) = action_for(key)
                            && self.handle(action) == Flow::Exit
                        {
                            break;
                        }
                    }
                    // Resizes and everything else just trigger a redraw
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e),
                    None => break,
                },
                Some((request, result)) = self.fetch_rx.recv() => {
                    self.on_fetched(request, result);
                }
                _ = ticker.tick(), if self.view.is_loading() => {
                    self.tick = self.tick.wrapping_add(1);
                }
            }
        }

        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        info!(
            "exiting with {} artworks selected across all pages",
            self.view.total_selected_count()
        );
        Ok(())
    }

    fn draw(&self, terminal: &mut TerminalGuard) -> io::Result<()> {
        let (width, _) = terminal.size()?;
        let frame = Frame {
            cursor: self.cursor,
            spinner: self.spinner.frame(self.tick),
            width,
        };
        terminal.draw(&ui::render(&self.view, frame))
    }

    /// Applies one user action.
    pub fn handle(&mut self, action: Action) -> Flow {
        match action {
            Action::Quit => return Flow::Exit,
            Action::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorDown => {
                if self.cursor + 1 < self.view.records().len() {
                    self.cursor += 1;
                }
            }
            Action::ToggleRow => {
                if let Some(event) = self.view.toggle_row(self.cursor) {
                    self.view.on_selection_change(event);
                }
            }
            Action::TogglePage => {
                let event = self.view.toggle_all();
                self.view.on_selection_change(event);
            }
            Action::NextPage => {
                if let Some(page) = self.view.next_page() {
                    self.go_to(page);
                }
            }
            Action::PrevPage => {
                if let Some(page) = self.view.prev_page() {
                    self.go_to(page);
                }
            }
            Action::FirstPage => self.go_to(UiPage::FIRST),
            Action::LastPage => self.go_to(self.view.last_page()),
        }
        Flow::Continue
    }

    fn go_to(&mut self, page: UiPage) {
        if page == self.view.current_page() && !self.view.is_loading() {
            return;
        }
        let request = self.view.on_page_change(PageChangeEvent { page });
        self.cursor = 0;
        self.spawn_fetch(request);
    }

    fn spawn_fetch(&mut self, request: FetchRequest) {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let source = self.source.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("cancelled fetch for api page {}", request.api_page());
                }
                result = source.fetch_page(request.api_page()) => {
                    let _ = tx.send((request, result));
                }
            }
        });
    }

    /// Applies a finished fetch; stale ones are dropped by the view.
    pub fn on_fetched(&mut self, request: FetchRequest, result: Result<Page, Error>) {
        if self.view.apply_fetch(request, result) {
            self.in_flight = None;
            let rows = self.view.records().len();
            self.cursor = self.cursor.min(rows.saturating_sub(1));
        }
    }
}
