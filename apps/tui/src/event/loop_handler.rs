use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::fmt;
use std::io::Stdout;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::app::{handle_key, handle_mouse, App};
use crate::domain::ChangeBatch;
use crate::ui;
use crate::ui::screens::chart::ChartLayout;

// Define states for the delete request lifecycle
#[derive(Clone, Copy, PartialEq, Debug)]
enum DeleteState {
    Idle,
    Requesting,
    Success,
    Error,
}

impl fmt::Display for DeleteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Requesting => write!(f, "Requesting"),
            Self::Success => write!(f, "Success"),
            Self::Error => write!(f, "Error"),
        }
    }
}

// Define events for the delete request lifecycle
#[derive(Clone, Debug)]
enum DeleteEvent {
    StartRequest(String),
    Acknowledged { id: String, known: bool },
    Failed(String),
    Reset,
}

impl fmt::Display for DeleteEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartRequest(id) => write!(f, "StartRequest({id})"),
            Self::Acknowledged { id, known } => write!(f, "Acknowledged({id}, known={known})"),
            Self::Failed(msg) => write!(f, "Failed({msg})"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

// Custom error type for invalid state transitions
#[derive(Debug)]
struct StateTransitionError {
    from: DeleteState,
    event: DeleteEvent,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

// State machine driving one delete request at a time
struct DeleteMachine {
    state: DeleteState,
}

impl DeleteMachine {
    const fn new(initial_state: DeleteState) -> Self {
        Self {
            state: initial_state,
        }
    }

    const fn state(&self) -> DeleteState {
        self.state
    }

    fn process_event(
        &mut self,
        event: &DeleteEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event, app))?;
        self.state = next_state.0;
        Ok(())
    }
}

struct NextState(DeleteState);

impl NextState {
    const fn new(state: DeleteState) -> Self {
        Self(state)
    }
}

impl DeleteState {
    const fn next_state(self) -> NextState {
        NextState::new(self)
    }
}

impl TryFrom<(DeleteState, &DeleteEvent, &mut App)> for NextState {
    type Error = StateTransitionError;

    fn try_from(
        value: (DeleteState, &DeleteEvent, &mut App),
    ) -> std::result::Result<Self, Self::Error> {
        let (current_state, event, app) = value;

        match (current_state, event) {
            (DeleteState::Idle, DeleteEvent::StartRequest(id)) => {
                app.status_message = format!("Requesting delete of {id}...");
                Ok(DeleteState::Requesting.next_state())
            }
            (DeleteState::Requesting, DeleteEvent::Acknowledged { known, .. }) => {
                app.status_message = if *known {
                    "Delete requested, waiting for the feed".to_string()
                } else {
                    "Record was already gone".to_string()
                };
                Ok(DeleteState::Success.next_state())
            }
            (DeleteState::Requesting, DeleteEvent::Failed(error)) => {
                app.status_message = format!("Error: {error}");
                Ok(DeleteState::Error.next_state())
            }
            (DeleteState::Success | DeleteState::Error, DeleteEvent::Reset) => {
                Ok(DeleteState::Idle.next_state())
            }
            _ => Err(StateTransitionError {
                from: current_state,
                event: event.clone(),
            }),
        }
    }
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.initialize_db().await?;

    if json {
        render_headless_json(app).await?;
    } else {
        render_headless_breakdown(app).await?;
    }

    Ok(())
}

async fn render_headless_breakdown(app: &App) -> Result<()> {
    let stats = build_headless_stats(app).await?;

    println!("\nSpendwheel Ledger");
    println!("=================");
    println!("Records: {}", stats.records);
    println!("Total cost: {:.2}", stats.total_cost);

    println!("\nBreakdown:");
    for entry in stats.entries {
        match entry.share_pct {
            Some(share) => println!("- {} | {} | {:.2} | {share:.1}%", entry.id, entry.name, entry.cost),
            None => println!("- {} | {} | {:.2} | -", entry.id, entry.name, entry.cost),
        }
    }

    Ok(())
}

async fn render_headless_json(app: &App) -> Result<()> {
    let stats = build_headless_stats(app).await?;
    let json = serde_json::to_string_pretty(&stats)?;
    println!("{json}");
    Ok(())
}

async fn build_headless_stats(app: &App) -> Result<LedgerStats> {
    let records = app.actions.count_expenses().await?;
    let total_cost = app.actions.total_cost().await?;
    let expenses = app.actions.load_expenses().await?;

    let entries = expenses
        .into_iter()
        .map(|expense| {
            let share_pct = if total_cost > 0.0 {
                Some(expense.cost.max(0.0) / total_cost * 100.0)
            } else {
                None
            };
            LedgerEntry {
                id: expense.id,
                name: expense.name,
                cost: expense.cost,
                share_pct,
            }
        })
        .collect();

    Ok(LedgerStats {
        records,
        total_cost,
        entries,
    })
}

#[derive(serde::Serialize)]
struct LedgerStats {
    records: i64,
    total_cost: f64,
    entries: Vec<LedgerEntry>,
}

#[derive(serde::Serialize)]
struct LedgerEntry {
    id: String,
    name: String,
    cost: f64,
    share_pct: Option<f64>,
}

/// Run the main application event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    feed: &mut mpsc::Receiver<ChangeBatch>,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut delete_machine = DeleteMachine::new(DeleteState::Idle);

    loop {
        let now = Instant::now();

        // Apply every batch that arrived since the last turn, then advance
        // animations from the resulting truth.
        while let Ok(batch) = feed.try_recv() {
            app.apply_batch(&batch, now);
        }
        app.tick(now);

        // Pointer hit-testing must use the geometry of the frame about to
        // be drawn.
        let size = terminal.size()?;
        app.geometry = ChartLayout::new(Rect::new(0, 0, size.width, size.height)).geometry;

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        // Handle input events
        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_key(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Mouse(mouse)) => {
                    handle_mouse(app, &mouse);
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore other events
                }
            }
        }

        // Issue at most one queued delete request per turn; the removal
        // itself flows back through the change feed.
        if let Some(id) = app.pending_delete.take() {
            if delete_machine.state() == DeleteState::Idle {
                if delete_machine
                    .process_event(&DeleteEvent::StartRequest(id.clone()), app)
                    .is_err()
                {
                    continue;
                }

                match app.actions.delete_expense(&id).await {
                    Ok(known) => {
                        if delete_machine
                            .process_event(&DeleteEvent::Acknowledged { id, known }, app)
                            .is_err()
                        {
                            // Non-fatal state transition error
                        }
                    }
                    Err(e) => {
                        let error_msg = format!("{e}");
                        if delete_machine
                            .process_event(&DeleteEvent::Failed(error_msg), app)
                            .is_err()
                        {
                            // Non-fatal state transition error
                        }
                    }
                }

                // Reset the state machine for the next request
                if delete_machine.process_event(&DeleteEvent::Reset, app).is_err() {
                    // Non-fatal reset error
                }
            }
        }
    }
    Ok(())
}
