//! The edit session and its serialized command queue
//!
//! A session owns a working copy of the caller's label grid and a single
//! dedicated worker thread. Callers (UI event callbacks, typically) only
//! enqueue [`EditCommand`]s; the worker is the sole mutator of the grid and
//! executes commands strictly one at a time, so merges and morphological
//! passes never interleave.
//!
//! Readers never observe a partially applied edit: the session publishes a
//! snapshot of the grid only after a command has fully completed, and
//! [`Session::current_grid`] hands out that published snapshot (a cheap
//! Arc-clone thanks to the `LabelGrid` sharing model).
//!
//! Closing the session drains pending commands to completion - every
//! command whose submission was acknowledged is reflected in the grid
//! returned by [`Session::close`] - and refuses submissions thereafter.

use crate::command::EditCommand;
use crate::error::{SessionError, SessionResult};
use labeledit_core::LabelGrid;
use labeledit_morph as morph;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// One queued unit of work: the command plus its completion signal.
struct Job {
    command: EditCommand,
    done: mpsc::Sender<SessionResult<()>>,
}

/// Completion handle for one submitted command.
///
/// Waiting is optional; the command executes regardless. Redisplay code
/// must wait before reading the grid it expects the command to have
/// produced.
#[must_use = "a ticket is the only way to observe a command's outcome"]
pub struct Ticket {
    done: mpsc::Receiver<SessionResult<()>>,
}

impl Ticket {
    /// Block until the command has executed, returning its outcome.
    pub fn wait(self) -> SessionResult<()> {
        self.done.recv().map_err(|_| SessionError::WorkerFailed)?
    }
}

/// An interactive edit session over one label grid
///
/// # Examples
///
/// ```
/// use labeledit_core::LabelGrid;
/// use labeledit_morph::{Strel, StrelShape};
/// use labeledit_session::{EditCommand, Session};
///
/// let source = LabelGrid::from_rows(&[&[1, 0, 0], &[0, 0, 0], &[0, 0, 2]]).unwrap();
/// let mut session = Session::open(source);
///
/// let strel = Strel::from_radius(StrelShape::Square, 1).unwrap();
/// session.submit(EditCommand::Dilate(strel)).unwrap().wait().unwrap();
///
/// let edited = session.close().unwrap();
/// assert_eq!(edited.labels(), vec![1, 2]);
/// ```
pub struct Session {
    /// Producer side of the queue; `None` once closed
    jobs: Option<mpsc::Sender<Job>>,
    /// Snapshot published after each completed command
    published: Arc<Mutex<LabelGrid>>,
    /// The single worker; returns the final grid when the queue closes
    worker: Option<JoinHandle<LabelGrid>>,
}

impl Session {
    /// Open a session over a working copy of `source`.
    ///
    /// The source is snapshotted; later edits never affect the caller's
    /// grid. Input validation (rejecting non-label data) happens when the
    /// caller constructs the `LabelGrid`, so the session only ever sees
    /// well-formed grids.
    pub fn open(source: LabelGrid) -> Self {
        let published = Arc::new(Mutex::new(source.clone()));
        let slot = Arc::clone(&published);
        let (jobs, queue) = mpsc::channel::<Job>();

        let worker = thread::spawn(move || {
            let mut grid = source;
            // Runs until every sender is gone, draining whatever is queued.
            while let Ok(job) = queue.recv() {
                let outcome = execute(&mut grid, job.command);
                if outcome.is_ok() {
                    let mut current = match slot.lock() {
                        Ok(guard) => guard,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                    *current = grid.clone();
                }
                // The submitter may have dropped its ticket; that is fine.
                let _ = job.done.send(outcome);
            }
            grid
        });

        Session {
            jobs: Some(jobs),
            published,
            worker: Some(worker),
        }
    }

    /// Enqueue an edit command.
    ///
    /// May be called from any thread. Commands execute strictly in
    /// submission order, one at a time.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::QueueClosed`] once the session has been
    /// closed; the command is discarded.
    pub fn submit(&self, command: EditCommand) -> SessionResult<Ticket> {
        let Some(jobs) = self.jobs.as_ref() else {
            return Err(SessionError::QueueClosed);
        };
        let (done, ticket) = mpsc::channel();
        jobs.send(Job { command, done })
            .map_err(|_| SessionError::QueueClosed)?;
        Ok(Ticket { done: ticket })
    }

    /// Get a read-only snapshot of the grid for redisplay.
    ///
    /// The snapshot reflects the most recently *completed* command; an
    /// in-flight command's partial mutations are never visible. To observe
    /// a specific command's result, wait on its [`Ticket`] first.
    pub fn current_grid(&self) -> LabelGrid {
        match self.published.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Check whether the session still accepts commands.
    pub fn is_open(&self) -> bool {
        self.jobs.is_some()
    }

    /// Close the session and return the final grid.
    ///
    /// Pending commands are drained to completion before the worker exits;
    /// the returned grid reflects every command whose submission was
    /// acknowledged. Subsequent [`Session::submit`] and `close` calls
    /// return [`SessionError::QueueClosed`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::QueueClosed`] if the session was already
    /// closed, or [`SessionError::WorkerFailed`] if the worker panicked.
    pub fn close(&mut self) -> SessionResult<LabelGrid> {
        let Some(jobs) = self.jobs.take() else {
            return Err(SessionError::QueueClosed);
        };
        drop(jobs); // ends the worker's receive loop after the drain

        let worker = self.worker.take().ok_or(SessionError::WorkerFailed)?;
        let grid = worker.join().map_err(|_| SessionError::WorkerFailed)?;

        // Keep current_grid consistent with the returned final grid.
        let mut current = match self.published.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *current = grid.clone();
        Ok(grid)
    }
}

/// Execute one command against the working grid.
fn execute(grid: &mut LabelGrid, command: EditCommand) -> SessionResult<()> {
    match command {
        EditCommand::Merge { target, sources } => {
            let mut working = grid.to_mut();
            morph::merge(&mut working, target, &sources)?;
            *grid = working.into();
        }
        EditCommand::Dilate(strel) => {
            *grid = morph::dilate(grid, &strel);
        }
        EditCommand::Erode(strel) => {
            *grid = morph::erode(grid, &strel);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_publishes_source() {
        let source = LabelGrid::from_rows(&[&[1, 0], &[0, 2]]).unwrap();
        let mut session = Session::open(source.clone());
        assert!(session.is_open());
        assert!(session.current_grid().same_content(&source));
        session.close().unwrap();
    }

    #[test]
    fn test_close_twice_reports_queue_closed() {
        let source = LabelGrid::new(2, 2, 1).unwrap();
        let mut session = Session::open(source);
        session.close().unwrap();
        assert!(!session.is_open());
        assert!(matches!(session.close(), Err(SessionError::QueueClosed)));
    }

    #[test]
    fn test_failed_command_leaves_grid_unchanged() {
        let source = LabelGrid::from_rows(&[&[1, 2]]).unwrap();
        let mut session = Session::open(source.clone());
        let bad = EditCommand::Merge {
            target: 0,
            sources: [1u32].into_iter().collect(),
        };
        let outcome = session.submit(bad).unwrap().wait();
        assert!(matches!(outcome, Err(SessionError::Morph(_))));
        assert!(session.current_grid().same_content(&source));
        session.close().unwrap();
    }
}
