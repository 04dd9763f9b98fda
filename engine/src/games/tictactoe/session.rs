use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::games::{Broadcaster, SessionRng, StateSubscription};
use crate::log;
use super::bot_controller::select_move;
use super::game_state::GameState;
use super::settings::TicTacToeSessionSettings;
use super::types::Difficulty;

enum SessionCommand {
    MakeMove { index: usize },
    SetDifficulty { difficulty: Difficulty },
    Reset,
    Subscribe { reply: oneshot::Sender<StateSubscription> },
    Snapshot { reply: oneshot::Sender<GameState> },
    /// Posted by the bot timer. `epoch` is the reset count when it was armed.
    BotTurn { epoch: u64 },
    Shutdown,
}

/// Cloneable front door to a running session. Dropping every handle stops the
/// session task.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionHandle {
    fn send(&self, command: SessionCommand) -> Result<(), String> {
        self.command_tx
            .send(command)
            .map_err(|_| "Game session has stopped".to_string())
    }

    /// Places the human's `X`. Occupied cells, finished games and moves made
    /// while the bot is thinking are ignored.
    pub fn make_move(&self, index: usize) -> Result<(), String> {
        self.send(SessionCommand::MakeMove { index })
    }

    pub fn set_difficulty(&self, difficulty: Difficulty) -> Result<(), String> {
        self.send(SessionCommand::SetDifficulty { difficulty })
    }

    pub fn reset(&self) -> Result<(), String> {
        self.send(SessionCommand::Reset)
    }

    pub async fn subscribe(&self) -> Result<StateSubscription, String> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::Subscribe { reply })?;
        response
            .await
            .map_err(|_| "Game session has stopped".to_string())
    }

    pub async fn snapshot(&self) -> Result<GameState, String> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::Snapshot { reply })?;
        response
            .await
            .map_err(|_| "Game session has stopped".to_string())
    }

    pub fn shutdown(&self) -> Result<(), String> {
        self.send(SessionCommand::Shutdown)
    }
}

/// Sole owner of the live `GameState`. Every command is handled on one task,
/// one at a time, and each accepted change replaces the state wholesale and is
/// published to all subscribers.
pub struct TicTacToeSession {
    state: GameState,
    settings: TicTacToeSessionSettings,
    rng: SessionRng,
    broadcaster: Broadcaster,
    epoch: u64,
    pending_bot_turn: Option<JoinHandle<()>>,
    command_tx: mpsc::WeakUnboundedSender<SessionCommand>,
}

impl TicTacToeSession {
    /// Starts the session task on the current Tokio runtime.
    pub fn spawn(settings: TicTacToeSessionSettings, rng: SessionRng) -> SessionHandle {
        Self::spawn_from_state(GameState::new(settings.difficulty), settings, rng)
    }

    fn spawn_from_state(
        state: GameState,
        settings: TicTacToeSessionSettings,
        rng: SessionRng,
    ) -> SessionHandle {
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        log!(
            "Starting session: difficulty {}, bot delay {} ms, seed {}",
            state.difficulty,
            settings.bot_delay.as_millis(),
            rng.seed()
        );

        let session = Self {
            state,
            settings,
            rng,
            broadcaster: Broadcaster::new(),
            epoch: 0,
            pending_bot_turn: None,
            command_tx: command_tx.downgrade(),
        };
        tokio::spawn(session.run(command_rx));

        SessionHandle { command_tx }
    }

    async fn run(mut self, mut command_rx: mpsc::UnboundedReceiver<SessionCommand>) {
        while let Some(command) = command_rx.recv().await {
            match command {
                SessionCommand::MakeMove { index } => self.handle_make_move(index),
                SessionCommand::SetDifficulty { difficulty } => {
                    self.handle_set_difficulty(difficulty)
                }
                SessionCommand::Reset => self.handle_reset(),
                SessionCommand::Subscribe { reply } => {
                    let subscription = self.broadcaster.subscribe(self.state);
                    let _ = reply.send(subscription);
                }
                SessionCommand::Snapshot { reply } => {
                    let _ = reply.send(self.state);
                }
                SessionCommand::BotTurn { epoch } => self.handle_bot_turn(epoch),
                SessionCommand::Shutdown => break,
            }
        }

        self.cancel_bot_turn();
        log!("Session stopped");
    }

    fn publish(&mut self, state: GameState) {
        self.state = state;
        self.broadcaster.broadcast_state(state);
    }

    fn handle_make_move(&mut self, index: usize) {
        let Some(next) = self.state.apply_human_move(index) else {
            log!(
                "Ignoring move at {}: cell taken, out of range, game over or not X's turn",
                index
            );
            return;
        };

        log!("X placed at {} -> {}", index, next.outcome);
        self.publish(next);

        if next.needs_bot_move() {
            self.schedule_bot_turn();
        }
    }

    fn schedule_bot_turn(&mut self) {
        let epoch = self.epoch;
        let delay = self.settings.bot_delay;
        let command_tx = self.command_tx.clone();

        self.cancel_bot_turn();
        self.pending_bot_turn = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(command_tx) = command_tx.upgrade() {
                let _ = command_tx.send(SessionCommand::BotTurn { epoch });
            }
        }));
    }

    fn cancel_bot_turn(&mut self) {
        if let Some(pending) = self.pending_bot_turn.take() {
            pending.abort();
        }
    }

    fn handle_bot_turn(&mut self, epoch: u64) {
        // A reset while the timer was running makes this turn stale.
        if epoch != self.epoch {
            log!("Dropping bot turn from epoch {} (now {})", epoch, self.epoch);
            return;
        }
        self.pending_bot_turn = None;
        if !self.state.needs_bot_move() {
            return;
        }

        let difficulty = self.state.difficulty;
        let Some(index) = select_move(&self.state.board, difficulty, &mut self.rng) else {
            log!("Bot found no move on board {:?}", self.state.board);
            return;
        };

        match self.state.apply_bot_move(index) {
            Some(next) => {
                log!("O ({}) placed at {} -> {}", difficulty, index, next.outcome);
                self.publish(next);
            }
            None => log!("Bot picked unplayable cell {}", index),
        }
    }

    fn handle_set_difficulty(&mut self, difficulty: Difficulty) {
        log!("Difficulty set to {}", difficulty);
        let next = self.state.with_difficulty(difficulty);
        self.publish(next);
    }

    fn handle_reset(&mut self) {
        self.cancel_bot_turn();
        self.epoch += 1;
        log!("Reset (epoch {}), keeping difficulty {}", self.epoch, self.state.difficulty);
        let next = self.state.reset();
        self.publish(next);
    }
}
