//! Seam between the actions and the running window manager.
#[cfg(test)]
mod mock_window_manager;
mod msg_client;

use crate::command::CommandBatch;
use crate::errors::Result;
use crate::models::{Output, Tree, WindowEvent, Workspace};
use std::time::Duration;

#[cfg(test)]
pub use self::mock_window_manager::{MockState, MockWindowManager};
pub use msg_client::{Flavor, MsgClient, MsgEvents};

/// Snapshot queries and command execution against the window manager.
///
/// Every query fetches a fresh snapshot; nothing is cached between calls.
#[allow(async_fn_in_trait)]
pub trait WindowManager {
    type Events: EventStream;

    async fn get_tree(&self) -> Result<Tree>;

    async fn get_outputs(&self) -> Result<Vec<Output>>;

    async fn get_workspaces(&self) -> Result<Vec<Workspace>>;

    async fn get_marks(&self) -> Result<Vec<String>>;

    /// Runs the batch in a single request. Empty batches are not sent.
    async fn execute(&self, commands: impl Into<CommandBatch>) -> Result<()>;

    async fn subscribe_window_events(&self) -> Result<Self::Events>;
}

#[allow(async_fn_in_trait)]
pub trait EventStream {
    /// Next window event, or `None` once `timeout` has passed without one.
    async fn wait_for_event(&mut self, timeout: Duration) -> Result<Option<WindowEvent>>;
}
